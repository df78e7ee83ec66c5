use serde::{Deserialize, Serialize};
use std::fmt;

/// Path segment appended to the API base address for registration requests
pub const REGISTER_ENDPOINT_PATH: &str = "register";

/// Data from the client when trying to register an account
#[derive(Clone, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationRequest {
	pub username: String,
	pub email: String,
	pub password: String,
}

impl fmt::Debug for RegistrationRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RegistrationRequest")
			.field("username", &self.username)
			.field("email", &self.email)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Error body the server may send back with a failed registration. Every field is optional; servers are free to
/// send an empty body or something else entirely.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RegistrationErrorBody {
	#[serde(default)]
	pub message: Option<ServerMessage>,
}

impl RegistrationErrorBody {
	/// Text to show for the server's message, if it sent one worth showing
	pub fn display_message(self) -> Option<String> {
		self.message.and_then(ServerMessage::into_text)
	}
}

/// A scalar `message` value. Servers don't always send strings here.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServerMessage {
	Text(String),
	Integer(i64),
	Float(f64),
	Flag(bool),
}

impl ServerMessage {
	/// Renders the value as display text. Empty strings, zero and `false` carry no message.
	pub fn into_text(self) -> Option<String> {
		match self {
			Self::Text(text) if !text.is_empty() => Some(text),
			Self::Integer(number) if number != 0 => Some(number.to_string()),
			Self::Float(number) if number != 0.0 && !number.is_nan() => Some(number.to_string()),
			Self::Flag(true) => Some(String::from("true")),
			_ => None,
		}
	}
}
