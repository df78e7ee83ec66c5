use register_form_shared::messages::user_register::RegistrationErrorBody;
use std::error::Error;
use std::fmt;

pub const MISSING_API_URL_MESSAGE: &str = "API URL not configured in environment variables.";
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred during registration.";

/// Where a registration attempt failed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
	/// No API base address was configured, so nothing was sent
	Config,
	/// The request never produced a response
	Transport,
	/// The server answered with a non-success status
	Server,
}

impl fmt::Display for FailureKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Config => write!(f, "configuration error"),
			Self::Transport => write!(f, "transport error"),
			Self::Server => write!(f, "server error"),
		}
	}
}

/// A failed registration attempt along with the message to show the user
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationFailure {
	kind: FailureKind,
	message: String,
	status: Option<u16>,
}

impl RegistrationFailure {
	pub fn missing_config() -> Self {
		Self {
			kind: FailureKind::Config,
			message: String::from(MISSING_API_URL_MESSAGE),
			status: None,
		}
	}

	pub fn transport(error: impl fmt::Display) -> Self {
		let message = error.to_string();
		let message = if message.is_empty() {
			String::from(FALLBACK_ERROR_MESSAGE)
		} else {
			message
		};
		Self {
			kind: FailureKind::Transport,
			message,
			status: None,
		}
	}

	/// Builds a failure from a non-success response. The server's `message` field is shown verbatim when it has
	/// text; any other body falls back to the generic message.
	pub fn server(status: u16, body: &str) -> Self {
		let message = serde_json::from_str::<RegistrationErrorBody>(body)
			.ok()
			.and_then(RegistrationErrorBody::display_message)
			.unwrap_or_else(|| String::from(FALLBACK_ERROR_MESSAGE));
		Self {
			kind: FailureKind::Server,
			message,
			status: Some(status),
		}
	}

	pub fn kind(&self) -> FailureKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	/// HTTP status of the response, for server failures
	pub fn status(&self) -> Option<u16> {
		self.status
	}
}

impl fmt::Display for RegistrationFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.status {
			Some(status) => write!(f, "{} ({}): {}", self.kind, status, self.message),
			None => write!(f, "{}: {}", self.kind, self.message),
		}
	}
}

impl Error for RegistrationFailure {}
