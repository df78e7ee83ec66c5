use gloo_net::http::Request;
use register_form_shared::messages::user_register::RegistrationRequest;
use std::fmt::{self, Display};

/// A response read off the wire, before any interpretation of its status or body
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpResponse {
	pub status: u16,
	pub body: String,
}

impl HttpResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends registration requests to the server.
///
/// Non-success statuses are not errors at this level; they come back as an [`HttpResponse`] so the caller can read
/// the server's explanation out of the body. Errors are reserved for requests that never got a response.
#[allow(async_fn_in_trait)]
pub trait RegistrationTransport {
	type Error: Display;

	async fn post_json(&self, url: &str, request: &RegistrationRequest) -> Result<HttpResponse, Self::Error>;
}

/// Errors from a fetch-backed request
#[derive(Debug)]
pub struct FetchError(gloo_net::Error);

impl From<gloo_net::Error> for FetchError {
	fn from(error: gloo_net::Error) -> Self {
		Self(error)
	}
}

impl Display for FetchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			// A rejected fetch displays as the JS `toString()` ("TypeError: ..."); users get the bare message.
			gloo_net::Error::JsError(error) => write!(f, "{}", preferred_message(&error.message, error)),
			error => write!(f, "{}", error),
		}
	}
}

impl std::error::Error for FetchError {}

/// The error's own message, or its full display text when the message is blank
fn preferred_message(message: &str, full: impl Display) -> String {
	if message.trim().is_empty() {
		full.to_string()
	} else {
		String::from(message)
	}
}

/// Transport backed by the browser's fetch API
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl RegistrationTransport for FetchTransport {
	type Error = FetchError;

	/// Posts the request as JSON.
	///
	/// # Errors
	///
	/// Errors occur when the request body can't be serialized, when the request can't be sent (network failure,
	/// blocked by CORS, etc.), and when the response body can't be read.
	async fn post_json(&self, url: &str, request: &RegistrationRequest) -> Result<HttpResponse, Self::Error> {
		let response = Request::post(url).json(request)?.send().await?;
		let status = response.status();
		let body = response.text().await?;
		Ok(HttpResponse { status, body })
	}
}
