// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{NewUser, RegistrationOutcome};
use crate::config::ClientConfig;
use crate::error::{FailureKind, RegistrationFailure};
use crate::http::RegistrationTransport;
use register_form_shared::messages::user_register::RegistrationRequest;
use serde_json::Value;

/// Sends one registration request and sorts the result into a new user or a displayable failure.
///
/// Nothing is sent when no API base address is configured.
pub async fn submit_registration<T: RegistrationTransport>(
	config: &ClientConfig,
	transport: &T,
	request: &RegistrationRequest,
) -> RegistrationOutcome {
	let Some(url) = config.register_endpoint() else {
		let failure = RegistrationFailure::missing_config();
		log_failure(&failure);
		return Err(failure);
	};

	log::debug!("Sending registration request for {} to {}", request.username, url);
	let response = match transport.post_json(&url, request).await {
		Ok(response) => response,
		Err(error) => {
			let failure = RegistrationFailure::transport(error);
			log_failure(&failure);
			return Err(failure);
		}
	};

	if !response.is_success() {
		let failure = RegistrationFailure::server(response.status, &response.body);
		log_failure(&failure);
		return Err(failure);
	}

	let new_user = new_user_from_body(&response.body);
	log::info!("Registration successful: {}", new_user);
	Ok(new_user)
}

fn log_failure(failure: &RegistrationFailure) {
	match (failure.kind(), failure.status()) {
		(FailureKind::Config, _) => log::warn!("Registration blocked: {}", failure.message()),
		(FailureKind::Server, Some(status)) => {
			log::error!("Registration rejected with status {}: {}", status, failure.message())
		}
		_ => log::error!("Registration error: {}", failure),
	}
}

fn new_user_from_body(body: &str) -> NewUser {
	if body.trim().is_empty() {
		return Value::Null;
	}
	serde_json::from_str(body).unwrap_or_else(|_| Value::String(String::from(body)))
}
