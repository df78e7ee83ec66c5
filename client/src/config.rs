// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use register_form_shared::messages::user_register::REGISTER_ENDPOINT_PATH;

/// Client configuration handed to the application root and shared with pages through context.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClientConfig {
	base_api_url: Option<String>,
}

impl ClientConfig {
	/// Creates a configuration pointing at the given API base address. A blank address is treated as unset.
	pub fn new(base_api_url: impl Into<String>) -> Self {
		Self::from_value(Some(&base_api_url.into()))
	}

	/// Creates a configuration with no API base address
	pub fn unconfigured() -> Self {
		Self::default()
	}

	/// Reads the `BASE_API_URL` variable captured when the client bundle was built. The browser has no process
	/// environment, so this is the only point at which environment configuration can enter the client.
	pub fn from_build_environment() -> Self {
		match option_env!("BASE_API_URL") {
			Some(base_api_url) => Self::new(base_api_url),
			None => Self::unconfigured(),
		}
	}

	fn from_value(value: Option<&str>) -> Self {
		let base_api_url = value
			.map(str::trim)
			.filter(|url| !url.is_empty())
			.map(String::from);
		Self { base_api_url }
	}

	pub fn base_api_url(&self) -> Option<&str> {
		self.base_api_url.as_deref()
	}

	/// Address registration requests are sent to, if an API base is configured
	pub fn register_endpoint(&self) -> Option<String> {
		let base = self.base_api_url.as_deref()?;
		Some(format!("{}/{}", base.trim_end_matches('/'), REGISTER_ENDPOINT_PATH))
	}
}
