// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::RegistrationOutcome;
use register_form_shared::messages::user_register::RegistrationRequest;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FormField {
	Username,
	Email,
	Password,
}

impl FormField {
	/// The input name used for this field in the form
	pub fn name(&self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Email => "email",
			Self::Password => "password",
		}
	}
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownFieldError(String);

impl fmt::Display for UnknownFieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "the registration form has no field named {:?}", self.0)
	}
}

impl Error for UnknownFieldError {}

impl FromStr for FormField {
	type Err = UnknownFieldError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name {
			"username" => Ok(Self::Username),
			"email" => Ok(Self::Email),
			"password" => Ok(Self::Password),
			_ => Err(UnknownFieldError(String::from(name))),
		}
	}
}

/// Everything the registration page renders: the entered values and where the current request is in its lifecycle.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationForm {
	fields: RegistrationRequest,
	is_loading: bool,
	error: Option<String>,
	success: bool,
}

impl RegistrationForm {
	#[cfg(test)]
	pub fn fields(&self) -> &RegistrationRequest {
		&self.fields
	}

	pub fn is_loading(&self) -> bool {
		self.is_loading
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn success(&self) -> bool {
		self.success
	}

	/// Replaces the value of one field, leaving the others alone
	pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
		let value = value.into();
		match field {
			FormField::Username => self.fields.username = value,
			FormField::Email => self.fields.email = value,
			FormField::Password => self.fields.password = value,
		}
	}

	/// Replaces the value of the field with the given input name
	pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownFieldError> {
		let field: FormField = name.parse()?;
		self.set_field(field, value);
		Ok(())
	}

	/// The inputs and the submit button are locked while a request is out and once registration has succeeded.
	pub fn inputs_disabled(&self) -> bool {
		self.is_loading || self.success
	}

	pub fn login_switch_disabled(&self) -> bool {
		self.is_loading
	}

	pub fn submit_label(&self) -> &'static str {
		if self.is_loading {
			"Registering..."
		} else {
			"Register"
		}
	}

	/// Starts a submission attempt, returning the request to send.
	///
	/// Returns `None` without changing anything when a request is already in flight or registration already
	/// succeeded.
	pub fn begin_submission(&mut self) -> Option<RegistrationRequest> {
		if self.inputs_disabled() {
			return None;
		}
		self.error = None;
		self.success = false;
		self.is_loading = true;
		Some(self.fields.clone())
	}

	/// Applies the outcome of the attempt started by [`begin_submission`](Self::begin_submission).
	pub fn finish_submission(&mut self, outcome: &RegistrationOutcome) {
		self.is_loading = false;
		match outcome {
			Ok(_) => {
				self.fields = RegistrationRequest::default();
				self.success = true;
			}
			Err(failure) => self.error = Some(String::from(failure.message())),
		}
	}
}
