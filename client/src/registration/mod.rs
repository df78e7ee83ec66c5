// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::RegistrationFailure;

pub mod form;
pub mod session;
pub mod submit;

/// Whatever the server sent back for a newly created user. Its shape isn't relied on; it's only logged.
pub type NewUser = serde_json::Value;

pub type RegistrationOutcome = Result<NewUser, RegistrationFailure>;
