// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::callback::Timeout;

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";

/// How long the success message stays up before the user is sent to the login page
pub const SUCCESS_REDIRECT_DELAY_MS: u32 = 2_000;

/// Moves the user to another page of the application
pub trait Navigator {
	fn navigate(&self, route: &str);
}

/// Navigates through the application router
#[derive(Clone, Copy, Debug, Default)]
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
	fn navigate(&self, route: &str) {
		log::debug!("Navigating to {}", route);
		sycamore_router::navigate(route);
	}
}

/// Runs a callback once after a delay.
///
/// Dropping the returned handle must cancel the callback if it hasn't run yet.
pub trait Scheduler {
	type Handle;

	fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Schedules callbacks with the browser's `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
	type Handle = Timeout;

	fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
		Timeout::new(delay_ms, callback)
	}
}
