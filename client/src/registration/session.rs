// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::form::{RegistrationForm, UnknownFieldError};
use super::submit::submit_registration;
use super::RegistrationOutcome;
use crate::config::ClientConfig;
use crate::http::RegistrationTransport;
use crate::navigation::{Navigator, Scheduler, LOGIN_ROUTE, SUCCESS_REDIRECT_DELAY_MS};
use std::cell::RefCell;
use std::rc::Rc;

/// One mounted registration form: its state plus the collaborators it submits and navigates through.
///
/// All state lives behind `RefCell`s and no borrow is held across the request's await point, so the session can be
/// shared through an `Rc` between event handlers.
pub struct RegistrationSession<T, N, S: Scheduler> {
	config: ClientConfig,
	transport: T,
	navigator: Rc<N>,
	scheduler: S,
	form: RefCell<RegistrationForm>,
	pending_redirect: RefCell<Option<S::Handle>>,
	observer: Option<Box<dyn Fn(&RegistrationForm)>>,
}

impl<T, N, S> RegistrationSession<T, N, S>
where
	T: RegistrationTransport,
	N: Navigator + 'static,
	S: Scheduler,
{
	pub fn new(config: ClientConfig, transport: T, navigator: Rc<N>, scheduler: S) -> Self {
		Self {
			config,
			transport,
			navigator,
			scheduler,
			form: RefCell::new(RegistrationForm::default()),
			pending_redirect: RefCell::new(None),
			observer: None,
		}
	}

	/// Registers a callback that receives the form after every change
	pub fn with_observer(mut self, observer: impl Fn(&RegistrationForm) + 'static) -> Self {
		self.observer = Some(Box::new(observer));
		self
	}

	pub fn form(&self) -> RegistrationForm {
		self.form.borrow().clone()
	}

	/// Updates the field behind the input with the given name. Unknown names leave the form untouched.
	pub fn set_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<(), UnknownFieldError> {
		self.form.borrow_mut().set_field_by_name(name, value)?;
		self.notify();
		Ok(())
	}

	/// Runs one submission attempt.
	///
	/// Returns `None` if the form is locked (a request is in flight or registration already succeeded). Otherwise the
	/// loading flag is set for the duration of the request and always cleared afterward.
	pub async fn submit(&self) -> Option<RegistrationOutcome> {
		let request = self.form.borrow_mut().begin_submission();
		let Some(request) = request else {
			log::debug!("Ignoring registration submit while the form is locked");
			return None;
		};
		self.notify();

		let outcome = submit_registration(&self.config, &self.transport, &request).await;

		self.form.borrow_mut().finish_submission(&outcome);
		if outcome.is_ok() {
			self.schedule_login_redirect();
		}
		self.notify();
		Some(outcome)
	}

	/// Sends the user to the login page right away. Ignored while a request is in flight.
	pub fn switch_to_login(&self) -> bool {
		if self.form.borrow().login_switch_disabled() {
			log::debug!("Ignoring switch to login while registration is in progress");
			return false;
		}
		self.cancel_pending_redirect();
		self.navigator.navigate(LOGIN_ROUTE);
		true
	}

	/// Drops the delayed post-registration redirect, if one is waiting
	pub fn cancel_pending_redirect(&self) {
		if self.pending_redirect.borrow_mut().take().is_some() {
			log::debug!("Cancelled pending redirect to {}", LOGIN_ROUTE);
		}
	}

	#[cfg(test)]
	pub fn has_pending_redirect(&self) -> bool {
		self.pending_redirect.borrow().is_some()
	}

	fn schedule_login_redirect(&self) {
		let navigator = Rc::clone(&self.navigator);
		let handle = self.scheduler.schedule(
			SUCCESS_REDIRECT_DELAY_MS,
			Box::new(move || navigator.navigate(LOGIN_ROUTE)),
		);
		*self.pending_redirect.borrow_mut() = Some(handle);
	}

	fn notify(&self) {
		if let Some(observer) = self.observer.as_ref() {
			let form = self.form();
			observer(&form);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::MISSING_API_URL_MESSAGE;
	use crate::registration::test_support::{FakeTransport, ManualScheduler, RecordingNavigator};
	use futures::executor::block_on;
	use register_form_shared::messages::user_register::RegistrationRequest;
	use serde_json::json;

	type TestSession = RegistrationSession<FakeTransport, RecordingNavigator, ManualScheduler>;

	struct Harness {
		session: TestSession,
		navigator: Rc<RecordingNavigator>,
		scheduler: ManualScheduler,
		snapshots: Rc<RefCell<Vec<RegistrationForm>>>,
		calls: Rc<RefCell<Vec<(String, RegistrationRequest)>>>,
	}

	fn harness(config: ClientConfig, transport: FakeTransport) -> Harness {
		let navigator = Rc::new(RecordingNavigator::default());
		let scheduler = ManualScheduler::default();
		let snapshots: Rc<RefCell<Vec<RegistrationForm>>> = Rc::default();
		let calls = transport.call_log();
		let session = RegistrationSession::new(config, transport, Rc::clone(&navigator), scheduler.clone())
			.with_observer({
				let snapshots = Rc::clone(&snapshots);
				move |form: &RegistrationForm| snapshots.borrow_mut().push(form.clone())
			});
		Harness {
			session,
			navigator,
			scheduler,
			snapshots,
			calls,
		}
	}

	fn configured() -> ClientConfig {
		ClientConfig::new("https://api.example.com")
	}

	fn fill(session: &TestSession) {
		session.set_field_by_name("username", "bob").unwrap();
		session.set_field_by_name("email", "bob@example.com").unwrap();
		session.set_field_by_name("password", "hunter2").unwrap();
	}

	fn submitted_request() -> RegistrationRequest {
		RegistrationRequest {
			username: String::from("bob"),
			email: String::from("bob@example.com"),
			password: String::from("hunter2"),
		}
	}

	#[test]
	fn loading_brackets_every_attempt() {
		let transports = [
			FakeTransport::responding(201, r#"{"id":1}"#),
			FakeTransport::responding(400, r#"{"message":"Bad"}"#),
			FakeTransport::failing("Network Error"),
		];
		for transport in transports {
			let h = harness(configured(), transport);
			fill(&h.session);
			h.snapshots.borrow_mut().clear();

			assert!(block_on(h.session.submit()).is_some());

			let snapshots = h.snapshots.borrow();
			assert_eq!(snapshots.len(), 2);
			assert!(snapshots[0].is_loading());
			assert!(!snapshots[1].is_loading());
			assert!(!h.session.form().is_loading());
		}
	}

	#[test]
	fn missing_config_fails_without_request() {
		let h = harness(ClientConfig::unconfigured(), FakeTransport::responding(201, "{}"));
		fill(&h.session);

		block_on(h.session.submit()).unwrap().unwrap_err();

		let form = h.session.form();
		assert_eq!(form.error(), Some(MISSING_API_URL_MESSAGE));
		assert!(!form.is_loading());
		assert!(h.calls.borrow().is_empty());
		assert!(h.scheduler.delays().is_empty());
	}

	#[test]
	fn success_clears_fields_and_redirects_after_delay() {
		let h = harness(configured(), FakeTransport::responding(201, r#"{"id":1,"username":"bob"}"#));
		fill(&h.session);

		let outcome = block_on(h.session.submit()).unwrap();
		assert_eq!(outcome.unwrap(), json!({ "id": 1, "username": "bob" }));

		let form = h.session.form();
		assert!(form.success());
		assert_eq!(form.error(), None);
		assert_eq!(form.fields(), &RegistrationRequest::default());
		assert_eq!(
			h.calls.borrow().as_slice(),
			&[(String::from("https://api.example.com/register"), submitted_request())]
		);

		assert_eq!(h.scheduler.delays(), vec![2000]);
		assert!(h.navigator.routes().is_empty());
		assert_eq!(h.scheduler.fire_all(), 1);
		assert_eq!(h.navigator.routes(), vec![String::from("/login")]);
	}

	#[test]
	fn server_error_keeps_fields() {
		let h = harness(
			configured(),
			FakeTransport::responding(409, r#"{"message":"Email already taken"}"#),
		);
		fill(&h.session);

		block_on(h.session.submit()).unwrap().unwrap_err();

		let form = h.session.form();
		assert_eq!(form.error(), Some("Email already taken"));
		assert!(!form.success());
		assert_eq!(form.fields(), &submitted_request());
		assert!(!h.session.has_pending_redirect());
	}

	#[test]
	fn network_error_message_is_shown() {
		let h = harness(configured(), FakeTransport::failing("Network Error"));
		fill(&h.session);

		block_on(h.session.submit()).unwrap().unwrap_err();
		assert_eq!(h.session.form().error(), Some("Network Error"));
	}

	#[test]
	fn empty_error_response_shows_fallback() {
		let h = harness(configured(), FakeTransport::responding(500, ""));
		fill(&h.session);

		block_on(h.session.submit()).unwrap().unwrap_err();
		assert_eq!(
			h.session.form().error(),
			Some("An unexpected error occurred during registration.")
		);
	}

	#[test]
	fn resubmitting_after_failure_clears_error() {
		let h = harness(configured(), FakeTransport::responding(400, r#"{"message":"Bad"}"#));
		fill(&h.session);
		block_on(h.session.submit()).unwrap().unwrap_err();
		h.snapshots.borrow_mut().clear();

		block_on(h.session.submit()).unwrap().unwrap_err();
		let snapshots = h.snapshots.borrow();
		assert_eq!(snapshots[0].error(), None);
		assert_eq!(snapshots[1].error(), Some("Bad"));
		assert_eq!(h.calls.borrow().len(), 2);
	}

	#[test]
	fn submit_after_success_is_ignored() {
		let h = harness(configured(), FakeTransport::responding(201, "{}"));
		fill(&h.session);
		block_on(h.session.submit()).unwrap().unwrap();

		assert!(block_on(h.session.submit()).is_none());
		assert_eq!(h.calls.borrow().len(), 1);
		assert_eq!(h.scheduler.delays().len(), 1);
	}

	#[test]
	fn switch_navigates_immediately_and_cancels_redirect() {
		let h = harness(configured(), FakeTransport::responding(201, "{}"));
		fill(&h.session);
		block_on(h.session.submit()).unwrap().unwrap();
		assert!(h.session.has_pending_redirect());

		assert!(h.session.switch_to_login());
		assert!(!h.session.has_pending_redirect());
		assert_eq!(h.scheduler.cancelled(), vec![true]);
		assert_eq!(h.scheduler.fire_all(), 0);
		assert_eq!(h.navigator.routes(), vec![String::from("/login")]);
	}

	#[test]
	fn switch_is_ignored_while_loading() {
		let h = harness(configured(), FakeTransport::responding(201, "{}"));
		h.session.form.borrow_mut().begin_submission();

		assert!(!h.session.switch_to_login());
		assert!(h.navigator.routes().is_empty());
	}

	#[test]
	fn teardown_cancels_pending_redirect() {
		let h = harness(configured(), FakeTransport::responding(201, "{}"));
		fill(&h.session);
		block_on(h.session.submit()).unwrap().unwrap();

		h.session.cancel_pending_redirect();
		assert_eq!(h.scheduler.fire_all(), 0);
		assert!(h.navigator.routes().is_empty());
	}

	#[test]
	fn dropping_session_cancels_pending_redirect() {
		let h = harness(configured(), FakeTransport::responding(201, "{}"));
		fill(&h.session);
		block_on(h.session.submit()).unwrap().unwrap();

		let Harness {
			session,
			navigator,
			scheduler,
			..
		} = h;
		drop(session);
		assert_eq!(scheduler.cancelled(), vec![true]);
		assert_eq!(scheduler.fire_all(), 0);
		assert!(navigator.routes().is_empty());
	}

	#[test]
	fn observer_sees_field_edits() {
		let h = harness(configured(), FakeTransport::responding(201, "{}"));
		h.session.set_field_by_name("email", "bob@example.com").unwrap();

		let snapshots = h.snapshots.borrow();
		assert_eq!(snapshots.len(), 1);
		assert_eq!(snapshots[0].fields().email, "bob@example.com");
		assert_eq!(snapshots[0].fields().username, "");
	}

	#[test]
	fn unknown_input_name_is_rejected_without_notifying() {
		let h = harness(configured(), FakeTransport::responding(201, "{}"));
		fill(&h.session);
		h.snapshots.borrow_mut().clear();

		assert!(h.session.set_field_by_name("color", "#7f7f7f").is_err());
		assert!(h.snapshots.borrow().is_empty());
		assert_eq!(h.session.form().fields(), &submitted_request());
	}
}
