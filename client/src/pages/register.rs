use crate::config::ClientConfig;
use crate::http::FetchTransport;
use crate::navigation::{RouterNavigator, TimeoutScheduler};
use crate::page_utils::set_page_title;
use crate::registration::form::{FormField, RegistrationForm, SUCCESS_MESSAGE};
use crate::registration::session::RegistrationSession;
use std::rc::Rc;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

type BrowserRegistrationSession = RegistrationSession<FetchTransport, RouterNavigator, TimeoutScheduler>;

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating registration page");
	set_page_title("Create Account");

	let config: &ClientConfig = use_context(ctx);

	// The session reports every state change here; everything rendered below derives from it.
	let form_signal = create_rc_signal(RegistrationForm::default());
	let session: Rc<BrowserRegistrationSession> = Rc::new(
		RegistrationSession::new(
			config.clone(),
			FetchTransport,
			Rc::new(RouterNavigator),
			TimeoutScheduler,
		)
		.with_observer({
			let form_signal = form_signal.clone();
			move |form: &RegistrationForm| form_signal.set(form.clone())
		}),
	);
	let form_signal = create_ref(ctx, form_signal);

	on_cleanup(ctx, {
		let session = Rc::clone(&session);
		move || session.cancel_pending_redirect()
	});

	let inputs_disabled = create_memo(ctx, move || form_signal.get().inputs_disabled());
	let login_switch_disabled = create_memo(ctx, move || form_signal.get().login_switch_disabled());
	let submit_label = create_memo(ctx, move || form_signal.get().submit_label());
	let submit_class = create_memo(ctx, move || {
		if form_signal.get().is_loading() {
			"register_submit register_submit_loading"
		} else {
			"register_submit"
		}
	});
	let success = create_memo(ctx, move || form_signal.get().success());
	let error_message = create_memo(ctx, move || {
		form_signal
			.get()
			.error()
			.map(|message| format!("Error: {}", message))
	});

	let username_signal = create_signal(ctx, String::new());
	let email_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());

	// Each input reports under its `name` attribute, so one handler serves all three fields.
	let field_input_handler = {
		let session = Rc::clone(&session);
		move |event: WebEvent| {
			let Some(input) = event
				.target()
				.and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
			else {
				return;
			};
			if let Err(error) = session.set_field_by_name(&input.name(), input.value()) {
				log::warn!("Ignoring input event: {}", error);
			}
		}
	};

	let form_submission_handler = {
		let session = Rc::clone(&session);
		move |event: WebEvent| {
			event.prevent_default();

			let session = Rc::clone(&session);
			spawn_local_scoped(ctx, async move {
				if let Some(Ok(_)) = session.submit().await {
					username_signal.set(String::new());
					email_signal.set(String::new());
					password_signal.set(String::new());
				}
			});
		}
	};

	let login_switch_handler = {
		let session = Rc::clone(&session);
		move |_event: WebEvent| {
			session.switch_to_login();
		}
	};

	view! {
		ctx,
		div(id="register") {
			h1 { "Create Account" }
			(if *success.get() {
				view! {
					ctx,
					div(id="register_success", class="register_status") { (SUCCESS_MESSAGE) }
				}
			} else {
				view! { ctx, }
			})
			(match (*error_message.get()).clone() {
				Some(message) => view! {
					ctx,
					div(id="register_error", class="register_status") { (message) }
				},
				None => view! { ctx, },
			})
			form(id="register_user", on:submit=form_submission_handler) {
				div(class="register_field") {
					label(for="register_username") { "Username" }
					input(
						id="register_username",
						type="text",
						name=FormField::Username.name(),
						placeholder="Your Name",
						required=true,
						disabled=*inputs_disabled.get(),
						on:input=field_input_handler.clone(),
						bind:value=username_signal
					)
				}
				div(class="register_field") {
					label(for="register_email") { "Email address" }
					input(
						id="register_email",
						type="email",
						name=FormField::Email.name(),
						placeholder="you@example.com",
						required=true,
						disabled=*inputs_disabled.get(),
						on:input=field_input_handler.clone(),
						bind:value=email_signal
					)
				}
				div(class="register_field") {
					label(for="register_password") { "Password" }
					input(
						id="register_password",
						type="password",
						name=FormField::Password.name(),
						placeholder="••••••••",
						required=true,
						disabled=*inputs_disabled.get(),
						on:input=field_input_handler,
						bind:value=password_signal
					)
				}
				button(type="submit", class=*submit_class.get(), disabled=*inputs_disabled.get()) {
					(*submit_label.get())
				}
			}
			p(id="register_switch") {
				"Already have an account? "
				button(type="button", on:click=login_switch_handler, disabled=*login_switch_disabled.get()) {
					"Login"
				}
			}
		}
	}
}
