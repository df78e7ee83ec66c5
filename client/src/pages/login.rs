use crate::navigation::REGISTER_ROUTE;
use crate::page_utils::set_page_title;
use sycamore::prelude::*;

/// Landing spot for the login route. Signing in is handled outside of this client; the page exists so both
/// registration redirects have somewhere to arrive.
#[component]
pub fn LoginView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating login landing page");
	set_page_title("Log In");

	view! {
		ctx,
		div(id="login") {
			h1 { "Log In" }
			p {
				"Need an account? "
				a(href=REGISTER_ROUTE) { "Register" }
			}
		}
	}
}
