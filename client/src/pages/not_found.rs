use crate::navigation::REGISTER_ROUTE;
use crate::page_utils::set_page_title;
use sycamore::prelude::*;

#[component]
pub fn NotFoundView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating fallback page for unknown location");
	set_page_title("Not Found");

	view! {
		ctx,
		div(id="not_found") {
			h1 { "Page not found" }
			p {
				a(href=REGISTER_ROUTE) {
					"Create an account"
				}
			}
		}
	}
}
