use crate::navigation::{Navigator, RouterNavigator, REGISTER_ROUTE};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

#[component]
pub fn StartRedirectView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating start page redirect view");

	spawn_local_scoped(ctx, async move {
		RouterNavigator.navigate(REGISTER_ROUTE);
	});

	view! { ctx, }
}
