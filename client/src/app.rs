use crate::config::ClientConfig;
use crate::pages::login::LoginView;
use crate::pages::not_found::NotFoundView;
use crate::pages::register::RegistrationView;
use crate::pages::start_redirect::StartRedirectView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
pub enum AppRoutes {
	#[to("/")]
	Start,
	#[to("/register")]
	Register,
	#[to("/login")]
	Login,
	#[not_found]
	NotFound,
}

#[derive(Prop)]
pub struct AppProps {
	config: ClientConfig,
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>, props: AppProps) -> View<G> {
	provide_context(ctx, props.config);

	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					div(id="app") {
						(match route.get().as_ref() {
							AppRoutes::Start => view! { ctx, StartRedirectView },
							AppRoutes::Register => view! { ctx, RegistrationView },
							AppRoutes::Login => view! { ctx, LoginView },
							AppRoutes::NotFound => view! { ctx, NotFoundView },
						})
					}
				}
			}
		)
	}
}
