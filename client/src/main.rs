use sycamore::prelude::*;

mod app;
mod config;
mod error;
mod http;
mod navigation;
mod page_utils;
mod pages;
mod registration;

use app::App;
use config::ClientConfig;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

	let config = ClientConfig::from_build_environment();
	match config.base_api_url() {
		Some(url) => log::info!("Registration API base address: {}", url),
		None => log::warn!("BASE_API_URL was not set at build time; registration is disabled"),
	}

	sycamore::render(|ctx| {
		view! {
			ctx,
			App(config=config.clone())
		}
	});
}
