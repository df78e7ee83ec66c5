use web_sys::window;

const APPLICATION_TITLE: &str = "Account Registration";

/// Sets the browser tab title for the current page. Does nothing outside a browser document.
pub fn set_page_title(page_title: &str) {
	let Some(document) = window().and_then(|window| window.document()) else {
		return;
	};
	document.set_title(&format!("{} | {}", page_title, APPLICATION_TITLE));
}
