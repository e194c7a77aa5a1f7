//! Upload form visibility toggle.
//!
//! A plain two-state toggle on the container's inline `display` value. The
//! initial state belongs to the markup, not to script; a container hidden
//! only by a stylesheet reads as visible until the first activation.

/// Id of the upload form container.
pub const UPLOAD_FORM_ID: &str = "form-upload";

/// CSS selector for the control that toggles the upload form.
pub const TOGGLE_UPLOAD_SELECTOR: &str = ".toggle-upload";

/// Picks the next inline `display` value for the container.
pub fn next_display(current: &str) -> &'static str {
	if current == "none" { "block" } else { "none" }
}

/// Toggles the container between hidden and shown.
#[cfg(target_arch = "wasm32")]
pub(crate) fn toggle_upload_form(document: &web_sys::Document) {
	use wasm_bindgen::JsCast;

	let Some(container) = document
		.get_element_by_id(UPLOAD_FORM_ID)
		.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
	else {
		return;
	};

	let style = container.style();
	let current = style.get_property_value("display").unwrap_or_default();
	if let Err(err) = style.set_property("display", next_display(&current)) {
		crate::error_log!("failed to toggle #{UPLOAD_FORM_ID}: {err:?}");
	}
}
