//! Password visibility toggle.
//!
//! Clicking the control flips the password input between masked and plain
//! text. The control carries a marker class while the password is visible so
//! the page can restyle it (an open/closed eye, typically).

/// CSS selector for the password field.
pub const PASSWORD_FIELD_SELECTOR: &str = "input[type=\"password\"]";

/// CSS selector for the visibility control.
pub const TOGGLE_PASSWORD_SELECTOR: &str = ".toggle-password";

/// Marker class carried by the control while the password is visible.
pub const SHOWING_CLASS: &str = "mostrando";

/// Picks the next `type` for the field. Anything other than the masked type
/// flips back to masked.
pub fn next_input_type(current: &str) -> &'static str {
	if current == "password" { "text" } else { "password" }
}

/// Flips the field between masked and plain text, keeping the control's
/// marker class in step.
#[cfg(target_arch = "wasm32")]
pub(crate) fn toggle_visibility(field: &web_sys::HtmlInputElement, control: &web_sys::Element) {
	let next = next_input_type(&field.type_());
	field.set_type(next);
	if next == "text" {
		let _ = control.class_list().add_1(SHOWING_CLASS);
	} else {
		let _ = control.class_list().remove_1(SHOWING_CLASS);
	}
}
