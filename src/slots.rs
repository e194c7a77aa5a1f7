//! Exclusive time-slot selection.
//!
//! Each slot button carries the marker class while selected; selecting a new
//! slot first sweeps the marker off every button, so at most one button is
//! ever marked. The chosen time string is mirrored into the hidden `#hora`
//! field that travels with the booking form on submit.

/// Id of the hidden input mirroring the chosen time.
pub const HOUR_FIELD_ID: &str = "hora";

/// CSS selector for the slot buttons.
pub const SLOT_BUTTON_SELECTOR: &str = ".horario-btn";

/// Marker class carried by the selected button.
pub const SELECTED_CLASS: &str = "selecionado";

/// Attribute naming a button's time value.
pub const HOUR_ATTR: &str = "data-hora";

/// Resolves a button's time value from its `data-hora` attribute, falling
/// back to its trimmed text content (the server renders the time as the
/// button label). An empty attribute counts as absent.
pub fn slot_value(attr: Option<String>, text: &str) -> String {
	attr.filter(|value| !value.is_empty())
		.unwrap_or_else(|| text.trim().to_string())
}

#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::{select_slot, slot_value_of};

#[cfg(target_arch = "wasm32")]
mod wasm {
	use wasm_bindgen::JsCast;
	use web_sys::{Document, Element, HtmlInputElement};

	use super::{HOUR_ATTR, HOUR_FIELD_ID, SELECTED_CLASS, SLOT_BUTTON_SELECTOR};

	/// Reads the time value off a slot button.
	pub(crate) fn slot_value_of(button: &Element) -> String {
		super::slot_value(
			button.get_attribute(HOUR_ATTR),
			&button.text_content().unwrap_or_default(),
		)
	}

	/// Marks `button` as the selected slot and mirrors `value` into `#hora`.
	///
	/// The field is written first, then every slot button loses the marker,
	/// then `button` gains it.
	pub(crate) fn select_slot(document: &Document, value: &str, button: &Element) {
		if let Some(field) = document
			.get_element_by_id(HOUR_FIELD_ID)
			.and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
		{
			field.set_value(value);
		}

		if let Ok(buttons) = document.query_selector_all(SLOT_BUTTON_SELECTOR) {
			for index in 0..buttons.length() {
				if let Some(slot) = buttons
					.item(index)
					.and_then(|node| node.dyn_into::<Element>().ok())
				{
					let _ = slot.class_list().remove_1(SELECTED_CLASS);
				}
			}
		}

		let _ = button.class_list().add_1(SELECTED_CLASS);
	}
}
