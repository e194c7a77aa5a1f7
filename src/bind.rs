//! Page binder.
//!
//! [`PageBindings::bind`] walks the document once, wires a listener for every
//! behavior whose elements are present, and returns the set of live handles.
//! Binding happens a single time per page load; nothing is ever re-bound or
//! torn down afterwards, which is why the launcher calls
//! [`PageBindings::forget`] on success.
//!
//! Elements the page does not use are simply skipped (with a warning in
//! debug builds). The one wiring mistake worth failing on is a slot grid
//! without its `#hora` mirror field, and only [`BindOptions::strict`] turns
//! that into an error; the lenient default matches the booking page, which
//! always ships both together.

use thiserror::Error;

/// Errors surfaced while binding the page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
	/// No global `window` object (not running in a browsing context).
	#[error("window is not available")]
	NoWindow,
	/// The window has no document.
	#[error("document is not available")]
	NoDocument,
	/// A required element is missing from the page.
	#[error("required element not found: {selector}")]
	MissingElement {
		/// Selector that failed to match.
		selector: String,
	},
	/// The browser rejected a listener registration.
	#[error("failed to attach {event} listener: {detail}")]
	Attach {
		/// Event type that was being attached.
		event: &'static str,
		/// Stringified `JsValue` from the DOM call.
		detail: String,
	},
}

/// Binding behavior knobs.
#[derive(Debug, Clone, Default)]
pub struct BindOptions {
	/// Fail with [`BindError::MissingElement`] when slot buttons exist but
	/// the `#hora` mirror field does not. Lenient binding skips the slot
	/// behavior instead.
	pub strict: bool,
}

impl BindOptions {
	/// Options that fail on a slot grid without its mirror field.
	pub fn strict() -> Self {
		Self { strict: true }
	}
}

/// The set of listeners installed on the page.
///
/// Each handle keeps its closure alive; dropping the set detaches every
/// listener again, which the wasm test suite relies on for isolation between
/// fixtures. The launcher path leaks the set instead via [`forget`].
///
/// [`forget`]: PageBindings::forget
#[derive(Default)]
pub struct PageBindings {
	#[cfg(target_arch = "wasm32")]
	handles: Vec<wasm::EventHandle>,
	#[cfg(not(target_arch = "wasm32"))]
	handles: Vec<&'static str>,
}

impl PageBindings {
	/// Number of listeners installed.
	pub fn len(&self) -> usize {
		self.handles.len()
	}

	/// True when nothing on the page was bound.
	pub fn is_empty(&self) -> bool {
		self.handles.is_empty()
	}

	/// Leaks the handles so the listeners stay registered for the life of
	/// the page.
	pub fn forget(self) {
		std::mem::forget(self);
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl PageBindings {
	/// Non-WASM placeholder; binds nothing.
	pub fn bind(_options: &BindOptions) -> Result<Self, BindError> {
		Ok(Self::default())
	}
}

#[cfg(target_arch = "wasm32")]
pub use wasm::launch;

#[cfg(target_arch = "wasm32")]
mod wasm {
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{Document, DocumentReadyState, Element, Event, EventTarget, HtmlInputElement};

	use super::{BindError, BindOptions, PageBindings};
	use crate::{dates, error_log, info_log, password, phone, slots, upload, warn_log};

	/// A live listener registration: the closure plus enough context to
	/// detach it again on drop.
	pub(super) struct EventHandle {
		target: EventTarget,
		event: &'static str,
		closure: Closure<dyn FnMut(Event)>,
	}

	impl Drop for EventHandle {
		fn drop(&mut self) {
			let _ = self
				.target
				.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
		}
	}

	fn attach(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<EventHandle, BindError> {
		let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
		target
			.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
			.map_err(|err| BindError::Attach {
				event,
				detail: format!("{err:?}"),
			})?;
		Ok(EventHandle {
			target: target.clone(),
			event,
			closure,
		})
	}

	impl PageBindings {
		/// Binds every behavior whose elements are present in `document`.
		pub fn bind(document: &Document, options: &BindOptions) -> Result<Self, BindError> {
			let mut bindings = Self::default();
			bindings.bind_slots(document, options)?;
			bindings.bind_upload(document)?;
			bindings.bind_date_guard(document)?;
			bindings.bind_phone(document)?;
			bindings.bind_password(document)?;
			info_log!("page bindings installed: {}", bindings.len());
			Ok(bindings)
		}

		fn bind_slots(&mut self, document: &Document, options: &BindOptions) -> Result<(), BindError> {
			let buttons = document
				.query_selector_all(slots::SLOT_BUTTON_SELECTOR)
				.map_err(|err| BindError::Attach {
					event: "click",
					detail: format!("{err:?}"),
				})?;
			if buttons.length() == 0 {
				return Ok(());
			}

			if document.get_element_by_id(slots::HOUR_FIELD_ID).is_none() {
				if options.strict {
					return Err(BindError::MissingElement {
						selector: format!("#{}", slots::HOUR_FIELD_ID),
					});
				}
				warn_log!(
					"slot buttons present but #{} is missing, skipping slot selection",
					slots::HOUR_FIELD_ID
				);
				return Ok(());
			}

			for index in 0..buttons.length() {
				let Some(button) = buttons
					.item(index)
					.and_then(|node| node.dyn_into::<Element>().ok())
				else {
					continue;
				};
				let document = document.clone();
				let clicked = button.clone();
				let handle = attach(button.as_ref(), "click", move |_event| {
					let value = slots::slot_value_of(&clicked);
					slots::select_slot(&document, &value, &clicked);
				})?;
				self.handles.push(handle);
			}
			Ok(())
		}

		fn bind_upload(&mut self, document: &Document) -> Result<(), BindError> {
			let Some(control) = query_optional(document, upload::TOGGLE_UPLOAD_SELECTOR) else {
				return Ok(());
			};
			let document = document.clone();
			let handle = attach(control.as_ref(), "click", move |_event| {
				upload::toggle_upload_form(&document);
			})?;
			self.handles.push(handle);
			Ok(())
		}

		fn bind_date_guard(&mut self, document: &Document) -> Result<(), BindError> {
			let Some(field) = query_optional(document, dates::DATE_FIELD_SELECTOR)
				.and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
			else {
				return Ok(());
			};

			let min = dates::today_local();
			field.set_min(&min);

			let guarded = field.clone();
			let handle = attach(field.as_ref(), "change", move |_event| {
				if dates::is_before_min(&guarded.value(), &min) {
					if let Some(window) = web_sys::window() {
						if let Err(err) = window.alert_with_message(dates::PAST_DATE_MESSAGE) {
							error_log!("alert failed: {err:?}");
						}
					}
					guarded.set_value("");
				}
			})?;
			self.handles.push(handle);
			Ok(())
		}

		fn bind_phone(&mut self, document: &Document) -> Result<(), BindError> {
			let Some(field) = query_optional(document, phone::PHONE_FIELD_SELECTOR)
				.and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
			else {
				return Ok(());
			};
			let formatted = field.clone();
			let handle = attach(field.as_ref(), "input", move |_event| {
				phone::reformat_field(&formatted);
			})?;
			self.handles.push(handle);
			Ok(())
		}

		fn bind_password(&mut self, document: &Document) -> Result<(), BindError> {
			let Some(field) = query_optional(document, password::PASSWORD_FIELD_SELECTOR)
				.and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
			else {
				return Ok(());
			};
			let Some(control) = query_optional(document, password::TOGGLE_PASSWORD_SELECTOR) else {
				return Ok(());
			};

			let toggled = field.clone();
			let marker = control.clone();
			let handle = attach(control.as_ref(), "click", move |_event| {
				password::toggle_visibility(&toggled, &marker);
			})?;
			self.handles.push(handle);
			Ok(())
		}
	}

	/// First match for `selector`, with a debug warning when absent.
	fn query_optional(document: &Document, selector: &str) -> Option<Element> {
		match document.query_selector(selector) {
			Ok(Some(element)) => Some(element),
			Ok(None) => {
				warn_log!("no element matches {selector}, skipping");
				None
			}
			Err(err) => {
				error_log!("query for {selector} failed: {err:?}");
				None
			}
		}
	}

	/// The browsing context's document.
	fn page_document() -> Result<Document, BindError> {
		let window = web_sys::window().ok_or(BindError::NoWindow)?;
		window.document().ok_or(BindError::NoDocument)
	}

	/// Entry point for the browser bundle.
	///
	/// Binds immediately when the document is already parsed, otherwise waits
	/// for `DOMContentLoaded`. The installed listeners live for the rest of
	/// the page.
	#[wasm_bindgen(start)]
	pub fn launch() -> Result<(), JsValue> {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		let document = page_document().map_err(|err| JsValue::from_str(&err.to_string()))?;

		if document.ready_state() == DocumentReadyState::Loading {
			let parsed = document.clone();
			let closure = Closure::wrap(Box::new(move |_event: Event| {
				bind_page(&parsed);
			}) as Box<dyn FnMut(Event)>);
			document
				.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
			closure.forget();
		} else {
			bind_page(&document);
		}
		Ok(())
	}

	fn bind_page(document: &Document) {
		match PageBindings::bind(document, &BindOptions::default()) {
			Ok(bindings) => bindings.forget(),
			Err(err) => error_log!("page binding failed: {err}"),
		}
	}
}
