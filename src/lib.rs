//! Client-side interaction layer for the Agenda booking page.
//!
//! The page itself is server-rendered; this crate only wires up the handful
//! of behaviors the booking form needs in the browser:
//!
//! - exclusive time-slot selection mirrored into a hidden field ([`slots`])
//! - showing/hiding the upload form ([`upload`])
//! - a lower bound of "today" on the booking date ([`dates`])
//! - live phone number formatting ([`phone`])
//! - password visibility toggling ([`password`])
//!
//! All listeners are installed once by [`bind::PageBindings`] when the
//! document finishes parsing and stay registered for the life of the page.
//! Every handler runs synchronously on the UI thread; the DOM is the only
//! shared state.
//!
//! The formatting and comparison logic behind the handlers is plain Rust with
//! no DOM types, so it is unit-tested on the native target. The DOM glue is
//! compiled for `wasm32` only and covered by the `wasm-bindgen-test` suite
//! under `tests/wasm/`.
//!
//! ## Page contract
//!
//! The binder looks for the elements listed in [`bind`]'s documentation
//! (`#hora`, `.horario-btn`, `#form-upload`, the date/phone/password inputs
//! and their controls). Elements that are absent are skipped, so the same
//! bundle serves pages that only use a subset of the behaviors.

#![warn(missing_docs)]

pub mod bind;
pub mod dates;
pub mod logging;
pub mod password;
pub mod phone;
pub mod slots;
pub mod upload;

pub use bind::{BindError, BindOptions, PageBindings};
pub use dates::{format_iso_date, is_before_min};
pub use phone::{format_phone, strip_digits};
pub use slots::slot_value;
