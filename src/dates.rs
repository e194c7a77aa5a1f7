//! Lower bound of "today" on the booking date.
//!
//! At bind time the date field's `min` attribute is stamped with today's date
//! in the browser's local time. The `change` handler re-checks the typed
//! value against that bound and, when it lies in the past, alerts the user
//! and clears the field.

/// Message shown when the chosen date lies before today.
pub const PAST_DATE_MESSAGE: &str = "Não é possível agendar para uma data passada.";

/// CSS selector for the booking date field.
pub const DATE_FIELD_SELECTOR: &str = "input[type=\"date\"]";

/// Formats a calendar date as zero-padded `YYYY-MM-DD`.
///
/// `month` and `day` are 1-based.
pub fn format_iso_date(year: u32, month: u32, day: u32) -> String {
	format!("{year:04}-{month:02}-{day:02}")
}

/// Returns true when `value` names a day before `min`.
///
/// Both sides must be zero-padded `YYYY-MM-DD` strings; only the fixed width
/// makes the plain string ordering agree with calendar ordering. An empty
/// value never violates the bound.
pub fn is_before_min(value: &str, min: &str) -> bool {
	!value.is_empty() && value < min
}

/// Today's date in the browser's local time zone.
#[cfg(target_arch = "wasm32")]
pub(crate) fn today_local() -> String {
	let now = js_sys::Date::new_0();
	format_iso_date(now.get_full_year(), now.get_month() + 1, now.get_date())
}
