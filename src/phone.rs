//! Live phone number formatting.
//!
//! The field accepts a Brazilian phone number. On every `input` event the
//! current value is reduced to its digits and re-rendered; anything the user
//! types that is not a digit is silently dropped rather than rejected.
//! Resetting `value` moves the caret to the end of the field, which is
//! accepted behavior for this page.

/// Maximum number of digits kept from the field: a two-digit area code plus a
/// nine-digit mobile number.
pub const MAX_DIGITS: usize = 11;

/// CSS selector for the phone field.
pub const PHONE_FIELD_SELECTOR: &str = "input[name=\"telefone\"]";

/// Extracts the digits from a raw field value, capped at [`MAX_DIGITS`].
pub fn strip_digits(raw: &str) -> String {
	raw.chars()
		.filter(char::is_ascii_digit)
		.take(MAX_DIGITS)
		.collect()
}

/// Renders a digit string as a display value.
///
/// The grouping depends on how many digits have been typed so far:
///
/// - more than 10: `(DD) DDDDD-DDDD` (nine-digit mobile number)
/// - 7 to 10: `(DD) DDDD-DDDD`, with the tail short while still typing
/// - 3 to 6: `(DD) ` followed by the remaining digits, no dash yet
/// - 2 or fewer: the digits as-is
///
/// `digits` must contain only ASCII digits; [`strip_digits`] produces such a
/// string.
pub fn format_phone(digits: &str) -> String {
	debug_assert!(digits.chars().all(|c| c.is_ascii_digit()));
	match digits.len() {
		0..=2 => digits.to_string(),
		3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
		7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
		_ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
	}
}

/// Re-renders the field from its current value.
#[cfg(target_arch = "wasm32")]
pub(crate) fn reformat_field(field: &web_sys::HtmlInputElement) {
	let formatted = format_phone(&strip_digits(&field.value()));
	field.set_value(&formatted);
}
