//! Typed prompt helpers.
//!
//! Every helper keeps asking until the input parses and is in range, so the
//! callers only ever see already-valid values. The domain model's own
//! sanitization stays in place as an independent second line.

use dialoguer::{Confirm, Input};
use rust_decimal::Decimal;

use super::locale::Locale;

/// Asks for a non-blank line of text, returning it trimmed.
pub fn text(caption: &str, blank_error: &'static str) -> Result<String, dialoguer::Error> {
    Input::<String>::new()
        .with_prompt(caption)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err(blank_error)
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map(|input| input.trim().to_string())
}

/// Asks for an integer within `min..=max`, advertising the range in the
/// prompt.
pub fn integer_in(
    caption: &str,
    locale: Locale,
    min: i32,
    max: i32,
) -> Result<i32, dialoguer::Error> {
    let error = locale.range_error(min, max);
    Input::<i32>::new()
        .with_prompt(format!("{caption} ({min}-{max})"))
        .validate_with(move |value: &i32| -> Result<(), String> {
            if (min..=max).contains(value) {
                Ok(())
            } else {
                Err(error.clone())
            }
        })
        .interact_text()
}

/// Asks for a decimal amount within `min..=max`, advertising the range in
/// the prompt.
pub fn decimal_in(
    caption: &str,
    locale: Locale,
    min: Decimal,
    max: Decimal,
) -> Result<Decimal, dialoguer::Error> {
    let error = locale.range_error(min, max);
    Input::<Decimal>::new()
        .with_prompt(format!("{caption} ({min}-{max})"))
        .validate_with(move |value: &Decimal| -> Result<(), String> {
            if (min..=max).contains(value) {
                Ok(())
            } else {
                Err(error.clone())
            }
        })
        .interact_text()
}

/// Asks a yes/no question, defaulting to no.
pub fn flag(caption: &str) -> Result<bool, dialoguer::Error> {
    Confirm::new().with_prompt(caption).default(false).interact()
}

/// Asks for a 1-based position into a listing of `len` records.
pub fn position(caption: &str, locale: Locale, len: usize) -> Result<usize, dialoguer::Error> {
    let error = locale.range_error(1, len);
    Input::<usize>::new()
        .with_prompt(format!("{caption} (1-{len})"))
        .validate_with(move |value: &usize| -> Result<(), String> {
            if (1..=len).contains(value) {
                Ok(())
            } else {
                Err(error.clone())
            }
        })
        .interact_text()
}
