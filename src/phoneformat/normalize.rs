// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use log::trace;

use super::helper_constants::TRUNK_PREFIX;
use crate::string_util::strip_cow_prefix;

/// Removes every character that is not a decimal digit.
///
/// Unicode decimal digits (for example full-width `５`) are converted to
/// their ASCII form first, so the result is always ASCII `0-9` only.
/// Returns `Cow::Borrowed` when the input already consists of ASCII digits.
pub fn strip_non_digits(input: &str) -> Cow<'_, str> {
    if input.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(input);
    }
    let normalized = dec_from_char::normalize_decimals(input);
    Cow::Owned(normalized.chars().filter(char::is_ascii_digit).collect())
}

/// Removes a single leading trunk prefix (`0`) from a digit-only string.
///
/// A national number typed as `0555...` is treated as carrying an implicit
/// trunk code, which is never part of the internationally formatted number.
/// Only one zero is removed: `00` keeps its second zero.
pub fn strip_trunk_prefix(digits: Cow<'_, str>) -> Cow<'_, str> {
    let (digits, stripped) = strip_cow_prefix(digits, TRUNK_PREFIX);
    if stripped {
        trace!("Stripped trunk prefix, {} digits left", digits.len());
    }
    digits
}

/// Normalization applied to raw keystroke input before formatting:
/// non-digits are removed, then one leading trunk `0`.
pub fn normalize_national_number(raw_input: &str) -> Cow<'_, str> {
    strip_trunk_prefix(strip_non_digits(raw_input))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{normalize_national_number, strip_non_digits, strip_trunk_prefix};

    #[test]
    fn strip_non_digits_keeps_ascii_digits_borrowed() {
        assert!(matches!(strip_non_digits("5551234"), Cow::Borrowed("5551234")));
        assert_eq!(strip_non_digits("(555) 123-4567"), "5551234567");
        assert_eq!(strip_non_digits("+1 abc"), "1");
        assert_eq!(strip_non_digits(""), "");
        assert_eq!(strip_non_digits("--"), "");
    }

    #[test]
    fn strip_non_digits_normalizes_unicode_digits() {
        // full-width digits
        assert_eq!(strip_non_digits("５５５-１２"), "55512");
    }

    #[test]
    fn trunk_prefix_is_stripped_once() {
        assert_eq!(strip_trunk_prefix(Cow::Borrowed("0555")), "555");
        assert_eq!(strip_trunk_prefix(Cow::Borrowed("00555")), "0555");
        assert_eq!(strip_trunk_prefix(Cow::Borrowed("555")), "555");
        assert_eq!(strip_trunk_prefix(Cow::Borrowed("")), "");
    }

    #[test]
    fn normalize_national_number_strips_separators_then_trunk() {
        assert_eq!(normalize_national_number("0 555 123"), "555123");
        assert_eq!(normalize_national_number("(0)555"), "555");
        assert_eq!(normalize_national_number("5550"), "5550");
    }
}
