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

use log::trace;

use super::{format_template::FormatTemplate, normalize::strip_non_digits};

/// Number of decimal digits in `input`, every other character ignored.
pub fn count_supplied_digits(input: &str) -> usize {
    // stripped string is ASCII only, so byte length equals digit count
    strip_non_digits(input).len()
}

/// Checks that `input` carries exactly as many digits as the template has
/// slots.
///
/// This is a length check only. Separators in the input are not compared
/// with the template literals and no numbering-plan rule is applied, so
/// `123-4567` and `1234567` are both valid for `###-####`.
pub fn has_required_digits(input: &str, template: &FormatTemplate) -> bool {
    let supplied = count_supplied_digits(input);
    let required = template.digit_slots();
    if supplied != required {
        trace!(
            "Number has {} digits while template requires {}",
            supplied, required
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{count_supplied_digits, has_required_digits};
    use crate::phoneformat::FormatTemplate;

    #[test]
    fn counts_only_digits() {
        assert_eq!(count_supplied_digits("(555) 123-4567"), 10);
        assert_eq!(count_supplied_digits("abc"), 0);
        assert_eq!(count_supplied_digits(""), 0);
    }

    #[test]
    fn separators_are_not_compared() {
        let template = FormatTemplate::parse("###-####");
        assert!(has_required_digits("123-4567", &template));
        assert!(has_required_digits("123 4567", &template));
        assert!(has_required_digits("1234567", &template));
        assert!(!has_required_digits("123-456", &template));
        assert!(!has_required_digits("123-45678", &template));
    }

    #[test]
    fn template_without_slots_requires_no_digits() {
        let template = FormatTemplate::parse("---");
        assert!(has_required_digits("", &template));
        assert!(has_required_digits("--", &template));
        assert!(!has_required_digits("1", &template));
    }
}
