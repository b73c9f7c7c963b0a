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

use super::{
    format_template::{FormatTemplate, TemplateToken},
    helper_constants::TEMPLATE_CACHE_CAPACITY,
    normalize::{normalize_national_number, strip_non_digits},
    validator::has_required_digits,
};
use crate::{string_util::truncate_trailing_whitespace, template_cache::TemplateCache};

/// Lays `digits` out over `template`.
///
/// Template literals are emitted only while undrained digits remain, so a
/// partially typed number yields a prefix of its fully formatted form:
/// `555` over `(###) ###-####` gives `(555`. Digits beyond the template
/// capacity are dropped. Trailing whitespace is removed from the result.
///
/// `digits` is expected to be digit-only already; see
/// [`normalize_national_number`].
pub fn format_digits(digits: &str, template: &FormatTemplate) -> String {
    if digits.is_empty() || !template.has_digit_slots() {
        return String::new();
    }

    let mut remaining = digits.chars().peekable();
    let mut formatted = String::with_capacity(template.formatted_capacity());

    for token in template.tokens() {
        if remaining.peek().is_none() {
            break;
        }
        match token {
            TemplateToken::DigitSlot => {
                if let Some(digit) = remaining.next() {
                    formatted.push(digit);
                }
            }
            TemplateToken::Literal(c) => formatted.push(*c),
        }
    }

    let dropped = remaining.count();
    if dropped > 0 {
        trace!(
            "Dropped {} digits exceeding template capacity of {}",
            dropped,
            template.digit_slots()
        );
    }

    truncate_trailing_whitespace(&mut formatted);
    formatted
}

/// Formatting and validation entry point holding a cache of parsed
/// templates. Use the process-wide [`super::PHONE_FORMATTER`] unless an
/// isolated cache is needed.
pub struct PhoneFormatter {
    template_cache: TemplateCache,
}

impl PhoneFormatter {
    pub fn new() -> Self {
        Self {
            template_cache: TemplateCache::with_capacity(TEMPLATE_CACHE_CAPACITY),
        }
    }

    /// Formats already digit-only input with the given template pattern.
    pub fn format(&self, digits: &str, template: &str) -> String {
        let template = self.template_cache.get_template(template);
        format_digits(digits, &template)
    }

    /// Formats raw keystroke input: non-digits are removed, then a single
    /// leading trunk `0`, and the rest is formatted.
    pub fn format_national_input(&self, raw_input: &str, template: &str) -> String {
        let digits = normalize_national_number(raw_input);
        self.format(&digits, template)
    }

    /// Lays the digits of an already formatted number out over another
    /// template. No trunk prefix is stripped here: the digits were
    /// normalized when they were typed.
    pub fn reformat(&self, formatted: &str, template: &str) -> String {
        let digits = strip_non_digits(formatted);
        self.format(&digits, template)
    }

    /// True iff `input` has exactly as many digits as `template` has `#`
    /// slots. See [`has_required_digits`] for what is not checked.
    pub fn validate(&self, input: &str, template: &str) -> bool {
        let template = self.template_cache.get_template(template);
        has_required_digits(input, &template)
    }

    pub fn template_cache(&self) -> &TemplateCache {
        &self.template_cache
    }
}

impl Default for PhoneFormatter {
    fn default() -> Self {
        Self::new()
    }
}
