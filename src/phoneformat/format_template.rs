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

use super::helper_constants::DIGIT_SLOT;

/// One element of a parsed format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateToken {
    /// **Digit slot.**
    /// Consumes exactly one digit of the number being formatted.
    DigitSlot,
    /// **Literal separator.**
    /// Emitted verbatim between digit groups, e.g. a space, `-` or `(`.
    Literal(char),
}

/// A format template such as `(###) ###-####`, split into tokens once so
/// that as-you-type formatting does not rescan the pattern on every
/// keystroke.
///
/// Parsing never fails: a template without any `#` is legal and simply has
/// zero digit slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    tokens: Vec<TemplateToken>,
    digit_slots: usize,
}

impl FormatTemplate {
    pub fn parse(pattern: &str) -> Self {
        let tokens: Vec<TemplateToken> = pattern
            .chars()
            .map(|c| {
                if c == DIGIT_SLOT {
                    TemplateToken::DigitSlot
                } else {
                    TemplateToken::Literal(c)
                }
            })
            .collect();
        let digit_slots = tokens
            .iter()
            .filter(|token| matches!(token, TemplateToken::DigitSlot))
            .count();
        Self { tokens, digit_slots }
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    /// Number of `#` positions, i.e. how many digits a complete number has.
    pub fn digit_slots(&self) -> usize {
        self.digit_slots
    }

    pub fn has_digit_slots(&self) -> bool {
        self.digit_slots > 0
    }

    /// Upper bound of the formatted length in bytes, used to size buffers.
    pub(crate) fn formatted_capacity(&self) -> usize {
        self.tokens
            .iter()
            .map(|token| match token {
                TemplateToken::DigitSlot => 1,
                TemplateToken::Literal(c) => c.len_utf8(),
            })
            .sum()
    }
}
