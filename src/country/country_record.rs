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

use crate::phoneformat::helper_constants::{DIGIT_SLOT, PLACEHOLDER_DIGIT};

/// A single entry of the country catalog.
///
/// Records are plain `'static` data and are copied freely; a registry
/// never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryRecord {
    /// Two-letter uppercase identifier, e.g. `US`.
    code: &'static str,
    /// Display name, e.g. `United States`.
    name: &'static str,
    /// International calling prefix, e.g. `+1`.
    dial_code: &'static str,
    /// National number template, `#` for each digit, e.g. `(###) ###-####`.
    format: &'static str,
}

impl CountryRecord {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        dial_code: &'static str,
        format: &'static str,
    ) -> Self {
        Self { code, name, dial_code, format }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dial_code(&self) -> &'static str {
        self.dial_code
    }

    pub fn format(&self) -> &'static str {
        self.format
    }

    /// The template with every digit slot shown as `0`, suitable as an
    /// input hint: `(###) ###-####` -> `(000) 000-0000`.
    pub fn placeholder(&self) -> String {
        self.format.replace(DIGIT_SLOT, PLACEHOLDER_DIGIT)
    }

    /// How many digits a complete national number has in this country.
    pub fn required_digits(&self) -> usize {
        self.format.chars().filter(|&c| c == DIGIT_SLOT).count()
    }
}
