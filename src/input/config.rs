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

use crate::CountryRecord;

/// Whether the user may pick a country.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountrySelection {
    /// **Selectable.**
    /// The picker lists the registry catalog and any country may be chosen.
    #[default]
    Enabled,
    /// **Fixed country.**
    /// Selection is disabled; numbers are always formatted and validated
    /// with this record and the registry is not consulted.
    Fixed(CountryRecord),
}

/// Options of a [`super::PhoneInput`] chosen by the embedding application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneInputConfig {
    priority_country_codes: Vec<String>,
    initial_country_code: Option<String>,
    country_selection: CountrySelection,
}

impl PhoneInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Countries listed first in the picker, e.g. `["US", "GB"]`.
    pub fn with_priority_countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_country_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Country selected when the input is created. Defaults to the first
    /// registered country.
    pub fn with_initial_country(mut self, code: impl Into<String>) -> Self {
        self.initial_country_code = Some(code.into());
        self
    }

    /// Disables country selection and pins the input to `country`.
    pub fn with_fixed_country(mut self, country: CountryRecord) -> Self {
        self.country_selection = CountrySelection::Fixed(country);
        self
    }

    pub fn priority_country_codes(&self) -> &[String] {
        &self.priority_country_codes
    }

    pub fn initial_country_code(&self) -> Option<&str> {
        self.initial_country_code.as_deref()
    }

    pub fn country_selection(&self) -> CountrySelection {
        self.country_selection
    }

    pub fn is_country_selection_enabled(&self) -> bool {
        matches!(self.country_selection, CountrySelection::Enabled)
    }
}
