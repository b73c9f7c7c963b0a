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

use log::{debug, warn};

use super::{
    config::{CountrySelection, PhoneInputConfig},
    country_picker::CountryPicker,
    errors::PhoneInputError,
};
use crate::{
    phoneformat::{
        helper_constants::DIAL_CODE_SEPARATOR, PhoneFormatter, PHONE_FORMATTER,
    },
    CountryRecord, CountryRegistry,
};

/// Reported when the user confirms the number (focus loss).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberChange {
    pub phone_number: String,
    pub is_valid: bool,
}

/// Headless state of one phone input control.
///
/// Feed it keystrokes, confirmations and country choices; read back the
/// formatted number and validity to render.
pub struct PhoneInput<'r> {
    formatter: &'static PhoneFormatter,
    selected_country: CountryRecord,
    phone_number: String,
    is_valid: bool,
    /// `None` when country selection is disabled.
    picker: Option<CountryPicker<'r>>,
}

impl<'r> PhoneInput<'r> {
    pub fn new(
        registry: &'r CountryRegistry,
        config: &PhoneInputConfig,
    ) -> Result<Self, PhoneInputError> {
        let (selected_country, picker) = match config.country_selection() {
            CountrySelection::Fixed(country) => {
                debug!("Phone input pinned to {}", country.code());
                (country, None)
            }
            CountrySelection::Enabled => {
                let country = match config.initial_country_code() {
                    Some(code) => *registry.get_country_for_code(code).ok_or_else(|| {
                        warn!("Invalid or unknown initial country code ({}) provided.", code);
                        PhoneInputError::UnknownCountryCode(code.to_owned())
                    })?,
                    None => *registry.default_country(),
                };
                let picker = CountryPicker::new(registry, config.priority_country_codes());
                (country, Some(picker))
            }
        };

        Ok(Self {
            formatter: &PHONE_FORMATTER,
            selected_country,
            phone_number: String::new(),
            is_valid: false,
            picker,
        })
    }

    pub fn selected_country(&self) -> &CountryRecord {
        &self.selected_country
    }

    /// Current formatted number.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Result of the last confirmation; false before the first one.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_country_selection_enabled(&self) -> bool {
        self.picker.is_some()
    }

    pub fn placeholder(&self) -> String {
        self.selected_country.placeholder()
    }

    /// Dial code followed by the formatted number, e.g. `+1 (555) 123-4567`.
    /// Only the dial code while nothing is typed.
    pub fn international_number(&self) -> String {
        if self.phone_number.is_empty() {
            return self.selected_country.dial_code().to_owned();
        }
        let dial_code = self.selected_country.dial_code();
        fast_cat::concat_str!(dial_code, DIAL_CODE_SEPARATOR, &self.phone_number)
    }

    /// Takes the whole text field content after a keystroke and returns the
    /// new formatted number. Non-digits and one leading trunk `0` are
    /// dropped before formatting.
    pub fn handle_text_change(&mut self, text: &str) -> &str {
        self.phone_number = self
            .formatter
            .format_national_input(text, self.selected_country.format());
        &self.phone_number
    }

    /// Validates the current number against the selected country.
    pub fn handle_confirm(&mut self) -> PhoneNumberChange {
        self.is_valid = self
            .formatter
            .validate(&self.phone_number, self.selected_country.format());
        debug!(
            "Phone number confirmed for {}, valid: {}",
            self.selected_country.code(),
            self.is_valid
        );
        PhoneNumberChange {
            phone_number: self.phone_number.clone(),
            is_valid: self.is_valid,
        }
    }

    /// Switches to `country`, closes the picker and lays the digits typed
    /// so far out over the new template. Validity is left untouched until
    /// the next confirmation.
    pub fn select_country(&mut self, country: CountryRecord) -> Result<&str, PhoneInputError> {
        let Some(picker) = self.picker.as_mut() else {
            return Err(PhoneInputError::CountrySelectionDisabled);
        };
        picker.close();

        self.phone_number = self.formatter.reformat(&self.phone_number, country.format());
        self.selected_country = country;
        debug!("Selected country {}", country.code());
        Ok(self.phone_number.as_str())
    }

    pub fn select_country_by_code(&mut self, code: &str) -> Result<&str, PhoneInputError> {
        let Some(picker) = self.picker.as_ref() else {
            return Err(PhoneInputError::CountrySelectionDisabled);
        };
        let country = picker
            .countries()
            .iter()
            .find(|country| country.code().eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| PhoneInputError::UnknownCountryCode(code.to_owned()))?;
        self.select_country(country)
    }

    pub fn open_picker(&mut self) -> Result<(), PhoneInputError> {
        let picker = self
            .picker
            .as_mut()
            .ok_or(PhoneInputError::CountrySelectionDisabled)?;
        picker.open();
        Ok(())
    }

    pub fn close_picker(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            picker.close();
        }
    }

    pub fn picker(&self) -> Option<&CountryPicker<'r>> {
        self.picker.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut CountryPicker<'r>> {
        self.picker.as_mut()
    }
}
