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

use std::collections::HashSet;

use log::{debug, trace};

use super::{
    country_data::COUNTRY_DATA, country_record::CountryRecord, errors::RegistryError,
    registry_regexps::REGISTRY_REGEXPS,
};
use crate::{
    interfaces::CountryMatcherApi, phoneformat::helper_constants::DIGIT_SLOT,
    regex_util::RegexFullMatch, substring_matcher::SubstringMatcher,
};

/// Returns `all` split into two stable groups: records whose code is in
/// `priority_codes` first, then every other record. Relative order inside
/// each group is taken from `all`, not from `priority_codes`.
///
/// Codes are compared ignoring ASCII case. Codes absent from `all` are
/// ignored, so the output is always a permutation of the input.
pub fn reorder_with_priority<S: AsRef<str>>(
    all: &[CountryRecord],
    priority_codes: &[S],
) -> Vec<CountryRecord> {
    if priority_codes.is_empty() {
        return all.to_vec();
    }
    let priority: HashSet<String> = priority_codes
        .iter()
        .map(|code| code.as_ref().to_ascii_uppercase())
        .collect();

    let (mut prioritized, rest): (Vec<CountryRecord>, Vec<CountryRecord>) = all
        .iter()
        .partition(|country| priority.contains(country.code()));
    trace!("{} of {} countries prioritized", prioritized.len(), all.len());

    prioritized.extend(rest);
    prioritized
}

/// Filters `all` with the default name/dial-code substring matcher.
/// An empty query returns `all` unchanged.
pub fn search_countries(all: &[CountryRecord], query: &str) -> Vec<CountryRecord> {
    search_countries_with(&SubstringMatcher, all, query)
}

/// Filters `all` with a custom matcher, keeping source order.
pub fn search_countries_with(
    matcher: &dyn CountryMatcherApi,
    all: &[CountryRecord],
    query: &str,
) -> Vec<CountryRecord> {
    if query.is_empty() {
        return all.to_vec();
    }
    let query = query.to_lowercase();
    all.iter()
        .filter(|country| matcher.match_country(country, &query))
        .copied()
        .collect()
}

/// Immutable country catalog.
///
/// Guaranteed non-empty, with unique two-letter codes and a template with
/// at least one digit slot for every record.
pub struct CountryRegistry {
    /// An API for search matching.
    matcher_api: Box<dyn CountryMatcherApi>,

    /// Records in registration order.
    countries: Vec<CountryRecord>,
}

impl CountryRegistry {
    pub(super) fn new() -> Self {
        match Self::from_records(COUNTRY_DATA.iter().copied()) {
            Err(err) => {
                let err_message = format!("Could not load compiled-in country data: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(registry) => registry,
        }
    }

    /// Builds a registry from caller supplied records, checking every
    /// catalog invariant. Registration order is the iteration order.
    pub fn from_records(
        records: impl IntoIterator<Item = CountryRecord>,
    ) -> Result<Self, RegistryError> {
        let countries: Vec<CountryRecord> = records.into_iter().collect();
        if countries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen_codes = HashSet::with_capacity(countries.len());
        for country in &countries {
            check_record(country)?;
            if !seen_codes.insert(country.code()) {
                return Err(RegistryError::DuplicateCountryCode(country.code().to_owned()));
            }
        }
        debug!("Country registry loaded with {} countries", countries.len());

        Ok(Self {
            matcher_api: Box::new(SubstringMatcher::new()),
            countries,
        })
    }

    /// Replaces the search predicate used by [`Self::search`].
    pub fn with_matcher(mut self, matcher: Box<dyn CountryMatcherApi>) -> Self {
        self.matcher_api = matcher;
        self
    }

    /// Full catalog in registration order. The same slice is returned on
    /// every call.
    pub fn get_all(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Always false, a registry cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// The first registered country.
    pub fn default_country(&self) -> &CountryRecord {
        // non-empty is checked in from_records
        &self.countries[0]
    }

    /// Looks a country up by its two-letter code, ignoring ASCII case.
    pub fn get_country_for_code(&self, code: &str) -> Option<&CountryRecord> {
        self.countries
            .iter()
            .find(|country| country.code().eq_ignore_ascii_case(code))
    }

    /// Whole catalog with `priority_codes` surfaced first.
    pub fn reorder_with_priority<S: AsRef<str>>(&self, priority_codes: &[S]) -> Vec<CountryRecord> {
        reorder_with_priority(&self.countries, priority_codes)
    }

    /// Searches the whole catalog with this registry's matcher.
    pub fn search(&self, query: &str) -> Vec<CountryRecord> {
        self.search_in(&self.countries, query)
    }

    /// Searches an arbitrary list (usually a reordered catalog) with this
    /// registry's matcher.
    pub fn search_in(&self, countries: &[CountryRecord], query: &str) -> Vec<CountryRecord> {
        search_countries_with(self.matcher_api.as_ref(), countries, query)
    }
}

fn check_record(country: &CountryRecord) -> Result<(), RegistryError> {
    let code = country.code();
    if !REGISTRY_REGEXPS.country_code.full_match(code) {
        return Err(RegistryError::InvalidCountryCode(code.to_owned()));
    }
    if country.name().trim().is_empty() {
        return Err(RegistryError::EmptyName(code.to_owned()));
    }
    if !REGISTRY_REGEXPS.dial_code.full_match(country.dial_code()) {
        return Err(RegistryError::InvalidDialCode {
            code: code.to_owned(),
            dial_code: country.dial_code().to_owned(),
        });
    }
    if !country.format().contains(DIGIT_SLOT) {
        return Err(RegistryError::TemplateWithoutDigitSlots {
            code: code.to_owned(),
            format: country.format().to_owned(),
        });
    }
    Ok(())
}
