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

use crate::{CountryRecord, CountryRegistry};

/// State of the country picker sheet: visibility, the search query and the
/// catalog in display order. Rendering is left to the caller.
pub struct CountryPicker<'r> {
    registry: &'r CountryRegistry,
    /// Catalog with priority countries first.
    countries: Vec<CountryRecord>,
    query: String,
    is_open: bool,
}

impl<'r> CountryPicker<'r> {
    pub fn new<S: AsRef<str>>(registry: &'r CountryRegistry, priority_codes: &[S]) -> Self {
        Self {
            registry,
            countries: registry.reorder_with_priority(priority_codes),
            query: String::new(),
            is_open: false,
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hides the sheet. The query is kept for the next opening.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        trace!("Country picker query set to {:?}", self.query);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Catalog in display order, ignoring the query.
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Countries matching the current query, in display order.
    pub fn filtered_countries(&self) -> Vec<CountryRecord> {
        self.registry.search_in(&self.countries, &self.query)
    }
}
