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

use crate::{interfaces, CountryRecord};

/// Default matcher: the query is contained in the lowercased country name,
/// or in the dial code as typed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl SubstringMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl interfaces::CountryMatcherApi for SubstringMatcher {
    fn match_country(&self, country: &CountryRecord, query: &str) -> bool {
        country.name().to_lowercase().contains(query) || country.dial_code().contains(query)
    }
}
