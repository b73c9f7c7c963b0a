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

use std::sync::LazyLock;

use regex::Regex;

use crate::phoneformat::helper_constants::{VALID_COUNTRY_CODE, VALID_DIAL_CODE};

pub(super) static REGISTRY_REGEXPS: LazyLock<RegistryRegExps> =
    LazyLock::new(RegistryRegExps::new);

pub(super) struct RegistryRegExps {
    /// Two uppercase ASCII letters.
    pub country_code: Regex,
    /// Digits with an optional leading `+` and at most one inner space or
    /// hyphen, as in `+1-684`.
    pub dial_code: Regex,
}

impl RegistryRegExps {
    fn new() -> Self {
        Self {
            country_code: Regex::new(VALID_COUNTRY_CODE).expect("Invalid constant pattern!"),
            dial_code: Regex::new(VALID_DIAL_CODE).expect("Invalid constant pattern!"),
        }
    }
}
