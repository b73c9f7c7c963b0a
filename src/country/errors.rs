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

use thiserror::Error;

/// Reasons a set of records cannot form a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Registry must contain at least one country")]
    Empty,
    #[error("Invalid country code '{0}', expected two uppercase letters")]
    InvalidCountryCode(String),
    #[error("Country code '{0}' is registered more than once")]
    DuplicateCountryCode(String),
    #[error("Country '{0}' has an empty name")]
    EmptyName(String),
    #[error("Country '{code}' has an invalid dial code '{dial_code}'")]
    InvalidDialCode { code: String, dial_code: String },
    #[error("Format '{format}' of country '{code}' has no digit slots")]
    TemplateWithoutDigitSlots { code: String, format: String },
}
