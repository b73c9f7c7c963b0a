//! Headless core of an international phone-number input: a country
//! catalog with priority ordering and search, as-you-type formatting over
//! `#` templates and digit-count validation.
//!
//! ```
//! use intl_phone_input::{PhoneInput, PhoneInputConfig, COUNTRY_REGISTRY};
//!
//! let config = PhoneInputConfig::new().with_initial_country("US");
//! let mut input = PhoneInput::new(&COUNTRY_REGISTRY, &config).unwrap();
//!
//! assert_eq!(input.handle_text_change("05551234567"), "(555) 123-4567");
//! assert!(input.handle_confirm().is_valid);
//! ```

mod country;
mod input;
mod interfaces;
mod phoneformat;
mod substring_matcher;
mod template_cache;
pub(crate) mod regex_util;
pub(crate) mod string_util;

pub use country::{
    errors::RegistryError, reorder_with_priority, search_countries, search_countries_with,
    CountryRecord, CountryRegistry, COUNTRY_REGISTRY,
};
pub use input::{
    errors::PhoneInputError, CountryPicker, CountrySelection, PhoneInput, PhoneInputConfig,
    PhoneNumberChange,
};
pub use interfaces::CountryMatcherApi;
pub use phoneformat::{
    count_supplied_digits, format_digits, format_phone_number, has_required_digits,
    normalize_national_number, strip_non_digits, strip_trunk_prefix, validate_phone_number,
    FormatTemplate, PhoneFormatter, TemplateToken, PHONE_FORMATTER,
};
pub use substring_matcher::SubstringMatcher;
pub use template_cache::TemplateCache;

#[cfg(test)]
mod tests;
