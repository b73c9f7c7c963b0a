pub(crate) mod helper_constants;
mod format_template;
mod formatter;
mod normalize;
mod validator;

use std::sync::LazyLock;

pub use format_template::{FormatTemplate, TemplateToken};
pub use formatter::{format_digits, PhoneFormatter};
pub use normalize::{normalize_national_number, strip_non_digits, strip_trunk_prefix};
pub use validator::{count_supplied_digits, has_required_digits};

pub static PHONE_FORMATTER: LazyLock<PhoneFormatter> = LazyLock::new(|| {
    PhoneFormatter::new()
});

/// Formats digit-only input with a `#` template using the shared formatter.
///
/// ```
/// use intl_phone_input::format_phone_number;
///
/// assert_eq!(format_phone_number("5551234567", "(###) ###-####"), "(555) 123-4567");
/// assert_eq!(format_phone_number("5551", "(###) ###-####"), "(555) 1");
/// ```
pub fn format_phone_number(digits: &str, template: &str) -> String {
    PHONE_FORMATTER.format(digits, template)
}

/// Digit-count validation using the shared formatter.
///
/// ```
/// use intl_phone_input::validate_phone_number;
///
/// assert!(validate_phone_number("123-4567", "###-####"));
/// assert!(!validate_phone_number("12-34", "##-##-##"));
/// ```
pub fn validate_phone_number(input: &str, template: &str) -> bool {
    PHONE_FORMATTER.validate(input, template)
}
