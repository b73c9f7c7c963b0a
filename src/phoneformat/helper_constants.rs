/// Marks one digit position inside a format template. Every other
/// template character is a literal separator.
pub const DIGIT_SLOT: char = '#';

/// National trunk prefix removed from the start of typed input.
pub const TRUNK_PREFIX: &'static str = "0";

/// Shown in place of every digit slot when rendering a placeholder,
/// e.g. `(###) ###-####` becomes `(000) 000-0000`.
pub const PLACEHOLDER_DIGIT: &'static str = "0";

/// Put between the dial code and the formatted national number.
pub const DIAL_CODE_SEPARATOR: &'static str = " ";

// Registry shape checks. Patterns are unanchored and used with full_match.
pub const VALID_COUNTRY_CODE: &'static str = "[A-Z]{2}";
// "+1", "+44", "+1-684", "+44 1481"
pub const VALID_DIAL_CODE: &'static str = r"\+?[0-9]{1,4}(?:[ \-]?[0-9]{1,4})?";

/// Initial capacity of the parsed template cache, enough for the
/// compiled-in catalog.
pub const TEMPLATE_CACHE_CAPACITY: usize = 64;
