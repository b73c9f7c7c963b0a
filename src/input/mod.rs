mod config;
mod country_picker;
pub mod errors;
mod phone_input;

pub use config::{CountrySelection, PhoneInputConfig};
pub use country_picker::CountryPicker;
pub use phone_input::{PhoneInput, PhoneNumberChange};
