mod country_data;
mod country_record;
pub mod errors;
mod registry;
mod registry_regexps;

use std::sync::LazyLock;

pub use country_record::CountryRecord;
pub use registry::{
    reorder_with_priority, search_countries, search_countries_with, CountryRegistry,
};

/// Registry over the compiled-in catalog.
pub static COUNTRY_REGISTRY: LazyLock<CountryRegistry> = LazyLock::new(|| {
    CountryRegistry::new()
});
