use super::{country_code::CountryCode, init_logging};
use crate::{
    reorder_with_priority, search_countries, CountryMatcherApi, CountryRecord, CountryRegistry,
    RegistryError, COUNTRY_REGISTRY,
};

fn codes(countries: &[CountryRecord]) -> Vec<&'static str> {
    countries.iter().map(|country| country.code()).collect()
}

fn get_registry() -> CountryRegistry {
    init_logging();
    CountryRegistry::from_records(CountryCode::sample()).expect("Sample catalog should be valid")
}

#[test]
fn compiled_in_catalog_is_valid() {
    init_logging();
    let all = COUNTRY_REGISTRY.get_all();
    assert!(!all.is_empty());
    assert!(CountryRegistry::from_records(all.iter().copied()).is_ok());
    for country in all {
        assert!(country.required_digits() > 0, "{}", country.code());
    }
}

#[test]
fn get_all_is_stable() {
    init_logging();
    let first = COUNTRY_REGISTRY.get_all();
    let second = COUNTRY_REGISTRY.get_all();
    assert!(std::ptr::eq(first, second));
    assert_eq!(COUNTRY_REGISTRY.default_country(), &first[0]);
}

#[test]
fn registration_order_is_kept() {
    let registry = get_registry();
    assert_eq!(codes(registry.get_all()), ["US", "CA", "FR", "DE"]);
    assert_eq!(registry.len(), 4);
    assert!(!registry.is_empty());
    assert_eq!(registry.default_country().code(), "US");
}

#[test]
fn get_country_for_code_ignores_case() {
    let registry = get_registry();
    assert_eq!(registry.get_country_for_code("fr"), Some(&CountryCode::fr()));
    assert_eq!(registry.get_country_for_code("DE"), Some(&CountryCode::de()));
    assert_eq!(registry.get_country_for_code("GB"), None);
}

#[test]
fn reorder_is_stable_partition() {
    init_logging();
    let all = CountryCode::sample();
    let reordered = reorder_with_priority(&all, &["DE", "FR"]);
    assert_eq!(codes(&reordered), ["FR", "DE", "US", "CA"]);
}

#[test]
fn reorder_ignores_unknown_codes_and_case() {
    init_logging();
    let all = CountryCode::sample();
    let reordered = reorder_with_priority(&all, &["zz", "ca", "CA"]);
    assert_eq!(codes(&reordered), ["CA", "US", "FR", "DE"]);

    let no_priority: [&str; 0] = [];
    assert_eq!(reorder_with_priority(&all, &no_priority), all);
    assert!(reorder_with_priority(&[], &["US"]).is_empty());
}

#[test]
fn reorder_keeps_every_record() {
    init_logging();
    let all = COUNTRY_REGISTRY.get_all();
    let reordered = COUNTRY_REGISTRY.reorder_with_priority(&["GB", "US", "DE"]);
    assert_eq!(reordered.len(), all.len());
    assert_eq!(codes(&reordered[..3]), ["US", "DE", "GB"]);
    for country in all {
        assert_eq!(reordered.iter().filter(|c| *c == country).count(), 1);
    }
}

#[test]
fn search_by_name_ignores_case() {
    init_logging();
    let all = CountryCode::sample();
    assert_eq!(codes(&search_countries(&all, "fr")), ["FR"]);
    assert_eq!(codes(&search_countries(&all, "FRANCE")), ["FR"]);
    // contains, not prefix
    assert_eq!(codes(&search_countries(&all, "many")), ["DE"]);
    assert_eq!(codes(&search_countries(&all, "an")), ["CA", "FR", "DE"]);
}

#[test]
fn search_by_dial_code() {
    init_logging();
    let all = CountryCode::sample();
    assert_eq!(codes(&search_countries(&all, "+1")), ["US", "CA"]);
    assert_eq!(codes(&search_countries(&all, "49")), ["DE"]);
}

#[test]
fn search_empty_and_unmatched() {
    init_logging();
    let all = CountryCode::sample();
    assert_eq!(search_countries(&all, ""), all);
    assert!(search_countries(&all, "atlantis").is_empty());
}

#[test]
fn search_compiled_in_catalog() {
    init_logging();
    let found = COUNTRY_REGISTRY.search("fr");
    assert!(found.iter().any(|country| country.name() == "France"));
    assert_eq!(COUNTRY_REGISTRY.search("").len(), COUNTRY_REGISTRY.len());
}

struct CodeMatcher;

impl CountryMatcherApi for CodeMatcher {
    fn match_country(&self, country: &CountryRecord, query: &str) -> bool {
        country.code().eq_ignore_ascii_case(query)
    }
}

#[test]
fn custom_matcher() {
    let registry = get_registry().with_matcher(Box::new(CodeMatcher));
    assert_eq!(codes(&registry.search("De")), ["DE"]);
    assert!(registry.search("germany").is_empty());
    let reordered = registry.reorder_with_priority(&["DE"]);
    assert_eq!(codes(&registry.search_in(&reordered, "us")), ["US"]);
}

#[test]
fn from_records_rejects_broken_catalogs() {
    init_logging();
    assert_eq!(
        CountryRegistry::from_records(Vec::<CountryRecord>::new()).err(),
        Some(RegistryError::Empty)
    );
    assert_eq!(
        CountryRegistry::from_records([CountryCode::us(), CountryCode::us()]).err(),
        Some(RegistryError::DuplicateCountryCode("US".to_owned()))
    );
    assert_eq!(
        CountryRegistry::from_records([CountryRecord::new("usa", "USA", "+1", "###")]).err(),
        Some(RegistryError::InvalidCountryCode("usa".to_owned()))
    );
    assert_eq!(
        CountryRegistry::from_records([CountryRecord::new("XX", " ", "+1", "###")]).err(),
        Some(RegistryError::EmptyName("XX".to_owned()))
    );
    assert_eq!(
        CountryRegistry::from_records([CountryRecord::new("XX", "Nowhere", "1a", "###")]).err(),
        Some(RegistryError::InvalidDialCode {
            code: "XX".to_owned(),
            dial_code: "1a".to_owned()
        })
    );
    assert_eq!(
        CountryRegistry::from_records([CountryRecord::new("XX", "Nowhere", "+1", "--")]).err(),
        Some(RegistryError::TemplateWithoutDigitSlots {
            code: "XX".to_owned(),
            format: "--".to_owned()
        })
    );
}

#[test]
fn from_records_accepts_compound_dial_codes() {
    init_logging();
    let registry = CountryRegistry::from_records([CountryCode::as_(), CountryCode::gb()]).unwrap();
    assert_eq!(codes(&registry.search("684")), ["AS"]);
}
