//! Process-wide catalog configuration
//!
//! Runs in its own test binary so `init` happens before anything else
//! touches the shared catalog.

use a3s_cron_describe::{describe, init, shared, CatalogConfig, DescriptionError, DescriptionOptions};

#[test]
fn test_init_configures_free_describe() {
    let config = CatalogConfig {
        default_locale: "de".to_string(),
        locales: Some(vec!["de".to_string(), "en".to_string()]),
    };
    let catalog = init(&config).unwrap();
    assert_eq!(catalog.default_locale(), "de");
    assert!(std::ptr::eq(catalog, shared()));
    assert_eq!(shared().len(), 2);

    assert_eq!(
        describe("*/5 * * * *", &DescriptionOptions::default()).unwrap(),
        "Alle 5 Minuten"
    );
    assert_eq!(
        describe("*/5 * * * *", &DescriptionOptions::default().with_locale("en")).unwrap(),
        "Every 5 minutes"
    );

    assert_eq!(
        init(&CatalogConfig::default()).err(),
        Some(DescriptionError::CatalogAlreadyInitialized)
    );
}
