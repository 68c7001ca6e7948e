//! Locale catalog
//!
//! Holds the registered locales keyed by identifier, in registration order,
//! and resolves a requested identifier to a locale. Unknown identifiers fall
//! back to the first registered locale.

use crate::descriptor::ExpressionDescriptor;
use crate::error::{DescriptionError, Result};
use crate::locale::{self, Locale};
use crate::types::{CatalogConfig, DescriptionOptions};
use indexmap::IndexMap;
use std::sync::{Arc, OnceLock};

/// Registry of available locales
#[derive(Clone)]
pub struct LocaleCatalog {
    locales: IndexMap<String, Arc<dyn Locale>>,
    default_locale: String,
}

impl LocaleCatalog {
    /// Catalog with no locales; `resolve` fails until one is registered
    pub fn empty() -> Self {
        Self {
            locales: IndexMap::new(),
            default_locale: "en".to_string(),
        }
    }

    /// Catalog with every bundled locale, English first
    pub fn bundled() -> Self {
        let mut catalog = Self::empty();
        for locale in locale::bundled() {
            catalog.register(locale);
        }
        tracing::info!(locales = catalog.len(), "Loaded bundled locales");
        catalog
    }

    /// Catalog restricted and defaulted by configuration
    ///
    /// Fails if a listed locale is not bundled or the default locale is not
    /// part of the resulting catalog.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut catalog = Self::empty();
        let bundled = locale::bundled();

        match &config.locales {
            Some(ids) => {
                for id in ids {
                    let locale = bundled
                        .iter()
                        .find(|l| l.id() == id.as_str())
                        .cloned()
                        .ok_or_else(|| DescriptionError::LocaleNotFound(id.clone()))?;
                    catalog.register(locale);
                }
            }
            None => {
                for locale in bundled {
                    catalog.register(locale);
                }
            }
        }

        if !catalog.locales.contains_key(&config.default_locale) {
            return Err(DescriptionError::LocaleNotFound(
                config.default_locale.clone(),
            ));
        }
        catalog.default_locale = config.default_locale.clone();

        tracing::info!(
            locales = catalog.len(),
            default_locale = %catalog.default_locale,
            "Loaded locale catalog"
        );
        Ok(catalog)
    }

    /// Register a locale, replacing any existing one with the same id
    pub fn register(&mut self, locale: Arc<dyn Locale>) {
        let id = locale.id().to_string();
        tracing::debug!(locale = %id, "Registered locale");
        self.locales.insert(id, locale);
    }

    /// Set the locale used when a call names none
    pub fn with_default_locale(mut self, id: impl Into<String>) -> Self {
        self.default_locale = id.into();
        self
    }

    /// Default locale identifier
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Look up a locale by exact identifier
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Locale>> {
        self.locales.get(id)
    }

    /// Registered identifiers in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Registered locales in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Locale>> {
        self.locales.values()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Resolve a locale, falling back to the first registered one
    ///
    /// `None` resolves the default locale.
    pub fn resolve(&self, id: Option<&str>) -> Result<&Arc<dyn Locale>> {
        let requested = id.unwrap_or(&self.default_locale);
        if let Some(locale) = self.locales.get(requested) {
            return Ok(locale);
        }

        match self.locales.first() {
            Some((fallback, locale)) => {
                tracing::warn!(
                    requested,
                    fallback = %fallback,
                    "Locale not found, using fallback"
                );
                Ok(locale)
            }
            None => Err(DescriptionError::LocaleNotFound(requested.to_string())),
        }
    }

    /// Describe an expression with the locale named in `options`
    pub fn describe(&self, expression: &str, options: &DescriptionOptions) -> Result<String> {
        let locale = self.resolve(options.locale.as_deref())?;
        ExpressionDescriptor::new(locale.as_ref(), options).describe(expression)
    }
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl std::fmt::Debug for LocaleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleCatalog")
            .field("locales", &self.locales.keys().collect::<Vec<_>>())
            .field("default_locale", &self.default_locale)
            .finish()
    }
}

static SHARED: OnceLock<LocaleCatalog> = OnceLock::new();

/// Build the process-wide catalog from configuration
///
/// Must run before the first call to [`shared`]; once the catalog exists it
/// cannot be replaced and this fails with `CatalogAlreadyInitialized`.
pub fn init(config: &CatalogConfig) -> Result<&'static LocaleCatalog> {
    let catalog = LocaleCatalog::from_config(config)?;
    SHARED
        .set(catalog)
        .map_err(|_| DescriptionError::CatalogAlreadyInitialized)?;
    Ok(shared())
}

/// Process-wide catalog, every bundled locale unless [`init`] ran first
pub fn shared() -> &'static LocaleCatalog {
    SHARED.get_or_init(LocaleCatalog::bundled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::English;

    #[test]
    fn test_bundled_registration_order() {
        let catalog = LocaleCatalog::bundled();
        assert_eq!(catalog.ids().next(), Some("en"));
        assert_eq!(catalog.len(), 37);
        assert!(catalog.get("pt_BR").is_some());
        assert!(catalog.get("pt_PT").is_some());
        assert!(catalog.get("bg").is_some());
        assert!(catalog.get("zh_TW").is_some());
    }

    #[test]
    fn test_resolve_falls_back_to_first() {
        let catalog = LocaleCatalog::bundled();
        assert_eq!(catalog.resolve(Some("xx")).unwrap().id(), "en");
        assert_eq!(catalog.resolve(Some("de")).unwrap().id(), "de");
        assert_eq!(catalog.resolve(None).unwrap().id(), "en");
    }

    #[test]
    fn test_resolve_on_empty_catalog() {
        let catalog = LocaleCatalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.resolve(Some("en")).err(),
            Some(DescriptionError::LocaleNotFound("en".to_string()))
        );
        assert!(catalog.resolve(None).is_err());
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut catalog = LocaleCatalog::empty();
        catalog.register(Arc::new(English));
        catalog.register(Arc::new(English));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_default_locale_drives_resolution() {
        let catalog = LocaleCatalog::bundled().with_default_locale("fr");
        assert_eq!(catalog.default_locale(), "fr");
        assert_eq!(catalog.resolve(None).unwrap().id(), "fr");
    }

    #[test]
    fn test_from_config_restricts_locales() {
        let config = CatalogConfig {
            default_locale: "de".to_string(),
            locales: Some(vec!["de".to_string(), "ja".to_string()]),
        };
        let catalog = LocaleCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["de", "ja"]);
        assert_eq!(catalog.resolve(Some("en")).unwrap().id(), "de");
    }

    #[test]
    fn test_from_config_rejects_unknown() {
        let config = CatalogConfig {
            default_locale: "en".to_string(),
            locales: Some(vec!["en".to_string(), "tlh".to_string()]),
        };
        assert_eq!(
            LocaleCatalog::from_config(&config).unwrap_err(),
            DescriptionError::LocaleNotFound("tlh".to_string())
        );

        let config = CatalogConfig {
            default_locale: "sv".to_string(),
            locales: Some(vec!["en".to_string()]),
        };
        assert!(LocaleCatalog::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_deserializes() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{"defaultLocale": "es", "locales": ["es", "en"]}"#).unwrap();
        let catalog = LocaleCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.default_locale(), "es");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_describe_uses_requested_locale() {
        let catalog = LocaleCatalog::bundled();
        let opts = DescriptionOptions::default().with_locale("de");
        let german = catalog.describe("*/5 * * * *", &opts).unwrap();
        let english = catalog
            .describe("*/5 * * * *", &DescriptionOptions::default())
            .unwrap();
        assert_eq!(english, "Every 5 minutes");
        assert_ne!(german, english);
    }

    #[test]
    fn test_shared_is_bundled() {
        assert_eq!(shared().len(), 37);
        assert!(std::ptr::eq(shared(), shared()));
        assert_eq!(
            init(&CatalogConfig::default()).err(),
            Some(DescriptionError::CatalogAlreadyInitialized)
        );
    }
}
