use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use crate::locale::{
    Locale,
    LocaleError,
    parse_locales,
};
use crate::registry::{
    ConfigurationError,
    TranslationSetConfig,
    TranslationSetRegistry,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "availableLocales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Locale(#[from] LocaleError),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationSettings {
    /// Second tier of the reader fallback.
    pub default_locale: String,

    /// Locales offered by `all_translations`, in display order.
    pub available_locales: Vec<String>,

    /// Owner type → translated attribute declaration.
    pub models: BTreeMap<String, ModelSettings>,
}

/// Translated attributes of one owner type plus its option map.
///
/// Options stay loosely typed here so that unknown keys are reported by the registry
/// instead of being silently dropped by serde.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    #[serde(default)]
    pub attributes: Vec<String>,

    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl TranslationSettings {
    /// # Errors
    /// - Invalid default locale
    /// - Empty, invalid or duplicated available locales
    /// - Invalid model declaration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Locale::new(self.default_locale.as_str()) {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("{e}. Example: \"en\""),
            ));
        }

        if self.available_locales.is_empty() {
            errors.push(ValidationError::new(
                "availableLocales",
                "At least one locale is required. Example: [\"en\"]",
            ));
        }

        for (index, code) in self.available_locales.iter().enumerate() {
            if let Err(e) = Locale::new(code.as_str()) {
                errors.push(ValidationError::new(format!("availableLocales[{index}]"), e.to_string()));
            } else if self.available_locales.iter().take(index).any(|other| other == code) {
                errors.push(ValidationError::new(
                    format!("availableLocales[{index}]"),
                    format!("Duplicate locale '{code}'"),
                ));
            }
        }

        for (owner_type, model) in &self.models {
            if let Err(e) = model.to_config(owner_type) {
                errors.push(ValidationError::new(format!("models.{owner_type}"), e.to_string()));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// # Errors
    /// Returns [`LocaleError`] if `defaultLocale` is malformed.
    pub fn default_locale(&self) -> Result<Locale, LocaleError> {
        Locale::new(self.default_locale.as_str())
    }

    /// # Errors
    /// Returns the first [`LocaleError`] in `availableLocales`.
    pub fn available_locales(&self) -> Result<Vec<Locale>, LocaleError> {
        parse_locales(self.available_locales.iter().map(String::as_str))
    }

    /// Registers every declared model.
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`].
    pub fn build_registry(&self) -> Result<TranslationSetRegistry, ConfigurationError> {
        let mut registry = TranslationSetRegistry::new();
        for (owner_type, model) in &self.models {
            registry.register(model.to_config(owner_type)?)?;
        }
        Ok(registry)
    }
}

impl ModelSettings {
    /// # Errors
    /// See [`TranslationSetConfig::from_options`].
    pub fn to_config(&self, owner_type: &str) -> Result<TranslationSetConfig, ConfigurationError> {
        TranslationSetConfig::from_options(owner_type, self.attributes.iter().cloned(), &self.options)
    }
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            available_locales: vec!["en".to_string()],
            models: BTreeMap::new(),
        }
    }
}
