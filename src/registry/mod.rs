//! 翻訳設定のレジストリ
//!
//! 所有者タイプごとに 1 つの [`TranslationSetConfig`] を保持します。
//! セットアップ時に登録し、以降は読み取りのみです。

/// レジストリのエラー
mod error;
/// 所有者タイプごとのオプション
mod options;

use std::collections::HashMap;

pub use error::ConfigurationError;
pub use options::{
    TranslationSetConfig,
    VALID_OPTION_KEYS,
};
use serde_json::{
    Map,
    Value,
};

/// 所有者タイプ名から翻訳設定を引くテーブル
#[derive(Debug, Clone, Default)]
pub struct TranslationSetRegistry {
    /// owner type → config
    configs: HashMap<String, TranslationSetConfig>,
}

impl TranslationSetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self { configs: HashMap::new() }
    }

    /// 所有者タイプの設定を登録する
    ///
    /// # Errors
    /// - [`TranslationSetConfig::validate`] のエラー
    /// - [`ConfigurationError::AlreadyRegistered`]: 登録済みの所有者タイプ
    pub fn register(&mut self, config: TranslationSetConfig) -> Result<(), ConfigurationError> {
        config.validate()?;

        if self.configs.contains_key(config.owner_type()) {
            return Err(ConfigurationError::AlreadyRegistered {
                owner_type: config.owner_type().to_string(),
            });
        }

        tracing::debug!(
            owner_type = config.owner_type(),
            attributes = ?config.attribute_names(),
            fallback = config.fallback(),
            writer = config.writer(),
            "Registered translated attributes"
        );
        self.configs.insert(config.owner_type().to_string(), config);
        Ok(())
    }

    /// オプションマップを解析して登録する
    ///
    /// # Errors
    /// [`TranslationSetConfig::from_options`] と [`TranslationSetRegistry::register`] を参照。
    pub fn register_options<I, S>(
        &mut self,
        owner_type: &str,
        attribute_names: I,
        options: &Map<String, Value>,
    ) -> Result<(), ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = TranslationSetConfig::from_options(owner_type, attribute_names, options)?;
        self.register(config)
    }

    #[must_use]
    pub fn get(&self, owner_type: &str) -> Option<&TranslationSetConfig> {
        self.configs.get(owner_type)
    }

    /// [`get`](Self::get) と同様だが、未登録の所有者タイプを設定エラーとして扱う
    ///
    /// # Errors
    /// [`ConfigurationError::NotRegistered`]
    pub fn fetch(&self, owner_type: &str) -> Result<&TranslationSetConfig, ConfigurationError> {
        self.get(owner_type).ok_or_else(|| ConfigurationError::NotRegistered {
            owner_type: owner_type.to_string(),
        })
    }

    #[must_use]
    pub fn contains(&self, owner_type: &str) -> bool {
        self.configs.contains_key(owner_type)
    }

    /// 登録済みの所有者タイプ（ソート済み）
    #[must_use]
    pub fn owner_types(&self) -> Vec<&str> {
        let mut owner_types: Vec<&str> = self.configs.keys().map(String::as_str).collect();
        owner_types.sort_unstable();
        owner_types
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;
    use crate::test_utils::init_tracing;

    #[fixture]
    fn registry() -> TranslationSetRegistry {
        init_tracing();
        let mut registry = TranslationSetRegistry::new();
        registry
            .register(TranslationSetConfig::new("Article", ["description", "text"]).with_writer(true))
            .unwrap();
        registry
    }

    #[rstest]
    fn get_returns_registered_config(registry: TranslationSetRegistry) {
        let config = registry.get("Article").unwrap();

        assert_that!(config.attribute_names(), elements_are![eq("description"), eq("text")]);
        assert_that!(config.autosave(), eq(true));
        assert_that!(registry.contains("Team"), eq(false));
    }

    #[rstest]
    fn register_is_write_once(mut registry: TranslationSetRegistry) {
        let result = registry.register(TranslationSetConfig::new("Article", ["title"]));

        assert_that!(
            result,
            err(eq(&ConfigurationError::AlreadyRegistered { owner_type: "Article".to_string() }))
        );
        assert_that!(registry.get("Article").unwrap().declares("title"), eq(false));
    }

    #[rstest]
    fn register_validates(mut registry: TranslationSetRegistry) {
        let result = registry.register(TranslationSetConfig::new("Team", Vec::<String>::new()));

        assert_that!(result, err(anything()));
        assert_that!(registry.len(), eq(1));
    }

    #[rstest]
    fn register_options_rejects_unknown_keys(mut registry: TranslationSetRegistry) {
        let Value::Object(options) = json!({"fallback": true, "readr": false}) else {
            unreachable!();
        };

        let result = registry.register_options("Team", ["text"], &options);

        assert_that!(
            result,
            err(eq(&ConfigurationError::UnknownOptions {
                owner_type: "Team".to_string(),
                keys: vec!["readr".to_string()],
            }))
        );
        assert_that!(registry.contains("Team"), eq(false));
    }

    #[rstest]
    fn fetch_reports_unregistered_owner(registry: TranslationSetRegistry) {
        assert_that!(registry.fetch("Article"), ok(anything()));
        assert_that!(
            registry.fetch("Team"),
            err(eq(&ConfigurationError::NotRegistered { owner_type: "Team".to_string() }))
        );
    }

    #[rstest]
    fn owner_types_are_sorted(mut registry: TranslationSetRegistry) {
        registry.register(TranslationSetConfig::new("Team", ["text"])).unwrap();
        registry.register(TranslationSetConfig::new("Organization", ["text"])).unwrap();

        assert_that!(
            registry.owner_types(),
            elements_are![eq(&"Article"), eq(&"Organization"), eq(&"Team")]
        );
    }
}
