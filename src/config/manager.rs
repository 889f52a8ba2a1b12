//! 設定管理を行うモジュール

use std::path::PathBuf;

use super::{
    ConfigError,
    TranslationSettings,
    loader,
};
use crate::locale::Locale;
use crate::registry::TranslationSetRegistry;

/// 設定管理を行う
///
/// 設定ファイルの内容に加えて、検証済みのロケールと登録済みのレジストリを保持します。
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: TranslationSettings,

    /// ワークスペースのルートパス
    workspace_root: Option<PathBuf>,

    /// デフォルトロケール（フォールバックの第 2 段階）
    default_locale: Locale,

    /// 利用可能なロケール（設定順）
    available_locales: Vec<Locale>,

    /// 所有者タイプごとの翻訳設定
    registry: TranslationSetRegistry,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_settings: TranslationSettings::default(),
            workspace_root: None,
            default_locale: Locale::default(),
            available_locales: vec![Locale::default()],
            registry: TranslationSetRegistry::new(),
        }
    }

    /// 設定を読み込む
    ///
    /// # Arguments
    /// * `workspace_root` - ワークスペースのルートパス
    ///
    /// # Returns
    /// - `Ok(())`: 設定の読み込みとバリデーション成功
    /// - `Err(ConfigError)`: エラー
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        // ワークスペースの設定を読み込み
        let settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(TranslationSettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            TranslationSettings::default()
        };

        self.apply(settings)?;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を更新する
    ///
    /// # Errors
    /// - バリデーションエラー
    /// - 翻訳設定の登録エラー
    pub fn update_settings(&mut self, new_settings: TranslationSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        self.apply(new_settings)?;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// バリデーション後、ロケールとレジストリを構築して設定を置き換える
    ///
    /// 途中で失敗した場合、現在の設定は変更されません。
    fn apply(&mut self, settings: TranslationSettings) -> Result<(), ConfigError> {
        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        let default_locale = settings.default_locale()?;
        let available_locales = settings.available_locales()?;
        let registry = settings.build_registry()?;

        // 設定を保存
        self.current_settings = settings;
        self.default_locale = default_locale;
        self.available_locales = available_locales;
        self.registry = registry;

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &TranslationSettings {
        &self.current_settings
    }

    /// ワークスペースルートを取得
    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// デフォルトロケールを取得
    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// 利用可能なロケールを取得
    #[must_use]
    pub fn available_locales(&self) -> &[Locale] {
        &self.available_locales
    }

    /// 翻訳設定のレジストリを取得
    #[must_use]
    pub const fn registry(&self) -> &TranslationSetRegistry {
        &self.registry
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::ModelSettings;
    use crate::config::loader::CONFIG_FILE_NAME;
    use crate::test_utils::init_tracing;

    /// new: デフォルト値で作成される
    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.default_locale().as_str(), "en");
        assert_eq!(manager.available_locales().len(), 1);
        assert!(manager.registry().is_empty());
        assert!(manager.workspace_root().is_none());
    }

    /// load_settings: workspace_root が None の場合
    #[rstest]
    fn test_load_settings_without_workspace() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().default_locale, "en");
        assert!(manager.workspace_root().is_none());
    }

    /// load_settings: 設定ファイルがある場合
    #[rstest]
    fn test_load_settings_with_config_file() {
        init_tracing();
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{
            "defaultLocale": "en",
            "availableLocales": ["ru", "en", "es"],
            "models": {"Team": {"attributes": ["text"], "fallback": true, "nil": null}}
        }"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        let locales: Vec<&str> = manager.available_locales().iter().map(Locale::as_str).collect();
        assert_eq!(locales, vec!["ru", "en", "es"]);
        assert!(manager.registry().get("Team").unwrap().fallback());
        assert!(manager.workspace_root().is_some());
    }

    /// load_settings: 設定ファイルがない場合はデフォルト値
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().default_locale, "en");
    }

    /// load_settings: 不明なオプションがある場合はエラー
    #[rstest]
    fn test_load_settings_with_unknown_option() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"models": {"Organization": {"attributes": ["text"], "foreignKey": "company_id"}}}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert!(manager.registry().is_empty());
    }

    /// update_settings: 有効な設定で更新成功
    #[rstest]
    fn test_update_settings_valid() {
        let mut manager = ConfigManager::new();
        let mut new_settings = TranslationSettings::default();
        new_settings.default_locale = "ru".to_string();
        new_settings.models.insert(
            "Article".to_string(),
            ModelSettings { attributes: vec!["text".to_string()], ..ModelSettings::default() },
        );

        let result = manager.update_settings(new_settings);

        assert!(result.is_ok());
        assert_eq!(manager.default_locale().as_str(), "ru");
        assert!(manager.registry().contains("Article"));
    }

    /// update_settings: 無効な設定でエラー、現在の設定は維持される
    #[rstest]
    fn test_update_settings_invalid() {
        let mut manager = ConfigManager::new();
        let mut new_settings = TranslationSettings::default();
        new_settings.default_locale = String::new(); // 空文字は無効

        let result = manager.update_settings(new_settings);

        assert!(result.is_err());
        assert_eq!(manager.default_locale().as_str(), "en");
    }
}
