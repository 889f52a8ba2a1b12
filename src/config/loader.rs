//! 設定ファイルの探索と読み込み

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    TranslationSettings,
};

/// 設定ファイル名
pub(super) const CONFIG_FILE_NAME: &str = ".has-translations.json";

/// 設定ファイルを探す
///
/// `start` から親ディレクトリへ順に `.has-translations.json` を探し、最初に見つかったパスを返す。
/// モノレポのサブパッケージをワークスペースとして開いた場合でも、リポジトリ直下の設定を使える。
pub(super) fn find_config_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(CONFIG_FILE_NAME)).find(|path| path.is_file())
}

/// ワークスペースから設定を読み込む
///
/// # Arguments
/// * `workspace_root` - ワークスペースのルートパス（ここから親方向に探索）
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功（空ファイルはデフォルト設定）
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<TranslationSettings>, ConfigError> {
    let Some(config_path) = find_config_file(workspace_root) else {
        tracing::debug!("Configuration file not found from: {:?}", workspace_root);
        return Ok(None);
    };

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    if content.trim().is_empty() {
        tracing::warn!("Configuration file is empty, using defaults: {:?}", config_path);
        return Ok(Some(TranslationSettings::default()));
    }

    let settings: TranslationSettings = serde_json::from_str(&content)?;
    tracing::debug!(
        default_locale = %settings.default_locale,
        available_locales = settings.available_locales.len(),
        models = ?settings.models.keys().collect::<Vec<_>>(),
        "Parsed translation settings"
    );

    Ok(Some(settings))
}
