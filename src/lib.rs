//! has-translations
//!
//! 翻訳テーブルに保存されたロケール別の属性値を解決するライブラリ
//!
//! - [`resolver`]: ロケール解決・フォールバック・属性の読み書き
//! - [`registry`]: 所有者タイプごとの翻訳設定
//! - [`model`]: 所有者向けのアクセサ ([`HasTranslations`])
//! - [`config`]: `.has-translations.json` の読み込み

pub mod config;
pub mod locale;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod translation;

#[cfg(test)]
mod test_utils;

pub use locale::{
    Locale,
    LocaleError,
};
pub use model::{
    AttributeError,
    HasTranslations,
    translated,
};
pub use registry::{
    ConfigurationError,
    TranslationSetConfig,
    TranslationSetRegistry,
};
pub use translation::{
    OwnerId,
    Translation,
};
