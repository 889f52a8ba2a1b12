//! 所有者タイプ向けの、設定を考慮した翻訳アクセサ
//!
//! ホストは所有者タイプごとに [`HasTranslations`] を実装し、呼び出しのたびに登録済みの
//! [`TranslationSetConfig`] とロケールを明示的に渡します。

use serde_json::Value;
use thiserror::Error;

use crate::locale::Locale;
use crate::registry::{
    ConfigurationError,
    TranslationSetConfig,
    TranslationSetRegistry,
};
use crate::resolver::{
    self,
    AllTranslations,
};
use crate::translation::{
    OwnerId,
    Translation,
};

/// 所有者経由で翻訳属性にアクセスした際の呼び出し側エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    #[error("'{attribute}' is not a translated attribute of '{owner_type}'")]
    UnknownAttribute { owner_type: String, attribute: String },
    #[error("Translated attribute readers are disabled for '{owner_type}'")]
    ReaderDisabled { owner_type: String },
    #[error("Translated attribute writers are disabled for '{owner_type}'")]
    WriterDisabled { owner_type: String },
}

/// 翻訳レコードで属性をローカライズする所有者
///
/// 翻訳コレクションはホストの作業単位に属します。
/// [`write_attribute`](Self::write_attribute) で追加されたレコードは所有者と一緒に保存されます。
pub trait HasTranslations {
    /// レジストリのキーとなる所有者タイプ名
    const OWNER_TYPE: &'static str;

    /// 主キー（未保存の間は `None`）
    fn owner_id(&self) -> Option<OwnerId>;

    /// 読み込み済みの翻訳
    fn translations(&self) -> &[Translation];

    /// 管理対象の翻訳コレクション
    fn translations_mut(&mut self) -> &mut Vec<Translation>;

    /// この所有者タイプの設定を取得する
    ///
    /// # Errors
    /// [`ConfigurationError::NotRegistered`]
    fn translation_config(
        registry: &TranslationSetRegistry,
    ) -> Result<&TranslationSetConfig, ConfigurationError> {
        registry.fetch(Self::OWNER_TYPE)
    }

    /// 設定のフォールバックを使って `locale` の翻訳を解決する
    #[must_use]
    fn translation<'a>(
        &'a self,
        config: &TranslationSetConfig,
        locale: &Locale,
        default_locale: &Locale,
    ) -> Option<&'a Translation> {
        resolver::resolve(self.translations(), locale, config.fallback(), default_locale)
    }

    /// `locale` に完全一致する翻訳（フォールバックなし）
    #[must_use]
    fn translation_without_fallback(&self, locale: &Locale) -> Option<&Translation> {
        resolver::find_translation(self.translations(), locale)
    }

    #[must_use]
    fn has_translation(&self, locale: &Locale) -> bool {
        resolver::has_translation(self.translations(), locale)
    }

    /// 翻訳属性を読み取る
    ///
    /// 翻訳が解決できない場合は設定の nil 値を返す。
    ///
    /// # Errors
    /// - [`AttributeError::ReaderDisabled`]
    /// - [`AttributeError::UnknownAttribute`]
    fn read_attribute<'a>(
        &'a self,
        config: &'a TranslationSetConfig,
        attribute: &str,
        locale: &Locale,
        default_locale: &Locale,
    ) -> Result<&'a Value, AttributeError> {
        if !config.reader() {
            return Err(AttributeError::ReaderDisabled {
                owner_type: config.owner_type().to_string(),
            });
        }
        ensure_declared(config, attribute)?;

        Ok(resolver::read_attribute(
            self.translations(),
            locale,
            attribute,
            config.fallback(),
            default_locale,
            config.nil_value(),
        ))
    }

    /// `locale` の翻訳属性を書き込む
    ///
    /// # Errors
    /// - [`AttributeError::WriterDisabled`]
    /// - [`AttributeError::UnknownAttribute`]
    fn write_attribute(
        &mut self,
        config: &TranslationSetConfig,
        attribute: &str,
        locale: &Locale,
        value: impl Into<Value>,
    ) -> Result<&mut Translation, AttributeError> {
        ensure_writable(config, attribute)?;

        let owner_id = self.owner_id();
        Ok(resolver::write_attribute(self.translations_mut(), locale, owner_id, attribute, value))
    }

    /// 完全一致ロケールの書き込まれたままの値（フォールバック・nil 値の置き換えなし）
    ///
    /// # Errors
    /// - [`AttributeError::WriterDisabled`]
    /// - [`AttributeError::UnknownAttribute`]
    fn attribute_before_type_cast<'a>(
        &'a self,
        config: &TranslationSetConfig,
        attribute: &str,
        locale: &Locale,
    ) -> Result<Option<&'a Value>, AttributeError> {
        ensure_writable(config, attribute)?;

        Ok(resolver::read_attribute_before_type_cast(self.translations(), locale, attribute))
    }

    /// 利用可能な各ロケールについて、既存の翻訳または未保存のプレースホルダー
    #[must_use]
    fn all_translations(&self, available_locales: &[Locale]) -> AllTranslations<'_> {
        resolver::all_translations(self.translations(), self.owner_id(), available_locales)
    }

    /// 所有者と一緒に保存すべき翻訳
    ///
    /// autosave が無効な場合は空（ホストが自分で翻訳を保存する）。
    #[must_use]
    fn pending_translations(&self, config: &TranslationSetConfig) -> Vec<&Translation> {
        if !config.autosave() {
            return Vec::new();
        }
        self.translations().iter().filter(|t| t.is_new_record()).collect()
    }
}

/// `locale` の翻訳を持つ所有者（入力順）
#[must_use]
pub fn translated<'a, T, I>(owners: I, locale: &Locale) -> Vec<&'a T>
where
    T: HasTranslations + 'a,
    I: IntoIterator<Item = &'a T>,
{
    owners.into_iter().filter(|owner| owner.has_translation(locale)).collect()
}

/// `attribute` が `config` で宣言されていなければエラー
fn ensure_declared(config: &TranslationSetConfig, attribute: &str) -> Result<(), AttributeError> {
    if config.declares(attribute) {
        Ok(())
    } else {
        Err(AttributeError::UnknownAttribute {
            owner_type: config.owner_type().to_string(),
            attribute: attribute.to_string(),
        })
    }
}

/// 書き込みが有効で `attribute` が宣言されていなければエラー
fn ensure_writable(config: &TranslationSetConfig, attribute: &str) -> Result<(), AttributeError> {
    if !config.writer() {
        return Err(AttributeError::WriterDisabled { owner_type: config.owner_type().to_string() });
    }
    ensure_declared(config, attribute)
}
