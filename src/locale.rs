//! 翻訳レコードの選択に使うロケールキー

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use icu_locid::locale;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// ロケールとして使えない文字列のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// 空文字列
    #[error("Locale cannot be empty")]
    Empty,
    /// ロケールタグとして解析できない
    #[error("Invalid locale format: '{locale}'")]
    InvalidFormat {
        /// 拒否された入力
        locale: String,
    },
}

/// 検証済みのロケールキー（`en`, `ru`, `pt-BR`, `en-US-u-ca-buddhist` など）
///
/// 翻訳レコードと同じく、入力された文字列をそのまま保持し、大文字小文字を区別して比較します。
/// 検証はロケールタグとして解析できるかどうかのみを確認します。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// 形式を確認してロケールを作成する
    ///
    /// # Errors
    /// - [`LocaleError::Empty`]: 空文字列
    /// - [`LocaleError::InvalidFormat`]: ロケールタグとして解析できない
    pub fn new(code: impl Into<String>) -> Result<Self, LocaleError> {
        let code = code.into();
        if code.is_empty() {
            return Err(LocaleError::Empty);
        }
        if parse_tag(&code).is_none() {
            return Err(LocaleError::InvalidFormat { locale: code });
        }
        Ok(Self(code))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 構造化されたロケールに変換する（拡張サブタグを含む）
    ///
    /// # Errors
    /// 保持している文字列が解析できない場合は [`LocaleError::InvalidFormat`]。
    /// すべてのコンストラクタで検証済みのため、通常は発生しません。
    pub fn to_icu_locale(&self) -> Result<icu_locid::Locale, LocaleError> {
        parse_tag(&self.0).ok_or_else(|| LocaleError::InvalidFormat { locale: self.0.clone() })
    }
}

/// ロケールタグを解析する
///
/// `x-pseudo` のようなプライベートユースのみのタグは、言語 `und` を補って解析する。
fn parse_tag(code: &str) -> Option<icu_locid::Locale> {
    if let Ok(parsed) = code.parse::<icu_locid::Locale>() {
        return Some(parsed);
    }

    let is_private_use = code
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("x-") || prefix.eq_ignore_ascii_case("x_"));
    if is_private_use {
        return format!("und-{code}").parse().ok();
    }

    None
}

/// ロケール文字列のリストを順序を保って解析する
///
/// # Errors
/// 最初に見つかった [`LocaleError`] を返す。
pub fn parse_locales<I, S>(codes: I) -> Result<Vec<Locale>, LocaleError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    codes.into_iter().map(Locale::new).collect()
}

impl Default for Locale {
    /// 慣例のデフォルトロケール `en`
    fn default() -> Self {
        Self::from(locale!("en"))
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Locale {
    type Error = LocaleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<icu_locid::Locale> for Locale {
    fn from(locale: icu_locid::Locale) -> Self {
        Self(locale.to_string())
    }
}

impl From<&icu_locid::Locale> for Locale {
    fn from(locale: &icu_locid::Locale) -> Self {
        Self(locale.to_string())
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
