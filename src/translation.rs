//! 翻訳レコードの定義

use std::collections::BTreeMap;
use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::locale::Locale;

/// 所有者レコードの主キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub i64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1 つの所有者のローカライズされた属性値を保持する、ロケールごとの子レコード
///
/// 属性値は JSON 値で、文字列・数値・`null` のいずれも保存できます。
/// 属性が存在しない場合と明示的な `null` は、どちらも未設定として扱います。
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// 所有者への外部キー（所有者が未保存の間は `None`）
    owner_id: Option<OwnerId>,
    locale: Locale,
    /// Attribute name → stored value
    attributes: BTreeMap<String, Value>,
    /// 永続化層で保存済みかどうか
    persisted: bool,
}

impl Translation {
    /// `locale` の未保存の翻訳を作成する
    #[must_use]
    pub const fn new(owner_id: Option<OwnerId>, locale: Locale) -> Self {
        Self { owner_id, locale, attributes: BTreeMap::new(), persisted: false }
    }

    /// ストレージから読み込んだレコードを表す
    #[must_use]
    pub fn loaded<I, K>(owner_id: OwnerId, locale: Locale, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            owner_id: Some(owner_id),
            locale,
            attributes: attributes.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            persisted: true,
        }
    }

    /// ビルダー形式で属性を設定する
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub const fn owner_id(&self) -> Option<OwnerId> {
        self.owner_id
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// このレコードが `locale` のものなら `true`
    #[must_use]
    pub fn matches_locale(&self, locale: &str) -> bool {
        self.locale.as_str() == locale
    }

    /// 属性値をそのまま取得する（一度も設定されていなければ `None`）
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// 属性を設定し、以前の値を返す
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    /// 所有者に紐づける（所有者の保存後など）
    pub const fn set_owner_id(&mut self, owner_id: OwnerId) {
        self.owner_id = Some(owner_id);
    }

    /// 永続化層がこの翻訳を保存したことを記録する
    pub const fn mark_persisted(&mut self, owner_id: OwnerId) {
        self.owner_id = Some(owner_id);
        self.persisted = true;
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persisted
    }

    #[must_use]
    pub const fn is_new_record(&self) -> bool {
        !self.persisted
    }
}
