//! 所有者タイプごとの翻訳オプション

use serde_json::{
    Map,
    Value,
};

use super::ConfigurationError;

/// [`TranslationSetConfig::from_options`] が受け付けるオプションキー
pub const VALID_OPTION_KEYS: &[&str] =
    &["fallback", "reader", "writer", "nil", "inverseOf", "autosave", "translationClass"];

/// 所有者タイプのどの属性を翻訳するか、およびその振る舞いの宣言
///
/// [`TranslationSetRegistry`](super::TranslationSetRegistry) に登録した後は変更されません。
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationSetConfig {
    /// 所有者タイプ名（例: `Article`）
    owner_type: String,
    /// 翻訳する属性名（宣言順）
    attribute_names: Vec<String>,
    /// 読み取り時にデフォルトロケール → 先頭の翻訳へフォールバックする
    fallback: bool,
    /// 属性の読み取りを有効にする
    reader: bool,
    /// 属性の書き込みを有効にする
    writer: bool,
    /// 翻訳が解決できない場合に読み取りが返す値
    nil_value: Value,
    /// autosave の明示的な設定（未設定なら `writer` に従う）
    autosave: Option<bool>,
    /// 翻訳側の逆関連名
    inverse_of: Option<String>,
    /// 翻訳レコードの型名
    translation_class: String,
}

impl TranslationSetConfig {
    /// デフォルトのオプションで設定を作成する
    ///
    /// デフォルト: フォールバックなし、読み取り有効、書き込み無効、nil 値は `""`、
    /// autosave は書き込み設定に従う、翻訳クラスは `{owner_type}Translation`。
    #[must_use]
    pub fn new<I, S>(owner_type: impl Into<String>, attribute_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let owner_type = owner_type.into();
        let translation_class =
            if owner_type.is_empty() { String::new() } else { format!("{owner_type}Translation") };
        Self {
            attribute_names: attribute_names.into_iter().map(Into::into).collect(),
            fallback: false,
            reader: true,
            writer: false,
            nil_value: Value::String(String::new()),
            autosave: None,
            inverse_of: None,
            translation_class,
            owner_type,
        }
    }

    /// 設定ファイルのような型の緩いオプションマップから設定を作成する
    ///
    /// # Errors
    /// - [`ConfigurationError::UnknownOptions`]: [`VALID_OPTION_KEYS`] 以外のキー
    /// - [`ConfigurationError::InvalidOption`]: 型が不正な値
    /// - [`TranslationSetConfig::validate`] のエラー
    pub fn from_options<I, S>(
        owner_type: impl Into<String>,
        attribute_names: I,
        options: &Map<String, Value>,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::new(owner_type, attribute_names);
        let owner_type = config.owner_type.as_str();

        let mut unknown: Vec<String> =
            options.keys().filter(|k| !VALID_OPTION_KEYS.contains(&k.as_str())).cloned().collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(ConfigurationError::UnknownOptions {
                owner_type: owner_type.to_string(),
                keys: unknown,
            });
        }

        let fallback = bool_option(owner_type, options, "fallback")?;
        let reader = bool_option(owner_type, options, "reader")?;
        let writer = bool_option(owner_type, options, "writer")?;
        let autosave = bool_option(owner_type, options, "autosave")?;
        let inverse_of = string_option(owner_type, options, "inverseOf")?;
        let translation_class = string_option(owner_type, options, "translationClass")?;

        if let Some(fallback) = fallback {
            config.fallback = fallback;
        }
        if let Some(reader) = reader {
            config.reader = reader;
        }
        if let Some(writer) = writer {
            config.writer = writer;
        }
        if let Some(nil_value) = options.get("nil") {
            config.nil_value = nil_value.clone();
        }
        config.autosave = autosave;
        config.inverse_of = inverse_of;
        if let Some(translation_class) = translation_class {
            config.translation_class = translation_class;
        }

        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub const fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub const fn with_reader(mut self, reader: bool) -> Self {
        self.reader = reader;
        self
    }

    #[must_use]
    pub const fn with_writer(mut self, writer: bool) -> Self {
        self.writer = writer;
        self
    }

    #[must_use]
    pub fn with_nil_value(mut self, nil_value: impl Into<Value>) -> Self {
        self.nil_value = nil_value.into();
        self
    }

    #[must_use]
    pub const fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = Some(autosave);
        self
    }

    #[must_use]
    pub fn with_inverse_of(mut self, inverse_of: impl Into<String>) -> Self {
        self.inverse_of = Some(inverse_of.into());
        self
    }

    #[must_use]
    pub fn with_translation_class(mut self, translation_class: impl Into<String>) -> Self {
        self.translation_class = translation_class.into();
        self
    }

    /// 宣言そのものを検証する
    ///
    /// # Errors
    /// - 所有者タイプが空
    /// - 翻訳クラスがない
    /// - 属性がない、または属性名が不正・重複
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.owner_type.is_empty() {
            return Err(ConfigurationError::EmptyOwnerType);
        }

        if self.translation_class.is_empty() {
            return Err(ConfigurationError::MissingTranslationClass {
                owner_type: self.owner_type.clone(),
            });
        }

        if self.attribute_names.is_empty() {
            return Err(ConfigurationError::NoAttributes { owner_type: self.owner_type.clone() });
        }

        for (index, name) in self.attribute_names.iter().enumerate() {
            if !is_valid_attribute_name(name) {
                return Err(ConfigurationError::InvalidAttributeName {
                    owner_type: self.owner_type.clone(),
                    name: name.clone(),
                });
            }
            if self.attribute_names.iter().take(index).any(|other| other == name) {
                return Err(ConfigurationError::DuplicateAttribute {
                    owner_type: self.owner_type.clone(),
                    name: name.clone(),
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn owner_type(&self) -> &str {
        &self.owner_type
    }

    #[must_use]
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    /// `name` が翻訳属性なら `true`
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.attribute_names.iter().any(|n| n == name)
    }

    #[must_use]
    pub const fn fallback(&self) -> bool {
        self.fallback
    }

    #[must_use]
    pub const fn reader(&self) -> bool {
        self.reader
    }

    #[must_use]
    pub const fn writer(&self) -> bool {
        self.writer
    }

    #[must_use]
    pub const fn nil_value(&self) -> &Value {
        &self.nil_value
    }

    /// 保留中の翻訳を所有者と一緒に保存するかどうか
    #[must_use]
    pub fn autosave(&self) -> bool {
        self.autosave.unwrap_or(self.writer)
    }

    #[must_use]
    pub fn inverse_of(&self) -> Option<&str> {
        self.inverse_of.as_deref()
    }

    #[must_use]
    pub fn translation_class(&self) -> &str {
        &self.translation_class
    }

    /// 翻訳レコード側で所有者を参照するカラム名（例: `article_id`）
    #[must_use]
    pub fn foreign_key(&self) -> String {
        let base = self.owner_type.rsplit("::").next().unwrap_or(&self.owner_type);
        format!("{}_id", underscore(base))
    }
}

/// 省略可能な真偽値オプションを読む
fn bool_option(
    owner_type: &str,
    options: &Map<String, Value>,
    key: &str,
) -> Result<Option<bool>, ConfigurationError> {
    match options.get(key) {
        None => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(ConfigurationError::InvalidOption {
            owner_type: owner_type.to_string(),
            key: key.to_string(),
            expected: "a boolean",
        }),
    }
}

/// 省略可能な文字列オプションを読む（`null` は未設定扱い）
fn string_option(
    owner_type: &str,
    options: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, ConfigurationError> {
    match options.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ConfigurationError::InvalidOption {
            owner_type: owner_type.to_string(),
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

/// 属性名は識別子の形式 `[A-Za-z_][A-Za-z0-9_]*` であること
fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `BlogPost` → `blog_post`, `HTMLPage` → `html_page`
fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (index, c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = index.checked_sub(1).and_then(|i| chars.get(i));
            let next = chars.get(index + 1);
            let boundary = prev.is_some_and(|p| {
                p.is_lowercase()
                    || p.is_ascii_digit()
                    || (p.is_uppercase() && next.is_some_and(|n| n.is_lowercase()))
            });
            if boundary {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(*c);
        }
    }

    result
}
