use thiserror::Error;

/// 所有者タイプの翻訳属性を宣言する際のエラー
///
/// セットアップ時に一度だけ発生し、設定を中断します。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// 解釈できないオプションキー
    #[error("Unknown translation options for '{owner_type}': {}", .keys.join(", "))]
    UnknownOptions {
        owner_type: String,
        /// 拒否したキー（ソート済み）
        keys: Vec<String>,
    },
    /// オプション値の型が不正
    #[error("Invalid value for option '{key}' of '{owner_type}': expected {expected}")]
    InvalidOption { owner_type: String, key: String, expected: &'static str },
    /// 翻訳レコードの型名を決定できない
    #[error("Missing translation class for '{owner_type}'")]
    MissingTranslationClass { owner_type: String },
    #[error("Owner type cannot be empty")]
    EmptyOwnerType,
    #[error("No translated attributes declared for '{owner_type}'")]
    NoAttributes { owner_type: String },
    #[error("Invalid attribute name '{name}' for '{owner_type}'")]
    InvalidAttributeName { owner_type: String, name: String },
    #[error("Attribute '{name}' is declared more than once for '{owner_type}'")]
    DuplicateAttribute { owner_type: String, name: String },
    /// 設定は所有者タイプごとに一度だけ登録できる
    #[error("Translations for '{owner_type}' are already registered")]
    AlreadyRegistered { owner_type: String },
    #[error("No translations registered for '{owner_type}'")]
    NotRegistered { owner_type: String },
}
