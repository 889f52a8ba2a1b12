//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use serde_json::json;

use crate::locale::Locale;
use crate::translation::{
    OwnerId,
    Translation,
};

/// テスト用の Locale を作成する
pub(crate) fn locale(code: &str) -> Locale {
    Locale::new(code).unwrap()
}

/// テスト用の保存済み Translation を作成する
///
/// # Arguments
/// * `code` - ロケール（例: "en", "ru"）
/// * `text` - `text` 属性の値
///
/// # Returns
/// 所有者 ID 1 に紐づく保存済み Translation
pub(crate) fn translation(code: &str, text: &str) -> Translation {
    Translation::loaded(OwnerId(1), locale(code), [("text", json!(text))])
}

/// テストログを有効化する
///
/// `RUST_LOG` で出力レベルを指定できます。複数回呼び出しても問題ありません。
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
