//! フォールバック解決モジュール
//!
//! 要求されたロケールの翻訳が見つからなかった場合に、代わりに使う翻訳を選択します。

use crate::locale::Locale;
use crate::translation::Translation;

/// 要求ロケールの翻訳がない場合の代替翻訳を選択する
///
/// # 優先度
/// 1. `default_locale` の翻訳
/// 2. `translations` の先頭（保存順のまま、ソートしない）
/// 3. 翻訳が 1 件もない場合は None
///
/// # Arguments
/// * `translations` - 所有者に読み込み済みの翻訳リスト
/// * `default_locale` - ホストが設定したデフォルトロケール
#[must_use]
pub fn fallback_translation<'a>(
    translations: &'a [Translation],
    default_locale: &Locale,
) -> Option<&'a Translation> {
    // 3. 翻訳が空ならフォールバックしない
    let first = translations.first()?;

    // 1. デフォルトロケール
    if let Some(found) = super::find_translation(translations, default_locale) {
        tracing::trace!(locale = %default_locale, "Falling back to default locale");
        return Some(found);
    }

    // 2. 先頭の翻訳
    tracing::trace!(locale = %first.locale(), "Falling back to first available translation");
    Some(first)
}
