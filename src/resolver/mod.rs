//! 読み込み済みの翻訳に対するロケール解決
//!
//! すべての関数は呼び出し側が読み込んだメモリ上のスライスに対して動作します。
//! 問い合わせ・キャッシュ・ロックは行わず、見つからないことはエラーではなく通常の結果です。

mod attribute;
mod fallback;

use std::borrow::Cow;

pub use attribute::{
    read_attribute,
    read_attribute_before_type_cast,
    write_attribute,
};
pub use fallback::fallback_translation;

use crate::locale::Locale;
use crate::translation::{
    OwnerId,
    Translation,
};

/// ロケールが `locale` に一致する最初の翻訳を返す
///
/// `(所有者, ロケール)` の一意性が崩れている場合は、保存順で最初に一致したものを返す。
#[must_use]
pub fn find_translation<'a>(
    translations: &'a [Translation],
    locale: &Locale,
) -> Option<&'a Translation> {
    translations.iter().find(|t| t.matches_locale(locale.as_str()))
}

/// `locale` の翻訳が読み込まれていれば `true`
#[must_use]
pub fn has_translation(translations: &[Translation], locale: &Locale) -> bool {
    find_translation(translations, locale).is_some()
}

/// `locale` に対して有効な翻訳を解決する
///
/// # 解決順
/// 1. `locale` に完全一致する翻訳
/// 2. フォールバック無効、または翻訳が 1 件もない場合は None
/// 3. `default_locale` の翻訳
/// 4. 読み込み順で先頭の翻訳
#[must_use]
pub fn resolve<'a>(
    translations: &'a [Translation],
    locale: &Locale,
    fallback_enabled: bool,
    default_locale: &Locale,
) -> Option<&'a Translation> {
    if let Some(found) = find_translation(translations, locale) {
        return Some(found);
    }

    if !fallback_enabled {
        return None;
    }

    fallback_translation(translations, default_locale)
}

/// `locale` の既存の翻訳、なければ未保存のプレースホルダーを返す
///
/// プレースホルダーは呼び出し側が所有し、`translations` には追加されない。
#[must_use]
pub fn find_or_build<'a>(
    translations: &'a [Translation],
    locale: &Locale,
    owner_id: Option<OwnerId>,
) -> Cow<'a, Translation> {
    find_translation(translations, locale).map_or_else(
        || {
            tracing::trace!(locale = %locale, "Building placeholder translation");
            Cow::Owned(Translation::new(owner_id, locale.clone()))
        },
        Cow::Borrowed,
    )
}

/// `locale` の既存の翻訳を返す。なければ管理対象のコレクションに保留中のレコードを追加する
///
/// 保存前に同じロケールで 2 回呼び出しても、同じ保留中のレコードを返す。
#[must_use]
#[allow(clippy::indexing_slicing)]
pub fn find_or_build_managed<'a>(
    translations: &'a mut Vec<Translation>,
    locale: &Locale,
    owner_id: Option<OwnerId>,
) -> &'a mut Translation {
    let index = match translations.iter().position(|t| t.matches_locale(locale.as_str())) {
        Some(index) => index,
        None => {
            tracing::trace!(locale = %locale, "Adding pending translation");
            translations.push(Translation::new(owner_id, locale.clone()));
            translations.len() - 1
        }
    };

    // index は position() の結果か、直前に push した位置
    &mut translations[index]
}

/// 利用可能なロケールごとのエントリ（設定順）
#[derive(Debug, Clone, PartialEq)]
pub struct AllTranslations<'a> {
    entries: Vec<(Locale, Cow<'a, Translation>)>,
}

impl AllTranslations<'_> {
    /// `locale` のエントリを返す
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&Translation> {
        self.entries.iter().find(|(l, _)| l.as_str() == locale).map(|(_, t)| t.as_ref())
    }

    /// `locale` のエントリがこの呼び出しで作成したプレースホルダーなら `true`
    #[must_use]
    pub fn is_placeholder(&self, locale: &str) -> bool {
        self.entries
            .iter()
            .any(|(l, t)| l.as_str() == locale && matches!(t, Cow::Owned(_)))
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &Translation)> {
        self.entries.iter().map(|(l, t)| (l, t.as_ref()))
    }

    #[must_use]
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.entries.iter().map(|(l, _)| l)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 全エントリを所有する形に変換する（借用中のものは複製）
    #[must_use]
    pub fn into_owned(self) -> Vec<(Locale, Translation)> {
        self.entries.into_iter().map(|(l, t)| (l, t.into_owned())).collect()
    }
}

/// 利用可能な全ロケールについて、ロケール → 翻訳の順序付きマッピングを作成する
///
/// 翻訳のないロケールには毎回新しいプレースホルダーを作成し、`translations` は変更しない。
/// 重複したロケールは最初の位置のみ残す。
#[must_use]
pub fn all_translations<'a>(
    translations: &'a [Translation],
    owner_id: Option<OwnerId>,
    available_locales: &[Locale],
) -> AllTranslations<'a> {
    let mut entries: Vec<(Locale, Cow<'a, Translation>)> =
        Vec::with_capacity(available_locales.len());

    for locale in available_locales {
        if entries.iter().any(|(l, _)| l == locale) {
            continue;
        }
        entries.push((locale.clone(), find_or_build(translations, locale, owner_id)));
    }

    AllTranslations { entries }
}
