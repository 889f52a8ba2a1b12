//! ロケール解決の上に構築した属性単位の読み書き

use serde_json::Value;

use super::{
    find_or_build_managed,
    find_translation,
    resolve,
};
use crate::locale::Locale;
use crate::translation::{
    OwnerId,
    Translation,
};

/// 解決した翻訳で未設定の属性の代わりに返す値
static NULL: Value = Value::Null;

/// ローカライズされた属性を 1 つ読み取る
///
/// - フォールバック後も翻訳が解決できない: `nil_value`
/// - 翻訳は解決できたが属性が未設定: `nil_value` ではなく `null`
/// - それ以外: 保存されている値
#[must_use]
pub fn read_attribute<'a>(
    translations: &'a [Translation],
    locale: &Locale,
    attribute_name: &str,
    fallback_enabled: bool,
    default_locale: &Locale,
    nil_value: &'a Value,
) -> &'a Value {
    resolve(translations, locale, fallback_enabled, default_locale)
        .map_or(nil_value, |t| t.attribute(attribute_name).unwrap_or(&NULL))
}

/// `locale` の翻訳に属性を書き込む
///
/// 翻訳がなければ管理対象のコレクションに保留中のレコードを作成する。
pub fn write_attribute<'a>(
    translations: &'a mut Vec<Translation>,
    locale: &Locale,
    owner_id: Option<OwnerId>,
    attribute_name: &str,
    value: impl Into<Value>,
) -> &'a mut Translation {
    let translation = find_or_build_managed(translations, locale, owner_id);
    translation.set_attribute(attribute_name, value);
    translation
}

/// 完全一致ロケールの値（フォールバック・nil 値の置き換えなし）
#[must_use]
pub fn read_attribute_before_type_cast<'a>(
    translations: &'a [Translation],
    locale: &Locale,
    attribute_name: &str,
) -> Option<&'a Value> {
    find_translation(translations, locale).and_then(|t| t.attribute(attribute_name))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;
    use crate::test_utils::{
        locale,
        translation,
    };

    #[rstest]
    fn read_attribute_without_translations_returns_nil_value() {
        let translations: Vec<Translation> = Vec::new();
        let nil_value = json!("");

        let value =
            read_attribute(&translations, &locale("ru"), "text", false, &locale("en"), &nil_value);

        assert_that!(value, eq(&json!("")));
    }

    #[rstest]
    fn read_attribute_null_column_is_not_nil_value() {
        let translations = vec![
            Translation::loaded(OwnerId(1), locale("ru"), [("text", Value::Null)]),
        ];
        let nil_value = json!("");

        let value =
            read_attribute(&translations, &locale("ru"), "text", false, &locale("en"), &nil_value);

        assert_that!(value, eq(&Value::Null));
    }

    #[rstest]
    fn read_attribute_missing_column_is_null() {
        let translations = vec![translation("ru", "текст")];
        let nil_value = json!("");

        let value = read_attribute(
            &translations,
            &locale("ru"),
            "description",
            false,
            &locale("en"),
            &nil_value,
        );

        assert_that!(value, eq(&Value::Null));
    }

    #[rstest]
    fn read_attribute_without_fallback_returns_nil_value() {
        let translations = vec![translation("en", "t")];
        let nil_value = Value::Null;

        let value =
            read_attribute(&translations, &locale("fr"), "text", false, &locale("en"), &nil_value);

        assert_that!(value, eq(&Value::Null));
    }

    #[rstest]
    fn read_attribute_with_fallback_uses_default_locale() {
        let translations = vec![translation("es", "texto"), translation("en", "text")];
        let nil_value = json!("");

        let value =
            read_attribute(&translations, &locale("ru"), "text", true, &locale("en"), &nil_value);

        assert_that!(value, eq(&json!("text")));
    }

    #[rstest]
    fn write_attribute_twice_reuses_pending_translation() {
        let mut translations = Vec::new();

        write_attribute(&mut translations, &locale("ru"), Some(OwnerId(1)), "text", "one");
        let pending =
            write_attribute(&mut translations, &locale("ru"), Some(OwnerId(1)), "text", "two");

        assert_that!(pending.attribute("text"), some(eq(&json!("two"))));
        assert_that!(translations, len(eq(1)));
    }

    #[rstest]
    fn write_attribute_updates_existing_translation() {
        let mut translations = vec![translation("en", "text")];

        write_attribute(&mut translations, &locale("en"), Some(OwnerId(1)), "text", "text new");

        assert_that!(translations, len(eq(1)));
        assert_that!(translations[0].attribute("text"), some(eq(&json!("text new"))));
        assert_that!(translations[0].is_persisted(), eq(true));
    }

    #[rstest]
    fn before_type_cast_ignores_fallback() {
        let translations = vec![translation("en", "text")];

        assert_that!(
            read_attribute_before_type_cast(&translations, &locale("ru"), "text"),
            none()
        );
        assert_that!(
            read_attribute_before_type_cast(&translations, &locale("en"), "text"),
            some(eq(&json!("text")))
        );
    }
}
