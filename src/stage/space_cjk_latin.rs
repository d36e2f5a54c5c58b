use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::is_cjk,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Latin-then-CJK boundary first, then CJK-then-Latin. One global
// non-overlapping pass each, in that order.
static LATIN_THEN_CJK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_0-9])([一-龥]+)").expect("valid pattern"));
static CJK_THEN_LATIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([一-龥]+)([A-Za-z_0-9])").expect("valid pattern"));

/// Insert one space wherever a Latin letter, digit, or underscore touches
/// a CJK ideograph. Gated by the `addSpaceBetweenChineseAndEnglish` flag.
pub struct SpaceCjkLatin;

impl Stage for SpaceCjkLatin {
    fn name(&self) -> &'static str {
        "space_cjk_latin"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        if !ctx.config.add_space_between_chinese_and_english {
            return Ok(false);
        }
        if !text.chars().any(is_cjk) {
            return Ok(false);
        }
        Ok(LATIN_THEN_CJK.is_match(text) || CJK_THEN_LATIN.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let pass1 = LATIN_THEN_CJK.replace_all(&text, "${1} ${2}");
        let pass2 = CJK_THEN_LATIN.replace_all(&pass1, "${1} ${2}");
        Ok(Cow::Owned(pass2.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn ctx() -> Context {
        Context::new(Config {
            add_space_between_chinese_and_english: true,
            ..Config::default()
        })
    }

    #[test]
    fn latin_before_cjk() {
        let stage = SpaceCjkLatin;
        let out = stage.apply(Cow::Borrowed("hello你好"), &ctx()).unwrap();
        assert_eq!(out, "hello 你好");
    }

    #[test]
    fn cjk_before_latin() {
        let stage = SpaceCjkLatin;
        let out = stage.apply(Cow::Borrowed("你好world"), &ctx()).unwrap();
        assert_eq!(out, "你好 world");
    }

    #[test]
    fn digits_and_underscore_count_as_latin() {
        let stage = SpaceCjkLatin;
        assert_eq!(
            stage.apply(Cow::Borrowed("共2024年"), &ctx()).unwrap(),
            "共 2024 年"
        );
        assert_eq!(
            stage.apply(Cow::Borrowed("_中"), &ctx()).unwrap(),
            "_ 中"
        );
    }

    #[test]
    fn idempotent_on_own_output() {
        let stage = SpaceCjkLatin;
        let once = stage
            .apply(Cow::Borrowed("abc中文def"), &ctx())
            .unwrap()
            .into_owned();
        assert_eq!(once, "abc 中文 def");
        let twice = stage
            .apply(Cow::Owned(once.clone()), &ctx())
            .unwrap()
            .into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn flag_off_skips() {
        let stage = SpaceCjkLatin;
        assert!(!stage.needs_apply("a中", &Context::default()).unwrap());
    }
}
