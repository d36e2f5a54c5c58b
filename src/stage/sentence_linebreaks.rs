use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static CJK_PERIOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"。\s*").expect("valid pattern"));
static ASCII_PERIOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s*").expect("valid pattern"));

/// Insert a newline after every sentence-ending period, consuming any
/// whitespace that followed it. `。` is handled first, then `.`. Gated by
/// the `autoAddLinebreaks` flag.
pub struct SentenceLinebreaks;

impl Stage for SentenceLinebreaks {
    fn name(&self) -> &'static str {
        "sentence_linebreaks"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        if !ctx.config.auto_add_linebreaks {
            return Ok(false);
        }
        Ok(text.contains('。') || text.contains('.'))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let pass1 = CJK_PERIOD.replace_all(&text, "。\n");
        let pass2 = ASCII_PERIOD.replace_all(&pass1, ".\n");
        Ok(Cow::Owned(pass2.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn ctx() -> Context {
        Context::new(Config {
            auto_add_linebreaks: true,
            ..Config::default()
        })
    }

    #[test]
    fn breaks_after_cjk_period() {
        let stage = SentenceLinebreaks;
        let out = stage
            .apply(Cow::Borrowed("第一句。 第二句。"), &ctx())
            .unwrap();
        assert_eq!(out, "第一句。\n第二句。\n");
    }

    #[test]
    fn breaks_after_ascii_period() {
        let stage = SentenceLinebreaks;
        let out = stage.apply(Cow::Borrowed("One. Two."), &ctx()).unwrap();
        assert_eq!(out, "One.\nTwo.\n");
    }

    #[test]
    fn trailing_whitespace_consumed() {
        let stage = SentenceLinebreaks;
        let out = stage.apply(Cow::Borrowed("end. "), &ctx()).unwrap();
        assert_eq!(out, "end.\n");
    }

    #[test]
    fn flag_off_skips() {
        let stage = SentenceLinebreaks;
        let off = Context::default();
        assert!(!stage.needs_apply("a. b", &off).unwrap());
    }
}
