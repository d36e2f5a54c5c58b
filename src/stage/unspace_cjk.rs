use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::is_cjk,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Whitespace strictly between two CJK runs. Non-overlapping global
// replace; an alternating `字 字 字` sequence collapses only its first
// gap per run-through (inherited behavior).
static CJK_GAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([一-龥]+)\s+([一-龥]+)").expect("valid pattern"));

/// Delete whitespace runs sitting between Chinese characters. Gated by
/// the `removeSpacesBetweenChinese` flag.
pub struct UnspaceCjk;

impl Stage for UnspaceCjk {
    fn name(&self) -> &'static str {
        "unspace_cjk"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        if !ctx.config.remove_spaces_between_chinese {
            return Ok(false);
        }
        if !text.chars().any(is_cjk) {
            return Ok(false);
        }
        Ok(CJK_GAP.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(Cow::Owned(
            CJK_GAP.replace_all(&text, "${1}${2}").into_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn ctx() -> Context {
        Context::new(Config {
            remove_spaces_between_chinese: true,
            ..Config::default()
        })
    }

    #[test]
    fn removes_gap_between_cjk() {
        let stage = UnspaceCjk;
        let out = stage.apply(Cow::Borrowed("你好 世界"), &ctx()).unwrap();
        assert_eq!(out, "你好世界");
    }

    #[test]
    fn latin_gaps_untouched() {
        let stage = UnspaceCjk;
        assert!(!stage.needs_apply("hello world", &ctx()).unwrap());
        let out = stage.apply(Cow::Borrowed("中文 and 英文"), &ctx()).unwrap();
        assert_eq!(out, "中文 and 英文");
    }

    #[test]
    fn alternating_runs_collapse_partially() {
        // Non-overlapping matching consumes the second run, so the second
        // gap survives a single pass.
        let stage = UnspaceCjk;
        let out = stage.apply(Cow::Borrowed("你 好 世"), &ctx()).unwrap();
        assert_eq!(out, "你好 世");
    }

    #[test]
    fn idempotent_once_collapsed() {
        let stage = UnspaceCjk;
        let once = stage
            .apply(Cow::Borrowed("你好 世界"), &ctx())
            .unwrap()
            .into_owned();
        assert!(!stage.needs_apply(&once, &ctx()).unwrap());
    }
}
