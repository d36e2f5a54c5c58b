use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Three passes, in this order; each is a global non-overlapping replace.
static APOSTROPHE: Lazy<Regex> = Lazy::new(|| Regex::new("([A-Za-z_])’").expect("valid pattern"));
static QUOTE_BEFORE: Lazy<Regex> = Lazy::new(|| Regex::new("[”“]([A-Za-z_])").expect("valid pattern"));
static QUOTE_AFTER: Lazy<Regex> = Lazy::new(|| Regex::new("([A-Za-z_])[”“]").expect("valid pattern"));

/// Straighten curly quotes that sit against English words: `it’s` →
/// `it's`, `“word` → `"word`, `word”` → `word"`. Always runs, so curly
/// quotes around Chinese text survive.
pub struct FixEnglishQuotes;

impl Stage for FixEnglishQuotes {
    fn name(&self) -> &'static str {
        "fix_english_quotes"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if !text.chars().any(|c| matches!(c, '’' | '“' | '”')) {
            return Ok(false);
        }
        Ok(APOSTROPHE.is_match(text) || QUOTE_BEFORE.is_match(text) || QUOTE_AFTER.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let pass1 = APOSTROPHE.replace_all(&text, "${1}'");
        let pass2 = QUOTE_BEFORE.replace_all(&pass1, "\"${1}");
        let pass3 = QUOTE_AFTER.replace_all(&pass2, "${1}\"");
        Ok(Cow::Owned(pass3.into_owned()))
    }
}
