use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Hyphen followed by one whitespace char; both are deleted.
static HYPHEN_WRAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\s").expect("valid pattern"));

/// Rejoin words split across a soft line wrap: `nor- malize` → `normalize`.
/// Always runs. Deletes every `-` + whitespace pair, hyphenated compounds
/// at a wrap included.
pub struct JoinWrappedWords;

impl Stage for JoinWrappedWords {
    fn name(&self) -> &'static str {
        "join_wrapped_words"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if memchr(b'-', text.as_bytes()).is_none() {
            return Ok(false);
        }
        Ok(HYPHEN_WRAP.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(Cow::Owned(HYPHEN_WRAP.replace_all(&text, "").into_owned()))
    }
}
