use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Strip all whitespace (including newlines) from the very start of the
/// text. Always runs; trailing whitespace is left for later stages.
pub struct TrimStart;

impl Stage for TrimStart {
    fn name(&self) -> &'static str {
        "trim_start"
    }

    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        // Fast path for ASCII
        if text.as_bytes().first().is_some_and(u8::is_ascii_whitespace) {
            return Ok(true);
        }
        Ok(text.chars().next().is_some_and(char::is_whitespace))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let trimmed = text.trim_start();
        Ok(if trimmed.len() == text.len() {
            text
        } else {
            Cow::Owned(trimmed.to_string())
        })
    }
}
