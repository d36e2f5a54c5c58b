use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr;
use std::borrow::Cow;

/// Remove every newline character entirely, no replacement. Gated by the
/// `cleanAllLinebreaks` flag.
///
/// In the standard order this runs after whitespace collapsing, which has
/// already turned input newlines into spaces; the stage still matters for
/// newlines introduced upstream of the pipeline by a custom caller.
pub struct StripLinebreaks;

impl Stage for StripLinebreaks {
    fn name(&self) -> &'static str {
        "strip_linebreaks"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        if !ctx.config.clean_all_linebreaks {
            return Ok(false);
        }
        Ok(memchr(b'\n', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(Cow::Owned(text.chars().filter(|&c| c != '\n').collect()))
    }
}
