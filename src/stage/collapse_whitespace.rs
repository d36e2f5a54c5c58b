use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Replace every maximal whitespace run (including newlines) with one
/// ASCII space. Always runs.
///
/// This necessarily erases newlines before the line-break stages get to
/// see them; the ordering is inherited behavior, kept on purpose.
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        let mut prev_ws = false;
        for c in text.chars() {
            let ws = c.is_whitespace();
            if ws && (c != ' ' || prev_ws) {
                return Ok(true);
            }
            prev_ws = ws;
        }
        Ok(false)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let mut out = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if c.is_whitespace() {
                if !in_run {
                    out.push(' ');
                    in_run = true;
                }
            } else {
                out.push(c);
                in_run = false;
            }
        }
        Ok(Cow::Owned(out))
    }
}
