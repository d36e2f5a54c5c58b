use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Give every line a Chinese sentence terminator: a trailing `.` or `；`
/// becomes `。`, and a line longer than one character that ends in
/// anything else gets a `。` appended.
///
/// Not part of the standard pipeline; add it through the builder when the
/// source material is a bullet list pasted line by line.
pub struct AppendPeriods;

impl Stage for AppendPeriods {
    fn name(&self) -> &'static str {
        "append_periods"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text
            .lines()
            .any(|line| line.chars().count() > 1 && !line.ends_with('。')))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let fixed: Vec<String> = text.split('\n').map(fix_line).collect();
        Ok(Cow::Owned(fixed.join("\n")))
    }
}

fn fix_line(line: &str) -> String {
    if line.chars().count() <= 1 {
        return line.to_string();
    }
    if line.ends_with('.') || line.ends_with('；') {
        let mut fixed: String = line.chars().take(line.chars().count() - 1).collect();
        fixed.push('。');
        return fixed;
    }
    if !line.ends_with('。') {
        let mut fixed = line.to_string();
        fixed.push('。');
        return fixed;
    }
    line.to_string()
}
