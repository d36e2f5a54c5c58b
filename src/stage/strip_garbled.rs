//! stage/strip_garbled.rs
//! Remove the private-use code points (U+F06E, U+F06F) that symbol-font
//! bullets turn into when copied out of word processors.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::is_garbled,
};
use std::borrow::Cow;

pub struct StripGarbled;

impl Stage for StripGarbled {
    fn name(&self) -> &'static str {
        "strip_garbled"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.chars().any(is_garbled))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(Cow::Owned(
            text.chars().filter(|&c| !is_garbled(c)).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_private_use_bullets() {
        let stage = StripGarbled;
        let ctx = Context::default();
        let input = "a\u{F06E}b\u{F06F}c";
        assert!(stage.needs_apply(input, &ctx).unwrap());
        assert_eq!(stage.apply(Cow::Borrowed(input), &ctx).unwrap(), "abc");
    }

    #[test]
    fn other_private_use_untouched() {
        let stage = StripGarbled;
        let ctx = Context::default();
        assert!(!stage.needs_apply("a\u{F070}b", &ctx).unwrap());
    }
}
