use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::{to_fullwidth_punct, FULLWIDTH_PUNCT},
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Pair conversion is deliberately greedy: the first delimiter pairs with
// the LAST one in reach (`.` still stops at newlines). Nearest-pair
// matching would arguably be more correct, but this matches the inherited
// behavior and is kept as-is.
static STRAIGHT_QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new("\"(.+)\"").expect("valid pattern"));
static CURLY_QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new("“(.+)”").expect("valid pattern"));
static PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((.+)\)").expect("valid pattern"));

/// Convert half-width punctuation to its full-width Chinese form: quote
/// and parenthesis pairs become `「…」` / `（…）`, then `. ; ! , :` map to
/// their full-width forms and `---` becomes `——`. Gated by the
/// `useFullWidthPunctuationMarks` flag.
pub struct FullwidthPunctuation;

impl Stage for FullwidthPunctuation {
    fn name(&self) -> &'static str {
        "fullwidth_punctuation"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        if !ctx.config.use_full_width_punctuation_marks {
            return Ok(false);
        }
        Ok(text.chars().any(|c| FULLWIDTH_PUNCT.contains_key(&c))
            || text.contains("---")
            || STRAIGHT_QUOTES.is_match(text)
            || CURLY_QUOTES.is_match(text)
            || PARENS.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let pass1 = STRAIGHT_QUOTES.replace_all(&text, "「${1}」");
        let pass2 = CURLY_QUOTES.replace_all(&pass1, "「${1}」");
        let pass3 = PARENS.replace_all(&pass2, "（${1}）");
        let dashed = pass3.replace("---", "——");
        Ok(Cow::Owned(dashed.chars().map(to_fullwidth_punct).collect()))
    }
}
