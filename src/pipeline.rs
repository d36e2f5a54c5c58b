// src/pipeline.rs
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// Ordered stage sequence. The standard paste-cleanup order is fixed;
/// flags in the [`Context`] only skip stages, never reorder them.
#[derive(Default)]
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 12]>,
}

impl Pipeline {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// The full paste-cleanup sequence. Optional stages are always present
    /// and gate themselves on their flag in `needs_apply`.
    ///
    /// Note the inherited ordering quirk: whitespace collapsing runs before
    /// both the line-break strip and the sentence-break insertion, so any
    /// newlines in the pasted input are gone before those stages see them.
    pub fn standard() -> Self {
        use crate::stage::{
            collapse_whitespace::CollapseWhitespace, decode_urls::DecodeUrls,
            fix_english_quotes::FixEnglishQuotes, fullwidth_punctuation::FullwidthPunctuation,
            join_wrapped_words::JoinWrappedWords, sentence_linebreaks::SentenceLinebreaks,
            space_cjk_latin::SpaceCjkLatin, strip_garbled::StripGarbled,
            strip_linebreaks::StripLinebreaks, trim_start::TrimStart, unspace_cjk::UnspaceCjk,
        };

        Self::new()
            .push(TrimStart)
            .push(CollapseWhitespace)
            .push(StripLinebreaks)
            .push(StripGarbled)
            .push(JoinWrappedWords)
            .push(SentenceLinebreaks)
            .push(SpaceCjkLatin)
            .push(UnspaceCjk)
            .push(FullwidthPunctuation)
            .push(FixEnglishQuotes)
            .push(DecodeUrls)
    }

    pub fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed (or the stage's flag is off)
            if !stage.needs_apply(&current, ctx)? {
                continue;
            }

            current = stage.apply(current, ctx)?;
        }

        Ok(current)
    }
}
