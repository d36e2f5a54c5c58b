//! Core normalization stage abstraction.
//!
//! A stage is a named pure transform over the full text. Stages run in a
//! fixed order; feature flags only skip a stage, never reorder it, and the
//! gating lives in `needs_apply` so the pipeline loop stays uniform.

pub mod append_periods;
pub mod collapse_whitespace;
pub mod decode_urls;
pub mod fix_english_quotes;
pub mod fullwidth_punctuation;
pub mod join_wrapped_words;
pub mod sentence_linebreaks;
pub mod space_cjk_latin;
pub mod strip_garbled;
pub mod strip_linebreaks;
pub mod trim_start;
pub mod unspace_cjk;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single normalization step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for error messages and debugging.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage; this
    /// is also where an optional stage consults its flag in `ctx`.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
