use thiserror::Error;

use crate::{
    config::Config,
    context::Context,
    pipeline::Pipeline,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

/// A configured pipeline, reusable across pastes.
pub struct Normalizer {
    ctx: Context,
    pipeline: Pipeline,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// The standard eleven-stage paste-cleanup pipeline under `config`.
    pub fn standard(config: Config) -> Self {
        Self {
            ctx: Context::new(config),
            pipeline: Pipeline::standard(),
        }
    }

    pub fn normalize<'a>(
        &self,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<Cow<'a, str>, NormalizeError> {
        let result = self.pipeline.process(text.into(), &self.ctx)?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct NormalizerBuilder {
    config: Config,
    pipeline: Pipeline,
}

impl NormalizerBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.pipeline = self.pipeline.push(stage);
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            ctx: Context::new(self.config),
            pipeline: self.pipeline,
        }
    }
}

/// One-shot convenience over [`Normalizer::standard`].
pub fn normalize(input: &str, config: &Config) -> Result<String, NormalizeError> {
    Ok(Normalizer::standard(*config).normalize(input)?.into_owned())
}
