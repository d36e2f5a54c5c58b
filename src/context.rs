// src/context.rs
// Read-only per-run state handed to every stage. Deliberately tiny and
// Copy; no stage may mutate it or read configuration from anywhere else.

use crate::config::Config;

/// Runtime context passed to every normalization stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    pub config: Config,
}

impl Context {
    #[inline(always)]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
