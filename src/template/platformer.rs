// src/template/platformer.rs
use std::ffi::OsString;

use crate::config::GameConfig;
use crate::engine::{Engine, Runtime};
use crate::errors::RegnumError;
use crate::template::TemplateKind;

/// The platformer template, configured and ready to run.
///
/// Construction validates the configuration up front so the engine only ever
/// sees well-formed parameters. The template owns its config; `run` consumes
/// the template, so nothing outlives the delegated call.
pub struct PlatformerTemplate {
    config: GameConfig,
}

impl PlatformerTemplate {
    pub fn new(config: GameConfig) -> Result<Self, RegnumError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Hands control to the engine and blocks until its run loop terminates.
    /// Returns the engine's exit status unchanged.
    pub fn run(self, args: &[OsString]) -> i32 {
        let mut engine = Engine::new(TemplateKind::Platformer);
        self.run_with(&mut engine, args)
    }

    /// Same flow as [`run`](Self::run) with a caller-supplied runtime.
    pub fn run_with<R: Runtime>(self, runtime: &mut R, args: &[OsString]) -> i32 {
        runtime.run(&self.config, args)
    }
}
