// src/engine/mod.rs
use std::ffi::OsString;

use crate::config::GameConfig;
use crate::template::TemplateKind;

/// The engine's blocking run entry. Called exactly once with the validated
/// configuration and the uninterpreted process arguments; does not return
/// until the run loop terminates. The returned code becomes the process
/// exit status.
pub trait Runtime {
    fn run(&mut self, config: &GameConfig, args: &[OsString]) -> i32;
}

/// Production runtime.
///
/// The scaffold ships with no game content, so the run loop has nothing to
/// drive yet: it reports the configuration it received and shuts down
/// cleanly. Replace this with your actual game code.
pub struct Engine {
    kind: TemplateKind,
}

impl Engine {
    pub fn new(kind: TemplateKind) -> Self {
        Self { kind }
    }
}

impl Runtime for Engine {
    fn run(&mut self, config: &GameConfig, args: &[OsString]) -> i32 {
        log::info!("Starting {} ({} template)", config.title, self.kind);
        log::info!(
            "Virtual resolution: {}x{}",
            config.virtual_width,
            config.virtual_height
        );
        log::debug!(
            "Physics: gravity {} u/s^2, jump height {} u",
            config.gravity,
            config.jump_height
        );

        // Argument grammar belongs to the engine, not the scaffold.
        if !args.is_empty() {
            log::debug!("Received {} engine argument(s)", args.len());
        }

        log::info!("No game content registered, shutting down");
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_run_exits_cleanly() {
        let mut engine = Engine::new(TemplateKind::Platformer);
        let code = engine.run(&GameConfig::default(), &[]);
        assert_eq!(code, 0);
    }
}
