// ============================================================================
// FILE: src/lib.rs - Library Root
// ============================================================================
pub mod config;
pub mod engine;
pub mod errors;
pub mod template;

pub use config::GameConfig;
pub use engine::{Engine, Runtime};
pub use errors::RegnumError;
pub use template::{PlatformerTemplate, TemplateKind};
