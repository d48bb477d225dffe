// src/template/mod.rs
pub mod platformer;

pub use platformer::PlatformerTemplate;

use std::fmt;

/// Pre-built game genre configurations offered by the engine. Picking one is
/// a construction-time choice; this scaffold uses the platformer template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Platformer,
    TopDown,
    Fps,
    ThirdPerson,
    Tycoon,
    Idle,
    DeckbuilderCombat,
}

impl TemplateKind {
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Platformer => "platformer",
            TemplateKind::TopDown => "top-down",
            TemplateKind::Fps => "fps",
            TemplateKind::ThirdPerson => "third-person",
            TemplateKind::Tycoon => "tycoon",
            TemplateKind::Idle => "idle",
            TemplateKind::DeckbuilderCombat => "deckbuilder-combat",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
