//! Interactive engines that answer a [`PromptGroup`] by writing its slots.

mod scripted;
mod terminal;

pub use scripted::{Answer, ScriptedEngine};
pub use terminal::TerminalEngine;

use crate::error::EngineError;
use crate::plan::PromptGroup;

/// Runs a group of prompts and writes every slot, or fails.
///
/// A failure, including a user cancelling, ends the questionnaire; slots
/// written before the failure are discarded by the caller.
pub trait PromptEngine {
    fn run(&mut self, group: &mut PromptGroup) -> Result<(), EngineError>;
}

impl<E: PromptEngine + ?Sized> PromptEngine for &mut E {
    fn run(&mut self, group: &mut PromptGroup) -> Result<(), EngineError> {
        (**self).run(group)
    }
}
