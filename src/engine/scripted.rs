use std::collections::VecDeque;

use super::PromptEngine;
use crate::error::EngineError;
use crate::plan::{PromptGroup, SlotMut};

/// A canned answer for [`ScriptedEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Flag(bool),
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Answers prompts from a fixed queue, in prompt order.
///
/// Used for tests and non-interactive runs. Each answer must match the slot it
/// lands in: text for input prompts, a flag for confirm prompts.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEngine {
    answers: VecDeque<Answer>,
    cancel: bool,
    runs: usize,
}

impl ScriptedEngine {
    pub fn new<I, A>(answers: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Answer>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// An engine whose every run ends as if the user aborted.
    pub fn cancelling() -> Self {
        Self {
            cancel: true,
            ..Self::default()
        }
    }

    /// Times [`PromptEngine::run`] was called.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PromptEngine for ScriptedEngine {
    fn run(&mut self, group: &mut PromptGroup) -> Result<(), EngineError> {
        self.runs += 1;
        if self.cancel {
            return Err(EngineError::Cancelled);
        }

        for prompt in group.prompts_mut() {
            let title = prompt.title().to_string();
            let answer = self
                .answers
                .pop_front()
                .ok_or_else(|| EngineError::Script(format!("no answer left for {title}")))?;

            match (prompt.slot_mut(), answer) {
                (SlotMut::Text(slot), Answer::Text(value)) => *slot = value,
                (SlotMut::Flag(slot), Answer::Flag(value)) => *slot = value,
                (_, answer) => {
                    return Err(EngineError::Script(format!(
                        "answer {answer:?} does not fit prompt {title}"
                    )));
                }
            }
        }
        Ok(())
    }
}
