#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

//! Turn a configuration struct into an interactive terminal form.
//!
//! A struct deriving [`serde::Deserialize`] and [`schemars::JsonSchema`] is
//! read as a [`Schema`], turned into a [`Plan`] of prompts, run through a
//! [`PromptEngine`] and filled back into a fresh instance of the struct.

pub mod config;
pub mod engine;
pub mod error;
pub mod fill;
pub mod plan;
pub mod questionnaire;
pub mod schema;
pub mod ui;

pub use config::{FormOptions, ThemeChoice};
pub use engine::{Answer, PromptEngine, ScriptedEngine, TerminalEngine};
pub use error::{EngineError, QuestionnaireError};
pub use fill::fill;
pub use plan::{Plan, Prompt, PromptGroup, PromptStyle, Slot, SlotMut, ValueKind, build_plan};
pub use questionnaire::{Questionnaire, run_questionnaire};
pub use schema::{FieldKind, FieldSpec, IntegerKind, PROMPT_MARKER, Schema};
