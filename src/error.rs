use std::num::ParseIntError;

use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Errors returned by a questionnaire run.
///
/// Every variant is terminal: nothing is retried and no partially filled
/// value is handed back to the caller.
#[derive(Debug, Error)]
pub enum QuestionnaireError {
    // ── Schema ──────────────────────────────────────────────────────────
    #[error("provided model must be a struct, got {kind}")]
    NotAStruct { kind: String },

    #[error("unsupported field type for {field}: {kind}")]
    UnsupportedFieldType { field: String, kind: String },

    #[error("schema: {0}")]
    Schema(#[source] serde_json::Error),

    // ── Interaction ─────────────────────────────────────────────────────
    #[error(transparent)]
    Engine(#[from] EngineError),

    // ── Fill ────────────────────────────────────────────────────────────
    #[error("invalid integer value for {field}: {source}")]
    InvalidIntegerInput {
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to assemble answers: {0}")]
    Assemble(#[source] serde_json::Error),
}

// ─── Engine errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("questionnaire cancelled by user")]
    Cancelled,

    #[error("terminal: {0}")]
    Terminal(#[from] dialoguer::Error),

    #[error("scripted engine: {0}")]
    Script(String),
}
