use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::FormOptions;
use crate::engine::{PromptEngine, TerminalEngine};
use crate::error::{EngineError, QuestionnaireError};
use crate::fill::fill;
use crate::plan::{Plan, build_plan};
use crate::schema::Schema;

/// Runs the read → build → ask → fill pipeline for a target type.
///
/// ```no_run
/// use questionnaire::Questionnaire;
/// use schemars::JsonSchema;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
/// struct Service {
///     /// Name shown in dashboards.
///     #[schemars(extend("x-prompt" = true))]
///     name: String,
///     #[schemars(extend("x-prompt" = true))]
///     port: u16,
///     #[schemars(extend("x-prompt" = true))]
///     tls: bool,
///     /// Not asked; keeps its default.
///     region: String,
/// }
///
/// let service: Service = Questionnaire::new().run()?;
/// # Ok::<(), questionnaire::QuestionnaireError>(())
/// ```
#[derive(Debug)]
pub struct Questionnaire<E = TerminalEngine> {
    engine: E,
    title: Option<String>,
}

impl Questionnaire<TerminalEngine> {
    pub fn new() -> Self {
        Self::with_options(FormOptions::default())
    }

    pub fn with_options(options: FormOptions) -> Self {
        Self::with_engine(TerminalEngine::new(options))
    }
}

impl<E: PromptEngine> Questionnaire<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            title: None,
        }
    }

    /// Title shown above the prompts instead of the struct name.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Build the prompts for `T` without running them.
    pub fn plan<T: JsonSchema>(&self) -> Result<Plan, QuestionnaireError> {
        let schema = Schema::of::<T>()?;
        let mut plan = build_plan(&schema)?;
        if let Some(title) = &self.title {
            plan.group_mut().set_title(title.clone());
        }
        Ok(plan)
    }

    /// Ask every marked field of `T` and return the filled value. Unmarked
    /// fields keep their value from `T::default()`.
    ///
    /// Schema and build errors return before the engine is started. Engine
    /// errors are returned as-is and no answer is applied.
    pub fn run<T>(&mut self) -> Result<T, QuestionnaireError>
    where
        T: JsonSchema + Default + Serialize + DeserializeOwned,
    {
        let mut plan = self.plan::<T>()?;

        tracing::debug!(prompts = plan.len(), "starting questionnaire");
        if let Err(err) = self.engine.run(plan.group_mut()) {
            if matches!(err, EngineError::Cancelled) {
                tracing::warn!("questionnaire cancelled");
            }
            return Err(err.into());
        }

        let value = fill(plan.into_group())?;
        tracing::debug!("questionnaire complete");
        Ok(value)
    }
}

/// Run the questionnaire for `T` on the terminal with default options.
pub fn run_questionnaire<T>() -> Result<T, QuestionnaireError>
where
    T: JsonSchema + Default + Serialize + DeserializeOwned,
{
    Questionnaire::new().run()
}
