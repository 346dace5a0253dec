use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use questionnaire::{FormOptions, Plan, Prompt, Questionnaire, ValueKind};

use super::sample::ServiceConfig;
use super::{Cli, Commands, OutputFormat};

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ask { config, format } => {
            let options = FormOptions::load(config.as_deref())?;
            let service: ServiceConfig = Questionnaire::with_options(options)
                .run()
                .context("Questionnaire failed")?;
            println!("{}", render(&service, format)?);
            Ok(())
        }
        Commands::Plan { format } => {
            let plan = Questionnaire::new()
                .plan::<ServiceConfig>()
                .context("Failed to build prompt plan")?;
            match format {
                Some(format) => println!("{}", render(&PlanDoc::from(&plan), format)?),
                None => print_plan(&plan),
            }
            Ok(())
        }
    }
}

/// Serializable view of a plan for `plan --format`.
#[derive(Debug, Serialize)]
struct PlanDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    prompts: Vec<PlanRow>,
}

#[derive(Debug, Serialize)]
struct PlanRow {
    field: String,
    title: String,
    style: String,
    kind: String,
}

impl From<&Plan> for PlanDoc {
    fn from(plan: &Plan) -> Self {
        let prompts = plan
            .prompts()
            .iter()
            .map(|prompt| PlanRow {
                field: prompt.field().to_string(),
                title: prompt.title().to_string(),
                style: prompt.style().to_string(),
                kind: kind_name(prompt.kind()),
            })
            .collect();
        Self {
            title: plan.group().title().map(str::to_string),
            prompts,
        }
    }
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Toml => toml::to_string_pretty(value).context("Failed to render TOML"),
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to render JSON")
        }
    }
}

fn print_plan(plan: &Plan) {
    if let Some(title) = plan.group().title() {
        println!("  {}", style(title).white().bold());
    }
    for (index, prompt) in plan.prompts().iter().enumerate() {
        println!(
            "  {} {} {}",
            style(format!("{}.", index + 1)).cyan().bold(),
            style(prompt.field()).green(),
            style(format!("({})", describe(prompt))).dim()
        );
        if prompt.title() != prompt.field() {
            println!("     {}", style(prompt.title()).white());
        }
    }
    println!(
        "  {}",
        style(format!(
            "{} text slots, {} yes/no slots",
            plan.text_slots(),
            plan.flag_slots()
        ))
        .dim()
    );
}

fn describe(prompt: &Prompt) -> String {
    match prompt.kind() {
        ValueKind::Integer(width) => format!("{}, {width}", prompt.style()),
        ValueKind::Text | ValueKind::Boolean => prompt.style().to_string(),
    }
}

fn kind_name(kind: ValueKind) -> String {
    match kind {
        ValueKind::Text => "text".into(),
        ValueKind::Integer(width) => width.to_string(),
        ValueKind::Boolean => "boolean".into(),
    }
}
