//! Tiny Sumo Huly CLI entry point.
//!
//! This binary is the composition root for the client. Responsibilities:
//!
//! 1. **Load configuration** — [`HulyConfig::from_env`] reads the credential
//!    and base URL from the environment over the branded defaults.
//! 2. **Wire observability** — configure `tracing-subscriber` with an env
//!    filter; all `tracing` events emitted by the workspace crates flow
//!    through it.
//! 3. **Construct the client** — one [`HulyClient`] per invocation; its
//!    connection pool is released when the process exits.
//! 4. **Dispatch the command** — authentication, workflow creation, progress
//!    and dashboard reporting, task completion, or the end-to-end demo flow.

mod demo;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use domain::{ProjectId, TaskId, ToolName};
use huly::{HulyClient, HulyConfig};

#[derive(Parser)]
#[command(
    name = "sumo",
    about = "Tiny Sumo branded client for the Huly project-management API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authenticate a user via SSO and print the session result.
    Auth {
        /// Email address; must be in the allowed domain or the admin override.
        email: String,
    },
    /// Create a branded marketing project with the five-task audit workflow.
    CreateProject {
        /// Target site the project is about.
        client_url: String,
        #[arg(long, default_value = "marketing_audit")]
        project_type: String,
        /// Custom tool name to generate an analysis task for (repeatable).
        #[arg(long = "tool")]
        tools: Vec<String>,
    },
    /// Print the progress summary for a project.
    Progress { project_id: String },
    /// Print the dashboard data for a project.
    Dashboard { project_id: String },
    /// Mark a task completed.
    CompleteTask { task_id: String },
    /// Run the end-to-end flow with the sample analytics and CRM tools.
    Demo {
        /// Target site for the demo project.
        client_url: String,
        /// Email to authenticate with.
        #[arg(long, default_value = "employee@tiny-sumo.com")]
        email: String,
    },
}

fn parse_project_id(raw: String) -> Result<ProjectId> {
    ProjectId::new(raw).ok_or_else(|| anyhow!("project id must not be empty"))
}

fn parse_task_id(raw: String) -> Result<TaskId> {
    TaskId::new(raw).ok_or_else(|| anyhow!("task id must not be empty"))
}

fn parse_tool_name(raw: String) -> Result<ToolName> {
    ToolName::new(raw).ok_or_else(|| anyhow!("tool name must not be empty"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = HulyConfig::from_env();
    tracing::debug!(base_url = %config.base_url, domain = %config.allowed_domain, "loaded configuration");
    let mut client = HulyClient::new(config).context("failed to construct the Huly client")?;

    match cli.command {
        Command::Auth { email } => {
            let result = client.authenticate_sso(&email).await?;
            print_json(&result)?;
        }
        Command::CreateProject {
            client_url,
            project_type,
            tools,
        } => {
            let tools = tools
                .into_iter()
                .map(parse_tool_name)
                .collect::<Result<Vec<_>>>()?;
            let project = client
                .create_tiny_sumo_project(&client_url, Some(&project_type), &tools)
                .await?;
            print_json(&project)?;
        }
        Command::Progress { project_id } => {
            let project_id = parse_project_id(project_id)?;
            let summary = client.project_progress_summary(&project_id).await?;
            print_json(&summary)?;
        }
        Command::Dashboard { project_id } => {
            let project_id = parse_project_id(project_id)?;
            let dashboard = client.dashboard_data(&project_id).await?;
            print_json(&dashboard)?;
        }
        Command::CompleteTask { task_id } => {
            let task_id = parse_task_id(task_id)?;
            let result = client.complete_task(&task_id).await?;
            print_json(&result)?;
        }
        Command::Demo { client_url, email } => {
            demo::run(&mut client, &client_url, &email).await?;
        }
    }

    Ok(())
}
