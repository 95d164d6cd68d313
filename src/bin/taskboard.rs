//! Command-line front end for the task board.
//!
//! Usage:
//!
//! ```text
//! taskboard [--api-url URL] [--verbose] <command>
//! ```
//!
//! Commands mirror the task board's interactions: `list` shows the filtered
//! and sorted view with per-status counts, `show` fetches one task, `create`
//! and `edit` run the task form, `status` changes a task's status and
//! `delete` removes a task once confirmed with `--yes`.
//!
//! The service location comes from `TASKBOARD_API_URL` (also read from a
//! `.env` file) unless `--api-url` overrides it. Log output is controlled by
//! `RUST_LOG`.

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use eyre::{Result, WrapErr, eyre};
use taskboard::{
    config::ClientConfig,
    task::{
        adapters::{http::HttpTaskRepository, logging::TracingNotifier},
        domain::{SortKey, StatusFilter, Task, TaskId, TaskStatus},
        form::{DeletePrompt, FormField, TaskDialog, TaskForm},
        ports::TaskRepository,
        services::{SubmitError, TaskListController},
    },
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type Controller = TaskListController<HttpTaskRepository, TracingNotifier>;

#[derive(Debug, Parser)]
#[command(name = "taskboard", about = "Manage tasks on a remote task service")]
struct Cli {
    /// Base URL of the task service, e.g. `http://localhost:8000/api`.
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List tasks.
    List(ListArgs),
    /// Show one task.
    Show {
        /// Task id.
        id: TaskId,
    },
    /// Create a task.
    Create(CreateArgs),
    /// Edit a task; omitted fields keep their current values.
    Edit(EditArgs),
    /// Change a task's status.
    Status {
        /// Task id.
        id: TaskId,
        /// New status: pending, in-progress or completed.
        status: TaskStatus,
    },
    /// Delete a task.
    Delete {
        /// Task id.
        id: TaskId,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Status filter: all, pending, in-progress or completed.
    #[arg(long, default_value = "all")]
    status: StatusFilter,
    /// Sort key: created_at, due_date or title.
    #[arg(long, default_value = "created_at")]
    sort: SortKey,
}

#[derive(Debug, Args)]
struct CreateArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    status: Option<String>,
    /// Due date as YYYY-MM-DD.
    #[arg(long)]
    due: Option<String>,
}

#[derive(Debug, Args)]
struct EditArgs {
    id: TaskId,
    #[arg(long)]
    title: Option<String>,
    /// New description; an empty value clears it.
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    status: Option<String>,
    /// New due date as YYYY-MM-DD; an empty value clears it.
    #[arg(long)]
    due: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ClientConfig::from_env().wrap_err("invalid task service configuration")?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config
            .with_base_url(url)
            .wrap_err("invalid --api-url")?;
    }
    let repository = Arc::new(
        HttpTaskRepository::new(&config).wrap_err("failed to build the HTTP client")?,
    );
    tracing::debug!(base_url = repository.base_url(), "using task service");
    let mut controller = TaskListController::new(Arc::clone(&repository), Arc::new(TracingNotifier));

    match cli.command {
        Command::List(args) => list(&mut controller, args.status, args.sort).await,
        Command::Show { id } => {
            let task = repository
                .get(id)
                .await
                .wrap_err_with(|| format!("failed to fetch task {id}"))?;
            print_detail(&task)
        }
        Command::Create(args) => create(&mut controller, args).await,
        Command::Edit(args) => edit(&mut controller, repository.as_ref(), args).await,
        Command::Status { id, status } => {
            let task = controller
                .set_status(id, status)
                .await
                .wrap_err_with(|| format!("failed to update task {id}"))?;
            print_detail(&task)
        }
        Command::Delete { id, yes } => delete(&mut controller, id, yes).await,
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "taskboard=debug,info"
    } else {
        "taskboard=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn list(controller: &mut Controller, filter: StatusFilter, sort: SortKey) -> Result<()> {
    let outcome = controller.load().await;
    controller.set_status_filter(filter);
    controller.set_sort_key(sort);

    let mut out = io::stdout().lock();
    if outcome.is_fallback() {
        writeln!(out, "(task service unavailable, showing sample tasks)")?;
    }
    let view = controller.view();
    if view.is_empty() {
        writeln!(out, "No tasks found")?;
    }
    for task in view {
        writeln!(out, "{}", summary_line(task))?;
    }
    let stats = controller.stats();
    writeln!(
        out,
        "\n{} total, {} pending, {} in progress, {} completed",
        stats.total, stats.pending, stats.in_progress, stats.completed
    )?;
    Ok(())
}

async fn create(controller: &mut Controller, args: CreateArgs) -> Result<()> {
    let mut dialog = TaskDialog::default();
    dialog.open_create();
    if let Some(form) = dialog.form_mut() {
        form.set_title(args.title);
        apply_optional(form, args.description, args.status, args.due);
    }
    let task = submit(controller, &mut dialog).await?;
    print_detail(&task)
}

async fn edit(
    controller: &mut Controller,
    repository: &HttpTaskRepository,
    args: EditArgs,
) -> Result<()> {
    let current = repository
        .get(args.id)
        .await
        .wrap_err_with(|| format!("failed to fetch task {}", args.id))?;
    let mut dialog = TaskDialog::default();
    dialog.open_edit(&current);
    if let Some(form) = dialog.form_mut() {
        if let Some(title) = args.title {
            form.set_title(title);
        }
        apply_optional(form, args.description, args.status, args.due);
    }
    let task = submit(controller, &mut dialog).await?;
    print_detail(&task)
}

fn apply_optional(
    form: &mut TaskForm,
    description: Option<String>,
    status: Option<String>,
    due: Option<String>,
) {
    if let Some(text) = description {
        form.set_description(text);
    }
    if let Some(text) = status {
        form.set_status_text(&text);
    }
    if let Some(text) = due {
        form.set_due_date(text);
    }
}

async fn submit(controller: &mut Controller, dialog: &mut TaskDialog) -> Result<Task> {
    match controller.submit_dialog(dialog).await {
        Ok(task) => Ok(task),
        Err(SubmitError::Invalid(errors)) => {
            let mut err = io::stderr().lock();
            for error in errors.iter() {
                let flag = match error.field() {
                    FormField::Title => "--title",
                    FormField::Description => "--description",
                    FormField::Status => "--status",
                    FormField::DueDate => "--due",
                };
                writeln!(err, "{flag}: {}", error.message())?;
            }
            Err(eyre!("the task form is invalid"))
        }
        Err(other) => Err(other).wrap_err("the task service rejected the request"),
    }
}

async fn delete(controller: &mut Controller, id: TaskId, confirmed: bool) -> Result<()> {
    let mut prompt = DeletePrompt::default();
    prompt.request(id);
    if !confirmed {
        prompt.cancel();
        writeln!(
            io::stdout().lock(),
            "Task {id} was not deleted; pass --yes to confirm"
        )?;
        return Ok(());
    }
    if let Some(task_id) = prompt.confirm() {
        controller
            .delete(task_id)
            .await
            .wrap_err_with(|| format!("failed to delete task {task_id}"))?;
        writeln!(io::stdout().lock(), "Deleted task {task_id}")?;
    }
    Ok(())
}

fn summary_line(task: &Task) -> String {
    let due = task
        .due_date()
        .map(|date| format!(" (due {date})"))
        .unwrap_or_default();
    format!(
        "#{:<4} {:<12} {}{due}",
        task.id().value(),
        task.status().label(),
        task.title()
    )
}

fn print_detail(task: &Task) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", summary_line(task))?;
    if let Some(description) = task.description() {
        writeln!(out, "    {description}")?;
    }
    writeln!(
        out,
        "    created {}, updated {}",
        task.created_at().to_rfc3339(),
        task.updated_at().to_rfc3339()
    )?;
    Ok(())
}
