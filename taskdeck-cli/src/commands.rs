//! CLI command implementations

use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use taskdeck_client::TaskApi;
use taskdeck_core::config::{ApiConfig, TaskdeckConfig};
use taskdeck_core::{Category, Priority, Task, TaskDraft, TaskId};
use taskdeck_web::run_server;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the task API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "8000")]
        port: u16,
        /// Path to the JSON data file
        #[arg(long, default_value = "tasks.json")]
        data_file: PathBuf,
    },
    /// List all tasks
    List,
    /// Show a single task
    Show {
        /// Task id
        id: TaskId,
    },
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Priority: low, medium or high
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Category: work, study, home or other
        #[arg(long, default_value = "other")]
        category: Category,
        /// Flag the task as important
        #[arg(long)]
        important: bool,
    },
    /// Replace fields on an existing task
    Edit {
        /// Task id
        id: TaskId,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New priority: low, medium or high
        #[arg(long)]
        priority: Option<Priority>,
        /// New category: work, study, home or other
        #[arg(long)]
        category: Option<Category>,
        /// Set or clear the important flag
        #[arg(long)]
        important: Option<bool>,
        /// Set or clear the completed flag
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Mark a task as completed
    Done {
        /// Task id
        id: TaskId,
    },
    /// Delete a task
    Remove {
        /// Task id
        id: TaskId,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            data_file,
        } => serve(host, port, data_file).await,
        Commands::List => list_tasks().await,
        Commands::Show { id } => show_task(id).await,
        Commands::Add {
            title,
            description,
            priority,
            category,
            important,
        } => add_task(title, description, priority, category, important).await,
        Commands::Edit {
            id,
            title,
            description,
            priority,
            category,
            important,
            completed,
        } => {
            edit_task(
                id, title, description, priority, category, important, completed,
            )
            .await
        }
        Commands::Done { id } => complete_task(id).await,
        Commands::Remove { id } => remove_task(id).await,
    }
}

/// Start the task API server
async fn serve(host: String, port: u16, data_file: PathBuf) -> anyhow::Result<()> {
    let mut config = TaskdeckConfig::default();
    config.server.bind_address = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))?;
    config.storage.data_file = data_file;

    println!("Taskdeck server");
    println!("URL: http://{}", config.server.bind_address);
    println!("Data file: {}", config.storage.data_file.display());
    println!("API: http://{}/api/tasks", config.server.bind_address);
    println!();
    println!("Press Ctrl+C to stop the server");

    run_server(config).await.context("server failed")
}

/// List all tasks
async fn list_tasks() -> anyhow::Result<()> {
    let api = api()?;
    let tasks = api.list_tasks().await?;

    println!("Tasks");
    println!("{:-<60}", "");

    if tasks.is_empty() {
        println!("No tasks yet.");
        println!("Use 'taskdeck add <title>' to create one.");
        return Ok(());
    }

    for task in &tasks {
        print_task_line(task);
    }
    println!();
    println!("{} task(s). Use 'taskdeck show <id>' for details.", tasks.len());

    Ok(())
}

/// Show a single task in detail
async fn show_task(id: TaskId) -> anyhow::Result<()> {
    let api = api()?;
    let task = api.task(id).await?;

    println!("Task #{}", task.id);
    println!("{:-<60}", "");
    println!("Title: {}", task.title);
    if !task.description.is_empty() {
        println!("Description: {}", task.description);
    }
    println!("Priority: {}", task.priority);
    println!("Category: {}", task.category);
    println!("Important: {}", if task.important { "yes" } else { "no" });
    println!("Completed: {}", if task.completed { "yes" } else { "no" });
    println!("Created: {}", task.created_at);

    Ok(())
}

/// Create a new task
async fn add_task(
    title: String,
    description: String,
    priority: Priority,
    category: Category,
    important: bool,
) -> anyhow::Result<()> {
    let api = api()?;
    let draft = TaskDraft {
        title,
        description,
        priority,
        category,
        important,
        completed: false,
    };

    let task = api.create_task(&draft).await?;
    println!("Created task #{}: {}", task.id, task.title);

    Ok(())
}

/// Replace fields on an existing task
async fn edit_task(
    id: TaskId,
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    category: Option<Category>,
    important: Option<bool>,
    completed: Option<bool>,
) -> anyhow::Result<()> {
    let api = api()?;

    // Updates are full replacements: start from the stored fields and
    // overlay whatever was passed on the command line.
    let current = api.task(id).await?;
    let mut draft = current.draft();
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(description) = description {
        draft.description = description;
    }
    if let Some(priority) = priority {
        draft.priority = priority;
    }
    if let Some(category) = category {
        draft.category = category;
    }
    if let Some(important) = important {
        draft.important = important;
    }
    if let Some(completed) = completed {
        draft.completed = completed;
    }

    let task = api.update_task(id, &draft).await?;
    println!("Updated task #{}: {}", task.id, task.title);
    print_task_line(&task);

    Ok(())
}

/// Mark a task as completed
async fn complete_task(id: TaskId) -> anyhow::Result<()> {
    let api = api()?;

    let current = api.task(id).await?;
    let mut draft = current.draft();
    draft.completed = true;

    let task = api.update_task(id, &draft).await?;
    println!("Completed task #{}: {}", task.id, task.title);

    Ok(())
}

/// Delete a task
async fn remove_task(id: TaskId) -> anyhow::Result<()> {
    let api = api()?;
    api.delete_task(id).await?;

    println!("Removed task #{id}");

    Ok(())
}

fn api() -> anyhow::Result<TaskApi> {
    TaskApi::new(ApiConfig::from_env()).context("failed to build API client")
}

fn print_task_line(task: &Task) {
    let done = if task.completed { "x" } else { " " };
    let flag = if task.important { " !" } else { "" };
    println!(
        "[{done}] #{} {}{flag} ({}, {})",
        task.id, task.title, task.priority, task.category
    );
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_add_parses_field_flags() {
        let cli = TestCli::try_parse_from([
            "taskdeck",
            "add",
            "Buy milk",
            "--priority",
            "high",
            "--category",
            "home",
            "--important",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                title,
                priority,
                category,
                important,
                ..
            } => {
                assert_eq!(title, "Buy milk");
                assert_eq!(priority, Priority::High);
                assert_eq!(category, Category::Home);
                assert!(important);
            }
            other => panic!("parsed into {other:?}"),
        }
    }

    #[test]
    fn test_add_rejects_unknown_priority() {
        let result = TestCli::try_parse_from(["taskdeck", "add", "Buy milk", "--priority", "asap"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_edit_flags_are_optional() {
        let cli = TestCli::try_parse_from(["taskdeck", "edit", "7", "--completed", "true"]).unwrap();

        match cli.command {
            Commands::Edit {
                id,
                title,
                completed,
                ..
            } => {
                assert_eq!(id, TaskId::new(7));
                assert_eq!(title, None);
                assert_eq!(completed, Some(true));
            }
            other => panic!("parsed into {other:?}"),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let cli = TestCli::try_parse_from(["taskdeck", "serve"]).unwrap();

        match cli.command {
            Commands::Serve {
                host,
                port,
                data_file,
            } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8000);
                assert_eq!(data_file, PathBuf::from("tasks.json"));
            }
            other => panic!("parsed into {other:?}"),
        }
    }
}
