use std::path::PathBuf;

use clap::{Parser, Subcommand};

use taskkeeper::config;
use taskkeeper::logging;
use taskkeeper::store::TaskStore;
use taskkeeper::task::Priority;

#[derive(Parser, Debug)]
#[command(name = "taskkeeper", version)]
#[command(about = "A simple CLI task tracker backed by a JSON file")]
struct Cli {
    /// Path to the tasks JSON file (falls back to TASKS_FILE_PATH, then tasks.json)
    #[arg(long, value_name = "PATH", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new task
    Add {
        /// The description of the task
        description: String,
        /// The priority of the task
        #[arg(short, long, value_enum, default_value_t = Priority::Normal)]
        priority: Priority,
    },
    /// List all tasks
    List,
    /// Delete a task by its ID
    Delete {
        /// The ID of the task to delete
        task_id: u32,
    },
}

fn main() {
    // Guard must outlive all logging calls so the file writer flushes.
    let _guard = logging::init();

    let cli = Cli::parse();
    let store = TaskStore::new(config::tasks_file(cli.file));

    match cli.command {
        Commands::Add {
            description,
            priority,
        } => {
            tracing::info!(%priority, "received add command");
            match store.add(&description, priority) {
                Ok(task) => println!("✅ Task added with ID: {}", task.id),
                Err(err) => println!("❌ Failed to add task: {err}"),
            }
        }
        Commands::List => {
            tracing::info!("received list command");
            let mut tasks = store.list();
            if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                // Sort by ID for consistent display; the store itself
                // guarantees no ordering.
                tasks.sort_by_key(|task| task.id);
                println!("\n--- Task List ---");
                for task in &tasks {
                    println!(
                        "  ID: {}, Desc: {}, Prio: {}, Status: {}",
                        task.id, task.description, task.priority, task.status
                    );
                }
                println!("-----------------\n");
            }
        }
        Commands::Delete { task_id } => {
            tracing::info!(task_id, "received delete command");
            if store.delete(task_id) {
                println!("✅ Task with ID {task_id} deleted successfully.");
            } else {
                println!("❌ Task with ID {task_id} not found.");
            }
        }
    }
}
