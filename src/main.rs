//! To-do Lists - Main Entry Point
//!
//! Command line front end over the `todo_lists` library. Each invocation
//! opens the store, performs one action and prints the resulting lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_lists::formatting::format_collection;
use todo_lists::{Config, FileStorage, ListId, ListStore, RemovalPolicy};

/// Manage named to-do lists stored in a local TOML file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the data file (overrides the config file)
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delete a list when its last task is removed
    #[arg(long)]
    prune_empty_lists: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all lists (default)
    Show,
    /// Create a new list
    CreateList { name: String },
    /// Add a task to a list
    AddTask { list_id: ListId, text: String },
    /// Mark a task done or not done
    Toggle { list_id: ListId, index: usize },
    /// Remove a task from a list
    RemoveTask { list_id: ListId, index: usize },
    /// Rename a task
    Edit {
        list_id: ListId,
        index: usize,
        text: String,
    },
    /// Delete a list and all of its tasks
    DeleteList { list_id: ListId },
}

fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(file) = args.file {
        config.data_file = file;
    }
    if args.prune_empty_lists {
        config.removal_policy = RemovalPolicy::PruneEmptyLists;
    }

    let mut store = ListStore::open(FileStorage::new(&config.data_file), config.removal_policy);

    match args.command.unwrap_or(Command::Show) {
        Command::Show => {}
        Command::CreateList { name } => {
            if store.create_list(&name)?.is_none() {
                eprintln!("List name is empty, nothing created");
            }
        }
        Command::AddTask { list_id, text } => {
            store.set_pending_input(list_id, &text);
            store.add_task(list_id)?;
        }
        Command::Toggle { list_id, index } => store.toggle_task(list_id, index)?,
        Command::RemoveTask { list_id, index } => store.remove_task(list_id, index)?,
        Command::Edit {
            list_id,
            index,
            text,
        } => {
            let Some(current) = store
                .find_list(list_id)
                .and_then(|l| l.task(index))
                .map(|t| t.text.clone())
            else {
                eprintln!("No task {} in list {}", index, list_id);
                return Ok(());
            };
            store.start_edit(list_id, index, &current);
            store.update_edit_draft(&text);
            store.save_edit()?;
        }
        Command::DeleteList { list_id } => store.delete_list(list_id)?,
    }

    println!("{}", format_collection(store.collection(), store.edit_cursor()));
    Ok(())
}
