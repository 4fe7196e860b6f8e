//! clap command tree
//!
//! The original tool dispatched on a command word plus a kind word
//! (`list tasks`, `create list`, ...). The pairings are enumerated here
//! exhaustively; combinations outside the tree are parser errors.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "wlc")]
#[command(about = "Manage Wunderlist lists and tasks from the terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List lists or tasks
    #[command(visible_alias = "ls")]
    List {
        #[command(subcommand)]
        command: ListCommands,
    },

    /// Create a list or a task
    #[command(visible_alias = "cr")]
    Create {
        #[command(subcommand)]
        command: CreateCommands,
    },

    /// Show a single record
    #[command(visible_alias = "sh")]
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },

    /// Mark a task as done
    #[command(visible_alias = "dn")]
    Done(TaskRefArgs),

    /// Delete a task
    Delete(TaskRefArgs),

    /// Update a task's title or due date
    #[command(visible_alias = "upd")]
    Update(UpdateArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// All lists
    #[command(visible_alias = "ls")]
    Lists,

    /// Tasks in one list
    #[command(visible_alias = "ts")]
    Tasks(ListTasksArgs),
}

#[derive(Args)]
pub struct ListTasksArgs {
    /// List id or title
    pub in_list: String,

    /// Show completed tasks instead of pending ones
    #[arg(short, long)]
    pub completed: bool,

    /// Only tasks dated within an inclusive range
    #[arg(short, long, num_args = 2, value_names = ["START", "END"])]
    pub period: Option<Vec<String>>,
}

#[derive(Subcommand)]
pub enum CreateCommands {
    /// A new list
    #[command(visible_alias = "ls")]
    List(CreateListArgs),

    /// A new task
    #[command(visible_alias = "ts")]
    Task(CreateTaskArgs),
}

#[derive(Args)]
pub struct CreateListArgs {
    /// List title
    pub title: String,
}

#[derive(Args)]
pub struct CreateTaskArgs {
    /// List id or title
    pub in_list: String,

    /// Task title
    pub title: String,

    /// Due date (D, M-D or Y-M-D)
    #[arg(short = 'd', long = "due_date")]
    pub due_date: Option<String>,
}

#[derive(Subcommand)]
pub enum ShowCommands {
    /// Task details
    #[command(visible_alias = "ts")]
    Task(TaskRefArgs),
}

#[derive(Args)]
pub struct TaskRefArgs {
    /// Task id
    pub task_id: u64,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Task id
    pub task_id: u64,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New due date (D, M-D or Y-M-D)
    #[arg(short = 'd', long = "due_date")]
    pub due_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(argv)
    }

    #[test]
    fn test_command_tree_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_tasks_with_aliases() {
        for argv in [
            &["wlc", "list", "tasks", "Inbox"][..],
            &["wlc", "ls", "ts", "Inbox"][..],
        ] {
            let cli = parse(argv).unwrap();
            match cli.command {
                Some(Commands::List {
                    command: ListCommands::Tasks(args),
                }) => {
                    assert_eq!(args.in_list, "Inbox");
                    assert!(!args.completed);
                    assert!(args.period.is_none());
                }
                _ => panic!("wrong parse for {:?}", argv),
            }
        }
    }

    #[test]
    fn test_list_tasks_period_takes_two_values() {
        let cli = parse(&["wlc", "ls", "ts", "7", "-c", "-p", "3-1", "3-31"]).unwrap();
        match cli.command {
            Some(Commands::List {
                command: ListCommands::Tasks(args),
            }) => {
                assert!(args.completed);
                assert_eq!(args.period.unwrap(), vec!["3-1", "3-31"]);
            }
            _ => panic!("wrong parse"),
        }

        assert!(parse(&["wlc", "ls", "ts", "7", "-p", "3-1"]).is_err());
    }

    #[test]
    fn test_create_task_due_date_flag() {
        let cli = parse(&["wlc", "cr", "ts", "Inbox", "Buy milk", "--due_date", "15"]).unwrap();
        match cli.command {
            Some(Commands::Create {
                command: CreateCommands::Task(args),
            }) => {
                assert_eq!(args.in_list, "Inbox");
                assert_eq!(args.title, "Buy milk");
                assert_eq!(args.due_date.as_deref(), Some("15"));
            }
            _ => panic!("wrong parse"),
        }
    }

    #[test]
    fn test_done_and_delete_take_bare_task_id() {
        let cli = parse(&["wlc", "dn", "42"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Done(TaskRefArgs { task_id: 42 }))
        ));

        let cli = parse(&["wlc", "delete", "42"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Delete(TaskRefArgs { task_id: 42 }))
        ));

        assert!(parse(&["wlc", "done", "not-a-number"]).is_err());
    }

    #[test]
    fn test_update_flags() {
        let cli = parse(&["wlc", "upd", "42", "-t", "New title", "-d", "3-15"]).unwrap();
        match cli.command {
            Some(Commands::Update(args)) => {
                assert_eq!(args.task_id, 42);
                assert_eq!(args.title.as_deref(), Some("New title"));
                assert_eq!(args.due_date.as_deref(), Some("3-15"));
            }
            _ => panic!("wrong parse"),
        }
    }

    #[test]
    fn test_unsupported_pairing_is_a_parse_error() {
        // `update list` was never a valid pairing.
        assert!(parse(&["wlc", "update", "list"]).is_err());
        assert!(parse(&["wlc", "show", "lists"]).is_err());
    }

    #[test]
    fn test_no_command_parses_to_none() {
        let cli = parse(&["wlc"]).unwrap();
        assert!(cli.command.is_none());
    }
}
