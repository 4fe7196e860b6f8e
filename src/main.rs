//! Wunderlist Cmd - Terminal client for Wunderlist lists and tasks

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::error;
use wunderlist_cmd::api::Client;
use wunderlist_cmd::cli::{self, Cli, Commands};
use wunderlist_cmd::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("WLC_LOG").unwrap_or_else(|_| "wunderlist_cmd=warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Completion generation needs neither config nor network.
    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "wlc", &mut std::io::stdout());
            return Ok(());
        }
        None => {
            Cli::command().print_help()?;
            std::process::exit(255);
        }
        _ => {}
    }

    // Config problems are fatal before any network call is attempted.
    let config = match Config::load_default() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            std::process::exit(255);
        }
    };
    let client = Client::new(&config)?;

    match cli.command {
        Some(Commands::List { command }) => cli::list::run(&client, command).await,
        Some(Commands::Create { command }) => cli::create::run(&client, command).await,
        Some(Commands::Show { command }) => cli::show::run(&client, command).await,
        Some(Commands::Done(args)) => cli::done::run(&client, args).await,
        Some(Commands::Delete(args)) => cli::delete::run(&client, args).await,
        Some(Commands::Update(args)) => cli::update::run(&client, args).await,
        _ => unreachable!(),
    }
}
