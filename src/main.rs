//! Keeper - Terminal Note Organizer
//!
//! Keeps folders of named, aliased text sheets. Subcommands manage the store
//! from the shell; with no subcommand a three-pane dashboard is opened.

use clap::Parser;
use std::process::ExitCode;

use keeper::application::{commands, App};
use keeper::cli::{CliArgs, Command};
use keeper::domain::KeeperResult;
use keeper::infrastructure::{editor, logging, Config, JsonStore};
use keeper::presentation::{run_app, terminal, CrosstermEvents, Renderer, Theme};

/// Entry point for keeper.
///
/// Resolves configuration, opens the store, and either runs one command or
/// hands control to the dashboard. Every failure is reported as
/// `error: <message>` with exit status 1.
fn main() -> ExitCode {
    let args = CliArgs::parse();
    let config = Config::from_env(args.store.as_deref());
    logging::init(&config);
    tracing::info!(store = %config.store_path.display(), "keeper starting");

    let store = match JsonStore::open(&config.store_path) {
        Ok(store) => store,
        Err(err) => return fail(&err),
    };

    let outcome = match args.command {
        Some(command) => run_command(command, store, &config),
        None => run_dashboard(store),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

fn fail(err: &dyn std::error::Error) -> ExitCode {
    tracing::error!(error = %err, "keeper failed");
    eprintln!("error: {err}");
    ExitCode::FAILURE
}

fn run_command(command: Command, mut store: JsonStore, config: &Config) -> KeeperResult<()> {
    match command {
        Command::NewFolder { name } => {
            let id = commands::new_folder(&mut store, &name)?;
            println!("created new folder with id {id}");
        }
        Command::RemoveFolder { name, cascade } => {
            let removed = commands::remove_folder(&mut store, &name, cascade)?;
            if cascade {
                println!("folder removed successfully along with {removed} sheet(s)");
            } else {
                println!("folder removed successfully");
            }
        }
        Command::ListFolders => print!("{}", commands::list_folders(&store)?),
        Command::NewSheet { folder, name, alias } => {
            commands::precheck_new_sheet(&store, &folder, &alias)?;
            let body = editor::capture(&config.editor, config.max_sheet_bytes)?;
            let id = commands::new_sheet(&mut store, &folder, &name, &alias, &body)?;
            println!("created new sheet with id {id}");
        }
        Command::RemoveSheet { alias } => {
            commands::remove_sheet(&mut store, &alias)?;
            println!("sheet removed successfully");
        }
        Command::ListSheets { folder } => print!("{}", commands::list_sheets(&store, &folder)?),
        Command::Show { alias } => println!("{}", commands::show_sheet(&store, &alias)?),
    }
    Ok(())
}

/// Loads the dashboard before touching the terminal, so a store that cannot
/// be read fails on a normal screen. Once raw mode is on, the terminal is
/// restored whatever the loop returns.
fn run_dashboard(store: JsonStore) -> KeeperResult<()> {
    let mut app = App::load(store)?;

    let mut tui = terminal::init()?;
    let renderer = Renderer::new(Theme::default());
    let result = run_app(&mut tui, &mut app, &renderer, &mut CrosstermEvents);
    let restored = terminal::restore(&mut tui);

    result?;
    restored?;
    tracing::info!("dashboard closed");
    Ok(())
}
