//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folders of named, aliased text sheets. Run without a command to open the dashboard.
#[derive(Parser, Debug)]
#[command(name = "keeper", version, about)]
pub struct CliArgs {
    /// Store file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a folder
    #[command(visible_alias = "nf")]
    NewFolder { name: String },

    /// Remove a folder
    #[command(visible_alias = "rf")]
    RemoveFolder {
        name: String,
        /// Also remove every sheet in the folder
        #[arg(long)]
        cascade: bool,
    },

    /// List all folders
    #[command(visible_alias = "lf")]
    ListFolders,

    /// Write a new sheet in the external editor
    #[command(visible_alias = "ns")]
    NewSheet {
        folder: String,
        name: String,
        alias: String,
    },

    /// Remove a sheet by alias
    #[command(visible_alias = "rs")]
    RemoveSheet { alias: String },

    /// List the sheets in a folder
    #[command(visible_alias = "ls")]
    ListSheets { folder: String },

    /// Print a sheet
    #[command(visible_alias = "cat")]
    Show { alias: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_no_command_opens_dashboard() {
        let args = CliArgs::try_parse_from(["keeper"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.store.is_none());
    }

    #[test]
    fn test_short_aliases() {
        let args = CliArgs::try_parse_from(["keeper", "ns", "work", "standup", "su"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::NewSheet {
                folder: "work".into(),
                name: "standup".into(),
                alias: "su".into(),
            })
        );

        let args = CliArgs::try_parse_from(["keeper", "rf", "work", "--cascade"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::RemoveFolder {
                name: "work".into(),
                cascade: true,
            })
        );
    }

    #[test]
    fn test_store_flag_after_subcommand() {
        let args = CliArgs::try_parse_from(["keeper", "lf", "--store", "/tmp/k.json"]).unwrap();
        assert_eq!(args.store, Some(PathBuf::from("/tmp/k.json")));
        assert_eq!(args.command, Some(Command::ListFolders));
    }

    #[test]
    fn test_wrong_arity_rejected() {
        assert!(CliArgs::try_parse_from(["keeper", "ns", "work", "standup"]).is_err());
        assert!(CliArgs::try_parse_from(["keeper", "nf"]).is_err());
    }
}
