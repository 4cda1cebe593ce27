//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use runfiles::Options;

/// Runfiles - Locate build-system runfiles and launch programs that need them
#[derive(Parser, Debug)]
#[command(name = "runfiles")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runfiles manifest file to use
    #[arg(long, global = true, value_name = "FILE", env = "RUNFILES_MANIFEST_FILE")]
    pub manifest: Option<PathBuf>,

    /// Runfiles directory to use when no manifest is given
    #[arg(long, global = true, value_name = "DIR", env = "RUNFILES_DIR")]
    pub directory: Option<PathBuf>,

    /// Program whose `.runfiles_manifest` or `.runfiles` should be probed
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub program: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Discovery options built from the global flags.
    pub fn options(&self) -> Options {
        let mut options = Options::new();
        if let Some(manifest) = &self.manifest {
            options = options.manifest_file(manifest);
        }
        if let Some(directory) = &self.directory {
            options = options.directory(directory);
        }
        if let Some(program) = &self.program {
            options = options.program_name(program);
        }
        options
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the absolute path of one or more runfiles
    ///
    /// Examples:
    ///   runfiles path my_repo/pkg/data.txt
    ///   runfiles --manifest MANIFEST path a b --json
    Path {
        /// Logical runfile paths, relative to the runfiles root
        #[arg(required = true)]
        logical: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print environment variables that let subprocesses find the same runfiles
    Env {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show how runfiles were discovered
    Info {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Run a program shipped as a runfile, passing the runfiles environment
    ///
    /// The exit code of the program is relayed.
    Run {
        /// Logical path of the program to run
        logical: String,

        /// Arguments passed to the program
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_path_with_json() {
        let cli = Cli::try_parse_from(["runfiles", "path", "a/b", "c", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Path {
                logical: vec!["a/b".to_string(), "c".to_string()],
                json: true,
            }
        );
    }

    #[test]
    fn test_path_requires_argument() {
        assert!(Cli::try_parse_from(["runfiles", "path"]).is_err());
    }

    #[test]
    fn test_parse_run_passes_hyphen_args() {
        let cli = Cli::try_parse_from([
            "runfiles", "run", "repo/tool", "--", "--flag", "value",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                logical: "repo/tool".to_string(),
                args: vec!["--flag".to_string(), "value".to_string()],
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["runfiles", "env", "--manifest", "/tmp/M"]).unwrap();
        assert_eq!(cli.manifest, Some(PathBuf::from("/tmp/M")));
    }
}
