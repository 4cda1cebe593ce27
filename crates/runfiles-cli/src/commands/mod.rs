//! Command implementations for runfiles-cli

pub mod env;
pub mod path;
pub mod run;

pub use env::{run_env, run_info};
pub use path::run_path;
pub use run::run_program;
