//! Env and info command implementations

use std::collections::BTreeMap;
use std::io::{self, Write};

use colored::Colorize;
use runfiles::Runfiles;
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Serialize)]
struct DiscoveryInfo {
    source: Option<&'static str>,
    variable: Option<&'static str>,
    location: Option<String>,
    env: Vec<String>,
}

/// Run the env command
///
/// Prints `KEY=VALUE` lines, or a JSON object of variables.
pub fn run_env(runfiles: &Runfiles, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        let vars: BTreeMap<&str, String> = runfiles
            .env_vars()
            .into_iter()
            .map(|(key, value)| (key, value.to_string_lossy().into_owned()))
            .collect();
        serde_json::to_writer_pretty(&mut out, &vars)?;
        writeln!(out)?;
    } else {
        for entry in runfiles.env() {
            writeln!(out, "{entry}")?;
        }
    }
    Ok(())
}

/// Run the info command
pub fn run_info(runfiles: &Runfiles, json: bool) -> Result<()> {
    let (variable, location) = match runfiles.env_vars().into_iter().next() {
        Some((key, value)) => (Some(key), Some(value.to_string_lossy().into_owned())),
        None => (None, None),
    };
    let info = DiscoveryInfo {
        source: runfiles.source().map(|s| s.as_str()),
        variable,
        location,
        env: runfiles.env(),
    };

    if json {
        let mut out = io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, &info)?;
        writeln!(out)?;
        return Ok(());
    }

    println!("{}", "Runfiles".bold());
    println!();
    println!(
        "{}:     {}",
        "Source".dimmed(),
        info.source.unwrap_or("none").cyan()
    );
    println!(
        "{}:   {}",
        "Variable".dimmed(),
        info.variable.unwrap_or("none")
    );
    println!(
        "{}:   {}",
        "Location".dimmed(),
        info.location.as_deref().unwrap_or("none")
    );
    Ok(())
}
