//! Path command implementation

use std::io::{self, Write};

use runfiles::Runfiles;
use serde::Serialize;

use crate::error::Result;

/// One resolved runfile, as printed by `runfiles path --json`.
#[derive(Debug, Serialize)]
struct ResolvedRunfile<'a> {
    logical: &'a str,
    path: String,
}

/// Run the path command
///
/// Resolves every logical path before printing anything, so a failure
/// leaves stdout empty.
pub fn run_path(runfiles: &Runfiles, logical: &[String], json: bool) -> Result<()> {
    let resolved = logical
        .iter()
        .map(|name| {
            let path = runfiles.path(name)?;
            Ok(ResolvedRunfile {
                logical: name,
                path: path.display().to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &resolved)?;
        writeln!(out)?;
    } else {
        for entry in &resolved {
            writeln!(out, "{}", entry.path)?;
        }
    }
    Ok(())
}
