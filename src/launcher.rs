// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opens committed selections with an external tool, one at a time.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use ngfind::errors::LaunchError;

/// Run `tool <root>/<path>` for every path in order, sharing this terminal.
pub fn open_all(paths: &[String], root: &Path, tool: &str) -> Result<(), LaunchError> {
    if paths.is_empty() {
        return Ok(());
    }

    let program = which::which(tool).map_err(|_| LaunchError::ToolNotFound {
        tool: tool.to_string(),
    })?;

    for path in paths {
        let target = root.join(path);
        tracing::info!(tool, path = %target.display(), "opening selection");

        let status = Command::new(&program)
            .arg(&target)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                tool: tool.to_string(),
                path: path.clone(),
                source,
            })?;

        if !status.success() {
            return Err(LaunchError::Failed {
                tool: tool.to_string(),
                path: path.clone(),
                status,
            });
        }
    }

    Ok(())
}

/// Write `<root>/<path>` lines instead of launching anything.
pub fn print_all(paths: &[String], root: &Path, out: &mut impl Write) -> std::io::Result<()> {
    for path in paths {
        writeln!(out, "{}", root.join(path).display())?;
    }
    Ok(())
}
