/// Warning output and strict-mode enforcement.
use std::io::Write;
use std::path::{Path, PathBuf};

use super::warning::{Severity, Warning};

/// Write warnings, ordered by object then code, to the destination.
pub fn report_warnings(
    warnings: &[Warning],
    destination: &WarningDestination,
) -> std::io::Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }

    let mut sorted: Vec<&Warning> = warnings.iter().collect();
    sorted.sort_by(|a, b| a.object.cmp(&b.object).then_with(|| a.code.cmp(b.code)));

    match destination {
        WarningDestination::Stderr => write_all(&mut std::io::stderr().lock(), &sorted),
        WarningDestination::File(path) => write_all(&mut std::fs::File::create(path)?, &sorted),
    }
}

fn write_all(out: &mut impl Write, warnings: &[&Warning]) -> std::io::Result<()> {
    for w in warnings {
        writeln!(out, "{w}")?;
    }
    Ok(())
}

/// Fail if any warning is lossy or worse.
pub fn check_strict(warnings: &[Warning]) -> Result<(), StrictViolation> {
    let messages: Vec<String> = warnings
        .iter()
        .filter(|w| w.severity >= Severity::Lossy)
        .map(|w| w.to_string())
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(StrictViolation { messages })
    }
}

/// Error returned when strict mode finds lossy or unsupported results.
#[derive(Debug)]
pub struct StrictViolation {
    pub messages: Vec<String>,
}

impl std::fmt::Display for StrictViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Strict mode: {} finding(s):", self.messages.len())?;
        for msg in &self.messages {
            writeln!(f, "  {msg}")?;
        }
        Ok(())
    }
}

impl std::error::Error for StrictViolation {}

/// Where to send warning output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningDestination {
    Stderr,
    File(PathBuf),
}

impl WarningDestination {
    /// `None` and the literal path `stderr` both mean standard error.
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p.to_str() == Some("stderr") => WarningDestination::Stderr,
            Some(p) => WarningDestination::File(p.to_path_buf()),
            None => WarningDestination::Stderr,
        }
    }
}
