//! farmctl commands
//!
//! Commands write to the given writer so they can be driven from tests.

pub mod crop;
pub mod farmer;

pub use crop::CropCommand;
pub use farmer::FarmerCommand;

use serde::Serialize;
use std::io::Write;

/// Print `value` as pretty JSON, or each of `lines` in text mode
pub(crate) fn emit<T: Serialize>(
    out: &mut dyn Write,
    json: bool,
    value: &T,
    lines: impl IntoIterator<Item = String>,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    } else {
        for line in lines {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
