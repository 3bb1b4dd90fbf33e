use crate::output::print_snapshot;
use access_core::load_export;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_show(file: &Path) -> Result<()> {
    let data = load_export(file).with_context(|| format!("Failed to load {}", file.display()))?;
    print_snapshot(&data);
    Ok(())
}
