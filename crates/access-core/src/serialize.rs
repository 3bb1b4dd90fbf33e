//! Rendering snapshots to YAML/JSON files and loading them back

use crate::error::{AccessError, Result};
use crate::models::ExportData;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Encoding of the snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[serde(alias = "yml")]
    Yaml,
    Json,
}

impl OutputFormat {
    /// File extension appended to the output base name
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

/// Encode a snapshot. JSON is pretty-printed with two-space indentation.
pub fn render(data: &ExportData, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => {
            serde_json::to_vec_pretty(data).map_err(|e| AccessError::Serialize(e.to_string()))
        }
        OutputFormat::Yaml => serde_yaml::to_string(data)
            .map(String::into_bytes)
            .map_err(|e| AccessError::Serialize(e.to_string())),
    }
}

/// `base` with the format's extension appended (`access-config` -> `access-config.json`)
pub fn output_path(base: &Path, format: OutputFormat) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Render `data` and write it next to `base`, returning the file written
pub fn write_export(data: &ExportData, base: &Path, format: OutputFormat) -> Result<PathBuf> {
    let bytes = render(data, format)?;
    let path = output_path(base, format);

    let mut file = open_for_write(&path)?;
    file.write_all(&bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote export");

    Ok(path)
}

#[cfg(unix)]
fn open_for_write(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path) -> std::io::Result<fs::File> {
    fs::File::create(path)
}

/// Read a snapshot file back. `.json` files are decoded as JSON, anything else as YAML.
pub fn load_export(path: &Path) -> Result<ExportData> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| AccessError::Parse(e.to_string()))
    } else {
        serde_yaml::from_str(&content).map_err(|e| AccessError::Parse(e.to_string()))
    }
}
