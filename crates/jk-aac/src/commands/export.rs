use crate::config::Config;
use crate::output::print_export_summary;
use access_core::{collect_export, output_path, write_export, ExportOptions};
use anyhow::{Context, Result};
use jenkins_backend::JenkinsClient;

pub fn handle_export(config: &Config) -> Result<()> {
    for source in &config.sources {
        tracing::info!(path = %source.display(), "Using config file");
    }

    let url = config.jenkins_url()?;
    let credentials = config.credentials()?;
    let format = config.output_format();
    let base = config.output_path();

    let client = JenkinsClient::new(url, credentials);
    let options = ExportOptions::new(url).with_agent_role_type(config.agent_role_type().into());

    let data = collect_export(&client, &options)
        .with_context(|| format!("Failed to export access configuration from {}", url))?;

    let path = write_export(&data, &base, format)
        .with_context(|| format!("Failed to write {}", output_path(&base, format).display()))?;

    print_export_summary(&data, &path);
    Ok(())
}
