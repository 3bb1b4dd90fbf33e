use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Skeleton file created inside a new organization directory
pub const SKELETON_FILE_NAME: &str = "jenkins-access-config.yaml";
const SKELETON_CONTENT: &str = "organizations:\n";

pub fn handle_init(org: &str, dir: Option<&Path>) -> Result<()> {
    let org_dir = init_org_dir(org, dir)?;
    println!("Initialization completed in {}", org_dir.display());
    Ok(())
}

/// Create `dir/org` and the access-config skeleton inside it
///
/// Fails if the organization directory already exists.
pub fn init_org_dir(org: &str, dir: Option<&Path>) -> Result<PathBuf> {
    let parent = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let org_dir = parent.join(org);
    create_dir(&org_dir)
        .with_context(|| format!("Failed to create directory: {}", org_dir.display()))?;

    let skeleton = org_dir.join(SKELETON_FILE_NAME);
    fs::write(&skeleton, SKELETON_CONTENT)
        .with_context(|| format!("Failed to write {}", skeleton.display()))?;

    Ok(org_dir)
}

#[cfg(unix)]
fn create_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir(path)
}
