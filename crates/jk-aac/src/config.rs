use crate::cli::{AgentRoleTag, AuthScheme, ExportArgs};
use access_core::OutputFormat;
use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};
use jenkins_backend::Credentials;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output base name used when none is configured
pub const DEFAULT_OUTPUT_PATH: &str = "access-config";

/// Bare environment variables read without the `JK_AAC_` prefix
const RAW_ENV_KEYS: [&str; 4] = ["jenkins_url", "admin_user", "admin_token", "bearer_token"];

/// Settings for an export run, merged from files, environment and CLI flags
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// Jenkins base URL, copied verbatim into the snapshot
    #[serde(default, deserialize_with = "lenient_string")]
    pub jenkins_url: Option<String>,
    /// Login; numeric ids such as `100234` are taken as text
    #[serde(default, deserialize_with = "lenient_string")]
    pub admin_user: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub admin_token: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bearer_token: Option<String>,
    /// Forced auth scheme; inferred from the credentials when absent
    pub auth: Option<AuthScheme>,
    /// Output base name, extension is appended on write
    pub output_path: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    #[serde(default)]
    pub verbose: bool,
    pub agent_role_type: Option<AgentRoleTag>,
    /// Config files that were found and merged
    #[serde(skip)]
    pub sources: Vec<PathBuf>,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        let mut sources = Vec::new();
        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = if is_toml(&path) {
                    figment.merge(Toml::file(&path))
                } else {
                    figment.merge(Yaml::file(&path))
                };
                sources.push(path);
            }
        }

        // Bare JENKINS_URL / ADMIN_USER / ... first, prefixed variables win over them
        figment = figment
            .merge(Env::raw().only(&RAW_ENV_KEYS))
            .merge(Env::prefixed("JK_AAC_"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))?;
        config.sources = sources;

        Ok(config)
    }

    pub fn merge_with_cli(&mut self, args: &ExportArgs) {
        if let Some(url) = &args.url {
            self.jenkins_url = Some(url.clone());
        }
        if let Some(user) = &args.user {
            self.admin_user = Some(user.clone());
        }
        if let Some(token) = &args.token {
            self.admin_token = Some(token.clone());
        }
        if let Some(token) = &args.bearer_token {
            self.bearer_token = Some(token.clone());
        }
        if let Some(auth) = args.auth {
            self.auth = Some(auth);
        }
        if let Some(path) = &args.path {
            self.output_path = Some(path.clone());
        }
        if let Some(format) = args.format {
            self.output_format = Some(format.into());
        }
        if args.verbose {
            self.verbose = true;
        }
        if let Some(tag) = args.agent_role_type {
            self.agent_role_type = Some(tag);
        }
    }

    pub fn jenkins_url(&self) -> Result<&str> {
        self.jenkins_url.as_deref().filter(|u| !u.is_empty()).ok_or_else(|| {
            anyhow!("Jenkins URL not configured. Set via --url, JENKINS_URL env var, or config file")
        })
    }

    /// Credentials for the configured (or inferred) auth scheme
    pub fn credentials(&self) -> Result<Credentials> {
        let basic = match (&self.admin_user, &self.admin_token) {
            (Some(user), Some(token)) => Some(Credentials::basic(user, token)),
            _ => None,
        };
        let bearer = self.bearer_token.as_deref().map(Credentials::bearer);

        match self.auth {
            Some(AuthScheme::Basic) => basic.ok_or_else(|| {
                anyhow!(
                    "Basic auth requires admin_user and admin_token. Set via --user/--token, \
                     ADMIN_USER/ADMIN_TOKEN env vars, or config file"
                )
            }),
            Some(AuthScheme::Bearer) => bearer.ok_or_else(|| {
                anyhow!(
                    "Bearer auth requires bearer_token. Set via --bearer-token, \
                     BEARER_TOKEN env var, or config file"
                )
            }),
            None => basic.or(bearer).ok_or_else(|| {
                anyhow!(
                    "Credentials not configured. Set admin_user/admin_token \
                     (--user/--token) or bearer_token (--bearer-token)"
                )
            }),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    pub fn agent_role_type(&self) -> AgentRoleTag {
        self.agent_role_type.unwrap_or_default()
    }
}

/// Scalar as written in a file or environment variable
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

/// Env and YAML values are typed before extraction, so all-digit logins and
/// tokens arrive as integers.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let scalar: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(scalar.map(|value| match value {
        Scalar::Text(s) => s,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_home_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jk-aac").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("jk-aac").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("jk-aac")
            .join("config.toml")
    })
}

/// `~/.jk-aac.yaml`
fn get_home_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".jk-aac.yaml"))
}
