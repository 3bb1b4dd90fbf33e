use access_core::{OutputFormat, RoleType};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jk-aac",
    version,
    about = "Export Jenkins access control (users, roles, permissions) to YAML or JSON"
)]
pub struct Cli {
    /// Path to a config file, YAML or TOML (default is $HOME/.jk-aac.yaml)
    #[arg(long, env = "JK_AAC_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

/// Snapshot file format
#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum FormatArg {
    #[value(alias = "yml")]
    Yaml,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Authentication scheme used against the server
#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// Login and API token
    Basic,
    /// Bearer token
    Bearer,
}

/// Membership tag written for agent (slave) roles
#[derive(ValueEnum, Clone, Debug, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRoleTag {
    /// Same tag as project roles
    #[default]
    Item,
    /// Distinct `agent` tag
    Agent,
}

impl From<AgentRoleTag> for RoleType {
    fn from(tag: AgentRoleTag) -> Self {
        match tag {
            AgentRoleTag::Item => RoleType::Item,
            AgentRoleTag::Agent => RoleType::Agent,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export users, roles, memberships and permissions to a file
    #[command(visible_alias = "e")]
    Export(ExportArgs),
    /// Create an organization directory with an empty access-config skeleton
    Init {
        /// Organization name (directory to create)
        org: String,
        /// Parent directory (defaults to the current directory)
        #[arg(long, short = 'd')]
        dir: Option<PathBuf>,
    },
    /// Print a summary of a previously exported snapshot
    Show {
        /// Snapshot file (.yaml or .json)
        file: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ExportArgs {
    /// Output path without extension (default: access-config)
    #[arg(long, short = 'p', value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format (default: yaml)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<FormatArg>,

    /// Log every request URL and response body
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Jenkins base URL (overrides config file)
    #[arg(long)]
    pub url: Option<String>,

    /// Admin login for basic auth (overrides config file)
    #[arg(long)]
    pub user: Option<String>,

    /// Admin API token for basic auth (overrides config file)
    #[arg(long)]
    pub token: Option<String>,

    /// Bearer token (overrides config file)
    #[arg(long)]
    pub bearer_token: Option<String>,

    /// Force an authentication scheme instead of inferring it from the credentials
    #[arg(long, value_enum)]
    pub auth: Option<AuthScheme>,

    /// Membership tag for agent roles
    #[arg(long, value_enum)]
    pub agent_role_type: Option<AgentRoleTag>,
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "jk-aac", &mut std::io::stdout());
    }
}
