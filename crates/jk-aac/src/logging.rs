use crate::cli::ColorChoice;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,jk_aac=info,access_core=info";
const VERBOSE_FILTER: &str = "warn,jk_aac=debug,jenkins_backend=debug,access_core=debug";

/// Decide color mode from the CLI choice and environment, and apply it to `colored`
pub fn init_color(choice: ColorChoice) -> bool {
    let should_color = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        // Respect NO_COLOR (https://no-color.org/) and only colorize terminals
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
    };

    colored::control::set_override(should_color);
    should_color
}

/// Install the stderr subscriber. `RUST_LOG` wins over the verbose flag.
pub fn init_tracing(verbose: bool, ansi: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(verbose)
        .try_init();
}
