use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.2"
/// Format for dev builds: "v0.3.2\ndev: abc1234 2025-06-01 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("THESIS_GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("THESIS_COMMIT_DATE");
    const IS_RELEASE: &str = env!("THESIS_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "thesis",
    bin_name = "thesis",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Reports are selected by their number in `thesis list` or by exact filename."
)]
#[command(about = "Browse and read investment-thesis reports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the report documents [default: from config, else public/data]
    #[arg(
        long,
        global = true,
        env = "THESIS_DATA_DIR",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List reports, newest period first
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Print the listing response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a report as an investment thesis
    #[command(alias = "v", display_order = 2)]
    View {
        /// Report number or filename (defaults to the configured default report)
        selector: Option<String>,

        /// Print the parsed report document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the path of one or more reports
    #[command(display_order = 3)]
    Path {
        /// Report numbers or filenames
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (data-dir, default-report)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["thesis"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_list_alias_and_json() {
        let cli = Cli::try_parse_from(["thesis", "ls", "--json"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List { json: true }));
    }

    #[test]
    fn test_view_selector_is_optional() {
        let cli = Cli::try_parse_from(["thesis", "v"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::View {
                selector: None,
                json: false
            })
        );

        let cli = Cli::try_parse_from(["thesis", "view", "2"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::View {
                selector: Some("2".into()),
                json: false
            })
        );
    }

    #[test]
    fn test_path_requires_a_selector() {
        assert!(Cli::try_parse_from(["thesis", "path"]).is_err());
        let cli = Cli::try_parse_from(["thesis", "path", "1", "3"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Path {
                selectors: vec!["1".into(), "3".into()]
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["thesis", "list", "--data-dir", "reports", "-v", "--no-color"])
                .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("reports")));
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_config_key_value() {
        let cli = Cli::try_parse_from(["thesis", "config", "data-dir", "reports"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                key: Some("data-dir".into()),
                value: Some("reports".into())
            })
        );
    }
}
