//! Command-line interface
//!
//! Follows the dynamic-inventory script protocol: `--list` prints every host
//! with its variables, `--host <name>` prints one host's variables.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// What the runtime asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Full inventory document
    List,
    /// Variables of a single host
    Host(String),
}

#[derive(Debug, Parser)]
#[command(name = "netbox-devices")]
#[command(version, about = "Dynamic inventory of NetBox devices")]
pub struct Cli {
    /// Print the full inventory (default)
    #[arg(long, conflicts_with = "host")]
    pub list: bool,

    /// Print the variables of a single host
    #[arg(long, value_name = "HOSTNAME")]
    pub host: Option<String>,

    /// YAML inventory source file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// NetBox base URL, e.g. https://netbox.local (overrides file and NETBOX_URL)
    #[arg(long, value_name = "URL")]
    pub netbox_host_url: Option<String>,

    /// NetBox API token (overrides file and NETBOX_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub netbox_auth_token: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> Mode {
        match &self.host {
            Some(host) => Mode::Host(host.clone()),
            None => Mode::List,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_list() {
        let cli = Cli::try_parse_from(["netbox-devices"]).expect("args");
        assert_eq!(cli.mode(), Mode::List);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_host_mode() {
        let cli = Cli::try_parse_from(["netbox-devices", "--host", "sw1"]).expect("args");
        assert_eq!(cli.mode(), Mode::Host("sw1".to_string()));
    }

    #[test]
    fn test_list_and_host_conflict() {
        assert!(Cli::try_parse_from(["netbox-devices", "--list", "--host", "sw1"]).is_err());
    }

    #[test]
    fn test_overrides_and_verbosity() {
        let cli = Cli::try_parse_from([
            "netbox-devices",
            "--list",
            "-c",
            "netbox.yml",
            "--netbox-host-url",
            "https://netbox.local",
            "--netbox-auth-token",
            "abc",
            "-vv",
        ])
        .expect("args");

        assert_eq!(cli.config, Some(PathBuf::from("netbox.yml")));
        assert_eq!(cli.netbox_host_url.as_deref(), Some("https://netbox.local"));
        assert_eq!(cli.netbox_auth_token.as_deref(), Some("abc"));
        assert_eq!(cli.verbose, 2);
    }
}
