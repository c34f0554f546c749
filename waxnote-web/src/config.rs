//! Command-line and environment configuration

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

/// Album review web service
#[derive(Debug, Parser)]
#[command(name = "waxnote-web", version, about)]
pub struct Args {
    /// Port to listen on
    #[arg(env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Data folder holding the review database (overrides WAXNOTE_DATA)
    #[arg(long)]
    pub data_folder: Option<PathBuf>,
}

/// Parse command-line arguments
///
/// Usage errors print the usage message and exit with status 1;
/// `--help` and `--version` keep their normal exit behavior.
pub fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn default_port_is_5000() {
        std::env::remove_var("PORT");
        let args = Args::try_parse_from(["waxnote-web"]).unwrap();
        assert_eq!(args.port, 5000);
        assert!(args.data_folder.is_none());
    }

    #[test]
    #[serial]
    fn positional_port_argument() {
        std::env::remove_var("PORT");
        let args = Args::try_parse_from(["waxnote-web", "8080"]).unwrap();
        assert_eq!(args.port, 8080);
    }

    #[test]
    #[serial]
    fn port_from_environment() {
        std::env::set_var("PORT", "9090");
        let args = Args::try_parse_from(["waxnote-web"]).unwrap();
        assert_eq!(args.port, 9090);
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn cli_port_wins_over_environment() {
        std::env::set_var("PORT", "9090");
        let args = Args::try_parse_from(["waxnote-web", "8080"]).unwrap();
        assert_eq!(args.port, 8080);
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn extra_arguments_are_rejected() {
        std::env::remove_var("PORT");
        assert!(Args::try_parse_from(["waxnote-web", "8080", "extra"]).is_err());
    }

    #[test]
    #[serial]
    fn non_numeric_port_is_rejected() {
        std::env::remove_var("PORT");
        assert!(Args::try_parse_from(["waxnote-web", "not-a-port"]).is_err());
    }

    #[test]
    fn data_folder_flag() {
        let args =
            Args::try_parse_from(["waxnote-web", "--data-folder", "/tmp/waxnote"]).unwrap();
        assert_eq!(args.data_folder, Some(PathBuf::from("/tmp/waxnote")));
    }
}
