// OTD GUI - app/cli.rs
//
// Command-line parsing. Recognises exactly two directory options:
//
//   --settingsDir | -s <settingsDir>
//   --configDir   | -c <configurationDir>
//
// Parsing never exits the process and never touches shared state; the
// caller decides what to do with a `clap::Error` (normally `Error::exit`).

use crate::core::model::DirectoryOverride;
use crate::util::constants;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// OpenTabletDriver
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, version, about)]
pub struct Cli {
    /// Settings directory
    #[arg(short = 's', long = "settingsDir", value_name = "settingsDir")]
    pub settings_dir: Option<PathBuf>,

    /// Configuration directory
    #[arg(short = 'c', long = "configDir", value_name = "configurationDir")]
    pub config_dir: Option<PathBuf>,
}

impl From<Cli> for DirectoryOverride {
    fn from(cli: Cli) -> Self {
        Self {
            settings: cli.settings_dir,
            configuration: cli.config_dir,
        }
    }
}

/// Parse process arguments (including the program name) into overrides.
pub fn parse_overrides<I, T>(args: I) -> Result<DirectoryOverride, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    tracing::debug!(
        settings_dir = ?cli.settings_dir,
        config_dir = ?cli.config_dir,
        "Command line parsed"
    );
    Ok(cli.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_arguments_yields_no_overrides() {
        let overrides = parse_overrides(["otd-gui"]).unwrap();
        assert_eq!(overrides, DirectoryOverride::default());
    }

    #[test]
    fn test_long_flags() {
        let overrides =
            parse_overrides(["otd-gui", "--settingsDir", "/tmp/s", "--configDir", "/tmp/c"])
                .unwrap();
        assert_eq!(overrides.settings, Some(PathBuf::from("/tmp/s")));
        assert_eq!(overrides.configuration, Some(PathBuf::from("/tmp/c")));
    }

    #[test]
    fn test_short_flags() {
        let overrides = parse_overrides(["otd-gui", "-s", "/tmp/custom"]).unwrap();
        assert_eq!(overrides.settings, Some(PathBuf::from("/tmp/custom")));
        assert_eq!(overrides.configuration, None);

        let overrides = parse_overrides(["otd-gui", "-c", "/etc/otd-config"]).unwrap();
        assert_eq!(overrides.settings, None);
        assert_eq!(overrides.configuration, Some(PathBuf::from("/etc/otd-config")));
    }

    #[test]
    fn test_equals_syntax() {
        let overrides = parse_overrides(["otd-gui", "--configDir=/srv/configs"]).unwrap();
        assert_eq!(overrides.configuration, Some(PathBuf::from("/srv/configs")));
    }

    #[test]
    fn test_unknown_flag_is_a_parse_error() {
        let err = parse_overrides(["otd-gui", "--tabletDir", "/x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_missing_value_is_a_parse_error() {
        let err = parse_overrides(["otd-gui", "--settingsDir"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_positional_argument_is_rejected() {
        assert!(parse_overrides(["otd-gui", "/some/path"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
