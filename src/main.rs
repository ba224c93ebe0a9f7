#![warn(rust_2018_idioms)]
use clap::Parser;
use color_eyre::Result;
use gummiboot_probe::{cfg, get_extension, BootExtension, Severity};
use tracing_subscriber::prelude::*;

/// Check whether gummiboot (systemd-boot) can be used on this system
#[derive(Parser, Debug)]
#[command(name = "gummiboot-probe", version)]
struct Args {
    /// Print the result as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Only report through the exit status
    #[arg(short, long)]
    quiet: bool,
}

/// Exit status when the probe ran: 0 if usable, 1 otherwise.
const fn exit_code(available: bool) -> i32 {
    if available {
        0
    } else {
        1
    }
}

/// Exit status when configuration or extension setup failed.
const ERROR_EXIT_CODE: i32 = 2;

/// Returns whether gummiboot is usable.
fn run(args: &Args) -> Result<bool> {
    let config = cfg::get_cfg()?;
    tracing::debug!(?config, "Loaded configuration");

    let extension = get_extension(&config)?;
    let availability = extension.is_available();
    tracing::info!(
        extension = extension.name(),
        available = availability.available,
        "Probe finished"
    );

    if args.json {
        println!("{}", serde_json::to_string(&availability)?);
    } else if !args.quiet {
        (availability.messages.iter())
            .filter(|m| m.severity >= Severity::Warn)
            .for_each(|m| eprintln!("{m}"));
        if availability.available {
            println!("{} is available", extension.name());
        }
    }
    Ok(availability.available)
}

fn main() {
    let args = Args::parse();
    setup_logs_and_install_panic_hook();

    let code = match run(&args) {
        Ok(available) => exit_code(available),
        Err(e) => {
            eprintln!("{e:?}");
            ERROR_EXIT_CODE
        }
    };
    std::process::exit(code)
}

/// # Panics
/// - cannot install `color_eyre`
/// - cannot set the global subscriber
fn setup_logs_and_install_panic_hook() {
    color_eyre::install().expect("install color_eyre");
    let sub_builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        // journald is not around in chroots and containers, log to stderr only then
        .with(
            tracing_journald::layer()
                .ok()
                .map(|l| l.with_syslog_identifier("gummiboot-probe".to_owned())),
        );
    tracing::subscriber::set_global_default(sub_builder).expect("unable to set global subscriber");
    tracing::debug!(
        "gummiboot-probe {version}",
        version = env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(true), 0);
        assert_eq!(exit_code(false), 1);
        assert_ne!(ERROR_EXIT_CODE, exit_code(true));
        assert_ne!(ERROR_EXIT_CODE, exit_code(false));
    }

    #[test]
    fn test_args() {
        Args::command().debug_assert();

        let args = Args::try_parse_from(["gummiboot-probe", "--json", "-q"]).unwrap();
        assert!(args.json);
        assert!(args.quiet);

        let args = Args::try_parse_from(["gummiboot-probe"]).unwrap();
        assert!(!args.json);
        assert!(!args.quiet);
    }

    #[test]
    fn test_help_is_not_an_error() {
        let err = Args::try_parse_from(["gummiboot-probe", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);

        let err = Args::try_parse_from(["gummiboot-probe", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
