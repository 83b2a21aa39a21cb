use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use server::{ServerOpts, Startup, parse_debug_flag, serve};

/// System Information API: reports host, runtime and request details over HTTP.
#[derive(Debug, Parser)]
#[command(name = "sysinfo-api", version)]
struct Args {
    /// Address or hostname to bind.
    /// Example: `0.0.0.0`, `127.0.0.1` or `localhost`
    #[arg(long, env = "HOST", default_value = ServerOpts::DEFAULT_HOST)]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = ServerOpts::DEFAULT_PORT)]
    port: u16,

    /// Verbose logging. Only a case-insensitive `true` enables it.
    #[arg(
        long,
        env = "DEBUG",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = debug_flag
    )]
    debug: bool,
}

fn debug_flag(value: &str) -> Result<bool, std::convert::Infallible> {
    Ok(parse_debug_flag(value))
}

impl From<Args> for ServerOpts {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            debug: args.debug,
        }
    }
}

/// `RUST_LOG` wins; otherwise `debug` or `info` depending on `DEBUG`.
fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let startup = Startup::capture();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.debug))
        .with_target(true)
        .init();

    serve(ServerOpts::from(args), startup)
        .await
        .context("System Information API")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let command = Args::command();
        let default = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .map(|arg| {
                    arg.get_default_values()
                        .iter()
                        .map(|value| value.to_string_lossy().into_owned())
                        .collect::<Vec<_>>()
                })
                .unwrap()
        };

        assert_eq!(default("host"), ["0.0.0.0"]);
        assert_eq!(default("port"), ["6000"]);
        assert_eq!(default("debug"), ["false"]);
    }

    #[test]
    fn flags_override() {
        let args = Args::try_parse_from([
            "sysinfo-api",
            "--host",
            "127.0.0.1",
            "--port",
            "8081",
            "--debug",
            "TRUE",
        ])
        .unwrap();

        let opts = ServerOpts::from(args);
        assert_eq!(opts.host, "127.0.0.1");
        assert_eq!(opts.port, 8081);
        assert!(opts.debug);
    }

    #[test]
    fn debug_values_other_than_true_are_false() {
        for value in ["false", "1", "yes", "nope"] {
            let args = Args::try_parse_from([
                "sysinfo-api",
                "--host",
                "0.0.0.0",
                "--port",
                "6000",
                "--debug",
                value,
            ])
            .unwrap();
            assert!(!args.debug, "{value:?}");
        }
    }

    #[test]
    fn hostname_is_accepted() {
        let args =
            Args::try_parse_from(["sysinfo-api", "--host", "localhost", "--port", "6000"]).unwrap();
        assert_eq!(ServerOpts::from(args).host, "localhost");
    }

    #[test]
    fn malformed_port_is_rejected() {
        assert!(Args::try_parse_from(["sysinfo-api", "--port", "sixty"]).is_err());
        assert!(Args::try_parse_from(["sysinfo-api", "--port", "70000"]).is_err());
    }
}
