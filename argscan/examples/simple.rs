//! Try it with `cargo run --example simple -- greet --name you -r 2`

use argscan::{ArgsError, ArgsParser};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ArgsError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut parser = ArgsParser::from_std_args();
    let args = parser.parse()?;

    if args.has_option("-h", &["--help"]) {
        tracing::info!("usage: simple <command> [--name NAME] [--repeat N] [--dump]");
        return Ok(());
    }

    if args.has_option("--dump", &[]) {
        eprint!("{}", args.dump());
    }

    let Some(cmd) = args.at(0) else {
        tracing::error!("no positional arg found at index 0");
        std::process::exit(1);
    };
    tracing::info!("positional arg found at index 0 = {cmd}");

    let name = args.get_string("--name", &["-n"]).unwrap_or("world");
    let repeat = args.get_int("--repeat", &["-r"])?.unwrap_or(1);
    for _ in 0..repeat {
        tracing::info!("{cmd}, {name}!");
    }

    Ok(())
}
