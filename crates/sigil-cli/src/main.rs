mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sigil")]
#[command(about = "Generate a random numeric token and print its SHA-256 digest")]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sigil_core=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse();

    commands::generate::run()
}
