use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for toruslife")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Run fmt, clippy, tests and doc in sequence
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all targets with warnings denied
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Run the advance() micro-benchmark in release mode
    Bench,
}

impl Commands {
    fn cargo_args(self) -> &'static [&'static str] {
        match self {
            Commands::Check => &[],
            Commands::Fmt => &["fmt", "--all", "--", "--check"],
            Commands::Clippy => &[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
            Commands::Test => &["test", "--workspace"],
            Commands::Doc => &["doc", "--workspace", "--no-deps"],
            Commands::Bench => &["bench", "-p", "toruslife-kernel", "--bench", "bench_advance"],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for step in [Commands::Fmt, Commands::Clippy, Commands::Test, Commands::Doc] {
                cargo(step.cargo_args())?;
            }
        }
        step => cargo(step.cargo_args())?,
    }

    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    println!("==> cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {} failed", args[0]);
    }
    Ok(())
}
