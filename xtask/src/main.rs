use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(author, version, about = "Workspace automation tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// fmt + clippy -D warnings + tests (workspace)
    Ci,
    /// Bake the sample dataset under sample/
    BakeSample {
        /// Base path for the companion files
        base: Option<String>,
    },
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("spawn")?;
    if !status.success() {
        bail!("command failed: {:?}", cmd);
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let mut c = Command::new("cargo");
    c.args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    run(&mut c)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Ci => {
            cargo(&["fmt", "--all"])?;
            cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])?;
            cargo(&["test"])?;
        }
        Cmd::BakeSample { base } => {
            let base = base.unwrap_or_else(|| "sample/population".to_string());
            cargo(&["run", "-p", "population-bake", "--", &base])?;
        }
    }
    Ok(())
}
