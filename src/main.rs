use std::io;

use anyhow::{anyhow, Result};
use erun::cli::Cli;
use erun::config::Config;
use erun::{entry, printer, CommandExecutor};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        printer::report_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Cli::parse();
    let cfg = Config::load();

    // CLI overrides config
    let executor_cmd = args
        .executor
        .or_else(|| cfg.get("EXECUTOR_CMD"))
        .ok_or_else(|| {
            anyhow!(
                "no executor command: pass --executor or set EXECUTOR_CMD in {}",
                cfg.config_path.display()
            )
        })?;

    let mut exec = CommandExecutor::new(executor_cmd);
    if let Some(shell) = cfg.get("SHELL_NAME") {
        exec = exec.with_shell(shell);
    }

    let stdout = io::stdout();
    entry::run(&exec, stdout.lock()).await
}
