use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;
use unbarrel_rewrite::Config;

#[derive(Parser)]
#[command(name = "unbarrel")]
#[command(about = "Flatten barrel imports in TypeScript projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite imports of the barrel module into direct imports
    Rewrite(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Rewrite(cfg) => {
            info!("Running barrel import rewrite");
            debug!(
                "Config: root={:?}, src_dir={:?}, tests_dir={:?}, barrel={:?}",
                cfg.root, cfg.src_dir, cfg.tests_dir, cfg.barrel
            );

            let result = unbarrel_rewrite::run_rewrite(cfg, &mut stdout)?;

            let elapsed_ms = start.elapsed().as_millis();

            if result.files_rewritten.is_empty() {
                unbarrel_rewrite::print_nothing_to_rewrite(&mut stdout)?;
            } else {
                unbarrel_rewrite::print_summary(&mut stdout, &result)?;
            }

            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files.",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                result.files_scanned.to_string().cyan()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}
