//! Satchel CLI: prepare chat attachments from the command line.
//!
//! `satchel prepare <FILE>` runs the full validate/read/encode pipeline on a
//! local file and prints the resulting attachment as JSON, exactly as a chat
//! composer would hand it to the message pipeline.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use satchel_cli::init_tracing;
use satchel_compose::{Composer, FsSource};
use satchel_core::AttachmentPolicy;

#[derive(Parser)]
#[command(name = "satchel", about = "Chat attachment preparation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and encode a file as a chat attachment
    Prepare {
        /// Path to the file to prepare
        file: std::path::PathBuf,
        /// Declared content type; inferred from the extension when omitted
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Print the effective attachment policy
    Policy,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Prepare { file, content_type } => {
            let source = FsSource::new(&file);
            let mut selected = source
                .selected_file()
                .await
                .with_context(|| format!("Failed to inspect {}", file.display()))?;
            if let Some(ct) = content_type {
                selected.content_type = ct;
            }

            let mut composer = Composer::with_default_policy();
            composer.select(&selected, &source).await;

            match composer.current() {
                Some(attachment) => print_json(attachment)?,
                None => {
                    let message = composer
                        .last_error()
                        .unwrap_or("Attachment was not prepared")
                        .to_string();
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
            }
        }
        Commands::Policy => {
            print_json(&AttachmentPolicy::default())?;
        }
    }

    Ok(())
}
