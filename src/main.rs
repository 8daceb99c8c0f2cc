//! Docedit - builds a sample document, prints it and saves it.
//!
//! # Usage
//!
//! ```bash
//! docedit
//! docedit --output notes.txt
//! docedit --storage database
//! docedit --naive
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use docedit::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use docedit::script;
use docedit::storage::StorageKind;

/// Build, print and save a sample document
#[derive(Parser, Debug)]
#[command(name = "docedit", version, about, long_about = None)]
struct Cli {
    /// File the rendered document is written to
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Storage backend
    #[arg(long, value_enum)]
    storage: Option<StorageKind>,

    /// Run the extension-sniffing naive editor instead
    #[arg(long)]
    naive: bool,

    /// Drop the render cache whenever the document changes
    #[arg(long)]
    live_render: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            naive: self.naive,
            live_render: self.live_render,
            storage: self.storage,
            output: self.output.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "resolved configuration");

    let target = script::run(&effective, |rendered| println!("{rendered}"))
        .context("Document not saved")?;
    println!("Document saved to {target}");
    Ok(())
}
