mod app;
mod diff;
mod error;
mod file;
mod highlighting;
mod render;
mod theme;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use app::{App, AppConfig};

#[derive(Parser)]
#[command(name = "sidediff")]
#[command(about = "Side-by-side syntax-highlighted diff of two files", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(help = "Original file")]
    original: PathBuf,

    #[arg(help = "Modified file")]
    modified: PathBuf,

    #[arg(long, value_enum, default_value_t = ThemeArg::Dark, help = "Color theme")]
    theme: ThemeArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for theme::Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => theme::Theme::Dark,
            ThemeArg::Light => theme::Theme::Light,
        }
    }
}

fn main() {
    // Diagnostics go to stderr so they never mix into the rendered panes
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let app = App::new(AppConfig {
        original: cli.original,
        modified: cli.modified,
        theme: cli.theme.into(),
    })?;
    app.run()?;
    Ok(())
}
