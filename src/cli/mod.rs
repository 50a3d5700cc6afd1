//! Command-line interface.
//!
//! With no subcommand the kiosk starts; the other commands inspect the
//! screen graph and the effective configuration without touching the
//! terminal.

mod completions;

use crate::app::App;
use crate::config::Config;
use crate::navigation::{EdgeRow, ScreenGraph};
use crate::styles::{Theme, ThemeType};
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Instant;

/// Self-service kiosk for government citizen services
#[derive(Parser, Debug)]
#[command(name = "kioskflow", version, about = "Self-service kiosk for government citizen services", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter (e.g. "debug", "kioskflow=trace"); overrides RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the kiosk (default)
    Run,
    /// Print the screen graph
    Graph {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_or_create(&self.config_path()).context("Failed to load configuration")
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match &self.command {
            None | Some(Commands::Run) => self.cmd_run(),
            Some(Commands::Graph { json }) => Self::cmd_graph(*json),
            Some(Commands::Config) => self.cmd_config(),
            Some(Commands::Completions { shell }) => completions::generate(*shell),
        }
    }

    fn cmd_run(&self) -> Result<()> {
        let config = self.load_config()?;
        let theme_type = if std::env::var_os("NO_COLOR").is_some() {
            ThemeType::NoColor
        } else {
            config.theme.parse().unwrap_or_default()
        };

        let mut tui = Tui::new()?;
        let mut app = App::new(config, Theme::new(theme_type), Instant::now());
        app.run(&mut tui)
    }

    fn cmd_graph(json: bool) -> Result<()> {
        let rows = ScreenGraph::standard().rows();
        if json {
            let out = serde_json::to_string_pretty(&rows).context("Failed to serialize graph")?;
            println!("{}", out);
        } else {
            print!("{}", format_graph(&rows));
        }
        Ok(())
    }

    fn cmd_config(&self) -> Result<()> {
        let config = self.load_config()?;
        println!("# {}", self.config_path().display());
        print!("{}", config.to_toml()?);
        Ok(())
    }
}

/// Plain-text edge table, one edge per line
pub fn format_graph(rows: &[EdgeRow]) -> String {
    let width = rows
        .iter()
        .map(|r| r.from.as_str().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let mut label = row.intent.as_str().to_string();
        if let Some(choice) = row.choice {
            label.push_str(&format!("[{}]", choice));
        }
        out.push_str(&format!(
            "{:<width$}  --{}-->  {}\n",
            row.from.as_str(),
            label,
            row.to.as_str(),
            width = width
        ));
    }
    out
}
