use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config_file::Settings;
use crate::types::Page;

/// Organic Guide - organic vs conventional food in the terminal
#[derive(Parser)]
#[command(name = "organic-guide")]
#[command(about = "Survey data, organic price premiums and research sources in a terminal UI")]
#[command(version)]
pub struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    ///
    /// The interactive UI owns the terminal, so it only logs when a log file
    /// is given.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing the chart images
    #[arg(long, global = true)]
    pub assets_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the guide interactively (default)
    Browse {
        #[command(flatten)]
        selection: Selection,
    },
    /// Render one page as plain text
    Print {
        #[command(flatten)]
        selection: Selection,

        /// Output the page blocks as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Wrap width for text output
        #[arg(long, default_value_t = 80)]
        width: usize,
    },
    /// Show the organic premium for a product
    Premium {
        /// Product label, e.g. "Chocolate"
        item: String,

        /// Conventional price to apply the premium to
        #[arg(long)]
        base_price: Option<f64>,
    },
    /// List the research sources for a topic
    Sources {
        /// Topic label, e.g. "What are pesticides?"
        topic: String,
    },
    /// List selector options
    List {
        #[arg(value_enum)]
        what: ListKind,
    },
    /// Print the full catalog as JSON
    Export,
}

/// Initial selections shared by `browse` and `print`
#[derive(Args, Debug, Clone, Default)]
pub struct Selection {
    /// Page to show (home, guide)
    #[arg(short, long)]
    pub page: Option<Page>,

    /// Product selected on the home page
    #[arg(short, long)]
    pub item: Option<String>,

    /// Topic selected on the resource guide
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Conventional price used for the worked example
    #[arg(long)]
    pub base_price: Option<f64>,
}

impl Selection {
    /// Layer these flags over `settings`
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(page) = self.page {
            settings.initial_page = page;
        }
        if let Some(item) = &self.item {
            settings.initial_item = Some(item.clone());
        }
        if let Some(topic) = &self.topic {
            settings.initial_topic = Some(topic.clone());
        }
        if let Some(base_price) = self.base_price {
            settings.base_price = base_price;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    /// Products with a price premium
    Items,
    /// Resource guide topics
    Topics,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_print_accepts_page_alias() {
        let cli = Cli::try_parse_from(["organic-guide", "print", "--page", "guide"]).unwrap();
        match cli.command {
            Some(Commands::Print { selection, .. }) => {
                assert_eq!(selection.page, Some(Page::ResourceGuide));
            }
            _ => panic!("expected print command"),
        }
    }

    #[test]
    fn test_selection_overrides_settings() {
        let mut settings = Settings::default();
        let selection = Selection {
            item: Some("Tea".to_string()),
            base_price: Some(4.5),
            ..Selection::default()
        };
        selection.apply(&mut settings);
        assert_eq!(settings.initial_item.as_deref(), Some("Tea"));
        assert_eq!(settings.base_price, 4.5);
        assert_eq!(settings.initial_page, Page::Home);
    }

    #[test]
    fn test_unknown_page_rejected() {
        assert!(Cli::try_parse_from(["organic-guide", "browse", "--page", "about"]).is_err());
    }
}
