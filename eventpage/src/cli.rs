//! Command-line interface definitions for eventpage

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the eventpage application
#[derive(Parser)]
#[command(name = "eventpage")]
#[command(version)]
#[command(about = "Event landing page builder", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for eventpage
#[derive(Subcommand)]
pub enum Commands {
    /// List the available section types and their catalog examples
    ListSections,

    /// Create a page file seeded with one example of every section type
    Init {
        /// Directory to initialize (defaults to current directory)
        path: Option<PathBuf>,

        /// Page title
        #[arg(short, long)]
        title: Option<String>,

        /// Overwrite an existing page file
        #[arg(short, long)]
        force: bool,
    },

    /// Append a section seeded from the catalog
    Add {
        /// Page file
        page: PathBuf,

        /// Section type (nav, hero, agenda, rsvp, guestbook, countdown, gifts, custom)
        kind: String,
    },

    /// Remove a section
    Remove {
        /// Page file
        page: PathBuf,

        /// Section id
        id: String,
    },

    /// Render the page to a standalone HTML file
    Build {
        /// Page file
        #[arg(value_name = "PAGE", default_value = "page.toml")]
        page: PathBuf,

        /// Output HTML file
        #[arg(short, long, default_value = "index.html")]
        output: PathBuf,

        /// Use the dark palette regardless of the page setting
        #[arg(long)]
        dark: bool,

        /// Render the editor canvas instead of the published page
        #[arg(long)]
        edit: bool,

        /// Section id to treat as currently in view
        #[arg(long, value_name = "ID")]
        active: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate section ids and nav link targets
    Validate {
        /// Page file
        #[arg(value_name = "PAGE", default_value = "page.toml")]
        page: PathBuf,

        /// Show warnings as well as errors
        #[arg(short, long)]
        verbose: bool,
    },

    /// Edit the links of a nav section
    Nav {
        #[command(subcommand)]
        command: NavCommand,
    },
}

/// Nav link edits
#[derive(Subcommand)]
pub enum NavCommand {
    /// Change the label of a link
    RenameLink {
        /// Page file
        page: PathBuf,

        /// Nav section id
        #[arg(short, long)]
        section: String,

        /// Link position, starting at 0
        #[arg(short, long)]
        index: usize,

        /// New label
        label: String,
    },

    /// Remove a link
    DeleteLink {
        /// Page file
        page: PathBuf,

        /// Nav section id
        #[arg(short, long)]
        section: String,

        /// Link position, starting at 0
        #[arg(short, long)]
        index: usize,
    },

    /// Append a link
    AddLink {
        /// Page file
        page: PathBuf,

        /// Nav section id
        #[arg(short, long)]
        section: String,

        /// Label for the new link
        #[arg(short, long)]
        label: Option<String>,

        /// Section id the new link points at
        #[arg(long, value_name = "ID")]
        target: Option<String>,
    },
}
