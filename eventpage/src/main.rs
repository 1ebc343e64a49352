//! eventpage - Event landing page builder
//!
//! A CLI tool for assembling event pages from catalog sections, editing
//! their navigation and exporting them to HTML.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, NavCommand};
use eventpage::catalog::SECTION_EXAMPLES;
use eventpage::html_exporter;
use eventpage::interaction::{self, Event, NavCallbacks, NoScroll};
use eventpage::page_config::{PageConfig, PageSettings, PAGE_FILE_NAME};
use eventpage::page_model::PageDocument;
use eventpage::render::RenderMode;
use eventpage::section_model::{NavUpdate, SectionType};
use eventpage::validation;
use eventpage::view::Action;
use std::path::{Path, PathBuf};

/// Main entry point for the eventpage CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ListSections => {
            init_logging(false);
            handle_list_sections_command();
        }

        Commands::Init { path, title, force } => {
            init_logging(false);
            handle_init_command(path, title, force)?;
        }

        Commands::Add { page, kind } => {
            init_logging(false);
            handle_add_command(&page, &kind)?;
        }

        Commands::Remove { page, id } => {
            init_logging(false);
            handle_remove_command(&page, &id)?;
        }

        Commands::Build {
            page,
            output,
            dark,
            edit,
            active,
            verbose,
        } => {
            init_logging(verbose);
            handle_build_command(&page, &output, dark, edit, active.as_deref())?;
        }

        Commands::Validate { page, verbose } => {
            init_logging(verbose);
            handle_validate_command(&page, verbose)?;
        }

        Commands::Nav { command } => {
            init_logging(false);
            handle_nav_command(command)?;
        }
    }

    Ok(())
}

/// Initialize logging; `RUST_LOG` still overrides the level
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Handle the list-sections command
fn handle_list_sections_command() {
    println!("Available section types:\n");

    for kind in SECTION_EXAMPLES.kinds() {
        let examples = SECTION_EXAMPLES.examples(kind);
        println!("  {} ({} examples)", kind, examples.len());
        for example in examples {
            match example.content().title() {
                Some(title) if !title.is_empty() => {
                    println!("    - {}: {}", example.id(), title)
                }
                _ => println!("    - {}", example.id()),
            }
        }
        println!();
    }

    println!("Usage: eventpage add <page> <type>");
    println!("Example: eventpage add page.toml countdown");
}

/// Handle the init command
fn handle_init_command(path: Option<PathBuf>, title: Option<String>, force: bool) -> Result<()> {
    let target_path = path.unwrap_or_else(|| PathBuf::from("."));
    let page_path = target_path.join(PAGE_FILE_NAME);

    if page_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it",
            page_path.display()
        );
    }

    // Create the target directory if it doesn't exist
    if !target_path.exists() {
        std::fs::create_dir_all(&target_path)
            .with_context(|| format!("Failed to create directory {}", target_path.display()))?;
    }

    let settings = PageSettings {
        title: title.unwrap_or_else(|| "Our event".to_string()),
        description: None,
        dark: false,
    };
    let doc = PageDocument::starter(settings, &SECTION_EXAMPLES);
    save_page(&doc, &page_path)?;

    println!(
        "✓ Created {} with {} sections",
        page_path.display(),
        doc.sections().len()
    );
    println!("\nNext steps:");
    println!("  1. Edit {} to describe your event", PAGE_FILE_NAME);
    println!("  2. Run 'eventpage validate' to check section links");
    println!("  3. Run 'eventpage build' to generate index.html");

    Ok(())
}

/// Handle the add command
fn handle_add_command(page: &Path, kind: &str) -> Result<()> {
    let kind: SectionType = kind.parse().with_context(|| {
        format!(
            "Unknown section type '{}'. Run 'eventpage list-sections' to see available types",
            kind
        )
    })?;

    let mut doc = load_page(page)?;
    let id = doc.add_section(&SECTION_EXAMPLES, kind).id().to_string();
    save_page(&doc, page)?;

    println!("✓ Added {} section '{}'", kind, id);
    Ok(())
}

/// Handle the remove command
fn handle_remove_command(page: &Path, id: &str) -> Result<()> {
    let mut doc = load_page(page)?;
    let removed = doc
        .remove_section(id)
        .with_context(|| format!("Failed to remove section from {}", page.display()))?;
    save_page(&doc, page)?;

    println!("✓ Removed {} section '{}'", removed.section_type(), removed.id());
    Ok(())
}

/// Handle the build command
fn handle_build_command(
    page: &Path,
    output: &Path,
    dark: bool,
    edit: bool,
    active: Option<&str>,
) -> Result<()> {
    let doc = load_page(page)?;

    log::info!("Building {}", page.display());
    log::info!("Output: {}", output.display());

    let mode = RenderMode {
        read_only: !edit,
        is_dark: dark || doc.settings.dark,
        active_scroll_section_id: active,
    };

    if let Some(active) = active {
        if doc.section(active).is_none() {
            log::warn!("Active section '{}' is not on the page; nothing will highlight", active);
        }
    }

    html_exporter::to_html(&doc, &mode, output)
        .with_context(|| format!("Failed to export HTML to {}", output.display()))?;

    println!("✓ Successfully wrote: {}", output.display());
    Ok(())
}

/// Handle the validate command
fn handle_validate_command(page: &Path, verbose: bool) -> Result<()> {
    let doc = load_page(page)?;
    let report = validation::validate_page(&doc);

    for error in &report.errors {
        println!("✗ {}", error);
    }

    if !report.warnings.is_empty() && !verbose {
        println!(
            "{} warning(s); run with --verbose to see them",
            report.warnings.len()
        );
    }

    if !report.is_ok() {
        anyhow::bail!(
            "{} has {} validation error(s)",
            page.display(),
            report.errors.len()
        );
    }

    println!(
        "✓ {} is valid ({} sections)",
        page.display(),
        doc.sections().len()
    );
    Ok(())
}

/// Handle the nav subcommands
///
/// Each edit runs the same action the editor canvas attaches to the
/// corresponding control, so the CLI and the canvas cannot disagree.
fn handle_nav_command(command: NavCommand) -> Result<()> {
    match command {
        NavCommand::RenameLink {
            page,
            section,
            index,
            label,
        } => edit_nav(
            &page,
            &section,
            &Action::EditLinkLabel { index },
            Event::Committed(label),
            |_| {},
        ),

        NavCommand::DeleteLink {
            page,
            section,
            index,
        } => edit_nav(
            &page,
            &section,
            &Action::DeleteLink { index },
            Event::Activated,
            |_| {},
        ),

        NavCommand::AddLink {
            page,
            section,
            label,
            target,
        } => edit_nav(&page, &section, &Action::AddLink, Event::Activated, |update| {
            let Some(added) = update.links.as_mut().and_then(|links| links.last_mut()) else {
                return;
            };
            if let Some(label) = label {
                added.label = label;
            }
            if let Some(target) = target {
                added.target_id = target;
            }
        }),
    }
}

/// Dispatch one nav action against a saved page and save the result
fn edit_nav(
    page: &Path,
    section_id: &str,
    action: &Action,
    event: Event,
    adjust: impl FnOnce(&mut NavUpdate),
) -> Result<()> {
    let mut doc = load_page(page)?;

    let section = doc
        .section(section_id)
        .with_context(|| format!("No section with id '{}' in {}", section_id, page.display()))?;
    let content = section
        .content()
        .as_nav()
        .with_context(|| format!("Section '{}' is not a nav section", section_id))?
        .clone();

    let mut update = None;
    {
        let mut callbacks = NavCallbacks::new(|u| update = Some(u), &NoScroll);
        interaction::dispatch(&content, action, event, &mut callbacks);
    }

    let Some(mut update) = update else {
        anyhow::bail!(
            "Nothing to change in section '{}' (it has {} links)",
            section_id,
            content.links.len()
        );
    };
    adjust(&mut update);

    doc.apply_nav_update(section_id, update)
        .with_context(|| format!("Failed to update section '{}'", section_id))?;
    save_page(&doc, page)?;

    let links = doc
        .section(section_id)
        .and_then(|s| s.content().as_nav())
        .map(|nav| nav.links.len())
        .unwrap_or_default();
    println!("✓ Updated '{}' ({} links)", section_id, links);
    Ok(())
}

fn load_page(path: &Path) -> Result<PageDocument> {
    let config = PageConfig::load(path)
        .with_context(|| format!("Failed to load page from {}", path.display()))?;
    Ok(PageDocument::from_config(config))
}

fn save_page(doc: &PageDocument, path: &Path) -> Result<()> {
    doc.to_config()
        .save(path)
        .with_context(|| format!("Failed to save page to {}", path.display()))
}
