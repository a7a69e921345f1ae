use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use hometown_core::content::{Article, HOMETOWN_STORY};
use hometown_core::sitemap::{
    SitemapFormat, build_sitemap, parse_base_url, render_sitemap, save_sitemap,
};
use hometown_core::{Catalog, MenuId, StorefrontConfig, banner};
use std::path::PathBuf;
use tracing::debug;

pub fn print_banner() {
    println!("{}", banner().bright_red().bold());
}

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

/// Stderr logging for the plain CLI commands. The TUI owns the terminal
/// and never installs this.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// Helper functions for the menu handler

/// The taxonomy as an indented tree, one menu or all of them
pub fn menu_tree(catalog: &Catalog, only: Option<MenuId>) -> String {
    let mut out = String::new();

    for menu in catalog.menus() {
        if only.is_some_and(|id| id != menu.id) {
            continue;
        }

        out.push_str(&format!(
            "{} {}\n",
            format!("[{}]", menu.id.index() + 1).dimmed(),
            menu.id.label().bright_white().bold()
        ));

        let last = menu.items.len().saturating_sub(1);
        for (idx, item) in menu.items.iter().enumerate() {
            let (branch, stem) = if idx == last {
                ("└──", "    ")
            } else {
                ("├──", "│   ")
            };
            let marker = if item.has_children() { " ›" } else { "" };
            out.push_str(&format!(
                "{} {}{}  {}\n",
                branch.dimmed(),
                item.title(),
                marker.red(),
                item.href().cyan()
            ));

            let last_child = item.children().len().saturating_sub(1);
            for (child_idx, child) in item.children().iter().enumerate() {
                let twig = if child_idx == last_child { "└──" } else { "├──" };
                out.push_str(&format!(
                    "{}{} {}  {}\n",
                    stem.dimmed(),
                    twig.dimmed(),
                    child.name,
                    child.href.cyan()
                ));
            }
        }
        out.push('\n');
    }

    out
}

/// Article copy with headings highlighted
pub fn article_text(article: &Article) -> String {
    let mut out = format!("{}\n\n", article.title.bright_red().bold());
    for paragraph in article.intro {
        out.push_str(paragraph);
        out.push_str("\n\n");
    }
    for section in std::iter::once(&article.lead).chain(article.sections.iter()) {
        out.push_str(&format!("{}\n\n", section.heading.bright_white().bold()));
        for paragraph in section.paragraphs {
            out.push_str(paragraph);
            out.push_str("\n\n");
        }
    }
    out.trim_end().to_string()
}

/// Render the sitemap of `catalog`, optionally with absolute links
pub fn sitemap_output(catalog: &Catalog, format: &str, base_url: Option<&str>) -> Result<String> {
    let format: SitemapFormat = format.parse()?;
    let base_url = base_url.map(parse_base_url).transpose()?;
    let entries = build_sitemap(catalog, base_url.as_ref())?;
    debug!(entries = entries.len(), ?format, "sitemap built");
    Ok(render_sitemap(&entries, format)?)
}

/// One line per breadcrumb element, for `resolve`
pub fn describe_route(catalog: &Catalog, path: &str) -> Result<String> {
    let crumb = catalog.resolve(path)?;
    let mut out = format!(
        "{} {}\n",
        "Menu:".blue(),
        crumb.menu.label().bright_white()
    );
    out.push_str(&format!("{} {}\n", "Item:".blue(), crumb.item.bright_white()));
    if let Some(sub_item) = crumb.sub_item {
        out.push_str(&format!("{} {}\n", "Sub-item:".blue(), sub_item.bright_white()));
    }
    out.push_str(&format!("{} {}", "Trail:".blue(), crumb.to_string().cyan()));
    Ok(out)
}

/// `--output` with a leading `~` expanded
pub fn output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub fn handle_ui(args: &ArgMatches) -> Result<()> {
    let open = args.get_one::<MenuId>("open").copied();
    hometown_tui::run(StorefrontConfig::default(), open).context("Error running TUI")
}

pub fn handle_menu(args: &ArgMatches) -> Result<()> {
    let only = args.get_one::<MenuId>("MENU").copied();
    print!("{}", menu_tree(Catalog::storefront(), only));
    Ok(())
}

pub fn handle_sitemap(args: &ArgMatches) -> Result<()> {
    // Defaulted by clap
    let format = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    let base_url = args.get_one::<String>("base-url").map(String::as_str);
    let catalog = Catalog::storefront();

    let content = sitemap_output(catalog, format, base_url)?;

    match args.get_one::<String>("output") {
        Some(output) => {
            let path = output_path(output);
            save_sitemap(&content, &path)
                .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
            println!(
                "{} Sitemap saved: {} ({} routes)",
                "✓".green().bold(),
                path.display().to_string().bright_white(),
                catalog.routes().len().to_string().cyan()
            );
        }
        None => println!("{}", content),
    }

    Ok(())
}

pub fn handle_about() -> Result<()> {
    let config = StorefrontConfig::default();
    print_divider();
    println!(
        "  {} {}",
        config.title.bright_white().bold(),
        format!("· {}", config.description).dimmed()
    );
    print_divider();
    println!();
    println!("{}", article_text(&HOMETOWN_STORY));
    println!();
    Ok(())
}

pub fn handle_resolve(args: &ArgMatches) -> Result<()> {
    let path = args
        .get_one::<String>("PATH")
        .context("A route is required")?;
    println!("{}", describe_route(Catalog::storefront(), path)?);
    Ok(())
}
