// Sitemap export of the category taxonomy

use crate::catalog::Catalog;
use crate::error::{Result, StorefrontError};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapFormat {
    Text,
    Json,
    Csv,
    Markdown,
}

impl FromStr for SitemapFormat {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(SitemapFormat::Text),
            "json" => Ok(SitemapFormat::Json),
            "csv" => Ok(SitemapFormat::Csv),
            "markdown" | "md" => Ok(SitemapFormat::Markdown),
            _ => Err(StorefrontError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub menu: &'static str,
    pub menu_key: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<&'static str>,
    pub href: String,
}

impl SitemapEntry {
    pub fn depth(&self) -> usize {
        if self.parent.is_some() { 2 } else { 1 }
    }
}

/// One entry per route. With a base URL the hrefs become absolute.
pub fn build_sitemap(catalog: &Catalog, base_url: Option<&Url>) -> Result<Vec<SitemapEntry>> {
    catalog
        .routes()
        .into_iter()
        .map(|route| -> Result<SitemapEntry> {
            let href = match base_url {
                Some(base) => base.join(route.href)?.to_string(),
                None => route.href.to_string(),
            };
            let (title, parent) = match route.sub_item {
                Some(sub_item) => (sub_item, Some(route.item)),
                None => (route.item, None),
            };
            Ok(SitemapEntry {
                menu: route.menu.label(),
                menu_key: route.menu.key(),
                title,
                parent,
                href,
            })
        })
        .collect()
}

pub fn parse_base_url(raw: &str) -> Result<Url> {
    Ok(Url::parse(raw)?)
}

pub fn render_sitemap(entries: &[SitemapEntry], format: SitemapFormat) -> Result<String> {
    Ok(match format {
        SitemapFormat::Text => generate_text_sitemap(entries),
        SitemapFormat::Json => generate_json_sitemap(entries)?,
        SitemapFormat::Csv => generate_csv_sitemap(entries),
        SitemapFormat::Markdown => generate_markdown_sitemap(entries),
    })
}

pub fn generate_text_sitemap(entries: &[SitemapEntry]) -> String {
    let mut out = String::new();
    let mut current_menu = None;

    for entry in entries {
        if current_menu != Some(entry.menu) {
            if current_menu.is_some() {
                out.push('\n');
            }
            out.push_str(entry.menu);
            out.push('\n');
            out.push_str(&"─".repeat(entry.menu.chars().count()));
            out.push('\n');
            current_menu = Some(entry.menu);
        }

        let indent = "  ".repeat(entry.depth());
        out.push_str(&format!("{}{:<28} {}\n", indent, entry.title, entry.href));
    }

    out
}

pub fn generate_json_sitemap(entries: &[SitemapEntry]) -> Result<String> {
    let json = serde_json::json!({
        "sitemap": {
            "generator": "HomeTown",
            "version": env!("CARGO_PKG_VERSION"),
            "total_routes": entries.len(),
            "routes": entries,
        }
    });

    Ok(serde_json::to_string_pretty(&json)?)
}

pub fn generate_csv_sitemap(entries: &[SitemapEntry]) -> String {
    let mut out = String::from("menu,title,parent,href\n");
    for entry in entries {
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(entry.menu_key),
            csv_field(entry.title),
            csv_field(entry.parent.unwrap_or("")),
            csv_field(&entry.href)
        ));
    }
    out
}

pub fn generate_markdown_sitemap(entries: &[SitemapEntry]) -> String {
    let mut out = String::from("# Sitemap\n");
    let mut current_menu = None;

    for entry in entries {
        if current_menu != Some(entry.menu) {
            out.push_str(&format!("\n## {}\n\n", entry.menu));
            current_menu = Some(entry.menu);
        }

        let indent = if entry.parent.is_some() { "  " } else { "" };
        out.push_str(&format!("{}- [{}]({})\n", indent, entry.title, entry.href));
    }

    out
}

pub fn save_sitemap(content: &str, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
