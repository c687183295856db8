//! Markdown documentation entries
//!
//! Every `.md` file below the docs directory becomes one entry. Reading is
//! best effort: a missing directory or unreadable file contributes nothing.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::types::SearchEntry;
use crate::util::humanize;

pub const DOCUMENTATION: &str = "documentation";

/// Text pulled out of one markdown document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownSummary {
    /// First heading
    pub title: Option<String>,
    /// First paragraph
    pub description: Option<String>,
    /// All text, whitespace-joined
    pub content: String,
}

pub fn summarize(markdown: &str) -> MarkdownSummary {
    let mut summary = MarkdownSummary::default();
    let mut words: Vec<String> = Vec::new();
    let mut heading: Option<String> = None;
    let mut paragraph: Option<String> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. }) => heading = Some(String::new()),
            Event::End(TagEnd::Heading(_)) => {
                if let Some(text) = heading.take() {
                    if summary.title.is_none() && !text.trim().is_empty() {
                        summary.title = Some(text.trim().to_string());
                    }
                }
            }
            Event::Start(Tag::Paragraph) => paragraph = Some(String::new()),
            Event::End(TagEnd::Paragraph) => {
                if let Some(text) = paragraph.take() {
                    if summary.description.is_none() && !text.trim().is_empty() {
                        summary.description = Some(text.trim().to_string());
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(h) = heading.as_mut() {
                    h.push_str(&text);
                }
                if let Some(p) = paragraph.as_mut() {
                    p.push_str(&text);
                }
                words.push(text.to_string());
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(p) = paragraph.as_mut() {
                    p.push(' ');
                }
            }
            _ => {}
        }
    }

    summary.content = words
        .iter()
        .flat_map(|w| w.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");
    summary
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("markdown"))
}

/// Markdown files below `dir`, sorted; hidden entries are skipped and
/// symlinks are not followed
fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() && is_markdown(entry.path()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("Cannot read docs entry: {}", e),
        }
    }

    files.sort();
    files
}

/// `guides/install.md` -> `/docs/guides/install`; `index.md` maps to its directory
pub fn doc_url(prefix: &str, relative: &Path) -> String {
    let mut parts: Vec<String> = relative
        .with_extension("")
        .components()
        .filter_map(|c| c.as_os_str().to_str().map(String::from))
        .collect();
    if parts.last().is_some_and(|p| p.eq_ignore_ascii_case("index")) {
        parts.pop();
    }

    let base = prefix.trim_end_matches('/');
    if parts.is_empty() {
        return if base.is_empty() { "/".to_string() } else { base.to_string() };
    }
    format!("{}/{}", base, parts.join("/"))
}

/// Entries for every markdown document under `dir`
pub fn doc_entries(dir: &Path, url_prefix: &str) -> Vec<SearchEntry> {
    if !dir.is_dir() {
        tracing::debug!("No docs directory at {}", dir.display());
        return Vec::new();
    }

    markdown_files(dir)
        .into_iter()
        .filter_map(|path| {
            let markdown = match std::fs::read_to_string(&path) {
                Ok(markdown) => markdown,
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", path.display(), e);
                    return None;
                }
            };
            let relative = path.strip_prefix(dir).ok()?;
            let summary = summarize(&markdown);
            let title = summary.title.unwrap_or_else(|| {
                humanize(
                    relative
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or_default(),
                )
            });
            Some(SearchEntry {
                title,
                description: summary.description.unwrap_or_default(),
                url: doc_url(url_prefix, relative),
                kind: DOCUMENTATION.to_string(),
                keywords: Vec::new(),
                content: summary.content,
            })
        })
        .collect()
}
