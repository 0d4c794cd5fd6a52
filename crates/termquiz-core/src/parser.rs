//! Bulk term parsing and TOML deck loading.
//!
//! [`parse_terms`] turns pasted text into terms; the rest of the module
//! loads, writes, and validates info records stored as TOML decks.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{Hub, InfoItem, InfoRecord, TermItem};

/// Date format used by deck files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse pasted text, one `term<TAB>description` or
/// `term<2+ spaces>description` pair per line.
///
/// Blank lines and lines missing either half are dropped without error.
/// Output order follows input order and repeated terms are kept.
pub fn parse_terms(text: &str) -> Vec<TermItem> {
    text.trim().lines().filter_map(split_term_line).collect()
}

/// Parse a single line into a term, or `None` if the line is unusable.
///
/// A tab takes precedence: the line is split on its first tab. Otherwise
/// the line is split on every run of two or more whitespace characters
/// (ASCII or Unicode spaces); the first part
/// is the term and the remaining parts are joined with single spaces.
pub fn split_term_line(line: &str) -> Option<TermItem> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (term, description) = match line.split_once('\t') {
        Some((term, description)) => (term.trim().to_string(), description.trim().to_string()),
        None => {
            let parts = split_on_wide_gaps(line);
            if parts.len() < 2 {
                return None;
            }
            (
                parts[0].trim().to_string(),
                parts[1..].join(" ").trim().to_string(),
            )
        }
    };

    if term.is_empty() || description.is_empty() {
        return None;
    }
    Some(TermItem { term, description })
}

/// Split on runs of two or more consecutive whitespace characters.
///
/// Any Unicode whitespace counts, so pasted no-break (U+00A0) and
/// ideographic (U+3000) spaces delimit like ASCII spaces.
fn split_on_wide_gaps(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut run: Option<(usize, usize)> = None;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            let (run_start, len) = run.unwrap_or((i, 0));
            run = Some((run_start, len + 1));
            continue;
        }
        if let Some((run_start, len)) = run.take() {
            if len >= 2 {
                parts.push(&line[start..run_start]);
                start = i;
            }
        }
    }
    parts.push(&line[start..]);
    parts
}

/// Intermediate TOML structure for parsing deck files.
#[derive(Debug, Deserialize)]
struct TomlDeckFile {
    id: String,
    hub: String,
    date: String,
    #[serde(default)]
    infos: Vec<TomlInfo>,
}

#[derive(Debug, Deserialize)]
struct TomlInfo {
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    terms: Vec<TomlTerm>,
}

#[derive(Debug, Deserialize)]
struct TomlTerm {
    term: String,
    description: String,
}

/// Parse a single TOML deck file into an `InfoRecord`.
pub fn parse_record(path: &Path) -> Result<InfoRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file: {}", path.display()))?;

    parse_record_str(&content, path)
}

/// Parse a TOML string into an `InfoRecord` (useful for testing).
pub fn parse_record_str(content: &str, source_path: &Path) -> Result<InfoRecord> {
    let parsed: TomlDeckFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let hub: Hub = parsed
        .hub
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}: {}", source_path.display(), e))?;

    let date = NaiveDate::parse_from_str(parsed.date.trim(), DATE_FORMAT).with_context(|| {
        format!(
            "invalid date '{}' in {} (expected YYYY-MM-DD)",
            parsed.date,
            source_path.display()
        )
    })?;

    let infos = parsed
        .infos
        .into_iter()
        .map(|info| InfoItem {
            title: info.title,
            content: info.content,
            terms: info
                .terms
                .into_iter()
                .map(|t| TermItem {
                    term: t.term,
                    description: t.description,
                })
                .collect(),
        })
        .collect();

    Ok(InfoRecord {
        id: parsed.id,
        hub,
        date,
        infos,
    })
}

/// Recursively load all `.toml` deck files from a directory.
///
/// Files that fail to parse are skipped with a warning. Records are
/// returned sorted by date, then id.
pub fn load_record_directory(dir: &Path) -> Result<Vec<InfoRecord>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut records = Vec::new();
    collect_records(dir, &mut records)?;
    records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
    Ok(records)
}

fn collect_records(dir: &Path, records: &mut Vec<InfoRecord>) -> Result<()> {
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_records(&path, records)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_record(&path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }
    Ok(())
}

/// Load a single deck file, or every deck under a directory.
pub fn load_records(path: &Path) -> Result<Vec<InfoRecord>> {
    if path.is_dir() {
        load_record_directory(path)
    } else {
        Ok(vec![parse_record(path)?])
    }
}

/// Write a record back to a TOML deck file.
pub fn write_record(path: &Path, record: &InfoRecord) -> Result<()> {
    let content = toml::to_string_pretty(record).context("failed to serialize deck")?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write deck to {}", path.display()))?;
    Ok(())
}

/// Minimum pool size for every question to get a full set of options.
const FULL_OPTION_POOL: usize = 4;

/// A warning from deck validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Index of the info item (if applicable).
    pub info_index: Option<usize>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn record(message: impl Into<String>) -> Self {
        Self {
            info_index: None,
            message: message.into(),
        }
    }

    fn info(index: usize, message: impl Into<String>) -> Self {
        Self {
            info_index: Some(index),
            message: message.into(),
        }
    }
}

/// Validate a record for issues that would degrade the quizzes built from it.
pub fn validate_record(record: &InfoRecord) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if record.id.trim().is_empty() {
        warnings.push(ValidationWarning::record("record id is empty"));
    }

    for (idx, info) in record.infos.iter().enumerate() {
        if info.title.trim().is_empty() {
            warnings.push(ValidationWarning::info(idx, "title is empty"));
        }
        if info.terms.is_empty() {
            warnings.push(ValidationWarning::info(idx, "no terms defined"));
        }
        for term in &info.terms {
            if term.term.trim().is_empty() || term.description.trim().is_empty() {
                warnings.push(ValidationWarning::info(
                    idx,
                    format!("blank term or description: '{}'", term.term),
                ));
            }
        }
    }

    // Duplicates across the whole pool
    let mut seen_terms = HashSet::new();
    let mut seen_descriptions = HashSet::new();
    for (idx, info) in record.infos.iter().enumerate() {
        for term in &info.terms {
            if !seen_terms.insert(term.term.as_str()) {
                warnings.push(ValidationWarning::info(
                    idx,
                    format!("duplicate term: {}", term.term),
                ));
            }
            if !seen_descriptions.insert(term.description.as_str()) {
                warnings.push(ValidationWarning::info(
                    idx,
                    format!("duplicate description for term: {}", term.term),
                ));
            }
        }
    }

    let pool_size = record.term_count();
    if pool_size > 0 && pool_size < FULL_OPTION_POOL {
        warnings.push(ValidationWarning::record(format!(
            "only {pool_size} term(s); questions will have fewer than {FULL_OPTION_POOL} options"
        )));
    }

    warnings
}
