//! Per-language conversion: read sources, parse, write JSON.

use crate::config::Config;
use crate::error::{CliError, Result};
use catalogue_core::{build_catalogue_with, build_key_answer_table, Catalogue};
use serde::Serialize;
use std::fs;
use std::path::Path;

const PREVIEW_COUNT: usize = 5;

/// Read a UTF-8 text file fully into its lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Write `value` as pretty-printed JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CliError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert one language's catalogue and answer key into its JSON file.
pub fn convert_language(config: &Config, language: &str) -> Result<Catalogue> {
    let key_path = config.key_path(language);
    let key_lines = read_lines(&key_path)?;
    let table = build_key_answer_table(&key_lines).map_err(|source| CliError::Parse {
        path: key_path.clone(),
        source,
    })?;
    for (key, record) in table.iter().take(PREVIEW_COUNT) {
        tracing::debug!(%key, ?record, "answer key");
    }

    let catalogue_path = config.catalogue_path(language);
    let catalogue_lines = read_lines(&catalogue_path)?;
    let catalogue = build_catalogue_with(&catalogue_lines, &table, config.options).map_err(
        |source| CliError::Parse {
            path: catalogue_path.clone(),
            source,
        },
    )?;
    for question in catalogue.iter().take(PREVIEW_COUNT) {
        tracing::debug!(?question, "question");
    }

    let output_path = config.output_path(language);
    write_json(&output_path, &catalogue)?;
    tracing::info!(
        language,
        questions = catalogue.len(),
        output = %output_path.display(),
        "wrote catalogue"
    );

    Ok(catalogue)
}
