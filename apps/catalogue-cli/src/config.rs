//! Converter configuration from command-line arguments and environment.

use crate::error::{CliError, Result};
use catalogue_core::ParseOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "catalogue-convert",
    about = "Convert question catalogues and answer keys to JSON"
)]
pub struct Args {
    /// Directory holding catalogue_<lang>_<year>.txt and keys_<lang>_<year>.txt
    #[arg(long, env = "CATALOGUE_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory the JSON files are written to
    #[arg(long, env = "CATALOGUE_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Comma-separated language codes
    #[arg(long, env = "CATALOGUE_LANGUAGES", value_delimiter = ',', default_value = "pl,en")]
    pub languages: Vec<String>,

    /// Edition year in the input file names
    #[arg(long, env = "CATALOGUE_YEAR", default_value_t = 2024)]
    pub year: u16,

    /// Accept a last question that has no answer lines
    #[arg(long, env = "CATALOGUE_ALLOW_EMPTY_FINAL_QUESTION")]
    pub allow_empty_final_question: bool,
}

/// Validated converter settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub languages: Vec<String>,
    pub year: u16,
    pub options: ParseOptions,
}

impl Config {
    pub fn catalogue_path(&self, language: &str) -> PathBuf {
        self.data_dir
            .join(format!("catalogue_{}_{}.txt", language, self.year))
    }

    pub fn key_path(&self, language: &str) -> PathBuf {
        self.data_dir.join(format!("keys_{}_{}.txt", language, self.year))
    }

    pub fn output_path(&self, language: &str) -> PathBuf {
        self.output_dir
            .join(format!("catalogue_of_rules_questions_{}.json", language))
    }
}

impl TryFrom<Args> for Config {
    type Error = CliError;

    fn try_from(args: Args) -> Result<Self> {
        let languages: Vec<String> = args
            .languages
            .iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        if languages.is_empty() {
            return Err(CliError::Config("no languages given".to_string()));
        }
        if let Some(bad) = languages
            .iter()
            .find(|l| !l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        {
            return Err(CliError::Config(format!("invalid language code: {bad}")));
        }

        Ok(Self {
            data_dir: args.data_dir,
            output_dir: args.output_dir,
            languages,
            year: args.year,
            options: ParseOptions {
                allow_empty_final_question: args.allow_empty_final_question,
            },
        })
    }
}
