pub mod config;
pub mod convert;
pub mod error;
pub mod report;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Args, Config};
use crate::convert::convert_language;
use crate::report::FieldLengths;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::try_from(Args::parse())?;
    run_with(&config)
}

/// Convert every configured language, stopping at the first failure.
pub fn run_with(config: &Config) -> anyhow::Result<()> {
    tracing::info!(
        data_dir = %config.data_dir.display(),
        languages = ?config.languages,
        year = config.year,
        "Converting catalogues..."
    );

    for language in &config.languages {
        let catalogue = convert_language(config, language)
            .with_context(|| format!("converting {language} catalogue"))?;

        let lengths = FieldLengths::measure(&catalogue);
        tracing::info!(
            language = %language,
            max_question = lengths.max_question,
            max_subanswer = lengths.max_subanswer,
            max_full = lengths.max_full,
            "Max lengths for database column sizing"
        );
    }

    Ok(())
}
