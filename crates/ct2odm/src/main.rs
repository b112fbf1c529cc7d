//! CT2ODM command-line binary.

use std::process::ExitCode;

use clap::Parser;
use ct2odm::convert;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use crate::cli::{Cli, USAGE};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .init();

    let options = match cli.into_options().validate() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    tracing::info!(
        "Converting {} ({} {}, version {})",
        options.input().display(),
        options.info().standard,
        options.info().date(),
        options.info().version
    );

    match convert(&options) {
        Ok(summary) => {
            tracing::info!(
                "Wrote {} codelists and {} terms to {}",
                summary.codelists,
                summary.terms,
                summary.output.display()
            );
            if summary.stats.reference_mismatches > 0 {
                tracing::warn!(
                    "{} term rows follow a codelist other than the one they reference",
                    summary.stats.reference_mismatches
                );
            }
            if summary.stats.incomplete_terms > 0 {
                tracing::warn!(
                    "{} term rows lack a code or submission value",
                    summary.stats.incomplete_terms
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
