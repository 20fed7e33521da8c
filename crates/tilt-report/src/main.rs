mod bootstrap;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use tilt_core::settings::Settings;
use tilt_core::time_utils::TimeWindow;

fn main() -> Result<()> {
    let settings = Settings::parse();
    let subscriber = bootstrap::build_subscriber(&settings.log_level, &settings.log_file)?;
    let paths = settings.report_paths();

    let outcome = tracing::subscriber::with_default(subscriber, || {
        tracing::debug!(
            "tilt-report v{} for {}",
            env!("CARGO_PKG_VERSION"),
            settings.run_date()
        );
        pipeline::run(&paths, &TimeWindow::afternoon()).map_err(|e| {
            tracing::error!("Error occurred: {}", e);
            e
        })
    })?;

    if settings.print_summary {
        let report = serde_json::json!({
            "filtered_rows": outcome.filtered_rows,
            "summary": outcome.summary,
            "groups": outcome.groups,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
