use std::process::ExitCode;

use anyhow::Result;

use content_lint::config::Config;
use content_lint::{audit, fetch, output};

fn main() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let markup = fetch::load(&config.source)?;
    log::debug!("loaded {} bytes of markup", markup.len());

    let report = audit(&markup);

    if config.json {
        println!("{}", output::render_json(&report)?);
    } else {
        println!("{}", output::render_text(&report));
    }

    // Non-zero exit iff an error-severity check failed
    Ok(if report.has_blocking_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
