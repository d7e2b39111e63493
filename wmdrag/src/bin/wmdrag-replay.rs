use anyhow::Result;
use clap::{arg, command};
use std::path::Path;
use wmdrag::replay::{self, Script};

fn main() -> Result<()> {
    let matches = command!("wmdrag Replay")
        .about("Replays a JSON script of pointer and key events and prints the resulting windows")
        .help_template(wmdrag::utils::get_help_template())
        .args(&[
            arg!(-c --config <FILE> "Configuration file to use instead of the XDG one."),
            arg!(-l --"log-level" <LEVEL> "Log filter, e.g. `debug` or `wmdrag_core=trace`."),
            arg!(<SCRIPT> "Script to replay."),
        ])
        .get_matches();

    let (config, load_err) = match matches.get_one::<String>("config") {
        Some(path) => (wmdrag::load_from_file(Some(Path::new(path)))?, None),
        None => wmdrag::load(None),
    };
    let log_level = matches
        .get_one::<String>("log-level")
        .map_or(config.log_level.as_str(), String::as_str)
        .to_owned();
    wmdrag::utils::log::setup_logging(&log_level)?;
    if let Some(err) = load_err {
        tracing::error!("Unable to load config file, using defaults: {:?}", err);
    }

    let script_path = matches
        .get_one::<String>("SCRIPT")
        .map(Path::new)
        .ok_or_else(|| anyhow::anyhow!("no script given"))?;
    let script = Script::load(script_path)?;
    tracing::info!(
        "Replaying {} events over {} windows",
        script.events.len(),
        script.windows.len()
    );

    let windows = replay::run(config, script)?;
    println!("{}", serde_json::to_string_pretty(&windows)?);
    Ok(())
}
