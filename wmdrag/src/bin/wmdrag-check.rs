use anyhow::Result;
use clap::{arg, command};
use std::path::Path;

fn main() -> Result<()> {
    let matches = command!("wmdrag Check")
        .about("Checks syntax of the configuration file")
        .help_template(wmdrag::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(Path::new);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m wmdrag version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match wmdrag::load_from_file(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                println!("{config:#?}");
            }
            config.check_edge_resistance(verbose);
            config.check_rendering(verbose);
            config.check_log_level(verbose);
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
        }
    }

    Ok(())
}
