use super::Config;
use tracing_subscriber::EnvFilter;
use wmdrag_core::models::DragRendering;

impl Config {
    pub fn check_edge_resistance(&self, verbose: bool) {
        if verbose {
            println!("Checking edge_resistance.");
        }
        match self.edge_resistance {
            r if r < 0 => println!(
                "edge_resistance is negative ({r}), it will be treated as 0 and edges won't resist."
            ),
            0 if verbose => println!("Edge resistance is disabled."),
            _ if verbose => println!("Edge resistance is okay."),
            _ => {}
        }
    }

    pub fn check_rendering(&self, verbose: bool) {
        if verbose {
            println!("Checking move_rendering and resize_rendering.");
        }
        for (name, rendering) in [
            ("move_rendering", self.move_rendering),
            ("resize_rendering", self.resize_rendering),
        ] {
            if rendering == DragRendering::ShowOutlineOnly {
                println!(
                    "{name} is set to show_outline_only: outlines are not drawn yet, \
                     windows only change when the drag ends."
                );
            }
        }
    }

    pub fn check_log_level(&self, verbose: bool) {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) if verbose => println!("Log level is ok."),
            Ok(_) => {}
            Err(err) => println!("Log level is invalid: {err}"),
        }
    }
}
