use donner_core::{events, init_logging};

mod app;
mod commands;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Extract verbose flag before initializing logging
    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    let exit_code = match commands::run_command(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("donner: {}", e);
            events::log_app_error(&*e);
            1
        }
    };
    std::process::exit(exit_code);
}
