use log::error;

use config::Config;

mod config;
mod keymap;
mod run;

fn main() {
    env_logger::init();

    let result = Config::from_args(std::env::args().skip(1)).and_then(run::run);
    if let Err(e) = result {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
