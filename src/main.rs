use worktime::commands::Cli;
use worktime::libs::logging;
use worktime::msg_error;

fn main() {
    logging::init();

    if let Err(e) = Cli::menu() {
        msg_error!(e);
        std::process::exit(1);
    }
}
