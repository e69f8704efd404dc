use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::io::config_io::load_config_or_default;
use tasklist::io::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level, cli.log_file.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let config = load_config_or_default(cli.config.as_deref());
    if let Err(e) = tasklist::tui::run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
