use clap::Parser;
use clockset::cli::commands::Cli;
use clockset::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let store_dir = cli.store_dir.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = clockset::tui::run(store_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
