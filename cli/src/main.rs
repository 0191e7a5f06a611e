mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, oui, search};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    let cfg = commands.config();

    match commands.command {
        Commands::Search { ref address } => search::search(address, &cfg).await,
        Commands::Oui { ref address } => oui::oui(address),
        Commands::Info => info::info(&cfg),
    }
}
