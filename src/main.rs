use anyhow::Context;

use gildedrose::cli::args;
use gildedrose::io::TerminalIO;
use gildedrose::logging;
use gildedrose::services::console::Console;
use gildedrose::ui::presenters::InventoryPresenter;
use gildedrose::{InventoryConfig, Simulation};

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = args::parse();

    let config = match &args.config {
        Some(path) => InventoryConfig::load(path)
            .with_context(|| format!("loading inventory from {}", path.display()))?,
        None => InventoryConfig::default(),
    };

    println!("*** GILDED ROSE ***");
    println!();

    let (simulation, skipped) = Simulation::from_config(config, args.seed);
    InventoryPresenter::show_skipped(&skipped, &mut TerminalIO);

    let mut console = Console::new(simulation, TerminalIO, TerminalIO);
    match args.days {
        Some(days) => console.run_batch(days),
        None => console.run()?,
    }
    Ok(())
}
