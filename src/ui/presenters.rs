use crate::io::OutputWriter;
use crate::models::errors::InventoryError;
use crate::services::inventory::{Inventory, TickReport};

pub struct InventoryPresenter;

impl InventoryPresenter {
    pub fn show_inventory(day: u32, inventory: &Inventory, output: &mut dyn OutputWriter) {
        output.writeln(&format!("DAY {}", day));
        output.writeln(&format!(
            "{:<30}{:>8}{:>9}  {}",
            "ITEM", "SELL IN", "QUALITY", "RULE"
        ));
        for item in inventory.items() {
            output.write(&format!(
                "{:<30}{:>8}{:>9}  {}",
                item.name(),
                item.sell_in(),
                item.quality(),
                item.rule().label()
            ));
            output.writeln(if item.is_legendary() { " (LEGENDARY)" } else { "" });
        }
    }

    pub fn show_tick_report(report: &TickReport, output: &mut dyn OutputWriter) {
        for (name, err) in &report.failures {
            output.writeln(&format!("*** {}: {}", name, err));
        }
    }

    pub fn show_skipped(skipped: &[InventoryError], output: &mut dyn OutputWriter) {
        for err in skipped {
            output.writeln(&format!("*** SKIPPED ITEM: {}", err));
        }
    }

    pub fn show_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   1 = ADVANCE ONE DAY");
        output.writeln("   2 = RESET ALL ITEMS");
        output.writeln("   3 = SHOW INVENTORY");
        output.writeln("   Q = QUIT");
    }
}
