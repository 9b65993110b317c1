use crate::io::{CommandSource, OutputWriter};
use crate::simulation::Simulation;
use crate::ui::presenters::InventoryPresenter;

/// Interactive command loop over a [`Simulation`].
pub struct Console<I: CommandSource, O: OutputWriter> {
    pub simulation: Simulation,
    input: I,
    output: O,
}

impl<I: CommandSource, O: OutputWriter> Console<I, O> {
    pub fn new(simulation: Simulation, input: I, output: O) -> Self {
        Console {
            simulation,
            input,
            output,
        }
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> std::io::Result<()> {
        InventoryPresenter::show_inventory(
            self.simulation.day(),
            self.simulation.inventory(),
            &mut self.output,
        );

        while let Some(input) = self.input.next_command("COMMAND")? {
            match input.trim() {
                "1" => {
                    let report = self.simulation.advance_day();
                    InventoryPresenter::show_tick_report(&report, &mut self.output);
                    self.show();
                }
                "2" => {
                    self.simulation.reset();
                    self.show();
                }
                "3" => self.show(),
                "q" | "Q" => {
                    self.output.writeln("GOODBYE.");
                    break;
                }
                _ => InventoryPresenter::show_command_menu(&mut self.output),
            }
        }
        Ok(())
    }

    /// Runs `days` days without prompting, printing the inventory after each.
    pub fn run_batch(&mut self, days: u32) {
        InventoryPresenter::show_inventory(
            self.simulation.day(),
            self.simulation.inventory(),
            &mut self.output,
        );
        for _ in 0..days {
            let report = self.simulation.advance_day();
            InventoryPresenter::show_tick_report(&report, &mut self.output);
            self.show();
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    fn show(&mut self) {
        InventoryPresenter::show_inventory(
            self.simulation.day(),
            self.simulation.inventory(),
            &mut self.output,
        );
    }
}
