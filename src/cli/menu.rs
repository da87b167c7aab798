//! The interactive main menu.

use dialoguer::Select;
use equipage::Inventory;
use tracing::instrument;

use super::{add, list, locale::Locale, remove, terminal::Colorize};

/// The interactive session, owning the inventory for its lifetime.
///
/// The inventory is handed to each action by reference; nothing is global.
#[derive(Debug)]
pub struct Menu {
    inventory: Inventory,
    locale: Locale,
}

impl Menu {
    pub fn new(locale: Locale) -> Self {
        Self {
            inventory: Inventory::new(),
            locale,
        }
    }

    /// Runs the menu loop until the user exits, then clears the inventory
    /// and reports how many records were freed.
    #[instrument(skip(self))]
    pub fn run(mut self) -> anyhow::Result<()> {
        let captions = self.locale.captions();
        let items = [
            captions.menu_add,
            captions.menu_list,
            captions.menu_remove,
            captions.menu_exit,
        ];

        loop {
            let choice = Select::new()
                .with_prompt(captions.menu_prompt)
                .items(&items)
                .default(0)
                .interact()?;

            match choice {
                0 => add::run(&mut self.inventory, self.locale)?,
                1 => list::run(&self.inventory, self.locale),
                2 => remove::run(&mut self.inventory, self.locale)?,
                _ => break,
            }
        }

        // Explicit teardown: empty the inventory and report the count.
        let freed = self.inventory.clear();
        tracing::info!(freed, "inventory cleared on exit");
        println!("{}", self.locale.freed_message(freed).success());
        println!("{}", captions.goodbye);
        Ok(())
    }
}
