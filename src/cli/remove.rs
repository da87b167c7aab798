//! The flow for removing a record by position.

use equipage::Inventory;
use tracing::instrument;

use super::{locale::Locale, prompt, terminal::Colorize};

/// Lists brand/model summaries, asks for a position, and removes that
/// record.
///
/// The prompt re-asks until the position is in range; the inventory remains
/// the final authority and its error is surfaced, never swallowed.
#[instrument(skip(inventory))]
pub fn run(inventory: &mut Inventory, locale: Locale) -> anyhow::Result<()> {
    let captions = locale.captions();

    if inventory.is_empty() {
        println!("{}", captions.empty_list.warning());
        return Ok(());
    }

    for (position, record) in inventory.iter() {
        println!("#{position}: {} {}", record.brand(), record.model());
    }

    let position = prompt::position(captions.remove_prompt, locale, inventory.len())?;
    let removed = inventory.remove(position)?;
    tracing::debug!(
        brand = removed.brand(),
        model = removed.model(),
        "record removed"
    );

    println!("{}", captions.removed.success());
    Ok(())
}
