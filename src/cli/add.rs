//! The guided flow for adding a record.

use dialoguer::Select;
use equipage::{
    domain::equipment::{memory_pages_bounds, power_bounds, price_bounds, print_speed_bounds},
    Equipment, EquipmentKind, FaxSpec, FieldName, Inventory, PrinterSpec,
};
use tracing::instrument;

use super::{locale::Locale, prompt, terminal::Colorize};

/// Prompts for a new record and appends it to the inventory.
///
/// The prompts advertise the valid ranges and re-ask until the input is
/// acceptable, so the constructed record never relies on the model's
/// fallbacks.
#[instrument(skip(inventory))]
pub fn run(inventory: &mut Inventory, locale: Locale) -> anyhow::Result<()> {
    let captions = locale.captions();

    let kinds = [
        captions.kind_generic,
        captions.kind_printer,
        captions.kind_fax,
    ];
    let kind_choice = Select::new()
        .with_prompt(captions.kind_prompt)
        .items(&kinds)
        .default(0)
        .interact()?;

    let brand = prompt::text(locale.field_caption(FieldName::Brand), captions.blank_input)?;
    let model = prompt::text(locale.field_caption(FieldName::Model), captions.blank_input)?;
    let price = prompt::decimal_in(
        locale.field_caption(FieldName::Price),
        locale,
        price_bounds::MIN,
        price_bounds::MAX,
    )?;
    let power = prompt::integer_in(
        locale.field_caption(FieldName::PowerConsumption),
        locale,
        power_bounds::MIN,
        power_bounds::MAX,
    )?;

    let kind = match kind_choice {
        1 => {
            let technology = prompt::text(
                locale.field_caption(FieldName::PrintTechnology),
                captions.blank_input,
            )?;
            let speed = prompt::integer_in(
                locale.field_caption(FieldName::PrintSpeed),
                locale,
                print_speed_bounds::MIN,
                print_speed_bounds::MAX,
            )?;
            let color = prompt::flag(locale.field_caption(FieldName::ColorPrinting))?;
            EquipmentKind::Printer(PrinterSpec::new(&technology, speed, color))
        }
        2 => {
            let connection = prompt::text(
                locale.field_caption(FieldName::ConnectionType),
                captions.blank_input,
            )?;
            let answer = prompt::flag(locale.field_caption(FieldName::AnswerMachine))?;
            let memory = prompt::integer_in(
                locale.field_caption(FieldName::MemoryPages),
                locale,
                memory_pages_bounds::MIN,
                memory_pages_bounds::MAX,
            )?;
            EquipmentKind::Fax(FaxSpec::new(&connection, answer, memory))
        }
        _ => EquipmentKind::Generic,
    };

    inventory.add(Equipment::new(&brand, &model, price, power, kind));
    tracing::debug!(total = inventory.len(), "record added");

    println!("{}", captions.added.success());
    Ok(())
}
