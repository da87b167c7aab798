//! Rendering of the inventory listing.

use equipage::{Field, FieldValue, Inventory};

use super::{
    locale::Locale,
    terminal::{self, Colorize},
};

/// Width of the rule line drawn under each record.
const RULE_WIDTH: usize = 24;

/// Prints every record with its 1-based position, localized captions and
/// units.
pub fn run(inventory: &Inventory, locale: Locale) {
    let captions = locale.captions();

    if inventory.is_empty() {
        println!("{}", captions.empty_list.warning());
        return;
    }

    let width = terminal::rule_width(RULE_WIDTH);

    for (position, record) in inventory.iter() {
        println!();
        println!("#{position}");
        println!(
            "{}: {}",
            captions.type_caption,
            locale.kind_caption(record.kind()).info()
        );
        for field in record.fields() {
            println!(
                "{}: {}",
                locale.field_caption(field.name),
                render_value(&field, locale)
            );
        }
        println!("{}", "─".repeat(width).dim());
    }
}

/// Formats one field value, substituting localized flag captions and
/// appending the locale's unit where one applies.
fn render_value(field: &Field<'_>, locale: Locale) -> String {
    let rendered = match field.value {
        FieldValue::Text(text) => text.to_string(),
        FieldValue::Money(amount) => amount.to_string(),
        FieldValue::Integer(value) => value.to_string(),
        FieldValue::Flag(value) => locale.flag(value).to_string(),
    };

    match locale.unit(field.name) {
        Some(unit) => format!("{rendered} {unit}"),
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use equipage::{Equipment, EquipmentKind, FieldName, PrinterSpec};
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn values_render_with_units_and_flag_captions() {
        let record = Equipment::new(
            "HP",
            "DeskJet",
            Decimal::from(5000),
            200,
            EquipmentKind::Printer(PrinterSpec::new("Inkjet", 22, true)),
        );
        let fields = record.fields();

        let rendered: Vec<String> = fields
            .iter()
            .map(|field| render_value(field, Locale::En))
            .collect();
        assert_eq!(
            rendered,
            ["HP", "DeskJet", "5000", "200 W", "Inkjet", "22 ppm", "Yes"]
        );
    }

    #[test]
    fn russian_rendering_uses_localized_units() {
        let record = Equipment::new("HP", "X1", Decimal::from(5000), 300, EquipmentKind::Generic);
        let fields = record.fields();

        assert_eq!(render_value(&fields[2], Locale::Ru), "5000 руб.");
        assert_eq!(render_value(&fields[3], Locale::Ru), "300 Вт");
        assert_eq!(fields[2].name, FieldName::Price);
    }
}
