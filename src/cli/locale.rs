//! Display locales for the console front end.
//!
//! The core renders locale-neutral field names; this module maps them to
//! the captions of the two supported display locales.

use std::fmt;

use equipage::{EquipmentKind, FieldName};
use serde::{Deserialize, Serialize};

/// A supported display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English captions.
    #[default]
    En,
    /// Russian captions.
    Ru,
}

/// The static caption set of one locale.
pub struct Captions {
    /// Main menu heading.
    pub menu_prompt: &'static str,
    /// Menu item: add a device.
    pub menu_add: &'static str,
    /// Menu item: show the list.
    pub menu_list: &'static str,
    /// Menu item: remove a device.
    pub menu_remove: &'static str,
    /// Menu item: exit.
    pub menu_exit: &'static str,
    /// Heading for the device-type selection.
    pub kind_prompt: &'static str,
    /// Caption for the generic variant.
    pub kind_generic: &'static str,
    /// Caption for the printer variant.
    pub kind_printer: &'static str,
    /// Caption for the fax variant.
    pub kind_fax: &'static str,
    /// Caption preceding the variant name in listings.
    pub type_caption: &'static str,
    /// Shown when the inventory holds no records.
    pub empty_list: &'static str,
    /// Confirmation after a record is added.
    pub added: &'static str,
    /// Confirmation after a record is removed.
    pub removed: &'static str,
    /// Prompt for the position to remove.
    pub remove_prompt: &'static str,
    /// Validation message for blank text input.
    pub blank_input: &'static str,
    /// Farewell line printed on exit.
    pub goodbye: &'static str,
    /// Caption for a true flag.
    pub yes: &'static str,
    /// Caption for a false flag.
    pub no: &'static str,
}

const EN: Captions = Captions {
    menu_prompt: "Select an action",
    menu_add: "Add a device",
    menu_list: "Show the list",
    menu_remove: "Remove a device",
    menu_exit: "Exit",
    kind_prompt: "Device type",
    kind_generic: "Office equipment",
    kind_printer: "Printer",
    kind_fax: "Fax",
    type_caption: "Type",
    empty_list: "The list is empty.",
    added: "Added.",
    removed: "Removed.",
    remove_prompt: "Number to remove",
    blank_input: "Enter a value.",
    goodbye: "Done.",
    yes: "Yes",
    no: "No",
};

const RU: Captions = Captions {
    menu_prompt: "Выберите действие",
    menu_add: "Добавить устройство",
    menu_list: "Показать список",
    menu_remove: "Удалить устройство",
    menu_exit: "Выход",
    kind_prompt: "Тип устройства",
    kind_generic: "Офисная техника",
    kind_printer: "Принтер",
    kind_fax: "Факс",
    type_caption: "Тип",
    empty_list: "Список пуст.",
    added: "Добавлено.",
    removed: "Удалено.",
    remove_prompt: "Номер для удаления",
    blank_input: "Введите значение.",
    goodbye: "Работа завершена.",
    yes: "Да",
    no: "Нет",
};

impl Locale {
    /// The caption set of this locale.
    pub const fn captions(self) -> &'static Captions {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }

    /// The caption of a rendered field.
    pub const fn field_caption(self, name: FieldName) -> &'static str {
        match (self, name) {
            (Self::En, FieldName::Brand) => "Brand",
            (Self::En, FieldName::Model) => "Model",
            (Self::En, FieldName::Price) => "Price",
            (Self::En, FieldName::PowerConsumption) => "Power consumption",
            (Self::En, FieldName::PrintTechnology) => "Print technology",
            (Self::En, FieldName::PrintSpeed) => "Print speed",
            (Self::En, FieldName::ColorPrinting) => "Color printing",
            (Self::En, FieldName::ConnectionType) => "Connection type",
            (Self::En, FieldName::AnswerMachine) => "Answering machine",
            (Self::En, FieldName::MemoryPages) => "Memory",
            (Self::Ru, FieldName::Brand) => "Бренд",
            (Self::Ru, FieldName::Model) => "Модель",
            (Self::Ru, FieldName::Price) => "Цена",
            (Self::Ru, FieldName::PowerConsumption) => "Потребляемая мощность",
            (Self::Ru, FieldName::PrintTechnology) => "Технология печати",
            (Self::Ru, FieldName::PrintSpeed) => "Скорость печати",
            (Self::Ru, FieldName::ColorPrinting) => "Цветная печать",
            (Self::Ru, FieldName::ConnectionType) => "Тип соединения",
            (Self::Ru, FieldName::AnswerMachine) => "Автоответчик",
            (Self::Ru, FieldName::MemoryPages) => "Память",
        }
    }

    /// The measurement unit appended after a field's value, if any.
    pub const fn unit(self, name: FieldName) -> Option<&'static str> {
        match (self, name) {
            (Self::En, FieldName::PowerConsumption) => Some("W"),
            (Self::En, FieldName::PrintSpeed) => Some("ppm"),
            (Self::En, FieldName::MemoryPages) => Some("pages"),
            (Self::Ru, FieldName::Price) => Some("руб."),
            (Self::Ru, FieldName::PowerConsumption) => Some("Вт"),
            (Self::Ru, FieldName::PrintSpeed) => Some("стр/мин"),
            (Self::Ru, FieldName::MemoryPages) => Some("страниц"),
            _ => None,
        }
    }

    /// The yes/no caption of a flag value.
    pub const fn flag(self, value: bool) -> &'static str {
        if value {
            self.captions().yes
        } else {
            self.captions().no
        }
    }

    /// The caption of an equipment variant.
    pub const fn kind_caption(self, kind: &EquipmentKind) -> &'static str {
        let captions = self.captions();
        match kind {
            EquipmentKind::Generic => captions.kind_generic,
            EquipmentKind::Printer(_) => captions.kind_printer,
            EquipmentKind::Fax(_) => captions.kind_fax,
        }
    }

    /// The teardown line reporting how many records were freed on exit.
    pub fn freed_message(self, count: usize) -> String {
        match self {
            Self::En => format!("Freed {count} record(s)."),
            Self::Ru => format!("Освобождено {count} объект(ов)."),
        }
    }

    /// The validation message for a number outside `min..=max`.
    pub fn range_error(self, min: impl fmt::Display, max: impl fmt::Display) -> String {
        match self {
            Self::En => format!("Enter a number between {min} and {max}."),
            Self::Ru => format!("Введите число от {min} до {max}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FIELDS: [FieldName; 10] = [
        FieldName::Brand,
        FieldName::Model,
        FieldName::Price,
        FieldName::PowerConsumption,
        FieldName::PrintTechnology,
        FieldName::PrintSpeed,
        FieldName::ColorPrinting,
        FieldName::ConnectionType,
        FieldName::AnswerMachine,
        FieldName::MemoryPages,
    ];

    #[test]
    fn every_field_has_a_caption_in_both_locales() {
        for name in ALL_FIELDS {
            assert!(!Locale::En.field_caption(name).is_empty());
            assert!(!Locale::Ru.field_caption(name).is_empty());
        }
    }

    #[test]
    fn measured_fields_carry_units() {
        assert_eq!(Locale::En.unit(FieldName::PowerConsumption), Some("W"));
        assert_eq!(Locale::Ru.unit(FieldName::PrintSpeed), Some("стр/мин"));
        assert_eq!(Locale::En.unit(FieldName::Brand), None);
        assert_eq!(Locale::En.unit(FieldName::Price), None);
        assert_eq!(Locale::Ru.unit(FieldName::Price), Some("руб."));
    }

    #[test]
    fn flags_localize() {
        assert_eq!(Locale::En.flag(true), "Yes");
        assert_eq!(Locale::Ru.flag(false), "Нет");
    }

    #[test]
    fn messages_interpolate_counts() {
        assert_eq!(Locale::En.freed_message(2), "Freed 2 record(s).");
        assert_eq!(Locale::En.range_error(1, 100), "Enter a number between 1 and 100.");
    }
}
