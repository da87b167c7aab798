// Borrowed field snapshots - the display contract between the domain model
// and whatever front end renders it.

use std::fmt;

use rust_decimal::Decimal;

/// Stable identifier of a rendered field.
///
/// Identifiers are display-neutral: a front end maps them to
/// locale-specific captions. The set is closed and the rendering order is
/// fixed by [`Equipment::fields`](crate::Equipment::fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Manufacturer name.
    Brand,
    /// Model designation.
    Model,
    /// Price in currency units.
    Price,
    /// Power consumption in watts.
    PowerConsumption,
    /// Printing technology (printers only).
    PrintTechnology,
    /// Print speed in pages per minute (printers only).
    PrintSpeed,
    /// Whether the printer prints in colour (printers only).
    ColorPrinting,
    /// Line connection type (fax machines only).
    ConnectionType,
    /// Whether an answering machine is fitted (fax machines only).
    AnswerMachine,
    /// Page memory capacity (fax machines only).
    MemoryPages,
}

impl FieldName {
    /// The stable machine-readable key of this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Price => "price",
            Self::PowerConsumption => "power-consumption",
            Self::PrintTechnology => "print-technology",
            Self::PrintSpeed => "print-speed",
            Self::ColorPrinting => "color-printing",
            Self::ConnectionType => "connection-type",
            Self::AnswerMachine => "answer-machine",
            Self::MemoryPages => "memory-pages",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered field value, borrowed from its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text.
    Text(&'a str),
    /// A monetary amount.
    Money(Decimal),
    /// A bounded integer quantity.
    Integer(i32),
    /// A yes/no flag.
    Flag(bool),
}

impl fmt::Display for FieldValue<'_> {
    /// Locale-neutral default formatting; front ends usually substitute
    /// their own captions for [`FieldValue::Flag`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Money(amount) => write!(f, "{amount}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// One (name, value) pair of a record snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// The field's stable identifier.
    pub name: FieldName,
    /// The field's current value.
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub(crate) const fn new(name: FieldName, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }
}
