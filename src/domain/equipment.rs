use non_empty_string::NonEmptyString;
use rust_decimal::Decimal;

use crate::domain::fields::{Field, FieldName, FieldValue};

/// Literal substituted for a blank brand or model.
pub const UNKNOWN: &str = "Unknown";

/// Print technology substituted for a blank value.
pub const DEFAULT_TECHNOLOGY: &str = "Inkjet";

/// Connection type substituted for a blank value.
pub const DEFAULT_CONNECTION: &str = "Analog";

/// Valid closed range for a record's price, in currency units.
pub mod price_bounds {
    use rust_decimal::Decimal;

    /// Lower bound (inclusive).
    pub const MIN: Decimal = Decimal::ZERO;
    /// Upper bound (inclusive).
    pub const MAX: Decimal = Decimal::from_parts(200_000, 0, 0, false, 0);
    /// Substituted for any out-of-range value.
    pub const FALLBACK: Decimal = Decimal::ZERO;
}

/// Valid closed range for a record's power consumption, in watts.
pub mod power_bounds {
    /// Lower bound (inclusive).
    pub const MIN: i32 = 0;
    /// Upper bound (inclusive).
    pub const MAX: i32 = 3000;
    /// Substituted for any out-of-range value.
    pub const FALLBACK: i32 = 0;
}

/// Valid closed range for a printer's print speed, in pages per minute.
pub mod print_speed_bounds {
    /// Lower bound (inclusive).
    pub const MIN: i32 = 1;
    /// Upper bound (inclusive).
    pub const MAX: i32 = 100;
    /// Substituted for any out-of-range value. Distinct from the zero
    /// fallback of the common numeric fields.
    pub const FALLBACK: i32 = 20;
}

/// Valid closed range for a fax machine's page memory.
pub mod memory_pages_bounds {
    /// Lower bound (inclusive).
    pub const MIN: i32 = 1;
    /// Upper bound (inclusive).
    pub const MAX: i32 = 500;
    /// Substituted for any out-of-range value. Distinct from the zero
    /// fallback of the common numeric fields.
    pub const FALLBACK: i32 = 50;
}

/// A single office-equipment record.
///
/// Every field is routed through its validation rule on construction and on
/// every setter call. Invalid input is silently replaced by the field's
/// documented fallback, never rejected, so a record is always
/// constructible. Fields are private; there is no way to write a field
/// without passing validation.
///
/// ```
/// use equipage::{Equipment, EquipmentKind};
/// use rust_decimal::Decimal;
///
/// // Out-of-range values fall back independently per field.
/// let record = Equipment::new("HP", "", Decimal::from(-1), 5000, EquipmentKind::Generic);
/// assert_eq!(record.brand(), "HP");
/// assert_eq!(record.model(), "Unknown");
/// assert_eq!(record.price(), Decimal::ZERO);
/// assert_eq!(record.power_watts(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    brand: NonEmptyString,
    model: NonEmptyString,
    price: Decimal,
    power_watts: i32,
    kind: EquipmentKind,
}

/// The closed set of equipment variants.
///
/// The tag is fixed at construction: accessors expose the variant payload,
/// but nothing can move a record from one variant to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentKind {
    /// Equipment with no variant-specific fields.
    Generic,
    /// A printer, with technology, speed and colour fields.
    Printer(PrinterSpec),
    /// A fax machine, with connection, answer-machine and memory fields.
    Fax(FaxSpec),
}

impl Equipment {
    /// Constructs a record, routing every field through its validation
    /// rule.
    ///
    /// A blank brand or model becomes [`UNKNOWN`]; out-of-range price and
    /// power become zero. Variant-specific fields are validated by the
    /// corresponding spec constructor. Construction never fails.
    #[must_use]
    pub fn new(
        brand: &str,
        model: &str,
        price: Decimal,
        power_watts: i32,
        kind: EquipmentKind,
    ) -> Self {
        Self {
            brand: sanitized_text(brand, UNKNOWN),
            model: sanitized_text(model, UNKNOWN),
            price: sanitized(price, price_bounds::MIN, price_bounds::MAX, price_bounds::FALLBACK),
            power_watts: sanitized(
                power_watts,
                power_bounds::MIN,
                power_bounds::MAX,
                power_bounds::FALLBACK,
            ),
            kind,
        }
    }

    /// The manufacturer name.
    #[must_use]
    pub fn brand(&self) -> &str {
        self.brand.as_str()
    }

    /// The model designation.
    #[must_use]
    pub fn model(&self) -> &str {
        self.model.as_str()
    }

    /// The price, in currency units.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// The power consumption, in watts.
    #[must_use]
    pub const fn power_watts(&self) -> i32 {
        self.power_watts
    }

    /// The variant tag and payload.
    #[must_use]
    pub const fn kind(&self) -> &EquipmentKind {
        &self.kind
    }

    /// Reassigns the brand, re-running its validation rule.
    pub fn set_brand(&mut self, brand: &str) {
        self.brand = sanitized_text(brand, UNKNOWN);
    }

    /// Reassigns the model, re-running its validation rule.
    pub fn set_model(&mut self, model: &str) {
        self.model = sanitized_text(model, UNKNOWN);
    }

    /// Reassigns the price, re-running its validation rule.
    pub fn set_price(&mut self, price: Decimal) {
        self.price = sanitized(price, price_bounds::MIN, price_bounds::MAX, price_bounds::FALLBACK);
    }

    /// Reassigns the power consumption, re-running its validation rule.
    pub fn set_power_watts(&mut self, power_watts: i32) {
        self.power_watts = sanitized(
            power_watts,
            power_bounds::MIN,
            power_bounds::MAX,
            power_bounds::FALLBACK,
        );
    }

    /// The printer payload, if this record is a printer.
    #[must_use]
    pub const fn as_printer(&self) -> Option<&PrinterSpec> {
        match &self.kind {
            EquipmentKind::Printer(spec) => Some(spec),
            EquipmentKind::Generic | EquipmentKind::Fax(_) => None,
        }
    }

    /// Mutable access to the printer payload, if this record is a printer.
    pub const fn as_printer_mut(&mut self) -> Option<&mut PrinterSpec> {
        match &mut self.kind {
            EquipmentKind::Printer(spec) => Some(spec),
            EquipmentKind::Generic | EquipmentKind::Fax(_) => None,
        }
    }

    /// The fax payload, if this record is a fax machine.
    #[must_use]
    pub const fn as_fax(&self) -> Option<&FaxSpec> {
        match &self.kind {
            EquipmentKind::Fax(spec) => Some(spec),
            EquipmentKind::Generic | EquipmentKind::Printer(_) => None,
        }
    }

    /// Mutable access to the fax payload, if this record is a fax machine.
    pub const fn as_fax_mut(&mut self) -> Option<&mut FaxSpec> {
        match &mut self.kind {
            EquipmentKind::Fax(spec) => Some(spec),
            EquipmentKind::Generic | EquipmentKind::Printer(_) => None,
        }
    }

    /// Renders the record as an ordered sequence of (name, value) pairs.
    ///
    /// The four common fields come first, in a fixed order, followed by the
    /// variant-specific fields in their own fixed order. The output is a
    /// borrowed snapshot; formatting and captioning are the caller's
    /// concern.
    ///
    /// ```
    /// use equipage::{Equipment, EquipmentKind, FieldName, PrinterSpec};
    /// use rust_decimal::Decimal;
    ///
    /// let record = Equipment::new(
    ///     "HP",
    ///     "DeskJet",
    ///     Decimal::from(5000),
    ///     200,
    ///     EquipmentKind::Printer(PrinterSpec::new("Inkjet", 22, true)),
    /// );
    /// let names: Vec<FieldName> = record.fields().iter().map(|field| field.name).collect();
    /// assert_eq!(
    ///     names,
    ///     [
    ///         FieldName::Brand,
    ///         FieldName::Model,
    ///         FieldName::Price,
    ///         FieldName::PowerConsumption,
    ///         FieldName::PrintTechnology,
    ///         FieldName::PrintSpeed,
    ///         FieldName::ColorPrinting,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::new(FieldName::Brand, FieldValue::Text(self.brand())),
            Field::new(FieldName::Model, FieldValue::Text(self.model())),
            Field::new(FieldName::Price, FieldValue::Money(self.price)),
            Field::new(FieldName::PowerConsumption, FieldValue::Integer(self.power_watts)),
        ];

        match &self.kind {
            EquipmentKind::Generic => {}
            EquipmentKind::Printer(spec) => fields.extend(spec.fields()),
            EquipmentKind::Fax(spec) => fields.extend(spec.fields()),
        }

        fields
    }
}

impl Default for Equipment {
    /// A generic record with every field at its documented default.
    fn default() -> Self {
        Self::new(
            UNKNOWN,
            UNKNOWN,
            price_bounds::FALLBACK,
            power_bounds::FALLBACK,
            EquipmentKind::Generic,
        )
    }
}

/// Variant fields of a printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterSpec {
    technology: NonEmptyString,
    speed_ppm: i32,
    color: bool,
}

impl PrinterSpec {
    /// Constructs the printer payload, validating each field.
    ///
    /// A blank technology becomes [`DEFAULT_TECHNOLOGY`]; an out-of-range
    /// speed becomes [`print_speed_bounds::FALLBACK`].
    #[must_use]
    pub fn new(technology: &str, speed_ppm: i32, color: bool) -> Self {
        Self {
            technology: sanitized_text(technology, DEFAULT_TECHNOLOGY),
            speed_ppm: sanitized(
                speed_ppm,
                print_speed_bounds::MIN,
                print_speed_bounds::MAX,
                print_speed_bounds::FALLBACK,
            ),
            color,
        }
    }

    /// The printing technology.
    #[must_use]
    pub fn technology(&self) -> &str {
        self.technology.as_str()
    }

    /// The print speed, in pages per minute.
    #[must_use]
    pub const fn speed_ppm(&self) -> i32 {
        self.speed_ppm
    }

    /// Whether the printer prints in colour.
    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    /// Reassigns the technology, re-running its validation rule.
    pub fn set_technology(&mut self, technology: &str) {
        self.technology = sanitized_text(technology, DEFAULT_TECHNOLOGY);
    }

    /// Reassigns the print speed, re-running its validation rule.
    pub fn set_speed_ppm(&mut self, speed_ppm: i32) {
        self.speed_ppm = sanitized(
            speed_ppm,
            print_speed_bounds::MIN,
            print_speed_bounds::MAX,
            print_speed_bounds::FALLBACK,
        );
    }

    /// Reassigns the colour flag.
    pub const fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    fn fields(&self) -> [Field<'_>; 3] {
        [
            Field::new(FieldName::PrintTechnology, FieldValue::Text(self.technology())),
            Field::new(FieldName::PrintSpeed, FieldValue::Integer(self.speed_ppm)),
            Field::new(FieldName::ColorPrinting, FieldValue::Flag(self.color)),
        ]
    }
}

impl Default for PrinterSpec {
    /// A monochrome printer with default technology and speed.
    fn default() -> Self {
        Self::new(DEFAULT_TECHNOLOGY, print_speed_bounds::FALLBACK, false)
    }
}

/// Variant fields of a fax machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaxSpec {
    connection: NonEmptyString,
    answer_machine: bool,
    memory_pages: i32,
}

impl FaxSpec {
    /// Constructs the fax payload, validating each field.
    ///
    /// A blank connection type becomes [`DEFAULT_CONNECTION`]; an
    /// out-of-range page memory becomes [`memory_pages_bounds::FALLBACK`].
    #[must_use]
    pub fn new(connection: &str, answer_machine: bool, memory_pages: i32) -> Self {
        Self {
            connection: sanitized_text(connection, DEFAULT_CONNECTION),
            answer_machine,
            memory_pages: sanitized(
                memory_pages,
                memory_pages_bounds::MIN,
                memory_pages_bounds::MAX,
                memory_pages_bounds::FALLBACK,
            ),
        }
    }

    /// The line connection type.
    #[must_use]
    pub fn connection(&self) -> &str {
        self.connection.as_str()
    }

    /// Whether the machine has an answering machine.
    #[must_use]
    pub const fn answer_machine(&self) -> bool {
        self.answer_machine
    }

    /// The page memory capacity.
    #[must_use]
    pub const fn memory_pages(&self) -> i32 {
        self.memory_pages
    }

    /// Reassigns the connection type, re-running its validation rule.
    pub fn set_connection(&mut self, connection: &str) {
        self.connection = sanitized_text(connection, DEFAULT_CONNECTION);
    }

    /// Reassigns the answer-machine flag.
    pub const fn set_answer_machine(&mut self, answer_machine: bool) {
        self.answer_machine = answer_machine;
    }

    /// Reassigns the page memory, re-running its validation rule.
    pub fn set_memory_pages(&mut self, memory_pages: i32) {
        self.memory_pages = sanitized(
            memory_pages,
            memory_pages_bounds::MIN,
            memory_pages_bounds::MAX,
            memory_pages_bounds::FALLBACK,
        );
    }

    fn fields(&self) -> [Field<'_>; 3] {
        [
            Field::new(FieldName::ConnectionType, FieldValue::Text(self.connection())),
            Field::new(FieldName::AnswerMachine, FieldValue::Flag(self.answer_machine)),
            Field::new(FieldName::MemoryPages, FieldValue::Integer(self.memory_pages)),
        ]
    }
}

impl Default for FaxSpec {
    /// A fax with default connection and memory and no answering machine.
    fn default() -> Self {
        Self::new(DEFAULT_CONNECTION, false, memory_pages_bounds::FALLBACK)
    }
}

/// Keeps a value inside a closed range, substituting the fallback otherwise.
///
/// Out-of-range input maps to the fallback, not to the nearest bound.
fn sanitized<T>(value: T, min: T, max: T, fallback: T) -> T
where
    T: PartialOrd + Copy,
{
    if (min..=max).contains(&value) { value } else { fallback }
}

fn sanitized_text(value: &str, fallback: &'static str) -> NonEmptyString {
    let chosen = if value.trim().is_empty() { fallback } else { value };
    NonEmptyString::new(chosen.to_string()).expect("sanitised text is never empty")
}
