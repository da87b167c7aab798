//! An in-memory store of equipment records
//!
//! The [`Inventory`] knows nothing about the console. It is a simple
//! insertion-ordered sequence addressed by 1-based positions, renumbered
//! after every removal.

use crate::Equipment;

/// Error returned by position-indexed operations when the supplied position
/// does not refer to a current record.
///
/// This signals a caller bug (a stale or never-valid position), not a data
/// problem, and must be surfaced rather than swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position {position} is out of range for an inventory of {len} records")]
pub struct OutOfRangeError {
    /// The 1-based position supplied by the caller.
    pub position: usize,
    /// The number of records at the time of the call.
    pub len: usize,
}

/// An ordered, unbounded collection of equipment records.
///
/// Insertion order defines the 1-based display and removal numbering.
/// Duplicate records are permitted; no field is unique.
///
/// ```
/// use equipage::{Equipment, EquipmentKind, FaxSpec, Inventory, PrinterSpec};
/// use rust_decimal::Decimal;
///
/// let mut inventory = Inventory::new();
/// inventory.add(Equipment::new(
///     "HP",
///     "P1",
///     Decimal::from(100),
///     50,
///     EquipmentKind::Printer(PrinterSpec::new("Inkjet", 20, false)),
/// ));
/// inventory.add(Equipment::new(
///     "LG",
///     "F1",
///     Decimal::from(200),
///     60,
///     EquipmentKind::Fax(FaxSpec::new("Analog", true, 50)),
/// ));
///
/// let removed = inventory.remove(1)?;
/// assert_eq!(removed.brand(), "HP");
/// assert_eq!(inventory.iter().next().map(|(position, _)| position), Some(1));
/// # Ok::<(), equipage::OutOfRangeError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<Equipment>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Creates an empty inventory with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record at the end of the ordering.
    ///
    /// Always succeeds; the collection is unbounded.
    pub fn add(&mut self, record: Equipment) {
        self.records.push(record);
    }

    /// The number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the inventory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the records in insertion order, paired with their 1-based
    /// positions.
    ///
    /// The iterator is lazy and restartable; an empty inventory yields an
    /// empty iterator.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Equipment)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (index + 1, record))
    }

    /// Borrows the record at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the position does not refer to a
    /// current record.
    pub fn record(&self, position: usize) -> Result<&Equipment, OutOfRangeError> {
        let index = self.index_of(position)?;
        Ok(&self.records[index])
    }

    /// Mutably borrows the record at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the position does not refer to a
    /// current record.
    pub fn record_mut(&mut self, position: usize) -> Result<&mut Equipment, OutOfRangeError> {
        let index = self.index_of(position)?;
        Ok(&mut self.records[index])
    }

    /// Removes and returns the record at a 1-based position, shifting later
    /// records down by one.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the position does not refer to a
    /// current record; the collection is left untouched in that case.
    pub fn remove(&mut self, position: usize) -> Result<Equipment, OutOfRangeError> {
        let index = self.index_of(position)?;
        Ok(self.records.remove(index))
    }

    /// Removes every record, returning how many were removed.
    ///
    /// Clearing an already-empty inventory returns 0; this is not an error.
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }

    fn index_of(&self, position: usize) -> Result<usize, OutOfRangeError> {
        if (1..=self.records.len()).contains(&position) {
            Ok(position - 1)
        } else {
            Err(OutOfRangeError {
                position,
                len: self.records.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{Equipment, EquipmentKind, FaxSpec, Inventory, OutOfRangeError, PrinterSpec};

    fn printer(brand: &str, model: &str) -> Equipment {
        Equipment::new(
            brand,
            model,
            Decimal::from(100),
            50,
            EquipmentKind::Printer(PrinterSpec::new("Inkjet", 20, false)),
        )
    }

    fn fax(brand: &str, model: &str) -> Equipment {
        Equipment::new(
            brand,
            model,
            Decimal::from(200),
            60,
            EquipmentKind::Fax(FaxSpec::new("Analog", true, 50)),
        )
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));
        inventory.add(fax("LG", "F1"));

        let listed: Vec<(usize, &str)> = inventory
            .iter()
            .map(|(position, record)| (position, record.brand()))
            .collect();
        assert_eq!(listed, [(1, "HP"), (2, "LG")]);
    }

    #[test]
    fn iter_is_restartable() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));

        assert_eq!(inventory.iter().count(), 1);
        assert_eq!(inventory.iter().count(), 1);
    }

    #[test]
    fn empty_inventory_yields_an_empty_sequence() {
        let inventory = Inventory::new();

        assert!(inventory.is_empty());
        assert_eq!(inventory.iter().next(), None);
    }

    #[test]
    fn duplicates_are_permitted() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));
        inventory.add(printer("HP", "P1"));

        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn record_reads_by_position() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));
        inventory.add(fax("LG", "F1"));

        assert_eq!(inventory.record(2).unwrap().brand(), "LG");
        assert_eq!(
            inventory.record(3),
            Err(OutOfRangeError { position: 3, len: 2 })
        );
    }

    #[test]
    fn record_mut_routes_edits_through_validation() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));

        inventory.record_mut(1).unwrap().set_power_watts(9000);
        assert_eq!(inventory.record(1).unwrap().power_watts(), 0);
    }

    #[test]
    fn remove_shifts_later_positions_down() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));
        inventory.add(fax("LG", "F1"));
        inventory.add(printer("Canon", "P2"));

        let removed = inventory.remove(1).unwrap();
        assert_eq!(removed.brand(), "HP");

        let listed: Vec<(usize, &str)> = inventory
            .iter()
            .map(|(position, record)| (position, record.brand()))
            .collect();
        assert_eq!(listed, [(1, "LG"), (2, "Canon")]);
    }

    #[test]
    fn remove_rejects_position_zero() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));

        assert_eq!(
            inventory.remove(0),
            Err(OutOfRangeError { position: 0, len: 1 })
        );
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn remove_rejects_position_past_the_end() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));
        inventory.add(fax("LG", "F1"));

        let stale = inventory.remove(5);
        assert_eq!(stale, Err(OutOfRangeError { position: 5, len: 2 }));
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn remove_on_empty_inventory_fails() {
        let mut inventory = Inventory::new();

        assert_eq!(
            inventory.remove(1),
            Err(OutOfRangeError { position: 1, len: 0 })
        );
    }

    #[test]
    fn clear_reports_the_count_and_empties() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));
        inventory.add(fax("LG", "F1"));
        inventory.add(printer("Canon", "P2"));

        assert_eq!(inventory.clear(), 3);
        assert!(inventory.is_empty());
        assert_eq!(inventory.iter().next(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.clear(), 0);

        inventory.add(printer("HP", "P1"));
        assert_eq!(inventory.clear(), 1);
        assert_eq!(inventory.clear(), 0);
    }

    #[test]
    fn listing_removal_and_stale_positions_compose() {
        let mut inventory = Inventory::new();
        inventory.add(printer("HP", "P1"));
        inventory.add(fax("LG", "F1"));

        let listed: Vec<(usize, &str)> = inventory
            .iter()
            .map(|(position, record)| (position, record.model()))
            .collect();
        assert_eq!(listed, [(1, "P1"), (2, "F1")]);

        inventory.remove(1).unwrap();
        assert_eq!(inventory.len(), 1);
        let listed: Vec<(usize, &str)> = inventory
            .iter()
            .map(|(position, record)| (position, record.model()))
            .collect();
        assert_eq!(listed, [(1, "F1")]);
        assert!(inventory.record(1).unwrap().as_fax().is_some());

        assert_eq!(
            inventory.remove(5),
            Err(OutOfRangeError { position: 5, len: 1 })
        );
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn error_message_names_position_and_size() {
        let error = OutOfRangeError { position: 5, len: 1 };
        assert_eq!(
            error.to_string(),
            "position 5 is out of range for an inventory of 1 records"
        );
    }
}
