//! Office-equipment inventory management
//!
//! Equipment records are validated domain variants (generic office
//! equipment, printers, fax machines) held in an in-memory,
//! insertion-ordered inventory. Field validation follows a
//! sanitize-never-reject policy: invalid input is silently replaced by a
//! documented fallback, so records are always constructible.

pub mod domain;
pub use domain::{Equipment, EquipmentKind, FaxSpec, Field, FieldName, FieldValue, PrinterSpec};

/// In-memory storage and positional addressing for equipment records.
pub mod inventory;
pub use inventory::{Inventory, OutOfRangeError};
