//! Domain models for the equipment inventory.
//!
//! This module contains the equipment variants, their field-validation
//! rules, and the field snapshots consumed by display layers.

/// Equipment variants and field validation.
pub mod equipment;
pub use equipment::{Equipment, EquipmentKind, FaxSpec, PrinterSpec};

/// Rendered field snapshots.
pub mod fields;
pub use fields::{Field, FieldName, FieldValue};
