//! This bench test simulates bulk insertion and clearing of a large
//! inventory of equipment records.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use equipage::{Equipment, EquipmentKind, FaxSpec, Inventory, PrinterSpec};
use rust_decimal::Decimal;

const RECORDS: usize = 10_000;

/// Generates a large inventory of mixed variants
fn preseed_inventory(count: usize) -> Inventory {
    let mut inventory = Inventory::with_capacity(count);
    for i in 0..count {
        let record = match i % 3 {
            0 => Equipment::new(
                "HP",
                "LaserJet",
                Decimal::from(15_000),
                800,
                EquipmentKind::Generic,
            ),
            1 => Equipment::new(
                "Canon",
                "P200",
                Decimal::from(7000),
                150,
                EquipmentKind::Printer(PrinterSpec::new("Laser", 35, true)),
            ),
            _ => Equipment::new(
                "Panasonic",
                "F20",
                Decimal::from(3000),
                150,
                EquipmentKind::Fax(FaxSpec::new("Digital", true, 120)),
            ),
        };
        inventory.add(record);
    }
    inventory
}

fn add_many(c: &mut Criterion) {
    c.bench_function("add many records", |b| {
        b.iter_batched(
            Inventory::new,
            |mut inventory| {
                for _ in 0..RECORDS {
                    inventory.add(Equipment::default());
                }
                inventory
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("clear many records", |b| {
        b.iter_batched(
            || preseed_inventory(RECORDS),
            |mut inventory| inventory.clear(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, add_many);
criterion_main!(benches);
