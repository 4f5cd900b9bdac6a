//! Reuses one recorder for two independent phases and prints narrative reports.
//!
//! Run with: `cargo run --example marked_time_phases`.

use std::collections::HashMap;
use std::hint::black_box;

use marked_time::{IntervalRecorder, ReportLayout};

fn main() {
    let mut timings = IntervalRecorder::builder("build map")
        .layout(ReportLayout::Narrative)
        .emit_on_drop(false)
        .build();

    let map: HashMap<u64, String> = (0..200_000_u64).map(|i| (i, i.to_string())).collect();

    timings.add_event("look up every key");
    let found = (0..200_000_u64).filter(|i| map.contains_key(i)).count();
    black_box(found);

    eprintln!("=== Phase 1: hash map ===");
    timings.emit();

    timings.restart("build sorted vector");
    let mut values: Vec<u64> = (0..200_000_u64).rev().collect();
    values.sort_unstable();

    timings.add_event("binary search every value");
    let found = (0..200_000_u64)
        .filter(|i| values.binary_search(i).is_ok())
        .count();
    black_box(found);

    eprintln!("=== Phase 2: sorted vector ===");
    timings.finish();
}
