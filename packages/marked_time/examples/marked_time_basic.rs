//! Times the steps of building and sorting a large list of strings.
//!
//! The report is written to stderr in the tabular layout when the recorder goes out of
//! scope at the end of `main`.
//!
//! Run with: `cargo run --example marked_time_basic`.

use std::hint::black_box;

use marked_time::IntervalRecorder;

const ELEMENT_COUNT: usize = 1_000_000;

fn main() {
    let mut timings = IntervalRecorder::new("time things");

    timings.add_event("allocate vector of strings");
    let mut strings = vec![String::new(); ELEMENT_COUNT];

    timings.add_event("set strings to integer encoding");
    for (value, slot) in (0..ELEMENT_COUNT).zip(strings.iter_mut()) {
        *slot = value.to_string();
    }

    timings.add_event("sort by lexicographic order");
    strings.sort();

    timings.add_event("sort by reverse lexicographic order");
    strings.sort_by(|a, b| b.cmp(a));

    timings.add_event("destroy strings");
    drop(black_box(strings));

    timings.add_event("end of main");
}
