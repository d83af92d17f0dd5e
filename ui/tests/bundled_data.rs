//! The dataset ships twice: `ui/assets/data` (compiled in, desktop resources)
//! and `web/assets/data` (served by the web build). Both must stay identical
//! and fill every chart slot.

use std::collections::HashSet;

use ui::core::data::{parse_drivers, BUNDLED_DRIVERS};
use ui::core::driver::normalize;

const WEB_COPY: &str = include_str!("../../web/assets/data/f1_drivers_2024.json");

#[test]
fn web_copy_matches_bundled_dataset() {
    assert_eq!(
        WEB_COPY, BUNDLED_DRIVERS,
        "web/assets/data/f1_drivers_2024.json drifted from ui/assets/data; copy it over"
    );
}

#[test]
fn bundled_dataset_fills_the_chart() {
    let records = parse_drivers(BUNDLED_DRIVERS).expect("bundled dataset parses");
    assert!(records.len() >= 10, "only {} drivers", records.len());

    let names: HashSet<_> = records.iter().map(|r| r.driver.as_str()).collect();
    assert_eq!(names.len(), records.len(), "driver names must be unique");
}

#[test]
fn bundled_dataset_has_no_degenerate_metric() {
    let records = parse_drivers(BUNDLED_DRIVERS).expect("bundled dataset parses");
    let set = normalize(&records);
    assert!(set.degenerate.is_empty(), "degenerate: {:?}", set.degenerate);
    assert!(set
        .records
        .iter()
        .all(|r| r.abbreviation.chars().count() == 3));
}
