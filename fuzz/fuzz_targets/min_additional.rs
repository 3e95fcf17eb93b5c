#![no_main]

use libfuzzer_sys::fuzz_target;
use lifeline::record::AttendanceRecord;
use lifeline::solver::{meets_requirement, ClassesNeeded};

/// Keep answers below 2^53 so class counts convert to f64 exactly
const MAX_REQUIRED_PERCENT: f64 = 99.9999999;

fuzz_target!(|input: (u32, u32, f64)| {
    let (attended, total, required) = input;
    let Ok(record) = AttendanceRecord::new(attended as u64, total as u64, required) else {
        return;
    };
    let (attended, total) = (record.classes_attended(), record.total_classes());

    match record.min_additional().needed {
        ClassesNeeded::Count(x) => {
            if required > MAX_REQUIRED_PERCENT {
                return;
            }
            assert!(meets_requirement(attended + x, total + x, required));
            if x > 0 {
                assert!(!meets_requirement(attended + x - 1, total + x - 1, required));
            }
        }
        ClassesNeeded::Unreachable => {
            assert_eq!(required, 100.0);
            assert!(attended < total);
        }
    }
});
