#![no_main]

use libfuzzer_sys::fuzz_target;
use semantically::ids::{IdValidator, is_sha};

fuzz_target!(|data: &[u8]| {
    if let Ok(candidate) = std::str::from_utf8(data) {
        let validator = IdValidator::default();
        let valid = validator.is_valid_paper_id(candidate);
        // Every accepted id is either a SHA or carries a known type
        if valid {
            assert!(is_sha(candidate) || validator.id_type(candidate).is_some());
        }
    }
});
