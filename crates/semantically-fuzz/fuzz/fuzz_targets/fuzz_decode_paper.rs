#![no_main]

use libfuzzer_sys::fuzz_target;
use semantically::decode::decode_one;
use semantically::models::{DetailedAuthor, DetailedPaper, Paper, PaperRef};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary JSON must return Ok or Err, never panic
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = decode_one::<Paper>(&json);
        let _ = decode_one::<DetailedPaper>(&json);
        let _ = decode_one::<DetailedAuthor>(&json);
        let _ = decode_one::<PaperRef>(&json);
    }
});
