//! Fuzzing library for semantically.
//!
//! Targets cover payload decoding, response envelopes and identifier
//! validation.
//!
//! # Usage
//!
//! ```bash
//! cd crates/semantically-fuzz
//! cargo +nightly fuzz run fuzz_decode_paper -- -max_total_time=60
//! ```

pub use semantically::{decode, ids, models};
