#![no_main]

use libfuzzer_sys::fuzz_target;
use semantically::batch::{Envelope, unwrap_payloads};
use semantically::models::PageState;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = PageState::from_response(&body);
        let _ = unwrap_payloads(body.clone(), Envelope::Search);
        let _ = unwrap_payloads(body, Envelope::Lookup);
    }
});
