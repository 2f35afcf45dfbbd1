#![no_main]

use libfuzzer_sys::fuzz_target;
use ecvrf_k1::ser::decode_proof;

fuzz_target!(|data: &[u8]| {
    // Fuzz the proof decoder with arbitrary input
    let _ = decode_proof(data);
});
