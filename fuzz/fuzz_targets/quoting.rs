//! Quoting helpers fuzzer.
//!
//! Tests that the quoting helpers never panic on arbitrary text and that
//! `COPY` quoting unescapes back to the original value.

use honggfuzz::fuzz;
use logtriga_rs::testing::test_quoting;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_quoting(data);
        });
    }
}
