//! Logtriga fragment parsing fuzzer.
//!
//! Tests that parsing arbitrary fragments with any operation never panics
//! and that every parsed row keeps its columns and values paired.

use honggfuzz::fuzz;
use logtriga_rs::testing::test_parse_fragment;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_parse_fragment(data);
        });
    }
}
