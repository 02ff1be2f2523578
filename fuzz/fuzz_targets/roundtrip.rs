#![no_main]

use adaptive_huffman::fuzz::roundtrip::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));
