#![no_main]

use libfuzzer_sys::fuzz_target;

#[path = "../ops.rs"]
mod ops;

fuzz_target!(|data: &[u8]| {
    _ = ops::run(data);
});
