#![no_main]

use libfuzzer_sys::fuzz_target;
fuzz_target!(|data: &[u8]| {
    let _ = rlreplay::ParserBuilder::new(data).always_check_crc().parse();
});
