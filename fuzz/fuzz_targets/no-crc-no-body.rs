#![no_main]

use libfuzzer_sys::fuzz_target;
fuzz_target!(|data: &[u8]| {
    if let Ok(replay) = rlreplay::ParserBuilder::new(data)
        .on_error_check_crc()
        .never_parse_network_data()
        .parse()
    {
        if let Some(header) = &replay.header {
            let _ = rlreplay::MatchSummary::from_header(header);
        }
    }
});
