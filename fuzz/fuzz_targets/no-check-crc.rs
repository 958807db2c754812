#![no_main]

use libfuzzer_sys::fuzz_target;
use rlreplay::{EventProjector, ParserBuilder, ProjectorOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(replay) = ParserBuilder::new(data).never_check_crc().parse() {
        let options = ProjectorOptions {
            boost_samples: true,
            position_samples: true,
        };
        let _ = EventProjector::new(&replay.objects, options).project_replay(&replay);
    }
});
