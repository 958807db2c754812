//! The checksum that guards each replay section.
//!
//! Not all CRC algorithms are the same. The replay flavor can be generated with the following
//! parameters (pycrc):
//!
//! - `Width` = 32
//! - `Poly` = 0x04c11db7
//! - `XorIn` = 0x10340dfe
//! - `ReflectIn` = False
//! - `XorOut` = 0xffffffff
//! - `ReflectOut` = False
//!
//! The implementation is a slice by 16 lookup, the same as the one found in the unreal engine.

const POLY: u32 = 0x04c1_1db7;
const SEED: u32 = 0xefcb_f201;
const SLICES: usize = 16;

const fn slice_tables(poly: u32) -> [[u32; 256]; SLICES] {
    let mut table = [[0u32; 256]; SLICES];

    let mut i = 0usize;
    while i < 256 {
        let mut crc = (i as u32) << 24;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000_0000 != 0 {
                (crc << 1) ^ poly
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[0][i] = crc.swap_bytes();
        i += 1;
    }

    i = 0;
    while i < 256 {
        let mut crc = table[0][i].swap_bytes();
        let mut slice = 1;
        while slice < SLICES {
            crc = table[0][(crc >> 24) as usize].swap_bytes() ^ (crc << 8);
            table[slice][i] = crc.swap_bytes();
            slice += 1;
        }
        i += 1;
    }
    table
}

// static instead of const so the 16KB table isn't inlined at every use
static TABLES: [[u32; 256]; SLICES] = slice_tables(POLY);

/// Incremental form of [`calc_crc`] for when a section is not available as one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc {
    state: u32,
}

impl Default for Crc {
    fn default() -> Self {
        Crc::new()
    }
}

impl Crc {
    pub fn new() -> Self {
        Crc {
            state: !SEED.swap_bytes(),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut chunks = data.chunks_exact(SLICES);
        let mut crc = self.state;
        for sl in chunks.by_ref() {
            let head = u32::from_le_bytes([sl[0], sl[1], sl[2], sl[3]]) ^ crc;
            let mut acc = TABLES[12][(head >> 24) as usize]
                ^ TABLES[13][((head >> 16) & 0xFF) as usize]
                ^ TABLES[14][((head >> 8) & 0xFF) as usize]
                ^ TABLES[15][(head & 0xFF) as usize];

            // bytes 4..16 index the tables in reverse order
            for (table, &byte) in TABLES[..12].iter().zip(sl[4..].iter().rev()) {
                acc ^= table[byte as usize];
            }
            crc = acc;
        }

        self.state = chunks.remainder().iter().fold(crc, |acc, &x| {
            (acc >> 8) ^ TABLES[0][(u32::from(x) ^ (acc & 0xFF)) as usize]
        });
    }

    pub fn finish(&self) -> u32 {
        (!self.state).swap_bytes()
    }
}

/// Calculates the crc-32 of a replay section
pub fn calc_crc(data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(data);
    crc.finish()
}
