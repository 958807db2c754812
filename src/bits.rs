use crate::errors::AttributeError;
use crate::parsing_utils::{decode_utf16, decode_windows1252};
use bitter::{BitReader, LittleEndianReader};
use std::cmp;

#[inline]
pub(crate) const fn bit_width(input: u64) -> u32 {
    (core::mem::size_of::<u64>() as u32) * 8 - input.leading_zeros()
}

/// Cursor over the network stream. Reads are little endian and least significant bit first.
///
/// Every read returns `None` when the stream does not contain enough bits, in which case the
/// cursor is left where it was. A successful read advances the cursor by exactly the bits it
/// consumed, even if the caller discards the value.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    reader: LittleEndianReader<'a>,
    pos: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        BitCursor {
            data,
            reader: LittleEndianReader::new(data),
            pos: 0,
        }
    }

    /// Absolute bit position from the start of the stream
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    #[inline]
    pub fn has_bits_remaining(&self, bits: usize) -> bool {
        self.bits_remaining() >= bits
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Moves the cursor to an absolute bit position. Only used to realign on a keyframe after
    /// data that could not be decoded.
    pub fn seek_bits(&mut self, pos: usize) -> Option<()> {
        if pos > self.data.len() * 8 {
            return None;
        }

        let mut reader = LittleEndianReader::new(&self.data[pos / 8..]);
        let rem = (pos % 8) as u32;
        if rem != 0 {
            reader.read_bits(rem)?;
        }

        self.reader = reader;
        self.pos = pos;
        Some(())
    }

    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let res = self.reader.read_bit()?;
        self.pos += 1;
        Some(res)
    }

    /// Reads up to 32 bits as an unsigned value
    #[inline]
    pub fn read_bits(&mut self, bits: u32) -> Option<u32> {
        debug_assert!(bits <= 32);
        if bits == 0 {
            return Some(0);
        }

        let res = self.reader.read_bits(bits)?;
        self.pos += bits as usize;
        Some(res as u32)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Option<u8> {
        let res = self.reader.read_u8()?;
        self.pos += 8;
        Some(res)
    }

    #[inline]
    pub fn read_i8(&mut self) -> Option<i8> {
        self.read_u8().map(|x| x as i8)
    }

    #[inline]
    pub fn read_u32(&mut self) -> Option<u32> {
        let res = self.reader.read_u32()?;
        self.pos += 32;
        Some(res)
    }

    #[inline]
    pub fn read_i32(&mut self) -> Option<i32> {
        let res = self.reader.read_i32()?;
        self.pos += 32;
        Some(res)
    }

    #[inline]
    pub fn read_u64(&mut self) -> Option<u64> {
        let res = self.reader.read_u64()?;
        self.pos += 64;
        Some(res)
    }

    #[inline]
    pub fn read_i64(&mut self) -> Option<i64> {
        self.read_u64().map(|x| x as i64)
    }

    #[inline]
    pub fn read_f32(&mut self) -> Option<f32> {
        let res = self.reader.read_f32()?;
        self.pos += 32;
        Some(res)
    }

    pub fn read_bytes(&mut self, len: usize) -> Option<Vec<u8>> {
        if !self.has_bits_remaining(len.checked_mul(8)?) {
            return None;
        }

        let mut res = Vec::with_capacity(len);
        for _ in 0..len {
            res.push(self.read_u8()?);
        }
        Some(res)
    }

    /// Runs a multi step read, rewinding the cursor when any step comes up short
    #[inline]
    fn atomic<T, F>(&mut self, f: F) -> Option<T>
    where
        F: FnOnce(&mut Self) -> Option<T>,
    {
        let checkpoint = self.clone();
        let res = f(self);
        if res.is_none() {
            *self = checkpoint;
        }
        res
    }

    /// Reads a value whose presence is signaled by a leading bit
    #[inline]
    pub fn if_get<T, F>(&mut self, f: F) -> Option<Option<T>>
    where
        F: FnOnce(&mut Self) -> Option<T>,
    {
        self.atomic(|bits| {
            if bits.read_bit()? {
                f(bits).map(Some)
            } else {
                Some(None)
            }
        })
    }

    /// Reads an integer in the range `[0, max)`. Bits are read from least significant until
    /// the next bit could push the value to or beyond `max`, so the width depends on the value.
    #[inline]
    pub fn read_bits_max(&mut self, max: u32) -> Option<u32> {
        let bits = cmp::max(bit_width(u64::from(max)), 1) - 1;
        self.read_bits_max_computed(bits, max)
    }

    #[inline]
    pub fn read_bits_max_computed(&mut self, bits: u32, max: u32) -> Option<u32> {
        debug_assert!(cmp::max(bit_width(u64::from(max)), 1) == bits + 1);
        self.atomic(|cursor| {
            let data = cursor.read_bits(bits)?;
            let up = u64::from(data) + (1u64 << bits);
            if up >= u64::from(max) {
                Some(data)
            } else {
                // Check the next bit
                cursor
                    .read_bit()
                    .map(|x| if x { up as u32 } else { data })
            }
        })
    }

    /// Reads `num_bits` and maps them linearly onto `[min, max]`
    #[inline]
    pub fn read_compressed_float(&mut self, num_bits: u32, min: f32, max: f32) -> Option<f32> {
        debug_assert!(num_bits > 0 && num_bits <= 32);
        let val = self.read_bits(num_bits)?;
        let max_value = ((1u64 << num_bits) - 1) as f64;
        let range = f64::from(max) - f64::from(min);
        Some((f64::from(min) + range * (f64::from(val) / max_value)) as f32)
    }

    /// Reads length prefixed text. A negative length denotes UTF-16 characters, otherwise the
    /// text is windows-1252. Unlike the header, a length of zero is an empty string.
    pub fn read_text(&mut self) -> Result<String, AttributeError> {
        let checkpoint = self.clone();
        let res = self.read_text_inner();
        if res.is_err() {
            *self = checkpoint;
        }
        res
    }

    fn read_text_inner(&mut self) -> Result<String, AttributeError> {
        let size = self
            .read_i32()
            .ok_or(AttributeError::NotEnoughDataFor("text string"))?;

        if size == 0 {
            Ok(String::new())
        } else if !(-10_000..=10_000).contains(&size) {
            Err(AttributeError::TooBigString(size))
        } else if size < 0 {
            let len = (size * -2) as usize;
            self.read_bytes(len)
                .map(|data| decode_utf16(&data))
                .ok_or(AttributeError::TooBigString(size))
        } else {
            self.read_bytes(size as usize)
                .map(|data| decode_windows1252(&data))
                .ok_or(AttributeError::TooBigString(size))
        }
    }
}
