use crate::errors::ParseError;
use crate::parsing_utils::{decode_str, decode_utf16, decode_windows1252};

/// Byte oriented reader for the header and body sections of a replay
#[derive(Debug, Clone, PartialEq)]
pub struct CoreParser<'a> {
    data: &'a [u8],

    /// Current offset in regards to the whole view of the replay
    col: i32,
}

impl<'a> CoreParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        CoreParser { data, col: 0 }
    }

    pub fn bytes_read(&self) -> i32 {
        self.col
    }

    pub fn bytes_remaining(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a slice of the replay after ensuring there is enough space for the requested slice
    pub fn view_data(&self, size: usize) -> Result<&'a [u8], ParseError> {
        self.data
            .get(..size)
            .ok_or(ParseError::OutOfBounds(size as i32, self.data.len() as i32))
    }

    pub fn take_data(&mut self, size: usize) -> Result<&'a [u8], ParseError> {
        let res = self.view_data(size)?;
        self.col += size as i32;
        self.data = &self.data[size..];
        Ok(res)
    }

    /// Take the next `N` bytes as a fixed size array
    #[inline]
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N], ParseError> {
        let data = self.take_data(N)?;
        let mut res = [0u8; N];
        res.copy_from_slice(data);
        Ok(res)
    }

    /// Carve out the next `size` bytes into a parser of their own. The returned parser keeps
    /// reporting offsets relative to the whole replay.
    pub fn scope(&mut self, size: usize) -> Result<CoreParser<'a>, ParseError> {
        let col = self.col;
        let data = self.take_data(size)?;
        Ok(CoreParser { data, col })
    }

    pub fn skip(&mut self, size: usize) -> Result<(), ParseError> {
        self.take_data(size).map(|_| ())
    }

    pub fn take_i32(&mut self, section: &'static str) -> Result<i32, ParseError> {
        let col = self.col;
        self.take::<4>()
            .map(i32::from_le_bytes)
            .map_err(|e| ParseError::Section(section, col, Box::new(e)))
    }

    pub fn take_u32(&mut self, section: &'static str) -> Result<u32, ParseError> {
        let col = self.col;
        self.take::<4>()
            .map(u32::from_le_bytes)
            .map_err(|e| ParseError::Section(section, col, Box::new(e)))
    }

    /// Repeatedly parse the same elements from replay until `size` elements parsed
    pub fn repeat<F, T>(size: usize, mut f: F) -> Result<Vec<T>, ParseError>
    where
        F: FnMut() -> Result<T, ParseError>,
    {
        if size > 25_000 {
            return Err(ParseError::ListTooLarge(size));
        }

        let mut res = Vec::with_capacity(size);
        for _ in 0..size {
            res.push(f()?);
        }
        Ok(res)
    }

    pub fn list_of<F, T>(&mut self, mut f: F) -> Result<Vec<T>, ParseError>
    where
        F: FnMut(&mut Self) -> Result<T, ParseError>,
    {
        let size = i32::from_le_bytes(self.take::<4>()?);
        if size < 0 {
            return Err(ParseError::ListTooLarge(size as usize));
        }

        CoreParser::repeat(size as usize, || f(self))
    }

    pub fn text_list(&mut self) -> Result<Vec<String>, ParseError> {
        self.list_of(CoreParser::parse_text)
    }

    /// Parses UTF-8 string from replay
    pub fn parse_str(&mut self) -> Result<&'a str, ParseError> {
        let mut size = i32::from_le_bytes(self.take::<4>()?);

        // Some older replays list the `None` terminator with a garbled length of 0x5000000
        if size == 0x0500_0000 {
            size = 8;
        }

        if size == 0 {
            return Err(ParseError::ZeroSize);
        } else if !(0..=10_000).contains(&size) {
            return Err(ParseError::TextTooLarge(size));
        }

        self.take_data(size as usize).and_then(decode_str)
    }

    /// Parses either UTF-16 or Windows-1252 encoded strings
    pub fn parse_text(&mut self) -> Result<String, ParseError> {
        // The number of characters that the string is composed of. If negative, the string is
        // UTF-16, else the string is windows 1252 encoded.
        let characters = i32::from_le_bytes(self.take::<4>()?);

        // size.abs() will panic at min_value, so we eschew it for manual checking
        if characters == 0 {
            Err(ParseError::ZeroSize)
        } else if !(-10_000..=10_000).contains(&characters) {
            Err(ParseError::TextTooLarge(characters))
        } else if characters < 0 {
            // Each UTF-16 character is two bytes and the last two bytes are null terminators
            let size = characters * -2;
            self.take_data(size as usize).map(decode_utf16)
        } else {
            self.take_data(characters as usize).map(decode_windows1252)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseError;

    const SOCCAR: &[u8] = b"\x18\x00\x00\x00TAGame.Replay_Soccar_TA\x00";

    #[test]
    fn parse_text_encoding() {
        let mut parser = CoreParser::new(SOCCAR);
        assert_eq!(parser.parse_str().unwrap(), "TAGame.Replay_Soccar_TA");
        assert_eq!(parser.bytes_read(), 28);
        assert!(parser.is_empty());
    }

    #[test]
    fn parse_text_encoding_bad() {
        let mut parser = CoreParser::new(&SOCCAR[..SOCCAR.len() - 1]);
        let error = parser.parse_str().unwrap_err();
        assert_eq!(error, ParseError::OutOfBounds(24, 23));
    }

    #[test]
    fn parse_text_encoding_bad_2() {
        let mut parser = CoreParser::new(&SOCCAR[..2]);
        let error = parser.parse_str().unwrap_err();
        assert_eq!(error, ParseError::OutOfBounds(4, 2));
    }

    #[test]
    fn parse_text_zero_size() {
        let mut parser = CoreParser::new(&[0, 0, 0, 0, 0]);
        assert_eq!(parser.parse_str().unwrap_err(), ParseError::ZeroSize);
        let mut parser = CoreParser::new(&[0, 0, 0, 0, 0]);
        assert_eq!(parser.parse_text().unwrap_err(), ParseError::ZeroSize);
    }

    #[test]
    fn parse_text_too_large() {
        let mut parser = CoreParser::new(&[0xcc, 0xcc, 0xcc, 0xcc, 0xcc]);
        let error = parser.parse_text().unwrap_err();
        assert_eq!(error, ParseError::TextTooLarge(-858993460));
    }

    #[test]
    fn parse_utf16_string() {
        let mut data = vec![0xf4, 0xff, 0xff, 0xff];
        for unit in "\u{2623}D[e]!v1zz\u{2623}".encode_utf16() {
            data.extend_from_slice(&unit.to_le_bytes());
        }
        data.extend_from_slice(&[0, 0]);
        let mut parser = CoreParser::new(&data[..]);
        assert_eq!(parser.parse_text().unwrap(), "\u{2623}D[e]!v1zz\u{2623}");
    }

    /// Define behavior on invalid UTF-16 sequences.
    #[test]
    fn parse_invalid_utf16_string() {
        let data = [0xfd, 0xff, 0xff, 0xff, 0xd8, 0xd8, 0x00, 0x00, 0x00, 0x00];
        let mut parser = CoreParser::new(&data[..]);
        let res = parser.parse_text().unwrap();
        assert_eq!(res, "\u{fffd}\u{0}");
    }

    #[test]
    fn scope_keeps_offsets() {
        let data = [1, 0, 0, 0, 2, 0, 0, 0, 3];
        let mut parser = CoreParser::new(&data[..]);
        parser.skip(4).unwrap();
        let mut inner = parser.scope(4).unwrap();
        assert_eq!(inner.bytes_read(), 4);
        assert_eq!(inner.take_i32("inner").unwrap(), 2);
        assert!(inner.take_i32("inner").is_err());
        assert_eq!(parser.bytes_read(), 8);
        assert_eq!(parser.bytes_remaining(), 1);
    }

    #[test]
    fn list_too_large() {
        let data = [0x50, 0xc3, 0x00, 0x00];
        let mut parser = CoreParser::new(&data[..]);
        let res = parser.list_of(|x| x.take_i32("element"));
        assert_eq!(res.unwrap_err(), ParseError::ListTooLarge(50_000));
    }
}
