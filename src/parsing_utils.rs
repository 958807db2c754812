use crate::errors::ParseError;
use encoding_rs::{UTF_16LE, WINDOWS_1252};

/// Reads a string of a given size from the data. The size includes a null
/// character as the last character, so we drop it in the returned string
/// slice.
pub(crate) fn decode_str(input: &[u8]) -> Result<&str, ParseError> {
    let data = &input[..input.len().saturating_sub(1)];
    Ok(std::str::from_utf8(data)?)
}

pub(crate) fn decode_utf16(input: &[u8]) -> String {
    let data = &input[..input.len().saturating_sub(2)];
    let (s, _) = UTF_16LE.decode_without_bom_handling(data);
    String::from(s)
}

pub(crate) fn decode_windows1252(input: &[u8]) -> String {
    let data = &input[..input.len().saturating_sub(1)];
    let (s, _) = WINDOWS_1252.decode_without_bom_handling(data);
    String::from(s)
}

/// Encodes text the way the replay stores it: a signed length prefix where a negative length
/// denotes UTF-16 characters. Windows-1252 is used when every character is representable.
pub(crate) fn encode_text(text: &str, out: &mut Vec<u8>) {
    let (bytes, _, unmappable) = WINDOWS_1252.encode(text);
    if !unmappable {
        out.extend_from_slice(&((bytes.len() + 1) as i32).to_le_bytes());
        out.extend_from_slice(&bytes);
        out.push(0);
    } else {
        let units: Vec<u16> = text.encode_utf16().collect();
        out.extend_from_slice(&(-((units.len() + 1) as i32)).to_le_bytes());
        for unit in units {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        out.extend_from_slice(&[0, 0]);
    }
}

/// Encodes an UTF-8 string with its length prefix and null terminator
pub(crate) fn encode_str(text: &str, out: &mut Vec<u8>) {
    out.extend_from_slice(&((text.len() + 1) as i32).to_le_bytes());
    out.extend_from_slice(text.as_bytes());
    out.push(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows1252_round_trip() {
        let mut out = Vec::new();
        encode_text("caudillman6000\u{b3}(2)", &mut out);
        assert_eq!(&out[..4], &[21, 0, 0, 0]);
        assert_eq!(decode_windows1252(&out[4..]), "caudillman6000\u{b3}(2)");
    }

    #[test]
    fn utf16_round_trip() {
        let mut out = Vec::new();
        encode_text("\u{2623}D[e]!v1zz\u{2623}", &mut out);
        assert_eq!(i32::from_le_bytes([out[0], out[1], out[2], out[3]]), -12);
        assert_eq!(decode_utf16(&out[4..]), "\u{2623}D[e]!v1zz\u{2623}");
    }
}
