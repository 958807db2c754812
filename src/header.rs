use crate::core_parser::CoreParser;
use crate::crc::calc_crc;
use crate::errors::ParseError;
use crate::models::{find_prop, pair_vec, HeaderProp};
use crate::network::VersionTriplet;
use crate::parsing_utils::{encode_str, encode_text};
use serde::Serialize;

/// Outcome of comparing a section's declared crc against its contents
#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum CrcStatus {
    Verified,
    Unchecked,

    /// The section was decoded in spite of the mismatch, so its values are unreliable
    Mismatch { expected: u32, actual: u32 },
}

/// The decoded header section of a replay
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct ReplayHeader {
    /// Declared length of the header section in bytes
    pub size: i32,

    /// Declared crc of the header section
    pub crc: u32,
    pub crc_status: CrcStatus,
    pub major_version: i32,
    pub minor_version: i32,
    pub net_version: Option<i32>,
    pub game_type: String,

    /// Could use a map to represent properties but I don't want to assume that duplicate keys
    /// can't exist, so to be safe, use a traditional vector.
    #[serde(serialize_with = "pair_vec")]
    pub properties: Vec<(String, HeaderProp)>,
}

impl Default for ReplayHeader {
    fn default() -> Self {
        ReplayHeader {
            size: 0,
            crc: calc_crc(&[]),
            crc_status: CrcStatus::Unchecked,
            major_version: 0,
            minor_version: 0,
            net_version: None,
            game_type: String::new(),
            properties: Vec::new(),
        }
    }
}

impl ReplayHeader {
    pub fn version(&self) -> VersionTriplet {
        VersionTriplet(
            self.major_version,
            self.minor_version,
            self.net_version.unwrap_or(0),
        )
    }

    pub fn property(&self, key: &str) -> Option<&HeaderProp> {
        find_prop(&self.properties, key)
    }

    pub fn num_frames(&self) -> Option<i32> {
        self.property("NumFrames").and_then(HeaderProp::as_i32)
    }

    pub fn max_channels(&self) -> Option<i32> {
        self.property("MaxChannels").and_then(HeaderProp::as_i32)
    }

    pub fn record_fps(&self) -> Option<f32> {
        self.property("RecordFPS").and_then(HeaderProp::as_float)
    }

    pub fn match_type(&self) -> Option<&str> {
        self.property("MatchType").and_then(HeaderProp::as_string)
    }

    pub fn build_version(&self) -> Option<&str> {
        self.property("BuildVersion").and_then(HeaderProp::as_string)
    }

    fn is_empty(&self) -> bool {
        self.major_version == 0
            && self.minor_version == 0
            && self.net_version.is_none()
            && self.game_type.is_empty()
            && self.properties.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ParserMode {
    Standard,
    Quirks,
}

impl ParserMode {
    fn from_versions(major: i32, minor: i32, net: Option<i32>) -> Self {
        match (major, minor, net) {
            (0, 0, None) => ParserMode::Quirks,
            _ => ParserMode::Standard,
        }
    }
}

/// Decodes the header from the start of a replay file: the section length, its crc, and the
/// section itself. A crc mismatch is an error. Returns the header and the data that follows it.
pub fn decode_header(data: &[u8]) -> Result<(ReplayHeader, &[u8]), ParseError> {
    let mut rlp = CoreParser::new(data);
    let size = rlp.take_i32("header size")?;
    let crc = rlp.take_u32("header crc")?;
    let section = rlp
        .view_data(size as usize)
        .map_err(|e| ParseError::Section("header", rlp.bytes_read(), Box::new(e)))?;

    let actual = calc_crc(section);
    if actual != crc {
        return Err(ParseError::CorruptHeader(crc, actual));
    }

    let mut scoped = rlp.scope(size as usize)?;
    let mut header = parse_header(&mut scoped)?;
    header.size = size;
    header.crc = crc;
    header.crc_status = CrcStatus::Verified;
    Ok((header, &data[rlp.bytes_read() as usize..]))
}

/// Reads only the version triple from the start of a header section
pub fn parse_version(rlp: &mut CoreParser) -> Result<VersionTriplet, ParseError> {
    if rlp.is_empty() {
        return Ok(VersionTriplet(0, 0, 0));
    }

    let major_version = rlp.take_i32("major version")?;
    let minor_version = rlp.take_i32("minor version")?;
    let net_version = if major_version > 865 && minor_version > 17 {
        rlp.take_i32("net version")?
    } else {
        0
    };
    Ok(VersionTriplet(major_version, minor_version, net_version))
}

/// Decodes the contents of a header section. The caller fills in the section's size and crc.
pub fn parse_header(rlp: &mut CoreParser) -> Result<ReplayHeader, ParseError> {
    if rlp.is_empty() {
        return Ok(ReplayHeader::default());
    }

    let major_version = rlp.take_i32("major version")?;
    let minor_version = rlp.take_i32("minor version")?;
    let net_version = if major_version > 865 && minor_version > 17 {
        Some(rlp.take_i32("net version")?)
    } else {
        None
    };

    let mode = ParserMode::from_versions(major_version, minor_version, net_version);

    let game_type = rlp
        .parse_text()
        .map_err(|e| ParseError::Section("game type", rlp.bytes_read(), Box::new(e)))?;

    let properties = parse_rdict(rlp, mode)
        .map_err(|e| ParseError::Section("header properties", rlp.bytes_read(), Box::new(e)))?;

    Ok(ReplayHeader {
        size: 0,
        crc: 0,
        crc_status: CrcStatus::Unchecked,
        major_version,
        minor_version,
        net_version,
        game_type,
        properties,
    })
}

fn parse_rdict(
    rlp: &mut CoreParser,
    mode: ParserMode,
) -> Result<Vec<(String, HeaderProp)>, ParseError> {
    let mut res: Vec<_> = Vec::new();
    loop {
        let key = rlp.parse_str()?;
        if key == "None" {
            break;
        }

        let kind = rlp.parse_str()?;
        let size = u64::from_le_bytes(rlp.take::<8>()?) as usize;
        let val = match kind {
            "BoolProperty" => match mode {
                // The size SHOULD be zero, but we're ignoring it.
                ParserMode::Standard => rlp.take::<1>().map(|x| HeaderProp::Bool(x[0] == 1)),
                ParserMode::Quirks => rlp.take::<4>().map(|x| HeaderProp::Bool(x[0] == 1)),
            },
            "ByteProperty" => match mode {
                ParserMode::Standard => {
                    let kind = rlp.parse_str()?;
                    let value = if kind.starts_with("OnlinePlatform_") {
                        None
                    } else {
                        Some(String::from(rlp.parse_str()?))
                    };

                    Ok(HeaderProp::Byte {
                        kind: String::from(kind),
                        value,
                    })
                }
                ParserMode::Quirks => rlp
                    .scope(size)
                    .and_then(|mut x| x.parse_text())
                    .map(|kind| HeaderProp::Byte { kind, value: None }),
            },
            "ArrayProperty" => rlp
                .scope(size)
                .and_then(|mut x| array_property(&mut x, mode)),
            "StructProperty" => rlp
                .scope(size)
                .and_then(|mut x| struct_property(&mut x, mode)),
            "FloatProperty" => rlp
                .scope(size)
                .and_then(|mut x| x.take::<4>())
                .map(f32::from_le_bytes)
                .map(HeaderProp::Float),
            "IntProperty" => rlp
                .scope(size)
                .and_then(|mut x| x.take::<4>())
                .map(i32::from_le_bytes)
                .map(HeaderProp::Int),
            "QWordProperty" => rlp
                .scope(size)
                .and_then(|mut x| x.take::<8>())
                .map(u64::from_le_bytes)
                .map(HeaderProp::QWord),
            "NameProperty" => rlp
                .scope(size)
                .and_then(|mut x| x.parse_text())
                .map(HeaderProp::Name),
            "StrProperty" => rlp
                .scope(size)
                .and_then(|mut x| x.parse_text())
                .map(HeaderProp::Str),
            x => Err(ParseError::UnknownPropertyType(String::from(x))),
        }?;

        res.push((String::from(key), val));
    }

    Ok(res)
}

fn array_property(rlp: &mut CoreParser, mode: ParserMode) -> Result<HeaderProp, ParseError> {
    let arr = rlp.list_of(|x| parse_rdict(x, mode))?;
    Ok(HeaderProp::Array(arr))
}

fn struct_property(rlp: &mut CoreParser, mode: ParserMode) -> Result<HeaderProp, ParseError> {
    let name = String::from(rlp.parse_str()?);
    let fields = parse_rdict(rlp, mode)?;
    Ok(HeaderProp::Struct { name, fields })
}

/// Encodes the header into the bytes of a header section. A header without versions, game
/// type, or properties encodes to an empty section.
pub fn write_header(header: &ReplayHeader) -> Vec<u8> {
    let mut out = Vec::new();
    if header.is_empty() {
        return out;
    }

    out.extend_from_slice(&header.major_version.to_le_bytes());
    out.extend_from_slice(&header.minor_version.to_le_bytes());
    if let Some(net) = header.net_version {
        out.extend_from_slice(&net.to_le_bytes());
    }

    let mode = ParserMode::from_versions(
        header.major_version,
        header.minor_version,
        header.net_version,
    );
    encode_text(&header.game_type, &mut out);
    write_rdict(&header.properties, mode, &mut out);
    out
}

/// Encodes the header section prefixed with its length and a freshly computed crc
pub fn write_header_block(header: &ReplayHeader) -> Vec<u8> {
    let section = write_header(header);
    let mut out = Vec::with_capacity(section.len() + 8);
    out.extend_from_slice(&(section.len() as i32).to_le_bytes());
    out.extend_from_slice(&calc_crc(&section).to_le_bytes());
    out.extend_from_slice(&section);
    out
}

fn write_rdict(props: &[(String, HeaderProp)], mode: ParserMode, out: &mut Vec<u8>) {
    for (key, prop) in props {
        encode_str(key, out);
        let mut payload = Vec::new();
        let kind = match prop {
            HeaderProp::Bool(x) => {
                payload.push(u8::from(*x));
                if mode == ParserMode::Quirks {
                    payload.extend_from_slice(&[0, 0, 0]);
                }
                "BoolProperty"
            }
            HeaderProp::Byte { kind, value } => {
                match mode {
                    ParserMode::Standard => {
                        encode_str(kind, &mut payload);
                        if let Some(value) = value {
                            encode_str(value, &mut payload);
                        }
                    }
                    ParserMode::Quirks => encode_text(kind, &mut payload),
                }
                "ByteProperty"
            }
            HeaderProp::Array(elements) => {
                payload.extend_from_slice(&(elements.len() as i32).to_le_bytes());
                for element in elements {
                    write_rdict(element, mode, &mut payload);
                }
                "ArrayProperty"
            }
            HeaderProp::Struct { name, fields } => {
                encode_str(name, &mut payload);
                write_rdict(fields, mode, &mut payload);
                "StructProperty"
            }
            HeaderProp::Float(x) => {
                payload.extend_from_slice(&x.to_le_bytes());
                "FloatProperty"
            }
            HeaderProp::Int(x) => {
                payload.extend_from_slice(&x.to_le_bytes());
                "IntProperty"
            }
            HeaderProp::QWord(x) => {
                payload.extend_from_slice(&x.to_le_bytes());
                "QWordProperty"
            }
            HeaderProp::Name(x) => {
                encode_text(x, &mut payload);
                "NameProperty"
            }
            HeaderProp::Str(x) => {
                encode_text(x, &mut payload);
                "StrProperty"
            }
        };

        // Bool and standard byte properties declare a size that doesn't cover their payload
        let size = match (prop, mode) {
            (HeaderProp::Bool(_), _) => 0,
            (HeaderProp::Byte { value, .. }, ParserMode::Standard) => value
                .as_ref()
                .map(|x| x.len() as u64 + 5)
                .unwrap_or(0),
            _ => payload.len() as u64,
        };

        encode_str(kind, out);
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&payload);
    }
    encode_str("None", out);
}
