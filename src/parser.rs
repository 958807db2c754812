//! # Parsing
//!
//! A Rocket League game replay is a little endian binary encoded file. The number 100 would be
//! represented as the four byte sequence:
//!
//! ```plain
//! 0x64 0x00 0x00 0x00
//! ```
//!
//! A replay is split into two length prefixed sections, a header and a body, each guarded by
//! its own crc.
//!
//! ## Header
//!
//! The first four bytes of a replay is the number of bytes that comprises the header. A length
//! prefixed integer is very common throughout a replay. This prefix may either be in reference to
//! the number of bytes an elements takes up, as just seen, or the number of elements in a list.
//!
//! The next four bytes make up the [cyclic redundancy check
//! (CRC)](https://en.wikipedia.org/wiki/Cyclic_redundancy_check) for the header. The check ensures
//! that the data has not be tampered with or, more likely, corrupted.
//!
//! The game's major and minor version follow, each 32bit integers, and the net version on newer
//! replays. Subsequently, the game type is encoded as a string. Strings in Rocket League Replay
//! files are length prefixed and null terminated.
//!
//! The properties is where all the good nuggets of info reside. Visualize the properties as a map
//! of strings to various types (number, string, array) that continues until a "None" key is found.
//!
//! A header that fails to decode does not sink the replay. The body and network data are
//! decoded regardless and the failure is reported as a [`Warning`].
//!
//! ## Body
//!
//! Out of the body we get:
//!
//! - Levels (what level did the match take place)
//! - `KeyFrames`
//! - The network data, which is around 90% of the file
//! - Debug info
//! - Tickmarks
//! - Packages
//! - Objects and names
//! - The class index and class net cache, which describe how to decode the network data

use crate::core_parser::CoreParser;
use crate::crc::calc_crc;
use crate::errors::{NetworkError, ParseError, Warning};
use crate::header::{self, CrcStatus, ReplayHeader};
use crate::models::*;
use crate::network::{FrameDecoder, NetworkContext, NetworkInput, VersionTriplet};
use tracing::{debug, warn};

/// Determines under what circumstances the parser should perform the crc check for replay
/// corruption. Since the crc check is the most time consuming check for parsing (causing
/// microseconds to turn into milliseconds), clients should choose under what circumstances a crc
/// check is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrcCheck {
    /// Always perform the crc check and fail on a mismatch. Useful when the replay has had its
    /// contents modified. This will catch a user that increased the number of goals they scored
    /// (easy) but only if they didn't update the crc as well (not as easy).
    Always,

    /// Always perform the crc check but only flag a mismatch. The affected section is still
    /// decoded, its [`CrcStatus`] records the mismatch, and a [`Warning`] is returned. This option
    /// is the default for parsing.
    Lenient,

    /// Only perform the crc check when parsing a section fails. If parsing fails, the crc check
    /// will determine if it is a programming error or the replay is corrupt. If parsing succeeds
    /// it won't waste precious time performing the check.
    OnError,

    /// Never perform the crc check. Useful only when it doesn't matter to know if a replay is
    /// corrupt or not, you either want the data or the parsing error.
    Never,
}

/// Determines how the parser should handle the network data, which is the most
/// intensive and volatile section of the replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkParse {
    /// If the network data fails parse return an error
    Always,

    /// Skip parsing the network data
    Never,

    /// Attempt to parse the network data. Frames decoded before an error are kept and the error
    /// is reported as a warning. An inconsistent class hierarchy is still an error.
    IgnoreOnError,
}

/// The main entry point to parsing replays. Allows one to customize parsing options,
/// such as skipping the network data and forgoing crc (corruption) checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserBuilder<'a> {
    data: &'a [u8],
    crc_check: Option<CrcCheck>,
    network_parse: Option<NetworkParse>,
}

impl<'a> ParserBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ParserBuilder {
            data,
            crc_check: None,
            network_parse: None,
        }
    }

    pub fn always_check_crc(mut self) -> ParserBuilder<'a> {
        self.crc_check = Some(CrcCheck::Always);
        self
    }

    pub fn lenient_crc(mut self) -> ParserBuilder<'a> {
        self.crc_check = Some(CrcCheck::Lenient);
        self
    }

    pub fn never_check_crc(mut self) -> ParserBuilder<'a> {
        self.crc_check = Some(CrcCheck::Never);
        self
    }

    pub fn on_error_check_crc(mut self) -> ParserBuilder<'a> {
        self.crc_check = Some(CrcCheck::OnError);
        self
    }

    pub fn with_crc_check(mut self, check: CrcCheck) -> ParserBuilder<'a> {
        self.crc_check = Some(check);
        self
    }

    pub fn must_parse_network_data(mut self) -> ParserBuilder<'a> {
        self.network_parse = Some(NetworkParse::Always);
        self
    }

    pub fn never_parse_network_data(mut self) -> ParserBuilder<'a> {
        self.network_parse = Some(NetworkParse::Never);
        self
    }

    pub fn ignore_network_data_on_error(mut self) -> ParserBuilder<'a> {
        self.network_parse = Some(NetworkParse::IgnoreOnError);
        self
    }

    pub fn with_network_parse(mut self, parse: NetworkParse) -> ParserBuilder<'a> {
        self.network_parse = Some(parse);
        self
    }

    fn parser(&self) -> Parser<'a> {
        Parser::new(
            self.data,
            self.crc_check.unwrap_or(CrcCheck::Lenient),
            self.network_parse.unwrap_or(NetworkParse::IgnoreOnError),
        )
    }

    pub fn parse(self) -> Result<Replay, ParseError> {
        self.parser().parse()
    }

    /// Decodes the header and body and hands back a lazy iterator over the network frames.
    /// Warnings from the header and body are carried over into the decoder's warnings.
    pub fn frames(self) -> Result<FrameDecoder<'a>, ParseError> {
        self.parser().frames()
    }
}

/// Intermediate parsing structure for the body
#[derive(Debug, PartialEq)]
pub struct ReplayBody<'a> {
    pub levels: Vec<String>,
    pub keyframes: Vec<KeyFrame>,
    pub debug_info: Vec<DebugInfo>,
    pub tick_marks: Vec<TickMark>,
    pub packages: Vec<String>,
    pub objects: Vec<String>,
    pub names: Vec<String>,
    pub class_indices: Vec<ClassIndex>,
    pub net_cache: Vec<ClassNetCacheEntry>,
    pub network_data: &'a [u8],
}

/// The header and body as they were decoded, before the network data is touched
struct Sections<'a> {
    header: Option<ReplayHeader>,
    version: VersionTriplet,
    content_size: i32,
    content_crc: u32,
    body: ReplayBody<'a>,
}

impl<'a> Sections<'a> {
    fn network_input(&self) -> NetworkInput<'_> {
        NetworkInput {
            version: self.version,
            max_channels: self.header.as_ref().and_then(|x| x.max_channels()),
            num_frames: self.header.as_ref().and_then(|x| x.num_frames()),
            network_data: self.body.network_data,
            objects: &self.body.objects,
            class_indices: &self.body.class_indices,
            net_cache: &self.body.net_cache,
            keyframes: &self.body.keyframes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Header,
    Body,
}

impl SectionKind {
    fn name(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Body => "body",
        }
    }

    fn corrupt(self, expected: u32, actual: u32) -> ParseError {
        match self {
            SectionKind::Header => ParseError::CorruptHeader(expected, actual),
            SectionKind::Body => ParseError::CorruptBody(expected, actual),
        }
    }

    fn warning(self, err: ParseError) -> Warning {
        match self {
            SectionKind::Header => Warning::Header(err),
            SectionKind::Body => Warning::Body(err),
        }
    }
}

/// Holds the current state of parsing a replay
#[derive(Debug, Clone, PartialEq)]
struct Parser<'a> {
    core: CoreParser<'a>,
    crc_check: CrcCheck,
    network_parse: NetworkParse,
    warnings: Vec<Warning>,
}

impl<'a> Parser<'a> {
    fn new(data: &'a [u8], crc_check: CrcCheck, network_parse: NetworkParse) -> Self {
        Parser {
            core: CoreParser::new(data),
            crc_check,
            network_parse,
            warnings: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Replay, ParseError> {
        let sections = self.parse_sections()?;
        let network_frames = match self.network_parse {
            NetworkParse::Never => None,
            NetworkParse::Always | NetworkParse::IgnoreOnError => self.parse_network(&sections)?,
        };

        let body = sections.body;
        Ok(Replay {
            header: sections.header,
            content_size: sections.content_size,
            content_crc: sections.content_crc,
            network_frames,
            levels: body.levels,
            keyframes: body.keyframes,
            debug_info: body.debug_info,
            tick_marks: body.tick_marks,
            packages: body.packages,
            objects: body.objects,
            names: body.names,
            class_indices: body.class_indices,
            net_cache: body.net_cache,
            warnings: self.warnings,
        })
    }

    fn frames(mut self) -> Result<FrameDecoder<'a>, ParseError> {
        let sections = self.parse_sections()?;
        let ctx = NetworkContext::new(&sections.network_input())?;
        let mut decoder = FrameDecoder::new(sections.body.network_data, ctx);
        decoder.extend_warnings(self.warnings);
        Ok(decoder)
    }

    fn parse_network(&mut self, sections: &Sections<'a>) -> Result<Option<NetworkFrames>, ParseError> {
        let ctx = match NetworkContext::new(&sections.network_input()) {
            Ok(ctx) => ctx,
            Err(e @ NetworkError::InvalidClassHierarchy(_)) => return Err(e.into()),
            Err(e) if self.network_parse == NetworkParse::Always => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, "skipping network data");
                self.warnings.push(Warning::Network {
                    frame: None,
                    error: e,
                });
                return Ok(None);
            }
        };

        let mut decoder = FrameDecoder::new(sections.body.network_data, ctx);
        let mut frames = Vec::new();
        for frame in decoder.by_ref() {
            match frame {
                Ok(frame) => frames.push(frame),
                Err(e) if self.network_parse == NetworkParse::Always => return Err(e.into()),
                Err(_) => break,
            }
        }

        debug!(frames = frames.len(), "decoded network data");
        self.warnings.extend(decoder.into_warnings());
        Ok(Some(NetworkFrames { frames }))
    }

    fn parse_sections(&mut self) -> Result<Sections<'a>, ParseError> {
        let (header, version) = self.parse_header_section()?;

        let content_size = self.core.take_i32("content size")?;
        let content_crc = self.core.take_u32("content crc")?;
        let content_data = self
            .core
            .view_data(content_size as usize)
            .map_err(|e| ParseError::Section("content data", self.core.bytes_read(), Box::new(e)))?;

        self.verify_crc(content_data, content_crc, SectionKind::Body)?;
        let mut body_parser = self.core.scope(content_size as usize)?;
        let body = parse_body(&mut body_parser)
            .map_err(|e| self.explain_failure(content_data, content_crc, SectionKind::Body, e))?;

        debug!(
            objects = body.objects.len(),
            network_bytes = body.network_data.len(),
            "decoded replay body"
        );

        Ok(Sections {
            header,
            version,
            content_size,
            content_crc,
            body,
        })
    }

    /// Decodes the header section. A header that can't be decoded is reported as a warning and
    /// only its version is salvaged.
    fn parse_header_section(&mut self) -> Result<(Option<ReplayHeader>, VersionTriplet), ParseError> {
        let header_size = self.core.take_i32("header size")?;
        let header_crc = self.core.take_u32("header crc")?;
        let header_data = self
            .core
            .view_data(header_size as usize)
            .map_err(|e| ParseError::Section("header data", self.core.bytes_read(), Box::new(e)))?;

        let crc_status = self.verify_crc(header_data, header_crc, SectionKind::Header)?;
        let section = self.core.scope(header_size as usize)?;

        match header::parse_header(&mut section.clone()) {
            Ok(mut header) => {
                header.size = header_size;
                header.crc = header_crc;
                header.crc_status = crc_status;
                let version = header.version();
                debug!(%version, properties = header.properties.len(), "decoded replay header");
                Ok((Some(header), version))
            }
            Err(e) => {
                let e = self.explain_failure(header_data, header_crc, SectionKind::Header, e);
                warn!(error = %e, "unable to decode header");
                self.warnings.push(Warning::Header(e));
                let version =
                    header::parse_version(&mut section.clone()).unwrap_or(VersionTriplet(0, 0, 0));
                Ok((None, version))
            }
        }
    }

    /// Checks a section's crc ahead of decoding when configured to
    fn verify_crc(
        &mut self,
        data: &[u8],
        expected: u32,
        kind: SectionKind,
    ) -> Result<CrcStatus, ParseError> {
        match self.crc_check {
            CrcCheck::Never | CrcCheck::OnError => Ok(CrcStatus::Unchecked),
            CrcCheck::Always | CrcCheck::Lenient => {
                let actual = calc_crc(data);
                if actual == expected {
                    Ok(CrcStatus::Verified)
                } else if self.crc_check == CrcCheck::Always {
                    Err(kind.corrupt(expected, actual))
                } else {
                    warn!(section = kind.name(), expected, actual, "crc mismatch");
                    self.warnings.push(kind.warning(kind.corrupt(expected, actual)));
                    Ok(CrcStatus::Mismatch { expected, actual })
                }
            }
        }
    }

    /// When checking the crc on failure, determine if the failure is due to corruption
    fn explain_failure(
        &self,
        data: &[u8],
        expected: u32,
        kind: SectionKind,
        err: ParseError,
    ) -> ParseError {
        if self.crc_check == CrcCheck::OnError && calc_crc(data) != expected {
            ParseError::CorruptReplay(String::from(kind.name()), Box::new(err))
        } else {
            err
        }
    }
}

fn section<'a, T, F>(core: &mut CoreParser<'a>, name: &'static str, f: F) -> Result<T, ParseError>
where
    F: FnOnce(&mut CoreParser<'a>) -> Result<T, ParseError>,
{
    f(core).map_err(|e| ParseError::Section(name, core.bytes_read(), Box::new(e)))
}

fn parse_body<'a>(core: &mut CoreParser<'a>) -> Result<ReplayBody<'a>, ParseError> {
    let levels = section(core, "levels", CoreParser::text_list)?;
    let keyframes = section(core, "keyframes", parse_keyframes)?;
    let network_size = core.take_i32("network size")?;
    let network_data = section(core, "network data", |s| s.take_data(network_size as usize))?;
    let debug_info = section(core, "debug info", parse_debug_info)?;
    let tick_marks = section(core, "tickmarks", parse_tick_marks)?;
    let packages = section(core, "packages", CoreParser::text_list)?;
    let objects = section(core, "objects", CoreParser::text_list)?;
    let names = section(core, "names", CoreParser::text_list)?;
    let class_indices = section(core, "class index", parse_class_indices)?;
    let net_cache = section(core, "net cache", parse_class_cache)?;

    Ok(ReplayBody {
        levels,
        keyframes,
        debug_info,
        tick_marks,
        packages,
        objects,
        names,
        class_indices,
        net_cache,
        network_data,
    })
}

fn parse_tick_marks(core: &mut CoreParser<'_>) -> Result<Vec<TickMark>, ParseError> {
    core.list_of(|s| {
        Ok(TickMark {
            description: s.parse_text()?,
            frame: i32::from_le_bytes(s.take::<4>()?),
        })
    })
}

fn parse_keyframes(core: &mut CoreParser<'_>) -> Result<Vec<KeyFrame>, ParseError> {
    core.list_of(|s| {
        Ok(KeyFrame {
            time: f32::from_le_bytes(s.take::<4>()?),
            frame: i32::from_le_bytes(s.take::<4>()?),
            position: i32::from_le_bytes(s.take::<4>()?),
        })
    })
}

fn parse_debug_info(core: &mut CoreParser<'_>) -> Result<Vec<DebugInfo>, ParseError> {
    core.list_of(|s| {
        Ok(DebugInfo {
            frame: i32::from_le_bytes(s.take::<4>()?),
            user: s.parse_text()?,
            text: s.parse_text()?,
        })
    })
}

fn parse_class_indices(core: &mut CoreParser<'_>) -> Result<Vec<ClassIndex>, ParseError> {
    core.list_of(|s| {
        Ok(ClassIndex {
            class: String::from(s.parse_str()?),
            index: i32::from_le_bytes(s.take::<4>()?),
        })
    })
}

fn parse_class_cache(core: &mut CoreParser<'_>) -> Result<Vec<ClassNetCacheEntry>, ParseError> {
    core.list_of(|x| {
        Ok(ClassNetCacheEntry {
            object_ind: i32::from_le_bytes(x.take::<4>()?),
            parent_id: i32::from_le_bytes(x.take::<4>()?),
            cache_id: i32::from_le_bytes(x.take::<4>()?),
            properties: x.list_of(|s| {
                Ok(CacheProp {
                    object_ind: i32::from_le_bytes(s.take::<4>()?),
                    stream_id: i32::from_le_bytes(s.take::<4>()?),
                })
            })?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::write_header_block;
    use crate::models::{HeaderProp, TickMark};
    use crate::parsing_utils::{encode_str, encode_text};
    use std::error::Error;

    fn header() -> ReplayHeader {
        ReplayHeader {
            major_version: 868,
            minor_version: 29,
            net_version: Some(10),
            game_type: String::from("TAGame.Replay_Soccar_TA"),
            properties: vec![
                (String::from("TeamSize"), HeaderProp::Int(3)),
                (String::from("NumFrames"), HeaderProp::Int(0)),
            ],
            ..ReplayHeader::default()
        }
    }

    fn empty_list(out: &mut Vec<u8>) {
        out.extend_from_slice(&0i32.to_le_bytes());
    }

    fn body(ticks: &[(&str, i32)]) -> Vec<u8> {
        let mut out = Vec::new();
        empty_list(&mut out); // levels
        empty_list(&mut out); // keyframes
        empty_list(&mut out); // network data
        empty_list(&mut out); // debug info
        out.extend_from_slice(&(ticks.len() as i32).to_le_bytes());
        for (desc, frame) in ticks {
            encode_text(desc, &mut out);
            out.extend_from_slice(&frame.to_le_bytes());
        }
        empty_list(&mut out); // packages
        out.extend_from_slice(&1i32.to_le_bytes());
        encode_text("TAGame.Ball_TA", &mut out);
        empty_list(&mut out); // names
        out.extend_from_slice(&1i32.to_le_bytes());
        encode_str("TAGame.Ball_TA", &mut out);
        out.extend_from_slice(&0i32.to_le_bytes());
        empty_list(&mut out); // net cache
        out
    }

    fn replay(header_block: Vec<u8>, body: &[u8], body_crc: u32) -> Vec<u8> {
        let mut data = header_block;
        data.extend_from_slice(&(body.len() as i32).to_le_bytes());
        data.extend_from_slice(&body_crc.to_le_bytes());
        data.extend_from_slice(body);
        data
    }

    fn good_replay() -> Vec<u8> {
        let body = body(&[("Team1Goal", 396)]);
        let crc = calc_crc(&body);
        replay(write_header_block(&header()), &body, crc)
    }

    #[test]
    fn tickmark_list() {
        let mut data = Vec::new();
        data.extend_from_slice(&1i32.to_le_bytes());
        encode_text("Team1Goal", &mut data);
        data.extend_from_slice(&396i32.to_le_bytes());
        let ticks = parse_tick_marks(&mut CoreParser::new(&data)).unwrap();
        assert_eq!(
            ticks,
            vec![TickMark {
                description: String::from("Team1Goal"),
                frame: 396,
            }]
        );
    }

    #[test]
    fn key_frame_list() {
        let mut data = Vec::new();
        data.extend_from_slice(&2i32.to_le_bytes());
        for (time, frame, position) in [(0.0f32, 0i32, 0i32), (10.5, 300, 91234)] {
            data.extend_from_slice(&time.to_le_bytes());
            data.extend_from_slice(&frame.to_le_bytes());
            data.extend_from_slice(&position.to_le_bytes());
        }
        let frames = parse_keyframes(&mut CoreParser::new(&data)).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].frame, 300);
        assert_eq!(frames[1].position, 91234);
    }

    #[test]
    fn the_parsing_empty() {
        assert!(ParserBuilder::new(&[]).parse().is_err());
    }

    #[test]
    fn parse_synthetic_replay() {
        let data = good_replay();
        let replay = ParserBuilder::new(&data).parse().unwrap();
        let header = replay.header.as_ref().unwrap();
        assert_eq!(header.crc_status, CrcStatus::Verified);
        assert_eq!(header.property("TeamSize"), Some(&HeaderProp::Int(3)));
        assert_eq!(replay.tick_marks.len(), 1);
        assert_eq!(replay.objects, vec![String::from("TAGame.Ball_TA")]);
        assert_eq!(replay.class_indices[0].class, "TAGame.Ball_TA");
        assert_eq!(replay.network_frames, Some(NetworkFrames { frames: vec![] }));
        assert!(replay.warnings.is_empty());
    }

    #[test]
    fn crc_check_with_bad_body() {
        let body = body(&[]);
        let data = replay(write_header_block(&header()), &body, 0xdead_beef);
        let actual = calc_crc(&body);

        let err = ParserBuilder::new(&data).always_check_crc().parse().unwrap_err();
        assert_eq!(err, ParseError::CorruptBody(0xdead_beef, actual));

        let replay = ParserBuilder::new(&data).parse().unwrap();
        assert_eq!(
            replay.warnings,
            vec![Warning::Body(ParseError::CorruptBody(0xdead_beef, actual))]
        );

        assert!(ParserBuilder::new(&data).on_error_check_crc().parse().unwrap().warnings.is_empty());
        assert!(ParserBuilder::new(&data).never_check_crc().parse().is_ok());
    }

    #[test]
    fn lenient_header_mismatch_is_flagged() {
        let mut block = write_header_block(&header());
        block[4] ^= 0xff;
        let body = body(&[]);
        let crc = calc_crc(&body);
        let data = replay(block, &body, crc);

        let replay = ParserBuilder::new(&data).parse().unwrap();
        let header = replay.header.unwrap();
        assert!(matches!(header.crc_status, CrcStatus::Mismatch { .. }));
        assert!(matches!(
            replay.warnings.as_slice(),
            [Warning::Header(ParseError::CorruptHeader(_, _))]
        ));
    }

    #[test]
    fn broken_header_keeps_body() {
        let mut section = Vec::new();
        section.extend_from_slice(&868i32.to_le_bytes());
        section.extend_from_slice(&12i32.to_le_bytes());
        encode_text("TAGame.Replay_Soccar_TA", &mut section);
        encode_str("Weird", &mut section);
        encode_str("MapProperty", &mut section);
        section.extend_from_slice(&0u64.to_le_bytes());

        let mut block = Vec::new();
        block.extend_from_slice(&(section.len() as i32).to_le_bytes());
        block.extend_from_slice(&calc_crc(&section).to_le_bytes());
        block.extend_from_slice(&section);

        let body = body(&[]);
        let crc = calc_crc(&body);
        let data = replay(block, &body, crc);
        let replay = ParserBuilder::new(&data).parse().unwrap();
        assert!(replay.header.is_none());
        assert_eq!(replay.objects.len(), 1);
        match replay.warnings.as_slice() {
            [Warning::Header(e)] => {
                assert_eq!(
                    e.source().map(|x| x.to_string()),
                    Some(String::from("Did not expect a property of: MapProperty"))
                );
            }
            x => panic!("unexpected warnings: {:?}", x),
        }
    }

    #[test]
    fn zero_length_header() {
        let mut block = Vec::new();
        block.extend_from_slice(&0i32.to_le_bytes());
        block.extend_from_slice(&calc_crc(&[]).to_le_bytes());
        let body = body(&[]);
        let crc = calc_crc(&body);
        let data = replay(block, &body, crc);

        let replay = ParserBuilder::new(&data).parse().unwrap();
        let header = replay.header.unwrap();
        assert!(header.properties.is_empty());
        assert_eq!(header.crc_status, CrcStatus::Verified);
        assert!(replay.warnings.is_empty());
    }

    #[test]
    fn list_too_large() {
        let mut body = Vec::new();
        body.extend_from_slice(&30_000i32.to_le_bytes());
        let crc = calc_crc(&body);
        let data = replay(write_header_block(&header()), &body, crc);
        let err = ParserBuilder::new(&data).parse().unwrap_err();
        let offset = write_header_block(&header()).len() + 12;
        assert_eq!(
            err.to_string(),
            format!(
                "Could not decode replay levels at offset ({}): list of size 30000 is too large",
                offset
            )
        );
    }

    #[test]
    fn corrupt_replay_on_error() {
        let mut body = Vec::new();
        body.extend_from_slice(&30_000i32.to_le_bytes());
        let data = replay(write_header_block(&header()), &body, 7);
        let err = ParserBuilder::new(&data)
            .on_error_check_crc()
            .parse()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to parse body and crc check failed. Replay is corrupt"
        );
        assert!(err
            .source()
            .unwrap()
            .to_string()
            .starts_with("Could not decode replay levels"));
    }

    #[test]
    fn frames_of_empty_network() {
        let data = good_replay();
        let mut frames = ParserBuilder::new(&data).frames().unwrap();
        assert!(frames.next().is_none());
        assert!(frames.warnings().is_empty());
    }
}
