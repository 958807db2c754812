//! # rlreplay
//!
//! rlreplay decodes [Rocket League](https://www.rocketleague.com/) replays: the header
//! properties, the body tables, and the network frames that describe every actor in the match.
//! The frames can then be projected into match events (goals, demolitions, boost pickups) and
//! the header into a match summary. Everything decoded derives
//! [serde](https://github.com/serde-rs/serde)'s `Serialize`.
//!
//! ```no_run
//! use rlreplay::{EventProjector, MatchSummary, ParserBuilder, ProjectorOptions};
//! use std::io;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // the replay to decode is given on the command line
//! let path = std::env::args().nth(1).ok_or("usage: summary <file.replay>")?;
//! let buffer = std::fs::read(path)?;
//! let replay = ParserBuilder::new(&buffer)
//!     .on_error_check_crc()
//!     .parse()?;
//!
//! if let Some(header) = &replay.header {
//!     let summary = MatchSummary::from_header(header);
//!     println!("{} played for {:?}", summary.players.len(), summary.match_length());
//! }
//!
//! let projection = EventProjector::new(&replay.objects, ProjectorOptions::default())
//!     .project_replay(&replay);
//! serde_json::to_writer(&mut io::stdout(), &projection.events)?;
//! # Ok(())
//! # }
//! ```
//!
//! Problems that only affect part of a replay (a header that can't be decoded, an actor
//! referencing a class that doesn't exist) don't fail the parse. They are collected in
//! [`Replay::warnings`] alongside everything that could be decoded.
//!
//! Frames can also be decoded lazily with [`ParserBuilder::frames`], which stops decoding
//! whenever the iterator is dropped.

pub use self::bits::BitCursor;
pub use self::errors::*;
pub use self::events::*;
pub use self::header::{decode_header, write_header, write_header_block, CrcStatus, ReplayHeader};
pub use self::loadout::*;
pub use self::models::*;
pub use self::network::*;
pub use self::parser::*;
pub use self::platform::Platform;
pub use self::summary::*;

mod bits;
mod core_parser;
pub mod crc;
mod data;
mod errors;
mod events;
mod header;
mod loadout;
mod models;
mod network;
mod parser;
mod parsing_utils;
mod platform;
mod serde_utils;
mod summary;
