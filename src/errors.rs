use crate::network::{ActorId, ObjectId, StreamId};
use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::str;

#[derive(PartialEq, Debug, Clone)]
pub enum ParseError {
    ZeroSize,
    Utf8Error(str::Utf8Error),
    TextTooLarge(i32),
    OutOfBounds(i32, i32),
    UnknownPropertyType(String),
    CorruptHeader(u32, u32),
    CorruptBody(u32, u32),
    CorruptReplay(String, Box<ParseError>),
    ListTooLarge(usize),
    Section(&'static str, i32, Box<ParseError>),
    NetworkError(Box<NetworkError>),
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Utf8Error(e) => Some(e),
            ParseError::CorruptReplay(_, e) => Some(e),
            ParseError::Section(_, _, e) => Some(e),
            ParseError::NetworkError(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ZeroSize => write!(f, "A size of zero is not valid"),
            ParseError::Utf8Error(utf8_error) => {
                write!(f, "Unable decode data as utf8: {}", utf8_error)
            }
            ParseError::TextTooLarge(size) => write!(f, "Text of size {} is too large", size),
            ParseError::OutOfBounds(expected, left) => write!(
                f,
                "Insufficient data. Expected {} bytes, but only {} left",
                expected, left
            ),
            ParseError::UnknownPropertyType(kind) => {
                write!(f, "Did not expect a property of: {}", kind)
            }
            ParseError::CorruptHeader(expected, actual) => write!(
                f,
                "Header crc mismatch. Expected {} but received {}",
                expected, actual
            ),
            ParseError::CorruptBody(expected, actual) => write!(
                f,
                "Body crc mismatch. Expected {} but received {}",
                expected, actual
            ),
            ParseError::CorruptReplay(section, _) => write!(
                f,
                "Failed to parse {} and crc check failed. Replay is corrupt",
                section
            ),
            ParseError::ListTooLarge(size) => write!(f, "list of size {} is too large", size),
            ParseError::Section(section, offset, inner) => write!(
                f,
                "Could not decode replay {} at offset ({}): {}",
                section, offset, inner
            ),
            ParseError::NetworkError(e) => write!(f, "{}", e),
        }
    }
}

impl From<str::Utf8Error> for ParseError {
    fn from(error: str::Utf8Error) -> Self {
        ParseError::Utf8Error(error)
    }
}

impl From<NetworkError> for ParseError {
    fn from(error: NetworkError) -> Self {
        ParseError::NetworkError(Box::new(error))
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum AttributeError {
    NotEnoughDataFor(&'static str),
    UnrecognizedRemoteId(u8),
    TooBigString(i32),
    Unimplemented,
}

impl Error for AttributeError {}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeError::NotEnoughDataFor(message) => {
                write!(f, "Not enough data to decode attribute {}", message)
            }
            AttributeError::UnrecognizedRemoteId(id) => {
                write!(f, "Unrecognized remote id of {}", id)
            }
            AttributeError::TooBigString(size) => write!(f, "Unexpected size for string: {}", size),
            AttributeError::Unimplemented => {
                write!(f, "Does not have an attribute implementation")
            }
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum NetworkError {
    TruncatedStream(&'static str),
    TimeOutOfRange(f32),
    DeltaOutOfRange(f32),
    TooManyFrames(i32),
    ChannelsTooLarge(i32),
    MaxStreamIdTooLarge(i32, ObjectId),
    StreamTooLargeIndex(i32, i32),
    ObjectIdOutOfRange(ObjectId),
    InvalidClassHierarchy(ObjectId),
    InvalidClassId(ActorId, ObjectId),
    DuplicateActor(ActorId),
    UnknownActor(ActorId),
    MissingCache(ActorId, ObjectId, String),
    MissingAttribute(ActorId, ObjectId, String, StreamId),
    UnimplementedAttribute(ActorId, StreamId, String),
    AttributeError(ActorId, String, AttributeError),
    Unsynchronized(usize),
}

impl Error for NetworkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetworkError::AttributeError(_, _, e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::TruncatedStream(message) => {
                write!(f, "Not enough data to decode {}", message)
            }
            NetworkError::TimeOutOfRange(time) => write!(f, "Time is out of range: {}", time),
            NetworkError::DeltaOutOfRange(delta) => {
                write!(f, "Delta is out of range: {}", delta)
            }
            NetworkError::TooManyFrames(size) => write!(f, "Too many frames to decode: {}", size),
            NetworkError::ChannelsTooLarge(size) => {
                write!(f, "Number of channels exceeds maximum: {}", size)
            }
            NetworkError::MaxStreamIdTooLarge(max, obj) => write!(
                f,
                "Max stream id of {} for object id {} is too large",
                max, obj
            ),
            NetworkError::StreamTooLargeIndex(stream, obj) => write!(
                f,
                "Stream id {} references an out of range object index {}",
                stream, obj
            ),
            NetworkError::ObjectIdOutOfRange(obj) => {
                write!(f, "Object Id of {} exceeds range", obj)
            }
            NetworkError::InvalidClassHierarchy(obj) => write!(
                f,
                "Class hierarchy of object {} contains a cycle",
                obj
            ),
            NetworkError::InvalidClassId(actor, obj) => write!(
                f,
                "Actor {} spawned with object id {} that exceeds the object table",
                actor, obj
            ),
            NetworkError::DuplicateActor(actor) => {
                write!(f, "Actor {} spawned while already active", actor)
            }
            NetworkError::UnknownActor(actor) => {
                write!(f, "Actor {} is not active", actor)
            }
            NetworkError::MissingCache(actor, obj, name) => write!(
                f,
                "Unable to find cache for actor {} of object {} ({})",
                actor, obj, name
            ),
            NetworkError::MissingAttribute(actor, obj, name, stream) => write!(
                f,
                "Actor {} of object {} ({}) has no attribute with stream id {}",
                actor, obj, name, stream
            ),
            NetworkError::UnimplementedAttribute(actor, stream, name) => write!(
                f,
                "Actor {} updated attribute {} with stream id {} that has no decoder",
                actor, name, stream
            ),
            NetworkError::AttributeError(actor, name, e) => write!(
                f,
                "Actor {} failed to decode attribute {}: {}",
                actor, name, e
            ),
            NetworkError::Unsynchronized(frame) => write!(
                f,
                "No keyframe after frame {} to resynchronize the network stream",
                frame
            ),
        }
    }
}

/// A problem that did not prevent a result from being returned, but did make part of the
/// result incomplete or unreliable.
#[derive(PartialEq, Debug, Clone)]
pub enum Warning {
    /// The header failed to decode or its crc did not match
    Header(ParseError),

    /// The body crc did not match
    Body(ParseError),

    /// A contained error while decoding the network frames. The frame is absent when the
    /// network stage failed as a whole.
    Network {
        frame: Option<usize>,
        error: NetworkError,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Header(e) => write!(f, "header: {}", e),
            Warning::Body(e) => write!(f, "body: {}", e),
            Warning::Network {
                frame: Some(frame),
                error,
            } => write!(f, "network frame {}: {}", frame, error),
            Warning::Network { frame: None, error } => write!(f, "network: {}", error),
        }
    }
}

impl Serialize for Warning {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
