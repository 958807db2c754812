//! # Models
//!
//! Here lies the data structures that a replay is decoded into outside of the network frames.
//!
//! For serde, we only care about serialization. Deserialization is not implemented from the
//! JSON output because it is lossy (JSON isn't the best with different numeric/string types).
use crate::errors::Warning;
use crate::header::ReplayHeader;
use crate::network::Frame;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// The structure that a replay is parsed into.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct Replay {
    /// The decoded header. Absent when the header section could not be decoded, which does not
    /// prevent the body and network data from being decoded.
    pub header: Option<ReplayHeader>,
    pub content_size: i32,
    pub content_crc: u32,
    pub network_frames: Option<NetworkFrames>,
    pub levels: Vec<String>,
    pub keyframes: Vec<KeyFrame>,
    pub debug_info: Vec<DebugInfo>,
    pub tick_marks: Vec<TickMark>,
    pub packages: Vec<String>,
    pub objects: Vec<String>,
    pub names: Vec<String>,
    pub class_indices: Vec<ClassIndex>,
    pub net_cache: Vec<ClassNetCacheEntry>,

    /// Problems that were contained instead of failing the parse
    pub warnings: Vec<Warning>,
}

impl Replay {
    /// Header property lookup that tolerates a missing header
    pub fn property(&self, key: &str) -> Option<&HeaderProp> {
        self.header.as_ref().and_then(|x| x.property(key))
    }
}

/// The frames decoded from the network data
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct NetworkFrames {
    pub frames: Vec<Frame>,
}

/// Tick marks typically represent a significant event in the game (eg. a goal). The tick mark
/// is placed before the event happens so there is a ramp-up time.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct TickMark {
    pub description: String,
    pub frame: i32,
}

/// A keyframe marks a frame and the bit position in the network data where that frame
/// starts. The network decoder realigns on them after data it could not decode.
#[derive(Serialize, PartialEq, Debug, Clone, Copy)]
pub struct KeyFrame {
    pub time: f32,
    pub frame: i32,
    pub position: i32,
}

/// Header values: numbers, strings, or nested lists of additional properties.
#[derive(PartialEq, Debug, Clone)]
pub enum HeaderProp {
    Array(Vec<Vec<(String, HeaderProp)>>),
    Bool(bool),
    Byte { kind: String, value: Option<String> },
    Float(f32),
    Int(i32),
    Name(String),
    QWord(u64),
    Str(String),
    Struct {
        name: String,
        fields: Vec<(String, HeaderProp)>,
    },
}

impl HeaderProp {
    /// If the `HeaderProp` is an array of properties, returns the array
    /// ```
    /// # use rlreplay::HeaderProp;
    /// let v = HeaderProp::Array(vec![
    ///     vec![("abc".to_string(), HeaderProp::Int(1))]
    /// ]);
    ///
    /// assert_eq!(v.as_array().unwrap().len(), 1);
    /// assert_eq!(v.as_array().unwrap()[0][0].1.as_array(), None);
    /// ```
    pub fn as_array(&self) -> Option<&Vec<Vec<(String, HeaderProp)>>> {
        if let HeaderProp::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }

    /// If the `HeaderProp` is a boolean, returns the value
    /// ```
    /// # use rlreplay::HeaderProp;
    /// let v = HeaderProp::Bool(true);
    /// let b = HeaderProp::Int(1);
    ///
    /// assert_eq!(v.as_bool(), Some(true));
    /// assert_eq!(b.as_bool(), None);
    /// ```
    pub fn as_bool(&self) -> Option<bool> {
        if let HeaderProp::Bool(val) = self {
            Some(*val)
        } else {
            None
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        if let HeaderProp::Float(val) = self {
            Some(*val)
        } else {
            None
        }
    }

    /// If the `HeaderProp` is a QWord, returns the value
    /// ```
    /// # use rlreplay::HeaderProp;
    /// let v = HeaderProp::QWord(250);
    /// let b = HeaderProp::Int(250);
    ///
    /// assert_eq!(v.as_u64(), Some(250));
    /// assert_eq!(b.as_u64(), None);
    /// ```
    pub fn as_u64(&self) -> Option<u64> {
        if let HeaderProp::QWord(val) = self {
            Some(*val)
        } else {
            None
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        if let HeaderProp::Int(val) = self {
            Some(*val)
        } else {
            None
        }
    }

    /// If the `HeaderProp` is an string, returns the value
    /// ```
    /// # use rlreplay::HeaderProp;
    /// let v = HeaderProp::Name("abc".to_string());
    /// let x = HeaderProp::Str("def".to_string());
    /// let b = HeaderProp::Int(3);
    ///
    /// assert_eq!(v.as_string(), Some("abc"));
    /// assert_eq!(x.as_string(), Some("def"));
    /// assert_eq!(b.as_string(), None);
    /// ```
    pub fn as_string(&self) -> Option<&str> {
        match self {
            HeaderProp::Name(val) => Some(val.as_str()),
            HeaderProp::Str(val) => Some(val.as_str()),
            _ => None,
        }
    }

    /// Returns the enum type and enum value of a byte property
    pub fn as_byte(&self) -> Option<(&str, Option<&str>)> {
        if let HeaderProp::Byte { kind, value } = self {
            Some((kind.as_str(), value.as_deref()))
        } else {
            None
        }
    }

    pub fn as_struct(&self) -> Option<(&str, &[(String, HeaderProp)])> {
        if let HeaderProp::Struct { name, fields } = self {
            Some((name.as_str(), fields.as_slice()))
        } else {
            None
        }
    }
}

/// Finds the first property with the given key
pub(crate) fn find_prop<'a>(props: &'a [(String, HeaderProp)], key: &str) -> Option<&'a HeaderProp> {
    props.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Debugging info stored in the replay if debugging is enabled.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct DebugInfo {
    pub frame: i32,
    pub user: String,
    pub text: String,
}

/// A mapping between an object's name and its index. Largely redundant
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct ClassIndex {
    /// Should be equivalent to `Replay::objects(self.index)`
    pub class: String,

    /// The index that the object appears in the `Replay::objects`
    pub index: i32,
}

/// A mapping between an object (that's an attribute)'s index and what its id will be when encoded
/// in the network data
#[derive(Serialize, PartialEq, Debug, Clone, Copy)]
pub struct CacheProp {
    /// The index that the object appears in the `Replay::objects`
    pub object_ind: i32,

    /// An attribute / property id that appears in the network data. Stream ids are often re-used
    /// between multiple different properties
    pub stream_id: i32,
}

/// Raw class net cache entry as it is stored in the body. See
/// [`ClassNetCache`](crate::network::ClassNetCache) for the resolved form.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct ClassNetCacheEntry {
    /// The index that the object appears in the `Replay::objects`
    pub object_ind: i32,

    /// The cache id of the parent. The child class inherits all the parent's properties.
    pub parent_id: i32,

    /// The cache id of the object
    pub cache_id: i32,

    /// List of properties that is on the object.
    pub properties: Vec<CacheProp>,
}

/// Serialize a vector of key value tuples into a map. The replay format doesn't rule out
/// duplicate keys, so they are stored as a sequence. JSON doesn't need the keys to be unique
/// either: <http://stackoverflow.com/q/21832701/433785>
pub(crate) fn pair_vec<K, V, S>(inp: &[(K, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    K: Serialize,
    V: Serialize,
    S: Serializer,
{
    let mut state = serializer.serialize_map(Some(inp.len()))?;
    for (key, val) in inp.iter() {
        state.serialize_key(key)?;
        state.serialize_value(val)?;
    }
    state.end()
}

struct PairVec<'a>(&'a [(String, HeaderProp)]);

impl Serialize for PairVec<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        pair_vec(self.0, serializer)
    }
}

/// Header values are self describing in JSON, so the enum tag is not serialized. This is
/// slightly lossy as it will be ambiguous if a value is a `Name` or `Str`, as well as `Float`,
/// `Int`, or `QWord`.
impl Serialize for HeaderProp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            HeaderProp::Array(x) => {
                let mut state = serializer.serialize_seq(Some(x.len()))?;
                for inner in x {
                    state.serialize_element(&PairVec(inner))?;
                }
                state.end()
            }
            HeaderProp::Bool(x) => serializer.serialize_bool(*x),
            HeaderProp::Byte { kind, value } => {
                let mut state = serializer.serialize_map(Some(2))?;
                state.serialize_entry("kind", kind)?;
                state.serialize_entry("value", value)?;
                state.end()
            }
            HeaderProp::Float(x) => serializer.serialize_f32(*x),
            HeaderProp::Int(x) => serializer.serialize_i32(*x),
            HeaderProp::QWord(x) => serializer.collect_str(x),
            HeaderProp::Name(x) | HeaderProp::Str(x) => serializer.serialize_str(x),
            HeaderProp::Struct { fields, .. } => pair_vec(fields, serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json<T: serde::Serialize>(input: &T) -> std::string::String {
        serde_json::to_string(input).unwrap()
    }

    #[test]
    fn serialize_header_array() {
        let data = vec![
            vec![
                (String::from("frame"), HeaderProp::Int(441)),
                (
                    String::from("PlayerName"),
                    HeaderProp::Str(String::from("rust is awesome")),
                ),
            ],
            vec![
                (String::from("frame"), HeaderProp::Int(1738)),
                (
                    String::from("PlayerName"),
                    HeaderProp::Str(String::from("rusty")),
                ),
            ],
        ];
        let actual = to_json(&HeaderProp::Array(data));
        assert_eq!(
            actual,
            r#"[{"frame":441,"PlayerName":"rust is awesome"},{"frame":1738,"PlayerName":"rusty"}]"#
        );
    }

    #[test]
    fn serialize_header_bool() {
        assert_eq!(to_json(&HeaderProp::Bool(false)), "false");
        assert_eq!(to_json(&HeaderProp::Bool(true)), "true");
    }

    #[test]
    fn serialize_header_numbers() {
        assert_eq!(to_json(&HeaderProp::QWord(10)), "\"10\"");
        assert_eq!(to_json(&HeaderProp::Float(10.2)), "10.2");
        assert_eq!(to_json(&HeaderProp::Int(11)), "11");
    }

    #[test]
    fn serialize_header_byte() {
        let byte = HeaderProp::Byte {
            kind: String::from("OnlinePlatform"),
            value: Some(String::from("OnlinePlatform_Steam")),
        };
        assert_eq!(
            to_json(&byte),
            r#"{"kind":"OnlinePlatform","value":"OnlinePlatform_Steam"}"#
        );
        assert_eq!(
            byte.as_byte(),
            Some(("OnlinePlatform", Some("OnlinePlatform_Steam")))
        );
    }

    #[test]
    fn serialize_header_struct() {
        let data = HeaderProp::Struct {
            name: String::from("UniqueNetId"),
            fields: vec![(String::from("Uid"), HeaderProp::QWord(76561198101748375))],
        };
        assert_eq!(to_json(&data), r#"{"Uid":"76561198101748375"}"#);
    }

    #[test]
    fn serialize_header_str() {
        let val = "hello world";
        assert_eq!(
            to_json(&HeaderProp::Str(String::from(val))),
            "\"hello world\""
        );
        assert_eq!(
            to_json(&HeaderProp::Name(String::from(val))),
            "\"hello world\""
        );
    }
}
