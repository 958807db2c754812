use crate::bits::BitCursor;
use crate::network::attributes::Attribute;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    pub fn decode(bits: &mut BitCursor<'_>, max_size_bits: u32) -> Option<Vector3f> {
        Vector3i::decode(bits, max_size_bits).map(|vec| Vector3f {
            x: (vec.x as f32) / 100.0,
            y: (vec.y as f32) / 100.0,
            z: (vec.z as f32) / 100.0,
        })
    }
}

/// An object's current vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vector3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3i {
    /// The three components share one header: the number of bits each component takes and the
    /// bias that is subtracted from them.
    pub fn decode(bits: &mut BitCursor<'_>, max_size_bits: u32) -> Option<Vector3i> {
        let size_bits = bits.read_bits_max_computed(4, max_size_bits)?;
        let bias = 1 << (size_bits + 1);
        let bit_limit = size_bits + 2;
        if !bits.has_bits_remaining(3 * bit_limit as usize) {
            return None;
        }

        let dx = bits.read_bits(bit_limit)?;
        let dy = bits.read_bits(bit_limit)?;
        let dz = bits.read_bits(bit_limit)?;
        Some(Vector3i {
            x: (dx as i32) - bias,
            y: (dy as i32) - bias,
            z: (dz as i32) - bias,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    #[inline]
    fn compressed_f32(bits: &mut BitCursor<'_>) -> Option<f32> {
        let res = bits.read_bits(16)? as i32;
        Some(((res + i32::from(i16::MIN)) as f32) * (i16::MAX as f32).recip())
    }

    /// Older replays send three 16 bit components of a rotation vector
    pub fn decode_compressed(bits: &mut BitCursor<'_>) -> Option<Self> {
        if !bits.has_bits_remaining(3 * 16) {
            return None;
        }

        let x = Quaternion::compressed_f32(bits)?;
        let y = Quaternion::compressed_f32(bits)?;
        let z = Quaternion::compressed_f32(bits)?;
        Some(Quaternion { x, y, z, w: 0.0 })
    }

    /// Smallest three encoding: two bits for the index of the largest component, then the
    /// other three components at 18 bits apiece.
    pub fn decode(bits: &mut BitCursor<'_>) -> Option<Self> {
        if !bits.has_bits_remaining(2 + 3 * 18) {
            return None;
        }

        let max_quat = std::f32::consts::FRAC_1_SQRT_2;
        let largest = bits.read_bits(2)?;
        let a = bits.read_compressed_float(18, -max_quat, max_quat)?;
        let b = bits.read_compressed_float(18, -max_quat, max_quat)?;
        let c = bits.read_compressed_float(18, -max_quat, max_quat)?;
        let extra = (1.0 - (a * a) - (b * b) - (c * c)).max(0.0).sqrt();
        let res = match largest {
            0 => Quaternion {
                x: extra,
                y: a,
                z: b,
                w: c,
            },
            1 => Quaternion {
                x: a,
                y: extra,
                z: b,
                w: c,
            },
            2 => Quaternion {
                x: a,
                y: b,
                z: extra,
                w: c,
            },
            _ => Quaternion {
                x: a,
                y: b,
                z: c,
                w: extra,
            },
        };
        Some(res)
    }
}

/// An object's current rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rotation {
    pub yaw: Option<i8>,
    pub pitch: Option<i8>,
    pub roll: Option<i8>,
}

impl Rotation {
    pub fn decode(bits: &mut BitCursor<'_>) -> Option<Rotation> {
        let yaw = bits.if_get(BitCursor::read_i8)?;
        let pitch = bits.if_get(BitCursor::read_i8)?;
        let roll = bits.if_get(BitCursor::read_i8)?;
        Some(Rotation { yaw, pitch, roll })
    }
}

/// When a new actor spawns it will either have a location, location and rotation, or none of
/// the above
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnTrajectory {
    None,
    Location,
    LocationAndRotation,
}

/// Notifies that an actor has had one of their properties updated (most likely their rigid body
/// state (location / rotation) has changed)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatedAttribute {
    /// The actor that had an attribute updated
    pub actor_id: ActorId,

    /// The attribute stream id that was decoded
    pub stream_id: StreamId,

    /// The attribute's object id
    pub object_id: ObjectId,

    /// The actual data from the decoded attribute
    pub attribute: Attribute,
}

/// Contains the time and any new information that occurred during a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Zero based position of the frame in the network stream
    pub index: usize,

    /// The time in seconds that the frame is recorded at
    pub time: f32,

    /// Time difference between previous frame
    pub delta: f32,

    /// Whether the body's keyframe table lists this frame
    pub keyframe: bool,

    /// List of new actors seen during the frame
    pub new_actors: Vec<NewActor>,

    /// List of actor id's that are deleted / destroyed
    pub deleted_actors: Vec<ActorId>,

    /// List of properties updated on the actors
    pub updated_actors: Vec<UpdatedAttribute>,
}

/// A replay encodes a list of objects that appear in the network data. The index of an object in
/// this list is used as a key in many places: reconstructing the attribute hierarchy and new
/// actors in the network data.
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash, Serialize)]
pub struct ObjectId(pub i32);

impl From<ObjectId> for i32 {
    fn from(x: ObjectId) -> i32 {
        x.0
    }
}

impl From<ObjectId> for usize {
    fn from(x: ObjectId) -> usize {
        x.0 as usize
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `StreamId` is an attribute's object id in the network data. It is a more compressed form of
/// the object id. Whereas the an object id might need to take up 9 bits, a stream id may only take
/// up 6 bits.
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash, Serialize)]
pub struct StreamId(pub i32);

impl From<StreamId> for i32 {
    fn from(x: StreamId) -> i32 {
        x.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An actor in the network data stream. Could identify a ball, car, etc. Ids are not unique
/// across a replay (eg. an actor that is destroyed may have its id repurposed).
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash, Serialize)]
pub struct ActorId(pub i32);

impl From<ActorId> for i32 {
    fn from(x: ActorId) -> i32 {
        x.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Information for a new actor that appears in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewActor {
    /// The id given to the new actor
    pub actor_id: ActorId,

    /// An name id
    pub name_id: Option<i32>,

    /// The actor's object id.
    pub object_id: ObjectId,

    /// The initial trajectory of the new actor
    pub initial_trajectory: Trajectory,
}

/// Contains the optional location and rotation of an object when it spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trajectory {
    pub location: Option<Vector3i>,
    pub rotation: Option<Rotation>,
}

impl Trajectory {
    pub fn from_spawn(
        bits: &mut BitCursor<'_>,
        sp: SpawnTrajectory,
        max_size_bits: u32,
    ) -> Option<Trajectory> {
        match sp {
            SpawnTrajectory::None => Some(Trajectory {
                location: None,
                rotation: None,
            }),

            SpawnTrajectory::Location => {
                Vector3i::decode(bits, max_size_bits).map(|v| Trajectory {
                    location: Some(v),
                    rotation: None,
                })
            }

            SpawnTrajectory::LocationAndRotation => {
                let v = Vector3i::decode(bits, max_size_bits)?;
                let r = Rotation::decode(bits)?;
                Some(Trajectory {
                    location: Some(v),
                    rotation: Some(r),
                })
            }
        }
    }
}

/// Oftentimes a replay contains many different objects of the same type. For instance, each
/// boost pad is of the same type but has a different name. The name of:
/// `stadium_foggy_p.TheWorld:PersistentLevel.VehiclePickup_Boost_TA_30` should be normalized to
/// `TheWorld:PersistentLevel.VehiclePickup_Boost_TA` so that we don't have to work around each
/// stadium and pickup that is released.
pub(crate) fn normalize_object(name: &str) -> &str {
    if name.contains("TheWorld:PersistentLevel.CrowdActor_TA") {
        "TheWorld:PersistentLevel.CrowdActor_TA"
    } else if name.contains("TheWorld:PersistentLevel.CrowdManager_TA") {
        "TheWorld:PersistentLevel.CrowdManager_TA"
    } else if name.contains("TheWorld:PersistentLevel.VehiclePickup_Boost_TA") {
        "TheWorld:PersistentLevel.VehiclePickup_Boost_TA"
    } else if name.contains("TheWorld:PersistentLevel.InMapScoreboard_TA") {
        "TheWorld:PersistentLevel.InMapScoreboard_TA"
    } else if name.contains("TheWorld:PersistentLevel.BreakOutActor_Platform_TA") {
        "TheWorld:PersistentLevel.BreakOutActor_Platform_TA"
    } else {
        name
    }
}
