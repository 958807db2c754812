pub use self::actor_state::{ActorState, ActorStateTable};
pub use self::attributes::*;
pub use self::class_cache::{ClassNetCache, ClassProperties, PropertyDef};
pub use self::frame_decoder::FrameDecoder;
pub use self::models::*;

mod actor_state;
pub mod attributes;
mod class_cache;
mod frame_decoder;
mod models;
pub(crate) mod object_index;

use crate::data::{OBJECT_CLASSES, SPAWN_STATS};
use crate::errors::NetworkError;
use crate::models::{ClassIndex, ClassNetCacheEntry, KeyFrame};
use crate::network::object_index::ObjectIndex;
use serde::Serialize;
use std::fmt;

/// The default number of channels when the header does not declare `MaxChannels`
const DEFAULT_CHANNELS: i32 = 1023;

/// Upper bound on channels so that the actor arena stays small on malformed input
const MAX_CHANNELS: i32 = 1 << 16;

/// The engine, licensee, and net version of a replay. Network data layouts are keyed off of
/// these three numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VersionTriplet(pub i32, pub i32, pub i32);

impl VersionTriplet {
    pub fn net_version(&self) -> i32 {
        self.2
    }
}

impl fmt::Display for VersionTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }
}

/// Every version dependent decision of the network stream in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamLayout {
    /// Upper bound on the size bits of a compressed vector
    pub vector_max_bits: u32,

    /// Rigid body rotations are 18-bit compressed quaternions instead of a fixed vector
    pub quaternion_rotation: bool,

    /// New actors send a name id before their object id
    pub name_id: bool,

    /// Width of the game mode attribute
    pub game_mode_bits: u32,

    /// Camera settings carry a transition speed
    pub cam_transition: bool,

    /// Reservations carry an additional unknown bit pattern
    pub reservation_extra: bool,

    /// Number of opaque bytes trailing a PlayStation unique id
    pub ps4_unknown_bytes: usize,

    /// PsyNet unique ids carry 24 opaque bytes
    pub psynet_unknown_bytes: bool,

    /// User colors are sent as a full u32 instead of a 7 bit value
    pub product_color_u32: bool,

    /// Painted products use 31 bits instead of a variable width value
    pub product_paint_u31: bool,

    /// A u32 trails the last frame
    pub frame_trailer: bool,
}

impl StreamLayout {
    pub fn new(version: VersionTriplet) -> Self {
        let net = version.net_version();
        StreamLayout {
            vector_max_bits: if net >= 7 { 22 } else { 20 },
            quaternion_rotation: net >= 7,
            name_id: version >= VersionTriplet(868, 14, 0),
            game_mode_bits: if version >= VersionTriplet(868, 12, 0) { 8 } else { 2 },
            cam_transition: version >= VersionTriplet(868, 20, 0),
            reservation_extra: version >= VersionTriplet(868, 12, 0),
            ps4_unknown_bytes: if net >= 1 { 16 } else { 8 },
            psynet_unknown_bytes: net < 10,
            product_color_u32: version >= VersionTriplet(868, 23, 8),
            product_paint_u31: version >= VersionTriplet(868, 18, 0),
            frame_trailer: version >= VersionTriplet(868, 24, 10),
        }
    }
}

/// The body sections and header values that drive the network stream
pub(crate) struct NetworkInput<'a> {
    pub version: VersionTriplet,
    pub max_channels: Option<i32>,
    pub num_frames: Option<i32>,
    pub network_data: &'a [u8],
    pub objects: &'a [String],
    pub class_indices: &'a [ClassIndex],
    pub net_cache: &'a [ClassNetCacheEntry],
    pub keyframes: &'a [KeyFrame],
}

/// Everything a `FrameDecoder` needs besides the bits themselves. Built once per replay and
/// owned by the decoder.
pub(crate) struct NetworkContext {
    pub objects: Vec<String>,
    pub spawns: Vec<SpawnTrajectory>,
    pub cache: ClassNetCache,
    pub layout: StreamLayout,
    pub attributes: AttributeDecoder,

    /// (frame, bit position) sorted by frame
    pub keyframes: Vec<(usize, u64)>,

    /// Actor ids are a fixed width: the channel count rounded up to a power of two
    pub channel_bits: u32,
    pub frames_len: usize,
}

impl NetworkContext {
    pub fn new(input: &NetworkInput<'_>) -> Result<Self, NetworkError> {
        let frames_len = match input.num_frames {
            Some(frames) if frames < 0 || frames as usize > input.network_data.len() => {
                return Err(NetworkError::TooManyFrames(frames));
            }
            Some(frames) => frames as usize,

            // Every frame is at least 64 bits so this is a generous bound
            None => input.network_data.len(),
        };

        let channels = input
            .max_channels
            .filter(|&x| x > 0)
            .unwrap_or(DEFAULT_CHANNELS);
        if channels > MAX_CHANNELS {
            return Err(NetworkError::ChannelsTooLarge(channels));
        }
        let channel_bits = (channels as u32).next_power_of_two().trailing_zeros();

        let index = ObjectIndex::new(input.objects);
        let cache = ClassNetCache::resolve(input.objects, input.class_indices, input.net_cache)?;
        let layout = StreamLayout::new(input.version);
        let attributes = AttributeDecoder::new(layout, ProductValueDecoder::create(layout, &index));

        // Create a parallel vector where we lookup how to decode an object's initial trajectory
        // when they spawn as a new actor
        let spawns = input
            .objects
            .iter()
            .map(|name| spawn_trajectory(name))
            .collect();

        let mut keyframes: Vec<(usize, u64)> = input
            .keyframes
            .iter()
            .filter(|kf| kf.frame >= 0 && kf.position >= 0)
            .map(|kf| (kf.frame as usize, kf.position as u64))
            .collect();
        keyframes.sort_unstable();
        keyframes.dedup_by_key(|(frame, _)| *frame);

        Ok(NetworkContext {
            objects: input.objects.to_vec(),
            spawns,
            cache,
            layout,
            attributes,
            keyframes,
            channel_bits,
            frames_len,
        })
    }

    pub fn object_name(&self, id: ObjectId) -> &str {
        self.objects
            .get(usize::from(id))
            .map(|x| x.as_str())
            .unwrap_or("")
    }

    pub fn is_keyframe(&self, frame: usize) -> bool {
        self.keyframes
            .binary_search_by_key(&frame, |(f, _)| *f)
            .is_ok()
    }

    /// The first keyframe strictly after the given frame
    pub fn next_keyframe(&self, frame: usize) -> Option<(usize, u64)> {
        let ind = self.keyframes.partition_point(|(f, _)| *f <= frame);
        self.keyframes.get(ind).copied()
    }
}

fn spawn_trajectory(name: &str) -> SpawnTrajectory {
    let normalized = normalize_object(name);
    let class = OBJECT_CLASSES.get(normalized).copied().unwrap_or(normalized);
    SPAWN_STATS
        .get(class)
        .copied()
        .unwrap_or(SpawnTrajectory::None)
}
