#![allow(dead_code)]

use rlreplay::crc::calc_crc;
use rlreplay::{write_header_block, HeaderProp, ReplayHeader};

/// Writes bits least significant first, the order the network stream is read in
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    data: Vec<u8>,
    pos: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn bit(&mut self, value: bool) -> &mut Self {
        if self.pos % 8 == 0 {
            self.data.push(0);
        }

        if value {
            self.data[self.pos / 8] |= 1 << (self.pos % 8);
        }
        self.pos += 1;
        self
    }

    pub fn bits(&mut self, value: u64, count: u32) -> &mut Self {
        for i in 0..count {
            self.bit((value >> i) & 1 == 1);
        }
        self
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.bits(u64::from(value), 8)
    }

    pub fn i32(&mut self, value: i32) -> &mut Self {
        self.bits(u64::from(value as u32), 32)
    }

    pub fn u64(&mut self, value: u64) -> &mut Self {
        self.bits(value, 64)
    }

    pub fn f32(&mut self, value: f32) -> &mut Self {
        self.bits(u64::from(value.to_bits()), 32)
    }

    /// Counterpart of reading an integer bounded by `max`
    pub fn bits_max(&mut self, value: u32, max: u32) -> &mut Self {
        assert!(value < max.max(1));
        let width = 32 - max.leading_zeros();
        let bits = width.max(1) - 1;
        let low = value & ((1u32 << bits) - 1);
        self.bits(u64::from(low), bits);
        if u64::from(low) + (1u64 << bits) < u64::from(max) {
            self.bit((value >> bits) & 1 == 1);
        }
        self
    }

    /// A compressed vector with components small enough to share the narrowest size
    pub fn vector(&mut self, x: i32, y: i32, z: i32) -> &mut Self {
        let largest = x.abs().max(y.abs()).max(z.abs());
        let mut size_bits = 0u32;
        while largest >= 1 << (size_bits + 1) {
            size_bits += 1;
        }

        let bias = 1i32 << (size_bits + 1);
        self.bits_max(size_bits, 22);
        for component in [x, y, z] {
            self.bits((component + bias) as u64, size_bits + 2);
        }
        self
    }

    /// Length prefixed windows-1252 text
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.i32(text.len() as i32 + 1);
        for b in text.bytes() {
            self.u8(b);
        }
        self.u8(0)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// A class in the net cache along with the properties (and their stream ids) it replicates
pub struct ClassDef {
    pub class: &'static str,
    pub properties: Vec<(&'static str, i32)>,
}

/// Assembles a replay from a header, a set of objects and classes, and frames written with a
/// `BitWriter` through `FrameWriter`
pub struct ReplayBuilder {
    pub header: ReplayHeader,
    pub objects: Vec<String>,
    pub classes: Vec<ClassDef>,
    pub keyframes: Vec<(i32, i32)>,
    pub network: BitWriter,
    pub frames: i32,
}

impl ReplayBuilder {
    pub fn new() -> Self {
        ReplayBuilder {
            header: ReplayHeader {
                major_version: 868,
                minor_version: 29,
                net_version: Some(10),
                game_type: String::from("TAGame.Replay_Soccar_TA"),
                ..ReplayHeader::default()
            },
            objects: Vec::new(),
            classes: Vec::new(),
            keyframes: Vec::new(),
            network: BitWriter::new(),
            frames: 0,
        }
    }

    /// A lobby of two teams and the player replication info class
    pub fn soccar() -> Self {
        let mut builder = ReplayBuilder::new();
        builder.objects = [
            "TAGame.Team_Soccar_TA",
            "Archetypes.Teams.Team0",
            "Archetypes.Teams.Team1",
            "Engine.TeamInfo:Score",
            "TAGame.PRI_TA",
            "TAGame.Default__PRI_TA",
            "Engine.PlayerReplicationInfo:PlayerName",
            "Engine.PlayerReplicationInfo:UniqueId",
            "Engine.PlayerReplicationInfo:Team",
            "TAGame.PRI_TA:MatchGoals",
        ]
        .iter()
        .map(|x| String::from(*x))
        .collect();

        builder.classes = vec![
            ClassDef {
                class: "TAGame.Team_Soccar_TA",
                properties: vec![("Engine.TeamInfo:Score", 1)],
            },
            ClassDef {
                class: "TAGame.PRI_TA",
                properties: vec![
                    ("Engine.PlayerReplicationInfo:PlayerName", 1),
                    ("Engine.PlayerReplicationInfo:UniqueId", 2),
                    ("Engine.PlayerReplicationInfo:Team", 3),
                    ("TAGame.PRI_TA:MatchGoals", 4),
                ],
            },
        ];
        builder
    }

    pub fn object(&self, name: &str) -> i32 {
        self.objects
            .iter()
            .position(|x| x == name)
            .unwrap_or_else(|| panic!("unknown object {}", name)) as i32
    }

    /// Starts a frame. The frame is recorded as a keyframe when requested.
    pub fn frame(&mut self, keyframe: bool) -> FrameWriter<'_> {
        if keyframe {
            let position = self.network.position() as i32;
            self.keyframes.push((self.frames, position));
        }

        let time = (self.frames + 1) as f32 * 0.03;
        self.network.f32(time).f32(0.03);
        self.frames += 1;
        FrameWriter { builder: self }
    }

    fn header_block(&self) -> Vec<u8> {
        let mut header = self.header.clone();
        if header.property("NumFrames").is_none() {
            header
                .properties
                .push((String::from("NumFrames"), HeaderProp::Int(self.frames)));
        }
        write_header_block(&header)
    }

    pub fn body(&self) -> Vec<u8> {
        let network = {
            let mut network = self.network.clone();
            network.i32(0);
            network.into_bytes()
        };

        let mut out = Vec::new();
        list(&mut out, &["stadium_p"], |out, x| text(out, x));
        list(&mut out, &self.keyframes, |out, (frame, position)| {
            out.extend_from_slice(&((*frame as f32) * 0.03).to_le_bytes());
            out.extend_from_slice(&frame.to_le_bytes());
            out.extend_from_slice(&position.to_le_bytes());
        });
        out.extend_from_slice(&(network.len() as i32).to_le_bytes());
        out.extend_from_slice(&network);
        list(&mut out, &[] as &[i32], |_, _| {}); // debug info
        list(&mut out, &[] as &[i32], |_, _| {}); // tick marks
        list(&mut out, &["TAGame"], |out, x| text(out, x));
        list(&mut out, &self.objects, |out, x| text(out, x));
        list(&mut out, &[] as &[i32], |_, _| {}); // names

        let classes: Vec<(&str, i32)> = self
            .classes
            .iter()
            .map(|x| (x.class, self.object(x.class)))
            .collect();
        list(&mut out, &classes, |out, (class, index)| {
            text(out, class);
            out.extend_from_slice(&index.to_le_bytes());
        });

        let cache: Vec<(i32, i32, Vec<(i32, i32)>)> = self
            .classes
            .iter()
            .enumerate()
            .map(|(i, x)| {
                let props = x
                    .properties
                    .iter()
                    .map(|(name, stream)| (self.object(name), *stream))
                    .collect();
                (self.object(x.class), i as i32 + 1, props)
            })
            .collect();
        list(&mut out, &cache, |out, (object, cache_id, props)| {
            out.extend_from_slice(&object.to_le_bytes());
            out.extend_from_slice(&0i32.to_le_bytes());
            out.extend_from_slice(&cache_id.to_le_bytes());
            list(out, props, |out, (object, stream)| {
                out.extend_from_slice(&object.to_le_bytes());
                out.extend_from_slice(&stream.to_le_bytes());
            });
        });

        out
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_with_header(self.header_block())
    }

    /// Assembles the replay behind an already encoded header block
    pub fn build_with_header(&self, header_block: Vec<u8>) -> Vec<u8> {
        let body = self.body();
        let mut out = header_block;
        out.extend_from_slice(&(body.len() as i32).to_le_bytes());
        out.extend_from_slice(&calc_crc(&body).to_le_bytes());
        out.extend_from_slice(&body);
        out
    }
}

/// Writes the actor updates of a single frame
pub struct FrameWriter<'a> {
    builder: &'a mut ReplayBuilder,
}

impl FrameWriter<'_> {
    fn actor(&mut self, actor: u32) -> &mut BitWriter {
        let network = &mut self.builder.network;
        network.bit(true).bits(u64::from(actor), 10);
        network
    }

    /// Spawns an actor with an origin location
    pub fn spawn(&mut self, actor: u32, object: &str) -> &mut Self {
        let object = self.builder.object(object);
        self.spawn_raw(actor, object);
        self.builder.network.vector(0, 0, 0);
        self
    }

    /// Writes a spawn with no trajectory, as is done for objects the decoder doesn't know
    pub fn spawn_raw(&mut self, actor: u32, object: i32) -> &mut Self {
        self.actor(actor)
            .bit(true)
            .bit(true)
            .i32(0)
            .bit(false)
            .i32(object);
        self
    }

    /// Starts the property updates of an actor, each written with `prop` and closed by `done`
    pub fn update(&mut self, actor: u32) -> &mut Self {
        self.actor(actor).bit(true).bit(false);
        self
    }

    /// Writes the stream id of a property and hands back the writer for its payload
    pub fn prop(&mut self, stream: u32, stream_ids: u32) -> &mut BitWriter {
        let network = &mut self.builder.network;
        network.bit(true).bits_max(stream, stream_ids);
        network
    }

    pub fn done(&mut self) -> &mut Self {
        self.builder.network.bit(false);
        self
    }

    pub fn delete(&mut self, actor: u32) -> &mut Self {
        self.actor(actor).bit(false);
        self
    }

    pub fn end(&mut self) {
        self.builder.network.bit(false);
    }
}

fn text(out: &mut Vec<u8>, text: &str) {
    out.extend_from_slice(&(text.len() as i32 + 1).to_le_bytes());
    out.extend_from_slice(text.as_bytes());
    out.push(0);
}

fn list<T, F>(out: &mut Vec<u8>, items: &[T], mut f: F)
where
    F: FnMut(&mut Vec<u8>, &T),
{
    out.extend_from_slice(&(items.len() as i32).to_le_bytes());
    for item in items {
        f(out, item);
    }
}
