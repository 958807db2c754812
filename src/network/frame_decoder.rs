use crate::bits::BitCursor;
use crate::errors::{NetworkError, Warning};
use crate::network::attributes::AttributeTag;
use crate::network::{
    ActorId, ActorStateTable, Frame, NetworkContext, NewActor, ObjectId, StreamId, Trajectory,
    UpdatedAttribute,
};
use tracing::{debug, warn};

/// Why a frame stopped early
enum Interrupt {
    /// The data ran out. Nothing after this point can be decoded.
    Truncated(NetworkError),

    /// The rest of the frame can't be located. Decoding resumes at the next keyframe.
    Abort(NetworkError),
}

impl From<NetworkError> for Interrupt {
    fn from(e: NetworkError) -> Self {
        Interrupt::Abort(e)
    }
}

fn truncated(msg: &'static str) -> Interrupt {
    Interrupt::Truncated(NetworkError::TruncatedStream(msg))
}

/// Lazily decodes the frames of the network stream.
///
/// Errors that only affect a single actor are recorded as warnings and decoding continues
/// (possibly from the next keyframe). Errors that make the rest of the stream unreadable are
/// yielded once, after which the iterator is exhausted.
pub struct FrameDecoder<'a> {
    bits: BitCursor<'a>,
    ctx: NetworkContext,
    actors: ActorStateTable,
    index: usize,
    warnings: Vec<Warning>,
    done: bool,
}

impl<'a> FrameDecoder<'a> {
    pub(crate) fn new(network_data: &'a [u8], ctx: NetworkContext) -> Self {
        FrameDecoder {
            bits: BitCursor::new(network_data),
            ctx,
            actors: ActorStateTable::new(),
            index: 0,
            warnings: Vec::new(),
            done: false,
        }
    }

    /// Contained errors seen so far
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consumes the decoder and returns the contained errors
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    pub(crate) fn extend_warnings(&mut self, warnings: Vec<Warning>) {
        self.warnings.extend(warnings);
    }

    /// Actors that are active as of the last decoded frame
    pub fn actors(&self) -> &ActorStateTable {
        &self.actors
    }

    fn warn(&mut self, frame: usize, error: NetworkError) {
        warn!(frame, %error, "contained network error");
        self.warnings.push(Warning::Network {
            frame: Some(frame),
            error,
        });
    }

    fn finish(&mut self) {
        self.done = true;
        if self.ctx.layout.frame_trailer {
            // Older builds of the newer format may omit it
            let _ = self.bits.read_u32();
        }

        debug!(frames = self.index, "finished network stream");
    }

    fn parse_new_actor(
        &mut self,
        frame: &mut Frame,
        actor_id: ActorId,
    ) -> Result<(), Interrupt> {
        let name_id = if self.ctx.layout.name_id {
            Some(
                self.bits
                    .read_i32()
                    .ok_or_else(|| truncated("New actor name id"))?,
            )
        } else {
            None
        };

        let _ = self.bits.read_bit().ok_or_else(|| truncated("New actor"))?;
        let object_id = self
            .bits
            .read_i32()
            .map(ObjectId)
            .ok_or_else(|| truncated("New actor object id"))?;

        let spawn = match usize::try_from(object_id.0)
            .ok()
            .and_then(|x| self.ctx.spawns.get(x))
        {
            Some(spawn) => *spawn,
            None => {
                self.warn(frame.index, NetworkError::InvalidClassId(actor_id, object_id));
                return Ok(());
            }
        };

        let initial_trajectory =
            Trajectory::from_spawn(&mut self.bits, spawn, self.ctx.layout.vector_max_bits)
                .ok_or_else(|| truncated("New actor trajectory"))?;

        let class_id = self.ctx.cache.class_of(object_id);
        if let Err(e) = self.actors.spawn(actor_id, object_id, class_id) {
            self.warn(frame.index, e);
            let _ = self.actors.despawn(actor_id);
            self.actors.spawn(actor_id, object_id, class_id)?;
        }

        frame.new_actors.push(NewActor {
            actor_id,
            name_id,
            object_id,
            initial_trajectory,
        });

        Ok(())
    }

    fn parse_updates(&mut self, frame: &mut Frame, actor_id: ActorId) -> Result<(), Interrupt> {
        let state = self
            .actors
            .get(actor_id)
            .ok_or(NetworkError::UnknownActor(actor_id))?;
        let object_id = state.object_id;

        let ctx = &self.ctx;
        let class = state
            .class_id
            .and_then(|x| ctx.cache.properties(x))
            .ok_or_else(|| {
                NetworkError::MissingCache(
                    actor_id,
                    object_id,
                    String::from(ctx.object_name(object_id)),
                )
            })?;

        let limit = class.stream_id_limit();
        while self
            .bits
            .read_bit()
            .ok_or_else(|| truncated("Property follows"))?
        {
            let stream_id = self
                .bits
                .read_bits_max(limit)
                .map(|x| StreamId(x as i32))
                .ok_or_else(|| truncated("Stream id"))?;

            let def = class.get(stream_id).ok_or_else(|| {
                NetworkError::MissingAttribute(
                    actor_id,
                    object_id,
                    String::from(ctx.object_name(object_id)),
                    stream_id,
                )
            })?;

            if def.tag == AttributeTag::NotImplemented {
                return Err(Interrupt::Abort(NetworkError::UnimplementedAttribute(
                    actor_id,
                    stream_id,
                    def.name.clone(),
                )));
            }

            let attribute = ctx
                .attributes
                .decode(def.tag, &mut self.bits)
                .map_err(|e| NetworkError::AttributeError(actor_id, def.name.clone(), e))?;

            self.actors
                .apply_delta(actor_id, def.object_id, attribute.clone())?;

            frame.updated_actors.push(UpdatedAttribute {
                actor_id,
                stream_id,
                object_id: def.object_id,
                attribute,
            });
        }

        Ok(())
    }

    fn decode_frame(&mut self, frame: &mut Frame) -> Result<(), Interrupt> {
        while self
            .bits
            .read_bit()
            .ok_or_else(|| truncated("Actor follows"))?
        {
            let actor_id = self
                .bits
                .read_bits(self.ctx.channel_bits)
                .map(|x| ActorId(x as i32))
                .ok_or_else(|| truncated("Actor id"))?;

            let alive = self
                .bits
                .read_bit()
                .ok_or_else(|| truncated("Actor alive"))?;

            if alive {
                let new = self.bits.read_bit().ok_or_else(|| truncated("New actor"))?;
                if new {
                    self.parse_new_actor(frame, actor_id)?;
                } else {
                    self.parse_updates(frame, actor_id)?;
                }
            } else {
                frame.deleted_actors.push(actor_id);
                if let Err(e) = self.actors.despawn(actor_id) {
                    self.warn(frame.index, e);
                }
            }
        }

        Ok(())
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, NetworkError> {
        if self.index >= self.ctx.frames_len || self.bits.is_empty() {
            self.finish();
            return Ok(None);
        }

        let time = self
            .bits
            .read_f32()
            .ok_or(NetworkError::TruncatedStream("Time"))?;

        if time < 0.0 || (time > 0.0 && time < 1e-10) {
            return Err(NetworkError::TimeOutOfRange(time));
        }

        let delta = self
            .bits
            .read_f32()
            .ok_or(NetworkError::TruncatedStream("Delta"))?;

        if delta < 0.0 || (delta > 0.0 && delta < 1e-10) {
            return Err(NetworkError::DeltaOutOfRange(delta));
        }

        if time == 0.0 && delta == 0.0 {
            self.finish();
            return Ok(None);
        }

        let mut frame = Frame {
            index: self.index,
            time,
            delta,
            keyframe: self.ctx.is_keyframe(self.index),
            new_actors: Vec::new(),
            deleted_actors: Vec::new(),
            updated_actors: Vec::new(),
        };

        match self.decode_frame(&mut frame) {
            Ok(()) => {
                self.index += 1;
            }
            Err(Interrupt::Truncated(e)) => return Err(e),
            Err(Interrupt::Abort(e)) => {
                self.warn(frame.index, e);
                self.realign(frame.index);
            }
        }

        Ok(Some(frame))
    }

    /// Skips ahead to the first keyframe after the given frame
    fn realign(&mut self, frame: usize) {
        let target = self
            .ctx
            .next_keyframe(frame)
            .and_then(|(next, pos)| {
                let pos = usize::try_from(pos).ok()?;
                self.bits.seek_bits(pos).map(|_| next)
            });

        match target {
            Some(next) => {
                debug!(from = frame, to = next, "realigned network stream on keyframe");
                self.index = next;
            }
            None => {
                self.warn(frame, NetworkError::Unsynchronized(frame));
                self.done = true;
            }
        }
    }
}

impl Iterator for FrameDecoder<'_> {
    type Item = Result<Frame, NetworkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => None,
            Err(e) => {
                self.warn(self.index, e.clone());
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
