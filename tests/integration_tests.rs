mod common;

use common::ReplayBuilder;
use rlreplay::crc::calc_crc;
use rlreplay::{
    ActorId, Attribute, EventProjector, HeaderProp, NetworkError, ObjectId, ParseError,
    ParserBuilder, ProjectorOptions, Warning,
};

/// Team 0 spawned on the first frame
fn with_team() -> ReplayBuilder {
    let mut b = ReplayBuilder::soccar();
    b.frame(true).spawn(1, "Archetypes.Teams.Team0").end();
    b
}

#[test]
fn test_synthetic_replay() {
    let mut b = with_team();
    let mut f = b.frame(false);
    f.update(1).prop(1, 2).i32(1);
    f.done().end();

    let data = b.build();
    let replay = ParserBuilder::new(&data)
        .always_check_crc()
        .must_parse_network_data()
        .parse()
        .unwrap();

    assert!(replay.warnings.is_empty());
    assert_eq!(replay.levels, vec![String::from("stadium_p")]);

    let frames = replay.network_frames.unwrap().frames;
    assert_eq!(frames.len(), 2);
    assert!(frames[0].keyframe);
    assert_eq!(frames[0].new_actors[0].actor_id, ActorId(1));
    assert_eq!(frames[0].new_actors[0].object_id, ObjectId(1));
    assert_eq!(frames[1].updated_actors[0].attribute, Attribute::Int(1));
    assert_eq!(frames[1].updated_actors[0].object_id, ObjectId(3));
}

#[test]
fn test_actor_ids_use_full_channel_width() {
    // the low nine bits of both ids are all set
    let mut b = ReplayBuilder::soccar();
    let mut f = b.frame(true);
    f.spawn(511, "Archetypes.Teams.Team0")
        .spawn(1023, "Archetypes.Teams.Team1");
    f.end();

    let mut f = b.frame(false);
    f.update(511).prop(1, 2).i32(2);
    f.done();
    f.update(1023).prop(1, 2).i32(3);
    f.done().end();

    let mut f = b.frame(false);
    f.delete(511).update(1023).prop(1, 2).i32(4);
    f.done().end();

    let data = b.build();
    let replay = ParserBuilder::new(&data)
        .must_parse_network_data()
        .parse()
        .unwrap();
    assert!(replay.warnings.is_empty(), "{:?}", replay.warnings);

    let frames = replay.network_frames.unwrap().frames;
    assert_eq!(frames.len(), 3);
    let spawned: Vec<_> = frames[0].new_actors.iter().map(|x| x.actor_id).collect();
    assert_eq!(spawned, vec![ActorId(511), ActorId(1023)]);

    let updates: Vec<_> = frames[1]
        .updated_actors
        .iter()
        .map(|x| (x.actor_id, x.attribute.clone()))
        .collect();
    assert_eq!(
        updates,
        vec![
            (ActorId(511), Attribute::Int(2)),
            (ActorId(1023), Attribute::Int(3)),
        ]
    );

    assert_eq!(frames[2].deleted_actors, vec![ActorId(511)]);
    assert_eq!(frames[2].updated_actors[0].actor_id, ActorId(1023));
    assert_eq!(frames[2].updated_actors[0].attribute, Attribute::Int(4));
}

#[test]
fn test_unknown_actor_recovers_at_keyframe() {
    let mut b = with_team();

    // actor 42 was never spawned, so nothing after it in the frame can be located
    let mut f = b.frame(false);
    f.update(42).prop(1, 2).i32(7);
    f.done().end();

    let mut f = b.frame(true);
    f.update(1).prop(1, 2).i32(1);
    f.done().end();

    let data = b.build();
    let replay = ParserBuilder::new(&data)
        .must_parse_network_data()
        .parse()
        .unwrap();

    assert_eq!(
        replay.warnings,
        vec![Warning::Network {
            frame: Some(1),
            error: NetworkError::UnknownActor(ActorId(42)),
        }]
    );

    let frames = replay.network_frames.unwrap().frames;
    assert_eq!(frames.len(), 3);
    assert!(frames[1].updated_actors.is_empty());
    assert_eq!(frames[2].index, 2);
    assert!(frames[2].keyframe);
    assert_eq!(frames[2].updated_actors[0].actor_id, ActorId(1));
    assert_eq!(frames[2].updated_actors[0].attribute, Attribute::Int(1));
}

#[test]
fn test_unknown_actor_without_keyframe() {
    let mut b = with_team();
    let mut f = b.frame(false);
    f.update(42).prop(1, 2).i32(7);
    f.done().end();
    b.frame(false).end();

    let data = b.build();
    let replay = ParserBuilder::new(&data).parse().unwrap();
    assert_eq!(replay.network_frames.unwrap().frames.len(), 2);
    assert_eq!(
        replay.warnings,
        vec![
            Warning::Network {
                frame: Some(1),
                error: NetworkError::UnknownActor(ActorId(42)),
            },
            Warning::Network {
                frame: Some(1),
                error: NetworkError::Unsynchronized(1),
            },
        ]
    );
}

#[test]
fn test_invalid_class_id_only_affects_actor() {
    let mut b = ReplayBuilder::soccar();
    let mut f = b.frame(true);
    f.spawn_raw(1, 99).spawn(2, "Archetypes.Teams.Team1");
    f.end();

    let mut f = b.frame(false);
    f.update(2).prop(1, 2).i32(3);
    f.done().end();

    let data = b.build();
    let replay = ParserBuilder::new(&data).parse().unwrap();
    assert_eq!(
        replay.warnings,
        vec![Warning::Network {
            frame: Some(0),
            error: NetworkError::InvalidClassId(ActorId(1), ObjectId(99)),
        }]
    );

    let frames = replay.network_frames.unwrap().frames;
    assert_eq!(frames[0].new_actors.len(), 1);
    assert_eq!(frames[0].new_actors[0].actor_id, ActorId(2));
    assert_eq!(frames[1].updated_actors[0].attribute, Attribute::Int(3));
}

#[test]
fn test_duplicate_spawn_replaces_actor() {
    let mut b = with_team();
    b.frame(false).spawn(1, "Archetypes.Teams.Team1").end();

    let data = b.build();
    let replay = ParserBuilder::new(&data).parse().unwrap();
    assert_eq!(
        replay.warnings,
        vec![Warning::Network {
            frame: Some(1),
            error: NetworkError::DuplicateActor(ActorId(1)),
        }]
    );

    let frames = replay.network_frames.unwrap().frames;
    assert_eq!(frames[1].new_actors[0].object_id, ObjectId(2));
}

#[test]
fn test_respawn_does_not_leak_properties() {
    let mut b = with_team();
    let mut f = b.frame(false);
    f.update(1).prop(1, 2).i32(2);
    f.done().end();
    b.frame(false)
        .delete(1)
        .spawn(1, "Archetypes.Teams.Team1")
        .end();

    let data = b.build();
    let mut frames = ParserBuilder::new(&data).frames().unwrap();
    for frame in frames.by_ref().take(2) {
        frame.unwrap();
    }
    assert_eq!(frames.actors().get(ActorId(1)).unwrap().properties.len(), 1);

    let frame = frames.next().unwrap().unwrap();
    assert_eq!(frame.deleted_actors, vec![ActorId(1)]);

    let actor = frames.actors().get(ActorId(1)).unwrap();
    assert_eq!(actor.object_id, ObjectId(2));
    assert!(actor.properties.is_empty());
    assert!(frames.next().is_none());
    assert!(frames.warnings().is_empty());
}

#[test]
fn test_truncated_stream_keeps_earlier_frames() {
    let mut b = with_team();
    let mut f = b.frame(false);
    f.update(1).prop(1, 2).i32(1);
    f.done().end();

    // claim a frame that the network data doesn't have
    b.header
        .properties
        .push((String::from("NumFrames"), HeaderProp::Int(3)));

    let data = b.build();
    let replay = ParserBuilder::new(&data).parse().unwrap();
    assert_eq!(replay.network_frames.unwrap().frames.len(), 2);
    assert_eq!(
        replay.warnings,
        vec![Warning::Network {
            frame: Some(2),
            error: NetworkError::TruncatedStream("Delta"),
        }]
    );

    let err = ParserBuilder::new(&data)
        .must_parse_network_data()
        .parse()
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::NetworkError(Box::new(NetworkError::TruncatedStream("Delta")))
    );

    let frames: Vec<_> = ParserBuilder::new(&data).frames().unwrap().collect();
    assert_eq!(frames.len(), 3);
    assert!(frames[2].is_err());
}

#[test]
fn test_too_many_frames_skips_network() {
    let mut b = with_team();
    b.header
        .properties
        .push((String::from("NumFrames"), HeaderProp::Int(1_000_000)));

    let data = b.build();
    let replay = ParserBuilder::new(&data).parse().unwrap();
    assert!(replay.network_frames.is_none());
    assert_eq!(
        replay.warnings,
        vec![Warning::Network {
            frame: None,
            error: NetworkError::TooManyFrames(1_000_000),
        }]
    );

    assert!(ParserBuilder::new(&data)
        .must_parse_network_data()
        .parse()
        .is_err());

    let replay = ParserBuilder::new(&data)
        .never_parse_network_data()
        .parse()
        .unwrap();
    assert!(replay.warnings.is_empty());
}

#[test]
fn test_zero_length_header() {
    let mut b = ReplayBuilder::soccar();

    // no header means no frame count, so the stream is closed explicitly
    b.network.f32(0.0).f32(0.0);

    let mut block = Vec::new();
    block.extend_from_slice(&0i32.to_le_bytes());
    block.extend_from_slice(&calc_crc(&[]).to_le_bytes());

    let data = b.build_with_header(block);
    let replay = ParserBuilder::new(&data)
        .always_check_crc()
        .parse()
        .unwrap();

    let header = replay.header.unwrap();
    assert!(header.properties.is_empty());
    assert_eq!(header.size, 0);
    assert!(replay.warnings.is_empty());
    assert_eq!(replay.network_frames.unwrap().frames.len(), 0);
}

#[test]
fn test_decoding_is_repeatable() {
    let mut b = with_team();
    let mut f = b.frame(false);
    f.spawn(3, "TAGame.Default__PRI_TA");
    f.update(3).prop(1, 5).text("alpha");
    f.done();
    f.update(1).prop(1, 2).i32(1);
    f.done().end();

    let data = b.build();
    let first = ParserBuilder::new(&data).parse().unwrap();
    let second = ParserBuilder::new(&data).parse().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let lazy: Vec<_> = ParserBuilder::new(&data)
        .frames()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(first.network_frames.as_ref().unwrap().frames, lazy);

    let projector = EventProjector::new(&first.objects, ProjectorOptions::default());
    assert_eq!(
        projector.project_replay(&first),
        projector.project_replay(&second)
    );
}
