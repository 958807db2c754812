mod common;

use common::ReplayBuilder;
use rlreplay::{
    decode_header, write_header_block, ActorId, Event, EventProjector, HeaderProp, MatchSummary,
    ParserBuilder, Platform, ProjectorOptions, RemoteId,
};

const STEAM_ID: u64 = 76561198101748375;

/// Two teams and a named Steam player on team 0
fn lobby() -> ReplayBuilder {
    let mut b = ReplayBuilder::soccar();
    let mut f = b.frame(true);
    f.spawn(1, "Archetypes.Teams.Team0")
        .spawn(2, "Archetypes.Teams.Team1")
        .spawn(3, "TAGame.Default__PRI_TA");
    f.end();

    let mut f = b.frame(false);
    f.update(3);
    f.prop(1, 5).text("alpha");
    f.prop(2, 5).u8(1).u64(STEAM_ID).u8(0);
    f.prop(3, 5).bit(true).i32(1);
    f.done().end();
    b
}

fn project(data: &[u8]) -> rlreplay::Projection {
    let replay = ParserBuilder::new(data)
        .must_parse_network_data()
        .parse()
        .unwrap();
    assert!(replay.warnings.is_empty(), "{:?}", replay.warnings);
    EventProjector::new(&replay.objects, ProjectorOptions::default()).project_replay(&replay)
}

#[test]
fn test_goal_after_team_score() {
    let mut b = lobby();
    let mut f = b.frame(false);
    f.update(1).prop(1, 2).i32(1);
    f.done();
    f.update(3).prop(4, 5).i32(1);
    f.done().end();

    let projection = project(&b.build());
    assert_eq!(
        projection.events,
        vec![Event::Goal {
            frame: 2,
            team: Some(0),
            scorer: Some(ActorId(3)),
        }]
    );
}

#[test]
fn test_goal_before_team_score() {
    let mut b = lobby();
    let mut f = b.frame(false);
    f.update(3).prop(4, 5).i32(1);
    f.done().end();

    let mut f = b.frame(false);
    f.update(1).prop(1, 2).i32(1);
    f.done().end();

    let projection = project(&b.build());
    assert_eq!(
        projection.events,
        vec![Event::Goal {
            frame: 3,
            team: Some(0),
            scorer: Some(ActorId(3)),
        }]
    );
}

#[test]
fn test_goal_without_scorer() {
    let mut b = lobby();
    let mut f = b.frame(false);
    f.update(2).prop(1, 2).i32(1);
    f.done().end();

    let projection = project(&b.build());
    assert_eq!(
        projection.events,
        vec![Event::Goal {
            frame: 2,
            team: Some(1),
            scorer: None,
        }]
    );
}

#[test]
fn test_network_player() {
    let projection = project(&lobby().build());
    assert_eq!(projection.players.len(), 1);

    let player = &projection.players[0];
    assert_eq!(player.actor_id, ActorId(3));
    assert_eq!(player.name.as_deref(), Some("alpha"));
    assert_eq!(player.team, Some(0));
    assert_eq!(player.platform, Platform::Steam);
    assert_eq!(player.online_id, Some(STEAM_ID.to_string()));
    assert_eq!(
        player.unique_id.as_ref().map(|x| &x.remote_id),
        Some(&RemoteId::Steam(STEAM_ID))
    );

    let json = serde_json::to_value(&projection).unwrap();
    assert_eq!(json["players"][0]["name"], "alpha");
    assert_eq!(json["players"][0]["platform"], "Steam");
}

#[test]
fn test_platform_spellings() {
    assert_eq!(Platform::from_name("OnlinePlatform_Steam"), Platform::Steam);
    assert_eq!(Platform::from_code(1), Platform::Steam);
    assert_eq!(Platform::from_name("not a platform"), Platform::Unknown);
}

#[test]
fn test_summary_from_parsed_header() {
    let mut b = lobby();
    b.header.properties = vec![
        (
            String::from("Id"),
            HeaderProp::Str(String::from("50D5031342FF90D9F25BE5A0152E56B8")),
        ),
        (String::from("Team0Score"), HeaderProp::Int(1)),
        (String::from("RecordFPS"), HeaderProp::Float(30.0)),
        (String::from("NumFrames"), HeaderProp::Int(2)),
        (
            String::from("Goals"),
            HeaderProp::Array(vec![vec![
                (String::from("frame"), HeaderProp::Int(1_845)),
                (String::from("PlayerName"), HeaderProp::Str(String::from("alpha"))),
                (String::from("PlayerTeam"), HeaderProp::Int(0)),
            ]]),
        ),
    ];

    let data = b.build();
    let replay = ParserBuilder::new(&data).parse().unwrap();
    let header = replay.header.unwrap();
    let summary = MatchSummary::from_header(&header);
    assert_eq!(summary.team0_score, 1);
    assert_eq!(summary.num_frames, Some(2));
    assert_eq!(
        summary.uuid().as_deref(),
        Some("50d50313-42ff-90d9-f25b-e5a0152e56b8")
    );
    assert_eq!(summary.goals.len(), 1);
    assert_eq!(summary.goal_time(summary.goals[0].frame).as_deref(), Some("1:01"));

    // the parsed header encodes back into the bytes it was decoded from
    let block = write_header_block(&header);
    assert_eq!(&data[..block.len()], block.as_slice());

    let (decoded, rest) = decode_header(&data).unwrap();
    assert_eq!(decoded.properties, header.properties);
    assert_eq!(rest.len(), data.len() - block.len());
}
