//! # Match summary
//!
//! The header of a replay already describes the match at a high level (who played, the final
//! score, when goals happened) without decoding any network data. `MatchSummary` collects
//! those properties into plain values.
use crate::header::ReplayHeader;
use crate::models::{find_prop, HeaderProp};
use crate::platform::Platform;
use serde::Serialize;

const DEFAULT_MAX_CHANNELS: i32 = 1023;
const DEFAULT_MAX_REPLAY_SIZE_MB: i32 = 10;
const DEFAULT_RECORD_FPS: f32 = 30.0;

/// A player as recorded in the header's stats table
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct PlayerRecord {
    pub name: String,
    pub team: i32,
    pub score: i32,
    pub goals: i32,
    pub assists: i32,
    pub saves: i32,
    pub shots: i32,
    pub platform: Platform,
    pub online_id: Option<String>,
    pub bot: bool,
}

/// A goal as recorded in the header
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct HeaderGoal {
    pub frame: i32,
    pub player_name: Option<String>,
    pub player_team: Option<i32>,
}

#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct MatchSummary {
    pub replay_id: Option<String>,
    pub player_name: Option<String>,
    pub player_team: Option<i32>,
    pub team0_score: i32,
    pub team1_score: i32,
    pub map: Option<String>,
    pub match_type: Option<String>,
    pub team_size: Option<i32>,
    pub timestamp: Option<String>,
    pub num_frames: Option<i32>,
    pub record_fps: f32,
    pub keyframe_delay: Option<f32>,
    pub max_channels: i32,
    pub max_replay_size_mb: i32,
    pub players: Vec<PlayerRecord>,
    pub goals: Vec<HeaderGoal>,
}

impl MatchSummary {
    pub fn from_header(header: &ReplayHeader) -> MatchSummary {
        let string = |key: &str| {
            header
                .property(key)
                .and_then(HeaderProp::as_string)
                .map(String::from)
        };
        let int = |key: &str| header.property(key).and_then(HeaderProp::as_i32);

        let players = header
            .property("PlayerStats")
            .and_then(HeaderProp::as_array)
            .map(|rows| rows.iter().map(|x| player_record(x)).collect())
            .unwrap_or_default();

        let goals = header
            .property("Goals")
            .and_then(HeaderProp::as_array)
            .map(|rows| rows.iter().filter_map(|x| header_goal(x)).collect())
            .unwrap_or_default();

        MatchSummary {
            replay_id: string("Id"),
            player_name: string("PlayerName"),
            player_team: int("PrimaryPlayerTeam"),
            team0_score: int("Team0Score").unwrap_or(0),
            team1_score: int("Team1Score").unwrap_or(0),
            map: string("MapName"),
            match_type: string("MatchType"),
            team_size: int("TeamSize"),
            timestamp: string("Date"),
            num_frames: header.num_frames(),
            record_fps: header.record_fps().unwrap_or(DEFAULT_RECORD_FPS),
            keyframe_delay: header
                .property("KeyframeDelay")
                .and_then(HeaderProp::as_float),
            max_channels: header.max_channels().unwrap_or(DEFAULT_MAX_CHANNELS),
            max_replay_size_mb: int("MaxReplaySizeMB").unwrap_or(DEFAULT_MAX_REPLAY_SIZE_MB),
            players,
            goals,
        }
    }

    /// The replay id in canonical uuid form.
    ///
    /// ```
    /// # use rlreplay::MatchSummary;
    /// # use rlreplay::ReplayHeader;
    /// let mut summary = MatchSummary::from_header(&ReplayHeader::default());
    /// summary.replay_id = Some(String::from("9DA6F0F44F52D0F8F8D7D3B8C6E6A5A1"));
    /// assert_eq!(
    ///     summary.uuid().as_deref(),
    ///     Some("9da6f0f4-4f52-d0f8-f8d7-d3b8c6e6a5a1")
    /// );
    /// ```
    pub fn uuid(&self) -> Option<String> {
        self.replay_id.as_deref().map(format_uuid)
    }

    /// Length of the match formatted as `m:ss`
    pub fn match_length(&self) -> Option<String> {
        self.num_frames
            .and_then(|frames| format_frame_time(frames, self.record_fps))
    }

    /// Time into the match of the given frame formatted as `m:ss`
    pub fn goal_time(&self, frame: i32) -> Option<String> {
        format_frame_time(frame, self.record_fps)
    }
}

fn player_record(props: &[(String, HeaderProp)]) -> PlayerRecord {
    let int = |key: &str| find_prop(props, key).and_then(HeaderProp::as_i32).unwrap_or(0);
    let online_id = find_prop(props, "OnlineID").and_then(|x| match x {
        HeaderProp::QWord(id) => Some(id.to_string()),
        HeaderProp::Int(id) => Some(id.to_string()),
        _ => x.as_string().map(String::from),
    });

    PlayerRecord {
        name: find_prop(props, "Name")
            .and_then(HeaderProp::as_string)
            .map(String::from)
            .unwrap_or_default(),
        team: int("Team"),
        score: int("Score"),
        goals: int("Goals"),
        assists: int("Assists"),
        saves: int("Saves"),
        shots: int("Shots"),
        platform: find_prop(props, "Platform")
            .map(Platform::from_header)
            .unwrap_or_default(),
        online_id,
        bot: find_prop(props, "bBot")
            .and_then(HeaderProp::as_bool)
            .unwrap_or(false),
    }
}

fn header_goal(props: &[(String, HeaderProp)]) -> Option<HeaderGoal> {
    Some(HeaderGoal {
        frame: find_prop(props, "frame").and_then(HeaderProp::as_i32)?,
        player_name: find_prop(props, "PlayerName")
            .and_then(HeaderProp::as_string)
            .map(String::from),
        player_team: find_prop(props, "PlayerTeam").and_then(HeaderProp::as_i32),
    })
}

/// Splits a 32 digit hex id into the 8-4-4-4-12 uuid groups. Other ids are only lower cased.
fn format_uuid(id: &str) -> String {
    let is_hex = id.len() == 32
        && id
            .bytes()
            .all(|x| x.is_ascii_digit() || (b'A'..=b'F').contains(&x));

    if !is_hex {
        return id.to_lowercase();
    }

    let lower = id.to_ascii_lowercase();
    format!(
        "{}-{}-{}-{}-{}",
        &lower[..8],
        &lower[8..12],
        &lower[12..16],
        &lower[16..20],
        &lower[20..]
    )
}

fn format_frame_time(frame: i32, fps: f32) -> Option<String> {
    if frame <= 0 || !(fps.is_finite() && fps > 0.0) {
        return None;
    }

    let seconds = (frame as f32 / fps) as i64;
    Some(format!("{}:{:02}", seconds / 60, seconds % 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> ReplayHeader {
        let player = |name: &str, team: i32, goals: i32| {
            vec![
                (String::from("Name"), HeaderProp::Str(String::from(name))),
                (
                    String::from("Platform"),
                    HeaderProp::Byte {
                        kind: String::from("OnlinePlatform"),
                        value: Some(String::from("OnlinePlatform_Steam")),
                    },
                ),
                (String::from("OnlineID"), HeaderProp::QWord(76561198101748375)),
                (String::from("Team"), HeaderProp::Int(team)),
                (String::from("Score"), HeaderProp::Int(100 * goals)),
                (String::from("Goals"), HeaderProp::Int(goals)),
                (String::from("Assists"), HeaderProp::Int(0)),
                (String::from("Saves"), HeaderProp::Int(1)),
                (String::from("Shots"), HeaderProp::Int(goals + 1)),
                (String::from("bBot"), HeaderProp::Bool(false)),
            ]
        };

        ReplayHeader {
            properties: vec![
                (
                    String::from("Id"),
                    HeaderProp::Str(String::from("50D5031342FF90D9F25BE5A0152E56B8")),
                ),
                (String::from("Team0Score"), HeaderProp::Int(2)),
                (String::from("MapName"), HeaderProp::Name(String::from("stadium_p"))),
                (String::from("NumFrames"), HeaderProp::Int(9_000)),
                (String::from("RecordFPS"), HeaderProp::Float(30.0)),
                (
                    String::from("PlayerStats"),
                    HeaderProp::Array(vec![player("alpha", 0, 2), player("beta", 1, 0)]),
                ),
                (
                    String::from("Goals"),
                    HeaderProp::Array(vec![
                        vec![
                            (String::from("frame"), HeaderProp::Int(1_845)),
                            (String::from("PlayerName"), HeaderProp::Str(String::from("alpha"))),
                            (String::from("PlayerTeam"), HeaderProp::Int(0)),
                        ],
                        vec![(String::from("PlayerName"), HeaderProp::Str(String::from("x")))],
                    ]),
                ),
            ],
            ..ReplayHeader::default()
        }
    }

    #[test]
    fn summary_from_header() {
        let summary = MatchSummary::from_header(&header());
        assert_eq!(summary.team0_score, 2);
        assert_eq!(summary.team1_score, 0);
        assert_eq!(summary.map.as_deref(), Some("stadium_p"));
        assert_eq!(summary.max_channels, 1023);
        assert_eq!(summary.max_replay_size_mb, 10);
        assert_eq!(
            summary.uuid().as_deref(),
            Some("50d50313-42ff-90d9-f25b-e5a0152e56b8")
        );

        assert_eq!(summary.players.len(), 2);
        let alpha = &summary.players[0];
        assert_eq!(alpha.name, "alpha");
        assert_eq!(alpha.platform, Platform::Steam);
        assert_eq!(alpha.online_id.as_deref(), Some("76561198101748375"));
        assert_eq!(alpha.goals, 2);
        assert_eq!(alpha.shots, 3);
        assert!(!alpha.bot);

        // the goal without a frame is dropped
        assert_eq!(
            summary.goals,
            vec![HeaderGoal {
                frame: 1_845,
                player_name: Some(String::from("alpha")),
                player_team: Some(0),
            }]
        );
    }

    #[test]
    fn frame_times() {
        let summary = MatchSummary::from_header(&header());
        assert_eq!(summary.match_length().as_deref(), Some("5:00"));
        assert_eq!(summary.goal_time(1_845).as_deref(), Some("1:01"));
        assert_eq!(summary.goal_time(0), None);

        let mut broken = summary.clone();
        broken.record_fps = f32::NAN;
        assert_eq!(broken.goal_time(1_845), None);
        broken.record_fps = f32::INFINITY;
        assert_eq!(broken.match_length(), None);

        let empty = MatchSummary::from_header(&ReplayHeader::default());
        assert_eq!(empty.match_length(), None);
        assert_eq!(empty.record_fps, 30.0);
        assert!(empty.players.is_empty());
    }

    #[test]
    fn unusual_ids_are_lowercased() {
        assert_eq!(format_uuid("ABC"), "abc");
        assert_eq!(
            format_uuid("9da6f0f44f52d0f8f8d7d3b8c6e6a5a1"),
            "9da6f0f44f52d0f8f8d7d3b8c6e6a5a1"
        );
    }
}
