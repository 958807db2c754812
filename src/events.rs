//! # Match events
//!
//! The network frames only describe property changes of actors. `EventProjector` watches a
//! handful of those properties and turns their transitions into match events: goals,
//! demolitions and boost pickups. It also collects what the network data says about each
//! player and the match itself.
//!
//! The projector only looks at the frames. It keeps its own links between actors (which car a
//! boost component belongs to, which player drives a car, which team a player is on) so the
//! same frames always project into the same events.
//!
//! ```no_run
//! use rlreplay::{EventProjector, ParserBuilder, ProjectorOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // the replay to decode is given on the command line
//! let path = std::env::args().nth(1).ok_or("usage: events <file.replay>")?;
//! let data = std::fs::read(path)?;
//! let replay = ParserBuilder::new(&data).parse()?;
//! let projection = EventProjector::new(&replay.objects, ProjectorOptions::default())
//!     .project_replay(&replay);
//! println!("{} events", projection.events.len());
//! # Ok(())
//! # }
//! ```
use crate::loadout::VehicleLoadout;
use crate::models::Replay;
use crate::network::{
    ActiveActor, ActorId, Attribute, CamSettings, Demolish, Frame, ObjectId, Pickup, PickupNew,
    UniqueId, UpdatedAttribute, Vector3f,
};
use crate::platform::Platform;
use fnv::{FnvHashMap, FnvHashSet};
use serde::Serialize;

/// Properties the projector reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Watched {
    PawnPlayer,
    ComponentVehicle,
    PlayerTeam,
    TeamScore,
    MatchGoals,
    BoostAmount,
    RigidBody,
    Demolish,
    Pickup,
    PlayerName,
    UniqueId,
    PartyLeader,
    CameraSettings,
    Loadout,
    TotalXp,
    Playlist,
    ServerName,
    ServerId,
    ServerRegion,
    MatchGuid,
}

static WATCHED: phf::Map<&'static str, Watched> = phf::phf_map! {
    "Engine.Pawn:PlayerReplicationInfo" => Watched::PawnPlayer,
    "TAGame.CarComponent_TA:Vehicle" => Watched::ComponentVehicle,
    "Engine.PlayerReplicationInfo:Team" => Watched::PlayerTeam,
    "Engine.TeamInfo:Score" => Watched::TeamScore,
    "TAGame.PRI_TA:MatchGoals" => Watched::MatchGoals,
    "TAGame.CarComponent_Boost_TA:ReplicatedBoostAmount" => Watched::BoostAmount,
    "TAGame.RBActor_TA:ReplicatedRBState" => Watched::RigidBody,
    "TAGame.Car_TA:ReplicatedDemolish" => Watched::Demolish,
    "TAGame.VehiclePickup_TA:ReplicatedPickupData" => Watched::Pickup,
    "TAGame.VehiclePickup_TA:NewReplicatedPickupData" => Watched::Pickup,
    "Engine.PlayerReplicationInfo:PlayerName" => Watched::PlayerName,
    "Engine.PlayerReplicationInfo:UniqueId" => Watched::UniqueId,
    "TAGame.PRI_TA:PartyLeader" => Watched::PartyLeader,
    "TAGame.PRI_TA:CameraSettings" => Watched::CameraSettings,
    "TAGame.PRI_TA:ClientLoadout" => Watched::Loadout,
    "TAGame.PRI_TA:TotalXP" => Watched::TotalXp,
    "ProjectX.GRI_X:ReplicatedGamePlaylist" => Watched::Playlist,
    "Engine.GameReplicationInfo:ServerName" => Watched::ServerName,
    "ProjectX.GRI_X:GameServerID" => Watched::ServerId,
    "ProjectX.GRI_X:ReplicatedServerRegion" => Watched::ServerRegion,
    "ProjectX.GRI_X:MatchGUID" => Watched::MatchGuid,
};

/// Team archetypes and the team number they represent
static TEAMS: phf::Map<&'static str, u8> = phf::phf_map! {
    "Archetypes.Teams.Team0" => 0,
    "Archetypes.Teams.Team1" => 1,
};

/// Opt in to the raw per-frame samples. Both are off by default as they grow with the length
/// of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectorOptions {
    pub boost_samples: bool,
    pub position_samples: bool,
}

/// Match events in the order they happened. Players are referenced by the actor id of their
/// replication info, which is also `NetPlayer::actor_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Event {
    Goal {
        frame: usize,
        team: Option<u8>,
        scorer: Option<ActorId>,
    },
    Demolition {
        frame: usize,
        attacker: ActorId,
        victim: ActorId,
        attacker_player: Option<ActorId>,
        victim_player: Option<ActorId>,
    },
    BoostPickup {
        frame: usize,
        pickup: ActorId,
        car: Option<ActorId>,
        player: Option<ActorId>,
    },
}

impl Event {
    pub fn frame(&self) -> usize {
        match self {
            Event::Goal { frame, .. }
            | Event::Demolition { frame, .. }
            | Event::BoostPickup { frame, .. } => *frame,
        }
    }
}

/// The boost a player had at a frame (0 to 255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoostSample {
    pub frame: usize,
    pub player: ActorId,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionSample {
    pub frame: usize,
    pub actor: ActorId,

    /// Set when the actor is a car with a known driver
    pub player: Option<ActorId>,
    pub location: Vector3f,
}

/// What the network data says about a player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetPlayer {
    pub actor_id: ActorId,
    pub name: Option<String>,
    pub team: Option<u8>,
    pub unique_id: Option<UniqueId>,
    pub platform: Platform,
    pub online_id: Option<String>,

    /// Online id of the player's party leader
    pub party_leader: Option<String>,
    pub camera_settings: Option<CamSettings>,
    pub loadout: Option<VehicleLoadout>,
    pub total_xp: Option<i32>,
}

impl NetPlayer {
    fn new(actor_id: ActorId) -> Self {
        NetPlayer {
            actor_id,
            name: None,
            team: None,
            unique_id: None,
            platform: Platform::Unknown,
            online_id: None,
            party_leader: None,
            camera_settings: None,
            loadout: None,
            total_xp: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MatchInfo {
    pub playlist: Option<i32>,
    pub server_name: Option<String>,
    pub server_id: Option<String>,
    pub server_region: Option<String>,
    pub match_guid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Projection {
    pub events: Vec<Event>,
    pub players: Vec<NetPlayer>,
    pub boost_samples: Vec<BoostSample>,
    pub position_samples: Vec<PositionSample>,
    pub match_info: MatchInfo,
}

/// Projects network frames into match events
#[derive(Debug, Clone)]
pub struct EventProjector {
    options: ProjectorOptions,
    watched: FnvHashMap<ObjectId, Watched>,
    teams: FnvHashMap<ObjectId, u8>,
}

impl EventProjector {
    pub fn new(objects: &[String], options: ProjectorOptions) -> Self {
        let mut watched = FnvHashMap::default();
        let mut teams = FnvHashMap::default();
        for (i, name) in objects.iter().enumerate() {
            let id = ObjectId(i as i32);
            if let Some(x) = WATCHED.get(name.as_str()) {
                watched.insert(id, *x);
            } else if let Some(x) = TEAMS.get(name.as_str()) {
                teams.insert(id, *x);
            }
        }

        EventProjector {
            options,
            watched,
            teams,
        }
    }

    /// Projects the network frames of a parsed replay. A replay without network frames
    /// projects into nothing.
    pub fn project_replay(&self, replay: &Replay) -> Projection {
        let frames = replay
            .network_frames
            .as_ref()
            .map(|x| x.frames.as_slice())
            .unwrap_or_default();
        self.project(frames)
    }

    pub fn project<'f, I>(&self, frames: I) -> Projection
    where
        I: IntoIterator<Item = &'f Frame>,
    {
        let mut state = ProjectionState::new(self);
        for frame in frames {
            state.frame(frame);
        }
        state.projection
    }
}

/// Links between actors that are alive, and the last value of the properties that events
/// are derived from
struct ProjectionState<'p> {
    projector: &'p EventProjector,
    projection: Projection,
    car_players: FnvHashMap<ActorId, ActorId>,
    component_cars: FnvHashMap<ActorId, ActorId>,
    player_teams: FnvHashMap<ActorId, ActorId>,
    team_numbers: FnvHashMap<ActorId, u8>,
    team_scores: FnvHashMap<ActorId, i32>,
    player_goals: FnvHashMap<ActorId, i32>,
    pickups: FnvHashMap<ActorId, Attribute>,
    demolishes: FnvHashMap<ActorId, (ActorId, ActorId)>,
    players: FnvHashMap<ActorId, usize>,

    /// Actors spawned in the frame being projected
    spawned: FnvHashSet<ActorId>,

    /// Goals (by event index) still waiting on the player that scored them
    pending_goals: Vec<usize>,

    /// Players that scored before their team's score was seen
    pending_scorers: Vec<(ActorId, Option<u8>)>,
}

impl<'p> ProjectionState<'p> {
    fn new(projector: &'p EventProjector) -> Self {
        ProjectionState {
            projector,
            projection: Projection::default(),
            car_players: FnvHashMap::default(),
            component_cars: FnvHashMap::default(),
            player_teams: FnvHashMap::default(),
            team_numbers: FnvHashMap::default(),
            team_scores: FnvHashMap::default(),
            player_goals: FnvHashMap::default(),
            pickups: FnvHashMap::default(),
            demolishes: FnvHashMap::default(),
            players: FnvHashMap::default(),
            spawned: FnvHashSet::default(),
            pending_goals: Vec::new(),
            pending_scorers: Vec::new(),
        }
    }

    fn frame(&mut self, frame: &Frame) {
        // An id that is deleted and spawned in the same frame was deleted first
        let respawned: FnvHashSet<ActorId> = frame
            .new_actors
            .iter()
            .map(|x| x.actor_id)
            .filter(|x| frame.deleted_actors.contains(x))
            .collect();

        for actor in &respawned {
            self.forget(*actor);
        }

        self.spawned.clear();
        self.spawned
            .extend(frame.new_actors.iter().map(|x| x.actor_id));

        for actor in &frame.new_actors {
            if let Some(team) = self.projector.teams.get(&actor.object_id).copied() {
                self.team_numbers.insert(actor.actor_id, team);
            }
        }

        for update in &frame.updated_actors {
            if let Some(watched) = self.projector.watched.get(&update.object_id).copied() {
                self.update(frame.index, watched, update);
            }
        }

        for actor in &frame.deleted_actors {
            if !respawned.contains(actor) {
                self.forget(*actor);
            }
        }
    }

    /// Drops every link of an actor that no longer exists
    fn forget(&mut self, actor: ActorId) {
        self.car_players.remove(&actor);
        self.component_cars.remove(&actor);
        self.player_teams.remove(&actor);
        self.team_numbers.remove(&actor);
        self.team_scores.remove(&actor);
        self.player_goals.remove(&actor);
        self.pickups.remove(&actor);
        self.demolishes.remove(&actor);
        self.players.remove(&actor);
    }

    fn player_of_car(&self, car: ActorId) -> Option<ActorId> {
        self.car_players.get(&car).copied()
    }

    fn team_of_player(&self, player: ActorId) -> Option<u8> {
        self.player_teams
            .get(&player)
            .and_then(|team| self.team_numbers.get(team))
            .copied()
    }

    fn player(&mut self, actor: ActorId) -> &mut NetPlayer {
        let players = &mut self.projection.players;
        let ind = *self.players.entry(actor).or_insert_with(|| {
            players.push(NetPlayer::new(actor));
            players.len() - 1
        });
        &mut players[ind]
    }

    fn link(links: &mut FnvHashMap<ActorId, ActorId>, actor: ActorId, target: &ActiveActor) {
        if target.active {
            links.insert(actor, target.actor);
        } else {
            links.remove(&actor);
        }
    }

    fn update(&mut self, frame: usize, watched: Watched, update: &UpdatedAttribute) {
        let actor = update.actor_id;
        match (watched, &update.attribute) {
            (Watched::PawnPlayer, Attribute::ActiveActor(x)) => {
                Self::link(&mut self.car_players, actor, x)
            }
            (Watched::ComponentVehicle, Attribute::ActiveActor(x)) => {
                Self::link(&mut self.component_cars, actor, x)
            }
            (Watched::PlayerTeam, Attribute::ActiveActor(x)) => {
                Self::link(&mut self.player_teams, actor, x);
                let team = self.team_of_player(actor);
                self.player(actor).team = team;
            }
            (Watched::TeamScore, Attribute::Int(score)) => self.team_score(frame, actor, *score),
            (Watched::MatchGoals, Attribute::Int(goals)) => self.match_goals(actor, *goals),
            (Watched::BoostAmount, Attribute::Byte(value)) => {
                if !self.projector.options.boost_samples {
                    return;
                }

                let player = self
                    .component_cars
                    .get(&actor)
                    .and_then(|car| self.player_of_car(*car));
                if let Some(player) = player {
                    self.projection.boost_samples.push(BoostSample {
                        frame,
                        player,
                        value: *value,
                    });
                }
            }
            (Watched::RigidBody, Attribute::RigidBody(body)) => {
                if self.projector.options.position_samples {
                    self.projection.position_samples.push(PositionSample {
                        frame,
                        actor,
                        player: self.player_of_car(actor),
                        location: body.location,
                    });
                }
            }
            (Watched::Demolish, Attribute::Demolish(demo)) => self.demolish(frame, actor, demo),
            (Watched::Pickup, Attribute::Pickup(pickup)) => self.pickup(frame, actor, pickup),
            (Watched::Pickup, Attribute::PickupNew(pickup)) => {
                self.pickup_new(frame, actor, pickup)
            }
            (Watched::PlayerName, Attribute::String(name)) => {
                self.player(actor).name = Some(name.clone())
            }
            (Watched::UniqueId, Attribute::UniqueId(id)) => {
                let player = self.player(actor);
                player.platform = Platform::from_code(i64::from(id.system_id));
                player.online_id = Some(id.remote_id.online_id());
                player.unique_id = Some((**id).clone());
            }
            (Watched::PartyLeader, Attribute::PartyLeader(leader)) => {
                self.player(actor).party_leader =
                    leader.as_ref().map(|x| x.remote_id.online_id())
            }
            (Watched::CameraSettings, Attribute::CamSettings(settings)) => {
                self.player(actor).camera_settings = Some(**settings)
            }
            (Watched::Loadout, Attribute::Loadout(loadout)) => {
                self.player(actor).loadout = Some(VehicleLoadout::from_network(loadout))
            }
            (Watched::TotalXp, Attribute::Int(xp)) => self.player(actor).total_xp = Some(*xp),
            (Watched::Playlist, Attribute::Int(playlist)) => {
                self.projection.match_info.playlist = Some(*playlist)
            }
            (Watched::ServerName, Attribute::String(name)) => {
                self.projection.match_info.server_name = Some(name.clone())
            }
            (Watched::ServerId, Attribute::QWord(id)) => {
                self.projection.match_info.server_id = Some(id.to_string())
            }
            (Watched::ServerId, Attribute::String(id)) => {
                self.projection.match_info.server_id = Some(id.clone())
            }
            (Watched::ServerRegion, Attribute::String(region)) => {
                self.projection.match_info.server_region = Some(region.clone())
            }
            (Watched::MatchGuid, Attribute::String(guid)) => {
                self.projection.match_info.match_guid = Some(guid.clone())
            }
            _ => {}
        }
    }

    fn team_score(&mut self, frame: usize, team_actor: ActorId, score: i32) {
        // A score replicated alongside the spawn is the score the team joined with (a replay
        // that starts mid-match or a respawned team). Later scores count up from zero.
        let previous = match self.team_scores.insert(team_actor, score) {
            Some(x) => x,
            None if self.spawned.contains(&team_actor) => return,
            None => 0,
        };
        let team = self.team_numbers.get(&team_actor).copied();
        for _ in previous..score {
            let scorer = self
                .pending_scorers
                .iter()
                .position(|(_, x)| *x == team)
                .map(|ind| self.pending_scorers.remove(ind).0);

            if scorer.is_none() {
                self.pending_goals.push(self.projection.events.len());
            }

            self.projection.events.push(Event::Goal {
                frame,
                team,
                scorer,
            });
        }
    }

    fn match_goals(&mut self, player: ActorId, goals: i32) {
        let previous = self.player_goals.insert(player, goals).unwrap_or(0);
        let team = self.team_of_player(player);
        for _ in previous..goals {
            let pending = self.pending_goals.iter().position(|&ind| {
                matches!(
                    self.projection.events.get(ind),
                    Some(Event::Goal { team: x, .. }) if *x == team
                )
            });

            let Some(pending) = pending else {
                self.pending_scorers.push((player, team));
                continue;
            };

            let ind = self.pending_goals.remove(pending);
            if let Some(Event::Goal { scorer, .. }) = self.projection.events.get_mut(ind) {
                *scorer = Some(player);
            }
        }
    }

    fn demolish(&mut self, frame: usize, car: ActorId, demo: &Demolish) {
        let key = (demo.attacker, demo.victim);
        if self.demolishes.insert(car, key) == Some(key) {
            return;
        }

        self.projection.events.push(Event::Demolition {
            frame,
            attacker: demo.attacker,
            victim: demo.victim,
            attacker_player: self.player_of_car(demo.attacker),
            victim_player: self.player_of_car(demo.victim),
        });
    }

    fn pickup(&mut self, frame: usize, pad: ActorId, pickup: &Pickup) {
        let was_picked = matches!(
            self.pickups.insert(pad, Attribute::Pickup(*pickup)),
            Some(Attribute::Pickup(Pickup {
                picked_up: true,
                ..
            }))
        );

        if pickup.picked_up && !was_picked {
            self.boost_pickup(frame, pad, pickup.instigator);
        }
    }

    fn pickup_new(&mut self, frame: usize, pad: ActorId, pickup: &PickupNew) {
        let previous = self.pickups.insert(pad, Attribute::PickupNew(*pickup));
        let changed = match previous {
            Some(Attribute::PickupNew(x)) => x.picked_up != pickup.picked_up,
            _ => true,
        };

        if changed && pickup.instigator.is_some() {
            self.boost_pickup(frame, pad, pickup.instigator);
        }
    }

    fn boost_pickup(&mut self, frame: usize, pad: ActorId, car: Option<ActorId>) {
        self.projection.events.push(Event::BoostPickup {
            frame,
            pickup: pad,
            car,
            player: car.and_then(|x| self.player_of_car(x)),
        });
    }
}
