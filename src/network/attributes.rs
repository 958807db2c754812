use crate::bits::BitCursor;
use crate::errors::AttributeError;
use crate::network::object_index::ObjectIndex;
use crate::network::{ActorId, ObjectId, Quaternion, Rotation, StreamLayout, Vector3f};
use encoding_rs::WINDOWS_1252;
use serde::Serialize;

/// How a property's value is laid out in the network data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttributeTag {
    AppliedDamage,
    Boolean,
    Byte,
    CamSettings,
    ClubColors,
    DamageState,
    Demolish,
    Enum,
    Explosion,
    ExtendedExplosion,
    FlaggedByte,
    FlaggedInt,
    ActiveActor,
    Float,
    GameMode,
    Int,
    Int64,
    Loadout,
    TeamLoadout,
    Location,
    MusicStinger,
    Pickup,
    PickupNew,
    PlayerHistoryKey,
    QWord,
    Welded,
    RigidBody,
    Title,
    TeamPaint,
    NotImplemented,
    String,
    UniqueId,
    Reservation,
    PartyLeader,
    PrivateMatchSettings,
    LoadoutOnline,
    LoadoutsOnline,
    StatEvent,
    Rotation,
    RepStatTitle,
}

/// The attributes for updated actors in the network data.
///
/// The vast majority of attributes in the network data are rigid bodies. As a performance
/// improvement, any attribute variant larger than the size of a rigid body is moved to the heap
/// (ie: `Box::new`). This change increased throughput by 40%.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Attribute {
    AppliedDamage(AppliedDamage),
    Boolean(bool),
    Byte(u8),
    CamSettings(Box<CamSettings>),
    ClubColors(ClubColors),
    DamageState(DamageState),
    Demolish(Box<Demolish>),
    Enum(u16),
    Explosion(Explosion),
    ExtendedExplosion(ExtendedExplosion),
    FlaggedInt(bool, i32),
    ActiveActor(ActiveActor),
    FlaggedByte(bool, u8),
    Float(f32),
    GameMode(u8, u8),
    Int(i32),

    #[serde(serialize_with = "crate::serde_utils::display_it")]
    Int64(i64),
    Loadout(Box<Loadout>),
    TeamLoadout(Box<TeamLoadout>),
    Location(Vector3f),
    MusicStinger(MusicStinger),
    PlayerHistoryKey(u16),
    Pickup(Pickup),
    PickupNew(PickupNew),

    #[serde(serialize_with = "crate::serde_utils::display_it")]
    QWord(u64),
    Welded(Welded),
    Title(bool, bool, u32, u32, u32, u32, u32, bool),
    TeamPaint(TeamPaint),
    RigidBody(RigidBody),
    String(String),
    UniqueId(Box<UniqueId>),
    Reservation(Box<Reservation>),
    PartyLeader(Option<Box<UniqueId>>),
    PrivateMatch(Box<PrivateMatchSettings>),
    LoadoutOnline(Vec<Vec<Product>>),
    LoadoutsOnline(LoadoutsOnline),
    StatEvent(StatEvent),
    Rotation(Rotation),
    RepStatTitle(RepStatTitle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveActor {
    pub active: bool,
    pub actor: ActorId,
}

/// Damage dealt by the breakout ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AppliedDamage {
    pub id: u8,
    pub position: Vector3f,
    pub damage_index: u32,
    pub total_damage: u32,
}

/// The damage a breakout platform has taken
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageState {
    pub tile_state: u8,
    pub damaged: bool,
    pub offender: u32,
    pub ball_position: Vector3f,
    pub direct_damage: bool,
    pub immediate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CamSettings {
    pub fov: f32,
    pub height: f32,
    pub angle: f32,
    pub distance: f32,
    pub stiffness: f32,
    pub swivel: f32,
    pub transition: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClubColors {
    pub blue_flag: bool,
    pub blue_color: u8,
    pub orange_flag: bool,
    pub orange_color: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Demolish {
    pub attacker_flag: bool,
    pub attacker: ActorId,
    pub victim_flag: bool,
    pub victim: ActorId,
    pub attack_velocity: Vector3f,
    pub victim_velocity: Vector3f,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Explosion {
    pub flag: bool,
    pub actor: ActorId,
    pub location: Vector3f,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtendedExplosion {
    pub explosion: Explosion,
    pub unknown1: bool,
    pub secondary_actor: ActorId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Loadout {
    pub version: u8,
    pub body: u32,
    pub decal: u32,
    pub wheels: u32,
    pub rocket_trail: u32,
    pub antenna: u32,
    pub topper: u32,
    pub unknown1: u32,
    pub unknown2: Option<u32>,
    pub engine_audio: Option<u32>,
    pub trail: Option<u32>,
    pub goal_explosion: Option<u32>,
    pub banner: Option<u32>,
    pub product_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamLoadout {
    pub blue: Loadout,
    pub orange: Loadout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatEvent {
    pub unknown1: bool,
    pub object_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MusicStinger {
    pub flag: bool,
    pub cue: u32,
    pub trigger: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pickup {
    pub instigator: Option<ActorId>,
    pub picked_up: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickupNew {
    pub instigator: Option<ActorId>,
    pub picked_up: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Welded {
    pub active: bool,
    pub actor: ActorId,
    pub offset: Vector3f,
    pub mass: f32,
    pub rotation: Rotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamPaint {
    pub team: u8,
    pub primary_color: u8,
    pub accent_color: u8,
    pub primary_finish: u32,
    pub accent_finish: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RigidBody {
    pub sleeping: bool,
    pub location: Vector3f,
    pub rotation: Quaternion,
    pub linear_velocity: Option<Vector3f>,
    pub angular_velocity: Option<Vector3f>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueId {
    pub system_id: u8,
    pub remote_id: RemoteId,
    pub local_id: u8,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PsyNetId {
    #[serde(serialize_with = "crate::serde_utils::display_it")]
    pub online_id: u64,
    pub unknown1: Vec<u8>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SwitchId {
    #[serde(serialize_with = "crate::serde_utils::display_it")]
    pub online_id: u64,
    pub unknown1: Vec<u8>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Ps4Id {
    #[serde(serialize_with = "crate::serde_utils::display_it")]
    pub online_id: u64,
    pub name: String,
    pub unknown1: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RemoteId {
    PlayStation(Ps4Id),
    PsyNet(PsyNetId),
    SplitScreen(u32),

    #[serde(serialize_with = "crate::serde_utils::display_it")]
    Steam(u64),
    Switch(SwitchId),

    #[serde(serialize_with = "crate::serde_utils::display_it")]
    Xbox(u64),

    #[serde(serialize_with = "crate::serde_utils::display_it")]
    QQ(u64),
    Epic(String),
}

impl RemoteId {
    /// The account identifier as it is commonly displayed
    pub fn online_id(&self) -> String {
        match self {
            RemoteId::PlayStation(x) => x.online_id.to_string(),
            RemoteId::PsyNet(x) => x.online_id.to_string(),
            RemoteId::SplitScreen(x) => x.to_string(),
            RemoteId::Steam(x) | RemoteId::Xbox(x) | RemoteId::QQ(x) => x.to_string(),
            RemoteId::Switch(x) => x.online_id.to_string(),
            RemoteId::Epic(x) => x.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub number: u32,
    pub unique_id: UniqueId,
    pub name: Option<String>,
    pub unknown1: bool,
    pub unknown2: bool,
    pub unknown3: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivateMatchSettings {
    pub mutators: String,
    pub joinable_by: u32,
    pub max_players: u32,
    pub game_name: String,
    pub password: String,
    pub flag: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub unknown: bool,
    pub object_ind: ObjectId,
    pub value: ProductValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadoutsOnline {
    pub blue: Vec<Vec<Product>>,
    pub orange: Vec<Vec<Product>>,
    pub unknown1: bool,
    pub unknown2: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProductValue {
    NoColor,
    Absent,
    OldColor(u32),
    NewColor(u32),
    OldPaint(u32),
    NewPaint(u32),
    Title(String),
    SpecialEdition(u32),
    OldTeamEdition(u32),
    NewTeamEdition(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepStatTitle {
    pub unknown: bool,
    pub name: String,
    pub unknown2: bool,
    pub index: u32,
    pub value: u32,
}

/// Product attributes are keyed by the object id of the attribute's class, which varies per
/// replay, so the ids are looked up once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProductValueDecoder {
    layout: StreamLayout,
    color_ind: Option<ObjectId>,
    painted_ind: Option<ObjectId>,
    special_edition_ind: Option<ObjectId>,
    team_edition_ind: Option<ObjectId>,
    title_ind: Option<ObjectId>,
}

impl ProductValueDecoder {
    pub fn create(layout: StreamLayout, index: &ObjectIndex<'_>) -> Self {
        ProductValueDecoder {
            layout,
            color_ind: index.primary_by_name("TAGame.ProductAttribute_UserColor_TA"),
            painted_ind: index.primary_by_name("TAGame.ProductAttribute_Painted_TA"),
            title_ind: index.primary_by_name("TAGame.ProductAttribute_TitleID_TA"),
            special_edition_ind: index.primary_by_name("TAGame.ProductAttribute_SpecialEdition_TA"),
            team_edition_ind: index.primary_by_name("TAGame.ProductAttribute_TeamEdition_TA"),
        }
    }

    pub fn decode(&self, bits: &mut BitCursor<'_>, obj_ind: ObjectId) -> Option<ProductValue> {
        let obj = Some(obj_ind);
        if obj == self.color_ind {
            if self.layout.product_color_u32 {
                bits.read_u32().map(ProductValue::NewColor)
            } else {
                bits.if_get(|b| b.read_bits(31).map(ProductValue::OldColor))
                    .map(|x| x.unwrap_or(ProductValue::NoColor))
            }
        } else if obj == self.painted_ind {
            if self.layout.product_paint_u31 {
                bits.read_bits(31).map(ProductValue::NewPaint)
            } else {
                bits.read_bits_max(14).map(ProductValue::OldPaint)
            }
        } else if obj == self.title_ind {
            bits.read_text().ok().map(ProductValue::Title)
        } else if obj == self.special_edition_ind {
            bits.read_bits(31).map(ProductValue::SpecialEdition)
        } else if obj == self.team_edition_ind {
            if self.layout.product_paint_u31 {
                bits.read_bits(31).map(ProductValue::NewTeamEdition)
            } else {
                bits.read_bits_max(14).map(ProductValue::OldTeamEdition)
            }
        } else {
            Some(ProductValue::Absent)
        }
    }
}

/// Decodes a property's value given its [`AttributeTag`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttributeDecoder {
    layout: StreamLayout,
    product_decoder: ProductValueDecoder,
}

impl AttributeDecoder {
    pub fn new(layout: StreamLayout, product_decoder: ProductValueDecoder) -> Self {
        AttributeDecoder {
            layout,
            product_decoder,
        }
    }

    pub fn decode(
        &self,
        tag: AttributeTag,
        bits: &mut BitCursor<'_>,
    ) -> Result<Attribute, AttributeError> {
        let vec = self.layout.vector_max_bits;
        match tag {
            AttributeTag::AppliedDamage => need(
                decode_applied_damage(bits, vec).map(Attribute::AppliedDamage),
                "Applied Damage",
            ),
            AttributeTag::Boolean => need(bits.read_bit().map(Attribute::Boolean), "Boolean"),
            AttributeTag::Byte => need(bits.read_u8().map(Attribute::Byte), "Byte"),
            AttributeTag::CamSettings => need(
                self.decode_cam_settings(bits)
                    .map(|x| Attribute::CamSettings(Box::new(x))),
                "Cam Settings",
            ),
            AttributeTag::ClubColors => need(
                decode_club_colors(bits).map(Attribute::ClubColors),
                "Club Colors",
            ),
            AttributeTag::DamageState => need(
                decode_damage_state(bits, vec).map(Attribute::DamageState),
                "Damage State",
            ),
            AttributeTag::Demolish => need(
                decode_demolish(bits, vec).map(|x| Attribute::Demolish(Box::new(x))),
                "Demolish",
            ),
            AttributeTag::Enum => need(
                bits.read_bits(11).map(|x| Attribute::Enum(x as u16)),
                "Enum",
            ),
            AttributeTag::Explosion => need(
                decode_explosion(bits, vec).map(Attribute::Explosion),
                "Explosion",
            ),
            AttributeTag::ExtendedExplosion => need(
                decode_extended_explosion(bits, vec).map(Attribute::ExtendedExplosion),
                "Extended Explosion",
            ),
            AttributeTag::FlaggedInt => need(
                decode_flagged(bits).map(|(on, val)| Attribute::FlaggedInt(on, val)),
                "Flagged Int",
            ),
            AttributeTag::ActiveActor => need(
                decode_flagged(bits).map(|(active, actor)| {
                    Attribute::ActiveActor(ActiveActor {
                        active,
                        actor: ActorId(actor),
                    })
                }),
                "Active Actor",
            ),
            AttributeTag::FlaggedByte => need(
                decode_flagged_byte(bits).map(|(b, data)| Attribute::FlaggedByte(b, data)),
                "FlaggedByte",
            ),
            AttributeTag::Float => need(bits.read_f32().map(Attribute::Float), "Float"),
            AttributeTag::GameMode => {
                let init = self.layout.game_mode_bits;
                need(
                    bits.read_bits(init)
                        .map(|x| Attribute::GameMode(init as u8, x as u8)),
                    "Game Mode",
                )
            }
            AttributeTag::Int => need(bits.read_i32().map(Attribute::Int), "Int"),
            AttributeTag::Int64 => need(bits.read_i64().map(Attribute::Int64), "Int64"),
            AttributeTag::Loadout => need(
                decode_loadout(bits).map(|x| Attribute::Loadout(Box::new(x))),
                "Loadout",
            ),
            AttributeTag::TeamLoadout => need(
                decode_team_loadout(bits).map(|x| Attribute::TeamLoadout(Box::new(x))),
                "Team Loadout",
            ),
            AttributeTag::Location => need(
                Vector3f::decode(bits, vec).map(Attribute::Location),
                "Location",
            ),
            AttributeTag::MusicStinger => need(
                decode_music_stinger(bits).map(Attribute::MusicStinger),
                "Music Stinger",
            ),
            AttributeTag::Pickup => need(decode_pickup(bits).map(Attribute::Pickup), "Pickup"),
            AttributeTag::PickupNew => need(
                decode_pickup_new(bits).map(Attribute::PickupNew),
                "PickupNew",
            ),
            AttributeTag::PlayerHistoryKey => need(
                bits.read_bits(14)
                    .map(|x| Attribute::PlayerHistoryKey(x as u16)),
                "PlayerHistoryKey",
            ),
            AttributeTag::QWord => need(bits.read_u64().map(Attribute::QWord), "QWord"),
            AttributeTag::Welded => need(decode_welded(bits, vec).map(Attribute::Welded), "Welded"),
            AttributeTag::RigidBody => need(
                self.decode_rigid_body(bits).map(Attribute::RigidBody),
                "Rigid Body",
            ),
            AttributeTag::Title => need(decode_title(bits), "Title"),
            AttributeTag::TeamPaint => need(
                decode_team_paint(bits).map(Attribute::TeamPaint),
                "Team Paint",
            ),
            AttributeTag::NotImplemented => Err(AttributeError::Unimplemented),
            AttributeTag::String => bits.read_text().map(Attribute::String),
            AttributeTag::UniqueId => self
                .decode_unique_id(bits)
                .map(|x| Attribute::UniqueId(Box::new(x))),
            AttributeTag::Reservation => self
                .decode_reservation(bits)
                .map(|x| Attribute::Reservation(Box::new(x))),
            AttributeTag::PartyLeader => self.decode_party_leader(bits),
            AttributeTag::PrivateMatchSettings => decode_private_match_settings(bits)
                .map(|x| Attribute::PrivateMatch(Box::new(x))),
            AttributeTag::LoadoutOnline => need(
                self.decode_online_loadout(bits)
                    .map(Attribute::LoadoutOnline),
                "Loadout Online",
            ),
            AttributeTag::LoadoutsOnline => need(
                self.decode_loadouts_online(bits)
                    .map(Attribute::LoadoutsOnline),
                "Loadouts online",
            ),
            AttributeTag::StatEvent => need(
                decode_stat_event(bits).map(Attribute::StatEvent),
                "Stat Event",
            ),
            AttributeTag::Rotation => need(Rotation::decode(bits).map(Attribute::Rotation), "Rotation"),
            AttributeTag::RepStatTitle => decode_rep_stat_title(bits).map(Attribute::RepStatTitle),
        }
    }

    fn decode_cam_settings(&self, bits: &mut BitCursor<'_>) -> Option<CamSettings> {
        let fov = bits.read_f32()?;
        let height = bits.read_f32()?;
        let angle = bits.read_f32()?;
        let distance = bits.read_f32()?;
        let stiffness = bits.read_f32()?;
        let swivel = bits.read_f32()?;
        let transition = if self.layout.cam_transition {
            Some(bits.read_f32()?)
        } else {
            None
        };

        Some(CamSettings {
            fov,
            height,
            angle,
            distance,
            stiffness,
            swivel,
            transition,
        })
    }

    fn decode_rigid_body(&self, bits: &mut BitCursor<'_>) -> Option<RigidBody> {
        let vec = self.layout.vector_max_bits;
        let sleeping = bits.read_bit()?;
        let location = Vector3f::decode(bits, vec)?;
        let rotation = if self.layout.quaternion_rotation {
            Quaternion::decode(bits)?
        } else {
            Quaternion::decode_compressed(bits)?
        };

        let (linear_velocity, angular_velocity) = if !sleeping {
            let lv = Vector3f::decode(bits, vec)?;
            let av = Vector3f::decode(bits, vec)?;
            (Some(lv), Some(av))
        } else {
            (None, None)
        };

        Some(RigidBody {
            sleeping,
            location,
            rotation,
            linear_velocity,
            angular_velocity,
        })
    }

    fn decode_unique_id(&self, bits: &mut BitCursor<'_>) -> Result<UniqueId, AttributeError> {
        let system_id = bits
            .read_u8()
            .ok_or(AttributeError::NotEnoughDataFor("System id"))?;
        self.decode_unique_id_with_system_id(bits, system_id)
    }

    fn decode_unique_id_with_system_id(
        &self,
        bits: &mut BitCursor<'_>,
        system_id: u8,
    ) -> Result<UniqueId, AttributeError> {
        let remote_id = match system_id {
            0 => bits
                .read_bits(24)
                .ok_or(AttributeError::NotEnoughDataFor("SplitScreen"))
                .map(RemoteId::SplitScreen),
            1 => bits
                .read_u64()
                .ok_or(AttributeError::NotEnoughDataFor("Steam"))
                .map(RemoteId::Steam),
            2 => {
                let name_bytes = bits
                    .read_bytes(16)
                    .ok_or(AttributeError::NotEnoughDataFor("PS4 Name"))?;
                let name_len = name_bytes.iter().position(|&x| x == 0).unwrap_or(16);
                let (name, _) = WINDOWS_1252.decode_without_bom_handling(&name_bytes[..name_len]);

                let unknown1 = bits
                    .read_bytes(self.layout.ps4_unknown_bytes)
                    .ok_or(AttributeError::NotEnoughDataFor("PS4 Unknown"))?;

                let online_id = bits
                    .read_u64()
                    .ok_or(AttributeError::NotEnoughDataFor("PS4 ID"))?;

                Ok(RemoteId::PlayStation(Ps4Id {
                    name: name.to_string(),
                    unknown1,
                    online_id,
                }))
            }
            4 => bits
                .read_u64()
                .ok_or(AttributeError::NotEnoughDataFor("Xbox"))
                .map(RemoteId::Xbox),
            5 => bits
                .read_u64()
                .ok_or(AttributeError::NotEnoughDataFor("QQ ID"))
                .map(RemoteId::QQ),
            6 => {
                let online_id = bits
                    .read_u64()
                    .ok_or(AttributeError::NotEnoughDataFor("Switch ID"))?;

                let unknown1 = bits
                    .read_bytes(24)
                    .ok_or(AttributeError::NotEnoughDataFor("Switch ID Unknown"))?;

                Ok(RemoteId::Switch(SwitchId {
                    online_id,
                    unknown1,
                }))
            }
            7 => {
                let online_id = bits
                    .read_u64()
                    .ok_or(AttributeError::NotEnoughDataFor("PsyNet ID"))?;

                if self.layout.psynet_unknown_bytes {
                    let unknown1 = bits
                        .read_bytes(24)
                        .ok_or(AttributeError::NotEnoughDataFor("PsyNet ID Unknown"))?;

                    Ok(RemoteId::PsyNet(PsyNetId {
                        online_id,
                        unknown1,
                    }))
                } else {
                    Ok(RemoteId::PsyNet(PsyNetId {
                        online_id,
                        ..Default::default()
                    }))
                }
            }
            11 => bits.read_text().map(RemoteId::Epic),
            x => Err(AttributeError::UnrecognizedRemoteId(x)),
        }?;

        let local_id = bits
            .read_u8()
            .ok_or(AttributeError::NotEnoughDataFor("UniqueId local_id"))?;
        Ok(UniqueId {
            system_id,
            remote_id,
            local_id,
        })
    }

    fn decode_reservation(&self, bits: &mut BitCursor<'_>) -> Result<Reservation, AttributeError> {
        let number = bits
            .read_bits(3)
            .ok_or(AttributeError::NotEnoughDataFor("Reservation"))?;
        let unique_id = self.decode_unique_id(bits)?;
        let name = if unique_id.system_id != 0 {
            Some(bits.read_text()?)
        } else {
            None
        };

        let rest = (|| {
            let unknown1 = bits.read_bit()?;
            let unknown2 = bits.read_bit()?;
            let unknown3 = if self.layout.reservation_extra {
                Some(bits.read_bits(6)? as u8)
            } else {
                None
            };
            Some((unknown1, unknown2, unknown3))
        })();

        let (unknown1, unknown2, unknown3) =
            rest.ok_or(AttributeError::NotEnoughDataFor("Reservation"))?;
        Ok(Reservation {
            number,
            unique_id,
            name,
            unknown1,
            unknown2,
            unknown3,
        })
    }

    fn decode_party_leader(&self, bits: &mut BitCursor<'_>) -> Result<Attribute, AttributeError> {
        let system_id = bits
            .read_u8()
            .ok_or(AttributeError::NotEnoughDataFor("Party Leader"))?;
        if system_id != 0 {
            let id = self.decode_unique_id_with_system_id(bits, system_id)?;
            Ok(Attribute::PartyLeader(Some(Box::new(id))))
        } else {
            Ok(Attribute::PartyLeader(None))
        }
    }

    fn decode_product(&self, bits: &mut BitCursor<'_>) -> Option<Product> {
        let unknown = bits.read_bit()?;
        let obj_ind = ObjectId(bits.read_i32()?);
        let value = self.product_decoder.decode(bits, obj_ind)?;
        Some(Product {
            unknown,
            object_ind: obj_ind,
            value,
        })
    }

    fn decode_online_loadout(&self, bits: &mut BitCursor<'_>) -> Option<Vec<Vec<Product>>> {
        let size = bits.read_u8()?;
        let mut res = Vec::with_capacity(size as usize);
        for _ in 0..size {
            let attribute_size = bits.read_u8()?;
            let mut products = Vec::with_capacity(attribute_size as usize);
            for _ in 0..attribute_size {
                products.push(self.decode_product(bits)?);
            }
            res.push(products);
        }
        Some(res)
    }

    fn decode_loadouts_online(&self, bits: &mut BitCursor<'_>) -> Option<LoadoutsOnline> {
        let blue = self.decode_online_loadout(bits)?;
        let orange = self.decode_online_loadout(bits)?;
        let unknown1 = bits.read_bit()?;
        let unknown2 = bits.read_bit()?;
        Some(LoadoutsOnline {
            blue,
            orange,
            unknown1,
            unknown2,
        })
    }
}

#[inline]
fn need<T>(val: Option<T>, name: &'static str) -> Result<T, AttributeError> {
    val.ok_or(AttributeError::NotEnoughDataFor(name))
}

fn decode_flagged(bits: &mut BitCursor<'_>) -> Option<(bool, i32)> {
    let on = bits.read_bit()?;
    let val = bits.read_i32()?;
    Some((on, val))
}

fn decode_flagged_byte(bits: &mut BitCursor<'_>) -> Option<(bool, u8)> {
    let on = bits.read_bit()?;
    let val = bits.read_u8()?;
    Some((on, val))
}

fn decode_club_colors(bits: &mut BitCursor<'_>) -> Option<ClubColors> {
    Some(ClubColors {
        blue_flag: bits.read_bit()?,
        blue_color: bits.read_u8()?,
        orange_flag: bits.read_bit()?,
        orange_color: bits.read_u8()?,
    })
}

fn decode_applied_damage(bits: &mut BitCursor<'_>, vec: u32) -> Option<AppliedDamage> {
    Some(AppliedDamage {
        id: bits.read_u8()?,
        position: Vector3f::decode(bits, vec)?,
        damage_index: bits.read_u32()?,
        total_damage: bits.read_u32()?,
    })
}

fn decode_damage_state(bits: &mut BitCursor<'_>, vec: u32) -> Option<DamageState> {
    Some(DamageState {
        tile_state: bits.read_u8()?,
        damaged: bits.read_bit()?,
        offender: bits.read_u32()?,
        ball_position: Vector3f::decode(bits, vec)?,
        direct_damage: bits.read_bit()?,
        immediate: bits.read_bit()?,
    })
}

fn decode_demolish(bits: &mut BitCursor<'_>, vec: u32) -> Option<Demolish> {
    Some(Demolish {
        attacker_flag: bits.read_bit()?,
        attacker: ActorId(bits.read_i32()?),
        victim_flag: bits.read_bit()?,
        victim: ActorId(bits.read_i32()?),
        attack_velocity: Vector3f::decode(bits, vec)?,
        victim_velocity: Vector3f::decode(bits, vec)?,
    })
}

fn decode_explosion(bits: &mut BitCursor<'_>, vec: u32) -> Option<Explosion> {
    Some(Explosion {
        flag: bits.read_bit()?,
        actor: ActorId(bits.read_i32()?),
        location: Vector3f::decode(bits, vec)?,
    })
}

fn decode_extended_explosion(bits: &mut BitCursor<'_>, vec: u32) -> Option<ExtendedExplosion> {
    Some(ExtendedExplosion {
        explosion: decode_explosion(bits, vec)?,
        unknown1: bits.read_bit()?,
        secondary_actor: ActorId(bits.read_i32()?),
    })
}

fn decode_stat_event(bits: &mut BitCursor<'_>) -> Option<StatEvent> {
    Some(StatEvent {
        unknown1: bits.read_bit()?,
        object_id: bits.read_i32()?,
    })
}

fn decode_music_stinger(bits: &mut BitCursor<'_>) -> Option<MusicStinger> {
    Some(MusicStinger {
        flag: bits.read_bit()?,
        cue: bits.read_u32()?,
        trigger: bits.read_u8()?,
    })
}

fn decode_pickup(bits: &mut BitCursor<'_>) -> Option<Pickup> {
    let instigator = bits.if_get(|b| b.read_i32().map(ActorId))?;
    let picked_up = bits.read_bit()?;
    Some(Pickup {
        instigator,
        picked_up,
    })
}

fn decode_pickup_new(bits: &mut BitCursor<'_>) -> Option<PickupNew> {
    let instigator = bits.if_get(|b| b.read_i32().map(ActorId))?;
    let picked_up = bits.read_u8()?;
    Some(PickupNew {
        instigator,
        picked_up,
    })
}

fn decode_welded(bits: &mut BitCursor<'_>, vec: u32) -> Option<Welded> {
    Some(Welded {
        active: bits.read_bit()?,
        actor: ActorId(bits.read_i32()?),
        offset: Vector3f::decode(bits, vec)?,
        mass: bits.read_f32()?,
        rotation: Rotation::decode(bits)?,
    })
}

fn decode_title(bits: &mut BitCursor<'_>) -> Option<Attribute> {
    Some(Attribute::Title(
        bits.read_bit()?,
        bits.read_bit()?,
        bits.read_u32()?,
        bits.read_u32()?,
        bits.read_u32()?,
        bits.read_u32()?,
        bits.read_u32()?,
        bits.read_bit()?,
    ))
}

fn decode_team_paint(bits: &mut BitCursor<'_>) -> Option<TeamPaint> {
    Some(TeamPaint {
        team: bits.read_u8()?,
        primary_color: bits.read_u8()?,
        accent_color: bits.read_u8()?,
        primary_finish: bits.read_u32()?,
        accent_finish: bits.read_u32()?,
    })
}

fn decode_private_match_settings(
    bits: &mut BitCursor<'_>,
) -> Result<PrivateMatchSettings, AttributeError> {
    let mutators = bits.read_text()?;
    let joinable_by = need(bits.read_u32(), "Private Match")?;
    let max_players = need(bits.read_u32(), "Private Match")?;
    let game_name = bits.read_text()?;
    let password = bits.read_text()?;
    let flag = need(bits.read_bit(), "Private Match")?;
    Ok(PrivateMatchSettings {
        mutators,
        joinable_by,
        max_players,
        game_name,
        password,
        flag,
    })
}

fn decode_rep_stat_title(bits: &mut BitCursor<'_>) -> Result<RepStatTitle, AttributeError> {
    let unknown = need(bits.read_bit(), "RepStatTitle")?;
    let name = bits.read_text()?;
    let unknown2 = need(bits.read_bit(), "RepStatTitle")?;
    let index = need(bits.read_u32(), "RepStatTitle")?;
    let value = need(bits.read_u32(), "RepStatTitle")?;
    Ok(RepStatTitle {
        unknown,
        name,
        unknown2,
        index,
        value,
    })
}

fn decode_team_loadout(bits: &mut BitCursor<'_>) -> Option<TeamLoadout> {
    let blue = decode_loadout(bits)?;
    let orange = decode_loadout(bits)?;
    Some(TeamLoadout { blue, orange })
}

/// The loadout's leading version byte decides which trailing slots are present
fn decode_loadout(bits: &mut BitCursor<'_>) -> Option<Loadout> {
    let version = bits.read_u8()?;
    let body = bits.read_u32()?;
    let decal = bits.read_u32()?;
    let wheels = bits.read_u32()?;
    let rocket_trail = bits.read_u32()?;
    let antenna = bits.read_u32()?;
    let topper = bits.read_u32()?;
    let unknown1 = bits.read_u32()?;
    let unknown2 = if version > 10 {
        Some(bits.read_u32()?)
    } else {
        None
    };

    let (engine_audio, trail, goal_explosion) = if version >= 16 {
        (
            Some(bits.read_u32()?),
            Some(bits.read_u32()?),
            Some(bits.read_u32()?),
        )
    } else {
        (None, None, None)
    };

    let banner = if version >= 17 {
        Some(bits.read_u32()?)
    } else {
        None
    };

    let product_id = if version >= 19 {
        Some(bits.read_u32()?)
    } else {
        None
    };

    if version >= 22 {
        bits.read_u32()?;
        bits.read_u32()?;
        bits.read_u32()?;
    }

    Some(Loadout {
        version,
        body,
        decal,
        wheels,
        rocket_trail,
        antenna,
        topper,
        unknown1,
        unknown2,
        engine_audio,
        trail,
        goal_explosion,
        banner,
        product_id,
    })
}
