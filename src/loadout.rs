//! # Vehicle loadouts
//!
//! A player's car customization has been stored in two shapes over the years: a fixed list
//! of product ids, and (from loadout version 16) a set of named slots. The shape is decided
//! from the explicit version byte when the loadout is captured and only resolved into
//! components when someone asks for them.
use crate::network::attributes::Loadout;
use serde::Serialize;

/// First loadout version that is stored as named slots
const KEYED_VERSION: u8 = 16;

/// The customizable parts of a car that are surfaced as components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentKind {
    Body,
    Decal,
    Wheels,
    Trail,
    Antenna,
    Topper,
}

impl ComponentKind {
    /// Order of the components in the legacy list shape
    const LIST_ORDER: [ComponentKind; 6] = [
        ComponentKind::Body,
        ComponentKind::Decal,
        ComponentKind::Wheels,
        ComponentKind::Trail,
        ComponentKind::Antenna,
        ComponentKind::Topper,
    ];

    /// The slot name a component is stored under in the keyed shape
    pub fn slot(self) -> &'static str {
        match self {
            ComponentKind::Body => "Body",
            ComponentKind::Decal => "Decal",
            ComponentKind::Wheels => "Wheels",
            ComponentKind::Trail => "RocketTrail",
            ComponentKind::Antenna => "Antenna",
            ComponentKind::Topper => "Topper",
        }
    }

    fn from_slot(slot: &str) -> Option<ComponentKind> {
        Self::LIST_ORDER.iter().copied().find(|x| x.slot() == slot)
    }

    /// Product names are prefixed with their kind
    fn name_prefix(self) -> &'static str {
        match self {
            ComponentKind::Body => "Body_",
            ComponentKind::Decal => "Skin_",
            ComponentKind::Wheels => "WHEEL_",
            ComponentKind::Trail => "Boost_",
            ComponentKind::Antenna => "Antenna ",
            ComponentKind::Topper => "Hat_",
        }
    }

    /// Strips the kind prefix from a product name and spaces out the words
    /// ```
    /// # use rlreplay::ComponentKind;
    /// assert_eq!(ComponentKind::Wheels.clean_name("WHEEL_Cristiano"), "Cristiano");
    /// assert_eq!(ComponentKind::Topper.clean_name("Hat_Pirate_Hat"), "Pirate Hat");
    /// ```
    pub fn clean_name(self, name: &str) -> String {
        name.replace(self.name_prefix(), "").replace('_', " ")
    }
}

/// A product equipped in a named slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadoutSlot {
    pub slot: String,
    pub id: u32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LoadoutShape {
    /// Product ids in slot order. Seven entries, or nine when the version and a trailing
    /// value were stored alongside.
    List(Vec<u32>),
    Keyed(Vec<LoadoutSlot>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleLoadout {
    pub version: u8,
    pub shape: LoadoutShape,
}

/// A resolved piece of a car's customization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub kind: ComponentKind,
    pub id: u32,
    pub name: Option<String>,
}

impl VehicleLoadout {
    /// Captures a loadout replicated in the network data. Network loadouts only carry product
    /// ids, so keyed slots have no names.
    pub fn from_network(loadout: &Loadout) -> VehicleLoadout {
        let shape = if loadout.version >= KEYED_VERSION {
            let mut slots = vec![
                ("Body", loadout.body),
                ("Decal", loadout.decal),
                ("Wheels", loadout.wheels),
                ("RocketTrail", loadout.rocket_trail),
                ("Antenna", loadout.antenna),
                ("Topper", loadout.topper),
            ];

            let extras = [
                ("EngineAudio", loadout.engine_audio),
                ("Trail", loadout.trail),
                ("GoalExplosion", loadout.goal_explosion),
                ("Banner", loadout.banner),
                ("Product", loadout.product_id),
            ];
            slots.extend(extras.iter().filter_map(|(slot, id)| id.map(|x| (*slot, x))));

            LoadoutShape::Keyed(
                slots
                    .into_iter()
                    .map(|(slot, id)| LoadoutSlot {
                        slot: String::from(slot),
                        id,
                        name: None,
                    })
                    .collect(),
            )
        } else {
            LoadoutShape::List(vec![
                loadout.body,
                loadout.decal,
                loadout.wheels,
                loadout.rocket_trail,
                loadout.antenna,
                loadout.topper,
                loadout.unknown1,
            ])
        };

        VehicleLoadout {
            version: loadout.version,
            shape,
        }
    }

    /// Resolves the loadout into its components. Empty slots (product id 0) are left out.
    pub fn components(&self) -> Vec<Component> {
        match &self.shape {
            LoadoutShape::List(ids) => {
                let ids = if ids.len() == 9 {
                    &ids[1..ids.len() - 1]
                } else {
                    &ids[..]
                };

                ComponentKind::LIST_ORDER
                    .iter()
                    .zip(ids)
                    .filter(|&(_, &id)| id > 0)
                    .map(|(&kind, &id)| Component {
                        kind,
                        id,
                        name: None,
                    })
                    .collect()
            }
            LoadoutShape::Keyed(slots) => slots
                .iter()
                .filter(|x| x.id > 0)
                .filter_map(|x| {
                    let kind = ComponentKind::from_slot(&x.slot)?;
                    Some(Component {
                        kind,
                        id: x.id,
                        name: x.name.as_deref().map(|n| kind.clean_name(n)),
                    })
                })
                .collect(),
        }
    }
}
