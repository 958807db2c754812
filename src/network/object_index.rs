use crate::data::OBJECT_CLASSES;
use crate::network::{normalize_object, ObjectId};
use fnv::FnvHashMap;
use std::collections::hash_map::Entry;

/// A lookup of an object's ID (its index in body.objects) from its normalized name.
///
/// The exact same name can appear multiple times in body.objects (and level objects like
/// boost pads normalize to a shared name), so we designate these additional occurrences as
/// "secondary IDs" of the first occurrence.
pub(crate) struct ObjectIndex<'a> {
    name_index: FnvHashMap<&'a str, ObjectId>,
    secondary_indices: FnvHashMap<ObjectId, Vec<ObjectId>>,
}

impl<'a> ObjectIndex<'a> {
    pub(crate) fn new(objects: &'a [String]) -> Self {
        let mut name_index: FnvHashMap<&str, ObjectId> = FnvHashMap::default();
        let mut secondary_indices: FnvHashMap<ObjectId, Vec<ObjectId>> = FnvHashMap::default();

        for (i, name) in objects.iter().enumerate() {
            let val = ObjectId(i as i32);
            match name_index.entry(normalize_object(name)) {
                Entry::Occupied(occupied_entry) => {
                    secondary_indices
                        .entry(*occupied_entry.get())
                        .or_default()
                        .push(val);
                }
                Entry::Vacant(vacant_entry) => {
                    vacant_entry.insert(val);
                }
            };
        }

        Self {
            name_index,
            secondary_indices,
        }
    }

    /// Return primary `ObjectId` given the (normalized) object name
    pub(crate) fn primary_by_name(&self, name: &str) -> Option<ObjectId> {
        self.name_index.get(name).copied()
    }

    /// Returns a list of equivalent `ObjectId` as the primary id passed in.
    /// Includes self.
    pub(crate) fn all_indices(&self, id: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        std::iter::once(id).chain(
            self.secondary_indices
                .get(&id)
                .into_iter()
                .flatten()
                .copied(),
        )
    }

    /// Iterates every archetype present in the objects alongside the name of the class it is
    /// an instance of.
    pub(crate) fn archetypes(&self) -> impl Iterator<Item = (ObjectId, &'static str)> + '_ {
        OBJECT_CLASSES
            .entries()
            .filter_map(move |(archetype, class)| Some((self.primary_by_name(archetype)?, *class)))
    }
}
