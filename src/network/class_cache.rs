use crate::data::ATTRIBUTES;
use crate::errors::NetworkError;
use crate::models::{ClassIndex, ClassNetCacheEntry};
use crate::network::attributes::AttributeTag;
use crate::network::object_index::ObjectIndex;
use crate::network::{ObjectId, StreamId};
use fnv::FnvHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Stream ids are read with a variable width bounded by the largest id. Anything past this is
/// not a plausible class layout.
const MAX_STREAM_ID: i32 = 1 << 16;

/// A replicated property of a class: the object that names it and how it is encoded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDef {
    pub object_id: ObjectId,
    pub name: String,
    pub tag: AttributeTag,
}

/// The flattened properties of a class: its own plus everything inherited
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ClassProperties {
    pub properties: BTreeMap<StreamId, PropertyDef>,
}

impl ClassProperties {
    pub fn get(&self, stream_id: StreamId) -> Option<&PropertyDef> {
        self.properties.get(&stream_id)
    }

    /// The exclusive upper bound of stream ids sent for this class
    pub fn stream_id_limit(&self) -> u32 {
        self.properties
            .keys()
            .next_back()
            .map(|x| x.0 as u32 + 1)
            .unwrap_or(1)
    }
}

/// The resolved class hierarchy of a replay. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassNetCache {
    classes: FnvHashMap<ObjectId, ClassProperties>,
    aliases: FnvHashMap<ObjectId, ObjectId>,
}

impl ClassNetCache {
    /// Resolves every raw cache entry into a flat property table. Parents are found by cache
    /// id: the nearest preceding entry wins, and failing that any other entry with the id. An
    /// entry whose parent is itself or nothing is a root.
    pub fn resolve(
        objects: &[String],
        class_indices: &[ClassIndex],
        net_cache: &[ClassNetCacheEntry],
    ) -> Result<Self, NetworkError> {
        for entry in net_cache {
            if entry.object_ind < 0 || entry.object_ind as usize >= objects.len() {
                return Err(NetworkError::ObjectIdOutOfRange(ObjectId(entry.object_ind)));
            }
        }

        let mut by_cache_id: FnvHashMap<i32, Vec<usize>> = FnvHashMap::default();
        for (i, entry) in net_cache.iter().enumerate() {
            by_cache_id.entry(entry.cache_id).or_default().push(i);
        }

        let parents: Vec<Option<usize>> = net_cache
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                if entry.parent_id == entry.cache_id {
                    return None;
                }

                let candidates = by_cache_id.get(&entry.parent_id)?;
                candidates
                    .iter()
                    .rev()
                    .find(|&&j| j < i)
                    .or_else(|| candidates.iter().find(|&&j| j != i))
                    .copied()
            })
            .collect();

        let mut resolved: Vec<Option<BTreeMap<StreamId, PropertyDef>>> = vec![None; net_cache.len()];
        let mut on_chain = vec![false; net_cache.len()];
        let mut chain = Vec::new();
        for start in 0..net_cache.len() {
            // Walk up until a root or an already resolved ancestor
            let mut cur = Some(start);
            while let Some(ind) = cur {
                if resolved[ind].is_some() {
                    break;
                }

                if on_chain[ind] {
                    return Err(NetworkError::InvalidClassHierarchy(ObjectId(
                        net_cache[ind].object_ind,
                    )));
                }

                on_chain[ind] = true;
                chain.push(ind);
                cur = parents[ind];
            }

            let mut props = cur
                .and_then(|ind| resolved[ind].clone())
                .unwrap_or_default();

            while let Some(ind) = chain.pop() {
                let entry = &net_cache[ind];
                for prop in &entry.properties {
                    if prop.stream_id < 0 || prop.stream_id > MAX_STREAM_ID {
                        return Err(NetworkError::MaxStreamIdTooLarge(
                            prop.stream_id,
                            ObjectId(entry.object_ind),
                        ));
                    }

                    let name = usize::try_from(prop.object_ind)
                        .ok()
                        .and_then(|x| objects.get(x))
                        .ok_or(NetworkError::StreamTooLargeIndex(
                            prop.stream_id,
                            prop.object_ind,
                        ))?;

                    let def = PropertyDef {
                        object_id: ObjectId(prop.object_ind),
                        name: name.clone(),
                        tag: ATTRIBUTES
                            .get(name.as_str())
                            .copied()
                            .unwrap_or(AttributeTag::NotImplemented),
                    };

                    props.insert(StreamId(prop.stream_id), def);
                }

                on_chain[ind] = false;
                resolved[ind] = Some(props.clone());
            }
        }

        let mut classes = FnvHashMap::default();
        for (entry, properties) in net_cache.iter().zip(resolved) {
            let properties = properties.unwrap_or_default();
            classes.insert(ObjectId(entry.object_ind), ClassProperties { properties });
        }

        let class_ids: FnvHashMap<&str, ObjectId> = class_indices
            .iter()
            .map(|x| (x.class.as_str(), ObjectId(x.index)))
            .collect();

        let index = ObjectIndex::new(objects);
        let mut aliases = FnvHashMap::default();
        for (archetype, class) in index.archetypes() {
            let class_id = class_ids
                .get(class)
                .copied()
                .filter(|id| classes.contains_key(id))
                .or_else(|| index.primary_by_name(class));

            let class_id = match class_id {
                Some(id) if classes.contains_key(&id) => id,
                _ => continue,
            };

            for id in index.all_indices(archetype) {
                if !classes.contains_key(&id) {
                    aliases.insert(id, class_id);
                }
            }
        }

        Ok(ClassNetCache { classes, aliases })
    }

    /// The class an object is an instance of, which may be itself
    pub fn class_of(&self, object_id: ObjectId) -> Option<ObjectId> {
        let class_id = self.aliases.get(&object_id).copied().unwrap_or(object_id);
        if self.classes.contains_key(&class_id) {
            Some(class_id)
        } else {
            None
        }
    }

    /// The flattened properties of a class object
    pub fn properties(&self, class_id: ObjectId) -> Option<&ClassProperties> {
        self.classes.get(&class_id)
    }

    /// Number of classes with a resolved layout
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
