use crate::errors::NetworkError;
use crate::network::{ActorId, Attribute, ObjectId};
use fnv::FnvHashMap;

/// The most recent value of every property an active actor has received
#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    /// The object (usually an archetype) the actor was spawned as
    pub object_id: ObjectId,

    /// The class whose property layout the actor uses, when one could be resolved
    pub class_id: Option<ObjectId>,

    /// Keyed by the object id of the property
    pub properties: FnvHashMap<ObjectId, Attribute>,
}

/// Active actors keyed by their id. Actor ids are small and dense (bounded by the channel
/// count), so the table is a slot arena indexed by id.
#[derive(Debug, Clone, Default)]
pub struct ActorStateTable {
    slots: Vec<Option<ActorState>>,
    active: usize,
}

impl ActorStateTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, actor: ActorId) -> Option<&ActorState> {
        usize::try_from(actor.0)
            .ok()
            .and_then(|x| self.slots.get(x))
            .and_then(|x| x.as_ref())
    }

    fn slot_mut(&mut self, actor: ActorId) -> Option<&mut Option<ActorState>> {
        usize::try_from(actor.0)
            .ok()
            .and_then(move |x| self.slots.get_mut(x))
    }

    /// Activates an actor with an empty set of properties. An actor that is still active keeps
    /// its slot and `DuplicateActor` is returned.
    pub fn spawn(
        &mut self,
        actor: ActorId,
        object_id: ObjectId,
        class_id: Option<ObjectId>,
    ) -> Result<(), NetworkError> {
        let ind = usize::try_from(actor.0).map_err(|_| NetworkError::UnknownActor(actor))?;
        if ind >= self.slots.len() {
            self.slots.resize_with(ind + 1, || None);
        }

        let slot = &mut self.slots[ind];
        if slot.is_some() {
            return Err(NetworkError::DuplicateActor(actor));
        }

        *slot = Some(ActorState {
            object_id,
            class_id,
            properties: FnvHashMap::default(),
        });
        self.active += 1;
        Ok(())
    }

    /// Records the latest value of a property
    pub fn apply_delta(
        &mut self,
        actor: ActorId,
        property: ObjectId,
        value: Attribute,
    ) -> Result<(), NetworkError> {
        let state = self
            .slot_mut(actor)
            .and_then(|x| x.as_mut())
            .ok_or(NetworkError::UnknownActor(actor))?;
        state.properties.insert(property, value);
        Ok(())
    }

    /// Deactivates an actor and hands back its final state
    pub fn despawn(&mut self, actor: ActorId) -> Result<ActorState, NetworkError> {
        let state = self
            .slot_mut(actor)
            .and_then(|x| x.take())
            .ok_or(NetworkError::UnknownActor(actor))?;
        self.active -= 1;
        Ok(state)
    }

    pub fn get(&self, actor: ActorId) -> Option<&ActorState> {
        self.slot(actor)
    }

    /// Number of active actors
    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Active actors in id order
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &ActorState)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, x)| x.as_ref().map(|state| (ActorId(i as i32), state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_update() {
        let mut table = ActorStateTable::new();
        table.spawn(ActorId(3), ObjectId(10), Some(ObjectId(11))).unwrap();
        table
            .apply_delta(ActorId(3), ObjectId(20), Attribute::Int(5))
            .unwrap();
        table
            .apply_delta(ActorId(3), ObjectId(20), Attribute::Int(6))
            .unwrap();

        let state = table.get(ActorId(3)).unwrap();
        assert_eq!(state.class_id, Some(ObjectId(11)));
        assert_eq!(state.properties.get(&ObjectId(20)), Some(&Attribute::Int(6)));
        assert_eq!(table.len(), 1);
        assert!(table.get(ActorId(2)).is_none());
    }

    #[test]
    fn duplicate_spawn_keeps_original() {
        let mut table = ActorStateTable::new();
        table.spawn(ActorId(0), ObjectId(1), None).unwrap();
        assert_eq!(
            table.spawn(ActorId(0), ObjectId(2), None),
            Err(NetworkError::DuplicateActor(ActorId(0)))
        );
        assert_eq!(table.get(ActorId(0)).unwrap().object_id, ObjectId(1));
    }

    #[test]
    fn inactive_actors_are_unknown() {
        let mut table = ActorStateTable::new();
        assert_eq!(
            table.apply_delta(ActorId(42), ObjectId(1), Attribute::Boolean(true)),
            Err(NetworkError::UnknownActor(ActorId(42)))
        );
        assert_eq!(
            table.despawn(ActorId(42)).err(),
            Some(NetworkError::UnknownActor(ActorId(42)))
        );
        assert!(table.is_empty());
    }

    #[test]
    fn respawn_starts_empty() {
        let mut table = ActorStateTable::new();
        table.spawn(ActorId(7), ObjectId(1), None).unwrap();
        table
            .apply_delta(ActorId(7), ObjectId(2), Attribute::Float(1.5))
            .unwrap();

        let old = table.despawn(ActorId(7)).unwrap();
        assert_eq!(old.properties.len(), 1);
        assert!(table.get(ActorId(7)).is_none());

        table.spawn(ActorId(7), ObjectId(1), None).unwrap();
        assert!(table.get(ActorId(7)).unwrap().properties.is_empty());
        assert_eq!(table.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![ActorId(7)]);
    }
}
