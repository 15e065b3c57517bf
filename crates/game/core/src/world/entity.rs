//! Entity identity and the live entity table.

use std::collections::BTreeMap;

use super::Vec2;
use crate::script::ScriptAction;

/// Unique identifier for a stage entity.
///
/// Ids are allocated once per table and never reused, so a stale id held by
/// a script simply fails its lookup instead of aliasing a newcomer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved id for the player pawn.
    pub const PLAYER: Self = Self(0);
}

/// One scripted stage entity: an NPC, enemy, chest, or marker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityState {
    pub name: String,
    pub position: Vec2,
    pub active: bool,
    /// Script run when the player interacts with this entity.
    pub interact_script: Vec<ScriptAction>,
    /// Script run when combat defeats this entity.
    pub defeat_script: Vec<ScriptAction>,
}

impl EntityState {
    pub fn new(name: impl Into<String>, position: Vec2) -> Self {
        Self {
            name: name.into(),
            position,
            active: true,
            interact_script: Vec::new(),
            defeat_script: Vec::new(),
        }
    }

    pub fn with_interact_script(mut self, script: Vec<ScriptAction>) -> Self {
        self.interact_script = script;
        self
    }

    pub fn with_defeat_script(mut self, script: Vec<ScriptAction>) -> Self {
        self.defeat_script = script;
        self
    }
}

/// Live entity table with weak, absent-safe handles.
///
/// Lookups return `Option`; holding an [`EntityId`] does not keep the entity
/// alive. Script references to entities removed earlier in the frame resolve
/// to `None` and degrade to no-ops.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityTable {
    next_id: u32,
    entities: BTreeMap<EntityId, EntityState>,
}

impl Default for EntityTable {
    fn default() -> Self {
        Self {
            // Id 0 is reserved for the player pawn.
            next_id: 1,
            entities: BTreeMap::new(),
        }
    }
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity and returns its freshly allocated id.
    pub fn spawn(&mut self, entity: EntityState) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityState> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntityState> {
        self.entities.get_mut(&id)
    }

    /// Finds the first entity with the given name. Stage names are unique by
    /// editor convention; duplicates resolve to the lowest id.
    pub fn find_by_name(&self, name: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(_, entity)| entity.name == name)
            .map(|(id, _)| *id)
    }

    /// Marks an entity inactive. Absent or already-inactive ids are a no-op;
    /// returns whether anything changed.
    pub fn deactivate(&mut self, id: EntityId) -> bool {
        match self.entities.get_mut(&id) {
            Some(entity) if entity.active => {
                entity.active = false;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, id: EntityId) -> bool {
        self.entities.get(&id).is_some_and(|entity| entity.active)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &EntityState)> {
        self.entities.iter().map(|(id, entity)| (*id, entity))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
