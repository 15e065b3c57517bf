//! Stage file loader.
//!
//! A stage file is one JSON document holding spawn points, entity
//! placements, and trigger regions, with scripts inline in the editor wire
//! shape. [`StageData::build`] turns it into the starting [`World`] and
//! [`TriggerSystem`] the runtime director owns.

use std::collections::BTreeMap;
use std::path::Path;

use harrow_core::{Activation, Camera, EntityState, Rect, TriggerDef, TriggerSystem, Vec2, World};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::loaders::scripts::{RawAction, decode_script};
use crate::loaders::{LoadResult, read_file};

/// A stage exactly as the editor exports it. Positions are `[x, y]` pairs in
/// world units; every section may be omitted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StageData {
    pub name: String,
    /// Spawn point the player starts at. Unknown or empty names start the
    /// player at the origin.
    pub player_spawn: String,
    pub spawn_points: BTreeMap<String, [f32; 2]>,
    pub entities: Vec<EntityData>,
    pub triggers: Vec<TriggerData>,
}

/// One entity placement.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityData {
    pub name: String,
    pub position: [f32; 2],
    pub interact_script: Vec<RawAction>,
    pub defeat_script: Vec<RawAction>,
}

/// One trigger region.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerData {
    pub id: String,
    pub region: Rect,
    pub activation: Activation,
    pub once: bool,
    pub cooldown: f32,
    pub script: Vec<RawAction>,
}

/// Half-extent of the interact region synthesized around an entity.
const INTERACT_RADIUS: f32 = 12.0;
/// Debounce between fires of a synthesized interact trigger.
const INTERACT_COOLDOWN: f32 = 0.3;

/// Loader for stage JSON files.
pub struct StageLoader;

impl StageLoader {
    /// Load a stage from a JSON file.
    pub fn load(path: &Path) -> LoadResult<StageData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a stage from in-memory JSON (embedded stages, tests).
    pub fn parse(json: &str) -> LoadResult<StageData> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("Failed to parse stage JSON: {e}"))
    }
}

impl StageData {
    /// Builds the starting world and trigger set for this stage.
    ///
    /// Scripts decode here, once; the defaults of [`crate::loaders::scripts`]
    /// are already applied in everything the returned world carries. Every
    /// entity with an interact script also gets a synthesized interact
    /// trigger around its position, bound to the entity, so talking to an
    /// NPC and stepping on a plate go through the same system.
    pub fn build(&self) -> (World, TriggerSystem) {
        let mut world = World::new();
        for (name, [x, y]) in &self.spawn_points {
            world.spawn_points.insert(name.clone(), Vec2::new(*x, *y));
        }

        world.player.position = match world.spawn_points.get(&self.player_spawn) {
            Some(point) => *point,
            None => {
                if !self.player_spawn.is_empty() {
                    warn!(spawn = %self.player_spawn, "unknown player spawn, starting at the origin");
                }
                Vec2::ZERO
            }
        };
        world.camera = Camera::new(world.player.position);

        for data in &self.entities {
            let [x, y] = data.position;
            world.entities.spawn(
                EntityState::new(data.name.clone(), Vec2::new(x, y))
                    .with_interact_script(decode_script(&data.interact_script))
                    .with_defeat_script(decode_script(&data.defeat_script)),
            );
        }

        let mut defs: Vec<TriggerDef> = self
            .triggers
            .iter()
            .map(|data| TriggerDef {
                id: data.id.clone(),
                region: data.region,
                activation: data.activation,
                once: data.once,
                cooldown: data.cooldown,
                script: decode_script(&data.script),
                source: None,
            })
            .collect();

        for (id, entity) in world.entities.iter() {
            if entity.interact_script.is_empty() {
                continue;
            }
            defs.push(TriggerDef {
                id: format!("interact:{}", entity.name),
                region: Rect::new(
                    entity.position.x - INTERACT_RADIUS,
                    entity.position.y - INTERACT_RADIUS,
                    INTERACT_RADIUS * 2.0,
                    INTERACT_RADIUS * 2.0,
                ),
                activation: Activation::Interact,
                once: false,
                cooldown: INTERACT_COOLDOWN,
                script: entity.interact_script.clone(),
                source: Some(id),
            });
        }

        (world, TriggerSystem::new(defs))
    }
}
