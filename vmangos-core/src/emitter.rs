//! Block classification and record emission.
//!
//! A block becomes a creature row, a gameobject row, or nothing, depending
//! on its `TYPE` and which entry keys it carries:
//!
//! | TYPE | key present  | result                                  |
//! |------|--------------|-----------------------------------------|
//! | 3    | `SPAWN`      | creature, first token of `SPAWN`        |
//! | 3    | `SPAWN_GOBJ` | gameobject, identity rotation           |
//! | 5    | `ENTRY`      | gameobject, `ROTATION` or identity      |

use crate::config::ConverterConfig;
use crate::models::{CreatureRecord, GameobjectRecord, GuidCounter};
use crate::properties::PropertyMap;
use std::fmt;

const IDENTITY_ROTATION: [&str; 4] = ["0", "0", "0", "1"];

/// Why a block produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingType,
    MissingXyz,
    /// `XYZ` has fewer than four tokens.
    ShortXyz,
    UnknownType,
    /// The matched `TYPE` lacks its entry key, or the key has no token.
    MissingEntry,
    /// Only reported when number validation is enabled.
    InvalidNumber,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MissingType => "missing TYPE",
            SkipReason::MissingXyz => "missing XYZ",
            SkipReason::ShortXyz => "XYZ has fewer than 4 values",
            SkipReason::UnknownType => "unsupported TYPE",
            SkipReason::MissingEntry => "missing entry id",
            SkipReason::InvalidNumber => "non-numeric map, position or rotation",
        };
        f.write_str(text)
    }
}

/// What kind of row a block maps to.
#[derive(Debug, Clone, PartialEq)]
pub enum Spawn<'a> {
    Creature { entry: &'a str },
    Gameobject { entry: &'a str, rotation: [&'a str; 4] },
}

/// Map and position shared by both row kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'a> {
    pub map: &'a str,
    pub x: &'a str,
    pub y: &'a str,
    pub z: &'a str,
    pub orientation: &'a str,
}

/// Decide what a block yields. First matching rule wins.
pub fn classify<'a>(
    props: &'a PropertyMap,
    default_map: &'a str,
) -> Result<(Placement<'a>, Spawn<'a>), SkipReason> {
    let type_value = props.get("TYPE").ok_or(SkipReason::MissingType)?;
    let xyz = props.get("XYZ").ok_or(SkipReason::MissingXyz)?;

    let coords: Vec<&str> = xyz.split_whitespace().collect();
    let &[x, y, z, orientation, ..] = coords.as_slice() else {
        return Err(SkipReason::ShortXyz);
    };
    let placement = Placement {
        map: props.get("MAP").unwrap_or(default_map),
        x,
        y,
        z,
        orientation,
    };

    let spawn = match (
        type_value,
        props.get("SPAWN"),
        props.get("SPAWN_GOBJ"),
        props.get("ENTRY"),
    ) {
        ("3", Some(spawn), _, _) => Spawn::Creature {
            entry: spawn.split_whitespace().next().ok_or(SkipReason::MissingEntry)?,
        },
        ("3", None, Some(gobj_entry), _) => Spawn::Gameobject {
            entry: gobj_entry,
            rotation: IDENTITY_ROTATION,
        },
        ("5", _, _, Some(entry)) => Spawn::Gameobject {
            entry,
            rotation: rotation_of(props),
        },
        ("3", None, None, _) | ("5", _, _, None) => return Err(SkipReason::MissingEntry),
        _ => return Err(SkipReason::UnknownType),
    };

    Ok((placement, spawn))
}

/// First four `ROTATION` tokens, or the identity quaternion.
fn rotation_of(props: &PropertyMap) -> [&str; 4] {
    let tokens: Vec<&str> = props
        .get("ROTATION")
        .map(|r| r.split_whitespace().collect())
        .unwrap_or_default();
    match tokens.as_slice() {
        &[r0, r1, r2, r3, ..] => [r0, r1, r2, r3],
        _ => IDENTITY_ROTATION,
    }
}

fn is_number(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn validate(placement: &Placement<'_>, spawn: &Spawn<'_>) -> Result<(), SkipReason> {
    let positions = [placement.x, placement.y, placement.z, placement.orientation];
    let map_ok = placement.map.parse::<u32>().is_ok();
    let rotation_ok = match spawn {
        Spawn::Creature { .. } => true,
        Spawn::Gameobject { rotation, .. } => rotation.iter().all(|r| is_number(r)),
    };
    if map_ok && rotation_ok && positions.iter().all(|p| is_number(p)) {
        Ok(())
    } else {
        Err(SkipReason::InvalidNumber)
    }
}

/// Outcome of feeding one block to the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    Creature { guid: u64 },
    Gameobject { guid: u64 },
    Skipped(SkipReason),
}

/// Collects records in input order and owns the two guid counters.
#[derive(Debug, Clone)]
pub struct Emitter {
    config: ConverterConfig,
    creature_guid: GuidCounter,
    gameobject_guid: GuidCounter,
    creatures: Vec<CreatureRecord>,
    gameobjects: Vec<GameobjectRecord>,
    blocks_seen: usize,
    skipped: usize,
}

impl Emitter {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            config: config.clone(),
            creature_guid: GuidCounter::new(config.starting_guid),
            gameobject_guid: GuidCounter::new(config.starting_guid),
            creatures: Vec::new(),
            gameobjects: Vec::new(),
            blocks_seen: 0,
            skipped: 0,
        }
    }

    /// Classify one block and append the resulting record, if any.
    pub fn process(&mut self, props: &PropertyMap) -> Emitted {
        self.blocks_seen += 1;

        let classified = classify(props, &self.config.default_map).and_then(|(placement, spawn)| {
            if self.config.validate_numbers {
                validate(&placement, &spawn)?;
            }
            Ok((placement, spawn))
        });

        let (placement, spawn) = match classified {
            Ok(parts) => parts,
            Err(reason) => {
                self.skipped += 1;
                tracing::debug!("Skipping block {}: {}", self.blocks_seen, reason);
                return Emitted::Skipped(reason);
            }
        };

        let spawn_time = self.config.spawn_time_secs.clone();
        match spawn {
            Spawn::Creature { entry } => {
                let guid = self.creature_guid.next();
                tracing::trace!("Creature {} (entry {}) from block {}", guid, entry, self.blocks_seen);
                self.creatures.push(CreatureRecord {
                    guid,
                    id: entry.to_string(),
                    map: placement.map.to_string(),
                    position_x: placement.x.to_string(),
                    position_y: placement.y.to_string(),
                    position_z: placement.z.to_string(),
                    orientation: placement.orientation.to_string(),
                    spawntimesecsmin: spawn_time.clone(),
                    spawntimesecsmax: spawn_time,
                    wander_distance: self.config.wander_distance.clone(),
                    health_percent: self.config.health_percent.clone(),
                });
                Emitted::Creature { guid }
            }
            Spawn::Gameobject { entry, rotation } => {
                let guid = self.gameobject_guid.next();
                tracing::trace!("Gameobject {} (entry {}) from block {}", guid, entry, self.blocks_seen);
                self.gameobjects.push(GameobjectRecord {
                    guid,
                    id: entry.to_string(),
                    map: placement.map.to_string(),
                    position_x: placement.x.to_string(),
                    position_y: placement.y.to_string(),
                    position_z: placement.z.to_string(),
                    orientation: placement.orientation.to_string(),
                    rotation: rotation.map(String::from),
                    spawntimesecsmin: spawn_time.clone(),
                    spawntimesecsmax: spawn_time,
                });
                Emitted::Gameobject { guid }
            }
        }
    }

    pub fn creatures(&self) -> &[CreatureRecord] {
        &self.creatures
    }

    pub fn gameobjects(&self) -> &[GameobjectRecord] {
        &self.gameobjects
    }

    pub fn blocks_seen(&self) -> usize {
        self.blocks_seen
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
