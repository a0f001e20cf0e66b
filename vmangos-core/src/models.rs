//! Data models for converted world spawns.

/// Sequential guid source. Each call to [`GuidCounter::next`] hands out the
/// current value and advances by one.
#[derive(Debug, Clone)]
pub struct GuidCounter {
    next: u64,
}

impl GuidCounter {
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }
}

/// Row for the `creature` table. Everything except the guid is copied
/// verbatim from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureRecord {
    pub guid: u64,
    pub id: String,
    pub map: String,
    pub position_x: String,
    pub position_y: String,
    pub position_z: String,
    pub orientation: String,
    pub spawntimesecsmin: String,
    pub spawntimesecsmax: String,
    pub wander_distance: String,
    pub health_percent: String,
}

/// Row for the `gameobject` table.
#[derive(Debug, Clone, PartialEq)]
pub struct GameobjectRecord {
    pub guid: u64,
    pub id: String,
    pub map: String,
    pub position_x: String,
    pub position_y: String,
    pub position_z: String,
    pub orientation: String,
    pub rotation: [String; 4],
    pub spawntimesecsmin: String,
    pub spawntimesecsmax: String,
}

impl CreatureRecord {
    pub const COLUMNS: &'static str = "(`guid`, `id`, `map`, `position_x`, `position_y`, `position_z`, `orientation`, `spawntimesecsmin`, `spawntimesecsmax`, `wander_distance`, `health_percent`)";

    /// Parenthesized value tuple in column order, without a trailing separator.
    pub fn values_row(&self) -> String {
        format!(
            "({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {})",
            self.guid,
            self.id,
            self.map,
            self.position_x,
            self.position_y,
            self.position_z,
            self.orientation,
            self.spawntimesecsmin,
            self.spawntimesecsmax,
            self.wander_distance,
            self.health_percent
        )
    }
}

impl GameobjectRecord {
    pub const COLUMNS: &'static str = "(`guid`, `id`, `map`, `position_x`, `position_y`, `position_z`, `orientation`, `rotation0`, `rotation1`, `rotation2`, `rotation3`, `spawntimesecsmin`, `spawntimesecsmax`)";

    pub fn values_row(&self) -> String {
        let [r0, r1, r2, r3] = &self.rotation;
        format!(
            "({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {})",
            self.guid,
            self.id,
            self.map,
            self.position_x,
            self.position_y,
            self.position_z,
            self.orientation,
            r0,
            r1,
            r2,
            r3,
            self.spawntimesecsmin,
            self.spawntimesecsmax
        )
    }
}

/// Result of one `convert_file` run.
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    pub output_path: std::path::PathBuf,
    pub blocks_seen: usize,
    pub creatures: usize,
    pub gameobjects: usize,
    pub skipped: usize,
}
