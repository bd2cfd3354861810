use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::{BlueprintError, BlueprintResult, GameVersion, ItemKind, ModuleMatrix};

// Placement config
//------------------------------------------------------------------------------

/// Item placed on dark modules and the spacing multiplier between entities.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PlacementConfig {
    item: ItemKind,
    scale: f64,
}

impl PlacementConfig {
    pub fn new(item: ItemKind, scale: f64) -> BlueprintResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(BlueprintError::InvalidScale);
        }
        Ok(Self { item, scale })
    }

    pub fn item(&self) -> ItemKind {
        self.item
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { item: ItemKind::Lamp, scale: 1.0 }
    }
}

// Blueprint document
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blueprint {
    icons: Vec<Icon>,
    entities: Vec<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tiles: Option<Vec<Tile>>,
    item: &'static str,
    version: u64,
}

// Import envelope expected by the game
#[derive(Serialize)]
pub(crate) struct Envelope<'a> {
    pub blueprint: &'a Blueprint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub signal: Signal,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position<T> {
    pub x: T,
    pub y: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub entity_number: u32,
    pub name: &'static str,
    pub position: Position<f64>,
    #[serde(flatten)]
    pub behavior: Behavior,
}

/// Extra fields an entity carries on top of its number, name and position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Behavior {
    Lamp { control_behavior: ControlBehavior, connections: BTreeMap<&'static str, Wires> },
    Belt { direction: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlBehavior {
    pub circuit_condition: CircuitCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitCondition {
    pub first_signal: Signal,
    pub constant: i32,
    pub comparator: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Wires {
    pub red: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub name: &'static str,
    pub position: Position<i64>,
}

// Lamp lit whenever any signal is above 1, wired to nothing, so always on
fn always_on_lamp() -> Behavior {
    Behavior::Lamp {
        control_behavior: ControlBehavior {
            circuit_condition: CircuitCondition {
                first_signal: Signal { kind: "virtual", name: "signal-anything" },
                constant: 1,
                comparator: ">",
            },
        },
        connections: BTreeMap::from([("1", Wires::default())]),
    }
}

// Placement
//------------------------------------------------------------------------------

enum Placement {
    Entity(Behavior),
    Tile,
}

impl ItemKind {
    fn placement(self) -> Placement {
        match self {
            Self::Lamp => Placement::Entity(always_on_lamp()),
            Self::Belt => Placement::Entity(Behavior::Belt { direction: BELT_DIRECTION_NORTH }),
            Self::Concrete | Self::Landfill => Placement::Tile,
        }
    }
}

impl Blueprint {
    /// Places one item per dark module, scanning rows top to bottom.
    ///
    /// Entities sit in the middle of their game tile, at `(x * scale + 0.5, y * scale + 0.5)`,
    /// and are numbered from 1 in scan order. Tiles take the module coordinates as is and
    /// ignore the scale.
    pub fn from_matrix(matrix: &ModuleMatrix, config: &PlacementConfig, version: GameVersion) -> Self {
        let item = config.item();
        let scale = config.scale();

        let mut entities = Vec::new();
        let mut tiles = Vec::new();
        let placement = item.placement();
        for (x, y) in matrix.dark_cells() {
            match &placement {
                Placement::Entity(behavior) => entities.push(Entity {
                    entity_number: entities.len() as u32 + 1,
                    name: item.name(),
                    position: Position { x: x as f64 * scale + 0.5, y: y as f64 * scale + 0.5 },
                    behavior: behavior.clone(),
                }),
                Placement::Tile => tiles.push(Tile {
                    name: item.name(),
                    position: Position { x: x as i64, y: y as i64 },
                }),
            }
        }

        Self {
            icons: vec![Icon { signal: Signal { kind: "item", name: item.name() }, index: 1 }],
            entities,
            tiles: item.is_tile().then_some(tiles),
            item: "blueprint",
            version: version.raw(),
        }
    }

    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn tiles(&self) -> &[Tile] {
        self.tiles.as_deref().unwrap_or_default()
    }

    pub fn version(&self) -> GameVersion {
        GameVersion::from_raw(self.version)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().len()
    }

    /// Entities and tiles together.
    pub fn placed_count(&self) -> usize {
        self.entity_count() + self.tile_count()
    }
}

// Global constants
//------------------------------------------------------------------------------

pub const BELT_DIRECTION_NORTH: u8 = 2;
