mod blueprint;
mod encode;

pub use blueprint::{
    Behavior, Blueprint, CircuitCondition, ControlBehavior, Entity, Icon, PlacementConfig,
    Position, Signal, Tile, Wires, BELT_DIRECTION_NORTH,
};
pub use encode::{encode, BLUEPRINT_STRING_PREFIX};

use qrcode::QrCode;
use tracing::debug;

use crate::common::{
    BlueprintError, BlueprintResult, ECLevel, GameVersion, ItemKind, ModuleMatrix,
    BLUEPRINT_VERSION,
};
use crate::reader::extract;

// Blueprint builder
//------------------------------------------------------------------------------

/// Text to QR code to blueprint string, in one go.
pub struct BlueprintBuilder<'a> {
    text: &'a str,
    ec_level: ECLevel,
    item: ItemKind,
    scale: f64,
    version: GameVersion,
}

impl<'a> BlueprintBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            ec_level: ECLevel::M,
            item: ItemKind::Lamp,
            scale: 1.0,
            version: BLUEPRINT_VERSION,
        }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn item(&mut self, item: ItemKind) -> &mut Self {
        self.item = item;
        self
    }

    pub fn scale(&mut self, scale: f64) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn version(&mut self, version: GameVersion) -> &mut Self {
        self.version = version;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Ec level: {:?}, Item: {}, Scale: {}, Version: {} }}",
            self.ec_level, self.item, self.scale, self.version
        )
    }
}


// Output
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlueprintStats {
    /// Modules per side of the QR code.
    pub side: usize,
    pub entities: usize,
    pub tiles: usize,
}

#[derive(Debug, Clone)]
pub struct QrBlueprint {
    matrix: ModuleMatrix,
    blueprint: Blueprint,
    encoded: String,
}

impl QrBlueprint {
    pub fn matrix(&self) -> &ModuleMatrix {
        &self.matrix
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Blueprint string ready to be pasted into the game.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn into_string(self) -> String {
        self.encoded
    }

    pub fn stats(&self) -> BlueprintStats {
        BlueprintStats {
            side: self.matrix.side(),
            entities: self.blueprint.entity_count(),
            tiles: self.blueprint.tile_count(),
        }
    }
}

impl BlueprintBuilder<'_> {
    pub fn build(&self) -> BlueprintResult<QrBlueprint> {
        debug!("Generating blueprint {}", self.metadata());

        let text = self.text.trim();
        if text.is_empty() {
            return Err(BlueprintError::EmptyData);
        }
        let config = PlacementConfig::new(self.item, self.scale)?;

        debug!("Generating QR...");
        let qr = QrCode::with_error_correction_level(text.as_bytes(), self.ec_level.into())?;

        let matrix = extract(&qr);
        debug!(side = matrix.side(), dark = matrix.count_dark(), "Extracted module matrix");

        let blueprint = Blueprint::from_matrix(&matrix, &config, self.version);
        let encoded = blueprint.to_blueprint_string()?;

        Ok(QrBlueprint { matrix, blueprint, encoded })
    }
}
