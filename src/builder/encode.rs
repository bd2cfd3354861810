use std::io::Write;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use flate2::{write::ZlibEncoder, Compression};
use tracing::{debug, error};

use super::blueprint::{Blueprint, Envelope, PlacementConfig};
use crate::common::{BlueprintError, BlueprintResult, ModuleMatrix, BLUEPRINT_VERSION};

/// Leading character of every blueprint string, the format version of the string itself.
pub const BLUEPRINT_STRING_PREFIX: char = '0';

/// Turns a module matrix into a blueprint string the game can import.
///
/// Never fails: if serialization or compression goes wrong the error is logged and an
/// empty string is returned.
pub fn encode(matrix: &ModuleMatrix, config: &PlacementConfig) -> String {
    let blueprint = Blueprint::from_matrix(matrix, config, BLUEPRINT_VERSION);
    blueprint.to_blueprint_string().unwrap_or_else(|e| {
        error!("Blueprint encoding failed: {e}");
        String::new()
    })
}

impl Blueprint {
    pub fn to_json(&self) -> BlueprintResult<String> {
        // serde_json writes non-finite floats as null
        if let Some(e) = self
            .entities()
            .iter()
            .find(|e| !e.position.x.is_finite() || !e.position.y.is_finite())
        {
            debug!("Entity {} has a non-finite position", e.entity_number);
            return Err(BlueprintError::Serialization);
        }
        serde_json::to_string(&Envelope { blueprint: self }).map_err(|e| {
            debug!("Failed to serialize blueprint: {e}");
            BlueprintError::Serialization
        })
    }

    /// `'0'` followed by the Base64 of the zlib compressed JSON document.
    pub fn to_blueprint_string(&self) -> BlueprintResult<String> {
        let json = self.to_json()?;
        let compressed = compress(json.as_bytes()).map_err(|e| {
            debug!("Failed to compress blueprint: {e}");
            BlueprintError::Compression
        })?;
        debug!(json_len = json.len(), compressed_len = compressed.len(), "Compressed blueprint");

        let mut res = String::with_capacity(1 + compressed.len().div_ceil(3) * 4);
        res.push(BLUEPRINT_STRING_PREFIX);
        BASE64_STANDARD.encode_string(&compressed, &mut res);
        Ok(res)
    }
}

fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    encoder.finish()
}
