use std::{fmt::Display, str::FromStr};

use super::error::{BlueprintError, BlueprintResult};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    #[default]
    M = 1,
    Q = 2,
    H = 3,
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => qrcode::EcLevel::L,
            ECLevel::M => qrcode::EcLevel::M,
            ECLevel::Q => qrcode::EcLevel::Q,
            ECLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ECLevel {
    type Err = BlueprintError;

    fn from_str(s: &str) -> BlueprintResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(BlueprintError::InvalidECLevel),
        }
    }
}

// Item kind
//------------------------------------------------------------------------------

/// Game object placed on every dark module.
///
/// Lamps and belts are entities and get a sequential `entity_number` in the
/// blueprint. Concrete and landfill are tiles, addressed by position only.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ItemKind {
    #[default]
    Lamp,
    Belt,
    Concrete,
    Landfill,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [Self::Lamp, Self::Belt, Self::Concrete, Self::Landfill];

    /// Prototype name used by the game for both the entity/tile and its icon.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lamp => "small-lamp",
            Self::Belt => "transport-belt",
            Self::Concrete => "concrete",
            Self::Landfill => "landfill",
        }
    }

    pub const fn is_tile(self) -> bool {
        matches!(self, Self::Concrete | Self::Landfill)
    }

    pub const fn is_entity(self) -> bool {
        !self.is_tile()
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemKind {
    type Err = BlueprintError;

    fn from_str(s: &str) -> BlueprintResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small-lamp" | "lamp" => Ok(Self::Lamp),
            "transport-belt" | "belt" => Ok(Self::Belt),
            "concrete" => Ok(Self::Concrete),
            "landfill" => Ok(Self::Landfill),
            _ => Err(BlueprintError::InvalidItemKind),
        }
    }
}

// Blueprint version
//------------------------------------------------------------------------------

/// Game version stamped into a blueprint, packed as four 16 bit fields
/// `major.minor.patch.build` from the high word down.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct GameVersion(u64);

impl GameVersion {
    pub const fn new(major: u16, minor: u16, patch: u16, build: u16) -> Self {
        Self(((major as u64) << 48) | ((minor as u64) << 32) | ((patch as u64) << 16) | build as u64)
    }

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn parts(self) -> (u16, u16, u16, u16) {
        let v = self.0;
        ((v >> 48) as u16, (v >> 32) as u16, (v >> 16) as u16, v as u16)
    }
}

impl Default for GameVersion {
    fn default() -> Self {
        BLUEPRINT_VERSION
    }
}

impl Display for GameVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (major, minor, patch, build) = self.parts();
        write!(f, "{major}.{minor}.{patch}.{build}")
    }
}

// Global constants
//------------------------------------------------------------------------------

/// 1.1.61.0, accepted by every 1.1 and 2.0 importer.
pub const BLUEPRINT_VERSION: GameVersion = GameVersion::new(1, 1, 61, 0);

#[cfg(test)]
mod metadata_tests {
    use test_case::test_case;

    use super::{ECLevel, GameVersion, ItemKind, BLUEPRINT_VERSION};
    use crate::common::BlueprintError;

    #[test_case("small-lamp", ItemKind::Lamp; "lamp_id")]
    #[test_case("lamp", ItemKind::Lamp; "lamp_alias")]
    #[test_case("transport-belt", ItemKind::Belt; "belt_id")]
    #[test_case("Belt", ItemKind::Belt; "belt_alias")]
    #[test_case("concrete", ItemKind::Concrete; "concrete")]
    #[test_case(" landfill ", ItemKind::Landfill; "landfill")]
    fn test_item_kind_from_str(s: &str, exp: ItemKind) {
        assert_eq!(s.parse::<ItemKind>(), Ok(exp));
    }

    #[test]
    fn test_item_kind_invalid() {
        assert_eq!("stone-path".parse::<ItemKind>(), Err(BlueprintError::InvalidItemKind));
    }

    #[test]
    fn test_item_kind_round_trips_through_name() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.to_string().parse::<ItemKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_tile_kinds() {
        assert!(ItemKind::Lamp.is_entity());
        assert!(ItemKind::Belt.is_entity());
        assert!(ItemKind::Concrete.is_tile());
        assert!(ItemKind::Landfill.is_tile());
    }

    #[test]
    fn test_ec_level_from_str() {
        assert_eq!("q".parse::<ECLevel>(), Ok(ECLevel::Q));
        assert_eq!("X".parse::<ECLevel>(), Err(BlueprintError::InvalidECLevel));
        assert_eq!(ECLevel::default(), ECLevel::M);
    }

    #[test]
    fn test_blueprint_version() {
        assert_eq!(BLUEPRINT_VERSION.raw(), 281479275675648);
        assert_eq!(BLUEPRINT_VERSION.parts(), (1, 1, 61, 0));
        assert_eq!(BLUEPRINT_VERSION.to_string(), "1.1.61.0");
        assert_eq!(GameVersion::new(2, 0, 28, 0).raw(), 562949955256320);
    }
}
