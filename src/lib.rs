//! # qrblueprint
//!
//! Turns text into a QR code, and the QR code into a Factorio blueprint string that places
//! one lamp, belt, concrete or landfill tile on every dark module.
//!
//! ## Features
//!
//! - **Blueprint encoding**: Module grid to `'0' + Base64(zlib(JSON))`, the game's import format
//! - **Four item kinds**: Always-on lamps, north facing belts, concrete and landfill tiles
//! - **Spacing**: Entities can be spread apart with a scale factor
//! - **Matrix extraction**: Read modules straight from a QR symbol, or sample them from a bitmap
//!
//! ## Quick Start
//!
//! ### From text
//!
//! ```rust
//! use qrblueprint::{BlueprintBuilder, ECLevel, ItemKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = BlueprintBuilder::new("https://factorio.com")
//!     .ec_level(ECLevel::M)      // Error correction level - defaults to ECLevel::M
//!     .item(ItemKind::Lamp)      // Item placed on dark modules - defaults to small lamps
//!     .scale(1.0)                // Spacing between entities - defaults to 1.0
//!     .build()?;
//!
//! assert!(qr.as_str().starts_with('0'));
//! println!("{}", qr.as_str());
//! # Ok(())
//! # }
//! ```
//!
//! ### From a module matrix
//!
//! ```rust
//! use qrblueprint::{encode, ItemKind, ModuleMatrix, PlacementConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = ModuleMatrix::new(vec![vec![false, true], vec![true, false]])?;
//! let config = PlacementConfig::new(ItemKind::Concrete, 1.0)?;
//!
//! let blueprint = encode(&matrix, &config);
//! assert!(blueprint.starts_with('0'));
//! # Ok(())
//! # }
//! ```
//!
//! ### From a rendered bitmap
//!
//! ```rust,no_run
//! use qrblueprint::{encode, reader::PixelSampler, PlacementConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("qr_code.png")?.to_rgb8();
//! let matrix = PixelSampler::new().module_count(25).sample(&img);
//! println!("{}", encode(&matrix, &PlacementConfig::default()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Item kinds
//!
//! - **small-lamp**: Entity, lit by a circuit condition that always holds
//! - **transport-belt**: Entity, facing north
//! - **concrete**, **landfill**: Tiles, placed on the module coordinates and never scaled

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
pub mod reader;

pub use builder::{encode, BlueprintBuilder, BlueprintStats, PlacementConfig, QrBlueprint};
pub use common::error::{BlueprintError, BlueprintResult};
pub use common::matrix::{ModuleMatrix, ModuleSource};
pub use common::metadata::{ECLevel, GameVersion, ItemKind, BLUEPRINT_VERSION};
