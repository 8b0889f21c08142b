//! Fixture defaults and runtime configuration constants

// Map geometry defaults matching the historical fixture set
/// Total map extent in abstract units at the base resolution
pub const DEFAULT_MAP_SIZE: u64 = 262_144;

/// Extent of one tile at the base level, matching the source image extent
pub const DEFAULT_TILE_SIZE: u64 = 8_192;

/// Per-level tile extent growth factor for the centered layout
pub const DEFAULT_SCALE: u64 = 4;

// Output settings
/// Output directory root for generated pyramids
pub const DEFAULT_OUTPUT_ROOT: &str = "test_images";

/// File extension of materialized tiles
pub const TILE_EXTENSION: &str = "png";

/// Default filename of the source copied into even levels
pub const PRIMARY_SOURCE_NAME: &str = "tile_primary.png";

/// Default filename of the source copied into odd levels
pub const ALTERNATE_SOURCE_NAME: &str = "tile_alternate.png";

// Placeholder synthesis settings; pixel content is arbitrary, the two
// sources only need to be distinguishable
/// Pixel extent of synthesized placeholder sources
pub const PLACEHOLDER_EXTENT: u32 = 64;

/// Cell extent of the checkerboard within a synthesized primary placeholder
pub const PLACEHOLDER_CELL: u32 = 8;

/// Light checkerboard cells of the synthesized primary placeholder
pub const PLACEHOLDER_LIGHT_RGBA: [u8; 4] = [220, 220, 220, 255];

/// Dark checkerboard cells of the synthesized primary placeholder
pub const PLACEHOLDER_DARK_RGBA: [u8; 4] = [96, 96, 96, 255];

/// Fill colour of the synthesized alternate placeholder
pub const PLACEHOLDER_ALTERNATE_RGBA: [u8; 4] = [184, 64, 64, 255];
