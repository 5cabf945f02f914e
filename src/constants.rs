//! Grid limits and cell index bit layout constants.

/// Maximum grid resolution; the grid has 16 resolutions, numbered 0 through 15.
pub const MAX_GRID_RES: i32 = 15;
/// The number of resolution 0 base cells tiling the icosahedron.
pub const NUM_BASE_CELLS: i32 = 122;
/// The number of icosahedron faces.
pub const NUM_ICOSA_FACES: i32 = 20;
/// The number of pentagon base cells (and pentagons per resolution).
pub const NUM_PENTAGONS: i32 = 12;

// Cell index bit layout (as u64 for direct use in bitwise ops)

/// The bit offset of the mode field in a cell index.
pub const MODE_OFFSET: u8 = 59;
/// The bit offset of the mode-dependent field in a cell index.
pub const MODE_DEPENDENT_OFFSET: u8 = 56;
/// The bit offset of the resolution field in a cell index.
pub const RES_OFFSET: u8 = 52;
/// The bit offset of the base cell field in a cell index.
pub const BASE_CELL_OFFSET: u8 = 45;
/// The number of bits in a single resolution digit.
pub const PER_DIGIT_OFFSET: u8 = 3;

/// 1 in the highest bit, 0's everywhere else.
pub const HIGH_BIT_MASK: u64 = 1u64 << 63;
/// 0 in the highest bit, 1's everywhere else.
pub const HIGH_BIT_MASK_NEGATIVE: u64 = !HIGH_BIT_MASK;
/// 1's in the 4 mode bits, 0's everywhere else.
pub const MODE_MASK: u64 = 0b1111u64 << MODE_OFFSET;
/// 0's in the 4 mode bits, 1's everywhere else.
pub const MODE_MASK_NEGATIVE: u64 = !MODE_MASK;
/// 1's in the 3 mode-dependent bits, 0's everywhere else.
pub const MODE_DEPENDENT_MASK: u64 = 0b111u64 << MODE_DEPENDENT_OFFSET;
/// 0's in the 3 mode-dependent bits, 1's everywhere else.
pub const MODE_DEPENDENT_MASK_NEGATIVE: u64 = !MODE_DEPENDENT_MASK;
/// 1's in the 4 resolution bits, 0's everywhere else.
pub const RES_MASK: u64 = 0b1111u64 << RES_OFFSET;
/// 0's in the 4 resolution bits, 1's everywhere else.
pub const RES_MASK_NEGATIVE: u64 = !RES_MASK;
/// 1's in the 7 base cell bits, 0's everywhere else.
pub const BASE_CELL_MASK: u64 = 0b111_1111u64 << BASE_CELL_OFFSET;
/// 0's in the 7 base cell bits, 1's everywhere else.
pub const BASE_CELL_MASK_NEGATIVE: u64 = !BASE_CELL_MASK;
/// 1's in the 3 bits of a single resolution digit.
pub const DIGIT_MASK: u64 = 0b111u64;

/// Mode for cell indexes. The only mode this crate produces.
pub const CELL_MODE: u8 = 1;

/// Cell index with mode 0, res 0, base cell 0, and all 15 digit slots set to
/// the invalid sentinel (7). Used to initialize the construction of an index;
/// the low 45 digit bits are all 1's.
pub const CELL_INIT: u64 = (1u64 << (15 * PER_DIGIT_OFFSET as u32)) - 1;
