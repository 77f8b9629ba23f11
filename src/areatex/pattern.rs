//! Pattern enumeration, placement tables, and table sizing.
//!
//! A pattern index packs the two line-end styles as
//! `(left_end << 2) | right_end`. Each pattern owns a square block of
//! texels; the block position comes from the slot tables below, scaled by
//! the per-axis block size. Orthogonal end codes map onto slots
//! `{0, 1, 3, 4}` of a 5-slot axis (slot 2 stays empty), diagonal codes map
//! onto the 4 slots directly. The runtime lookup uses the same slot tables,
//! so these are part of the texture format.

/// Texels per orthogonal block edge. Texel `(l, r)` inside a block holds the
/// coverage for squared distances `(l², r²)`, matching the √-compressed
/// lookup.
pub const ORTHO_SIZE: usize = 16;

/// Texels per diagonal block edge (direct, uncompressed distances).
pub const DIAG_SIZE: usize = 20;

/// Width and per-slice height of both tables: `5·16 = 4·20 = 80`.
pub const AREATEX_SIZE: usize = 80;

/// Subsample slice counts when subpixel offsets are generated.
pub const ORTHO_SLICES: usize = 7;
pub const DIAG_SLICES: usize = 5;

/// Grid resolution of the brute-force coverage sampling for diagonals.
pub const SAMPLES_DIAG: usize = 30;

/// U-shapes shorter than this get their area softened toward a square-root
/// response.
pub const SMOOTH_MAX_DISTANCE: f64 = 32.0;

/// Block slot per orthogonal end code (none, negative, positive, both).
pub const ORTHO_SLOT: [usize; 4] = [0, 1, 3, 4];

/// Block slot per diagonal end code (none, vertical, horizontal, both).
pub const DIAG_SLOT: [usize; 4] = [0, 1, 2, 3];

/// Per-slice subsample offsets applied to the orthogonal line ends.
pub const SUBSAMPLE_OFFSETS_ORTHO: [f64; ORTHO_SLICES] =
    [0.0, -0.25, 0.25, -0.125, 0.125, -0.375, 0.375];

/// Per-slice subsample offsets applied to the diagonal line ends.
pub const SUBSAMPLE_OFFSETS_DIAG: [(f64, f64); DIAG_SLICES] = [
    (0.0, 0.0),
    (0.25, -0.25),
    (-0.25, 0.25),
    (0.125, -0.125),
    (-0.125, 0.125),
];

/// How an orthogonal edge run terminates: no crossing edge, a perpendicular
/// edge on the negative side, on the positive side, or on both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrthoEnd {
    None,
    Negative,
    Positive,
    Both,
}

impl OrthoEnd {
    pub fn from_code(code: usize) -> Self {
        match code & 3 {
            0 => OrthoEnd::None,
            1 => OrthoEnd::Negative,
            2 => OrthoEnd::Positive,
            _ => OrthoEnd::Both,
        }
    }
}

/// How a diagonal edge run terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagEnd {
    None,
    Vertical,
    Horizontal,
    Both,
}

impl DiagEnd {
    pub fn from_code(code: usize) -> Self {
        match code & 3 {
            0 => DiagEnd::None,
            1 => DiagEnd::Vertical,
            2 => DiagEnd::Horizontal,
            _ => DiagEnd::Both,
        }
    }
}

/// Split a pattern index into its (left, right) end codes.
#[inline]
pub fn end_codes(pattern: usize) -> (usize, usize) {
    (pattern >> 2, pattern & 3)
}

/// Texel origin of an orthogonal pattern block.
#[inline]
pub fn ortho_block(pattern: usize) -> (usize, usize) {
    let (left, right) = end_codes(pattern);
    (ORTHO_SLOT[left] * ORTHO_SIZE, ORTHO_SLOT[right] * ORTHO_SIZE)
}

/// Texel origin of a diagonal pattern block.
#[inline]
pub fn diag_block(pattern: usize) -> (usize, usize) {
    let (left, right) = end_codes(pattern);
    (DIAG_SLOT[left] * DIAG_SIZE, DIAG_SLOT[right] * DIAG_SIZE)
}
