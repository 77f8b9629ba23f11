//! Area lookup tables for the blending-weight pass.
//!
//! A detected edge run is classified by its two line-end styles into one of
//! 16 patterns; the per-pattern pixel coverage as a function of the two
//! distances to the line ends is precomputed here, once for orthogonal runs
//! (analytic trapezoid/triangle integrals) and once for diagonal runs
//! (brute-force sampling).
//!
//! Components
//! - `pattern`: pattern enumeration, block-placement tables, subsample
//!   offsets, and sizing constants. The placement tables are load-bearing:
//!   the runtime addresses the texture by block position, so they must not
//!   change.
//! - `ortho`: analytic coverage for horizontal/vertical patterns.
//! - `diagonal`: sampled coverage for diagonal patterns.
//! - `tables`: table construction ([`AreaTexData`]) and the runtime lookup
//!   view ([`AreaTables`]).
//! - `export`: C-source and TGA writers used by the `smaa_areatex` binary.

pub mod diagonal;
pub mod export;
pub mod ortho;
pub mod pattern;
pub mod tables;

pub use self::pattern::{
    DiagEnd, OrthoEnd, AREATEX_SIZE, DIAG_SIZE, DIAG_SLICES, DIAG_SLOT, ORTHO_SIZE, ORTHO_SLICES,
    ORTHO_SLOT,
};
pub use self::tables::{AreaTables, AreaTexData};
