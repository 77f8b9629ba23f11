//! Parameter types configuring the filter passes.
//!
//! Defaults match the high-quality preset. For tuning, start with the edge
//! threshold and the orthogonal search range; the remaining knobs trade
//! small quality gains for extra per-pixel work.

use serde::{Deserialize, Serialize};

/// Base configuration presets, from cheapest to most thorough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Low,
    Medium,
    High,
    Ultra,
    Extreme,
}

impl Preset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "low" => Some(Preset::Low),
            "medium" => Some(Preset::Medium),
            "high" => Some(Preset::High),
            "ultra" => Some(Preset::Ultra),
            "extreme" => Some(Preset::Extreme),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Low => "low",
            Preset::Medium => "medium",
            Preset::High => "high",
            Preset::Ultra => "ultra",
            Preset::Extreme => "extreme",
        }
    }
}

/// Which signal the first pass thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDetectionMode {
    /// Rec.709 luma deltas.
    Luma,
    /// Max per-channel color deltas.
    Color,
    /// Single-channel depth deltas (no contrast adaptation).
    Depth,
}

impl EdgeDetectionMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "luma" => Some(EdgeDetectionMode::Luma),
            "color" => Some(EdgeDetectionMode::Color),
            "depth" => Some(EdgeDetectionMode::Depth),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EdgeDetectionMode::Luma => "luma",
            EdgeDetectionMode::Color => "color",
            EdgeDetectionMode::Depth => "depth",
        }
    }
}

/// Filter-wide parameters controlling all three passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmaaOptions {
    /// Edge-detection sensitivity for luma/color deltas. Range [0, 0.5];
    /// 0.1 catches most visible edges, 0.05 catches nearly all of them.
    pub threshold: f32,
    /// Edge-detection sensitivity for depth deltas; scene-dependent.
    pub depth_threshold: f32,
    /// Maximum steps of the horizontal/vertical line-end searches, per side.
    /// Range [0, 362]; 0 disables the orthogonal weight path.
    pub max_search_steps: usize,
    /// Maximum steps of the diagonal line-end searches, per side.
    /// Range [0, 19]; 0 disables the diagonal path.
    pub max_search_steps_diag: usize,
    /// How much sharp corners are rounded, in percent. Range [0, 100].
    pub corner_rounding: u32,
    /// An edge is discarded when a direct neighbor shows contrast this many
    /// times stronger. Must be >= 1.
    pub local_contrast_adaptation_factor: f32,
    /// Search for diagonal patterns before orthogonal ones.
    pub enable_diag_detection: bool,
    /// Attenuate blending around 90-degree corners.
    pub enable_corner_detection: bool,
    /// Modulate the threshold from a companion (predication) image.
    pub enable_predication: bool,
    /// Threshold applied to the predication image's first channel.
    pub predication_threshold: f32,
    /// Global threshold multiplier while predication is active. Range [1, 5].
    pub predication_scale: f32,
    /// Local threshold reduction where the predication image has an edge.
    /// Range [0, 1].
    pub predication_strength: f32,
}

impl SmaaOptions {
    /// Option set for a preset.
    pub fn from_preset(preset: Preset) -> Self {
        let base = Self {
            threshold: 0.1,
            depth_threshold: 0.1,
            max_search_steps: 16,
            max_search_steps_diag: 8,
            corner_rounding: 25,
            local_contrast_adaptation_factor: 2.0,
            enable_diag_detection: true,
            enable_corner_detection: true,
            enable_predication: false,
            predication_threshold: 0.01,
            predication_scale: 2.0,
            predication_strength: 0.4,
        };
        match preset {
            Preset::Low => Self {
                threshold: 0.15,
                max_search_steps: 4,
                enable_diag_detection: false,
                enable_corner_detection: false,
                ..base
            },
            Preset::Medium => Self {
                threshold: 0.1,
                max_search_steps: 8,
                enable_diag_detection: false,
                enable_corner_detection: false,
                ..base
            },
            Preset::High => base,
            Preset::Ultra => Self {
                threshold: 0.05,
                max_search_steps: 32,
                max_search_steps_diag: 16,
                ..base
            },
            Preset::Extreme => Self {
                threshold: 0.05,
                max_search_steps: 104,
                max_search_steps_diag: 18,
                ..base
            },
        }
    }
}

impl Default for SmaaOptions {
    fn default() -> Self {
        Self::from_preset(Preset::High)
    }
}
