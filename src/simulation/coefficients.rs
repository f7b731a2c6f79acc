//! Categorical rig choices and their physical coefficients
//!
//! Sail shape, sail material and hull material are closed enums; each
//! maps to fixed numeric coefficients through exhaustive matches. The
//! tables are part of the model and must not drift
//!
//! Labels are accepted in two forms: snake_case via serde (scenario
//! files) and via [`FromStr`] (command-line overrides). Anything else
//! fails with [`SimError::InvalidSelection`]

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::simulation::error::SimError;

/// Planform of the single sail
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SailShape {
    #[serde(rename = "inverted_triangle")] // Austronesian crab-claw rig
    InvertedTriangle,

    #[serde(rename = "square")] // old European square rig
    Square,

    #[serde(rename = "rectangle")] // tall narrow rig
    Rectangle,

    #[serde(rename = "right_triangle")] // modern bermuda-style rig
    RightTriangle,
}

/// Weave the sail is cut from
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SailMaterial {
    #[serde(rename = "woven_pandanus")] // traditional leaf weave, porous
    WovenPandanus,

    #[serde(rename = "cotton_canvas")]
    CottonCanvas,

    #[serde(rename = "modern_nylon")] // airtight, highest efficiency
    ModernNylon,
}

/// Hull construction material, carried for its named density
/// Density does not enter the force/torque math; it is a reserved input
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullMaterial {
    #[serde(rename = "balsa")]
    Balsa,

    #[serde(rename = "taiwan_cedar")]
    TaiwanCedar,

    #[serde(rename = "camphor")]
    Camphor,

    #[serde(rename = "bamboo_composite")]
    BambooComposite,

    #[serde(rename = "fiberglass")]
    Fiberglass,
}

/// Coefficients derived from the categorical choices
///
/// - `material_efficiency` multiplies the dynamic wind pressure
/// - `lever_arm_coeff` scales the approximate sail height into the
///   center-of-effort height
/// - `shape_lift_eff` / `shape_drag_coeff` scale the forward and side
///   components of the decomposed force
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    pub material_efficiency: f64,
    pub lever_arm_coeff: f64,
    pub shape_lift_eff: f64,
    pub shape_drag_coeff: f64,
}

/// Map (shape, material) to the fixed coefficient tables
/// Pure and total over the enum domains
pub fn resolve(shape: SailShape, material: SailMaterial) -> CoefficientSet {
    let material_efficiency = match material {
        SailMaterial::WovenPandanus => 0.85,
        SailMaterial::CottonCanvas => 1.0,
        SailMaterial::ModernNylon => 1.15,
    };

    let (lever_arm_coeff, shape_lift_eff, shape_drag_coeff) = match shape {
        SailShape::InvertedTriangle => (0.4, 1.2, 0.8),
        SailShape::Square => (0.5, 1.0, 1.0),
        SailShape::Rectangle => (0.6, 0.9, 1.1),
        SailShape::RightTriangle => (0.45, 1.3, 0.6),
    };

    CoefficientSet {
        material_efficiency,
        lever_arm_coeff,
        shape_lift_eff,
        shape_drag_coeff,
    }
}

impl HullMaterial {
    /// Named density in kg/m^3
    pub fn density(&self) -> f64 {
        match self {
            HullMaterial::Balsa => 150.0,
            HullMaterial::TaiwanCedar => 450.0,
            HullMaterial::Camphor => 550.0,
            HullMaterial::BambooComposite => 600.0,
            HullMaterial::Fiberglass => 1500.0,
        }
    }
}

// =========================================================================================
// Labels: FromStr for CLI overrides, Display for the report / HUD
// =========================================================================================

impl FromStr for SailShape {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inverted_triangle" => Ok(SailShape::InvertedTriangle),
            "square" => Ok(SailShape::Square),
            "rectangle" => Ok(SailShape::Rectangle),
            "right_triangle" => Ok(SailShape::RightTriangle),
            other => Err(SimError::InvalidSelection {
                label: other.to_string(),
                kind: "sail shape",
            }),
        }
    }
}

impl FromStr for SailMaterial {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "woven_pandanus" => Ok(SailMaterial::WovenPandanus),
            "cotton_canvas" => Ok(SailMaterial::CottonCanvas),
            "modern_nylon" => Ok(SailMaterial::ModernNylon),
            other => Err(SimError::InvalidSelection {
                label: other.to_string(),
                kind: "sail material",
            }),
        }
    }
}

impl FromStr for HullMaterial {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balsa" => Ok(HullMaterial::Balsa),
            "taiwan_cedar" => Ok(HullMaterial::TaiwanCedar),
            "camphor" => Ok(HullMaterial::Camphor),
            "bamboo_composite" => Ok(HullMaterial::BambooComposite),
            "fiberglass" => Ok(HullMaterial::Fiberglass),
            other => Err(SimError::InvalidSelection {
                label: other.to_string(),
                kind: "hull material",
            }),
        }
    }
}

impl fmt::Display for SailShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SailShape::InvertedTriangle => "inverted triangle (crab-claw)",
            SailShape::Square => "square",
            SailShape::Rectangle => "rectangle (tall)",
            SailShape::RightTriangle => "right triangle (modern)",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for SailMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SailMaterial::WovenPandanus => "woven pandanus",
            SailMaterial::CottonCanvas => "cotton canvas",
            SailMaterial::ModernNylon => "modern nylon",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for HullMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HullMaterial::Balsa => "balsa",
            HullMaterial::TaiwanCedar => "taiwan cedar",
            HullMaterial::Camphor => "camphor",
            HullMaterial::BambooComposite => "bamboo composite",
            HullMaterial::Fiberglass => "fiberglass",
        };
        write!(f, "{label}")
    }
}
