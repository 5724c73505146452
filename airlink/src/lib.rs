//! # Ground-to-Air Link Budget
//!
//! `airlink` estimates the RF link budget between a ground station and
//! an aerial vehicle over 0–150 km paths, accounting for earth
//! curvature, diffraction, and thermal noise.

mod budget;
mod clearance;
mod config;
mod diffraction;
mod error;
pub mod fresnel;
mod geometry;
mod horizon;
mod math;
mod modulation;

pub use crate::{
    budget::{evaluate, fspl, noise_floor, Report},
    clearance::{ClearanceProfile, CLEARANCE_STEPS},
    config::{LinkConfig, LinkConfigBuilder},
    diffraction::{Diffraction, Regime},
    error::ConfigError,
    geometry::PathGeometry,
    horizon::{horizon_distance_m, RadioHorizon},
    modulation::Modulation,
};

/// Speed of light in m/s.
pub(crate) const C: f64 = 3.0e8;

/// Mean earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Standard 4/3 atmospheric refraction factor.
const K_FACTOR: f64 = 1.33;

/// Effective earth radius under the k-factor model, in meters. Ray
/// bending is folded into a larger sphere so rays can be treated as
/// straight lines.
pub(crate) const EFFECTIVE_EARTH_RADIUS_M: f64 = K_FACTOR * EARTH_RADIUS_M;
