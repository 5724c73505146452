//! Diffraction loss over the effective earth.
//!
//! Two closed-form models apply, selected by comparing path distance
//! to the combined radio horizon: a single knife edge at the worst
//! clearance point for paths near or within line of sight, and the
//! ITU-R P.526 smooth spherical earth model for paths beyond it.

use crate::{
    clearance::ClearanceProfile,
    config::LinkConfig,
    fresnel::fresnel,
    horizon::RadioHorizon,
    EFFECTIVE_EARTH_RADIUS_M,
};
use std::f64::consts::{PI, SQRT_2};

/// Which closed-form loss model applied to a path.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    /// Near or within radio line of sight; single knife edge over the
    /// worst clearance point.
    KnifeEdge {
        /// Fresnel-Kirchhoff diffraction parameter.
        v: f64,
    },

    /// Beyond the combined radio horizon; smooth spherical earth.
    SmoothEarth {
        /// Normalized path distance.
        x: f64,

        /// Normalized transmit antenna height.
        y1: f64,

        /// Normalized receive antenna height.
        y2: f64,
    },
}

/// Diffraction loss and the clearance geometry behind it.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diffraction {
    /// Diffraction loss (dB, never negative).
    pub loss_db: f64,

    /// Minimum line-of-sight clearance (m). Negative means the ray is
    /// geometrically obstructed by the earth bulge.
    pub min_clearance_m: f64,

    /// First Fresnel zone radius at the worst clearance point (m).
    pub fresnel_radius_m: f64,

    /// Distance from the transmitter to the worst clearance point (m).
    pub obstruction_distance_m: f64,

    /// The loss model the path selected.
    pub regime: Regime,
}

impl Diffraction {
    pub fn new(config: &LinkConfig) -> Self {
        let distance_m = config.distance_m();
        let wavelen = config.wavelength_m();

        let profile = ClearanceProfile::new(config);
        let (obstruction_distance_m, min_clearance_m) = profile.worst_point();
        let fresnel_radius_m = fresnel(1.0, wavelen, obstruction_distance_m, distance_m);

        let horizon = RadioHorizon::new(config.tx_height_m, config.rx_height_m);

        // Strictly beyond the combined horizon selects the smooth
        // earth model; a path exactly at the horizon is still treated
        // as a knife edge.
        let (regime, raw_loss) = if distance_m > horizon.total_m() {
            let x = normalized_distance(wavelen, distance_m);
            let hf = height_factor(wavelen);
            let y1 = 2.0 * config.tx_height_m * hf;
            let y2 = 2.0 * config.rx_height_m * hf;
            let loss = -distance_attenuation(x) - height_gain(y1) - height_gain(y2);
            (Regime::SmoothEarth { x, y1, y2 }, loss)
        } else {
            let v = fresnel_kirchhoff(min_clearance_m, fresnel_radius_m);
            (Regime::KnifeEdge { v }, knife_edge_loss(v))
        };

        Self {
            loss_db: raw_loss.max(0.0),
            min_clearance_m,
            fresnel_radius_m,
            obstruction_distance_m,
            regime,
        }
    }
}

/// Normalized path distance X for the smooth earth model.
fn normalized_distance(wavelen: f64, distance_m: f64) -> f64 {
    let re = EFFECTIVE_EARTH_RADIUS_M;
    distance_m * (PI / (wavelen * re * re)).cbrt()
}

/// Antenna height normalization factor for the smooth earth model.
fn height_factor(wavelen: f64) -> f64 {
    (PI * PI / (wavelen * wavelen * EFFECTIVE_EARTH_RADIUS_M)).cbrt()
}

/// Distance attenuation term F(X). The deep-shadow formula only holds
/// for X >= 1.6; below that, ramp linearly from 0 at X = 0 to the
/// boundary value so the two arms meet without a jump.
fn distance_attenuation(x: f64) -> f64 {
    const BOUNDARY: f64 = 1.6;
    if x >= BOUNDARY {
        11.0 + 10.0 * x.log10() - 17.6 * x
    } else {
        let at_boundary = 11.0 + 10.0 * BOUNDARY.log10() - 17.6 * BOUNDARY;
        at_boundary * (x / BOUNDARY)
    }
}

/// Height gain term G(Y). An antenna at or below the tangent
/// reference (Y <= 0) contributes a flat -100 dB penalty.
fn height_gain(y: f64) -> f64 {
    if y > 2.0 {
        17.6 * (y - 1.1).sqrt() - 5.0 * (y - 1.1).log10() - 8.0
    } else if y > 0.0 {
        20.0 * (y + 0.1 * y.powi(3)).log10()
    } else {
        -100.0
    }
}

/// Fresnel-Kirchhoff parameter for the worst clearance point. A clear
/// path (positive clearance) maps to negative v. A zero Fresnel
/// radius means degenerate geometry, treated as fully unobstructed.
fn fresnel_kirchhoff(clearance_m: f64, fresnel_radius_m: f64) -> f64 {
    if fresnel_radius_m == 0.0 {
        -100.0
    } else {
        -clearance_m * SQRT_2 / fresnel_radius_m
    }
}

/// ITU-R P.526 single knife edge approximation, valid for v > -0.7.
fn knife_edge_loss(v: f64) -> f64 {
    if v > -0.7 {
        6.9 + 20.0 * (((v - 0.1) * (v - 0.1) + 1.0).sqrt() + v - 0.1).log10()
    } else {
        0.0
    }
}
