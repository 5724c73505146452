use crate::{config::LinkConfig, fresnel::fresnel, math::linspace, EFFECTIVE_EARTH_RADIUS_M};

/// Path-slice geometry for presentation layers: earth bulge,
/// line-of-sight ray, and first Fresnel zone bounds, all in height
/// relative to the chord connecting the terminal base points.
///
/// Built from the same formulas as the clearance sampler, so at the
/// same resolution its implied worst point matches the scalar
/// diffraction result.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PathGeometry {
    /// Incremental path distance for all following vectors.
    pub distances_m: Vec<f64>,

    /// Earth bulge height at each step.
    pub surface_m: Vec<f64>,

    /// Line-of-sight ray height at each step.
    pub los_m: Vec<f64>,

    /// Upper bound of the first Fresnel zone.
    pub fresnel_upper_m: Vec<f64>,

    /// Lower bound of the first Fresnel zone.
    pub fresnel_lower_m: Vec<f64>,
}

impl PathGeometry {
    /// Samples the link geometry at `points` evenly spaced distances
    /// (at least two).
    pub fn new(config: &LinkConfig, points: usize) -> Self {
        let points = points.max(2);
        let distance_m = config.distance_m();
        let wavelen = config.wavelength_m();
        let slope = (config.rx_height_m - config.tx_height_m) / distance_m;

        let distances_m: Vec<f64> = linspace(0.0, distance_m, points).collect();
        let mut surface_m = Vec::with_capacity(points);
        let mut los_m = Vec::with_capacity(points);
        let mut fresnel_upper_m = Vec::with_capacity(points);
        let mut fresnel_lower_m = Vec::with_capacity(points);

        for &d in &distances_m {
            let bulge = d * (distance_m - d) / (2.0 * EFFECTIVE_EARTH_RADIUS_M);
            let ray = config.tx_height_m + slope * d;
            let radius = fresnel(1.0, wavelen, d, distance_m);
            surface_m.push(bulge);
            los_m.push(ray);
            fresnel_upper_m.push(ray + radius);
            fresnel_lower_m.push(ray - radius);
        }

        Self {
            distances_m,
            surface_m,
            los_m,
            fresnel_upper_m,
            fresnel_lower_m,
        }
    }
}
