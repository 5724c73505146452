use crate::{config::LinkConfig, math::linspace, EFFECTIVE_EARTH_RADIUS_M};
use log::debug;

/// Sampling resolution of the clearance profile.
pub const CLEARANCE_STEPS: usize = 1000;

/// Line-of-sight clearance over the earth bulge, sampled along the
/// path.
///
/// The ray is a straight line in height-vs-distance space between the
/// two antenna heights; curvature is folded entirely into the bulge
/// term, measured relative to the chord connecting the terminal base
/// points.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearanceProfile {
    /// Incremental path distance for the following vector.
    pub distances_m: Vec<f64>,

    /// Ray height minus bulge height at each step (m, signed).
    pub clearance_m: Vec<f64>,

    worst: usize,
}

impl ClearanceProfile {
    pub fn new(config: &LinkConfig) -> Self {
        Self::with_steps(
            config.distance_m(),
            config.tx_height_m,
            config.rx_height_m,
            CLEARANCE_STEPS,
        )
    }

    pub(crate) fn with_steps(
        distance_m: f64,
        tx_height_m: f64,
        rx_height_m: f64,
        steps: usize,
    ) -> Self {
        let distances_m: Vec<f64> = linspace(0.0, distance_m, steps).collect();
        let slope = (rx_height_m - tx_height_m) / distance_m;
        let clearance_m: Vec<f64> = distances_m
            .iter()
            .map(|&d| {
                let bulge = d * (distance_m - d) / (2.0 * EFFECTIVE_EARTH_RADIUS_M);
                let ray = tx_height_m + slope * d;
                ray - bulge
            })
            .collect();

        // Clearance at the terminals degenerates to bare antenna
        // height, so endpoints only join the search when no interior
        // sample exists.
        let search = if steps < 3 { 0..steps } else { 1..steps - 1 };
        let mut worst = search.start;
        for i in search {
            if clearance_m[i] < clearance_m[worst] {
                worst = i;
            }
        }

        debug!(
            "clearance profile; len: {}, worst: {} m @ {} m",
            steps, clearance_m[worst], distances_m[worst]
        );

        Self {
            distances_m,
            clearance_m,
            worst,
        }
    }

    /// The sample with minimum clearance as (distance from the
    /// transmitter, clearance). Ties resolve to the leftmost sample.
    pub fn worst_point(&self) -> (f64, f64) {
        (self.distances_m[self.worst], self.clearance_m[self.worst])
    }
}

#[cfg(test)]
mod tests {
    use super::{ClearanceProfile, CLEARANCE_STEPS};
    use crate::LinkConfig;

    fn config(distance_km: f64, tx_height_m: f64, rx_height_m: f64) -> LinkConfig {
        LinkConfig::builder()
            .freq_mhz(2400.0)
            .bandwidth_mhz(10.0)
            .distance_km(distance_km)
            .tx_height_m(tx_height_m)
            .rx_height_m(rx_height_m)
            .build()
            .unwrap()
    }

    #[test]
    fn test_sample_count_and_span() {
        let profile = ClearanceProfile::new(&config(10.0, 10.0, 100.0));
        assert_eq!(profile.distances_m.len(), CLEARANCE_STEPS);
        assert_eq!(profile.clearance_m.len(), CLEARANCE_STEPS);
        assert_eq!(*profile.distances_m.first().unwrap(), 0.0);
        assert_eq!(*profile.distances_m.last().unwrap(), 10_000.0);
    }

    #[test]
    fn test_short_link_stays_clear() {
        let profile = ClearanceProfile::new(&config(10.0, 10.0, 100.0));
        let (_, clearance) = profile.worst_point();
        assert!(clearance > 0.0);
    }

    #[test]
    fn test_long_low_link_is_obstructed() {
        // 100 km between 10 m antennas; the bulge at midpath is
        // roughly 147 m.
        let profile = ClearanceProfile::new(&config(100.0, 10.0, 10.0));
        let (distance, clearance) = profile.worst_point();
        assert!(clearance < -100.0);
        assert!(distance > 40_000.0 && distance < 60_000.0);
    }

    #[test]
    fn test_worst_point_excludes_endpoints() {
        // The minimum-height sample overall is the 10 m transmitter
        // endpoint, but the worst point must be interior.
        let profile = ClearanceProfile::new(&config(10.0, 10.0, 100.0));
        let (distance, _) = profile.worst_point();
        assert!(distance > 0.0);
        assert!(distance < 10_000.0);
    }

    #[test]
    fn test_tie_breaks_leftmost() {
        // Zero-height terminals over 3 m sampled at 4 points yield
        // bitwise-equal interior clearances at 1 m and 2 m.
        let profile = ClearanceProfile::with_steps(3.0, 0.0, 0.0, 4);
        assert_eq!(profile.clearance_m[1], profile.clearance_m[2]);
        let (distance, _) = profile.worst_point();
        assert_eq!(distance, 1.0);
    }

    #[test]
    fn test_degenerate_sample_counts_include_endpoints() {
        let profile = ClearanceProfile::with_steps(1_000.0, 5.0, 50.0, 2);
        let (distance, clearance) = profile.worst_point();
        assert_eq!(distance, 0.0);
        assert_eq!(clearance, 5.0);
    }
}
