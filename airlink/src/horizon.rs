use crate::EFFECTIVE_EARTH_RADIUS_M;

/// Radio horizon distances for a terminal pair.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioHorizon {
    /// Horizon distance of the transmit terminal (m).
    pub tx_m: f64,

    /// Horizon distance of the receive terminal (m).
    pub rx_m: f64,
}

impl RadioHorizon {
    pub fn new(tx_height_m: f64, rx_height_m: f64) -> Self {
        Self {
            tx_m: horizon_distance_m(tx_height_m),
            rx_m: horizon_distance_m(rx_height_m),
        }
    }

    /// Combined horizon distance of both terminals (m). Paths longer
    /// than this are beyond radio line of sight.
    pub fn total_m(&self) -> f64 {
        self.tx_m + self.rx_m
    }
}

/// Distance to the radio horizon for an antenna `height_m` above
/// ground, over the effective earth. An antenna at ground level sees
/// no horizon distance at all.
pub fn horizon_distance_m(height_m: f64) -> f64 {
    (2.0 * EFFECTIVE_EARTH_RADIUS_M * height_m).sqrt()
}

#[cfg(test)]
mod tests {
    use super::{horizon_distance_m, RadioHorizon};

    #[test]
    fn test_horizon_distance() {
        assert_eq!(horizon_distance_m(10.0), 13018.010600702397);
        assert_eq!(horizon_distance_m(100.0), 41166.564102436336);
    }

    #[test]
    fn test_total_is_sum_of_terminals() {
        let horizon = RadioHorizon::new(10.0, 100.0);
        assert_eq!(horizon.total_m(), horizon.tx_m + horizon.rx_m);
        assert_eq!(horizon.total_m(), 54184.57470313873);
    }

    #[test]
    fn test_ground_level_sees_nothing() {
        assert_eq!(horizon_distance_m(0.0), 0.0);
        assert_eq!(RadioHorizon::new(0.0, 0.0).total_m(), 0.0);
    }
}
