//! Link budget aggregation.

use crate::{
    config::LinkConfig, diffraction::Diffraction, horizon::RadioHorizon, modulation::Modulation,
};

/// Free space path loss in dB for `distance_m` at `freq_hz`.
pub fn fspl(distance_m: f64, freq_hz: f64) -> f64 {
    20.0 * distance_m.log10() + 20.0 * freq_hz.log10() - 147.55
}

/// Thermal noise floor in dBm, referenced to 290 K.
pub fn noise_floor(bandwidth_hz: f64, noise_figure_db: f64) -> f64 {
    -174.0 + 10.0 * bandwidth_hz.log10() + noise_figure_db
}

/// Complete link budget estimate for one configuration.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Free space path loss (dB).
    pub fspl_db: f64,

    /// Diffraction loss (dB).
    pub diffraction_loss_db: f64,

    /// All losses combined, including cable losses, implementation
    /// loss, and fade margin (dB).
    pub total_loss_db: f64,

    /// Received signal level (dBm).
    pub rsl_dbm: f64,

    /// Thermal noise floor at the receiver (dBm).
    pub noise_floor_dbm: f64,

    /// Signal-to-noise ratio (dB).
    pub snr_db: f64,

    /// Minimum line-of-sight clearance over the earth bulge (m,
    /// signed).
    pub min_clearance_m: f64,

    /// First Fresnel zone radius at the worst clearance point (m).
    pub fresnel_radius_m: f64,

    /// Distance from the transmitter to the worst clearance point (m).
    pub obstruction_distance_m: f64,

    /// Whether the ray clears the earth bulge everywhere.
    pub is_los: bool,

    /// Combined radio horizon of both terminals (km).
    pub horizon_km: f64,

    /// Best modulation tier the SNR supports.
    pub modulation: Modulation,

    /// Estimated throughput at that tier (Mbps).
    pub throughput_mbps: f64,
}

/// Evaluates the full link budget for `config`.
///
/// Pure and deterministic; identical configurations produce identical
/// reports.
pub fn evaluate(config: &LinkConfig) -> Report {
    let fspl_db = fspl(config.distance_m(), config.freq_hz());
    let diffraction = Diffraction::new(config);

    let total_loss_db = fspl_db
        + diffraction.loss_db
        + config.tx_cable_loss_db
        + config.rx_cable_loss_db
        + config.impl_loss_db
        + config.fade_margin_db;
    let total_gain_dbi = config.tx_gain_dbi + config.rx_gain_dbi;
    let rsl_dbm = config.tx_power_dbm + total_gain_dbi - total_loss_db;

    let noise_floor_dbm = noise_floor(config.bandwidth_hz(), config.noise_figure_db);
    let snr_db = rsl_dbm - noise_floor_dbm;

    let modulation = Modulation::from_snr(snr_db);
    let throughput_mbps = modulation.spectral_efficiency * config.bandwidth_mhz;

    let horizon = RadioHorizon::new(config.tx_height_m, config.rx_height_m);

    Report {
        fspl_db,
        diffraction_loss_db: diffraction.loss_db,
        total_loss_db,
        rsl_dbm,
        noise_floor_dbm,
        snr_db,
        min_clearance_m: diffraction.min_clearance_m,
        fresnel_radius_m: diffraction.fresnel_radius_m,
        obstruction_distance_m: diffraction.obstruction_distance_m,
        is_los: diffraction.min_clearance_m > 0.0,
        horizon_km: horizon.total_m() / 1000.0,
        modulation,
        throughput_mbps,
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, fspl, noise_floor};
    use crate::LinkConfig;
    use assert_approx_eq::assert_approx_eq;

    fn clear_10km() -> LinkConfig {
        LinkConfig::builder()
            .freq_mhz(2400.0)
            .bandwidth_mhz(10.0)
            .distance_km(10.0)
            .tx_height_m(10.0)
            .rx_height_m(100.0)
            .tx_power_dbm(30.0)
            .fade_margin_db(0.0)
            .build()
            .unwrap()
    }

    fn uhf_100km() -> LinkConfig {
        LinkConfig::builder()
            .freq_mhz(414.0)
            .bandwidth_mhz(5.0)
            .distance_km(100.0)
            .tx_height_m(10.0)
            .rx_height_m(100.0)
            .tx_power_dbm(50.0)
            .tx_gain_dbi(5.0)
            .tx_cable_loss_db(1.0)
            .rx_gain_dbi(1.5)
            .rx_cable_loss_db(1.0)
            .noise_figure_db(4.0)
            .fade_margin_db(10.0)
            .impl_loss_db(2.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_fspl() {
        assert_approx_eq!(fspl(10_000.0, 2.4e9), 120.05, 0.01);
        assert_approx_eq!(fspl(100_000.0, 414e6), 124.79, 0.01);
    }

    #[test]
    fn test_noise_floor() {
        assert_approx_eq!(noise_floor(10e6, 0.0), -104.0, 1e-9);
        assert_approx_eq!(noise_floor(5e6, 4.0), -103.01, 0.01);
    }

    #[test]
    fn test_clear_short_link() {
        let report = evaluate(&clear_10km());
        assert_approx_eq!(report.fspl_db, 120.05, 0.01);
        assert_eq!(report.diffraction_loss_db, 0.0);
        assert!(report.is_los);
        assert_approx_eq!(report.snr_db, 13.95, 0.01);
        assert_eq!(report.modulation.label, "16QAM 1/2");
        assert_eq!(report.throughput_mbps, 20.0);
    }

    #[test]
    fn test_deep_brlos_link() {
        let config = LinkConfig::builder()
            .freq_mhz(2400.0)
            .bandwidth_mhz(10.0)
            .distance_km(100.0)
            .tx_height_m(10.0)
            .rx_height_m(10.0)
            .fade_margin_db(0.0)
            .build()
            .unwrap();
        let report = evaluate(&config);
        assert_approx_eq!(report.horizon_km, 26.04, 0.01);
        assert!(report.diffraction_loss_db > 0.0);
        assert!(!report.is_los);
        assert_eq!(report.modulation.label, "No Link");
        assert_eq!(report.throughput_mbps, 0.0);
    }

    #[test]
    fn test_uhf_reference_numbers() {
        let report = evaluate(&uhf_100km());
        assert_approx_eq!(report.fspl_db, 124.79, 0.01);
        assert_approx_eq!(report.diffraction_loss_db, 51.00, 0.05);
        assert_approx_eq!(report.total_loss_db, 189.79, 0.05);
        assert_approx_eq!(report.rsl_dbm, -133.29, 0.05);
        assert_approx_eq!(report.noise_floor_dbm, -103.01, 0.01);
        assert_approx_eq!(report.snr_db, -30.28, 0.05);
        assert_eq!(report.modulation.label, "No Link");
        assert!(!report.is_los);
    }

    #[test]
    fn test_total_loss_never_below_fspl() {
        for distance_km in [0.5, 5.0, 25.0, 54.0, 55.0, 100.0, 150.0] {
            let config = LinkConfig::builder()
                .freq_mhz(2400.0)
                .bandwidth_mhz(10.0)
                .distance_km(distance_km)
                .tx_height_m(10.0)
                .rx_height_m(100.0)
                .fade_margin_db(0.0)
                .build()
                .unwrap();
            let report = evaluate(&config);
            assert!(report.total_loss_db >= report.fspl_db);
        }
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let config = uhf_100km();
        assert_eq!(evaluate(&config), evaluate(&config));
    }

    #[test]
    fn test_parallel_batch_matches_serial() {
        use rayon::prelude::*;

        let configs: Vec<LinkConfig> = (1..=50)
            .map(|n| {
                LinkConfig::builder()
                    .freq_mhz(2400.0)
                    .bandwidth_mhz(10.0)
                    .distance_km(f64::from(n) * 3.0)
                    .tx_height_m(10.0)
                    .rx_height_m(100.0)
                    .build()
                    .unwrap()
            })
            .collect();

        let serial: Vec<_> = configs.iter().map(evaluate).collect();
        let parallel: Vec<_> = configs.par_iter().map(evaluate).collect();
        assert_eq!(serial, parallel);
    }
}
