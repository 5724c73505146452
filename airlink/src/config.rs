use crate::{error::ConfigError, C};

/// Validated, immutable link configuration.
///
/// Constructed with [`LinkConfig::builder`]; once built, every
/// evaluation entry point is an infallible pure function of this
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkConfig {
    /// Center frequency (MHz).
    pub freq_mhz: f64,

    /// Channel bandwidth (MHz).
    pub bandwidth_mhz: f64,

    /// Path distance between the terminals (km).
    pub distance_km: f64,

    /// Transmitter antenna height above local ground (meters).
    pub tx_height_m: f64,

    /// Receiver antenna height above local ground (meters).
    pub rx_height_m: f64,

    /// Transmit power (dBm).
    pub tx_power_dbm: f64,

    /// Transmit antenna gain (dBi).
    pub tx_gain_dbi: f64,

    /// Transmit cable loss (dB).
    pub tx_cable_loss_db: f64,

    /// Receive antenna gain (dBi).
    pub rx_gain_dbi: f64,

    /// Receive cable loss (dB).
    pub rx_cable_loss_db: f64,

    /// Receiver noise figure (dB).
    pub noise_figure_db: f64,

    /// Fade margin (dB).
    pub fade_margin_db: f64,

    /// Implementation loss (dB).
    pub impl_loss_db: f64,
}

impl LinkConfig {
    pub fn builder() -> LinkConfigBuilder {
        LinkConfigBuilder {
            freq_mhz: None,
            bandwidth_mhz: None,
            distance_km: None,
            tx_height_m: None,
            rx_height_m: None,
            tx_power_dbm: 0.0,
            tx_gain_dbi: 0.0,
            tx_cable_loss_db: 0.0,
            rx_gain_dbi: 0.0,
            rx_cable_loss_db: 0.0,
            noise_figure_db: 0.0,
            fade_margin_db: 10.0,
            impl_loss_db: 0.0,
        }
    }

    /// Center frequency in Hz.
    pub fn freq_hz(&self) -> f64 {
        self.freq_mhz * 1e6
    }

    /// Channel bandwidth in Hz.
    pub fn bandwidth_hz(&self) -> f64 {
        self.bandwidth_mhz * 1e6
    }

    /// Path distance in meters.
    pub fn distance_m(&self) -> f64 {
        self.distance_km * 1000.0
    }

    /// Carrier wavelength in meters.
    pub fn wavelength_m(&self) -> f64 {
        C / self.freq_hz()
    }
}

pub struct LinkConfigBuilder {
    /// Center frequency (MHz, required).
    freq_mhz: Option<f64>,

    /// Channel bandwidth (MHz, required).
    bandwidth_mhz: Option<f64>,

    /// Path distance (km, required).
    distance_km: Option<f64>,

    /// Transmitter antenna height above ground (meters, required).
    tx_height_m: Option<f64>,

    /// Receiver antenna height above ground (meters, required).
    rx_height_m: Option<f64>,

    /// Transmit power (dBm, defaults to 0).
    tx_power_dbm: f64,

    /// Transmit antenna gain (dBi, defaults to 0).
    tx_gain_dbi: f64,

    /// Transmit cable loss (dB, defaults to 0).
    tx_cable_loss_db: f64,

    /// Receive antenna gain (dBi, defaults to 0).
    rx_gain_dbi: f64,

    /// Receive cable loss (dB, defaults to 0).
    rx_cable_loss_db: f64,

    /// Receiver noise figure (dB, defaults to 0).
    noise_figure_db: f64,

    /// Fade margin (dB, defaults to 10).
    fade_margin_db: f64,

    /// Implementation loss (dB, defaults to 0).
    impl_loss_db: f64,
}

impl LinkConfigBuilder {
    /// Center frequency (MHz, required).
    #[must_use]
    pub fn freq_mhz(mut self, mhz: f64) -> Self {
        self.freq_mhz = Some(mhz);
        self
    }

    /// Channel bandwidth (MHz, required).
    #[must_use]
    pub fn bandwidth_mhz(mut self, mhz: f64) -> Self {
        self.bandwidth_mhz = Some(mhz);
        self
    }

    /// Path distance (km, required).
    #[must_use]
    pub fn distance_km(mut self, km: f64) -> Self {
        self.distance_km = Some(km);
        self
    }

    /// Transmitter antenna height above ground (meters, required).
    #[must_use]
    pub fn tx_height_m(mut self, meters: f64) -> Self {
        self.tx_height_m = Some(meters);
        self
    }

    /// Receiver antenna height above ground (meters, required).
    #[must_use]
    pub fn rx_height_m(mut self, meters: f64) -> Self {
        self.rx_height_m = Some(meters);
        self
    }

    /// Transmit power (dBm, defaults to 0).
    #[must_use]
    pub fn tx_power_dbm(mut self, dbm: f64) -> Self {
        self.tx_power_dbm = dbm;
        self
    }

    /// Transmit antenna gain (dBi, defaults to 0).
    #[must_use]
    pub fn tx_gain_dbi(mut self, dbi: f64) -> Self {
        self.tx_gain_dbi = dbi;
        self
    }

    /// Transmit cable loss (dB, defaults to 0).
    #[must_use]
    pub fn tx_cable_loss_db(mut self, db: f64) -> Self {
        self.tx_cable_loss_db = db;
        self
    }

    /// Receive antenna gain (dBi, defaults to 0).
    #[must_use]
    pub fn rx_gain_dbi(mut self, dbi: f64) -> Self {
        self.rx_gain_dbi = dbi;
        self
    }

    /// Receive cable loss (dB, defaults to 0).
    #[must_use]
    pub fn rx_cable_loss_db(mut self, db: f64) -> Self {
        self.rx_cable_loss_db = db;
        self
    }

    /// Receiver noise figure (dB, defaults to 0).
    #[must_use]
    pub fn noise_figure_db(mut self, db: f64) -> Self {
        self.noise_figure_db = db;
        self
    }

    /// Fade margin (dB, defaults to 10).
    #[must_use]
    pub fn fade_margin_db(mut self, db: f64) -> Self {
        self.fade_margin_db = db;
        self
    }

    /// Implementation loss (dB, defaults to 0).
    #[must_use]
    pub fn impl_loss_db(mut self, db: f64) -> Self {
        self.impl_loss_db = db;
        self
    }

    pub fn build(&self) -> Result<LinkConfig, ConfigError> {
        let freq_mhz = self.freq_mhz.ok_or(ConfigError::Builder("freq_mhz"))?;
        let bandwidth_mhz = self
            .bandwidth_mhz
            .ok_or(ConfigError::Builder("bandwidth_mhz"))?;
        let distance_km = self
            .distance_km
            .ok_or(ConfigError::Builder("distance_km"))?;
        let tx_height_m = self.tx_height_m.ok_or(ConfigError::Builder("tx_height_m"))?;
        let rx_height_m = self.rx_height_m.ok_or(ConfigError::Builder("rx_height_m"))?;

        Ok(LinkConfig {
            freq_mhz: positive("freq_mhz", freq_mhz)?,
            bandwidth_mhz: positive("bandwidth_mhz", bandwidth_mhz)?,
            distance_km: positive("distance_km", distance_km)?,
            tx_height_m: non_negative("tx_height_m", tx_height_m)?,
            rx_height_m: non_negative("rx_height_m", rx_height_m)?,
            tx_power_dbm: self.tx_power_dbm,
            tx_gain_dbi: self.tx_gain_dbi,
            tx_cable_loss_db: self.tx_cable_loss_db,
            rx_gain_dbi: self.rx_gain_dbi,
            rx_cable_loss_db: self.rx_cable_loss_db,
            noise_figure_db: self.noise_figure_db,
            fade_margin_db: self.fade_margin_db,
            impl_loss_db: self.impl_loss_db,
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NegativeHeight { field, value })
    }
}
