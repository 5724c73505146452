use clap::{Parser, Subcommand};

/// Estimate ground-to-air RF link budgets with earth curvature and
/// diffraction.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Center frequency, MHz.
    #[arg(short, long, default_value_t = 2400.0)]
    pub frequency: f64,

    /// Channel bandwidth, MHz.
    #[arg(short, long, default_value_t = 10.0)]
    pub bandwidth: f64,

    /// Path distance, km.
    #[arg(short, long, default_value_t = 10.0)]
    pub distance: f64,

    /// Ground station antenna height above ground, meters.
    #[arg(long, default_value_t = 10.0)]
    pub tx_height: f64,

    /// Aircraft antenna height above ground, meters.
    #[arg(long, default_value_t = 100.0)]
    pub rx_height: f64,

    /// Transmit power, dBm.
    #[arg(long, default_value_t = 30.0)]
    pub tx_power: f64,

    /// Transmit antenna gain, dBi.
    #[arg(long, default_value_t = 5.0)]
    pub tx_gain: f64,

    /// Transmit cable loss, dB.
    #[arg(long, default_value_t = 1.0)]
    pub tx_cable_loss: f64,

    /// Receive antenna gain, dBi.
    #[arg(long, default_value_t = 5.0)]
    pub rx_gain: f64,

    /// Receive cable loss, dB.
    #[arg(long, default_value_t = 1.0)]
    pub rx_cable_loss: f64,

    /// Receiver noise figure, dB.
    #[arg(long, default_value_t = 4.0)]
    pub noise_figure: f64,

    /// Fade margin, dB.
    #[arg(long, default_value_t = 10.0)]
    pub fade_margin: f64,

    /// Implementation loss, dB.
    #[arg(long, default_value_t = 2.0)]
    pub impl_loss: f64,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the link budget breakdown.
    Report,

    /// Print the link budget as JSON.
    Json,

    /// Print path geometry samples to stdout.
    Csv {
        /// Number of samples along the path.
        #[arg(long, default_value_t = 500)]
        points: usize,
    },

    /// Plot path geometry to terminal.
    Plot {
        /// Number of samples along the path.
        #[arg(long, default_value_t = 500)]
        points: usize,
    },

    /// Evaluate a range of distances.
    Sweep {
        /// Start of the distance range, km.
        #[arg(long, default_value_t = 1.0)]
        from: f64,

        /// End of the distance range, km.
        #[arg(long, default_value_t = 150.0)]
        to: f64,

        /// Distance increment, km.
        #[arg(long, default_value_t = 1.0)]
        step: f64,
    },
}
