/// A modulation and coding tier selected from SNR.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulation {
    /// Scheme label, e.g. "16QAM 3/4".
    pub label: &'static str,

    /// Spectral efficiency in bits/s/Hz.
    pub spectral_efficiency: f64,
}

const NO_LINK: Modulation = Modulation {
    label: "No Link",
    spectral_efficiency: 0.0,
};

/// Minimum SNR (dB) per tier, ascending. A value exactly at a
/// boundary belongs to the higher tier.
const TIERS: &[(f64, Modulation)] = &[
    (
        6.0,
        Modulation {
            label: "QPSK 1/2",
            spectral_efficiency: 1.0,
        },
    ),
    (
        10.0,
        Modulation {
            label: "16QAM 1/2",
            spectral_efficiency: 2.0,
        },
    ),
    (
        15.0,
        Modulation {
            label: "16QAM 3/4",
            spectral_efficiency: 3.0,
        },
    ),
    (
        20.0,
        Modulation {
            label: "64QAM 2/3",
            spectral_efficiency: 4.0,
        },
    ),
    (
        25.0,
        Modulation {
            label: "64QAM 3/4",
            spectral_efficiency: 4.5,
        },
    ),
    (
        30.0,
        Modulation {
            label: "256QAM",
            spectral_efficiency: 6.0,
        },
    ),
];

impl Modulation {
    /// Highest tier whose minimum SNR is met; "No Link" below the
    /// lowest tier.
    pub fn from_snr(snr_db: f64) -> Self {
        TIERS
            .iter()
            .rev()
            .find(|(min_snr, _)| snr_db >= *min_snr)
            .map_or(NO_LINK, |(_, modulation)| *modulation)
    }
}
