//! First Fresnel zone calculations.

use crate::C;
use num_traits::{Float, FromPrimitive};

/// Converts frequency (Hz) to wavelength (m).
pub fn freq_to_wavelen<T>(freq_hz: T) -> T
where
    T: Float + FromPrimitive,
{
    T::from(C).unwrap() / freq_hz
}

/// Radius of the `zone`th Fresnel zone at distance `d1` from the
/// transmitter along a path `total` meters long.
///
/// The zone collapses onto the ray at the terminals, so the radius is
/// defined to be exactly 0 at and beyond both endpoints.
pub fn fresnel<T>(zone: T, wavelen: T, d1: T, total: T) -> T
where
    T: Float,
{
    if d1 <= T::zero() || d1 >= total {
        return T::zero();
    }
    let d2 = total - d1;
    (zone * wavelen * d1 * d2 / (d1 + d2)).sqrt()
}
