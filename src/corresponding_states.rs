//! Corresponding-states correlations that complete the estimates of all
//! group-contribution methods.
use gcprop_core::si::*;
use log::warn;

/// Temperature of the specific gravity, 60 °F.
const SG_TEMPERATURE: f64 = 288.71;
/// Density of water at 60 °F in kg/m³.
const WATER_DENSITY: f64 = 999.0;

/// Acentric factor from the normal boiling point and the critical point
/// (Lee & Kesler, 1975).
///
/// Returns `None` if the boiling point is not below the critical temperature.
pub fn lee_kesler_acentric_factor(
    boiling_temperature: Temperature,
    critical_temperature: Temperature,
    critical_pressure: Pressure,
) -> Option<f64> {
    let theta = (boiling_temperature / critical_temperature).into_value();
    if !(theta > 0.0 && theta < 1.0) {
        warn!("acentric factor undefined for Tb/Tc = {theta}");
        return None;
    }
    let pc_atm = (critical_pressure / ATMOSPHERE).into_value();
    let ln_theta = theta.ln();
    let theta6 = theta.powi(6);
    let alpha = -pc_atm.ln() - 5.92714 + 6.09648 / theta + 1.28862 * ln_theta - 0.169347 * theta6;
    let beta = 15.2518 - 15.6875 / theta - 13.4721 * ln_theta + 0.43577 * theta6;
    Some(alpha / beta).filter(|w| w.is_finite())
}

/// Specific gravity at 60 °F from the saturated liquid volume of the Rackett
/// equation with the Yamada-Gunn compressibility factor.
///
/// Returns `None` for compounds that are supercritical at 60 °F.
pub fn rackett_specific_gravity(
    critical_temperature: Temperature,
    critical_pressure: Pressure,
    acentric_factor: f64,
    molar_weight: MolarWeight,
) -> Option<f64> {
    let tr = SG_TEMPERATURE / critical_temperature.to_si();
    if tr >= 1.0 {
        warn!("no liquid density at 60 °F for Tc = {critical_temperature}");
        return None;
    }
    let z_ra = 0.29056 - 0.08775 * acentric_factor;
    let volume: MolarVolume =
        RGAS * critical_temperature / critical_pressure * z_ra.powf(1.0 + (1.0 - tr).powf(2.0 / 7.0));
    let density = molar_weight / volume;
    let sg = density.to_si() / WATER_DENSITY;
    sg.is_finite().then_some(sg)
}
