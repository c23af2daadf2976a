//! Energia entregue por um painel solar

use tracing::debug;

use crate::constants::SECONDS_PER_HOUR;
use crate::error::{EnergyError, EnergyResult, ensure_finite};

/// Eficiência usada quando o chamador não informa outra
pub const DEFAULT_EFFICIENCY: f64 = 1.0;

/// Energia (J) de um painel de `power_w` watts operando `hours` horas
///
/// `E = P × η × t × 3600`
pub fn solar_panel_output(power_w: f64, hours: f64, efficiency: f64) -> EnergyResult<f64> {
    let power_w = ensure_finite("power", power_w)?;
    let hours = ensure_finite("hours", hours)?;
    let efficiency = ensure_finite("efficiency", efficiency)?;

    if power_w < 0.0 {
        return Err(EnergyError::NegativePower(power_w));
    }
    if hours < 0.0 {
        return Err(EnergyError::NegativeDuration(hours));
    }
    if !(0.0..=1.0).contains(&efficiency) {
        return Err(EnergyError::InvalidEfficiency(efficiency));
    }

    let joules = power_w * efficiency * hours * SECONDS_PER_HOUR;
    debug!(power_w, hours, efficiency, joules, "solar panel output");
    Ok(joules)
}
