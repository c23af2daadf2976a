//! Descarga de bateria sob carga constante

use tracing::debug;

use crate::error::{EnergyError, EnergyResult, ensure_finite};

/// Capacidade restante (Wh) após `hours` horas alimentando `load_w` watts
///
/// Nunca fica abaixo de zero: uma bateria esgotada permanece em 0 Wh.
pub fn battery_discharge(capacity_wh: f64, load_w: f64, hours: f64) -> EnergyResult<f64> {
    let capacity_wh = ensure_finite("capacity", capacity_wh)?;
    let load_w = ensure_finite("load", load_w)?;
    let hours = ensure_finite("hours", hours)?;

    if capacity_wh < 0.0 {
        return Err(EnergyError::NegativeCapacity(capacity_wh));
    }
    if load_w < 0.0 {
        return Err(EnergyError::NegativeLoad(load_w));
    }
    if hours < 0.0 {
        return Err(EnergyError::NegativeDuration(hours));
    }

    let remaining = (capacity_wh - load_w * hours).max(0.0);
    debug!(capacity_wh, load_w, hours, remaining, "battery discharge");
    Ok(remaining)
}
