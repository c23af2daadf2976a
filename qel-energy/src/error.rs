//! Erros do módulo de energia

use thiserror::Error;

/// Resultado de operações de energia
pub type EnergyResult<T> = Result<T, EnergyError>;

/// Entradas rejeitadas pelas fórmulas
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnergyError {
    /// Potência negativa
    #[error("Potência não pode ser negativa: {0} W")]
    NegativePower(f64),

    /// Duração negativa
    #[error("Duração não pode ser negativa: {0} h")]
    NegativeDuration(f64),

    /// Eficiência fora de [0, 1]
    #[error("Eficiência deve estar em [0, 1]: {0}")]
    InvalidEfficiency(f64),

    /// Capacidade negativa
    #[error("Capacidade não pode ser negativa: {0} Wh")]
    NegativeCapacity(f64),

    /// Carga negativa
    #[error("Carga não pode ser negativa: {0} W")]
    NegativeLoad(f64),

    /// Massa nula ou negativa
    #[error("Massa deve ser positiva: {0} kg")]
    NonPositiveMass(f64),

    /// NaN ou infinito
    #[error("Valor não finito em {0}")]
    NonFinite(&'static str),
}

/// Rejeita NaN e infinitos
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> EnergyResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EnergyError::NonFinite(name))
    }
}
