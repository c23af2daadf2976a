//! # ⚡ QEL-Energy — Fórmulas de Energia e Dinâmica
//!
//! Funções puras, independentes do simulador quântico:
//!
//! - [`solar_panel_output`]: energia de um painel solar em Joules
//! - [`battery_discharge`]: capacidade restante de uma bateria
//! - [`simulate_particle_collision`]: colisão elástica 1-D
//!
//! Toda entrada é validada antes do cálculo; nada é corrigido silenciosamente.
//!
//! ## Uso
//!
//! ```
//! use qel_energy::{solar_panel_output, battery_discharge, simulate_particle_collision};
//!
//! let joules = solar_panel_output(100.0, 2.0, 0.5)?;
//! assert_eq!(joules, 360_000.0);
//!
//! let remaining = battery_discharge(100.0, 10.0, 3.0)?;
//! assert_eq!(remaining, 70.0);
//!
//! let (v1, v2) = simulate_particle_collision(1.0, 1.0, 1.0, 0.0)?;
//! assert_eq!((v1, v2), (0.0, 1.0));
//! # Ok::<(), qel_energy::EnergyError>(())
//! ```

pub mod battery;
pub mod collision;
pub mod error;
pub mod solar;

// Re-exports
pub use battery::battery_discharge;
pub use collision::{Particle, collide, simulate_particle_collision};
pub use error::{EnergyError, EnergyResult};
pub use solar::{DEFAULT_EFFICIENCY, solar_panel_output};

/// Constantes de conversão
pub mod constants {
    /// Segundos por hora
    pub const SECONDS_PER_HOUR: f64 = 3600.0;

    /// Joules por watt-hora
    pub const JOULES_PER_WH: f64 = 3600.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(constants::SECONDS_PER_HOUR, constants::JOULES_PER_WH);
    }

    #[test]
    fn test_solar_energy_fills_battery_units() {
        // 1 kW por 1 h = 1 kWh
        let joules = solar_panel_output(1000.0, 1.0, DEFAULT_EFFICIENCY).unwrap();
        assert_eq!(joules / constants::JOULES_PER_WH, 1000.0);
    }
}
