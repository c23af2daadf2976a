//! Configuração do circuito carregada de `.env` ou variáveis de ambiente
//!
//! | Variável             | Padrão | Significado                                  |
//! |----------------------|--------|----------------------------------------------|
//! | `QEL_NORM_TOLERANCE` | `1e-9` | Tolerância para a soma das probabilidades    |
//! | `QEL_SEED`           | —      | Semente fixa para a fonte aleatória da medição |

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Tolerância numérica padrão para normalização
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

// Carrega .env na primeira leitura de configuração
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Tolerância de normalização do ambiente
/// Default: 1e-9
pub fn norm_tolerance() -> f64 {
    ensure_loaded();
    env::var("QEL_NORM_TOLERANCE")
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .and_then(valid_tolerance)
        .unwrap_or(DEFAULT_NORM_TOLERANCE)
}

fn valid_tolerance(tolerance: f64) -> Option<f64> {
    (tolerance.is_finite() && tolerance > 0.0).then_some(tolerance)
}

/// Semente da fonte aleatória, se definida
pub fn seed() -> Option<u64> {
    ensure_loaded();
    env::var("QEL_SEED").ok().and_then(|v| v.trim().parse().ok())
}

/// Configuração de um circuito
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitConfig {
    /// Tolerância aceita em `|soma(|a|²) - 1|`
    pub norm_tolerance: f64,
    /// Semente para medições reprodutíveis
    pub seed: Option<u64>,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            seed: None,
        }
    }
}

impl CircuitConfig {
    /// Lê a configuração do ambiente
    pub fn from_env() -> Self {
        Self {
            norm_tolerance: norm_tolerance(),
            seed: seed(),
        }
    }

    /// Define a tolerância de normalização
    ///
    /// Valores não finitos, zero ou negativos voltam ao padrão, como em `from_env`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = valid_tolerance(tolerance).unwrap_or(DEFAULT_NORM_TOLERANCE);
        self
    }

    /// Define a semente da fonte aleatória
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
