//! Colisão elástica unidimensional entre duas partículas

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EnergyError, EnergyResult, ensure_finite};

/// Partícula pontual em uma dimensão
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Massa (kg)
    pub mass: f64,
    /// Velocidade (m/s)
    pub velocity: f64,
}

impl Particle {
    /// Cria partícula; massa precisa ser positiva
    pub fn new(mass: f64, velocity: f64) -> EnergyResult<Self> {
        let mass = ensure_finite("mass", mass)?;
        let velocity = ensure_finite("velocity", velocity)?;
        if mass <= 0.0 {
            return Err(EnergyError::NonPositiveMass(mass));
        }
        Ok(Self { mass, velocity })
    }

    /// Momento linear (kg·m/s)
    pub fn momentum(&self) -> f64 {
        self.mass * self.velocity
    }

    /// Energia cinética (J)
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
    }
}

/// Estado das duas partículas após uma colisão perfeitamente elástica
pub fn collide(a: Particle, b: Particle) -> (Particle, Particle) {
    let total = a.mass + b.mass;
    let va = ((a.mass - b.mass) * a.velocity + 2.0 * b.mass * b.velocity) / total;
    let vb = ((b.mass - a.mass) * b.velocity + 2.0 * a.mass * a.velocity) / total;

    (
        Particle { velocity: va, ..a },
        Particle { velocity: vb, ..b },
    )
}

/// Velocidades finais `(v1', v2')` de uma colisão elástica 1-D
pub fn simulate_particle_collision(
    mass1: f64,
    velocity1: f64,
    mass2: f64,
    velocity2: f64,
) -> EnergyResult<(f64, f64)> {
    let a = Particle::new(mass1, velocity1)?;
    let b = Particle::new(mass2, velocity2)?;
    let (a, b) = collide(a, b);

    debug!(v1 = a.velocity, v2 = b.velocity, "elastic collision");
    Ok((a.velocity, b.velocity))
}
