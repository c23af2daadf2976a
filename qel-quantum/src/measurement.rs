//! Medição na base computacional com colapso do estado
//!
//! Cada medição passa por quatro etapas:
//!
//! ```text
//! distribuição → amostragem → zerar incompatíveis → renormalizar
//! ```
//!
//! A lista de qubits medidos é arbitrária (vazia, subconjunto ou todos) e a
//! ordem pedida define a ordem dos bits no resultado.

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

use crate::error::{QuantumError, QuantumResult};
use crate::state::StateVector;

/// Fonte de números uniformes em `[0, 1)` usada na amostragem
pub trait RandomSource: Send {
    /// Próximo valor uniforme em `[0, 1)`
    fn next_f64(&mut self) -> f64;
}

/// Fonte baseada em `StdRng`
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Semeada pela entropia do sistema
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Semeada deterministicamente
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Sequência fixa de sorteios, repetida ciclicamente
///
/// Útil para forçar resultados específicos em testes.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    draws: Vec<f64>,
    position: usize,
}

impl FixedRandom {
    /// Cria a partir de uma lista de sorteios (lista vazia sorteia sempre 0.0)
    ///
    /// Todo sorteio precisa estar em `[0, 1)`.
    pub fn new(draws: impl Into<Vec<f64>>) -> QuantumResult<Self> {
        let draws = draws.into();
        if let Some(&bad) = draws.iter().find(|d| !(0.0..1.0).contains(*d)) {
            return Err(QuantumError::InvalidDraw(bad));
        }
        Ok(Self { draws, position: 0 })
    }

    /// Sorteio constante
    pub fn constant(value: f64) -> QuantumResult<Self> {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.position % self.draws.len()];
        self.position = (self.position + 1) % self.draws.len();
        value
    }
}

/// Bits dos qubits pedidos no estado da base `index`, na ordem pedida
fn outcome_key(state: &StateVector, index: usize, qubits: &[usize]) -> Vec<u8> {
    qubits.iter().map(|&q| state.bit(index, q)).collect()
}

/// Massa de probabilidade de cada resultado possível
pub fn outcome_distribution(state: &StateVector, qubits: &[usize]) -> BTreeMap<Vec<u8>, f64> {
    let mut distribution = BTreeMap::new();
    for (index, amplitude) in state.amplitudes().iter().enumerate() {
        *distribution
            .entry(outcome_key(state, index, qubits))
            .or_insert(0.0) += amplitude.norm_sqr();
    }
    distribution
}

/// Escolhe um resultado dado um sorteio em `[0, 1)`
///
/// Percorre as chaves em ordem decrescente e devolve a primeira cuja
/// probabilidade acumulada excede o sorteio. Resultados de massa zero nunca
/// são escolhidos, mesmo com sorteio fora de `[0, 1)`.
///
/// Se o arredondamento impedir a escolha, o fallback é o último resultado da
/// enumeração *com massa positiva*, e não simplesmente o último: colapsar em
/// um resultado impossível zeraria o vetor.
pub fn select_outcome(
    distribution: &BTreeMap<Vec<u8>, f64>,
    draw: f64,
) -> Option<(Vec<u8>, f64)> {
    let mut cumulative = 0.0;
    for (outcome, &mass) in distribution.iter().rev() {
        cumulative += mass;
        if mass > 0.0 && cumulative > draw {
            return Some((outcome.clone(), mass));
        }
    }

    let fallback = distribution
        .iter()
        .find(|(_, mass)| **mass > 0.0)
        .or_else(|| distribution.iter().next())
        .map(|(outcome, &mass)| (outcome.clone(), mass));

    if let Some((outcome, _)) = &fallback {
        warn!(draw, cumulative, ?outcome, "outcome selection fell back after rounding drift");
    }
    fallback
}

/// Zera as amplitudes incompatíveis com `outcome` e renormaliza as restantes
pub fn collapse(state: &mut StateVector, qubits: &[usize], outcome: &[u8], mass: f64) {
    let scale = if mass == 0.0 {
        warn!(?outcome, "collapsing onto an outcome with zero probability mass");
        1.0
    } else {
        mass.sqrt()
    };

    let next: Vec<Complex64> = state
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(index, &amplitude)| {
            if outcome_key(state, index, qubits) == outcome {
                amplitude / scale
            } else {
                Complex64::new(0.0, 0.0)
            }
        })
        .collect();

    state.replace(next);
}

/// Mede os qubits pedidos em conjunto, colapsando o estado
///
/// Devolve um bit por qubit, na ordem pedida. Índices inválidos ou repetidos
/// falham antes de qualquer alteração.
pub fn measure_qubits(
    state: &mut StateVector,
    qubits: &[usize],
    rng: &mut dyn RandomSource,
) -> QuantumResult<Vec<u8>> {
    state.check_qubits(qubits)?;

    let distribution = outcome_distribution(state, qubits);
    trace!(?qubits, ?distribution, "measurement distribution");

    let draw = rng.next_f64();
    let Some((outcome, mass)) = select_outcome(&distribution, draw) else {
        return Ok(Vec::new());
    };

    collapse(state, qubits, &outcome, mass);
    debug!(?qubits, ?outcome, probability = mass, "measured");

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{Hadamard, QuantumGate, apply_controlled_not, apply_single_qubit};
    use std::f64::consts::FRAC_1_SQRT_2;

    fn bell() -> StateVector {
        let mut state = StateVector::new(2).unwrap();
        apply_single_qubit(&mut state, 0, &Hadamard.matrix()).unwrap();
        apply_controlled_not(&mut state, 0, 1).unwrap();
        state
    }

    #[test]
    fn test_fixed_random_cycles() {
        let mut rng = FixedRandom::new(vec![0.1, 0.9]).unwrap();
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.9);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(FixedRandom::new(Vec::new()).unwrap().next_f64(), 0.0);
    }

    #[test]
    fn test_seeded_random_reproducible() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        for _ in 0..10 {
            let x = a.next_f64();
            assert_eq!(x, b.next_f64());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_distribution_of_bell_state() {
        let state = bell();
        let distribution = outcome_distribution(&state, &[0, 1]);
        assert_eq!(distribution.len(), 4);
        assert!((distribution[&vec![0u8, 0]] - 0.5).abs() < 1e-12);
        assert!((distribution[&vec![1u8, 1]] - 0.5).abs() < 1e-12);
        assert!(distribution[&vec![0u8, 1]].abs() < 1e-12);
    }

    #[test]
    fn test_distribution_respects_request_order() {
        let mut state = StateVector::new(2).unwrap();
        // |01⟩: qubit 0 = 0, qubit 1 = 1
        state
            .initialize(
                &[
                    Complex64::new(0.0, 0.0),
                    Complex64::new(1.0, 0.0),
                    Complex64::new(0.0, 0.0),
                    Complex64::new(0.0, 0.0),
                ],
                1e-9,
            )
            .unwrap();
        let distribution = outcome_distribution(&state, &[1, 0]);
        assert!((distribution[&vec![1u8, 0]] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_select_outcome_descending_order() {
        let mut distribution = BTreeMap::new();
        distribution.insert(vec![0], 0.5);
        distribution.insert(vec![1], 0.5);

        assert_eq!(select_outcome(&distribution, 0.25).unwrap().0, vec![1]);
        assert_eq!(select_outcome(&distribution, 0.75).unwrap().0, vec![0]);
    }

    #[test]
    fn test_select_outcome_skips_zero_mass() {
        let mut distribution = BTreeMap::new();
        distribution.insert(vec![0], 1.0);
        distribution.insert(vec![1], 0.0);

        assert_eq!(select_outcome(&distribution, 0.0).unwrap().0, vec![0]);
    }

    #[test]
    fn test_select_outcome_out_of_range_draw_never_picks_zero_mass() {
        let mut distribution = BTreeMap::new();
        distribution.insert(vec![0], 1.0);
        distribution.insert(vec![1], 0.0);

        assert_eq!(select_outcome(&distribution, -0.1).unwrap().0, vec![0]);
        assert_eq!(select_outcome(&distribution, 1.5).unwrap().0, vec![0]);
    }

    #[test]
    fn test_fixed_random_rejects_bad_draws() {
        assert_eq!(
            FixedRandom::constant(-0.1).unwrap_err(),
            QuantumError::InvalidDraw(-0.1)
        );
        assert_eq!(
            FixedRandom::constant(1.0).unwrap_err(),
            QuantumError::InvalidDraw(1.0)
        );
        assert!(FixedRandom::new(vec![0.2, f64::NAN]).is_err());
        assert!(FixedRandom::new(vec![0.0, 0.999]).is_ok());
    }

    #[test]
    fn test_negative_draw_keeps_basis_state_normalized() {
        // fonte externa que devolve valores fora de [0, 1)
        struct Negative;
        impl RandomSource for Negative {
            fn next_f64(&mut self) -> f64 {
                -0.1
            }
        }

        let mut state = StateVector::new(1).unwrap();
        let outcome = measure_qubits(&mut state, &[0], &mut Negative).unwrap();
        assert_eq!(outcome, vec![0]);
        assert!(state.is_normalized(1e-9));
        assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_select_outcome_fallback_on_drift() {
        let mut distribution = BTreeMap::new();
        distribution.insert(vec![0], 0.4999999);
        distribution.insert(vec![1], 0.4999999);
        distribution.insert(vec![2], 0.0);

        // soma < sorteio: cai no último resultado com massa positiva
        let (outcome, mass) = select_outcome(&distribution, 0.9999999).unwrap();
        assert_eq!(outcome, vec![0]);
        assert!(mass > 0.0);
    }

    #[test]
    fn test_measure_collapses_bell_pair() {
        let mut state = bell();
        let mut rng = FixedRandom::constant(0.25).unwrap();
        let outcome = measure_qubits(&mut state, &[0], &mut rng).unwrap();
        assert_eq!(outcome, vec![1]);

        let probs = state.probabilities();
        assert!((probs[3] - 1.0).abs() < 1e-12);
        assert!(state.is_normalized(1e-9));
    }

    #[test]
    fn test_measure_empty_subset() {
        let mut state = StateVector::new(1).unwrap();
        apply_single_qubit(&mut state, 0, &Hadamard.matrix()).unwrap();
        let before = state.to_vec();

        let mut rng = FixedRandom::constant(0.3).unwrap();
        let outcome = measure_qubits(&mut state, &[], &mut rng).unwrap();
        assert!(outcome.is_empty());
        for (a, b) in state.amplitudes().iter().zip(&before) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn test_measure_subset_keeps_other_qubit() {
        // qubit 0 em superposição, qubit 1 em |0⟩
        let mut state = StateVector::new(2).unwrap();
        apply_single_qubit(&mut state, 0, &Hadamard.matrix()).unwrap();

        let mut rng = FixedRandom::constant(0.5).unwrap();
        let outcome = measure_qubits(&mut state, &[1], &mut rng).unwrap();
        assert_eq!(outcome, vec![0]);

        let amps = state.amplitudes();
        assert!((amps[0].re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((amps[2].re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!(amps[1].norm_sqr() < 1e-12);
        assert!(amps[3].norm_sqr() < 1e-12);
    }

    #[test]
    fn test_measure_rejects_before_mutating() {
        let mut state = bell();
        let before = state.clone();
        let mut rng = FixedRandom::constant(0.1).unwrap();
        assert!(measure_qubits(&mut state, &[0, 0], &mut rng).is_err());
        assert!(measure_qubits(&mut state, &[2], &mut rng).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_collapse_zero_mass_leaves_zeros() {
        let mut state = StateVector::new(1).unwrap();
        collapse(&mut state, &[0], &[1], 0.0);
        assert!(state.amplitudes().iter().all(|a| a.norm_sqr() == 0.0));
    }
}
