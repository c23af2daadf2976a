//! # Quantum Gates — Portas Quânticas
//!
//! Matrizes 2x2 das portas padrão e os kernels que as aplicam ao vetor de
//! estado sem montar o operador completo 2^n × 2^n.
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: H (Hadamard), X, Y, Z (Pauli), S, T (Phase), P(φ)
//! - **Two-qubit**: CNOT, CZ, SWAP
//! - **Rotation**: Rx, Ry, Rz
//!
//! Todos os kernels calculam um buffer novo a partir de uma visão imutável
//! do estado anterior e só então o trocam.

use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

use crate::error::QuantumResult;
use crate::state::StateVector;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex64; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz a partir dos elementos
    pub const fn new(elements: [[Complex64; 2]; 2]) -> Self {
        Self { elements }
    }

    /// Cria matriz identidade
    pub const fn identity() -> Self {
        Self::new([[ONE, ZERO], [ZERO, ONE]])
    }

    /// Aplica gate a um estado [alpha, beta]
    pub fn apply(&self, state: [Complex64; 2]) -> [Complex64; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2::new([
            [a * e + b * g, a * f + b * h],
            [c * e + d * g, c * f + d * h],
        ])
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2::new([[a.conj(), c.conj()], [b.conj(), d.conj()]])
    }

    /// Verifica se M·M† ≈ I
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        let product = self.mul(&self.dagger());
        let identity = Matrix2x2::identity();

        product
            .elements
            .iter()
            .flatten()
            .zip(identity.elements.iter().flatten())
            .all(|(p, i)| (p - i).norm() < tolerance)
    }
}

impl Default for Matrix2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Trait para portas quânticas de um qubit
pub trait QuantumGate: Send + Sync {
    /// Nome da porta
    fn name(&self) -> &'static str;

    /// Matriz da porta
    fn matrix(&self) -> Matrix2x2;

    /// Verifica se é unitária
    fn is_unitary(&self) -> bool {
        self.matrix().is_unitary(1e-10)
    }
}

// =============================================================================
// Portas Padrão
// =============================================================================

/// Porta Hadamard: cria superposição
#[derive(Clone, Copy, Debug, Default)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn name(&self) -> &'static str {
        "H"
    }

    fn matrix(&self) -> Matrix2x2 {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Matrix2x2::new([[h, h], [h, -h]])
    }
}

/// Porta Pauli-X (NOT quântico)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliX;

impl QuantumGate for PauliX {
    fn name(&self) -> &'static str {
        "X"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new([[ZERO, ONE], [ONE, ZERO]])
    }
}

/// Porta Pauli-Y
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliY;

impl QuantumGate for PauliY {
    fn name(&self) -> &'static str {
        "Y"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new([[ZERO, -I], [I, ZERO]])
    }
}

/// Porta Pauli-Z (phase flip)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliZ;

impl QuantumGate for PauliZ {
    fn name(&self) -> &'static str {
        "Z"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new([[ONE, ZERO], [ZERO, -ONE]])
    }
}

/// Porta S (√Z)
#[derive(Clone, Copy, Debug, Default)]
pub struct SGate;

impl QuantumGate for SGate {
    fn name(&self) -> &'static str {
        "S"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new([[ONE, ZERO], [ZERO, I]])
    }
}

/// Porta T (π/8)
#[derive(Clone, Copy, Debug, Default)]
pub struct TGate;

impl QuantumGate for TGate {
    fn name(&self) -> &'static str {
        "T"
    }

    fn matrix(&self) -> Matrix2x2 {
        let phase = Complex64::new(FRAC_PI_4.cos(), FRAC_PI_4.sin());
        Matrix2x2::new([[ONE, ZERO], [ZERO, phase]])
    }
}

/// Porta de rotação em X
#[derive(Clone, Copy, Debug)]
pub struct RotationX {
    pub theta: f64,
}

impl RotationX {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationX {
    fn name(&self) -> &'static str {
        "Rx"
    }

    fn matrix(&self) -> Matrix2x2 {
        let c = (self.theta / 2.0).cos();
        let s = (self.theta / 2.0).sin();
        Matrix2x2::new([
            [Complex64::new(c, 0.0), Complex64::new(0.0, -s)],
            [Complex64::new(0.0, -s), Complex64::new(c, 0.0)],
        ])
    }
}

/// Porta de rotação em Y
#[derive(Clone, Copy, Debug)]
pub struct RotationY {
    pub theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationY {
    fn name(&self) -> &'static str {
        "Ry"
    }

    fn matrix(&self) -> Matrix2x2 {
        let c = (self.theta / 2.0).cos();
        let s = (self.theta / 2.0).sin();
        Matrix2x2::new([
            [Complex64::new(c, 0.0), Complex64::new(-s, 0.0)],
            [Complex64::new(s, 0.0), Complex64::new(c, 0.0)],
        ])
    }
}

/// Porta de rotação em Z
#[derive(Clone, Copy, Debug)]
pub struct RotationZ {
    pub theta: f64,
}

impl RotationZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationZ {
    fn name(&self) -> &'static str {
        "Rz"
    }

    fn matrix(&self) -> Matrix2x2 {
        let c = (self.theta / 2.0).cos();
        let s = (self.theta / 2.0).sin();
        Matrix2x2::new([
            [Complex64::new(c, -s), ZERO],
            [ZERO, Complex64::new(c, s)],
        ])
    }
}

/// Porta de fase genérica
#[derive(Clone, Copy, Debug)]
pub struct Phase {
    pub phi: f64,
}

impl Phase {
    pub fn new(phi: f64) -> Self {
        Self { phi }
    }
}

impl QuantumGate for Phase {
    fn name(&self) -> &'static str {
        "P"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new([
            [ONE, ZERO],
            [ZERO, Complex64::new(self.phi.cos(), self.phi.sin())],
        ])
    }
}

// =============================================================================
// Kernels sobre o vetor de estado
// =============================================================================

/// Aplica uma matriz 2x2 ao qubit `qubit`
///
/// Os índices são agrupados em pares `{i, i | mask}` com o bit do qubit em 0;
/// cada par é combinado linearmente pela matriz.
pub fn apply_single_qubit(
    state: &mut StateVector,
    qubit: usize,
    matrix: &Matrix2x2,
) -> QuantumResult<()> {
    state.check_qubit(qubit)?;

    let mask = state.mask(qubit);
    let old = state.amplitudes();
    let mut next = vec![ZERO; old.len()];

    for index in (0..old.len()).filter(|i| i & mask == 0) {
        let partner = index | mask;
        let [new0, new1] = matrix.apply([old[index], old[partner]]);
        next[index] = new0;
        next[partner] = new1;
    }

    state.replace(next);
    Ok(())
}

/// CNOT: inverte o bit alvo nos estados da base com controle em 1
pub fn apply_controlled_not(
    state: &mut StateVector,
    control: usize,
    target: usize,
) -> QuantumResult<()> {
    state.check_distinct(control, target)?;

    let control_mask = state.mask(control);
    let target_mask = state.mask(target);
    let old = state.amplitudes();
    let mut next = vec![ZERO; old.len()];

    for (index, &amplitude) in old.iter().enumerate() {
        let destination = if index & control_mask != 0 {
            index ^ target_mask
        } else {
            index
        };
        next[destination] += amplitude;
    }

    state.replace(next);
    Ok(())
}

/// CZ: nega a amplitude quando controle e alvo estão em 1
pub fn apply_controlled_z(
    state: &mut StateVector,
    control: usize,
    target: usize,
) -> QuantumResult<()> {
    state.check_distinct(control, target)?;

    let both = state.mask(control) | state.mask(target);
    let next = state
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(index, &amplitude)| if index & both == both { -amplitude } else { amplitude })
        .collect();

    state.replace(next);
    Ok(())
}

/// SWAP: troca os valores de dois qubits
pub fn apply_swap(state: &mut StateVector, a: usize, b: usize) -> QuantumResult<()> {
    state.check_distinct(a, b)?;

    let mask_a = state.mask(a);
    let mask_b = state.mask(b);
    let old = state.amplitudes();
    let mut next = vec![ZERO; old.len()];

    for (index, &amplitude) in old.iter().enumerate() {
        let bits_differ = ((index & mask_a) != 0) != ((index & mask_b) != 0);
        let destination = if bits_differ {
            index ^ mask_a ^ mask_b
        } else {
            index
        };
        next[destination] += amplitude;
    }

    state.replace(next);
    Ok(())
}

// =============================================================================
// Testes
// =============================================================================
