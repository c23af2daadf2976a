//! # ⚛️ qel-quantum — Simulador de Circuitos Quânticos
//!
//! Simulação por vetor de estado de registradores pequenos: portas unitárias
//! de um e dois qubits, medição probabilística e colapso.
//!
//! ## Computational Complexity
//!
//! **Gates — O(2^n):**
//! - Single-qubit gates visit each amplitude pair once
//! - CNOT/CZ/SWAP scan the vector once
//!
//! **Measurement — O(2^n × k):**
//! - k = number of measured qubits
//! - One pass to build the outcome distribution, one pass to collapse
//!
//! **Scalability:**
//! - n ≤ 20: ✓ Excellent (≤ 16 MiB of amplitudes)
//! - n > 25: memory bound, 2^n × 16 bytes
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 Circuit                         │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  StateVector (2^n amplitudes)             │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate Engine (Matrix2x2, CNOT, CZ)        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Measurement (RandomSource + collapse)    │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qel_quantum::{Circuit, FixedRandom};
//!
//! let mut qc = Circuit::new(2)?.with_random_source(FixedRandom::constant(0.25)?);
//! qc.apply_hadamard(0)?;
//! qc.apply_cnot(0, 1)?;
//!
//! let bits = qc.measure_all()?;
//! assert_eq!(bits, "11");
//! # Ok::<(), qel_quantum::QuantumError>(())
//! ```

pub mod circuit;
pub mod config;
pub mod error;
pub mod gates;
pub mod measurement;
pub mod state;

pub use circuit::Circuit;
pub use config::CircuitConfig;
pub use error::{ErrorKind, QuantumError, QuantumResult};
pub use gates::{
    Hadamard, Matrix2x2, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX, RotationY,
    RotationZ, SGate, TGate,
};
pub use measurement::{FixedRandom, RandomSource, StdRandom};
pub use num_complex::Complex64;
pub use state::StateVector;
