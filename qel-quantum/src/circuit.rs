//! Circuito quântico: registrador, portas e medições

use num_complex::Complex64;
use std::fmt;
use tracing::debug;

use crate::config::CircuitConfig;
use crate::error::QuantumResult;
use crate::gates::{
    self, Hadamard, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX, RotationY, RotationZ,
    SGate, TGate,
};
use crate::measurement::{self, RandomSource, StdRandom};
use crate::state::StateVector;

/// Simulador de vetor de estado para um registrador de n qubits
///
/// Começa em |0...0⟩. Cada porta e cada medição substitui o vetor inteiro;
/// validações sempre precedem a mutação.
pub struct Circuit {
    /// Amplitudes e invariantes
    state: StateVector,
    /// Bits da medição mais recente, na ordem pedida
    last_measurement: Vec<u8>,
    /// Fonte aleatória da amostragem
    rng: Box<dyn RandomSource>,
    /// Configuração
    config: CircuitConfig,
}

impl Circuit {
    /// Cria circuito com configuração lida do ambiente
    pub fn new(qubit_count: usize) -> QuantumResult<Self> {
        Self::with_config(qubit_count, CircuitConfig::from_env())
    }

    /// Cria circuito com configuração explícita
    pub fn with_config(qubit_count: usize, config: CircuitConfig) -> QuantumResult<Self> {
        let state = StateVector::new(qubit_count)?;
        let rng = match config.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        };

        debug!(qubit_count, seed = ?config.seed, "circuit created");

        Ok(Self {
            state,
            last_measurement: Vec::new(),
            rng: Box::new(rng),
            config,
        })
    }

    /// Substitui a fonte aleatória usada nas medições
    pub fn with_random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Troca a fonte aleatória de um circuito existente
    pub fn set_random_source(&mut self, rng: impl RandomSource + 'static) {
        self.rng = Box::new(rng);
    }

    /// Número de qubits
    pub fn qubit_count(&self) -> usize {
        self.state.qubit_count()
    }

    /// Configuração em uso
    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    // =========================================================================
    // Portas
    // =========================================================================

    /// Aplica qualquer porta de um qubit
    pub fn apply_gate(&mut self, qubit: usize, gate: &impl QuantumGate) -> QuantumResult<()> {
        gates::apply_single_qubit(&mut self.state, qubit, &gate.matrix())?;
        debug!(gate = gate.name(), qubit, "gate applied");
        Ok(())
    }

    pub fn apply_hadamard(&mut self, qubit: usize) -> QuantumResult<()> {
        self.apply_gate(qubit, &Hadamard)
    }

    pub fn apply_pauli_x(&mut self, qubit: usize) -> QuantumResult<()> {
        self.apply_gate(qubit, &PauliX)
    }

    pub fn apply_pauli_y(&mut self, qubit: usize) -> QuantumResult<()> {
        self.apply_gate(qubit, &PauliY)
    }

    pub fn apply_pauli_z(&mut self, qubit: usize) -> QuantumResult<()> {
        self.apply_gate(qubit, &PauliZ)
    }

    /// Porta S (fase de π/2)
    pub fn apply_s(&mut self, qubit: usize) -> QuantumResult<()> {
        self.apply_gate(qubit, &SGate)
    }

    /// Porta T (fase de π/4)
    pub fn apply_t(&mut self, qubit: usize) -> QuantumResult<()> {
        self.apply_gate(qubit, &TGate)
    }

    /// Porta de fase arbitrária P(φ)
    pub fn apply_phase(&mut self, qubit: usize, phi: f64) -> QuantumResult<()> {
        self.apply_gate(qubit, &Phase::new(phi))
    }

    pub fn apply_rotation_x(&mut self, qubit: usize, theta: f64) -> QuantumResult<()> {
        self.apply_gate(qubit, &RotationX::new(theta))
    }

    pub fn apply_rotation_y(&mut self, qubit: usize, theta: f64) -> QuantumResult<()> {
        self.apply_gate(qubit, &RotationY::new(theta))
    }

    pub fn apply_rotation_z(&mut self, qubit: usize, theta: f64) -> QuantumResult<()> {
        self.apply_gate(qubit, &RotationZ::new(theta))
    }

    /// CNOT; controle e alvo precisam ser distintos
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        gates::apply_controlled_not(&mut self.state, control, target)?;
        debug!(control, target, "CNOT applied");
        Ok(())
    }

    /// CZ; controle e alvo precisam ser distintos
    pub fn apply_cz(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        gates::apply_controlled_z(&mut self.state, control, target)?;
        debug!(control, target, "CZ applied");
        Ok(())
    }

    pub fn apply_swap(&mut self, a: usize, b: usize) -> QuantumResult<()> {
        gates::apply_swap(&mut self.state, a, b)?;
        debug!(a, b, "SWAP applied");
        Ok(())
    }

    // =========================================================================
    // Medição
    // =========================================================================

    /// Mede um qubit, colapsando o estado
    pub fn measure(&mut self, qubit: usize) -> QuantumResult<u8> {
        let outcome = measurement::measure_qubits(&mut self.state, &[qubit], self.rng.as_mut())?;
        self.last_measurement = outcome.clone();
        Ok(outcome[0])
    }

    /// Mede todos os qubits, um de cada vez, do qubit 0 ao n-1
    ///
    /// Cada medição colapsa o estado antes da próxima.
    pub fn measure_all(&mut self) -> QuantumResult<String> {
        let mut bits = Vec::with_capacity(self.qubit_count());
        for qubit in 0..self.qubit_count() {
            let outcome =
                measurement::measure_qubits(&mut self.state, &[qubit], self.rng.as_mut())?;
            bits.extend(outcome);
        }
        self.last_measurement = bits;
        Ok(bits_to_string(&self.last_measurement))
    }

    /// Mede em conjunto os qubits pedidos; bits na ordem pedida
    pub fn measure_subset(&mut self, qubits: &[usize]) -> QuantumResult<String> {
        let outcome = measurement::measure_qubits(&mut self.state, qubits, self.rng.as_mut())?;
        self.last_measurement = outcome;
        Ok(bits_to_string(&self.last_measurement))
    }

    /// Bits da medição mais recente
    pub fn last_measurement(&self) -> &[u8] {
        &self.last_measurement
    }

    // =========================================================================
    // Estado
    // =========================================================================

    /// Cópia do vetor de estado
    pub fn state_vector(&self) -> Vec<Complex64> {
        self.state.to_vec()
    }

    /// Probabilidade de cada estado da base
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    /// Visão imutável das amplitudes
    pub fn amplitudes(&self) -> &[Complex64] {
        self.state.amplitudes()
    }

    /// Injeta um estado arbitrário, copiado sem renormalização
    pub fn initialize_state(&mut self, amplitudes: &[Complex64]) -> QuantumResult<()> {
        self.state.initialize(amplitudes, self.config.norm_tolerance)?;
        debug!(dimension = amplitudes.len(), "state initialized");
        Ok(())
    }
}

fn bits_to_string(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circuit")
            .field("state", &self.state)
            .field("last_measurement", &self.last_measurement)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.qubit_count();
        let mut first = true;
        for (index, amplitude) in self.state.amplitudes().iter().enumerate() {
            if amplitude.norm_sqr() < 1e-12 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            write!(
                f,
                "({:.4}{:+.4}i)|{:0width$b}⟩",
                amplitude.re,
                amplitude.im,
                index,
                width = n
            )?;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
