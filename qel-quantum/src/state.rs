//! Vetor de estado (amplitudes) de um registrador de n qubits
//!
//! O índice de uma amplitude codifica os valores dos qubits: o qubit 0 é o
//! bit mais significativo, o qubit `n-1` o menos significativo.

use num_complex::Complex64;

use crate::error::{QuantumError, QuantumResult};

/// Amplitudes de um registrador de `qubit_count` qubits
///
/// Só pode ser construído por [`StateVector::new`], então comprimento e
/// normalização valem sempre.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    /// Número de qubits, fixo após a construção
    qubit_count: usize,
    /// 2^n amplitudes complexas
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Cria registrador no estado |0...0⟩
    pub fn new(qubit_count: usize) -> QuantumResult<Self> {
        // 2^n precisa caber em usize
        if qubit_count < 1 || qubit_count >= usize::BITS as usize {
            return Err(QuantumError::InvalidQubitCount(qubit_count));
        }

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << qubit_count];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            qubit_count,
            amplitudes,
        })
    }

    /// Número de qubits
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Dimensão do espaço (2^n)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Visão imutável das amplitudes
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Cópia das amplitudes
    pub fn to_vec(&self) -> Vec<Complex64> {
        self.amplitudes.clone()
    }

    /// Probabilidade de cada estado da base (|a|²)
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Soma das probabilidades
    pub fn total_probability(&self) -> f64 {
        total_probability(&self.amplitudes)
    }

    /// Verifica normalização dentro da tolerância
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_probability() - 1.0).abs() <= tolerance
    }

    /// Máscara do bit do qubit `qubit` dentro de um índice
    #[inline]
    pub fn mask(&self, qubit: usize) -> usize {
        1 << (self.qubit_count - 1 - qubit)
    }

    /// Valor (0/1) do qubit `qubit` no estado da base `index`
    #[inline]
    pub fn bit(&self, index: usize, qubit: usize) -> u8 {
        ((index >> (self.qubit_count - 1 - qubit)) & 1) as u8
    }

    /// Valida um índice de qubit
    pub fn check_qubit(&self, qubit: usize) -> QuantumResult<()> {
        if qubit >= self.qubit_count {
            return Err(QuantumError::QubitOutOfRange {
                qubit,
                qubit_count: self.qubit_count,
            });
        }
        Ok(())
    }

    /// Valida par controle/alvo: ambos no intervalo e distintos
    pub fn check_distinct(&self, a: usize, b: usize) -> QuantumResult<()> {
        self.check_qubit(a)?;
        self.check_qubit(b)?;
        if a == b {
            return Err(QuantumError::DuplicateQubit(a));
        }
        Ok(())
    }

    /// Valida lista de qubits: primeiro intervalo, depois repetição
    pub fn check_qubits(&self, qubits: &[usize]) -> QuantumResult<()> {
        for &q in qubits {
            self.check_qubit(q)?;
        }
        for (i, &q) in qubits.iter().enumerate() {
            if qubits[..i].contains(&q) {
                return Err(QuantumError::DuplicateQubit(q));
            }
        }
        Ok(())
    }

    /// Substitui todas as amplitudes por um vetor arbitrário
    ///
    /// Rejeita vetores de tamanho errado ou não normalizados; não renormaliza.
    pub fn initialize(&mut self, amplitudes: &[Complex64], tolerance: f64) -> QuantumResult<()> {
        if amplitudes.len() != self.dimension() {
            return Err(QuantumError::DimensionMismatch {
                expected: self.dimension(),
                actual: amplitudes.len(),
            });
        }

        let norm = total_probability(amplitudes);
        // NaN também falha aqui
        if !((norm - 1.0).abs() <= tolerance) {
            return Err(QuantumError::NotNormalized { norm });
        }

        self.amplitudes.copy_from_slice(amplitudes);
        Ok(())
    }

    /// Troca as amplitudes por um buffer recém-calculado
    pub(crate) fn replace(&mut self, buffer: Vec<Complex64>) {
        debug_assert_eq!(buffer.len(), self.amplitudes.len());
        self.amplitudes = buffer;
    }
}

fn total_probability(amplitudes: &[Complex64]) -> f64 {
    amplitudes.iter().map(|a| a.norm_sqr()).sum()
}
