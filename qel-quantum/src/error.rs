//! Tipos de erro para qel-quantum

use thiserror::Error;

/// Resultado customizado para operações quânticas
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Categoria do erro, como vista pelo chamador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argumento inválido (contagem, vetor de estado, qubits repetidos)
    InvalidArgument,
    /// Índice de qubit fora de `[0, qubit_count)`
    IndexOutOfRange,
}

/// Erros que podem ocorrer em operações do circuito
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("A circuit must have at least one qubit, got {0}")]
    InvalidQubitCount(usize),

    #[error("Qubit index {qubit} out of range for a {qubit_count}-qubit circuit")]
    QubitOutOfRange { qubit: usize, qubit_count: usize },

    #[error("Qubit {0} referenced more than once")]
    DuplicateQubit(usize),

    #[error("State vector length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("State vector is not normalized: total probability {norm}")]
    NotNormalized { norm: f64 },

    #[error("Random draw {0} outside [0, 1)")]
    InvalidDraw(f64),
}

impl QuantumError {
    /// Categoria do erro
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::QubitOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::InvalidQubitCount(_)
            | Self::DuplicateQubit(_)
            | Self::DimensionMismatch { .. }
            | Self::NotNormalized { .. }
            | Self::InvalidDraw(_) => ErrorKind::InvalidArgument,
        }
    }
}
