//! Circuitos prontos executados por shots

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use qel_quantum::{Circuit, CircuitConfig};
use serde::Serialize;
use tracing::info;

/// Circuitos disponíveis na linha de comando
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// H(0) + CNOT(0, 1)
    Bell,
    /// H(0) + cadeia de CNOTs
    Ghz,
    /// H em todos os qubits
    Uniform,
}

impl Preset {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bell => "bell",
            Self::Ghz => "ghz",
            Self::Uniform => "uniform",
        }
    }

    /// Monta o circuito em um registrador novo
    fn prepare(&self, qc: &mut Circuit) -> qel_quantum::QuantumResult<()> {
        match self {
            Self::Bell | Self::Ghz => {
                qc.apply_hadamard(0)?;
                for q in 1..qc.qubit_count() {
                    qc.apply_cnot(q - 1, q)?;
                }
            }
            Self::Uniform => {
                for q in 0..qc.qubit_count() {
                    qc.apply_hadamard(q)?;
                }
            }
        }
        Ok(())
    }
}

/// Contagem de resultados de vários shots
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub circuit: &'static str,
    pub qubits: usize,
    pub shots: usize,
    pub seed: Option<u64>,
    pub counts: BTreeMap<String, usize>,
}

/// Executa `shots` vezes, cada shot em um circuito novo
///
/// Com semente, o shot `i` usa a semente `seed + i`.
pub fn run(preset: Preset, qubits: usize, shots: usize, seed: Option<u64>) -> Result<RunReport> {
    if preset == Preset::Bell && qubits != 2 {
        bail!("bell circuit uses exactly 2 qubits, got {qubits}");
    }
    if shots == 0 {
        bail!("shots must be at least 1");
    }

    let mut counts = BTreeMap::new();
    for shot in 0..shots {
        let mut config = CircuitConfig::from_env();
        if let Some(seed) = seed {
            config = config.with_seed(seed.wrapping_add(shot as u64));
        }

        let mut qc = Circuit::with_config(qubits, config)?;
        preset.prepare(&mut qc)?;
        *counts.entry(qc.measure_all()?).or_insert(0) += 1;
    }

    info!(circuit = preset.name(), qubits, shots, distinct = counts.len(), "run finished");

    Ok(RunReport {
        circuit: preset.name(),
        qubits,
        shots,
        seed,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_only_correlated_outcomes() {
        let report = run(Preset::Bell, 2, 64, Some(7)).unwrap();
        assert_eq!(report.counts.values().sum::<usize>(), 64);
        assert!(report.counts.keys().all(|k| k == "00" || k == "11"));
    }

    #[test]
    fn test_ghz_only_all_equal_outcomes() {
        let report = run(Preset::Ghz, 4, 32, Some(1)).unwrap();
        assert!(report.counts.keys().all(|k| k == "0000" || k == "1111"));
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = run(Preset::Uniform, 3, 20, Some(99)).unwrap();
        let b = run(Preset::Uniform, 3, 20, Some(99)).unwrap();
        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn test_invalid_runs() {
        assert!(run(Preset::Bell, 3, 10, None).is_err());
        assert!(run(Preset::Uniform, 2, 0, None).is_err());
        assert!(run(Preset::Uniform, 0, 1, None).is_err());
    }
}
