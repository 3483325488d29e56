use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use num_complex::Complex64;
use thiserror::Error;
use tracing::debug;

use crate::core::literal::parse_complex;

/// Columns required before any state amplitude: time and envelope.
const LEADING_COLS: usize = 2;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("input table has no data rows")]
    Empty,
    #[error("line {line}: found {found} columns, need at least 3 (time, envelope, one state)")]
    TooFewColumns { line: usize, found: usize },
    #[error("line {line}: found {found} columns, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: `{token}` is not a complex-number literal")]
    BadToken { line: usize, token: String },
}

/// One simulator run, split into its plottable axes.
///
/// Column 0 of the source table is time, column 1 the drive envelope (real
/// parts of both), and every remaining column one state amplitude. All axes
/// have equal length by construction.
#[derive(Debug, Clone)]
pub struct Trajectories {
    pub time: Vec<f64>,
    pub envelope: Vec<f64>,
    /// Per-state amplitude sequences, indexed `[state][step]`.
    pub states: Vec<Vec<Complex64>>,
}

impl Trajectories {
    pub fn from_file(path: &Path) -> Result<Self, TableError> {
        let text = read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            steps = table.n_steps(),
            states = table.n_states(),
            "loaded trajectory table"
        );
        Ok(table)
    }

    /// Parse a whitespace-delimited table of complex literals.
    ///
    /// Blank lines and `#` comment lines are skipped. The first data row
    /// fixes the column count; every later row must match it.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut time = Vec::new();
        let mut envelope = Vec::new();
        let mut states: Vec<Vec<Complex64>> = Vec::new();
        let mut expected_cols: Option<usize> = None;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut row = Vec::new();
            for token in trimmed.split_whitespace() {
                let value = parse_complex(token).ok_or_else(|| TableError::BadToken {
                    line: line_no,
                    token: token.to_string(),
                })?;
                row.push(value);
            }

            match expected_cols {
                None => {
                    if row.len() < LEADING_COLS + 1 {
                        return Err(TableError::TooFewColumns {
                            line: line_no,
                            found: row.len(),
                        });
                    }
                    expected_cols = Some(row.len());
                    states.resize(row.len() - LEADING_COLS, Vec::new());
                }
                Some(expected) => {
                    if row.len() != expected {
                        return Err(TableError::RaggedRow {
                            line: line_no,
                            expected,
                            found: row.len(),
                        });
                    }
                }
            }

            time.push(row[0].re);
            envelope.push(row[1].re);
            for (state, value) in states.iter_mut().zip(&row[LEADING_COLS..]) {
                state.push(*value);
            }
        }

        if time.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self {
            time,
            envelope,
            states,
        })
    }

    pub fn n_steps(&self) -> usize {
        self.time.len()
    }

    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Squared magnitude `|psi|^2` of every state sequence.
    pub fn populations(&self) -> Vec<Vec<f64>> {
        self.states
            .iter()
            .map(|amps| amps.iter().map(|a| a.norm_sqr()).collect())
            .collect()
    }
}
