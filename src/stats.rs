//! Line and comment statistics and the report written to `--stats=FILE`.

use std::{fs, path::PathBuf};

use crate::error::ParseError;

/// Running totals maintained by the tokenizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Physical lines with at least one token, header excluded.
    pub lines: usize,
    /// Physical lines on which a `#` comment started.
    pub comments: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// `--loc`
    Loc,
    /// `--comments`
    Comments,
}

impl Metric {
    pub fn read(self, counters: &Counters) -> usize {
        match self {
            Metric::Loc => counters.lines,
            Metric::Comments => counters.comments,
        }
    }
}

/// Requested metrics in report order, plus where to write them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsConfig {
    metrics: Vec<Metric>,
    destination: Option<PathBuf>,
}

impl StatsConfig {
    pub fn new(metrics: Vec<Metric>, destination: Option<PathBuf>) -> Result<Self, ParseError> {
        for (i, m) in metrics.iter().enumerate() {
            if metrics[..i].contains(m) {
                return Err(ParseError::Config(format!("statistic {m:?} requested twice")));
            }
        }
        if !metrics.is_empty() && destination.is_none() {
            return Err(ParseError::Config(
                "--loc and --comments require --stats=FILE".to_string(),
            ));
        }
        Ok(Self { metrics, destination })
    }

    /// One decimal value per line, in request order.
    pub fn report(&self, counters: &Counters) -> String {
        self.metrics
            .iter()
            .map(|m| format!("{}\n", m.read(counters)))
            .collect()
    }

    /// Write the report when a destination was given.
    pub fn write(&self, counters: &Counters) -> Result<(), ParseError> {
        let Some(path) = &self.destination else {
            return Ok(());
        };
        fs::write(path, self.report(counters)).map_err(|source| ParseError::StatsWrite {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "statistics written");
        Ok(())
    }
}
