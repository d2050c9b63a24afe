use std::slice::Iter;

use serde::Serialize;

use crate::bin::Bin;
use crate::consts::DEFAULT_MAF_EDGES;
use crate::errors::{BinsError, Result};

///
/// An ordered list of bins. Lookups return the first bin, in list order,
/// whose range holds the value.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinSet {
    bins: Vec<Bin>,
}

impl BinSet {
    pub fn new(bins: Vec<Bin>) -> Self {
        BinSet { bins }
    }

    ///
    /// Build contiguous bins from consecutive edges: `[a, b, c]` gives the
    /// bins `a-b` and `b-c`.
    ///
    /// # Arguments
    /// - edges: at least two finite, strictly increasing values
    pub fn from_edges(edges: &[f64]) -> Result<Self> {
        let increasing = edges.windows(2).all(|pair| pair[0] < pair[1]);
        if edges.len() < 2 || !increasing || edges.iter().any(|edge| !edge.is_finite()) {
            return Err(BinsError::InvalidEdges(edges.to_vec()));
        }

        Ok(BinSet::new(
            edges
                .windows(2)
                .map(|pair| Bin::new(pair[0], pair[1]))
                .collect(),
        ))
    }

    /// The 14 MAF bins covering (0, 0.5).
    pub fn default_maf_bins() -> Self {
        BinSet::new(
            DEFAULT_MAF_EDGES
                .windows(2)
                .map(|pair| Bin::new(pair[0], pair[1]))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn iter(&self) -> Iter<'_, Bin> {
        self.bins.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.bins.iter().map(Bin::label).collect()
    }

    pub fn classify_index(&self, x: f64) -> Option<usize> {
        self.bins.iter().position(|bin| bin.in_range(x))
    }

    pub fn classify(&self, x: f64) -> Option<&Bin> {
        self.classify_index(x).map(|i| &self.bins[i])
    }

    ///
    /// Add `value` to the bin holding `key`. Returns false, adding nothing,
    /// when no bin holds it.
    ///
    pub fn sort_into(&mut self, key: f64, value: f64) -> bool {
        match self.classify_index(key) {
            Some(i) => {
                self.bins[i].add(value);
                true
            }
            None => false,
        }
    }

    /// Total number of values added across all bins.
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(Bin::count).sum()
    }
}

impl<'a> IntoIterator for &'a BinSet {
    type Item = &'a Bin;
    type IntoIter = Iter<'a, Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
