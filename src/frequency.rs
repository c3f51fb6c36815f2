use std::collections::BTreeMap;

/// Occurrence count per symbol, iterated in symbol order.
///
/// The iteration order is what [`crate::builder::TreeBuilder`] numbers the
/// leaves by, so equal-weight ties always resolve the same way for the same
/// histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<S> {
    counts: BTreeMap<S, usize>,
}

impl<S: Ord + Clone> Histogram<S> {
    pub fn new() -> Self {
        Histogram {
            counts: BTreeMap::new(),
        }
    }

    /// Histogram with caller-supplied weights. A symbol listed twice keeps the
    /// sum of its weights.
    pub fn from_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
    {
        let counts = weights
            .into_iter()
            .fold(BTreeMap::new(), |mut acc, (symbol, weight)| {
                *acc.entry(symbol).or_insert(0) += weight;
                acc
            });
        Histogram { counts }
    }

    pub fn add(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    pub fn get(&self, symbol: &S) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.counts.iter().map(|(s, &c)| (s, c))
    }

    /// One `(symbol, count)` pair per distinct symbol, ready for the tree builder.
    pub fn weighted_leaves(&self) -> Vec<(S, usize)> {
        self.counts
            .iter()
            .map(|(s, &c)| (s.clone(), c))
            .collect()
    }
}

impl<S: Ord + Clone> Default for Histogram<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord + Clone> FromIterator<S> for Histogram<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut hist = Histogram::new();
        for symbol in iter {
            hist.add(symbol);
        }
        hist
    }
}

/// Count the occurrences of every symbol in `symbols`.
pub fn build_histogram<S: Ord + Clone>(symbols: &[S]) -> Histogram<S> {
    symbols.iter().cloned().collect()
}
