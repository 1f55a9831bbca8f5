use rand::Rng;
use rand::seq::SliceRandom;

/// Order in which the questions of a quiz are presented.
///
/// Holds a permutation of `0..len` mapping presentation positions to
/// canonical question indices. Kept apart from the `QuizSet` so a restart can
/// reuse it without reshuffling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationOrder {
    indices: Vec<usize>,
}

impl PresentationOrder {
    /// Canonical order: position `i` shows question `i`.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    /// Uniform random permutation of `0..len` (Fisher–Yates).
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut order = Self::identity(len);
        order.indices.as_mut_slice().shuffle(rng);
        order
    }

    /// Builds either the identity or a shuffled order.
    #[must_use]
    pub fn plan<R: Rng + ?Sized>(len: usize, randomize: bool, rng: &mut R) -> Self {
        if randomize {
            Self::shuffled(len, rng)
        } else {
            Self::identity(len)
        }
    }

    /// Canonical index of the question shown at `position`.
    #[must_use]
    pub fn canonical_index(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.indices.iter().enumerate().all(|(pos, idx)| pos == *idx)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}
