//! Snapshot-swappable handle around a [`Recommender`].

use super::Recommender;
use std::sync::{Arc, PoisonError, RwLock};

/// Shares one immutable [`Recommender`] between readers and allows replacing
/// it wholesale.
///
/// Readers take a [`snapshot`](SharedRecommender::snapshot) and query it
/// without holding any lock, so a [`replace`](SharedRecommender::replace)
/// never affects a query already in flight: it keeps the catalog, scaler and
/// standardized matrix it started with.
///
/// # Examples
///
/// ```
/// use sonance::prelude::*;
///
/// let build = |ids: &[&str]| {
///     let items = ids
///         .iter()
///         .enumerate()
///         .map(|(i, id)| Item::new(*id, vec![i as f32, (i * i) as f32]))
///         .collect();
///     let catalog = Catalog::new(vec!["x".into(), "y".into()], items).unwrap();
///     Recommender::fit(catalog).unwrap()
/// };
///
/// let shared = SharedRecommender::new(build(&["a", "b", "c"]));
/// let before = shared.snapshot();
/// shared.replace(build(&["a", "b", "c", "d"]));
///
/// assert_eq!(before.catalog().len(), 3);
/// assert_eq!(shared.snapshot().catalog().len(), 4);
/// ```
#[derive(Debug)]
pub struct SharedRecommender {
    current: RwLock<Arc<Recommender>>,
}

impl SharedRecommender {
    /// Wraps an initial recommender.
    #[must_use]
    pub fn new(recommender: Recommender) -> Self {
        Self {
            current: RwLock::new(Arc::new(recommender)),
        }
    }

    /// The recommender currently being served.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Recommender> {
        // The guarded value is a plain Arc, so a poisoned lock still holds a
        // consistent snapshot.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Atomically swaps in a new recommender, returning the previous one.
    pub fn replace(&self, recommender: Recommender) -> Arc<Recommender> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(recommender))
    }
}
