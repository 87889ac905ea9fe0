//! Graph configuration options.

use std::fmt;
use std::sync::Arc;

pub type ReleaseHook<V> = Arc<dyn Fn(V) + Send + Sync>;

/// Who is responsible for releasing vertex payloads.
///
/// A borrowed graph simply drops its vertices on teardown. An owned graph hands every stored
/// vertex to the release hook exactly once, either from [`Graph::destroy`](crate::Graph::destroy)
/// or from `Drop`.
pub enum Ownership<V> {
    Borrowed,
    Owned(ReleaseHook<V>),
}

impl<V> Ownership<V> {
    pub fn owned<F>(hook: F) -> Self
    where
        F: Fn(V) + Send + Sync + 'static,
    {
        Self::Owned(Arc::new(hook))
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl<V> Default for Ownership<V> {
    fn default() -> Self {
        Self::Borrowed
    }
}

impl<V> Clone for Ownership<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Borrowed => Self::Borrowed,
            Self::Owned(hook) => Self::Owned(Arc::clone(hook)),
        }
    }
}

impl<V> fmt::Debug for Ownership<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrowed => f.write_str("Borrowed"),
            Self::Owned(_) => f.write_str("Owned(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphOptions<V> {
    pub ownership: Ownership<V>,
}

impl<V> Default for GraphOptions<V> {
    fn default() -> Self {
        Self {
            ownership: Ownership::Borrowed,
        }
    }
}
