//! Disposal notifications.
//!
//! An [`IndexedSet`](super::IndexedSet) releases its backing storage exactly
//! once, either through an explicit [`dispose`](super::IndexedSet::dispose) or
//! when it is dropped without one. A [`DisposeHook`] learns which of the two
//! happened.
//!
//! # Examples
//!
//! ```rust
//! use primeset::collections::{DisposalPath, IndexedSet};
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let set: IndexedSet<u32> = IndexedSet::builder()
//!     .dispose_hook(move |path: DisposalPath| sink.lock().unwrap().push(path))
//!     .build();
//!
//! set.dispose();
//! set.dispose();
//! drop(set);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![DisposalPath::Explicit]);
//! ```

use std::fmt;

/// How a set came to release its storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisposalPath {
    /// [`dispose`](super::IndexedSet::dispose) was called.
    Explicit,
    /// The set was dropped without being disposed first.
    Reclaimed,
}

impl fmt::Display for DisposalPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(formatter, "explicit"),
            Self::Reclaimed => write!(formatter, "reclaimed"),
        }
    }
}

/// Observer notified when a set releases its storage.
///
/// Called at most once per set, after the storage is gone and the lock has
/// been released.
pub trait DisposeHook: Send + Sync {
    /// Receives the path that released the storage.
    fn on_dispose(&self, path: DisposalPath);
}

impl<F> DisposeHook for F
where
    F: Fn(DisposalPath) + Send + Sync,
{
    fn on_dispose(&self, path: DisposalPath) {
        self(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DisposalPath::Explicit, "explicit")]
    #[case(DisposalPath::Reclaimed, "reclaimed")]
    fn test_disposal_path_display(#[case] path: DisposalPath, #[case] expected: &str) {
        assert_eq!(path.to_string(), expected);
    }

    #[rstest]
    fn test_closure_is_a_hook() {
        let hook = |path: DisposalPath| assert_eq!(path, DisposalPath::Reclaimed);
        hook.on_dispose(DisposalPath::Reclaimed);
    }
}
