//! Cancelling various solver operations requires a [`Cancellation`].

use std::sync::Arc;

/// A Cancellation embodies a check for whether or not to abort a solve process
///
/// If you do not want to provide a cancellation, then most solver methods
/// take an `Option<Cancellation>` anyway.
///
/// Cloning a `Cancellation` shares the same underlying check, which is what lets a
/// single token be handed to every worker thread in a multithreaded brute-force search.
#[derive(Clone)]
pub struct Cancellation {
    func: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Cancellation {
    /// Create a new Cancellation from a checking function
    ///
    /// ```
    /// # use sudoku_solver_lib::solver::cancellation::Cancellation;
    /// # use std::sync::Arc;
    /// # use std::sync::atomic::AtomicBool;
    /// # use std::sync::atomic::Ordering;
    ///
    /// let cancel_token = Arc::new(AtomicBool::from(false));
    /// let cancellation = Cancellation::new({
    ///     let cancel_token = Arc::clone(&cancel_token);
    ///     move || cancel_token.load(Ordering::SeqCst)
    /// });
    ///
    /// assert_eq!(cancellation.check(), false);
    /// cancel_token.store(true, Ordering::SeqCst);
    /// assert_eq!(cancellation.check(), true);
    /// ```
    pub fn new<F>(func: F) -> Self
    where
        F: (Fn() -> bool) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Check if the cancellation has been sent
    pub fn check(&self) -> bool {
        (self.func)()
    }
}

impl<F> From<F> for Cancellation
where
    F: (Fn() -> bool) + Send + Sync + 'static,
{
    fn from(func: F) -> Self {
        Self {
            func: Arc::new(func),
        }
    }
}

impl From<Option<Cancellation>> for Cancellation {
    fn from(c: Option<Cancellation>) -> Self {
        c.unwrap_or_default()
    }
}

impl Default for Cancellation {
    /// A cancellation that never fires.
    fn default() -> Self {
        Cancellation::new(|| false)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_never_cancels() {
        let cancellation = Cancellation::default();
        assert!(!cancellation.check());
    }

    #[test]
    fn test_clone_shares_state() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let cancel_token = Arc::new(AtomicBool::from(false));
        let cancellation = Cancellation::new({
            let cancel_token = Arc::clone(&cancel_token);
            move || cancel_token.load(Ordering::SeqCst)
        });
        let cloned = cancellation.clone();

        cancel_token.store(true, Ordering::SeqCst);
        assert!(cancellation.check());
        assert!(cloned.check());
    }
}
