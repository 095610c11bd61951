use std::cell::Cell;

/// Source of cancellation requests observed at tile boundaries.
pub trait CancelToken {
    /// Reports a pending request and clears it, so each request is observed once.
    fn take_request(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn take_request(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool,
{
    #[inline]
    fn take_request(&self) -> bool {
        self()
    }
}

/// Request/observe/clear flag shared on the render thread.
///
/// Requests raised before anyone observes them coalesce into one.
#[derive(Debug, Default)]
pub struct CancellationFlag {
    requested: Cell<bool>,
}

impl CancellationFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requested.set(true);
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }

    pub fn clear(&self) {
        self.requested.set(false);
    }
}

impl CancelToken for CancellationFlag {
    fn take_request(&self) -> bool {
        self.requested.replace(false)
    }
}
