use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A handle to a host timer that can be cancelled.
pub trait Cancel {
    fn cancel(&self);
}

/// Owns a timer handle and cancels it exactly once: on `release` or on drop.
#[derive(Debug)]
pub struct ScopedTimer<H: Cancel> {
    handle: Option<H>,
}

impl<H: Cancel> ScopedTimer<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl<H: Cancel> Drop for ScopedTimer<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// A timer slot shared by the timer's own callback and the view's cleanup.
///
/// Whichever side clears it first cancels the timer; later clears do nothing.
#[derive(Debug)]
pub struct SharedTimer<H: Cancel> {
    slot: Arc<Mutex<Option<ScopedTimer<H>>>>,
}

impl<H: Cancel> Default for SharedTimer<H> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }
}

impl<H: Cancel> Clone for SharedTimer<H> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<H: Cancel> SharedTimer<H> {
    /// Stores `handle`, cancelling any timer armed before it.
    pub fn arm(&self, handle: H) {
        let previous = self.lock().replace(ScopedTimer::new(handle));
        drop(previous);
    }

    pub fn clear(&self) {
        let taken = self.lock().take();
        drop(taken);
    }

    fn lock(&self) -> MutexGuard<'_, Option<ScopedTimer<H>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct CountingHandle(Arc<AtomicUsize>);

    impl Cancel for CountingHandle {
        fn cancel(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_release_then_drop_cancels_once() {
        let handle = CountingHandle::default();
        let count = handle.0.clone();
        let mut timer = ScopedTimer::new(handle);
        timer.release();
        timer.release();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        drop(timer);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_cancels() {
        let handle = CountingHandle::default();
        let count = handle.0.clone();
        {
            let _timer = ScopedTimer::new(handle);
            assert_eq!(count.load(Ordering::SeqCst), 0);
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_finished_then_cleanup_cancels_once() {
        let handle = CountingHandle::default();
        let count = handle.0.clone();
        let timer = SharedTimer::default();
        let on_tick = timer.clone();
        let on_cleanup = timer.clone();
        timer.arm(handle);

        // the interval sees the last character, then the view is torn down
        on_tick.clear();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        on_cleanup.clear();
        drop(on_cleanup);
        drop(on_tick);
        drop(timer);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cleanup_before_finish_cancels_once() {
        let handle = CountingHandle::default();
        let count = handle.0.clone();
        let timer = SharedTimer::default();
        let on_tick = timer.clone();
        timer.arm(handle);

        timer.clear();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        on_tick.clear();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rearm_cancels_previous() {
        let first = CountingHandle::default();
        let second = CountingHandle::default();
        let (first_count, second_count) = (first.0.clone(), second.0.clone());
        let timer = SharedTimer::default();
        timer.arm(first);
        timer.arm(second);
        assert_eq!(first_count.load(Ordering::SeqCst), 1);
        assert_eq!(second_count.load(Ordering::SeqCst), 0);
        drop(timer);
        // dropping the last clone cancels whatever is still armed
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
    }
}
