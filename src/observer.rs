//! Progress and log callbacks for the conversion pipeline.
//!
//! The pipeline reports coarse milestones (one progress tick per page, one
//! log line per stage) to a [`ConversionObserver`]. Observers are invoked
//! synchronously on the calling thread, never concurrently. Every method has
//! a no-op default, so an implementation overrides only what it needs.
//!
//! # Example
//!
//! ```
//! use pagemd::observer::ConversionObserver;
//!
//! struct PageCounter {
//!     seen: usize,
//! }
//!
//! impl ConversionObserver for PageCounter {
//!     fn on_progress(&mut self, done: usize, _total: usize) {
//!         self.seen = done;
//!     }
//! }
//! ```

/// Receives progress and log events from the pipeline.
pub trait ConversionObserver {
    /// Called after each page has been rendered.
    ///
    /// # Arguments
    /// * `done` - pages rendered so far
    /// * `total` - total page slots in the document
    fn on_progress(&mut self, done: usize, total: usize) {
        let _ = (done, total);
    }

    /// Called with a human-readable status message at stage milestones.
    fn on_log(&mut self, message: &str) {
        let _ = message;
    }
}

/// An observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ConversionObserver for NoopObserver {}

impl<T: ConversionObserver + ?Sized> ConversionObserver for &mut T {
    fn on_progress(&mut self, done: usize, total: usize) {
        (**self).on_progress(done, total);
    }

    fn on_log(&mut self, message: &str) {
        (**self).on_log(message);
    }
}

type ProgressFn<'a> = Box<dyn FnMut(usize, usize) + 'a>;
type LogFn<'a> = Box<dyn FnMut(&str) + 'a>;

/// An observer backed by optional closures.
#[derive(Default)]
pub struct Callbacks<'a> {
    progress: Option<ProgressFn<'a>>,
    log: Option<LogFn<'a>>,
}

impl<'a> Callbacks<'a> {
    /// Create an observer with no callbacks installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the progress callback.
    pub fn with_progress(mut self, f: impl FnMut(usize, usize) + 'a) -> Self {
        self.progress = Some(Box::new(f));
        self
    }

    /// Install the log callback.
    pub fn with_log(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.log = Some(Box::new(f));
        self
    }
}

impl ConversionObserver for Callbacks<'_> {
    fn on_progress(&mut self, done: usize, total: usize) {
        if let Some(f) = self.progress.as_mut() {
            f(done, total);
        }
    }

    fn on_log(&mut self, message: &str) {
        if let Some(f) = self.log.as_mut() {
            f(message);
        }
    }
}

impl std::fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("progress", &self.progress.is_some())
            .field("log", &self.log.is_some())
            .finish()
    }
}
