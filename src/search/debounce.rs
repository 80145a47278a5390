/// A scheduled task that can be called off before it runs
pub trait Cancel {
    fn cancel(self);
}

impl Cancel for tokio::task::JoinHandle<()> {
    fn cancel(self) {
        self.abort();
    }
}

impl Cancel for dioxus::prelude::Task {
    fn cancel(self) {
        dioxus::prelude::Task::cancel(self);
    }
}

/// Holds the single pending debounce task. Scheduling a new one cancels the old.
#[derive(Debug)]
pub struct Debouncer<H: Cancel> {
    pending: Option<H>,
}

impl<H: Cancel> Default for Debouncer<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: Cancel> Debouncer<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, handle: H) {
        if let Some(previous) = self.pending.replace(handle) {
            previous.cancel();
        }
    }
}
