//! Debounced callbacks for the live search input.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Runs a task once after a delay. Dropping the returned handle cancels the
/// task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<Self::Handle>;
}

/// Keeps at most one pending task: scheduling a new one cancels the previous.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = self.scheduler.schedule(self.delay_ms, Box::new(task));
        if self.pending.is_none() {
            log::warn!("Could not schedule debounced task");
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// `window.setTimeout` backed scheduler.
#[derive(Default)]
pub struct BrowserScheduler;

pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<Timeout> {
        let window = web_sys::window()?;
        let closure = Closure::once(task);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .ok()?;

        Some(Timeout {
            id,
            _closure: closure,
        })
    }
}
