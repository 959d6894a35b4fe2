use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// Cancellation signal shared between the host loop and a board.
///
/// Waits go through the condvar, so `set()` from another thread wakes a
/// sleeper immediately instead of after the full timeout.
pub struct SleepEvent {
    flag: Mutex<bool>,
    condvar: Condvar,
}

impl SleepEvent {
    pub fn new() -> Self {
        Self {
            flag: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    pub fn set(&self) {
        let mut flag = self.flag.lock().unwrap();
        *flag = true;
        self.condvar.notify_all();
    }

    pub fn clear(&self) {
        let mut flag = self.flag.lock().unwrap();
        *flag = false;
    }

    pub fn is_set(&self) -> bool {
        *self.flag.lock().unwrap()
    }

    /// Blocks up to `duration`; returns the signal state on wakeup.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let guard = self.flag.lock().unwrap();
        let (guard, _) = self
            .condvar
            .wait_timeout_while(guard, duration, |set| !*set)
            .unwrap();
        *guard
    }
}

impl Default for SleepEvent {
    fn default() -> Self {
        Self::new()
    }
}
