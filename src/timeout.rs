use std::time::{Duration, Instant};

#[cfg(feature = "handle-ctrlc")]
use crate::signals::received_ctrl_c;

/// Cooperative cancellation, polled once per search iteration.
pub trait Stopper {
    fn stop(&mut self) -> bool;
    fn init(&mut self);
}

/// Stops once the wall-clock budget is used up.
pub struct Timer {
    timer: Instant,
    duration: Duration,
}

impl Timer {
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: Instant::now(),
            duration,
        }
    }
}

impl Stopper for Timer {
    fn stop(&mut self) -> bool {
        #[cfg(feature = "handle-ctrlc")]
        if received_ctrl_c() {
            return true;
        }
        self.timer.elapsed() >= self.duration
    }

    fn init(&mut self) {
        self.timer = Instant::now();
    }
}

/// Never stops on its own.
pub struct Unlimited;

impl Stopper for Unlimited {
    fn stop(&mut self) -> bool {
        #[cfg(feature = "handle-ctrlc")]
        if received_ctrl_c() {
            return true;
        }
        false
    }

    fn init(&mut self) {}
}
