use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use super::app_error::AppError;
use super::FRAME_INTERVAL_MILLIS;

/// A fixed-interval ticker driving the route animation.
///
/// The timer advances a frame counter at a constant cadence and invokes the
/// callback once per frame. It finishes on its own after the last frame, or
/// earlier when `stop` is called. The coordinate path it animates never
/// changes mid-run, so the stop flag is the only shared state.
pub struct FrameTimer {
    running: AtomicBool,
}

impl FrameTimer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            running: AtomicBool::new(true),
        })
    }

    /// Stops the timer before its last frame.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Starts the ticking thread. The callback receives the frame index,
    /// starting at zero; join the returned handle to block until the
    /// animation is over.
    pub fn start(
        self: Arc<Self>,
        total_frames: usize,
        frame_callback: impl Fn(usize) + Send + 'static,
    ) -> Result<JoinHandle<()>, AppError> {
        thread::Builder::new()
            .name("frame-timer-thread".to_string())
            .spawn(move || {
                for frame in 0..total_frames {
                    if !self.running.load(Ordering::SeqCst) {
                        break;
                    }

                    let now = Instant::now();

                    frame_callback(frame);

                    let elapsed = now.elapsed();
                    let sleep_duration =
                        Duration::from_millis(FRAME_INTERVAL_MILLIS).saturating_sub(elapsed);
                    thread::sleep(sleep_duration);
                }

                self.running.store(false, Ordering::SeqCst);
            })
            .map_err(|_| {
                AppError::Animation("Failed to start the frame timer thread.".to_string())
            })
    }
}
