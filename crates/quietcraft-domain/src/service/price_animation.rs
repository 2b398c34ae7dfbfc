//! Count-up animation for a calculated price

use std::time::Duration;

pub const COUNT_UP_STEPS: u32 = 20;
pub const COUNT_UP_TOTAL: Duration = Duration::from_millis(1000);

/// Interval between two frames
pub fn frame_interval() -> Duration {
    COUNT_UP_TOTAL / COUNT_UP_STEPS
}

/// Displayed amounts from the first step up to `target`; the last frame is
/// exactly `target`.
pub fn count_up_frames(target: f64) -> Vec<f64> {
    (1..=COUNT_UP_STEPS)
        .map(|step| {
            if step == COUNT_UP_STEPS {
                target
            } else {
                target * f64::from(step) / f64::from(COUNT_UP_STEPS)
            }
        })
        .collect()
}
