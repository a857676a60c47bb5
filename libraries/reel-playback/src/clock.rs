//! Playback clock
//!
//! Drives the progress indicator from 0 to 100 over the configured story
//! duration, one increment per tick. The clock itself is passive: the
//! platform layer calls [`ProgressClock::tick`] on its timer cadence and
//! tears the timer down whenever the clock should not be running.

use crate::types::ViewerConfig;

/// Result of a single clock tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockTick {
    /// Nothing happened (paused, or already completed)
    Idle,

    /// Progress advanced to the contained value
    Advanced(f32),

    /// Progress reached 100 on this tick. Returned exactly once per story;
    /// later ticks are `Idle`.
    Completed,
}

/// Countdown clock for the current story.
///
/// Progress advances by `100 / (duration / tick)` per tick while unpaused,
/// clamps at 100, and latches completion so a duplicate tick arriving before
/// timer teardown cannot fire forward navigation twice.
#[derive(Debug, Clone)]
pub struct ProgressClock {
    progress: f32,
    paused: bool,
    completed: bool,
    increment: f32,
}

impl ProgressClock {
    /// Create a clock for the given timing configuration
    pub fn new(config: &ViewerConfig) -> Self {
        let duration_ms = config.story_duration.as_millis() as f32;
        let tick_ms = config.tick_interval.as_millis() as f32;
        Self {
            progress: 0.0,
            paused: false,
            completed: false,
            increment: 100.0 / (duration_ms / tick_ms),
        }
    }

    /// Restart for a new story: progress back to 0, completion latch and
    /// pause flag cleared
    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.paused = false;
        self.completed = false;
    }

    /// Advance the clock by one tick
    pub fn tick(&mut self) -> ClockTick {
        if self.paused || self.completed {
            return ClockTick::Idle;
        }

        self.progress += self.increment;
        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.completed = true;
            ClockTick::Completed
        } else {
            ClockTick::Advanced(self.progress)
        }
    }

    /// Freeze the clock without resetting progress
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue from the frozen progress value
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Current progress percentage (0 to 100)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the clock is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether this story's countdown has finished
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn clock() -> ProgressClock {
        ProgressClock::new(&ViewerConfig::default())
    }

    #[test]
    fn increment_matches_duration_over_tick() {
        // 8000ms / 100ms = 80 ticks, 1.25% each
        let mut clock = clock();
        assert_eq!(clock.tick(), ClockTick::Advanced(1.25));
    }

    #[test]
    fn completes_after_full_duration() {
        let mut clock = clock();
        for _ in 0..79 {
            assert!(matches!(clock.tick(), ClockTick::Advanced(_)));
        }
        assert_eq!(clock.tick(), ClockTick::Completed);
        assert_eq!(clock.progress(), 100.0);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut clock = clock();
        while clock.tick() != ClockTick::Completed {}

        // A duplicate tick pending teardown must not complete again
        assert_eq!(clock.tick(), ClockTick::Idle);
        assert_eq!(clock.tick(), ClockTick::Idle);
        assert_eq!(clock.progress(), 100.0);
    }

    #[test]
    fn pause_freezes_without_reset() {
        let mut clock = clock();
        clock.tick();
        clock.tick();
        let frozen = clock.progress();

        clock.pause();
        assert_eq!(clock.tick(), ClockTick::Idle);
        assert_eq!(clock.tick(), ClockTick::Idle);
        assert_eq!(clock.progress(), frozen);

        clock.resume();
        assert_eq!(clock.tick(), ClockTick::Advanced(frozen + 1.25));
    }

    #[test]
    fn restart_clears_progress_pause_and_completion() {
        let mut clock = clock();
        while clock.tick() != ClockTick::Completed {}
        clock.pause();

        clock.restart();
        assert_eq!(clock.progress(), 0.0);
        assert!(!clock.is_paused());
        assert!(!clock.is_completed());
        assert!(matches!(clock.tick(), ClockTick::Advanced(_)));
    }

    #[test]
    fn short_duration_completes_on_first_tick() {
        let config = ViewerConfig {
            story_duration: Duration::from_millis(50),
            tick_interval: Duration::from_millis(100),
        };
        let mut clock = ProgressClock::new(&config);
        assert_eq!(clock.tick(), ClockTick::Completed);
    }
}
