//! Countdown timer and stopwatch, ticked once per second by the dashboard.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimerError {
    #[error("Not a number of minutes: {0}")]
    InvalidMinutes(String),
    #[error("Enter a positive number of minutes.")]
    NotPositive,
    #[error("The timer must run for at least one second.")]
    TooShort,
}

/// Parses the minutes typed in the command bar.
pub fn parse_minutes(input: &str) -> Result<f64, TimerError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| TimerError::InvalidMinutes(input.trim().to_string()))
}

/// `MM:SS`.
pub fn format_ms(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// `HH:MM:SS`.
pub fn format_hms(total_secs: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}

/// Outcome of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    Idle,
    Running(u64),
    Finished,
}

#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining: u64,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting down from `minutes`, replacing any running countdown.
    pub fn start(&mut self, minutes: f64) -> Result<(), TimerError> {
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(TimerError::NotPositive);
        }
        let secs = (minutes * 60.0).floor() as u64;
        if secs == 0 {
            return Err(TimerError::TooShort);
        }
        self.remaining = secs;
        self.running = true;
        Ok(())
    }

    /// Advances one second. `Finished` is returned once, on the tick that
    /// reaches zero.
    pub fn tick(&mut self) -> CountdownTick {
        if !self.running {
            return CountdownTick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            CountdownTick::Finished
        } else {
            CountdownTick::Running(self.remaining)
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining
    }

    pub fn display(&self) -> String {
        format_ms(self.remaining)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed: u64,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Does nothing if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = 0;
    }

    pub fn tick(&mut self) {
        if self.running {
            self.elapsed += 1;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed
    }

    pub fn display(&self) -> String {
        format_hms(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_ms(59), "00:59");
        assert_eq!(format_ms(25 * 60), "25:00");
    }

    #[test]
    fn test_one_minute_countdown_finishes_exactly_once() {
        let mut countdown = Countdown::new();
        countdown.start(1.0).unwrap();
        assert_eq!(countdown.display(), "01:00");

        let mut finished = 0;
        for _ in 0..120 {
            if countdown.tick() == CountdownTick::Finished {
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
        assert!(!countdown.is_running());
        assert_eq!(countdown.display(), "00:00");
    }

    #[test]
    fn test_countdown_rejects_bad_durations() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.start(0.0), Err(TimerError::NotPositive));
        assert_eq!(countdown.start(-5.0), Err(TimerError::NotPositive));
        assert_eq!(countdown.start(f64::NAN), Err(TimerError::NotPositive));
        assert_eq!(countdown.start(0.001), Err(TimerError::TooShort));
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_restart_replaces_running_countdown() {
        let mut countdown = Countdown::new();
        countdown.start(10.0).unwrap();
        countdown.tick();
        countdown.start(0.5).unwrap();
        assert_eq!(countdown.remaining_secs(), 30);
    }

    #[test]
    fn test_stop_and_reset() {
        let mut countdown = Countdown::new();
        countdown.start(1.0).unwrap();
        countdown.tick();
        countdown.stop();
        assert_eq!(countdown.tick(), CountdownTick::Idle);
        assert_eq!(countdown.remaining_secs(), 59);
        countdown.reset();
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn test_stopwatch() {
        let mut watch = Stopwatch::new();
        watch.tick();
        assert_eq!(watch.elapsed_secs(), 0);

        watch.start();
        watch.start();
        for _ in 0..3661 {
            watch.tick();
        }
        assert_eq!(watch.display(), "01:01:01");

        watch.stop();
        watch.tick();
        assert_eq!(watch.elapsed_secs(), 3661);
        watch.reset();
        assert_eq!(watch.display(), "00:00:00");
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes(" 25 "), Ok(25.0));
        assert_eq!(parse_minutes("1.5"), Ok(1.5));
        assert!(matches!(parse_minutes("ten"), Err(TimerError::InvalidMinutes(_))));
    }
}
