//! Abstractions over clock-text rendering.
//!
//! This module provides:
//! - `ClockFormatter`: turns a validated time of day into display text
//! - `TwelveHourClock`: the production 12-hour AM/PM/Noon rendering
//! - `MockClockFormatter`: a recording double for tests

use std::sync::{Arc, Mutex};

use chrono::NaiveTime;

use crate::time::format_clock_time;

// ==================== ClockFormatter Trait ====================

/// Trait for rendering a time of day.
///
/// The merge algorithm only ever hands validated times to a formatter.
pub trait ClockFormatter: Send + Sync {
    fn format(&self, time: NaiveTime) -> String;
}

/// 12-hour clock, e.g. `"9 AM"`, `"Noon"`, `"9:5 PM"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwelveHourClock;

impl ClockFormatter for TwelveHourClock {
    fn format(&self, time: NaiveTime) -> String {
        format_clock_time(time)
    }
}

/// Mock formatter that renders `HH:MM` and records every time it was asked for.
#[derive(Debug, Clone, Default)]
pub struct MockClockFormatter {
    calls: Arc<Mutex<Vec<NaiveTime>>>,
}

impl MockClockFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all times that have been formatted, in call order.
    pub fn get_calls(&self) -> Vec<NaiveTime> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

impl ClockFormatter for MockClockFormatter {
    fn format(&self, time: NaiveTime) -> String {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(time);
        }
        time.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_hour_clock_delegates() {
        let time = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        assert_eq!(TwelveHourClock.format(time), "5 PM");
    }

    #[test]
    fn test_mock_formatter_records_calls() {
        let formatter = MockClockFormatter::new();
        assert_eq!(formatter.call_count(), 0);

        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let five = NaiveTime::from_hms_opt(17, 5, 0).unwrap();

        assert_eq!(formatter.format(nine), "09:00");
        assert_eq!(formatter.format(five), "17:05");

        assert_eq!(formatter.call_count(), 2);
        assert_eq!(formatter.get_calls(), vec![nine, five]);
    }

    #[test]
    fn test_mock_formatter_clones_share_state() {
        let formatter = MockClockFormatter::new();
        let clone = formatter.clone();

        clone.format(NaiveTime::from_hms_opt(1, 0, 0).unwrap());

        assert_eq!(formatter.call_count(), 1);
    }
}
