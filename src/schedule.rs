use chrono::Weekday;
use serde::Deserialize;

use crate::{
    error::ScheduleError,
    merge::format_day,
    time::{EventKind, TimeEvent},
    traits::{ClockFormatter, TwelveHourClock},
};

/// Days in report order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Capitalized day name used in report lines.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Lowercase day name, as used for input keys and in error messages.
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Events configured for one calendar day, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule {
    events: Vec<TimeEvent>,
}

impl DaySchedule {
    pub fn new(events: Vec<TimeEvent>) -> Self {
        Self { events }
    }

    /// A day deliberately closed (no events).
    pub fn closed() -> Self {
        Self::default()
    }

    /// A day with no data provided.
    pub fn unset() -> Self {
        Self::new(vec![TimeEvent::unset()])
    }

    pub fn events(&self) -> &[TimeEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Earliest event of the day, which is what a previous day borrows to close
    /// a range left open overnight.
    pub fn first_event(&self) -> Option<&TimeEvent> {
        self.events.iter().min_by_key(|event| event.seconds_of_day)
    }

    fn single_kind(&self) -> Option<EventKind> {
        match self.events.as_slice() {
            [only] => Some(only.kind),
            _ => None,
        }
    }
}

impl From<Vec<TimeEvent>> for DaySchedule {
    fn from(events: Vec<TimeEvent>) -> Self {
        Self::new(events)
    }
}

/// What to emit for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPlan<'a> {
    /// No output line.
    Skip,
    /// `"<Day>: Closed"`.
    Closed,
    /// Merge the day's events, optionally closing a trailing OPEN with `lookahead`.
    ///
    /// `lookahead` is the following day's earliest event by time of day,
    /// regardless of where it sits in that day's input list.
    Merge { lookahead: Option<&'a TimeEvent> },
}

/// Input shape: exactly the seven lowercase day keys.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WeekInput {
    monday: DaySchedule,
    tuesday: DaySchedule,
    wednesday: DaySchedule,
    thursday: DaySchedule,
    friday: DaySchedule,
    saturday: DaySchedule,
    sunday: DaySchedule,
}

impl From<WeekInput> for WeeklySchedule {
    fn from(input: WeekInput) -> Self {
        Self::from_days([
            input.monday,
            input.tuesday,
            input.wednesday,
            input.thursday,
            input.friday,
            input.saturday,
            input.sunday,
        ])
    }
}

/// Opening hours for a full week, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "WeekInput")]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    pub fn from_days(days: [DaySchedule; 7]) -> Self {
        Self { days }
    }

    /// Map a JSON document onto a weekly schedule.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Decide what to emit for `day`.
    ///
    /// Sunday looks ahead to Monday; the lookup is read-only.
    pub fn plan(&self, day: Weekday) -> DayPlan<'_> {
        let schedule = self.day(day);

        match schedule.single_kind() {
            Some(EventKind::Unset) | Some(EventKind::Close) => return DayPlan::Skip,
            _ => {}
        }
        if schedule.is_empty() {
            return DayPlan::Closed;
        }

        DayPlan::Merge {
            lookahead: self.day(day.succ()).first_event(),
        }
    }

    /// Render the human-readable report with the default 12-hour clock.
    pub fn render(&self) -> Result<String, ScheduleError> {
        self.render_with(&TwelveHourClock)
    }

    /// Render the report with a caller-supplied clock formatter.
    ///
    /// Any error aborts the whole report.
    pub fn render_with(&self, clock: &dyn ClockFormatter) -> Result<String, ScheduleError> {
        let mut output = String::new();

        for day in WEEK {
            match self.plan(day) {
                DayPlan::Skip => {
                    tracing::debug!(day = weekday_key(day), "no schedule, skipping");
                }
                DayPlan::Closed => {
                    tracing::debug!(day = weekday_key(day), "closed all day");
                    output.push_str(&format!("{}: Closed\n", weekday_name(day)));
                }
                DayPlan::Merge { lookahead } => {
                    tracing::debug!(
                        day = weekday_key(day),
                        events = self.day(day).events().len(),
                        lookahead = lookahead.is_some(),
                        "merging day"
                    );
                    output.push_str(&format_day(day, self.day(day).events(), lookahead, clock)?);
                }
            }
        }

        Ok(output)
    }
}
