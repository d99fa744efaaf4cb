//! Weekly teaching time slots.

use academia_core::{ValidationError, time};
use chrono::NaiveTime;

use crate::constants::{DayOfWeek, Repetition};

/// A recurring slot in the teaching timetable.
///
/// `start_time` must be strictly before `end_time`; slots never wrap past
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    day: DayOfWeek,
    start_time: NaiveTime,
    end_time: NaiveTime,
    repetition: Repetition,
}

impl TimeSlot {
    pub fn new(
        day: DayOfWeek,
        start_time: NaiveTime,
        end_time: NaiveTime,
        repetition: Repetition,
    ) -> Result<Self, ValidationError> {
        if start_time >= end_time {
            return Err(ValidationError::InvalidTimeRange(format!(
                "start time {} must be before end time {}",
                time::format_time(&start_time),
                time::format_time(&end_time)
            )));
        }

        Ok(Self {
            day,
            start_time,
            end_time,
            repetition,
        })
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    /// Length of the slot in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}
