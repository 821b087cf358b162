//! Data models for `SchedulAI`

pub mod days;
pub mod offering;
pub mod request;
pub mod schedule;
pub mod time;

pub use days::{DaySet, Weekday};
pub use offering::CourseOffering;
pub use request::{
    Preferences, ScheduleRequest, SelectionError, SelectionRequest, DEFAULT_MAX_COURSES,
};
pub use schedule::{
    CandidateSchedule, Conflict, GenerationOutcome, RankedSchedule, ScheduleEvaluation,
};
pub use time::ClockTime;
