//! Domain models for voice time accounting.
//!
//! A `SessionRecord` is the per-(server, user) row holding the open session marker and the
//! four rolling hour counters. `VoiceTransition` classifies a gateway voice update into the
//! join/leave events that drive the accounting.

use chrono::{DateTime, Utc};

/// Fixed divisor used for the "average hours per day" figure.
///
/// Not calendar aware: the monthly counter is always divided by 30.
pub const AVERAGE_DAY_DIVISOR: f64 = 30.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Voice time tracked for one member of one server.
///
/// Null counters in the store read as zero here; the distinction between "never tracked"
/// and "tracked with zero hours" is the presence of the record itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    /// Discord guild ID (stored as String).
    pub server_id: String,
    /// Discord user ID (stored as String).
    pub user_id: String,
    /// Start of the currently open session, `None` while not in voice.
    pub join_time: Option<DateTime<Utc>>,
    /// End of the most recent session. Informational only.
    pub leave_time: Option<DateTime<Utc>>,
    pub daily_hours: f64,
    pub weekly_hours: f64,
    pub monthly_hours: f64,
    pub all_time_hours: f64,
}

impl SessionRecord {
    /// Converts an entity model to a session record at the repository boundary.
    pub fn from_entity(entity: entity::time_activity::Model) -> Self {
        Self {
            server_id: entity.server_id,
            user_id: entity.user_id,
            join_time: entity.join_time,
            leave_time: entity.leave_time,
            daily_hours: entity.daily_hours.unwrap_or(0.0),
            weekly_hours: entity.weekly_hours.unwrap_or(0.0),
            monthly_hours: entity.monthly_hours.unwrap_or(0.0),
            all_time_hours: entity.all_time_hours.unwrap_or(0.0),
        }
    }

    /// Reads one of the four aggregate counters.
    pub fn hours(&self, counter: HourCounter) -> f64 {
        match counter {
            HourCounter::Daily => self.daily_hours,
            HourCounter::Weekly => self.weekly_hours,
            HourCounter::Monthly => self.monthly_hours,
            HourCounter::AllTime => self.all_time_hours,
        }
    }

    /// Monthly hours divided by the fixed 30 day month.
    pub fn average_hours_per_day(&self) -> f64 {
        self.monthly_hours / AVERAGE_DAY_DIVISOR
    }
}

/// One of the four rolling aggregate counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourCounter {
    Daily,
    Weekly,
    Monthly,
    AllTime,
}

/// What a single voice state update means for session accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransition {
    /// Not in voice before, in voice now.
    Join,
    /// In voice before, not in voice now.
    Leave,
    /// Switched from one voice channel to another without leaving voice.
    Move,
    /// Same channel on both sides (mute, deafen, camera or stream toggles).
    Unchanged,
    /// Not in voice on either side.
    NotInVoice,
}

impl VoiceTransition {
    /// Classifies an `(old_channel, new_channel)` pair.
    pub fn classify<T: PartialEq>(old: Option<T>, new: Option<T>) -> Self {
        match (old, new) {
            (None, Some(_)) => Self::Join,
            (Some(_), None) => Self::Leave,
            (Some(old), Some(new)) if old == new => Self::Unchanged,
            (Some(_), Some(_)) => Self::Move,
            (None, None) => Self::NotInVoice,
        }
    }
}

/// Hours between `join_time` and `leave_time`, never negative.
///
/// A leave stamped before its join (clock adjustment) credits nothing rather than
/// subtracting from the counters.
pub fn elapsed_hours(join_time: DateTime<Utc>, leave_time: DateTime<Utc>) -> f64 {
    let millis = (leave_time - join_time).num_milliseconds();

    (millis.max(0) as f64) / MILLIS_PER_HOUR
}

/// All stats shown by the study stats commands, read from one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub daily_hours: f64,
    pub weekly_hours: f64,
    pub monthly_hours: f64,
    pub all_time_hours: f64,
    pub average_hours_per_day: f64,
}

impl StatsSnapshot {
    pub fn from_record(record: &SessionRecord) -> Self {
        Self {
            daily_hours: record.hours(HourCounter::Daily),
            weekly_hours: record.hours(HourCounter::Weekly),
            monthly_hours: record.hours(HourCounter::Monthly),
            all_time_hours: record.hours(HourCounter::AllTime),
            average_hours_per_day: record.average_hours_per_day(),
        }
    }

    /// Snapshot rendered for members that have never been tracked.
    pub fn empty() -> Self {
        Self {
            daily_hours: 0.0,
            weekly_hours: 0.0,
            monthly_hours: 0.0,
            all_time_hours: 0.0,
            average_hours_per_day: 0.0,
        }
    }
}
