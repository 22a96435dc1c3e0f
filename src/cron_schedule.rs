use std::str::FromStr;
use chrono::{DateTime, Local, TimeZone};
use cron::Schedule;

/// A validated cron expression.
///
/// Accepts the classic 5-field form (`minute hour day-of-month month day-of-week`)
/// as well as the 6 and 7-field forms with leading seconds and trailing year.
/// A 5-field expression fires at second 0.
#[derive(Debug, Clone)]
pub struct CronSchedule {
    expression: String,
    schedule: Schedule,
}

impl PartialEq for CronSchedule {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
    }
}

impl CronSchedule {

    /// Parses and validates `expression`.
    ///
    /// # Parameters
    ///
    /// - `expression`: The cron expression as stored on the queue. Surrounding whitespace is ignored.
    pub fn parse(expression: &str) -> Result<Self,String> {
        let fields: Vec<&str> = expression.split_whitespace().collect();
        let normalized: String = match fields.len() {
            5 => format!("0 {}",fields.join(" ")),
            6 | 7 => fields.join(" "),
            total => return Err(format!("expected 5, 6 or 7 fields, got {}",total))
        };
        match Schedule::from_str(normalized.as_str()) {
            Ok(schedule) => Ok(Self {
                expression: normalized,
                schedule
            }),
            Err(error) => Err(error.to_string())
        }
    }

    ///Format: second  minute   hour   day of month   month   day of week   [year]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Next fire time strictly after `after`.
    pub fn upcoming_after<Z: TimeZone>(&self, after: &DateTime<Z>) -> Option<DateTime<Z>> {
        self.schedule.after(after).next()
    }

    /// Next fire time from now, in local time.
    pub fn upcoming(&self) -> Option<DateTime<Local>> {
        self.upcoming_after(&Local::now())
    }
}
