#[cfg(test)]
mod test_cron_schedule {
    use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
    use crate::cron_schedule::CronSchedule;

    #[test]
    fn test_field_counts() {
        let result: Result<CronSchedule, String> = CronSchedule::parse("*/5 * * * *");
        assert!(result.is_ok(),"{:?}",result.err());
        assert_eq!(result.unwrap().expression(),"0 */5 * * * *");

        let result: Result<CronSchedule, String> = CronSchedule::parse(" 30 0 8 * * MON-FRI ");
        assert!(result.is_ok(),"{:?}",result.err());
        assert_eq!(result.unwrap().expression(),"30 0 8 * * MON-FRI");

        assert!(CronSchedule::parse("0 0 8 * * * 2099").is_ok());
    }

    #[test]
    fn test_invalid() {
        for expression in ["", "* *", "every day", "61 * * * *", "* * * * * * * *"] {
            let result: Result<CronSchedule, String> = CronSchedule::parse(expression);
            assert!(result.is_err(),"'{}' should be rejected",expression);
        }
    }

    #[test]
    fn test_upcoming_after() {
        let cron: CronSchedule = CronSchedule::parse("0 8 * * *").unwrap();
        let after: DateTime<Utc> = Utc.with_ymd_and_hms(2026, 2, 22, 7, 0, 0).unwrap();
        let next: DateTime<Utc> = cron.upcoming_after(&after).unwrap();
        assert_eq!(next.hour(),8);
        assert_eq!(next.minute(),0);
        assert_eq!(next.second(),0);

        let cron: CronSchedule = CronSchedule::parse("*/15 * * * *").unwrap();
        let after: DateTime<Utc> = Utc.with_ymd_and_hms(2026, 2, 22, 10, 2, 0).unwrap();
        assert_eq!(cron.upcoming_after(&after).unwrap().minute(),15);
    }

    #[test]
    fn test_upcoming() {
        let cron: CronSchedule = CronSchedule::parse("*/6 * * * *").unwrap();
        let now: DateTime<Local> = Local::now();
        let next: Option<DateTime<Local>> = cron.upcoming();
        assert!(next.is_some());
        assert!(next.unwrap() > now,"Now: {:?} | Next: {:?}",now,next);

        let cron: CronSchedule = CronSchedule::parse("0 0 0 1 1 * 2000").unwrap();
        assert!(cron.upcoming().is_none());
    }
}
