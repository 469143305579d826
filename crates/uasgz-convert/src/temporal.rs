//! Time-applicability conversion.
//!
//! Legacy applicability windows convert to target time periods with
//! empty structures pruned at every level: a schedule entry with no
//! day, start, or end is dropped rather than kept as a placeholder, and
//! a period with no populated field at all converts to `None`, which is
//! how a permanently applicable zone is represented.

use uasgz_core::ed269::{ApplicableTimePeriod, Day};
use uasgz_core::ed318::{CodeWeekDayType, DailyPeriod, TimePeriod};

/// Convert one legacy applicability window.
///
/// Returns `None` when the resulting period would have no populated
/// field, signifying "no temporal restriction".
pub fn convert_applicability(period: &ApplicableTimePeriod) -> Option<TimePeriod> {
    let mut schedule = Vec::new();
    for entry in period.schedule.as_deref().unwrap_or_default() {
        let daily = DailyPeriod {
            day: entry.day.map(convert_day),
            start_time: entry.start_time.clone(),
            start_event: None,
            end_time: entry.end_time.clone(),
            end_event: None,
        };
        if !daily.is_empty() {
            schedule.push(daily);
        }
    }

    let converted = TimePeriod {
        start_date_time: period.start_date_time.clone(),
        end_date_time: period.end_date_time.clone(),
        schedule: if schedule.is_empty() {
            None
        } else {
            Some(schedule)
        },
    };

    if converted.is_empty() {
        None
    } else {
        Some(converted)
    }
}

/// Week days map by value.
fn convert_day(day: Day) -> CodeWeekDayType {
    match day {
        Day::Mon => CodeWeekDayType::Mon,
        Day::Tue => CodeWeekDayType::Tue,
        Day::Wed => CodeWeekDayType::Wed,
        Day::Thu => CodeWeekDayType::Thu,
        Day::Fri => CodeWeekDayType::Fri,
        Day::Sat => CodeWeekDayType::Sat,
        Day::Sun => CodeWeekDayType::Sun,
        Day::Any => CodeWeekDayType::Any,
    }
}
