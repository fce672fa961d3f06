use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Local midnight of `day`.
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Last representable millisecond of `day` (23:59:59.999).
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 is a valid time");
    day.and_time(last)
}

/// ISO calendar key used to group timeline sections.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
