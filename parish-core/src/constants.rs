/// Days ahead covered by a range when no end date is given.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Days ahead to look for upcoming birthdays.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 30;

/// Sentinel filter value that disables a filter.
pub const ALL_FILTER: &str = "all";
