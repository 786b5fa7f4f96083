use time::Date;
use time::macros::format_description;

// Serde adapter for `YYYY-MM-DD` calendar dates, including `iso_date::option`.
time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

pub fn parse_iso_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}
