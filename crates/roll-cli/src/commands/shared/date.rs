use anyhow::Context;
use chrono::NaiveDate;
use roll_core::calendar::parse_date;

/// Parse a `--date` style argument, naming the flag in the error.
pub fn parse_date_arg(raw: &str, flag: &str) -> anyhow::Result<NaiveDate> {
    parse_date(raw).with_context(|| format!("invalid --{flag}"))
}

/// Parse an optional date argument.
pub fn parse_optional_date(raw: Option<&str>, flag: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date_arg(value, flag)).transpose()
}

/// The date to use when none was given: today on the local clock.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
