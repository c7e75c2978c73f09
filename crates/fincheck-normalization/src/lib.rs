//! Normalization of registry values.
//!
//! - **datetime**: Indonesian `<day> <month> <year>` dates to `YYYY-MM-DD`

pub mod datetime;

pub use datetime::{
    MONTHS_ID, month_number, normalize_registration_date, parse_indonesian_date,
    to_calendar_date,
};
