//! Core utilities shared across features.
//!
//! Date labels, natural date parsing, and word counting.

mod datetime;
mod text;

pub use datetime::{
    date_label, epoch_millis, local_midnight_millis, parse_label, parse_target_date, today_label,
    yesterday_label, DAY_MILLIS, LABEL_FORMAT,
};
pub use text::{contains_ignore_case, word_count};
