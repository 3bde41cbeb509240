//! Domain types for series identification, numbering, and configuration.

pub mod config;
pub mod numeral;
pub mod record;
pub mod series;

pub use config::Config;
pub use numeral::NumeralStyle;
pub use record::{Record, SeriesRecord};
pub use series::{InvalidIdError, SeriesId, SeriesTag};
