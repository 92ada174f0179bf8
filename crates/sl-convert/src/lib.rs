//! `sl-convert` — turn a survey export into distance-sorted skylift records.
//!
//! # Pipeline
//!
//! ```text
//!  survey JSON ──load_survey_*──▶ Vec<F::Record> ──Converter::convert──▶ Conversion
//!                                  (ScanRecord)                          { meta, networks }
//! ```
//!
//! Each record is placed relative to the target point: three signed distances
//! (longitude axis, full geodesic, latitude axis) and an RSSI bucket.  The
//! output is sorted by `|distance_xy|`, closest first.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`record`]    | `ScanRecord`, `SurveyFormat` adapter traits         |
//! | [`wigle`]     | `Wigle`, `WigleRecord` (WiGLE search API export)    |
//! | [`loader`]    | `load_survey_path`, `load_survey_reader`            |
//! | [`converter`] | `Converter`, `Conversion`                           |
//! | [`error`]     | `ConvertError`, `ConvertResult<T>`                  |

pub mod converter;
pub mod error;
pub mod loader;
pub mod record;
pub mod wigle;


pub use converter::{Conversion, Converter, META_RADIUS, META_RUN, sort_by_distance};
pub use error::{ConvertError, ConvertResult};
pub use loader::{load_survey_path, load_survey_reader};
pub use record::{ScanRecord, SurveyFormat};
pub use wigle::{Wigle, WigleRecord};
