//! `sl-core` — foundational math for the skylift converter.
//!
//! This crate is a dependency of every other `sl-*` crate.  It has no `sl-*`
//! dependencies; externally it needs `geo` and `chrono` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                                  |
//! |----------|-----------------------------------------------------------|
//! | [`geo`]  | `GeoPoint`, geodesic distance, `signed_axis_distance`     |
//! | [`rssi`] | `estimate_rssi`, `rssi_for_distance` step table           |
//! | [`date`] | `date_stamp` (`YYYYMMDD` integers), `today_stamp`         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                            |
//! |---------|---------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `GeoPoint`.     |

pub mod date;
pub mod geo;
pub mod rssi;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use date::{date_stamp, today_stamp};
pub use self::geo::{GeoPoint, signed_axis_distance};
pub use rssi::{estimate_rssi, rssi_for_distance};
