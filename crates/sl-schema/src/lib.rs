//! `sl-schema` — the canonical skylift data model.
//!
//! Survey inputs arrive in several shapes (different field names, numbers as
//! strings, nulls where a default is expected).  This crate resolves them into
//! one canonical [`Network`] record and groups records into a [`NetworkSet`]
//! that downstream consumers filter by RSSI.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`fields`]  | `RecordFields`: alias-aware, coercing field access      |
//! | [`network`] | `Network` canonical record                               |
//! | [`meta`]    | `Meta` file descriptor                                   |
//! | [`set`]     | `NetworkSet`, `NetworkSetParts`, `NetworkQuery`, `DeviceType` |
//! | [`loader`]  | `load_network_set_path`, `load_network_set_reader`       |
//! | [`error`]   | `SchemaError`, `SchemaResult<T>`                         |

pub mod error;
pub mod fields;
pub mod loader;
pub mod meta;
pub mod network;
pub mod set;


pub use error::{SchemaError, SchemaResult};
pub use fields::RecordFields;
pub use loader::{load_network_set_path, load_network_set_reader};
pub use meta::Meta;
pub use network::Network;
pub use set::{DeviceType, NetworkQuery, NetworkSet, NetworkSetParts};
