//! # Monta Models
//!
//! Typed records for the Monta EV charging API.
//!
//! The transport layer hands this crate already-parsed JSON; decoders turn
//! camelCase wire mappings into validated records, and encoders turn Charge
//! and WalletTransaction back into wire mappings. Nothing here performs I/O.
//!
//! ## Architecture
//!
//! ```text
//! serde_json::Value (from transport)
//!       │
//!       ▼
//! ┌──────────────────────────────────────────┐
//! │  FromWire                                │
//! │  Wallet │ Charge │ ChargePoint │ ...     │
//! │     │ Fields (per-field presence policy) │
//! │     ├─ Currency / Balance                │
//! │     └─ timestamp::parse_datetime         │
//! └──────────────────────────────────────────┘
//!       │
//!       ▼
//! typed record ──ToWire──► WireMap (Charge, WalletTransaction)
//! ```
//!
//! ## Field policy
//!
//! | Resource          | Required keys                                   |
//! |-------------------|-------------------------------------------------|
//! | Wallet            | none                                            |
//! | Charge            | `id`                                            |
//! | ChargePoint       | `id` (and `id` of every embedded charge)        |
//! | WalletTransaction | `id`                                            |
//! | TokenResponse     | both tokens and both expiration dates           |
//!
//! Every other field falls back to a default. Optional timestamps that do
//! not parse are treated as absent.
//!
//! ## Usage
//!
//! ```
//! use monta_models::{Charge, FromWire, ToWire};
//! use serde_json::json;
//!
//! let charge = Charge::from_value(&json!({
//!     "id": 42,
//!     "state": "charging",
//!     "startedAt": "2024-03-01T08:00:00Z"
//! }))?;
//!
//! assert_eq!(charge.id, 42);
//! assert_eq!(charge.to_value()["startedAt"], "2024-03-01T08:00:00+00:00");
//! # Ok::<(), monta_models::DecodeError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod timestamp;
pub mod wire;

pub use config::{AbsentFields, DecodeConfig, EncodeConfig};
pub use error::DecodeError;
pub use models::{
    decode_list, Balance, Charge, ChargePoint, Currency, FromWire, ToWire, TokenResponse, Wallet,
    WalletTransaction,
};
pub use state::{ChargeState, UnknownState, WalletTransactionState};
pub use timestamp::{format_datetime, parse_datetime, RawInstant};
pub use wire::{Fields, WireMap, WireWriter};
