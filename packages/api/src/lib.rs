//! # API crate — HTTP boundary for NeoWatch
//!
//! Everything the views need to talk to the prediction backend lives here:
//! the typed wire models, the prediction input validator, the normalized
//! error set, and the client that attaches the session credential.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Client`]: bearer attach, JSON/multipart/byte transfer, global 401 teardown |
//! | [`error`] | [`ApiError`] closed set `{Validation, Auth, Server, Network}` and body normalization |
//! | [`models::predict`] | Declared field schema, draft validation, prediction results |
//! | [`models::history`] | Stored prediction records and summary extraction |
//!
//! The user snapshot type is shared with the persistence layer and
//! re-exported from [`store`].

pub mod client;
pub mod error;
pub mod models;

pub use client::{make_client, AuthResponse, BulkPredictionResponse, Client, MessageResponse};
pub use error::ApiError;
pub use models::history::{HistoryRecord, SUMMARY_CONDITIONS};
pub use models::predict::{
    ConditionResult, FieldKind, FieldSpec, PredictionDraft, PredictionInput, PredictionResult,
    RiskLevel, Section, ValidationErrors, FIELDS,
};
pub use store::UserProfile;
