//! Tenant Ledger Engine
//!
//! This crate implements the core of the tenant statement system: the rules
//! for representing one statement-period record, folding an ordered sequence
//! of periods into opening/closing balances, and recording payments against
//! the correct period.
//!
//! # Design
//!
//! The engine is pure domain logic over three port traits:
//!
//! - [`StatementStore`] - persistence of one record per (tenant, period),
//!   with atomic increments for the payment and charge totals
//! - [`StatementRenderer`] - turns statement figures into opaque content
//! - [`ArtifactStore`] - durably stores rendered content under a name hint
//!
//! Adapters for these ports live in `infra_store`; nothing in this crate
//! performs I/O of its own.
//!
//! # Balance Model
//!
//! Balances are a pure fold over period-ordered records: each row opens at
//! the previous row's closing balance (the first opens at zero) and closes
//! at `opening + charges - payments`. See [`ledger`].

pub mod error;
pub mod history;
pub mod ledger;
pub mod payment;
pub mod ports;
pub mod record;
pub mod recorder;
pub mod statement;

pub use error::LedgerError;
pub use history::HistoryReporter;
pub use ledger::{fold, opening_balance_for, LedgerRow};
pub use payment::{Payment, PaymentMethod, PaymentRequest, ValidationError};
pub use ports::{ArtifactError, ArtifactStore, StatementRenderer, StatementStore, StoreError};
pub use record::StatementRecord;
pub use recorder::PaymentRecorder;
pub use statement::{StatementArtifact, StatementFigures, StatementGenerator};
