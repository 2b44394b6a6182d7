//! Request handlers

pub mod charge;
pub mod health;
pub mod history;
pub mod payment;
pub mod statement;
