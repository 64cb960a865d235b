//! Application layer orchestrating the domain.
//!
//! This module defines the `EscrowEngine`, which takes payment events, computes
//! each new payment's breakdown and moves payments through the escrow lifecycle.

pub mod engine;
