//! # eaic-ssot — Rule Table Access and Logic-Gate Enforcement
//!
//! The Single Source of Truth (SSOT) owns an ordered list of *logic gates*:
//! rules of the form "if the Knowledge dimension has code `K1`, cap Task
//! Density at `TD3`". This crate provides the read-only view over that
//! table ([`RuleTable`]) and the enforcer that clamps a band selection
//! against it ([`enforce_gates`]), producing a corrected copy plus an
//! audit trail of every change.
//!
//! ## Guarantees
//!
//! - The caller's selection is never mutated; the enforcer returns a copy.
//! - No dimension code is ever raised, only lowered toward a ceiling.
//! - Malformed gates and malformed codes never fail the pipeline — they
//!   carry no information and are skipped.

pub mod gates;
pub mod grammar;
pub mod ruletable;

pub use gates::{enforce_gates, GateChange, GateOutcome};
pub use grammar::{parse_enforcement, Ceiling};
pub use ruletable::{LogicGate, RuleTable};
