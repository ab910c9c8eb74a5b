//! Inventory-driven replenishment scheduling.
//!
//! This crate turns raw puzzle inventory and usage telemetry into a
//! generation plan: whether to generate at all, and which (theme, level)
//! targets to generate for, ordered by priority.
//!
//! # Overview
//!
//! - [`inventory`]: snapshot models for puzzle counts and user progress
//! - [`policy`]: tunable thresholds with defaults
//! - [`decision`]: the go/no-go generation decision ([`evaluate`])
//! - [`priority`]: per-level priority ranking ([`prioritize`])
//!
//! The scheduler is pure: it performs no I/O, never blocks, and never
//! errors for "nothing to do" — an empty plan is a normal terminal state.
//!
//! # Examples
//!
//! ```
//! use wordseek_scheduler::{InventoryPolicy, InventorySnapshot, evaluate};
//!
//! let snapshot = InventorySnapshot::default();
//! let decision = evaluate(&snapshot, &InventoryPolicy::default(), &[]);
//! assert!(decision.should_generate); // empty inventory bootstraps
//! ```

pub mod decision;
pub mod inventory;
pub mod policy;
pub mod priority;

pub use self::{
    decision::{Decision, DecisionReason, evaluate},
    inventory::{InventorySnapshot, UserProgressSnapshot},
    policy::{InventoryPolicy, LevelPolicy},
    priority::{PriorityEntry, PriorityReason, prioritize},
};
