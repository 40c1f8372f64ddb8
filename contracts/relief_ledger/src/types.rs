//! # Types
//!
//! Record types for the five ledger collections plus the immutable contract
//! configuration.
//!
//! ## Design decisions
//!
//! ### Open-ended status
//!
//! Every `status` field is a free-form [`String`]. The contract stamps an
//! initial value on creation ([`DONATION_RECEIVED`], [`EXPENDITURE_RECORDED`],
//! [`NEED_REPORTED`], [`ALLOCATION_ALLOCATED`]) and afterwards stores whatever
//! an authorized caller supplies. There is no transition graph; callers are
//! expected to follow a conventional vocabulary such as
//!
//! ```text
//! received ──► allocated ──► disbursed
//! ```
//!
//! ### Unvalidated need references
//!
//! `need_ref` on [`Expenditure`] and [`Allocation`] is a plain integer. It is
//! never checked against the need registry.

use soroban_sdk::{contracttype, Address, String};

/// Initial status of an accepted donation.
pub const DONATION_RECEIVED: &str = "received";
/// Initial status of a recorded expenditure.
pub const EXPENDITURE_RECORDED: &str = "recorded";
/// Initial status of a reported need.
pub const NEED_REPORTED: &str = "reported";
/// Initial status of a resource allocation.
pub const ALLOCATION_ALLOCATED: &str = "allocated";

/// Lowest accepted need priority.
pub const MIN_PRIORITY: u32 = 1;
/// Highest accepted need priority.
pub const MAX_PRIORITY: u32 = 5;

/// Returns `true` if `priority` lies in `[MIN_PRIORITY, MAX_PRIORITY]`.
pub fn is_valid_priority(priority: u32) -> bool {
    (MIN_PRIORITY..=MAX_PRIORITY).contains(&priority)
}

/// Contract configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The single privileged principal.
    pub owner: Address,
    /// Asset contract backing donor balances.
    pub token: Address,
}

/// A financial donation taken from a donor's balance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub id: u64,
    pub donor: Address,
    /// Always positive.
    pub amount: i128,
    pub purpose: String,
    pub status: String,
}

/// An owner-approved expenditure.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expenditure {
    pub id: u64,
    /// Always positive.
    pub amount: i128,
    pub purpose: String,
    pub need_ref: u64,
    pub status: String,
}

/// A need reported from the field.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Need {
    pub id: u64,
    pub description: String,
    pub location: String,
    /// 1 (lowest) to 5 (highest).
    pub priority: u32,
    pub status: String,
    /// Reporter; keeps standing to update the status.
    pub created_by: Address,
    /// Ledger sequence at which the need was reported.
    pub created_at: u32,
}

/// A stock of physical goods held at a location.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resource {
    pub id: u64,
    pub name: String,
    /// Remaining units; only ever decreased by allocation.
    pub quantity: u64,
    pub location: String,
}

/// Units drawn from a [`Resource`] towards a need.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Allocation {
    pub id: u64,
    pub resource_id: u64,
    pub need_ref: u64,
    pub quantity: u64,
    pub status: String,
}
