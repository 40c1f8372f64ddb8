//! # Relief Ledger Contract
//!
//! Operations ledger for disaster relief. The single Soroban contract
//! `ReliefLedger` keeps five independently keyed record collections:
//!
//! | Collection   | Create                 | Mutate                                   | Queries |
//! |--------------|------------------------|------------------------------------------|---------|
//! | Donations    | [`ReliefLedger::donate`] (anyone, balance-checked) | `update_donation_status` (owner) | `get_donation`, `get_total_donations` |
//! | Expenditures | `record_expenditure` (owner) | `update_expenditure_status` (owner) | `get_expenditure`, `get_total_expenditures` |
//! | Needs        | `report_need` (anyone) | `update_need_status` (owner or reporter), `update_need_priority` (owner) | `get_need`, `get_total_needs` |
//! | Resources    | `add_resource` (owner) | quantity only through allocation         | `get_resource`, `get_total_resources` |
//! | Allocations  | `allocate_resource` (owner) | `update_allocation_status` (owner)  | `get_allocation`, `get_total_allocations` |
//!
//! ## Architecture
//!
//! Authorization lives in [`auth`], the donor balance ledger in [`ledger`]
//! and storage access in [`storage`]. This file holds the entry points only.
//!
//! Every mutating entry point follows the same order: validate inputs, check
//! authorization, check domain invariants, then write. Nothing is written
//! before the last check passes, so a failed call leaves balances, records
//! and nonces untouched.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

mod auth;
mod ledger;
mod storage;
mod types;

#[cfg(test)]
mod test_donations;

use storage::DataKey;
pub use types::{
    Allocation, Config, Donation, Expenditure, Need, Resource, MAX_PRIORITY, MIN_PRIORITY,
};
use types::{
    is_valid_priority, ALLOCATION_ALLOCATED, DONATION_RECEIVED, EXPENDITURE_RECORDED,
    NEED_REPORTED,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidAmount         = 1,
    InsufficientBalance   = 2,
    NotAuthorized         = 3,
    InvalidPriority       = 4,
    NotFound              = 5,
    InsufficientResources = 6,
}

#[contract]
pub struct ReliefLedger;

#[contractimpl]
impl ReliefLedger {
    // ─────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────

    /// Fix the owner and the asset contract that backs donor balances.
    ///
    /// Runs once, at deployment. Neither value can change afterwards.
    pub fn __constructor(env: Env, owner: Address, token: Address) {
        storage::set_config(&env, &Config { owner, token });
    }

    pub fn owner(env: Env) -> Address {
        storage::get_config(&env).owner
    }

    pub fn token(env: Env) -> Address {
        storage::get_config(&env).token
    }

    /// Spendable ledger balance of `principal`.
    pub fn balance_of(env: Env, principal: Address) -> i128 {
        ledger::balance_of(&env, &principal)
    }

    // ─────────────────────────────────────────────────────────
    // Donations & expenditures
    // ─────────────────────────────────────────────────────────

    /// Donate `amount` from the sender's balance.
    ///
    /// Fails with `InvalidAmount` for `amount <= 0` and with
    /// `InsufficientBalance` if the sender cannot cover it. The debit and the
    /// new record (status `"received"`) are committed together.
    pub fn donate(env: Env, sender: Address, amount: i128, purpose: String) -> Result<u64, Error> {
        sender.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        ledger::debit(&env, &sender, amount)?;

        let id = storage::next_id(&env, &DataKey::DonationCount);
        storage::save_donation(
            &env,
            &Donation {
                id,
                donor: sender.clone(),
                amount,
                purpose,
                status: String::from_str(&env, DONATION_RECEIVED),
            },
        );

        log!(&env, "donation accepted", id, sender, amount);
        Ok(id)
    }

    /// Record an approved expenditure. Owner only.
    ///
    /// `need_ref` is stored as given and never checked against the needs.
    pub fn record_expenditure(
        env: Env,
        sender: Address,
        amount: i128,
        purpose: String,
        need_ref: u64,
    ) -> Result<u64, Error> {
        sender.require_auth();
        auth::require_owner(&env, &sender)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let id = storage::next_id(&env, &DataKey::ExpenditureCount);
        storage::save_expenditure(
            &env,
            &Expenditure {
                id,
                amount,
                purpose,
                need_ref,
                status: String::from_str(&env, EXPENDITURE_RECORDED),
            },
        );

        log!(&env, "expenditure recorded", id, amount, need_ref);
        Ok(id)
    }

    /// Replace the status of a donation. Owner only.
    pub fn update_donation_status(
        env: Env,
        sender: Address,
        id: u64,
        status: String,
    ) -> Result<(), Error> {
        sender.require_auth();
        auth::require_owner(&env, &sender)?;

        let mut donation = storage::load_donation(&env, id).ok_or(Error::NotFound)?;
        donation.status = status;
        storage::save_donation(&env, &donation);
        Ok(())
    }

    /// Replace the status of an expenditure. Owner only.
    pub fn update_expenditure_status(
        env: Env,
        sender: Address,
        id: u64,
        status: String,
    ) -> Result<(), Error> {
        sender.require_auth();
        auth::require_owner(&env, &sender)?;

        let mut expenditure = storage::load_expenditure(&env, id).ok_or(Error::NotFound)?;
        expenditure.status = status;
        storage::save_expenditure(&env, &expenditure);
        Ok(())
    }

    pub fn get_donation(env: Env, id: u64) -> Option<Donation> {
        storage::load_donation(&env, id)
    }

    pub fn get_expenditure(env: Env, id: u64) -> Option<Expenditure> {
        storage::load_expenditure(&env, id)
    }

    /// Number of donations ever accepted.
    pub fn get_total_donations(env: Env) -> u64 {
        storage::count(&env, &DataKey::DonationCount)
    }

    /// Number of expenditures ever recorded.
    pub fn get_total_expenditures(env: Env) -> u64 {
        storage::count(&env, &DataKey::ExpenditureCount)
    }

    // ─────────────────────────────────────────────────────────
    // Needs
    // ─────────────────────────────────────────────────────────

    /// Report a need. Open to any sender.
    ///
    /// `priority` must lie in `[1, 5]`. The reporter and the current ledger
    /// sequence are stamped on the record.
    pub fn report_need(
        env: Env,
        sender: Address,
        description: String,
        location: String,
        priority: u32,
    ) -> Result<u64, Error> {
        sender.require_auth();

        if !is_valid_priority(priority) {
            return Err(Error::InvalidPriority);
        }

        let id = storage::next_id(&env, &DataKey::NeedCount);
        storage::save_need(
            &env,
            &Need {
                id,
                description,
                location,
                priority,
                status: String::from_str(&env, NEED_REPORTED),
                created_by: sender.clone(),
                created_at: env.ledger().sequence(),
            },
        );

        log!(&env, "need reported", id, sender, priority);
        Ok(id)
    }

    /// Replace the status of a need.
    ///
    /// Allowed for the owner and for the address that reported the need.
    pub fn update_need_status(
        env: Env,
        sender: Address,
        id: u64,
        status: String,
    ) -> Result<(), Error> {
        sender.require_auth();

        let mut need = storage::load_need(&env, id).ok_or(Error::NotFound)?;
        auth::require_owner_or_reporter(&env, &sender, &need.created_by)?;

        need.status = status;
        storage::save_need(&env, &need);
        Ok(())
    }

    /// Replace the priority of a need. Owner only; the reporter has no
    /// standing here.
    pub fn update_need_priority(
        env: Env,
        sender: Address,
        id: u64,
        priority: u32,
    ) -> Result<(), Error> {
        sender.require_auth();
        auth::require_owner(&env, &sender)?;

        if !is_valid_priority(priority) {
            return Err(Error::InvalidPriority);
        }

        let mut need = storage::load_need(&env, id).ok_or(Error::NotFound)?;
        need.priority = priority;
        storage::save_need(&env, &need);
        Ok(())
    }

    pub fn get_need(env: Env, id: u64) -> Option<Need> {
        storage::load_need(&env, id)
    }

    pub fn get_total_needs(env: Env) -> u64 {
        storage::count(&env, &DataKey::NeedCount)
    }

    // ─────────────────────────────────────────────────────────
    // Resources & allocations
    // ─────────────────────────────────────────────────────────

    /// Register a stock of goods. Owner only.
    ///
    /// Any quantity is accepted, zero included.
    pub fn add_resource(
        env: Env,
        sender: Address,
        name: String,
        quantity: u64,
        location: String,
    ) -> Result<u64, Error> {
        sender.require_auth();
        auth::require_owner(&env, &sender)?;

        let id = storage::next_id(&env, &DataKey::ResourceCount);
        storage::save_resource(
            &env,
            &Resource {
                id,
                name,
                quantity,
                location,
            },
        );

        log!(&env, "resource added", id, quantity);
        Ok(id)
    }

    /// Draw `quantity` units from a resource towards `need_ref`. Owner only.
    ///
    /// Fails with `InvalidAmount` for a zero quantity, `NotFound` for an
    /// unknown resource and `InsufficientResources` if the stock is too
    /// small. Zero draws are rejected on purpose: an allocation always moves
    /// at least one unit, even though a zero draw would pass the stock
    /// comparison. On success the resource is decremented in place and the new
    /// allocation (status `"allocated"`) is written in the same invocation.
    pub fn allocate_resource(
        env: Env,
        sender: Address,
        resource_id: u64,
        need_ref: u64,
        quantity: u64,
    ) -> Result<u64, Error> {
        sender.require_auth();
        auth::require_owner(&env, &sender)?;

        if quantity == 0 {
            return Err(Error::InvalidAmount);
        }

        let mut resource = storage::load_resource(&env, resource_id).ok_or(Error::NotFound)?;
        resource.quantity = resource
            .quantity
            .checked_sub(quantity)
            .ok_or(Error::InsufficientResources)?;

        let id = storage::next_id(&env, &DataKey::AllocationCount);
        storage::save_resource(&env, &resource);
        storage::save_allocation(
            &env,
            &Allocation {
                id,
                resource_id,
                need_ref,
                quantity,
                status: String::from_str(&env, ALLOCATION_ALLOCATED),
            },
        );

        log!(&env, "resource allocated", id, resource_id, quantity);
        Ok(id)
    }

    /// Replace the status of an allocation. Owner only.
    pub fn update_allocation_status(
        env: Env,
        sender: Address,
        id: u64,
        status: String,
    ) -> Result<(), Error> {
        sender.require_auth();
        auth::require_owner(&env, &sender)?;

        let mut allocation = storage::load_allocation(&env, id).ok_or(Error::NotFound)?;
        allocation.status = status;
        storage::save_allocation(&env, &allocation);
        Ok(())
    }

    pub fn get_resource(env: Env, id: u64) -> Option<Resource> {
        storage::load_resource(&env, id)
    }

    pub fn get_allocation(env: Env, id: u64) -> Option<Allocation> {
        storage::load_allocation(&env, id)
    }

    pub fn get_total_resources(env: Env) -> u64 {
        storage::count(&env, &DataKey::ResourceCount)
    }

    pub fn get_total_allocations(env: Env) -> u64 {
        storage::count(&env, &DataKey::AllocationCount)
    }
}
