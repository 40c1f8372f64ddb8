//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key                | Type     | Description                       |
//! |--------------------|----------|-----------------------------------|
//! | `Config`           | `Config` | Owner and balance token           |
//! | `DonationCount`    | `u64`    | Donation nonce                    |
//! | `ExpenditureCount` | `u64`    | Expenditure nonce                 |
//! | `NeedCount`        | `u64`    | Need nonce                        |
//! | `ResourceCount`    | `u64`    | Resource nonce                    |
//! | `AllocationCount`  | `u64`    | Allocation nonce                  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! One entry per record, keyed by collection and id. Persistent TTL is bumped
//! by **30 days** whenever it falls below 7 days remaining, on every read and
//! write.
//!
//! Records are never deleted, so a nonce is also the number of records ever
//! created in its collection.

use soroban_sdk::{contracttype, Env};

use crate::types::{Allocation, Config, Donation, Expenditure, Need, Resource};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    DonationCount,
    ExpenditureCount,
    NeedCount,
    ResourceCount,
    AllocationCount,
    Donation(u64),
    Expenditure(u64),
    Need(u64),
    Resource(u64),
    Allocation(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Retrieve the contract configuration.
/// Panics if the constructor has not run, which the host rules out.
pub fn get_config(env: &Env) -> Config {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("config not set")
}

/// Current value of a collection nonce (0 before the first record).
pub fn count(env: &Env, counter: &DataKey) -> u64 {
    bump_instance(env);
    env.storage().instance().get(counter).unwrap_or(0)
}

/// Increments a collection nonce and returns the id for the new record.
/// Ids start at 1.
///
/// Call only once every check of the operation has passed, so that a
/// failed call never consumes an id.
pub fn next_id(env: &Env, counter: &DataKey) -> u64 {
    let id = count(env, counter) + 1;
    env.storage().instance().set(counter, &id);
    id
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn save_donation(env: &Env, donation: &Donation) {
    let key = DataKey::Donation(donation.id);
    env.storage().persistent().set(&key, donation);
    bump_persistent(env, &key);
}

pub fn load_donation(env: &Env, id: u64) -> Option<Donation> {
    let key = DataKey::Donation(id);
    let donation: Donation = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(donation)
}

pub fn save_expenditure(env: &Env, expenditure: &Expenditure) {
    let key = DataKey::Expenditure(expenditure.id);
    env.storage().persistent().set(&key, expenditure);
    bump_persistent(env, &key);
}

pub fn load_expenditure(env: &Env, id: u64) -> Option<Expenditure> {
    let key = DataKey::Expenditure(id);
    let expenditure: Expenditure = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(expenditure)
}

pub fn save_need(env: &Env, need: &Need) {
    let key = DataKey::Need(need.id);
    env.storage().persistent().set(&key, need);
    bump_persistent(env, &key);
}

pub fn load_need(env: &Env, id: u64) -> Option<Need> {
    let key = DataKey::Need(id);
    let need: Need = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(need)
}

pub fn save_resource(env: &Env, resource: &Resource) {
    let key = DataKey::Resource(resource.id);
    env.storage().persistent().set(&key, resource);
    bump_persistent(env, &key);
}

pub fn load_resource(env: &Env, id: u64) -> Option<Resource> {
    let key = DataKey::Resource(id);
    let resource: Resource = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(resource)
}

pub fn save_allocation(env: &Env, allocation: &Allocation) {
    let key = DataKey::Allocation(allocation.id);
    env.storage().persistent().set(&key, allocation);
    bump_persistent(env, &key);
}

pub fn load_allocation(env: &Env, id: u64) -> Option<Allocation> {
    let key = DataKey::Allocation(id);
    let allocation: Allocation = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(allocation)
}
