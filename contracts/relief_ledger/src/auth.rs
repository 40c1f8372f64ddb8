//! # Authorization
//!
//! Two rules gate every mutating entry point:
//!
//! | Rule               | Used by                                              |
//! |--------------------|------------------------------------------------------|
//! | owner only         | expenditures, donation/allocation status, resources, need priority |
//! | owner or reporter  | `update_need_status`                                 |
//!
//! The owner is read from the immutable [`Config`](crate::types::Config)
//! written by the constructor. Callers must already have passed
//! `require_auth` for the address they present.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::Error;

/// Returns `true` if `sender` is the contract owner.
pub fn is_owner(env: &Env, sender: &Address) -> bool {
    storage::get_config(env).owner == *sender
}

/// Fails with `NotAuthorized` unless `sender` is the owner.
pub fn require_owner(env: &Env, sender: &Address) -> Result<(), Error> {
    if is_owner(env, sender) {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}

/// Fails with `NotAuthorized` unless `sender` is the owner or `reporter`.
pub fn require_owner_or_reporter(
    env: &Env,
    sender: &Address,
    reporter: &Address,
) -> Result<(), Error> {
    if sender == reporter || is_owner(env, sender) {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}
