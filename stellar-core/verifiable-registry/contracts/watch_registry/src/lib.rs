#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env, String};

mod events;
mod storage;


pub use storage::{PendingRequest, Watch};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    InsufficientPayment = 2,
    NotInitialized = 3,
    AlreadyInitialized = 4,
    InvalidFee = 5,
}

/// Provenance registry for authenticated watches.
///
/// A single authority resolves verification requests. Approved requests
/// become watch records owned by the requester; from then on only the
/// current owner may transfer the record or change its metadata URI.
#[contract]
pub struct WatchRegistry;

#[contractimpl]
impl WatchRegistry {
    /// Initialize the registry with its authority and fee schedule.
    ///
    /// `fee_token` is the token every verification request pays in and
    /// `min_fee` the smallest accepted payment, in that token's units.
    pub fn initialize(
        env: Env,
        authority: Address,
        fee_token: Address,
        min_fee: i128,
    ) -> Result<(), ContractError> {
        if storage::has_authority(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if min_fee < 0 {
            return Err(ContractError::InvalidFee);
        }
        authority.require_auth();

        storage::set_authority(&env, &authority);
        storage::set_fee_token(&env, &fee_token);
        storage::set_min_fee(&env, min_fee);
        storage::set_held_fees(&env, 0);
        storage::extend_instance(&env);

        events::emit_initialized(&env, &authority, &fee_token, min_fee);
        Ok(())
    }

    // ========================================================================
    // Verification Workflow
    // ========================================================================

    /// Submit a watch for authenticity verification, paying at least the
    /// minimum fee.
    ///
    /// There is one pending slot for the whole registry. A request made
    /// while another is unresolved replaces it; the replaced request's
    /// payment stays in the registry.
    pub fn request(
        env: Env,
        requester: Address,
        id: u128,
        metadata_uri: String,
        payment: i128,
    ) -> Result<(), ContractError> {
        requester.require_auth();

        let min_fee = storage::get_min_fee(&env).ok_or(ContractError::NotInitialized)?;
        if payment < min_fee {
            return Err(ContractError::InsufficientPayment);
        }
        let fee_token = storage::get_fee_token(&env).ok_or(ContractError::NotInitialized)?;

        // A requester short on balance fails inside the token contract.
        if payment > 0 {
            token::Client::new(&env, &fee_token).transfer(
                &requester,
                &env.current_contract_address(),
                &payment,
            );
        }
        storage::set_held_fees(&env, storage::get_held_fees(&env) + payment);

        if let Some(previous) = storage::get_pending(&env) {
            log!(&env, "superseding pending request", previous.id);
            events::emit_superseded(&env, previous.id, &previous.requester, previous.payment);
        }

        let pending = PendingRequest {
            id,
            metadata_uri: metadata_uri.clone(),
            requester: requester.clone(),
            payment,
        };
        storage::set_pending(&env, &pending);
        storage::extend_instance(&env);

        events::emit_requested(&env, id, &requester, &metadata_uri, payment);
        Ok(())
    }

    /// Resolve the pending request. Only the authority may call this.
    ///
    /// On approval the watch record is written (replacing any record with
    /// the same id) and owned by the requester. The slot is cleared either
    /// way. With nothing pending this is a no-op.
    pub fn verify(env: Env, caller: Address, approve: bool) -> Result<(), ContractError> {
        caller.require_auth();

        let authority = storage::get_authority(&env).ok_or(ContractError::NotInitialized)?;
        if caller != authority {
            log!(&env, "verify denied", caller);
            return Err(ContractError::Unauthorized);
        }

        let pending = match storage::get_pending(&env) {
            Some(pending) => pending,
            None => return Ok(()),
        };
        storage::clear_pending(&env);

        if approve {
            let watch = Watch {
                id: pending.id,
                metadata_uri: pending.metadata_uri,
                owner: pending.requester,
            };
            storage::set_watch(&env, &watch);
            events::emit_approved(&env, watch.id, &watch.owner, &watch.metadata_uri);
        } else {
            events::emit_rejected(&env, pending.id, &pending.requester);
        }

        storage::extend_instance(&env);
        Ok(())
    }

    // ========================================================================
    // Owner Operations
    // ========================================================================

    /// Hand the watch over to `new_owner`.
    pub fn transfer_ownership_of_watch(
        env: Env,
        caller: Address,
        id: u128,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        let mut watch = Self::require_watch_owner(&env, &caller, id)?;

        watch.owner = new_owner.clone();
        storage::set_watch(&env, &watch);

        events::emit_transferred(&env, id, &caller, &new_owner);
        Ok(())
    }

    /// Point the watch at a new metadata URI.
    pub fn update_metadata_uri_of_watch(
        env: Env,
        caller: Address,
        id: u128,
        new_metadata_uri: String,
    ) -> Result<(), ContractError> {
        let mut watch = Self::require_watch_owner(&env, &caller, id)?;

        watch.metadata_uri = new_metadata_uri.clone();
        storage::set_watch(&env, &watch);

        events::emit_metadata_updated(&env, id, &new_metadata_uri);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Get a watch as `(id, metadata_uri, owner)`.
    ///
    /// An unknown id yields `(0, "", None)`.
    pub fn get_watch(env: Env, id: u128) -> (u128, String, Option<Address>) {
        match storage::get_watch(&env, id) {
            Some(watch) => (watch.id, watch.metadata_uri, Some(watch.owner)),
            None => (0, String::from_str(&env, ""), None),
        }
    }

    /// Get a watch record, or `None` if the id was never approved.
    pub fn get_watch_record(env: Env, id: u128) -> Option<Watch> {
        storage::get_watch(&env, id)
    }

    /// The verification authority.
    pub fn owner(env: Env) -> Result<Address, ContractError> {
        storage::get_authority(&env).ok_or(ContractError::NotInitialized)
    }

    /// The request awaiting the authority's decision, if any.
    pub fn pending_request(env: Env) -> Option<PendingRequest> {
        storage::get_pending(&env)
    }

    /// Token that verification fees are paid in.
    pub fn fee_token(env: Env) -> Result<Address, ContractError> {
        storage::get_fee_token(&env).ok_or(ContractError::NotInitialized)
    }

    /// Smallest payment `request` accepts.
    pub fn min_fee(env: Env) -> Result<i128, ContractError> {
        storage::get_min_fee(&env).ok_or(ContractError::NotInitialized)
    }

    /// Total of all accepted request payments held by the registry.
    pub fn held_fees(env: Env) -> i128 {
        storage::get_held_fees(&env)
    }

    /// Contract interface version.
    pub fn version(_env: Env) -> u32 {
        1
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    // An absent watch has no owner, so every caller is unauthorized for it.
    fn require_watch_owner(env: &Env, caller: &Address, id: u128) -> Result<Watch, ContractError> {
        caller.require_auth();

        match storage::get_watch(env, id) {
            Some(watch) if watch.owner == *caller => Ok(watch),
            _ => {
                log!(env, "watch owner check failed", id, caller.clone());
                Err(ContractError::Unauthorized)
            }
        }
    }
}
