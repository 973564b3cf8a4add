use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::PendingRequest};

/// Source of unpredictable values. A request is answered later, out of band,
/// by a reply carrying the returned id.
pub trait RandomnessOracle {
    /// Submits a request for one random value and returns its correlation id.
    fn request_random_value(&mut self) -> Result<Pubkey>;
}

/// Requests a value from `oracle` and binds the returned id to `round`.
///
/// The slot holds at most one request; the round state machine never issues
/// while one is outstanding.
pub fn issue<O: RandomnessOracle + ?Sized>(
    slot: &mut Option<PendingRequest>,
    oracle: &mut O,
    round: u64,
) -> Result<Pubkey> {
    require!(slot.is_none(), RaffleError::RequestAlreadyPending);

    let request_id = oracle.request_random_value()?;
    *slot = Some(PendingRequest { request_id, round });
    Ok(request_id)
}

/// Consumes the outstanding request if it carries `request_id`, returning its
/// round. Unknown, stale and replayed ids are all rejected.
pub fn validate(slot: &mut Option<PendingRequest>, request_id: &Pubkey) -> Result<u64> {
    let matches = slot
        .as_ref()
        .is_some_and(|pending| pending.request_id == *request_id);
    if !matches {
        msg!("No outstanding request with id {}", request_id);
        return err!(RaffleError::UnknownRequest);
    }

    let pending = slot.take().ok_or(RaffleError::UnknownRequest)?;
    Ok(pending.round)
}
