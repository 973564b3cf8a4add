use anchor_lang::prelude::*;

use crate::{
    constants::MAX_PLAYERS,
    error::RaffleError,
    state::{Raffle, RaffleState},
};

/// Check all invariants. Returns Err if any is violated.
pub fn check_invariants(raffle: &Raffle) -> Result<()> {
    // ResolvingIffPending
    let resolving = raffle.state == RaffleState::Resolving;
    if resolving != raffle.pending_request.is_some() {
        return violation("ResolvingIffPending");
    }

    // PendingBelongsToRound
    if let Some(pending) = &raffle.pending_request {
        if pending.round != raffle.round {
            return violation("PendingBelongsToRound");
        }
    }

    // Capacity
    if raffle.ledger.len() > MAX_PLAYERS {
        return violation("Capacity");
    }

    // EmptyLedgerHoldsNothing
    if raffle.ledger.is_empty() && raffle.ledger.balance != 0 {
        return violation("EmptyLedgerHoldsNothing");
    }

    // BalanceCoversFees
    let minimum = (raffle.ledger.len() as u64).checked_mul(raffle.entrance_fee);
    if minimum.map_or(true, |minimum| raffle.ledger.balance < minimum) {
        return violation("BalanceCoversFees");
    }

    Ok(())
}

fn violation(name: &str) -> Result<()> {
    msg!("Invariant violated: {}", name);
    err!(RaffleError::InvariantViolation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::tests::{assert_raffle_err, new_raffle};
    use crate::state::PendingRequest;

    #[test]
    fn test_fresh_raffle_satisfies_invariants() {
        assert!(check_invariants(&new_raffle(10, 30)).is_ok());
    }

    #[test]
    fn test_resolving_without_request_is_rejected() {
        let mut raffle = new_raffle(10, 30);
        raffle.state = RaffleState::Resolving;
        assert_raffle_err(check_invariants(&raffle), RaffleError::InvariantViolation);
    }

    #[test]
    fn test_request_while_open_is_rejected() {
        let mut raffle = new_raffle(10, 30);
        raffle.pending_request = Some(PendingRequest {
            request_id: Pubkey::new_unique(),
            round: 0,
        });
        assert_raffle_err(check_invariants(&raffle), RaffleError::InvariantViolation);
    }

    #[test]
    fn test_request_from_other_round_is_rejected() {
        let mut raffle = new_raffle(10, 30);
        raffle.state = RaffleState::Resolving;
        raffle.pending_request = Some(PendingRequest {
            request_id: Pubkey::new_unique(),
            round: 3,
        });
        assert_raffle_err(check_invariants(&raffle), RaffleError::InvariantViolation);
    }

    #[test]
    fn test_balance_without_entrants_is_rejected() {
        let mut raffle = new_raffle(10, 30);
        raffle.ledger.balance = 5;
        assert_raffle_err(check_invariants(&raffle), RaffleError::InvariantViolation);
    }

    #[test]
    fn test_balance_below_fees_is_rejected() {
        let mut raffle = new_raffle(10, 30);
        raffle.ledger.entrants = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        raffle.ledger.balance = 15;
        assert_raffle_err(check_invariants(&raffle), RaffleError::InvariantViolation);

        raffle.ledger.balance = 20;
        assert!(check_invariants(&raffle).is_ok());
    }
}
