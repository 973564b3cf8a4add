use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, RaffleState},
};

/// Moves the pot to a winner.
pub trait PayoutSink {
    fn transfer(&mut self, winner: &Pubkey, amount: u64) -> Result<()>;
}

/// Pays the whole pot to `winner` and starts the next round. Returns the
/// amount paid.
///
/// All bookkeeping is staged on `raffle` before the transfer runs. The caller
/// restores the pre-call state when this returns an error, so a failed
/// transfer leaves the round `Resolving` with its pot and entrants intact.
pub fn settle<P: PayoutSink + ?Sized>(
    raffle: &mut Raffle,
    winner: Pubkey,
    sink: &mut P,
    now: i64,
) -> Result<u64> {
    let (_, amount) = raffle.ledger.snapshot_and_clear();
    raffle.recent_winner = Some(winner);
    raffle.last_timestamp = now;
    raffle.state = RaffleState::Open;
    raffle.round = raffle.round.checked_add(1).ok_or(RaffleError::Overflow)?;

    sink.transfer(&winner, amount).map_err(|err| {
        msg!("Payout of {} lamports to {} failed: {}", amount, winner, err);
        error!(RaffleError::PayoutFailed)
    })?;

    Ok(amount)
}
