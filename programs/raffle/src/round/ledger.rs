use anchor_lang::prelude::*;

use crate::{constants::MAX_PLAYERS, error::RaffleError, state::Ledger};

impl Ledger {
    /// Appends `entrant` and adds `fee_paid` to the balance.
    pub fn record(&mut self, entrant: Pubkey, fee_paid: u64, entrance_fee: u64) -> Result<()> {
        require_gte!(fee_paid, entrance_fee, RaffleError::InsufficientPayment);
        require!(self.entrants.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        self.balance = self
            .balance
            .checked_add(fee_paid)
            .ok_or(RaffleError::Overflow)?;
        self.entrants.push(entrant);
        Ok(())
    }

    /// Returns the entrants and balance, leaving both empty.
    pub fn snapshot_and_clear(&mut self) -> (Vec<Pubkey>, u64) {
        (
            std::mem::take(&mut self.entrants),
            std::mem::take(&mut self.balance),
        )
    }

    pub fn player_at(&self, index: usize) -> Result<Pubkey> {
        self.entrants
            .get(index)
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfRange))
    }

    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }
}
