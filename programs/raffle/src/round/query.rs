use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, RaffleState, RaffleSummary},
};

impl Raffle {
    pub fn num_players(&self) -> u64 {
        self.ledger.len() as u64
    }

    pub fn player_at(&self, index: u64) -> Result<Pubkey> {
        let index = usize::try_from(index).map_err(|_| RaffleError::IndexOutOfRange)?;
        self.ledger.player_at(index)
    }

    pub fn balance(&self) -> u64 {
        self.ledger.balance
    }

    pub fn is_open(&self) -> bool {
        self.state == RaffleState::Open
    }

    /// Id of the outstanding randomness request, if any.
    pub fn pending_request_id(&self) -> Option<Pubkey> {
        self.pending_request.map(|pending| pending.request_id)
    }

    pub fn summary(&self) -> RaffleSummary {
        RaffleSummary {
            entrance_fee: self.entrance_fee,
            interval: self.interval,
            state: self.state,
            num_players: self.num_players(),
            balance: self.balance(),
            recent_winner: self.recent_winner,
            last_timestamp: self.last_timestamp,
            round: self.round,
        }
    }
}
