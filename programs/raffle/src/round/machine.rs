//! Round lifecycle: `Open -> Resolving -> Open`.
//!
//! Every mutating operation runs through [`Raffle::transact`], which checks
//! invariants on both sides and restores the pre-call state on any error.

use anchor_lang::prelude::*;

use super::{
    correlator::{self, RandomnessOracle},
    invariants::check_invariants,
    payout::{self, PayoutSink},
    selection::RandomValue,
};
use crate::{
    error::RaffleError,
    events::{RaffleEntered, RequestedRaffleWinner, WinnerPicked},
    state::{Ledger, Raffle, RaffleConfig, RaffleState},
};

impl Raffle {
    /// A fresh raffle whose first round starts counting at `now`.
    pub fn new(bump: u8, authority: Pubkey, config: RaffleConfig, now: i64) -> Result<Self> {
        require!(config.entrance_fee > 0, RaffleError::InvalidEntranceFee);

        let raffle = Self {
            bump,
            authority,
            entrance_fee: config.entrance_fee,
            interval: config.interval,
            state: RaffleState::Open,
            pending_request: None,
            ledger: Ledger::default(),
            last_timestamp: now,
            recent_winner: None,
            round: 0,
        };
        check_invariants(&raffle)?;
        Ok(raffle)
    }

    /// Runs `op` as a single all-or-nothing step.
    fn transact<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        check_invariants(self)?;
        let checkpoint = self.clone();

        let outcome = op(&mut *self).and_then(|value| {
            check_invariants(self)?;
            Ok(value)
        });
        if outcome.is_err() {
            *self = checkpoint;
        }
        outcome
    }

    /// Records one entry paying `fee_paid` lamports.
    pub fn enter(&mut self, player: Pubkey, fee_paid: u64) -> Result<()> {
        self.transact(|raffle| {
            require!(raffle.state == RaffleState::Open, RaffleError::NotOpen);
            raffle.ledger.record(player, fee_paid, raffle.entrance_fee)
        })?;

        msg!("Player {} entered round {}", player, self.round);
        emit!(RaffleEntered {
            round: self.round,
            player,
            amount: fee_paid,
        });
        Ok(())
    }

    /// True when the round may be resolved at `now`.
    pub fn check_ready(&self, now: i64) -> bool {
        let is_open = self.state == RaffleState::Open;
        let time_passed = self.elapsed(now) >= self.interval;
        let has_players = !self.ledger.is_empty();
        let has_balance = self.ledger.balance > 0;
        is_open && time_passed && has_players && has_balance
    }

    /// Seconds since the round started. A clock behind `last_timestamp` reads as zero.
    fn elapsed(&self, now: i64) -> u64 {
        u64::try_from(now.saturating_sub(self.last_timestamp)).unwrap_or(0)
    }

    /// Closes the round to entries and asks `oracle` for a random value.
    /// Returns the request id the reply must carry.
    pub fn resolve<O: RandomnessOracle + ?Sized>(
        &mut self,
        oracle: &mut O,
        now: i64,
    ) -> Result<Pubkey> {
        let request_id = self.transact(|raffle| {
            if !raffle.check_ready(now) {
                msg!(
                    "Upkeep not needed: balance {} players {} state {:?} elapsed {}",
                    raffle.ledger.balance,
                    raffle.ledger.len(),
                    raffle.state,
                    raffle.elapsed(now)
                );
                return err!(RaffleError::UpkeepNotNeeded);
            }

            raffle.state = RaffleState::Resolving;
            correlator::issue(&mut raffle.pending_request, oracle, raffle.round)
        })?;

        emit!(RequestedRaffleWinner {
            round: self.round,
            request_id,
        });
        Ok(request_id)
    }

    /// Applies the oracle reply for `request_id`: draws the winner from the
    /// current entrants and pays out the whole pot. Returns the winner.
    pub fn apply_result<P: PayoutSink + ?Sized>(
        &mut self,
        request_id: &Pubkey,
        random_value: &RandomValue,
        sink: &mut P,
        now: i64,
    ) -> Result<Pubkey> {
        let round = self.round;
        let (winner, amount) = self.transact(|raffle| {
            let request_round = correlator::validate(&mut raffle.pending_request, request_id)?;
            require_eq!(request_round, raffle.round, RaffleError::InvariantViolation);

            let index = random_value.index_into(raffle.ledger.len())?;
            let winner = raffle.ledger.player_at(index)?;
            msg!(
                "Drew index {} of {} players: {}",
                index,
                raffle.ledger.len(),
                winner
            );

            let amount = payout::settle(raffle, winner, sink, now)?;
            Ok((winner, amount))
        })?;

        emit!(WinnerPicked {
            round,
            winner,
            amount,
        });
        Ok(winner)
    }
}
