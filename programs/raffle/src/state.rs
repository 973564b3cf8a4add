use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;

/// Lifecycle of the current round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RaffleState {
    /// Accepting entrants.
    Open,
    /// A randomness request is outstanding. Entry and re-triggering are refused.
    Resolving,
}

/// The single outstanding randomness request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingRequest {
    /// Correlation id handed out by the oracle (the randomness account address).
    pub request_id: Pubkey,
    /// Round the request was issued for.
    pub round: u64,
}

/// Pot and entrants of the current round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Ledger {
    /// Lamports collected since the last payout. The lamports themselves sit
    /// on the raffle PDA on top of its rent reserve.
    pub balance: u64,

    /// Entrants in insertion order. One slot per entry, duplicates allowed.
    #[max_len(MAX_PLAYERS)]
    pub entrants: Vec<Pubkey>,
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The account that initialized the raffle. Holds no special powers.
    pub authority: Pubkey,

    /// Minimum lamports a single entry must pay.
    pub entrance_fee: u64,

    /// Minimum number of seconds between the round start and resolution.
    pub interval: u64,

    /// Current lifecycle state.
    pub state: RaffleState,

    /// Present exactly while `state == Resolving`.
    pub pending_request: Option<PendingRequest>,

    /// Collected balance and entrants.
    pub ledger: Ledger,

    /// UNIX timestamp the current round counts its interval from.
    pub last_timestamp: i64,

    /// The last paid-out winner, `None` before the first payout.
    pub recent_winner: Option<Pubkey>,

    /// Number of rounds paid out so far. Identifies the current round.
    pub round: u64,
}

/// Immutable parameters supplied when the raffle is created.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaffleConfig {
    pub entrance_fee: u64,
    pub interval: u64,
}

/// Read-only view of the raffle returned by `get_raffle_summary`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleSummary {
    pub entrance_fee: u64,
    pub interval: u64,
    pub state: RaffleState,
    pub num_players: u64,
    pub balance: u64,
    pub recent_winner: Option<Pubkey>,
    pub last_timestamp: i64,
    pub round: u64,
}
