use anchor_lang::prelude::*;

/// Seed of the singleton raffle PDA. The same account escrows the pot.
#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Upper bound on entries per round. Sizes `Ledger::entrants`.
pub const MAX_PLAYERS: usize = 100;

/// 0.01 SOL.
#[constant]
pub const DEFAULT_ENTRANCE_FEE: u64 = 10_000_000;

/// Seconds a round stays open before upkeep may resolve it.
#[constant]
pub const DEFAULT_INTERVAL: u64 = 30;
