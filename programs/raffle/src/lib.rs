#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod round;
pub mod state;
pub mod switchboard;
pub mod vault;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("BB66oBJCrtx8JYudK2vXscoDZFD83QUFzhiDafDL38pG");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize_raffle(ctx: Context<InitializeRaffle>, config: RaffleConfig) -> Result<()> {
        process_initialize_raffle(ctx, config)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<Pubkey> {
        process_perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(ctx: Context<FulfillRandomWords>) -> Result<()> {
        process_fulfill_random_words(ctx)
    }

    pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
        process_get_player(ctx, index)
    }

    pub fn get_raffle_summary(ctx: Context<GetRaffleSummary>) -> Result<RaffleSummary> {
        process_get_raffle_summary(ctx)
    }
}
