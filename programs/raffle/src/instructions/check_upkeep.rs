use anchor_lang::prelude::*;

use crate::{constants::RAFFLE_SEED, state::Raffle};

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Returns whether `perform_upkeep` would currently be accepted. Read-only.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let clock = Clock::get()?;
    let upkeep_needed = ctx.accounts.raffle.check_ready(clock.unix_timestamp);
    msg!("Upkeep needed: {}", upkeep_needed);
    Ok(upkeep_needed)
}
