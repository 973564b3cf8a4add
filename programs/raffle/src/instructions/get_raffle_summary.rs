use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED,
    state::{Raffle, RaffleSummary},
};

#[derive(Accounts)]
pub struct GetRaffleSummary<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Entrance fee, interval, state, players, pot, recent winner, round start.
pub fn process_get_raffle_summary(ctx: Context<GetRaffleSummary>) -> Result<RaffleSummary> {
    Ok(ctx.accounts.raffle.summary())
}
