use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED,
    state::{Raffle, RaffleConfig},
};

/// Accounts required to create the raffle.
#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account. Also escrows the pot.
    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the raffle with its entrance fee and interval. The first round
/// starts counting at the current cluster time.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeRaffle accounts
/// * `config` - Entrance fee in lamports and interval in seconds
pub fn process_initialize_raffle(ctx: Context<InitializeRaffle>, config: RaffleConfig) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = Raffle::new(
        ctx.bumps.raffle,
        ctx.accounts.payer.key(),
        config,
        clock.unix_timestamp,
    )?;

    msg!("Entrance fee: {}", config.entrance_fee);
    msg!("Interval: {}", config.interval);

    ctx.accounts.raffle.set_inner(raffle);
    Ok(())
}
