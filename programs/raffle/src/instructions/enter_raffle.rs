use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{constants::RAFFLE_SEED, state::Raffle};

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The entrant, paying the fee.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The raffle state account receiving the fee.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// System program for the lamport transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Check the round is open and `amount` covers the entrance fee.
/// 2. Record the entry.
/// 3. Transfer `amount` lamports from the player to the raffle PDA.
///
/// # Arguments
/// * `ctx` - Context containing EnterRaffle accounts
/// * `amount` - Lamports paid, at least the entrance fee
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Players: {}", ctx.accounts.raffle.num_players());
    Ok(())
}
