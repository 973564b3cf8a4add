use anchor_lang::prelude::*;

use crate::{constants::RAFFLE_SEED, state::Raffle, switchboard::SwitchboardRequest};

/// Accounts required to close the round and request randomness.
///
/// Anyone may call this; the readiness check runs inside the instruction.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The raffle state account.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Randomness account from Switchboard, committed in the previous slot.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Moves the round to `Resolving` and binds the committed randomness account
/// as the outstanding request. Returns the request id.
pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<Pubkey> {
    let clock = Clock::get()?;
    let mut oracle = SwitchboardRequest::new(&ctx.accounts.randomness_account_data, &clock);

    let request_id = ctx
        .accounts
        .raffle
        .resolve(&mut oracle, clock.unix_timestamp)?;

    msg!("Requested randomness: {}", request_id);
    Ok(request_id)
}
