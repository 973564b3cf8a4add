use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED, error::RaffleError, state::Raffle, switchboard, vault::VaultPayout,
};

/// Accounts required to settle the round once randomness is revealed.
///
/// The caller supplies the winner account. It is checked against the drawn
/// winner before any lamports move, so a wrong guess fails with
/// `PayoutFailed` and can be retried with the right account.
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The raffle state account. Pays the pot out of its own lamports.
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The randomness account bound by `perform_upkeep`.
    /// CHECK: Compared with the outstanding request and parsed within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// Receives the pot.
    /// CHECK: Compared with the drawn winner before the transfer.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Draws the winner from the revealed value and pays out the pot.
///
/// Steps performed:
/// 1. Check the randomness account is the outstanding request.
/// 2. Read the revealed value.
/// 3. Pick `entrants[value mod players]`, pay the whole pot, open the next round.
pub fn process_fulfill_random_words(ctx: Context<FulfillRandomWords>) -> Result<()> {
    let clock = Clock::get()?;
    let request_id = ctx.accounts.randomness_account_data.key();

    if ctx.accounts.raffle.pending_request_id() != Some(request_id) {
        msg!("Unexpected randomness account: {}", request_id);
        return err!(RaffleError::UnknownRequest);
    }

    let random_value = switchboard::revealed_value(&ctx.accounts.randomness_account_data, &clock)?;

    let vault = ctx.accounts.raffle.to_account_info();
    let recipient = ctx.accounts.winner.to_account_info();
    let mut payout = VaultPayout::new(&vault, &recipient);

    let winner = ctx.accounts.raffle.apply_result(
        &request_id,
        &random_value,
        &mut payout,
        clock.unix_timestamp,
    )?;

    msg!("Winner: {}", winner);
    Ok(())
}
