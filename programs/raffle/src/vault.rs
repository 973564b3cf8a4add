use anchor_lang::prelude::*;

use crate::{error::RaffleError, round::PayoutSink};

/// Pays out of the raffle PDA by moving lamports directly. The PDA is owned
/// by this program, so no system transfer is needed.
pub struct VaultPayout<'a, 'info> {
    vault: &'a AccountInfo<'info>,
    recipient: &'a AccountInfo<'info>,
}

impl<'a, 'info> VaultPayout<'a, 'info> {
    pub fn new(vault: &'a AccountInfo<'info>, recipient: &'a AccountInfo<'info>) -> Self {
        Self { vault, recipient }
    }
}

impl PayoutSink for VaultPayout<'_, '_> {
    fn transfer(&mut self, winner: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*self.recipient.key, *winner, RaffleError::PayoutFailed);
        require!(self.recipient.is_writable, RaffleError::PayoutFailed);

        let mut vault_lamports = self.vault.try_borrow_mut_lamports()?;
        let mut recipient_lamports = self.recipient.try_borrow_mut_lamports()?;
        let vault_after = vault_lamports
            .checked_sub(amount)
            .ok_or(RaffleError::PayoutFailed)?;
        let recipient_after = recipient_lamports
            .checked_add(amount)
            .ok_or(RaffleError::PayoutFailed)?;

        **vault_lamports = vault_after;
        **recipient_lamports = recipient_after;
        Ok(())
    }
}
