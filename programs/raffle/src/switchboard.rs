use anchor_lang::prelude::*;
use switchboard_on_demand::{accounts::RandomnessAccountData, SWITCHBOARD_ON_DEMAND_PROGRAM_ID};

use crate::{
    error::RaffleError,
    round::{RandomValue, RandomnessOracle},
};

/// Switchboard On-Demand as the randomness oracle.
///
/// A request is a randomness account committed in the previous slot; its
/// address is the request id. The reply is the same account once revealed.
pub struct SwitchboardRequest<'a, 'info> {
    randomness_account: &'a AccountInfo<'info>,
    clock: &'a Clock,
}

impl<'a, 'info> SwitchboardRequest<'a, 'info> {
    pub fn new(randomness_account: &'a AccountInfo<'info>, clock: &'a Clock) -> Self {
        Self {
            randomness_account,
            clock,
        }
    }
}

impl RandomnessOracle for SwitchboardRequest<'_, '_> {
    fn request_random_value(&mut self) -> Result<Pubkey> {
        let randomness_data = load(self.randomness_account)?;

        // Only a commitment from the previous slot is still unrevealed.
        if randomness_data.seed_slot != self.clock.slot.saturating_sub(1) {
            msg!("Seed slot: {}", randomness_data.seed_slot);
            msg!("Current slot: {}", self.clock.slot);
            return err!(RaffleError::RandomnessAlreadyRevealed);
        }

        Ok(*self.randomness_account.key)
    }
}

/// Reads the revealed value of a committed randomness account.
pub fn revealed_value(randomness_account: &AccountInfo, clock: &Clock) -> Result<RandomValue> {
    let randomness_data = load(randomness_account)?;
    let value = randomness_data
        .get_value(clock)
        .map_err(|_| RaffleError::RandomnessNotResolved)?;
    Ok(RandomValue::new(value))
}

/// Parses a randomness account written by the Switchboard On-Demand program.
fn load(randomness_account: &AccountInfo) -> Result<RandomnessAccountData> {
    let program_id = *SWITCHBOARD_ON_DEMAND_PROGRAM_ID;
    if *randomness_account.owner != program_id {
        msg!(
            "Randomness account owner {} is not {}",
            randomness_account.owner,
            program_id
        );
        return err!(RaffleError::InvalidRandomnessAccount);
    }

    let data = randomness_account.try_borrow_data()?;
    require_gte!(
        data.len(),
        RandomnessAccountData::size(),
        RaffleError::InvalidRandomnessAccount
    );
    drop(data);

    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| RaffleError::InvalidRandomnessAccount)?;
    Ok(*randomness_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::tests::{assert_raffle_err, new_raffle, T0};

    const DISCRIMINATOR: [u8; 8] = [10, 66, 229, 135, 220, 239, 217, 114];
    // authority, queue, seed_slothash
    const SEED_SLOT: usize = 8 + 32 * 3;
    // seed_slot, oracle
    const REVEAL_SLOT: usize = SEED_SLOT + 8 + 32;
    const VALUE: usize = REVEAL_SLOT + 8;

    /// Account data with the alignment the runtime gives it.
    #[repr(C, align(8))]
    struct AccountData([u8; RandomnessAccountData::size()]);

    fn randomness_data(seed_slot: u64, reveal_slot: u64, value: [u8; 32]) -> AccountData {
        let mut data = [0u8; RandomnessAccountData::size()];
        data[..8].copy_from_slice(&DISCRIMINATOR);
        data[SEED_SLOT..SEED_SLOT + 8].copy_from_slice(&seed_slot.to_le_bytes());
        data[REVEAL_SLOT..REVEAL_SLOT + 8].copy_from_slice(&reveal_slot.to_le_bytes());
        data[VALUE..VALUE + 32].copy_from_slice(&value);
        AccountData(data)
    }

    fn at_slot(slot: u64) -> Clock {
        Clock {
            slot,
            ..Clock::default()
        }
    }

    #[test]
    fn test_garbage_account_is_rejected() {
        let key = Pubkey::new_unique();
        let owner = *SWITCHBOARD_ON_DEMAND_PROGRAM_ID;
        let mut lamports = 0;
        let mut data = [0u8; 64];
        let account = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );
        let clock = Clock::default();

        let mut oracle = SwitchboardRequest::new(&account, &clock);
        assert_raffle_err(
            oracle.request_random_value(),
            RaffleError::InvalidRandomnessAccount,
        );
        assert_raffle_err(
            revealed_value(&account, &clock),
            RaffleError::InvalidRandomnessAccount,
        );
    }

    #[test]
    fn test_truncated_account_is_rejected() {
        let key = Pubkey::new_unique();
        let owner = *SWITCHBOARD_ON_DEMAND_PROGRAM_ID;
        let mut lamports = 0;
        let mut full = randomness_data(99, 0, [0; 32]);
        let account = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut full.0[..64],
            &owner,
            false,
            0,
        );
        let clock = at_slot(100);

        let mut oracle = SwitchboardRequest::new(&account, &clock);
        assert_raffle_err(
            oracle.request_random_value(),
            RaffleError::InvalidRandomnessAccount,
        );
        assert_raffle_err(
            revealed_value(&account, &clock),
            RaffleError::InvalidRandomnessAccount,
        );
    }

    #[test]
    fn test_account_from_another_program_is_rejected() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data = randomness_data(99, 105, [3; 32]);
        let account = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data.0,
            &owner,
            false,
            0,
        );

        let commit_clock = at_slot(100);
        let mut oracle = SwitchboardRequest::new(&account, &commit_clock);
        assert_raffle_err(
            oracle.request_random_value(),
            RaffleError::InvalidRandomnessAccount,
        );
        assert_raffle_err(
            revealed_value(&account, &at_slot(105)),
            RaffleError::InvalidRandomnessAccount,
        );
    }

    #[test]
    fn test_commit_from_previous_slot_becomes_the_request() {
        let key = Pubkey::new_unique();
        let owner = *SWITCHBOARD_ON_DEMAND_PROGRAM_ID;
        let mut lamports = 0;
        let mut data = randomness_data(99, 0, [0; 32]);
        let account = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data.0,
            &owner,
            false,
            0,
        );
        let clock = at_slot(100);

        let request_id = SwitchboardRequest::new(&account, &clock)
            .request_random_value()
            .unwrap();

        assert_eq!(request_id, key);
    }

    #[test]
    fn test_stale_commit_is_rejected() {
        let key = Pubkey::new_unique();
        let owner = *SWITCHBOARD_ON_DEMAND_PROGRAM_ID;
        let mut lamports = 0;
        let mut data = randomness_data(90, 0, [0; 32]);
        let account = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data.0,
            &owner,
            false,
            0,
        );
        let clock = at_slot(100);

        let mut oracle = SwitchboardRequest::new(&account, &clock);
        assert_raffle_err(
            oracle.request_random_value(),
            RaffleError::RandomnessAlreadyRevealed,
        );
    }

    #[test]
    fn test_reads_value_in_reveal_slot_only() {
        let key = Pubkey::new_unique();
        let owner = *SWITCHBOARD_ON_DEMAND_PROGRAM_ID;
        let mut lamports = 0;
        let mut value = [0u8; 32];
        value[31] = 101;
        let mut data = randomness_data(99, 105, value);
        let account = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data.0,
            &owner,
            false,
            0,
        );

        let revealed = revealed_value(&account, &at_slot(105)).unwrap();
        assert_eq!(revealed, RandomValue::new(value));
        assert_eq!(revealed.index_into(3).unwrap(), 2);

        assert_raffle_err(
            revealed_value(&account, &at_slot(104)),
            RaffleError::RandomnessNotResolved,
        );
        assert_raffle_err(
            revealed_value(&account, &at_slot(106)),
            RaffleError::RandomnessNotResolved,
        );
    }

    #[test]
    fn test_forged_account_cannot_start_a_draw() {
        let mut raffle = new_raffle(10, 30);
        for _ in 0..5 {
            raffle.enter(Pubkey::new_unique(), 10).unwrap();
        }
        let before = raffle.clone();

        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data = randomness_data(99, 105, [3; 32]);
        let account = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data.0,
            &owner,
            false,
            0,
        );
        let clock = Clock {
            slot: 100,
            unix_timestamp: T0 + 31,
            ..Clock::default()
        };

        assert_raffle_err(
            raffle.resolve(&mut SwitchboardRequest::new(&account, &clock), T0 + 31),
            RaffleError::InvalidRandomnessAccount,
        );
        assert_eq!(raffle, before);
        assert_eq!(raffle.pending_request_id(), None);
    }
}
