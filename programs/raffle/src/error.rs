use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,

    #[msg("Raffle is not open for entries")]
    NotOpen,

    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,

    #[msg("Request id does not match the outstanding request")]
    UnknownRequest,

    #[msg("Player index out of range")]
    IndexOutOfRange,

    #[msg("Payout to the winner failed")]
    PayoutFailed,

    #[msg("Raffle has reached its player capacity")]
    RaffleFull,

    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,

    #[msg("A randomness request is already outstanding")]
    RequestAlreadyPending,

    #[msg("Randomness account data could not be parsed")]
    InvalidRandomnessAccount,

    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,

    #[msg("Randomness not resolved")]
    RandomnessNotResolved,

    #[msg("Raffle state invariant violated")]
    InvariantViolation,

    #[msg("Arithmetic overflow")]
    Overflow,
}
