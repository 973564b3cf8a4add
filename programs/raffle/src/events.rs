use anchor_lang::prelude::*;

#[event]
pub struct RaffleEntered {
    pub round: u64,
    pub player: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RequestedRaffleWinner {
    pub round: u64,
    pub request_id: Pubkey,
}

#[event]
pub struct WinnerPicked {
    pub round: u64,
    pub winner: Pubkey,
    pub amount: u64,
}
