//! Runtime-independent core of the raffle: ledger, round state machine,
//! request correlation, winner selection and payout.
//!
//! Instruction handlers bind the Solana runtime to this module through the
//! [`RandomnessOracle`] and [`PayoutSink`] traits.

pub mod correlator;
pub mod invariants;
pub mod ledger;
pub mod machine;
pub mod payout;
pub mod query;
pub mod selection;


pub use correlator::RandomnessOracle;
pub use payout::PayoutSink;
pub use selection::RandomValue;
