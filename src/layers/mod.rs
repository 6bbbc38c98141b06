pub mod balance;
pub use balance::BalanceLayer;
