pub mod adx;
pub mod sma;
