pub mod lottery;
pub mod signups;
pub mod utils;
