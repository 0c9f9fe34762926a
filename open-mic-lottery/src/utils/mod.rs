pub mod csv;
pub mod serde;
