pub mod coerce;
pub mod contract;
pub mod hashes;
pub mod signature;
pub mod validate;
