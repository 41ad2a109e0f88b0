pub mod phrases;
pub mod resolve;
pub mod slot;
