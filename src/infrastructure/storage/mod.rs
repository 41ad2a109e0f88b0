pub mod db;
pub mod inflight;
