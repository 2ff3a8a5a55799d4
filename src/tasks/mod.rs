//! Background Tasks Module
//!
//! Contains background tasks that run for the life of the process.
//!
//! # Tasks
//! - TTL reap loop: removes expired cache entries once per TTL interval

mod reaper;

pub use reaper::spawn_reap_loop;
