//! Background Tasks Module
//!
//! Contains background tasks owned by long-lived components.
//!
//! # Tasks
//! - Sweeper: Purges stale timed-cache entries at the configured interval

mod sweeper;

pub(crate) use sweeper::spawn_sweeper;
