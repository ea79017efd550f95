//! Component-scoped timers and the round-robin counter they drive.

mod hooks;
#[cfg(test)]
pub(crate) mod manual;
mod round_robin;
mod scheduler;

#[cfg(test)]
pub(crate) use hooks::use_timeout_on;
pub use hooks::{
	Rotation, TimeoutSlot, use_interval, use_round_robin, use_round_robin_while, use_timeout,
};
pub use round_robin::{Carousel, RoundRobin};
pub use scheduler::{BrowserHandle, BrowserScheduler, Fire, Scheduler, Tick, TimerError, TimerGuard};
