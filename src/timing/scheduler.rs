use std::time::Duration;

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Callback invoked on every interval tick.
pub type Tick = Box<dyn Fn()>;

/// Callback invoked once when a timeout elapses.
pub type Fire = Box<dyn FnOnce()>;

/// Why a timer could not be started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
	/// The host rejected the timer.
	#[error("browser refused to schedule a {period_ms} ms timer: {reason}")]
	Schedule {
		/// Requested period or delay.
		period_ms: u128,
		/// What the host reported.
		reason: String,
	},
	/// An interval of zero would spin.
	#[error("interval period must be non-zero")]
	ZeroPeriod,
}

impl TimerError {
	fn from_js(period: Duration, err: JsValue) -> Self {
		Self::Schedule {
			period_ms: period.as_millis(),
			reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
		}
	}
}

/// Something that can run callbacks later, repeatedly or once.
pub trait Scheduler {
	/// Identifies a running timer so it can be cancelled.
	type Handle;

	/// Runs `tick` every `period` until cancelled.
	fn start(&self, period: Duration, tick: Tick) -> Result<Self::Handle, TimerError>;

	/// Runs `fire` once after `delay` unless cancelled first.
	fn start_once(&self, delay: Duration, fire: Fire) -> Result<Self::Handle, TimerError>;

	/// Stops a timer. Cancelling a timeout that already fired does nothing.
	fn cancel(&self, handle: Self::Handle);
}

/// `setInterval` and `setTimeout` on the browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// A browser timer of either kind.
#[derive(Clone, Copy, Debug)]
pub enum BrowserHandle {
	/// From `setInterval`.
	Interval(IntervalHandle),
	/// From `setTimeout`.
	Timeout(TimeoutHandle),
}

impl Scheduler for BrowserScheduler {
	type Handle = BrowserHandle;

	fn start(&self, period: Duration, tick: Tick) -> Result<BrowserHandle, TimerError> {
		if period.is_zero() {
			return Err(TimerError::ZeroPeriod);
		}
		set_interval_with_handle(move || tick(), period)
			.map(BrowserHandle::Interval)
			.map_err(|e| TimerError::from_js(period, e))
	}

	fn start_once(&self, delay: Duration, fire: Fire) -> Result<BrowserHandle, TimerError> {
		set_timeout_with_handle(fire, delay)
			.map(BrowserHandle::Timeout)
			.map_err(|e| TimerError::from_js(delay, e))
	}

	fn cancel(&self, handle: BrowserHandle) {
		match handle {
			BrowserHandle::Interval(handle) => handle.clear(),
			BrowserHandle::Timeout(handle) => handle.clear(),
		}
	}
}

/// A scheduled timer. Dropping the guard cancels it.
pub struct TimerGuard<S: Scheduler> {
	scheduler: S,
	handle: Option<S::Handle>,
}

impl<S: Scheduler> TimerGuard<S> {
	/// Starts an interval.
	pub fn every(scheduler: S, period: Duration, tick: Tick) -> Result<Self, TimerError> {
		let handle = scheduler.start(period, tick)?;
		Ok(Self {
			scheduler,
			handle: Some(handle),
		})
	}

	/// Starts a one-shot timeout.
	pub fn after(scheduler: S, delay: Duration, fire: Fire) -> Result<Self, TimerError> {
		let handle = scheduler.start_once(delay, fire)?;
		Ok(Self {
			scheduler,
			handle: Some(handle),
		})
	}

	/// Stops the timer now rather than at drop.
	pub fn cancel(mut self) {
		self.release();
	}

	fn release(&mut self) {
		if let Some(handle) = self.handle.take() {
			self.scheduler.cancel(handle);
		}
	}
}

impl<S: Scheduler> Drop for TimerGuard<S> {
	fn drop(&mut self) {
		self.release();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;
	use crate::timing::manual::ManualScheduler;

	#[test]
	fn guard_ticks_until_dropped() {
		let clock = ManualScheduler::new();
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let guard = TimerGuard::every(
			clock.clone(),
			Duration::from_millis(500),
			Box::new(move || counter.set(counter.get() + 1)),
		)
		.unwrap();

		clock.advance(Duration::from_millis(1600));
		assert_eq!(hits.get(), 3);

		drop(guard);
		clock.advance(Duration::from_millis(5000));
		assert_eq!(hits.get(), 3);
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn explicit_cancel_releases_the_timer() {
		let clock = ManualScheduler::new();
		let guard =
			TimerGuard::every(clock.clone(), Duration::from_millis(100), Box::new(|| {})).unwrap();
		assert_eq!(clock.active_timers(), 1);
		guard.cancel();
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn timeout_fires_once_unless_dropped_first() {
		let clock = ManualScheduler::new();
		let hits = Rc::new(Cell::new(0));

		let counter = hits.clone();
		let _fired = TimerGuard::after(
			clock.clone(),
			Duration::from_millis(1000),
			Box::new(move || counter.set(counter.get() + 1)),
		)
		.unwrap();
		clock.advance(Duration::from_millis(999));
		assert_eq!(hits.get(), 0);
		clock.advance(Duration::from_millis(5000));
		assert_eq!(hits.get(), 1);
		assert_eq!(clock.active_timers(), 0);

		let counter = hits.clone();
		let dropped = TimerGuard::after(
			clock.clone(),
			Duration::from_millis(1000),
			Box::new(move || counter.set(counter.get() + 1)),
		)
		.unwrap();
		clock.advance(Duration::from_millis(500));
		drop(dropped);
		clock.advance(Duration::from_millis(5000));
		assert_eq!(hits.get(), 1);
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn zero_period_is_rejected() {
		let clock = ManualScheduler::new();
		let result = TimerGuard::every(clock.clone(), Duration::ZERO, Box::new(|| {}));
		assert_eq!(result.err(), Some(TimerError::ZeroPeriod));
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn schedule_error_mentions_period() {
		let err = TimerError::Schedule {
			period_ms: 1500,
			reason: "no window".into(),
		};
		assert_eq!(
			err.to_string(),
			"browser refused to schedule a 1500 ms timer: no window"
		);
	}
}
