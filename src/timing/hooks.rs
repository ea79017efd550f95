use std::time::Duration;

use leptos::prelude::*;
use log::warn;

use super::round_robin::{Carousel, RoundRobin};
use super::scheduler::{BrowserScheduler, Scheduler, TimerGuard};

/// Reactive view of a component-scoped [`Carousel`].
///
/// The carousel is stored on the reactive owner of the component that
/// created it. Disposing that owner drops the carousel and its timer.
pub struct Rotation<S: Scheduler + 'static = BrowserScheduler> {
	state: RwSignal<RoundRobin>,
	running: RwSignal<bool>,
	carousel: StoredValue<Carousel<S>, LocalStorage>,
}

impl<S: Scheduler + 'static> Clone for Rotation<S> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<S: Scheduler + 'static> Copy for Rotation<S> {}

impl<S: Scheduler + Clone + 'static> Rotation<S> {
	/// Highlighted index, reading "nothing highlighted" as the first item.
	pub fn index(&self) -> usize {
		self.state.with(RoundRobin::position)
	}

	/// Whether `index` is highlighted.
	pub fn is(&self, index: usize) -> bool {
		self.state.with(|rr| rr.is(index))
	}

	/// Whether the rotation has reached `index` in the current pass.
	pub fn reached(&self, index: usize) -> bool {
		self.state.with(|rr| rr.reached(index))
	}

	/// Jumps to `index`; the timer keeps advancing from there.
	pub fn select(&self, index: usize) {
		self.carousel.update_value(|c| c.select(index));
	}

	/// Whether the rotation is animating.
	pub fn running(&self) -> bool {
		self.running.get()
	}

	/// Starts or stops animating. A change tears the old timer down and
	/// resets the counter: to the first item when animating, to nothing
	/// highlighted otherwise. Setting the current mode again does nothing.
	pub fn set_running(&self, animate: bool) {
		if self.running.get_untracked() == animate {
			return;
		}
		self.running.set(animate);
		self.switch(animate);
	}

	fn switch(&self, animate: bool) {
		self.carousel.update_value(|c| {
			if let Err(err) = c.switch_mode(animate) {
				warn!("round-robin not restarted: {err}");
			}
		});
	}
}

fn carousel_on<S: Scheduler + Clone + 'static>(
	scheduler: S,
	len: usize,
	period_ms: u64,
	running: bool,
) -> Rotation<S> {
	let state = RwSignal::new(RoundRobin::new(len));
	let carousel = StoredValue::new_local(Carousel::new(
		scheduler,
		len,
		Duration::from_millis(period_ms),
		move |rr| state.set(rr),
	));
	Rotation {
		state,
		running: RwSignal::new(running),
		carousel,
	}
}

/// Cycles through `len` items every `period_ms` for as long as the calling
/// component is mounted.
pub fn use_round_robin(len: usize, period_ms: u64) -> Rotation {
	use_round_robin_on(BrowserScheduler, len, period_ms)
}

fn use_round_robin_on<S: Scheduler + Clone + 'static>(
	scheduler: S,
	len: usize,
	period_ms: u64,
) -> Rotation<S> {
	let rotation = carousel_on(scheduler, len, period_ms, true);
	rotation.carousel.update_value(|c| {
		if let Err(err) = c.start() {
			warn!("round-robin over {len} items not started: {err}");
		}
	});
	rotation
}

/// Like [`use_round_robin`], but only animates while [`Rotation::running`]
/// is set, starting in the `running` mode.
pub fn use_round_robin_while(len: usize, period_ms: u64, running: bool) -> Rotation {
	use_round_robin_while_on(BrowserScheduler, len, period_ms, running)
}

fn use_round_robin_while_on<S: Scheduler + Clone + 'static>(
	scheduler: S,
	len: usize,
	period_ms: u64,
	running: bool,
) -> Rotation<S> {
	let rotation = carousel_on(scheduler, len, period_ms, running);
	rotation.switch(running);
	rotation
}

/// Calls `tick` every `period_ms` until the calling component unmounts.
pub fn use_interval(period_ms: u64, tick: impl Fn() + 'static) {
	use_interval_on(BrowserScheduler, period_ms, tick);
}

fn use_interval_on<S: Scheduler + 'static>(scheduler: S, period_ms: u64, tick: impl Fn() + 'static) {
	let period = Duration::from_millis(period_ms);
	match TimerGuard::every(scheduler, period, Box::new(tick)) {
		Ok(guard) => _ = StoredValue::new_local(guard),
		Err(err) => warn!("interval of {period_ms} ms not started: {err}"),
	}
}

struct Pending<S: Scheduler> {
	scheduler: S,
	guard: Option<TimerGuard<S>>,
}

/// At most one pending timeout, owned by the calling component.
pub struct TimeoutSlot<S: Scheduler + 'static = BrowserScheduler> {
	pending: StoredValue<Pending<S>, LocalStorage>,
}

impl<S: Scheduler + 'static> Clone for TimeoutSlot<S> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<S: Scheduler + 'static> Copy for TimeoutSlot<S> {}

impl<S: Scheduler + Clone + 'static> TimeoutSlot<S> {
	/// Runs `fire` after `delay`, replacing whatever was pending.
	pub fn schedule(&self, delay: Duration, fire: impl FnOnce() + 'static) {
		self.pending.update_value(|p| {
			p.guard = None;
			match TimerGuard::after(p.scheduler.clone(), delay, Box::new(fire)) {
				Ok(guard) => p.guard = Some(guard),
				Err(err) => warn!("timeout of {} ms not started: {err}", delay.as_millis()),
			}
		});
	}

	/// Drops the pending timeout, if any.
	pub fn clear(&self) {
		self.pending.update_value(|p| p.guard = None);
	}
}

/// A [`TimeoutSlot`] cancelled when the calling component unmounts.
pub fn use_timeout() -> TimeoutSlot {
	use_timeout_on(BrowserScheduler)
}

pub(crate) fn use_timeout_on<S: Scheduler + 'static>(scheduler: S) -> TimeoutSlot<S> {
	TimeoutSlot {
		pending: StoredValue::new_local(Pending {
			scheduler,
			guard: None,
		}),
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;
	use crate::timing::manual::ManualScheduler;

	fn ms(n: u64) -> Duration {
		Duration::from_millis(n)
	}

	fn lit(rotation: Rotation<ManualScheduler>, len: usize) -> Option<usize> {
		(0..len).find(|&i| rotation.is(i))
	}

	#[test]
	fn rotation_advances_until_its_owner_is_disposed() {
		let clock = ManualScheduler::new();
		let owner = Owner::new();
		let rotation = owner.with(|| use_round_robin_on(clock.clone(), 4, 2000));
		assert_eq!(rotation.index(), 0);
		assert!(rotation.running());

		clock.advance(ms(4000));
		assert_eq!(rotation.index(), 2);
		rotation.select(3);
		clock.advance(ms(2000));
		assert_eq!(rotation.index(), 0);
		assert_eq!(clock.active_timers(), 1);

		owner.cleanup();
		assert_eq!(clock.active_timers(), 0);
		clock.advance(ms(10_000));
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn mode_change_resets_the_rotation() {
		let clock = ManualScheduler::new();
		let owner = Owner::new();
		let calling = owner.with(|| use_round_robin_while_on(clock.clone(), 4, 1500, true));
		clock.advance(ms(4500));
		assert_eq!(lit(calling, 4), Some(3));

		calling.set_running(false);
		assert!(!calling.running());
		assert_eq!(lit(calling, 4), None);
		assert_eq!(clock.active_timers(), 0);
		clock.advance(ms(6000));
		assert_eq!(lit(calling, 4), None);

		calling.set_running(true);
		assert_eq!(lit(calling, 4), Some(0));
		clock.advance(ms(1500));
		assert_eq!(lit(calling, 4), Some(1));

		// same mode again keeps the counter where it is
		calling.set_running(true);
		assert_eq!(lit(calling, 4), Some(1));
		assert_eq!(clock.active_timers(), 1);

		owner.cleanup();
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn rotation_can_start_idle() {
		let clock = ManualScheduler::new();
		let owner = Owner::new();
		let calling = owner.with(|| use_round_robin_while_on(clock.clone(), 4, 1500, false));
		assert_eq!(lit(calling, 4), None);
		assert_eq!(clock.active_timers(), 0);
		owner.cleanup();
	}

	#[test]
	fn interval_stops_with_its_owner() {
		let clock = ManualScheduler::new();
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let owner = Owner::new();
		owner.with(|| use_interval_on(clock.clone(), 100, move || counter.set(counter.get() + 1)));

		clock.advance(ms(350));
		assert_eq!(hits.get(), 3);
		owner.cleanup();
		clock.advance(ms(1000));
		assert_eq!(hits.get(), 3);
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn rescheduling_replaces_the_pending_timeout() {
		let clock = ManualScheduler::new();
		let fired = Rc::new(Cell::new(0));
		let owner = Owner::new();
		let slot = owner.with(|| use_timeout_on(clock.clone()));

		for _ in 0..3 {
			let fired = fired.clone();
			slot.schedule(ms(1000), move || fired.set(fired.get() + 1));
		}
		assert_eq!(clock.active_timers(), 1);
		clock.advance(ms(1000));
		assert_eq!(fired.get(), 1);

		let late = fired.clone();
		slot.schedule(ms(1000), move || late.set(late.get() + 1));
		slot.clear();
		clock.advance(ms(1000));
		assert_eq!(fired.get(), 1);
		owner.cleanup();
	}

	#[test]
	fn pending_timeout_dies_with_its_owner() {
		let clock = ManualScheduler::new();
		let fired = Rc::new(Cell::new(false));
		let flag = fired.clone();
		let owner = Owner::new();
		owner.with(|| use_timeout_on(clock.clone()).schedule(ms(1000), move || flag.set(true)));

		clock.advance(ms(400));
		owner.cleanup();
		assert_eq!(clock.active_timers(), 0);
		clock.advance(ms(2000));
		assert!(!fired.get());
	}
}
