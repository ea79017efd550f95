use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::scheduler::{TimerGuard, Scheduler, TimerError};

/// Index cycling through `len` items. `None` means nothing is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRobin {
	len: usize,
	index: Option<usize>,
}

impl RoundRobin {
	/// A counter over `len` items, on the first one.
	pub const fn new(len: usize) -> Self {
		Self {
			len,
			index: if len == 0 { None } else { Some(0) },
		}
	}

	/// Highlighted index, if any.
	pub const fn current(&self) -> Option<usize> {
		self.index
	}

	/// Current index, reading an idle counter as the first item.
	pub fn position(&self) -> usize {
		self.index.unwrap_or(0)
	}

	/// Whether `index` is the highlighted item.
	pub fn is(&self, index: usize) -> bool {
		self.index == Some(index)
	}

	/// True once the counter has reached `index` in the current pass.
	pub fn reached(&self, index: usize) -> bool {
		self.index.is_some_and(|i| i >= index)
	}

	/// Moves to the next item, wrapping after the last. An idle counter
	/// moves onto the first item.
	pub fn advance(&mut self) {
		if self.len == 0 {
			return;
		}
		self.index = Some(self.index.map_or(0, |i| (i + 1) % self.len));
	}

	/// Jumps to `index`. Out-of-range indices are ignored.
	pub fn select(&mut self, index: usize) {
		if index < self.len {
			self.index = Some(index);
		}
	}

	/// Back to the first item.
	pub fn reset(&mut self) {
		*self = Self::new(self.len);
	}

	/// Highlights nothing until the next advance or selection.
	pub fn clear(&mut self) {
		self.index = None;
	}
}

/// A [`RoundRobin`] advanced by a scheduler, with change notifications.
///
/// The counter lives outside the timer so a manual selection and the tick
/// callback always see the same value. The timer is owned through an
/// [`TimerGuard`], so dropping the carousel stops it.
pub struct Carousel<S: Scheduler> {
	scheduler: S,
	period: Duration,
	state: Rc<Cell<RoundRobin>>,
	notify: Rc<dyn Fn(RoundRobin)>,
	guard: Option<TimerGuard<S>>,
}

impl<S: Scheduler + Clone> Carousel<S> {
	/// A stopped carousel on the first item. `notify` sees every change.
	pub fn new(
		scheduler: S,
		len: usize,
		period: Duration,
		notify: impl Fn(RoundRobin) + 'static,
	) -> Self {
		Self {
			scheduler,
			period,
			state: Rc::new(Cell::new(RoundRobin::new(len))),
			notify: Rc::new(notify),
			guard: None,
		}
	}

	/// Current counter.
	pub fn state(&self) -> RoundRobin {
		self.state.get()
	}

	/// Whether the timer is live.
	pub fn is_running(&self) -> bool {
		self.guard.is_some()
	}

	/// Starts ticking from the current index. Does nothing if already running.
	pub fn start(&mut self) -> Result<(), TimerError> {
		if self.guard.is_some() {
			return Ok(());
		}
		let (state, notify) = (self.state.clone(), self.notify.clone());
		let guard = TimerGuard::every(
			self.scheduler.clone(),
			self.period,
			Box::new(move || {
				let mut rr = state.get();
				rr.advance();
				state.set(rr);
				notify(rr);
			}),
		)?;
		self.guard = Some(guard);
		Ok(())
	}

	/// Cancels the timer, keeping the index.
	pub fn stop(&mut self) {
		if let Some(guard) = self.guard.take() {
			guard.cancel();
		}
	}

	/// Applies a mode toggle: the old rotation is torn down and the counter
	/// starts over, from the first item when `animate` is set and idle otherwise.
	pub fn switch_mode(&mut self, animate: bool) -> Result<(), TimerError> {
		self.stop();
		self.update(|rr| {
			if animate {
				rr.reset();
			} else {
				rr.clear();
			}
		});
		if animate { self.start() } else { Ok(()) }
	}

	/// Jumps to `index`; a running timer carries on from there.
	pub fn select(&mut self, index: usize) {
		self.update(|rr| rr.select(index));
	}

	fn update(&self, f: impl FnOnce(&mut RoundRobin)) {
		let mut rr = self.state.get();
		f(&mut rr);
		self.state.set(rr);
		(self.notify)(rr);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::timing::manual::ManualScheduler;

	fn ms(n: u64) -> Duration {
		Duration::from_millis(n)
	}

	fn carousel(
		clock: &ManualScheduler,
		len: usize,
		period: Duration,
	) -> (Carousel<ManualScheduler>, Rc<RefCell<Vec<Option<usize>>>>) {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		let c = Carousel::new(clock.clone(), len, period, move |rr| {
			sink.borrow_mut().push(rr.current())
		});
		(c, seen)
	}

	#[test]
	fn after_k_ticks_index_is_k_mod_n() {
		for n in 1..6 {
			let mut rr = RoundRobin::new(n);
			for k in 0..20 {
				assert_eq!(rr.current(), Some(k % n));
				assert!(rr.position() < n);
				rr.advance();
			}
		}
	}

	#[test]
	fn empty_rotation_stays_idle() {
		let mut rr = RoundRobin::new(0);
		rr.advance();
		rr.select(0);
		assert_eq!(rr.current(), None);
	}

	#[test]
	fn idle_counter_starts_at_first_item() {
		let mut rr = RoundRobin::new(3);
		rr.clear();
		assert!(!rr.reached(0));
		rr.advance();
		assert_eq!(rr.current(), Some(0));
	}

	#[test]
	fn select_ignores_out_of_range() {
		let mut rr = RoundRobin::new(3);
		rr.select(2);
		rr.select(7);
		assert_eq!(rr.current(), Some(2));
		assert!(rr.reached(1) && rr.reached(2) && !rr.reached(3));
	}

	#[test]
	fn four_items_every_two_seconds() {
		let clock = ManualScheduler::new();
		let (mut c, _) = carousel(&clock, 4, ms(2000));
		c.start().unwrap();

		clock.advance(ms(3999));
		assert_eq!(c.state().current(), Some(1));
		clock.advance(ms(1));
		assert_eq!(c.state().current(), Some(2));
		clock.advance(ms(4000));
		assert_eq!(c.state().current(), Some(0));
	}

	#[test]
	fn stop_and_drop_halt_the_rotation() {
		let clock = ManualScheduler::new();
		let (mut c, seen) = carousel(&clock, 3, ms(1500));
		c.start().unwrap();
		clock.advance(ms(3000));
		c.stop();
		clock.advance(ms(10_000));
		assert_eq!(*seen.borrow(), vec![Some(1), Some(2)]);

		c.start().unwrap();
		drop(c);
		clock.advance(ms(10_000));
		assert_eq!(seen.borrow().len(), 2);
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn start_twice_keeps_one_timer() {
		let clock = ManualScheduler::new();
		let (mut c, _) = carousel(&clock, 4, ms(1000));
		c.start().unwrap();
		c.start().unwrap();
		assert_eq!(clock.active_timers(), 1);
		clock.advance(ms(1000));
		assert_eq!(c.state().current(), Some(1));
	}

	#[test]
	fn manual_selection_continues_from_clicked_item() {
		let clock = ManualScheduler::new();
		let (mut c, _) = carousel(&clock, 7, ms(4000));
		c.start().unwrap();
		c.select(5);
		clock.advance(ms(4000));
		assert_eq!(c.state().current(), Some(6));
		clock.advance(ms(4000));
		assert_eq!(c.state().current(), Some(0));
	}

	#[test]
	fn mode_toggle_resets_previous_rotation() {
		let clock = ManualScheduler::new();
		let (mut c, seen) = carousel(&clock, 4, ms(1500));
		c.switch_mode(true).unwrap();
		clock.advance(ms(4500));
		assert_eq!(c.state().current(), Some(3));

		// tight -> loose: nothing animates and nothing is highlighted
		c.switch_mode(false).unwrap();
		assert!(!c.is_running());
		assert_eq!(c.state().current(), None);
		clock.advance(ms(6000));
		assert_eq!(c.state().current(), None);

		// loose -> tight: the rotation starts over from the first service
		c.switch_mode(true).unwrap();
		assert_eq!(c.state().current(), Some(0));
		clock.advance(ms(1500));
		assert_eq!(c.state().current(), Some(1));
		assert_eq!(clock.active_timers(), 1);
		assert_eq!(seen.borrow().last(), Some(&Some(1)));
	}
}
