//! Deterministic scheduler for tests: time only moves when `advance` is called.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::scheduler::{Fire, Scheduler, Tick, TimerError};

struct Timer {
	id: usize,
	/// `None` for a one-shot timer.
	period: Option<Duration>,
	next_due: Duration,
	tick: Rc<dyn Fn()>,
}

#[derive(Default)]
struct Clock {
	now: Duration,
	next_id: usize,
	timers: Vec<Timer>,
}

#[derive(Clone, Default)]
pub struct ManualScheduler {
	clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn now(&self) -> Duration {
		self.clock.borrow().now
	}

	pub fn active_timers(&self) -> usize {
		self.clock.borrow().timers.len()
	}

	fn push(&self, period: Option<Duration>, delay: Duration, tick: Rc<dyn Fn()>) -> usize {
		let mut clock = self.clock.borrow_mut();
		let id = clock.next_id;
		clock.next_id += 1;
		let next_due = clock.now + delay;
		clock.timers.push(Timer {
			id,
			period,
			next_due,
			tick,
		});
		id
	}

	/// Moves simulated time forward, firing every tick that falls due in order.
	pub fn advance(&self, by: Duration) {
		let target = self.clock.borrow().now + by;
		loop {
			// Never hold the borrow while a tick runs; ticks may cancel timers.
			let due = {
				let mut clock = self.clock.borrow_mut();
				let Some(timer) = clock
					.timers
					.iter_mut()
					.filter(|t| t.next_due <= target)
					.min_by_key(|t| (t.next_due, t.id))
				else {
					break;
				};
				let fired_at = timer.next_due;
				let (id, period, tick) = (timer.id, timer.period, timer.tick.clone());
				match period {
					Some(period) => timer.next_due += period,
					None => clock.timers.retain(|t| t.id != id),
				}
				clock.now = fired_at;
				tick
			};
			due();
		}
		self.clock.borrow_mut().now = target;
	}
}

impl Scheduler for ManualScheduler {
	type Handle = usize;

	fn start(&self, period: Duration, tick: Tick) -> Result<usize, TimerError> {
		if period.is_zero() {
			return Err(TimerError::ZeroPeriod);
		}
		Ok(self.push(Some(period), period, Rc::from(tick)))
	}

	fn start_once(&self, delay: Duration, fire: Fire) -> Result<usize, TimerError> {
		let fire = RefCell::new(Some(fire));
		let tick = move || {
			if let Some(fire) = fire.borrow_mut().take() {
				fire();
			}
		};
		Ok(self.push(None, delay, Rc::new(tick)))
	}

	fn cancel(&self, handle: usize) {
		self.clock.borrow_mut().timers.retain(|t| t.id != handle);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	#[test]
	fn timers_fire_in_due_order() {
		let clock = ManualScheduler::new();
		let log = Rc::new(RefCell::new(Vec::new()));
		for (name, ms) in [("slow", 300u64), ("fast", 200)] {
			let log = log.clone();
			clock
				.start(Duration::from_millis(ms), Box::new(move || log.borrow_mut().push(name)))
				.unwrap();
		}

		clock.advance(Duration::from_millis(600));
		assert_eq!(*log.borrow(), vec!["fast", "slow", "fast", "slow", "fast"]);
		assert_eq!(clock.now(), Duration::from_millis(600));
	}

	#[test]
	fn one_shot_timers_leave_after_firing() {
		let clock = ManualScheduler::new();
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		clock
			.start_once(Duration::from_millis(250), Box::new(move || counter.set(counter.get() + 1)))
			.unwrap();
		assert_eq!(clock.active_timers(), 1);

		clock.advance(Duration::from_secs(2));
		assert_eq!(hits.get(), 1);
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn cancelled_timer_never_fires() {
		let clock = ManualScheduler::new();
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let id = clock
			.start(Duration::from_millis(100), Box::new(move || counter.set(counter.get() + 1)))
			.unwrap();
		clock.cancel(id);
		clock.advance(Duration::from_secs(1));
		assert_eq!(hits.get(), 0);
	}
}
