use leptos::prelude::*;

use super::{COURSE, Navigation, Topic, duplicate_ids};

/// Handle to the navigation state of the nearest [`TopicProvider`].
#[derive(Clone, Copy)]
pub struct TopicContext {
	state: RwSignal<Navigation>,
}

impl TopicContext {
	fn new(topics: &'static [Topic]) -> Self {
		Self {
			state: RwSignal::new(Navigation::new(topics)),
		}
	}

	/// The tree being navigated.
	pub fn topics(&self) -> &'static [Topic] {
		self.state.with_untracked(Navigation::topics)
	}

	/// Resolved selection, falling back to the first topic.
	pub fn current_topic(&self) -> &'static Topic {
		self.state.with(Navigation::current_topic)
	}

	/// Whether `id` is the selection.
	pub fn is_selected(&self, id: &str) -> bool {
		self.state.with(|nav| nav.is_selected(id))
	}

	/// Selects `id` and closes the mobile overlay.
	pub fn set_current_topic(&self, id: &str) {
		self.state.update(|nav| nav.select(id));
	}

	/// Whether the mobile overlay is showing.
	pub fn sidebar_open(&self) -> bool {
		self.state.with(Navigation::sidebar_open)
	}

	/// Shows the mobile overlay.
	pub fn open_sidebar(&self) {
		self.state.update(Navigation::open_sidebar);
	}

	/// Hides the mobile overlay.
	pub fn close_sidebar(&self) {
		self.state.update(Navigation::close_sidebar);
	}

	/// Whether a top-level topic is expanded.
	pub fn is_expanded(&self, id: &str) -> bool {
		self.state.with(|nav| nav.is_expanded(id))
	}

	/// Expands or collapses a top-level topic.
	pub fn toggle_expanded(&self, id: &str) {
		self.state.update(|nav| nav.toggle_expanded(id));
	}
}

/// Gives its children an independent navigation state over the course tree.
#[component]
pub fn TopicProvider(children: Children) -> impl IntoView {
	debug_assert!(duplicate_ids(COURSE).is_empty(), "duplicate topic ids in course tree");
	provide_context(TopicContext::new(COURSE));
	children()
}

/// The navigation state of the enclosing [`TopicProvider`].
///
/// # Panics
///
/// Panics when called outside a [`TopicProvider`].
pub fn use_topics() -> TopicContext {
	use_context::<TopicContext>()
		.unwrap_or_else(|| panic!("use_topics must be used within a TopicProvider"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reading_outside_a_provider_fails_fast() {
		let owner = Owner::new();
		owner.with(|| {
			let result = std::panic::catch_unwind(use_topics);
			let payload = result.err().unwrap();
			let message = payload
				.downcast_ref::<&str>()
				.map(|s| s.to_string())
				.or_else(|| payload.downcast_ref::<String>().cloned())
				.unwrap_or_default();
			assert!(message.contains("within a TopicProvider"), "{message}");
		});
	}

	#[test]
	fn each_provider_owns_its_state() {
		let owner = Owner::new();
		owner.with(|| {
			let first = TopicContext::new(COURSE);
			let second = TopicContext::new(COURSE);
			first.set_current_topic("comparison");
			assert_eq!(first.current_topic().id, "comparison");
			assert_eq!(second.current_topic().id, "intro");
		});
	}
}
