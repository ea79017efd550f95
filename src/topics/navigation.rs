use std::collections::BTreeSet;

use log::debug;

use super::{COURSE, DEFAULT_TOPIC_ID, INITIALLY_EXPANDED, Topic, resolve_topic};

/// Transient navigation state of one course shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
	topics: &'static [Topic],
	selected: String,
	sidebar_open: bool,
	expanded: BTreeSet<&'static str>,
}

impl Default for Navigation {
	fn default() -> Self {
		Self::new(COURSE)
	}
}

impl Navigation {
	/// Fresh state over `topics`: default topic, overlay closed.
	pub fn new(topics: &'static [Topic]) -> Self {
		Self {
			topics,
			selected: DEFAULT_TOPIC_ID.to_string(),
			sidebar_open: false,
			expanded: INITIALLY_EXPANDED.iter().copied().collect(),
		}
	}

	/// The tree being navigated.
	pub fn topics(&self) -> &'static [Topic] {
		self.topics
	}

	/// Selected id as stored, even if it names no topic.
	pub fn selected(&self) -> &str {
		&self.selected
	}

	/// Whether `id` is the stored selection.
	pub fn is_selected(&self, id: &str) -> bool {
		self.selected == id
	}

	/// The record the header and content panel render.
	pub fn current_topic(&self) -> &'static Topic {
		resolve_topic(self.topics, &self.selected)
	}

	/// Picks a topic and dismisses the mobile overlay.
	pub fn select(&mut self, id: &str) {
		debug!("topic selected: {id}");
		self.selected = id.to_string();
		self.sidebar_open = false;
	}

	/// Whether the mobile overlay is showing.
	pub fn sidebar_open(&self) -> bool {
		self.sidebar_open
	}

	/// Shows the mobile overlay.
	pub fn open_sidebar(&mut self) {
		self.sidebar_open = true;
	}

	/// Hides the mobile overlay.
	pub fn close_sidebar(&mut self) {
		self.sidebar_open = false;
	}

	/// Whether a top-level topic is expanded in the sidebar.
	pub fn is_expanded(&self, id: &str) -> bool {
		self.expanded.contains(id)
	}

	/// Expands or collapses a top-level topic without changing the selection.
	pub fn toggle_expanded(&mut self, id: &str) {
		if !self.expanded.remove(id) {
			if let Some(topic) = self.topics.iter().find(|t| t.id == id) {
				self.expanded.insert(topic.id);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_on_intro_with_overlay_closed() {
		let nav = Navigation::default();
		assert_eq!(nav.selected(), "intro");
		assert_eq!(nav.current_topic().title, "Introduction to Event-Driven Architecture");
		assert!(!nav.sidebar_open());
		assert!(nav.is_expanded("intro"));
		assert!(!nav.is_expanded("queues"));
	}

	#[test]
	fn selecting_a_subtopic_closes_overlay_and_updates_header() {
		let mut nav = Navigation::default();
		nav.open_sidebar();
		assert!(nav.sidebar_open());

		nav.select("event-hub");

		assert!(!nav.sidebar_open());
		let topic = nav.current_topic();
		assert_eq!(topic.title, "Azure Event Hub Overview");
		assert_eq!(topic.duration, "15 mins");
	}

	#[test]
	fn unknown_selection_renders_first_topic() {
		let mut nav = Navigation::default();
		nav.select("bogus");
		assert_eq!(nav.selected(), "bogus");
		assert_eq!(nav.current_topic().id, "intro");
	}

	#[test]
	fn toggling_expansion_leaves_selection_alone() {
		let mut nav = Navigation::default();
		nav.select("comparison");

		nav.toggle_expanded("queues");
		assert!(nav.is_expanded("queues"));
		nav.toggle_expanded("intro");
		assert!(!nav.is_expanded("intro"));
		nav.toggle_expanded("queues");
		assert!(!nav.is_expanded("queues"));

		assert!(nav.is_selected("comparison"));
	}

	#[test]
	fn only_top_level_topics_expand() {
		let mut nav = Navigation::default();
		nav.toggle_expanded("fifo-ordering");
		nav.toggle_expanded("nope");
		assert!(!nav.is_expanded("fifo-ordering"));
		assert!(!nav.is_expanded("nope"));
	}

	#[test]
	fn close_button_and_overlay_both_dismiss() {
		let mut nav = Navigation::default();
		nav.open_sidebar();
		nav.close_sidebar();
		assert!(!nav.sidebar_open());
		assert!(nav.is_selected("intro"));
	}
}
