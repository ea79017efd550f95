//! Maps a topic id onto the page that teaches it.

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::topics::Topic;

mod azure;
mod foundations;
mod practices;

/// Renders a lesson body.
pub type LessonView = fn() -> AnyView;

/// Topics with a dedicated lesson. Everything else gets the generic overview.
pub const LESSONS: &[(&str, LessonView)] = &[
	("what-is-eda", foundations::what_is_eda),
	("characteristics", foundations::characteristics),
	("event-grid", azure::event_grid),
	("event-hub", azure::event_hub),
	("comparison", azure::comparison),
	("architecture-example", azure::architecture_example),
	("design-principles", practices::design_principles),
	("routing-filtering", practices::routing_filtering),
];

/// The dedicated lesson for `id`, if there is one.
pub fn lesson_for(id: &str) -> Option<LessonView> {
	LESSONS.iter().find(|(lesson, _)| *lesson == id).map(|&(_, view)| view)
}

const OVERVIEW_CARDS: &[(Glyph, &str, &str, &str, &str)] = &[
	(
		Glyph::Bulb,
		"bg-blue-100",
		"text-blue-600",
		"Learning Objectives",
		"Understand core concepts and practical implementation strategies",
	),
	(
		Glyph::Target,
		"bg-green-100",
		"text-green-600",
		"Hands-on Examples",
		"Real-world scenarios and architecture patterns",
	),
	(
		Glyph::Users,
		"bg-purple-100",
		"text-purple-600",
		"Interactive Learning",
		"Engaging visualizations and animated workflows",
	),
];

/// Fallback page built from the topic's own title, duration and summary.
#[component]
fn Overview(topic: &'static Topic) -> impl IntoView {
	view! {
		<div class="space-y-8">
			<div class="bg-gradient-to-r from-blue-50 to-indigo-50 p-8 rounded-xl border border-blue-200">
				<div class="flex items-center space-x-4 mb-4">
					<div class="w-12 h-12 bg-blue-600 rounded-lg flex items-center justify-center">
						<Icon glyph=Glyph::Target class="text-2xl text-white" />
					</div>
					<div>
						<h2 class="text-2xl font-bold text-gray-900">{topic.title}</h2>
						<div class="flex items-center space-x-4 mt-2 text-sm text-gray-600">
							<div class="flex items-center space-x-1">
								<Icon glyph=Glyph::Clock class="w-4 h-4" />
								<span>{topic.duration}</span>
							</div>
							<div class="flex items-center space-x-1">
								<Icon glyph=Glyph::Users class="w-4 h-4" />
								<span>"Cloud Architects"</span>
							</div>
						</div>
					</div>
				</div>
				<p class="text-gray-700 text-lg">{topic.content}</p>
			</div>

			<div class="grid md:grid-cols-3 gap-6">
				{OVERVIEW_CARDS
					.iter()
					.map(|&(glyph, bg, fg, title, text)| view! {
						<div class="bg-white p-6 rounded-xl shadow-sm border">
							<div class=format!("w-10 h-10 {bg} rounded-lg flex items-center justify-center mb-4")>
								<Icon glyph=glyph class=format!("text-xl {fg}") />
							</div>
							<h3 class="font-semibold text-gray-900 mb-2">{title}</h3>
							<p class="text-gray-600 text-sm">{text}</p>
						</div>
					})
					.collect_view()}
			</div>
		</div>
	}
}

/// Lesson body for `topic`: its dedicated page or the generic overview.
#[component]
pub fn TopicContent(topic: &'static Topic) -> impl IntoView {
	let body = match lesson_for(topic.id) {
		Some(render) => render(),
		None => view! { <Overview topic=topic /> }.into_any(),
	};

	view! { <div class="max-w-6xl mx-auto">{body}</div> }
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::topics::{COURSE, all_topics, find_topic};

	#[test]
	fn every_lesson_belongs_to_a_course_topic() {
		for (id, _) in LESSONS {
			assert!(find_topic(COURSE, id).is_some(), "{id} has a lesson but no topic");
		}
	}

	#[test]
	fn lesson_ids_are_unique() {
		let ids: HashSet<_> = LESSONS.iter().map(|(id, _)| *id).collect();
		assert_eq!(ids.len(), LESSONS.len());
	}

	#[test]
	fn topics_without_a_lesson_use_the_overview() {
		assert!(lesson_for("intro").is_none());
		assert!(lesson_for("storage-queues").is_none());
		assert!(lesson_for("no-such-topic").is_none());
		assert!(lesson_for("").is_none());
	}

	#[test]
	fn lookup_is_exact() {
		assert!(lesson_for("event-hub").is_some());
		assert!(lesson_for("Event-Hub").is_none());
		assert!(lesson_for("event-hub ").is_none());
	}

	#[test]
	fn most_topics_fall_back() {
		let dedicated = all_topics(COURSE).filter(|t| lesson_for(t.id).is_some()).count();
		assert_eq!(dedicated, LESSONS.len());
		assert!(all_topics(COURSE).count() > dedicated);
	}
}
