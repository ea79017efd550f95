use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::topics::{Topic, use_topics};

const BRAND_MARK: &str = "Az";
const BRAND_NAME: &str = "Azure Training";
const COURSE_NAME: &str = "Event-Driven Architecture";
const COURSE_TAGLINE: &str = "& Messaging in Azure";

/// Collapsible course outline. Off-canvas below `lg`, pinned above it.
#[component]
pub fn Sidebar() -> impl IntoView {
	let topics = use_topics();

	let panel_class = move || {
		format!(
			"fixed left-0 top-0 h-full w-80 bg-white shadow-xl z-50 transform transition-transform duration-300 ease-in-out lg:translate-x-0 lg:z-auto flex flex-col {}",
			if topics.sidebar_open() { "translate-x-0" } else { "-translate-x-full" }
		)
	};

	view! {
		<Show when=move || topics.sidebar_open()>
			<div
				class="fixed inset-0 bg-black bg-opacity-50 z-40 lg:hidden"
				on:click=move |_| topics.close_sidebar()
			/>
		</Show>

		<aside class=panel_class>
			<div class="flex items-center justify-between p-6 border-b border-gray-200">
				<div class="flex items-center space-x-3">
					<div class="w-8 h-8 bg-gradient-to-r from-blue-600 to-indigo-600 rounded-lg flex items-center justify-center">
						<span class="text-white font-bold text-sm">{BRAND_MARK}</span>
					</div>
					<h1 class="text-lg font-semibold text-gray-900">{BRAND_NAME}</h1>
				</div>
				<button
					class="lg:hidden p-2 hover:bg-gray-100 rounded-lg transition-colors"
					aria-label="Close navigation"
					on:click=move |_| topics.close_sidebar()
				>
					<Icon glyph=Glyph::Close class="w-5 h-5" />
				</button>
			</div>

			<div class="p-4 bg-gradient-to-r from-blue-50 to-indigo-50 border-b">
				<h2 class="font-semibold text-gray-900 mb-1">{COURSE_NAME}</h2>
				<p class="text-sm text-gray-600">{COURSE_TAGLINE}</p>
			</div>

			<nav class="flex-1 overflow-y-auto p-4">
				<div class="space-y-2">
					{topics.topics().iter().map(|topic| view! { <TopicEntry topic=topic /> }).collect_view()}
				</div>
			</nav>
		</aside>
	}
}

#[component]
fn TopicEntry(topic: &'static Topic) -> impl IntoView {
	let topics = use_topics();
	let id = topic.id;

	let header_class = move || {
		format!(
			"w-full flex items-center justify-between p-3 rounded-lg text-left transition-all duration-200 {}",
			if topics.is_selected(id) {
				"bg-blue-100 text-blue-900 border border-blue-200"
			} else {
				"hover:bg-gray-50 text-gray-700"
			}
		)
	};

	view! {
		<div class="space-y-1">
			<button class=header_class on:click=move |_| topics.toggle_expanded(id)>
				<div class="flex-1">
					<div class="font-medium text-sm">{topic.title}</div>
					<div class="flex items-center mt-1 text-xs text-gray-500">
						<Icon glyph=Glyph::Clock class="w-3 h-3 mr-1" />
						{topic.duration}
					</div>
				</div>
				{move || {
					let glyph = if topics.is_expanded(id) { Glyph::ChevronDown } else { Glyph::ChevronRight };
					view! { <Icon glyph=glyph class="w-4 h-4" /> }
				}}
			</button>

			<Show when=move || topics.is_expanded(id) && !topic.subtopics.is_empty()>
				<div class="ml-4 space-y-1">
					{topic
						.subtopics
						.iter()
						.map(|sub| view! { <SubtopicLink topic=sub /> })
						.collect_view()}
				</div>
			</Show>
		</div>
	}
}

#[component]
fn SubtopicLink(topic: &'static Topic) -> impl IntoView {
	let topics = use_topics();
	let id = topic.id;

	let class = move || {
		format!(
			"w-full flex items-center justify-between p-2 rounded-md text-left transition-colors text-sm {}",
			if topics.is_selected(id) {
				"bg-blue-50 text-blue-800 border-l-2 border-blue-500"
			} else {
				"hover:bg-gray-50 text-gray-600"
			}
		)
	};

	view! {
		<button class=class on:click=move |_| topics.set_current_topic(id)>
			<span class="flex-1">{topic.title}</span>
			<span class="text-xs text-gray-400">{topic.duration}</span>
		</button>
	}
}
