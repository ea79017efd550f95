use leptos::prelude::*;
use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::components::icon::{Glyph, Icon};
use crate::pages::lessons::TopicContent;
use crate::topics::use_topics;

const TRAINING_BADGE: &str = "Cloud Architecture Training";

/// Sticky header with the active topic plus the lesson body below it.
#[component]
pub fn MainContent() -> impl IntoView {
	let topics = use_topics();
	let topic = Memo::new(move |_| topics.current_topic());

	// Each lesson starts at the top of the page.
	Effect::new(move |prev: Option<&'static str>| {
		let id = topic.get().id;
		if prev.is_some_and(|p| p != id) {
			scroll_to_top();
		}
		id
	});

	view! {
		<div class="lg:ml-80 min-h-screen">
			<header class="bg-white shadow-sm border-b border-gray-200 sticky top-0 z-30">
				<div class="flex items-center justify-between px-6 py-4">
					<div class="flex items-center space-x-4">
						<button
							class="lg:hidden p-2 hover:bg-gray-100 rounded-lg transition-colors"
							aria-label="Open navigation"
							on:click=move |_| topics.open_sidebar()
						>
							<Icon glyph=Glyph::Menu class="w-5 h-5" />
						</button>
						<div>
							<h1 class="text-xl font-semibold text-gray-900">{move || topic.get().title}</h1>
							<p class="text-sm text-gray-600 mt-1">
								"Duration: "
								{move || topic.get().duration}
							</p>
						</div>
					</div>
					<div class="flex items-center space-x-3">
						<div class="px-3 py-1 bg-blue-100 text-blue-800 rounded-full text-sm font-medium">
							{TRAINING_BADGE}
						</div>
					</div>
				</div>
			</header>

			<main class="p-6">
				{move || view! { <TopicContent topic=topic.get() /> }}
			</main>
		</div>
	}
}

fn scroll_to_top() {
	let Some(window) = web_sys::window() else {
		debug!("no window to scroll");
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}
