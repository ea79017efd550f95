use leptos::prelude::*;

use crate::components::layout::{MainContent, Sidebar};
use crate::topics::TopicProvider;

/// The course: navigation on the left, the selected lesson on the right.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<TopicProvider>
				<div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
					<Sidebar />
					<MainContent />
				</div>
			</TopicProvider>
		</ErrorBoundary>
	}
}
