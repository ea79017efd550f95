use leptos::prelude::*;
use leptos_router::components::A;

/// Shown for any path other than the course root.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100">
			<div class="bg-white p-8 rounded-xl shadow-sm border text-center">
				<h1 class="text-3xl font-bold text-gray-900 mb-2">"Page not found"</h1>
				<p class="text-gray-600 mb-6">"The course lives on the home page."</p>
				<A href="/" attr:class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors">
					"Back to the course"
				</A>
			</div>
		</div>
	}
}
