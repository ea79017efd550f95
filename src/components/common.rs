//! Building blocks shared by the lesson widgets.

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};

/// `on` while `active`, `off` otherwise.
pub fn pick(active: bool, on: &'static str, off: &'static str) -> &'static str {
	if active { on } else { off }
}

/// Joins a fixed class list with a state-dependent one.
pub fn classes(base: &str, state: &str) -> String {
	format!("{base} {state}")
}

/// White card with a heading, the frame every interactive demo sits in.
#[component]
pub fn Panel(
	title: &'static str,
	#[prop(optional)] subtitle: Option<&'static str>,
	children: Children,
) -> impl IntoView {
	view! {
		<div class="bg-white p-8 rounded-xl shadow-sm border">
			<h3 class="text-2xl font-bold mb-2 text-gray-900">{title}</h3>
			{subtitle.map(|s| view! { <p class="text-gray-600 mb-6">{s}</p> })}
			<div class=pick(subtitle.is_none(), "mt-4", "")>{children()}</div>
		</div>
	}
}

/// Tinted box with an icon and a short message.
#[component]
pub fn Callout(
	glyph: Glyph,
	title: &'static str,
	#[prop(default = "blue")] hue: &'static str,
	children: Children,
) -> impl IntoView {
	let swatch = crate::palette::swatch_for(hue);
	view! {
		<div class=format!("p-4 rounded-lg border {} {}", swatch.tint, swatch.soft_border)>
			<div class="flex items-start space-x-3">
				<Icon glyph=glyph class=format!("w-5 h-5 mt-1 {}", swatch.text) />
				<div>
					<h5 class=format!("font-semibold {}", swatch.strong)>{title}</h5>
					<div class=format!("text-sm {}", swatch.strong)>{children()}</div>
				</div>
			</div>
		</div>
	}
}

/// A selectable concept with its detail text.
pub struct Concept {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub glyph: Glyph,
	pub hue: &'static str,
	pub description: &'static str,
	pub examples: &'static [&'static str],
}

/// Detail pane for the selected [`Concept`].
#[component]
pub fn ConceptDetail(concept: &'static Concept) -> impl IntoView {
	let swatch = crate::palette::swatch_for(concept.hue);
	view! {
		<div class="bg-gradient-to-r from-gray-50 to-gray-100 p-6 rounded-lg border">
			<div class="flex items-start space-x-4">
				<div class=format!("w-16 h-16 {} rounded-lg flex items-center justify-center", swatch.light)>
					<Icon glyph=concept.glyph class=format!("text-3xl {}", swatch.text) />
				</div>
				<div class="flex-1">
					<h4 class="text-xl font-semibold text-gray-900 mb-2">{concept.title}</h4>
					<p class="text-gray-700 mb-4">{concept.description}</p>
					<h5 class="font-semibold text-gray-900 mb-3">"Examples:"</h5>
					<ul class="space-y-2">
						{concept
							.examples
							.iter()
							.map(|example| view! {
								<li class="flex items-start space-x-2">
									<div class=format!("w-2 h-2 {} rounded-full mt-2", swatch.light)></div>
									<span class="text-gray-700 text-sm">{*example}</span>
								</li>
							})
							.collect_view()}
					</ul>
				</div>
			</div>
		</div>
	}
}

/// One point of a lesson summary. Points without a glyph are numbered.
pub struct Takeaway {
	pub hue: &'static str,
	pub glyph: Option<Glyph>,
	pub title: &'static str,
	pub text: &'static str,
}

/// Closing summary of a lesson, split over two columns.
#[component]
pub fn KeyTakeaways(points: &'static [Takeaway]) -> impl IntoView {
	let half = points.len().div_ceil(2);
	let column = move |range: std::ops::Range<usize>| {
		points[range.clone()]
			.iter()
			.zip(range)
			.map(|(point, i)| {
				let swatch = crate::palette::swatch_for(point.hue);
				let marker = match point.glyph {
					Some(glyph) => view! { <Icon glyph=glyph class=format!("text-xs {}", swatch.text) /> }.into_any(),
					None => view! { <span class=format!("{} text-xs font-bold", swatch.text)>{i + 1}</span> }.into_any(),
				};
				view! {
					<div class="flex items-start space-x-3">
						<div class=format!("w-6 h-6 {} rounded-full flex items-center justify-center mt-1", swatch.light)>
							{marker}
						</div>
						<div>
							<h4 class="font-semibold text-gray-900">{point.title}</h4>
							<p class="text-gray-600 text-sm">{point.text}</p>
						</div>
					</div>
				}
			})
			.collect_view()
	};

	view! {
		<div class="bg-white p-8 rounded-xl shadow-sm border">
			<h3 class="text-2xl font-bold mb-6 text-gray-900">"🎯 Key Takeaways"</h3>
			<div class="grid md:grid-cols-2 gap-6">
				<div class="space-y-4">{column(0..half)}</div>
				<div class="space-y-4">{column(half..points.len())}</div>
			</div>
		</div>
	}
}

/// Large gradient banner opening a lesson.
#[component]
pub fn Hero(
	title: &'static str,
	lead: &'static str,
	#[prop(default = "from-blue-600 to-indigo-600")] gradient: &'static str,
	/// Emphasised label and text of the highlighted note under the lead.
	#[prop(optional)]
	note: Option<(&'static str, &'static str)>,
) -> impl IntoView {
	view! {
		<div class=format!("bg-gradient-to-r {gradient} text-white p-8 rounded-xl")>
			<h2 class="text-3xl font-bold mb-4">{title}</h2>
			<p class="text-xl opacity-90">{lead}</p>
			{note.map(|(label, text)| view! {
				<div class="bg-white/10 p-4 rounded-lg mt-6">
					<p class="text-lg">
						<strong>{label}</strong>
						" "
						{text}
					</p>
				</div>
			})}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pick_follows_the_flag() {
		assert_eq!(pick(true, "on", "off"), "on");
		assert_eq!(pick(false, "on", "off"), "off");
	}

	#[test]
	fn classes_keeps_both_halves() {
		assert_eq!(classes("p-3 rounded", "bg-blue-50"), "p-3 rounded bg-blue-50");
	}
}
