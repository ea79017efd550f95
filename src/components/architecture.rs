//! Worked example: an order flowing through Event Grid into storage.

use leptos::prelude::*;

use crate::components::common::{classes, pick};
use crate::components::icon::{Glyph, Icon};
use crate::palette::swatch_for;
use crate::timing::use_round_robin;

const STEP_PERIOD_MS: u64 = 2000;

const STEPS: &[(Glyph, &str, &str, &str)] = &[
	(Glyph::Cart, "Order Received", "blue", "1. Customer places an order through the web application"),
	(Glyph::Zap, "Event Grid", "yellow", "2. Order event is published to Azure Event Grid"),
	(Glyph::Settings, "Azure Function", "green", "3. Azure Function is triggered to process the order"),
	(Glyph::Database, "Storage Account", "purple", "4. Order data is stored in Azure Storage Account"),
];

/// Order pipeline with the current hop lit and earlier hops marked done.
#[component]
pub fn ArchitectureDiagram() -> impl IntoView {
	let active = use_round_robin(STEPS.len(), STEP_PERIOD_MS);

	view! {
		<div class="p-8">
			<div class="flex items-center justify-between max-w-4xl mx-auto">
				{STEPS
					.iter()
					.enumerate()
					.map(|(i, &(glyph, label, hue, _))| {
						let s = swatch_for(hue);
						let on = move || active.is(i);
						view! {
							<div class="flex items-center">
								<div class="flex flex-col items-center space-y-3">
									<div class=move || if on() {
										format!("w-16 h-16 rounded-full flex items-center justify-center transition-all duration-500 {} scale-110 shadow-lg", s.solid)
									} else {
										"w-16 h-16 rounded-full flex items-center justify-center transition-all duration-500 bg-gray-200 scale-100".to_string()
									}>
										<Icon glyph=glyph class=Signal::derive(move || classes("text-3xl", pick(on(), "text-white", "text-gray-500"))) />
									</div>
									<div class="text-center">
										<div class=move || classes("font-semibold transition-colors", pick(on(), "text-gray-900", "text-gray-500"))>
											{label}
										</div>
										<Show when=on>
											<div class="text-xs text-blue-600 mt-1 animate-pulse">"Processing..."</div>
										</Show>
									</div>
								</div>
								{(i + 1 < STEPS.len()).then(|| view! {
									<div class="mx-8">
										<Icon
											glyph=Glyph::Arrow
											class=Signal::derive(move || classes("text-3xl transition-colors", pick(active.reached(i + 1), "text-blue-500", "text-gray-300")))
										/>
									</div>
								})}
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="mt-12 bg-gray-50 p-6 rounded-lg">
				<h3 class="font-semibold text-gray-900 mb-4">"Architecture Flow"</h3>
				<div class="space-y-2 text-sm text-gray-600">
					{STEPS
						.iter()
						.enumerate()
						.map(|(i, &(_, _, hue, caption))| {
							let s = swatch_for(hue);
							view! {
								<div class=move || if active.reached(i) {
									format!("p-2 rounded {} {}", s.tint, s.strong)
								} else {
									"p-2 rounded".to_string()
								}>
									{caption}
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
		</div>
	}
}
