//! Widgets for the "what is event-driven architecture" lesson.

use leptos::prelude::*;

use crate::components::common::{Callout, Panel, classes, pick};
use crate::components::icon::{Glyph, Icon};
use crate::timing::use_round_robin;

const EXAMPLE_PERIOD_MS: u64 = 2500;
const RESTAURANT_PERIOD_MS: u64 = 3000;
const FLOW_PERIOD_MS: u64 = 1500;

struct EventExample {
	icon: &'static str,
	event: &'static str,
	description: &'static str,
}

const EVENT_EXAMPLES: &[EventExample] = &[
	EventExample {
		icon: "🛒",
		event: "Customer places an order",
		description: "E-commerce event",
	},
	EventExample {
		icon: "📁",
		event: "New file uploaded to storage",
		description: "Storage event",
	},
	EventExample {
		icon: "👤",
		event: "User logs in to application",
		description: "Authentication event",
	},
	EventExample {
		icon: "💳",
		event: "Payment transaction completed",
		description: "Financial event",
	},
];

/// What an event is, with a rotating set of everyday examples.
#[component]
pub fn EdaDefinition() -> impl IntoView {
	let active = use_round_robin(EVENT_EXAMPLES.len(), EXAMPLE_PERIOD_MS);

	let roles = [
		("P", "bg-blue-100", "text-blue-600", "Event Producers", "Sources that generate events (e.g., web apps, IoT devices)"),
		("⚡", "bg-yellow-100", "text-yellow-600", "Event Routers/Brokers", "Handle distribution (Event Grid, Event Hub, Service Bus)"),
		("C", "bg-green-100", "text-green-600", "Event Consumers", "Systems that react to events (Functions, Logic Apps)"),
	];

	view! {
		<Panel title="Definition in Simple Terms">
			<div class="grid md:grid-cols-2 gap-8">
				<div class="bg-blue-50 p-6 rounded-lg border border-blue-200">
					<h4 class="text-lg font-semibold text-blue-900 mb-3">"What is an Event?"</h4>
					<p class="text-blue-800 mb-4">
						"An event is simply a signal that something has happened in your system."
					</p>
					<div class="space-y-3">
						{EVENT_EXAMPLES
							.iter()
							.enumerate()
							.map(|(i, example)| {
								let class = move || classes(
									"p-3 rounded-lg transition-all duration-300",
									pick(active.is(i), "bg-blue-100 border border-blue-300 scale-105", "bg-white border border-gray-200"),
								);
								view! {
									<div class=class>
										<div class="flex items-center space-x-3">
											<span class="text-2xl">{example.icon}</span>
											<div>
												<div class="font-medium text-gray-900">{example.event}</div>
												<div class="text-sm text-gray-600">{example.description}</div>
											</div>
										</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>

				<div class="space-y-6">
					<div class="bg-gradient-to-r from-green-50 to-emerald-50 p-6 rounded-lg border border-green-200">
						<h4 class="text-lg font-semibold text-green-900 mb-4">"Three Main Components"</h4>
						<div class="space-y-4">
							{roles
								.into_iter()
								.enumerate()
								.map(|(i, (mark, bg, fg, name, blurb))| {
									view! {
										{(i > 0).then(|| view! {
											<div class="flex items-center justify-center">
												<Icon glyph=Glyph::Arrow class="w-6 h-6 text-gray-400" />
											</div>
										})}
										<div class="flex items-start space-x-4">
											<div class=format!("w-10 h-10 {bg} rounded-lg flex items-center justify-center")>
												<span class=format!("{fg} font-bold")>{mark}</span>
											</div>
											<div>
												<h5 class="font-semibold text-gray-900">{name}</h5>
												<p class="text-sm text-gray-600">{blurb}</p>
											</div>
										</div>
									}
								})
								.collect_view()}
						</div>
					</div>
					<Callout glyph=Glyph::Bell title="Key Insight" hue="purple">
						"\"I'll call you when I need you\" vs \"I'll keep checking if you're ready\""
					</Callout>
				</div>
			</div>
		</Panel>
	}
}

struct Step {
	title: &'static str,
	description: &'static str,
	role: &'static str,
	glyph: Glyph,
	color: &'static str,
}

const RESTAURANT_STEPS: &[Step] = &[
	Step {
		title: "Customer Places Order",
		description: "You place your order with the waiter",
		role: "Event Producer",
		glyph: Glyph::Users,
		color: "bg-blue-500",
	},
	Step {
		title: "Order Goes to Kitchen",
		description: "Order is passed to the kitchen system",
		role: "Event Router",
		glyph: Glyph::Utensils,
		color: "bg-yellow-500",
	},
	Step {
		title: "Chefs Process Order",
		description: "Different chefs handle different parts",
		role: "Event Consumers",
		glyph: Glyph::Chef,
		color: "bg-green-500",
	},
];

const CHEFS: &[(&str, &str, bool)] = &[
	("Grill Chef", "Meat orders only", false),
	("Dessert Chef", "Dessert orders only", true),
	("Drinks Station", "Beverage orders only", false),
];

/// The restaurant kitchen as producer, router and consumers.
#[component]
pub fn RestaurantAnalogy() -> impl IntoView {
	let active = use_round_robin(RESTAURANT_STEPS.len(), RESTAURANT_PERIOD_MS);

	view! {
		<Panel title="🍽️ Real-World Analogy: Restaurant">
			<div class="grid md:grid-cols-3 gap-6 mb-8">
				{RESTAURANT_STEPS
					.iter()
					.enumerate()
					.map(|(i, step)| {
						let card = move || classes(
							"p-6 rounded-lg border-2 transition-all duration-500",
							pick(active.is(i), "border-blue-300 bg-blue-50 scale-105", "border-gray-200 bg-gray-50"),
						);
						let badge = move || classes(
							"w-12 h-12 rounded-lg flex items-center justify-center mb-4",
							pick(active.is(i), step.color, "bg-gray-300"),
						);
						view! {
							<div class=card>
								<div class=badge>
									<Icon glyph=step.glyph class="w-6 h-6 text-white" />
								</div>
								<h4 class="font-semibold text-gray-900 mb-2">{step.title}</h4>
								<p class="text-gray-600 text-sm mb-3">{step.description}</p>
								<div class="text-xs font-medium text-blue-600 bg-blue-100 px-2 py-1 rounded">
									{step.role}
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="bg-gradient-to-r from-orange-50 to-red-50 p-6 rounded-lg border border-orange-200">
				<h4 class="text-lg font-semibold text-gray-900 mb-4">"The Beauty of Loose Coupling"</h4>
				<p class="text-gray-700 mb-4">
					"When you order dessert, the grill chef doesn't even care. Each chef only reacts to relevant orders."
				</p>
				<div class="grid md:grid-cols-3 gap-4">
					{CHEFS
						.iter()
						.map(|&(name, specialty, busy)| {
							view! {
								<div class=classes("p-4 rounded-lg border", pick(busy, "bg-green-100 border-green-300", "bg-gray-100 border-gray-300"))>
									<div class="flex items-center space-x-3">
										<Icon glyph=Glyph::Chef class=pick(busy, "w-5 h-5 text-green-600", "w-5 h-5 text-gray-500") />
										<div>
											<div class="font-medium text-gray-900">{name}</div>
											<div class="text-xs text-gray-600">{specialty}</div>
										</div>
									</div>
									{busy.then(|| view! {
										<div class="mt-2 text-xs text-green-700 bg-green-200 px-2 py-1 rounded">
											"Currently Processing"
										</div>
									})}
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>

			<div class="mt-6">
				<Callout glyph=Glyph::Clock title="Key Takeaway">
					"Each consumer (chef) listens for relevant events and reacts accordingly. This is exactly how event-driven systems work in the cloud!"
				</Callout>
			</div>
		</Panel>
	}
}

struct Stage {
	mark: &'static str,
	name: &'static str,
	role: &'static str,
	outer: &'static str,
	inner: &'static str,
}

const FLOW_STAGES: &[Stage] = &[
	Stage { mark: "P", name: "Producer", role: "Publishes Events", outer: "bg-blue-100", inner: "bg-blue-500" },
	Stage { mark: "EB", name: "Event Broker", role: "Routes & Filters", outer: "bg-yellow-100", inner: "bg-yellow-500" },
	Stage { mark: "C", name: "Consumer", role: "Processes Events", outer: "bg-green-100", inner: "bg-green-500" },
];

struct Hop {
	label: &'static str,
	arrow: &'static str,
	label_text: &'static str,
	card: &'static str,
	title: &'static str,
	text: &'static str,
}

const FLOW_HOPS: &[Hop] = &[
	Hop {
		label: "Event",
		arrow: "text-blue-500 scale-110",
		label_text: "text-blue-600",
		card: "bg-blue-50 border border-blue-200",
		title: "1. Event Publication",
		text: "Producer publishes event to broker",
	},
	Hop {
		label: "Filtered",
		arrow: "text-yellow-500 scale-110",
		label_text: "text-yellow-600",
		card: "bg-yellow-50 border border-yellow-200",
		title: "2. Event Routing",
		text: "Broker filters and routes events",
	},
	Hop {
		label: "",
		arrow: "",
		label_text: "",
		card: "bg-green-50 border border-green-200",
		title: "3. Event Processing",
		text: "Consumer processes the event",
	},
];

/// Producer, broker and consumer with the active hop highlighted.
#[component]
pub fn AnimatedFlow() -> impl IntoView {
	let active = use_round_robin(FLOW_HOPS.len(), FLOW_PERIOD_MS);

	let node = |stage: &'static Stage| {
		view! {
			<div class="flex flex-col items-center space-y-3">
				<div class=format!("w-20 h-20 {} rounded-lg flex items-center justify-center", stage.outer)>
					<div class=format!("w-12 h-12 {} rounded-lg flex items-center justify-center", stage.inner)>
						<span class="text-white font-bold">{stage.mark}</span>
					</div>
				</div>
				<div class="text-center">
					<div class="font-semibold text-gray-900">{stage.name}</div>
					<div class="text-xs text-gray-500">{stage.role}</div>
				</div>
			</div>
		}
	};

	let arrow = move |hop: usize| {
		let Hop { label, arrow, label_text, .. } = FLOW_HOPS[hop];
		view! {
			<div class="mx-6">
				<Icon
					glyph=Glyph::Arrow
					class=Signal::derive(move || classes("text-3xl transition-all duration-300", pick(active.is(hop), arrow, "text-gray-300")))
				/>
				<Show when=move || active.is(hop)>
					<div class=format!("text-xs mt-1 animate-pulse {label_text}")>{label}</div>
				</Show>
			</div>
		}
	};

	view! {
		<div class="bg-white p-8 rounded-xl shadow-sm border">
			<h3 class="text-xl font-semibold mb-6 text-gray-900">"Event-Driven Flow"</h3>
			<div class="flex items-center justify-between max-w-4xl mx-auto">
				{node(&FLOW_STAGES[0])}
				{arrow(0)}
				{node(&FLOW_STAGES[1])}
				{arrow(1)}
				{node(&FLOW_STAGES[2])}
			</div>
			<div class="mt-8 grid md:grid-cols-3 gap-4 text-sm">
				{FLOW_HOPS
					.iter()
					.enumerate()
					.map(|(i, hop)| {
						view! {
							<div class=move || classes("p-3 rounded-lg transition-colors", pick(active.is(i), hop.card, "bg-gray-50"))>
								<div class="font-medium text-gray-900">{hop.title}</div>
								<div class="text-gray-600">{hop.text}</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
