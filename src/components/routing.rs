//! Widgets for the routing and filtering lesson, plus the subscription
//! matching rules they animate.

use leptos::prelude::*;

use crate::components::common::{Panel, classes, pick};
use crate::components::icon::{Glyph, Icon};
use crate::palette::swatch_for;
use crate::timing::use_round_robin;

const EVENT_PERIOD_MS: u64 = 2500;
const IDLE_STROKE: &str = "#d1d5db";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderEvent {
	pub event_type: &'static str,
	pub subject: &'static str,
	hue: &'static str,
}

pub const ORDER_EVENTS: &[OrderEvent] = &[
	OrderEvent { event_type: "OrderCreated", subject: "orders/1234", hue: "blue" },
	OrderEvent { event_type: "OrderPaid", subject: "orders/1234/paid", hue: "green" },
	OrderEvent { event_type: "OrderShipped", subject: "orders/1234/shipped", hue: "purple" },
	OrderEvent { event_type: "OrderCancelled", subject: "orders/1234/cancelled", hue: "red" },
];

/// Whether `subject` fits `pattern`. A `*` segment matches exactly one path
/// segment, except in last position where it matches one or more.
pub fn subject_matches(pattern: &str, subject: &str) -> bool {
	let pattern: Vec<&str> = pattern.split('/').collect();
	let subject: Vec<&str> = subject.split('/').collect();
	for (i, want) in pattern.iter().enumerate() {
		let Some(got) = subject.get(i) else {
			return false;
		};
		if *want == "*" {
			if i + 1 == pattern.len() {
				return !got.is_empty();
			}
		} else if want != got {
			return false;
		}
	}
	pattern.len() == subject.len()
}

/// Event type plus subject pattern, both of which must match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionFilter {
	pub event_type: &'static str,
	pub subject: &'static str,
}

impl SubscriptionFilter {
	pub fn matches(&self, event: &OrderEvent) -> bool {
		(self.event_type == "*" || self.event_type == event.event_type) && subject_matches(self.subject, event.subject)
	}
}

pub struct Subscriber {
	pub name: &'static str,
	glyph: Glyph,
	hue: &'static str,
	pub interests: &'static [&'static str],
	pub filter: SubscriptionFilter,
}

impl Subscriber {
	/// Routing view: the subscriber asked for this event type.
	pub fn is_interested(&self, event: &OrderEvent) -> bool {
		self.interests.contains(&event.event_type)
	}
}

pub const SUBSCRIBERS: &[Subscriber] = &[
	Subscriber {
		name: "Billing Service",
		glyph: Glyph::Card,
		hue: "green",
		interests: &["OrderPaid"],
		filter: SubscriptionFilter { event_type: "OrderPaid", subject: "orders/*/paid" },
	},
	Subscriber {
		name: "Shipping Service",
		glyph: Glyph::Truck,
		hue: "purple",
		interests: &["OrderShipped"],
		filter: SubscriptionFilter { event_type: "OrderShipped", subject: "orders/*/shipped" },
	},
	Subscriber {
		name: "Analytics Service",
		glyph: Glyph::Chart,
		hue: "orange",
		interests: &["OrderCreated", "OrderPaid", "OrderShipped", "OrderCancelled"],
		filter: SubscriptionFilter { event_type: "*", subject: "orders/*" },
	},
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutingView {
	Routing,
	Filtering,
}

impl RoutingView {
	/// Whether `subscriber` gets `event` under this view's rules.
	pub fn delivers(self, subscriber: &Subscriber, event: &OrderEvent) -> bool {
		match self {
			RoutingView::Routing => subscriber.is_interested(event),
			RoutingView::Filtering => subscriber.filter.matches(event),
		}
	}
}

/// Number of subscribers that receive `event`.
pub fn delivery_count(view: RoutingView, event: &OrderEvent) -> usize {
	SUBSCRIBERS.iter().filter(|s| view.delivers(s, event)).count()
}

fn subscriber_row(index: usize) -> usize {
	25 + index * 25
}

/// Order events fanning out of a topic to the subscribers that want them.
#[component]
pub fn EventRoutingFiltering() -> impl IntoView {
	let mode = RwSignal::new(RoutingView::Routing);
	let current = use_round_robin(ORDER_EVENTS.len(), EVENT_PERIOD_MS);
	let event = move || ORDER_EVENTS[current.index()];
	let receives = move |i: usize| mode.get().delivers(&SUBSCRIBERS[i], &event());

	let mode_button = move |target: RoutingView, glyph: Glyph, hue: &'static str, title: &'static str, blurb: &'static str| {
		let s = swatch_for(hue);
		let on = move || mode.get() == target;
		view! {
			<button
				class=move || if on() {
					format!("p-4 rounded-lg border-2 transition-all duration-300 {} {} {} scale-105", s.border, s.light, s.strong)
				} else {
					"p-4 rounded-lg border-2 transition-all duration-300 border-gray-300 bg-white text-gray-700 hover:bg-gray-50".to_string()
				}
				on:click=move |_| mode.set(target)
			>
				<div class="flex items-center space-x-3">
					<Icon glyph=glyph class=Signal::derive(move || classes("text-2xl", pick(on(), s.text, "text-gray-500"))) />
					<div class="text-left">
						<h4 class="font-semibold">{title}</h4>
						<p class="text-sm">{blurb}</p>
					</div>
				</div>
			</button>
		}
	};

	view! {
		<Panel
			title="🎯 Event Routing & Filtering"
			subtitle="Making sure events reach the right consumers with advanced filtering and routing logic"
		>
			<div class="grid md:grid-cols-2 gap-4 mb-8">
				{mode_button(RoutingView::Routing, Glyph::Route, "blue", "Event Routing", "Path from producer to subscriber")}
				{mode_button(RoutingView::Filtering, Glyph::Filter, "green", "Event Filtering", "Only relevant events reach consumers")}
			</div>

			<div class="relative bg-gradient-to-r from-gray-50 to-gray-100 p-8 rounded-lg border overflow-hidden" style="height: 500px;">
				<div class="absolute left-8 top-8">
					<div class="w-20 h-20 bg-indigo-500 rounded-xl flex items-center justify-center shadow-lg">
						<Icon glyph=Glyph::Users class="text-4xl text-white" />
					</div>
					<div class="text-center mt-3 w-20">
						<div class="font-semibold text-gray-900 text-sm">"Order Service"</div>
						<div class="text-xs text-gray-600 mt-1">"Producer"</div>
					</div>
				</div>

				<div class="absolute left-1/2 top-8 transform -translate-x-1/2">
					<div class="w-24 h-20 bg-yellow-500 rounded-xl flex items-center justify-center shadow-lg">
						<Icon glyph=Glyph::Zap class="text-4xl text-white" />
					</div>
					<div class="text-center mt-3 w-24">
						<div class="font-semibold text-gray-900 text-sm">"OrderEvents"</div>
						<div class="text-xs text-gray-600 mt-1">"Topic"</div>
					</div>
				</div>

				<div class="absolute left-32 top-12">
					<Icon glyph=Glyph::Arrow class="text-3xl text-indigo-500 animate-pulse" />
				</div>

				{move || {
					let ev = event();
					let s = swatch_for(ev.hue);
					view! {
						<div class="absolute left-1/2 top-32 transform -translate-x-1/2">
							<div class=format!("px-4 py-2 rounded-lg border-2 {} {} animate-pulse", s.border, s.light)>
								<div class="text-center">
									<div class=format!("font-semibold {}", s.text)>{ev.event_type}</div>
									<div class="text-xs text-gray-600 mt-1">{ev.subject}</div>
								</div>
							</div>
						</div>
					}
				}}

				{SUBSCRIBERS
					.iter()
					.enumerate()
					.map(|(i, subscriber)| {
						let s = swatch_for(subscriber.hue);
						let row = subscriber_row(i);
						let hit = move || receives(i);
						view! {
							<div>
								<div class="absolute transform -translate-x-1/2" style=format!("right: 60px; top: {row}%;")>
									<div class=move || if hit() {
										format!("w-16 h-16 rounded-xl flex items-center justify-center shadow-lg transition-all duration-500 {} scale-110 animate-pulse", s.solid)
									} else {
										"w-16 h-16 rounded-xl flex items-center justify-center shadow-lg transition-all duration-500 bg-gray-400 scale-100".to_string()
									}>
										<Icon glyph=subscriber.glyph class="text-2xl text-white" />
									</div>
									<div class="text-center mt-3 w-16">
										<div class=move || classes("text-xs font-medium leading-tight", pick(hit(), "text-gray-900", "text-gray-500"))>
											{subscriber.name}
										</div>
										<Show when=move || mode.get() == RoutingView::Filtering>
											<code class="block text-[10px] text-gray-500 mt-1">
												{format!("{} · {}", subscriber.filter.event_type, subscriber.filter.subject)}
											</code>
										</Show>
									</div>
								</div>

								<svg
									class="absolute pointer-events-none"
									style=format!("left: 62%; top: 20%; width: 28%; height: {}%;", row - 20)
								>
									<line
										x1="0"
										y1="0"
										x2="100%"
										y2="100%"
										stroke=move || pick(hit(), s.stroke, IDLE_STROKE)
										stroke-width="3"
										stroke-dasharray=move || pick(hit(), "none", "8,4")
										class=move || pick(hit(), "animate-pulse", "")
									/>
								</svg>

								<div class="absolute transform -translate-x-1/2" style=format!("right: 20px; top: {}%;", row + 8)>
									{move || if hit() {
										view! {
											<div class="flex items-center space-x-1 bg-green-100 text-green-800 px-2 py-1 rounded text-xs border border-green-300">
												<Icon glyph=Glyph::Check class="text-xs" />
												<span>"Match"</span>
											</div>
										}
										.into_any()
									} else {
										view! {
											<div class="flex items-center space-x-1 bg-gray-100 text-gray-600 px-2 py-1 rounded text-xs border border-gray-300">
												<Icon glyph=Glyph::Close class="text-xs" />
												<span>"Filtered"</span>
											</div>
										}
										.into_any()
									}}
								</div>
							</div>
						}
					})
					.collect_view()}

				<div class="absolute bottom-4 left-4 right-4 p-4 bg-white rounded-lg border shadow-sm">
					<div class="flex items-center justify-between">
						<div>
							<h5 class="font-semibold text-gray-900">"Current Event:"</h5>
							<p class=move || classes("text-sm font-medium", swatch_for(event().hue).text)>
								{move || format!("{} - {}", event().event_type, event().subject)}
							</p>
						</div>
						<div class="text-right">
							<div class="text-xs text-gray-600">"Delivered to:"</div>
							<div class="text-sm font-medium text-gray-900">
								{move || format!("{} of {} services", delivery_count(mode.get(), &event()), SUBSCRIBERS.len())}
							</div>
						</div>
					</div>
				</div>
			</div>
		</Panel>
	}
}

struct FilterKind {
	title: &'static str,
	glyph: Glyph,
	hue: &'static str,
	description: &'static str,
	pattern: &'static str,
	matches: &'static [&'static str],
	non_matches: &'static [&'static str],
	explanation: &'static str,
}

const FILTER_KINDS: &[FilterKind] = &[
	FilterKind {
		title: "Subject-based Filtering",
		glyph: Glyph::Document,
		hue: "blue",
		description: "Filter based on event subject patterns",
		pattern: "orders/*/paid",
		matches: &["orders/1234/paid", "orders/5678/paid"],
		non_matches: &["orders/1234/created", "customers/1234/updated"],
		explanation: "Use wildcards (*) to match patterns in the subject field",
	},
	FilterKind {
		title: "Event Type Filtering",
		glyph: Glyph::Text,
		hue: "green",
		description: "Filter based on the eventType field",
		pattern: "OrderPaid",
		matches: &["OrderPaid"],
		non_matches: &["OrderCreated", "OrderShipped", "OrderCancelled"],
		explanation: "Exact match on event type - most common filtering method",
	},
	FilterKind {
		title: "Advanced Filters",
		glyph: Glyph::Settings,
		hue: "purple",
		description: "Filter on data fields inside event payload",
		pattern: "data.orderTotal > 1000",
		matches: &["Order $1,500", "Order $2,000"],
		non_matches: &["Order $500", "Order $750"],
		explanation: "Complex business rules using event data properties",
	},
];

/// Subject, event type and advanced filters with worked examples.
#[component]
pub fn FilteringMechanisms() -> impl IntoView {
	let active = RwSignal::new(0usize);

	view! {
		<Panel title="🔍 Event Filtering Mechanisms" subtitle="Three powerful ways to ensure subscribers only receive relevant events">
			<div class="grid md:grid-cols-3 gap-4 mb-8">
				{FILTER_KINDS
					.iter()
					.enumerate()
					.map(|(i, kind)| numbered_choice(active, i, kind.glyph, kind.hue, kind.title, kind.description))
					.collect_view()}
			</div>

			{move || {
				let kind = &FILTER_KINDS[active.get()];
				let s = swatch_for(kind.hue);
				let examples = |items: &'static [&'static str], glyph: Glyph, tone: &'static str, bg: &'static str| {
					items
						.iter()
						.map(move |item| view! {
							<div class="flex items-center space-x-2 mb-1">
								<Icon glyph=glyph class=format!("w-4 h-4 {tone}") />
								<code class=format!("text-sm text-gray-700 {bg} px-2 py-1 rounded")>{*item}</code>
							</div>
						})
						.collect_view()
				};
				view! {
					<div class="bg-gradient-to-r from-gray-50 to-gray-100 p-6 rounded-lg border">
						<div class="flex items-start space-x-4 mb-6">
							<div class=format!("w-16 h-16 {} rounded-lg flex items-center justify-center", s.light)>
								<Icon glyph=kind.glyph class=format!("text-3xl {}", s.text) />
							</div>
							<div class="flex-1">
								<h4 class="text-xl font-semibold text-gray-900 mb-2">{kind.title}</h4>
								<p class="text-gray-700 mb-4">{kind.description}</p>
								<p class="text-sm text-gray-600 italic">{kind.explanation}</p>
							</div>
						</div>
						<div class="grid md:grid-cols-2 gap-6">
							<div>
								<h5 class="font-semibold text-gray-900 mb-3">"Filter Pattern:"</h5>
								<div class=format!("p-4 rounded-lg border {} {}", s.border, s.light)>
									<code class=format!("{} font-mono text-sm", s.text)>{kind.pattern}</code>
								</div>
							</div>
							<div>
								<h5 class="font-semibold text-gray-900 mb-3">"Examples:"</h5>
								<div class="space-y-2">
									<div>
										<h6 class="text-sm font-medium text-green-700 mb-2">"✅ Matches:"</h6>
										{examples(kind.matches, Glyph::Check, "text-green-600", "bg-green-50")}
									</div>
									<div>
										<h6 class="text-sm font-medium text-red-700 mb-2">"❌ Doesn't Match:"</h6>
										{examples(kind.non_matches, Glyph::Close, "text-red-600", "bg-red-50")}
									</div>
								</div>
							</div>
						</div>
					</div>
				}
			}}
		</Panel>
	}
}

/// Selector card with an icon, a 1-based number, a title and a blurb.
fn numbered_choice(
	active: RwSignal<usize>,
	index: usize,
	glyph: Glyph,
	hue: &'static str,
	title: &'static str,
	description: &'static str,
) -> impl IntoView {
	let s = swatch_for(hue);
	let on = move || active.get() == index;
	view! {
		<button
			class=move || if on() {
				format!("p-4 rounded-lg border-2 transition-all duration-300 text-left {} {} scale-105", s.border, s.light)
			} else {
				"p-4 rounded-lg border-2 transition-all duration-300 text-left border-gray-200 bg-gray-50 hover:bg-gray-100".to_string()
			}
			on:click=move |_| active.set(index)
		>
			<div class="flex items-center space-x-3 mb-3">
				<Icon glyph=glyph class=Signal::derive(move || classes("text-2xl", pick(on(), s.text, "text-gray-500"))) />
				<span class="text-sm font-medium text-gray-900">{index + 1}</span>
			</div>
			<h4 class="font-semibold text-gray-900 mb-2">{title}</h4>
			<p class="text-sm text-gray-600">{description}</p>
		</button>
	}
}

struct Practice {
	title: &'static str,
	glyph: Glyph,
	hue: &'static str,
	description: &'static str,
	good: &'static [&'static str],
	bad: &'static [&'static str],
	tip: &'static str,
}

const PRACTICES: &[Practice] = &[
	Practice {
		title: "Define Clear Topics",
		glyph: Glyph::Document,
		hue: "blue",
		description: "Group related events logically",
		good: &["OrderEvents", "UserEvents", "PaymentEvents"],
		bad: &["AllEvents", "MiscEvents", "DataEvents"],
		tip: "Use domain-driven design principles to organize topics",
	},
	Practice {
		title: "Use Event Type & Subject Filters",
		glyph: Glyph::Filter,
		hue: "green",
		description: "Avoid sending irrelevant events",
		good: &["eventType = \"OrderPaid\"", "subject = \"orders/*/paid\""],
		bad: &["No filtering", "Overly broad filters"],
		tip: "Start with event type filtering, then add subject patterns",
	},
	Practice {
		title: "Use Advanced Filters Sparingly",
		glyph: Glyph::Warning,
		hue: "orange",
		description: "They're powerful but add complexity",
		good: &["data.amount > 1000", "data.region = \"US\""],
		bad: &["Complex nested conditions", "Too many advanced filters"],
		tip: "Consider moving complex logic to the consumer instead",
	},
	Practice {
		title: "Monitor Your Subscriptions",
		glyph: Glyph::Chart,
		hue: "purple",
		description: "Track delivery failures and dead-letter events",
		good: &["Set up alerts", "Monitor delivery rates", "Track dead letters"],
		bad: &["No monitoring", "Ignoring failures", "No alerting"],
		tip: "Use Azure Monitor and Application Insights for visibility",
	},
	Practice {
		title: "Document Event Contracts",
		glyph: Glyph::Shield,
		hue: "indigo",
		description: "Make it easy for consumers to know what to expect",
		good: &["Schema documentation", "Event catalogs", "Version history"],
		bad: &["No documentation", "Undocumented changes", "No versioning"],
		tip: "Treat events like APIs - they need proper documentation",
	},
];

/// Five routing habits with do and don't examples.
#[component]
pub fn BestPracticesRouting() -> impl IntoView {
	let active = RwSignal::new(0usize);

	view! {
		<Panel
			title="📋 Best Practices for Routing & Filtering"
			subtitle="Five essential practices to ensure your event-driven system stays maintainable and efficient"
		>
			<div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4 mb-8">
				{PRACTICES
					.iter()
					.enumerate()
					.map(|(i, p)| numbered_choice(active, i, p.glyph, p.hue, p.title, p.description))
					.collect_view()}
			</div>

			{move || {
				let practice = &PRACTICES[active.get()];
				let s = swatch_for(practice.hue);
				let samples = |items: &'static [&'static str], card: &'static str, text: &'static str| {
					items
						.iter()
						.map(move |item| view! {
							<div class=format!("p-3 {card} rounded-lg")>
								<code class=format!("{text} text-sm")>{*item}</code>
							</div>
						})
						.collect_view()
				};
				view! {
					<div class="bg-gradient-to-r from-gray-50 to-gray-100 p-6 rounded-lg border">
						<div class="flex items-start space-x-4 mb-6">
							<div class=format!("w-16 h-16 {} rounded-lg flex items-center justify-center", s.light)>
								<Icon glyph=practice.glyph class=format!("text-3xl {}", s.text) />
							</div>
							<div class="flex-1">
								<h4 class="text-xl font-semibold text-gray-900 mb-2">{practice.title}</h4>
								<p class="text-gray-700 mb-4">{practice.description}</p>
							</div>
						</div>
						<div class="grid md:grid-cols-2 gap-6">
							<div>
								<h5 class="font-semibold text-green-700 mb-3 flex items-center space-x-2">
									<Icon glyph=Glyph::Check class="w-5 h-5" />
									<span>"✅ Good Examples:"</span>
								</h5>
								<div class="space-y-2">{samples(practice.good, "bg-green-50 border border-green-200", "text-green-800")}</div>
							</div>
							<div>
								<h5 class="font-semibold text-red-700 mb-3 flex items-center space-x-2">
									<Icon glyph=Glyph::Warning class="w-5 h-5" />
									<span>"❌ Avoid These:"</span>
								</h5>
								<div class="space-y-2">{samples(practice.bad, "bg-red-50 border border-red-200", "text-red-800")}</div>
							</div>
						</div>
						<div class="mt-6 p-4 bg-yellow-50 rounded-lg border border-yellow-200">
							<div class="flex items-start space-x-3">
								<Icon glyph=Glyph::Bulb class="w-5 h-5 text-yellow-600 mt-0.5" />
								<div>
									<h6 class="font-semibold text-yellow-900">"💡 Pro Tip"</h6>
									<p class="text-yellow-800 text-sm mt-1">{practice.tip}</p>
								</div>
							</div>
						</div>
					</div>
				}
			}}
		</Panel>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn inner_wildcard_matches_one_segment() {
		assert!(subject_matches("orders/*/paid", "orders/1234/paid"));
		assert!(subject_matches("orders/*/paid", "orders/5678/paid"));
		assert!(!subject_matches("orders/*/paid", "orders/1234/created"));
		assert!(!subject_matches("orders/*/paid", "customers/1234/updated"));
		assert!(!subject_matches("orders/*/paid", "orders/paid"));
		assert!(!subject_matches("orders/*/paid", "orders/1/2/paid"));
	}

	#[test]
	fn trailing_wildcard_matches_the_rest() {
		assert!(subject_matches("orders/*", "orders/1234"));
		assert!(subject_matches("orders/*", "orders/1234/cancelled"));
		assert!(!subject_matches("orders/*", "orders"));
		assert!(!subject_matches("orders/*", "orders/"));
	}

	#[test]
	fn literal_patterns_need_an_exact_subject() {
		assert!(subject_matches("orders/1234", "orders/1234"));
		assert!(!subject_matches("orders/1234", "orders/1234/paid"));
	}

	#[test]
	fn subject_examples_in_the_lesson_are_accurate() {
		let subject = &FILTER_KINDS[0];
		for s in subject.matches {
			assert!(subject_matches(subject.pattern, s), "{s}");
		}
		for s in subject.non_matches {
			assert!(!subject_matches(subject.pattern, s), "{s}");
		}
	}

	#[test]
	fn filters_agree_with_declared_interests() {
		for event in ORDER_EVENTS {
			for subscriber in SUBSCRIBERS {
				assert_eq!(
					RoutingView::Routing.delivers(subscriber, event),
					RoutingView::Filtering.delivers(subscriber, event),
					"{} / {}",
					subscriber.name,
					event.event_type,
				);
			}
		}
	}

	#[test]
	fn delivery_counts_per_event() {
		let counts: Vec<_> = ORDER_EVENTS.iter().map(|e| delivery_count(RoutingView::Filtering, e)).collect();
		assert_eq!(counts, [1, 2, 2, 1]);
	}
}
