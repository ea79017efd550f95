//! Widgets for the "characteristics & benefits" lesson.

use leptos::prelude::*;

use crate::components::common::{Callout, Panel, classes, pick};
use crate::components::icon::{Glyph, Icon};
use crate::palette::swatch_for;
use crate::timing::use_round_robin;

const ASYNC_PERIOD_MS: u64 = 2000;
const UBER_FLOW_PERIOD_MS: u64 = 1500;
const MAX_CONSUMER_TILES: usize = 25;

struct Characteristic {
	title: &'static str,
	glyph: Glyph,
	hue: &'static str,
	description: &'static str,
	benefits: [&'static str; 3],
	example: &'static str,
}

const CHARACTERISTICS: &[Characteristic] = &[
	Characteristic {
		title: "Loose Coupling",
		glyph: Glyph::Link,
		hue: "blue",
		description: "Producer and consumer don't know about each other",
		benefits: [
			"Add/remove consumers without touching producer code",
			"Independent development and deployment",
			"Easier system evolution and maintenance",
		],
		example: "E-commerce: Add ML recommendation engine to existing OrderPlaced event",
	},
	Characteristic {
		title: "Scalability",
		glyph: Glyph::Zap,
		hue: "green",
		description: "Handle traffic spikes with parallel processing",
		benefits: [
			"Events dumped into broker for parallel processing",
			"Scale consumers independently based on load",
			"Elastic scaling during traffic spikes",
		],
		example: "Netflix: Millions of playback telemetry events processed per second",
	},
	Characteristic {
		title: "Asynchronous Processing",
		glyph: Glyph::Clock,
		hue: "purple",
		description: "Not everything needs to happen immediately",
		benefits: [
			"Improved user experience with immediate responses",
			"Background processing for non-critical tasks",
			"Better system responsiveness",
		],
		example: "WhatsApp: Message sent immediately, delivery/read receipts processed async",
	},
	Characteristic {
		title: "Resilience",
		glyph: Glyph::Shield,
		hue: "red",
		description: "System doesn't collapse when one component fails",
		benefits: [
			"Event broker holds events if consumer is down",
			"Fault tolerance and graceful degradation",
			"System continues operating despite failures",
		],
		example: "If notification service crashes, events are queued until it recovers",
	},
	Characteristic {
		title: "Real-Time Responsiveness",
		glyph: Glyph::Sparkles,
		hue: "yellow",
		description: "Near real-time event processing capabilities",
		benefits: [
			"Instant reaction to events as they occur",
			"Perfect for fraud detection and monitoring",
			"Live dashboards and real-time analytics",
		],
		example: "Stock trading: Buy/sell orders processed in milliseconds",
	},
	Characteristic {
		title: "Flexibility",
		glyph: Glyph::Layers,
		hue: "indigo",
		description: "Easy to add new features without breaking existing flows",
		benefits: [
			"Subscribe new consumers to existing events",
			"System naturally evolves over time",
			"No need to modify existing components",
		],
		example: "Add AI/ML analytics to existing user behavior events",
	},
];

/// Six characteristics as tabs, with a detail pane for the selected one.
#[component]
pub fn CharacteristicsBenefits() -> impl IntoView {
	let active = RwSignal::new(0usize);
	let current = move || &CHARACTERISTICS[active.get()];

	view! {
		<Panel title="🧬 The DNA of Event-Driven Systems">
			<div class="grid md:grid-cols-3 lg:grid-cols-6 gap-4 mb-8">
				{CHARACTERISTICS
					.iter()
					.enumerate()
					.map(|(i, c)| {
						let swatch = swatch_for(c.hue);
						let selected = move || active.get() == i;
						view! {
							<button
								class=move || if selected() {
									format!("p-4 rounded-lg border-2 transition-all duration-300 {} {} scale-105", swatch.border, swatch.tint)
								} else {
									"p-4 rounded-lg border-2 transition-all duration-300 border-gray-200 bg-gray-50 hover:bg-gray-100".to_string()
								}
								on:click=move |_| active.set(i)
							>
								<Icon
									glyph=c.glyph
									class=Signal::derive(move || format!("text-3xl mx-auto mb-2 {}", pick(selected(), swatch.text, "text-gray-500")))
								/>
								<div class="text-sm font-medium text-gray-900">{c.title}</div>
							</button>
						}
					})
					.collect_view()}
			</div>

			{move || {
				let c = current();
				let swatch = swatch_for(c.hue);
				view! {
					<div class="bg-gradient-to-r from-gray-50 to-gray-100 p-6 rounded-lg border">
						<div class="flex items-start space-x-4">
							<div class=format!("w-12 h-12 {} rounded-lg flex items-center justify-center", swatch.light)>
								<Icon glyph=c.glyph class=format!("text-2xl {}", swatch.text) />
							</div>
							<div class="flex-1">
								<h4 class="text-xl font-semibold text-gray-900 mb-2">{c.title}</h4>
								<p class="text-gray-700 mb-4">{c.description}</p>
								<div class="grid md:grid-cols-2 gap-6">
									<div>
										<h5 class="font-semibold text-gray-900 mb-3">"Key Benefits:"</h5>
										<ul class="space-y-2">
											{c.benefits
												.iter()
												.map(|benefit| view! {
													<li class="flex items-start space-x-2">
														<div class=format!("w-2 h-2 {} rounded-full mt-2", swatch.light)></div>
														<span class="text-gray-700 text-sm">{*benefit}</span>
													</li>
												})
												.collect_view()}
										</ul>
									</div>
									<div>
										<h5 class="font-semibold text-gray-900 mb-3">"Real-World Example:"</h5>
										<div class=format!("p-4 {} rounded-lg border {}", swatch.tint, swatch.soft_border)>
											<p class=format!("{} text-sm", swatch.strong)>{c.example}</p>
										</div>
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

/// Traffic scenario of the scalability demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrafficLoad {
	Normal,
	BlackFriday,
}

impl TrafficLoad {
	pub const fn events_per_second(self) -> u32 {
		match self {
			TrafficLoad::Normal => 100,
			TrafficLoad::BlackFriday => 10_000,
		}
	}

	pub const fn consumers(self) -> u32 {
		match self {
			TrafficLoad::Normal => 2,
			TrafficLoad::BlackFriday => 20,
		}
	}

	/// Share of the load each consumer instance handles, rounded up.
	pub const fn events_per_consumer(self) -> u32 {
		self.events_per_second().div_ceil(self.consumers())
	}
}

/// Renders `n` with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

/// Normal day versus Black Friday, with consumers scaling out.
#[component]
pub fn ScalabilityDemo() -> impl IntoView {
	let load = RwSignal::new(TrafficLoad::Normal);
	let peak = move || load.get() == TrafficLoad::BlackFriday;
	let figure = move || classes("font-bold", pick(peak(), "text-red-600", "text-blue-600"));

	let scenario_button = move |target: TrafficLoad, label: &'static str, lit: &'static str| {
		view! {
			<button
				class=move || classes(
					"w-full p-3 rounded-lg border-2 transition-all",
					pick(load.get() == target, lit, "border-gray-300 bg-white text-gray-700 hover:bg-gray-50"),
				)
				on:click=move |_| load.set(target)
			>
				{label}
			</button>
		}
	};

	let metrics: [(&str, fn(TrafficLoad) -> String); 3] = [
		("Events per second:", |l| group_thousands(l.events_per_second().into())),
		("Active consumers:", |l| l.consumers().to_string()),
		("Events per consumer:", |l| l.events_per_consumer().to_string()),
	];

	view! {
		<Panel title="📈 Scalability in Action">
			<div class="grid md:grid-cols-2 gap-8">
				<div class="space-y-6">
					<div class="bg-gradient-to-r from-blue-50 to-indigo-50 p-6 rounded-lg border border-blue-200">
						<h4 class="text-lg font-semibold text-blue-900 mb-4">"Traffic Scenario"</h4>
						<div class="space-y-4">
							{scenario_button(TrafficLoad::Normal, "🛒 Normal Day", "border-blue-300 bg-blue-100 text-blue-900")}
							{scenario_button(TrafficLoad::BlackFriday, "🔥 Black Friday Sale", "border-red-300 bg-red-100 text-red-900")}
						</div>
					</div>
					<div class="bg-gray-50 p-6 rounded-lg border">
						<h5 class="font-semibold text-gray-900 mb-4">"System Metrics"</h5>
						<div class="space-y-3">
							{metrics
								.into_iter()
								.map(|(label, value)| view! {
									<div class="flex justify-between items-center">
										<span class="text-gray-700">{label}</span>
										<span class=figure>{move || value(load.get())}</span>
									</div>
								})
								.collect_view()}
						</div>
					</div>
				</div>

				<div class="space-y-6">
					<div class="bg-gradient-to-r from-green-50 to-emerald-50 p-6 rounded-lg border border-green-200">
						<h4 class="text-lg font-semibold text-green-900 mb-4">"Auto-Scaling Response"</h4>
						<div class="space-y-4">
							<div class="flex items-center space-x-3">
								<Icon glyph=Glyph::Trend class="w-5 h-5 text-green-600" />
								<span class="text-green-800">"Traffic spike detected"</span>
							</div>
							<div class="flex items-center space-x-3">
								<Icon glyph=Glyph::Zap class="w-5 h-5 text-yellow-600" />
								<span class="text-green-800">"Event broker queues events"</span>
							</div>
							<div class="flex items-center space-x-3">
								<Icon glyph=Glyph::Users class="w-5 h-5 text-blue-600" />
								<span class="text-green-800">"Consumers scale horizontally"</span>
							</div>
						</div>
					</div>
					<div class="bg-white p-4 rounded-lg border">
						<h5 class="font-semibold text-gray-900 mb-3">"Consumer Instances"</h5>
						<div class="grid grid-cols-5 gap-2">
							{move || {
								let count = load.get().consumers() as usize;
								let tile = pick(peak(), "bg-red-100 text-red-600 border border-red-300", "bg-blue-100 text-blue-600 border border-blue-300");
								let tiles = (1..=count.min(MAX_CONSUMER_TILES))
									.map(|n| view! {
										<div class=classes("w-8 h-8 rounded-lg flex items-center justify-center text-xs font-bold", tile)>
											{format!("C{n}")}
										</div>
									})
									.collect_view();
								let overflow = (count > MAX_CONSUMER_TILES).then(|| view! {
									<div class="w-8 h-8 rounded-lg bg-gray-100 text-gray-600 border border-gray-300 flex items-center justify-center text-xs">
										{format!("+{}", count - MAX_CONSUMER_TILES)}
									</div>
								});
								view! { {tiles} {overflow} }
							}}
						</div>
					</div>
				</div>
			</div>

			<div class="mt-6">
				<Callout glyph=Glyph::Zap title="Azure Auto-Scaling" hue="yellow">
					"Azure Event Hub and Event Grid automatically handle millions of events per second. Your consumers can scale independently based on the event load."
				</Callout>
			</div>
		</Panel>
	}
}

const ORDER_STEPS: &[(&str, bool)] = &[
	("Order Placed", true),
	("Confirmation Shown", true),
	("Inventory Check", false),
	("Packaging Started", false),
	("Dispatch Notification", false),
	("Delivery Scheduled", false),
];

/// Immediate confirmation for the user while fulfilment continues behind it.
#[component]
pub fn AsyncProcessingDemo() -> impl IntoView {
	let step = use_round_robin(ORDER_STEPS.len(), ASYNC_PERIOD_MS);
	let confirmed = move || step.reached(1);

	view! {
		<Panel title="⚡ Asynchronous Processing Demo">
			<div class="grid md:grid-cols-2 gap-8">
				<div class="space-y-6">
					<div class="bg-gradient-to-r from-blue-50 to-indigo-50 p-6 rounded-lg border border-blue-200">
						<h4 class="text-lg font-semibold text-blue-900 mb-4">"👤 User Experience"</h4>
						<div class="space-y-4">
							<div class=move || classes("p-4 rounded-lg border-2 transition-all", pick(confirmed(), "border-gray-200 bg-gray-50", "border-yellow-300 bg-yellow-50"))>
								<div class="flex items-center space-x-3">
									{move || if confirmed() {
										view! { <Icon glyph=Glyph::Check class="w-5 h-5 text-green-600" /> }.into_any()
									} else {
										view! { <Icon glyph=Glyph::Loader class="w-5 h-5 text-yellow-600 animate-spin" /> }.into_any()
									}}
									<span class="font-medium">"Placing Order..."</span>
								</div>
							</div>
							<div class=move || classes("p-4 rounded-lg border-2 transition-all", pick(confirmed(), "border-green-300 bg-green-50", "border-gray-200 bg-gray-50"))>
								<div class="flex items-center space-x-3">
									<Icon glyph=Glyph::Check class=Signal::derive(move || pick(confirmed(), "w-5 h-5 text-green-600", "w-5 h-5 text-gray-400").to_string()) />
									<span class="font-medium">"Order Confirmed! ✅"</span>
								</div>
								<Show when=confirmed>
									<p class="text-sm text-green-700 mt-2">"User can continue shopping or leave the site"</p>
								</Show>
							</div>
						</div>
					</div>
					<Callout glyph=Glyph::Clock title="Key Benefit" hue="purple">
						"User gets immediate feedback while background processing continues"
					</Callout>
				</div>

				<div class="bg-gradient-to-r from-gray-50 to-gray-100 p-6 rounded-lg border">
					<h4 class="text-lg font-semibold text-gray-900 mb-4">"🔄 Background Processing"</h4>
					<div class="space-y-3">
						{ORDER_STEPS
							.iter()
							.enumerate()
							.map(|(i, &(label, immediate))| {
								let done = move || step.reached(i);
								let (lit, tick, tag, tag_class) = if immediate {
									("border-green-300 bg-green-50", "w-4 h-4 text-green-600", "Immediate", "text-xs bg-green-100 text-green-800 px-2 py-1 rounded")
								} else {
									("border-blue-300 bg-blue-50", "w-4 h-4 text-blue-600", "Async", "text-xs bg-blue-100 text-blue-800 px-2 py-1 rounded")
								};
								view! {
									<div class=move || classes("p-3 rounded-lg border transition-all duration-500", pick(done(), lit, "border-gray-200 bg-gray-50"))>
										<div class="flex items-center justify-between">
											<div class="flex items-center space-x-3">
												<Show
													when=done
													fallback=|| view! { <div class="w-4 h-4 border-2 border-gray-300 rounded-full"></div> }
												>
													<Icon glyph=Glyph::Check class=tick />
												</Show>
												<span class="font-medium text-gray-900">{label}</span>
											</div>
											<span class=tag_class>{tag}</span>
										</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>

			<div class="mt-6 grid md:grid-cols-2 gap-4">
				<div class="p-4 bg-green-50 rounded-lg border border-green-200">
					<h5 class="font-semibold text-green-900 mb-2">"✅ Synchronous (Immediate)"</h5>
					<p class="text-green-800 text-sm">
						"Order confirmation, user feedback - must happen immediately for good UX"
					</p>
				</div>
				<div class="p-4 bg-blue-50 rounded-lg border border-blue-200">
					<h5 class="font-semibold text-blue-900 mb-2">"⚡ Asynchronous (Background)"</h5>
					<p class="text-blue-800 text-sm">
						"Inventory, packaging, notifications - can happen in background without blocking user"
					</p>
				</div>
			</div>
		</Panel>
	}
}

struct RideEvent {
	label: &'static str,
	glyph: Glyph,
	sync: bool,
	description: &'static str,
}

const RIDE_EVENTS: &[RideEvent] = &[
	RideEvent { label: "Ride Requested", glyph: Glyph::Pin, sync: true, description: "User requests ride through app" },
	RideEvent { label: "Driver Assigned", glyph: Glyph::Car, sync: true, description: "System finds and assigns nearest driver" },
	RideEvent { label: "Driver Arrived", glyph: Glyph::Pin, sync: true, description: "Driver reaches pickup location" },
	RideEvent { label: "Ride Started", glyph: Glyph::Car, sync: true, description: "Trip begins, tracking starts" },
	RideEvent { label: "Ride Ended", glyph: Glyph::Pin, sync: true, description: "Trip completed at destination" },
	RideEvent { label: "Payment Processed", glyph: Glyph::Card, sync: false, description: "Automatic payment processing" },
	RideEvent { label: "Receipt Sent", glyph: Glyph::Card, sync: false, description: "Email receipt and trip summary" },
	RideEvent { label: "Loyalty Points Updated", glyph: Glyph::Star, sync: false, description: "Reward points added to account" },
];

/// Exercise: which ride-hailing events must block the rider and which need not.
#[component]
pub fn UberEventFlow() -> impl IntoView {
	let active = use_round_robin(RIDE_EVENTS.len(), UBER_FLOW_PERIOD_MS);

	let column = |sync: bool| {
		let (hue, heading, why, reason) = if sync {
			("green", "✅ Synchronous Events (Must happen immediately)", "Why sync?", " These events directly impact the user experience and ride flow.")
		} else {
			("blue", "⚡ Asynchronous Events (Can happen in background)", "Why async?", " These are important but don't need to block the user experience.")
		};
		let s = swatch_for(hue);
		view! {
			<div class=format!("{} p-6 rounded-lg border {}", s.tint, s.soft_border)>
				<h4 class=format!("text-lg font-semibold {} mb-4", s.strong)>{heading}</h4>
				<div class="space-y-3">
					{RIDE_EVENTS
						.iter()
						.filter(|e| e.sync == sync)
						.map(|e| view! {
							<div class="flex items-start space-x-3">
								<Icon glyph=e.glyph class=format!("w-4 h-4 mt-1 {}", s.text) />
								<div>
									<div class=format!("font-medium {}", s.strong)>{e.label}</div>
									<div class=format!("text-sm {}", s.text)>{e.description}</div>
								</div>
							</div>
						})
						.collect_view()}
				</div>
				<div class=format!("mt-4 p-3 {} rounded-lg", s.light)>
					<p class=format!("{} text-sm", s.strong)>
						<strong>{why}</strong>
						{reason}
					</p>
				</div>
			</div>
		}
	};

	view! {
		<Panel title="🚗 Exercise: Uber Event Flow">
			<p class="text-gray-700 mb-6">
				"Let's analyze which events in an Uber ride need to happen synchronously vs asynchronously:"
			</p>
			<div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
				{RIDE_EVENTS
					.iter()
					.enumerate()
					.map(|(i, e)| {
						let s = swatch_for(if e.sync { "green" } else { "blue" });
						let on = move || active.is(i);
						view! {
							<div class=move || if on() {
								format!("p-4 rounded-lg border-2 transition-all duration-300 {} {} scale-105", s.border, s.tint)
							} else {
								"p-4 rounded-lg border-2 transition-all duration-300 border-gray-200 bg-gray-50".to_string()
							}>
								<div class="flex flex-col items-center text-center space-y-3">
									<div class=move || classes("w-12 h-12 rounded-lg flex items-center justify-center", pick(on(), s.light, "bg-gray-100"))>
										<Icon glyph=e.glyph class=Signal::derive(move || classes("text-2xl", pick(on(), s.text, "text-gray-500"))) />
									</div>
									<div>
										<div class="font-medium text-gray-900 text-sm mb-1">{e.label}</div>
										<div class=format!("text-xs px-2 py-1 rounded {} {}", s.light, s.strong)>
											{if e.sync { "Synchronous" } else { "Asynchronous" }}
										</div>
									</div>
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="grid md:grid-cols-2 gap-6">{column(true)} {column(false)}</div>

			<div class="mt-6">
				<Callout glyph=Glyph::Clock title="Real-World Impact" hue="yellow">
					"By processing payments, receipts, and loyalty points asynchronously, Uber can complete the ride experience immediately while handling business logic in the background. This improves user satisfaction and system performance."
				</Callout>
			</div>
		</Panel>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn per_consumer_share_rounds_up() {
		assert_eq!(TrafficLoad::Normal.events_per_consumer(), 50);
		assert_eq!(TrafficLoad::BlackFriday.events_per_consumer(), 500);
		assert_eq!(7u32.div_ceil(2), 4);
	}

	#[test]
	fn black_friday_scales_consumers_with_load() {
		let normal = TrafficLoad::Normal;
		let peak = TrafficLoad::BlackFriday;
		assert_eq!(peak.events_per_second() / normal.events_per_second(), 100);
		assert_eq!(peak.consumers() / normal.consumers(), 10);
	}

	#[test]
	fn thousands_are_grouped() {
		assert_eq!(group_thousands(0), "0");
		assert_eq!(group_thousands(100), "100");
		assert_eq!(group_thousands(10_000), "10,000");
		assert_eq!(group_thousands(1_234_567), "1,234,567");
	}

	#[test]
	fn ride_events_split_five_sync_three_async() {
		assert_eq!(RIDE_EVENTS.iter().filter(|e| e.sync).count(), 5);
		assert_eq!(RIDE_EVENTS.iter().filter(|e| !e.sync).count(), 3);
	}

	#[test]
	fn first_two_order_steps_are_immediate() {
		let immediate: Vec<_> = ORDER_STEPS.iter().map(|&(_, i)| i).collect();
		assert_eq!(immediate, [true, true, false, false, false, false]);
	}
}
