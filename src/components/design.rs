//! Widgets for the design principles lesson.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::common::{Callout, Panel, classes, pick};
use crate::components::icon::{Glyph, Icon};
use crate::palette::swatch_for;
use crate::timing::{Scheduler, TimeoutSlot, use_round_robin, use_round_robin_while, use_timeout};

const PRINCIPLE_PERIOD_MS: u64 = 4000;
const COUPLING_PERIOD_MS: u64 = 1500;
const PAYMENT_DELAY: Duration = Duration::from_millis(1000);

struct Principle {
	title: &'static str,
	glyph: Glyph,
	hue: &'static str,
	description: &'static str,
	analogy: &'static str,
	benefits: [&'static str; 4],
	example: &'static str,
}

const PRINCIPLES: &[Principle] = &[
	Principle {
		title: "Loose Coupling",
		glyph: Glyph::Link,
		hue: "blue",
		description: "Producers and consumers don't depend on each other directly",
		analogy: "Like a mailroom - sender drops letter, subscribers pick up what they need",
		benefits: ["Services evolve independently", "Easy to add new consumers", "No direct dependencies", "Better maintainability"],
		example: "Producer emits OrderCreated event without knowing who will consume it",
	},
	Principle {
		title: "Asynchronous Communication",
		glyph: Glyph::Zap,
		hue: "green",
		description: "Producers don't wait for consumers to finish processing",
		analogy: "Like a busy restaurant - chef doesn't wait for waiter to deliver each dish",
		benefits: ["Better scalability", "Improved resilience", "Non-blocking operations", "Automatic retry handling"],
		example: "Order API publishes event and continues processing new orders",
	},
	Principle {
		title: "Event Granularity",
		glyph: Glyph::Target,
		hue: "purple",
		description: "Balance between too coarse and too fine-grained events",
		analogy: "Like choosing the right size container - not too big, not too small",
		benefits: ["Efficient processing", "Reduced overhead", "Clear event purpose", "Optimal data transfer"],
		example: "CustomerUpdated vs separate NameChanged, AddressChanged events",
	},
	Principle {
		title: "Idempotency",
		glyph: Glyph::Refresh,
		hue: "orange",
		description: "Handle duplicate events gracefully without side effects",
		analogy: "Like a light switch - pressing it twice doesn't break the bulb",
		benefits: ["Prevents duplicate actions", "Data consistency", "Fault tolerance", "Reliable processing"],
		example: "Payment service won't charge customer twice for same OrderPaid event",
	},
	Principle {
		title: "Event Schema & Versioning",
		glyph: Glyph::Document,
		hue: "indigo",
		description: "Well-defined contracts with backward compatibility",
		analogy: "Like API contracts - clear structure that evolves gracefully",
		benefits: ["Clear data contracts", "Backward compatibility", "Smooth evolution", "Consumer reliability"],
		example: "Adding discountApplied field to OrderCreated without breaking old consumers",
	},
	Principle {
		title: "Security & Governance",
		glyph: Glyph::Shield,
		hue: "red",
		description: "Authentication, encryption, and access control",
		analogy: "Like a secure building - proper ID checks and access levels",
		benefits: ["Authorized access only", "Data protection", "Compliance ready", "Audit capabilities"],
		example: "RBAC controls who can publish to OrderEvents topic",
	},
	Principle {
		title: "Monitoring & Observability",
		glyph: Glyph::Chart,
		hue: "yellow",
		description: "Track delivery, failures, and performance metrics",
		analogy: "Like a car dashboard - shows you what's happening under the hood",
		benefits: ["Early problem detection", "Performance insights", "Failure tracking", "System health visibility"],
		example: "Dead-letter queues capture failed events for investigation",
	},
];

/// The seven principles, rotating on their own or picked by hand.
#[component]
pub fn DesignPrinciples() -> impl IntoView {
	let active = use_round_robin(PRINCIPLES.len(), PRINCIPLE_PERIOD_MS);

	view! {
		<Panel
			title="🏗️ Design Principles for Event-Driven Apps"
			subtitle="Seven fundamental principles for building robust, scalable event-driven applications"
		>
			<div class="grid md:grid-cols-3 lg:grid-cols-4 gap-4 mb-8">
				{PRINCIPLES
					.iter()
					.enumerate()
					.map(|(i, principle)| {
						let s = swatch_for(principle.hue);
						let on = move || active.is(i);
						view! {
							<button
								class=move || if on() {
									format!("p-4 rounded-lg border-2 transition-all duration-300 text-left {} {} scale-105", s.border, s.light)
								} else {
									"p-4 rounded-lg border-2 transition-all duration-300 text-left border-gray-200 bg-gray-50 hover:bg-gray-100".to_string()
								}
								on:click=move |_| active.select(i)
							>
								<div class="flex items-center space-x-3 mb-2">
									<Icon glyph=principle.glyph class=Signal::derive(move || classes("text-2xl", pick(on(), s.text, "text-gray-500"))) />
									<span class="text-sm font-medium text-gray-900">{i + 1}</span>
								</div>
								<h4 class="font-semibold text-gray-900 text-sm mb-1">{principle.title}</h4>
								<p class="text-xs text-gray-600">{principle.description}</p>
							</button>
						}
					})
					.collect_view()}
			</div>

			{move || {
				let i = active.index();
				let principle = &PRINCIPLES[i];
				let s = swatch_for(principle.hue);
				view! {
					<div class="bg-gradient-to-r from-gray-50 to-gray-100 p-6 rounded-lg border">
						<div class="flex items-start space-x-4">
							<div class=format!("w-16 h-16 {} rounded-lg flex items-center justify-center", s.light)>
								<Icon glyph=principle.glyph class=format!("text-3xl {}", s.text) />
							</div>
							<div class="flex-1">
								<h4 class="text-xl font-semibold text-gray-900 mb-2">
									{format!("Principle {}: {}", i + 1, principle.title)}
								</h4>
								<p class="text-gray-700 mb-4">{principle.description}</p>
								<div class="grid md:grid-cols-2 gap-6">
									<div>
										<h5 class="font-semibold text-gray-900 mb-3">"Real-World Analogy:"</h5>
										<div class=format!("p-3 rounded-lg border {} {}", s.light, s.border)>
											<p class=format!("text-sm {}", s.text)>{principle.analogy}</p>
										</div>
										<h5 class="font-semibold text-gray-900 mb-2 mt-4">"Example:"</h5>
										<p class="text-gray-700 text-sm">{principle.example}</p>
									</div>
									<div>
										<h5 class="font-semibold text-gray-900 mb-3">"Key Benefits:"</h5>
										<ul class="space-y-2">
											{principle
												.benefits
												.iter()
												.map(|benefit| view! {
													<li class="flex items-center space-x-2">
														<div class=format!("w-2 h-2 {} rounded-full", s.solid)></div>
														<span class="text-gray-700 text-sm">{*benefit}</span>
													</li>
												})
												.collect_view()}
										</ul>
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

/// Large two-way mode switch with an icon, a title and a blurb per side.
fn mode_button(
	selected: impl Fn() -> bool + Send + Sync + 'static,
	on_click: impl Fn() + 'static,
	hue: &'static str,
	glyph: Glyph,
	title: &'static str,
	blurb: &'static str,
) -> impl IntoView {
	let lit = match hue {
		"red" => "border-red-300 bg-red-100 text-red-900",
		_ => "border-green-300 bg-green-100 text-green-900",
	};
	view! {
		<button
			class=move || classes("p-4 rounded-lg border-2 transition-all", pick(selected(), lit, "border-gray-300 bg-white text-gray-700 hover:bg-gray-50"))
			on:click=move |_| on_click()
		>
			<div class="flex items-center space-x-3">
				<Icon glyph=glyph class="text-2xl" />
				<div class="text-left">
					<h4 class="font-semibold">{title}</h4>
					<p class="text-sm">{blurb}</p>
				</div>
			</div>
		</button>
	}
}

const DOWNSTREAM: &[(&str, Glyph, &str)] = &[
	("Inventory", Glyph::Package, "blue"),
	("Payment", Glyph::Card, "green"),
	("Email", Glyph::Mail, "purple"),
	("Analytics", Glyph::Chart, "orange"),
];

/// Vertical position, in percent, of the `index`th downstream service.
pub fn service_row(index: usize) -> usize {
	20 + index * 20
}

/// Order service calling its dependants directly versus publishing one event.
#[component]
pub fn LooseCouplingDemo() -> impl IntoView {
	// animates while the services are tightly coupled
	let calling = use_round_robin_while(DOWNSTREAM.len(), COUPLING_PERIOD_MS, true);

	let service_node = move |index: usize, name: &'static str, glyph: Glyph, fill: Signal<&'static str>| {
		view! {
			<div
				class="absolute transform -translate-x-1/2 -translate-y-1/2"
				style=format!("right: 60px; top: {}%;", service_row(index))
			>
				<div class=move || classes("w-12 h-12 rounded-lg flex items-center justify-center", fill.get())>
					<Icon glyph=glyph class="text-2xl text-white" />
				</div>
				<div class="text-center mt-1">
					<div class="text-xs font-medium text-gray-700">{name}</div>
				</div>
			</div>
		}
	};

	let tight_view = move || {
		view! {
			{DOWNSTREAM
				.iter()
				.enumerate()
				.map(|(i, &(name, glyph, hue))| {
					let solid = swatch_for(hue).solid;
					let fill = Signal::derive(move || pick(calling.is(i), solid, "bg-gray-300"));
					view! {
						<div>
							{service_node(i, name, glyph, fill)}
							<div
								class="absolute"
								style=format!("left: 120px; top: {}%; width: calc(100% - 200px); transform: translateY(-50%);", service_row(i))
							>
								<Icon
									glyph=Glyph::Arrow
									class=Signal::derive(move || classes("text-2xl", pick(calling.is(i), "text-red-500 animate-pulse", "text-gray-300")))
								/>
								<Show when=move || calling.is(i)>
									<div class="text-xs text-red-600 mt-1">"Direct API Call"</div>
								</Show>
							</div>
						</div>
					}
				})
				.collect_view()}
			<div class="absolute bottom-4 left-4 right-4 p-3 bg-red-50 rounded-lg border border-red-200">
				<p class="text-red-800 text-sm">
					<strong>"Problem:"</strong>
					" Order Service must know about all downstream services. If one fails, the whole chain breaks."
				</p>
			</div>
		}
	};

	let loose_view = move || {
		view! {
			<div class="absolute left-1/2 top-1/2 transform -translate-x-1/2 -translate-y-1/2">
				<div class="w-16 h-16 bg-yellow-500 rounded-lg flex items-center justify-center">
					<Icon glyph=Glyph::Mail class="text-3xl text-white" />
				</div>
				<div class="text-center mt-2">
					<div class="font-semibold text-gray-900">"Event Grid"</div>
				</div>
			</div>
			<div class="absolute left-24 top-1/2 transform -translate-y-1/2">
				<Icon glyph=Glyph::Arrow class="text-3xl text-green-500 animate-pulse" />
				<div class="text-xs text-green-600 mt-1">"Publish Event"</div>
			</div>
			{DOWNSTREAM
				.iter()
				.enumerate()
				.map(|(i, &(name, glyph, hue))| {
					let s = swatch_for(hue);
					let row = service_row(i) as i64;
					view! {
						<div>
							{service_node(i, name, glyph, Signal::stored(s.solid))}
							<div
								class="absolute"
								style=format!("left: 60%; top: 50%; width: 30%; height: {}%; transform-origin: 0 0;", row - 50)
							>
								<svg class="w-full h-full">
									<line
										x1="0"
										y1="0"
										x2="100%"
										y2="100%"
										stroke=s.stroke
										stroke-width="2"
										stroke-dasharray="5,5"
										class="animate-pulse"
									/>
								</svg>
							</div>
						</div>
					}
				})
				.collect_view()}
			<div class="absolute bottom-4 left-4 right-4 p-3 bg-green-50 rounded-lg border border-green-200">
				<p class="text-green-800 text-sm">
					<strong>"Solution:"</strong>
					" Order Service only knows about Event Grid. Services subscribe independently and can be added/removed without changes."
				</p>
			</div>
		}
	};

	view! {
		<Panel title="🔗 Loose Coupling Demonstration">
			<div class="grid md:grid-cols-2 gap-4 mb-8">
				{mode_button(
					move || calling.running(),
					move || calling.set_running(true),
					"red",
					Glyph::Close,
					"Tightly Coupled",
					"Direct service dependencies",
				)}
				{mode_button(
					move || !calling.running(),
					move || calling.set_running(false),
					"green",
					Glyph::Mail,
					"Loosely Coupled",
					"Event-driven communication",
				)}
			</div>

			<div class="relative bg-gradient-to-r from-gray-50 to-gray-100 p-8 rounded-lg border" style="height: 300px;">
				<div class="absolute left-8 top-1/2 transform -translate-y-1/2">
					<div class="w-16 h-16 bg-indigo-500 rounded-lg flex items-center justify-center">
						<Icon glyph=Glyph::Users class="text-3xl text-white" />
					</div>
					<div class="text-center mt-2">
						<div class="font-semibold text-gray-900">"Order Service"</div>
					</div>
				</div>
				{move || if calling.running() { tight_view().into_any() } else { loose_view().into_any() }}
			</div>
		</Panel>
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
	Coarse,
	Fine,
	Balanced,
}

type EventShape = (&'static str, &'static [&'static str]);

impl Granularity {
	pub const ALL: [Granularity; 3] = [Granularity::Coarse, Granularity::Fine, Granularity::Balanced];

	pub fn title(self) -> &'static str {
		match self {
			Granularity::Coarse => "Too Coarse",
			Granularity::Fine => "Too Fine",
			Granularity::Balanced => "Just Right",
		}
	}

	pub fn key(self) -> &'static str {
		match self {
			Granularity::Coarse => "coarse",
			Granularity::Fine => "fine",
			Granularity::Balanced => "balanced",
		}
	}

	fn blurb(self) -> &'static str {
		match self {
			Granularity::Coarse => "Single large event",
			Granularity::Fine => "Many small events",
			Granularity::Balanced => "Logical grouping",
		}
	}

	fn hue(self) -> &'static str {
		match self {
			Granularity::Coarse => "red",
			Granularity::Fine => "orange",
			Granularity::Balanced => "green",
		}
	}

	fn glyph(self) -> Glyph {
		match self {
			Granularity::Balanced => Glyph::Check,
			_ => Glyph::Warning,
		}
	}

	pub fn events(self) -> &'static [EventShape] {
		match self {
			Granularity::Coarse => &[("CustomerUpdated", &["name", "email", "address", "phone", "preferences", "billing"])],
			Granularity::Fine => &[
				("CustomerNameChanged", &["firstName", "lastName"]),
				("CustomerEmailChanged", &["email"]),
				("CustomerAddressChanged", &["address"]),
				("CustomerPhoneChanged", &["phone"]),
				("CustomerPreferencesChanged", &["preferences"]),
				("CustomerBillingChanged", &["billing"]),
			],
			Granularity::Balanced => &[
				("CustomerProfileUpdated", &["name", "email", "phone"]),
				("CustomerAddressUpdated", &["address", "billing"]),
				("CustomerPreferencesUpdated", &["preferences"]),
			],
		}
	}

	/// Problems of the extremes, benefits of the balanced shape.
	pub fn notes(self) -> &'static [&'static str] {
		match self {
			Granularity::Coarse => &["Unnecessary data transfer", "Inefficient processing", "Privacy concerns"],
			Granularity::Fine => &["Too many events", "System overhead", "Complex orchestration"],
			Granularity::Balanced => &["Logical grouping", "Efficient processing", "Clear purpose"],
		}
	}

	pub fn notes_heading(self) -> &'static str {
		match self {
			Granularity::Balanced => "Benefits:",
			_ => "Problems:",
		}
	}
}

/// One customer-profile change modelled at three event sizes.
#[component]
pub fn EventGranularityDemo() -> impl IntoView {
	let shape = RwSignal::new(Granularity::Coarse);

	view! {
		<Panel title="🎯 Event Granularity: Finding the Sweet Spot">
			<div class="grid md:grid-cols-3 gap-4 mb-8">
				{Granularity::ALL
					.into_iter()
					.map(|option| {
						let s = swatch_for(option.hue());
						let on = move || shape.get() == option;
						view! {
							<button
								class=move || if on() {
									format!("p-4 rounded-lg border-2 transition-all {} {} scale-105", s.border, s.light)
								} else {
									"p-4 rounded-lg border-2 transition-all border-gray-300 bg-white hover:bg-gray-50".to_string()
								}
								on:click=move |_| shape.set(option)
							>
								<div class="flex items-center space-x-3 mb-2">
									<Icon glyph=option.glyph() class=Signal::derive(move || classes("text-2xl", pick(on(), s.text, "text-gray-500"))) />
									<h4 class="font-semibold text-gray-900">{option.title()}</h4>
								</div>
								<p class="text-sm text-gray-600">{option.blurb()}</p>
							</button>
						}
					})
					.collect_view()}
			</div>

			{move || {
				let current = shape.get();
				let s = swatch_for(current.hue());
				view! {
					<div class="bg-gradient-to-r from-gray-50 to-gray-100 p-6 rounded-lg border">
						<div class="flex items-start space-x-4 mb-6">
							<div class=format!("w-16 h-16 {} rounded-lg flex items-center justify-center", s.light)>
								<Icon glyph=current.glyph() class=format!("text-3xl {}", s.text) />
							</div>
							<div>
								<h4 class="text-xl font-semibold text-gray-900 mb-2">{format!("{} Granularity", current.title())}</h4>
								<p class="text-gray-700">
									{format!("Customer profile update scenario with {} event granularity", current.key())}
								</p>
							</div>
						</div>
						<div class="grid md:grid-cols-2 gap-6">
							<div>
								<h5 class="font-semibold text-gray-900 mb-4">"Event Structure:"</h5>
								<div class="space-y-3">
									{current
										.events()
										.iter()
										.map(|&(name, fields)| view! {
											<div class=format!("p-4 rounded-lg border {} {}", s.border, s.light)>
												<div class="font-medium text-gray-900 mb-2">{name}</div>
												<div class="flex flex-wrap gap-2">
													{fields
														.iter()
														.map(|field| view! {
															<span class="px-2 py-1 bg-white rounded text-xs text-gray-700 border">{*field}</span>
														})
														.collect_view()}
												</div>
											</div>
										})
										.collect_view()}
								</div>
							</div>
							<div>
								<h5 class="font-semibold text-gray-900 mb-4">{current.notes_heading()}</h5>
								<ul class="space-y-2">
									{current
										.notes()
										.iter()
										.map(|note| view! {
											<li class="flex items-start space-x-2">
												<div class=format!("w-2 h-2 {} rounded-full mt-2", s.solid)></div>
												<span class="text-gray-700 text-sm">{*note}</span>
											</li>
										})
										.collect_view()}
								</ul>
								{(current == Granularity::Balanced).then(|| view! {
									<div class="mt-4 p-3 bg-green-50 rounded-lg border border-green-200">
										<div class="flex items-center space-x-2">
											<Icon glyph=Glyph::Target class="w-4 h-4 text-green-600" />
											<span class="text-green-800 text-sm font-medium">"Sweet Spot Achieved!"</span>
										</div>
									</div>
								})}
							</div>
						</div>
					</div>
				}
			}}

			<div class="mt-6">
				<Callout glyph=Glyph::Bulb title="💡 Design Tip">
					"Group related data that changes together and is consumed together. Separate concerns that have different consumers or processing requirements."
				</Callout>
			</div>
		</Panel>
	}
}

/// Payment consumer receiving `OrderPaid` events, with or without
/// duplicate detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaymentSimulation {
	received: u32,
	processed: u32,
	idempotent: bool,
	in_flight: Option<u32>,
	generation: u32,
}

/// Ticket for an event handed to the consumer; completes it later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delivery(u32);

impl PaymentSimulation {
	pub fn received(&self) -> u32 {
		self.received
	}

	pub fn processed(&self) -> u32 {
		self.processed
	}

	pub fn is_idempotent(&self) -> bool {
		self.idempotent
	}

	pub fn is_processing(&self) -> bool {
		self.in_flight.is_some()
	}

	/// More than one charge went through.
	pub fn double_charged(&self) -> bool {
		self.processed > 1
	}

	/// Delivers one event. Ignored while the previous one is still in flight.
	pub fn send(&mut self) -> Option<Delivery> {
		if self.is_processing() {
			return None;
		}
		self.received += 1;
		self.in_flight = Some(self.generation);
		Some(Delivery(self.generation))
	}

	/// Finishes a delivery. Deliveries issued before the last reset are dropped.
	pub fn complete(&mut self, delivery: Delivery) {
		if self.in_flight != Some(delivery.0) {
			return;
		}
		self.processed = if self.idempotent { 1 } else { self.processed + 1 };
		self.in_flight = None;
	}

	pub fn reset(&mut self) {
		self.received = 0;
		self.processed = 0;
		self.in_flight = None;
		self.generation = self.generation.wrapping_add(1);
	}

	/// Switches consumer behaviour and starts over.
	pub fn set_idempotent(&mut self, idempotent: bool) {
		self.idempotent = idempotent;
		self.reset();
	}
}

const STRATEGIES: &[&str] = &[
	"Use unique event IDs to track processed events",
	"Implement database constraints to prevent duplicates",
	"Use conditional operations (e.g., \"insert if not exists\")",
	"Store processing state to enable safe retries",
];

/// Hands one event to the consumer and completes it after the processing
/// delay. The completion is dropped if `pending` goes away first.
fn send_payment<S: Scheduler + Clone + 'static>(
	sim: RwSignal<PaymentSimulation>,
	pending: TimeoutSlot<S>,
) {
	if let Some(delivery) = sim.try_update(PaymentSimulation::send).flatten() {
		pending.schedule(PAYMENT_DELAY, move || sim.update(|s| s.complete(delivery)));
	}
}

/// Repeated `OrderPaid` deliveries charging a customer once or many times.
#[component]
pub fn IdempotencyDemo() -> impl IntoView {
	let sim = RwSignal::new(PaymentSimulation::default());
	let pending = use_timeout();

	let send = move |_| send_payment(sim, pending);
	let start_over = move |f: fn(&mut PaymentSimulation)| {
		pending.clear();
		sim.update(f);
	};

	let idempotent = move || sim.with(PaymentSimulation::is_idempotent);
	let processing = move || sim.with(PaymentSimulation::is_processing);
	let double = move || sim.with(PaymentSimulation::double_charged);

	view! {
		<Panel title="🔄 Idempotency: Handling Duplicate Events">
			<div class="grid md:grid-cols-2 gap-4 mb-8">
				{mode_button(
					move || !idempotent(),
					move || start_over(|s| s.set_idempotent(false)),
					"red",
					Glyph::Warning,
					"Non-Idempotent",
					"Processes every event",
				)}
				{mode_button(
					idempotent,
					move || start_over(|s| s.set_idempotent(true)),
					"green",
					Glyph::Check,
					"Idempotent",
					"Handles duplicates safely",
				)}
			</div>

			<div class="bg-gradient-to-r from-gray-50 to-gray-100 p-6 rounded-lg border mb-6">
				<h4 class="text-lg font-semibold text-gray-900 mb-4">"Payment Processing Simulation"</h4>
				<div class="grid md:grid-cols-3 gap-6 mb-6">
					<div class="text-center">
						<div class="w-16 h-16 bg-blue-100 rounded-lg flex items-center justify-center mx-auto mb-3">
							<Icon glyph=Glyph::Refresh class="text-3xl text-blue-600" />
						</div>
						<div class="font-semibold text-gray-900">"Events Received"</div>
						<div class="text-2xl font-bold text-blue-600">{move || sim.with(PaymentSimulation::received)}</div>
					</div>
					<div class="text-center">
						<div class=move || classes("w-16 h-16 rounded-lg flex items-center justify-center mx-auto mb-3", pick(processing(), "bg-yellow-100", "bg-gray-100"))>
							<Icon glyph=Glyph::Card class=Signal::derive(move || classes("text-3xl", pick(processing(), "text-yellow-600 animate-pulse", "text-gray-600"))) />
						</div>
						<div class="font-semibold text-gray-900">"Processing"</div>
						<div class="text-sm text-gray-600">{move || pick(processing(), "In Progress...", "Ready")}</div>
					</div>
					<div class="text-center">
						<div class=move || classes("w-16 h-16 rounded-lg flex items-center justify-center mx-auto mb-3", pick(double(), "bg-red-100", "bg-green-100"))>
							<Icon glyph=Glyph::Check class=Signal::derive(move || classes("text-3xl", pick(double(), "text-red-600", "text-green-600"))) />
						</div>
						<div class="font-semibold text-gray-900">"Payments Processed"</div>
						<div class=move || classes("text-2xl font-bold", pick(double(), "text-red-600", "text-green-600"))>
							{move || sim.with(PaymentSimulation::processed)}
						</div>
					</div>
				</div>
				<div class="flex justify-center space-x-4">
					<button
						class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
						disabled=processing
						on:click=send
					>
						"Send \"OrderPaid\" Event"
					</button>
					<button
						class="px-6 py-3 bg-gray-600 text-white rounded-lg hover:bg-gray-700 transition-colors"
						on:click=move |_| start_over(PaymentSimulation::reset)
					>
						"Reset"
					</button>
				</div>
			</div>

			<div class=move || classes("p-4 rounded-lg border", pick(idempotent(), "bg-green-50 border-green-200", "bg-red-50 border-red-200"))>
				<div class="flex items-start space-x-3">
					{move || {
						let (glyph, tone) = if idempotent() {
							(Glyph::Check, "text-green-600")
						} else {
							(Glyph::Warning, "text-red-600")
						};
						view! { <Icon glyph=glyph class=format!("w-5 h-5 mt-1 {tone}") /> }
					}}
					<div>
						<h5 class=move || classes("font-semibold", pick(idempotent(), "text-green-900", "text-red-900"))>
							{move || pick(idempotent(), "Idempotent Implementation", "Non-Idempotent Risk")}
						</h5>
						<p class=move || classes("text-sm", pick(idempotent(), "text-green-800", "text-red-800"))>
							{move || pick(
								idempotent(),
								"Payment service checks if order was already processed using order ID. Duplicate events are safely ignored.",
								"Payment service processes every event without checking. Customer could be charged multiple times!",
							)}
						</p>
					</div>
				</div>
			</div>

			<div class="mt-6 p-4 bg-blue-50 rounded-lg border border-blue-200">
				<h5 class="font-semibold text-blue-900 mb-2">"💡 Implementation Strategies"</h5>
				<ul class="text-blue-800 text-sm space-y-1">
					{STRATEGIES.iter().map(|s| view! { <li>"• " {*s}</li> }).collect_view()}
				</ul>
			</div>
		</Panel>
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use super::*;
	use crate::timing::manual::ManualScheduler;
	use crate::timing::use_timeout_on;

	fn deliver(sim: &mut PaymentSimulation, times: usize) {
		for _ in 0..times {
			let delivery = sim.send().unwrap();
			sim.complete(delivery);
		}
	}

	#[test]
	fn non_idempotent_consumer_charges_every_duplicate() {
		let mut sim = PaymentSimulation::default();
		deliver(&mut sim, 3);
		assert_eq!(sim.received(), 3);
		assert_eq!(sim.processed(), 3);
		assert!(sim.double_charged());
	}

	#[test]
	fn idempotent_consumer_charges_once() {
		let mut sim = PaymentSimulation::default();
		sim.set_idempotent(true);
		deliver(&mut sim, 3);
		assert_eq!(sim.received(), 3);
		assert_eq!(sim.processed(), 1);
		assert!(!sim.double_charged());
	}

	#[test]
	fn sending_is_blocked_while_processing() {
		let mut sim = PaymentSimulation::default();
		let first = sim.send().unwrap();
		assert!(sim.is_processing());
		assert_eq!(sim.send(), None);
		assert_eq!(sim.received(), 1);
		sim.complete(first);
		assert!(!sim.is_processing());
		assert!(sim.send().is_some());
	}

	#[test]
	fn reset_discards_pending_delivery() {
		let mut sim = PaymentSimulation::default();
		let stale = sim.send().unwrap();
		sim.reset();
		sim.complete(stale);
		assert_eq!(sim.processed(), 0);
		assert!(!sim.is_processing());
	}

	#[test]
	fn payment_completes_after_the_processing_delay() {
		let clock = ManualScheduler::new();
		let owner = Owner::new();
		let (sim, pending) = owner.with(|| {
			(RwSignal::new(PaymentSimulation::default()), use_timeout_on(clock.clone()))
		});

		send_payment(sim, pending);
		send_payment(sim, pending);
		assert!(sim.with_untracked(PaymentSimulation::is_processing));
		assert_eq!(sim.with_untracked(PaymentSimulation::received), 1);

		clock.advance(PAYMENT_DELAY);
		assert!(!sim.with_untracked(PaymentSimulation::is_processing));
		assert_eq!(sim.with_untracked(PaymentSimulation::processed), 1);
		owner.cleanup();
	}

	#[test]
	fn leaving_the_lesson_mid_payment_drops_the_completion() {
		let clock = ManualScheduler::new();
		let owner = Owner::new();
		let (sim, pending) = owner.with(|| {
			(RwSignal::new(PaymentSimulation::default()), use_timeout_on(clock.clone()))
		});

		send_payment(sim, pending);
		clock.advance(PAYMENT_DELAY / 2);
		assert_eq!(clock.active_timers(), 1);

		owner.cleanup();
		assert_eq!(clock.active_timers(), 0);
		clock.advance(PAYMENT_DELAY * 2);
		assert_eq!(clock.active_timers(), 0);
	}

	#[test]
	fn switching_mode_starts_over() {
		let mut sim = PaymentSimulation::default();
		deliver(&mut sim, 2);
		sim.set_idempotent(true);
		assert_eq!((sim.received(), sim.processed()), (0, 0));
		assert!(sim.is_idempotent());
	}

	#[test]
	fn balanced_events_carry_the_same_fields_as_the_coarse_one() {
		let fields = |g: Granularity| -> BTreeSet<&str> {
			g.events().iter().flat_map(|(_, f)| f.iter().copied()).collect()
		};
		assert_eq!(fields(Granularity::Coarse), fields(Granularity::Balanced));
		assert_eq!(Granularity::Fine.events().len(), 6);
	}

	#[test]
	fn only_balanced_lists_benefits() {
		for g in Granularity::ALL {
			let expected = if g == Granularity::Balanced { "Benefits:" } else { "Problems:" };
			assert_eq!(g.notes_heading(), expected);
			assert_eq!(g.notes().len(), 3);
		}
	}

	#[test]
	fn services_are_spread_down_the_canvas() {
		let rows: Vec<_> = (0..DOWNSTREAM.len()).map(service_row).collect();
		assert_eq!(rows, [20, 40, 60, 80]);
	}
}
