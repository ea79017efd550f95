//! Widgets for the Event Grid overview lesson.

use leptos::prelude::*;

use crate::components::common::{Callout, Concept, ConceptDetail, Panel, classes, pick};
use crate::components::icon::{Glyph, Icon};
use crate::palette::swatch_for;
use crate::timing::use_round_robin;

const CONCEPTS_PERIOD_MS: u64 = 4000;
const FLOW_PERIOD_MS: u64 = 2500;
const PHOTO_PERIOD_MS: u64 = 2000;
const NEWS_PERIOD_MS: u64 = 3000;

const BUILDING_BLOCKS: &[Concept] = &[
	Concept {
		title: "Event Sources",
		subtitle: "Producers",
		glyph: Glyph::Database,
		hue: "blue",
		description: "Services that generate events",
		examples: &[
			"Azure Blob Storage → \"BlobCreated\" event",
			"Azure Resource Manager → \"ResourceUpdated\" event",
			"Custom applications → Custom events",
		],
	},
	Concept {
		title: "Event Topics",
		subtitle: "Mailboxes",
		glyph: Glyph::Cloud,
		hue: "yellow",
		description: "Topics are like mailboxes for events",
		examples: &[
			"System Topics → Built-in Azure services",
			"Custom Topics → Your own applications",
			"Event Domains → Multiple topics grouped",
		],
	},
	Concept {
		title: "Event Subscriptions",
		subtitle: "Listeners",
		glyph: Glyph::Filter,
		hue: "purple",
		description: "Define who wants to listen to which events",
		examples: &[
			"Filter by event type (e.g., only \"BlobCreated\")",
			"Filter by subject (e.g., only images)",
			"Advanced filtering with custom logic",
		],
	},
	Concept {
		title: "Event Handlers",
		subtitle: "Consumers",
		glyph: Glyph::Target,
		hue: "green",
		description: "Services that process the events",
		examples: &[
			"Azure Functions → Serverless code execution",
			"Logic Apps → Workflow orchestration",
			"Event Hubs → Stream to other systems",
			"Webhooks → External HTTP endpoints",
		],
	},
];

/// The four building blocks of Event Grid, picked by click.
#[component]
pub fn EventGridOverview() -> impl IntoView {
	let active = RwSignal::new(0usize);

	view! {
		<Panel title="🏗️ Key Concepts in Event Grid">
			<div class="grid md:grid-cols-4 gap-4 mb-8">
				{BUILDING_BLOCKS
					.iter()
					.enumerate()
					.map(|(i, block)| {
						let s = swatch_for(block.hue);
						view! {
							<button
								class=move || if active.get() == i {
									format!("p-4 rounded-lg border-2 transition-all duration-300 text-left {} {} scale-105", s.border, s.tint)
								} else {
									"p-4 rounded-lg border-2 transition-all duration-300 text-left border-gray-200 bg-gray-50 hover:bg-gray-100".to_string()
								}
								on:click=move |_| active.set(i)
							>
								<div class=format!("w-12 h-12 {} rounded-lg flex items-center justify-center mb-3", s.light)>
									<Icon glyph=block.glyph class=format!("text-2xl {}", s.text) />
								</div>
								<h4 class="font-semibold text-gray-900 mb-1">{block.title}</h4>
								<p class="text-sm text-gray-600">{block.subtitle}</p>
							</button>
						}
					})
					.collect_view()}
			</div>
			{move || view! { <ConceptDetail concept=&BUILDING_BLOCKS[active.get()] /> }}
			<div class="mt-6">
				<Callout glyph=Glyph::Zap title="What is Event Grid?">
					"A fully managed event routing service that helps build reactive, event-driven applications without custom pipelines or scaling concerns."
				</Callout>
			</div>
		</Panel>
	}
}

const CONCEPTS: &[Concept] = &[
	Concept {
		title: "Event Sources",
		subtitle: "Producers",
		glyph: Glyph::Database,
		hue: "blue",
		description: "Services that generate events",
		examples: &[
			"Azure Blob Storage → BlobCreated",
			"Azure Resource Manager → ResourceUpdated",
			"Custom Applications → Custom Events",
			"Azure Key Vault → SecretUpdated",
		],
	},
	Concept {
		title: "Event Topics",
		subtitle: "Mailboxes",
		glyph: Glyph::Mail,
		hue: "yellow",
		description: "Endpoints where events are published",
		examples: &[
			"System Topics (Built-in Azure services)",
			"Custom Topics (Your applications)",
			"Partner Topics (Third-party services)",
			"Domain Topics (Grouped by domain)",
		],
	},
	Concept {
		title: "Event Subscriptions",
		subtitle: "Listeners",
		glyph: Glyph::Users,
		hue: "green",
		description: "Define who listens to which events",
		examples: &[
			"Filter by event type",
			"Filter by subject prefix",
			"Advanced filtering with operators",
			"Dead letter configuration",
		],
	},
	Concept {
		title: "Event Handlers",
		subtitle: "Consumers",
		glyph: Glyph::Settings,
		hue: "purple",
		description: "Services that process the events",
		examples: &[
			"Azure Functions → Serverless code",
			"Logic Apps → Workflow orchestration",
			"Event Hubs → Stream processing",
			"Webhooks → External endpoints",
		],
	},
];

/// Same building blocks as [`EventGridOverview`], rotating on their own.
#[component]
pub fn EventGridConcepts() -> impl IntoView {
	let active = use_round_robin(CONCEPTS.len(), CONCEPTS_PERIOD_MS);

	view! {
		<Panel title="🏗️ Key Concepts in Event Grid">
			<div class="grid md:grid-cols-4 gap-6 mb-8">
				{CONCEPTS
					.iter()
					.enumerate()
					.map(|(i, concept)| {
						let s = swatch_for(concept.hue);
						view! {
							<div
								class=move || if active.is(i) {
									format!("p-6 rounded-lg border-2 transition-all duration-500 cursor-pointer {} {} scale-105", s.border, s.tint)
								} else {
									"p-6 rounded-lg border-2 transition-all duration-500 cursor-pointer border-gray-200 bg-gray-50 hover:bg-gray-100".to_string()
								}
								on:click=move |_| active.select(i)
							>
								<Icon
									glyph=concept.glyph
									class=Signal::derive(move || classes("text-4xl mb-4", pick(active.is(i), s.text, "text-gray-500")))
								/>
								<h4 class="font-semibold text-gray-900 mb-1">{concept.title}</h4>
								<p class="text-sm text-gray-600 mb-2">{concept.subtitle}</p>
								<p class="text-xs text-gray-500">{concept.description}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
			{move || view! { <ConceptDetail concept=&CONCEPTS[active.index()] /> }}
		</Panel>
	}
}

struct FlowStep {
	title: &'static str,
	description: &'static str,
	glyph: Glyph,
	color: &'static str,
	example: &'static str,
}

const FLOW_STEPS: &[FlowStep] = &[
	FlowStep {
		title: "Event Source",
		description: "Generates an event",
		glyph: Glyph::Database,
		color: "bg-blue-500",
		example: "Blob Storage fires \"BlobCreated\"",
	},
	FlowStep {
		title: "Event Topic",
		description: "Event published to topic",
		glyph: Glyph::Cloud,
		color: "bg-yellow-500",
		example: "Event sent to storage topic",
	},
	FlowStep {
		title: "Subscription Matching",
		description: "Event Grid matches subscriptions",
		glyph: Glyph::Filter,
		color: "bg-purple-500",
		example: "Filters applied, routes determined",
	},
	FlowStep {
		title: "Event Handler",
		description: "Event delivered to handler",
		glyph: Glyph::Target,
		color: "bg-green-500",
		example: "Function App processes event",
	},
];

/// Source, topic, matching and handler lit up one after another.
#[component]
pub fn EventGridFlow() -> impl IntoView {
	let active = use_round_robin(FLOW_STEPS.len(), FLOW_PERIOD_MS);

	view! {
		<Panel title="🔄 Event Flow in Event Grid">
			<div class="flex items-center justify-between max-w-5xl mx-auto mb-8">
				{FLOW_STEPS
					.iter()
					.enumerate()
					.map(|(i, step)| {
						let on = move || active.is(i);
						view! {
							<div class="flex items-center">
								<div class="flex flex-col items-center space-y-4">
									<div class=move || classes(
										"w-20 h-20 rounded-full flex items-center justify-center transition-all duration-500",
										&if on() { format!("{} scale-110 shadow-lg", step.color) } else { "bg-gray-200 scale-100".to_string() },
									)>
										<Icon glyph=step.glyph class=Signal::derive(move || classes("text-4xl", pick(on(), "text-white", "text-gray-500"))) />
									</div>
									<div class="text-center max-w-32">
										<div class=move || classes("font-semibold transition-colors", pick(on(), "text-gray-900", "text-gray-500"))>
											{step.title}
										</div>
										<div class="text-xs text-gray-600 mt-1">{step.description}</div>
										<Show when=on>
											<div class="text-xs text-blue-600 mt-2 animate-pulse font-medium">{step.example}</div>
										</Show>
									</div>
								</div>
								{(i + 1 < FLOW_STEPS.len()).then(|| view! {
									<div class="mx-6">
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

			<div class="bg-gradient-to-r from-blue-50 to-indigo-50 p-6 rounded-lg border border-blue-200">
				<h4 class="text-lg font-semibold text-blue-900 mb-4">"Step-by-Step Process"</h4>
				<div class="grid md:grid-cols-2 gap-4">
					{FLOW_STEPS
						.iter()
						.enumerate()
						.map(|(i, step)| {
							let done = move || active.reached(i);
							view! {
								<div class=move || classes("p-4 rounded-lg border transition-all duration-300", pick(done(), "bg-white border-blue-300", "bg-blue-50 border-blue-200"))>
									<div class="flex items-center space-x-3">
										<div class=move || classes("w-8 h-8 rounded-full flex items-center justify-center", pick(done(), step.color, "bg-gray-300"))>
											<span class="text-white font-bold text-sm">{i + 1}</span>
										</div>
										<div>
											<div class="font-medium text-gray-900">{step.title}</div>
											<div class="text-sm text-gray-600">{step.description}</div>
										</div>
									</div>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>

			<div class="mt-6">
				<Callout glyph=Glyph::Target title="Key Insight" hue="green">
					"It's that simple, like a routing engine for events. Event Grid handles all the complexity of reliable delivery, scaling, and filtering automatically."
				</Callout>
			</div>
		</Panel>
	}
}

const PHOTO_STEPS: &[FlowStep] = &[
	FlowStep {
		title: "Photo Upload",
		description: "User uploads new photo",
		glyph: Glyph::Upload,
		color: "bg-blue-500",
		example: "Blob Storage fires \"BlobCreated\" event",
	},
	FlowStep {
		title: "Event Grid",
		description: "Receives and routes event",
		glyph: Glyph::Arrow,
		color: "bg-yellow-500",
		example: "Event Grid processes the event",
	},
	FlowStep {
		title: "Multiple Consumers",
		description: "Parallel processing begins",
		glyph: Glyph::Arrow,
		color: "bg-purple-500",
		example: "Event sent to all subscribers",
	},
];

const PHOTO_CONSUMERS: &[(&str, &str, Glyph, &str)] = &[
	("Function App", "Resize photo into thumbnails", Glyph::Resize, "bg-green-500"),
	("Logic App", "Notify user's friends", Glyph::Bell, "bg-orange-500"),
	("AI Service", "Tag image for search", Glyph::Brain, "bg-pink-500"),
];

/// One upload fanning out to three independent consumers.
#[component]
pub fn PhotoSharingExample() -> impl IntoView {
	let active = use_round_robin(PHOTO_STEPS.len(), PHOTO_PERIOD_MS);
	let fanned_out = move || active.reached(PHOTO_STEPS.len() - 1);

	view! {
		<Panel title="📸 Real-World Example: Photo-Sharing App">
			<div class="grid md:grid-cols-2 gap-8">
				<div class="bg-gradient-to-r from-blue-50 to-indigo-50 p-6 rounded-lg border border-blue-200">
					<h4 class="text-lg font-semibold text-blue-900 mb-4">"Event Flow"</h4>
					<div class="space-y-4">
						{PHOTO_STEPS
							.iter()
							.enumerate()
							.map(|(i, step)| {
								let done = move || active.reached(i);
								view! {
									<div class=move || classes("p-4 rounded-lg border-2 transition-all duration-500", pick(done(), "border-blue-300 bg-blue-100", "border-gray-200 bg-gray-50"))>
										<div class="flex items-center space-x-3">
											<div class=move || classes("w-10 h-10 rounded-full flex items-center justify-center", pick(done(), step.color, "bg-gray-300"))>
												<Icon glyph=step.glyph class="w-5 h-5 text-white" />
											</div>
											<div>
												<div class="font-medium text-gray-900">{step.title}</div>
												<div class="text-sm text-gray-600">{step.description}</div>
												<Show when=done>
													<div class="text-xs text-blue-600 mt-1">{step.example}</div>
												</Show>
											</div>
										</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>

				<div class="bg-gradient-to-r from-green-50 to-emerald-50 p-6 rounded-lg border border-green-200">
					<h4 class="text-lg font-semibold text-green-900 mb-4">"Event Consumers"</h4>
					<div class="space-y-4">
						{PHOTO_CONSUMERS
							.iter()
							.map(|&(title, description, glyph, color)| view! {
								<div class=move || classes("p-4 rounded-lg border transition-all duration-500", pick(fanned_out(), "border-green-300 bg-green-100", "border-gray-200 bg-gray-50"))>
									<div class="flex items-center space-x-3">
										<div class=move || classes("w-10 h-10 rounded-full flex items-center justify-center", pick(fanned_out(), color, "bg-gray-300"))>
											<Icon glyph=glyph class="w-5 h-5 text-white" />
										</div>
										<div>
											<div class="font-medium text-gray-900">{title}</div>
											<div class="text-sm text-gray-600">{description}</div>
										</div>
									</div>
									<Show when=fanned_out>
										<div class="mt-2 text-xs text-green-700 bg-green-200 px-2 py-1 rounded animate-pulse">
											"Processing in parallel..."
										</div>
									</Show>
								</div>
							})
							.collect_view()}
					</div>
				</div>
			</div>

			<div class="mt-8 p-6 bg-gradient-to-r from-purple-50 to-pink-50 rounded-lg border border-purple-200">
				<h4 class="text-lg font-semibold text-purple-900 mb-4">"🎯 Key Insight: Loose Coupling"</h4>
				<div class="grid md:grid-cols-2 gap-6">
					<div>
						<h5 class="font-semibold text-purple-900 mb-2">"Upload System Doesn't Care"</h5>
						<p class="text-purple-800 text-sm">
							"The photo upload system just fires the \"BlobCreated\" event and moves on. It has no knowledge of what happens next."
						</p>
					</div>
					<div>
						<h5 class="font-semibold text-purple-900 mb-2">"Event Grid Orchestrates"</h5>
						<p class="text-purple-800 text-sm">
							"Event Grid handles all the routing, filtering, and delivery to multiple consumers automatically and reliably."
						</p>
					</div>
				</div>
			</div>

			<div class="mt-6">
				<Callout glyph=Glyph::Image title="Scalability Benefit" hue="yellow">
					"If you need to add a new feature (like automatic backup or content moderation), just add a new subscription. No changes to the upload system required!"
				</Callout>
			</div>
		</Panel>
	}
}

const NEWS_AGENCIES: &[(&str, Glyph, &str)] = &[
	("Sports News", Glyph::Trend, "green"),
	("Finance News", Glyph::Globe, "blue"),
	("Weather Updates", Glyph::Bell, "yellow"),
];

/// A reader of the news broadcast and the feeds they filter on.
pub struct Subscriber {
	pub name: &'static str,
	pub interests: &'static [&'static str],
	glyph: Glyph,
	hue: &'static str,
	description: &'static str,
}

impl Subscriber {
	/// Whether a story from `agency` passes this subscriber's filter.
	pub fn receives(&self, agency: &str) -> bool {
		self.interests.contains(&agency)
	}
}

pub const SUBSCRIBERS: &[Subscriber] = &[
	Subscriber {
		name: "Sports Fan",
		interests: &["Sports News"],
		glyph: Glyph::Trend,
		hue: "green",
		description: "Only wants sports updates",
	},
	Subscriber {
		name: "Business Analyst",
		interests: &["Finance News", "Weather Updates"],
		glyph: Glyph::Globe,
		hue: "blue",
		description: "Needs finance and weather data",
	},
	Subscriber {
		name: "General Reader",
		interests: &["Sports News", "Finance News", "Weather Updates"],
		glyph: Glyph::Users,
		hue: "purple",
		description: "Subscribes to all news types",
	},
];

/// Event Grid as a broadcaster that only forwards what each reader asked for.
#[component]
pub fn NewsAnalogy() -> impl IntoView {
	let active = use_round_robin(SUBSCRIBERS.len(), NEWS_PERIOD_MS);

	view! {
		<Panel title="📻 Analogy: Event Grid as News Broadcaster">
			<div class="grid md:grid-cols-3 gap-8 mb-8">
				<div class="space-y-4">
					<h4 class="text-lg font-semibold text-gray-900">"📰 News Agencies"</h4>
					<p class="text-sm text-gray-600 mb-4">"(Event Sources)"</p>
					<div class="space-y-3">
						{NEWS_AGENCIES
							.iter()
							.map(|&(name, glyph, hue)| {
								let s = swatch_for(hue);
								view! {
									<div class=format!("p-4 rounded-lg border {} {}", s.border, s.light)>
										<div class="flex items-center space-x-3">
											<Icon glyph=glyph class=format!("w-5 h-5 {}", s.text) />
											<span class="font-medium text-gray-900">{name}</span>
										</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>

				<div class="flex flex-col items-center justify-center">
					<div class="w-20 h-20 bg-gradient-to-r from-blue-600 to-indigo-600 rounded-xl flex items-center justify-center mb-4">
						<Icon glyph=Glyph::Radio class="text-4xl text-white" />
					</div>
					<h4 class="text-lg font-semibold text-gray-900 mb-2">"Event Grid"</h4>
					<p class="text-sm text-gray-600 text-center mb-4">"The Broadcaster"</p>
					<div class="flex items-center space-x-2 text-sm text-blue-600">
						<Icon glyph=Glyph::Filter class="w-4 h-4" />
						<span>"Smart Filtering"</span>
					</div>
				</div>

				<div class="space-y-4">
					<h4 class="text-lg font-semibold text-gray-900">"👥 Subscribers"</h4>
					<p class="text-sm text-gray-600 mb-4">"(Event Handlers)"</p>
					<div class="space-y-3">
						{SUBSCRIBERS
							.iter()
							.enumerate()
							.map(|(i, sub)| {
								let s = swatch_for(sub.hue);
								view! {
									<div class=move || if active.is(i) {
										format!("p-4 rounded-lg border-2 transition-all duration-500 {} {} scale-105", s.border, s.light)
									} else {
										"p-4 rounded-lg border-2 transition-all duration-500 border-gray-200 bg-gray-50".to_string()
									}>
										<div class="flex items-center space-x-3 mb-2">
											<Icon glyph=sub.glyph class=Signal::derive(move || classes("w-5 h-5", pick(active.is(i), s.text, "text-gray-500"))) />
											<span class="font-medium text-gray-900">{sub.name}</span>
										</div>
										<p class="text-xs text-gray-600 mb-2">{sub.description}</p>
										<div class="flex flex-wrap gap-1">
											{sub
												.interests
												.iter()
												.map(|interest| view! {
													<span class="text-xs bg-gray-200 text-gray-700 px-2 py-1 rounded">{*interest}</span>
												})
												.collect_view()}
										</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>

			<div class="bg-gradient-to-r from-blue-50 to-indigo-50 p-6 rounded-lg border border-blue-200">
				<h4 class="font-semibold text-blue-900 mb-4">"🎯 Current Subscriber Focus"</h4>
				<div class="grid md:grid-cols-2 gap-6">
					{move || {
						let sub = &SUBSCRIBERS[active.index()];
						view! {
							<div>
								<h5 class="font-medium text-blue-800 mb-2">{sub.name}</h5>
								<p class="text-blue-700 text-sm mb-3">{sub.description}</p>
								<div class="space-y-1">
									<p class="text-xs font-medium text-blue-800">"Subscribed to:"</p>
									{NEWS_AGENCIES
										.iter()
										.filter(|(agency, ..)| sub.receives(agency))
										.map(|&(agency, ..)| view! {
											<div class="flex items-center space-x-2">
												<div class="w-2 h-2 bg-blue-500 rounded-full"></div>
												<span class="text-sm text-blue-700">{agency}</span>
											</div>
										})
										.collect_view()}
								</div>
							</div>
						}
					}}
					<div class="bg-white p-4 rounded-lg border">
						<h5 class="font-medium text-gray-900 mb-2">"Key Benefits"</h5>
						<ul class="space-y-1 text-sm text-gray-700">
							<li>"• No direct dependency on news sources"</li>
							<li>"• Only receives relevant news"</li>
							<li>"• Can change subscriptions anytime"</li>
							<li>"• Sources don't know about subscribers"</li>
						</ul>
					</div>
				</div>
			</div>

			<div class="mt-6">
				<Callout glyph=Glyph::Radio title="Perfect Analogy" hue="green">
					"Just like a news broadcaster, Event Grid receives events from various sources and delivers them to subscribers based on their interests. Everyone gets only what they care about, without direct connections between sources and consumers."
				</Callout>
			</div>
		</Panel>
	}
}

/// Something in the smart home that emits or reacts to events.
#[derive(Debug, PartialEq, Eq)]
pub struct Device {
	pub id: &'static str,
	pub name: &'static str,
	glyph: Glyph,
	hue: &'static str,
}

const fn device(id: &'static str, name: &'static str, glyph: Glyph, hue: &'static str) -> Device {
	Device { id, name, glyph, hue }
}

pub const HOME_EVENTS: &[Device] = &[
	device("motion", "Motion Detected", Glyph::Shield, "red"),
	device("light", "Light Turned On", Glyph::Bulb, "yellow"),
	device("temp", "Thermostat Adjusted", Glyph::Thermometer, "blue"),
	device("door", "Door Unlocked", Glyph::Lock, "green"),
	device("window", "Window Opened", Glyph::Home, "purple"),
	device("alarm", "Security Alarm Triggered", Glyph::Shield, "red"),
];

pub const HOME_CONSUMERS: &[Device] = &[
	device("lights", "Smart Lights", Glyph::Bulb, "yellow"),
	device("security", "Security System", Glyph::Shield, "red"),
	device("hvac", "HVAC System", Glyph::Thermometer, "blue"),
	device("mobile", "Mobile Notifications", Glyph::Phone, "green"),
	device("automation", "Home Automation", Glyph::Home, "purple"),
];

/// Subscriptions: which consumers each home event is routed to.
const ROUTES: &[(&str, &[&str])] = &[
	("motion", &["lights", "security", "mobile"]),
	("light", &["automation", "hvac"]),
	("temp", &["hvac", "mobile"]),
	("door", &["security", "lights", "mobile"]),
	("window", &["hvac", "security", "mobile"]),
	("alarm", &["security", "mobile", "lights"]),
];

fn find_device(devices: &'static [Device], id: &str) -> Option<&'static Device> {
	devices.iter().find(|d| d.id == id)
}

/// Event→consumer pairs wired up by the current selection, in event
/// selection order and then route order.
pub fn active_connections(events: &[&str], consumers: &[&str]) -> Vec<(&'static Device, &'static Device)> {
	events
		.iter()
		.filter_map(|event| ROUTES.iter().find(|(id, _)| id == event))
		.flat_map(|&(event, targets)| {
			targets
				.iter()
				.filter(|target| consumers.contains(*target))
				.filter_map(move |target| Some((find_device(HOME_EVENTS, event)?, find_device(HOME_CONSUMERS, target)?)))
		})
		.collect()
}

fn toggle(list: &mut Vec<&'static str>, id: &'static str) {
	if let Some(pos) = list.iter().position(|x| *x == id) {
		list.remove(pos);
	} else {
		list.push(id);
	}
}

/// Click events and consumers to see which connections Event Grid would make.
#[component]
pub fn SmartHomeExercise() -> impl IntoView {
	let events = RwSignal::new(Vec::<&'static str>::new());
	let consumers = RwSignal::new(Vec::<&'static str>::new());
	let connections = Memo::new(move |_| events.with(|e| consumers.with(|c| active_connections(e, c))));

	let picker = move |devices: &'static [Device], selection: RwSignal<Vec<&'static str>>| {
		devices
			.iter()
			.map(move |d| {
				let s = swatch_for(d.hue);
				let on = move || selection.with(|sel| sel.contains(&d.id));
				view! {
					<button
						class=move || if on() {
							format!("w-full p-4 rounded-lg border-2 transition-all duration-200 {} {} scale-105", s.border, s.light)
						} else {
							"w-full p-4 rounded-lg border-2 transition-all duration-200 border-gray-200 bg-gray-50 hover:bg-gray-100".to_string()
						}
						on:click=move |_| selection.update(|sel| toggle(sel, d.id))
					>
						<div class="flex items-center space-x-3">
							<Icon glyph=d.glyph class=Signal::derive(move || classes("w-5 h-5", pick(on(), s.text, "text-gray-500"))) />
							<span class="font-medium text-gray-900">{d.name}</span>
						</div>
					</button>
				}
			})
			.collect_view()
	};

	view! {
		<Panel title="🏠 Interactive Exercise: Smart Home System">
			<p class="text-gray-700 mb-8">
				"Click on events and consumers to see how Event Grid would connect them in a smart home system:"
			</p>
			<div class="grid lg:grid-cols-3 gap-8">
				<div class="space-y-4">
					<h4 class="text-lg font-semibold text-gray-900 mb-4">"📡 Event Sources"</h4>
					<div class="space-y-3">{picker(HOME_EVENTS, events)}</div>
				</div>
				<div class="flex flex-col items-center justify-center">
					<div class="w-24 h-24 bg-gradient-to-r from-blue-600 to-indigo-600 rounded-xl flex items-center justify-center mb-4">
						<Icon glyph=Glyph::Zap class="text-5xl text-white" />
					</div>
					<h4 class="text-lg font-semibold text-gray-900 mb-2">"Event Grid"</h4>
					<p class="text-sm text-gray-600 text-center">"Routes events to consumers"</p>
					<Show when=move || connections.with(|c| !c.is_empty())>
						<div class="mt-4 p-3 bg-blue-50 rounded-lg border border-blue-200">
							<p class="text-blue-800 text-sm font-medium">
								{move || connections.with(Vec::len)}
								" active connections"
							</p>
						</div>
					</Show>
				</div>
				<div class="space-y-4">
					<h4 class="text-lg font-semibold text-gray-900 mb-4">"🎯 Event Consumers"</h4>
					<div class="space-y-3">{picker(HOME_CONSUMERS, consumers)}</div>
				</div>
			</div>

			<Show when=move || connections.with(|c| !c.is_empty())>
				<div class="mt-8 p-6 bg-gradient-to-r from-green-50 to-emerald-50 rounded-lg border border-green-200">
					<h4 class="font-semibold text-green-900 mb-4">"🔗 Active Event Connections"</h4>
					<div class="grid md:grid-cols-2 gap-4">
						{move || {
							connections
								.get()
								.into_iter()
								.map(|(event, consumer)| view! {
									<div class="flex items-center space-x-3 bg-white p-3 rounded-lg border">
										<Icon glyph=event.glyph class=format!("w-4 h-4 {}", swatch_for(event.hue).text) />
										<span class="text-sm text-gray-700">{event.name}</span>
										<span class="text-gray-400">"→"</span>
										<Icon glyph=consumer.glyph class=format!("w-4 h-4 {}", swatch_for(consumer.hue).text) />
										<span class="text-sm text-gray-700">{consumer.name}</span>
									</div>
								})
								.collect_view()
						}}
					</div>
				</div>
			</Show>

			<div class="mt-6">
				<Callout glyph=Glyph::Home title="Event Grid Benefits" hue="yellow">
					"Notice how Event Grid connects the dots: one motion detection event can trigger lights, security alerts, and mobile notifications simultaneously, all without the motion sensor knowing about these systems."
				</Callout>
			</div>
		</Panel>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(pairs: &[(&Device, &Device)]) -> Vec<(&'static str, &'static str)> {
		pairs.iter().map(|(e, c)| (e.id, c.id)).collect()
	}

	#[test]
	fn nothing_selected_means_no_connections() {
		assert!(active_connections(&[], &[]).is_empty());
		assert!(active_connections(&["motion"], &[]).is_empty());
		assert!(active_connections(&[], &["lights"]).is_empty());
	}

	#[test]
	fn motion_reaches_every_selected_subscriber() {
		let pairs = active_connections(&["motion"], &["mobile", "lights", "hvac"]);
		assert_eq!(ids(&pairs), vec![("motion", "lights"), ("motion", "mobile")]);
	}

	#[test]
	fn connections_follow_event_selection_order() {
		let pairs = active_connections(&["temp", "light"], &["hvac", "automation"]);
		assert_eq!(
			ids(&pairs),
			vec![("temp", "hvac"), ("light", "automation"), ("light", "hvac")]
		);
	}

	#[test]
	fn unknown_ids_are_ignored() {
		assert!(active_connections(&["garage"], &["lights"]).is_empty());
		assert!(active_connections(&["motion"], &["sprinklers"]).is_empty());
	}

	#[test]
	fn every_route_points_at_known_devices() {
		for (event, targets) in ROUTES {
			assert!(find_device(HOME_EVENTS, event).is_some(), "{event}");
			for target in *targets {
				assert!(find_device(HOME_CONSUMERS, target).is_some(), "{target}");
			}
		}
	}

	#[test]
	fn toggling_twice_deselects() {
		let mut sel = vec![];
		toggle(&mut sel, "door");
		toggle(&mut sel, "motion");
		assert_eq!(sel, vec!["door", "motion"]);
		toggle(&mut sel, "door");
		assert_eq!(sel, vec!["motion"]);
	}

	#[test]
	fn subscribers_only_receive_their_feeds() {
		let fan = &SUBSCRIBERS[0];
		assert!(fan.receives("Sports News"));
		assert!(!fan.receives("Finance News"));
		let reader = &SUBSCRIBERS[2];
		assert!(NEWS_AGENCIES.iter().all(|(agency, ..)| reader.receives(agency)));
	}
}
