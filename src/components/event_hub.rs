//! Widgets for the Event Hub overview lesson.

use leptos::prelude::*;

use crate::components::characteristics::group_thousands;
use crate::components::common::{Callout, Panel, classes, pick};
use crate::components::icon::{Glyph, Icon};
use crate::palette::swatch_for;
use crate::timing::{use_interval, use_round_robin};

const FEATURE_PERIOD_MS: u64 = 2500;
const ARCHITECTURE_PERIOD_MS: u64 = 2000;
const RIDE_STREAM_PERIOD_MS: u64 = 1500;
const COUNTER_PERIOD_MS: u64 = 100;

struct Feature {
	glyph: Glyph,
	title: &'static str,
	description: &'static str,
	hue: &'static str,
	detail: &'static str,
}

const FEATURES: &[Feature] = &[
	Feature {
		glyph: Glyph::Zap,
		title: "High-Throughput Ingestion",
		description: "Millions of events per second",
		hue: "blue",
		detail: "Designed for massive scale workloads like telemetry and IoT",
	},
	Feature {
		glyph: Glyph::Database,
		title: "Partitioned Data Stream",
		description: "Scalable parallel processing",
		hue: "green",
		detail: "Multiple partitions enable independent consumer processing",
	},
	Feature {
		glyph: Glyph::Clock,
		title: "Low Latency",
		description: "Events available in milliseconds",
		hue: "purple",
		detail: "Perfect for real-time dashboards and fraud detection",
	},
	Feature {
		glyph: Glyph::Chart,
		title: "Analytics Integration",
		description: "Works with Stream Analytics, Spark",
		hue: "orange",
		detail: "Seamless integration with Azure analytics tools",
	},
	Feature {
		glyph: Glyph::Shield,
		title: "Retention Window",
		description: "Configurable storage up to 7 days",
		hue: "red",
		detail: "Buffer time for downstream processing systems",
	},
	Feature {
		glyph: Glyph::Wifi,
		title: "Capture Feature",
		description: "Auto-archive to Blob Storage",
		hue: "indigo",
		detail: "Safety net ensuring no data is lost",
	},
];

const AIRPORT: &[(&str, &str, &str, &str, &str, &str)] = &[
	("✈️", "bg-orange-100", "text-orange-900", "text-orange-700", "Passengers Arrive", "Thousands per hour"),
	("🏢", "bg-red-100", "text-red-900", "text-red-700", "Arrivals Terminal", "Event Hub ingestion"),
	("🚌", "bg-yellow-100", "text-yellow-900", "text-yellow-700", "Distribution", "To various destinations"),
];

/// Event Hub's headline features, highlighted in turn.
#[component]
pub fn EventHubOverview() -> impl IntoView {
	let active = use_round_robin(FEATURES.len(), FEATURE_PERIOD_MS);

	view! {
		<div class="bg-white p-8 rounded-xl shadow-sm border">
			<div class="text-center mb-8">
				<div class="w-20 h-20 bg-gradient-to-r from-orange-600 to-red-600 rounded-xl flex items-center justify-center mx-auto mb-4">
					<Icon glyph=Glyph::Zap class="text-4xl text-white" />
				</div>
				<h3 class="text-2xl font-bold text-gray-900 mb-2">"Azure Event Hub"</h3>
				<p class="text-lg text-gray-600">"Big Data Streaming Platform & Event Ingestion Service"</p>
				<div class="mt-4 inline-block bg-gradient-to-r from-orange-100 to-red-100 px-4 py-2 rounded-lg border border-orange-200">
					<p class="text-orange-800 font-medium">"The Massive Firehose of Data"</p>
				</div>
			</div>

			<div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
				{FEATURES
					.iter()
					.enumerate()
					.map(|(i, feature)| {
						let s = swatch_for(feature.hue);
						let on = move || active.is(i);
						view! {
							<div class=move || if on() {
								format!("p-6 rounded-lg border-2 transition-all duration-500 {} {} scale-105", s.border, s.light)
							} else {
								"p-6 rounded-lg border-2 transition-all duration-500 border-gray-200 bg-gray-50".to_string()
							}>
								<Icon glyph=feature.glyph class=Signal::derive(move || classes("text-3xl mb-4", pick(on(), s.text, "text-gray-500"))) />
								<h4 class="font-semibold text-gray-900 mb-2">{feature.title}</h4>
								<p class="text-sm text-gray-600 mb-2">{feature.description}</p>
								<Show when=on>
									<p class="text-xs text-gray-500 animate-pulse">{feature.detail}</p>
								</Show>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="bg-gradient-to-r from-orange-50 to-red-50 p-6 rounded-lg border border-orange-200">
				<h4 class="font-semibold text-orange-900 mb-4">"🏢 Airport Analogy"</h4>
				<div class="grid md:grid-cols-3 gap-4">
					{AIRPORT
						.iter()
						.map(|&(emoji, bg, heading, body, title, text)| view! {
							<div class="text-center">
								<div class=format!("w-12 h-12 {bg} rounded-lg flex items-center justify-center mx-auto mb-2")>
									<span class="text-2xl">{emoji}</span>
								</div>
								<h5 class=format!("font-medium {heading}")>{title}</h5>
								<p class=format!("text-sm {body}")>{text}</p>
							</div>
						})
						.collect_view()}
				</div>
			</div>
		</div>
	}
}

struct Stage {
	title: &'static str,
	description: &'static str,
	glyph: Glyph,
	hue: &'static str,
	examples: [&'static str; 2],
}

const STAGES: &[Stage] = &[
	Stage {
		title: "Event Producers",
		description: "Applications, IoT devices, systems",
		glyph: Glyph::Phone,
		hue: "blue",
		examples: ["IoT Sensors", "Web Apps"],
	},
	Stage {
		title: "Event Hub",
		description: "Ingestion pipeline with partitions",
		glyph: Glyph::Zap,
		hue: "orange",
		examples: ["Partition 0", "Partition 1"],
	},
	Stage {
		title: "Event Consumers",
		description: "Services that read events",
		glyph: Glyph::Database,
		hue: "green",
		examples: ["Azure Functions", "Stream Analytics"],
	},
	Stage {
		title: "Storage & Analytics",
		description: "Final destination for processing",
		glyph: Glyph::Chart,
		hue: "purple",
		examples: ["Data Lake", "SQL Database"],
	},
];

/// Producer to storage pipeline filling up stage by stage.
#[component]
pub fn EventHubArchitecture() -> impl IntoView {
	let progress = use_round_robin(STAGES.len(), ARCHITECTURE_PERIOD_MS);

	view! {
		<Panel title="🏗️ Event Hub Architecture Flow">
			<div class="flex items-center justify-between max-w-6xl mx-auto mb-8">
				{STAGES
					.iter()
					.enumerate()
					.map(|(i, stage)| {
						let s = swatch_for(stage.hue);
						let lit = move || progress.reached(i);
						view! {
							<div class="flex items-center">
								<div class="flex flex-col items-center space-y-4">
									<div class=move || if lit() {
										format!("w-20 h-20 rounded-xl flex items-center justify-center transition-all duration-500 {} scale-110 shadow-lg", s.solid)
									} else {
										"w-20 h-20 rounded-xl flex items-center justify-center transition-all duration-500 bg-gray-200 scale-100".to_string()
									}>
										<Icon glyph=stage.glyph class=Signal::derive(move || classes("text-4xl", pick(lit(), "text-white", "text-gray-500"))) />
									</div>
									<div class="text-center max-w-32">
										<div class=move || classes("font-semibold transition-colors", pick(lit(), "text-gray-900", "text-gray-500"))>
											{stage.title}
										</div>
										<div class="text-xs text-gray-600 mt-1">{stage.description}</div>
										<Show when=lit>
											<div class="mt-2 space-y-1">
												{stage
													.examples
													.iter()
													.map(|example| view! { <div class="text-xs bg-gray-100 px-2 py-1 rounded">{*example}</div> })
													.collect_view()}
											</div>
										</Show>
									</div>
								</div>
								{(i + 1 < STAGES.len()).then(|| view! {
									<div class="mx-8">
										<Icon
											glyph=Glyph::Arrow
											class=Signal::derive(move || classes("text-3xl transition-colors", pick(progress.reached(i + 1), "text-orange-500 animate-pulse", "text-gray-300")))
										/>
									</div>
								})}
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="bg-gradient-to-r from-orange-50 to-red-50 p-6 rounded-lg border border-orange-200">
				<h4 class="font-semibold text-orange-900 mb-4">"Data Flow Summary"</h4>
				<div class="text-sm text-orange-800">
					<strong>"Producer → Event Hub → Consumer → Storage/Analytics"</strong>
				</div>
				<p class="text-orange-700 text-sm mt-2">
					"Events flow through partitions for parallel processing, enabling millions of events per second throughput."
				</p>
			</div>
		</Panel>
	}
}

struct UseCase {
	title: &'static str,
	glyph: Glyph,
	hue: &'static str,
	description: &'static str,
	scenario: &'static str,
	benefits: [&'static str; 3],
	scale: &'static str,
}

const USE_CASES: &[UseCase] = &[
	UseCase {
		title: "IoT Telemetry",
		glyph: Glyph::Wifi,
		hue: "blue",
		description: "Millions of smart meters and sensors streaming data continuously",
		scenario: "Smart city infrastructure monitoring temperature, traffic, and energy usage",
		benefits: ["Anomaly detection", "Predictive maintenance", "Real-time optimization"],
		scale: "10M+ events/sec",
	},
	UseCase {
		title: "Application Monitoring",
		glyph: Glyph::Monitor,
		hue: "green",
		description: "Logging and telemetry from distributed applications",
		scenario: "Microservices architecture sending logs, metrics, and traces",
		benefits: ["Real-time dashboards", "Alert systems", "Performance insights"],
		scale: "1M+ events/sec",
	},
	UseCase {
		title: "Clickstream Analytics",
		glyph: Glyph::Cart,
		hue: "purple",
		description: "E-commerce sites tracking every user interaction",
		scenario: "Online retailer capturing clicks, scrolls, purchases, and cart events",
		benefits: ["Real-time personalization", "Product recommendations", "User behavior analysis"],
		scale: "5M+ events/sec",
	},
	UseCase {
		title: "Fraud Detection",
		glyph: Glyph::Shield,
		hue: "red",
		description: "Banks processing transactions in real-time",
		scenario: "Payment processor analyzing transaction patterns for suspicious activity",
		benefits: ["Instant fraud alerts", "Risk scoring", "Transaction blocking"],
		scale: "100K+ events/sec",
	},
];

/// Where Event Hub fits, one scenario at a time.
#[component]
pub fn EventHubUseCases() -> impl IntoView {
	let active = RwSignal::new(0usize);

	view! {
		<Panel title="🎯 Event Hub Use Cases" subtitle="Where Event Hub shines in real-world scenarios">
			<div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
				{USE_CASES
					.iter()
					.enumerate()
					.map(|(i, case)| {
						let s = swatch_for(case.hue);
						let on = move || active.get() == i;
						view! {
							<button
								class=move || if on() {
									format!("p-4 rounded-lg border-2 transition-all duration-300 text-left {} {} scale-105", s.border, s.light)
								} else {
									"p-4 rounded-lg border-2 transition-all duration-300 text-left border-gray-200 bg-gray-50 hover:bg-gray-100".to_string()
								}
								on:click=move |_| active.set(i)
							>
								<Icon glyph=case.glyph class=Signal::derive(move || classes("text-3xl mb-3", pick(on(), s.text, "text-gray-500"))) />
								<h4 class="font-semibold text-gray-900 mb-2">{case.title}</h4>
								<div class="text-xs bg-gray-200 px-2 py-1 rounded mb-2">{case.scale}</div>
							</button>
						}
					})
					.collect_view()}
			</div>

			{move || {
				let case = &USE_CASES[active.get()];
				let s = swatch_for(case.hue);
				view! {
					<div class="bg-gradient-to-r from-gray-50 to-gray-100 p-6 rounded-lg border">
						<div class="flex items-start space-x-4">
							<div class=format!("w-16 h-16 {} rounded-lg flex items-center justify-center", s.light)>
								<Icon glyph=case.glyph class=format!("text-3xl {}", s.text) />
							</div>
							<div class="flex-1">
								<h4 class="text-xl font-semibold text-gray-900 mb-2">{case.title}</h4>
								<p class="text-gray-700 mb-4">{case.description}</p>
								<div class="grid md:grid-cols-2 gap-6">
									<div>
										<h5 class="font-semibold text-gray-900 mb-2">"Scenario:"</h5>
										<p class="text-gray-700 text-sm mb-4">{case.scenario}</p>
										<div class="flex items-center space-x-2">
											<Icon glyph=Glyph::Trend class="w-4 h-4 text-orange-600" />
											<span class="text-sm font-medium text-orange-800">"Scale: " {case.scale}</span>
										</div>
									</div>
									<div>
										<h5 class="font-semibold text-gray-900 mb-2">"Key Benefits:"</h5>
										<ul class="space-y-1">
											{case
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

const RIDE_STREAM: &[(&str, Glyph, &str)] = &[
	("Ride Requested", Glyph::Users, "blue"),
	("Driver Accepts", Glyph::Car, "green"),
	("GPS Updates", Glyph::Pin, "purple"),
	("Payment Processed", Glyph::Card, "orange"),
];

const REAL_TIME_FEATURES: &[&str] = &[
	"Real-time driver assignment",
	"Dynamic surge pricing",
	"Route optimization",
	"Live tracking updates",
];

/// Next value of the free-running event counter for a random draw in `[0, 1)`.
pub fn next_event_count(current: u64, draw: f64) -> u64 {
	current + (draw.clamp(0.0, 1.0) * 1000.0).floor().min(999.0) as u64 + 500
}

/// A ride-hailing stream with a running throughput counter.
#[component]
pub fn UberExample() -> impl IntoView {
	let active = use_round_robin(RIDE_STREAM.len(), RIDE_STREAM_PERIOD_MS);
	let count = RwSignal::new(0u64);
	use_interval(COUNTER_PERIOD_MS, move || {
		count.update(|n| *n = next_event_count(*n, js_sys::Math::random()));
	});

	view! {
		<Panel title="🚗 Real-World Example: Uber-like Service">
			<div class="grid md:grid-cols-2 gap-8">
				<div class="bg-gradient-to-r from-blue-50 to-indigo-50 p-6 rounded-lg border border-blue-200">
					<h4 class="text-lg font-semibold text-blue-900 mb-4">"📊 Event Stream"</h4>
					<div class="space-y-3">
						{RIDE_STREAM
							.iter()
							.enumerate()
							.map(|(i, &(title, glyph, hue))| {
								let s = swatch_for(hue);
								let on = move || active.is(i);
								view! {
									<div class=move || if on() {
										format!("p-4 rounded-lg border-2 transition-all duration-300 {} {} scale-105", s.light, s.border)
									} else {
										"p-4 rounded-lg border-2 transition-all duration-300 border-gray-200 bg-gray-50".to_string()
									}>
										<div class="flex items-center space-x-3">
											<div class=move || classes("w-10 h-10 rounded-full flex items-center justify-center", pick(on(), s.solid, "bg-gray-300"))>
												<Icon glyph=glyph class="w-5 h-5 text-white" />
											</div>
											<div>
												<div class="font-medium text-gray-900">{title}</div>
												<Show when=on>
													<div class="text-xs text-blue-600 mt-1 animate-pulse">"Streaming to Event Hub..."</div>
												</Show>
											</div>
										</div>
									</div>
								}
							})
							.collect_view()}
					</div>
					<div class="mt-4 p-3 bg-white rounded-lg border">
						<div class="flex items-center justify-between">
							<span class="text-sm font-medium text-gray-700">"Events/sec:"</span>
							<div class="flex items-center space-x-2">
								<Icon glyph=Glyph::Trend class="w-4 h-4 text-green-600" />
								<span class="font-bold text-green-600">{move || group_thousands(count.get())}</span>
							</div>
						</div>
					</div>
				</div>

				<div class="bg-gradient-to-r from-green-50 to-emerald-50 p-6 rounded-lg border border-green-200">
					<h4 class="text-lg font-semibold text-green-900 mb-4">"⚡ Real-Time Capabilities"</h4>
					<div class="space-y-3">
						{REAL_TIME_FEATURES
							.iter()
							.map(|feature| view! {
								<div class="flex items-center space-x-3">
									<div class="w-2 h-2 bg-green-500 rounded-full"></div>
									<span class="text-green-800">{*feature}</span>
								</div>
							})
							.collect_view()}
					</div>
					<div class="mt-4 p-4 bg-white rounded-lg border">
						<h5 class="font-semibold text-gray-900 mb-2">"Without Event Hub:"</h5>
						<p class="text-red-700 text-sm">
							"❌ Batch processing only" <br />
							"❌ No real-time driver locations" <br />
							"❌ Delayed surge pricing" <br />
							"❌ Poor user experience"
						</p>
					</div>
					<div class="mt-4 p-4 bg-green-100 rounded-lg border border-green-200">
						<h5 class="font-semibold text-green-900 mb-2">"With Event Hub:"</h5>
						<p class="text-green-800 text-sm">
							"✅ Real-time event streaming" <br />
							"✅ Instant driver assignment" <br />
							"✅ Dynamic pricing updates" <br />
							"✅ Excellent user experience"
						</p>
					</div>
				</div>
			</div>

			<div class="mt-8">
				<Callout glyph=Glyph::Zap title="Event Hub Impact" hue="orange">
					"Event Hub enables real-time responsiveness that's critical for ride-hailing services. Without streaming data processing, users would experience delays in driver matching, pricing updates, and location tracking, making the service unusable."
				</Callout>
			</div>
		</Panel>
	}
}

struct Aspect {
	aspect: &'static str,
	event_hub: &'static str,
	kafka: &'static str,
	glyph: Glyph,
	event_hub_wins: bool,
}

const ASPECTS: &[Aspect] = &[
	Aspect { aspect: "Management", event_hub: "Fully managed by Azure", kafka: "Self-managed clusters", glyph: Glyph::Settings, event_hub_wins: true },
	Aspect { aspect: "Scalability", event_hub: "Auto-scaling built-in", kafka: "Manual cluster scaling", glyph: Glyph::Zap, event_hub_wins: true },
	Aspect { aspect: "Compatibility", event_hub: "Kafka protocol compatible", kafka: "Native Kafka protocol", glyph: Glyph::Cloud, event_hub_wins: false },
	Aspect { aspect: "Security", event_hub: "Azure AD integration", kafka: "Custom security setup", glyph: Glyph::Shield, event_hub_wins: true },
	Aspect { aspect: "Cost", event_hub: "Pay-per-use model", kafka: "Infrastructure + maintenance", glyph: Glyph::Dollar, event_hub_wins: true },
	Aspect { aspect: "Deployment", event_hub: "Cloud-native service", kafka: "On-premises or cloud VMs", glyph: Glyph::Server, event_hub_wins: true },
];

const WINNER: &str = "bg-green-100 text-green-800";
const NEUTRAL: &str = "bg-gray-100 text-gray-700";

/// Side-by-side comparison with Apache Kafka, one aspect highlighted.
#[component]
pub fn EventHubVsKafka() -> impl IntoView {
	let active = RwSignal::new(0usize);

	let checklist = |items: &'static [&'static str]| {
		items.iter().map(|item| view! { <li>"• " {*item}</li> }).collect_view()
	};

	view! {
		<Panel title="⚖️ Event Hub vs Apache Kafka">
			<div class="mb-6">
				<Callout glyph=Glyph::Cloud title="Kafka Compatibility">
					"Event Hub is Kafka-compatible, meaning existing Kafka producers and consumers can often connect without code changes."
				</Callout>
			</div>

			<div class="grid gap-4 mb-8">
				{ASPECTS
					.iter()
					.enumerate()
					.map(|(i, row)| {
						let on = move || active.get() == i;
						view! {
							<div
								class=move || classes("p-4 rounded-lg border-2 transition-all duration-300 cursor-pointer", pick(on(), "border-blue-300 bg-blue-50", "border-gray-200 bg-gray-50 hover:bg-gray-100"))
								on:click=move |_| active.set(i)
							>
								<div class="flex items-center justify-between">
									<div class="flex items-center space-x-4">
										<Icon glyph=row.glyph class=Signal::derive(move || classes("text-2xl", pick(on(), "text-blue-600", "text-gray-500"))) />
										<h4 class="font-semibold text-gray-900">{row.aspect}</h4>
									</div>
									<div class="grid grid-cols-2 gap-8 flex-1 max-w-2xl">
										<div class="text-center">
											<div class="text-sm font-medium text-blue-900 mb-1">"Event Hub"</div>
											<div class=classes("text-sm p-2 rounded", pick(row.event_hub_wins, WINNER, NEUTRAL))>{row.event_hub}</div>
										</div>
										<div class="text-center">
											<div class="text-sm font-medium text-orange-900 mb-1">"Apache Kafka"</div>
											<div class=classes("text-sm p-2 rounded", pick(!row.event_hub_wins, WINNER, NEUTRAL))>{row.kafka}</div>
										</div>
									</div>
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="grid md:grid-cols-2 gap-6">
				<div class="bg-gradient-to-r from-blue-50 to-indigo-50 p-6 rounded-lg border border-blue-200">
					<h4 class="font-semibold text-blue-900 mb-4">"✅ Choose Event Hub When:"</h4>
					<ul class="space-y-2 text-blue-800 text-sm">
						{checklist(&[
							"You want fully managed service",
							"Auto-scaling is important",
							"Azure ecosystem integration needed",
							"Minimal operational overhead desired",
							"Pay-per-use pricing preferred",
						])}
					</ul>
				</div>
				<div class="bg-gradient-to-r from-orange-50 to-red-50 p-6 rounded-lg border border-orange-200">
					<h4 class="font-semibold text-orange-900 mb-4">"⚠️ Choose Kafka When:"</h4>
					<ul class="space-y-2 text-orange-800 text-sm">
						{checklist(&[
							"Full control over configuration needed",
							"On-premises deployment required",
							"Custom Kafka features essential",
							"Multi-cloud strategy in place",
							"Existing Kafka expertise available",
						])}
					</ul>
				</div>
			</div>

			<div class="mt-6">
				<Callout glyph=Glyph::Zap title="Migration Path" hue="green">
					"Event Hub provides \"Kafka as a Service\": enterprises can migrate existing Kafka workloads to Azure without rewriting applications, while gaining managed service benefits."
				</Callout>
			</div>
		</Panel>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counter_grows_by_500_to_1499_per_tick() {
		assert_eq!(next_event_count(0, 0.0), 500);
		assert_eq!(next_event_count(0, 0.4999), 999);
		assert_eq!(next_event_count(10, 0.9999), 10 + 999 + 500);
	}

	#[test]
	fn out_of_range_draws_are_clamped() {
		assert_eq!(next_event_count(0, 1.0), 1499);
		assert_eq!(next_event_count(0, -3.0), 500);
	}

	#[test]
	fn kafka_only_wins_on_compatibility() {
		let kafka_wins: Vec<_> = ASPECTS.iter().filter(|a| !a.event_hub_wins).map(|a| a.aspect).collect();
		assert_eq!(kafka_wins, ["Compatibility"]);
	}
}
