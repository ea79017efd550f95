//! Choosing between Event Grid, Event Hub and Service Bus.

use leptos::prelude::*;

use crate::components::common::{classes, pick};
use crate::components::icon::{Glyph, Icon};
use crate::palette::service_badge;

struct Service {
	name: &'static str,
	use_case: &'static str,
	throughput: &'static str,
	latency: &'static str,
	pricing: &'static str,
	best_for: &'static str,
}

const SERVICES: &[Service] = &[
	Service {
		name: "Event Grid",
		use_case: "Event routing & filtering",
		throughput: "High",
		latency: "Low",
		pricing: "Pay per operation",
		best_for: "Reactive programming, serverless",
	},
	Service {
		name: "Event Hub",
		use_case: "Big data streaming",
		throughput: "Very High",
		latency: "Low",
		pricing: "Throughput units",
		best_for: "Telemetry, IoT, analytics",
	},
	Service {
		name: "Service Bus",
		use_case: "Enterprise messaging",
		throughput: "Medium",
		latency: "Medium",
		pricing: "Message operations",
		best_for: "Reliable messaging, transactions",
	},
];

fn throughput_badge(rating: &str) -> &'static str {
	match rating {
		"Very High" => "bg-green-100 text-green-800",
		"High" => "bg-blue-100 text-blue-800",
		_ => "bg-yellow-100 text-yellow-800",
	}
}

fn latency_badge(rating: &str) -> &'static str {
	match rating {
		"Low" => "bg-green-100 text-green-800",
		_ => "bg-yellow-100 text-yellow-800",
	}
}

const HEADINGS: &[&str] = &["Service", "Primary Use Case", "Throughput", "Latency", "Pricing Model", "Best For"];

/// Static feature table of the three messaging services.
#[component]
pub fn ComparisonTable() -> impl IntoView {
	let rating = |badge: &'static str, value: &'static str| {
		view! { <span class=classes("px-2 py-1 rounded-full text-xs font-medium", badge)>{value}</span> }
	};

	view! {
		<div class="overflow-x-auto">
			<table class="w-full">
				<thead>
					<tr class="border-b border-gray-200">
						{HEADINGS
							.iter()
							.map(|heading| view! { <th class="text-left py-3 px-4 font-semibold text-gray-900">{*heading}</th> })
							.collect_view()}
					</tr>
				</thead>
				<tbody>
					{SERVICES
						.iter()
						.map(|service| view! {
							<tr class="border-b border-gray-100 hover:bg-gray-50 transition-colors">
								<td class="py-4 px-4">
									<div class="font-semibold text-blue-600">{service.name}</div>
								</td>
								<td class="py-4 px-4 text-gray-700">{service.use_case}</td>
								<td class="py-4 px-4">{rating(throughput_badge(service.throughput), service.throughput)}</td>
								<td class="py-4 px-4">{rating(latency_badge(service.latency), service.latency)}</td>
								<td class="py-4 px-4 text-gray-700">{service.pricing}</td>
								<td class="py-4 px-4 text-gray-600 text-sm">{service.best_for}</td>
							</tr>
						})
						.collect_view()}
				</tbody>
			</table>
		</div>
	}
}

struct Scenario {
	title: &'static str,
	description: &'static str,
	requirements: [&'static str; 3],
	recommendation: &'static str,
	reason: &'static str,
}

const SCENARIOS: &[Scenario] = &[
	Scenario {
		title: "File Upload Notification",
		description: "Need to notify multiple services when a file is uploaded to blob storage",
		requirements: ["Lightweight notification", "Multiple subscribers", "Near real-time"],
		recommendation: "Event Grid",
		reason: "Perfect for discrete events with multiple reactive consumers",
	},
	Scenario {
		title: "IoT Sensor Data",
		description: "Millions of temperature sensors sending readings every second",
		requirements: ["High throughput", "Streaming data", "Analytics processing"],
		recommendation: "Event Hub",
		reason: "Designed for massive scale streaming telemetry data",
	},
	Scenario {
		title: "Payment Processing",
		description: "Credit card transactions that must be processed reliably",
		requirements: ["Guaranteed delivery", "Ordered processing", "No data loss"],
		recommendation: "Service Bus",
		reason: "Enterprise messaging with reliability guarantees",
	},
	Scenario {
		title: "User Activity Tracking",
		description: "Track every click and interaction on a website",
		requirements: ["High volume", "Real-time analytics", "Continuous stream"],
		recommendation: "Event Hub",
		reason: "Streaming platform for continuous user behavior data",
	},
	Scenario {
		title: "Order Workflow",
		description: "Multi-step order processing with inventory and shipping",
		requirements: ["Reliable messaging", "Transaction support", "Error handling"],
		recommendation: "Service Bus",
		reason: "Complex workflows need guaranteed message delivery",
	},
	Scenario {
		title: "Resource Monitoring",
		description: "React when Azure resources are created or deleted",
		requirements: ["Event-driven", "Automation triggers", "Serverless"],
		recommendation: "Event Grid",
		reason: "Built-in Azure resource events with serverless integration",
	},
];

/// Icon and icon colour for a recommended service.
fn recommendation_mark(service: &str) -> (Glyph, &'static str) {
	match service {
		"Event Grid" => (Glyph::Check, "text-blue-600"),
		"Event Hub" => (Glyph::Alert, "text-orange-600"),
		"Service Bus" => (Glyph::Cross, "text-green-600"),
		_ => (Glyph::Help, "text-gray-600"),
	}
}

fn recommendation_icon(service: &'static str) -> impl IntoView {
	let (glyph, tone) = recommendation_mark(service);
	view! { <Icon glyph=glyph class=format!("w-5 h-5 {tone}") /> }
}

/// Scenario picker that recommends a messaging service.
#[component]
pub fn DecisionMatrix() -> impl IntoView {
	let selected = RwSignal::new(0usize);

	view! {
		<div class="bg-white p-8 rounded-xl shadow-sm border">
			<h3 class="text-2xl font-bold mb-6 text-gray-900">"🎯 Decision Matrix: Which Service to Choose?"</h3>
			<p class="text-gray-600 mb-8">"Interactive scenarios to help you choose the right Azure messaging service"</p>

			<div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4 mb-8">
				{SCENARIOS
					.iter()
					.enumerate()
					.map(|(i, scenario)| view! {
						<button
							class=move || classes(
								"p-4 rounded-lg border-2 transition-all duration-300 text-left",
								pick(selected.get() == i, "border-purple-300 bg-purple-50 scale-105", "border-gray-200 bg-gray-50 hover:bg-gray-100"),
							)
							on:click=move |_| selected.set(i)
						>
							<h4 class="font-semibold text-gray-900 mb-2">{scenario.title}</h4>
							<p class="text-sm text-gray-600 mb-3">{scenario.description}</p>
							<div class=classes("inline-flex items-center space-x-2 px-3 py-1 rounded-full border", service_badge(scenario.recommendation))>
								{recommendation_icon(scenario.recommendation)}
								<span class="text-sm font-medium">{scenario.recommendation}</span>
							</div>
						</button>
					})
					.collect_view()}
			</div>

			{move || {
				let scenario = &SCENARIOS[selected.get()];
				view! {
					<div class="bg-gradient-to-r from-purple-50 to-pink-50 p-6 rounded-lg border border-purple-200">
						<div class="flex items-start space-x-4">
							<div class="w-16 h-16 bg-purple-100 rounded-lg flex items-center justify-center">
								{recommendation_icon(scenario.recommendation)}
							</div>
							<div class="flex-1">
								<h4 class="text-xl font-semibold text-gray-900 mb-2">{scenario.title}</h4>
								<p class="text-gray-700 mb-4">{scenario.description}</p>
								<div class="grid md:grid-cols-2 gap-6">
									<div>
										<h5 class="font-semibold text-gray-900 mb-3">"Requirements:"</h5>
										<ul class="space-y-2">
											{scenario
												.requirements
												.iter()
												.map(|requirement| view! {
													<li class="flex items-center space-x-2">
														<div class="w-2 h-2 bg-purple-500 rounded-full"></div>
														<span class="text-gray-700 text-sm">{*requirement}</span>
													</li>
												})
												.collect_view()}
										</ul>
									</div>
									<div>
										<h5 class="font-semibold text-gray-900 mb-3">"Recommendation:"</h5>
										<div class=classes("p-4 rounded-lg border", service_badge(scenario.recommendation))>
											<div class="flex items-center space-x-2 mb-2">
												{recommendation_icon(scenario.recommendation)}
												<span class="font-semibold">{scenario.recommendation}</span>
											</div>
											<p class="text-sm">{scenario.reason}</p>
										</div>
									</div>
								</div>
							</div>
						</div>
					</div>
				}
			}}

			<div class="mt-6 p-4 bg-yellow-50 rounded-lg border border-yellow-200">
				<h5 class="font-semibold text-yellow-900 mb-2">"💡 Decision Framework"</h5>
				<div class="grid md:grid-cols-3 gap-4 text-sm">
					<div class="text-blue-800">
						<strong>"Choose Event Grid when:"</strong>
						" You need lightweight notifications and reactive automation"
					</div>
					<div class="text-orange-800">
						<strong>"Choose Event Hub when:"</strong>
						" You have high-volume streaming data for analytics"
					</div>
					<div class="text-green-800">
						<strong>"Choose Service Bus when:"</strong>
						" You need guaranteed delivery and reliable workflows"
					</div>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ratings_map_to_badges() {
		assert_eq!(throughput_badge("Very High"), "bg-green-100 text-green-800");
		assert_eq!(throughput_badge("High"), "bg-blue-100 text-blue-800");
		assert_eq!(throughput_badge("Medium"), "bg-yellow-100 text-yellow-800");
		assert_eq!(latency_badge("Low"), "bg-green-100 text-green-800");
		assert_eq!(latency_badge("Medium"), "bg-yellow-100 text-yellow-800");
	}

	#[test]
	fn every_scenario_recommends_a_known_service() {
		for scenario in SCENARIOS {
			assert!(SERVICES.iter().any(|s| s.name == scenario.recommendation), "{}", scenario.title);
			assert_ne!(recommendation_mark(scenario.recommendation).0, Glyph::Help);
		}
	}

	#[test]
	fn each_service_is_recommended_twice() {
		for service in SERVICES {
			let count = SCENARIOS.iter().filter(|s| s.recommendation == service.name).count();
			assert_eq!(count, 2, "{}", service.name);
		}
	}

	#[test]
	fn unknown_service_gets_a_help_mark() {
		assert_eq!(recommendation_mark("Storage Queue"), (Glyph::Help, "text-gray-600"));
	}
}
