//! Lessons of the introductory module.

use leptos::prelude::*;

use crate::components::characteristics::{AsyncProcessingDemo, CharacteristicsBenefits, ScalabilityDemo, UberEventFlow};
use crate::components::common::{Hero, KeyTakeaways, Takeaway};
use crate::components::intro::{AnimatedFlow, EdaDefinition, RestaurantAnalogy};

const TRADITIONAL: &[&str] = &[
	"Tight coupling between services",
	"Synchronous processing",
	"System fails if one service is down",
	"Hard to scale individual components",
];

const EVENT_DRIVEN: &[&str] = &[
	"Loose coupling between services",
	"Asynchronous processing",
	"Resilient to service failures",
	"Easy to scale horizontally",
];

const FOOD_DELIVERY_EVENTS: &[&str] = &[
	"Order Placed",
	"Payment Successful",
	"Restaurant Confirmed",
	"Food Preparation Started",
	"Delivery Partner Assigned",
	"Order Picked Up",
	"Order Out for Delivery",
	"Order Delivered",
	"Rating Submitted",
];

fn bullet_list(items: &'static [&'static str], card: &'static str, dot: &'static str) -> impl IntoView {
	view! {
		<div class=format!("p-4 rounded-lg border {card}")>
			<div class="space-y-3">
				{items
					.iter()
					.map(|item| view! {
						<div class="flex items-center space-x-3">
							<div class=format!("w-3 h-3 {dot} rounded-full")></div>
							<span>{*item}</span>
						</div>
					})
					.collect_view()}
			</div>
		</div>
	}
}

/// What event-driven architecture is, with analogies.
pub fn what_is_eda() -> AnyView {
	view! {
		<div class="space-y-12">
			<Hero
				title="What is Event-Driven Architecture?"
				lead="An approach to building software where events drive the flow of communication"
				note=("💡 Think of it as:", "\"I'll call you when I need you\" instead of \"I'll keep checking if you're ready\"")
			/>

			<div class="bg-white p-8 rounded-xl shadow-sm border">
				<h3 class="text-2xl font-bold mb-6 text-gray-900">"Traditional vs Event-Driven Communication"</h3>
				<div class="grid md:grid-cols-2 gap-8">
					<div class="space-y-4">
						<h4 class="text-lg font-semibold text-red-600">"❌ Traditional Request-Response"</h4>
						{bullet_list(TRADITIONAL, "bg-red-50 border-red-200", "bg-red-500")}
					</div>
					<div class="space-y-4">
						<h4 class="text-lg font-semibold text-green-600">"✅ Event-Driven Architecture"</h4>
						{bullet_list(EVENT_DRIVEN, "bg-green-50 border-green-200", "bg-green-500")}
					</div>
				</div>
			</div>

			<EdaDefinition />
			<RestaurantAnalogy />
			<AnimatedFlow />

			<div class="bg-gradient-to-r from-orange-50 to-red-50 p-8 rounded-xl border border-orange-200">
				<h3 class="text-2xl font-bold mb-4 text-gray-900">"🍕 Exercise: Food Delivery App Events"</h3>
				<p class="text-lg text-gray-700 mb-6">
					"Think about a food delivery app like Swiggy or Uber Eats. What events would you expect?"
				</p>
				<div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
					{FOOD_DELIVERY_EVENTS
						.iter()
						.enumerate()
						.map(|(i, event)| view! {
							<div class="bg-white p-4 rounded-lg shadow-sm border flex items-center space-x-3">
								<div class="w-8 h-8 bg-orange-100 rounded-full flex items-center justify-center">
									<span class="text-orange-600 font-bold text-sm">{i + 1}</span>
								</div>
								<span class="font-medium text-gray-900">{*event}</span>
							</div>
						})
						.collect_view()}
				</div>
				<div class="mt-6 p-4 bg-white rounded-lg border">
					<p class="text-gray-700">
						<strong>"Key Insight:"</strong>
						" Each event can trigger multiple consumers - analytics, notifications, inventory updates, loyalty points, etc. - all working independently!"
					</p>
				</div>
			</div>
		</div>
	}
	.into_any()
}

const ASSEMBLY: &[(&str, &str, &str, &str)] = &[
	("🔔", "bg-yellow-100", "Bell Rings", "Event Producer - The bell doesn't call each person individually, it just rings once"),
	("👥", "bg-blue-100", "Everyone Reacts", "Event Consumers - Students, teachers, admin all react based on their role"),
	("⚡", "bg-green-100", "Loose Coupling", "The bell doesn't know who will respond - perfect loose coupling example"),
];

const CHARACTERISTICS_TAKEAWAYS: &[Takeaway] = &[
	Takeaway { hue: "blue", glyph: None, title: "Loose Coupling", text: "Systems are independent, easy to evolve" },
	Takeaway { hue: "green", glyph: None, title: "Scalability", text: "Handle millions of events, scale consumers independently" },
	Takeaway { hue: "purple", glyph: None, title: "Asynchronous Processing", text: "Faster, more responsive user experiences" },
	Takeaway { hue: "red", glyph: None, title: "Resilience", text: "Fault-tolerant and reliable systems" },
	Takeaway { hue: "yellow", glyph: None, title: "Flexibility", text: "Easy to plug in new features without redesign" },
	Takeaway { hue: "indigo", glyph: None, title: "Real-time Responsiveness", text: "Near real-time event processing capabilities" },
];

/// Characteristics and benefits of event-driven systems.
pub fn characteristics() -> AnyView {
	view! {
		<div class="space-y-12">
			<Hero
				title="Characteristics & Benefits"
				lead="The DNA of event-driven systems - what makes them powerful and scalable"
				gradient="from-green-600 to-teal-600"
			/>

			<CharacteristicsBenefits />
			<ScalabilityDemo />
			<AsyncProcessingDemo />
			<UberEventFlow />

			<div class="bg-gradient-to-r from-purple-50 to-pink-50 p-8 rounded-xl border border-purple-200">
				<h3 class="text-2xl font-bold mb-6 text-gray-900">"🏫 School Assembly Analogy"</h3>
				<div class="grid md:grid-cols-3 gap-6">
					{ASSEMBLY
						.iter()
						.map(|&(emoji, bg, title, text)| view! {
							<div class="bg-white p-6 rounded-lg shadow-sm border">
								<div class=format!("w-12 h-12 {bg} rounded-lg flex items-center justify-center mb-4")>
									<span class="text-2xl">{emoji}</span>
								</div>
								<h4 class="font-semibold text-gray-900 mb-2">{title}</h4>
								<p class="text-gray-600 text-sm">{text}</p>
							</div>
						})
						.collect_view()}
				</div>
			</div>

			<KeyTakeaways points=CHARACTERISTICS_TAKEAWAYS />
		</div>
	}
	.into_any()
}
