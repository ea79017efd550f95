//! Lessons on the Azure messaging services themselves.

use leptos::prelude::*;

use crate::components::architecture::ArchitectureDiagram;
use crate::components::common::{Hero, KeyTakeaways, Takeaway};
use crate::components::comparison::{ComparisonTable, DecisionMatrix};
use crate::components::event_grid::{
	EventGridConcepts, EventGridFlow, EventGridOverview, NewsAnalogy, PhotoSharingExample, SmartHomeExercise,
};
use crate::components::event_hub::{EventHubArchitecture, EventHubOverview, EventHubUseCases, EventHubVsKafka, UberExample};
use crate::components::icon::Glyph;

const EVENT_GRID_TAKEAWAYS: &[Takeaway] = &[
	Takeaway {
		hue: "blue",
		glyph: Some(Glyph::Zap),
		title: "Event Routing Backbone",
		text: "Central hub for all Azure event communication",
	},
	Takeaway {
		hue: "green",
		glyph: Some(Glyph::Target),
		title: "Topics & Subscriptions",
		text: "Flexible event routing with smart filtering",
	},
	Takeaway {
		hue: "purple",
		glyph: Some(Glyph::Database),
		title: "Scalable & Reliable",
		text: "Millions of events per second with guaranteed delivery",
	},
	Takeaway {
		hue: "yellow",
		glyph: Some(Glyph::Settings),
		title: "Perfect for Serverless",
		text: "Ideal for event-driven, serverless applications",
	},
];

const EVENT_HUB_TAKEAWAYS: &[Takeaway] = &[
	Takeaway {
		hue: "orange",
		glyph: Some(Glyph::Zap),
		title: "Big Data Streaming",
		text: "Azure's event ingestion pipeline for massive scale",
	},
	Takeaway {
		hue: "red",
		glyph: Some(Glyph::Database),
		title: "High-Throughput",
		text: "Millions of events per second with low latency",
	},
	Takeaway {
		hue: "green",
		glyph: Some(Glyph::Target),
		title: "Real-Time Analytics",
		text: "Perfect for streaming analytics and insights",
	},
	Takeaway {
		hue: "purple",
		glyph: Some(Glyph::Settings),
		title: "Kafka Compatible",
		text: "Seamless migration from existing Kafka workloads",
	},
];

/// Event Grid: concepts, flow and the smart-home exercise.
pub fn event_grid() -> AnyView {
	view! {
		<div class="space-y-12">
			<Hero
				title="Azure Event Grid Overview"
				lead="The post office of Azure events - delivering messages reliably and at scale"
				note=("🏢 Central Nervous System:", "Event Grid connects all your Azure services through events")
			/>
			<EventGridOverview />
			<EventGridConcepts />
			<EventGridFlow />
			<PhotoSharingExample />
			<NewsAnalogy />
			<SmartHomeExercise />
			<KeyTakeaways points=EVENT_GRID_TAKEAWAYS />
		</div>
	}
	.into_any()
}

/// Event Hub: partitions, consumer groups and streaming use cases.
pub fn event_hub() -> AnyView {
	view! {
		<div class="space-y-12">
			<Hero
				title="Azure Event Hub Overview"
				lead="Big data streaming platform and event ingestion service"
				gradient="from-orange-600 to-red-600"
				note=("🔥 The Massive Firehose:", "If Event Grid is the dispatcher, Event Hub is the streaming pipeline")
			/>
			<EventHubOverview />
			<EventHubArchitecture />
			<EventHubUseCases />
			<UberExample />
			<EventHubVsKafka />
			<KeyTakeaways points=EVENT_HUB_TAKEAWAYS />
		</div>
	}
	.into_any()
}

/// Side-by-side comparison and the decision matrix.
pub fn comparison() -> AnyView {
	view! {
		<div class="space-y-8">
			<div class="bg-white p-8 rounded-xl shadow-sm border">
				<h2 class="text-2xl font-bold mb-6 text-gray-900">"Service Comparison"</h2>
				<ComparisonTable />
			</div>
			<DecisionMatrix />
		</div>
	}
	.into_any()
}

/// An order flowing through Event Grid into storage.
pub fn architecture_example() -> AnyView {
	view! {
		<div class="space-y-8">
			<div class="bg-white p-8 rounded-xl shadow-sm border">
				<h2 class="text-2xl font-bold mb-6 text-gray-900">"Real-Time Order Processing"</h2>
				<ArchitectureDiagram />
			</div>
		</div>
	}
	.into_any()
}
