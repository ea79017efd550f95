//! Lessons on designing event-driven applications on Event Grid.

use leptos::prelude::*;

use crate::components::common::Hero;
use crate::components::design::{DesignPrinciples, EventGranularityDemo, IdempotencyDemo, LooseCouplingDemo};
use crate::components::routing::{BestPracticesRouting, EventRoutingFiltering, FilteringMechanisms};

/// Coupling, granularity and idempotency.
pub fn design_principles() -> AnyView {
	view! {
		<div class="space-y-12">
			<Hero
				title="Design Principles for Event-Driven Apps"
				lead="Rules of thumb that keep producers, consumers and event contracts healthy as a system grows"
				gradient="from-purple-600 to-indigo-600"
			/>
			<DesignPrinciples />
			<LooseCouplingDemo />
			<EventGranularityDemo />
			<IdempotencyDemo />
		</div>
	}
	.into_any()
}

/// How Event Grid routes and filters events.
pub fn routing_filtering() -> AnyView {
	view! {
		<div class="space-y-12">
			<Hero
				title="Event Routing & Filtering"
				lead="Getting every event to the consumers that need it, and only to them"
				gradient="from-yellow-500 to-orange-600"
			/>
			<EventRoutingFiltering />
			<FilteringMechanisms />
			<BestPracticesRouting />
		</div>
	}
	.into_any()
}
