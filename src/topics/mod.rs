//! The course outline and how a selected id maps back onto it.

mod context;
mod navigation;

pub use context::{TopicContext, TopicProvider, use_topics};
pub use navigation::Navigation;

/// Topic shown when nothing else has been picked.
pub const DEFAULT_TOPIC_ID: &str = "intro";

/// Top-level topics expanded in the sidebar on first load.
pub const INITIALLY_EXPANDED: &[&str] = &["intro"];

/// One navigable unit of the course. Only top-level topics have subtopics.
#[derive(Debug, PartialEq, Eq)]
pub struct Topic {
	/// Unique across the whole tree.
	pub id: &'static str,
	/// Heading shown in the sidebar and page header.
	pub title: &'static str,
	/// Reading time, e.g. "10 mins".
	pub duration: &'static str,
	/// One-line summary shown by the generic overview.
	pub content: &'static str,
	/// Nested topics, empty below the first level.
	pub subtopics: &'static [Topic],
}

const fn lesson(
	id: &'static str,
	title: &'static str,
	duration: &'static str,
	content: &'static str,
) -> Topic {
	Topic {
		id,
		title,
		duration,
		content,
		subtopics: &[],
	}
}

/// The full course outline.
pub static COURSE: &[Topic] = &[
	Topic {
		id: "intro",
		title: "Introduction to Event-Driven Architecture",
		duration: "1 hr",
		content: "Event-Driven Architecture & Messaging in Azure",
		subtopics: &[
			lesson(
				"what-is-eda",
				"What is Event-Driven Architecture?",
				"10 mins",
				"Definition, key characteristics, decoupling, async processing",
			),
			lesson(
				"characteristics",
				"Characteristics & Benefits",
				"10 mins",
				"Scalability, resilience, flexibility, cost optimization",
			),
			lesson(
				"event-grid",
				"Azure Event Grid Overview",
				"10 mins",
				"Event sources, topics, subscriptions, handlers",
			),
			lesson(
				"event-hub",
				"Azure Event Hub Overview",
				"15 mins",
				"Event ingestion, real-time streaming, analytics",
			),
			lesson(
				"comparison",
				"Comparison: Event Grid vs Event Hub vs Service Bus",
				"10 mins",
				"Use case driven comparison",
			),
			lesson(
				"architecture-example",
				"Architecture Example – Real-Time Order Processing",
				"5 mins",
				"Diagram: Order received → Event Grid → Function → Storage",
			),
		],
	},
	Topic {
		id: "event-grid-design",
		title: "Designing Event-Driven Apps using Event Grid",
		duration: "1 hr",
		content: "Deep dive into Event Grid design patterns",
		subtopics: &[
			lesson(
				"design-principles",
				"Design Principles for Event-Driven Apps",
				"10 mins",
				"Loose coupling, scalability, failure handling",
			),
			lesson(
				"custom-events",
				"Event Grid Topics & Custom Events",
				"10 mins",
				"Publishing custom events, topic creation",
			),
			lesson(
				"routing-filtering",
				"Event Routing & Filtering",
				"10 mins",
				"Advanced filtering, event domains",
			),
			lesson(
				"security-governance",
				"Security & Governance in Event Grid",
				"15 mins",
				"Authentication, RBAC, policies",
			),
			lesson(
				"serverless-processing",
				"Use Case – Serverless Event Processing",
				"10 mins",
				"Functions + Event Grid demo scenario",
			),
			lesson(
				"logic-apps-diagram",
				"Architecture Diagram – Event Grid with Logic Apps",
				"5 mins",
				"Integration example",
			),
		],
	},
	Topic {
		id: "queues",
		title: "Azure Storage Queues and Service Bus Queues",
		duration: "1 hr",
		content: "Messaging queues deep dive",
		subtopics: &[
			lesson(
				"messaging-intro",
				"Introduction to Messaging Queues",
				"10 mins",
				"Asynchronous messaging basics",
			),
			lesson(
				"storage-queues",
				"Azure Storage Queues",
				"10 mins",
				"Features, use cases, limitations",
			),
			lesson(
				"service-bus-queues",
				"Service Bus Queues",
				"10 mins",
				"Features – sessions, dead-letter, transactions",
			),
			lesson(
				"topics-subscriptions",
				"Service Bus Topics & Subscriptions",
				"15 mins",
				"Publish-subscribe pattern in Service Bus",
			),
			lesson(
				"queues-comparison",
				"Storage Queues vs Service Bus Queues",
				"10 mins",
				"Comparison table",
			),
			lesson(
				"fulfillment-pipeline",
				"Architecture Example – Order Fulfillment Pipeline",
				"5 mins",
				"End-to-end workflow",
			),
		],
	},
	Topic {
		id: "integration-patterns",
		title: "Integration Patterns: Publish-Subscribe, FIFO",
		duration: "1 hr",
		content: "Advanced integration patterns",
		subtopics: &[
			lesson(
				"patterns-overview",
				"Integration Patterns Overview",
				"10 mins",
				"Common messaging/integration patterns",
			),
			lesson(
				"pub-sub-pattern",
				"Publish-Subscribe Pattern",
				"15 mins",
				"Fan-out, broadcasting",
			),
			lesson(
				"fifo-ordering",
				"FIFO & Message Ordering",
				"10 mins",
				"Message sequencing, ordering guarantees",
			),
			lesson(
				"dead-letter-retry",
				"Dead-Letter Queues & Retry Policies",
				"15 mins",
				"Reliability & fault handling",
			),
			lesson(
				"hybrid-integration",
				"Hybrid Integration",
				"5 mins",
				"Event Grid + Service Bus + Functions",
			),
			lesson(
				"ecommerce-workflow",
				"Real-World Example – E-commerce Checkout Workflow",
				"5 mins",
				"Diagram and explanation",
			),
		],
	},
];

/// Every topic in outline order, parents before their subtopics.
pub fn all_topics(topics: &'static [Topic]) -> impl Iterator<Item = &'static Topic> {
	topics
		.iter()
		.flat_map(|topic| std::iter::once(topic).chain(topic.subtopics.iter()))
}

/// The topic with `id` at either level.
pub fn find_topic(topics: &'static [Topic], id: &str) -> Option<&'static Topic> {
	all_topics(topics).find(|topic| topic.id == id)
}

/// The topic with `id`, or the first top-level topic when nothing matches.
///
/// # Panics
///
/// Panics if `topics` is empty.
pub fn resolve_topic(topics: &'static [Topic], id: &str) -> &'static Topic {
	assert!(!topics.is_empty(), "cannot resolve a topic in an empty tree");
	find_topic(topics, id).unwrap_or(&topics[0])
}

/// Ids that occur more than once anywhere in the tree.
pub fn duplicate_ids(topics: &'static [Topic]) -> Vec<&'static str> {
	let mut seen = std::collections::HashSet::new();
	let mut dupes = Vec::new();
	for topic in all_topics(topics) {
		if !seen.insert(topic.id) && !dupes.contains(&topic.id) {
			dupes.push(topic.id);
		}
	}
	dupes
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_unique_across_the_tree() {
		assert_eq!(duplicate_ids(COURSE), Vec::<&str>::new());
	}

	#[test]
	fn duplicates_are_reported_once() {
		static TREE: &[Topic] = &[
			Topic {
				id: "a",
				title: "A",
				duration: "",
				content: "",
				subtopics: &[lesson("b", "", "", ""), lesson("a", "", "", "")],
			},
			Topic {
				id: "c",
				title: "C",
				duration: "",
				content: "",
				subtopics: &[lesson("b", "", "", ""), lesson("a", "", "", "")],
			},
		];
		assert_eq!(duplicate_ids(TREE), vec!["a", "b"]);
	}

	#[test]
	fn nesting_is_one_level_deep() {
		for topic in COURSE {
			assert_eq!(topic.subtopics.len(), 6, "{}", topic.id);
			assert!(topic.subtopics.iter().all(|sub| sub.subtopics.is_empty()));
		}
	}

	#[test]
	fn every_id_resolves_to_itself() {
		for topic in all_topics(COURSE) {
			assert_eq!(resolve_topic(COURSE, topic.id), topic);
		}
		assert_eq!(all_topics(COURSE).count(), 28);
	}

	#[test]
	fn nested_topic_resolves_with_its_own_fields() {
		let topic = resolve_topic(COURSE, "fifo-ordering");
		assert_eq!(topic.title, "FIFO & Message Ordering");
		assert_eq!(topic.duration, "10 mins");
	}

	#[test]
	fn unknown_id_falls_back_to_first_topic() {
		assert_eq!(resolve_topic(COURSE, "no-such-topic").id, "intro");
		assert_eq!(resolve_topic(COURSE, "").id, "intro");
		assert!(find_topic(COURSE, "no-such-topic").is_none());
	}

	#[test]
	#[should_panic(expected = "empty tree")]
	fn resolving_in_an_empty_tree_is_a_bug() {
		static EMPTY: &[Topic] = &[];
		resolve_topic(EMPTY, "intro");
	}

	#[test]
	fn defaults_point_at_real_topics() {
		assert!(find_topic(COURSE, DEFAULT_TOPIC_ID).is_some());
		for id in INITIALLY_EXPANDED {
			assert!(COURSE.iter().any(|t| t.id == *id));
		}
	}
}
