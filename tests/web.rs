#![cfg(target_arch = "wasm32")]

use eda_course::timing::use_round_robin;
use eda_course::topics::{TopicProvider, use_topics};
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::tick;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container(id: &str) -> web_sys::HtmlElement {
	let document = document();
	let el = document.create_element("div").unwrap();
	el.set_id(id);
	document.body().unwrap().append_child(&el).unwrap();
	el.unchecked_into()
}

fn text_of(id: &str) -> String {
	document()
		.get_element_by_id(id)
		.and_then(|el| el.text_content())
		.unwrap_or_default()
}

#[component]
fn Probe() -> impl IntoView {
	let topics = use_topics();
	view! {
		<p id="probe-title">{move || topics.current_topic().title}</p>
		<p id="probe-sidebar">{move || if topics.sidebar_open() { "open" } else { "closed" }}</p>
		<button id="probe-select" on:click=move |_| topics.set_current_topic("event-hub")>"go"</button>
		<button id="probe-open" on:click=move |_| topics.open_sidebar()>"menu"</button>
	}
}

#[wasm_bindgen_test]
async fn provider_starts_on_the_introduction() {
	let root = container("start");
	let _handle = mount_to(root, || view! { <TopicProvider><Probe /></TopicProvider> });
	tick().await;

	assert_eq!(text_of("probe-title"), "Introduction to Event-Driven Architecture");
	assert_eq!(text_of("probe-sidebar"), "closed");
}

#[wasm_bindgen_test]
async fn selecting_a_topic_updates_the_page_and_closes_the_sidebar() {
	let root = container("select");
	let _handle = mount_to(root, || view! { <TopicProvider><Probe /></TopicProvider> });
	tick().await;

	let click = |id: &str| {
		document()
			.get_element_by_id(id)
			.unwrap()
			.unchecked_into::<web_sys::HtmlElement>()
			.click()
	};

	click("probe-open");
	tick().await;
	assert_eq!(text_of("probe-sidebar"), "open");

	click("probe-select");
	tick().await;
	assert_eq!(text_of("probe-title"), "Azure Event Hub Overview");
	assert_eq!(text_of("probe-sidebar"), "closed");
}

#[component]
fn Ticker() -> impl IntoView {
	let rotation = use_round_robin(4, 60_000);
	view! { <p id="ticker">{move || rotation.index()}</p> }
}

#[wasm_bindgen_test]
async fn round_robin_starts_on_the_first_item() {
	let root = container("ticker-root");
	let handle = mount_to(root, Ticker);
	tick().await;
	assert_eq!(text_of("ticker"), "0");

	drop(handle);
	tick().await;
	assert!(document().get_element_by_id("ticker").is_none());
}
