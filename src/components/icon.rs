use leptos::prelude::*;

/// Pictograms used across the course, rendered as text glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
	Alert,
	Warning,
	Arrow,
	Chart,
	Bell,
	Brain,
	Car,
	Check,
	Chef,
	ChevronDown,
	ChevronRight,
	Clock,
	Cloud,
	Card,
	Database,
	Dollar,
	Document,
	Filter,
	Globe,
	Help,
	Home,
	Image,
	Layers,
	Bulb,
	Link,
	Loader,
	Lock,
	Mail,
	Pin,
	Menu,
	Monitor,
	Package,
	Radio,
	Refresh,
	Resize,
	Route,
	Server,
	Settings,
	Shield,
	Cart,
	Phone,
	Sparkles,
	Star,
	Target,
	Thermometer,
	Trend,
	Truck,
	Text,
	Upload,
	Users,
	Utensils,
	Wifi,
	Close,
	Cross,
	Zap,
}

impl Glyph {
	/// The character drawn for this glyph.
	pub const fn symbol(self) -> &'static str {
		match self {
			Glyph::Alert => "\u{2757}",
			Glyph::Warning => "\u{26A0}",
			Glyph::Arrow => "\u{2192}",
			Glyph::Chart => "\u{1F4CA}",
			Glyph::Bell => "\u{1F514}",
			Glyph::Brain => "\u{1F9E0}",
			Glyph::Car => "\u{1F697}",
			Glyph::Check => "\u{2714}",
			Glyph::Chef => "\u{1F468}\u{200D}\u{1F373}",
			Glyph::ChevronDown => "\u{25BE}",
			Glyph::ChevronRight => "\u{25B8}",
			Glyph::Clock => "\u{1F552}",
			Glyph::Cloud => "\u{2601}",
			Glyph::Card => "\u{1F4B3}",
			Glyph::Database => "\u{1F5C4}",
			Glyph::Dollar => "\u{1F4B2}",
			Glyph::Document => "\u{1F4C4}",
			Glyph::Filter => "\u{23F7}",
			Glyph::Globe => "\u{1F310}",
			Glyph::Help => "\u{2753}",
			Glyph::Home => "\u{1F3E0}",
			Glyph::Image => "\u{1F5BC}",
			Glyph::Layers => "\u{1F5C2}",
			Glyph::Bulb => "\u{1F4A1}",
			Glyph::Link => "\u{1F517}",
			Glyph::Loader => "\u{23F3}",
			Glyph::Lock => "\u{1F512}",
			Glyph::Mail => "\u{2709}",
			Glyph::Pin => "\u{1F4CD}",
			Glyph::Menu => "\u{2630}",
			Glyph::Monitor => "\u{1F5A5}",
			Glyph::Package => "\u{1F4E6}",
			Glyph::Radio => "\u{1F4FB}",
			Glyph::Refresh => "\u{1F504}",
			Glyph::Resize => "\u{2922}",
			Glyph::Route => "\u{1F6E3}",
			Glyph::Server => "\u{1F5A7}",
			Glyph::Settings => "\u{2699}",
			Glyph::Shield => "\u{1F6E1}",
			Glyph::Cart => "\u{1F6D2}",
			Glyph::Phone => "\u{1F4F1}",
			Glyph::Sparkles => "\u{2728}",
			Glyph::Star => "\u{2B50}",
			Glyph::Target => "\u{1F3AF}",
			Glyph::Thermometer => "\u{1F321}",
			Glyph::Trend => "\u{1F4C8}",
			Glyph::Truck => "\u{1F69A}",
			Glyph::Text => "\u{1F524}",
			Glyph::Upload => "\u{2B06}",
			Glyph::Users => "\u{1F465}",
			Glyph::Utensils => "\u{1F374}",
			Glyph::Wifi => "\u{1F4F6}",
			Glyph::Close => "\u{2715}",
			Glyph::Cross => "\u{274C}",
			Glyph::Zap => "\u{26A1}",
		}
	}
}

/// A glyph sized and coloured by Tailwind classes.
#[component]
pub fn Icon(glyph: Glyph, #[prop(into, optional)] class: Signal<String>) -> impl IntoView {
	view! {
		<span
			aria-hidden="true"
			class=move || format!("inline-flex items-center justify-center leading-none {}", class.get())
		>
			{glyph.symbol()}
		</span>
	}
}
