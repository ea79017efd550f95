//! Colour keys and the Tailwind class bundles they stand for.
//!
//! Every class string is spelled out in full so the Tailwind scanner can
//! find it in the source.

/// Styling tokens for one colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
	/// `bg-*-500`
	pub solid: &'static str,
	/// `bg-*-100`
	pub light: &'static str,
	/// `bg-*-50`
	pub tint: &'static str,
	/// `text-*-600`
	pub text: &'static str,
	/// `text-*-800`
	pub strong: &'static str,
	/// `border-*-300`
	pub border: &'static str,
	/// `border-*-200`
	pub soft_border: &'static str,
	/// Raw colour for SVG strokes.
	pub stroke: &'static str,
}

/// A colour key accepted by [`swatch_for`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hue {
	/// `blue`
	Blue,
	/// `green`
	Green,
	/// `purple`
	Purple,
	/// `orange`
	Orange,
	/// `red`
	Red,
	/// `yellow`
	Yellow,
	/// `indigo`
	Indigo,
	/// `pink`
	Pink,
}

/// Used for any key that is not a known hue.
pub const DEFAULT_HUE: Hue = Hue::Blue;

impl Hue {
	/// Every hue, in the order the palette lists them.
	pub const ALL: [Hue; 8] = [
		Hue::Blue,
		Hue::Green,
		Hue::Purple,
		Hue::Orange,
		Hue::Red,
		Hue::Yellow,
		Hue::Indigo,
		Hue::Pink,
	];

	/// Parses a lower-case colour key.
	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|hue| hue.key() == key)
	}

	/// The lower-case key for this hue.
	pub const fn key(self) -> &'static str {
		match self {
			Hue::Blue => "blue",
			Hue::Green => "green",
			Hue::Purple => "purple",
			Hue::Orange => "orange",
			Hue::Red => "red",
			Hue::Yellow => "yellow",
			Hue::Indigo => "indigo",
			Hue::Pink => "pink",
		}
	}

	/// Class bundle for this hue.
	pub const fn swatch(self) -> Swatch {
		match self {
			Hue::Blue => Swatch {
				solid: "bg-blue-500",
				light: "bg-blue-100",
				tint: "bg-blue-50",
				text: "text-blue-600",
				strong: "text-blue-800",
				border: "border-blue-300",
				soft_border: "border-blue-200",
				stroke: "#3b82f6",
			},
			Hue::Green => Swatch {
				solid: "bg-green-500",
				light: "bg-green-100",
				tint: "bg-green-50",
				text: "text-green-600",
				strong: "text-green-800",
				border: "border-green-300",
				soft_border: "border-green-200",
				stroke: "#22c55e",
			},
			Hue::Purple => Swatch {
				solid: "bg-purple-500",
				light: "bg-purple-100",
				tint: "bg-purple-50",
				text: "text-purple-600",
				strong: "text-purple-800",
				border: "border-purple-300",
				soft_border: "border-purple-200",
				stroke: "#a855f7",
			},
			Hue::Orange => Swatch {
				solid: "bg-orange-500",
				light: "bg-orange-100",
				tint: "bg-orange-50",
				text: "text-orange-600",
				strong: "text-orange-800",
				border: "border-orange-300",
				soft_border: "border-orange-200",
				stroke: "#f97316",
			},
			Hue::Red => Swatch {
				solid: "bg-red-500",
				light: "bg-red-100",
				tint: "bg-red-50",
				text: "text-red-600",
				strong: "text-red-800",
				border: "border-red-300",
				soft_border: "border-red-200",
				stroke: "#ef4444",
			},
			Hue::Yellow => Swatch {
				solid: "bg-yellow-500",
				light: "bg-yellow-100",
				tint: "bg-yellow-50",
				text: "text-yellow-600",
				strong: "text-yellow-800",
				border: "border-yellow-300",
				soft_border: "border-yellow-200",
				stroke: "#eab308",
			},
			Hue::Indigo => Swatch {
				solid: "bg-indigo-500",
				light: "bg-indigo-100",
				tint: "bg-indigo-50",
				text: "text-indigo-600",
				strong: "text-indigo-800",
				border: "border-indigo-300",
				soft_border: "border-indigo-200",
				stroke: "#6366f1",
			},
			Hue::Pink => Swatch {
				solid: "bg-pink-500",
				light: "bg-pink-100",
				tint: "bg-pink-50",
				text: "text-pink-600",
				strong: "text-pink-800",
				border: "border-pink-300",
				soft_border: "border-pink-200",
				stroke: "#ec4899",
			},
		}
	}
}

/// Class bundle for a colour key; unknown keys get the blue bundle.
pub fn swatch_for(key: &str) -> Swatch {
	Hue::from_key(key).unwrap_or(DEFAULT_HUE).swatch()
}

/// Badge classes for a messaging service name.
pub fn service_badge(service: &str) -> &'static str {
	match service {
		"Event Grid" => "text-blue-600 bg-blue-50 border-blue-200",
		"Event Hub" => "text-orange-600 bg-orange-50 border-orange-200",
		"Service Bus" => "text-green-600 bg-green-50 border-green-200",
		_ => "text-gray-600 bg-gray-50 border-gray-200",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_key_round_trips() {
		for hue in Hue::ALL {
			assert_eq!(Hue::from_key(hue.key()), Some(hue));
			assert_eq!(swatch_for(hue.key()), hue.swatch());
		}
	}

	#[test]
	fn known_keys_map_to_their_classes() {
		let green = swatch_for("green");
		assert_eq!(green.solid, "bg-green-500");
		assert_eq!(green.light, "bg-green-100");
		assert_eq!(green.text, "text-green-600");
		assert_eq!(green.border, "border-green-300");

		let indigo = swatch_for("indigo");
		assert_eq!(indigo.tint, "bg-indigo-50");
		assert_eq!(indigo.strong, "text-indigo-800");
	}

	#[test]
	fn unknown_key_falls_back_to_blue() {
		assert_eq!(swatch_for("teal"), Hue::Blue.swatch());
		assert_eq!(swatch_for(""), Hue::Blue.swatch());
		assert_eq!(swatch_for("Blue"), Hue::Blue.swatch());
	}

	#[test]
	fn every_bundle_names_its_own_colour() {
		for hue in Hue::ALL {
			let s = hue.swatch();
			for class in [s.solid, s.light, s.tint, s.text, s.strong, s.border, s.soft_border] {
				assert!(class.contains(hue.key()), "{class} is not {}", hue.key());
			}
		}
	}

	#[test]
	fn service_badges() {
		assert!(service_badge("Event Hub").contains("orange"));
		assert!(service_badge("Service Bus").contains("green"));
		assert_eq!(service_badge("Kafka"), "text-gray-600 bg-gray-50 border-gray-200");
	}
}
