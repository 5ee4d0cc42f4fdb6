//! Static registry of known firmware apps
//!
//! The registry is the single source of truth for which apps the firmware
//! can build. It is fixed at compile time; enabling a name that is not
//! listed here has no effect on any generated artifact.

/// A selectable firmware app: the menu symbol plus the source/header pair
/// implementing its screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppEntry {
	/// Unique app name, as written in the enabled-app list.
	pub name: &'static str,
	/// Icon identifier emitted into the menu-list header.
	pub symbol: &'static str,
	/// Implementation file added to the build source list.
	pub source_file: &'static str,
	/// Header pulled in by the includes/defines block.
	pub header_file: &'static str,
}

/// Every app the firmware knows how to build.
pub const APP_REGISTRY: &[AppEntry] = &[
	AppEntry {
		name: "Alarm",
		symbol: "Symbols::clock",
		source_file: "Alarm.cpp",
		header_file: "Alarm.h",
	},
	AppEntry {
		name: "HeartRate",
		symbol: "Symbols::heartBeat",
		source_file: "HeartRate.cpp",
		header_file: "HeartRate.h",
	},
	AppEntry {
		name: "Metronome",
		symbol: "Symbols::drum",
		source_file: "Metronome.cpp",
		header_file: "Metronome.h",
	},
	AppEntry {
		name: "Motion",
		symbol: "Symbols::chartLine",
		source_file: "Motion.cpp",
		header_file: "Motion.h",
	},
	AppEntry {
		name: "Music",
		symbol: "Symbols::music",
		source_file: "Music.cpp",
		header_file: "Music.h",
	},
	AppEntry {
		name: "Navigation",
		symbol: "Symbols::map",
		source_file: "Navigation.cpp",
		header_file: "Navigation.h",
	},
	AppEntry {
		name: "Paddle",
		symbol: "Symbols::paddle",
		source_file: "Paddle.cpp",
		header_file: "Paddle.h",
	},
	AppEntry {
		name: "Paint",
		symbol: "Symbols::paintbrush",
		source_file: "InfiniPaint.cpp",
		header_file: "InfiniPaint.h",
	},
	AppEntry {
		name: "Steps",
		symbol: "Symbols::shoe",
		source_file: "Steps.cpp",
		header_file: "Steps.h",
	},
	AppEntry {
		name: "StopWatch",
		symbol: "Symbols::stopWatch",
		source_file: "StopWatch.cpp",
		header_file: "StopWatch.h",
	},
	AppEntry {
		name: "Timer",
		symbol: "Symbols::hourGlass",
		source_file: "Timer.cpp",
		header_file: "Timer.h",
	},
	AppEntry {
		name: "Twos",
		symbol: "\"2\"",
		source_file: "Twos.cpp",
		header_file: "Twos.h",
	},
];

/// Look up a registry entry by app name.
pub fn lookup(name: &str) -> Option<&'static AppEntry> {
	APP_REGISTRY.iter().find(|entry| entry.name == name)
}

/// Filter an enabled-app list down to the entries the registry knows.
///
/// Input order is preserved and unknown names are dropped without error;
/// duplicates in the input stay duplicated in the result.
pub fn filter_known(names: &[String]) -> Vec<&'static AppEntry> {
	names.iter().filter_map(|name| lookup(name)).collect()
}
