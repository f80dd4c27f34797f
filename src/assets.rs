//! Bundled CSS/JS assets and documentation.
//!
//! Everything a generated page needs is inlined so each artifact is a
//! self-contained HTML file that works from any directory.

pub(crate) const BASE_CSS: &str = include_str!("../assets/base.css");
pub(crate) const INDEX_CSS: &str = include_str!("../assets/index.css");
pub(crate) const TABS_CSS: &str = include_str!("../assets/tabs.css");
pub(crate) const TABS_JS: &str = include_str!("../assets/tabs.js");

/// Project README, shown by the `--readme` flag.
pub const BUNDLED_README: &str = include_str!("../README.md");
