//! Configuration types for Aureole placement and rendering.
//!
//! This module provides configuration structures that control how bubbles
//! are placed and how previews are styled. All types implement
//! [`serde::Deserialize`] for loading from external sources, and every field
//! has a default, so a partial file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Selects the [`LayoutStrategy`] and holds its tuning.
//! - [`RingConfig`] - Constants of the ring capacity, ring builder and size search.
//! - [`SpiralConfig`] - Constants of the spiral placement.
//! - [`StyleConfig`] - Preview styling, including the reaction emoji table.
//!
//! # Example
//!
//! ```
//! # use aureole::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     strategy = "spiral"
//!
//!     [layout.spiral]
//!     start_radius = 120.0
//! "#).unwrap();
//!
//! assert_eq!(config.layout().spiral().start_radius, 120.0);
//! assert_eq!(config.layout().rings().max_iterations, 18);
//! ```

use std::{collections::BTreeMap, f32::consts::PI, str::FromStr};

use color::DynamicColor;
use serde::{Deserialize, Deserializer};

use aureole_core::strategy::LayoutStrategy;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Placement strategy and its tuning.
    /// * `style` - Visual styling options for previews.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns a copy of this configuration using `strategy` instead of the configured one.
    pub fn with_strategy(mut self, strategy: LayoutStrategy) -> Self {
        self.layout.strategy = strategy;
        self
    }
}

/// Placement configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Which [`LayoutStrategy`] computes placements.
    #[serde(default)]
    strategy: LayoutStrategy,

    /// Tuning of the ring strategy.
    #[serde(default)]
    rings: RingConfig,

    /// Tuning of the spiral strategy.
    #[serde(default)]
    spiral: SpiralConfig,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(strategy: LayoutStrategy, rings: RingConfig, spiral: SpiralConfig) -> Self {
        Self {
            strategy,
            rings,
            spiral,
        }
    }

    /// Returns the configured [`LayoutStrategy`].
    pub fn strategy(&self) -> LayoutStrategy {
        self.strategy
    }

    pub fn rings(&self) -> &RingConfig {
        &self.rings
    }

    pub fn spiral(&self) -> &SpiralConfig {
        &self.spiral
    }
}

/// Constants of the concentric ring strategy.
///
/// Lengths are in the same unit as the container size (CSS pixels in
/// practice). Spin rates are in degrees per second.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Arc length reserved per bubble, as a multiple of the bubble size.
    pub angular_spacing: f32,
    /// Clearance between the center exclusion zone and the first ring's bubbles.
    pub inner_gap: f32,
    /// Distance kept between the outermost ring and the container edge.
    pub edge_padding: f32,
    /// Radial distance between rings, as a multiple of the ring's bubble size.
    pub ring_spacing: f32,
    /// Lower bound of the radial distance between rings.
    pub min_ring_gap: f32,
    /// Fraction of the base bubble size lost per ring index.
    pub shrink_per_ring: f32,
    /// Smallest bubble size a ring may shrink to.
    pub min_bubble_size: f32,
    /// Spin rate of the innermost ring.
    pub base_spin: f32,
    /// Spin rate lost per ring index.
    pub spin_step: f32,
    /// Smallest spin rate any ring is given.
    pub min_spin: f32,
    /// Lower bound of the size search.
    pub min_size: u32,
    /// Smallest upper bound of the size search.
    pub min_upper_size: u32,
    /// The upper bound grows as the container's smaller side divided by this.
    pub size_divisor: f32,
    /// How far past a tested size the search bounds move.
    pub search_step: u32,
    /// Maximum number of sizes the search evaluates.
    pub max_iterations: usize,
    /// Size used when no searched size fits.
    pub fallback_size: u32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            angular_spacing: 1.2,
            inner_gap: 8.0,
            edge_padding: 30.0,
            ring_spacing: 0.95,
            min_ring_gap: 46.0,
            shrink_per_ring: 0.03,
            min_bubble_size: 26.0,
            base_spin: 80.0,
            spin_step: 6.0,
            min_spin: 20.0,
            min_size: 28,
            min_upper_size: 56,
            size_divisor: 12.0,
            search_step: 2,
            max_iterations: 18,
            fallback_size: 40,
        }
    }
}

/// Constants of the spiral strategy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Radius of the first item.
    pub start_radius: f32,
    /// Nominal radius growth per item, before jitter.
    pub radius_step: f32,
    /// Angle advanced per item, in radians.
    pub angle_step: f32,
    /// Inclusive lower bound of the jitter factor.
    pub jitter_min: f32,
    /// Exclusive upper bound of the jitter factor.
    pub jitter_max: f32,
    /// Bubble size used for every item.
    pub bubble_size: f32,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            start_radius: 90.0,
            radius_step: 6.0,
            angle_step: PI / 10.0,
            jitter_min: 0.9,
            jitter_max: 1.3,
            bubble_size: 48.0,
        }
    }
}

/// Visual styling configuration for rendered previews.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color as a CSS color string. No background is drawn when unset.
    background_color: Option<String>,

    /// Image reference of the central portrait.
    portrait: Option<String>,

    /// Draw a faint guide circle along every ring.
    ring_guides: bool,

    /// Reaction tag to emoji lookup. Tags are stored trimmed and lowercased.
    #[serde(deserialize_with = "deserialize_reactions")]
    reactions: BTreeMap<String, String>,
}

/// Normalizes reaction tags so [`StyleConfig::emoji_for`] matches them regardless of case.
fn deserialize_reactions<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let table = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(table
        .into_iter()
        .map(|(tag, emoji)| (tag.trim().to_lowercase(), emoji))
        .collect())
}

impl Default for StyleConfig {
    fn default() -> Self {
        let reactions = [
            ("love", "❤️"),
            ("like", "👍"),
            ("laugh", "😂"),
            ("wow", "😮"),
            ("clap", "👏"),
            ("fire", "🔥"),
            ("party", "🎉"),
            ("star", "⭐"),
        ]
        .into_iter()
        .map(|(tag, emoji)| (tag.to_string(), emoji.to_string()))
        .collect();

        Self {
            background_color: None,
            portrait: None,
            ring_guides: false,
            reactions,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background color, or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid CSS color.
    pub fn background_color(&self) -> Result<Option<DynamicColor>, String> {
        self.background_color
            .as_deref()
            .map(DynamicColor::from_str)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the image reference of the central portrait, if any.
    pub fn portrait(&self) -> Option<&str> {
        self.portrait.as_deref()
    }

    pub fn ring_guides(&self) -> bool {
        self.ring_guides
    }

    /// Looks up the emoji for a reaction tag. Tags are matched case-insensitively.
    pub fn emoji_for(&self, reaction: &str) -> Option<&str> {
        self.reactions
            .get(&reaction.trim().to_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout().strategy(), LayoutStrategy::Rings);
        assert_eq!(config.layout().rings(), &RingConfig::default());
        assert_eq!(config.layout().spiral(), &SpiralConfig::default());
        assert!(!config.style().ring_guides());
    }

    #[test]
    fn test_partial_ring_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout.rings]
            min_spin = 10.0
            fallback_size = 32
            "#,
        )
        .unwrap();

        let rings = config.layout().rings();
        assert_eq!(rings.min_spin, 10.0);
        assert_eq!(rings.fallback_size, 32);
        assert_eq!(rings.angular_spacing, 1.2);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [layout]
            strategy = "force"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_background_color() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            background_color = "#101820"
            "##,
        )
        .unwrap();
        assert!(matches!(config.style().background_color(), Ok(Some(_))));

        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "not-a-color"
            "#,
        )
        .unwrap();
        assert!(config.style().background_color().is_err());

        assert!(matches!(StyleConfig::default().background_color(), Ok(None)));
    }

    #[test]
    fn test_emoji_lookup() {
        let style = StyleConfig::default();
        assert_eq!(style.emoji_for("love"), Some("❤️"));
        assert_eq!(style.emoji_for(" Fire "), Some("🔥"));
        assert_eq!(style.emoji_for("unknown"), None);
    }

    #[test]
    fn test_custom_reaction_table_replaces_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [style.reactions]
            cheers = "🥂"
            "#,
        )
        .unwrap();
        assert_eq!(config.style().emoji_for("cheers"), Some("🥂"));
        assert_eq!(config.style().emoji_for("love"), None);
    }

    #[test]
    fn test_configured_reaction_tags_match_any_case() {
        let config: AppConfig = toml::from_str(
            r#"
            [style.reactions]
            Cheers = "🥂"
            " WAVE " = "👋"
            "#,
        )
        .unwrap();
        assert_eq!(config.style().emoji_for("cheers"), Some("🥂"));
        assert_eq!(config.style().emoji_for("CHEERS"), Some("🥂"));
        assert_eq!(config.style().emoji_for("wave"), Some("👋"));
    }

    #[test]
    fn test_with_strategy() {
        let config = AppConfig::default().with_strategy(LayoutStrategy::Spiral);
        assert_eq!(config.layout().strategy(), LayoutStrategy::Spiral);
    }
}
