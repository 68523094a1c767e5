//! Placement strategy selection.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Available placement strategies for arranging bubbles around the center.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Rings` - Concentric rotating rings with a searched bubble size (default)
/// - `Spiral` - A single outward spiral with jittered radius growth
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// Concentric ring layout (default)
    #[default]
    Rings,
    /// Outward spiral layout
    Spiral,
}

impl FromStr for LayoutStrategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rings" => Ok(Self::Rings),
            "spiral" => Ok(Self::Spiral),
            _ => Err("Unsupported layout strategy"),
        }
    }
}

impl From<LayoutStrategy> for &'static str {
    fn from(val: LayoutStrategy) -> Self {
        match val {
            LayoutStrategy::Rings => "rings",
            LayoutStrategy::Spiral => "spiral",
        }
    }
}

impl Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("rings".parse(), Ok(LayoutStrategy::Rings));
        assert_eq!("spiral".parse(), Ok(LayoutStrategy::Spiral));
        assert!("force".parse::<LayoutStrategy>().is_err());
    }

    #[test]
    fn test_strategy_display_matches_from_str() {
        for strategy in [LayoutStrategy::Rings, LayoutStrategy::Spiral] {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
    }

    #[test]
    fn test_strategy_default() {
        assert_eq!(LayoutStrategy::default(), LayoutStrategy::Rings);
    }
}
