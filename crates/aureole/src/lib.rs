//! Aureole - adaptive placement of reaction bubbles around a central portrait.
//!
//! Given a container size, an item count and the radius of the central
//! portrait, Aureole computes where each bubble goes: on concentric rotating
//! rings whose bubble size is searched so every item fits, or along an
//! outward spiral. Placements can be rendered to an animated SVG preview.

pub mod config;
pub mod export;
pub mod layout;
pub mod roster;

mod error;

pub use aureole_core::{geometry, plan, strategy};

pub use error::AureoleError;

use log::{debug, info};
use rand::RngCore;

use config::AppConfig;
use export::svg::SvgBuilder;
use layout::EngineBuilder;
use plan::{Placement, PlacementRequest};
use roster::Person;

/// Builder for computing and rendering placements.
///
/// # Examples
///
/// ```rust
/// use aureole::{PlacementBuilder, geometry::Size, plan::PlacementRequest};
///
/// let builder = PlacementBuilder::default();
/// let request = PlacementRequest::new(Size::new(400.0, 400.0), 5, 100.0);
///
/// let placement = builder.place(&request);
/// assert_eq!(placement.item_count(), 5);
///
/// let svg = builder
///     .render_svg(&request, &placement, &[])
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct PlacementBuilder {
    config: AppConfig,
}

impl PlacementBuilder {
    /// Create a new placement builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compute a placement with the configured strategy.
    ///
    /// Randomness, used by the spiral strategy only, comes from the thread
    /// generator. Use [`Self::place_with_rng`] for reproducible results.
    pub fn place(&self, request: &PlacementRequest) -> Placement {
        let mut rng = rand::rng();
        self.place_with_rng(request, &mut rng)
    }

    /// Compute a placement with the configured strategy, drawing randomness from `rng`.
    pub fn place_with_rng(&self, request: &PlacementRequest, rng: &mut dyn RngCore) -> Placement {
        let strategy = self.config.layout().strategy();
        info!(
            strategy:? = strategy,
            item_count = request.item_count(),
            width = request.container().width(),
            height = request.container().height();
            "Computing placement"
        );

        let engine = EngineBuilder::from_config(self.config.layout()).build(strategy);
        let placement = engine.place(request, rng);

        debug!(
            placed = placement.item_count(),
            bubble_size = placement.bubble_size();
            "Placement computed"
        );
        placement
    }

    /// Render a placement to an SVG string.
    ///
    /// # Arguments
    ///
    /// * `request` - The request the placement was computed for
    /// * `placement` - The placement to draw
    /// * `people` - People shown in the bubbles, in placement order
    ///
    /// # Errors
    ///
    /// Returns `AureoleError` if the configured style is invalid.
    pub fn render_svg(
        &self,
        request: &PlacementRequest,
        placement: &Placement,
        people: &[Person],
    ) -> Result<String, AureoleError> {
        let svg = SvgBuilder::new(request)
            .with_style(self.config.style())
            .with_people(people)
            .build()?;

        let doc = svg.render_placement(placement);
        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }
}
