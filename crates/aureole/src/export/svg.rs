//! SVG preview of a placement.
//!
//! The preview mirrors what a browser renderer would build from a
//! [`Placement`]: the central portrait, one group per ring that spins with the
//! ring's angular velocity, and a bubble per item showing the person's photo,
//! a reaction badge and, when available, a link.

mod bubble;

use std::{fs::File, io::Write, path::Path};

use color::DynamicColor;
use log::{debug, error, info, warn};
use svg::{Document, node::element as svg_element};

use aureole_core::{
    geometry::Size,
    plan::{Placement, PlacementRequest, RingDescriptor, SpiralPlacement, SpiralPoint},
};

use crate::{
    config::StyleConfig,
    export::{self, Exporter},
    roster::Person,
};

/// Identifier of the circular clip path shared by every bubble.
const BUBBLE_CLIP_ID: &str = "bubble-clip";

/// Builder for [`Svg`] renderers.
///
/// # Examples
///
/// ```
/// # use aureole::{export::svg::SvgBuilder, geometry::Size, plan::PlacementRequest};
/// let request = PlacementRequest::new(Size::new(400.0, 400.0), 0, 80.0);
/// let svg = SvgBuilder::new(&request).build().expect("default style is valid");
/// ```
pub struct SvgBuilder<'a> {
    request: &'a PlacementRequest,
    style: Option<&'a StyleConfig>,
    people: &'a [Person],
}

impl<'a> SvgBuilder<'a> {
    /// Start a builder for a placement computed from `request`.
    pub fn new(request: &'a PlacementRequest) -> Self {
        Self {
            request,
            style: None,
            people: &[],
        }
    }

    /// Use `style` instead of the default style.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// People shown in the bubbles, in placement order.
    pub fn with_people(mut self, people: &'a [Person]) -> Self {
        self.people = people;
        self
    }

    /// Build the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the style's background color is invalid.
    pub fn build(self) -> Result<Svg<'a>, export::Error> {
        let style = self.style.cloned().unwrap_or_default();
        let background = style.background_color().map_err(export::Error::Render)?;

        Ok(Svg {
            container: self.request.container(),
            center_radius: self.request.center_radius(),
            people: self.people,
            style,
            background,
        })
    }
}

/// SVG renderer for placements.
pub struct Svg<'a> {
    container: Size,
    center_radius: f32,
    people: &'a [Person],
    style: StyleConfig,
    background: Option<DynamicColor>,
}

impl Svg<'_> {
    /// Render a placement to an SVG document sized like the container.
    pub fn render_placement(&self, placement: &Placement) -> Document {
        let width = self.container.width();
        let height = self.container.height();

        if self.people.len() > placement.item_count() {
            warn!(
                people = self.people.len(),
                slots = placement.item_count();
                "Placement has fewer slots than people, extra people are not shown"
            );
        }

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(background) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background.to_string()),
            );
        }

        doc = doc.add(self.create_definitions());

        let center = self.container.center();
        let mut scene = svg_element::Group::new().set(
            "transform",
            format!("translate({}, {})", center.x(), center.y()),
        );

        scene = scene.add(self.render_portrait());

        let mut people = self.people.iter();
        match placement {
            Placement::Rings(plan) => {
                for ring in plan.rings() {
                    scene = scene.add(self.render_ring(ring, &mut people));
                }
            }
            Placement::Spiral(spiral) => {
                scene = scene.add(self.render_spiral(spiral, &mut people));
            }
        }

        doc.add(scene)
    }

    /// Writes an SVG document to the specified file
    pub fn write_document(&self, doc: &Document, path: &Path) -> Result<(), export::Error> {
        let file_name = path.display().to_string();
        info!(file_name; "Creating SVG file");

        let mut f = File::create(path).map_err(|err| {
            error!(file_name, err:err; "Failed to create SVG file");
            export::Error::Io(err)
        })?;

        write!(f, "{doc}").map_err(|err| {
            error!(file_name, err:err; "Failed to write SVG content");
            export::Error::Io(err)
        })
    }

    fn create_definitions(&self) -> svg_element::Definitions {
        let clip_circle = svg_element::Circle::new()
            .set("cx", 0.5)
            .set("cy", 0.5)
            .set("r", 0.5);

        let clip_path = svg_element::ClipPath::new()
            .set("id", BUBBLE_CLIP_ID)
            .set("clipPathUnits", "objectBoundingBox")
            .add(clip_circle);

        svg_element::Definitions::new().add(clip_path)
    }

    fn render_portrait(&self) -> svg_element::Group {
        let radius = self.center_radius;
        let mut portrait = svg_element::Group::new().set("class", "portrait");
        if radius <= 0.0 {
            return portrait;
        }

        portrait = portrait.add(
            svg_element::Circle::new()
                .set("r", radius)
                .set("fill", "#f2f2f2"),
        );

        if let Some(href) = self.style.portrait() {
            portrait = portrait.add(
                svg_element::Image::new()
                    .set("href", href)
                    .set("x", -radius)
                    .set("y", -radius)
                    .set("width", radius * 2.0)
                    .set("height", radius * 2.0)
                    .set("preserveAspectRatio", "xMidYMid slice")
                    .set("clip-path", format!("url(#{BUBBLE_CLIP_ID})")),
            );
        }

        portrait
    }

    fn render_ring<'p>(
        &self,
        ring: &RingDescriptor,
        people: &mut impl Iterator<Item = &'p Person>,
    ) -> svg_element::Group {
        let mut group = svg_element::Group::new()
            .set("class", "ring")
            .set("data-ring", ring.index().to_string());

        if self.style.ring_guides() {
            group = group.add(
                svg_element::Circle::new()
                    .set("r", ring.radius())
                    .set("fill", "none")
                    .set("stroke", "#d0d0d0")
                    .set("stroke-dasharray", "4 6"),
            );
        }

        let mut rotor = svg_element::Group::new();
        if let Some(spin) = spin_animation(ring.angular_velocity()) {
            rotor = rotor.add(spin);
        }

        // Bubbles spin against the ring so photos stay upright.
        for offset in ring.slot_offsets() {
            rotor = rotor.add(self.render_bubble(
                people.next(),
                offset,
                ring.bubble_size(),
                -ring.angular_velocity(),
            ));
        }

        debug!(
            index = ring.index(),
            count = ring.count(),
            clockwise = ring.is_clockwise();
            "Rendered ring"
        );
        group.add(rotor)
    }

    fn render_spiral<'p>(
        &self,
        spiral: &SpiralPlacement,
        people: &mut impl Iterator<Item = &'p Person>,
    ) -> svg_element::Group {
        let reach = spiral
            .points()
            .iter()
            .map(SpiralPoint::radius)
            .fold(0.0, f32::max)
            + spiral.bubble_size() / 2.0;
        if reach > self.container.min_dimension() / 2.0 {
            debug!(reach; "Spiral extends past the container");
        }

        spiral.points().iter().fold(
            svg_element::Group::new().set("class", "spiral"),
            |group, point| {
                group.add(self.render_bubble(
                    people.next(),
                    point.offset(),
                    spiral.bubble_size(),
                    0.0,
                ))
            },
        )
    }
}

impl Exporter for Svg<'_> {
    fn export_placement(&self, placement: &Placement, path: &Path) -> Result<(), export::Error> {
        let doc = self.render_placement(placement);
        debug!("SVG document rendered");

        self.write_document(&doc, path)
    }
}

/// Endless rotation at `velocity` degrees per second; `None` for a still element.
fn spin_animation(velocity: f32) -> Option<svg_element::AnimateTransform> {
    if velocity == 0.0 || !velocity.is_finite() {
        return None;
    }

    let seconds_per_turn = 360.0 / velocity.abs();
    let end_angle = if velocity > 0.0 { 360 } else { -360 };

    Some(
        svg_element::AnimateTransform::new()
            .set("attributeName", "transform")
            .set("type", "rotate")
            .set("from", "0 0 0")
            .set("to", format!("{end_angle} 0 0"))
            .set("dur", format!("{seconds_per_turn:.2}s"))
            .set("repeatCount", "indefinite"),
    )
}
