//! SVG rendering for individual bubbles.

use svg::node::element as svg_element;

use aureole_core::geometry::Point;

use super::{BUBBLE_CLIP_ID, Svg, spin_animation};
use crate::roster::Person;

/// Badge size relative to the bubble size.
const BADGE_SCALE: f32 = 0.4;

/// Badge center relative to the bubble's lower-right corner.
const BADGE_OFFSET: f32 = 0.7;

impl Svg<'_> {
    /// Render one bubble centered at `offset`.
    ///
    /// `counter_spin` rotates the bubble's face around its own center; a
    /// bubble on a spinning ring is given the opposite rate so the photo stays
    /// upright. Slots without a person get a plain placeholder disc.
    pub(super) fn render_bubble(
        &self,
        person: Option<&Person>,
        offset: Point,
        size: f32,
        counter_spin: f32,
    ) -> svg_element::Group {
        let half = size / 2.0;
        let slot = svg_element::Group::new().set(
            "transform",
            format!("translate({}, {})", offset.x(), offset.y()),
        );

        let mut face = svg_element::Group::new();
        if let Some(spin) = spin_animation(counter_spin) {
            face = face.add(spin);
        }

        let Some(person) = person else {
            return slot.add(
                face.add(
                    svg_element::Circle::new()
                        .set("class", "placeholder")
                        .set("r", half)
                        .set("fill", "#e0e0e0"),
                ),
            );
        };

        let mut photo = svg_element::Image::new()
            .set("href", person.image())
            .set("x", -half)
            .set("y", -half)
            .set("width", size)
            .set("height", size)
            .set("preserveAspectRatio", "xMidYMid slice")
            .set("clip-path", format!("url(#{BUBBLE_CLIP_ID})"));
        if !person.display_name().is_empty() {
            photo = photo.set("aria-label", person.display_name());
        }

        face = face.add(photo).add(
            svg_element::Circle::new()
                .set("r", half)
                .set("fill", "none")
                .set("stroke", "#ffffff")
                .set("stroke-width", 2),
        );

        if let Some(emoji) = person.reaction().and_then(|tag| self.style.emoji_for(tag)) {
            let badge = Point::new(half, half).scale(BADGE_OFFSET);
            face = face.add(
                svg_element::Text::new(emoji)
                    .set("class", "reaction")
                    .set("x", badge.x())
                    .set("y", badge.y())
                    .set("font-size", size * BADGE_SCALE)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central"),
            );
        }

        match person.link() {
            Some(link) => slot.add(
                svg_element::Anchor::new()
                    .set("href", link)
                    .set("target", "_blank")
                    .set("rel", "noopener noreferrer")
                    .add(face),
            ),
            None => slot.add(face),
        }
    }
}
