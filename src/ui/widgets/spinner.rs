// SPDX-License-Identifier: MPL-2.0
//! Loading spinner widget drawn with Canvas.
//!
//! Eight dots around a circle fade in sequence; the rotation angle is owned
//! by the application state and advanced by a tick subscription while the
//! catalog request is in flight.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

const DOT_COUNT: usize = 8;
const DOT_RADIUS: f32 = 3.5;

pub struct LoadingSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl LoadingSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for LoadingSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let orbit = frame.width().min(frame.height()) / 2.0 - DOT_RADIUS;

                for step in 0..DOT_COUNT {
                    #[allow(clippy::cast_precision_loss)] // step is at most 8
                    let fraction = step as f32 / DOT_COUNT as f32;
                    let angle = self.rotation + fraction * TAU;

                    let dot = Path::circle(
                        Point::new(
                            center.x + orbit * angle.cos(),
                            center.y + orbit * angle.sin(),
                        ),
                        DOT_RADIUS,
                    );

                    // Dots trail off behind the leading one.
                    frame.fill(
                        &dot,
                        Color {
                            a: 0.2 + 0.8 * fraction,
                            ..self.color
                        },
                    );
                }
            });

        vec![geometry]
    }
}
