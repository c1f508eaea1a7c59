// SPDX-License-Identifier: MPL-2.0
//! Single service card with its tilt-tracking mouse area.

use crate::catalog::ServiceItem;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::ServiceIcon;
use crate::ui::styles;
use crate::ui::tilt::TiltState;
use iced::widget::{mouse_area, Column, Container, Text};
use iced::{alignment, Element, Length, Point, Size};

/// Fixed card bounds. The mouse area reports pointer positions local to the
/// card, and the tilt math normalizes them against this size.
pub const SURFACE_SIZE: Size = Size {
    width: sizing::CARD_WIDTH,
    height: sizing::CARD_HEIGHT,
};

/// Messages emitted by one card; `index` keeps every card independent.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved inside the card; the position is local to its surface.
    PointerMoved { index: usize, position: Point },

    /// Pointer left the card.
    PointerExited { index: usize },
}

/// Renders one service card.
pub fn view(index: usize, service: &ServiceItem, tilt: TiltState) -> Element<'_, Message> {
    let icon = Text::new(ServiceIcon::for_title(&service.title).glyph()).size(sizing::ICON_LG);

    let title = Text::new(service.title.as_str()).size(typography::TITLE_SM);

    let description = Text::new(service.description.as_str()).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(description);

    let surface = Container::new(content)
        .width(Length::Fixed(SURFACE_SIZE.width))
        .height(Length::Fixed(SURFACE_SIZE.height))
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::card(tilt));

    mouse_area(surface)
        .on_move(move |position| Message::PointerMoved { index, position })
        .on_exit(Message::PointerExited { index })
        .into()
}
