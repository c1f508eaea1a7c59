// SPDX-License-Identifier: MPL-2.0
//! Catalog page: hero copy, the service grid and its lifecycle states,
//! the skills grid, the stats row and the consultation call to action.

pub mod card;

use crate::catalog::FetchState;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::tilt::TiltState;
use crate::ui::widgets::LoadingSpinner;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

/// Fixed scheduling link surfaced as the page's call to action. Opaque to
/// the application; no validation is performed.
pub const CONSULTATION_URL: &str = "https://calendly.com/alphaseam-operations/30min";

const LOADING_LABEL: &str = "Loading services...";
const EMPTY_LABEL: &str = "No services available at the moment.";

const CARDS_PER_ROW: usize = 3;

/// Messages produced by the page.
#[derive(Debug, Clone)]
pub enum Message {
    Card(card::Message),
    CopyConsultationLink,
}

/// Everything the page needs from the application root.
pub struct ViewEnv<'a> {
    pub fetch: &'a FetchState,
    /// One tilt per card, same order as the loaded items.
    pub tilts: &'a [TiltState],
    pub spinner_rotation: f32,
}

struct Skill {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
}

const SKILLS: &[Skill] = &[
    Skill {
        glyph: "⚙",
        title: "ERP & SAP",
        description: "Expertise in SAP S/4HANA, ABAP, FICO, MM, SD, PP Modules.",
    },
    Skill {
        glyph: "</>",
        title: "Full-Stack Web",
        description: "React, Node.js, Express, MongoDB, Firebase, REST APIs.",
    },
    Skill {
        glyph: "☁",
        title: "Cloud Tech",
        description: "AWS, Azure, and Google Cloud Platform solutions.",
    },
    Skill {
        glyph: "📱",
        title: "Mobile Apps",
        description: "Android & iOS development using Flutter and React Native.",
    },
    Skill {
        glyph: "🐳",
        title: "DevOps & CI/CD",
        description: "Docker, Jenkins, GitHub Actions, and Kubernetes.",
    },
    Skill {
        glyph: "🎨",
        title: "UI/UX Design",
        description: "Figma, Adobe XD for responsive, user-friendly interfaces.",
    },
    Skill {
        glyph: "🛡",
        title: "Cybersecurity",
        description: "Data protection, secure development, and ISO practices.",
    },
];

struct Stat {
    glyph: &'static str,
    value: u32,
    label: &'static str,
    symbol: char,
}

const STATS: &[Stat] = &[
    Stat {
        glyph: "✨",
        value: 13,
        label: "Projects Completed",
        symbol: '+',
    },
    Stat {
        glyph: "👍",
        value: 18,
        label: "Positive Feedback",
        symbol: '+',
    },
    Stat {
        glyph: "⏳",
        value: 80,
        label: "Certified Resources",
        symbol: '%',
    },
];

/// Renders the whole page inside a scrollable column.
pub fn view(env: ViewEnv<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(hero())
        .push(grid_section(&env))
        .push(skills_section())
        .push(stats_section())
        .push(cta_section());

    let page = Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center);

    scrollable(page).width(Length::Fill).height(Length::Fill).into()
}

fn hero<'a>() -> Element<'a, Message> {
    let title = Text::new("Our Services").size(typography::TITLE_LG);

    let copy = Text::new(
        "Empowered by exceptional talent, Alphaseam elevates your digital \
         landscape by converging innovation and technology to craft bespoke \
         software solutions that drive business success.",
    )
    .size(typography::BODY)
    .color(palette::GRAY_200);

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(copy);

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::panel)
        .into()
}

/// The service grid, or whichever lifecycle state currently replaces it.
/// Exactly one of the four renditions is ever visible.
fn grid_section<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    match env.fetch {
        FetchState::Loading => {
            let spinner =
                LoadingSpinner::new(palette::PRIMARY_500, env.spinner_rotation).into_element();

            let column = Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(spinner)
                .push(Text::new(LOADING_LABEL).size(typography::BODY));

            centered(column.into())
        }
        FetchState::Failed(message) => {
            let heading = Text::new("Unable to load services")
                .size(typography::TITLE_MD)
                .color(palette::ERROR_500);

            let body = Text::new(message.as_str()).size(typography::BODY);

            let panel = Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .align_x(alignment::Horizontal::Center)
                    .push(heading)
                    .push(body),
            )
            .padding(spacing::LG)
            .style(styles::error_panel);

            centered(panel.into())
        }
        FetchState::Loaded(items) if items.is_empty() => centered(
            Text::new(EMPTY_LABEL)
                .size(typography::BODY)
                .color(palette::GRAY_200)
                .into(),
        ),
        FetchState::Loaded(items) => {
            let mut grid = Column::new()
                .spacing(spacing::LG)
                .align_x(alignment::Horizontal::Center);

            for (row_index, chunk) in items.chunks(CARDS_PER_ROW).enumerate() {
                let mut row = Row::new().spacing(spacing::LG);

                for (offset, service) in chunk.iter().enumerate() {
                    let index = row_index * CARDS_PER_ROW + offset;
                    let tilt = env.tilts.get(index).copied().unwrap_or_default();
                    row = row.push(card::view(index, service, tilt).map(Message::Card));
                }

                grid = grid.push(row);
            }

            grid.into()
        }
    }
}

fn skills_section<'a>() -> Element<'a, Message> {
    let mut grid = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Core Expertise").size(typography::TITLE_MD));

    for chunk in SKILLS.chunks(CARDS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::LG);

        for skill in chunk {
            let column = Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(skill.glyph).size(sizing::ICON_SM * 2.0))
                .push(Text::new(skill.title).size(typography::BODY))
                .push(
                    Text::new(skill.description)
                        .size(typography::CAPTION)
                        .color(palette::GRAY_200),
                );

            row = row.push(
                Container::new(column)
                    .width(Length::Fixed(sizing::CARD_WIDTH))
                    .padding(spacing::MD)
                    .style(styles::panel),
            );
        }

        grid = grid.push(row);
    }

    grid.into()
}

fn stats_section<'a>() -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXL);

    for stat in STATS {
        let value = Text::new(format!("{}{}", stat.value, stat.symbol))
            .size(typography::TITLE_LG)
            .color(palette::PRIMARY_400);

        let column = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(stat.glyph).size(sizing::ICON_SM))
            .push(value)
            .push(Text::new(stat.label).size(typography::CAPTION));

        row = row.push(column);
    }

    Container::new(row)
        .padding(spacing::LG)
        .style(styles::panel)
        .into()
}

fn cta_section<'a>() -> Element<'a, Message> {
    let heading = Text::new("Ready to transform your business?").size(typography::TITLE_MD);

    let cta = button(Text::new("Book a Free Consultation"))
        .padding([spacing::SM, spacing::LG])
        .style(styles::primary)
        .on_press(Message::CopyConsultationLink);

    let hint = Text::new(format!("Copies {CONSULTATION_URL} to your clipboard"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_200
        });

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(cta)
        .push(hint)
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .into()
}
