// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar pinned above the scrolling page.
//!
//! The brand mark on the left scrolls back to the hero block; the links on
//! the right jump to their sections. The link whose section currently owns
//! the scroll-spy highlight is tinted and underlined.

use crate::content;
use crate::page::Section;
use crate::ui::design_tokens::{border, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::space::{horizontal as horizontal_space, vertical as vertical_space};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    /// Section currently holding the scroll-spy highlight.
    pub active: Section,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    NavClicked(Section),
    BrandClicked,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::NavClicked(section) => Event::ScrollTo(section),
        Message::BrandClicked => Event::ScrollTo(Section::Hero),
    }
}

/// Render the navigation bar.
pub fn view(ctx: &ViewContext) -> Element<'static, Message> {
    let brand = button(
        Text::new(content::NAME)
            .size(typography::TITLE_SM)
            .color(palette::DEEP_INDIGO),
    )
    .on_press(Message::BrandClicked)
    .style(styles::button::nav_link(false))
    .padding([spacing::XXS, spacing::XS]);

    let mut links = Row::new().spacing(spacing::MD).align_y(Vertical::Center);
    for section in Section::NAV_ITEMS {
        links = links.push(nav_link(section, ctx.active == section));
    }

    let row = Row::new()
        .padding([spacing::XS, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(horizontal_space())
        .push(links);

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .style(styles::container::navbar)
        .into()
}

/// Build a single nav link with an underline slot under the label.
fn nav_link(section: Section, active: bool) -> Element<'static, Message> {
    let label = Text::new(section.title()).size(typography::BODY);

    let underline: Element<'static, Message> = if active {
        container(vertical_space().height(0.0))
            .width(Length::Fill)
            .height(border::NAV_UNDERLINE)
            .style(|_theme| container::Style {
                background: Some(palette::BLUE_ACCENT.into()),
                ..Default::default()
            })
            .into()
    } else {
        vertical_space().height(border::NAV_UNDERLINE).into()
    };

    let column = Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(underline);

    button(column)
        .on_press(Message::NavClicked(section))
        .style(styles::button::nav_link(active))
        .padding([spacing::XXS, spacing::XS])
        .into()
}
