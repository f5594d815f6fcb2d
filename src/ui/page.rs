// SPDX-License-Identifier: MPL-2.0
//! The scrolling page body: all fourteen blocks in document order.
//!
//! Every block is rendered inside a container of the exact height declared
//! in [`crate::page::layout`], so the offsets the visibility observer works
//! with are the offsets the scrollable actually produces. Reveal opacity is
//! applied by fading text colors; the rise effect shifts content down by up
//! to 16 logical pixels inside the fixed-height container.

use crate::anim::{Counters, Reveals};
use crate::assets;
use crate::content;
use crate::gallery::Gallery;
use crate::page::{layout, Section};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{gallery as gallery_view, styles};
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length, Padding,
};
use std::time::Instant;

/// Messages emitted by page content.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Gallery(gallery_view::Message),
    DownloadCv,
    ScrollTo(Section),
}

/// Animation and rotation state the page needs to render one frame.
pub struct ViewContext<'a> {
    pub reveals: &'a Reveals,
    pub counters: &'a Counters,
    pub gallery: &'a Gallery,
    pub now: Instant,
}

/// Render the whole page as one column of fixed-height blocks.
pub fn view(ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let mut column = Column::new().width(Length::Fill);

    for (i, section) in Section::ALL.iter().copied().enumerate() {
        let alpha = if section.reveals() {
            ctx.reveals.opacity(section.index(), ctx.now)
        } else {
            1.0
        };
        let rise = if section.reveals() {
            ctx.reveals.rise(section.index(), ctx.now)
        } else {
            0.0
        };

        let body = match section {
            Section::Hero => hero(alpha),
            Section::About => about(alpha),
            Section::Stats => stats(ctx.counters, alpha),
            Section::Education => education(alpha),
            Section::Experience => experience(alpha),
            Section::Research => research(alpha),
            Section::Workshops => workshops(alpha),
            Section::Publications => publications(alpha),
            Section::Awards => awards(alpha),
            Section::Skills => skills(alpha),
            Section::Teaching => teaching(alpha),
            Section::Gallery => gallery_block(ctx.gallery, alpha),
            Section::Contact => contact(alpha),
            Section::Footer => footer(),
        };

        column = column.push(block_frame(section, body, rise, i % 2 == 1));
    }

    column.into()
}

/// Wrap block content in its fixed-height band. The rise offset is spent
/// from the top padding so the block height never changes mid-animation.
fn block_frame(
    section: Section,
    body: Element<'static, Message>,
    rise: f32,
    alt: bool,
) -> Element<'static, Message> {
    let inner = Container::new(body)
        .width(Length::Fixed(sizing::CONTENT_WIDTH))
        .height(Length::Fill)
        .padding(Padding {
            top: spacing::XL + rise,
            bottom: spacing::XL,
            left: spacing::LG,
            right: spacing::LG,
        });

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(layout::block_height(section)))
        .align_x(Horizontal::Center)
        .clip(true)
        .style(styles::container::block(alt))
        .into()
}

fn faded(base: Color, alpha: f32) -> Color {
    Color {
        a: base.a * alpha,
        ..base
    }
}

fn heading(title: &'static str, alpha: f32) -> Element<'static, Message> {
    Text::new(title)
        .size(typography::TITLE_LG)
        .color(faded(palette::DEEP_INDIGO, alpha))
        .into()
}

fn body_text(text: &'static str, alpha: f32) -> Element<'static, Message> {
    Text::new(text)
        .size(typography::BODY)
        .color(faded(palette::MUTED, alpha))
        .into()
}

fn hero(alpha: f32) -> Element<'static, Message> {
    let badge = Text::new(content::ROLE_BADGE)
        .size(typography::BODY)
        .color(faded(palette::BLUE_ACCENT, alpha));

    let name = Text::new(content::NAME)
        .size(typography::DISPLAY)
        .color(faded(palette::CHARCOAL, alpha));

    let tagline = Text::new(content::TAGLINE)
        .size(typography::BODY_LG)
        .color(faded(palette::MUTED, alpha));

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new("Download CV").size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::DownloadCv),
        )
        .push(
            button(Text::new("Get in Touch").size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline)
                .on_press(Message::ScrollTo(Section::Contact)),
        );

    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center);
    if let Some(handle) = assets::image_handle(assets::PROFILE_IMAGE) {
        column = column.push(image(handle).height(140.0));
    }
    column
        .push(badge)
        .push(name)
        .push(tagline)
        .push(actions)
        .into()
}

fn about(alpha: f32) -> Element<'static, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(heading(Section::About.title(), alpha));
    for paragraph in content::ABOUT_PARAGRAPHS {
        column = column.push(body_text(paragraph, alpha));
    }

    match assets::image_handle(assets::ABOUT_IMAGE) {
        Some(handle) => Row::new()
            .spacing(spacing::XL)
            .push(column.width(Length::FillPortion(3)))
            .push(
                Container::new(image(handle).width(Length::Fill))
                    .width(Length::FillPortion(2))
                    .align_y(Vertical::Center),
            )
            .into(),
        None => column.into(),
    }
}

fn stats(counters: &Counters, alpha: f32) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::LG);
    for (i, stat) in content::STATS.iter().enumerate() {
        let value = Text::new(counters.text(i).to_owned())
            .size(typography::DISPLAY)
            .color(faded(palette::BLUE_ACCENT, alpha));
        let label = Text::new(stat.label)
            .size(typography::BODY)
            .color(faded(palette::MUTED, alpha));

        row = row.push(
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(value)
                    .push(label),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(heading(Section::Stats.title(), alpha))
        .push(row)
        .into()
}

fn education(alpha: f32) -> Element<'static, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(heading(Section::Education.title(), alpha));
    for entry in content::EDUCATION {
        let card = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(entry.degree)
                    .size(typography::TITLE_SM)
                    .color(faded(palette::CHARCOAL, alpha)),
            )
            .push(body_text(entry.institution, alpha))
            .push(
                Text::new(format!("{} · {}", entry.year, entry.score))
                    .size(typography::CAPTION)
                    .color(faded(palette::MUTED, alpha)),
            );
        column = column.push(
            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::card),
        );
    }
    column.into()
}

fn experience(alpha: f32) -> Element<'static, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(heading(Section::Experience.title(), alpha));
    for position in content::EXPERIENCE {
        let mut card = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(position.title)
                    .size(typography::TITLE_SM)
                    .color(faded(palette::CHARCOAL, alpha)),
            )
            .push(
                Text::new(format!("{} · {}", position.organization, position.period))
                    .size(typography::CAPTION)
                    .color(faded(palette::BLUE_ACCENT, alpha)),
            );
        if let Some(first_duty) = position.duties.first() {
            card = card.push(body_text(first_duty, alpha));
        }
        column = column.push(
            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::card),
        );
    }
    column.into()
}

fn research(alpha: f32) -> Element<'static, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(heading(Section::Research.title(), alpha));
    for project in content::RESEARCH_PROJECTS {
        let mut tags = Row::new().spacing(spacing::XS);
        for technique in project.techniques {
            tags = tags.push(
                Container::new(
                    Text::new(*technique)
                        .size(typography::CAPTION)
                        .color(faded(palette::DEEP_INDIGO, alpha)),
                )
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::card),
            );
        }
        let card = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(project.title)
                    .size(typography::TITLE_SM)
                    .color(faded(palette::CHARCOAL, alpha)),
            )
            .push(body_text(project.description, alpha))
            .push(tags);
        column = column.push(
            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::card),
        );
    }
    column.into()
}

fn workshops(alpha: f32) -> Element<'static, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(heading(Section::Workshops.title(), alpha));
    for workshop in content::WORKSHOPS {
        let card = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(workshop.title)
                    .size(typography::BODY_LG)
                    .color(faded(palette::CHARCOAL, alpha)),
            )
            .push(
                Text::new(format!("{} · {}", workshop.organization, workshop.role))
                    .size(typography::CAPTION)
                    .color(faded(palette::MUTED, alpha)),
            );
        column = column.push(
            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::card),
        );
    }
    column.into()
}

fn publications(alpha: f32) -> Element<'static, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(heading(Section::Publications.title(), alpha));
    for publication in content::PUBLICATIONS {
        let card = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(publication.title)
                    .size(typography::BODY)
                    .color(faded(palette::CHARCOAL, alpha)),
            )
            .push(
                Text::new(format!(
                    "{} ({}) · {}",
                    publication.journal, publication.year, publication.impact
                ))
                .size(typography::CAPTION)
                .color(faded(palette::MUTED, alpha)),
            );
        column = column.push(card);
    }
    column.into()
}

fn awards(alpha: f32) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::LG);
    for award in content::AWARDS {
        let mut card = Column::new().spacing(spacing::XXS);
        if let Some(handle) = assets::image_handle(award.image) {
            card = card.push(image(handle).height(140.0));
        }
        let card = card
            .push(
                Text::new(award.title)
                    .size(typography::TITLE_SM)
                    .color(faded(palette::AMBER, alpha)),
            )
            .push(body_text(award.organization, alpha))
            .push(body_text(award.description, alpha))
            .push(
                Text::new(format!("{} · {}", award.venue, award.date))
                    .size(typography::CAPTION)
                    .color(faded(palette::MUTED, alpha)),
            );
        row = row.push(
            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(heading(Section::Awards.title(), alpha))
        .push(row)
        .into()
}

fn skills(alpha: f32) -> Element<'static, Message> {
    let mut core = Column::new().spacing(spacing::XXS).push(
        Text::new("Laboratory & Analysis")
            .size(typography::TITLE_SM)
            .color(faded(palette::CHARCOAL, alpha)),
    );
    for skill in content::CORE_SKILLS {
        core = core.push(body_text(skill, alpha));
    }

    let mut software = Column::new().spacing(spacing::XXS).push(
        Text::new("Software & Statistics")
            .size(typography::TITLE_SM)
            .color(faded(palette::CHARCOAL, alpha)),
    );
    for skill in content::SOFTWARE_SKILLS {
        software = software.push(body_text(skill, alpha));
    }

    Column::new()
        .spacing(spacing::LG)
        .push(heading(Section::Skills.title(), alpha))
        .push(
            Row::new()
                .spacing(spacing::XL)
                .push(core.width(Length::Fill))
                .push(software.width(Length::Fill)),
        )
        .into()
}

fn teaching(alpha: f32) -> Element<'static, Message> {
    let mut courses = Row::new().spacing(spacing::XS);
    for course in content::COURSES {
        courses = courses.push(
            Container::new(
                Text::new(course)
                    .size(typography::CAPTION)
                    .color(faded(palette::DEEP_INDIGO, alpha)),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::card),
        );
    }

    Column::new()
        .spacing(spacing::MD)
        .push(heading(Section::Teaching.title(), alpha))
        .push(body_text(content::TEACHING_PHILOSOPHY, alpha))
        .push(courses)
        .into()
}

fn gallery_block(gallery: &Gallery, alpha: f32) -> Element<'static, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(heading(Section::Gallery.title(), alpha))
        .push(gallery_view::carousel(gallery).map(Message::Gallery))
        .into()
}

fn contact(alpha: f32) -> Element<'static, Message> {
    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(heading(Section::Contact.title(), alpha))
        .push(body_text(content::CONTACT_BLURB, alpha))
        .push(
            Text::new(content::CONTACT_EMAIL)
                .size(typography::BODY_LG)
                .color(faded(palette::BLUE_ACCENT, alpha)),
        )
        .into()
}

fn footer() -> Element<'static, Message> {
    Container::new(
        Text::new(content::FOOTER_TEXT)
            .size(typography::CAPTION)
            .color(palette::MUTED),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::GALLERY_IMAGES;

    fn context<'a>(
        reveals: &'a Reveals,
        counters: &'a Counters,
        gallery: &'a Gallery,
    ) -> ViewContext<'a> {
        ViewContext {
            reveals,
            counters,
            gallery,
            now: Instant::now(),
        }
    }

    #[test]
    fn page_view_renders_every_block() {
        let reveals = Reveals::new(Section::ALL.len());
        let counters = Counters::new(content::STATS.map(|s| (s.target, s.suffix)));
        let gallery = Gallery::new(GALLERY_IMAGES.to_vec());
        let _element = view(&context(&reveals, &counters, &gallery));
    }

    #[test]
    fn page_view_renders_mid_animation() {
        let now = Instant::now();
        let mut reveals = Reveals::new(Section::ALL.len());
        reveals.entered_view(Section::About.index(), now, false);
        let mut counters = Counters::new(content::STATS.map(|s| (s.target, s.suffix)));
        counters.entered_view(now, false);
        let gallery = Gallery::new(GALLERY_IMAGES.to_vec());
        let _element = view(&context(&reveals, &counters, &gallery));
    }
}
