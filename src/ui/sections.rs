/// Static page sections around the catalog

use chrono::Datelike;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::icons;
use super::scroll::{Anchor, CONTACT_HEIGHT, FOOTER_HEIGHT, HERO_HEIGHT, SERVICES_HEIGHT};
use super::theme::{self, ACCENT, MUTED};
use super::Page;
use crate::leads::{mailto_link, tel_link};
use crate::state::data::Icon;
use crate::Message;

const SHOP_NAME: &str = "TRACTOLUJOS TAMAYO";

/// Top bar: shop name, section links and the language toggle
pub fn header(page: Page<'_>, status: Option<String>) -> Element<'_, Message> {
    let t = page.text;
    let nav = [
        (t.nav_home, Anchor::Hero),
        (t.nav_catalog, Anchor::Catalog),
        (t.nav_services, Anchor::Services),
        (t.nav_contact, Anchor::Contact),
    ];

    let bar = nav
        .into_iter()
        .fold(
            Row::new()
                .push(
                    button(column![
                        text("TRACTOLUJOS").size(22).color(ACCENT),
                        text("TAMAYO").size(12).color(MUTED),
                    ])
                    .on_press(Message::Home)
                    .style(button::text),
                )
                .push(horizontal_space()),
            |bar, (label, anchor)| {
                bar.push(
                    button(text(label))
                        .on_press(Message::ScrollTo(anchor))
                        .style(button::text),
                )
            },
        )
        .push(
            button(text(page.lang.code()))
                .on_press(Message::ToggleLanguage)
                .style(button::secondary),
        )
        .spacing(8)
        .padding([12, 24])
        .align_y(Alignment::Center);

    Column::new()
        .push(bar)
        .push_maybe(status.map(|s| {
            container(text(s).size(13).color(ACCENT))
                .width(Length::Fill)
                .align_x(Horizontal::Center)
        }))
        .into()
}

pub fn hero(page: Page<'_>) -> Element<'_, Message> {
    let t = page.text;
    let [first, second, third] = t.main_title;

    let content = column![
        text(t.slogan).size(14).color(ACCENT),
        text(first).size(56),
        text(second).size(56).color(ACCENT),
        text(third).size(56),
        container(text(t.hero_description).size(18).color(MUTED)).max_width(640.0),
        row![
            button(text(t.btn_catalog))
                .padding(14)
                .on_press(Message::ScrollTo(Anchor::Catalog))
                .style(button::primary),
            button(text(t.btn_quote))
                .padding(14)
                .on_press(Message::CopyLink(page.links.quote()))
                .style(button::secondary),
        ]
        .spacing(16),
    ]
    .spacing(12);

    container(content)
        .padding(48)
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT))
        .align_y(Vertical::Center)
        .into()
}

pub fn services(page: Page<'_>) -> Element<'_, Message> {
    let t = page.text;
    let icons_in_order = [Icon::Wrench, Icon::Crown, Icon::Shield, Icon::MapPin];

    let cards: Vec<Element<'_, Message>> = icons_in_order
        .into_iter()
        .zip(t.services)
        .map(|(icon, (title, desc))| {
            container(
                column![
                    text(icons::glyph(icon)).size(32).color(ACCENT),
                    text(title).size(20),
                    text(desc).size(14).color(MUTED),
                ]
                .spacing(12)
                .align_x(Alignment::Center),
            )
            .padding(24)
            .width(Length::Fill)
            .style(theme::card)
            .into()
        })
        .collect();

    container(
        column![
            section_heading(t.services_title, t.services_subtitle),
            Row::with_children(cards).spacing(24),
        ]
        .spacing(32),
    )
    .padding(40)
    .width(Length::Fill)
    .height(Length::Fixed(SERVICES_HEIGHT))
    .into()
}

pub fn contact(page: Page<'_>) -> Element<'_, Message> {
    let t = page.text;
    let config = page.config;

    let locations = config.locations.iter().fold(Column::new().spacing(12), |col, location| {
        col.push(
            location
                .lines
                .iter()
                .fold(Column::new().push(text(&location.region).size(16)), |col, line| {
                    col.push(text(line).size(13).color(MUTED))
                }),
        )
    });

    let phones = config.phones.iter().fold(Column::new().spacing(8), |col, phone| {
        col.push(
            button(text(phone).size(16))
                .on_press(Message::CopyLink(tel_link(phone)))
                .style(button::text),
        )
    });

    let email = button(text(&config.email).size(16))
        .on_press(Message::CopyLink(mailto_link(&config.email)))
        .style(button::text);

    container(
        column![
            section_heading(t.contact_title, t.contact_subtitle),
            row![
                panel(Icon::MapPin, t.locations, locations.into()),
                panel(Icon::Phone, t.phones, phones.into()),
                panel(Icon::Mail, t.email, email.into()),
            ]
            .spacing(24),
        ]
        .spacing(32),
    )
    .padding(40)
    .width(Length::Fill)
    .height(Length::Fixed(CONTACT_HEIGHT))
    .into()
}

pub fn footer(page: Page<'_>) -> Element<'_, Message> {
    let year = chrono::Local::now().year();
    container(
        column![
            text(format!("© {} {}", year, page.text.footer_copyright)).size(13).color(MUTED),
            text(SHOP_NAME).size(12).color(ACCENT),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(FOOTER_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

/// Floating chat button in the bottom-right corner
pub fn whatsapp_button(page: Page<'_>) -> Element<'_, Message> {
    container(
        button(text(format!("{} {}", icons::glyph(Icon::Message), page.text.live_chat)))
            .padding(14)
            .on_press(Message::CopyLink(page.links.chat()))
            .style(theme::whatsapp),
    )
    .padding(24)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .into()
}

fn panel<'a>(icon: Icon, title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![
            row![text(icons::glyph(icon)).color(ACCENT), text(title).size(20)].spacing(8),
            body,
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(theme::card)
    .into()
}

fn section_heading<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![text(title).size(40), text(subtitle).color(MUTED)]
        .spacing(8)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}
