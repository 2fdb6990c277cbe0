use iced::widget::{button, column, container, horizontal_space, image, row, text, Column, Row};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::icons;
use super::images::ImageSlot;
use super::theme::{self, ACCENT, AVAILABLE, MUTED};
use super::Page;
use crate::state::data::{Brand, Category, Product};
use crate::state::navigation::View;
use crate::Message;

/// Edge of the square cover image on a product card
const COVER_SIZE: f32 = 184.0;

/// The catalog section: header, back button and the active drill-down level
pub fn view(page: Page<'_>) -> Element<'_, Message> {
    let t = page.text;
    let level = page.nav.view();

    let subtitle = match level {
        View::Brands => t.catalog_subtitle,
        View::Models => t.models_title,
        View::Detail => t.accessories_title,
    };

    let heading = column![
        text(t.catalog_title).size(40),
        text(subtitle).color(MUTED),
    ]
    .spacing(8)
    .width(Length::Fill)
    .align_x(Alignment::Center);

    let back = (level != View::Brands).then(|| {
        button(text(format!("← {}", t.back_button)))
            .on_press(Message::Back)
            .style(button::secondary)
    });

    let body = match (level, page.nav.selected_brand(), page.nav.selected_model()) {
        (View::Models, Some(brand), _) => models(page, brand),
        (View::Detail, Some(brand), Some(model)) => detail(page, brand, model),
        _ => brands(page),
    };

    Column::new()
        .push(heading)
        .push_maybe(back)
        .push(body)
        .spacing(24)
        .padding(40)
        .width(Length::Fill)
        .into()
}

fn brands(page: Page<'_>) -> Element<'_, Message> {
    let tiles: Vec<Element<'_, Message>> = page
        .catalog
        .brands()
        .iter()
        .map(|brand| {
            button(
                column![text(&brand.logo).size(44), text(&brand.name).size(14)]
                    .spacing(8)
                    .width(Length::Fill)
                    .align_x(Alignment::Center),
            )
            .width(Length::Fixed(160.0))
            .padding(20)
            .style(button::secondary)
            .on_press(Message::SelectBrand(brand.id.clone()))
            .into()
        })
        .collect();

    column![
        text(page.text.brands_title).size(20).color(ACCENT),
        Wrap::with_elements(tiles).spacing(16.0).line_spacing(16.0),
    ]
    .spacing(16)
    .into()
}

fn brand_color(brand: &Brand) -> iced::Color {
    theme::parse_hex(&brand.color).unwrap_or(ACCENT)
}

fn models<'a>(page: Page<'a>, brand: &'a Brand) -> Element<'a, Message> {
    let banner = container(
        row![
            text(&brand.logo).size(40),
            column![
                text(&brand.name).size(22),
                text(brand.description.get(page.lang)).color(MUTED),
            ]
            .spacing(4),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::brand_banner(brand_color(brand)));

    let tiles: Vec<Element<'a, Message>> = page
        .nav
        .current_model_list()
        .unwrap_or(&[])
        .iter()
        .map(|model| {
            button(text(model).size(18))
                .width(Length::Fixed(200.0))
                .padding(24)
                .style(button::secondary)
                .on_press(Message::SelectModel(model.clone()))
                .into()
        })
        .collect();

    column![banner, Wrap::with_elements(tiles).spacing(16.0).line_spacing(16.0)]
        .spacing(24)
        .into()
}

fn detail<'a>(page: Page<'a>, brand: &'a Brand, model: &'a str) -> Element<'a, Message> {
    let t = page.text;
    let color = brand_color(brand);

    let tags: Vec<Element<'a, Message>> = t
        .tags
        .iter()
        .map(|tag| {
            container(text(*tag).size(14))
                .padding([6, 12])
                .style(theme::card)
                .into()
        })
        .collect();

    let header = container(
        column![
            container(text(t.stock_badge).size(12).color(iced::Color::BLACK))
                .padding([4, 12])
                .style(theme::badge),
            row![
                text(&brand.name).size(40).color(color),
                text(model).size(40).color(MUTED),
            ]
            .spacing(12),
            text(format!("{} {} {}", t.equip_prefix, model, t.equip_suffix)).color(MUTED),
            Row::with_children(tags).spacing(8),
            button(text(t.btn_quote))
                .on_press(Message::CopyLink(page.links.truck(&brand.name, model, page.lang)))
                .style(theme::whatsapp),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(theme::brand_banner(color));

    let categories = page
        .nav
        .current_categories(page.catalog, page.lang)
        .unwrap_or(&[]);

    categories
        .iter()
        .fold(Column::new().push(header), |col, category| {
            col.push(category_block(page, category))
        })
        .spacing(40)
        .into()
}

fn category_block<'a>(page: Page<'a>, category: &'a Category) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = category
        .items
        .iter()
        .map(|product| product_card(page, product))
        .collect();

    let heading = row![
        text(icons::glyph(category.icon)).size(28).color(ACCENT),
        column![
            text(format!("{} {}", category.emoji, category.name)).size(26),
            text(&category.description).size(14).color(MUTED),
        ]
        .spacing(4),
        horizontal_space(),
        button(text(page.text.btn_quote).size(14))
            .on_press(Message::CopyLink(page.links.category(&category.name, page.lang)))
            .style(button::secondary),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    column![heading, Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0)]
        .spacing(16)
        .into()
}

fn product_card<'a>(page: Page<'a>, product: &'a Product) -> Element<'a, Message> {
    let t = page.text;
    let count = product.images.len();

    let cover: Element<'a, Message> = match product
        .images
        .first()
        .and_then(|reference| page.images.get(reference))
    {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(COVER_SIZE))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSlot::Failed) => cover_placeholder("⚠"),
        _ => cover_placeholder("…"),
    };

    let badge = (count > 1).then(|| text(format!("🖼 {}", count)).size(12).color(ACCENT));
    let price = product
        .price
        .as_ref()
        .map(|price| text(price).size(13).color(ACCENT));

    let footer = row![
        text(t.available).size(12).color(AVAILABLE),
        horizontal_space(),
        text(t.view_details).size(12).color(MUTED),
    ];

    button(
        Column::new()
            .push(cover)
            .push(text(&product.name).size(14))
            .push_maybe(price)
            .push_maybe(badge)
            .push(footer)
            .spacing(6),
    )
    .width(Length::Fixed(200.0))
    .padding(8)
    .style(button::secondary)
    .on_press(Message::OpenGallery(product.id.clone()))
    .into()
}

fn cover_placeholder<'a>(label: &'static str) -> Element<'a, Message> {
    container(text(label).size(32).color(MUTED))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(COVER_SIZE))
        .style(theme::card)
        .into()
}
