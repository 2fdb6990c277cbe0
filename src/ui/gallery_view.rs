use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, horizontal_space, image, opaque, row, text, Column, Row};
use iced::{Alignment, ContentFit, Element, Length, Theme};

use super::images::{ImageCache, ImageSlot};
use super::theme::{self, MUTED};
use crate::leads::LeadLinks;
use crate::state::gallery::GalleryState;
use crate::state::i18n::Translations;
use crate::Message;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Full-screen overlay for the open product, or `None` when closed
pub fn view<'a>(
    gallery: &'a GalleryState,
    images: &'a ImageCache,
    t: &'static Translations,
    links: &'a LeadLinks,
) -> Option<Element<'a, Message>> {
    let product = gallery.product()?;
    let index = gallery.image_index()?;
    let current = gallery.current_image()?;
    let count = product.images.len();
    let has_multiple = count > 1;

    let main: Element<'a, Message> = match images.get(current) {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(480.0))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(ImageSlot::Failed) => placeholder("⚠", Length::Fill, 480.0),
        _ => placeholder("…", Length::Fill, 480.0),
    };

    let arrow = |label: &'static str, message: Message| {
        button(text(label).size(32))
            .on_press(message)
            .style(button::text)
    };

    let stage = Row::new()
        .push_maybe(has_multiple.then(|| arrow("‹", Message::PrevImage)))
        .push(main)
        .push_maybe(has_multiple.then(|| arrow("›", Message::NextImage)))
        .spacing(12)
        .align_y(Alignment::Center);

    let thumbnails = has_multiple.then(|| {
        let thumbs: Vec<Element<'a, Message>> = product
            .images
            .iter()
            .enumerate()
            .map(|(i, reference)| {
                let content: Element<'a, Message> = match images.get(reference) {
                    Some(ImageSlot::Ready(handle)) => image(handle.clone())
                        .width(Length::Fixed(72.0))
                        .height(Length::Fixed(72.0))
                        .content_fit(ContentFit::Cover)
                        .into(),
                    _ => placeholder(&(i + 1).to_string(), Length::Fixed(72.0), 72.0),
                };
                let style: ButtonStyle = if i == index {
                    button::primary
                } else {
                    button::secondary
                };
                button(content)
                    .padding(2)
                    .style(style)
                    .on_press(Message::JumpToImage(i))
                    .into()
            })
            .collect();
        Row::with_children(thumbs).spacing(8)
    });

    let description = product
        .description
        .as_ref()
        .map(|d| text(d).size(14).color(MUTED));

    let body = Column::new()
        .push(row![
            horizontal_space(),
            button(text(format!("✕ {}", t.gallery_close)))
                .on_press(Message::CloseGallery)
                .style(button::text),
        ])
        .push(stage)
        .push_maybe(thumbnails)
        .push(text(format!("{} / {}", index + 1, count)).size(12).color(MUTED))
        .push(text(&product.name).size(26))
        .push_maybe(description)
        .push(
            button(text(t.gallery_quote))
                .on_press(Message::CopyLink(links.product(&product.name)))
                .style(theme::whatsapp),
        )
        .spacing(16)
        .max_width(1024.0)
        .align_x(Alignment::Center);

    Some(
        opaque(
            container(body)
                .padding(24)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(theme::backdrop),
        ),
    )
}

fn placeholder<'a>(label: &str, width: Length, height: f32) -> Element<'a, Message> {
    container(text(label.to_string()).size(height / 4.0).color(MUTED))
        .width(width)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(theme::card)
        .into()
}
