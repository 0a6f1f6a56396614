// SPDX-License-Identifier: MPL-2.0
//! Poster gallery triggers and the open-poster overlay.

use super::{Message, State};
use crate::config::POSTER_FIT_RATIO;
use crate::i18n::fluent::I18n;
use crate::site::{Poster, PosterImage};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::skin::Skin;
use crate::ui::styles;
use crate::ui::widgets::pan_zoom;
use iced::mouse::Interaction;
use iced::widget::{
    button, container, mouse_area, opaque, stack, tooltip, Column, Container, Image, Row, Svg,
    Text,
};
use iced::{alignment, ContentFit, Element, Length, Size};
use std::collections::HashMap;

/// Render size of a poster: fitted inside the window box, then scaled.
///
/// `intrinsic` is the pixel size of raster images. Vector images fill the
/// whole box and rely on `ContentFit::Contain`.
#[must_use]
pub fn fitted_size(window: Size, intrinsic: Option<(u32, u32)>, scale: f32) -> Size {
    let frame = Size::new(window.width * POSTER_FIT_RATIO, window.height * POSTER_FIT_RATIO);
    let fitted = match intrinsic {
        Some((width, height)) if width > 0 && height > 0 => {
            let (width, height) = (width as f32, height as f32);
            let ratio = (frame.width / width).min(frame.height / height);
            Size::new(width * ratio, height * ratio)
        }
        _ => frame,
    };
    Size::new(fitted.width * scale, fitted.height * scale)
}

/// Contextual data needed to render the open poster.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub poster: &'a Poster,
    pub image: Option<&'a PosterImage>,
    pub window: Size,
    pub skin: Skin,
}

/// Full-window overlay for the open poster.
///
/// Only the image reports presses and wheel input; any other press inside
/// the overlay is a close request.
pub fn overlay<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let intrinsic = match ctx.image {
        Some(PosterImage::Raster { width, height, .. }) => Some((*width, *height)),
        _ => None,
    };
    let size = fitted_size(ctx.window, intrinsic, ctx.state.scale());

    let picture: Element<'a, Message> = match ctx.image {
        Some(PosterImage::Raster { handle, .. }) => Image::new(handle.clone())
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .content_fit(ContentFit::Fill)
            .into(),
        Some(PosterImage::Vector { handle }) => Svg::new(handle.clone())
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .content_fit(ContentFit::Contain)
            .into(),
        None => missing_image(ctx.i18n, size),
    };

    let cursor = if ctx.state.is_panning() {
        Interaction::Grabbing
    } else if ctx.state.is_zoomed() {
        Interaction::Grab
    } else {
        Interaction::ZoomIn
    };

    let picture = mouse_area(picture)
        .on_press(Message::ImagePressed)
        .on_scroll(Message::Wheel)
        .interaction(cursor);

    let backdrop = mouse_area(
        Container::new(pan_zoom(picture, ctx.state.offset()))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackgroundPressed);

    opaque(stack![backdrop, caption_bar(&ctx)])
}

fn caption_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.poster.title.as_str())
                .size(typography::TITLE_SM)
                .font(ctx.skin.font()),
        );
    if let Some(caption) = &ctx.poster.caption {
        details = details.push(Text::new(caption.as_str()).size(typography::CAPTION));
    }
    details = details.push(
        Text::new(ctx.i18n.tr("poster-close-hint"))
            .size(typography::CAPTION)
            .color(iced::Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::WHITE
            }),
    );

    // Pressing this reaches the backdrop like any non-image press.
    let close = button(icons::sized(
        icons::colored(icons::cross(), palette::WHITE),
        sizing::ICON_SM,
    ))
    .on_press(Message::BackgroundPressed)
    .padding(spacing::XS)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    let plate = Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(details)
            .push(close),
    )
    .padding(spacing::SM)
    .style(styles::overlay::caption(ctx.skin.corner_radius()));

    Container::new(plate)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn missing_image<'a>(i18n: &I18n, size: Size) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("poster-image-missing")).size(typography::BODY))
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::caption(0.0))
        .into()
}

/// Gallery of poster triggers. `alpha` is the enclosing section's fade.
pub fn gallery<'a>(
    i18n: &I18n,
    posters: &'a [Poster],
    images: &'a HashMap<String, PosterImage>,
    skin: Skin,
    alpha: f32,
) -> Element<'a, Message> {
    let cards = posters.iter().map(|poster| {
        let thumbnail: Element<'a, Message> = match images.get(&poster.id) {
            Some(PosterImage::Raster { handle, .. }) => Image::new(handle.clone())
                .width(Length::Fixed(sizing::POSTER_THUMBNAIL_WIDTH))
                .opacity(alpha)
                .into(),
            Some(PosterImage::Vector { handle }) => Svg::new(handle.clone())
                .width(Length::Fixed(sizing::POSTER_THUMBNAIL_WIDTH))
                .opacity(alpha)
                .into(),
            None => Container::new(Text::new(i18n.tr("poster-image-missing")).size(typography::CAPTION))
                .width(Length::Fixed(sizing::POSTER_THUMBNAIL_WIDTH))
                .height(Length::Fixed(sizing::POSTER_THUMBNAIL_WIDTH * 0.75))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into(),
        };

        let card = button(
            Column::new()
                .spacing(spacing::XS)
                .width(Length::Fixed(sizing::POSTER_THUMBNAIL_WIDTH))
                .push(thumbnail)
                .push(Text::new(poster.title.as_str()).size(typography::BODY_SM)),
        )
        .on_press(Message::Open(poster.id.clone()))
        .padding(spacing::XS)
        .style(styles::button::thumbnail(skin.corner_radius(), alpha));

        let hint = i18n.tr_with_args("nav-open-poster", &[("title", poster.title.as_str())]);
        tooltip(
            card,
            container(Text::new(hint).size(typography::CAPTION)).padding(spacing::XXS),
            tooltip::Position::Bottom,
        )
        .style(container::rounded_box)
        .into()
    });

    Row::with_children(cards).spacing(spacing::MD).wrap().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn landscape_raster_is_bounded_by_width() {
        let size = fitted_size(Size::new(1000.0, 1000.0), Some((2000, 1000)), 1.0);
        assert_abs_diff_eq!(size.width, 900.0, epsilon = 1e-3);
        assert_abs_diff_eq!(size.height, 450.0, epsilon = 1e-3);
    }

    #[test]
    fn portrait_raster_is_bounded_by_height() {
        let size = fitted_size(Size::new(1000.0, 800.0), Some((600, 1200)), 1.0);
        assert_abs_diff_eq!(size.height, 720.0, epsilon = 1e-3);
        assert_abs_diff_eq!(size.width, 360.0, epsilon = 1e-3);
    }

    #[test]
    fn scale_multiplies_fitted_size() {
        let size = fitted_size(Size::new(1000.0, 1000.0), Some((1000, 1000)), 2.0);
        assert_abs_diff_eq!(size.width, 1800.0, epsilon = 1e-3);
        assert_abs_diff_eq!(size.height, 1800.0, epsilon = 1e-3);
    }

    #[test]
    fn vector_fills_the_frame() {
        let size = fitted_size(Size::new(800.0, 600.0), None, 1.0);
        assert_abs_diff_eq!(size.width, 720.0, epsilon = 1e-3);
        assert_abs_diff_eq!(size.height, 540.0, epsilon = 1e-3);
    }
}
