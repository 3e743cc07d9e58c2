// SPDX-License-Identifier: MPL-2.0
//! Upload screen rendering: one of drop zone, progress or thumbnail.

use super::component::{Message, Preview, State};
use crate::domain::thumbnail::{
    Presentation, Progress, ProgressSource, SelectedInput, SubmissionState,
};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, image, progress_bar, text, text_input, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length, Theme};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let controller = state.controller();

    let body = match controller.presentation() {
        Presentation::Affordance => affordance(state, i18n),
        Presentation::Progress => progress(controller.state(), i18n),
        Presentation::Thumbnail => thumbnail(state.preview(), i18n),
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("upload-title")).size(typography::TITLE_LG))
        .push(body);

    Container::new(
        Container::new(content)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .padding(spacing::XL)
            .style(styles::container::card),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn affordance<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let controller = state.controller();

    let choose = button(Text::new(i18n.tr("upload-choose-files")).size(typography::BODY))
        .on_press(Message::ChooseFiles)
        .padding(spacing::XS)
        .style(styles::button::secondary);

    let drop_zone = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("upload-drop-hint")).size(typography::BODY_LG))
            .push(choose),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
    .style(styles::container::drop_zone(controller.is_dragging()));

    let url_row = Row::new()
        .spacing(spacing::XS)
        .push(
            text_input(&i18n.tr("upload-url-placeholder"), state.url_draft())
                .on_input(Message::UrlDraftChanged)
                .on_submit(Message::UseUrl)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::URL_INPUT_WIDTH)),
        )
        .push(
            button(Text::new(i18n.tr("upload-use-url")).size(typography::BODY))
                .on_press(Message::UseUrl)
                .padding(spacing::XS)
                .style(styles::button::secondary),
        );

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(drop_zone)
        .push(url_row);

    if let Some(input) = controller.input() {
        column = column.push(Text::new(selected_label(input, i18n)).size(typography::BODY));
    }

    if let SubmissionState::Failed(err) = controller.state() {
        column = column.push(
            Text::new(i18n.tr_with_args(err.i18n_key(), &[("message", &err.to_string())]))
                .size(typography::BODY_SM)
                .style(|_: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("upload-generate")).size(typography::BODY_LG))
                .on_press(Message::Submit)
                .padding(spacing::SM)
                .style(styles::button::primary),
        )
        .push(cancel_button(i18n));

    column.push(actions).into()
}

fn progress<'a>(state: &SubmissionState, i18n: &'a I18n) -> Element<'a, Message> {
    let (value, label_key) = match state {
        SubmissionState::Submitting {
            progress,
            source: ProgressSource::Measured,
            ..
        } => (*progress, "upload-progress-uploading"),
        SubmissionState::Submitting { progress, .. } => (*progress, "upload-progress-processing"),
        _ => (Progress::ZERO, "upload-progress-processing"),
    };
    let percent = value.value().to_string();

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr_with_args(label_key, &[("percent", percent.as_str())]))
                .size(typography::BODY_LG),
        )
        .push(
            Container::new(
                progress_bar(0.0..=1.0, value.fraction())
                    .girth(sizing::PROGRESS_BAR_HEIGHT),
            )
            .width(Length::Fill),
        )
        .push(cancel_button(i18n))
        .into()
}

fn thumbnail<'a>(preview: Option<&'a Preview>, i18n: &'a I18n) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match preview {
        Some(Preview::Ready(_, handle)) => image::Image::new(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL_MAX_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_MAX_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(Preview::Unavailable(_)) => {
            Text::new(i18n.tr("upload-preview-unavailable")).size(typography::BODY).into()
        }
        Some(Preview::Loading(_)) | None => {
            Text::new(i18n.tr("upload-preview-loading")).size(typography::BODY).into()
        }
    };

    let frame = Container::new(picture)
        .center_x(Length::Fixed(sizing::THUMBNAIL_MAX_WIDTH))
        .center_y(Length::Fixed(sizing::THUMBNAIL_MAX_HEIGHT))
        .style(styles::container::thumbnail_frame);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("upload-download")).size(typography::BODY_LG))
                .on_press(Message::Download)
                .padding(spacing::SM)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("upload-edit")).size(typography::BODY_LG))
                .on_press(Message::Edit)
                .padding(spacing::SM)
                .style(styles::button::secondary),
        )
        .push(cancel_button(i18n));

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("upload-result-title")).size(typography::TITLE_SM))
        .push(frame)
        .push(actions)
        .into()
}

fn cancel_button(i18n: &I18n) -> Element<'_, Message> {
    button(Text::new(i18n.tr("upload-cancel")).size(typography::BODY_LG))
        .on_press(Message::Cancel)
        .padding(spacing::SM)
        .style(styles::button::danger)
        .into()
}

fn selected_label(input: &SelectedInput, i18n: &I18n) -> String {
    match input {
        SelectedInput::File(file) => i18n.tr_with_args(
            "upload-selected-file",
            &[("name", file.name()), ("size", &file.size_mb_label())],
        ),
        SelectedInput::Url(url) => i18n.tr_with_args("upload-selected-url", &[("url", url.as_str())]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::thumbnail::{RequestId, VideoFile};

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn file_label_shows_name_and_size() {
        let file = VideoFile::new("/tmp/clip.mp4", 5 * 1024 * 1024, None);
        let label = selected_label(&SelectedInput::File(file), &english());
        assert_eq!(label, "clip.mp4 (5.00 MB)");
    }

    #[test]
    fn url_label_shows_address() {
        let url = crate::domain::thumbnail::validator::validate_url("https://a.example/v.mp4")
            .expect("valid url");
        let label = selected_label(&SelectedInput::Url(url), &english());
        assert!(label.contains("https://a.example/v.mp4"));
    }

    #[test]
    fn every_presentation_renders() {
        let i18n = english();
        let state = State::default();
        let _ = view(&state, &i18n);
        let _ = progress(
            &SubmissionState::Submitting {
                request: RequestId::new(1),
                progress: Progress::new(40),
                source: ProgressSource::Estimated,
            },
            &i18n,
        );
        let _ = thumbnail(None, &i18n);
    }
}
