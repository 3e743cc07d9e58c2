// SPDX-License-Identifier: MPL-2.0
//! "Coming soon" screen reached from the thumbnail's Edit button.
//!
//! Collects an email address for a future announcement. Nothing is sent
//! anywhere: a non-blank address is logged and acknowledged.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text, text_input, Column, Container, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    NotifyMe,
    GoHome,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    GoHome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    email: String,
    subscribed: bool,
}

impl State {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(email) => {
                self.email = email;
                self.subscribed = false;
                Event::None
            }
            Message::NotifyMe => {
                let email = self.email.trim();
                if !email.is_empty() {
                    tracing::debug!("notify-me request recorded");
                    self.subscribed = true;
                }
                Event::None
            }
            Message::GoHome => {
                *self = Self::default();
                Event::GoHome
            }
        }
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("edit-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("edit-subtitle")).size(typography::BODY_LG))
        .push(
            text_input(&i18n.tr("edit-email-placeholder"), ctx.state.email())
                .on_input(Message::EmailChanged)
                .on_submit(Message::NotifyMe)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::EMAIL_INPUT_WIDTH)),
        )
        .push(
            button(Text::new(i18n.tr("edit-notify-me")).size(typography::BODY_LG))
                .on_press(Message::NotifyMe)
                .padding(spacing::SM)
                .style(styles::button::primary),
        );

    if ctx.state.is_subscribed() {
        content = content.push(
            Text::new(i18n.tr("edit-thank-you"))
                .size(typography::BODY)
                .style(|_: &Theme| text::Style {
                    color: Some(palette::SUCCESS_500),
                }),
        );
    }

    content = content.push(
        button(Text::new(i18n.tr("edit-go-home")).size(typography::BODY))
            .on_press(Message::GoHome)
            .padding(spacing::XS)
            .style(styles::button::secondary),
    );

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
