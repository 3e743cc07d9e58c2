// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::i18n::I18n;
use crate::ui::edit;
use crate::ui::notifications::{self, Toast};
use crate::ui::upload;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub upload: &'a upload::State,
    pub edit: &'a edit::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Upload => upload::view(ctx.upload, ctx.i18n).map(Message::Upload),
        Screen::Edit => edit::view(edit::ViewContext {
            i18n: ctx.i18n,
            state: ctx.edit,
        })
        .map(Message::Edit),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
