// SPDX-License-Identifier: MPL-2.0
//! Upload screen: pick, drop or paste a video, follow the submission, then
//! download or edit the generated thumbnail.

mod component;
mod view;

pub use component::{Event, Message, Preview, State};
pub use view::view;
