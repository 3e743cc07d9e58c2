// SPDX-License-Identifier: MPL-2.0
//! Centralized styles shared by the screens.

pub mod button;
pub mod container;
