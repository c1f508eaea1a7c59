// SPDX-License-Identifier: MPL-2.0
//! `service_deck` is a desktop viewer for a company's service catalog,
//! built with the Iced GUI framework.
//!
//! It fetches the catalog once from a configurable HTTP endpoint, renders one
//! card per service with a pointer-driven tilt effect, and keeps the page
//! interactive through the loading and failure states.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod icon;
pub mod ui;
