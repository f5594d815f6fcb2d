// SPDX-License-Identifier: MPL-2.0
//! `iced_vitae` is a single-page academic portfolio built with the Iced GUI
//! framework.
//!
//! The page is a fixed column of content blocks inside one scrollable.
//! Scrolling drives a visibility observer that fires entered-view events,
//! which in turn power scroll-spy navigation, fade-in reveals, and the
//! animated stat counters. A timer rotates the photo gallery carousel.

#![doc(html_root_url = "https://docs.rs/iced_vitae/0.1.0")]

pub mod anim;
pub mod app;
pub mod assets;
pub mod config;
pub mod content;
pub mod download;
pub mod error;
pub mod gallery;
pub mod page;
pub mod ui;
pub mod visibility;
