// Copyright 2026 Prospektor Contributors
// SPDX-License-Identifier: Apache-2.0

//! Prospekt flyer scraper library — category discovery, gallery extraction,
//! and JSON persistence for prospektmaschine.de.
//!
//! This library crate exposes the core modules for integration testing.

pub mod catalog;
pub mod crawler;
pub mod dates;
pub mod error;
pub mod extractor;
pub mod http;
pub mod model;
pub mod renderer;
pub mod writer;
