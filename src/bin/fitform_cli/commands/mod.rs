// ABOUTME: Command modules for fitform-cli
// ABOUTME: Assessment, CSV export, and message template commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

pub mod assess;
pub mod export;
pub mod template;
