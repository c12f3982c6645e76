// ABOUTME: Message template command for fitform-cli
// ABOUTME: Prints the lead-to-booking sequence or writes it to a file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use anyhow::Result;
use fitform::export::{build_drip_template, write_drip_template};
use std::path::Path;

/// Print or write the drip template
pub fn run(name: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            write_drip_template(path, name)?;
            println!("Template written to {}", path.display());
        }
        None => print!("{}", build_drip_template(name)),
    }
    Ok(())
}
