// ABOUTME: Lead-to-booking message sequence for chat-app step delivery
// ABOUTME: Five staged messages with the client name substituted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use super::write_text;
use crate::logging::AppLogger;
use fitform_core::errors::AppResult;
use std::path::Path;

/// Name used when none is supplied
pub const DEFAULT_NAME_PLACEHOLDER: &str = "(name)";

/// Number of steps in the sequence
pub const DRIP_STEPS: usize = 5;

/// Build the five-step message sequence for `name`
///
/// A blank name falls back to [`DEFAULT_NAME_PLACEHOLDER`] so the output can
/// be used as a fill-in template.
#[must_use]
pub fn build_drip_template(name: &str) -> String {
    let name = match name.trim() {
        "" => DEFAULT_NAME_PLACEHOLDER,
        trimmed => trimmed,
    };
    format!(
        "[Step delivery template: lead to booking]

Step0 (right after sign-up):
Hi {name}, thanks for signing up!
We'll run alongside you on the shortest path to your goal. Tomorrow we'll send the digest of your free AI assessment.

Step1 (next day, 9:00):
AI assessment digest:
- Body metrics: BMI / estimated BMR / daily calorie target
- PFC balance: high protein, moderate fat, carbohydrate for the rest
- First week: posture reset plus a light full-body routine
-> Reply \"report\" for the detailed report

Step2 (next day, 9:00):
Posture checkpoints:
- Shoulder and pelvis asymmetry, head tilt, knees caving in
- Corrective drills (5 minutes a day)
-> Reply \"consult\" for a free 15-minute form consultation

Step3 (next day, 9:00):
Meal template:
- Breakfast: oatmeal, plain yogurt, berries
- Lunch: chicken breast, mixed-grain rice, salad
- Dinner: foil-baked white fish, steamed vegetables, potato
-> Reply \"meals\" for a personalised meal plan

Step4 (next day, 9:00):
[First 5 only] Trial session (30 min, online), free
- A personal routine based on your AI assessment
- Your top 3 current issues made visible
Reply with up to three preferred dates, for example:
\"1st: 10/20 20:00  2nd: 10/21 21:30  3rd: 10/22 19:00\"
"
    )
}

/// Write the sequence to `path` (UTF-8 with BOM)
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be written
pub fn write_drip_template(path: &Path, name: &str) -> AppResult<()> {
    write_text(path, &build_drip_template(name), true)?;
    AppLogger::log_export("drip_template", &path.display().to_string(), DRIP_STEPS);
    Ok(())
}
