//! Profile display formatting

use crate::models::HealthProfile;
use crate::theme::{Appearance, Theme};

/// Format a profile's details
pub fn format_profile_details(profile: &HealthProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("Profile: {}\n", profile.name));
    output.push_str(&format!("  Age:            {}\n", profile.age));
    output.push_str(&format!(
        "  Blood Pressure: {} mmHg\n",
        profile.blood_pressure()
    ));
    output.push_str(&format!(
        "  Blood Sugar:    {} mg/dL\n",
        format_reading(profile.blood_sugar)
    ));
    output.push_str(&format!(
        "  Oxygen:         {}%\n",
        format_reading(profile.oxygen)
    ));

    if profile.conditions.is_empty() {
        output.push_str("  Conditions:     none\n");
    } else {
        output.push_str(&format!(
            "  Conditions:     {}\n",
            profile.conditions.join(", ")
        ));
    }

    output
}

/// Format the theme line shown by `theme show`
pub fn format_theme(theme: Theme, appearance: Appearance) -> String {
    match theme {
        Theme::System => format!("Theme: system (following terminal: {})", appearance),
        _ => format!("Theme: {}", theme),
    }
}

// Whole readings print without a trailing ".0"
fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
