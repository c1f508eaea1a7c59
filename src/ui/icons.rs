// SPDX-License-Identifier: MPL-2.0
//! Semantic service-to-icon mapping.
//!
//! Cards show a text glyph picked by keyword rules over the service title.
//! Rules are checked in order and the first match wins, so broader keywords
//! must stay below more specific ones.

/// Icon identifiers used by service cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Gears,
    Code,
    Link,
    People,
    Cloud,
    Mobile,
}

/// Keyword rules over the lowercased title. Order is significant: `sap`
/// outranks `software`, and `consulting` outranks `cloud`.
const ICON_RULES: &[(&str, ServiceIcon)] = &[
    ("sap", ServiceIcon::Gears),
    ("software", ServiceIcon::Code),
    ("development", ServiceIcon::Code),
    ("integration", ServiceIcon::Link),
    ("consulting", ServiceIcon::People),
    ("cloud", ServiceIcon::Cloud),
    ("mobile", ServiceIcon::Mobile),
    ("app", ServiceIcon::Mobile),
];

impl ServiceIcon {
    /// Picks the icon for a service title, falling back to the gear glyph
    /// when no keyword matches.
    pub fn for_title(title: &str) -> Self {
        let lowered = title.to_lowercase();

        ICON_RULES
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, icon)| *icon)
            .unwrap_or(ServiceIcon::Gears)
    }

    /// Text glyph rendered inside the card's icon slot.
    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Gears => "⚙",
            ServiceIcon::Code => "</>",
            ServiceIcon::Link => "🔗",
            ServiceIcon::People => "👥",
            ServiceIcon::Cloud => "☁",
            ServiceIcon::Mobile => "📱",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_title_falls_back_to_gears() {
        assert_eq!(ServiceIcon::for_title("Quantum Blockchain"), ServiceIcon::Gears);
        assert_eq!(ServiceIcon::for_title(""), ServiceIcon::Gears);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(ServiceIcon::for_title("CLOUD Hosting"), ServiceIcon::Cloud);
        assert_eq!(ServiceIcon::for_title("It Consulting"), ServiceIcon::People);
    }

    #[test]
    fn sap_outranks_software() {
        // "SAP Software Services" matches both rules; the earlier one wins.
        assert_eq!(
            ServiceIcon::for_title("SAP Software Services"),
            ServiceIcon::Gears
        );
    }

    #[test]
    fn consulting_outranks_cloud() {
        assert_eq!(
            ServiceIcon::for_title("Cloud Consulting"),
            ServiceIcon::People
        );
    }

    #[test]
    fn mobile_keywords_map_to_mobile() {
        assert_eq!(ServiceIcon::for_title("Mobile Apps"), ServiceIcon::Mobile);
        assert_eq!(ServiceIcon::for_title("App Modernization"), ServiceIcon::Mobile);
    }

    #[test]
    fn remaining_keywords_map_as_expected() {
        assert_eq!(
            ServiceIcon::for_title("Custom Development"),
            ServiceIcon::Code
        );
        assert_eq!(
            ServiceIcon::for_title("System Integration"),
            ServiceIcon::Link
        );
    }

    #[test]
    fn every_icon_has_a_glyph() {
        for icon in [
            ServiceIcon::Gears,
            ServiceIcon::Code,
            ServiceIcon::Link,
            ServiceIcon::People,
            ServiceIcon::Cloud,
            ServiceIcon::Mobile,
        ] {
            assert!(!icon.glyph().is_empty());
        }
    }
}
