//! Difficulty tiers and their display styles.
//!
//! The thresholds and the icon/color table are a fixed policy of this tool,
//! not values derived from the metadata service.

use strum::{Display, EnumIter};

use crate::error::{Error, Result};

/// Named difficulty tier, derived solely from a star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Tier {
    Easy,
    Normal,
    Hard,
    Insane,
    Expert,
    #[strum(serialize = "Expert+")]
    ExpertPlus,
}

impl Tier {
    /// Classify a star rating.
    ///
    /// Total over non-negative input; ranges are half-open, so a boundary
    /// value belongs to the upper tier (exactly 2.0 is Normal).
    pub fn from_stars(stars: f64) -> Self {
        if stars < 2.0 {
            Self::Easy
        } else if stars < 2.7 {
            Self::Normal
        } else if stars < 4.0 {
            Self::Hard
        } else if stars < 5.3 {
            Self::Insane
        } else if stars < 6.5 {
            Self::Expert
        } else {
            Self::ExpertPlus
        }
    }

    /// Look up the display style for this tier.
    pub fn style(self) -> Result<&'static TierStyle> {
        TIER_STYLES
            .iter()
            .find(|s| s.tier == self)
            .ok_or(Error::MissingTierInfo(self))
    }
}

/// Forum-markup style of one tier: difficulty icon and text color.
#[derive(Debug)]
pub struct TierStyle {
    pub tier: Tier,
    pub icon_url: &'static str,
    pub color: &'static str,
}

/// Expert and Expert+ share the expert-plus icon and color.
pub const TIER_STYLES: [TierStyle; 6] = [
    TierStyle {
        tier: Tier::Easy,
        icon_url: "https://i.ppy.sh/e4046437c0d195a3f2bed4b4140a41d696bdf7f0/68747470733a2f2f6f73752e7070792e73682f77696b692f696d616765732f7368617265642f646966662f656173792d6f2e706e673f3230323131323135",
        color: "#8cccec",
    },
    TierStyle {
        tier: Tier::Normal,
        icon_url: "https://i.ppy.sh/20d7052354c61f8faf3a4828d9ff7751bb6776b1/68747470733a2f2f6f73752e7070792e73682f77696b692f696d616765732f7368617265642f646966662f6e6f726d616c2d6f2e706e673f3230323131323135",
        color: "#68fc94",
    },
    TierStyle {
        tier: Tier::Hard,
        icon_url: "https://i.ppy.sh/0ad2e280f5a26c7f202b3dff711b723045662b37/68747470733a2f2f6f73752e7070792e73682f77696b692f696d616765732f7368617265642f646966662f686172642d6f2e706e673f3230323131323135",
        color: "#f8ec5c",
    },
    TierStyle {
        tier: Tier::Insane,
        icon_url: "https://i.ppy.sh/f6eabcfbacdfe85e520106702ec3a382a0430d40/68747470733a2f2f6f73752e7070792e73682f77696b692f696d616765732f7368617265642f646966662f696e73616e652d6f2e706e673f3230323131323135",
        color: "#ff7c6c",
    },
    TierStyle {
        tier: Tier::Expert,
        icon_url: "https://i.ppy.sh/3b561ef8a73118940b59e79f3433bfa98c26cbf1/68747470733a2f2f6f73752e7070792e73682f77696b692f696d616765732f7368617265642f646966662f657870657274706c75732d6f2e706e673f3230323131323135",
        color: "#8000FF",
    },
    TierStyle {
        tier: Tier::ExpertPlus,
        icon_url: "https://i.ppy.sh/3b561ef8a73118940b59e79f3433bfa98c26cbf1/68747470733a2f2f6f73752e7070792e73682f77696b692f696d616765732f7368617265642f646966662f657870657274706c75732d6f2e706e673f3230323131323135",
        color: "#8000FF",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_boundaries_belong_to_upper_tier() {
        assert_eq!(Tier::from_stars(2.0), Tier::Normal);
        assert_eq!(Tier::from_stars(2.6999), Tier::Normal);
        assert_eq!(Tier::from_stars(2.7), Tier::Hard);
        assert_eq!(Tier::from_stars(4.0), Tier::Insane);
        assert_eq!(Tier::from_stars(5.3), Tier::Expert);
        assert_eq!(Tier::from_stars(6.5), Tier::ExpertPlus);
    }

    #[test]
    fn test_classifier_covers_whole_range() {
        let cases = [
            (0.0, Tier::Easy),
            (1.99, Tier::Easy),
            (2.31, Tier::Normal),
            (3.5, Tier::Hard),
            (4.99, Tier::Insane),
            (6.49, Tier::Expert),
            (9.2, Tier::ExpertPlus),
            (100.0, Tier::ExpertPlus),
        ];
        for (stars, expected) in cases {
            assert_eq!(Tier::from_stars(stars), expected, "stars = {}", stars);
        }
    }

    #[test]
    fn test_every_tier_has_a_style() {
        for tier in Tier::iter() {
            let style = tier.style().unwrap();
            assert_eq!(style.tier, tier);
            assert!(style.icon_url.starts_with("https://"));
            assert!(style.color.starts_with('#'));
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Tier::Easy.to_string(), "Easy");
        assert_eq!(Tier::ExpertPlus.to_string(), "Expert+");
    }
}
