//! Editing vocabulary: modes, focus areas and content types
//!
//! Each value has a stable snake_case key (used in prompt files, CLI flags and
//! templates) and a human-readable label.

use crate::PromptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How thoroughly the editor works on a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditingMode {
    /// Full analysis and editing
    #[default]
    Comprehensive,
    /// Quick problem detection
    QuickFix,
    /// Only the focus areas the user picked
    SpecificIssue,
    /// Newsletter optimization
    Newsletter,
    /// Social media posts
    SocialMedia,
}

impl EditingMode {
    /// All modes in display order
    pub const ALL: [EditingMode; 5] = [
        EditingMode::Comprehensive,
        EditingMode::QuickFix,
        EditingMode::SpecificIssue,
        EditingMode::Newsletter,
        EditingMode::SocialMedia,
    ];

    /// Stable key
    pub fn key(self) -> &'static str {
        match self {
            EditingMode::Comprehensive => "comprehensive",
            EditingMode::QuickFix => "quick_fix",
            EditingMode::SpecificIssue => "specific_issue",
            EditingMode::Newsletter => "newsletter",
            EditingMode::SocialMedia => "social_media",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            EditingMode::Comprehensive => "Full Analysis & Editing",
            EditingMode::QuickFix => "Quick Problem Detection",
            EditingMode::SpecificIssue => "Target Specific Issues",
            EditingMode::Newsletter => "Newsletter Optimization",
            EditingMode::SocialMedia => "Social Media Posts",
        }
    }
}

/// A single editorial concern the user can ask the editor to target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    FillerRemoval,
    AddOutcomes,
    PowerLanguage,
    Visualization,
    Redundancy,
    Parallelism,
    AddContext,
    PassiveVoice,
    Takeaways,
    VagueLanguage,
}

impl FocusArea {
    /// All focus areas in display order
    pub const ALL: [FocusArea; 10] = [
        FocusArea::FillerRemoval,
        FocusArea::AddOutcomes,
        FocusArea::PowerLanguage,
        FocusArea::Visualization,
        FocusArea::Redundancy,
        FocusArea::Parallelism,
        FocusArea::AddContext,
        FocusArea::PassiveVoice,
        FocusArea::Takeaways,
        FocusArea::VagueLanguage,
    ];

    /// Stable key
    pub fn key(self) -> &'static str {
        match self {
            FocusArea::FillerRemoval => "filler_removal",
            FocusArea::AddOutcomes => "add_outcomes",
            FocusArea::PowerLanguage => "power_language",
            FocusArea::Visualization => "visualization",
            FocusArea::Redundancy => "redundancy",
            FocusArea::Parallelism => "parallelism",
            FocusArea::AddContext => "add_context",
            FocusArea::PassiveVoice => "passive_voice",
            FocusArea::Takeaways => "takeaways",
            FocusArea::VagueLanguage => "vague_language",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            FocusArea::FillerRemoval => "Remove Filler Text",
            FocusArea::AddOutcomes => "Add Specific Outcomes",
            FocusArea::PowerLanguage => "Add Power Language",
            FocusArea::Visualization => "Strengthen Visualization",
            FocusArea::Redundancy => "Fix Redundancy",
            FocusArea::Parallelism => "Fix Parallelism",
            FocusArea::AddContext => "Add Missing Context",
            FocusArea::PassiveVoice => "Address Passive Voice",
            FocusArea::Takeaways => "Add Compelling Takeaways",
            FocusArea::VagueLanguage => "Fix Vague Language",
        }
    }
}

/// Kind of content being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    General,
    BlogPost,
    Newsletter,
    SocialMedia,
    Email,
    LandingPage,
    AdCopy,
}

impl ContentType {
    /// All content types in display order
    pub const ALL: [ContentType; 7] = [
        ContentType::General,
        ContentType::BlogPost,
        ContentType::Newsletter,
        ContentType::SocialMedia,
        ContentType::Email,
        ContentType::LandingPage,
        ContentType::AdCopy,
    ];

    /// Stable key
    pub fn key(self) -> &'static str {
        match self {
            ContentType::General => "general",
            ContentType::BlogPost => "blog_post",
            ContentType::Newsletter => "newsletter",
            ContentType::SocialMedia => "social_media",
            ContentType::Email => "email",
            ContentType::LandingPage => "landing_page",
            ContentType::AdCopy => "ad_copy",
        }
    }
}

/// Focus instruction for the analysis prompt
///
/// Only [`EditingMode::SpecificIssue`] targets focus areas; every other mode
/// yields an empty string.
pub fn focus_text(mode: EditingMode, areas: &[FocusArea]) -> String {
    if mode != EditingMode::SpecificIssue {
        return String::new();
    }

    let labels: Vec<&str> = areas.iter().map(|a| a.label()).collect();
    format!("Focus specifically on these areas: {}", labels.join(", "))
}

macro_rules! keyed {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $ty {
            type Err = PromptError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase().replace('-', "_");
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.key() == wanted)
                    .ok_or_else(|| PromptError::UnknownKey {
                        kind: $kind,
                        key: s.to_string(),
                    })
            }
        }
    };
}

keyed!(EditingMode, "editing mode");
keyed!(FocusArea, "focus area");
keyed!(ContentType, "content type");
