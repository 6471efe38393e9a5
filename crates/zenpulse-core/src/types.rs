//! Core types for ZenPulse

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::ZenError;

/// Icon font a catalog icon name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconFamily {
    /// Material Icons (`wb-sunny`, `spa`, ...)
    Material,
    /// Font Awesome 5 (`brain`, `headphones`, ...)
    FontAwesome5,
}

impl IconFamily {
    /// CSS class applied to rendered glyphs of this family
    pub fn class(&self) -> &'static str {
        match self {
            IconFamily::Material => "icon-material",
            IconFamily::FontAwesome5 => "icon-fa5",
        }
    }
}

impl fmt::Display for IconFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconFamily::Material => write!(f, "MaterialIcons"),
            IconFamily::FontAwesome5 => write!(f, "FontAwesome5"),
        }
    }
}

/// Glyph used when an icon name has no mapping in its family
pub const FALLBACK_GLYPH: &str = "\u{2022}";

/// Reference to an icon, resolved to a concrete glyph at construction
///
/// Render sites only read [`IconRef::glyph`] and [`IconRef::class`]; they
/// never branch on the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRef {
    /// Icon family the name was taken from
    pub family: IconFamily,
    /// Icon name within the family
    pub name: &'static str,
    /// Resolved Unicode glyph
    pub glyph: &'static str,
}

impl IconRef {
    /// Resolve an icon name within a family
    pub fn new(family: IconFamily, name: &'static str) -> Self {
        let glyph = resolve_glyph(family, name);
        if glyph == FALLBACK_GLYPH {
            warn!(%family, name, "No glyph for icon, using fallback");
        }
        Self { family, name, glyph }
    }

    /// Material Icons reference
    pub fn material(name: &'static str) -> Self {
        Self::new(IconFamily::Material, name)
    }

    /// Font Awesome 5 reference
    pub fn font_awesome(name: &'static str) -> Self {
        Self::new(IconFamily::FontAwesome5, name)
    }

    /// CSS class for the icon's family
    pub fn class(&self) -> &'static str {
        self.family.class()
    }

    /// Whether the name had no glyph mapping
    pub fn is_fallback(&self) -> bool {
        self.glyph == FALLBACK_GLYPH
    }
}

fn resolve_glyph(family: IconFamily, name: &str) -> &'static str {
    match (family, name) {
        (IconFamily::Material, "wb-sunny") => "\u{2600}",
        (IconFamily::Material, "nightlight-round") => "\u{263E}",
        (IconFamily::Material, "gps-fixed") => "\u{2316}",
        (IconFamily::Material, "air") => "\u{224B}",
        (IconFamily::Material, "favorite") => "\u{2665}",
        (IconFamily::Material, "stars") => "\u{2726}",
        (IconFamily::Material, "self-improvement") => "\u{1F9D8}",
        (IconFamily::Material, "nature") => "\u{1F333}",
        (IconFamily::Material, "sentiment-very-satisfied") => "\u{263A}",
        (IconFamily::Material, "spa") | (IconFamily::FontAwesome5, "spa") => "\u{2740}",
        (IconFamily::Material, "center-focus-strong") => "\u{25CE}",
        (IconFamily::Material, "lock") => "\u{1F512}",
        (IconFamily::Material, "star") => "\u{2605}",
        (IconFamily::Material, "play-arrow") => "\u{25B6}",
        (IconFamily::Material, "close") => "\u{2715}",
        (IconFamily::FontAwesome5, "headphones") => "\u{1F3A7}",
        (IconFamily::FontAwesome5, "brain") => "\u{1F9E0}",
        (IconFamily::FontAwesome5, "chart-line") => "\u{1F4C8}",
        (IconFamily::FontAwesome5, "moon") => "\u{263D}",
        (IconFamily::FontAwesome5, "bullseye") => "\u{25C9}",
        (IconFamily::FontAwesome5, "sparkles") => "\u{2728}",
        _ => FALLBACK_GLYPH,
    }
}

/// A guided meditation in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeditationEntry {
    /// Catalog identifier (`"1"`..`"8"`)
    pub id: &'static str,
    pub title: &'static str,
    pub icon: IconRef,
    /// Human-readable duration label, e.g. "10 мин"
    pub duration: &'static str,
    /// Premium entries are locked until the user subscribes
    pub is_premium: bool,
    pub description: &'static str,
}

/// Closed set of moods with a canned response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodId {
    Happy,
    Calm,
    Focused,
}

impl MoodId {
    /// Every mood, in display order
    pub const ALL: [MoodId; 3] = [MoodId::Happy, MoodId::Calm, MoodId::Focused];

    /// Stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodId::Happy => "happy",
            MoodId::Calm => "calm",
            MoodId::Focused => "focused",
        }
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodId {
    type Err = ZenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(MoodId::Happy),
            "calm" => Ok(MoodId::Calm),
            "focused" => Ok(MoodId::Focused),
            other => Err(ZenError::UnknownMood(other.to_string())),
        }
    }
}

/// A mood offered in the AI mood modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    pub id: MoodId,
    /// Display name, e.g. "Спокойное"
    pub name: &'static str,
    pub icon: IconRef,
    pub description: &'static str,
}

/// Subscription plan identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanId {
    Monthly,
    Yearly,
}

impl PlanId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Monthly => "monthly",
            PlanId::Yearly => "yearly",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = ZenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(PlanId::Monthly),
            "yearly" => Ok(PlanId::Yearly),
            other => Err(ZenError::UnknownPlan(other.to_string())),
        }
    }
}

/// A plan shown on the paywall
///
/// Choosing any plan subscribes immediately; there is no billing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPlan {
    pub id: PlanId,
    pub name: &'static str,
    /// Price in rubles
    pub price: u32,
    /// Billing period label, e.g. "месяц"
    pub period: &'static str,
    pub savings: Option<&'static str>,
    pub is_popular: bool,
}

impl SubscriptionPlan {
    /// Price label as rendered on the plan card, e.g. "299₽"
    pub fn price_label(&self) -> String {
        format!("{}\u{20BD}", self.price)
    }

    /// Period label as rendered on the plan card, e.g. "/месяц"
    pub fn period_label(&self) -> String {
        format!("/{}", self.period)
    }
}

/// A selling point listed on the paywall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub icon: IconRef,
    pub text: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_resolves_once_per_family() {
        let sun = IconRef::material("wb-sunny");
        assert_eq!(sun.glyph, "\u{2600}");
        assert_eq!(sun.class(), "icon-material");

        let brain = IconRef::font_awesome("brain");
        assert_eq!(brain.class(), "icon-fa5");
        assert!(!brain.is_fallback());
    }

    #[test]
    fn unknown_icon_falls_back() {
        let icon = IconRef::material("does-not-exist");
        assert!(icon.is_fallback());
        assert_eq!(icon.glyph, FALLBACK_GLYPH);
    }

    #[test]
    fn same_name_differs_by_family() {
        // "brain" only exists in Font Awesome
        assert!(IconRef::material("brain").is_fallback());
        assert!(!IconRef::font_awesome("brain").is_fallback());
    }

    #[test]
    fn mood_id_parse() {
        for mood in MoodId::ALL {
            assert_eq!(mood.as_str().parse::<MoodId>().unwrap(), mood);
        }
        assert_eq!(
            "sleepy".parse::<MoodId>(),
            Err(ZenError::UnknownMood("sleepy".to_string()))
        );
    }

    #[test]
    fn plan_id_parse() {
        assert_eq!("yearly".parse::<PlanId>().unwrap(), PlanId::Yearly);
        assert!(matches!("weekly".parse::<PlanId>(), Err(ZenError::UnknownPlan(_))));
    }

    #[test]
    fn plan_labels() {
        let plan = SubscriptionPlan {
            id: PlanId::Monthly,
            name: "Месячный",
            price: 299,
            period: "месяц",
            savings: None,
            is_popular: false,
        };
        assert_eq!(plan.price_label(), "299₽");
        assert_eq!(plan.period_label(), "/месяц");
    }

    #[test]
    fn icon_family_display() {
        assert_eq!(IconFamily::Material.to_string(), "MaterialIcons");
        assert_eq!(IconFamily::FontAwesome5.to_string(), "FontAwesome5");
    }
}
