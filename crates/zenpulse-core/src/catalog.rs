//! Fixed in-memory catalogs
//!
//! Built once at startup and never mutated. All lookups are by identifier.

use crate::error::{ZenError, ZenResult};
use crate::types::{FeatureHighlight, IconRef, MeditationEntry, MoodEntry, MoodId, PlanId, SubscriptionPlan};

/// Every list the app renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    meditations: Vec<MeditationEntry>,
    moods: Vec<MoodEntry>,
    plans: Vec<SubscriptionPlan>,
    features: Vec<FeatureHighlight>,
}

impl Catalog {
    /// Build the catalog, resolving every icon reference
    pub fn new() -> Self {
        Self {
            meditations: meditations(),
            moods: moods(),
            plans: plans(),
            features: features(),
        }
    }

    pub fn meditations(&self) -> &[MeditationEntry] {
        &self.meditations
    }

    pub fn moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    pub fn plans(&self) -> &[SubscriptionPlan] {
        &self.plans
    }

    pub fn features(&self) -> &[FeatureHighlight] {
        &self.features
    }

    /// Look up a meditation by its catalog id
    pub fn meditation(&self, id: &str) -> ZenResult<&MeditationEntry> {
        self.meditations
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| ZenError::UnknownMeditation(id.to_string()))
    }

    /// Look up a mood
    ///
    /// Total over [`MoodId`]: the mood list is built from the same closed set.
    pub fn mood(&self, id: MoodId) -> &MoodEntry {
        match self.moods.iter().find(|m| m.id == id) {
            Some(mood) => mood,
            None => unreachable!("mood catalog covers every MoodId"),
        }
    }

    /// Look up a plan
    pub fn plan(&self, id: PlanId) -> ZenResult<&SubscriptionPlan> {
        self.plans
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ZenError::UnknownPlan(id.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn meditations() -> Vec<MeditationEntry> {
    vec![
        MeditationEntry {
            id: "1",
            title: "Утреннее пробуждение",
            icon: IconRef::material("wb-sunny"),
            duration: "10 мин",
            is_premium: false,
            description: "Настройтесь на продуктивный день",
        },
        MeditationEntry {
            id: "2",
            title: "Медитация для сна",
            icon: IconRef::material("nightlight-round"),
            duration: "15 мин",
            is_premium: true,
            description: "Глубокий и спокойный сон",
        },
        MeditationEntry {
            id: "3",
            title: "Сосредоточение",
            icon: IconRef::material("gps-fixed"),
            duration: "12 мин",
            is_premium: false,
            description: "Улучшите концентрацию",
        },
        MeditationEntry {
            id: "4",
            title: "Осознанное дыхание",
            icon: IconRef::material("air"),
            duration: "8 мин",
            is_premium: true,
            description: "Техники дыхания для релаксации",
        },
        MeditationEntry {
            id: "5",
            title: "Благодарность",
            icon: IconRef::material("favorite"),
            duration: "5 мин",
            is_premium: false,
            description: "Практика благодарности",
        },
        MeditationEntry {
            id: "6",
            title: "Визуализация успеха",
            icon: IconRef::material("stars"),
            duration: "20 мин",
            is_premium: true,
            description: "Представьте свои достижения",
        },
        MeditationEntry {
            id: "7",
            title: "Йога-нидра",
            icon: IconRef::material("self-improvement"),
            duration: "25 мин",
            is_premium: true,
            description: "Глубокая релаксация тела и ума",
        },
        MeditationEntry {
            id: "8",
            title: "Медитация на природе",
            icon: IconRef::material("nature"),
            duration: "18 мин",
            is_premium: false,
            description: "Связь с природой и гармония",
        },
    ]
}

fn moods() -> Vec<MoodEntry> {
    MoodId::ALL
        .into_iter()
        .map(|id| match id {
            MoodId::Happy => MoodEntry {
                id,
                name: "Радостное",
                icon: IconRef::material("sentiment-very-satisfied"),
                description: "Повысьте настроение и энергию",
            },
            MoodId::Calm => MoodEntry {
                id,
                name: "Спокойное",
                icon: IconRef::material("spa"),
                description: "Найдите внутренний покой",
            },
            MoodId::Focused => MoodEntry {
                id,
                name: "Сосредоточенное",
                icon: IconRef::material("center-focus-strong"),
                description: "Улучшите концентрацию и продуктивность",
            },
        })
        .collect()
}

fn plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            id: PlanId::Monthly,
            name: "Месячный",
            price: 299,
            period: "месяц",
            savings: None,
            is_popular: false,
        },
        SubscriptionPlan {
            id: PlanId::Yearly,
            name: "Годовой",
            price: 2990,
            period: "год",
            savings: Some("Сэкономьте 25%"),
            is_popular: true,
        },
    ]
}

fn features() -> Vec<FeatureHighlight> {
    vec![
        FeatureHighlight { icon: IconRef::font_awesome("headphones"), text: "500+ медитаций" },
        FeatureHighlight { icon: IconRef::font_awesome("brain"), text: "AI персонализация" },
        FeatureHighlight { icon: IconRef::font_awesome("chart-line"), text: "Отслеживание прогресса" },
        FeatureHighlight { icon: IconRef::font_awesome("moon"), text: "Медитации для сна" },
        FeatureHighlight { icon: IconRef::font_awesome("bullseye"), text: "Достижение целей" },
        FeatureHighlight { icon: IconRef::font_awesome("sparkles"), text: "Эксклюзивный контент" },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_eight_meditations_with_unique_ids() {
        let catalog = Catalog::new();
        assert_eq!(catalog.meditations().len(), 8);

        let ids: HashSet<_> = catalog.meditations().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn premium_entries() {
        let catalog = Catalog::new();
        let premium: Vec<_> = catalog
            .meditations()
            .iter()
            .filter(|m| m.is_premium)
            .map(|m| m.id)
            .collect();
        assert_eq!(premium, vec!["2", "4", "6", "7"]);
    }

    #[test]
    fn exactly_three_moods_in_order() {
        let catalog = Catalog::new();
        let ids: Vec<_> = catalog.moods().iter().map(|m| m.id).collect();
        assert_eq!(ids, MoodId::ALL.to_vec());
    }

    #[test]
    fn every_catalog_icon_resolves() {
        let catalog = Catalog::new();
        for m in catalog.meditations() {
            assert!(!m.icon.is_fallback(), "meditation {} icon {}", m.id, m.icon.name);
        }
        for m in catalog.moods() {
            assert!(!m.icon.is_fallback(), "mood {} icon {}", m.id, m.icon.name);
        }
        for f in catalog.features() {
            assert!(!f.icon.is_fallback(), "feature icon {}", f.icon.name);
        }
    }

    #[test]
    fn meditation_lookup() {
        let catalog = Catalog::new();
        assert_eq!(catalog.meditation("2").unwrap().title, "Медитация для сна");
        assert_eq!(
            catalog.meditation("99"),
            Err(ZenError::UnknownMeditation("99".to_string()))
        );
    }

    #[test]
    fn mood_lookup_is_total() {
        let catalog = Catalog::new();
        assert_eq!(catalog.mood(MoodId::Calm).name, "Спокойное");
        assert_eq!(catalog.mood(MoodId::Focused).name, "Сосредоточенное");
    }

    #[test]
    fn yearly_plan_is_the_popular_one() {
        let catalog = Catalog::new();
        let yearly = catalog.plan(PlanId::Yearly).unwrap();
        assert!(yearly.is_popular);
        assert_eq!(yearly.savings, Some("Сэкономьте 25%"));
        assert!(!catalog.plan(PlanId::Monthly).unwrap().is_popular);
    }

    #[test]
    fn six_feature_highlights() {
        assert_eq!(Catalog::new().features().len(), 6);
    }
}
