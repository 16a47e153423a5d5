//! In-memory cookie consent choices. Nothing here is persisted.

use serde::Serialize;
use strum::{Display, EnumIs, EnumIter, IntoEnumIterator};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Display, EnumIs, EnumIter)]
pub enum ConsentCategory {
    Essential,
    Marketing,
    Personalization,
    Analytics,
}

impl ConsentCategory {
    pub fn all() -> Vec<ConsentCategory> {
        ConsentCategory::iter().collect()
    }

    /// Essential storage cannot be switched off.
    pub fn is_locked(&self) -> bool {
        self.is_essential()
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConsentCategory::Essential => "These items are required to enable basic website functionality.",
            ConsentCategory::Marketing => "These items are used to deliver advertising that is more relevant to you and your interests. They may also be used to limit the number of times you see an advertisement and measure the effectiveness of advertising campaigns. Advertising networks usually place them with the website operator’s permission.",
            ConsentCategory::Personalization => "These items allow the website to remember choices you make (such as your user name, language, or the region you are in) and provide enhanced, more personalized features. For example, a website may provide you with local weather reports or traffic news by storing data about your current location.",
            ConsentCategory::Analytics => "These items help the website operator understand how its website performs, how visitors interact with the site, and whether there may be technical issues. This storage type usually doesn’t collect information that identifies a visitor.",
        }
    }
}

/// The four consent toggles. Essential always reads as enabled.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct CookiePreferences {
    marketing: bool,
    personalization: bool,
    analytics: bool,
}

impl CookiePreferences {
    pub fn is_enabled(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Essential => true,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Personalization => self.personalization,
            ConsentCategory::Analytics => self.analytics,
        }
    }

    /// Flips one optional category. Returns `false` (and changes nothing) for
    /// Essential.
    pub fn toggle(&mut self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Essential => return false,
            ConsentCategory::Marketing => self.marketing = !self.marketing,
            ConsentCategory::Personalization => self.personalization = !self.personalization,
            ConsentCategory::Analytics => self.analytics = !self.analytics,
        }
        true
    }

    pub fn accept_all(&mut self) {
        self.set_optional(true);
    }

    pub fn reject_all(&mut self) {
        self.set_optional(false);
    }

    fn set_optional(&mut self, enabled: bool) {
        self.marketing = enabled;
        self.personalization = enabled;
        self.analytics = enabled;
    }

    /// "Save Settings". There is no storage behind the modal; the snapshot
    /// is logged and returned.
    pub fn save(&self) -> CookiePreferences {
        match serde_json::to_string(self) {
            Ok(json) => dioxus_logger::tracing::info!("cookie preferences saved in memory only: {json}"),
            Err(e) => dioxus_logger::tracing::warn!("cookie preferences could not be serialized: {e}"),
        }
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_off_except_essential() {
        let prefs = CookiePreferences::default();
        for category in ConsentCategory::all() {
            assert_eq!(prefs.is_enabled(category), category.is_essential());
        }
    }

    #[test]
    fn toggling_flips_only_that_category() {
        for target in ConsentCategory::all().into_iter().filter(|c| !c.is_locked()) {
            let before = CookiePreferences::default();
            let mut after = before;
            assert!(after.toggle(target));
            for other in ConsentCategory::all() {
                if other == target {
                    assert_ne!(after.is_enabled(other), before.is_enabled(other));
                } else {
                    assert_eq!(after.is_enabled(other), before.is_enabled(other));
                }
            }
            after.toggle(target);
            assert_eq!(after, before);
        }
    }

    #[test]
    fn essential_cannot_be_toggled() {
        let mut prefs = CookiePreferences::default();
        assert!(!prefs.toggle(ConsentCategory::Essential));
        assert!(prefs.is_enabled(ConsentCategory::Essential));
        prefs.reject_all();
        assert!(prefs.is_enabled(ConsentCategory::Essential));
    }

    #[test]
    fn accept_and_reject_all() {
        let mut prefs = CookiePreferences::default();
        prefs.accept_all();
        assert!(ConsentCategory::all().into_iter().all(|c| prefs.is_enabled(c)));
        prefs.reject_all();
        assert_eq!(prefs, CookiePreferences::default());
    }

    #[test]
    fn save_returns_the_current_snapshot() {
        let mut prefs = CookiePreferences::default();
        prefs.toggle(ConsentCategory::Analytics);
        assert_eq!(prefs.save(), prefs);
    }
}
