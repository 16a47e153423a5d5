//! URL routes and the fixed section order of each page.

use dioxus::prelude::*;
use strum::{Display, EnumIter};

use crate::components::layout::Layout;
use crate::pages::{About, Contact, NotFound, PrivacyPolicy};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[redirect("/", || Route::About {})]
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/privacy-policy")]
        PrivacyPolicy {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// The three real pages. Unknown paths show the About page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum Page {
    About,
    Contact,
    #[strum(serialize = "Privacy Policy")]
    PrivacyPolicy,
}

impl Route {
    pub fn page(&self) -> Page {
        match self {
            Route::About {} | Route::NotFound { .. } => Page::About,
            Route::Contact {} => Page::Contact,
            Route::PrivacyPolicy {} => Page::PrivacyPolicy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum SectionKind {
    AnnouncementBar,
    HeroWithCards,
    MissionStatement,
    ExpandingVideo,
    WhatWeAreBuilding,
    FeatureText,
    ScrollingVideoText,
    ContactCta,
    PostLabIcon,
    LetsTalk,
    ContactInfo,
    ContactForm,
    PrivacyTitle,
    PrivacyPolicyContent,
}

impl Page {
    /// Sections in the order they are rendered, top to bottom.
    pub fn sections(&self) -> &'static [SectionKind] {
        use SectionKind::*;
        match self {
            Page::About => &[
                AnnouncementBar,
                HeroWithCards,
                MissionStatement,
                ExpandingVideo,
                WhatWeAreBuilding,
                FeatureText,
                ScrollingVideoText,
                ContactCta,
            ],
            Page::Contact => &[AnnouncementBar, PostLabIcon, LetsTalk, ContactInfo, ContactForm],
            Page::PrivacyPolicy => &[AnnouncementBar, PostLabIcon, PrivacyTitle, PrivacyPolicyContent],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn paths_parse_to_their_pages() {
        assert_eq!(Route::from_str("/about").ok(), Some(Route::About {}));
        assert_eq!(Route::from_str("/contact").ok(), Some(Route::Contact {}));
        assert_eq!(Route::from_str("/privacy-policy").ok(), Some(Route::PrivacyPolicy {}));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::About {}.to_string(), "/about");
        assert_eq!(Route::Contact {}.to_string(), "/contact");
        assert_eq!(Route::PrivacyPolicy {}.to_string(), "/privacy-policy");
    }

    #[test]
    fn root_redirects_to_about() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::About {}));
    }

    #[test]
    fn unparseable_paths_fall_back_to_about() {
        let route = Route::from_str("/no/such").ok();
        assert!(matches!(
            &route,
            Some(Route::NotFound { segments }) if segments == &["no", "such"]
        ));
        assert_eq!(route.map(|r| r.page()), Some(Page::About));

        let nested = Route::from_str("/about/extra").ok();
        assert!(matches!(nested, Some(Route::NotFound { .. })));
    }

    #[test]
    fn unknown_paths_show_about() {
        let route = Route::NotFound {
            segments: vec!["no-such-page".to_string()],
        };
        assert_eq!(route.page(), Page::About);
        assert_eq!(route.page().sections(), Page::About.sections());
    }

    #[test]
    fn every_page_is_reachable_by_path() {
        let reached: Vec<Page> = ["/about", "/contact", "/privacy-policy"]
            .into_iter()
            .filter_map(|path| Route::from_str(path).ok())
            .map(|route| route.page())
            .collect();
        for page in Page::iter() {
            assert!(reached.contains(&page), "{page} has no path");
        }
    }

    #[test]
    fn about_section_order() {
        use SectionKind::*;
        assert_eq!(
            Page::About.sections(),
            [
                AnnouncementBar,
                HeroWithCards,
                MissionStatement,
                ExpandingVideo,
                WhatWeAreBuilding,
                FeatureText,
                ScrollingVideoText,
                ContactCta,
            ]
        );
    }

    #[test]
    fn contact_and_privacy_section_order() {
        use SectionKind::*;
        assert_eq!(
            Page::Contact.sections(),
            [AnnouncementBar, PostLabIcon, LetsTalk, ContactInfo, ContactForm]
        );
        assert_eq!(
            Page::PrivacyPolicy.sections(),
            [AnnouncementBar, PostLabIcon, PrivacyTitle, PrivacyPolicyContent]
        );
    }

    #[test]
    fn every_page_opens_with_the_announcement() {
        for page in Page::iter() {
            assert_eq!(page.sections().first(), Some(&SectionKind::AnnouncementBar));
        }
    }
}
