//! Page sections. Each section owns its own animation timing.

#![allow(non_snake_case)]

pub mod announcement_bar;
pub mod contact_cta;
pub mod contact_form;
pub mod contact_info;
pub mod expanding_video;
pub mod feature_text;
pub mod hero_with_cards;
pub mod lets_talk;
pub mod mission_statement;
pub mod post_lab_icon;
pub mod privacy_policy_content;
pub mod privacy_title;
pub mod scrolling_video_text;
pub mod what_we_are_building;

use dioxus::prelude::*;

use crate::motion::scroll_trigger::InView;
use crate::routes::SectionKind;

/// Entry condition for sections that reveal as soon as any part of them is
/// 100px inside the viewport.
pub(crate) const IN_VIEW_INSET: InView = InView::ANY.with_margin(-100.0);

/// Renders one section by kind.
#[component]
pub fn SectionView(kind: SectionKind) -> Element {
    match kind {
        SectionKind::AnnouncementBar => rsx! { announcement_bar::AnnouncementBar {} },
        SectionKind::HeroWithCards => rsx! { hero_with_cards::HeroWithCards {} },
        SectionKind::MissionStatement => rsx! { mission_statement::MissionStatement {} },
        SectionKind::ExpandingVideo => rsx! { expanding_video::ExpandingVideo {} },
        SectionKind::WhatWeAreBuilding => rsx! { what_we_are_building::WhatWeAreBuilding {} },
        SectionKind::FeatureText => rsx! { feature_text::FeatureText {} },
        SectionKind::ScrollingVideoText => rsx! { scrolling_video_text::ScrollingVideoText {} },
        SectionKind::ContactCta => rsx! { contact_cta::ContactCta {} },
        SectionKind::PostLabIcon => rsx! { post_lab_icon::PostLabIcon {} },
        SectionKind::LetsTalk => rsx! { lets_talk::LetsTalk {} },
        SectionKind::ContactInfo => rsx! { contact_info::ContactInfo {} },
        SectionKind::ContactForm => rsx! { contact_form::ContactForm {} },
        SectionKind::PrivacyTitle => rsx! { privacy_title::PrivacyTitle {} },
        SectionKind::PrivacyPolicyContent => rsx! { privacy_policy_content::PrivacyPolicyContent {} },
    }
}
