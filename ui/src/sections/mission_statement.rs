use dioxus::prelude::*;

use crate::components::primitives::Container;
use crate::content;
use crate::hooks::{use_element_id, use_scroll_progress};
use crate::motion::reveal::split_words;
use crate::motion::timeline::{StaggeredScrub, MISSION_SCRUB, MISSION_TRIGGER};

/// Mission paragraph whose words brighten one after another with scroll.
#[component]
pub fn MissionStatement() -> Element {
    let id = use_element_id("mission");
    let progress = use_scroll_progress(id.clone(), MISSION_TRIGGER, MISSION_SCRUB);

    let words = split_words(content::MISSION);
    let styles: Vec<String> = StaggeredScrub::MISSION_WORDS
        .values(words.len(), progress())
        .into_iter()
        .map(|opacity| format!("opacity: {opacity:.3};"))
        .collect();

    rsx! {
        section {
            class: "mission",
            Container {
                p {
                    id: "{id}",
                    class: "mission-text",
                    for (i, (word, style)) in words.into_iter().zip(styles).enumerate() {
                        span {
                            key: "{i}",
                            class: "word",
                            style: "{style}",
                            "{word}"
                        }
                    }
                }
            }
        }
    }
}
