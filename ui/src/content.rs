//! Marketing copy and CDN asset paths.
//!
//! Asset paths are relative to [`crate::config::SiteConfig::asset_url`].

pub mod assets {
    pub const LOGO: &str = "681dfdff4444ca819f7050a2/68227dfdc407523fbe5b56e7_post-labs-logo.svg";
    pub const LOGO_WHITE: &str =
        "681dfdff4444ca819f7050a2/682786273e6c31f3343c6700_postlabs-logo-white.svg";
    pub const DOWN_ARROW: &str = "681dfdff4444ca819f7050a2/68238111591ea94a69065212_Vector.svg";

    pub const CARD_ICON_1: &str = "681dfdff4444ca819f7050a2/68239a34145625a862ba3d54_icon-1.svg";
    pub const CARD_ICON_2: &str = "681dfdff4444ca819f7050a2/68239b7ac5ddc2008b2da9b7_icon-2.svg";
    pub const CARD_ICON_3: &str = "681dfdff4444ca819f7050a2/68239b7ab5708009ef8f649e_icon-3.svg";

    pub const FEATURE_ICON_1: &str =
        "681dfdff4444ca819f7050a2/68266ea52e91d548861b8d20_icon-1-transparent.svg";
    pub const FEATURE_ICON_2: &str =
        "681dfdff4444ca819f7050a2/68267094af8c90b6a17e323a_icon-2-transparent.svg";
    pub const FEATURE_ICON_3: &str =
        "681dfdff4444ca819f7050a2/68267087adfa3ad7422b8753_icon-3-transparent.svg";

    pub const EXPANDING_VIDEO: &str =
        "681dfdff4444ca819f7050a2%2F682e229ec192a9f049ae0b4a_post-labs-video-1-transcode.mp4";
    pub const EXPANDING_VIDEO_POSTER: &str =
        "681dfdff4444ca819f7050a2%2F682e229ec192a9f049ae0b4a_post-labs-video-1-poster-00001.jpg";

    pub const STORY_VIDEOS: [&str; 3] = [
        "681dfdff4444ca819f7050a2%2F6827802fb93caba00853824a_video2-transcode.mp4",
        "681dfdff4444ca819f7050a2%2F682dd7a24d93a7df690274d9_post-labs-video-3-transcode.mp4",
        "681dfdff4444ca819f7050a2%2F683a0051a4448581c2d2e587_post-labs-video-mobile-4-transcode.mp4",
    ];
}

pub const INTRO: &str = "We're building the backbone of Canadian digital media — a next-gen platform that gives creators the tools to thrive.";

pub const HERO_TITLE: &str = "The Future of News Starts Here";

#[derive(Debug, PartialEq)]
pub struct HeroCard {
    pub icon: &'static str,
    pub text: &'static str,
}

pub static HERO_CARDS: [HeroCard; 3] = [
    HeroCard {
        icon: assets::CARD_ICON_1,
        text: "Empowering Creators.",
    },
    HeroCard {
        icon: assets::CARD_ICON_2,
        text: "Transforming Publishing.",
    },
    HeroCard {
        icon: assets::CARD_ICON_3,
        text: "Reclaiming Canadian Media.",
    },
];

pub const MISSION: &str = "Post Labs is rethinking how digital media works for Canadians. Our mission is simple: make journalism profitable, sustainable, and trusted – built for Canadians, by Canadians.";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub text: &'static str,
    pub icon: &'static str,
    pub align: Align,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        text: "Post Labs is building a homegrown platform designed for Canadians and the future of Canadian media.",
        icon: assets::FEATURE_ICON_1,
        align: Align::Left,
    },
    Feature {
        text: "At its core is PostOS, our made-in-Canada publishing engine that connects local voices, communities, and trusted journalism in one seamless digital experience.",
        icon: assets::FEATURE_ICON_2,
        align: Align::Right,
    },
    Feature {
        text: "Built by Canadians, for Canadians, PostOS is more than just technology — it's a way to bring our stories home.",
        icon: assets::FEATURE_ICON_3,
        align: Align::Left,
    },
];

pub const STORY_LEAD: &str = "Built for";
pub const STORY_LABELS: [&str; 3] = ["Scale", "Creators", "Canada"];

#[derive(Debug, PartialEq)]
pub struct Audience {
    pub heading: &'static str,
    pub text: &'static str,
    pub email: &'static str,
}

pub const INVESTORS: Audience = Audience {
    heading: "For Investors",
    text: "We're raising capital to scale fast. If you're an investor who believes in the future of independent Canadian media, we'd love to speak with you.",
    email: "invest@postlabs.com",
};

pub const BUILDERS: Audience = Audience {
    heading: "For Builders",
    text: "We're hiring. If you're passionate about media, technology, and the future of Canada's digital ecosystem, come build with us. We're always looking for great people. Check out our jobs page for current opportunities.",
    email: "careers@postlabs.com",
};

pub const CONTACT_HEADING: &str = "We'd love to hear from you.";

pub const CONTACT_TEXT: &str = "Whether you're interested in investing, joining the team, or just have a question, we're here to help. Use the form below to send us a message — you'll be able to choose where to direct your note, and someone from our team will get back to you.";

#[derive(Debug, PartialEq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub email: Option<&'static str>,
    pub note: Option<&'static str>,
}

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "For investor enquiries:",
        email: Some("invest@postlabs.com"),
        note: None,
    },
    ContactChannel {
        label: "For careers and job applications:",
        email: Some("careers@postlabs.com"),
        note: None,
    },
    ContactChannel {
        label: "For everything else:",
        email: None,
        note: Some("Use the contact form below, and select the category that best fits your message."),
    },
];

pub const MARQUEE_TEXT: &str = "Ready to Build the Future of Canadian Media?";

pub const COMPANY: &str = "Post Labs, Inc.";
pub const DESIGNER: &str = "HRVST";
pub const DESIGNER_URL: &str = "https://gohrvst.com";

//=============================================================================
// Privacy policy
//=============================================================================

/// Inline run of text inside a privacy paragraph.
#[derive(Debug, PartialEq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
    Link {
        label: &'static str,
        href: &'static str,
        external: bool,
    },
    Break,
}

#[derive(Debug, PartialEq)]
pub enum Block {
    Paragraph(&'static [Inline]),
    Ordered(&'static [&'static str]),
    Bullets(&'static [&'static str]),
}

#[derive(Debug, PartialEq)]
pub struct PrivacySection {
    pub title: &'static str,
    pub body: &'static [Block],
}

const LEGAL_EMAIL: Inline = Inline::Link {
    label: "legal@postlabs.com",
    href: "mailto:legal@postlabs.com",
    external: false,
};

pub static PRIVACY_SECTIONS: [PrivacySection; 19] = [
    PrivacySection {
        title: "Effective Date: May 1, 2025",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "PostLabs.com is owned and operated by Post Labs, Inc., and is the data controller for this Site. You can contact us at:",
            )]),
            Block::Paragraph(&[
                Inline::Text("Post Labs, Inc."),
                Inline::Break,
                Inline::Text("365 Bloor Street East"),
                Inline::Break,
                Inline::Text("Toronto, Ontario,"),
                Inline::Break,
                Inline::Text("M4W 3L4"),
                Inline::Break,
                Inline::Text("Email: "),
                LEGAL_EMAIL,
            ]),
            Block::Paragraph(&[Inline::Text(
                "We respect your privacy and are committed to protecting your personal information. This policy explains what information we collect, how we use it, and the choices you have regarding your data.",
            )]),
        ],
    },
    PrivacySection {
        title: "Purpose",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "The purpose of this privacy policy is to inform users of our Site about:",
            )]),
            Block::Ordered(&[
                "The personal data we collect;",
                "How we use collected data;",
                "Who has access to the data collected;",
                "The rights of Site users regarding their personal data.",
            ]),
        ],
    },
    PrivacySection {
        title: "GDPR",
        body: &[Block::Paragraph(&[Inline::Text(
            "Our business operates in Canada, and we comply with Canadian privacy laws. We do not process data under the European Union’s GDPR framework. If you are accessing our Site from the EU, please be aware of this.",
        )])],
    },
    PrivacySection {
        title: "Consent",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "By using our Site, you agree to the terms of this privacy policy and consent to our collection and use of your data as described.",
            )]),
            Block::Paragraph(&[Inline::Text(
                "If the legal basis for processing your personal data is your consent, you may withdraw your consent at any time. Please note that withdrawing your consent does not affect any processing we carried out before your withdrawal.",
            )]),
            Block::Paragraph(&[
                Inline::Text("To withdraw your consent, you can stop using our Site and contact us at "),
                LEGAL_EMAIL,
                Inline::Text("."),
            ]),
        ],
    },
    PrivacySection {
        title: "Legal Basis for Processing",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "We process personal data as necessary for our legitimate business interests, which include:",
            )]),
            Block::Ordered(&[
                "Operating and improving our Site and services;",
                "Responding to inquiries and potential business opportunities;",
                "Protecting our legal rights and ensuring Site security.",
            ]),
        ],
    },
    PrivacySection {
        title: "Personal Data We Collect",
        body: &[Block::Paragraph(&[Inline::Text(
            "We only collect data that helps us achieve the purposes outlined in this policy. We will not collect additional data without notifying you first.",
        )])],
    },
    PrivacySection {
        title: "Data Collected Automatically",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "When you visit our Site, we automatically collect:",
            )]),
            Block::Bullets(&[
                "IP address",
                "Browser type and version",
                "General location (city or region)",
                "Device information (desktop, mobile, etc.)",
                "Analytics data through cookies and similar technologies",
            ]),
        ],
    },
    PrivacySection {
        title: "Data Collected Directly from You",
        body: &[
            Block::Paragraph(&[Inline::Text("We use your personal data to:")]),
            Block::Bullets(&[
                "Improve the performance, security, and usability of our Site;",
                "Understand user behaviour through analytics to improve our services;",
                "Respond to inquiries and provide customer support;",
                "Communicate with you, if you have asked us to.",
            ]),
            Block::Paragraph(&[Inline::Text(
                "We will not use your data for any purposes not listed here without notifying you first.",
            )]),
        ],
    },
    PrivacySection {
        title: "How We Use Personal Data",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "We collect personal data you voluntarily provide when:",
            )]),
            Block::Bullets(&[
                "You fill out a form on our Site;",
                "You contact us directly by email.",
            ]),
            Block::Paragraph(&[Inline::Text("This may include:")]),
            Block::Bullets(&[
                "Name",
                "Email address",
                "Any message or information you choose to submit",
            ]),
        ],
    },
    PrivacySection {
        title: "Commercial Electronic Messages",
        body: &[Block::Paragraph(&[
            Inline::Text(
                "If you provide us with your email address, we will only send you commercial electronic messages with your consent. You can unsubscribe at any time by following the instructions in the email or by contacting us at ",
            ),
            LEGAL_EMAIL,
            Inline::Text("."),
        ])],
    },
    PrivacySection {
        title: "Who We Share Personal Data With",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "We only share your data when necessary, including:",
            )]),
            Block::Bullets(&[
                "Our employees, who require access to perform their job duties;",
                "External advisors and service providers under strict confidentiality agreements;",
                "Buyers or prospective buyers, if we sell or consider selling the company.",
            ]),
            Block::Paragraph(&[Inline::Text(
                "We do not sell your personal data to third parties.",
            )]),
            Block::Paragraph(&[Inline::Text(
                "We may disclose your data if required by law or if necessary to:",
            )]),
            Block::Bullets(&[
                "Comply with legal proceedings;",
                "Protect our legal rights;",
                "Prevent fraud or other illegal activities.",
            ]),
        ],
    },
    PrivacySection {
        title: "How Long We Store Personal Data",
        body: &[Block::Paragraph(&[Inline::Text(
            "We retain personal data only as long as necessary to achieve the purposes for which it was collected. Once the purpose is fulfilled, we delete or anonymize your data, unless legal obligations require us to retain it longer.",
        )])],
    },
    PrivacySection {
        title: "How We Protect Your Data",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "We take reasonable precautions to protect your data:",
            )]),
            Block::Bullets(&[
                "We use secure third-party cloud services;",
                "We limit access to data to those who need it;",
                "We monitor our systems for vulnerabilities.",
            ]),
            Block::Paragraph(&[Inline::Text(
                "However, no method of transmission or storage is completely secure. While we do our best, we cannot guarantee absolute security.",
            )]),
        ],
    },
    PrivacySection {
        title: "Cookies and Tracking Technologies",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "We use cookies and similar technologies to:",
            )]),
            Block::Bullets(&[
                "Understand how you use our Site;",
                "Improve performance and user experience;",
                "Provide insights through analytics.",
            ]),
            Block::Paragraph(&[Inline::Text(
                "You can manage or disable cookies through your browser settings. Disabling cookies may affect your experience on our Site.",
            )]),
        ],
    },
    PrivacySection {
        title: "Children’s Privacy",
        body: &[Block::Paragraph(&[Inline::Text(
            "We do not knowingly collect or use personal data from anyone under 18 years of age. If you are under 18, please do not use our Site or submit personal information",
        )])],
    },
    PrivacySection {
        title: "Your Rights",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "Under Canadian privacy laws, you have the right to:",
            )]),
            Block::Bullets(&[
                "Access the personal data we hold about you;",
                "Request corrections to inaccurate or incomplete data;",
                "Request deletion of your personal data, subject to legal requirements.",
            ]),
            Block::Paragraph(&[
                Inline::Text("To exercise these rights, contact us at "),
                LEGAL_EMAIL,
                Inline::Text(". We will do our best to respond promptly."),
            ]),
        ],
    },
    PrivacySection {
        title: "Complaints",
        body: &[
            Block::Paragraph(&[
                Inline::Text(
                    "If you have concerns about how we handle your personal data, please contact us at ",
                ),
                LEGAL_EMAIL,
                Inline::Text("."),
            ]),
            Block::Paragraph(&[Inline::Text(
                "If you are not satisfied with our response, you may contact the Office of the Privacy Commissioner of Canada:",
            )]),
            Block::Paragraph(&[
                Inline::Text("Office of the Privacy Commissioner of Canada"),
                Inline::Break,
                Inline::Text("Website: "),
                Inline::Link {
                    label: "https://www.priv.gc.ca/",
                    href: "https://www.priv.gc.ca/",
                    external: true,
                },
                Inline::Break,
                Inline::Text("Phone: "),
                Inline::Link {
                    label: "1-800-282-1376",
                    href: "tel:1-800-282-1376",
                    external: false,
                },
            ]),
        ],
    },
    PrivacySection {
        title: "Changes to This Privacy Policy",
        body: &[Block::Paragraph(&[Inline::Text(
            "We may update this privacy policy from time to time. When we do, we will post the updated version here and update the Effective Date at the top of this page. We encourage you to review it periodically.",
        )])],
    },
    PrivacySection {
        title: "Contact Us",
        body: &[
            Block::Paragraph(&[Inline::Text(
                "If you have any questions about this policy or how we handle your personal data, please contact:",
            )]),
            Block::Paragraph(&[
                Inline::Strong("Post Labs, Inc."),
                Inline::Break,
                Inline::Text("Email: "),
                LEGAL_EMAIL,
            ]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_titles_are_unique() {
        let mut titles: Vec<_> = PRIVACY_SECTIONS.iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PRIVACY_SECTIONS.len());
    }

    #[test]
    fn every_privacy_section_has_a_body() {
        assert!(PRIVACY_SECTIONS.iter().all(|s| !s.body.is_empty()));
    }

    #[test]
    fn story_has_one_video_per_label() {
        assert_eq!(assets::STORY_VIDEOS.len(), STORY_LABELS.len());
    }
}
