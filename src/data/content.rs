//! Static prose for both pages

use super::{Myth, ReadingTip};

pub const SITE_TITLE: &str = "Organic vs Conventional: What Are You Really Paying For?";
pub const FOOTER: &str = "English 1101 Group Project | Organic vs Conventional Food Analysis";

// Home page

pub const HOME_HEADER: &str = "Organic ≠ Pesticide-Free";
pub const HOME_SUBHEADER: &str =
    "The truth about organic food, pesticides, and what you're really paying for";
pub const HOME_INTRO: &str = "Many people believe that buying organic means buying pesticide-free food. In reality, organic farms are allowed to use pesticides—just ones derived from natural sources like plants, minerals, or bacteria. While there are differences in farming practices, large-scale studies haven't proven major health advantages from eating organic. What matters to consumers varies: some prioritize environmental impact, others care about farming practices, and many simply wonder if the higher price is worth it.";

pub const MYTHS_HEADER: &str = "Myth vs Fact";
pub const MYTHS: &[Myth] = &[
    Myth {
        myth: "Organic means no pesticides.",
        fact: "Organic farmers can use pesticides from plants, minerals, or bacteria. They're just required to use approved 'natural' pesticides and exhaust non-chemical methods first.",
    },
    Myth {
        myth: "Organic is always healthier.",
        fact: "Large systematic reviews haven't found a major overall health advantage for organic diets. Some studies show associations with reduced disease risk, but evidence is limited.",
    },
    Myth {
        myth: "Organic food has zero synthetic pesticide residue.",
        fact: "Up to 28% of organic produce in Europe contains trace residues of synthetic pesticides due to environmental contamination from nearby conventional farms.",
    },
    Myth {
        myth: "All organic pesticides are safer than synthetic ones.",
        fact: "Some organic pesticides like copper fungicides can be highly toxic to non-target organisms and build up in soil over time.",
    },
];

pub const FREQUENCY_HEADER: &str = "📊 How Often do Students Buy Organic";
pub const FREQUENCY_TEXT: &str = "We found survey data from college students to understand their organic food purchasing habits. The majority of students buy organic food monthly, with smaller groups purchasing weekly, daily, or every six months.";

pub const SHARE_HEADER: &str = "🥗 What Share of Groceries Are Organic";
pub const SHARE_TEXT: &str = "Most students (62%) buy some organic products, but they represent only 1-25% of their total groceries. This suggests that while students are interested in organic options, they're selective about when to spend extra for the organic label.";

pub const PRICE_HEADER: &str = "💰 Price Comparison: The Organic Premium";
pub const PRICE_TEXT: &str = "One of the biggest factors in choosing organic is cost. Below, you can explore how much more organic products cost compared to conventional options. The \"organic premium\" varies widely by product type.";
pub const PRICE_SELECTOR_LABEL: &str = "Select a product to see its organic premium:";
pub const PRICE_VERDICT: &str = "Is it worth paying more just for the organic label? That depends on your priorities. If you're concerned about pesticide exposure, organic foods do reduce it—but they don't eliminate it entirely. If you're hoping for major health benefits, the scientific evidence is still inconclusive. The choice often comes down to personal values, budget, and what specific products matter most to you.";

pub const LEARN_MORE_HEADER: &str = "📚 Want to Learn More?";
pub const LEARN_MORE_TEXT: &str = "All of the claims on this page are backed by peer-reviewed research and scientific studies. Open \"Resource Guide\" in the sidebar to explore the sources behind these findings and learn how to evaluate nutrition and food safety research for yourself.";

// Resource guide page

pub const GUIDE_TITLE: &str = "📖 Resource Guide";
pub const GUIDE_INTRO: &str = "This page collects key academic sources and research studies on pesticides, organic farming practices, health outcomes, and consumer behavior. Each source is summarized in plain language and organized by topic to help you understand the evidence behind our project's claims.";
pub const TOPIC_SELECTOR_LABEL: &str = "Choose a topic:";

pub const READING_HEADER: &str = "🔍 How to Read This Research";
pub const READING_TEXT: &str =
    "When evaluating nutrition and food safety research, keep these tips in mind:";
pub const READING_TIPS: &[ReadingTip] = &[
    ReadingTip {
        headline: "Check who funded the study.",
        detail: "Research funded by industry groups may have conflicts of interest.",
    },
    ReadingTip {
        headline: "Look for large, peer-reviewed studies.",
        detail: "Single small studies can show interesting patterns, but large systematic reviews provide stronger evidence.",
    },
    ReadingTip {
        headline: "Be cautious with headlines that oversimplify results.",
        detail: "\"Associated with\" doesn't mean \"causes\"—correlation isn't causation.",
    },
    ReadingTip {
        headline: "Consider the study design.",
        detail: "Randomized controlled trials provide stronger evidence than observational studies.",
    },
    ReadingTip {
        headline: "Look at the limitations section.",
        detail: "Good researchers acknowledge what their study can't prove.",
    },
    ReadingTip {
        headline: "Seek multiple sources.",
        detail: "Don't base important decisions on a single study—look at the overall body of evidence.",
    },
];
pub const READING_NOTE: &str = "💡 Remember: Science is an ongoing process. New evidence may strengthen, weaken, or nuance our current understanding of any topic.";
