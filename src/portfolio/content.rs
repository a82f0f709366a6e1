//! Narrative copy for each section.

use super::Section;

/// Header block and closing note for a case-study section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub header: &'static str,
    pub caption: &'static str,
    pub challenge: &'static str,
    pub note: &'static str,
}

/// Card in the "selected works" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HERO_LINES: [&str; 2] = ["Translating data into", "strategic clarity."];
pub const BYLINE: &str = "Sejal Parihar • Data Analyst & Engineer";
pub const SIDEBAR_HEADING: &str = "PORTFOLIO";
pub const TECH_STACK: [&str; 3] = ["Python", "SQL", "LLMs"];
pub const NOTE_HEADING: &str = "💡 ARCHITECT'S NOTE";

pub const SELECTED_WORKS: [WorkCard; 3] = [
    WorkCard {
        title: "RETAIL ANALYTICS",
        body: "Identified inefficient ad spend across 14 global regions, saving $15k monthly.",
    },
    WorkCard {
        title: "SAAS PREDICTION",
        body: "Reduced customer churn by 12% using a predictive risk-scoring model.",
    },
    WorkCard {
        title: "AI AUTOMATION",
        body: "Cut support ticket response time by 95% using LLM semantic routing.",
    },
];

const REVENUE: CaseStudy = CaseStudy {
    header: "Global Sales Intelligence",
    caption: "CLIENT: FASHION RETAILER • TOOLS: Python, Plotly, SQL",
    challenge: "Client spend was inefficient. We needed to visualize Seasonality, \
                Regional Performance, and Ad ROI simultaneously.",
    note: "The Heatmap (Left) revealed that LatAm was dragging ROI down. We reallocated \
           budget to high-efficiency campaigns shown in the Bubble Chart (Right), \
           achieving a 22% ROI boost.",
};

const CHURN: CaseStudy = CaseStudy {
    header: "Customer Retention Engine",
    caption: "CLIENT: B2B SAAS • TOOLS: Scikit-Learn, Python",
    challenge: "The client faced an 8% monthly churn rate. They needed a predictive model \
                to identify 'At Risk' customers based on usage patterns before they cancelled.",
    note: "The Explainability Chart (Graph 03) identified 'Low Login Frequency' as the #1 \
           leading indicator of churn (0.85 weight). Based on this finding, we automated an \
           'Inactivity Alert' email campaign, which re-engaged 15% of at-risk users before \
           they cancelled.",
};

const TRIAGE: CaseStudy = CaseStudy {
    header: "Automated Support Triage",
    caption: "CLIENT: FINTECH • TOOLS: OpenAI API, Vector DB, Pinecone",
    challenge: "With 2,000+ daily emails, critical 'Fraud' alerts were buried in spam, \
                causing a 48-hour response lag. We implemented Semantic Routing to tag \
                urgent issues instantly.",
    note: "The Latency Chart (Right) demonstrates the core value: while human response \
           times spiked to 200 mins during peak traffic (8 AM), the AI Agent maintained a \
           constant <2 min triage speed. This stability allowed the client to scale from \
           2k to 10k daily users without hiring new support staff.",
};

/// Case-study copy; the summary page has none.
pub fn case_study(section: Section) -> Option<&'static CaseStudy> {
    match section {
        Section::Summary => None,
        Section::RevenueAnalysis => Some(&REVENUE),
        Section::ChurnPrediction => Some(&CHURN),
        Section::AiTriage => Some(&TRIAGE),
    }
}
