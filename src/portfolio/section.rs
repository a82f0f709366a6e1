/// Top-level content views selectable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Summary,
    RevenueAnalysis,
    ChurnPrediction,
    AiTriage,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 4] = [
        Section::Summary,
        Section::RevenueAnalysis,
        Section::ChurnPrediction,
        Section::AiTriage,
    ];

    /// Label shown in the sidebar navigation list.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Summary => "Impact Summary",
            Section::RevenueAnalysis => "01. Revenue Analysis",
            Section::ChurnPrediction => "02. Churn Prediction",
            Section::AiTriage => "03. AI Triage System",
        }
    }

    /// Short identifier used in logs and the status bar.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::RevenueAnalysis => "revenue",
            Section::ChurnPrediction => "churn",
            Section::AiTriage => "triage",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Summary => 0,
            Section::RevenueAnalysis => 1,
            Section::ChurnPrediction => 2,
            Section::AiTriage => 3,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.nav_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_lists_each_section_once_in_sidebar_order() {
        for (position, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), position);
        }
        let unique: HashSet<_> = Section::ALL.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn labels_and_slugs_are_distinct() {
        let labels: HashSet<_> = Section::ALL.iter().map(|s| s.nav_label()).collect();
        let slugs: HashSet<_> = Section::ALL.iter().map(|s| s.slug()).collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(slugs.len(), 4);
    }

    #[test]
    fn summary_is_default() {
        assert_eq!(Section::default(), Section::Summary);
        assert_eq!(Section::AiTriage.to_string(), "03. AI Triage System");
    }
}
