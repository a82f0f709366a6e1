//! Synthetic series behind each dashboard section.
//!
//! Fixed series are copied from the case studies; the rest are drawn from a
//! [`StdRng`]. Supplying a seed makes every section reproducible, and each
//! section derives its own stream so generation order does not matter.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;
use time::Month;

use super::Section;

/// Months shown on the revenue and heatmap axes.
pub const MONTHS: usize = 12;
/// Regions on the heatmap rows; the last one carries the injected slump.
pub const REGIONS: [&str; 4] = ["North America", "Europe", "Asia Pac", "LatAm"];
pub const CAMPAIGNS: usize = 15;
pub const CLUSTER_POINTS: usize = 100;

const REVENUE: [f32; MONTHS] = [45., 52., 48., 60., 65., 70., 75., 72., 80., 85., 90., 95.];
const AD_SPEND: [f32; MONTHS] = [10., 12., 11., 25., 14., 15., 16., 15., 18., 19., 20., 21.];
const HEATMAP_VALUES: std::ops::Range<u32> = 50..100;
const LATAM_PENALTY: f32 = 30.0;
const HUMAN_MINUTES: [f32; 12] = [45., 50., 120., 180., 200., 150., 100., 60., 50., 45., 40., 42.];
const AI_MINUTES: [f32; 12] = [2., 2., 2., 3., 2., 2., 2., 2., 2., 2., 2., 2.];
const CONFUSION_LABELS: [&str; 3] = ["Urgent", "Feature", "Spam"];
const CONFUSION_COUNTS: [[u32; 3]; 3] = [[50, 2, 1], [3, 45, 5], [1, 6, 80]];

/// One named numeric series aligned to a shared x axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<f32>,
}

/// Category-x line chart input.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChartData {
    pub x_labels: Vec<String>,
    pub series: Vec<Series>,
}

impl LineChartData {
    /// Largest value across every series, or 0 when empty.
    pub fn max_value(&self) -> f32 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f32::max)
    }
}

/// Row-major grid; `values[row][col]`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapData {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<&'static str>,
    pub values: Vec<Vec<f32>>,
}

impl HeatmapData {
    pub fn value_range(&self) -> (f32, f32) {
        let mut iter = self.values.iter().flatten().copied();
        let Some(first) = iter.next() else {
            return (0.0, 0.0);
        };
        iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    pub fn row_mean(&self, row: usize) -> Option<f32> {
        let cells = self.values.get(row)?;
        if cells.is_empty() {
            return None;
        }
        Some(cells.iter().sum::<f32>() / cells.len() as f32)
    }

    /// Row label and mean of the lowest-performing row.
    pub fn weakest_row(&self) -> Option<(&'static str, f32)> {
        self.y_labels
            .iter()
            .enumerate()
            .filter_map(|(row, label)| Some((*label, self.row_mean(row)?)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub campaign: String,
    /// Ad spend in $k.
    pub spend: f32,
    /// Revenue in $k; also drives bubble size.
    pub revenue: f32,
    pub roi: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieData {
    pub slices: Vec<Slice>,
}

impl PieData {
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Fraction of the whole per slice, in slice order.
    pub fn fractions(&self) -> Vec<f32> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.slices.len()];
        }
        self.slices
            .iter()
            .map(|s| s.value as f32 / total as f32)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    pub name: &'static str,
    pub points: Vec<[f32; 2]>,
}

/// Actual classes on rows, predictions on columns.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionMatrix {
    pub labels: Vec<&'static str>,
    pub counts: Vec<Vec<u32>>,
}

impl ConfusionMatrix {
    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Share of samples on the diagonal.
    pub fn accuracy(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: u32 = self
            .counts
            .iter()
            .enumerate()
            .filter_map(|(i, row)| row.get(i))
            .sum();
        correct as f32 / total as f32
    }
}

/// Headline number on the summary page.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryData {
    pub metrics: Vec<MetricTile>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevenueData {
    pub trend: LineChartData,
    pub regional: HeatmapData,
    pub campaigns: Vec<Bubble>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChurnData {
    pub segments: PieData,
    /// Sorted ascending so the strongest driver draws last (top).
    pub drivers: Vec<Bar>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TriageData {
    pub clusters: Vec<Cluster>,
    pub confusion: ConfusionMatrix,
    pub latency: LineChartData,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionData {
    Summary(SummaryData),
    Revenue(RevenueData),
    Churn(ChurnData),
    Triage(TriageData),
}

impl SectionData {
    pub fn section(&self) -> Section {
        match self {
            SectionData::Summary(_) => Section::Summary,
            SectionData::Revenue(_) => Section::RevenueAnalysis,
            SectionData::Churn(_) => Section::ChurnPrediction,
            SectionData::Triage(_) => Section::AiTriage,
        }
    }
}

/// Produces chart data per section, optionally from a fixed seed.
#[derive(Clone, Debug, Default)]
pub struct SampleDataProvider {
    seed: Option<u64>,
}

impl SampleDataProvider {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generate_series(&self, section: Section) -> SectionData {
        let mut rng = self.rng_for(section);
        match section {
            Section::Summary => SectionData::Summary(summary_data()),
            Section::RevenueAnalysis => SectionData::Revenue(revenue_data(&mut rng)),
            Section::ChurnPrediction => SectionData::Churn(churn_data()),
            Section::AiTriage => SectionData::Triage(triage_data(&mut rng)),
        }
    }

    fn rng_for(&self, section: Section) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(section.index() as u64)),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Short month names starting at January.
pub fn month_labels() -> Vec<String> {
    let mut month = Month::January;
    let mut labels = Vec::with_capacity(MONTHS);
    for _ in 0..MONTHS {
        labels.push(month.to_string().chars().take(3).collect());
        month = month.next();
    }
    labels
}

fn summary_data() -> SummaryData {
    SummaryData {
        metrics: vec![
            MetricTile {
                label: "Clients Served",
                value: "3",
                delta: "Retail, SaaS, Fintech",
            },
            MetricTile {
                label: "Revenue Impact",
                value: "$420k+",
                delta: "Optimized Spend",
            },
            MetricTile {
                label: "Data Processed",
                value: "1.5TB",
                delta: "ETL Pipelines",
            },
        ],
    }
}

fn revenue_data(rng: &mut StdRng) -> RevenueData {
    let months = month_labels();
    let trend = LineChartData {
        x_labels: months.iter().map(|m| format!("{m} 2025")).collect(),
        series: vec![
            Series {
                name: "Revenue",
                values: REVENUE.to_vec(),
            },
            Series {
                name: "Ad Spend",
                values: AD_SPEND.to_vec(),
            },
        ],
    };

    let last = REGIONS.len() - 1;
    let values = (0..REGIONS.len())
        .map(|row| {
            (0..MONTHS)
                .map(|_| {
                    let cell = rng.random_range(HEATMAP_VALUES) as f32;
                    if row == last { cell - LATAM_PENALTY } else { cell }
                })
                .collect()
        })
        .collect();
    let regional = HeatmapData {
        x_labels: months,
        y_labels: REGIONS.to_vec(),
        values,
    };

    let campaigns = (1..=CAMPAIGNS)
        .map(|i| Bubble {
            campaign: format!("Camp {i}"),
            spend: rng.random_range(10..50) as f32,
            revenue: rng.random_range(40..150) as f32,
            roi: rng.random_range(1.5..5.0),
        })
        .collect();

    RevenueData {
        trend,
        regional,
        campaigns,
    }
}

fn churn_data() -> ChurnData {
    let segments = PieData {
        slices: vec![
            Slice {
                label: "Safe",
                value: 450,
            },
            Slice {
                label: "At Risk",
                value: 120,
            },
            Slice {
                label: "Critical",
                value: 55,
            },
        ],
    };
    let mut drivers = vec![
        Bar {
            label: "Low Login Freq",
            value: 0.85,
        },
        Bar {
            label: "High Support Tickets",
            value: 0.72,
        },
        Bar {
            label: "Short Tenure",
            value: 0.45,
        },
        Bar {
            label: "Bill Increase",
            value: 0.30,
        },
        Bar {
            label: "Competitor Ads",
            value: 0.15,
        },
    ];
    drivers.sort_by(|a, b| a.value.total_cmp(&b.value));
    ChurnData { segments, drivers }
}

fn triage_data(rng: &mut StdRng) -> TriageData {
    let clusters = [("Urgent", 5.0, 5.0), ("Feature", 2.0, 8.0), ("General", 8.0, 2.0)]
        .into_iter()
        .map(|(name, cx, cy)| Cluster {
            name,
            points: normal_cloud(rng, cx, cy, CLUSTER_POINTS),
        })
        .collect();

    let confusion = ConfusionMatrix {
        labels: CONFUSION_LABELS.to_vec(),
        counts: CONFUSION_COUNTS.iter().map(|row| row.to_vec()).collect(),
    };

    let latency = LineChartData {
        x_labels: (0..24).step_by(2).map(|h| format!("{h}h")).collect(),
        series: vec![
            Series {
                name: "Human (Manual)",
                values: HUMAN_MINUTES.to_vec(),
            },
            Series {
                name: "AI Agent",
                values: AI_MINUTES.to_vec(),
            },
        ],
    };

    TriageData {
        clusters,
        confusion,
        latency,
    }
}

fn normal_cloud(rng: &mut StdRng, cx: f32, cy: f32, count: usize) -> Vec<[f32; 2]> {
    (0..count)
        .map(|_| {
            let dx: f32 = rng.sample(StandardNormal);
            let dy: f32 = rng.sample(StandardNormal);
            [cx + dx, cy + dy]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revenue(seed: u64) -> RevenueData {
        match SampleDataProvider::new(Some(seed)).generate_series(Section::RevenueAnalysis) {
            SectionData::Revenue(data) => data,
            other => panic!("expected revenue data, got {:?}", other.section()),
        }
    }

    fn triage(seed: u64) -> TriageData {
        match SampleDataProvider::new(Some(seed)).generate_series(Section::AiTriage) {
            SectionData::Triage(data) => data,
            other => panic!("expected triage data, got {:?}", other.section()),
        }
    }

    #[test]
    fn each_section_yields_its_own_variant() {
        let provider = SampleDataProvider::new(None);
        for section in Section::ALL {
            assert_eq!(provider.generate_series(section).section(), section);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        assert_eq!(revenue(7), revenue(7));
        assert_eq!(triage(7), triage(7));
        assert_ne!(revenue(7).regional, revenue(8).regional);
    }

    #[test]
    fn month_labels_cover_the_year() {
        let labels = month_labels();
        assert_eq!(labels.len(), MONTHS);
        assert_eq!(labels.first().map(String::as_str), Some("Jan"));
        assert_eq!(labels.last().map(String::as_str), Some("Dec"));
    }

    #[test]
    fn revenue_series_have_fixed_shapes() {
        let data = revenue(1);
        assert_eq!(data.trend.x_labels.len(), MONTHS);
        assert!(data.trend.series.iter().all(|s| s.values.len() == MONTHS));
        assert_eq!(data.trend.max_value(), 95.0);
        assert_eq!(data.regional.values.len(), REGIONS.len());
        assert!(data.regional.values.iter().all(|row| row.len() == MONTHS));
        assert_eq!(data.campaigns.len(), CAMPAIGNS);
        assert_eq!(data.campaigns[14].campaign, "Camp 15");
    }

    #[test]
    fn latam_row_carries_injected_slump() {
        for seed in 0..20 {
            let data = revenue(seed);
            for (row, cells) in data.regional.values.iter().enumerate() {
                let (lo, hi) = if row == REGIONS.len() - 1 {
                    (20.0, 70.0)
                } else {
                    (50.0, 100.0)
                };
                assert!(cells.iter().all(|v| *v >= lo && *v < hi), "row {row}: {cells:?}");
            }
        }
    }

    #[test]
    fn latam_is_the_weakest_region() {
        for seed in 0..20 {
            let regional = revenue(seed).regional;
            let (label, mean) = regional.weakest_row().expect("four regions");
            assert_eq!(label, "LatAm");
            assert_eq!(regional.row_mean(REGIONS.len() - 1), Some(mean));
        }
    }

    #[test]
    fn campaign_draws_stay_in_bounds() {
        for bubble in revenue(3).campaigns {
            assert!((10.0..50.0).contains(&bubble.spend));
            assert!((40.0..150.0).contains(&bubble.revenue));
            assert!((1.5..5.0).contains(&bubble.roi));
        }
    }

    #[test]
    fn churn_segments_and_drivers_are_fixed() {
        let SectionData::Churn(data) =
            SampleDataProvider::new(None).generate_series(Section::ChurnPrediction)
        else {
            panic!("expected churn data");
        };
        assert_eq!(data.segments.total(), 625);
        let fractions = data.segments.fractions();
        assert!((fractions.iter().sum::<f32>() - 1.0).abs() < 1e-5);
        let labels: Vec<_> = data.drivers.iter().map(|b| b.label).collect();
        assert_eq!(labels.first(), Some(&"Competitor Ads"));
        assert_eq!(labels.last(), Some(&"Low Login Freq"));
        assert!(data.drivers.windows(2).all(|w| w[0].value <= w[1].value));
    }

    #[test]
    fn triage_clusters_centre_near_their_means() {
        let data = triage(11);
        assert_eq!(data.clusters.len(), 3);
        for (cluster, (cx, cy)) in data.clusters.iter().zip([(5.0, 5.0), (2.0, 8.0), (8.0, 2.0)]) {
            assert_eq!(cluster.points.len(), CLUSTER_POINTS);
            let n = cluster.points.len() as f32;
            let mx = cluster.points.iter().map(|p| p[0]).sum::<f32>() / n;
            let my = cluster.points.iter().map(|p| p[1]).sum::<f32>() / n;
            assert!((mx - cx).abs() < 0.6, "{} x mean {mx}", cluster.name);
            assert!((my - cy).abs() < 0.6, "{} y mean {my}", cluster.name);
        }
    }

    #[test]
    fn confusion_matrix_and_latency_are_fixed() {
        let data = triage(0);
        assert_eq!(data.confusion.total(), 193);
        assert_eq!(data.confusion.max_count(), 80);
        assert!((data.confusion.accuracy() - 175.0 / 193.0).abs() < 1e-6);
        assert_eq!(data.latency.x_labels.len(), 12);
        assert_eq!(data.latency.x_labels[11], "22h");
        assert_eq!(data.latency.max_value(), 200.0);
    }

    #[test]
    fn summary_lists_three_metrics() {
        let SectionData::Summary(data) =
            SampleDataProvider::default().generate_series(Section::Summary)
        else {
            panic!("expected summary data");
        };
        assert_eq!(data.metrics.len(), 3);
        assert_eq!(data.metrics[1].value, "$420k+");
    }

    #[test]
    fn heatmap_helpers_handle_empty_grids() {
        let empty = HeatmapData {
            x_labels: Vec::new(),
            y_labels: Vec::new(),
            values: Vec::new(),
        };
        assert_eq!(empty.value_range(), (0.0, 0.0));
        assert_eq!(empty.row_mean(0), None);
        assert_eq!(empty.weakest_row(), None);
    }
}
