//! Aggregations behind the dashboard charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Report pages render plain HTML/CSS bars and rings. Everything numeric they
//! show (bucket counts, percentages, averages, scores) is derived here from
//! the decoded report payloads, so the views stay declarative.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use schema::report::{AncestryRegion, Biomarker, BiometricVariant, DiseaseGroups, DrugSystem, Priority, RiskDistribution, Trait};

/// Palette shared by grouped charts, cycled in first-seen order.
pub const GROUP_COLORS: [&str; 6] = ["#8b5cf6", "#06b6d4", "#f59e0b", "#ef4444", "#10b981", "#3b82f6"];

/// `round(value / total * 100)` with a zero total treated as one.
pub fn percent_of(value: f64, total: f64) -> u32 {
    let total = if total == 0.0 { 1.0 } else { total };
    let pct = (value / total * 100.0).round();
    if pct.is_finite() && pct > 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = pct as u32;
        pct
    } else {
        0
    }
}

/// Share of each value in the sum of `values`.
pub fn percentages(values: &[f64]) -> Vec<u32> {
    let total: f64 = values.iter().sum();
    values.iter().map(|v| percent_of(*v, total)).collect()
}

// =============================================================================
// DISEASES
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct DiseaseStats {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Mean of the positive magnitudes, two decimals.
    pub avg_magnitude: String,
    /// SNPs with magnitude >= 3 or an explicit high priority.
    pub pathogenic: usize,
    /// Weighted score `(3a + 2m + b) / 3n`, as a percentage.
    pub score: u32,
}

impl DiseaseStats {
    pub fn from_groups(groups: &DiseaseGroups) -> Self {
        let (high, medium, low) = (groups.alta.len(), groups.media.len(), groups.baja.len());
        let total = high + medium + low;

        let positive: Vec<f64> = groups.iter().filter_map(|(_, s)| s.magnitud_efecto).filter(|m| *m > 0.0).collect();
        let avg_magnitude = if positive.is_empty() {
            "0.00".to_owned()
        } else {
            #[allow(clippy::cast_precision_loss)]
            let mean = positive.iter().sum::<f64>() / positive.len() as f64;
            format!("{mean:.2}")
        };

        let pathogenic = groups
            .iter()
            .filter(|(_, s)| {
                s.magnitud_efecto.is_some_and(|m| m >= 3.0) || (s.prioridad.is_some() && s.priority() == Priority::High)
            })
            .count();

        #[allow(clippy::cast_precision_loss)]
        let score = if total == 0 {
            0
        } else {
            let weighted = (high * 3 + medium * 2 + low) as f64;
            percent_of(weighted, (total * 3) as f64)
        };

        Self { high, medium, low, avg_magnitude, pathogenic, score }
    }
}

/// Population frequency as a percentage; fractions (<= 1) are scaled up.
pub fn format_frequency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let pct = if v <= 1.0 { v * 100.0 } else { v };
            format!("{pct:.2}%")
        }
        _ => "N/D".to_owned(),
    }
}

/// Filled pips (0-5) for an effect magnitude.
pub fn magnitude_pips(magnitude: Option<f64>) -> usize {
    let m = magnitude.unwrap_or(0.0).round().clamp(0.0, 5.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pips = m as usize;
    pips
}

// =============================================================================
// BIOMARKERS
// =============================================================================

/// Count `userResult.risk` values by level; unknown levels are ignored.
pub fn risk_distribution(biomarkers: &[Biomarker]) -> RiskDistribution {
    let mut dist = RiskDistribution::default();
    for bio in biomarkers {
        match bio.user_result.risk.trim().to_lowercase().as_str() {
            "bajo" | "low" => dist.bajo += 1,
            "medio" | "medium" | "intermedio" => dist.medio += 1,
            "alto" | "high" => dist.alto += 1,
            _ => {}
        }
    }
    dist
}

// =============================================================================
// TRAITS
// =============================================================================

pub const TRAIT_GROUP_ORDER: [&str; 6] =
    ["Metabolismo", "Rendimiento Físico y Sensorial", "Cognición", "Bienestar y Salud", "Apariencia Física", "Rasgos"];

pub const DEFAULT_TRAIT_PERCENTAGE: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TraitGroup {
    pub name: String,
    /// Rounded mean percentage of the group's traits.
    pub value: u32,
    pub color: &'static str,
    pub traits: Vec<Trait>,
}

impl TraitGroup {
    pub fn level(&self) -> &'static str {
        level_label(f64::from(self.value))
    }
}

pub fn trait_percentage(t: &Trait) -> f64 {
    t.percentage.unwrap_or(DEFAULT_TRAIT_PERCENTAGE)
}

/// `Alto` from 61, `Medio` from 31, else `Bajo`.
pub fn level_label(percentage: f64) -> &'static str {
    if percentage >= 61.0 {
        "Alto"
    } else if percentage >= 31.0 {
        "Medio"
    } else {
        "Bajo"
    }
}

/// Group traits by `group` (blank -> `Rasgos`) in display order.
pub fn trait_groups(traits: &[Trait]) -> Vec<TraitGroup> {
    let mut groups: Vec<TraitGroup> = Vec::new();
    for t in traits {
        let name = if t.group.trim().is_empty() { "Rasgos" } else { t.group.trim() };
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.traits.push(t.clone()),
            None => {
                let color = GROUP_COLORS[groups.len() % GROUP_COLORS.len()];
                groups.push(TraitGroup { name: name.to_owned(), value: 0, color, traits: vec![t.clone()] });
            }
        }
    }
    for group in &mut groups {
        let sum: f64 = group.traits.iter().map(trait_percentage).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = sum / group.traits.len() as f64;
        group.value = percent_of(mean, 100.0);
    }
    groups.sort_by(|a, b| {
        let ia = TRAIT_GROUP_ORDER.iter().position(|n| *n == a.name);
        let ib = TRAIT_GROUP_ORDER.iter().position(|n| *n == b.name);
        match (ia, ib) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.name.cmp(&b.name),
        }
    });
    groups
}

// =============================================================================
// BIOMETRICS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Biometric thresholds: 3.5 and 2.0.
    pub fn biometric(magnitude: f64) -> Self {
        if magnitude >= 3.5 {
            Self::High
        } else if magnitude >= 2.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Pharmacogenetic thresholds: 3 and 2.
    pub fn drug(magnitude: f64) -> Self {
        if magnitude >= 3.0 {
            Self::High
        } else if magnitude >= 2.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Backend filter key: `alto`, `medio` or `bajo`.
    pub fn key(self) -> &'static str {
        match self {
            Self::High => "alto",
            Self::Medium => "medio",
            Self::Low => "bajo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alto",
            Self::Medium => "Medio",
            Self::Low => "Bajo",
        }
    }

    pub fn score(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#ef4444",
            Self::Medium => "#f59e0b",
            Self::Low => "#10b981",
        }
    }
}

/// Bar width for a biometric magnitude, capped at 100.
pub fn magnitude_bar(magnitude: f64) -> u32 {
    percent_of(magnitude, 3.0).min(100)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImpactSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Mean impact score on the 1..=3 scale, `0` when empty.
    pub average_score: f64,
}

impl ImpactSummary {
    pub fn from_impacts(impacts: impl IntoIterator<Item = Impact>) -> Self {
        let mut summary = Self::default();
        let mut score = 0u32;
        for impact in impacts {
            match impact {
                Impact::High => summary.high += 1,
                Impact::Medium => summary.medium += 1,
                Impact::Low => summary.low += 1,
            }
            score += impact.score();
        }
        let count = summary.total();
        if count > 0 {
            #[allow(clippy::cast_precision_loss)]
            let avg = f64::from(score) / count as f64;
            summary.average_score = avg;
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

pub fn biometric_summary(variants: &[BiometricVariant]) -> ImpactSummary {
    ImpactSummary::from_impacts(variants.iter().map(|v| Impact::biometric(v.magnitud_efecto.unwrap_or(0.0))))
}

// =============================================================================
// PHARMACOGENETICS
// =============================================================================

pub fn drug_summary(systems: &[DrugSystem]) -> ImpactSummary {
    ImpactSummary::from_impacts(systems.iter().flat_map(|s| s.drugs.iter()).map(|d| Impact::drug(d.magnitud)))
}

/// Keep drugs matching `search` (system or drug name) and `impact`
/// (`todos` keeps every level); systems left without drugs are dropped.
pub fn filter_drug_systems(systems: &[DrugSystem], search: &str, impact: &str) -> Vec<DrugSystem> {
    let needle = search.trim().to_lowercase();
    let impact = impact.trim().to_lowercase();
    systems
        .iter()
        .filter_map(|system| {
            let system_hit = needle.is_empty() || system.name.to_lowercase().contains(&needle);
            let drugs: Vec<_> = system
                .drugs
                .iter()
                .filter(|d| system_hit || d.name.to_lowercase().contains(&needle))
                .filter(|d| impact.is_empty() || impact == "todos" || Impact::drug(d.magnitud).key() == impact)
                .cloned()
                .collect();
            (!drugs.is_empty()).then(|| DrugSystem { drugs, ..system.clone() })
        })
        .collect()
}

// =============================================================================
// ANCESTRY
// =============================================================================

/// `(name, percentage)` for the `n` largest regions, plus `Otros` for the
/// remainder when there is any.
pub fn top_regions(regions: &[AncestryRegion], n: usize) -> Vec<(String, f64)> {
    let mut sorted: Vec<&AncestryRegion> = regions.iter().collect();
    sorted.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    let mut out: Vec<(String, f64)> = sorted.iter().take(n).map(|r| (r.name.clone(), r.percentage)).collect();
    let rest: f64 = sorted.iter().skip(n).map(|r| r.percentage).sum();
    if rest > 0.0 {
        out.push(("Otros".to_owned(), rest));
    }
    out
}

/// Wording for a region's share in the detail panel.
pub fn ancestry_weight(percentage: f64) -> &'static str {
    if percentage > 20.0 { "predominante" } else { "parte" }
}

// =============================================================================
// COUNTERS
// =============================================================================

/// Integer with `.` thousands separators, as shown in es-CL.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
