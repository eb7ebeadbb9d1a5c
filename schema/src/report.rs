//! Patient report payloads rendered by the dashboard sections.
//!
//! Each endpoint wraps its payload as `{data: ...}`; decode with
//! [`crate::ApiResponse::decode_payload`].

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SchemaError;
use crate::de;

// =============================================================================
// DISEASES
// =============================================================================

/// Clinical priority of a disease-associated SNP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// `alta`/`high`/`1` and `media`/`medium`/`2`; everything else is low.
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
                "alta" | "high" | "1" => Self::High,
                "media" | "medium" | "2" => Self::Medium,
                _ => Self::Low,
            },
            Some(Value::Number(n)) => match n.as_i64() {
                Some(1) => Self::High,
                Some(2) => Self::Medium,
                _ => Self::Low,
            },
            _ => Self::Low,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alta prioridad",
            Self::Medium => "Media prioridad",
            Self::Low => "Baja prioridad",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#8b5cf6",
            Self::Medium => "#06b6d4",
            Self::Low => "#f59e0b",
        }
    }

    /// Weight used by the overall genetic score.
    #[must_use]
    pub fn weight(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseSnp {
    #[serde(default, deserialize_with = "de::string")]
    pub rsid: String,
    #[serde(default, deserialize_with = "de::string")]
    pub genotipo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub fenotipo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub cromosoma: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub posicion: Option<i64>,
    #[serde(default, rename = "gen", deserialize_with = "de::string")]
    pub gene: String,
    #[serde(default, deserialize_with = "de::string")]
    pub nivel_riesgo: String,
    #[serde(default, alias = "magnitude", deserialize_with = "de::opt_f64")]
    pub magnitud_efecto: Option<f64>,
    #[serde(default, deserialize_with = "de::string")]
    pub fuente: String,
    #[serde(default, deserialize_with = "de::string")]
    pub tipo_evidencia: String,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub freq_chile_percent: Option<f64>,
    #[serde(default, deserialize_with = "de::string")]
    pub phenotype_description: String,
    #[serde(default, alias = "priority")]
    pub prioridad: Option<Value>,
}

impl DiseaseSnp {
    #[must_use]
    pub fn priority(&self) -> Priority {
        Priority::from_value(self.prioridad.as_ref())
    }
}

/// Disease SNPs split by clinical priority.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseGroups {
    #[serde(default, deserialize_with = "de::null_default")]
    pub alta: Vec<DiseaseSnp>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub media: Vec<DiseaseSnp>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub baja: Vec<DiseaseSnp>,
}

impl DiseaseGroups {
    /// Decode `/diseases/`. The payload sits under `data` or `snps` and is
    /// either already grouped or a flat list bucketed by each SNP's priority.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Decode`] if the entries are not SNP objects.
    pub fn from_payload(data: &Value) -> Result<Self, SchemaError> {
        let inner = data
            .get("data")
            .or_else(|| data.get("snps"))
            .filter(|v| !v.is_null())
            .unwrap_or(data);
        if inner.is_array() {
            Ok(Self::bucket(Vec::<DiseaseSnp>::deserialize(inner)?))
        } else {
            Ok(Self::deserialize(inner)?)
        }
    }

    /// Split a flat list by [`DiseaseSnp::priority`], keeping input order.
    #[must_use]
    pub fn bucket(snps: Vec<DiseaseSnp>) -> Self {
        let mut groups = Self::default();
        for snp in snps {
            match snp.priority() {
                Priority::High => groups.alta.push(snp),
                Priority::Medium => groups.media.push(snp),
                Priority::Low => groups.baja.push(snp),
            }
        }
        groups
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.alta.len() + self.media.len() + self.baja.len()
    }

    #[must_use]
    pub fn group(&self, priority: Priority) -> &[DiseaseSnp] {
        match priority {
            Priority::High => &self.alta,
            Priority::Medium => &self.media,
            Priority::Low => &self.baja,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Priority, &DiseaseSnp)> {
        [Priority::High, Priority::Medium, Priority::Low]
            .into_iter()
            .flat_map(move |p| self.group(p).iter().map(move |snp| (p, snp)))
    }
}

// =============================================================================
// BIOMARKERS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    #[serde(default, deserialize_with = "de::null_default")]
    pub bajo: u32,
    #[serde(default, deserialize_with = "de::null_default")]
    pub medio: u32,
    #[serde(default, deserialize_with = "de::null_default")]
    pub alto: u32,
}

impl RiskDistribution {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.bajo + self.medio + self.alto
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Alleles {
    #[serde(default, rename = "ref", deserialize_with = "de::string")]
    pub reference: String,
    #[serde(default, deserialize_with = "de::string")]
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BiomarkerResult {
    #[serde(default, deserialize_with = "de::string")]
    pub genotype: String,
    #[serde(default, deserialize_with = "de::string")]
    pub phenotype: String,
    #[serde(default, deserialize_with = "de::string")]
    pub risk: String,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub magnitude: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub frequency: Option<f64>,
    #[serde(default, deserialize_with = "de::string")]
    pub phenotype_description: String,
    #[serde(default, deserialize_with = "de::string")]
    pub continent: String,
    #[serde(default, deserialize_with = "de::string")]
    pub country: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenotypeOption {
    #[serde(default, deserialize_with = "de::string")]
    pub genotype: String,
    #[serde(default, deserialize_with = "de::string")]
    pub phenotype: String,
    #[serde(default, deserialize_with = "de::string")]
    pub risk: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biomarker {
    #[serde(default, deserialize_with = "de::string")]
    pub id: String,
    #[serde(default, deserialize_with = "de::string")]
    pub rsid: String,
    #[serde(default, deserialize_with = "de::string")]
    pub gene: String,
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::string")]
    pub chromosome: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub position: Option<i64>,
    #[serde(default, deserialize_with = "de::string")]
    pub user_genotype: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub alleles: Alleles,
    #[serde(default, deserialize_with = "de::null_default")]
    pub user_result: BiomarkerResult,
    #[serde(default, rename = "freq_chile_percent", deserialize_with = "de::opt_f64")]
    pub freq_chile_percent: Option<f64>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub all_genotypes: Vec<GenotypeOption>,
}

impl Biomarker {
    /// Genotype shown as the user's result, preferring the top-level column.
    #[must_use]
    pub fn genotype(&self) -> &str {
        if self.user_genotype.is_empty() { &self.user_result.genotype } else { &self.user_genotype }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BiomarkersData {
    #[serde(default, deserialize_with = "de::null_default")]
    pub total: u32,
    #[serde(default, deserialize_with = "de::null_default")]
    pub global_total: u32,
    #[serde(default, deserialize_with = "de::null_default")]
    pub risk_distribution: RiskDistribution,
    #[serde(default, deserialize_with = "de::null_default")]
    pub biomarkers: Vec<Biomarker>,
}

// =============================================================================
// ANCESTRY
// =============================================================================

/// A continent, country or indigenous people with its share of the genome.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AncestryRegion {
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::string")]
    pub continent: String,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub percentage: f64,
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub variant_count: i64,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub avg_allele_frequency: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AncestryData {
    #[serde(default, deserialize_with = "de::null_default")]
    pub continents: Vec<AncestryRegion>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub countries: Vec<AncestryRegion>,
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub total_variants: i64,
    #[serde(default, deserialize_with = "de::string")]
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndigenousData {
    #[serde(default, deserialize_with = "de::null_default")]
    pub indigenous_peoples: Vec<AncestryRegion>,
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub total_variants: i64,
    #[serde(default, deserialize_with = "de::string")]
    pub country: String,
    #[serde(default, deserialize_with = "de::string")]
    pub message: String,
}

// =============================================================================
// TRAITS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    #[serde(default, deserialize_with = "de::string")]
    pub id: String,
    #[serde(default, deserialize_with = "de::string")]
    pub rsid: String,
    #[serde(default, deserialize_with = "de::string")]
    pub genotipo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub fenotipo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub cromosoma: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub posicion: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub magnitud_efecto: Option<f64>,
    #[serde(default, deserialize_with = "de::string")]
    pub group: String,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub percentage: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitsData {
    #[serde(default, deserialize_with = "de::null_default")]
    pub traits: Vec<Trait>,
}

// =============================================================================
// BIOMETRICS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricCell {
    #[serde(default, deserialize_with = "de::string")]
    pub column: String,
    #[serde(default, deserialize_with = "de::string")]
    pub impact: String,
    #[serde(default, deserialize_with = "de::string")]
    pub explanation: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricRow {
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub cells: Vec<BiometricCell>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricVariant {
    #[serde(default, deserialize_with = "de::string")]
    pub rsid: String,
    #[serde(default, deserialize_with = "de::string")]
    pub genotipo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub fenotipo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub categoria: String,
    #[serde(default, deserialize_with = "de::string")]
    pub grupo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub cromosoma: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub posicion: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub magnitud_efecto: Option<f64>,
    #[serde(default, deserialize_with = "de::string")]
    pub nivel_riesgo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub impact: String,
    #[serde(default, deserialize_with = "de::string")]
    pub explanation: String,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub freq_chile_percent: Option<f64>,
    #[serde(default, deserialize_with = "de::string")]
    pub phenotype_description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricsData {
    #[serde(default, deserialize_with = "de::null_default")]
    pub rows: Vec<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub columns: Vec<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub matrix: Vec<BiometricRow>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub variants: Vec<BiometricVariant>,
}

// =============================================================================
// PHARMACOGENETICS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drug {
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub percentage: f64,
    #[serde(default, deserialize_with = "de::string")]
    pub rsid: String,
    #[serde(default, deserialize_with = "de::string")]
    pub cromosoma: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub posicion: Option<i64>,
    #[serde(default, deserialize_with = "de::string")]
    pub genotipo: String,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub magnitud: f64,
    #[serde(default, deserialize_with = "de::string")]
    pub fenotipo: String,
}

/// Physiological system grouping the drugs it affects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrugSystem {
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::string")]
    pub role: String,
    #[serde(default, deserialize_with = "de::string")]
    pub color: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub drugs: Vec<Drug>,
}
