//! Genetic variant rows from `/variantes/` and `/patient-variants/{id}/`.

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

use serde::{Deserialize, Serialize};

use crate::de;

/// Colour used when a category or risk level is not recognized.
pub const NEUTRAL_COLOR: &str = "#6B7A90";

/// Risk label normalized from the free-text `nivel_riesgo` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Intermediate,
    High,
    Unknown,
}

impl RiskLevel {
    /// Case-insensitive substring match over `alto`, `intermedi`/`medio`, `bajo`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("alto") || lower == "high" {
            Self::High
        } else if lower.contains("intermedi") || lower.contains("medio") || lower == "medium" {
            Self::Intermediate
        } else if lower.contains("bajo") || lower == "low" {
            Self::Low
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#EF4444",
            Self::Intermediate => "#F59E0B",
            Self::Low => "#10B981",
            Self::Unknown => NEUTRAL_COLOR,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alto",
            Self::Intermediate => "Intermedio",
            Self::Low => "Bajo",
            Self::Unknown => "N/A",
        }
    }
}

/// Display colour for a variant category.
#[must_use]
pub fn category_color(category: &str) -> &'static str {
    match category.trim().to_lowercase().as_str() {
        "rasgos" => "#3B82F6",
        "biometrica" | "biometricas" => "#EC4899",
        "enfermedades" => "#EF4444",
        "biomarcadores" => "#10B981",
        "farmacogenetica" => "#F59E0B",
        _ => NEUTRAL_COLOR,
    }
}

/// One row of the variant database.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::string")]
    pub rsid: String,
    #[serde(default, deserialize_with = "de::string")]
    pub genotipo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub fenotipo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub categoria: String,
    #[serde(default, deserialize_with = "de::string")]
    pub cromosoma: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub posicion: Option<i64>,
    #[serde(default, deserialize_with = "de::string")]
    pub alelo_referencia: String,
    #[serde(default, deserialize_with = "de::string")]
    pub alelo_alternativo: String,
    #[serde(default, deserialize_with = "de::string")]
    pub nivel_riesgo: String,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub magnitud_efecto: Option<f64>,
    #[serde(default, deserialize_with = "de::string")]
    pub fuente_base_datos: String,
    #[serde(default, deserialize_with = "de::string")]
    pub tipo_evidencia: String,
    #[serde(default, deserialize_with = "de::string")]
    pub fecha_actualizacion: String,
    #[serde(default, deserialize_with = "de::string")]
    pub continente: String,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub af_continente: Option<f64>,
    #[serde(default, deserialize_with = "de::string")]
    pub fuente_continente: String,
    #[serde(default, deserialize_with = "de::string")]
    pub poblacion_continente: String,
    #[serde(default, deserialize_with = "de::string")]
    pub pais: String,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub af_pais: Option<f64>,
    #[serde(default, deserialize_with = "de::string")]
    pub fuente_pais: String,
    #[serde(default, deserialize_with = "de::string")]
    pub poblacion_pais: String,
}

impl Variant {
    #[must_use]
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_label(&self.nivel_riesgo)
    }

    #[must_use]
    pub fn category_color(&self) -> &'static str {
        category_color(&self.categoria)
    }

    /// Phenotype cut to `max` characters with a trailing ellipsis.
    #[must_use]
    pub fn short_fenotipo(&self, max: usize) -> String {
        truncate_chars(&self.fenotipo, max)
    }
}

/// Truncate on a char boundary, appending `...` when text was dropped.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

/// POST body for creating a variant. Every field is sent as form text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVariant {
    pub rsid: String,
    pub genotipo: String,
    pub fenotipo: String,
    pub categoria: String,
    pub cromosoma: String,
    pub posicion: String,
    pub alelo_referencia: String,
    pub alelo_alternativo: String,
    pub nivel_riesgo: String,
    pub magnitud_efecto: String,
    pub fuente_base_datos: String,
    pub tipo_evidencia: String,
    pub fecha_actualizacion: String,
    pub continente: String,
    pub af_continente: String,
    pub fuente_continente: String,
    pub poblacion_continente: String,
    pub pais: String,
    pub af_pais: String,
    pub fuente_pais: String,
    pub poblacion_pais: String,
}

impl NewVariant {
    /// Blank form with the default category and risk, dated `today` (`YYYY-MM-DD`).
    #[must_use]
    pub fn blank(today: &str) -> Self {
        Self {
            rsid: String::new(),
            genotipo: String::new(),
            fenotipo: String::new(),
            categoria: "rasgos".to_owned(),
            cromosoma: String::new(),
            posicion: String::new(),
            alelo_referencia: String::new(),
            alelo_alternativo: String::new(),
            nivel_riesgo: "Bajo".to_owned(),
            magnitud_efecto: String::new(),
            fuente_base_datos: String::new(),
            tipo_evidencia: String::new(),
            fecha_actualizacion: today.to_owned(),
            continente: String::new(),
            af_continente: String::new(),
            fuente_continente: String::new(),
            poblacion_continente: String::new(),
            pais: String::new(),
            af_pais: String::new(),
            fuente_pais: String::new(),
            poblacion_pais: String::new(),
        }
    }
}
