//! Add-variant modal form state.
//!
//! Choosing a continent fills its population code and resets the country;
//! choosing a country fills its code. Selecting `Otra` in a source or
//! evidence select reveals a free-text input whose value is submitted in
//! place of `Otra`.

#[cfg(test)]
#[path = "variant_form_test.rs"]
mod variant_form_test;

use std::collections::BTreeMap;

use schema::NewVariant;
use schema::options;

pub const REQUIRED_MISSING: &str = "rsID, Genotipo y Fenotipo son requeridos";

/// Selects that offer an `Otra` free-text escape.
pub const OTHER_CAPABLE: [&str; 4] = ["fuente_base_datos", "fuente_continente", "fuente_pais", "tipo_evidencia"];

fn is_other_capable(key: &str) -> bool {
    OTHER_CAPABLE.iter().any(|k| *k == key)
}

macro_rules! field_accessors {
    ($($field:ident => $key:literal),* $(,)?) => {
        fn field_ref<'a>(data: &'a NewVariant, key: &str) -> Option<&'a str> {
            match key {
                $($key => Some(data.$field.as_str()),)*
                _ => None,
            }
        }

        fn field_mut<'a>(data: &'a mut NewVariant, key: &str) -> Option<&'a mut String> {
            match key {
                $($key => Some(&mut data.$field),)*
                _ => None,
            }
        }
    };
}

field_accessors! {
    rsid => "rsid",
    genotipo => "genotipo",
    fenotipo => "fenotipo",
    categoria => "categoria",
    cromosoma => "cromosoma",
    posicion => "posicion",
    alelo_referencia => "alelo_referencia",
    alelo_alternativo => "alelo_alternativo",
    nivel_riesgo => "nivel_riesgo",
    magnitud_efecto => "magnitud_efecto",
    fuente_base_datos => "fuente_base_datos",
    tipo_evidencia => "tipo_evidencia",
    fecha_actualizacion => "fecha_actualizacion",
    continente => "continente",
    af_continente => "af_continente",
    fuente_continente => "fuente_continente",
    poblacion_continente => "poblacion_continente",
    pais => "pais",
    af_pais => "af_pais",
    fuente_pais => "fuente_pais",
    poblacion_pais => "poblacion_pais",
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantForm {
    pub data: NewVariant,
    /// Free text typed after choosing `Otra`, by select key.
    pub other: BTreeMap<String, String>,
    pub error: Option<String>,
    pub loading: bool,
}

impl VariantForm {
    pub fn new(today: &str) -> Self {
        Self { data: NewVariant::blank(today), other: BTreeMap::new(), error: None, loading: false }
    }

    pub fn get(&self, key: &str) -> &str {
        field_ref(&self.data, key).unwrap_or_default()
    }

    /// Set a field, applying the continent/country autocompletion.
    pub fn set(&mut self, key: &str, value: String) {
        match key {
            "continente" => {
                if let Some(code) = options::continent_code(&value) {
                    self.data.poblacion_continente = code.to_owned();
                }
                self.data.pais.clear();
                self.data.poblacion_pais.clear();
            }
            "pais" => {
                if let Some(code) = options::country_code(&value) {
                    self.data.poblacion_pais = code.to_owned();
                }
            }
            _ => {}
        }
        if is_other_capable(key) && value != options::OTHER {
            self.other.remove(key);
        }
        if let Some(slot) = field_mut(&mut self.data, key) {
            *slot = value;
        }
    }

    pub fn shows_other(&self, key: &str) -> bool {
        is_other_capable(key) && self.get(key) == options::OTHER
    }

    pub fn set_other(&mut self, key: &str, value: String) {
        self.other.insert(key.to_owned(), value);
    }

    pub fn countries(&self) -> &'static [&'static str] {
        options::countries_for(&self.data.continente)
    }

    /// Validate and produce the body to POST, with `Otra` replaced by the
    /// typed text.
    pub fn payload(&mut self) -> Option<NewVariant> {
        self.error = None;
        let d = &self.data;
        if d.rsid.trim().is_empty() || d.genotipo.trim().is_empty() || d.fenotipo.trim().is_empty() {
            self.error = Some(REQUIRED_MISSING.to_owned());
            return None;
        }
        let mut body = self.data.clone();
        for key in OTHER_CAPABLE {
            let typed = self.other.get(key).map(|s| s.trim().to_owned()).unwrap_or_default();
            if let Some(slot) = field_mut(&mut body, key) {
                if slot.as_str() == options::OTHER && !typed.is_empty() {
                    *slot = typed;
                }
            }
        }
        Some(body)
    }

    pub fn fail(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(format!("Error al agregar variante: {message}"));
    }
}
