//! Variant database table state for the back office.

#[cfg(test)]
#[path = "variants_test.rs"]
mod variants_test;

use schema::Variant;

use super::request::Remote;
use crate::util::table::{self, Page, SortDir, SortValue, TableQuery, TableRow};

pub const PHENOTYPE_PREVIEW: usize = 40;

/// `(key, label)` options of the sort select.
pub const SORT_KEYS: [(&str, &str); 8] = [
    ("id", "ID"),
    ("rsid", "rsID"),
    ("cromosoma", "Cromosoma"),
    ("posicion", "Posición"),
    ("categoria", "Categoría"),
    ("magnitud_efecto", "Magnitud"),
    ("nivel_riesgo", "Nivel Riesgo"),
    ("fenotipo", "Fenotipo"),
];

fn opt_number<T: Into<f64>>(value: Option<T>) -> SortValue {
    SortValue::Number(value.map_or(0.0, Into::into))
}

#[allow(clippy::cast_precision_loss)]
fn int_number(value: Option<i64>) -> SortValue {
    SortValue::Number(value.map_or(0.0, |v| v as f64))
}

impl TableRow for Variant {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.rsid, &self.fenotipo, &self.cromosoma, &self.pais]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.categoria)
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "id" => int_number(Some(self.id)),
            "posicion" => int_number(self.posicion),
            "magnitud_efecto" => opt_number(self.magnitud_efecto),
            "af_continente" => opt_number(self.af_continente),
            "af_pais" => opt_number(self.af_pais),
            "rsid" => SortValue::text(&self.rsid),
            "cromosoma" => SortValue::text(&self.cromosoma),
            "categoria" => SortValue::text(&self.categoria),
            "nivel_riesgo" => SortValue::text(&self.nivel_riesgo),
            "fenotipo" => SortValue::text(&self.fenotipo),
            _ => SortValue::text(""),
        }
    }
}

#[derive(Clone, Debug)]
pub struct VariantsState {
    pub remote: Remote<Vec<Variant>>,
    pub query: TableQuery,
    /// Id of the row showing its detail panel.
    pub expanded: Option<i64>,
    pub show_add_modal: bool,
}

impl Default for VariantsState {
    fn default() -> Self {
        Self {
            remote: Remote::default(),
            query: TableQuery { sort: Some(("id".to_owned(), SortDir::Asc)), ..TableQuery::default() },
            expanded: None,
            show_add_modal: false,
        }
    }
}

impl VariantsState {
    pub fn variants(&self) -> &[Variant] {
        self.remote.data.as_deref().unwrap_or_default()
    }

    /// Unique non-empty categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> =
            self.variants().iter().map(|v| v.categoria.clone()).filter(|c| !c.is_empty()).collect();
        cats.sort();
        cats.dedup();
        cats
    }

    pub fn page(&self) -> Page<Variant> {
        table::apply(self.variants(), &self.query)
    }

    /// Change sort column, keeping the current direction.
    pub fn set_sort_key(&mut self, key: &str) {
        let dir = self.sort_dir();
        self.query.sort = Some((key.to_owned(), dir));
    }

    pub fn toggle_sort_dir(&mut self) {
        let key = self.sort_key().to_owned();
        self.query.sort = Some((key, self.sort_dir().toggled()));
    }

    pub fn sort_key(&self) -> &str {
        self.query.sort.as_ref().map_or("id", |(k, _)| k.as_str())
    }

    pub fn sort_dir(&self) -> SortDir {
        self.query.sort.as_ref().map_or(SortDir::Asc, |(_, d)| *d)
    }

    pub fn toggle_expanded(&mut self, id: i64) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }
}
