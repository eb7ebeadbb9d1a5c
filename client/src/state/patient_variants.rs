//! Patient variants modal table.
//!
//! Reuses the generic table helpers but searches only rsID, phenotype and
//! chromosome, and uses `all` as the catch-all category.

#[cfg(test)]
#[path = "patient_variants_test.rs"]
mod patient_variants_test;

use schema::Variant;

use super::request::Remote;
use crate::util::table::{self, Page, SortValue, TableQuery, TableRow};

pub const ALL_CATEGORIES: &str = "all";

/// Row wrapper so the modal can search a narrower field set than the
/// back-office variant table.
#[derive(Clone, Debug, PartialEq)]
pub struct PatientVariantRow(pub Variant);

impl TableRow for PatientVariantRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.0.rsid, &self.0.fenotipo, &self.0.cromosoma]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.0.categoria)
    }

    fn sort_value(&self, key: &str) -> SortValue {
        self.0.sort_value(key)
    }
}

#[derive(Clone, Debug)]
pub struct PatientVariantsState {
    pub user_id: Option<i64>,
    pub patient_name: String,
    pub remote: Remote<Vec<PatientVariantRow>>,
    pub query: TableQuery,
}

impl Default for PatientVariantsState {
    fn default() -> Self {
        Self {
            user_id: None,
            patient_name: String::new(),
            remote: Remote::default(),
            query: TableQuery { category: ALL_CATEGORIES.to_owned(), ..TableQuery::default() },
        }
    }
}

impl PatientVariantsState {
    /// Reset for a new patient and return the fetch ticket. The request
    /// sequence survives the reset so late responses for the previous
    /// patient are dropped.
    pub fn open(&mut self, user_id: i64, patient_name: String) -> u64 {
        self.reset();
        self.user_id = Some(user_id);
        self.patient_name = patient_name;
        self.remote.begin()
    }

    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        let seq = self.remote.seq;
        *self = Self::default();
        self.remote.seq = seq;
    }

    pub fn is_open(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn finish<E: std::fmt::Display>(&mut self, ticket: u64, result: Result<Vec<Variant>, E>) -> bool {
        self.remote.finish(ticket, result.map(|list| list.into_iter().map(PatientVariantRow).collect()))
    }

    pub fn rows(&self) -> &[PatientVariantRow] {
        self.remote.data.as_deref().unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> =
            self.rows().iter().map(|r| r.0.categoria.clone()).filter(|c| !c.is_empty()).collect();
        cats.sort();
        cats.dedup();
        cats
    }

    pub fn page(&self) -> Page<PatientVariantRow> {
        table::apply(self.rows(), &self.query)
    }
}
