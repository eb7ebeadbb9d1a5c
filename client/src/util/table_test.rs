use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    name: &'static str,
    kind: &'static str,
    score: &'static str,
}

impl TableRow for Row {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name]
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind)
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "score" => SortValue::number_from(self.score),
            "name" => SortValue::text(self.name),
            _ => SortValue::text(""),
        }
    }
}

fn rows(n: usize) -> Vec<Row> {
    (0..n).map(|_| Row { name: "fila", kind: "a", score: "1" }).collect()
}

fn sample() -> Vec<Row> {
    vec![
        Row { name: "Beta", kind: "rasgos", score: "2.5" },
        Row { name: "alpha", kind: "enfermedades", score: "x" },
        Row { name: "Gamma", kind: "rasgos", score: "10" },
    ]
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn search_is_case_insensitive_substring() {
    let page = apply(&sample(), &TableQuery { search: "ALP".to_owned(), ..TableQuery::default() });
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "alpha");
}

#[test]
fn empty_search_keeps_all_rows() {
    assert_eq!(apply(&sample(), &TableQuery::default()).total, 3);
}

#[test]
fn category_filter_with_all_aliases() {
    let mut query = TableQuery::default();
    query.set_category("rasgos".to_owned());
    assert_eq!(apply(&sample(), &query).total, 2);
    query.set_category("all".to_owned());
    assert_eq!(apply(&sample(), &query).total, 3);
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn numeric_sort_treats_garbage_as_zero() {
    let mut query = TableQuery::default();
    query.toggle_sort("score");
    let names: Vec<_> = apply(&sample(), &query).items.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["alpha", "Beta", "Gamma"]);
    query.toggle_sort("score");
    let names: Vec<_> = apply(&sample(), &query).items.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Gamma", "Beta", "alpha"]);
}

#[test]
fn text_sort_is_lowercased() {
    let mut query = TableQuery::default();
    query.toggle_sort("name");
    let names: Vec<_> = apply(&sample(), &query).items.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["alpha", "Beta", "Gamma"]);
    assert_eq!(query.sort_arrow("name"), "▲");
    assert_eq!(query.sort_arrow("score"), "");
}

#[test]
fn new_sort_column_starts_ascending() {
    let mut query = TableQuery::default();
    query.toggle_sort("name");
    query.toggle_sort("name");
    query.toggle_sort("score");
    assert_eq!(query.sort, Some(("score".to_owned(), SortDir::Asc)));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn pages_partition_rows_with_remainder_last() {
    let data = rows(23);
    let mut query = TableQuery::default();
    let mut seen = 0;
    for page in 1..=3 {
        query.page = page;
        let result = apply(&data, &query);
        assert_eq!(result.total_pages, 3);
        seen += result.items.len();
        if page == 3 {
            assert_eq!(result.items.len(), 3);
        } else {
            assert_eq!(result.items.len(), 10);
        }
    }
    assert_eq!(seen, 23);
}

#[test]
fn page_is_clamped() {
    let query = TableQuery { page: 9, ..TableQuery::default() };
    assert_eq!(apply(&rows(12), &query).page, 2);
    let query = TableQuery { page: 0, ..TableQuery::default() };
    assert_eq!(apply(&rows(12), &query).page, 1);
}

#[test]
fn empty_table_has_one_page() {
    assert_eq!(total_pages(0, 10), 1);
    let page = apply(&Vec::<Row>::new(), &TableQuery::default());
    assert_eq!((page.page, page.total_pages, page.items.len()), (1, 1, 0));
}

#[test]
fn filter_changes_reset_page() {
    let mut query = TableQuery { page: 4, ..TableQuery::default() };
    query.set_search("x".to_owned());
    assert_eq!(query.page, 1);
    query.page = 3;
    query.set_category("rasgos".to_owned());
    assert_eq!(query.page, 1);
}

#[test]
fn page_window_stays_in_range() {
    assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
    assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    assert_eq!(page_window(1, 0, 5), vec![1]);
}
