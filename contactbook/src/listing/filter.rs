//! Live first-name filter over the rendered people listing.
//!
//! The browser runs the same predicate on every keystroke (see the web
//! client's `/javascripts/application.js`), this module is the canonical
//! definition of the matching semantics. The filter is stateless: each pass
//! recomputes visibility for every data row from scratch, so a later pass
//! fully supersedes an earlier one.

use crate::model::person::Person;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowVisibility {
    Visible,
    Hidden,
}

/// One data row of the rendered listing. The header row is never represented
/// here: it sits outside the filter's domain and stays visible for any query.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingRow {
    /// Text content of the row's first cell, the person's displayed first name
    pub first_name_cell: String,
    pub visibility: RowVisibility,
}

impl ListingRow {
    /// Rows start visible, matching a freshly rendered listing with an empty query
    pub fn new(first_name_cell: String) -> Self {
        ListingRow {
            first_name_cell,
            visibility: RowVisibility::Visible,
        }
    }

    pub fn from_person(person: &Person) -> Self {
        ListingRow::new(person.first_name.clone())
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == RowVisibility::Visible
    }
}

/// Literal substring containment, case sensitive. The query is never
/// interpreted as pattern syntax, so characters like '.' or '*' only match
/// themselves. An empty query matches every cell.
pub fn row_matches(query: &str, first_name_cell: &str) -> bool {
    first_name_cell.contains(query)
}

/// Recomputes visibility for every data row against the current query.
/// Idempotent and order independent, each row is judged on its own cell text.
pub fn apply_filter(rows: &mut [ListingRow], query: &str) {
    for row in rows.iter_mut() {
        row.visibility = match row_matches(query, &row.first_name_cell) {
            true => RowVisibility::Visible,
            false => RowVisibility::Hidden,
        };
    }
}
