//! Search, filter, and column sort for the receivables table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use trezo_shared::types::CustomerId;

use super::view::ReceivableRow;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Transaction number (case-insensitive).
    TransactionNo,
    /// Resolved customer name (case-insensitive; "Unknown" for dangling refs).
    CustomerName,
    /// Invoice date (missing dates sort first).
    Date,
    /// Gross total.
    Total,
    /// Paid amount.
    PaidAmount,
    /// Outstanding balance.
    BalanceAmount,
    /// Payment status (by display label).
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Current column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Column being sorted.
    pub key: SortKey,
    /// Direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on a column.
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    /// Header-click behavior: the same column flips direction, a new column
    /// resets to ascending.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(key)
        }
    }
}

/// User-chosen table parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableQuery {
    /// Case-insensitive substring match against the transaction number.
    pub search: Option<String>,
    /// Restrict to a single customer.
    pub customer: Option<CustomerId>,
    /// Column sort; unset leaves fetch order.
    pub sort: Option<SortState>,
}

/// Applies filter and sort to a snapshot of derived rows.
///
/// Input rows are never mutated; the projection is recomputed fully on
/// every call and is deterministic for identical inputs (stable sort,
/// ties keep their incoming relative order).
#[must_use]
pub fn project(rows: &[ReceivableRow], query: &TableQuery) -> Vec<ReceivableRow> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut out: Vec<ReceivableRow> = rows
        .iter()
        .filter(|row| {
            query
                .customer
                .as_ref()
                .is_none_or(|customer| &row.party_id == customer)
        })
        .filter(|row| {
            needle
                .as_deref()
                .is_none_or(|needle| row.transaction_no.to_lowercase().contains(needle))
        })
        .cloned()
        .collect();

    if let Some(sort) = query.sort {
        out.sort_by(|a, b| {
            let ordering = compare(a, b, sort.key);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    out
}

fn compare(a: &ReceivableRow, b: &ReceivableRow, key: SortKey) -> Ordering {
    match key {
        SortKey::TransactionNo => cmp_text(&a.transaction_no, &b.transaction_no),
        SortKey::CustomerName => cmp_text(a.display_customer(), b.display_customer()),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Total => a.total.cmp(&b.total),
        SortKey::PaidAmount => a.paid_amount.cmp(&b.paid_amount),
        SortKey::BalanceAmount => a.balance_amount.cmp(&b.balance_amount),
        SortKey::Status => cmp_text(&a.status.to_string(), &b.status.to_string()),
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settlement::PaymentStatus;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use trezo_shared::types::InvoiceId;

    fn row(no: &str, party: &str, name: Option<&str>, date: (i32, u32, u32), total: Decimal) -> ReceivableRow {
        ReceivableRow {
            id: InvoiceId::from(no),
            transaction_no: no.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            party_id: CustomerId::from(party),
            customer_name: name.map(ToString::to_string),
            sale_amount: total,
            tax_amount: Decimal::ZERO,
            total,
            paid_amount: Decimal::ZERO,
            balance_amount: total,
            status: PaymentStatus::Unpaid,
        }
    }

    fn fixture() -> Vec<ReceivableRow> {
        vec![
            row("SO-10", "C1", Some("beta co"), (2024, 3, 1), dec!(300)),
            row("SO-2", "C2", Some("Acme"), (2024, 1, 15), dec!(100)),
            row("so-11", "C1", None, (2024, 2, 1), dec!(200)),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let rows = fixture();
        let out = project(
            &rows,
            &TableQuery {
                search: Some("so-1".to_string()),
                ..TableQuery::default()
            },
        );

        let nos: Vec<&str> = out.iter().map(|r| r.transaction_no.as_str()).collect();
        assert_eq!(nos, vec!["SO-10", "so-11"]);
    }

    #[test]
    fn test_customer_filter_and_search_combine() {
        let rows = fixture();
        let out = project(
            &rows,
            &TableQuery {
                search: Some("SO".to_string()),
                customer: Some(CustomerId::from("C2")),
                sort: None,
            },
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].transaction_no, "SO-2");
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let rows = fixture();
        let out = project(
            &rows,
            &TableQuery {
                search: Some("   ".to_string()),
                ..TableQuery::default()
            },
        );
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_sort_by_date_and_flip() {
        let rows = fixture();
        let asc = project(
            &rows,
            &TableQuery {
                sort: Some(SortState::ascending(SortKey::Date)),
                ..TableQuery::default()
            },
        );
        let dates: Vec<_> = asc.iter().map(|r| r.date).collect();
        let mut expected = dates.clone();
        expected.sort();
        assert_eq!(dates, expected);

        let desc = project(
            &rows,
            &TableQuery {
                sort: Some(SortState {
                    key: SortKey::Date,
                    direction: SortDirection::Desc,
                }),
                ..TableQuery::default()
            },
        );
        let reversed: Vec<_> = desc.iter().map(|r| r.date).collect();
        assert_eq!(reversed, dates.iter().copied().rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_by_customer_name_unknown_sorts_with_label() {
        let rows = fixture();
        let out = project(
            &rows,
            &TableQuery {
                sort: Some(SortState::ascending(SortKey::CustomerName)),
                ..TableQuery::default()
            },
        );

        let names: Vec<&str> = out.iter().map(ReceivableRow::display_customer).collect();
        assert_eq!(names, vec!["Acme", "beta co", "Unknown"]);
    }

    #[test]
    fn test_projection_is_idempotent_and_does_not_mutate_input() {
        let rows = fixture();
        let query = TableQuery {
            search: Some("so".to_string()),
            customer: None,
            sort: Some(SortState::ascending(SortKey::Total)),
        };

        let first = project(&rows, &query);
        let second = project(&rows, &query);
        assert_eq!(first, second);

        // Input order untouched.
        assert_eq!(rows[0].transaction_no, "SO-10");
        assert_eq!(project(&first, &query), first);
    }

    #[test]
    fn test_stable_sort_keeps_tied_rows_in_fetch_order() {
        let mut rows = fixture();
        // Give all rows the same total so every pair ties.
        for r in &mut rows {
            r.total = dec!(100);
        }
        let out = project(
            &rows,
            &TableQuery {
                sort: Some(SortState::ascending(SortKey::Total)),
                ..TableQuery::default()
            },
        );

        let nos: Vec<&str> = out.iter().map(|r| r.transaction_no.as_str()).collect();
        assert_eq!(nos, vec!["SO-10", "SO-2", "so-11"]);
    }

    #[test]
    fn test_toggle_flips_same_column_resets_new_column() {
        let state = SortState::ascending(SortKey::Date);

        let flipped = state.toggle(SortKey::Date);
        assert_eq!(flipped.direction, SortDirection::Desc);
        assert_eq!(flipped.key, SortKey::Date);

        let back = flipped.toggle(SortKey::Date);
        assert_eq!(back.direction, SortDirection::Asc);

        let switched = flipped.toggle(SortKey::Total);
        assert_eq!(switched.key, SortKey::Total);
        assert_eq!(switched.direction, SortDirection::Asc);
    }
}
