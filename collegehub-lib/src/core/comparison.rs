//! Side-by-side college comparison tables.

use std::collections::HashSet;

use collegehub_database::models::{College, Comparison, FeesPeriod};
use collegehub_database::Storage;
use serde::Serialize;

use crate::error::{CollegeHubError, Result};

pub const MIN_COMPARED: usize = 2;
pub const MAX_COMPARED: usize = 4;

const LAKH: f64 = 100_000.0;
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedCollege {
    pub id: i32,
    pub name: String,
    pub short_name: Option<String>,
}

/// One compared attribute; `values` has one entry per compared college.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub colleges: Vec<ComparedCollege>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedComparison {
    pub comparison: Comparison,
    pub table: ComparisonTable,
}

/// Digits of the integer part grouped by thousands, e.g. `25,000` or `1,234.5`.
fn group_thousands(amount: f64) -> String {
    let rounded = (amount.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc();
    let digits = format!("{:.0}", whole);

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = rounded - whole;
    if fraction > 0.0 {
        let decimals = format!("{:.3}", fraction);
        grouped.push_str(decimals.trim_start_matches('0').trim_end_matches('0'));
    }
    if amount < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

fn lakhs(amount: f64) -> String {
    format!("₹{:.1}L", amount / LAKH)
}

/**
 * Format a fee for display, e.g. `₹2.5L/year`, `₹25L total` or `₹22,000/year`
 *
 * # Arguments
 * @param fees: Option<&str> - The decimal fee string
 * @param period: FeesPeriod - Whether the fee is yearly or for the whole programme
 *
 * # Returns
 * @return String - The formatted fee, or "Not specified"
 */
pub fn format_fees(fees: Option<&str>, period: FeesPeriod) -> String {
    let Some(amount) = fees.and_then(|f| f.trim().parse::<f64>().ok()) else {
        return "Not specified".to_string();
    };
    let suffix = match period {
        FeesPeriod::Total => " total",
        FeesPeriod::Yearly => "/year",
    };
    if amount >= LAKH {
        format!("{}{}", lakhs(amount), suffix)
    } else {
        format!("₹{}{}", group_thousands(amount), suffix)
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn row(label: &str, colleges: &[College], format: impl Fn(&College) -> String) -> ComparisonRow {
    ComparisonRow {
        label: label.to_string(),
        values: colleges.iter().map(format).collect(),
    }
}

/// Build the comparison table for the given colleges, in the given order.
pub fn build_table(colleges: &[College]) -> ComparisonTable {
    let rows = vec![
        row("Overall Rank", colleges, |c| {
            format!("#{}", or_na(c.ranked().map(|r| r.to_string())))
        }),
        row("Type", colleges, |c| {
            or_na(Some(c.college_type.clone()).filter(|t| !t.is_empty()))
        }),
        row("Established", colleges, |c| {
            or_na(c.established_year.map(|y| y.to_string()))
        }),
        row("Fees", colleges, |c| {
            format_fees(c.fees.as_deref(), c.fees_period)
        }),
        row("Rating", colleges, |c| {
            or_na(c.rating.as_ref().map(|r| format!("{}/5", r)))
        }),
        row("Placement Rate", colleges, |c| {
            or_na(c.placement_rate.as_ref().map(|r| format!("{}%", r)))
        }),
        row("Avg Package", colleges, |c| {
            or_na(
                c.average_package
                    .as_deref()
                    .and_then(|p| p.trim().parse::<f64>().ok())
                    .map(lakhs),
            )
        }),
        row("Hostel", colleges, |c| {
            let hostel = if c.has_hostel { "Available" } else { "Not Available" };
            hostel.to_string()
        }),
    ];

    ComparisonTable {
        colleges: colleges
            .iter()
            .map(|c| ComparedCollege {
                id: c.id,
                name: c.name.clone(),
                short_name: c.short_name.clone(),
            })
            .collect(),
        rows,
    }
}

/**
 * Compare two to four distinct colleges side by side
 *
 * # Arguments
 * @param storage: &dyn Storage - The entity store
 * @param ids: &[i32] - The colleges to compare, in column order
 *
 * # Returns
 * @return Result<ComparisonTable> - The table, a validation error for a bad id list,
 * or not found if a college does not exist
 */
pub async fn compare_colleges(storage: &dyn Storage, ids: &[i32]) -> Result<ComparisonTable> {
    if ids.len() < MIN_COMPARED || ids.len() > MAX_COMPARED {
        return Err(CollegeHubError::Validation(format!(
            "Select between {} and {} colleges to compare",
            MIN_COMPARED, MAX_COMPARED
        )));
    }
    let mut seen = HashSet::new();
    if !ids.iter().all(|id| seen.insert(*id)) {
        return Err(CollegeHubError::Validation(
            "A college can only be compared once".to_string(),
        ));
    }

    let mut colleges = Vec::with_capacity(ids.len());
    for id in ids {
        let college = storage
            .get_college(*id)
            .await?
            .ok_or_else(|| CollegeHubError::NotFound(format!("College {} not found", id)))?;
        colleges.push(college);
    }
    Ok(build_table(&colleges))
}

/**
 * Load a saved comparison and build its table
 *
 * Saved comparisons are not validated when stored, so colleges that no
 * longer resolve are left out of the table.
 *
 * # Arguments
 * @param storage: &dyn Storage - The entity store
 * @param id: i32 - The comparison identifier
 *
 * # Returns
 * @return Result<SavedComparison> - The comparison and its table
 */
pub async fn get_saved_comparison(storage: &dyn Storage, id: i32) -> Result<SavedComparison> {
    let comparison = storage
        .get_comparison(id)
        .await?
        .ok_or_else(|| CollegeHubError::NotFound("Comparison not found".to_string()))?;

    let mut colleges = Vec::new();
    for college_id in &comparison.college_ids.0 {
        match storage.get_college(*college_id).await? {
            Some(college) => colleges.push(college),
            None => log::warn!(
                "Comparison {} references missing college {}",
                comparison.id,
                college_id
            ),
        }
    }

    let table = build_table(&colleges);
    Ok(SavedComparison { comparison, table })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_storage;
    use collegehub_database::models::NewComparison;

    fn values<'a>(table: &'a ComparisonTable, label: &str) -> Vec<&'a str> {
        table
            .rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn fee_formatting() {
        assert_eq!(format_fees(Some("250000"), FeesPeriod::Yearly), "₹2.5L/year");
        assert_eq!(format_fees(Some("2500000"), FeesPeriod::Total), "₹25.0L total");
        assert_eq!(format_fees(Some("22000"), FeesPeriod::Yearly), "₹22,000/year");
        assert_eq!(format_fees(Some("950"), FeesPeriod::Total), "₹950 total");
        assert_eq!(format_fees(Some("1234.5"), FeesPeriod::Yearly), "₹1,234.5/year");
        assert_eq!(format_fees(None, FeesPeriod::Yearly), "Not specified");
        assert_eq!(format_fees(Some("n/a"), FeesPeriod::Yearly), "Not specified");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(99999.0), "99,999");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
    }

    #[tokio::test]
    async fn compares_seeded_colleges() {
        let storage = seeded_storage().await;
        let table = compare_colleges(storage.as_ref(), &[3, 1]).await.unwrap();

        let ids: Vec<i32> = table.colleges.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(values(&table, "Overall Rank"), vec!["#1", "#1"]);
        assert_eq!(values(&table, "Fees"), vec!["₹25.0L total", "₹2.5L/year"]);
        assert_eq!(values(&table, "Rating"), vec!["4.7/5", "4.5/5"]);
        assert_eq!(values(&table, "Placement Rate"), vec!["100%", "95.5%"]);
        assert_eq!(values(&table, "Avg Package"), vec!["₹32.0L", "₹18.0L"]);
        assert_eq!(values(&table, "Hostel"), vec!["Available", "Available"]);
        assert_eq!(values(&table, "Established"), vec!["1961", "1961"]);
    }

    #[tokio::test]
    async fn rejects_bad_selections() {
        let storage = seeded_storage().await;
        for ids in [vec![1], vec![1, 2, 3, 4, 5], vec![2, 2]] {
            assert!(matches!(
                compare_colleges(storage.as_ref(), &ids).await,
                Err(CollegeHubError::Validation(_))
            ));
        }
        assert!(matches!(
            compare_colleges(storage.as_ref(), &[1, 404]).await,
            Err(CollegeHubError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn saved_comparison_skips_missing_colleges() {
        let storage = seeded_storage().await;
        let saved = storage
            .create_comparison(NewComparison {
                name: Some("Delhi".to_string()),
                college_ids: Some(vec![5, 404, 2]),
                user_id: None,
            })
            .await
            .unwrap();

        let loaded = get_saved_comparison(storage.as_ref(), saved.id)
            .await
            .unwrap();
        assert_eq!(loaded.comparison.id, saved.id);
        let ids: Vec<i32> = loaded.table.colleges.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 2]);
        assert!(loaded.table.rows.iter().all(|r| r.values.len() == 2));

        assert!(matches!(
            get_saved_comparison(storage.as_ref(), 99).await,
            Err(CollegeHubError::NotFound(_))
        ));
    }
}
