//! College listing, lookup, similarity and score-based prediction.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use collegehub_database::models::{College, Course, Review};
use collegehub_database::Storage;
use serde::{Deserialize, Serialize};

use crate::error::{CollegeHubError, Result};
use crate::parsers::{non_empty, parse_number, parse_param};

pub const DEFAULT_LIMIT: usize = 10;
pub const SIMILAR_LIMIT: usize = 5;
pub const PREDICTION_LIMIT: usize = 10;

/// Raw listing parameters as they arrive in the query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeQueryParams {
    pub search: Option<String>,
    pub location: Option<String>,
    pub state: Option<String>,
    pub course_type: Option<String>,
    pub entrance_exam: Option<String>,
    pub min_fees: Option<String>,
    pub max_fees: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Ascending `overall_rank`, unranked last.
    #[default]
    Rank,
    /// Ascending fee amount.
    Fees,
    /// Descending rating.
    Rating,
    /// Case-insensitive name.
    Name,
}

impl FromStr for SortBy {
    type Err = CollegeHubError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rank" => Ok(SortBy::Rank),
            "fees" => Ok(SortBy::Fees),
            "rating" => Ok(SortBy::Rating),
            "name" => Ok(SortBy::Name),
            other => Err(CollegeHubError::Validation(format!(
                "Invalid sortBy provided: {}",
                other
            ))),
        }
    }
}

/// A validated listing request. Every criterion is optional and narrows the
/// result independently of the others.
#[derive(Debug, Clone, PartialEq)]
pub struct CollegeQuery {
    pub search: Option<String>,
    pub state: Option<String>,
    pub location: Option<String>,
    pub course_type: Option<String>,
    pub entrance_exam: Option<String>,
    pub min_fees: Option<f64>,
    pub max_fees: Option<f64>,
    pub sort_by: SortBy,
    pub limit: usize,
    pub offset: usize,
}

impl Default for CollegeQuery {
    fn default() -> Self {
        CollegeQuery {
            search: None,
            state: None,
            location: None,
            course_type: None,
            entrance_exam: None,
            min_fees: None,
            max_fees: None,
            sort_by: SortBy::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl TryFrom<CollegeQueryParams> for CollegeQuery {
    type Error = CollegeHubError;

    fn try_from(params: CollegeQueryParams) -> Result<Self> {
        let text = |value: Option<String>| value.filter(|v| !v.is_empty());

        let limit = parse_param::<usize>("limit", params.limit.as_deref())?.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(CollegeHubError::Validation(
                "Invalid limit provided: must be a positive integer".to_string(),
            ));
        }
        let sort_by = match non_empty(params.sort_by.as_deref()) {
            Some(value) => value.parse()?,
            None => SortBy::default(),
        };

        Ok(CollegeQuery {
            search: text(params.search),
            state: text(params.state),
            location: text(params.location),
            course_type: text(params.course_type),
            entrance_exam: text(params.entrance_exam),
            min_fees: parse_number("minFees", params.min_fees.as_deref())?,
            max_fees: parse_number("maxFees", params.max_fees.as_deref())?,
            sort_by,
            limit,
            offset: parse_param::<usize>("offset", params.offset.as_deref())?.unwrap_or(0),
        })
    }
}

/// One page of a listing. `total` counts every college that matched the
/// filters, before `offset` and `limit` were applied.
#[derive(Debug, Clone, Serialize)]
pub struct CollegePage {
    pub data: Vec<College>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Course types offered by each college, keyed by college id.
pub type CourseTypes = HashMap<i32, HashSet<String>>;

pub fn course_types_by_college(courses: &[Course]) -> CourseTypes {
    let mut types = CourseTypes::new();
    for course in courses {
        types
            .entry(course.college_id)
            .or_default()
            .insert(course.course_type.clone());
    }
    types
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn compare(a: &College, b: &College, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Rank => a.rank_or_last().cmp(&b.rank_or_last()),
        SortBy::Fees => a.fees_amount().total_cmp(&b.fees_amount()),
        SortBy::Rating => b.rating_value().total_cmp(&a.rating_value()),
        SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

/**
 * Filter, sort and paginate a college collection
 *
 * Predicates are applied in a fixed order and all of them must hold. The
 * sort is stable, so ties keep insertion order.
 *
 * # Arguments
 * @param colleges: Vec<College> - Every college, in insertion order
 * @param course_types: &CourseTypes - Course types per college, needed for `course_type`
 * @param query: &CollegeQuery - The validated criteria
 *
 * # Returns
 * @return CollegePage - The requested page and the filtered total
 */
pub fn resolve_colleges(
    colleges: Vec<College>,
    course_types: &CourseTypes,
    query: &CollegeQuery,
) -> CollegePage {
    let mut results = colleges;

    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        results.retain(|c| {
            contains_ignore_case(&c.name, &needle)
                || c.short_name
                    .as_deref()
                    .map_or(false, |s| contains_ignore_case(s, &needle))
                || contains_ignore_case(&c.location, &needle)
        });
    }

    if let Some(state) = &query.state {
        results.retain(|c| &c.state == state);
    }

    if let Some(location) = &query.location {
        let needle = location.to_lowercase();
        results.retain(|c| contains_ignore_case(&c.location, &needle));
    }

    if let Some(course_type) = &query.course_type {
        results.retain(|c| {
            course_types
                .get(&c.id)
                .map_or(false, |types| types.contains(course_type))
        });
    }

    if let Some(exam) = &query.entrance_exam {
        let needle = exam.to_lowercase();
        results.retain(|c| {
            c.admission_process
                .as_deref()
                .map_or(false, |p| contains_ignore_case(p, &needle))
        });
    }

    if let Some(min) = query.min_fees {
        results.retain(|c| c.fees_amount() >= min);
    }

    if let Some(max) = query.max_fees {
        results.retain(|c| c.fees_amount() <= max);
    }

    results.sort_by(|a, b| compare(a, b, query.sort_by));

    let total = results.len();
    let data = results
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .collect();

    CollegePage {
        data,
        total,
        limit: query.limit,
        offset: query.offset,
    }
}

/**
 * List colleges matching a query
 *
 * # Arguments
 * @param storage: &dyn Storage - The entity store
 * @param query: &CollegeQuery - The validated criteria
 *
 * # Returns
 * @return Result<CollegePage> - The requested page
 */
pub async fn get_colleges(storage: &dyn Storage, query: &CollegeQuery) -> Result<CollegePage> {
    let colleges = storage.list_colleges().await?;
    let course_types = match query.course_type {
        Some(_) => course_types_by_college(&storage.list_courses().await?),
        None => CourseTypes::new(),
    };
    Ok(resolve_colleges(colleges, &course_types, query))
}

pub async fn get_college(storage: &dyn Storage, id: i32) -> Result<College> {
    storage
        .get_college(id)
        .await?
        .ok_or_else(|| CollegeHubError::NotFound("College not found".to_string()))
}

/**
 * Find colleges in the same state as `id` that share at least one course
 * type with it, best rated first
 *
 * # Arguments
 * @param storage: &dyn Storage - The entity store
 * @param id: i32 - The anchor college
 *
 * # Returns
 * @return Result<Vec<College>> - At most five colleges; empty when the anchor does not exist
 */
pub async fn get_similar_colleges(storage: &dyn Storage, id: i32) -> Result<Vec<College>> {
    let Some(anchor) = storage.get_college(id).await? else {
        return Ok(Vec::new());
    };

    let course_types = course_types_by_college(&storage.list_courses().await?);
    let Some(anchor_types) = course_types.get(&anchor.id) else {
        return Ok(Vec::new());
    };

    let mut similar: Vec<College> = storage
        .list_colleges()
        .await?
        .into_iter()
        .filter(|c| c.id != anchor.id && c.state == anchor.state)
        .filter(|c| {
            course_types
                .get(&c.id)
                .map_or(false, |types| !types.is_disjoint(anchor_types))
        })
        .collect();
    similar.sort_by(|a, b| compare(a, b, SortBy::Rating));
    similar.truncate(SIMILAR_LIMIT);
    Ok(similar)
}

/// Whether `score` is within 10% of `cutoff`, i.e. `score >= cutoff * 0.9`.
pub fn meets_cutoff(score: f64, cutoff: f64) -> bool {
    score * 10.0 >= cutoff * 9.0
}

/**
 * Colleges whose admission cutoff a score satisfies, allowing a 10% tolerance
 *
 * Colleges without a cutoff always qualify. Results stay in insertion order.
 *
 * # Arguments
 * @param storage: &dyn Storage - The entity store
 * @param score: f64 - The candidate's score
 *
 * # Returns
 * @return Result<Vec<College>> - At most ten colleges
 */
pub async fn predict_colleges(storage: &dyn Storage, score: f64) -> Result<Vec<College>> {
    Ok(storage
        .list_colleges()
        .await?
        .into_iter()
        .filter(|c| meets_cutoff(score, c.cutoff_score.unwrap_or(0.0)))
        .take(PREDICTION_LIMIT)
        .collect())
}

/// Reviews of a college, newest first. Unknown colleges have no reviews.
pub async fn get_college_reviews(storage: &dyn Storage, id: i32) -> Result<Vec<Review>> {
    let mut reviews = storage.reviews_by_college(id).await?;
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    Ok(reviews)
}

pub async fn get_college_courses(storage: &dyn Storage, id: i32) -> Result<Vec<Course>> {
    let college = get_college(storage, id).await?;
    Ok(storage.courses_by_college(college.id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{college, new_college, seeded_storage};
    use collegehub_database::models::{NewCourse, NewReview};
    use collegehub_database::MemStorage;

    fn names(colleges: &[College]) -> Vec<&str> {
        colleges
            .iter()
            .map(|c| c.short_name.as_deref().unwrap_or(c.name.as_str()))
            .collect()
    }

    fn query() -> CollegeQuery {
        CollegeQuery::default()
    }

    #[tokio::test]
    async fn state_filter_orders_by_rank() {
        let storage = seeded_storage().await;
        let page = get_colleges(
            storage.as_ref(),
            &CollegeQuery {
                state: Some("Delhi".to_string()),
                ..query()
            },
        )
        .await
        .unwrap();

        assert_eq!(names(&page.data), vec!["IIT Delhi", "AIIMS Delhi", "JNU"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset, 0);
    }

    #[tokio::test]
    async fn every_result_satisfies_every_filter() {
        let storage = seeded_storage().await;
        let page = get_colleges(
            storage.as_ref(),
            &CollegeQuery {
                search: Some("delhi".to_string()),
                location: Some("new delhi".to_string()),
                max_fees: Some(200000.0),
                ..query()
            },
        )
        .await
        .unwrap();

        assert_eq!(names(&page.data), vec!["AIIMS Delhi", "JNU"]);
        for c in &page.data {
            assert!(c.location.to_lowercase().contains("new delhi"));
            assert!(c.fees_amount() <= 200000.0);
        }
    }

    #[tokio::test]
    async fn search_matches_short_name_case_insensitively() {
        let storage = seeded_storage().await;
        let page = get_colleges(
            storage.as_ref(),
            &CollegeQuery {
                search: Some("jnu".to_string()),
                ..query()
            },
        )
        .await
        .unwrap();
        assert_eq!(names(&page.data), vec!["JNU"]);
    }

    #[tokio::test]
    async fn course_type_filter_uses_offered_courses() {
        let storage = seeded_storage().await;
        let page = get_colleges(
            storage.as_ref(),
            &CollegeQuery {
                course_type: Some("M.Tech".to_string()),
                ..query()
            },
        )
        .await
        .unwrap();
        assert_eq!(names(&page.data), vec!["IIT Delhi", "IISc Bangalore"]);

        let page = get_colleges(
            storage.as_ref(),
            &CollegeQuery {
                course_type: Some("m.tech".to_string()),
                ..query()
            },
        )
        .await
        .unwrap();
        assert!(page.data.is_empty());
    }

    #[tokio::test]
    async fn entrance_exam_filter() {
        let storage = seeded_storage().await;
        let page = get_colleges(
            storage.as_ref(),
            &CollegeQuery {
                entrance_exam: Some("jee advanced".to_string()),
                ..query()
            },
        )
        .await
        .unwrap();
        assert_eq!(names(&page.data), vec!["IIT Delhi", "IISc Bangalore"]);
    }

    #[test]
    fn missing_fees_pass_only_a_zero_minimum() {
        let mut free = college(1, "No Fee Data", None);
        free.fees = None;
        let mut garbled = college(2, "Garbled Fees", None);
        garbled.fees = Some("ask office".to_string());
        let colleges = vec![free, garbled];

        let zero = resolve_colleges(
            colleges.clone(),
            &CourseTypes::new(),
            &CollegeQuery {
                min_fees: Some(0.0),
                ..query()
            },
        );
        assert_eq!(zero.total, 2);

        let positive = resolve_colleges(
            colleges,
            &CourseTypes::new(),
            &CollegeQuery {
                min_fees: Some(1.0),
                ..query()
            },
        );
        assert_eq!(positive.total, 0);
    }

    #[test]
    fn unranked_colleges_sort_last_and_ties_keep_insertion_order() {
        let colleges = vec![
            college(1, "Unranked", None),
            college(2, "Second", Some(2)),
            college(3, "First A", Some(1)),
            college(4, "First B", Some(1)),
            college(5, "Rank 999", Some(999)),
        ];
        let page = resolve_colleges(colleges, &CourseTypes::new(), &query());

        let ids: Vec<i32> = page.data.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 4, 2, 1, 5]);
        let ranks: Vec<i32> = page.data.iter().map(|c| c.rank_or_last()).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn consecutive_pages_partition_the_result() {
        let storage = seeded_storage().await;
        let page = |offset, limit| {
            let storage = storage.clone();
            async move {
                get_colleges(
                    storage.as_ref(),
                    &CollegeQuery {
                        offset,
                        limit,
                        ..query()
                    },
                )
                .await
                .unwrap()
            }
        };

        let first = page(0, 2).await;
        let second = page(2, 2).await;
        let both = page(0, 4).await;

        assert_eq!(first.data.len(), 2);
        assert_eq!(second.data.len(), 2);
        let joined: Vec<i32> = first
            .data
            .iter()
            .chain(second.data.iter())
            .map(|c| c.id)
            .collect();
        let expected: Vec<i32> = both.data.iter().map(|c| c.id).collect();
        assert_eq!(joined, expected);
        assert_eq!(first.total, 5);
    }

    #[tokio::test]
    async fn offset_past_the_end_is_an_empty_page() {
        let storage = seeded_storage().await;
        let page = get_colleges(
            storage.as_ref(),
            &CollegeQuery {
                offset: 50,
                ..query()
            },
        )
        .await
        .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn alternative_sort_orders() {
        let mut cheap = college(1, "beta", Some(3));
        cheap.fees = Some("1000".to_string());
        cheap.rating = Some("3.0".to_string());
        let mut pricey = college(2, "Alpha", Some(1));
        pricey.fees = Some("90000".to_string());
        pricey.rating = Some("4.9".to_string());
        let colleges = vec![cheap, pricey];

        let ids = |sort_by| -> Vec<i32> {
            resolve_colleges(
                colleges.clone(),
                &CourseTypes::new(),
                &CollegeQuery { sort_by, ..query() },
            )
            .data
            .iter()
            .map(|c| c.id)
            .collect()
        };
        assert_eq!(ids(SortBy::Fees), vec![1, 2]);
        assert_eq!(ids(SortBy::Rating), vec![2, 1]);
        assert_eq!(ids(SortBy::Name), vec![2, 1]);
        assert_eq!(ids(SortBy::Rank), vec![2, 1]);
    }

    #[test]
    fn params_are_validated() {
        let parsed = CollegeQuery::try_from(CollegeQueryParams {
            search: Some(String::new()),
            limit: Some("3".to_string()),
            offset: Some("6".to_string()),
            min_fees: Some("1000.5".to_string()),
            sort_by: Some("rating".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(parsed.search, None);
        assert_eq!(parsed.limit, 3);
        assert_eq!(parsed.offset, 6);
        assert_eq!(parsed.min_fees, Some(1000.5));
        assert_eq!(parsed.sort_by, SortBy::Rating);

        for params in [
            CollegeQueryParams {
                limit: Some("0".to_string()),
                ..Default::default()
            },
            CollegeQueryParams {
                offset: Some("-2".to_string()),
                ..Default::default()
            },
            CollegeQueryParams {
                max_fees: Some("lots".to_string()),
                ..Default::default()
            },
            CollegeQueryParams {
                sort_by: Some("popularity".to_string()),
                ..Default::default()
            },
        ] {
            assert!(matches!(
                CollegeQuery::try_from(params),
                Err(CollegeHubError::Validation(_))
            ));
        }
    }

    #[tokio::test]
    async fn similar_colleges_share_state_and_course_type() {
        let storage = seeded_storage().await;
        let similar = get_similar_colleges(storage.as_ref(), 1).await.unwrap();

        // both other Delhi colleges offer a PhD, AIIMS is rated higher
        assert_eq!(names(&similar), vec!["AIIMS Delhi", "JNU"]);
        assert!(similar.iter().all(|c| c.state == "Delhi" && c.id != 1));
    }

    #[tokio::test]
    async fn similar_colleges_for_unknown_id_is_empty() {
        let storage = seeded_storage().await;
        assert!(get_similar_colleges(storage.as_ref(), 404)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn similar_colleges_are_capped() {
        let storage = MemStorage::new();
        for i in 0..8 {
            let c = storage
                .create_college(new_college(&format!("C{}", i), "Goa"))
                .await
                .unwrap();
            storage
                .create_course(NewCourse {
                    college_id: c.id,
                    name: "Engineering".to_string(),
                    course_type: "B.Tech".to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        assert_eq!(get_similar_colleges(&storage, 1).await.unwrap().len(), 5);
    }

    #[test]
    fn cutoff_boundary() {
        assert!(!meets_cutoff(89.0, 99.0));
        assert!(meets_cutoff(90.0, 99.0));
        assert!(meets_cutoff(81.0, 90.0));
        assert!(!meets_cutoff(80.0, 90.0));
        assert!(meets_cutoff(0.0, 0.0));
    }

    #[tokio::test]
    async fn prediction_keeps_insertion_order() {
        let storage = seeded_storage().await;

        let predicted = predict_colleges(storage.as_ref(), 86.0).await.unwrap();
        // cutoffs: 99, 98, 95, 97, 85 -> 86 clears 95 * 0.9 = 85.5 and 85 * 0.9
        assert_eq!(names(&predicted), vec!["IIM Ahmedabad", "JNU"]);

        let predicted = predict_colleges(storage.as_ref(), 89.0).await.unwrap();
        assert!(!names(&predicted).contains(&"IIT Delhi"));
        let predicted = predict_colleges(storage.as_ref(), 90.0).await.unwrap();
        assert_eq!(predicted.len(), 5);
        assert_eq!(predicted[0].id, 1);
    }

    #[tokio::test]
    async fn colleges_without_cutoff_always_qualify() {
        let storage = MemStorage::new();
        for i in 0..12 {
            storage
                .create_college(new_college(&format!("Open {}", i), "Kerala"))
                .await
                .unwrap();
        }
        let predicted = predict_colleges(&storage, 0.0).await.unwrap();
        assert_eq!(predicted.len(), PREDICTION_LIMIT);
        assert_eq!(predicted[0].id, 1);
    }

    #[tokio::test]
    async fn reviews_newest_first() {
        let storage = seeded_storage().await;
        let latest = storage
            .create_review(NewReview {
                college_id: Some(1),
                title: Some("Latest".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let reviews = get_college_reviews(storage.as_ref(), 1).await.unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].id, latest.id);
        assert!(reviews
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
        assert!(get_college_reviews(storage.as_ref(), 404)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn courses_of_unknown_college_are_not_found() {
        let storage = seeded_storage().await;
        assert!(!get_college_courses(storage.as_ref(), 3)
            .await
            .unwrap()
            .is_empty());
        assert!(matches!(
            get_college_courses(storage.as_ref(), 404).await,
            Err(CollegeHubError::NotFound(_))
        ));
    }
}
