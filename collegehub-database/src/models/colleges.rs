use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Whether `fees` is charged per year or once for the whole programme.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum FeesPeriod {
    #[default]
    #[sea_orm(string_value = "yearly")]
    Yearly,
    #[sea_orm(string_value = "total")]
    Total,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "colleges")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub short_name: Option<String>,
    pub location: String,
    pub state: String,
    pub city: String,
    pub established_year: Option<i32>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub college_type: String,
    pub affiliation: Option<String>,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub website: Option<String>,
    pub overall_rank: Option<i32>,
    pub nirf_rank: Option<i32>,
    pub fees: Option<String>,
    pub fees_period: FeesPeriod,
    pub rating: Option<String>,
    pub review_count: i32,
    pub admission_process: Option<String>,
    pub cutoff_score: Option<f64>,
    pub placement_rate: Option<String>,
    pub average_package: Option<String>,
    pub highest_package: Option<String>,
    pub hostel_fees: Option<String>,
    pub has_hostel: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Fee amount as a number. Missing or unparseable fees count as zero.
    pub fn fees_amount(&self) -> f64 {
        parse_decimal(self.fees.as_deref())
    }

    /// Rating as a number. Missing or unparseable ratings count as zero.
    pub fn rating_value(&self) -> f64 {
        parse_decimal(self.rating.as_deref())
    }

    /// The overall rank, if any. A rank of 0 means unranked.
    pub fn ranked(&self) -> Option<i32> {
        self.overall_rank.filter(|rank| *rank != 0)
    }

    /// Rank used for ordering; unranked colleges sort after every ranked one.
    pub fn rank_or_last(&self) -> i32 {
        self.ranked().unwrap_or(UNRANKED)
    }
}

/// Rank assumed for unranked colleges.
pub const UNRANKED: i32 = 999;

fn parse_decimal(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Input for creating a college. Only `name` is required; every other field
/// falls back to its default when absent.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCollege {
    pub name: String,
    pub short_name: Option<String>,
    pub location: String,
    pub state: String,
    pub city: String,
    pub established_year: Option<i32>,
    #[serde(rename = "type")]
    pub college_type: String,
    pub affiliation: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub overall_rank: Option<i32>,
    pub nirf_rank: Option<i32>,
    pub fees: Option<String>,
    pub fees_period: Option<FeesPeriod>,
    pub rating: Option<String>,
    pub review_count: Option<i32>,
    pub admission_process: Option<String>,
    pub cutoff_score: Option<f64>,
    pub placement_rate: Option<String>,
    pub average_package: Option<String>,
    pub highest_package: Option<String>,
    pub hostel_fees: Option<String>,
    pub has_hostel: Option<bool>,
}

impl NewCollege {
    /**
     * Build the stored record, applying defaults for every absent field
     *
     * # Arguments
     * @param id: i32 - The identifier assigned by the store
     * @param created_at: DateTimeUtc - The creation timestamp
     *
     * # Returns
     * @return Model - The complete college record
     */
    pub fn into_model(self, id: i32, created_at: DateTimeUtc) -> Model {
        Model {
            id,
            name: self.name,
            short_name: self.short_name,
            location: self.location,
            state: self.state,
            city: self.city,
            established_year: self.established_year,
            college_type: self.college_type,
            affiliation: self.affiliation,
            image_url: self.image_url,
            description: self.description,
            website: self.website,
            overall_rank: self.overall_rank,
            nirf_rank: self.nirf_rank,
            fees: self.fees,
            fees_period: self.fees_period.unwrap_or_default(),
            rating: self.rating,
            review_count: self.review_count.unwrap_or(0),
            admission_process: self.admission_process,
            cutoff_score: self.cutoff_score,
            placement_rate: self.placement_rate,
            average_package: self.average_package,
            highest_package: self.highest_package,
            hostel_fees: self.hostel_fees,
            has_hostel: self.has_hostel.unwrap_or(false),
            created_at,
        }
    }

    /// Same defaults as [`NewCollege::into_model`], leaving the id to the database.
    pub fn into_active_model(self, created_at: DateTimeUtc) -> ActiveModel {
        let m = self.into_model(0, created_at);
        ActiveModel {
            id: NotSet,
            name: Set(m.name),
            short_name: Set(m.short_name),
            location: Set(m.location),
            state: Set(m.state),
            city: Set(m.city),
            established_year: Set(m.established_year),
            college_type: Set(m.college_type),
            affiliation: Set(m.affiliation),
            image_url: Set(m.image_url),
            description: Set(m.description),
            website: Set(m.website),
            overall_rank: Set(m.overall_rank),
            nirf_rank: Set(m.nirf_rank),
            fees: Set(m.fees),
            fees_period: Set(m.fees_period),
            rating: Set(m.rating),
            review_count: Set(m.review_count),
            admission_process: Set(m.admission_process),
            cutoff_score: Set(m.cutoff_score),
            placement_rate: Set(m.placement_rate),
            average_package: Set(m.average_package),
            highest_package: Set(m.highest_package),
            hostel_fees: Set(m.hostel_fees),
            has_hostel: Set(m.has_hostel),
            created_at: Set(m.created_at),
        }
    }
}
