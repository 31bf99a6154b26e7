//! Loaders for pages that need several collections at once.
//!
//! Reads run concurrently and are joined with `try_join!`, so a single failed
//! read fails the whole load and no partially joined data reaches the page.

use futures::try_join;

use crate::{
    client::{
        api::{self, ApiClient},
        error::ApiError,
        util::join::{join_enrollments, join_payments, EnrollmentRow, PaymentRow},
    },
    model::{
        activity::{ActivityDto, ActivityFilter},
        enrollment::EnrollmentDto,
        marketplace::{CatalogDto, ProductDto},
        student::StudentDto,
    },
};

/// Everything the enrollments page shows
#[derive(Clone, Debug, PartialEq)]
pub struct EnrollmentsView {
    pub rows: Vec<EnrollmentRow>,
    pub activities: Vec<ActivityDto>,
    pub students: Vec<StudentDto>,
}

/// Everything the payments page shows, plus the enrollments that can still be paid
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentsView {
    pub rows: Vec<PaymentRow>,
    pub payable: Vec<EnrollmentRow>,
}

pub async fn load_enrollments(api: &ApiClient) -> Result<EnrollmentsView, ApiError> {
    let filter = ActivityFilter::default();

    let (enrollments, activities, students) = try_join!(
        api::enrollment::get_enrollments(api),
        api::activity::get_activities(api, &filter),
        api::student::get_students(api),
    )?;

    Ok(EnrollmentsView {
        rows: join_enrollments(&enrollments, &activities, &students),
        activities,
        students,
    })
}

pub async fn load_payments(api: &ApiClient) -> Result<PaymentsView, ApiError> {
    let filter = ActivityFilter::default();

    let (payments, enrollments, activities, students) = try_join!(
        api::payment::get_payments(api),
        api::enrollment::get_enrollments(api),
        api::activity::get_activities(api, &filter),
        api::student::get_students(api),
    )?;

    let payable: Vec<EnrollmentDto> = enrollments
        .iter()
        .filter(|enrollment| enrollment.awaits_payment())
        .cloned()
        .collect();

    Ok(PaymentsView {
        rows: join_payments(&payments, &enrollments, &activities, &students),
        payable: join_enrollments(&payable, &activities, &students),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketplaceView {
    pub products: Vec<ProductDto>,
    pub catalogs: Vec<CatalogDto>,
}

pub async fn load_marketplace(api: &ApiClient) -> Result<MarketplaceView, ApiError> {
    let (products, catalogs) = try_join!(
        api::marketplace::get_products(api),
        api::marketplace::get_catalogs(api),
    )?;

    Ok(MarketplaceView { products, catalogs })
}
