//! Admin dashboard handlers.

use axum::Json;
use axum::extract::{Query, State};
use chrono::Utc;

use haven_core::error::AppError;
use haven_core::traits::repository::Repository;
use haven_core::types::{PageRequest, PageResponse};
use haven_entity::contact::ContactSubmission;

use crate::dto::response::DashboardStats;
use crate::extractors::pagination::LimitParams;
use crate::state::AppState;

const RECENT_ITEMS: usize = 5;

/// GET /api/v1/admin/dashboard/stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let store = &state.store;

    Ok(Json(DashboardStats {
        total_properties: store.properties.count().await?,
        total_blog_posts: store.blog.count().await?,
        total_contacts: store.contacts.count().await?,
        unread_contacts: store.contacts.unread_count().await?,
        newsletter_subscribers: store.newsletter.active_count().await?,
        registered_users: store.users.count().await?,
        recent_properties: store.properties.recent(RECENT_ITEMS).await?,
        recent_blog_posts: store.blog.recent(RECENT_ITEMS).await?,
        recent_contacts: store.contacts.recent(RECENT_ITEMS).await?,
        last_updated: Utc::now(),
    }))
}

/// GET /api/v1/admin/dashboard/recent-contacts
pub async fn recent_contacts(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<Json<PageResponse<ContactSubmission>>, AppError> {
    let limit = params.limit_or(RECENT_ITEMS);
    let contacts = state.store.contacts.recent(limit).await?;
    let total = state.store.contacts.count().await?;

    let page = PageRequest {
        page: 1,
        limit: limit as u64,
    };
    Ok(Json(PageResponse::new(contacts, &page, total)))
}
