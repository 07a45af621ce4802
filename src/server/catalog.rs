//! Public read endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::content::query::{self, CategoryPage};
use crate::content::{BlogPost, Category, Product, Record};
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState, CarouselView};
use crate::ui::mvi::Reducer;

use super::error::{ApiError, ApiResult};
use super::AppState;

/// Entity plus its id, flattened for public consumers.
#[derive(Debug, Serialize)]
pub struct Item<T> {
    pub id: uuid::Uuid,
    #[serde(flatten)]
    pub entity: T,
}

fn items<T>(records: &[Record], pick: impl Fn(&Record) -> Option<&T>) -> Vec<Item<T>>
where
    T: Clone,
{
    records
        .iter()
        .filter_map(|r| {
            pick(r).map(|entity| Item {
                id: r.id,
                entity: entity.clone(),
            })
        })
        .collect()
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Item<Category>>>> {
    let records = query::categories(state.store.as_ref(), query::Order::Ascending)?;
    Ok(Json(items(&records, Record::as_category)))
}

pub async fn category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<CategoryPage>> {
    query::category_page(state.store.as_ref(), &slug)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Category", slug))
}

pub async fn category_preview(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Vec<Item<Product>>>> {
    if query::category_by_slug(state.store.as_ref(), &slug)?.is_none() {
        return Err(ApiError::not_found("Category", slug));
    }
    let records = query::category_preview(state.store.as_ref(), &slug)?;
    Ok(Json(items(&records, Record::as_product)))
}

pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Item<Product>>>> {
    let records = query::products(state.store.as_ref())?;
    Ok(Json(items(&records, Record::as_product)))
}

pub async fn list_blog(State(state): State<AppState>) -> ApiResult<Json<Vec<Item<BlogPost>>>> {
    let records = query::blog_posts(state.store.as_ref())?;
    Ok(Json(items(&records, Record::as_blog_post)))
}

pub async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Item<BlogPost>>> {
    let record = query::blog_post_by_slug(state.store.as_ref(), &slug)?
        .ok_or_else(|| ApiError::not_found("Blog post", slug))?;
    let post = record
        .as_blog_post()
        .cloned()
        .ok_or_else(|| ApiError::Internal("blog record without a post".into()))?;
    Ok(Json(Item {
        id: record.id,
        entity: post,
    }))
}

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Viewport width in px. Narrowest layout when absent.
    pub width: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct HomeCategories {
    pub items: Vec<Category>,
    pub carousel: CarouselView,
}

/// Categories for the home carousel with its initial layout at `width`.
pub async fn home_categories(
    State(state): State<AppState>,
    Query(params): Query<HomeQuery>,
) -> Json<HomeCategories> {
    let items = query::home_categories(state.store.as_ref());
    let per_view = state.breakpoints.items_for_width(params.width.unwrap_or(0));
    let carousel = CarouselReducer::reduce(
        CarouselState::new(per_view),
        CarouselIntent::Loaded(items.clone()),
    );
    Json(HomeCategories {
        items,
        carousel: carousel.view(),
    })
}
