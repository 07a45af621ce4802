//! Read models used by the public pages and the admin dashboard.

use std::cmp::Reverse;

use serde::Serialize;

use super::error::StoreError;
use super::model::{BlogPost, Category, EntityKind, Product, Record};
use super::store::ContentStore;

/// Number of products shown in a category card.
pub const PREVIEW_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Oldest first.
    #[default]
    Ascending,
    /// Newest first.
    Descending,
}

/// Sorts by `key`, breaking ties by insertion order in the requested
/// direction.
fn sort_records<K: Ord>(
    mut records: Vec<Record>,
    order: Order,
    key: impl Fn(&Record) -> K,
) -> Vec<Record> {
    match order {
        Order::Ascending => records.sort_by_key(|r| key(r)),
        Order::Descending => {
            records.reverse();
            records.sort_by_key(|r| Reverse(key(r)));
        }
    }
    records
}

/// Categories by creation time. The home carousel uses ascending order,
/// the admin list descending.
pub fn categories(store: &dyn ContentStore, order: Order) -> Result<Vec<Record>, StoreError> {
    Ok(sort_records(store.list(EntityKind::Category)?, order, |r| r.created_at))
}

pub fn category_by_slug(
    store: &dyn ContentStore,
    slug: &str,
) -> Result<Option<Record>, StoreError> {
    Ok(store
        .list(EntityKind::Category)?
        .into_iter()
        .find(|r| r.as_category().is_some_and(|c| c.slug == slug)))
}

/// Every product, newest first.
pub fn products(store: &dyn ContentStore) -> Result<Vec<Record>, StoreError> {
    Ok(sort_records(
        store.list(EntityKind::Product)?,
        Order::Descending,
        |r| r.created_at,
    ))
}

/// Products of one category, newest first.
pub fn products_in(store: &dyn ContentStore, category: &str) -> Result<Vec<Record>, StoreError> {
    Ok(products(store)?
        .into_iter()
        .filter(|r| r.as_product().is_some_and(|p| p.category == category))
        .collect())
}

/// The first [`PREVIEW_LIMIT`] products of a category.
pub fn category_preview(
    store: &dyn ContentStore,
    category: &str,
) -> Result<Vec<Record>, StoreError> {
    let mut products = products_in(store, category)?;
    products.truncate(PREVIEW_LIMIT);
    Ok(products)
}

/// Blog posts, most recently published first. Unpublished posts sort by
/// creation time after every published one.
pub fn blog_posts(store: &dyn ContentStore) -> Result<Vec<Record>, StoreError> {
    Ok(sort_records(
        store.list(EntityKind::BlogPost)?,
        Order::Descending,
        |r| {
            let published = r.as_blog_post().and_then(|p| p.published_at);
            (published.is_some(), published, r.created_at)
        },
    ))
}

pub fn blog_post_by_slug(
    store: &dyn ContentStore,
    slug: &str,
) -> Result<Option<Record>, StoreError> {
    Ok(store
        .list(EntityKind::BlogPost)?
        .into_iter()
        .find(|r| r.as_blog_post().is_some_and(|p| p.slug == slug)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub categories: usize,
    pub products: usize,
    pub blog_posts: usize,
}

pub fn dashboard(store: &dyn ContentStore) -> Result<Dashboard, StoreError> {
    Ok(Dashboard {
        categories: store.count(EntityKind::Category)?,
        products: store.count(EntityKind::Product)?,
        blog_posts: store.count(EntityKind::BlogPost)?,
    })
}

/// Category with its products, as served on the category page.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    pub products: Vec<Product>,
}

pub fn category_page(
    store: &dyn ContentStore,
    slug: &str,
) -> Result<Option<CategoryPage>, StoreError> {
    let Some(record) = category_by_slug(store, slug)? else {
        return Ok(None);
    };
    let Some(category) = record.as_category().cloned() else {
        return Ok(None);
    };
    let products = products_in(store, slug)?
        .iter()
        .filter_map(Record::as_product)
        .cloned()
        .collect();
    Ok(Some(CategoryPage { category, products }))
}

/// Entities of `records` that are categories, in order.
pub fn category_entities(records: &[Record]) -> Vec<Category> {
    records
        .iter()
        .filter_map(Record::as_category)
        .cloned()
        .collect()
}

pub fn blog_entities(records: &[Record]) -> Vec<BlogPost> {
    records
        .iter()
        .filter_map(Record::as_blog_post)
        .cloned()
        .collect()
}

/// Categories for the home carousel, oldest first.
///
/// A failed read yields no categories so the carousel settles into its
/// empty phase instead of staying in loading.
pub fn home_categories(store: &dyn ContentStore) -> Vec<Category> {
    match categories(store, Order::Ascending) {
        Ok(records) => category_entities(&records),
        Err(err) => {
            tracing::warn!(error = %err, "failed to load home categories");
            Vec::new()
        }
    }
}
