//! Normalization and integrity checks applied before a write.

use uuid::Uuid;

use crate::slug::slugify;

use super::error::StoreError;
use super::model::{BlogPost, Category, Entity, EntityKind, Product, Record};

/// Read access the checks need from a store.
pub(crate) trait Existing {
    fn slug_taken(&self, kind: EntityKind, slug: &str, except: Option<Uuid>) -> bool;
    fn category_exists(&self, slug: &str) -> bool;
}

impl Existing for [Record] {
    fn slug_taken(&self, kind: EntityKind, slug: &str, except: Option<Uuid>) -> bool {
        self.iter().any(|r| {
            r.kind() == kind && Some(r.id) != except && r.entity.slug() == Some(slug)
        })
    }

    fn category_exists(&self, slug: &str) -> bool {
        self.iter()
            .filter_map(Record::as_category)
            .any(|c| c.slug == slug)
    }
}

/// Trims text fields, derives and normalizes slugs, and checks uniqueness
/// and references. `id` is the record being updated, if any.
pub(crate) fn prepare(
    entity: Entity,
    existing: &(impl Existing + ?Sized),
    id: Option<Uuid>,
) -> Result<Entity, StoreError> {
    let entity = match entity {
        Entity::Category(c) => Entity::Category(normalize_category(c)?),
        Entity::Product(p) => Entity::Product(normalize_product(p)?),
        Entity::BlogPost(p) => Entity::BlogPost(normalize_blog_post(p)?),
    };

    if let Some(slug) = entity.slug() {
        if existing.slug_taken(entity.kind(), slug, id) {
            return Err(StoreError::DuplicateSlug {
                kind: entity.kind(),
                slug: slug.to_string(),
            });
        }
    }

    if let Entity::Product(product) = &entity {
        if !existing.category_exists(&product.category) {
            return Err(StoreError::UnknownCategory(product.category.clone()));
        }
    }

    Ok(entity)
}

fn required(value: String, field: &'static str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::required(field));
    }
    Ok(trimmed.to_string())
}

/// Blank slugs come from `source`. Either way the result is slugified.
fn slug_or_derive(slug: &str, source: &str, field: &'static str) -> Result<String, StoreError> {
    let raw = if slug.trim().is_empty() { source } else { slug };
    let slug = slugify(raw);
    if slug.is_empty() {
        return Err(StoreError::Validation {
            field,
            message: format!("cannot derive a slug from '{raw}'"),
        });
    }
    Ok(slug)
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_category(c: Category) -> Result<Category, StoreError> {
    let name = required(c.name, "name")?;
    Ok(Category {
        slug: slug_or_derive(&c.slug, &name, "slug")?,
        name,
        description: c.description.trim().to_string(),
        icon: c.icon.trim().to_string(),
        accent_color: c.accent_color.trim().to_string(),
    })
}

fn normalize_product(p: Product) -> Result<Product, StoreError> {
    Ok(Product {
        name: required(p.name, "name")?,
        description: p.description.trim().to_string(),
        category: required(p.category, "category")?,
        applications: clean_list(p.applications),
        badge: optional(p.badge),
        image_url: optional(p.image_url),
    })
}

fn normalize_blog_post(p: BlogPost) -> Result<BlogPost, StoreError> {
    let title = required(p.title, "title")?;
    Ok(BlogPost {
        slug: slug_or_derive(&p.slug, &title, "slug")?,
        title,
        excerpt: p.excerpt.trim().to_string(),
        content: p.content.trim().to_string(),
        author: p.author.trim().to_string(),
        category: p.category.trim().to_string(),
        tags: clean_list(p.tags),
        image_url: optional(p.image_url),
        published_at: p.published_at,
    })
}
