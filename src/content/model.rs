//! Catalog entities and stored records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Collection an entity lives in. The string form is the admin URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Category,
    Product,
    BlogPost,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Category, Self::Product, Self::BlogPost];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Product => "products",
            Self::BlogPost => "blogs",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collection '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "categories" => Ok(Self::Category),
            "products" => Ok(Self::Product),
            "blogs" => Ok(Self::BlogPost),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Product family shown on the home carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// URL-safe identifier, derived from `name` when left blank.
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Single emoji.
    #[serde(default)]
    pub icon: String,
    /// Hex colour such as `#FFC510`.
    #[serde(default)]
    pub accent_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Slug of the owning [`Category`].
    pub category: String,
    #[serde(default, deserialize_with = "list_or_csv")]
    pub applications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "list_or_csv")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Any storable entity, tagged with its kind in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Category(Category),
    Product(Product),
    BlogPost(BlogPost),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Category(_) => EntityKind::Category,
            Self::Product(_) => EntityKind::Product,
            Self::BlogPost(_) => EntityKind::BlogPost,
        }
    }

    /// Slug for kinds that have one.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Category(c) => Some(&c.slug),
            Self::BlogPost(p) => Some(&p.slug),
            Self::Product(_) => None,
        }
    }
}

impl From<Category> for Entity {
    fn from(value: Category) -> Self {
        Self::Category(value)
    }
}

impl From<Product> for Entity {
    fn from(value: Product) -> Self {
        Self::Product(value)
    }
}

impl From<BlogPost> for Entity {
    fn from(value: BlogPost) -> Self {
        Self::BlogPost(value)
    }
}

/// A stored entity with its identity and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub entity: Entity,
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }

    pub fn as_category(&self) -> Option<&Category> {
        match &self.entity {
            Entity::Category(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_product(&self) -> Option<&Product> {
        match &self.entity {
            Entity::Product(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_blog_post(&self) -> Option<&BlogPost> {
        match &self.entity {
            Entity::BlogPost(p) => Some(p),
            _ => None,
        }
    }
}

/// Splits a comma-separated admin input, trimming entries and dropping
/// empty ones.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts either a JSON array or a comma-separated string.
fn list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListInput {
        Items(Vec<String>),
        Csv(String),
    }

    Ok(match ListInput::deserialize(deserializer)? {
        ListInput::Items(items) => items,
        ListInput::Csv(csv) => split_list(&csv),
    })
}
