//! Starter catalog for an empty store.

use super::error::StoreError;
use super::model::{Category, EntityKind, Product};
use super::store::ContentStore;

fn category(slug: &str, name: &str, description: &str, icon: &str, accent: &str) -> Category {
    Category {
        slug: slug.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        accent_color: accent.to_string(),
    }
}

pub fn demo_categories() -> Vec<Category> {
    vec![
        category(
            "adhesive",
            "Adhesive Solutions",
            "High-performance bonding systems for construction, industrial and specialty applications.",
            "🔗",
            "#FFC510",
        ),
        category(
            "flooring",
            "Flooring Systems",
            "Self-leveling, decorative and heavy-duty industrial floor solutions.",
            "🏗️",
            "#D50000",
        ),
        category(
            "roofing",
            "Roofing Solutions",
            "Liquid membranes, bituminous waterproofing and single-ply roofing.",
            "🏠",
            "#2d7d2d",
        ),
        category(
            "waterproofing",
            "Waterproofing",
            "Systems for basements, tunnels, bridges and water-retaining structures.",
            "💧",
            "#0066CC",
        ),
    ]
}

fn product(name: &str, category: &str, applications: &[&str]) -> Product {
    Product {
        name: name.to_string(),
        description: String::new(),
        category: category.to_string(),
        applications: applications.iter().map(|s| s.to_string()).collect(),
        badge: None,
        image_url: None,
    }
}

pub fn demo_products() -> Vec<Product> {
    vec![
        product("Structural Adhesive", "adhesive", &["glazing", "anchoring"]),
        product("Elastic Sealant", "adhesive", &["joints", "facades"]),
        product("Self-Leveling Screed", "flooring", &["warehouses"]),
        product("Epoxy Floor Coating", "flooring", &["garages", "plants"]),
        product("Liquid Membrane", "roofing", &["flat roofs"]),
        product(
            "Crystalline Waterproofing",
            "waterproofing",
            &["basements", "tanks"],
        ),
    ]
}

/// Inserts the demo catalog when the store has no categories yet.
/// Returns whether anything was written.
pub fn seed_if_empty(store: &dyn ContentStore) -> Result<bool, StoreError> {
    if store.count(EntityKind::Category)? > 0 {
        return Ok(false);
    }
    for category in demo_categories() {
        store.create(category.into())?;
    }
    for product in demo_products() {
        store.create(product.into())?;
    }
    tracing::info!("seeded demo catalog");
    Ok(true)
}
