//! Read-only product catalog queries used by the sitemap generator.

use serde::Serialize;

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Display name.
    pub name: String,
    /// URL segment, kebab-case.
    pub slug: String,
}

/// Catalog lookups. Implementations must be synchronous and side-effect free.
pub trait Catalog {
    /// Every category, in display order.
    fn categories(&self) -> Vec<Category>;

    /// Color slugs stocked in `category`; empty for an unknown slug.
    fn available_colors(&self, category: &str) -> Vec<String>;

    /// Size slugs stocked in `category`; empty for an unknown slug.
    fn available_sizes(&self, category: &str) -> Vec<String>;
}

struct DemoCategory {
    name: &'static str,
    slug: &'static str,
    colors: &'static [&'static str],
    sizes: &'static [&'static str],
}

const DEMO_CATEGORIES: &[DemoCategory] = &[
    DemoCategory {
        name: "T-Shirts",
        slug: "t-shirts",
        colors: &["black", "white", "blue", "red"],
        sizes: &["s", "m", "l", "xl"],
    },
    DemoCategory {
        name: "Hoodies",
        slug: "hoodies",
        colors: &["black", "grey", "green"],
        sizes: &["m", "l", "xl"],
    },
    DemoCategory {
        name: "Jeans",
        slug: "jeans",
        colors: &["blue", "black"],
        sizes: &["28", "30", "32", "34"],
    },
];

/// Hardcoded catalog backing the playground shop.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCatalog;

impl DemoCatalog {
    fn find(slug: &str) -> Option<&'static DemoCategory> {
        DEMO_CATEGORIES.iter().find(|c| c.slug == slug)
    }
}

impl Catalog for DemoCatalog {
    fn categories(&self) -> Vec<Category> {
        DEMO_CATEGORIES
            .iter()
            .map(|c| Category {
                name: c.name.to_string(),
                slug: c.slug.to_string(),
            })
            .collect()
    }

    fn available_colors(&self, category: &str) -> Vec<String> {
        Self::find(category)
            .map(|c| c.colors.iter().map(|s| (*s).to_string()).collect())
            .unwrap_or_default()
    }

    fn available_sizes(&self, category: &str) -> Vec<String> {
        Self::find(category)
            .map(|c| c.sizes.iter().map(|s| (*s).to_string()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_lookup() {
        let catalog = DemoCatalog;
        let slugs: Vec<String> = catalog.categories().into_iter().map(|c| c.slug).collect();
        assert_eq!(slugs, vec!["t-shirts", "hoodies", "jeans"]);
        assert!(catalog.available_colors("t-shirts").contains(&"black".to_string()));
        assert_eq!(catalog.available_sizes("jeans").len(), 4);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = DemoCatalog;
        assert!(catalog.available_colors("socks").is_empty());
        assert!(catalog.available_sizes("socks").is_empty());
    }
}
