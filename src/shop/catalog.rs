use serde::{Deserialize, Serialize};
use crate::domain::{Category, Product};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Category,
}

/// Browse filters for the shop front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    /// Case-insensitive match against name or description.
    pub search: Option<String>,
    pub category: Option<Category>,
    pub sort: SortBy,
}

impl CatalogQuery {
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<Product> = products
            .into_iter()
            .filter(|product| self.category.map_or(true, |category| product.category == category))
            .filter(|product| match &needle {
                Some(needle) => {
                    product.name.to_lowercase().contains(needle.as_str())
                        || product.description.to_lowercase().contains(needle.as_str())
                }
                None => true,
            })
            .collect();

        match self.sort {
            SortBy::Name => matched.sort_by_cached_key(|product| product.name.to_lowercase()),
            SortBy::PriceLow => matched.sort_by_key(|product| product.price),
            SortBy::PriceHigh => matched.sort_by(|a, b| b.price.cmp(&a.price)),
            SortBy::Category => matched.sort_by_key(|product| product.category.as_str()),
        }
        matched
    }
}

/// Distinct categories present in `products`, alphabetically.
pub fn categories(products: &[Product]) -> Vec<Category> {
    let mut found: Vec<Category> = products.iter().map(|product| product.category).collect();
    found.sort_by_key(|category| category.as_str());
    found.dedup();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::sample_catalog;
    use crate::domain::Condition;
    use chrono::Utc;

    fn catalog() -> Vec<Product> {
        sample_catalog()
            .into_iter()
            .enumerate()
            .map(|(i, params)| Product {
                id: i as u64 + 1,
                name: params.name,
                description: params.description,
                price: params.price,
                category: params.category,
                condition: params.condition,
                image_url: params.image_url,
                is_active: true,
                created_at: Utc::now(),
            })
            .collect()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|product| product.name.as_str()).collect()
    }

    #[test]
    fn test_default_query_sorts_by_name() {
        let result = CatalogQuery::default().apply(catalog());
        assert_eq!(
            names(&result),
            vec![
                "Brass Chandelier",
                "Gilded Mirror",
                "Leather Book Set",
                "Mahogany Chest",
                "Porcelain Vase",
                "Victorian Armchair",
            ]
        );
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let query = CatalogQuery { search: Some("BRASS".to_string()), ..Default::default() };
        let result = query.apply(catalog());
        // "Brass Chandelier" by name, "Mahogany Chest" by its brass hardware
        assert_eq!(names(&result), vec!["Brass Chandelier", "Mahogany Chest"]);
    }

    #[test]
    fn test_category_filter_with_price_sort() {
        let query = CatalogQuery {
            category: Some(Category::DecorativeItems),
            sort: SortBy::PriceHigh,
            ..Default::default()
        };
        let result = query.apply(catalog());
        assert_eq!(names(&result), vec!["Gilded Mirror", "Brass Chandelier", "Porcelain Vase"]);

        let cheapest = CatalogQuery { sort: SortBy::PriceLow, ..Default::default() }.apply(catalog());
        assert_eq!(cheapest[0].name, "Leather Book Set");
        assert_eq!(cheapest[0].condition, Condition::PartiallyRestored);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let query = CatalogQuery { search: Some("   ".to_string()), ..Default::default() };
        assert_eq!(query.apply(catalog()).len(), 6);
    }

    #[test]
    fn test_categories_are_unique_and_sorted() {
        assert_eq!(
            categories(&catalog()),
            vec![Category::BooksAndDocuments, Category::DecorativeItems, Category::Furniture]
        );
        assert!(categories(&[]).is_empty());
    }
}
