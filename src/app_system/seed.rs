use tracing::info;
use crate::clients::ProductClient;
use crate::domain::{Category, Condition, ProductCreate};
use crate::product_actor::ProductError;

const IMAGE_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";

fn sample(
    name: &str,
    description: &str,
    price: u64,
    category: Category,
    condition: Condition,
    photo: &str,
) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        condition,
        image_url: format!("https://images.unsplash.com/{photo}{IMAGE_PARAMS}"),
        is_active: Some(true),
    }
}

/// The antiques every fresh store starts with. Prices are in kopecks.
pub fn sample_catalog() -> Vec<ProductCreate> {
    vec![
        sample(
            "Victorian Armchair",
            "Restored 1890s mahogany armchair with original velvet upholstery",
            125_000,
            Category::Furniture,
            Condition::FullyRestored,
            "photo-1506439773649-6e0eb8cfb237",
        ),
        sample(
            "Brass Chandelier",
            "Ornate 1920s brass chandelier with crystal accents",
            85_000,
            Category::DecorativeItems,
            Condition::FullyRestored,
            "photo-1540932239986-30128078f3c5",
        ),
        sample(
            "Mahogany Chest",
            "1930s chest of drawers with brass hardware",
            68_000,
            Category::Furniture,
            Condition::FullyRestored,
            "photo-1555041469-a586c61ea9bc",
        ),
        sample(
            "Porcelain Vase",
            "Hand-painted porcelain vase from the 1880s",
            42_000,
            Category::DecorativeItems,
            Condition::OriginalCondition,
            "photo-1578500494198-246f612d3b3d",
        ),
        sample(
            "Leather Book Set",
            "Collection of 12 leather-bound classics from 1900s",
            29_000,
            Category::BooksAndDocuments,
            Condition::PartiallyRestored,
            "photo-1481627834876-b7833e8f5570",
        ),
        sample(
            "Gilded Mirror",
            "Ornate French mirror with gold leaf frame, circa 1910",
            97_500,
            Category::DecorativeItems,
            Condition::FullyRestored,
            "photo-1618220179428-22790b461013",
        ),
    ]
}

/// Loads [`sample_catalog`] through the regular create path.
pub async fn seed_catalog(products: &ProductClient) -> Result<usize, ProductError> {
    let catalog = sample_catalog();
    let count = catalog.len();
    for product in catalog {
        products.create_product(product).await?;
    }
    info!(count, "Seeded sample catalog");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.iter().all(|product| product.validate().is_ok()));
        assert_eq!(catalog[0].name, "Victorian Armchair");
        assert_eq!(catalog[5].price, 97_500);
        assert!(catalog[3].image_url.ends_with("w=400&h=300"));
    }
}
