//! Static product catalog for the eco shop.
//!
//! The shop sells a fixed collection of ready-made eco products. There is no
//! database; the catalog ships with the binary and handlers borrow from it.

use std::sync::LazyLock;

use ecobid_core::{Price, ProductId};

/// A product sold in the eco shop.
#[derive(Debug)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
    /// Pre-discount price, shown struck through when present.
    pub original_price: Option<Price>,
    pub category: Category,
    pub rating: f32,
    pub review_count: u32,
    pub image_path: &'static str,
    pub in_stock: bool,
    pub featured: bool,
    pub sustainable: bool,
}

/// Product categories available in the shop filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Planters,
    Furniture,
    Decor,
    Textiles,
    Storage,
    Lighting,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Planters,
        Self::Furniture,
        Self::Decor,
        Self::Textiles,
        Self::Storage,
        Self::Lighting,
    ];

    /// Query-string value for this category.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Planters => "planters",
            Self::Furniture => "furniture",
            Self::Decor => "decor",
            Self::Textiles => "textiles",
            Self::Storage => "storage",
            Self::Lighting => "lighting",
        }
    }

    /// Label shown in the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planters => "Planters",
            Self::Furniture => "Furniture",
            Self::Decor => "Home Decor",
            Self::Textiles => "Textiles",
            Self::Storage => "Storage",
            Self::Lighting => "Lighting",
        }
    }

    /// Parse a query-string value. `"all"` and unknown values return `None`,
    /// meaning no category filter.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Sort orders offered by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [Self::Featured, Self::PriceLow, Self::PriceHigh, Self::Rating];

    /// Query-string value for this sort order.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    /// Label shown in the sort dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
        }
    }

    /// Parse a query-string value, falling back to `Featured`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.slug() == slug)
            .unwrap_or_default()
    }
}

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Upcycled Bottle Planters",
            description: "Beautiful plant pots made from recycled glass bottles. \
                          Perfect for herbs and small plants.",
            price: Price::rupees(15),
            original_price: Some(Price::rupees(25)),
            category: Category::Planters,
            rating: 4.8,
            review_count: 124,
            image_path: "/static/img/products/bottles.svg",
            in_stock: true,
            featured: true,
            sustainable: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Reclaimed Wood Shelves",
            description: "Rustic floating shelves from sustainable wood sources. \
                          Each piece is unique.",
            price: Price::rupees(45),
            original_price: None,
            category: Category::Furniture,
            rating: 4.9,
            review_count: 89,
            image_path: "/static/img/products/woodshelf.svg",
            in_stock: true,
            featured: true,
            sustainable: true,
        },
        Product {
            id: ProductId::new("3"),
            name: "Eco-Friendly Wall Art",
            description: "Handcrafted art pieces made from recycled materials and natural dyes.",
            price: Price::rupees(25),
            original_price: Some(Price::rupees(35)),
            category: Category::Decor,
            rating: 4.7,
            review_count: 156,
            image_path: "/static/img/products/wallart.svg",
            in_stock: true,
            featured: false,
            sustainable: true,
        },
        Product {
            id: ProductId::new("4"),
            name: "Natural Fiber Rugs",
            description: "Sustainable rugs made from organic hemp and jute. \
                          Durable and eco-friendly.",
            price: Price::rupees(75),
            original_price: None,
            category: Category::Textiles,
            rating: 4.6,
            review_count: 67,
            image_path: "/static/img/products/rug.svg",
            in_stock: true,
            featured: true,
            sustainable: true,
        },
        Product {
            id: ProductId::new("5"),
            name: "Bamboo Storage Baskets",
            description: "Handwoven storage baskets made from sustainable bamboo. \
                          Various sizes available.",
            price: Price::rupees(35),
            original_price: None,
            category: Category::Storage,
            rating: 4.5,
            review_count: 98,
            image_path: "/static/img/products/bamboo.svg",
            in_stock: true,
            featured: false,
            sustainable: true,
        },
        Product {
            id: ProductId::new("6"),
            name: "Solar-Powered Garden Lights",
            description: "Energy-efficient outdoor lighting powered by renewable solar energy.",
            price: Price::rupees(55),
            original_price: Some(Price::rupees(80)),
            category: Category::Lighting,
            rating: 4.4,
            review_count: 201,
            image_path: "/static/img/products/lights.svg",
            in_stock: true,
            featured: false,
            sustainable: true,
        },
        Product {
            id: ProductId::new("7"),
            name: "Recycled Plastic Outdoor Furniture",
            description: "Weather-resistant outdoor seating made from 100% recycled ocean plastic.",
            price: Price::rupees(120),
            original_price: None,
            category: Category::Furniture,
            rating: 4.8,
            review_count: 45,
            image_path: "/static/img/products/plastic.svg",
            in_stock: false,
            featured: false,
            sustainable: true,
        },
        Product {
            id: ProductId::new("8"),
            name: "Organic Cotton Throw Pillows",
            description: "Soft and comfortable pillows made from certified organic cotton \
                          with natural dyes.",
            price: Price::rupees(30),
            original_price: None,
            category: Category::Textiles,
            rating: 4.7,
            review_count: 133,
            image_path: "/static/img/products/cotton-pillows.svg",
            in_stock: true,
            featured: false,
            sustainable: true,
        },
    ]
});

/// All products in catalog order.
#[must_use]
pub fn all() -> &'static [Product] {
    &CATALOG
}

/// Look up a product by id.
#[must_use]
pub fn find(id: &ProductId) -> Option<&'static Product> {
    CATALOG.iter().find(|p| &p.id == id)
}

/// Products matching a search query and optional category filter.
///
/// The query matches case-insensitively against name or description;
/// an empty query matches everything.
#[must_use]
pub fn search(query: &str, category: Option<Category>) -> Vec<&'static Product> {
    let needle = query.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|p| {
            let matches_query = needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle);
            let matches_category = category.is_none_or(|c| p.category == c);
            matches_query && matches_category
        })
        .collect()
}

/// Sort products in place. `Featured` keeps catalog order within each half.
pub fn sort(products: &mut [&'static Product], order: SortOrder) {
    match order {
        SortOrder::Featured => products.sort_by_key(|p| !p.featured),
        SortOrder::PriceLow => products.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortOrder::PriceHigh => products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        SortOrder::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_products() {
        assert_eq!(all().len(), 8);
    }

    #[test]
    fn test_find_by_id() {
        let product = find(&ProductId::new("2")).unwrap();
        assert_eq!(product.name, "Reclaimed Wood Shelves");
        assert!(find(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let results = search("BAMBOO", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results.first().unwrap().name, "Bamboo Storage Baskets");
    }

    #[test]
    fn test_search_matches_description() {
        let results = search("ocean plastic", None);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results.first().unwrap().name,
            "Recycled Plastic Outdoor Furniture"
        );
    }

    #[test]
    fn test_search_filters_by_category() {
        let results = search("", Some(Category::Furniture));
        let names: Vec<&str> = results.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Reclaimed Wood Shelves", "Recycled Plastic Outdoor Furniture"]
        );
    }

    #[test]
    fn test_search_combines_query_and_category() {
        assert!(search("bamboo", Some(Category::Furniture)).is_empty());
        assert_eq!(search("bamboo", Some(Category::Storage)).len(), 1);
    }

    #[test]
    fn test_sort_featured_first_keeps_catalog_order() {
        let mut products = search("", None);
        sort(&mut products, SortOrder::Featured);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "3", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_sort_by_price() {
        let mut products = search("", None);
        sort(&mut products, SortOrder::PriceLow);
        assert_eq!(products.first().unwrap().id.as_str(), "1");
        assert_eq!(products.last().unwrap().id.as_str(), "7");

        sort(&mut products, SortOrder::PriceHigh);
        assert_eq!(products.first().unwrap().id.as_str(), "7");
    }

    #[test]
    fn test_sort_by_rating() {
        let mut products = search("", None);
        sort(&mut products, SortOrder::Rating);
        assert_eq!(products.first().unwrap().name, "Reclaimed Wood Shelves");
    }

    #[test]
    fn test_category_slug_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("all"), None);
        assert_eq!(Category::from_slug("unknown"), None);
    }

    #[test]
    fn test_sort_order_from_slug_defaults_to_featured() {
        assert_eq!(SortOrder::from_slug("price-low"), SortOrder::PriceLow);
        assert_eq!(SortOrder::from_slug("nonsense"), SortOrder::Featured);
    }
}
