//! Eco shop route handler.
//!
//! The shop page is fully server-rendered: search, category filter, and
//! sort order all travel as query parameters on `GET /shop`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{self, Category, Product, SortOrder};
use crate::filters;

/// Query parameters for the shop page.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: &'static str,
    pub description: &'static str,
    pub price: String,
    pub original_price: Option<String>,
    pub rating: String,
    pub review_count: u32,
    pub image_path: &'static str,
    pub in_stock: bool,
    pub featured: bool,
    pub sustainable: bool,
}

impl From<&'static Product> for ProductCardView {
    fn from(product: &'static Product) -> Self {
        Self {
            id: product.id.as_str().to_string(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            original_price: product.original_price.map(|p| p.to_string()),
            rating: format!("{:.1}", product.rating),
            review_count: product.review_count,
            image_path: product.image_path,
            in_stock: product.in_stock,
            featured: product.featured,
            sustainable: product.sustainable,
        }
    }
}

/// One `<option>` in the category or sort select.
#[derive(Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn category_options(selected: Option<Category>) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: "all",
        label: "All Products",
        selected: selected.is_none(),
    }];
    options.extend(Category::ALL.into_iter().map(|category| SelectOption {
        value: category.slug(),
        label: category.label(),
        selected: selected == Some(category),
    }));
    options
}

fn sort_options(selected: SortOrder) -> Vec<SelectOption> {
    SortOrder::ALL
        .into_iter()
        .map(|sort| SelectOption {
            value: sort.slug(),
            label: sort.label(),
            selected: sort == selected,
        })
        .collect()
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopTemplate {
    pub products: Vec<ProductCardView>,
    pub query: String,
    pub categories: Vec<SelectOption>,
    pub sorts: Vec<SelectOption>,
}

/// Display the shop page with search, filter, and sort applied.
#[instrument]
pub async fn index(Query(query): Query<ShopQuery>) -> impl IntoResponse {
    let category = query
        .category
        .as_deref()
        .and_then(Category::from_slug);
    let sort = query
        .sort
        .as_deref()
        .map(SortOrder::from_slug)
        .unwrap_or_default();

    let mut products = catalog::search(&query.q, category);
    catalog::sort(&mut products, sort);

    ShopTemplate {
        products: products.into_iter().map(ProductCardView::from).collect(),
        query: query.q,
        categories: category_options(category),
        sorts: sort_options(sort),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_mark_selection() {
        let options = category_options(Some(Category::Textiles));
        let selected: Vec<&str> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["textiles"]);
    }

    #[test]
    fn test_category_options_default_to_all() {
        let options = category_options(None);
        assert!(options.iter().any(|o| o.value == "all" && o.selected));
        assert_eq!(options.len(), 7);
    }

    #[test]
    fn test_sort_options_mark_selection() {
        let options = sort_options(SortOrder::Rating);
        let selected: Vec<&str> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["rating"]);
    }
}
