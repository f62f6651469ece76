//! Catalog view-model: the displayed subset of products plus its title.
//!
//! Every search or filter action recomputes the view from the full product
//! list; there is no incremental update and no server-side filtering.

use crate::models::Product;

/// Title shown for the unfiltered catalog.
pub const DEFAULT_TITLE: &str = "Curadoria Exclusiva";

/// The currently displayed product subset and its heading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogView {
    /// Products to render, in catalog order.
    pub items: Vec<Product>,

    /// Heading for the grid.
    pub title: String,
}

impl CatalogView {
    /// The full catalog under the default heading.
    pub fn all(products: &[Product]) -> Self {
        Self {
            items: products.to_vec(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Products whose category matches `category`, compared
    /// case-insensitively. Heading is the category uppercased.
    pub fn filter(products: &[Product], category: &str) -> Self {
        let wanted = category.to_lowercase();
        Self {
            items: products
                .iter()
                .filter(|product| product.category.to_lowercase() == wanted)
                .cloned()
                .collect(),
            title: category.to_uppercase(),
        }
    }

    /// Products whose name or category contains the trimmed, lowercased
    /// `term`. Returns `None` for an empty or whitespace-only term: the
    /// current view stays as it is.
    pub fn search(products: &[Product], term: &str) -> Option<Self> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Some(Self {
            items: products
                .iter()
                .filter(|product| {
                    product.name.to_lowercase().contains(&needle)
                        || product.category.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect(),
            title: format!("Resultados para \"{needle}\""),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, category: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 100.0,
            category: category.to_string(),
            sub_category: String::new(),
            image_url: String::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Vestido Linho", "Feminino"),
            product(2, "Camisa Oxford", "Masculino"),
            product(3, "Saia Midi", "Feminino"),
            product(4, "Bolsa Palha", "Acessórios"),
        ]
    }

    #[test]
    fn test_all_keeps_order_and_default_title() {
        let products = sample();
        let view = CatalogView::all(&products);

        assert_eq!(view.items, products);
        assert_eq!(view.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_filter_returns_exactly_the_category() {
        let products = sample();
        let view = CatalogView::filter(&products, "Feminino");

        assert_eq!(view.items.len(), 2);
        assert!(view.items.iter().all(|p| p.category == "Feminino"));
        assert_eq!(view.title, "FEMININO");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let products = sample();
        let view = CatalogView::filter(&products, "feminino");

        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let products = sample();
        let view = CatalogView::filter(&products, "Infantil");

        assert!(view.items.is_empty());
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let products = sample();

        let by_name = CatalogView::search(&products, "oxford").unwrap();
        assert_eq!(by_name.items.len(), 1);
        assert_eq!(by_name.items[0].id, 2);

        let by_category = CatalogView::search(&products, "FEMININO").unwrap();
        assert_eq!(by_category.items.len(), 2);
    }

    #[test]
    fn test_search_trims_and_lowercases_term() {
        let products = sample();
        let view = CatalogView::search(&products, "  Saia  ").unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.title, "Resultados para \"saia\"");
    }

    #[test]
    fn test_search_empty_term_is_a_noop() {
        let products = sample();

        assert!(CatalogView::search(&products, "").is_none());
        assert!(CatalogView::search(&products, "   ").is_none());
    }

    #[test]
    fn test_search_without_matches_is_empty_not_none() {
        let products = sample();
        let view = CatalogView::search(&products, "smoking").unwrap();

        assert!(view.items.is_empty());
    }
}
