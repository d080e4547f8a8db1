//! Product filtering system with composable filters.

pub mod category;
pub mod price;
pub mod query;

use crate::catalog::Product;

pub use category::{Category, CategoryFilter};
pub use price::PriceFilter;
pub use query::{search, NameFilter};

/// Trait for filtering products.
pub trait Filter: Send + Sync {
    /// Returns true if the product passes the filter.
    fn matches(&self, product: &Product) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a product passes all filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Filters a collection of products, keeping order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from command options.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a name search. Empty or missing queries add nothing; the query
    /// is matched as given, whitespace included.
    pub fn query(mut self, query: Option<&str>) -> Self {
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            self.chain.add(NameFilter::new(q));
        }
        self
    }

    /// Adds a category filter.
    pub fn category(mut self, category: Option<Category>) -> Self {
        if let Some(category) = category {
            self.chain.add(CategoryFilter::new(category));
        }
        self
    }

    /// Adds a best-price range filter.
    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_some() || max.is_some() {
            self.chain.add(PriceFilter::new(min, max));
        }
        self
    }

    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_products;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_filter_chain_new() {
        let chain = FilterChain::default();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_filter_chain_empty_matches_all() {
        let chain = FilterChain::new();
        let products = seed_products();
        assert_eq!(chain.apply(products.clone()), products);
    }

    #[test]
    fn test_filter_chain_all_must_pass() {
        let mut chain = FilterChain::new();
        chain.add(NameFilter::new("sony"));
        chain.add(CategoryFilter::new(Category::Audio));

        let filtered = chain.apply(seed_products());
        assert_eq!(ids(&filtered), vec!["sony-xm5"]);
    }

    #[test]
    fn test_filter_chain_descriptions() {
        let chain = FilterChainBuilder::new()
            .query(Some("apple"))
            .category(Some(Category::Laptop))
            .price_range(None, Some(120000.0))
            .build();

        let descriptions = chain.descriptions();
        assert_eq!(descriptions.len(), 3);
        assert!(descriptions[0].contains("Name"));
        assert!(descriptions[1].contains("Category"));
        assert!(descriptions[2].contains("Best price"));
    }

    #[test]
    fn test_builder_no_filters_when_unset() {
        let chain = FilterChainBuilder::default()
            .query(None)
            .query(Some(""))
            .category(None)
            .price_range(None, None)
            .build();

        assert!(chain.is_empty());
    }

    #[test]
    fn test_builder_query_agrees_with_search() {
        let products = vec![
            Product::new("1", "Gadget", 1.0, 1.0),
            Product::new("2", "Sony Speaker", 1.0, 1.0),
        ];

        for query in [" ", "sony ", "GADGET"] {
            let chain = FilterChainBuilder::new().query(Some(query)).build();
            let expected = search(&products, query);
            assert_eq!(chain.apply(products.clone()), expected, "query {:?}", query);
        }

        let chain = FilterChainBuilder::new().query(Some(" ")).build();
        assert_eq!(ids(&chain.apply(products)), vec!["2"]);
    }

    #[test]
    fn test_builder_combined() {
        let chain = FilterChainBuilder::new()
            .query(Some("apple"))
            .category(Some(Category::Laptop))
            .build();

        assert_eq!(ids(&chain.apply(seed_products())), vec!["macbook-m3"]);
    }

    #[test]
    fn test_builder_price_range_on_seed() {
        let chain = FilterChainBuilder::new().price_range(Some(20000.0), Some(60000.0)).build();

        assert_eq!(
            ids(&chain.apply(seed_products())),
            vec!["sony-xm5", "ipad-air", "ps5-slim", "bose-qc-ultra"]
        );
    }
}
