//! Catalog loader: the cached product and customer lists.
//!
//! `CatalogLoader` fetches; `CatalogState` owns what was fetched. Collaborators
//! that change server data (invoice creation, restock, delete) mark the state
//! stale and ask for a refresh instead of patching the lists locally.

use crate::domain::a001_product::api::fetch_products;
use crate::domain::a002_customer::api::fetch_customers;
use crate::shared::api_client::{ApiClient, ApiError, Transport};
use crate::shared::notice::Notice;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a002_customer::aggregate::{Customer, CustomerId};
use futures::future::join;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

pub struct CatalogLoader<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> CatalogLoader<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Fetch both lists concurrently; succeeds only if both do
    pub async fn load(&self) -> Result<Catalog, ApiError> {
        let (products, customers) =
            join(fetch_products(self.client), fetch_customers(self.client)).await;
        Ok(Catalog {
            products: products?,
            customers: customers?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    cached: Catalog,
    status: CatalogStatus,
    stale: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn begin_refresh(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    /// Record the outcome of a load. On failure the previously cached lists
    /// are kept but hidden until the next successful load; the returned
    /// notice is for the user.
    pub fn apply(&mut self, result: Result<Catalog, ApiError>) -> Option<Notice> {
        match result {
            Ok(catalog) => {
                log::debug!(
                    "catalog loaded: {} products, {} customers",
                    catalog.products.len(),
                    catalog.customers.len()
                );
                self.cached = catalog;
                self.status = CatalogStatus::Loaded;
                self.stale = false;
                None
            }
            Err(e) => {
                let text = format!("Failed to load products and customers: {}", e);
                log::error!("{}", text);
                self.status = CatalogStatus::Failed(text.clone());
                Some(Notice::error(text))
            }
        }
    }

    fn visible(&self) -> Option<&Catalog> {
        match self.status {
            CatalogStatus::Failed(_) => None,
            _ => Some(&self.cached),
        }
    }

    pub fn products(&self) -> &[Product] {
        self.visible().map(|c| c.products.as_slice()).unwrap_or(&[])
    }

    pub fn customers(&self) -> &[Customer] {
        self.visible().map(|c| c.customers.as_slice()).unwrap_or(&[])
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    pub fn find_customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers().iter().find(|c| c.id == id)
    }

    /// Adding is offered only for known products with cached stock left.
    /// The cached figure may be stale; the server has the final word.
    pub fn can_add(&self, id: ProductId) -> bool {
        self.find_product(id).is_some_and(Product::in_stock)
    }

    pub fn search_products(&self, query: &str) -> Vec<Product> {
        self.products()
            .iter()
            .filter(|p| p.matches(query))
            .cloned()
            .collect()
    }
}
