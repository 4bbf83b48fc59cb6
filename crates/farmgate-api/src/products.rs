//! Product catalog service.

use crate::envelope::{unwrap_data, unwrap_list, PageMeta};
use crate::ApiError;
use farmgate_commerce::catalog::{Product, Season};
use farmgate_commerce::ids::ProductId;
use farmgate_commerce::money::{Currency, Money};
use farmgate_data::{FetchClient, Transport};
use serde::Deserialize;

/// Query parameters for product listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Filter by active status.
    pub active: Option<bool>,
    /// Free-text search.
    pub search: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl ProductQuery {
    /// The storefront's standard listing: active products only.
    pub fn active_only() -> Self {
        Self {
            active: Some(true),
            ..Self::default()
        }
    }
}

/// One page of catalog products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Pagination block, when the backend sends one.
    pub meta: Option<PageMeta>,
}

/// Product record as the backend serves it.
#[derive(Debug, Deserialize)]
struct ProductDto {
    id: i64,
    name: String,
    #[serde(default)]
    name_ar: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    description_ar: String,
    price: f64,
    #[serde(default)]
    image_url: Option<String>,
    unit: String,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

impl ProductDto {
    fn into_product(self, season: Season) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            name_ar: self.name_ar,
            description: self.description,
            description_ar: self.description_ar,
            price: Money::from_decimal(self.price, Currency::EGP),
            image_url: self.image_url,
            unit: self.unit,
            active: self.active,
            season,
        }
    }
}

/// Typed access to the product endpoints.
pub struct ProductsService<T: Transport> {
    client: FetchClient<T>,
}

impl<T: Transport> ProductsService<T> {
    /// Create the service over a configured client.
    pub fn new(client: FetchClient<T>) -> Self {
        Self { client }
    }

    /// List catalog products (`GET /products`).
    pub fn list(&self, query: &ProductQuery) -> Result<ProductPage, ApiError> {
        let mut request = self.client.get("/products");
        if let Some(active) = query.active {
            request = request.query("active", if active { "true" } else { "false" });
        }
        if let Some(search) = &query.search {
            request = request.query("q", search);
        }
        if let Some(page) = query.page {
            request = request.query("page", page.to_string());
        }
        if let Some(per_page) = query.per_page {
            request = request.query("per_page", per_page.to_string());
        }

        let response = request.send()?;
        let (items, meta) = unwrap_list::<ProductDto>(response)?;
        Ok(ProductPage {
            products: items
                .into_iter()
                .map(|dto| dto.into_product(Season::Current))
                .collect(),
            meta,
        })
    }

    /// Fetch a single product (`GET /products/{id}`).
    pub fn get(&self, id: ProductId) -> Result<Product, ApiError> {
        let response = self.client.get(format!("/products/{id}")).send()?;
        let dto: ProductDto = unwrap_data(response)?;
        Ok(dto.into_product(Season::Current))
    }

    /// List announced coming-harvest products (`GET /coming-products`).
    ///
    /// These are browsable but not purchasable, so they come back with the
    /// upcoming season regardless of what the record says.
    pub fn coming(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.client.get("/coming-products").send()?;
        let (items, _) = unwrap_list::<ProductDto>(response)?;
        Ok(items
            .into_iter()
            .map(|dto| dto.into_product(Season::Upcoming))
            .collect())
    }
}
