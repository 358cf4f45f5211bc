use crate::shared::api_client::{ApiClient, ApiError, Transport};
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId, RestockRequest};
use serde_json::Value;

pub const LIST_PATH: &str = "/products/list";
const ADD_PATH: &str = "/products/add";

/// Fetch all products
pub async fn fetch_products<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Product>, ApiError> {
    client.get(LIST_PATH).await
}

/// Create product
pub async fn add_product<T: Transport>(
    client: &ApiClient<T>,
    dto: &ProductDto,
) -> Result<Product, ApiError> {
    client.post(ADD_PATH, dto).await
}

/// Replace name/SKU/price/stock of an existing product
pub async fn update_product<T: Transport>(
    client: &ApiClient<T>,
    id: ProductId,
    dto: &ProductDto,
) -> Result<Product, ApiError> {
    client.put(&format!("/products/update/{}", id), dto).await
}

/// Add `quantity` units to the server-side stock
pub async fn restock_product<T: Transport>(
    client: &ApiClient<T>,
    id: ProductId,
    request: &RestockRequest,
) -> Result<Product, ApiError> {
    client.put(&format!("/products/restock/{}", id), request).await
}

/// Delete product
pub async fn delete_product<T: Transport>(
    client: &ApiClient<T>,
    id: ProductId,
) -> Result<(), ApiError> {
    let _: Value = client.delete(&format!("/products/delete/{}", id)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::FakeTransport;
    use crate::shared::api_client::Method;
    use futures::executor::block_on;
    use serde_json::json;

    fn product_json(id: i64, stock: i64) -> Value {
        json!({"id": id, "name": "Tea", "sku": "TEA-1", "price": 10.0, "stock": stock})
    }

    #[test]
    fn test_fetch_products() {
        let fake = FakeTransport::new();
        fake.ok(Method::Get, LIST_PATH, json!([product_json(1, 3), product_json(2, 0)]));
        let client = ApiClient::new(fake);

        let products = block_on(fetch_products(&client)).unwrap();
        assert_eq!(products.len(), 2);
        assert!(!products[1].in_stock());
    }

    #[test]
    fn test_mutation_paths_and_bodies() {
        let fake = FakeTransport::new();
        fake.ok(Method::Post, "/products/add", product_json(9, 5))
            .ok(Method::Put, "/products/update/9", product_json(9, 5))
            .ok(Method::Put, "/products/restock/9", product_json(9, 12))
            .ok(Method::Delete, "/products/delete/9", json!({"message": "Product deleted"}));
        let client = ApiClient::new(fake.clone());
        let dto = ProductDto {
            name: "Tea".into(),
            sku: "TEA-1".into(),
            price: 10.0,
            stock: 5,
        };

        block_on(add_product(&client, &dto)).unwrap();
        block_on(update_product(&client, ProductId(9), &dto)).unwrap();
        let restocked =
            block_on(restock_product(&client, ProductId(9), &RestockRequest { quantity: 7 }))
                .unwrap();
        block_on(delete_product(&client, ProductId(9))).unwrap();

        assert_eq!(restocked.stock, 12);
        let restock = fake.requests_to(Method::Put, "/products/restock/9");
        assert_eq!(restock[0].body, Some(json!({"quantity": 7})));
        let add = fake.requests_to(Method::Post, "/products/add");
        assert_eq!(
            add[0].body,
            Some(json!({"name": "Tea", "sku": "TEA-1", "price": 10.0, "stock": 5}))
        );
        assert_eq!(fake.requests().len(), 4);
    }

    #[test]
    fn test_delete_accepts_empty_body() {
        let fake = FakeTransport::new();
        fake.ok(Method::Delete, "/products/delete/1", Value::Null);
        let client = ApiClient::new(fake);
        assert!(block_on(delete_product(&client, ProductId(1))).is_ok());
    }
}
