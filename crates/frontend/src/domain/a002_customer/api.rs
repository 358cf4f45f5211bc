use crate::shared::api_client::{ApiClient, ApiError, Transport};
use contracts::domain::a002_customer::aggregate::{Customer, CustomerDto};

pub const LIST_PATH: &str = "/customers/list";
const ADD_PATH: &str = "/customers/add";

/// Fetch all customers
pub async fn fetch_customers<T: Transport>(
    client: &ApiClient<T>,
) -> Result<Vec<Customer>, ApiError> {
    client.get(LIST_PATH).await
}

/// Create customer
pub async fn add_customer<T: Transport>(
    client: &ApiClient<T>,
    dto: &CustomerDto,
) -> Result<Customer, ApiError> {
    client.post(ADD_PATH, dto).await
}
