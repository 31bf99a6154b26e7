use crate::{
    client::{
        api::{segment, ApiClient},
        error::ApiError,
    },
    model::{
        api::MessageDto,
        marketplace::{CatalogDto, CreateCatalogDto, CreateOrderDto, OrderDto, ProductDto, ProductFormDto},
    },
};

pub async fn get_products(api: &ApiClient) -> Result<Vec<ProductDto>, ApiError> {
    api.get("/marketplace/productos").await
}

pub async fn create_product(api: &ApiClient, product: &ProductFormDto) -> Result<ProductDto, ApiError> {
    api.post("/marketplace/productos", product).await
}

pub async fn update_product(
    api: &ApiClient,
    product_id: &str,
    product: &ProductFormDto,
) -> Result<ProductDto, ApiError> {
    api.put(&format!("/marketplace/productos/{}", segment(product_id)), product)
        .await
}

pub async fn delete_product(api: &ApiClient, product_id: &str) -> Result<MessageDto, ApiError> {
    api.delete(&format!("/marketplace/productos/{}", segment(product_id)))
        .await
}

pub async fn get_catalogs(api: &ApiClient) -> Result<Vec<CatalogDto>, ApiError> {
    api.get("/marketplace/catalogos").await
}

pub async fn create_catalog(api: &ApiClient, catalog: &CreateCatalogDto) -> Result<CatalogDto, ApiError> {
    api.post("/marketplace/catalogos", catalog).await
}

pub async fn create_order(api: &ApiClient, order: &CreateOrderDto) -> Result<OrderDto, ApiError> {
    if order.items.is_empty() || order.items.iter().any(|item| item.cantidad == 0) {
        return Err(ApiError::Validation(
            "El pedido debe incluir al menos un producto".to_string(),
        ));
    }

    api.post("/marketplace/ordenes", order).await
}
