use crate::{
    client::{api::ApiClient, error::ApiError},
    model::payment::{CreatePaymentDto, PaymentDto},
};

pub async fn get_payments(api: &ApiClient) -> Result<Vec<PaymentDto>, ApiError> {
    api.get("/pagos").await
}

pub async fn create_payment(api: &ApiClient, payment: &CreatePaymentDto) -> Result<PaymentDto, ApiError> {
    api.post("/pagos", payment).await
}
