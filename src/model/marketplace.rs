use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub imagen_url: Option<String>,
    #[serde(default)]
    pub proveedor_id: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

impl ProductDto {
    pub fn in_stock(&self) -> bool {
        self.activo && self.stock.map_or(true, |stock| stock > 0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductFormDto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogDto {
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    /// Product ids in the catalogue
    #[serde(default)]
    pub productos: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCatalogDto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub productos: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItemDto {
    pub producto_id: String,
    pub cantidad: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderDto {
    pub items: Vec<OrderItemDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: String,
    pub items: Vec<OrderItemDto>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub estado: Option<String>,
}
