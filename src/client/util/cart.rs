use std::collections::BTreeMap;

use crate::model::marketplace::{CreateOrderDto, OrderItemDto, ProductDto};

/// Marketplace selection, product id to quantity
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    pub fn add(&mut self, product_id: &str) {
        *self.items.entry(product_id.to_string()).or_insert(0) += 1;
    }

    /// Removes one unit, dropping the line when it reaches zero
    pub fn remove(&mut self, product_id: &str) {
        if let Some(quantity) = self.items.get_mut(product_id) {
            *quantity -= 1;
            if *quantity == 0 {
                self.items.remove(product_id);
            }
        }
    }

    pub fn quantity(&self, product_id: &str) -> u32 {
        self.items.get(product_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn units(&self) -> u32 {
        self.items.values().sum()
    }

    /// Price of the selection, products no longer listed count as zero
    pub fn total(&self, products: &[ProductDto]) -> f64 {
        products
            .iter()
            .map(|product| product.precio * f64::from(self.quantity(&product.id)))
            .sum()
    }

    pub fn to_order(&self) -> CreateOrderDto {
        CreateOrderDto {
            items: self
                .items
                .iter()
                .map(|(producto_id, cantidad)| OrderItemDto {
                    producto_id: producto_id.clone(),
                    cantidad: *cantidad,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Cart;
    use crate::model::marketplace::ProductDto;

    #[test]
    /// Expect quantities to accumulate and lines to vanish at zero
    fn test_cart_add_remove() {
        let mut cart = Cart::default();

        cart.add("p1");
        cart.add("p1");
        cart.add("p2");
        cart.remove("p2");
        cart.remove("missing");

        assert_eq!(cart.quantity("p1"), 2);
        assert_eq!(cart.quantity("p2"), 0);
        assert_eq!(cart.units(), 2);
        assert_eq!(cart.to_order().items.len(), 1);
    }

    #[test]
    /// Expect the total to follow listed prices
    fn test_cart_total() {
        let products: Vec<ProductDto> = serde_json::from_value(json!([
            {"id": "p1", "nombre": "Cuaderno", "precio": 2.5},
            {"id": "p2", "nombre": "Uniforme", "precio": 30.0}
        ]))
        .unwrap();

        let mut cart = Cart::default();
        cart.add("p1");
        cart.add("p1");
        cart.add("p2");

        assert_eq!(cart.total(&products), 35.0);
    }
}
