use robocat_types::ProductId;

/// Stable navigation route for a product detail page.
///
/// Routes are keyed by product id only, so a product's route never changes
/// when catalog filters or selection state change around it.
pub fn product_route(id: &ProductId) -> String {
    format!("/product/{}", id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_embeds_product_id() {
        let id = ProductId::from("rta-c060-lq");
        assert_eq!(product_route(&id), "/product/rta-c060-lq");
    }

    #[test]
    fn route_is_stable_for_equal_ids() {
        let a = ProductId::from("vnb-06");
        let b = ProductId::from("vnb-06");
        assert_eq!(product_route(&a), product_route(&b));
    }
}
