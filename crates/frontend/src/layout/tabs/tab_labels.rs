//! Tab titles, keyed like the registry.

pub const ORDER_DETAIL_PREFIX: &str = "a003_order_detail_";
pub const CUSTOMER_DETAIL_PREFIX: &str = "a002_customer_detail_";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d100_summary" => "Panel",
        "u101_create_order" => "Nueva orden",
        "a001_price_item" => "Precios",
        "a002_customer" => "Clientes",
        "a003_order" => "Órdenes",
        "sys_users" => "Usuarios",
        "sys_settings" => "Configuración",
        _ => "",
    }
}

/// Title of a detail tab: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn order_detail_key(id: &str) -> String {
    format!("{}{}", ORDER_DETAIL_PREFIX, id)
}

pub fn customer_detail_key(id: &str) -> String {
    format!("{}{}", CUSTOMER_DETAIL_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_keys_round_trip_through_prefix() {
        let key = order_detail_key("65f0");
        assert_eq!(key.strip_prefix(ORDER_DETAIL_PREFIX), Some("65f0"));
        assert_eq!(customer_detail_key("c1"), "a002_customer_detail_c1");
    }

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a003_order"), "Órdenes");
        assert_eq!(tab_label_for_key("unknown"), "");
        assert_eq!(detail_tab_label("Orden", "#12"), "Orden · #12");
    }
}
