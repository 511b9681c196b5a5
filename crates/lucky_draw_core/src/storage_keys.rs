/// Default logical namespace for persisted draw state.
pub const STOCK_STORE_PREFIX: &str = "random-pick-store";

/// Fixed key of the single persisted snapshot document.
pub const STOCK_KEY: &str = "stock-v1";

pub fn stock_object_key(base_prefix: &str) -> String {
    let trimmed = base_prefix.trim_matches('/');
    if trimmed.is_empty() {
        STOCK_KEY.to_string()
    } else {
        format!("{trimmed}/{STOCK_KEY}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_namespaced_under_trimmed_prefix() {
        assert_eq!(
            stock_object_key("/random-pick-store/"),
            "random-pick-store/stock-v1"
        );
    }

    #[test]
    fn empty_prefix_yields_bare_key() {
        assert_eq!(stock_object_key(""), "stock-v1");
        assert_eq!(stock_object_key("//"), "stock-v1");
    }

    #[test]
    fn default_prefix_matches_store_namespace() {
        assert_eq!(
            stock_object_key(STOCK_STORE_PREFIX),
            "random-pick-store/stock-v1"
        );
    }
}
