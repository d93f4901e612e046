//! Derived views over the item list

use super::item::Item;

/// Sum of prices of items not yet purchased
pub fn total_remaining(items: &[Item]) -> f64 {
    items
        .iter()
        .filter(|item| !item.purchased)
        .map(|item| item.price)
        .sum()
}

/// Items whose name contains `query`, ignoring case. Order is preserved.
pub fn filter_items<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    let needle = query.to_lowercase();
    items.iter().filter(|item| item.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn item(id: &str, name: &str, price: f64, purchased: bool) -> Item {
        Item {
            id: ItemId::new(id),
            name: name.to_string(),
            price,
            purchased,
        }
    }

    #[test]
    fn test_total_skips_purchased() {
        let items = vec![item("1", "Rice", 50.0, false), item("2", "Fish", 30.0, true)];
        assert_eq!(total_remaining(&items), 50.0);
    }

    #[test]
    fn test_total_of_empty_and_all_purchased() {
        assert_eq!(total_remaining(&[]), 0.0);
        let items = vec![item("1", "Rice", 50.0, true)];
        assert_eq!(total_remaining(&items), 0.0);
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = vec![
            item("1", "Milk", 20.0, false),
            item("2", "Bread", 35.0, false),
            item("3", "Almond Milk", 80.0, true),
        ];
        let names: Vec<&str> = filter_items(&items, "milk").iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Almond Milk"]);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let items = vec![item("1", "Milk", 20.0, false), item("2", "Bread", 35.0, false)];
        assert_eq!(filter_items(&items, "").len(), 2);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let items = vec![item("1", "Milk", 20.0, false)];
        assert!(filter_items(&items, " milk").is_empty());
        assert_eq!(filter_items(&items, "MILK").len(), 1);
    }
}
