//! The fixed navigation table.

/// One navigation entry: identifier, display label, link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// The six storefront navigation entries, in display order.
pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem { id: "home", label: "דף הבית", href: "/" },
    NavItem { id: "men", label: "גברים", href: "/men" },
    NavItem { id: "women", label: "נשים", href: "/women" },
    NavItem { id: "kids", label: "ילדים", href: "/kids" },
    NavItem { id: "sale", label: "מבצעים", href: "/sale" },
    NavItem { id: "new", label: "חדש", href: "/new" },
];

/// Look up a navigation entry by identifier.
pub fn find_nav_item(id: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_entries_home_first() {
        assert_eq!(NAV_ITEMS.len(), 6);
        assert_eq!(NAV_ITEMS[0].id, "home");
        assert_eq!(NAV_ITEMS[0].href, "/");
    }

    #[test]
    fn test_identifiers_are_unique() {
        let ids: HashSet<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_find_nav_item() {
        let men = find_nav_item("men").unwrap();
        assert_eq!(men.label, "גברים");
        assert_eq!(men.href, "/men");

        assert!(find_nav_item("checkout").is_none());
    }

    #[test]
    fn test_targets_match_identifiers() {
        for item in NAV_ITEMS.iter().skip(1) {
            assert_eq!(item.href, format!("/{}", item.id));
        }
    }
}
