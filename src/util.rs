//! Shared utility functions

/// Turn a path segment or route name into a label.
///
/// `-` and `_` become spaces, runs of separators collapse, and every word
/// is title-cased.
///
/// ```
/// use strapkit::util::humanize;
///
/// assert_eq!(humanize("order-history"), "Order History");
/// assert_eq!(humanize("app_shop_edit"), "App Shop Edit");
/// ```
pub fn humanize(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_separators() {
        assert_eq!(humanize("shop"), "Shop");
        assert_eq!(humanize("order-history"), "Order History");
        assert_eq!(humanize("user_profile"), "User Profile");
        assert_eq!(humanize("--a__b--"), "A B");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_humanize_keeps_rest_of_word() {
        assert_eq!(humanize("api-v2"), "Api V2");
        assert_eq!(humanize("iPhone-cases"), "IPhone Cases");
        assert_eq!(humanize("élan"), "Élan");
    }
}
