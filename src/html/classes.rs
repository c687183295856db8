//! Class string accumulation
//!
//! Classes are always unioned, never replaced. Entries may hold several
//! space-separated classes; each one is deduplicated individually.

/// Ordered, de-duplicating class accumulator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry (may contain several whitespace-separated classes)
    pub fn push(&mut self, entry: impl AsRef<str>) -> &mut Self {
        for class in entry.as_ref().split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    pub fn push_opt<S: AsRef<str>>(&mut self, entry: Option<S>) -> &mut Self {
        if let Some(entry) = entry {
            self.push(entry);
        }
        self
    }

    pub fn push_if(&mut self, condition: bool, entry: impl AsRef<str>) -> &mut Self {
        if condition {
            self.push(entry);
        }
        self
    }

    pub fn extend<I, S>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            self.push(entry);
        }
        self
    }

    /// Append another list, keeping first positions
    pub fn append(&mut self, other: &ClassList) -> &mut Self {
        self.extend(other.classes.iter())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn build(&self) -> String {
        self.classes.join(" ")
    }
}

/// Concatenate class sets in call order, dropping empties and duplicates
pub fn build_classes(sets: &[&[&str]]) -> String {
    let mut list = ClassList::new();
    for set in sets {
        list.extend(set.iter());
    }
    list.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_classes_drops_empties_and_duplicates() {
        let classes = build_classes(&[&["btn", "", "btn-primary"], &["btn", "  ", "active"]]);
        assert_eq!(classes, "btn btn-primary active");
    }

    #[test]
    fn test_first_occurrence_keeps_position() {
        let classes = build_classes(&[&["b", "a"], &["c", "a", "b"]]);
        assert_eq!(classes, "b a c");
    }

    #[test]
    fn test_multi_class_entries_are_split() {
        let mut list = ClassList::new();
        list.push("fade show").push("show  extra");
        assert_eq!(list.build(), "fade show extra");
    }

    #[test]
    fn test_push_opt_and_push_if() {
        let mut list = ClassList::new();
        list.push_opt(None::<&str>)
            .push_opt(Some("a"))
            .push_if(false, "b")
            .push_if(true, "c");
        assert_eq!(list.build(), "a c");
        assert!(list.contains("c"));
        assert!(!list.contains("b"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(build_classes(&[]), "");
        assert!(ClassList::new().is_empty());
    }
}
