use std::fmt;

/// Ordered set of class names attached to an element.
///
/// Mirrors the behaviour of a DOM `classList`: names are unique, insertion
/// order is kept, and whitespace in a class string separates names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a class list from a space separated class string.
    pub fn parse(class_name: &str) -> Self {
        let mut list = Self::new();
        for name in class_name.split_whitespace() {
            list.add(name);
        }
        list
    }

    /// Add a class. Returns true if it was not present before.
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add the class when `force` is true, remove it otherwise.
    pub fn toggle(&mut self, name: &str, force: bool) {
        if force {
            self.add(name);
        } else {
            self.remove(name);
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}
