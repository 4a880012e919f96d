//! Ordered marker-token sets, the textual form of item and filter state.
//!
//! A host page encodes state as a space separated list of class tokens
//! (`"filterable rust 2"`, `"filter rust disabled"`). [`ClassList`] keeps
//! those tokens in order and offers the three mutations the list view
//! needs: adding a token once, removing a token, and stripping every
//! numeric page marker.
//!
//! # Examples
//!
//! ```rust
//! use listview_widgets::classlist::ClassList;
//!
//! let mut classes: ClassList = "filterable rust 3".parse().unwrap();
//! classes.remove_number_classes();
//! classes.add_class("hidden");
//! assert_eq!(classes.to_string(), "filterable rust hidden");
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An order-preserving set of class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty token list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` is present as an exact token.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.iter().any(|t| t == name)
    }

    /// Appends `name` unless it is already present.
    ///
    /// ```rust
    /// use listview_widgets::classlist::ClassList;
    ///
    /// let mut classes = ClassList::new();
    /// classes.add_class("hidden");
    /// classes.add_class("hidden");
    /// assert_eq!(classes.len(), 1);
    /// ```
    pub fn add_class(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return;
        }
        self.tokens.push(name);
    }

    /// Removes the first token equal to `name`. Absent tokens are ignored.
    pub fn remove_class(&mut self, name: &str) {
        if let Some(pos) = self.tokens.iter().position(|t| t == name) {
            self.tokens.remove(pos);
        }
    }

    /// Removes every token that reads as a number, keeping the order of
    /// the remaining tokens.
    ///
    /// ```rust
    /// use listview_widgets::classlist::ClassList;
    ///
    /// let mut classes: ClassList = "a 1 b 2.5 c -3".parse().unwrap();
    /// classes.remove_number_classes();
    /// assert_eq!(classes.to_string(), "a b c");
    /// ```
    pub fn remove_number_classes(&mut self) {
        self.tokens.retain(|t| !is_number_token(t));
    }

    /// Flips `name`: removes it when present, adds it otherwise.
    /// Returns whether the token is present afterwards.
    pub fn toggle_class(&mut self, name: &str) -> bool {
        if self.contains(name) {
            self.remove_class(name);
            false
        } else {
            self.add_class(name);
            true
        }
    }

    /// Returns the token at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Iterates the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// Decimal numbers with optional sign and exponent. Words such as "inf"
// or "NaN" are not page markers even though `f64` parses them.
fn is_number_token(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        && token.chars().any(|c| c.is_ascii_digit())
        && token.parse::<f64>().is_ok()
}

impl FromStr for ClassList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut list = ClassList::new();
        for token in s.split_whitespace() {
            list.add_class(token);
        }
        Ok(list)
    }
}

impl From<&str> for ClassList {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = ClassList::new();
        for token in iter {
            list.add_class(token);
        }
        list
    }
}
