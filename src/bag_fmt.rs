use std::fmt;

use crate::bag_storage::Multiset;

impl<T: fmt::Debug> Multiset<T> {
    /// Diagnostic rendering of the contents in storage order, e.g.
    /// `["Banana": 2, "Orange": 1]`. Not meant to be parsed back.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Debug> fmt::Display for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[:]");
        }
        f.write_str("[")?;
        for (position, (member, count)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member:?}: {count}")?;
        }
        f.write_str("]")
    }
}
