//! List state for table pages.
//!
//! DESIGN
//! ======
//! Every table page moves through the same lifecycle: idle, loading, then
//! either rows or an error string. Centralizing the transitions keeps the
//! pages down to rendering plus one fetch call, and makes the row-removal
//! rule (delete drops exactly the acknowledged row, no refetch) testable.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

/// Rows plus lifecycle flags for one table page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> ListState<T> {
    /// Enter the loading state, clearing a previous error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the rows with a successful fetch result.
    pub fn resolve(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failure message; existing rows are kept but the page
    /// renders the error until the next successful fetch.
    pub fn fail(&mut self, mensaje: String) {
        self.loading = false;
        self.error = Some(mensaje);
    }

    /// Remove the rows matching `pred` after a server-acknowledged delete.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) {
        self.items.retain(|item| !pred(item));
    }
}
