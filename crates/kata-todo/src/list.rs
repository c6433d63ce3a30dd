//! Todo list manager
//!
//! Owns an ordered collection of [`Todo`] records. Insertion order is
//! display order unless changed with [`TodoList::move_to`]. Ids come from a
//! counter that only moves forward, so a deleted id is never handed out
//! again by the same list.

use crate::config::TodoConfig;
use crate::error::{TodoError, TodoResult};
use crate::types::{Filter, Priority, Todo, TodoId};

/// Ordered in-memory todo collection
#[derive(Debug, Clone)]
pub struct TodoList {
    /// Records in display order
    items: Vec<Todo>,
    /// Next id to assign
    next_id: u64,
    /// Validation limits
    config: TodoConfig,
}

impl TodoList {
    /// Create empty list with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TodoConfig::default())
    }

    /// Create empty list with `config`
    #[must_use]
    pub fn with_config(config: TodoConfig) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            config,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    /// Append a new, uncompleted record
    ///
    /// # Errors
    /// - [`TodoError::InvalidInput`] if `text` is blank after trimming
    /// - [`TodoError::TextTooLong`] if it exceeds the configured limit
    pub fn add(&mut self, text: &str) -> TodoResult<&Todo> {
        let text = self.validate_text(text)?;
        let id = TodoId(self.next_id);
        self.next_id += 1;

        tracing::debug!(%id, "added todo");
        self.items.push(Todo {
            id,
            text,
            completed: false,
            priority: Priority::default(),
            category: None,
        });
        Ok(&self.items[self.items.len() - 1])
    }

    /// Flip `completed` on the record with `id`, returning the new state
    ///
    /// # Errors
    /// [`TodoError::NotFound`] if no record has `id`.
    pub fn toggle(&mut self, id: TodoId) -> TodoResult<bool> {
        let todo = self.get_mut(id)?;
        todo.completed = !todo.completed;
        tracing::debug!(%id, completed = todo.completed, "toggled todo");
        Ok(todo.completed)
    }

    /// Replace the text of the record with `id`
    ///
    /// # Errors
    /// Same validation as [`TodoList::add`], plus [`TodoError::NotFound`].
    pub fn edit(&mut self, id: TodoId, text: &str) -> TodoResult<&Todo> {
        let text = self.validate_text(text)?;
        let todo = self.get_mut(id)?;
        todo.text = text;
        tracing::debug!(%id, "edited todo");
        Ok(&*todo)
    }

    /// Remove the record with `id`; `None` if there was none
    pub fn delete(&mut self, id: TodoId) -> Option<Todo> {
        let pos = self.position(id)?;
        tracing::debug!(%id, "deleted todo");
        Some(self.items.remove(pos))
    }

    /// Remove every completed record, keeping the rest in order
    ///
    /// Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|t| !t.completed);
        let removed = before - self.items.len();
        tracing::debug!(removed, "cleared completed todos");
        removed
    }

    /// Move the record with `id` to `index`, clamped to the end
    ///
    /// Returns the index the record landed at.
    ///
    /// # Errors
    /// [`TodoError::NotFound`] if no record has `id`.
    pub fn move_to(&mut self, id: TodoId, index: usize) -> TodoResult<usize> {
        let from = self.position(id).ok_or(TodoError::NotFound(id))?;
        let todo = self.items.remove(from);
        let to = index.min(self.items.len());
        self.items.insert(to, todo);
        tracing::debug!(%id, from, to, "moved todo");
        Ok(to)
    }

    /// Set the priority of the record with `id`
    ///
    /// # Errors
    /// [`TodoError::NotFound`] if no record has `id`.
    pub fn set_priority(&mut self, id: TodoId, priority: Priority) -> TodoResult<&Todo> {
        let todo = self.get_mut(id)?;
        todo.priority = priority;
        tracing::debug!(%id, %priority, "set todo priority");
        Ok(&*todo)
    }

    /// Label the record with `id`; `None` or blank text clears the label
    ///
    /// # Errors
    /// - [`TodoError::InvalidCategory`] if the label has inner whitespace or `@`
    /// - [`TodoError::NotFound`] if no record has `id`
    pub fn set_category(&mut self, id: TodoId, category: Option<&str>) -> TodoResult<&Todo> {
        let category = match category.map(str::trim) {
            None | Some("") => None,
            Some(c) if c.contains(|ch: char| ch.is_whitespace() || ch == '@') => {
                tracing::warn!(category = c, "rejected todo category");
                return Err(TodoError::InvalidCategory(c.to_string()));
            }
            Some(c) => Some(c.to_string()),
        };
        let todo = self.get_mut(id)?;
        todo.category = category;
        tracing::debug!(%id, category = ?todo.category, "set todo category");
        Ok(&*todo)
    }

    /// Number of records not yet completed
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Count label, e.g. `"1 item left"` or `"3 items left"`
    #[must_use]
    pub fn items_left_label(&self) -> String {
        let active = self.count();
        let noun = if active == 1 { "item" } else { "items" };
        format!("{active} {noun} left")
    }

    /// All records in display order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Records passing `filter`, in display order
    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &Todo> + '_ {
        self.items.iter().filter(move |t| t.matches(filter))
    }

    /// Records labelled `category` (ASCII case-insensitive), in display order
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Todo> + 'a {
        self.items.iter().filter(move |t| t.in_category(category))
    }

    /// Record with `id`
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Total number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TodoId) -> TodoResult<&mut Todo> {
        self.items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    fn validate_text(&self, text: &str) -> TodoResult<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::warn!("rejected blank todo text");
            return Err(TodoError::InvalidInput);
        }
        let len = trimmed.chars().count();
        if len > self.config.max_text_len {
            tracing::warn!(len, max = self.config.max_text_len, "rejected long todo text");
            return Err(TodoError::TextTooLong {
                len,
                max: self.config.max_text_len,
            });
        }
        Ok(trimmed.to_string())
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn add_rejects_blank() {
        let mut list = TodoList::new();
        assert_eq!(list.add("").unwrap_err(), TodoError::InvalidInput);
        assert_eq!(list.add("   \t").unwrap_err(), TodoError::InvalidInput);
        assert!(list.is_empty());
    }

    #[test]
    fn add_assigns_fresh_ids() {
        let mut list = TodoList::new();
        let first = list.add("buy milk").unwrap().clone();
        let second = list.add("walk dog").unwrap().clone();

        assert_eq!(first.id, TodoId(1));
        assert_eq!(second.id, TodoId(2));
        assert!(!first.completed);
        assert_eq!(first.text, "buy milk");
    }

    #[test]
    fn add_trims_text() {
        let mut list = TodoList::new();
        assert_eq!(list.add("  read book \n").unwrap().text, "read book");
    }

    #[test]
    fn add_rejects_long_text() {
        let mut list = TodoList::with_config(TodoConfig::new().with_max_text_len(5));
        assert!(list.add("12345").is_ok());
        assert_eq!(
            list.add("123456").unwrap_err(),
            TodoError::TextTooLong { len: 6, max: 5 }
        );
    }

    #[test]
    fn ids_not_reused_after_delete() {
        let mut list = TodoList::new();
        let id = list.add("a").unwrap().id;
        list.delete(id);
        assert_eq!(list.add("b").unwrap().id, TodoId(2));
    }

    #[test]
    fn toggle_flips_once_per_call() {
        let mut list = TodoList::new();
        let id = list.add("a").unwrap().id;

        assert_eq!(list.toggle(id), Ok(true));
        assert!(list.get(id).unwrap().completed);
        assert_eq!(list.toggle(id), Ok(false));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn toggle_missing() {
        let mut list = TodoList::new();
        assert_eq!(list.toggle(TodoId(9)), Err(TodoError::NotFound(TodoId(9))));
    }

    #[test]
    fn delete_present_and_absent() {
        let mut list = TodoList::new();
        let id = list.add("a").unwrap().id;
        list.add("b").unwrap();

        assert_eq!(list.delete(id).map(|t| t.text), Some("a".to_string()));
        assert_eq!(list.delete(id), None);
        assert_eq!(texts(&list), vec!["b"]);
    }

    #[test]
    fn clear_completed_preserves_order() {
        let mut list = TodoList::new();
        for text in ["a", "b", "c", "d", "e"] {
            list.add(text).unwrap();
        }
        list.toggle(TodoId(2)).unwrap();
        list.toggle(TodoId(4)).unwrap();

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(texts(&list), vec!["a", "c", "e"]);
        assert_eq!(list.clear_completed(), 0);
    }

    #[test]
    fn count_and_label() {
        let mut list = TodoList::new();
        assert_eq!(list.items_left_label(), "0 items left");

        list.add("a").unwrap();
        assert_eq!(list.items_left_label(), "1 item left");

        list.add("b").unwrap();
        list.add("c").unwrap();
        list.toggle(TodoId(1)).unwrap();
        assert_eq!(list.count(), 2);
        assert_eq!(list.items_left_label(), "2 items left");
    }

    #[test]
    fn edit_replaces_text() {
        let mut list = TodoList::new();
        let id = list.add("draft").unwrap().id;

        assert_eq!(list.edit(id, " final ").unwrap().text, "final");
        assert_eq!(list.edit(id, " "), Err(TodoError::InvalidInput));
        assert_eq!(list.get(id).unwrap().text, "final");
        assert!(matches!(
            list.edit(TodoId(42), "x"),
            Err(TodoError::NotFound(TodoId(42)))
        ));
    }

    #[test]
    fn move_reorders() {
        let mut list = TodoList::new();
        for text in ["a", "b", "c"] {
            list.add(text).unwrap();
        }

        list.move_to(TodoId(3), 0).unwrap();
        assert_eq!(texts(&list), vec!["c", "a", "b"]);

        assert_eq!(list.move_to(TodoId(3), 99), Ok(2));
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
        assert_eq!(list.move_to(TodoId(1), 1), Ok(1));
        assert_eq!(texts(&list), vec!["b", "a", "c"]);

        assert_eq!(list.move_to(TodoId(8), 0), Err(TodoError::NotFound(TodoId(8))));
    }

    #[test]
    fn filtered_views() {
        let mut list = TodoList::new();
        for text in ["a", "b", "c"] {
            list.add(text).unwrap();
        }
        list.toggle(TodoId(2)).unwrap();

        let active: Vec<_> = list.filtered(Filter::Active).map(|t| t.id).collect();
        let done: Vec<_> = list.filtered(Filter::Completed).map(|t| t.id).collect();
        assert_eq!(active, vec![TodoId(1), TodoId(3)]);
        assert_eq!(done, vec![TodoId(2)]);
        assert_eq!(list.filtered(Filter::All).count(), 3);
    }

    #[test]
    fn priority_set_and_kept_on_toggle() {
        let mut list = TodoList::new();
        let id = list.add("file taxes").unwrap().id;
        assert_eq!(list.get(id).unwrap().priority, Priority::Normal);

        assert_eq!(list.set_priority(id, Priority::High).unwrap().priority, Priority::High);
        list.toggle(id).unwrap();
        assert_eq!(list.get(id).unwrap().priority, Priority::High);
        assert_eq!(
            list.set_priority(TodoId(5), Priority::Low),
            Err(TodoError::NotFound(TodoId(5)))
        );
    }

    #[test]
    fn category_set_clear_and_filter() {
        let mut list = TodoList::new();
        for text in ["a", "b", "c"] {
            list.add(text).unwrap();
        }
        list.set_category(TodoId(1), Some(" work ")).unwrap();
        list.set_category(TodoId(3), Some("Work")).unwrap();
        list.set_category(TodoId(2), Some("home")).unwrap();

        let work: Vec<_> = list.in_category("WORK").map(|t| t.id).collect();
        assert_eq!(work, vec![TodoId(1), TodoId(3)]);

        assert_eq!(list.set_category(TodoId(2), Some("  ")).unwrap().category, None);
        assert_eq!(list.set_category(TodoId(1), None).unwrap().category, None);
        assert_eq!(list.in_category("home").count(), 0);
    }

    #[test]
    fn category_rejects_multiword() {
        let mut list = TodoList::new();
        let id = list.add("a").unwrap().id;
        assert_eq!(
            list.set_category(id, Some("day job")),
            Err(TodoError::InvalidCategory("day job".to_string()))
        );
        assert_eq!(
            list.set_category(id, Some("@work")),
            Err(TodoError::InvalidCategory("@work".to_string()))
        );
        assert_eq!(list.get(id).unwrap().category, None);
    }
}
