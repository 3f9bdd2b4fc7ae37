use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub const COMPLETED_MARKER: &str = "line-through text-gray-500";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Classes for the item's text span; carries the completed marker only
    /// while the item is checked.
    pub fn text_class(&self) -> String {
        if self.completed {
            format!("todo-text {COMPLETED_MARKER}")
        } else {
            "todo-text".to_string()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a trimmed item. Whitespace-only input adds nothing.
    pub fn add(&mut self, raw: &str) -> Option<Uuid> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let item = TodoItem {
            id: Uuid::new_v4(),
            text: text.to_string(),
            completed: false,
        };
        let id = item.id;
        debug!(%id, "todo added");
        self.items.push(item);
        Some(id)
    }

    pub fn toggle(&mut self, id: Uuid, checked: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = checked;
                debug!(%id, checked, "todo toggled");
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<TodoItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        debug!(%id, "todo removed");
        Some(self.items.remove(index))
    }
}
