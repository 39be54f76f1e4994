//! In-memory store for todos and their tasks.
//!
//! # Design
//! `TodoStore` keeps todos in a `Vec` in insertion order and hands out ids
//! from two private counters, one for todos and one for tasks. Both counters
//! pre-increment, so the first id handed out is 1, and they only go back to
//! zero on `clear`. Task ids come from a single store-wide counter rather than
//! one per todo, which is what lets `delete_task` work from a task id alone.
//!
//! Lookups are linear scans. Tasks point back at their todo by id; ownership
//! flows one way, todo to task, so dropping a todo drops its tasks.
//!
//! The store does no locking of its own. Every mutator takes `&mut self`, so
//! sharing one between threads requires the caller to wrap it in a lock.

use tracing::debug;

use crate::error::StoreError;
use crate::types::{NewTask, NewTodo, Page, Task, Todo};

#[derive(Debug, Default)]
pub struct TodoStore {
    next_todo_id: i64,
    next_task_id: i64,
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of todos currently held.
    pub fn count(&self) -> u64 {
        self.todos.len() as u64
    }

    /// Append a todo and assign it the next id.
    pub fn create(&mut self, input: NewTodo) -> &Todo {
        self.next_todo_id += 1;
        let id = self.next_todo_id;
        self.todos.push(Todo {
            id,
            author: input.author,
            details: input.details,
            tasks: Vec::new(),
        });
        debug!(todo_id = id, "created todo");
        &self.todos[self.todos.len() - 1]
    }

    pub fn find(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Zero-indexed page of todos in insertion order.
    ///
    /// An offset at or past the end yields an empty slice. A `size` of zero
    /// always yields an empty slice.
    pub fn find_all(&self, page: u32, size: u32) -> &[Todo] {
        let len = self.todos.len();
        let offset = (page as usize).saturating_mul(size as usize);
        if self.todos.is_empty() || offset >= len {
            return &[];
        }
        let end = offset.saturating_add(size as usize).min(len);
        &self.todos[offset..end]
    }

    /// `find_all` plus the totals a paged listing reports.
    pub fn page(&self, page: u32, size: u32) -> Page<Todo> {
        let total_elements = self.count();
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(size))
        };
        Page {
            content: self.find_all(page, size).to_vec(),
            number: page,
            size,
            total_elements,
            total_pages,
        }
    }

    /// Append a task to the todo with `todo_id` and return the updated todo.
    pub fn add_task(&mut self, todo_id: i64, input: NewTask) -> Result<&Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == todo_id)
            .ok_or_else(|| StoreError::todo_not_found(todo_id))?;

        self.next_task_id += 1;
        let task_id = self.next_task_id;
        todo.tasks.push(Task {
            id: task_id,
            todo_id,
            completed: input.completed,
            details: input.details,
        });
        debug!(todo_id, task_id, "added task");
        Ok(&*todo)
    }

    /// Remove a todo together with all of its tasks.
    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| StoreError::todo_not_found(id))?;
        // `remove` shifts the tail down, keeping insertion order.
        let removed = self.todos.remove(index);
        debug!(todo_id = id, tasks = removed.tasks.len(), "deleted todo");
        Ok(())
    }

    /// Remove a task by id, searching every todo in insertion order.
    pub fn delete_task(&mut self, id: i64) -> Result<(), StoreError> {
        let todo_id = self
            .todos
            .iter()
            .flat_map(|todo| todo.tasks.iter())
            .find(|task| task.id == id)
            .map(|task| task.todo_id)
            .ok_or_else(|| StoreError::task_not_found(id))?;

        let parent = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == todo_id)
            .ok_or_else(|| StoreError::task_not_found(id))?;
        parent.tasks.retain(|task| task.id != id);
        debug!(todo_id, task_id = id, "deleted task");
        Ok(())
    }

    /// Drop every todo and reset both id counters.
    pub fn clear(&mut self) {
        self.next_todo_id = 0;
        self.next_task_id = 0;
        self.todos.clear();
        debug!("cleared store");
    }
}
