//! Testing utilities for the Kata workspace
//!
//! Shared fixtures for todo lists and calendar dates.

#![allow(missing_docs)]

use chrono::NaiveDate;
use kata_todo::{TodoConfig, TodoId, TodoList};

pub fn todo_list_with(texts: &[&str]) -> TodoList {
    let mut list = TodoList::new();
    for text in texts {
        list.add(text).unwrap();
    }
    list
}

/// List holding `texts`, with the records at the given 1-based ids completed
pub fn todo_list_with_completed(texts: &[&str], completed: &[u64]) -> TodoList {
    let mut list = todo_list_with(texts);
    for id in completed {
        list.toggle(TodoId(*id)).unwrap();
    }
    list
}

pub fn todo_list_with_limit(max_text_len: usize) -> TodoList {
    TodoList::with_config(TodoConfig::new().with_max_text_len(max_text_len))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn texts(list: &TodoList) -> Vec<String> {
    list.items().iter().map(|t| t.text.clone()).collect()
}
