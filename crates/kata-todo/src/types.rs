//! Core types for the todo list
//!
//! - Todo identifiers and records
//! - Priorities
//! - View filters

use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique todo identifier, assigned from 1 upward and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    /// Accepts `7` or `#7`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.strip_prefix('#').unwrap_or(s).parse().map(TodoId)
    }
}

/// A single task entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identity
    pub id: TodoId,
    /// Task text, trimmed and non-empty
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// Urgency, `Normal` unless set
    #[serde(default)]
    pub priority: Priority,
    /// Single-word grouping label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Todo {
    /// Whether the record passes `filter`
    #[inline]
    #[must_use]
    pub fn matches(&self, filter: Filter) -> bool {
        match filter {
            Filter::All => true,
            Filter::Active => !self.completed,
            Filter::Completed => self.completed,
        }
    }

    /// Whether the record is labelled `category`, ignoring ASCII case
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { 'x' } else { ' ' };
        write!(f, "[{mark}] {} {}", self.id, self.text)?;
        if self.priority != Priority::Normal {
            write!(f, " !{}", self.priority)?;
        }
        if let Some(category) = &self.category {
            write!(f, " @{category}")?;
        }
        Ok(())
    }
}

/// Todo urgency
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Default urgency
    #[default]
    Normal,
    /// Do first
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        })
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(TodoError::UnknownPriority(s.trim().to_string())),
        }
    }
}

/// View filter over the collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every record
    #[default]
    All,
    /// Records not yet completed
    Active,
    /// Completed records
    Completed,
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            _ => Err(TodoError::UnknownFilter(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parse_and_display() {
        assert_eq!("7".parse::<TodoId>(), Ok(TodoId(7)));
        assert_eq!("#12".parse::<TodoId>(), Ok(TodoId(12)));
        assert!("abc".parse::<TodoId>().is_err());
        assert_eq!(TodoId(3).to_string(), "#3");
    }

    #[test]
    fn todo_display() {
        let mut todo = Todo {
            id: TodoId(2),
            text: "buy milk".to_string(),
            completed: true,
            priority: Priority::Normal,
            category: None,
        };
        assert_eq!(todo.to_string(), "[x] #2 buy milk");

        todo.priority = Priority::High;
        todo.category = Some("home".to_string());
        assert_eq!(todo.to_string(), "[x] #2 buy milk !high @home");
    }

    #[test]
    fn filter_matching() {
        let mut todo = Todo {
            id: TodoId(1),
            text: "a".to_string(),
            completed: false,
            priority: Priority::default(),
            category: Some("Work".to_string()),
        };
        assert!(todo.in_category("work"));
        assert!(!todo.in_category("home"));
        assert!(todo.matches(Filter::All));
        assert!(todo.matches(Filter::Active));
        assert!(!todo.matches(Filter::Completed));

        todo.completed = true;
        assert!(todo.matches(Filter::Completed));
        assert!(!todo.matches(Filter::Active));
    }

    #[test]
    fn filter_parse() {
        assert_eq!("Active".parse::<Filter>(), Ok(Filter::Active));
        assert_eq!("done".parse::<Filter>(), Ok(Filter::Completed));
        assert_eq!(
            "pending".parse::<Filter>(),
            Err(TodoError::UnknownFilter("pending".to_string()))
        );
    }

    #[test]
    fn priority_parse_and_order() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err(TodoError::UnknownPriority("urgent".to_string()))
        );
        assert!(Priority::Low < Priority::Normal && Priority::Normal < Priority::High);
        assert_eq!(Priority::default().to_string(), "normal");
    }
}
