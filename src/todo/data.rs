use serde::{Deserialize, Serialize};

pub type TodoID = i64;

#[derive(Serialize, Debug)]
pub struct Todo {
    pub id: TodoID,
    pub todo: String,
    pub priority: String,
    pub status: String,
    pub category: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TodoStatus {
    ToDo,
    InProgress,
    Done,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::ToDo => "TO DO",
            TodoStatus::InProgress => "IN PROGRESS",
            TodoStatus::Done => "DONE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Category {
    Work,
    Home,
    Learning,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "WORK",
            Category::Home => "HOME",
            Category::Learning => "LEARNING",
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct AddTodoRequest {
    pub id: TodoID,
    pub todo: String,
    pub priority: String,
    pub status: String,
    pub category: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

#[derive(Deserialize, Debug)]
pub struct UpdateTodoRequest {
    pub todo: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
}

#[derive(Debug, Default)]
pub struct TodoFilters {
    pub search_q: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TodoStatus>,
    pub category: Option<Category>,
    pub due_date: Option<String>,
}

#[derive(Debug)]
pub enum UpdateField {
    Status(TodoStatus),
    Priority(Priority),
    Category(Category),
    Todo(String),
    DueDate(String),
}

impl UpdateField {
    pub fn label(&self) -> &'static str {
        match self {
            UpdateField::Status(_) => "Status",
            UpdateField::Priority(_) => "Priority",
            UpdateField::Category(_) => "Category",
            UpdateField::Todo(_) => "Todo",
            UpdateField::DueDate(_) => "Due Date",
        }
    }
}
