use chrono::NaiveDate;

use crate::error::{ApiError, ApiResult};

use super::data::*;

const DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

pub fn validate_status(value: &str) -> ApiResult<TodoStatus> {
    match value {
        "TO DO" => Ok(TodoStatus::ToDo),
        "IN PROGRESS" => Ok(TodoStatus::InProgress),
        "DONE" => Ok(TodoStatus::Done),
        _ => Err(ApiError::InvalidStatus),
    }
}

pub fn validate_priority(value: &str) -> ApiResult<Priority> {
    match value {
        "HIGH" => Ok(Priority::High),
        "MEDIUM" => Ok(Priority::Medium),
        "LOW" => Ok(Priority::Low),
        _ => Err(ApiError::InvalidPriority),
    }
}

pub fn validate_category(value: &str) -> ApiResult<Category> {
    match value {
        "WORK" => Ok(Category::Work),
        "HOME" => Ok(Category::Home),
        "LEARNING" => Ok(Category::Learning),
        _ => Err(ApiError::InvalidCategory),
    }
}

pub fn normalize_due_date(value: &str) -> ApiResult<String> {
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(value, layout).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or(ApiError::InvalidDueDate)
}

pub fn validate_filters(
    search_q: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> ApiResult<TodoFilters> {
    let status = match status {
        Some(value) => Some(validate_status(&value)?),
        None => None,
    };

    let priority = match priority {
        Some(value) => Some(validate_priority(&value)?),
        None => None,
    };

    let category = match category {
        Some(value) => Some(validate_category(&value)?),
        None => None,
    };

    let due_date = match date {
        Some(value) => Some(normalize_due_date(&value)?),
        None => None,
    };

    Ok(TodoFilters {
        search_q,
        priority,
        status,
        category,
        due_date,
    })
}

pub fn validate_new_todo(request: AddTodoRequest) -> ApiResult<Todo> {
    let status = validate_status(&request.status)?;
    let priority = validate_priority(&request.priority)?;
    let category = validate_category(&request.category)?;
    let due_date = normalize_due_date(&request.due_date)?;

    Ok(Todo {
        id: request.id,
        todo: request.todo,
        priority: priority.as_str().to_string(),
        status: status.as_str().to_string(),
        category: category.as_str().to_string(),
        due_date,
    })
}

pub fn validate_update(request: UpdateTodoRequest) -> ApiResult<UpdateField> {
    let status = match request.status {
        Some(value) => Some(validate_status(&value)?),
        None => None,
    };

    let priority = match request.priority {
        Some(value) => Some(validate_priority(&value)?),
        None => None,
    };

    let category = match request.category {
        Some(value) => Some(validate_category(&value)?),
        None => None,
    };

    let due_date = match request.due_date {
        Some(value) => Some(normalize_due_date(&value)?),
        None => None,
    };

    // First present field wins: status, priority, category, todo text, due date.
    if let Some(status) = status {
        Ok(UpdateField::Status(status))
    } else if let Some(priority) = priority {
        Ok(UpdateField::Priority(priority))
    } else if let Some(category) = category {
        Ok(UpdateField::Category(category))
    } else if let Some(todo) = request.todo {
        Ok(UpdateField::Todo(todo))
    } else if let Some(due_date) = due_date {
        Ok(UpdateField::DueDate(due_date))
    } else {
        Err(ApiError::NoUpdateField)
    }
}
