use rusqlite::{params, Connection, Row};

use crate::error::ApiResult;

use super::data::*;

pub fn todo_from_row(row: &Row) -> rusqlite::Result<Todo> {
    let id: TodoID = row.get(0)?;
    let todo: String = row.get(1)?;
    let priority: String = row.get(2)?;
    let status: String = row.get(3)?;
    let category: String = row.get(4)?;
    let due_date: String = row.get(5)?;

    Ok(Todo {
        id,
        todo,
        priority,
        status,
        category,
        due_date,
    })
}

pub fn get_todos_from_db(
    db_connection: &Connection,
    filters: &TodoFilters,
) -> ApiResult<Vec<Todo>> {
    let mut todos_statement = db_connection.prepare(
        "SELECT id, todo, priority, status, category, due_date FROM todo
         WHERE (?1 IS NULL OR todo LIKE '%' || ?1 || '%')
           AND (?2 IS NULL OR status = ?2)
           AND (?3 IS NULL OR priority = ?3)
           AND (?4 IS NULL OR category = ?4)
           AND (?5 IS NULL OR due_date = ?5)",
    )?;

    let todo_rows = todos_statement.query_map(
        params![
            filters.search_q.as_deref(),
            filters.status.map(|status| status.as_str()),
            filters.priority.map(|priority| priority.as_str()),
            filters.category.map(|category| category.as_str()),
            filters.due_date.as_deref()
        ],
        todo_from_row,
    )?;

    let mut todos = vec![];
    for row_result in todo_rows {
        todos.push(row_result?);
    }

    Ok(todos)
}

pub fn get_todo_from_db(db_connection: &Connection, todo_id: TodoID) -> ApiResult<Option<Todo>> {
    let mut todo_statement = db_connection.prepare(
        "SELECT id, todo, priority, status, category, due_date FROM todo WHERE id = ?1",
    )?;

    let mut todo_rows = todo_statement.query_map(params![todo_id], todo_from_row)?;

    match todo_rows.next() {
        Some(row_result) => Ok(Some(row_result?)),
        None => Ok(None),
    }
}

pub fn add_todo_to_db(db_connection: &Connection, todo: &Todo) -> ApiResult<()> {
    db_connection.execute(
        "INSERT INTO todo (id, todo, category, priority, status, due_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            todo.id,
            todo.todo,
            todo.category,
            todo.priority,
            todo.status,
            todo.due_date
        ],
    )?;

    Ok(())
}

pub fn update_todo_in_db(
    db_connection: &Connection,
    todo_id: TodoID,
    field: &UpdateField,
) -> ApiResult<()> {
    let (update_statement, value): (&str, &str) = match field {
        UpdateField::Status(status) => {
            ("UPDATE todo SET status = ?1 WHERE id = ?2", status.as_str())
        }
        UpdateField::Priority(priority) => (
            "UPDATE todo SET priority = ?1 WHERE id = ?2",
            priority.as_str(),
        ),
        UpdateField::Category(category) => (
            "UPDATE todo SET category = ?1 WHERE id = ?2",
            category.as_str(),
        ),
        UpdateField::Todo(todo) => ("UPDATE todo SET todo = ?1 WHERE id = ?2", todo.as_str()),
        UpdateField::DueDate(due_date) => (
            "UPDATE todo SET due_date = ?1 WHERE id = ?2",
            due_date.as_str(),
        ),
    };

    db_connection.execute(update_statement, params![value, todo_id])?;

    Ok(())
}

pub fn delete_todo_from_db(db_connection: &Connection, todo_id: TodoID) -> ApiResult<()> {
    db_connection.execute("DELETE FROM todo WHERE id = ?1", params![todo_id])?;

    Ok(())
}
