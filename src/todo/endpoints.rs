use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

use crate::data::DBConnection;
use crate::error::{ApiError, ApiResult};

use super::data::*;
use super::helpers::*;
use super::validate::*;

#[get("/todos?<search_q>&<priority>&<status>&<category>&<date>")]
pub fn get_todos(
    search_q: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    category: Option<String>,
    date: Option<String>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Todo>>> {
    let filters = validate_filters(search_q, priority, status, category, date)?;
    let db_connection = db_connection.lock()?;

    let todos = get_todos_from_db(&db_connection, &filters)?;

    Ok(Json(todos))
}

#[get("/todos/<todo_id>")]
pub fn get_todo(todo_id: TodoID, db_connection: &State<DBConnection>) -> ApiResult<Json<Todo>> {
    let db_connection = db_connection.lock()?;

    match get_todo_from_db(&db_connection, todo_id)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::TodoNotFound),
    }
}

#[get("/agenda?<date>")]
pub fn get_agenda(
    date: Option<String>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Todo>>> {
    let filters = validate_filters(None, None, None, None, date)?;
    let db_connection = db_connection.lock()?;

    let todos = get_todos_from_db(&db_connection, &filters)?;

    Ok(Json(todos))
}

#[post("/todos", format = "json", data = "<add_todo_request>")]
pub fn add_todo(
    add_todo_request: Json<AddTodoRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<&'static str> {
    let todo = validate_new_todo(add_todo_request.into_inner())?;
    let db_connection = db_connection.lock()?;

    add_todo_to_db(&db_connection, &todo)?;

    Ok("Todo Successfully Added")
}

#[put("/todos/<todo_id>", format = "json", data = "<update_todo_request>")]
pub fn set_todo(
    todo_id: TodoID,
    update_todo_request: Json<UpdateTodoRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<String> {
    let field = validate_update(update_todo_request.into_inner())?;
    let db_connection = db_connection.lock()?;

    update_todo_in_db(&db_connection, todo_id, &field)?;

    Ok(format!("{} Updated", field.label()))
}

#[delete("/todos/<todo_id>")]
pub fn delete_todo(
    todo_id: TodoID,
    db_connection: &State<DBConnection>,
) -> ApiResult<&'static str> {
    let db_connection = db_connection.lock()?;

    delete_todo_from_db(&db_connection, todo_id)?;

    Ok("Todo Deleted")
}
