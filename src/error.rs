use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rusqlite;

use std::error::Error;
use std::fmt;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum ApiError {
    InvalidStatus,
    InvalidPriority,
    InvalidCategory,
    InvalidDueDate,
    NoUpdateField,
    TodoNotFound,
    Internal(String),
}

impl Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::InvalidStatus => write!(f, "Invalid Todo Status"),
            ApiError::InvalidPriority => write!(f, "Invalid Todo Priority"),
            ApiError::InvalidCategory => write!(f, "Invalid Todo Category"),
            ApiError::InvalidDueDate => write!(f, "Invalid Due Date"),
            ApiError::NoUpdateField => write!(f, "No Field To Update"),
            ApiError::TodoNotFound => write!(f, "Todo Not Found"),
            ApiError::Internal(what) => write!(f, "Internal error: {}", what),
        }
    }
}

impl<T> From<PoisonError<T>> for ApiError {
    fn from(e: PoisonError<T>) -> ApiError {
        ApiError::Internal(e.to_string())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> ApiError {
        ApiError::Internal(e.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = match self {
            ApiError::TodoNotFound => Status::NotFound,
            ApiError::Internal(what) => {
                eprintln!("internal error while handling {}: {}", request.uri(), what);
                return Err(Status::InternalServerError);
            }
            _ => Status::BadRequest,
        };

        (status, self.to_string()).respond_to(request)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
