use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

pub type DBConnection = Arc<Mutex<Connection>>;

pub fn init_schema(connection: &Connection) -> rusqlite::Result<()> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS todo (
            id INTEGER PRIMARY KEY,
            todo TEXT,
            category TEXT,
            priority TEXT,
            status TEXT,
            due_date TEXT
        )",
        params![],
    )?;

    Ok(())
}

pub fn open_database(path: &str) -> rusqlite::Result<DBConnection> {
    let connection = Connection::open(path)?;
    init_schema(&connection)?;

    Ok(Arc::new(Mutex::new(connection)))
}
