use std::error::Error;

mod data;
mod error;
mod todo;

use data::DBConnection;
use todo::endpoints;

#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

fn rocket(db_connection: DBConnection) -> Rocket<Build> {
    rocket::build().manage(db_connection).mount(
        "/",
        routes![
            endpoints::get_todos,
            endpoints::get_todo,
            endpoints::get_agenda,
            endpoints::add_todo,
            endpoints::set_todo,
            endpoints::delete_todo,
        ],
    )
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let db_connection = data::open_database("rtodo.db")?;

    rocket(db_connection).launch().await?;

    Ok(())
}
