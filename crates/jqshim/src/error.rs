#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No HTML received from {0}")]
    EmptyInput(String),

    #[error("--field attr requires --attr <NAME>")]
    MissingAttribute,
}
