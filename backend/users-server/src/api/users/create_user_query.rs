use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserQuery {
    pub name: String,
    pub email: String,
}
