use crate::UserService;

use users_db::Database;

/// Shared state handed to every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub users: UserService,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        let users = UserService::new(db.users());
        Self { db, users }
    }
}
