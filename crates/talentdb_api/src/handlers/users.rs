//! User endpoints.

use crate::error::ApiResult;
use crate::handlers::{new_id, require, ApiContext};
use crate::request::{CreateUser, ListQuery};
use talentdb_core::{Page, User};

impl ApiContext {
    /// `GET /api/users`.
    pub fn list_users(&self, query: &ListQuery) -> ApiResult<Page<User>> {
        self.list_page(&self.users(), query)
    }

    /// `POST /api/users`.
    pub fn create_user(&self, request: CreateUser) -> ApiResult<User> {
        require(&request.name, "name required")?;
        let user = User {
            id: new_id(),
            name: request.name.trim().to_string(),
        };
        Ok(self.users().create(user)?)
    }
}
