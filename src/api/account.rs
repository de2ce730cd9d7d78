use async_trait::async_trait;

use crate::api::HttpBackend;
use crate::error::ClientResult;
use crate::model::Ack;
use crate::model::account::{Credentials, PasswordChange};
use crate::routes;

#[async_trait(?Send)]
pub trait AccountApi {
    /// On success the server session cookie is kept by the client.
    async fn login(&self, credentials: &Credentials) -> ClientResult<Ack>;

    async fn register(&self, credentials: &Credentials) -> ClientResult<Ack>;

    async fn change_password(&self, change: &PasswordChange) -> ClientResult<Ack>;
}

#[async_trait(?Send)]
impl AccountApi for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> ClientResult<Ack> {
        self.post_json(routes::LOGIN, credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> ClientResult<Ack> {
        self.post_json(routes::REGISTER, credentials).await
    }

    async fn change_password(&self, change: &PasswordChange) -> ClientResult<Ack> {
        self.post_json(routes::CHANGE_PASSWORD, change).await
    }
}
