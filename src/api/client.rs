use reqwest::{Client, Response, Url};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::error::{ClientError, ClientResult};

/// JSON-over-HTTP access to the scheduling server.
///
/// One client per session: the cookie store keeps the login session, and
/// clones share it. No timeout is configured, requests resolve or fail on
/// the transport alone.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: Url) -> ClientResult<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Transport(format!("invalid endpoint `{}`: {}", path, e)))
    }

    pub(crate) async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).query(query).send().await.map_err(|e| {
            error!(error = %e, path, "GET failed");
            ClientError::from(e)
        })?;

        read_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        log::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await.map_err(|e| {
            error!(error = %e, path, "POST failed");
            ClientError::from(e)
        })?;

        read_json(response).await
    }

    /// POST without a body, for actions that carry no parameters.
    pub(crate) async fn post_empty<T>(&self, path: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, path, "POST failed");
                ClientError::from(e)
            })?;

        read_json(response).await
    }
}

/// Conflicts and business refusals come back with 4xx statuses and a JSON
/// body, so the body is decoded whatever the status.
async fn read_json<T>(response: Response) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await?;

    debug!(%status, %url, bytes = body.len(), "Response received");

    serde_json::from_str(&body).map_err(|e| {
        error!(error = %e, %status, %url, "Malformed response body");
        ClientError::from(e)
    })
}
