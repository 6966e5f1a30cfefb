//! reqwest implementation of [`Backend`]
//!
//! Every POST carries the anti-forgery token in the `X-CSRFToken` header.
//! The client keeps a cookie store so the matching `csrftoken` cookie set by
//! the index page is sent back as well.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::OnceCell;

use super::{
    ApiError, ApiResult, Backend, GenerateRequest, ResumeUpload, Validation,
    GENERATE_RESUME_PATH, VALIDATE_CONSIDERATIONS_PATH, VALIDATE_JOB_POSTING_PATH,
    VALIDATE_RESUME_PATH,
};
use crate::config::Settings;

const CSRF_HEADER: &str = "X-CSRFToken";
const CSRF_FIELD: &str = "csrfmiddlewaretoken";
const USER_AGENT: &str = concat!("resume-righter/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ResumeValidationBody {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    extracted_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JobPostingValidationBody {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    job_posting_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConsiderationsValidationBody {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    validated_data: Option<String>,
}

#[derive(Serialize)]
struct UrlBody<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

/// HTTP client for the validation/generation service
pub struct HttpBackend {
    client: Client,
    base_url: String,
    csrf_token: OnceCell<String>,
}

impl HttpBackend {
    /// Build a client from settings
    ///
    /// A configured token is used as-is; otherwise it is read from the
    /// index page on first use.
    pub fn new(settings: &Settings) -> ApiResult<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true);
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let csrf_token = match &settings.csrf_token {
            Some(token) => OnceCell::new_with(Some(token.clone())),
            None => OnceCell::new(),
        };

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            csrf_token,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The anti-forgery token, fetching the index page the first time
    async fn csrf_token(&self) -> ApiResult<&str> {
        let token = self
            .csrf_token
            .get_or_try_init(|| async {
                let url = self.endpoint("/");
                tracing::debug!(%url, "Fetching anti-forgery token");
                let page = self.client.get(&url).send().await?.text().await?;
                let token = extract_csrf_token(&page).unwrap_or_default();
                if token.is_empty() {
                    tracing::warn!("Index page has no {} field; sending empty token", CSRF_FIELD);
                }
                Ok::<_, ApiError>(token)
            })
            .await?;
        Ok(token.as_str())
    }

    async fn post_json<T, R>(&self, path: &str, body: &T) -> ApiResult<R>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let token = self.csrf_token().await?;
        let response = self
            .client
            .post(self.endpoint(path))
            .header(CSRF_HEADER, token)
            .json(body)
            .send()
            .await?;
        decode_body(path, response).await
    }
}

/// Decode a validation body regardless of status
///
/// The service answers bad input with a 4xx `{"error": ...}` body, which has
/// no `valid` field and so decodes as a rejection.
async fn decode_body<R: DeserializeOwned>(path: &str, response: Response) -> ApiResult<R> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if !status.is_success() {
        tracing::warn!(
            path,
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&bytes),
            "Validation endpoint returned non-success status"
        );
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// Pull the value of the `csrfmiddlewaretoken` hidden input out of a page
pub fn extract_csrf_token(html: &str) -> Option<String> {
    let field_at = html.find(CSRF_FIELD)?;
    let tag_start = html[..field_at].rfind('<')?;
    let tag_end = field_at + html[field_at..].find('>')?;
    let tag = &html[tag_start..tag_end];

    let value_at = tag.find("value=")? + "value=".len();
    let rest = &tag[value_at..];
    let quote = rest.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let rest = &rest[1..];
    let close = rest.find(quote)?;
    Some(rest[..close].to_string())
}

#[async_trait]
impl Backend for HttpBackend {
    async fn validate_resume(&self, upload: &ResumeUpload) -> ApiResult<Validation> {
        let token = self.csrf_token().await?;
        let part = multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(upload.mime)?;
        let form = multipart::Form::new().part("resume_file", part);

        let response = self
            .client
            .post(self.endpoint(VALIDATE_RESUME_PATH))
            .header(CSRF_HEADER, token)
            .multipart(form)
            .send()
            .await?;

        let body: ResumeValidationBody = decode_body(VALIDATE_RESUME_PATH, response).await?;
        Ok(Validation {
            valid: body.valid,
            text: body.extracted_text.unwrap_or_default(),
        })
    }

    async fn validate_job_posting(&self, url: &str) -> ApiResult<Validation> {
        let body: JobPostingValidationBody = self
            .post_json(VALIDATE_JOB_POSTING_PATH, &UrlBody { url })
            .await?;
        Ok(Validation {
            valid: body.valid,
            text: body.job_posting_text.unwrap_or_default(),
        })
    }

    async fn validate_considerations(&self, text: &str) -> ApiResult<Validation> {
        let body: ConsiderationsValidationBody = self
            .post_json(VALIDATE_CONSIDERATIONS_PATH, &TextBody { text })
            .await?;
        Ok(Validation {
            valid: body.valid,
            text: body.validated_data.unwrap_or_default(),
        })
    }

    async fn generate_resume(&self, request: &GenerateRequest) -> ApiResult<Bytes> {
        let token = self.csrf_token().await?;
        let response = self
            .client
            .post(self.endpoint(GENERATE_RESUME_PATH))
            .header(CSRF_HEADER, token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?)
    }
}
