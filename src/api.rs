use crate::config::AppConfig;
use crate::models::rating::Rating;
use crate::models::review::{NewReview, Review};
use crate::models::stall::{NewStall, QrCode, Stall, UploadedPhoto};
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{error, log};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not build request: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds a status error, keeping the backend's `detail` message when it is a plain string.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| match d {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            });
        ApiError::Status { status, detail }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for the error toast: the backend's message if it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Filters for `GET /stalls`. Blank values are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StallQuery {
    pub search: String,
    pub city: String,
    pub area: String,
}

impl StallQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    pub fn to_query_string(&self) -> String {
        query_string(&[
            ("search", &self.search),
            ("city", &self.city),
            ("area", &self.area),
        ])
    }
}

/// `?k=v&...` for the non-blank pairs, or an empty string.
pub fn query_string(pairs: &[(&str, &str)]) -> String {
    let encoded = pairs
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value.trim())))
        .collect::<Vec<_>>();
    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}

/// Thin client over the hygiene backend's REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.bearer() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log!("[API] GET {}", url);
        let response = self.authorize(Request::get(&url)).send().await?;
        read_json(&url, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log!("[API] POST {}", url);
        let request = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request.send().await?;
        read_json(&url, response).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", &body).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/register", &body).await
    }

    pub async fn list_stalls(&self, query: &StallQuery) -> Result<Vec<Stall>, ApiError> {
        self.get_json(&format!("/stalls{}", query.to_query_string()))
            .await
    }

    pub async fn get_stall(&self, stall_id: &str) -> Result<Stall, ApiError> {
        self.get_json(&format!("/stalls/{}", urlencoding::encode(stall_id)))
            .await
    }

    pub async fn stall_reviews(&self, stall_id: &str) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("/reviews/stall/{}", urlencoding::encode(stall_id)))
            .await
    }

    /// Stall and its reviews, fetched side by side. Fails if either request fails.
    pub async fn stall_details(&self, stall_id: &str) -> Result<(Stall, Vec<Review>), ApiError> {
        futures::try_join!(self.get_stall(stall_id), self.stall_reviews(stall_id))
    }

    pub async fn post_review(&self, stall_id: &str, comment: &str) -> Result<Review, ApiError> {
        let body = NewReview {
            stall_id: stall_id.to_string(),
            comment: comment.to_string(),
        };
        self.post_json("/reviews", &body).await
    }

    pub async fn post_rating(&self, rating: &Rating) -> Result<(), ApiError> {
        self.post_json::<_, IgnoredAny>("/ratings", rating)
            .await
            .map(|_| ())
    }

    pub async fn qr_code(&self, stall_id: &str) -> Result<QrCode, ApiError> {
        self.get_json(&format!("/qrcode/{}", urlencoding::encode(stall_id)))
            .await
    }

    pub async fn leaderboard(&self, city: &str, area: &str) -> Result<Vec<Stall>, ApiError> {
        let query = query_string(&[("city", city), ("area", area)]);
        self.get_json(&format!("/leaderboard{}", query)).await
    }

    pub async fn create_stall(&self, stall: &NewStall) -> Result<Stall, ApiError> {
        self.post_json("/stalls", stall).await
    }

    /// Uploads one image as multipart form data; the backend answers with a data URL.
    pub async fn upload_photo(&self, file: &web_sys::File) -> Result<UploadedPhoto, ApiError> {
        let url = self.url("/upload-photo");
        log!("[API] POST {} ({})", url, file.name());
        let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        let request = self
            .authorize(Request::post(&url))
            .body(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request.send().await?;
        read_json(&url, response).await
    }
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !response.ok() {
        error!("[API] {} returned {}", url, status);
        return Err(ApiError::from_status(status, &body));
    }
    decode_body(&body).map_err(|err| {
        error!("[API] could not decode response from {}: {}", url, err);
        err
    })
}

pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&AppConfig::with_backend("https://api.example.com"))
    }

    #[test]
    fn test_stall_query_omits_blank_filters() {
        assert_eq!(StallQuery::default().to_query_string(), "");
        let query = StallQuery {
            search: "pani puri".into(),
            city: "".into(),
            area: " Koramangala ".into(),
        };
        assert_eq!(
            query.to_query_string(),
            "?search=pani%20puri&area=Koramangala"
        );
    }

    #[test]
    fn test_query_string_encodes_reserved_characters() {
        assert_eq!(
            query_string(&[("city", "Delhi&NCR"), ("area", "a=b")]),
            "?city=Delhi%26NCR&area=a%3Db"
        );
    }

    #[test]
    fn test_client_urls_and_bearer() {
        let anonymous = client();
        assert_eq!(anonymous.url("/stalls"), "https://api.example.com/api/stalls");
        assert_eq!(anonymous.bearer(), None);

        let signed_in = client().with_token(Some("tok123".into()));
        assert_eq!(signed_in.bearer().as_deref(), Some("Bearer tok123"));

        let empty_token = client().with_token(Some(String::new()));
        assert_eq!(empty_token.bearer(), None);
    }

    #[test]
    fn test_status_error_keeps_backend_detail() {
        let err = ApiError::from_status(401, r#"{"detail": "Invalid credentials"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                detail: Some("Invalid credentials".into())
            }
        );
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_status_error_without_usable_detail() {
        let validation = ApiError::from_status(
            422,
            r#"{"detail": [{"loc": ["body", "email"], "msg": "invalid"}]}"#,
        );
        assert_eq!(validation.detail(), None);
        assert_eq!(validation.user_message("Registration failed"), "Registration failed");

        let html = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(html.user_message("Failed to fetch stalls"), "Failed to fetch stalls");

        let network = ApiError::Network("connection refused".into());
        assert_eq!(network.user_message("Failed to submit review"), "Failed to submit review");
    }

    #[test]
    fn test_decode_body() {
        let stalls: Vec<Stall> = decode_body(r#"[{"id": "s1", "name": "Dosa Corner"}]"#).unwrap();
        assert_eq!(stalls.len(), 1);

        let err = decode_body::<Vec<Stall>>(r#"{"id": "s1"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
