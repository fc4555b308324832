use gloo_net::http::Request;
use gloo_net::Error as GlooError;
use serde::Serialize;
use wasm_bindgen::JsValue;
use crate::config;

/// Centralized API client: prefixes the backend URL and logs every call
pub struct Api;

/// Status and body of a finished request. Bodies are read as text so the
/// caller decides how to parse error responses.
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Request wrapper around gloo-net
pub struct RequestWrapper {
    request: Request,
    path: String,
    method: &'static str,
}

impl RequestWrapper {
    fn new(path: &str, method: &'static str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        };

        Self {
            request,
            path: path.to_string(),
            method,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set a raw body, e.g. multipart `FormData`. The browser picks the content type.
    pub fn body(mut self, body: impl Into<JsValue>) -> Self {
        self.request = self.request.body(body);
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, GlooError> {
        self.request = self.request.json(data)?;
        Ok(self)
    }

    pub async fn send(self) -> Result<RawResponse, GlooError> {
        gloo_console::log!(format!("{} {}", self.method, self.path));
        let response = match self.request.send().await {
            Ok(response) => response,
            Err(e) => {
                gloo_console::error!(format!("{} {} failed: {}", self.method, self.path, e));
                return Err(e);
            }
        };
        let status = response.status();
        if !response.ok() {
            gloo_console::warn!(format!("{} {} returned {}", self.method, self.path, status));
        }
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

impl Api {
    /// Create a GET request against the backend
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    /// Create a POST request against the backend
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}

/// Appends the `user_id` query parameter, URL-encoded.
pub fn with_user_id(path: &str, user_id: &str) -> String {
    format!("{}?user_id={}", path, urlencoding::encode(user_id))
}
