/// Backend host used when `BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Catalog item sold through the hosted payment widget.
pub const DEFAULT_PADDLE_PRICE_ID: &str = "pri_01kgrhp2wrthebpgwmn8eh5ssy";

/// localStorage key holding the anonymous client identifier.
pub const USER_ID_STORAGE_KEY: &str = "user_id";

pub const QUICK_CLAUSE_MAX_CHARS: usize = 300;

pub const FULL_ACCESS_PRICE: &str = "$9.90";

pub const SUPPORT_EMAIL: &str = "support@qiyoga.vip";

pub fn get_backend_url() -> String {
    option_env!("BACKEND_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Client-side token for Paddle.js. The hosted widget stays disabled without it.
pub fn paddle_client_token() -> Option<&'static str> {
    option_env!("PADDLE_CLIENT_TOKEN").filter(|token| !token.trim().is_empty())
}

pub fn paddle_price_id() -> &'static str {
    option_env!("PADDLE_PRICE_ID")
        .filter(|id| !id.trim().is_empty())
        .unwrap_or(DEFAULT_PADDLE_PRICE_ID)
}
