// Placeholder form id shipped in the page template. Submissions are refused until it is replaced.
pub const FORM_ID_PLACEHOLDER: &str = "YOUR_FORM_ID";

pub fn get_form_endpoint() -> &'static str {
    option_env!("FORM_ENDPOINT").unwrap_or("https://formspree.io/f/YOUR_FORM_ID")
}

pub fn get_form_method() -> &'static str {
    option_env!("FORM_METHOD").unwrap_or("POST")
}

#[cfg(debug_assertions)]
pub fn get_redirect_url() -> &'static str {
    option_env!("REDIRECT_URL").unwrap_or("http://localhost:8080/#signup")
}

#[cfg(not(debug_assertions))]
pub fn get_redirect_url() -> &'static str {
    option_env!("REDIRECT_URL").unwrap_or("https://example.com/invite")
}
