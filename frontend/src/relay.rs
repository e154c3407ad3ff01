use gloo_net::http::{Method as HttpMethod, Request};

use crate::submission::{
    FormTransport, Method, RelayRequest, RelayResponse, TransportError, FORM_CONTENT_TYPE,
};

/// Browser `fetch` transport for the signup form.
pub struct FetchTransport;

impl FormTransport for FetchTransport {
    async fn send(&self, request: RelayRequest) -> Result<RelayResponse, TransportError> {
        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
        };
        let mut builder = Request::new(&request.url)
            .method(method)
            .header("Accept", "application/json");
        if let Some(body) = request.body {
            builder = builder.header("Content-Type", FORM_CONTENT_TYPE).body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        // The body only feeds the diagnostic log, so an unreadable one is just empty.
        let body = response.text().await.unwrap_or_default();
        Ok(RelayResponse { status, body })
    }
}
