use crate::traits::HttpMethod;

#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) method: HttpMethod,
    pub(crate) url: String,
    pub(crate) headers: Option<Vec<(String, String)>>,
}

pub struct RequestBuilder {
    request: Request,
}

impl Default for Request {
    fn default() -> Self {
        Request {
            method: HttpMethod::GET,
            url: Default::default(),
            headers: None,
        }
    }
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        self.headers.as_deref().unwrap_or_default()
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            request: Request::default(),
        }
    }

    pub fn set_method(mut self, method: HttpMethod) -> Self {
        self.request.method = method;

        self
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.request.url = url.into();

        self
    }

    pub fn set_headers(mut self, headers: &[(String, String)]) -> Self {
        self.request.headers = Some(headers.to_vec());

        self
    }

    pub fn build(self) -> Request {
        self.request
    }
}
