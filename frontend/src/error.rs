#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClientError {
    Network(String),
    Server { status: u16, body: String },
    InvalidResponseShape(String),
    Encode(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Network(cause) => write!(w, "Request failed due to: {}", cause),
            ClientError::Server { status, body } => {
                write!(w, "Server responded with status {}: {}", status, body)
            }
            ClientError::InvalidResponseShape(cause) => {
                write!(w, "Unexpected response shape: {}", cause)
            }
            ClientError::Encode(cause) => write!(w, "Failed to encode request: {}", cause),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<gloo_net::Error> for ClientError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Network(e.to_string())
    }
}
