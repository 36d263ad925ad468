/// A bulk SMS campaign submitted through `message-via-url/create/url-campaign`.
///
/// Numbers, text and source address are passed to the gateway as provided; the
/// gateway reports malformed input through its own status codes (`2003`–`2005`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    numbers: Vec<String>,
    message: String,
    source_address: String,
    push_notification_url: Option<String>,
}

impl SendMessage {
    /// Query parameter carrying the comma-separated number list.
    pub const LIST_FIELD: &'static str = "list";
    /// Query parameter carrying the sender mask.
    pub const SOURCE_ADDRESS_FIELD: &'static str = "source_address";
    /// Query parameter carrying the message text.
    pub const MESSAGE_FIELD: &'static str = "message";
    /// Query parameter carrying the delivery-report callback URL.
    pub const PUSH_NOTIFICATION_URL_FIELD: &'static str = "push_notification_url";

    pub fn new<I, S>(
        numbers: I,
        message: impl Into<String>,
        source_address: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            numbers: numbers.into_iter().map(Into::into).collect(),
            message: message.into(),
            source_address: source_address.into(),
            push_notification_url: None,
        }
    }

    /// Ask the gateway to report delivery status to `url`.
    pub fn push_notification_url(mut self, url: impl Into<String>) -> Self {
        self.push_notification_url = Some(url.into());
        self
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_address(&self) -> &str {
        &self.source_address
    }

    pub fn notification_url(&self) -> Option<&str> {
        self.push_notification_url.as_deref()
    }
}
