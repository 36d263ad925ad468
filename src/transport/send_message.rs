use crate::domain::{Outcome, SendMessage, StatusCode};

pub const SEND_MESSAGE_PATH: &str = "/message-via-url/create/url-campaign";

pub fn encode_send_message_query(request: &SendMessage) -> Vec<(String, String)> {
    let mut params = vec![
        (
            SendMessage::LIST_FIELD.to_owned(),
            request.numbers().join(","),
        ),
        (
            SendMessage::SOURCE_ADDRESS_FIELD.to_owned(),
            request.source_address().to_owned(),
        ),
        (
            SendMessage::MESSAGE_FIELD.to_owned(),
            request.message().to_owned(),
        ),
    ];
    if let Some(url) = request.notification_url() {
        params.push((
            SendMessage::PUSH_NOTIFICATION_URL_FIELD.to_owned(),
            url.to_owned(),
        ));
    }
    params
}

/// Decode the bare status token returned by the campaign endpoint.
///
/// The whole trimmed body is the status code. Unknown codes keep the code in
/// the message (`Unknown response: <code>`).
pub fn decode_send_message_response(body: &[u8]) -> Outcome {
    let raw = String::from_utf8_lossy(body).into_owned();
    let code = StatusCode::new(raw.trim());
    let message = match code.known() {
        Some(known) => known.message().to_owned(),
        None => format!("Unknown response: {code}"),
    };

    Outcome {
        ok: code.is_success(),
        code,
        message,
        raw: Some(raw),
        payload: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_joins_numbers_and_omits_missing_callback() {
        let request = SendMessage::new(["0771234567", "0777654321"], "Hello World", "TEST");
        let params = encode_send_message_query(&request);
        assert_eq!(
            params,
            vec![
                ("list".to_owned(), "0771234567,0777654321".to_owned()),
                ("source_address".to_owned(), "TEST".to_owned()),
                ("message".to_owned(), "Hello World".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_appends_push_notification_url() {
        let request = SendMessage::new(["0771234567"], "Hello World", "TEST")
            .push_notification_url("https://example.com/callback");
        let params = encode_send_message_query(&request);
        assert_eq!(
            params.last(),
            Some(&(
                "push_notification_url".to_owned(),
                "https://example.com/callback".to_owned()
            ))
        );
    }

    #[test]
    fn encode_empty_number_list_is_sent_as_empty_string() {
        let request = SendMessage::new(Vec::<String>::new(), "Hello", "TEST");
        let params = encode_send_message_query(&request);
        assert_eq!(params[0], ("list".to_owned(), String::new()));
    }

    #[test]
    fn decode_success_code() {
        let outcome = decode_send_message_response(b"1");
        assert_eq!(outcome.code, StatusCode::new("1"));
        assert!(outcome.ok);
        assert_eq!(outcome.message, "Success");
        assert_eq!(outcome.raw.as_deref(), Some("1"));
        assert_eq!(outcome.payload, None);
    }

    #[test]
    fn decode_trims_surrounding_whitespace() {
        let outcome = decode_send_message_response(b" 2008\r\n");
        assert_eq!(outcome.code.as_str(), "2008");
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Insufficient balance or package quota");
        assert_eq!(outcome.raw.as_deref(), Some(" 2008\r\n"));
    }

    #[test]
    fn decode_known_failure_code() {
        let outcome = decode_send_message_response(b"2002");
        assert_eq!(outcome.code.as_str(), "2002");
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Bad request");
    }

    #[test]
    fn decode_unknown_code_echoes_it_in_message() {
        let outcome = decode_send_message_response(b"9999");
        assert_eq!(outcome.code.as_str(), "9999");
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Unknown response: 9999");
    }

    #[test]
    fn decode_empty_body_is_unknown_empty_code() {
        let outcome = decode_send_message_response(b"");
        assert_eq!(outcome.code.as_str(), "");
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Unknown response: ");
    }
}
