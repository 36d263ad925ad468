//! Transport layer: wire-format details (query encoding and body decoding).

mod check_balance;
mod money;
mod send_message;

pub use check_balance::{CHECK_BALANCE_PATH, decode_check_balance_response};
pub use send_message::{
    SEND_MESSAGE_PATH, decode_send_message_response, encode_send_message_query,
};
