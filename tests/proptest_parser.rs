// Property-based tests for classification and drain order

use payload_dispatch::{Payload, PayloadBuffer, parse};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.!-]{1,16}"
}

fn content() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?]{0,40}"
}

proptest! {
    #[test]
    fn login_yields_both_tokens(user in token(), pass in token()) {
        let parsed = parse(&format!("/login {} {}", user, pass));
        prop_assert_eq!(parsed, Ok(Payload::LoginCommand { username: user, password: pass }));
    }

    #[test]
    fn direct_message_splits_after_recipient(recipient in token(), body in content()) {
        let parsed = parse(&format!("@{} {}", recipient, body));
        prop_assert_eq!(parsed, Ok(Payload::DirectMessage { recipient, content: body }));
    }

    #[test]
    fn group_message_splits_after_channel(channel in token(), body in content()) {
        let parsed = parse(&format!("#{} {}", channel, body));
        prop_assert_eq!(parsed, Ok(Payload::GroupMessage { channel, content: body }));
    }

    #[test]
    fn unmarked_lines_are_global(line in "[^/@#\\n][^\\n]{0,60}") {
        let parsed = parse(&line);
        prop_assert_eq!(parsed, Ok(Payload::GlobalMessage { content: line }));
    }

    #[test]
    fn parse_never_panics(line in "[^\\n]{0,80}") {
        let _ = parse(&line);
    }

    #[test]
    fn buffer_drains_in_insertion_order(lines in prop::collection::vec("[a-z ]{1,20}", 0..32)) {
        let mut buffer = PayloadBuffer::new();
        for line in &lines {
            buffer.append(Payload::GlobalMessage { content: line.clone() });
        }
        for line in &lines {
            let expected = Payload::GlobalMessage { content: line.clone() };
            prop_assert_eq!(buffer.take_next(), &expected);
        }
        prop_assert_eq!(buffer.pending(), 0);
        prop_assert_eq!(buffer.destroy(), lines.len());
    }
}
