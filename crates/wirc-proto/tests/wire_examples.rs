//! Wire examples from real servers, exercised through the public API.

use std::cell::RefCell;

use wirc_proto::{parse, serialize, FrameSplitter, Message, ParseError, RawSender, TagValue};

#[derive(Default)]
struct Outbox(RefCell<Vec<String>>);

impl RawSender for Outbox {
    fn send_raw(&self, line: &str) {
        self.0.borrow_mut().push(line.to_owned());
    }
}

fn collect(payload: &str) -> (Vec<Message>, Vec<String>) {
    let outbox = Outbox::default();
    let mut splitter = FrameSplitter::new(&outbox);
    let mut seen = Vec::new();
    splitter.on_batch(payload, &mut |m: &Message| seen.push(m.clone()));
    (seen, outbox.0.into_inner())
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_bare_ping() {
    let msg = parse("PING").unwrap();
    assert_eq!(msg.command, "PING");
    assert!(msg.middle().is_empty());
    assert!(msg.trailing().is_none());

    let (seen, sent) = collect("PING\r\n");
    assert_eq!(seen.len(), 1);
    assert!(sent.is_empty(), "no token, no reply");
}

#[test]
fn test_welcome_numeric() {
    let msg = parse(":irc.example.com 001 nick :Welcome").unwrap();
    assert_eq!(msg.prefix.as_deref(), Some("irc.example.com"));
    assert_eq!(msg.command, "001");
    assert_eq!(msg.middle(), ["nick"]);
    assert_eq!(msg.trailing(), Some("Welcome"));
}

#[test]
fn test_tagged_privmsg() {
    let msg = parse("@badge=1;vip PRIVMSG #chan :hi").unwrap();
    assert_eq!(msg.tag("badge"), Some(&TagValue::Text("1".to_string())));
    assert_eq!(msg.tag("vip"), Some(&TagValue::Flag));
    assert_eq!(msg.command, "PRIVMSG");
    assert_eq!(msg.middle(), ["#chan"]);
    assert_eq!(msg.trailing(), Some("hi"));
}

#[test]
fn test_twitch_privmsg() {
    let raw = "@badge-info=;badges=broadcaster/1;color=#0000FF;display-name=Ronni;emotes=;\
               first-msg=0;id=b34ccfc7-4977-403a-8a94-33c6bac34fb8;mod=0;room-id=1337;\
               tmi-sent-ts=1507246572675;user-id=1337 \
               :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #ronni :Kappa Keepo Kappa";
    let msg = parse(raw).unwrap();

    assert_eq!(msg.tag_text("display-name"), Some("Ronni"));
    assert_eq!(msg.tag_text("badge-info"), Some(""));
    assert_eq!(msg.tag_text("color"), Some("#0000FF"));
    assert_eq!(msg.source_nickname(), Some("ronni"));
    assert_eq!(msg.middle(), ["#ronni"]);
    assert_eq!(msg.trailing(), Some("Kappa Keepo Kappa"));
}

#[test]
fn test_cap_ack() {
    let msg = parse(":tmi.twitch.tv CAP * ACK :twitch.tv/tags twitch.tv/commands").unwrap();
    assert_eq!(msg.middle(), ["*", "ACK"]);
    assert_eq!(msg.trailing(), Some("twitch.tv/tags twitch.tv/commands"));
}

#[test]
fn test_hostile_inputs_fail_cleanly() {
    let inputs = [
        "", " ", "   ", "@", "@ ", ":", ": ", "@;", "@a", ":a", "@a :b", "\r", "\r\n", "\n",
        "@=;=; ", ":: ", "1", "12345", "PRIV MSG", "\u{0}", "@a=\u{fffd} :\u{fffd}",
    ];

    for input in inputs {
        // Must return, never panic.
        let _ = parse(input);
    }

    assert_eq!(parse(" "), Err(ParseError::EmptyMessage));
    assert_eq!(parse("@ "), Err(ParseError::MissingCommand));
    assert_eq!(parse(": "), Err(ParseError::MissingCommand));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_serialize_then_parse() {
    let msg = Message::new("PRIVMSG")
        .with_tag("reply-parent-msg-id", "abc-123")
        .with_tag("first-msg", None::<&str>)
        .with_prefix("bot!bot@bot.tmi.twitch.tv")
        .with_param("#chan")
        .with_trailing("hello there :)");

    let line = serialize(&msg);
    let parsed = parse(&line).unwrap();

    assert_eq!(parsed.tags, msg.tags);
    assert_eq!(parsed.prefix, msg.prefix);
    assert_eq!(parsed.command, msg.command);
    assert_eq!(parsed.params, msg.params);
}

#[test]
fn test_parsed_message_echoes_raw() {
    let line = "@b=2;a=1 PRIVMSG  #chan :hi";
    let msg = parse(line).unwrap();

    // Stored raw wins over reconstruction, spacing and tag order included.
    assert_eq!(serialize(&msg), line);
    assert_eq!(serialize(&msg.without_raw()), "@a=1;b=2 PRIVMSG #chan :hi");
}

// =============================================================================
// Framing
// =============================================================================

#[test]
fn test_ping_reply() {
    let (seen, sent) = collect("PING :abc123\r\n");
    assert_eq!(sent, ["PONG :abc123"]);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].trailing(), Some("abc123"));
}

#[test]
fn test_bad_line_in_batch() {
    let (seen, sent) = collect("A\r\nBADLINE@\r\nB\r\n");
    let commands: Vec<_> = seen.iter().map(|m| m.command.as_str()).collect();
    assert_eq!(commands, ["A", "B"]);
    assert!(sent.is_empty());
}

#[test]
fn test_twitch_batch() {
    let batch = ":tmi.twitch.tv 001 me :Welcome, GLHF!\r\n\
                 :tmi.twitch.tv 002 me :Your host is tmi.twitch.tv\r\n\
                 :tmi.twitch.tv 376 me :>\r\n\
                 PING :tmi.twitch.tv\r\n\
                 :me!me@me.tmi.twitch.tv JOIN #me\r\n";
    let (seen, sent) = collect(batch);

    let commands: Vec<_> = seen.iter().map(|m| m.command.as_str()).collect();
    assert_eq!(commands, ["001", "002", "376", "PING", "JOIN"]);
    assert_eq!(sent, ["PONG :tmi.twitch.tv"]);
}
