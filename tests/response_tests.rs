use todo_digest::slack::format_summary_message;
use todo_digest::slack::response_builder::create_webhook_payload;

#[test]
fn test_webhook_payload_has_only_text() {
    let payload = create_webhook_payload("Hello team");

    assert_eq!(payload, serde_json::json!({ "text": "Hello team" }));
}

#[test]
fn test_summary_message_header() {
    let message = format_summary_message("Buy milk, then call Alice.");

    assert_eq!(message, "Todo Summary:\nBuy milk, then call Alice.");
    assert!(message.starts_with("Todo Summary:"));
}

#[test]
fn test_summary_message_keeps_multiline_summary() {
    let summary = "- Buy milk\n- Call Alice";
    let payload = create_webhook_payload(&format_summary_message(summary));

    let text = payload["text"].as_str().unwrap();
    assert!(text.ends_with(summary));
}
