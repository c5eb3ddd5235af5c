//! Canned pages and model replies.

use serde_json::{json, Value};

pub const ACME_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Acme Co | Anvils Since 1949</title>
    <meta name="description" content="Premium anvils and desert hardware.">
    <script>window.analytics = {};</script>
</head>
<body>
    <nav><p>Home</p><p>Shop</p></nav>
    <div class="main-content">
        <h1>Acme Co</h1>
        <p>We forge anvils that survive any fall.</p>
        <p>Free shipping anywhere in the Southwest.</p>
    </div>
</body>
</html>"#;

/// A well-formed analysis object, as the model would return it.
pub fn acme_analysis() -> Value {
    json!({
        "business_intro": "Acme Co forges premium anvils for demanding customers.",
        "core_selling_points": [
            "Drop-tested durability",
            "Free regional shipping",
            "Family business since 1949",
            "Lifetime warranty",
            "Custom engraving"
        ],
        "core_audiences": [
            {"title": "Hunters", "description": "Outdoor hunters who need heavy gear."},
            {"title": "Blacksmiths", "description": "Craftspeople who work metal daily."},
            {"title": "Collectors", "description": "Enthusiasts of vintage hardware."}
        ]
    })
}

/// Chat completion envelope wrapping `content` as the assistant message.
pub fn chat_completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 812, "completion_tokens": 240, "total_tokens": 1052}
    })
    .to_string()
}
