//! Basic chat completion against an OpenAI-compatible endpoint

use openai_client::{ChatRequest, Message, OpenAIClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = OpenAIClient::from_env()?;

    println!("=== Chat Completion ===");
    let response = client
        .chat_completion(
            ChatRequest::new("gpt-4o")
                .message(Message::system("You are a helpful assistant."))
                .message(Message::user("What is Rust in one sentence?"))
                .temperature(0.7)
                .max_tokens(100),
        )
        .await?;

    println!("Response: {}", response.content);

    println!("\n=== JSON Mode ===");
    let response = client
        .chat_completion(
            ChatRequest::new("gpt-4o")
                .message(Message::user(
                    r#"Return {"language": "...", "year": ...} for Rust as JSON."#,
                ))
                .json_object(),
        )
        .await?;

    let value: serde_json::Value = serde_json::from_str(response.content.trim())?;
    println!("Parsed: {}", value);

    if let Some(usage) = response.usage {
        println!("Tokens used: {}", usage.total_tokens);
    }

    Ok(())
}
