use oaiv1::chat::{Function, ParameterSchema, Tool, ToolChoice, json_schema_for};
use oaiv1::{ChatCompletionInput, Configuration, LlmError, Message, OpenAiApi, OpenAiClient};
use serde::Deserialize;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

#[derive(Debug, Deserialize, PartialEq, schemars::JsonSchema)]
struct FooArgs {
    foo: String,
    baz: i64,
}

impl ParameterSchema for FooArgs {
    fn parameter_schema() -> Value {
        json_schema_for::<FooArgs>()
    }
}

/// Hand-written schema, no schemars involved.
#[derive(Debug, Deserialize, PartialEq)]
struct Reminder {
    text: String,
    minutes: u32,
}

impl ParameterSchema for Reminder {
    fn parameter_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "text": {"type": "string"},
                "minutes": {"type": "integer", "minimum": 0}
            },
            "required": ["text", "minutes"]
        })
    }
}

fn create_client(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new(
        Configuration::new()
            .with_endpoint(server.uri())
            .with_api_key("sk-test")
            .with_organization("org-test"),
    )
    .expect("Failed to create client")
}

fn completion(message: Value) -> Value {
    json!({
        "id": "chatcmpl-42",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "choices": [{"index": 0, "message": message, "finish_reason": "tool_calls"}],
        "usage": {"prompt_tokens": 20, "completion_tokens": 10, "total_tokens": 30}
    })
}

#[tokio::test]
async fn test_tool_call_round_trip() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "tools": [{"type": "function", "function": {"name": "set_foo"}}],
            "tool_choice": {"type": "function", "function": {"name": "set_foo"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "role": "assistant",
            "content": null,
            "tool_calls": [{
                "id": "call_abc",
                "type": "function",
                "function": {"name": "set_foo", "arguments": "{\"foo\":\"bar\",\"baz\":3}"}
            }]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let input = ChatCompletionInput::new("gpt-4o-mini", vec![Message::user("Set foo to bar")])
        .with_tool(Function::for_type::<FooArgs>("set_foo", "Store foo and baz"))
        .with_tool_choice(ToolChoice::Function {
            name: "set_foo".to_string(),
        });

    let output = client.chat_completions(&input).await.unwrap();
    let args: FooArgs = output.parse_arguments("set_foo").unwrap();

    assert_eq!(
        args,
        FooArgs {
            foo: "bar".to_string(),
            baz: 3
        }
    );
}

#[tokio::test]
async fn test_tool_result_follows_assistant_tool_turn() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "role": "assistant",
            "content": null,
            "tool_calls": [{
                "id": "call_abc",
                "type": "function",
                "function": {"name": "set_foo", "arguments": "{\"foo\":\"bar\",\"baz\":3}"}
            }]
        }))))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "user", "content": "Set foo to bar"},
                {
                    "role": "assistant",
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {"name": "set_foo", "arguments": "{\"foo\":\"bar\",\"baz\":3}"}
                    }]
                },
                {"role": "tool", "tool_call_id": "call_abc", "content": "stored"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "role": "assistant",
            "content": "Done, foo is bar."
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let mut messages = vec![Message::user("Set foo to bar")];
    let input = ChatCompletionInput::new("gpt-4o-mini", messages.clone())
        .with_tool(Function::for_type::<FooArgs>("set_foo", "Store foo and baz"));
    let first = client.chat_completions(&input).await.unwrap();

    let call_id = first.tool_call_lists().next().unwrap()[0].id.clone();
    messages.push(Message::from(first.choices[0].message.clone()));
    messages.push(Message::tool(call_id, "stored"));

    let input = ChatCompletionInput::new("gpt-4o-mini", messages)
        .with_tool(Function::for_type::<FooArgs>("set_foo", "Store foo and baz"));
    let second = client.chat_completions(&input).await.unwrap();

    assert_eq!(second.content(), Some("Done, foo is bar."));
}

#[tokio::test]
async fn test_legacy_function_call_round_trip() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "functions": [{
                "name": "remind",
                "parameters": {"required": ["text", "minutes"]}
            }],
            "function_call": {"name": "remind"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "role": "assistant",
            "content": null,
            "function_call": {"name": "remind", "arguments": "{\"text\":\"stretch\",\"minutes\":30}"}
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let input = ChatCompletionInput::new("gpt-4o-mini", vec![Message::user("Remind me")])
        .with_function(Function::for_type::<Reminder>("remind", "Schedule a reminder"))
        .with_function_call(json!({"name": "remind"}));

    let output = client.chat_completions(&input).await.unwrap();
    let reminder: Reminder = output.parse_arguments("remind").unwrap();
    assert_eq!(reminder.text, "stretch");
    assert_eq!(reminder.minutes, 30);
}

#[tokio::test]
async fn test_non_matching_legacy_call_hides_matching_tool_call() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    let body = json!({
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "function_call": {"name": "something_else", "arguments": "{}"}
                }
            },
            {
                "index": 1,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {"name": "set_foo", "arguments": "{\"foo\":\"bar\",\"baz\":3}"}
                    }]
                }
            }
        ]
    });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let input = ChatCompletionInput::new("gpt-4o-mini", vec![Message::user("Set foo")])
        .with_tool(Tool::function(Function::for_type::<FooArgs>(
            "set_foo",
            "Store foo and baz",
        )));
    let output = client.chat_completions(&input).await.unwrap();

    match output.parse_arguments::<FooArgs>("set_foo") {
        Err(LlmError::FunctionNotFound { name }) => assert_eq!(name, "set_foo"),
        other => panic!("Expected FunctionNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_reply_has_no_arguments() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "role": "assistant",
            "content": "I would rather not call anything."
        }))))
        .mount(&server)
        .await;

    let input = ChatCompletionInput::new("gpt-4o-mini", vec![Message::user("Hi")]);
    let output = client.chat_completions(&input).await.unwrap();

    assert_eq!(output.content(), Some("I would rather not call anything."));
    assert!(matches!(
        output.parse_arguments::<FooArgs>("set_foo"),
        Err(LlmError::FunctionNotFound { .. })
    ));
}
