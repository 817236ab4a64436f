use panelsmith_core::{AspectRatio, ChunkPart, JobDefinition};
use panelsmith_error::{GeminiErrorKind, PanelsmithErrorKind};
use panelsmith_models::{SseDecoder, parse_stream_event, request_from_job};

fn gemini_kind(err: &panelsmith_error::PanelsmithError) -> &GeminiErrorKind {
    match err.kind() {
        PanelsmithErrorKind::Gemini(e) => &e.kind,
        other => panic!("Expected Gemini error, got {}", other),
    }
}

#[test]
fn test_request_body_matches_wire_format() {
    let job = JobDefinition::builder()
        .name("panel_4_hotfix_strike")
        .prompt("Dynamic action shot.")
        .aspect_ratio(AspectRatio::Widescreen)
        .build()
        .expect("Valid job");

    let body = request_from_job(&job).expect("Request builds");
    let json = serde_json::to_value(&body).expect("Serializes");

    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["contents"][0]["parts"][0]["text"], "Dynamic action shot.");

    let config = &json["generationConfig"];
    assert_eq!(config["temperature"], 1.0);
    assert_eq!(config["maxOutputTokens"], 32768);
    assert_eq!(config["responseModalities"], serde_json::json!(["TEXT", "IMAGE"]));
    assert_eq!(config["imageConfig"]["aspectRatio"], "16:9");
    assert!(config["topP"].as_f64().is_some());

    let safety = json["safetySettings"].as_array().expect("Safety array");
    assert_eq!(safety.len(), 4);
    assert!(safety.iter().all(|s| s["threshold"] == "OFF"));
    assert!(
        safety
            .iter()
            .any(|s| s["category"] == "HARM_CATEGORY_DANGEROUS_CONTENT")
    );
}

#[test]
fn test_text_event_becomes_text_chunk() {
    let chunk = parse_stream_event(
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Nubus descends."}]}}]}"#,
    )
    .expect("Valid event");

    assert_eq!(chunk.text().as_deref(), Some("Nubus descends."));
    assert_eq!(chunk.images().count(), 0);
}

#[test]
fn test_inline_data_is_base64_decoded() {
    // "iVBORw==" is the base64 of the PNG signature prefix 0x89 'P' 'N' 'G'
    let chunk = parse_stream_event(
        r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/png","data":"iVBORw=="}}]},"finishReason":"STOP"}]}"#,
    )
    .expect("Valid event");

    let images: Vec<_> = chunk.images().collect();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].mime_type(), "image/png");
    assert_eq!(images[0].data(), &vec![0x89, b'P', b'N', b'G']);
    assert_eq!(chunk.finish_reason().as_deref(), Some("STOP"));
}

#[test]
fn test_mixed_parts_keep_order_and_skip_thoughts() {
    let chunk = parse_stream_event(
        r#"{"candidates":[{"content":{"parts":[
            {"text":"planning the shot","thought":true},
            {"text":"The uplink opens."},
            {"inlineData":{"mimeType":"image/png","data":"AQID"}}
        ]}}]}"#,
    )
    .expect("Valid event");

    assert_eq!(chunk.parts().len(), 2);
    assert!(matches!(&chunk.parts()[0], ChunkPart::Text(t) if t == "The uplink opens."));
    assert!(matches!(&chunk.parts()[1], ChunkPart::Image(i) if i.data() == &vec![1, 2, 3]));
}

#[test]
fn test_event_without_candidates_is_empty_chunk() {
    let chunk = parse_stream_event(r#"{"usageMetadata":{"totalTokenCount":12}}"#)
        .expect("Valid event");
    assert!(chunk.is_empty());
}

#[test]
fn test_usage_and_model_version_do_not_change_chunk() {
    let chunk = parse_stream_event(
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Done."}]},"finishReason":"STOP"}],
            "usageMetadata":{"promptTokenCount":40,"candidatesTokenCount":1290,"totalTokenCount":1330},
            "modelVersion":"gemini-3-pro-image-preview"}"#,
    )
    .expect("Valid event");
    assert_eq!(chunk.text().as_deref(), Some("Done."));
    assert_eq!(chunk.finish_reason().as_deref(), Some("STOP"));
}

#[test]
fn test_blocked_prompt_is_an_error() {
    let err = parse_stream_event(r#"{"promptFeedback":{"blockReason":"PROHIBITED_CONTENT"}}"#)
        .expect_err("Blocked prompt");
    assert_eq!(
        gemini_kind(&err),
        &GeminiErrorKind::PromptBlocked("PROHIBITED_CONTENT".to_string())
    );
}

#[test]
fn test_bad_base64_is_an_error() {
    let err = parse_stream_event(
        r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/png","data":"!!!"}}]}}]}"#,
    )
    .expect_err("Invalid base64");
    assert!(matches!(gemini_kind(&err), GeminiErrorKind::Base64Decode(_)));
}

#[test]
fn test_malformed_json_is_invalid_server_message() {
    let err = parse_stream_event("{not json").expect_err("Malformed");
    assert!(matches!(
        gemini_kind(&err),
        GeminiErrorKind::InvalidServerMessage(_)
    ));
}

#[test]
fn test_sse_events_split_across_reads() {
    let mut decoder = SseDecoder::new();

    assert!(decoder.push(b"data: {\"candidates\":").is_empty());
    assert!(decoder.push(b"[]}\n").is_empty());
    let events = decoder.push(b"\ndata: second\n\n: keep-alive\n\ndata: third");

    assert_eq!(events, vec!["{\"candidates\":[]}".to_string(), "second".to_string()]);
    assert_eq!(decoder.finish(), Some("third".to_string()));
    assert_eq!(decoder.finish(), None);
}

#[test]
fn test_sse_crlf_and_multiline_data() {
    let mut decoder = SseDecoder::new();
    let events = decoder.push(b"event: message\r\ndata: line one\r\ndata: line two\r\n\r\n");
    assert_eq!(events, vec!["line one\nline two".to_string()]);
}

#[test]
fn test_sse_utf8_split_inside_character() {
    let payload = "data: Nubus \u{2601}\n\n".as_bytes();
    let split = payload.len() - 4;

    let mut decoder = SseDecoder::new();
    assert!(decoder.push(&payload[..split]).is_empty());
    assert_eq!(decoder.push(&payload[split..]), vec!["Nubus \u{2601}".to_string()]);
}

#[test]
fn test_sse_large_event_fed_byte_by_byte() {
    let data = "QUJD".repeat(64 * 1024);
    let wire = format!("data: {}\r\n\r\ndata: next\n\n", data);

    let mut decoder = SseDecoder::new();
    let mut events = Vec::new();
    for byte in wire.as_bytes() {
        events.extend(decoder.push(std::slice::from_ref(byte)));
    }

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].len(), data.len());
    assert_eq!(events[0], data);
    assert_eq!(events[1], "next");
    assert_eq!(decoder.finish(), None);
}
