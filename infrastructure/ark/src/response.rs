use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
enum ShapeError {
    #[error("`choices[0]` is not an object")]
    ChoiceNotObject,
    #[error("`choices[0].message` is not an object")]
    MessageNotObject,
}

/// Pulls the model's answer text out of a response body.
///
/// Tries, in order: `output` (string, `{text}` or `[{text}, ..]`),
/// `choices[0].message.content`, a top-level `content`, and finally the whole
/// body rendered as JSON. A `choices` that is not a non-empty list is skipped.
/// Never fails: a first choice with the wrong shape yields a `解析响应失败: ...`
/// diagnostic as the text.
pub fn extract_text(body: &Value) -> String {
    match try_extract(body) {
        Ok(text) => text,
        Err(err) => format!("解析响应失败: {}", err),
    }
}

fn try_extract(body: &Value) -> Result<String, ShapeError> {
    let Some(fields) = body.as_object() else {
        return Ok(body.to_string());
    };

    if let Some(text) = fields.get("output").and_then(output_text) {
        return Ok(text);
    }

    if let Some(first) = fields
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
    {
        return first_choice_text(first);
    }

    if let Some(content) = fields.get("content") {
        return Ok(as_text(content));
    }

    Ok(body.to_string())
}

fn output_text(output: &Value) -> Option<String> {
    match output {
        Value::String(text) => Some(text.clone()),
        Value::Object(fields) => fields.get("text").map(as_text),
        Value::Array(items) => items
            .first()
            .and_then(Value::as_object)
            .and_then(|first| first.get("text"))
            .map(as_text),
        _ => None,
    }
}

fn first_choice_text(choice: &Value) -> Result<String, ShapeError> {
    let choice = choice.as_object().ok_or(ShapeError::ChoiceNotObject)?;
    let empty = Map::new();
    let message = match choice.get("message") {
        None => &empty,
        Some(message) => message.as_object().ok_or(ShapeError::MessageNotObject)?,
    };

    Ok(message.get("content").map(as_text).unwrap_or_default())
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
