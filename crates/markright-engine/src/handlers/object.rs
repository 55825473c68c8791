use serde_json::{Map, Number, Value as Json};

use crate::{
    error::WalkError,
    model::Document,
    walk::{HandlerMap, Value, walk},
};

type Object = Map<String, Json>;

/// Maps a document onto nested JSON objects.
///
/// ```text
/// @person
///   @name{Ada} @born(int){1815}
///   @retired
/// ```
///
/// becomes `{"person": {"name": "Ada", "born": 1815, "retired": true}}`.
///
/// - a block element is an object keyed by its name, holding its children
///   merged together, or its text if raw
/// - an inline element holds its converted text, `true` when it has no body,
///   or its nested elements merged
/// - the first argument picks the conversion: `int`, `double`, `bool`, or
///   text otherwise
/// - a key that appears more than once collects its values in an array
/// - text outside any element (other than whitespace) is an error
pub fn object_handlers() -> HandlerMap<Json> {
    HandlerMap::new()
        .generic_block(|name, _args, children| {
            let inner = match children {
                Value::Str(raw) => Json::String(raw),
                other => Json::Object(merge(name, vec![other])?),
            };
            Ok(Value::Custom(single(name, inner)))
        })
        .generic_inline(|name, args, children| {
            let kind = args.and_then(<[String]>::first).map(String::as_str);
            let inner = inline_value(name, kind, children)?;
            Ok(Value::Custom(single(name, inner)))
        })
        .paragraph(|items| Ok(Value::Custom(Json::Object(merge("paragraph", items)?))))
}

/// Walks `doc` with [`object_handlers`] and merges the top-level results.
pub fn extract_object(doc: &Document) -> Result<Json, WalkError> {
    let walked = walk(doc, &object_handlers())?;
    Ok(Json::Object(merge("document", vec![walked])?))
}

fn single(name: &str, value: Json) -> Json {
    let mut object = Object::new();
    object.insert(name.to_string(), value);
    Json::Object(object)
}

fn inline_value(name: &str, kind: Option<&str>, children: Value<Json>) -> Result<Json, WalkError> {
    let items = match children {
        Value::Str(raw) if raw.is_empty() => return Ok(Json::Bool(true)),
        Value::Str(raw) => return convert(name, kind, &raw),
        Value::List(items) => items,
        other => vec![other],
    };
    if items.is_empty() {
        return Ok(Json::Bool(true));
    }
    if items.iter().any(|item| matches!(item, Value::Custom(_))) {
        return Ok(Json::Object(merge(name, items)?));
    }
    convert(name, kind, &Value::List(items).text())
}

fn convert(name: &str, kind: Option<&str>, text: &str) -> Result<Json, WalkError> {
    let text = text.trim();
    match kind {
        Some("int") => text
            .parse::<i64>()
            .map(Json::from)
            .map_err(|_| WalkError::handler(name, format!("not an integer: '{text}'"))),
        Some("double") => text
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Json::Number)
            .ok_or_else(|| WalkError::handler(name, format!("not a number: '{text}'"))),
        Some("bool") => match text {
            "true" => Ok(Json::Bool(true)),
            "false" => Ok(Json::Bool(false)),
            _ => Err(WalkError::handler(
                name,
                format!("bool can only be 'true' or 'false', got '{text}'"),
            )),
        },
        _ => Ok(Json::String(text.to_string())),
    }
}

/// Merges walked values into one object. Whitespace is ignored.
fn merge(context: &str, values: Vec<Value<Json>>) -> Result<Object, WalkError> {
    let mut out = Object::new();
    for value in values {
        merge_into(context, &mut out, value)?;
    }
    Ok(out)
}

fn merge_into(context: &str, out: &mut Object, value: Value<Json>) -> Result<(), WalkError> {
    match value {
        Value::Custom(Json::Object(object)) => {
            for (key, value) in object {
                insert(out, key, value);
            }
            Ok(())
        }
        Value::List(items) => items
            .into_iter()
            .try_for_each(|item| merge_into(context, out, item)),
        Value::Str(s) if s.trim().is_empty() => Ok(()),
        other => Err(WalkError::handler(
            context,
            format!("unexpected content outside an element: '{}'", other.text().trim()),
        )),
    }
}

fn insert(out: &mut Object, key: String, value: Json) {
    match out.get_mut(&key) {
        None => {
            out.insert(key, value);
        }
        Some(Json::Array(values)) => values.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Json::Array(vec![first, value]);
        }
    }
}
