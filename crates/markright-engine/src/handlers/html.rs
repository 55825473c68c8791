use crate::{
    error::WalkError,
    model::Document,
    walk::{HandlerMap, Value, walk},
};

/// Maps elements to tags of the same name.
///
/// Block elements put their children on separate lines between the opening
/// and closing tags; inline elements keep everything on one line. Arguments
/// are written into the opening tag, separated by spaces, so `@a(href="x")`
/// becomes `<a href="x">`. Text is escaped; raw bodies are copied as they are.
pub fn html_handlers() -> HandlerMap<()> {
    HandlerMap::new()
        .text(|text| Ok(Value::Str(html_escape::encode_text(text).into_owned())))
        .generic_block(|name, args, children| {
            Ok(Value::Str(format!(
                "{}\n{}\n</{name}>",
                open_tag(name, args),
                children.join("\n")
            )))
        })
        .generic_inline(|name, args, children| {
            Ok(Value::Str(format!(
                "{}{}</{name}>",
                open_tag(name, args),
                children.text()
            )))
        })
}

fn open_tag(name: &str, args: Option<&[String]>) -> String {
    match args {
        Some(args) if !args.is_empty() => format!("<{name} {}>", args.join(" ")),
        _ => format!("<{name}>"),
    }
}

/// Renders a document with [`html_handlers`], one top-level item per line.
pub fn render_html(doc: &Document) -> Result<String, WalkError> {
    Ok(walk(doc, &html_handlers())?.join("\n"))
}
