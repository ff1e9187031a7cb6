//! Conversions between action names and handler identifiers.
//!
//! Actions are named in kebab case on the command line (`validate-all`),
//! handlers are registered under `action` + CamelCase (`actionValidateAll`).
//! Dispatch and metadata generation both go through these two functions, so
//! they always agree on what an action is called.

/// Prefix shared by every handler identifier.
pub const HANDLER_PREFIX: &str = "action";

/// Convert an action name into its handler identifier.
///
/// Example: `validate-all` -> `actionValidateAll`
pub fn to_handler_name(action_name: &str) -> String {
    kebab_to_camel(&format!("{}-{}", HANDLER_PREFIX, action_name).to_lowercase())
}

/// Convert a handler identifier back into its action name.
///
/// Example: `actionValidateAll` -> `validate-all`
pub fn to_action_name(handler_name: &str) -> String {
    let rest = handler_name
        .strip_prefix(HANDLER_PREFIX)
        .unwrap_or(handler_name);
    // The separator survives only in front of a non-letter (`action-2fa`).
    let rest = rest.strip_prefix('-').unwrap_or(rest);

    let mut chars = rest.chars();
    let lowered = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect::<String>(),
        None => String::new(),
    };

    camel_to_kebab(&lowered)
}

/// Normalize a declared value type into one of the OCF content types.
///
/// `int`/`integer` -> `integer`, `bool`/`boolean` -> `boolean`,
/// everything else -> `string`.
pub fn to_ocf_type(declared: &str) -> &'static str {
    match declared.trim().to_ascii_lowercase().as_str() {
        "int" | "integer" => "integer",
        "bool" | "boolean" => "boolean",
        _ => "string",
    }
}

fn kebab_to_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-'
            && let Some(&next) = chars.peek()
            && next.is_alphabetic()
        {
            result.extend(next.to_uppercase());
            chars.next();
            continue;
        }
        result.push(c);
    }

    result
}

fn camel_to_kebab(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for c in s.chars() {
        if c.is_uppercase() {
            result.push('-');
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}
