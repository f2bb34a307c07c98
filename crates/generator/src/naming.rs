//! Rust names and types for catalog entries

use cloud_bindings_common::FieldType;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "yield",
];

/// Convert a PascalCase wire name to snake_case.
///
/// Acronyms stay together (`SourceURI` -> `source_uri`), including their
/// plural form (`URIs` -> `uris`).
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let after_next = chars.get(i + 2).copied();
            let acronym_plural =
                next == Some('s') && after_next.map_or(true, |a| a.is_uppercase());
            let starts_word = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase())
                    && !acronym_plural);
            if starts_word {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// snake_case name usable as a field or method identifier
pub fn rust_ident(name: &str) -> String {
    let snake = snake_case(name);
    if KEYWORDS.contains(&snake.as_str()) {
        format!("r#{}", snake)
    } else {
        snake
    }
}

/// The Rust type a catalog field is declared as
pub fn rust_type(field_type: &FieldType) -> String {
    match field_type {
        FieldType::String => "String".to_string(),
        FieldType::Integer => "i64".to_string(),
        FieldType::Float => "f64".to_string(),
        FieldType::Boolean => "bool".to_string(),
        FieldType::List(inner) => format!("Vec<{}>", rust_type(inner)),
        FieldType::Map(key, value) => {
            format!("HashMap<{}, {}>", rust_type(key), rust_type(value))
        },
        FieldType::Object(name) => name.clone(),
    }
}

pub fn uses_map(field_type: &FieldType) -> bool {
    match field_type {
        FieldType::Map(_, _) => true,
        FieldType::List(inner) => uses_map(inner),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("ProjectName"), "project_name");
        assert_eq!(snake_case("SourceURI"), "source_uri");
        assert_eq!(snake_case("URIs"), "uris");
        assert_eq!(snake_case("WebofficeURL"), "weboffice_url");
        assert_eq!(snake_case("DatasetMaxFileCount"), "dataset_max_file_count");
        assert_eq!(snake_case("CreateMediaConvertTask"), "create_media_convert_task");
        assert_eq!(snake_case("MNS"), "mns");
    }

    #[test]
    fn test_rust_ident_escapes_keywords() {
        assert_eq!(rust_ident("Type"), "r#type");
        assert_eq!(rust_ident("TaskType"), "task_type");
    }

    #[test]
    fn test_rust_type() {
        let tags = FieldType::List(Box::new(FieldType::Object("Tag".to_string())));
        assert_eq!(rust_type(&tags), "Vec<Tag>");

        let labels = FieldType::Map(Box::new(FieldType::String), Box::new(FieldType::String));
        assert_eq!(rust_type(&labels), "HashMap<String, String>");
        assert!(uses_map(&labels));
        assert!(!uses_map(&tags));
    }
}
