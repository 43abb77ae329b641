//! Case-convention transforms shared by every language mapper.
//!
//! All transforms split their input into words first, so mixed inputs such as
//! `"HTTPClient"`, `"machine-sharing"` or `"users_list"` behave consistently.

/// Split an identifier into words.
///
/// Boundaries are any non-alphanumeric character, a lowercase-or-digit to
/// uppercase transition (`userId`), and the last capital of an acronym run
/// that is followed by a lowercase letter (`HTTPClient` -> `HTTP`, `Client`).
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "machine-sharing" -> "MachineSharing")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "users_list" -> "usersList")
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            if i == 0 {
                w.to_lowercase()
            } else {
                capitalize(w)
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "HTTPClient" -> "http_client")
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "inProgress" -> "IN_PROGRESS")
pub fn to_screaming_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert an HTTP header name to a camelCase parameter name.
///
/// Every word is lowercased before joining, so acronyms in headers collapse
/// (`"X-API-Key"` -> `"xApiKey"`).
pub fn header_to_param_name(header: &str) -> String {
    split_words(header)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let lower = w.to_lowercase();
            if i == 0 { lower } else { capitalize(&lower) }
        })
        .collect()
}

/// Extract the model name from a reference (`"#/components/schemas/Pet"` -> `"Pet"`).
pub fn ref_target_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("HTTPClient"), vec!["HTTP", "Client"]);
        assert_eq!(split_words("userId"), vec!["user", "Id"]);
        assert_eq!(split_words("X-Chunk-Index"), vec!["X", "Chunk", "Index"]);
        assert_eq!(split_words("v2Api"), vec!["v2", "Api"]);
        assert_eq!(split_words("__a__b"), vec!["a", "b"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("machine-sharing"), "MachineSharing");
        assert_eq!(to_pascal_case("Parent.field"), "ParentField");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("users_list"), "usersList");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("get_user_id"), "getUserId");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("HTTPClient"), "http_client");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("createdAt"), "created_at");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_kebab_and_screaming() {
        assert_eq!(to_kebab_case("hello_world"), "hello-world");
        assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
        assert_eq!(to_screaming_snake_case("inProgress"), "IN_PROGRESS");
        assert_eq!(to_screaming_snake_case("dark-mode"), "DARK_MODE");
    }

    #[test]
    fn test_header_to_param_name() {
        assert_eq!(header_to_param_name("X-Chunk-Index"), "xChunkIndex");
        assert_eq!(header_to_param_name("Content-Type"), "contentType");
        assert_eq!(header_to_param_name("X-API-Key"), "xApiKey");
        assert_eq!(header_to_param_name("Authorization"), "authorization");
    }

    #[test]
    fn test_ref_target_name() {
        assert_eq!(ref_target_name("#/components/schemas/Pet"), "Pet");
        assert_eq!(ref_target_name("Pet"), "Pet");
    }
}
