//! Identifier casing helpers shared by the code generators.

/// Convert a string to PascalCase (e.g., "an_example" -> "AnExample").
///
/// Underscores and spaces both delimit words; they are removed from the
/// output.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "an_example" -> "anExample")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "AnExample" -> "an_example").
///
/// An underscore is inserted only at a case boundary (an uppercase letter
/// following a lowercase letter or digit), so input that is already
/// snake_case passes through unchanged, file extension included.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            result.push('_');
        }
        result.extend(c.to_lowercase());
        prev = Some(c);
    }
    result
}

/// Derive a short receiver alias: the lowercased uppercase letters of the
/// PascalCase form (e.g., "an_example_struct" -> "aes")
pub fn to_alias(s: &str) -> String {
    to_pascal_case(s)
        .chars()
        .filter(|c| c.is_uppercase())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("an_example"), "AnExample");
        assert_eq!(to_pascal_case("camelCase"), "CamelCase");
        assert_eq!(to_pascal_case("PascalCase"), "PascalCase");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_treats_spaces_as_word_boundaries() {
        assert_eq!(to_pascal_case("an example"), "AnExample");
        assert_eq!(to_pascal_case("an_example struct"), "AnExampleStruct");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("PascalCase"), "pascalCase");
        assert_eq!(to_camel_case("camelCase"), "camelCase");
        assert_eq!(to_camel_case("snake_case"), "snakeCase");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_camel_agrees_with_pascal_after_first_char() {
        for name in ["XptoStructName", "an_example", "widget"] {
            let pascal = to_pascal_case(name);
            let camel = to_camel_case(name);
            let camel_rest: String = camel.chars().skip(1).collect();
            let pascal_rest: String = pascal.chars().skip(1).collect();
            assert_eq!(camel_rest, pascal_rest);
            assert!(camel.chars().next().unwrap().is_lowercase());
        }
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("XptoStructNameRepository"), "xpto_struct_name_repository");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_passes_through_snake_input() {
        assert_eq!(to_snake_case("test_snake_case.go"), "test_snake_case.go");
        assert_eq!(to_snake_case("myTestSnakeCase.go"), "my_test_snake_case.go");
    }

    #[test]
    fn test_to_alias() {
        assert_eq!(to_alias("Struct"), "s");
        assert_eq!(to_alias("an_example_struct_repository"), "aesr");
        assert_eq!(to_alias("XptoStructNameRepository"), "xsnr");
        assert_eq!(to_alias(""), "");
    }
}
