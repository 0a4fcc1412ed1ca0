//! Name transforms used by framework conventions.

/// CamelCase a package name: `my_plugin` and `my-plugin` become `MyPlugin`.
///
/// Word boundaries are `_`, `-` and spaces. Characters after the first of
/// each word keep their case, so `sfShamaPlugin` stays `SfShamaPlugin`.
pub fn camel_case(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Lowercase a package name and turn hyphens and spaces into underscores.
pub fn lower_snake(name: &str) -> String {
    name.to_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_single_word() {
        assert_eq!(camel_case("ftp"), "Ftp");
    }

    #[test]
    fn test_camel_case_separators() {
        assert_eq!(camel_case("my_plugin"), "MyPlugin");
        assert_eq!(camel_case("my-plugin"), "MyPlugin");
        assert_eq!(camel_case("debug kit"), "DebugKit");
    }

    #[test]
    fn test_camel_case_preserves_inner_case() {
        assert_eq!(camel_case("sfShamaPlugin"), "SfShamaPlugin");
        assert_eq!(camel_case("DebugKit"), "DebugKit");
    }

    #[test]
    fn test_camel_case_collapses_repeated_separators() {
        assert_eq!(camel_case("a__b--c"), "ABC");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_lower_snake() {
        assert_eq!(lower_snake("Show-Additional Headers"), "show_additional_headers");
        assert_eq!(lower_snake("already_snake"), "already_snake");
    }
}
