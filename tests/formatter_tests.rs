#[cfg(test)]
mod tests {
    use seeder::error::Error;
    use seeder::formatter::{PartialFormatter, TemplateFormatter};
    use serde_json::{json, Map, Value};
    use test_log::test;

    fn values(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    fn test_format(template: &str, pairs: &[(&str, Value)], expected: &str) {
        let formatter = PartialFormatter::new();
        let result = formatter.format(template, &values(pairs)).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_no_format_specifiers() {
        test_format("hello world.", &[], "hello world.");
        test_format("hello world.", &[("something", json!("world"))], "hello world.");
    }

    #[test]
    fn test_no_missing_fields() {
        test_format("hello {something}.", &[("something", json!("world"))], "hello world.");
    }

    #[test]
    fn test_missing_fields() {
        test_format(
            "{greeting} {something}.",
            &[("greeting", json!("hello"))],
            "hello {something}.",
        );
    }

    #[test]
    fn test_iterative_formatting() {
        let formatter = PartialFormatter::new();
        let first = formatter
            .format("{greeting} {something}.", &values(&[("greeting", json!("hello"))]))
            .unwrap();
        let second = formatter
            .format(&first, &values(&[("something", json!("world"))]))
            .unwrap();
        assert_eq!(second, "hello world.");

        let at_once = formatter
            .format(
                "{greeting} {something}.",
                &values(&[("greeting", json!("hello")), ("something", json!("world"))]),
            )
            .unwrap();
        assert_eq!(second, at_once);
    }

    #[test]
    fn test_extra_fields() {
        test_format(
            "hello {something}.",
            &[("something", json!("world")), ("else", json!("rawr"))],
            "hello world.",
        );
    }

    #[test]
    fn test_resolved_string_is_stable() {
        test_format(
            "hello world.",
            &[("something", json!("world")), ("else", json!("rawr"))],
            "hello world.",
        );
    }

    #[test]
    fn test_malformed_template() {
        let formatter = PartialFormatter::new();
        assert!(matches!(
            formatter.format("{", &Map::new()),
            Err(Error::ParseError(_))
        ));
        assert!(matches!(
            formatter.format("{}", &Map::new()),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_positional_placeholders_are_rejected() {
        let formatter = PartialFormatter::new();
        assert!(matches!(
            formatter.format("{0}", &values(&[("0", json!("zero"))])),
            Err(Error::UnsupportedPlaceholderError(_))
        ));
    }

    #[test]
    fn test_unresolved_placeholder_drops_suffixes() {
        test_format("{name!r} and {name:>10}", &[], "{name} and {name}");
    }

    #[test]
    fn test_escaped_brackets() {
        test_format(
            "{{hello {something}.}}",
            &[("something", json!("world")), ("else", json!("rawr"))],
            "{hello world.}",
        );
    }
}
