#[cfg(test)]
mod verify {
    use relevance::analysis::tokenize;
    use relevance::formatting::*;
    use relevance::language::TokenKind;

    fn trim(text: &str) -> &str {
        text.trim_start_matches('\n')
            .trim_end()
    }

    /// The structural tokens only, ignoring whitespace differences in the
    /// text runs between them.
    fn shape(text: &str) -> Vec<(TokenKind, String)> {
        tokenize(text)
            .into_iter()
            .map(|token| (token.kind, compact(token.text)))
            .filter(|(_, content)| !content.is_empty())
            .collect()
    }

    #[test]
    fn expand_whose_clause() {
        let result = expand(r#"names of files whose (it contains ".txt")"#);
        assert_eq!(
            result,
            trim(
                r#"
names of files whose
(
    it contains ".txt"
)
                "#
            )
        );
    }

    #[test]
    fn expand_conditional() {
        let result = expand("if a then b else c");
        assert_eq!(
            result,
            trim(
                r#"
if a
then b
else c
                "#
            )
        );
    }

    #[test]
    fn expand_nested_groups() {
        let result = expand("if (a) then (b (c)) else d");
        assert_eq!(
            result,
            trim(
                r#"
if
(
    a
)
then
(
    b
    (
        c
    )
)
else d
                "#
            )
        );
    }

    #[test]
    fn expand_keeps_keyword_case() {
        assert_eq!(expand("IF x Then y ELSE z"), "IF x\nThen y\nELSE z");
    }

    #[test]
    fn expand_unbalanced_input() {
        // surplus closers pin indentation at the left margin
        assert_eq!(expand("a) b) (c"), "a\n)\nb\n)\n(\n    c");
        assert_eq!(expand("(((x"), "(\n    (\n        (\n            x");
    }

    #[test]
    fn expand_degenerate_input() {
        assert_eq!(expand(""), "");
        assert_eq!(expand("   "), "");
        assert_eq!(expand("()"), "(\n)");
    }

    #[test]
    fn compact_collapses_whitespace() {
        assert_eq!(compact("  if a\n\tthen   b \n else c\n"), "if a then b else c");
        assert_eq!(compact(""), "");
    }

    #[test]
    fn compact_is_idempotent() {
        let samples = [
            "names of files whose\n(\n    it contains \".txt\"\n)",
            "  a  b  ",
            "\n\n",
            "x",
        ];
        for sample in samples {
            let once = compact(sample);
            assert_eq!(compact(&once), once);
        }
    }

    #[test]
    fn expand_is_deterministic() {
        let text = "if exists (a whose (it > 1)) then b else c";
        assert_eq!(expand(text), expand(text));
    }

    #[test]
    fn round_trip_preserves_token_sequence() {
        let samples = [
            r#"names of files whose (it contains ".txt")"#,
            "if A then (if B then C else D) else E",
            "(name of it, version of it) of operating system",
            "a) b) (c",
            "  spaced   out  ( words )  ",
        ];
        for sample in samples {
            assert_eq!(
                shape(&compact(&expand(sample))),
                shape(&compact(sample)),
                "{}",
                sample
            );
        }
    }

    #[test]
    fn reformat_toggles() {
        let single = "if a then b else c";
        let expanded = reformat(single);
        assert_eq!(expanded, "if a\nthen b\nelse c");
        assert_eq!(reformat(&expanded), single);
    }

    #[test]
    fn reformat_trims_first() {
        assert_eq!(reformat(""), "");
        assert_eq!(reformat(" \n "), "");

        // a trailing newline alone does not make text multi-line
        assert_eq!(reformat("(a)\n"), "(\n    a\n)");
    }

    #[test]
    fn fragments_carry_syntax() {
        let fragments = expand_to_fragments("if (a) then b");

        assert_eq!(combine(&fragments), expand("if (a) then b"));
        assert!(fragments.contains(&(Syntax::Structure, "(".to_string())));
        assert!(fragments.contains(&(Syntax::Indent, "    ".to_string())));
        assert!(fragments.contains(&(Syntax::Keyword, "then".to_string())));
    }
}
