#[cfg(test)]
mod verify {
    use relevance::analysis::*;
    use relevance::language::{Highlight, Span};

    #[test]
    fn pronoun_in_whose_clause() {
        let text = r#"names of files whose (it contains ".txt")"#;

        assert_eq!(
            analyze_at(text, 23),
            vec![
                Highlight::matched(Span::new(22, 24)),
                Highlight::matched(Span::new(9, 14)),
            ]
        );
    }

    #[test]
    fn pronouns_sharing_an_of_object() {
        let text = "(name of it, version of it) of operating system";

        assert_eq!(
            analyze_at(text, 9),
            vec![
                Highlight::matched(Span::new(9, 11)),
                Highlight::matched(Span::new(31, 47)),
                Highlight::matched(Span::new(24, 26)),
            ]
        );
        assert_eq!(
            analyze_at(text, 26),
            vec![
                Highlight::matched(Span::new(24, 26)),
                Highlight::matched(Span::new(31, 47)),
                Highlight::matched(Span::new(9, 11)),
            ]
        );
    }

    #[test]
    fn pronoun_with_nothing_in_scope() {
        assert_eq!(
            analyze_at("it", 1),
            vec![Highlight::unmatched(Span::new(0, 2))]
        );
    }

    #[test]
    fn other_pronoun_forms() {
        let text = "files whose (its size > 1)";
        assert_eq!(
            analyze_at(text, 14),
            vec![
                Highlight::matched(Span::new(13, 16)),
                Highlight::matched(Span::new(0, 5)),
            ]
        );

        let text = "(size of THEM) of files";
        assert_eq!(
            analyze_at(text, 10),
            vec![
                Highlight::matched(Span::new(9, 13)),
                Highlight::matched(Span::new(18, 23)),
            ]
        );
    }

    #[test]
    fn pronoun_takes_priority_over_bracket() {
        assert_eq!(
            analyze_at("(it)", 1),
            vec![Highlight::unmatched(Span::new(1, 3))]
        );
    }

    #[test]
    fn pronoun_inside_a_word_is_ignored() {
        assert_eq!(resolve_referent("items whose (bitmap)", 2), None);
    }
}
