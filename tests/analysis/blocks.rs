#[cfg(test)]
mod verify {
    use relevance::analysis::*;
    use relevance::language::{Class, Highlight, Span};

    fn spans(highlights: &[Highlight]) -> Vec<(usize, usize)> {
        highlights
            .iter()
            .map(|h| (h.start, h.end))
            .collect()
    }

    #[test]
    fn complete_conditional_from_any_keyword() {
        let text = "if x then y else z";
        let expected = vec![(0, 2), (5, 9), (12, 16)];

        for offset in [0, 1, 2, 5, 7, 9, 12, 16] {
            let result = analyze_at(text, offset);
            assert_eq!(spans(&result), expected, "offset {}", offset);
            assert!(result
                .iter()
                .all(|h| h.class == Class::Matched));
        }
    }

    #[test]
    fn outer_and_inner_conditionals_are_kept_apart() {
        //          0         1         2         3
        //          0123456789012345678901234567890123456
        let text = "if A then (if B then C else D) else E";

        assert_eq!(
            spans(&analyze_at(text, 31)),
            vec![(0, 2), (5, 9), (31, 35)]
        );
        assert_eq!(
            spans(&analyze_at(text, 23)),
            vec![(11, 13), (16, 20), (23, 27)]
        );
        assert_eq!(
            spans(&analyze_at(text, 0)),
            vec![(0, 2), (5, 9), (31, 35)]
        );
        assert_eq!(
            spans(&analyze_at(text, 11)),
            vec![(11, 13), (16, 20), (23, 27)]
        );
    }

    #[test]
    fn keywords_across_lines() {
        let text = "if a\nthen b\nelse c";
        assert_eq!(
            spans(&analyze_at(text, 13)),
            vec![(0, 2), (5, 9), (12, 16)]
        );
    }

    #[test]
    fn incomplete_conditional() {
        assert_eq!(
            analyze_at("if a then b", 0),
            vec![
                Highlight::unmatched(Span::new(0, 2)),
                Highlight::unmatched(Span::new(5, 9)),
            ]
        );
        assert_eq!(
            analyze_at("a else b", 3),
            vec![Highlight::unmatched(Span::new(2, 6))]
        );
    }

    #[test]
    fn keyword_takes_priority_over_bracket() {
        // the cursor is just after "(" but also on "if"
        assert_eq!(
            analyze_at("(if a)", 1),
            vec![Highlight::unmatched(Span::new(1, 3))]
        );
    }

    #[test]
    fn keywords_must_be_whole_words() {
        assert_eq!(match_block("iffy thence elsewhere", 1), None);
    }
}
