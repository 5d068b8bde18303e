//! Property tests for the tokenizer using proptest

use hetu_lexer::lexer::{
    escape::decode_escapes,
    grammar::GrammarVariant,
    lexer::tokenize,
    symbols::{is_keyword, Keyword},
    tokens::{LiteralValue, TokenKind},
};
use proptest::prelude::*;

/// Strategy for generating identifiers, reserved words included
fn identifier_strategy() -> impl Strategy<Value = String> {
    "_?[a-zA-Zα-ω][a-zA-Zα-ω0-9_]{0,12}"
}

/// Strategy for generating single tokens that need no separator rules
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        "[0-9]{1,6}",
        "[0-9]{1,4}\\.[0-9]{1,4}",
        "'[a-z ]{0,8}'",
        proptest::sample::select(vec!["...", "==", "=", "&&", "||", "/", "(", ")", "{", ","])
            .prop_map(String::from),
    ]
}

fn summary(source: &str, variant: GrammarVariant) -> Option<Vec<(TokenKind, String)>> {
    tokenize(source, variant).ok().map(|tokens| {
        tokens
            .into_iter()
            .map(|token| (token.kind, token.lexeme))
            .collect()
    })
}

proptest! {
    #[test]
    fn identifiers_lex_as_a_single_token(name in identifier_strategy()) {
        prop_assume!(!is_keyword(&name));

        let tokens = tokenize(&name, GrammarVariant::Script).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&tokens[0].lexeme, &name);
        prop_assert_eq!(tokens[1].kind, TokenKind::EOF);
    }

    #[test]
    fn keywords_never_lex_as_identifiers(keyword in proptest::sample::select(Keyword::ALL.to_vec())) {
        for variant in [GrammarVariant::Script, GrammarVariant::CommandLine] {
            let tokens = tokenize(keyword.as_str(), variant).unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Keyword(keyword));
        }
    }

    #[test]
    fn integers_keep_their_value(value in any::<u32>()) {
        let tokens = tokenize(&value.to_string(), GrammarVariant::Script).unwrap();
        prop_assert_eq!(tokens[0].value.clone(), Some(LiteralValue::Integer(value as i64)));
    }

    #[test]
    fn fractions_lex_as_floats(source in "[0-9]{1,6}\\.[0-9]{1,6}") {
        let tokens = tokenize(&source, GrammarVariant::Script).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(
            tokens[0].value.clone(),
            Some(LiteralValue::Float(source.parse::<f64>().unwrap()))
        );
    }

    #[test]
    fn escaped_strings_decode_to_their_content(content in "[a-zA-Z0-9 '\"\\\\\n]{0,20}") {
        let escaped = content
            .replace('\\', "\\\\")
            .replace('\'', "\\'")
            .replace('\n', "\\n");
        let source = format!("'{}'", escaped);

        let tokens = tokenize(&source, GrammarVariant::Script).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].value.clone(), Some(LiteralValue::String(content)));
    }

    #[test]
    fn text_without_backslashes_decodes_unchanged(text in "[^\\\\]{0,30}") {
        prop_assert_eq!(decode_escapes(&text).unwrap(), text);
    }

    #[test]
    fn comments_produce_no_tokens(
        before in identifier_strategy(),
        comment in "[^\n]{0,20}",
        after in identifier_strategy(),
    ) {
        prop_assume!(!is_keyword(&before) && !is_keyword(&after));

        let source = format!("{} //{}\n{}", before, comment, after);
        let tokens = tokenize(&source, GrammarVariant::Script).unwrap();
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(&tokens[0].lexeme, &before);
        prop_assert_eq!(&tokens[1].lexeme, &after);
    }

    #[test]
    fn whitespace_only_separates(parts in prop::collection::vec(token_strategy(), 1..12)) {
        let tight = parts.join(" ");
        let loose = parts.join(" \t\r\n  ");

        prop_assert_eq!(
            summary(&tight, GrammarVariant::Script),
            summary(&loose, GrammarVariant::Script)
        );
    }

    #[test]
    fn spans_cover_lexemes(parts in prop::collection::vec(token_strategy(), 1..12)) {
        let source = parts.join("  ");
        let tokens = tokenize(&source, GrammarVariant::Script).unwrap();

        for token in &tokens {
            let start = token.span.start.offset;
            let end = token.span.end.offset;
            prop_assert_eq!(&source[start..end], token.lexeme.as_str());
        }
    }

    #[test]
    fn command_line_is_a_subset_of_script(parts in prop::collection::vec(token_strategy(), 1..12)) {
        let source = parts.join(" ");

        if let Some(command_line) = summary(&source, GrammarVariant::CommandLine) {
            prop_assert_eq!(Some(command_line), summary(&source, GrammarVariant::Script));
        }
    }

    #[test]
    fn arbitrary_input_never_panics(source in any::<String>()) {
        if let Ok(tokens) = tokenize(&source, GrammarVariant::Script) {
            prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
            prop_assert_eq!(
                tokens.iter().filter(|token| token.kind == TokenKind::EOF).count(),
                1
            );
        }
    }
}
