use super::{message, Diagnostic, Locale, UnknownLocale};

/// Collects the `{n}` placeholder indices of a template, in order.
fn placeholders(template: &str) -> Vec<usize> {
    let mut found = vec![];
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        if let Some(close) = after.find('}') {
            if let Ok(index) = after[..close].parse::<usize>() {
                found.push(index);
            }
        }
        rest = after;
    }

    found.sort_unstable();
    found.dedup();
    found
}

#[test]
fn test_templates_match_arity() {
    for id in Diagnostic::ALL {
        for locale in [Locale::EnUs, Locale::ZhHans] {
            let expected = (0..id.arity()).collect::<Vec<_>>();
            assert_eq!(
                placeholders(id.template(locale)),
                expected,
                "{:?} in {}",
                id,
                locale
            );
        }
    }
}

#[test]
fn test_message_substitution() {
    assert_eq!(
        message(Locale::EnUs, Diagnostic::Undefined, &[&"foo"]),
        "Undefined identifier foo"
    );
    assert_eq!(
        message(
            Locale::EnUs,
            Diagnostic::VariableTypeMismatch,
            &[&"count", &"num", &"String"]
        ),
        "Variable count of type num can't be assigned with type String"
    );
    assert_eq!(
        message(Locale::EnUs, Diagnostic::ArityMismatch, &[&3, &"add"]),
        "Number of arguments 3 doesn't match parameter requirement of function add"
    );
    assert_eq!(
        message(Locale::EnUs, Diagnostic::ConditionNotBool, &[]),
        "Condition expression must evaluate to type \"bool\""
    );
}

#[test]
fn test_message_localized() {
    assert_eq!(
        message(Locale::ZhHans, Diagnostic::Undefined, &[&"foo"]),
        "未定义的标识符 foo"
    );
    assert_eq!(
        message(Locale::ZhHans, Diagnostic::Expected, &[&")", &";"]),
        "应为 )，实际为 ;"
    );
}

#[test]
fn test_message_does_not_expand_arguments() {
    assert_eq!(
        message(Locale::EnUs, Diagnostic::Expected, &[&"{1}", &"x"]),
        "{1} expected, get x"
    );
}

#[test]
fn test_message_missing_arguments_keep_placeholder() {
    assert_eq!(
        message(Locale::EnUs, Diagnostic::Expected, &[&"("]),
        "( expected, get {1}"
    );
}

#[test]
fn test_locale_parsing() {
    assert_eq!("en-US".parse::<Locale>(), Ok(Locale::EnUs));
    assert_eq!("en".parse::<Locale>(), Ok(Locale::EnUs));
    assert_eq!("zh-Hans".parse::<Locale>(), Ok(Locale::ZhHans));
    assert_eq!("zh_hans".parse::<Locale>(), Ok(Locale::ZhHans));
    assert_eq!(
        "fr-FR".parse::<Locale>(),
        Err(UnknownLocale("fr-FR".to_string()))
    );
}

#[test]
fn test_locale_tags_round_trip() {
    for locale in [Locale::EnUs, Locale::ZhHans] {
        assert_eq!(locale.tag().parse::<Locale>(), Ok(locale));
        assert_eq!(locale.to_string(), locale.tag());
    }
    assert_eq!(Locale::default(), Locale::EnUs);
}
