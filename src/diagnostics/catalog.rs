use std::{fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::warn;

/// Language of user-visible messages. Passed explicitly to every lookup.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    ZhHans,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale tag {0:?}")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// Environment variable consulted by [`Locale::from_env`].
    pub const ENV_VAR: &'static str = "HETU_LANG";

    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ZhHans => "zh-Hans",
        }
    }

    /// Reads `HETU_LANG`, falling back to `en-US` when unset or unknown.
    pub fn from_env() -> Locale {
        match std::env::var(Locale::ENV_VAR) {
            Ok(tag) => tag.parse().unwrap_or_else(|error: UnknownLocale| {
                warn!(%error, "falling back to {}", Locale::default().tag());
                Locale::default()
            }),
            Err(_) => Locale::default(),
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "zh" | "zh-hans" | "zh-cn" => Ok(Locale::ZhHans),
            _ => Err(UnknownLocale(tag.to_string())),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Condition keys of every message the toolchain can show.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Diagnostic {
    // Lexical
    UnrecognizedCharacter,
    UnterminatedString,
    InvalidEscape,
    NumberOutOfRange,

    // Parsing and evaluation
    Unsupported,
    Expected,
    Unexpected,
    PrivateMember,
    NotInitialized,
    Undefined,
    UndefinedOperator,
    AlreadyDeclared,
    AlreadyDefined,
    IndexOutOfRange,
    InvalidLeftValue,
    NotCallable,
    UndefinedMember,
    ConditionNotBool,
    MissingFunctionBody,
    NotCollection,
    NotSubscriptable,
    NotClass,
    SetterArity,
    NullObject,
    Immutable,

    // Type checking
    VariableTypeMismatch,
    ArgumentTypeMismatch,
    ReturnTypeMismatch,
    ArityMismatch,
}

impl Diagnostic {
    pub const ALL: [Diagnostic; 29] = [
        Diagnostic::UnrecognizedCharacter,
        Diagnostic::UnterminatedString,
        Diagnostic::InvalidEscape,
        Diagnostic::NumberOutOfRange,
        Diagnostic::Unsupported,
        Diagnostic::Expected,
        Diagnostic::Unexpected,
        Diagnostic::PrivateMember,
        Diagnostic::NotInitialized,
        Diagnostic::Undefined,
        Diagnostic::UndefinedOperator,
        Diagnostic::AlreadyDeclared,
        Diagnostic::AlreadyDefined,
        Diagnostic::IndexOutOfRange,
        Diagnostic::InvalidLeftValue,
        Diagnostic::NotCallable,
        Diagnostic::UndefinedMember,
        Diagnostic::ConditionNotBool,
        Diagnostic::MissingFunctionBody,
        Diagnostic::NotCollection,
        Diagnostic::NotSubscriptable,
        Diagnostic::NotClass,
        Diagnostic::SetterArity,
        Diagnostic::NullObject,
        Diagnostic::Immutable,
        Diagnostic::VariableTypeMismatch,
        Diagnostic::ArgumentTypeMismatch,
        Diagnostic::ReturnTypeMismatch,
        Diagnostic::ArityMismatch,
    ];

    /// Number of positional values the template expects.
    pub fn arity(self) -> usize {
        match self {
            Diagnostic::InvalidLeftValue
            | Diagnostic::ConditionNotBool
            | Diagnostic::SetterArity => 0,
            Diagnostic::Expected | Diagnostic::ArityMismatch => 2,
            Diagnostic::VariableTypeMismatch
            | Diagnostic::ArgumentTypeMismatch
            | Diagnostic::ReturnTypeMismatch => 3,
            _ => 1,
        }
    }

    pub fn template(self, locale: Locale) -> &'static str {
        match locale {
            Locale::EnUs => self.template_en(),
            Locale::ZhHans => self.template_zh(),
        }
    }

    fn template_en(self) -> &'static str {
        match self {
            Diagnostic::UnrecognizedCharacter => "Unexpected character '{0}'",
            Diagnostic::UnterminatedString => "Unterminated string literal, missing closing {0}",
            Diagnostic::InvalidEscape => "Invalid escape sequence '{0}' in string literal",
            Diagnostic::NumberOutOfRange => "Number literal {0} is out of range",
            Diagnostic::Unsupported => "Unsupported value type {0}",
            Diagnostic::Expected => "{0} expected, get {1}",
            Diagnostic::Unexpected => "Unexpected identifier {0}",
            Diagnostic::PrivateMember => "Could not access private member {0}",
            Diagnostic::NotInitialized => "{0} has not initialized",
            Diagnostic::Undefined => "Undefined identifier {0}",
            Diagnostic::UndefinedOperator => "Undefined operator {0}",
            Diagnostic::AlreadyDeclared => "{0} is already declared",
            Diagnostic::AlreadyDefined => "{0} is already defined",
            Diagnostic::IndexOutOfRange => "Index out of range, should be less than {0}",
            Diagnostic::InvalidLeftValue => "Invalid left-value",
            Diagnostic::NotCallable => "{0} is not callable",
            Diagnostic::UndefinedMember => "{0} isn't defined for the class",
            Diagnostic::ConditionNotBool => "Condition expression must evaluate to type \"bool\"",
            Diagnostic::MissingFunctionBody => "Missing function definition body of {0}",
            Diagnostic::NotCollection => "{0} is not a collection or object",
            Diagnostic::NotSubscriptable => "{0} is not a List or Map",
            Diagnostic::NotClass => "{0} is not a class",
            Diagnostic::SetterArity => "Setter function's arity must be 1",
            Diagnostic::NullObject => "{0} is null",
            Diagnostic::Immutable => "{0} is immutable",
            Diagnostic::VariableTypeMismatch => {
                "Variable {0} of type {1} can't be assigned with type {2}"
            }
            Diagnostic::ArgumentTypeMismatch => {
                "Argument {0} of type {1} doesn't match parameter type {2}"
            }
            Diagnostic::ReturnTypeMismatch => {
                "Value of type {0} can't be returned from function {1} because it has a return type of {2}"
            }
            Diagnostic::ArityMismatch => {
                "Number of arguments {0} doesn't match parameter requirement of function {1}"
            }
        }
    }

    fn template_zh(self) -> &'static str {
        match self {
            Diagnostic::UnrecognizedCharacter => "意外的字符 '{0}'",
            Diagnostic::UnterminatedString => "字符串字面量未结束，缺少结尾的 {0}",
            Diagnostic::InvalidEscape => "字符串字面量中存在无效的转义序列 '{0}'",
            Diagnostic::NumberOutOfRange => "数字字面量 {0} 超出范围",
            Diagnostic::Unsupported => "不支持的值类型 {0}",
            Diagnostic::Expected => "应为 {0}，实际为 {1}",
            Diagnostic::Unexpected => "意外的标识符 {0}",
            Diagnostic::PrivateMember => "无法访问私有成员 {0}",
            Diagnostic::NotInitialized => "{0} 尚未初始化",
            Diagnostic::Undefined => "未定义的标识符 {0}",
            Diagnostic::UndefinedOperator => "未定义的运算符 {0}",
            Diagnostic::AlreadyDeclared => "{0} 已被声明",
            Diagnostic::AlreadyDefined => "{0} 已被定义",
            Diagnostic::IndexOutOfRange => "索引超出范围，应小于 {0}",
            Diagnostic::InvalidLeftValue => "无效的左值",
            Diagnostic::NotCallable => "{0} 不可调用",
            Diagnostic::UndefinedMember => "{0} 未在类中定义",
            Diagnostic::ConditionNotBool => "条件表达式的类型必须为 \"bool\"",
            Diagnostic::MissingFunctionBody => "缺少函数 {0} 的定义体",
            Diagnostic::NotCollection => "{0} 不是集合或对象",
            Diagnostic::NotSubscriptable => "{0} 不是 List 或 Map",
            Diagnostic::NotClass => "{0} 不是一个类",
            Diagnostic::SetterArity => "Setter 函数的参数个数必须为 1",
            Diagnostic::NullObject => "{0} 为 null",
            Diagnostic::Immutable => "{0} 不可修改",
            Diagnostic::VariableTypeMismatch => "类型为 {1} 的变量 {0} 不能被赋值为类型 {2}",
            Diagnostic::ArgumentTypeMismatch => "类型为 {1} 的参数 {0} 与形参类型 {2} 不匹配",
            Diagnostic::ReturnTypeMismatch => "类型为 {0} 的值不能从函数 {1} 返回，因为其返回类型为 {2}",
            Diagnostic::ArityMismatch => "参数个数 {0} 不符合函数 {1} 的参数要求",
        }
    }
}

/// Formats `id` in `locale`, substituting `{0}`, `{1}`, … with `args`.
///
/// Substitution is a single pass over the template; text coming from `args`
/// is never scanned for placeholders. A placeholder without a matching
/// argument is left as is.
pub fn message(locale: Locale, id: Diagnostic, args: &[&dyn Display]) -> String {
    if args.len() != id.arity() {
        warn!(
            diagnostic = ?id,
            expected = id.arity(),
            received = args.len(),
            "diagnostic argument count mismatch"
        );
    }

    let template = id.template(locale);
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let placeholder = after
            .find('}')
            .and_then(|close| after[..close].parse::<usize>().ok().map(|index| (index, close)));

        match placeholder {
            Some((index, close)) if index < args.len() => {
                result.push_str(&args[index].to_string());
                rest = &after[close + 1..];
            }
            _ => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
