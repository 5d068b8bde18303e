//! Reserved words, punctuation and the operator precedence table.
//!
//! Operator precedence follows a sparse numbering. Levels 2, 3, 4 and 9
//! through 12 have no operators yet; they exist as named variants so new
//! operators slot in without renumbering.
//!
//! | Description    | Operators              | Associativity | Level |
//! |----------------|------------------------|---------------|-------|
//! | Unary postfix  | `e.`, `e()`, `e[]`     | None          | 16    |
//! | Unary prefix   | `-e`, `!e`             | None          | 15    |
//! | Multiplicative | `*`, `/`, `%`          | Left          | 14    |
//! | Additive       | `+`, `-`               | Left          | 13    |
//! | Relational     | `<`, `>`, `<=`, `>=`, `is` | None      | 8     |
//! | Equality       | `==`, `!=`             | None          | 7     |
//! | Logical AND    | `&&`                   | Left          | 6     |
//! | Logical OR     | `\|\|`                 | Left          | 5     |
//! | Assignment     | `=`                    | Right         | 1     |

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use super::grammar::GrammarVariant;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        for keyword in Keyword::ALL {
            map.insert(keyword.as_str(), keyword);
        }
        map
    };

    pub static ref PUNCTUATION_LOOKUP: HashMap<&'static str, Punctuation> = {
        let mut map = HashMap::new();
        for punctuation in Punctuation::ALL {
            map.insert(punctuation.as_str(), punctuation);
        }
        map
    };

    static ref PRECEDENCE_TABLE: HashMap<&'static str, OperatorInfo> = {
        let mut map = HashMap::new();
        map.insert(".", OperatorInfo::of(OperatorClass::Postfix));
        map.insert("(", OperatorInfo::of(OperatorClass::Postfix));
        map.insert("[", OperatorInfo::of(OperatorClass::Postfix));

        map.insert("!", OperatorInfo::of(OperatorClass::Prefix));

        map.insert("*", OperatorInfo::of(OperatorClass::Multiplicative));
        map.insert("/", OperatorInfo::of(OperatorClass::Multiplicative));
        map.insert("%", OperatorInfo::of(OperatorClass::Multiplicative));

        map.insert("+", OperatorInfo::of(OperatorClass::Additive));
        map.insert("-", OperatorInfo::of(OperatorClass::Additive));

        map.insert("<", OperatorInfo::of(OperatorClass::Relational));
        map.insert(">", OperatorInfo::of(OperatorClass::Relational));
        map.insert("<=", OperatorInfo::of(OperatorClass::Relational));
        map.insert(">=", OperatorInfo::of(OperatorClass::Relational));
        map.insert("is", OperatorInfo::of(OperatorClass::Relational));

        map.insert("==", OperatorInfo::of(OperatorClass::Equality));
        map.insert("!=", OperatorInfo::of(OperatorClass::Equality));

        map.insert("&&", OperatorInfo::of(OperatorClass::LogicalAnd));
        map.insert("||", OperatorInfo::of(OperatorClass::LogicalOr));

        map.insert("=", OperatorInfo::of(OperatorClass::Assignment));
        map
    };
}

/// Operators that may also appear in prefix position.
const PREFIX_OPERATORS: [&str; 2] = ["!", "-"];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Null,
    Static,
    Var,
    Let,
    Any,
    Typedef,
    Namespace,
    As,
    Abstract,
    Class,
    Fun,
    Construct,
    Get,
    Set,
    This,
    Super,
    Extends,
    Implements,
    Mixin,
    External,
    Library,
    Import,
    Break,
    Continue,
    For,
    In,
    If,
    Else,
    Return,
    Throw,
    While,
    Do,
    When,
    Is,
}

impl Keyword {
    pub const ALL: [Keyword; 34] = [
        Keyword::Null,
        Keyword::Static,
        Keyword::Var,
        Keyword::Let,
        Keyword::Any,
        Keyword::Typedef,
        Keyword::Namespace,
        Keyword::As,
        Keyword::Abstract,
        Keyword::Class,
        Keyword::Fun,
        Keyword::Construct,
        Keyword::Get,
        Keyword::Set,
        Keyword::This,
        Keyword::Super,
        Keyword::Extends,
        Keyword::Implements,
        Keyword::Mixin,
        Keyword::External,
        Keyword::Library,
        Keyword::Import,
        Keyword::Break,
        Keyword::Continue,
        Keyword::For,
        Keyword::In,
        Keyword::If,
        Keyword::Else,
        Keyword::Return,
        Keyword::Throw,
        Keyword::While,
        Keyword::Do,
        Keyword::When,
        Keyword::Is,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Null => "null",
            Keyword::Static => "static",
            Keyword::Var => "var",
            Keyword::Let => "let",
            Keyword::Any => "any",
            Keyword::Typedef => "typedef",
            Keyword::Namespace => "namespace",
            Keyword::As => "as",
            Keyword::Abstract => "abstract",
            Keyword::Class => "class",
            Keyword::Fun => "fun",
            Keyword::Construct => "construct",
            Keyword::Get => "get",
            Keyword::Set => "set",
            Keyword::This => "this",
            Keyword::Super => "super",
            Keyword::Extends => "extends",
            Keyword::Implements => "implements",
            Keyword::Mixin => "mixin",
            Keyword::External => "external",
            Keyword::Library => "library",
            Keyword::Import => "import",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Return => "return",
            Keyword::Throw => "throw",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::When => "when",
            Keyword::Is => "is",
        }
    }

    pub fn from_lexeme(lexeme: &str) -> Option<Keyword> {
        RESERVED_LOOKUP.get(lexeme).copied()
    }

    /// Only `is` doubles as an operator.
    pub fn precedence(self) -> Option<OperatorInfo> {
        precedence_of(self.as_str())
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Punctuation {
    Ellipsis,      // ...
    Or,            // ||
    And,           // &&
    Equals,        // ==
    NotEquals,     // !=
    LessEquals,    // <=
    GreaterEquals, // >=
    Less,
    Greater,
    Assignment, // =
    Slash,
    Percent,
    Plus,
    Star,
    Dash,
    Question,
    Not, // !
    Comma,
    Colon,
    Semicolon,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    CloseParen,
    OpenParen,
    Dot,
}

impl Punctuation {
    pub const ALL: [Punctuation; 27] = [
        Punctuation::Ellipsis,
        Punctuation::Or,
        Punctuation::And,
        Punctuation::Equals,
        Punctuation::NotEquals,
        Punctuation::LessEquals,
        Punctuation::GreaterEquals,
        Punctuation::Less,
        Punctuation::Greater,
        Punctuation::Assignment,
        Punctuation::Slash,
        Punctuation::Percent,
        Punctuation::Plus,
        Punctuation::Star,
        Punctuation::Dash,
        Punctuation::Question,
        Punctuation::Not,
        Punctuation::Comma,
        Punctuation::Colon,
        Punctuation::Semicolon,
        Punctuation::OpenCurly,
        Punctuation::CloseCurly,
        Punctuation::OpenBracket,
        Punctuation::CloseBracket,
        Punctuation::CloseParen,
        Punctuation::OpenParen,
        Punctuation::Dot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Punctuation::Ellipsis => "...",
            Punctuation::Or => "||",
            Punctuation::And => "&&",
            Punctuation::Equals => "==",
            Punctuation::NotEquals => "!=",
            Punctuation::LessEquals => "<=",
            Punctuation::GreaterEquals => ">=",
            Punctuation::Less => "<",
            Punctuation::Greater => ">",
            Punctuation::Assignment => "=",
            Punctuation::Slash => "/",
            Punctuation::Percent => "%",
            Punctuation::Plus => "+",
            Punctuation::Star => "*",
            Punctuation::Dash => "-",
            Punctuation::Question => "?",
            Punctuation::Not => "!",
            Punctuation::Comma => ",",
            Punctuation::Colon => ":",
            Punctuation::Semicolon => ";",
            Punctuation::OpenCurly => "{",
            Punctuation::CloseCurly => "}",
            Punctuation::OpenBracket => "[",
            Punctuation::CloseBracket => "]",
            Punctuation::CloseParen => ")",
            Punctuation::OpenParen => "(",
            Punctuation::Dot => ".",
        }
    }

    pub fn from_lexeme(lexeme: &str) -> Option<Punctuation> {
        PUNCTUATION_LOOKUP.get(lexeme).copied()
    }

    /// The command-line grammar has no block structure, lists or conditionals.
    pub fn is_supported_by(self, variant: GrammarVariant) -> bool {
        match variant {
            GrammarVariant::Script => true,
            GrammarVariant::CommandLine => !matches!(
                self,
                Punctuation::Comma
                    | Punctuation::OpenCurly
                    | Punctuation::CloseCurly
                    | Punctuation::Question
            ),
        }
    }

    pub fn precedence(self) -> Option<OperatorInfo> {
        precedence_of(self.as_str())
    }
}

impl Display for Punctuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Built-in type names usable in annotations.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LiteralType {
    Bool,
    Num,
    String,
    Null,
}

impl LiteralType {
    pub const ALL: [LiteralType; 4] = [
        LiteralType::Bool,
        LiteralType::Num,
        LiteralType::String,
        LiteralType::Null,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LiteralType::Bool => "bool",
            LiteralType::Num => "num",
            LiteralType::String => "String",
            LiteralType::Null => "null",
        }
    }

    pub fn from_lexeme(lexeme: &str) -> Option<LiteralType> {
        LiteralType::ALL
            .into_iter()
            .find(|literal| literal.as_str() == lexeme)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum PrecedenceLevel {
    Assignment = 1,
    /// Reserved: cascade `..`
    Cascade = 2,
    /// Reserved: `e1 ? e2 : e3`
    Conditional = 3,
    /// Reserved: `??`
    IfNull = 4,
    LogicalOr = 5,
    LogicalAnd = 6,
    Equality = 7,
    Relational = 8,
    /// Reserved: `|`
    BitwiseOr = 9,
    /// Reserved: `^`
    BitwiseXor = 10,
    /// Reserved: `&`
    BitwiseAnd = 11,
    /// Reserved: `<<`, `>>`
    Shift = 12,
    Additive = 13,
    Multiplicative = 14,
    Prefix = 15,
    Postfix = 16,
}

impl PrecedenceLevel {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Levels kept free for operators the language does not have yet.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            PrecedenceLevel::Cascade
                | PrecedenceLevel::Conditional
                | PrecedenceLevel::IfNull
                | PrecedenceLevel::BitwiseOr
                | PrecedenceLevel::BitwiseXor
                | PrecedenceLevel::BitwiseAnd
                | PrecedenceLevel::Shift
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OperatorClass {
    Postfix,
    Prefix,
    Multiplicative,
    Additive,
    Relational,
    Equality,
    LogicalAnd,
    LogicalOr,
    Assignment,
}

impl OperatorClass {
    pub fn level(self) -> PrecedenceLevel {
        match self {
            OperatorClass::Postfix => PrecedenceLevel::Postfix,
            OperatorClass::Prefix => PrecedenceLevel::Prefix,
            OperatorClass::Multiplicative => PrecedenceLevel::Multiplicative,
            OperatorClass::Additive => PrecedenceLevel::Additive,
            OperatorClass::Relational => PrecedenceLevel::Relational,
            OperatorClass::Equality => PrecedenceLevel::Equality,
            OperatorClass::LogicalAnd => PrecedenceLevel::LogicalAnd,
            OperatorClass::LogicalOr => PrecedenceLevel::LogicalOr,
            OperatorClass::Assignment => PrecedenceLevel::Assignment,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            OperatorClass::Multiplicative
            | OperatorClass::Additive
            | OperatorClass::LogicalAnd
            | OperatorClass::LogicalOr => Associativity::Left,
            OperatorClass::Assignment => Associativity::Right,
            OperatorClass::Postfix
            | OperatorClass::Prefix
            | OperatorClass::Relational
            | OperatorClass::Equality => Associativity::None,
        }
    }
}

/// Precedence metadata attached to operator tokens.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct OperatorInfo {
    pub level: PrecedenceLevel,
    pub associativity: Associativity,
    pub class: OperatorClass,
}

impl OperatorInfo {
    pub fn of(class: OperatorClass) -> Self {
        OperatorInfo {
            level: class.level(),
            associativity: class.associativity(),
            class,
        }
    }
}

pub fn is_keyword(lexeme: &str) -> bool {
    RESERVED_LOOKUP.contains_key(lexeme)
}

/// Precedence of `lexeme` in infix or postfix position.
pub fn precedence_of(lexeme: &str) -> Option<OperatorInfo> {
    PRECEDENCE_TABLE.get(lexeme).copied()
}

/// Precedence of `lexeme` in prefix position, e.g. the `-` of `-x`.
pub fn prefix_precedence_of(lexeme: &str) -> Option<OperatorInfo> {
    if PREFIX_OPERATORS.contains(&lexeme) {
        Some(OperatorInfo::of(OperatorClass::Prefix))
    } else {
        None
    }
}

pub fn is_literal_type_name(lexeme: &str) -> bool {
    LiteralType::from_lexeme(lexeme).is_some()
}

/// Every entry of the precedence table, in no particular order.
pub fn operators() -> impl Iterator<Item = (&'static str, OperatorInfo)> {
    PRECEDENCE_TABLE.iter().map(|(lexeme, info)| (*lexeme, *info))
}
