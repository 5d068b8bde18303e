use lazy_static::lazy_static;
use regex::Regex;

use super::symbols::Punctuation;

lazy_static! {
    pub static ref SCRIPT_GRAMMAR: Grammar = Grammar::new(GrammarVariant::Script);
    pub static ref COMMAND_LINE_GRAMMAR: Grammar = Grammar::new(GrammarVariant::CommandLine);
}

const COMMENT_PATTERN: &str = "//.*";
const IDENTIFIER_PATTERN: &str = "_?\\p{L}+[\\p{L}_0-9]*";
const NUMBER_PATTERN: &str = "[0-9]+(?:\\.[0-9]+)?";
const STRING_PATTERN: &str = "(?s)'(?:\\\\.|[^'\\\\])*'|\"(?:\\\\.|[^\"\\\\])*\"";

/// Which rule set to scan with: whole files or a single interactive line.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum GrammarVariant {
    #[default]
    Script,
    CommandLine,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Comment,
    Identifier,
    Punctuation,
    Number,
    String,
}

#[derive(Debug, Clone)]
pub struct RegexPattern {
    pub category: Category,
    regex: Regex,
}

impl RegexPattern {
    fn new(category: Category, pattern: &str) -> Self {
        RegexPattern {
            category,
            regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
        }
    }

    /// Matches at the very start of `input` or not at all.
    pub fn find<'s>(&self, input: &'s str) -> Option<&'s str> {
        self.regex.find(input).map(|matched| matched.as_str())
    }
}

/// An ordered alternation of category patterns. Earlier patterns win.
#[derive(Debug, Clone)]
pub struct Grammar {
    variant: GrammarVariant,
    patterns: Vec<RegexPattern>,
}

impl Grammar {
    pub fn new(variant: GrammarVariant) -> Grammar {
        Grammar {
            variant,
            patterns: vec![
                RegexPattern::new(Category::Comment, COMMENT_PATTERN),
                RegexPattern::new(Category::Identifier, IDENTIFIER_PATTERN),
                RegexPattern::new(Category::Punctuation, &punctuation_pattern(variant)),
                RegexPattern::new(Category::Number, NUMBER_PATTERN),
                RegexPattern::new(Category::String, STRING_PATTERN),
            ],
        }
    }

    /// The shared, compiled-once grammar for `variant`.
    pub fn get(variant: GrammarVariant) -> &'static Grammar {
        match variant {
            GrammarVariant::Script => &*SCRIPT_GRAMMAR,
            GrammarVariant::CommandLine => &*COMMAND_LINE_GRAMMAR,
        }
    }

    pub fn variant(&self) -> GrammarVariant {
        self.variant
    }

    pub fn patterns(&self) -> &[RegexPattern] {
        &self.patterns
    }

    /// Tries each category in declaration order and returns the first match.
    pub fn match_at<'s>(&self, input: &'s str) -> Option<(Category, &'s str)> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.find(input).map(|matched| (pattern.category, matched)))
    }

    pub fn supports(&self, punctuation: Punctuation) -> bool {
        punctuation.is_supported_by(self.variant)
    }

    pub fn punctuation(&self) -> impl Iterator<Item = Punctuation> + '_ {
        Punctuation::ALL
            .into_iter()
            .filter(move |punctuation| self.supports(*punctuation))
    }
}

/// Builds the punctuation alternation longest-first, so `...` beats `.` and
/// `==` beats `=`.
fn punctuation_pattern(variant: GrammarVariant) -> String {
    let mut symbols = Punctuation::ALL
        .into_iter()
        .filter(|punctuation| punctuation.is_supported_by(variant))
        .map(Punctuation::as_str)
        .collect::<Vec<&str>>();

    symbols.sort_by(|a, b| b.len().cmp(&a.len()));

    symbols
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<String>>()
        .join("|")
}
