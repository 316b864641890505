use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lexical symbols of the Turbo Pascal dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Illegal,
    Eof,

    // Symbols
    Assign,
    At,
    Colon,
    Comma,
    Dot,
    DotDot,
    Equals,
    Greater,
    Gte,
    LBracket,
    Less,
    LParen,
    Lte,
    Minus,
    NotEquals,
    Plus,
    Pointer,
    RBracket,
    RParen,
    Semicolon,
    Slash,
    Star,
    SlashSlash,
    LParenStar,
    RParenStar,

    // Keywords
    And,
    Array,
    Begin,
    Case,
    Const,
    Div,
    Do,
    Downto,
    Else,
    End,
    False,
    File,
    Finalization,
    For,
    Function,
    Goto,
    If,
    Implementation,
    In,
    Initialization,
    Inline,
    Interface,
    Interrupt,
    Label,
    Mod,
    Nil,
    Not,
    Of,
    Or,
    Procedure,
    Program,
    Record,
    Repeat,
    Shl,
    Shr,
    Then,
    To,
    True,
    Type,
    Unit,
    Until,
    Uses,
    Var,
    While,
    With,
    Xor,

    // Literals and names
    Ident,
    Num,
    Hex,
    Str,
}

const KEYWORDS: &[Token] = &[
    Token::And,
    Token::Array,
    Token::Begin,
    Token::Case,
    Token::Const,
    Token::Div,
    Token::Do,
    Token::Downto,
    Token::Else,
    Token::End,
    Token::False,
    Token::File,
    Token::Finalization,
    Token::For,
    Token::Function,
    Token::Goto,
    Token::If,
    Token::Implementation,
    Token::In,
    Token::Initialization,
    Token::Inline,
    Token::Interface,
    Token::Interrupt,
    Token::Label,
    Token::Mod,
    Token::Nil,
    Token::Not,
    Token::Of,
    Token::Or,
    Token::Procedure,
    Token::Program,
    Token::Record,
    Token::Repeat,
    Token::Shl,
    Token::Shr,
    Token::Then,
    Token::To,
    Token::True,
    Token::Type,
    Token::Unit,
    Token::Until,
    Token::Uses,
    Token::Var,
    Token::While,
    Token::With,
    Token::Xor,
];

lazy_static! {
    // Uppercase keyword spelling -> token, built once from the spelling table
    static ref KEYWORD_TOKENS: HashMap<&'static str, Token> =
        KEYWORDS.iter().map(|token| (token.spelling(), *token)).collect();
}

impl Token {
    /// Canonical spelling: uppercase words for keywords, the literal glyph for
    /// punctuation.
    pub fn spelling(&self) -> &'static str {
        match self {
            Token::Illegal => "<illegal>",
            Token::Eof => "EOF",

            Token::Assign => ":=",
            Token::At => "@",
            Token::Colon => ":",
            Token::Comma => ",",
            Token::Dot => ".",
            Token::DotDot => "..",
            Token::Equals => "=",
            Token::Greater => ">",
            Token::Gte => ">=",
            Token::LBracket => "[",
            Token::Less => "<",
            Token::LParen => "(",
            Token::Lte => "<=",
            Token::Minus => "-",
            Token::NotEquals => "<>",
            Token::Plus => "+",
            Token::Pointer => "^",
            Token::RBracket => "]",
            Token::RParen => ")",
            Token::Semicolon => ";",
            Token::Slash => "/",
            Token::Star => "*",
            Token::SlashSlash => "//",
            Token::LParenStar => "(*",
            Token::RParenStar => "*)",

            Token::And => "AND",
            Token::Array => "ARRAY",
            Token::Begin => "BEGIN",
            Token::Case => "CASE",
            Token::Const => "CONST",
            Token::Div => "DIV",
            Token::Do => "DO",
            Token::Downto => "DOWNTO",
            Token::Else => "ELSE",
            Token::End => "END",
            Token::False => "FALSE",
            Token::File => "FILE",
            Token::Finalization => "FINALIZATION",
            Token::For => "FOR",
            Token::Function => "FUNCTION",
            Token::Goto => "GOTO",
            Token::If => "IF",
            Token::Implementation => "IMPLEMENTATION",
            Token::In => "IN",
            Token::Initialization => "INITIALIZATION",
            Token::Inline => "INLINE",
            Token::Interface => "INTERFACE",
            Token::Interrupt => "INTERRUPT",
            Token::Label => "LABEL",
            Token::Mod => "MOD",
            Token::Nil => "NIL",
            Token::Not => "NOT",
            Token::Of => "OF",
            Token::Or => "OR",
            Token::Procedure => "PROCEDURE",
            Token::Program => "PROGRAM",
            Token::Record => "RECORD",
            Token::Repeat => "REPEAT",
            Token::Shl => "SHL",
            Token::Shr => "SHR",
            Token::Then => "THEN",
            Token::To => "TO",
            Token::True => "TRUE",
            Token::Type => "TYPE",
            Token::Unit => "UNIT",
            Token::Until => "UNTIL",
            Token::Uses => "USES",
            Token::Var => "VAR",
            Token::While => "WHILE",
            Token::With => "WITH",
            Token::Xor => "XOR",

            Token::Ident => "IDENT",
            Token::Num => "NUM",
            Token::Hex => "HEX",
            Token::Str => "STR",
        }
    }

    /// Keyword-style symbols are the ones spelled as an uppercase word.
    pub fn is_keyword(&self) -> bool {
        self.spelling().starts_with(|c: char| c.is_ascii_uppercase()) && KEYWORDS.contains(self)
    }

    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus
                | Token::Minus
                | Token::Star
                | Token::Slash
                | Token::Equals
                | Token::NotEquals
                | Token::Less
                | Token::Lte
                | Token::Greater
                | Token::Gte
                | Token::And
                | Token::Or
                | Token::Xor
                | Token::Div
                | Token::Mod
                | Token::Shl
                | Token::Shr
                | Token::In
        )
    }

    pub fn is_unary_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Not)
    }
}

/// Returns the keyword token for `name` (any case), or `Token::Illegal` if the
/// name is not a keyword.
pub fn keyword_token(name: &str) -> Token {
    KEYWORD_TOKENS
        .get(name.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(Token::Illegal)
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}
