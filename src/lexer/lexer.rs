use regex::Regex;

use crate::{errors::errors::FatalSyntaxError, Loc, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    left_spacing: bool,
    fatal: Option<FatalSyntaxError>,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer::new_at(source, Loc::start())
    }

    /// A lexer whose first character sits at `base` in the enclosing
    /// document. Used for the embedded expressions of templates.
    fn new_at(source: String, base: Loc) -> Lexer {
        Lexer {
            pos: 0,
            line: base.line,
            column: base.column,
            left_spacing: false,
            fatal: None,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: word_handler },
                RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\r?\n").unwrap(), handler: newline_handler },
                RegexPattern { regex: Regex::new("[ \t]+").unwrap(), handler: spacing_handler },
                RegexPattern { regex: Regex::new("//[^\n]*").unwrap(), handler: spacing_handler },
                RegexPattern { regex: Regex::new("/\\*").unwrap(), handler: block_comment_handler },
                RegexPattern { regex: Regex::new("[\"']").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("`").unwrap(), handler: template_handler },
                RegexPattern { regex: Regex::new("###").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Sharp3, "###") },
                RegexPattern { regex: Regex::new("#\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenSharpBracket, "#[") },
                RegexPattern { regex: Regex::new("::").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon2, "::") },
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SemiColon, ";") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
                RegexPattern { regex: Regex::new("=>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "=>") },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq2, "==") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "=") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEq, "!=") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LtEq, "<=") },
                RegexPattern { regex: Regex::new("<:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Out, "<:") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt, "<") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GtEq, ">=") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt, ">") },
                RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or2, "||") },
                RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And2, "&&") },
                RegexPattern { regex: Regex::new("\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEq, "+=") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEq, "-=") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
                RegexPattern { regex: Regex::new("\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Hat, "^") },
                RegexPattern { regex: Regex::new("@").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::At, "@") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBrace, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBrace, "}") },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
                RegexPattern { regex: Regex::new("\\\\").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BackSlash, "\\") },
            ],
            source,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn loc(&self) -> Loc {
        Loc::new(self.line, self.column)
    }

    pub fn take_left_spacing(&mut self) -> bool {
        std::mem::take(&mut self.left_spacing)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Advances past `text`, keeping line/column counts in step.
    pub fn advance_str(&mut self, text: &str) {
        for c in text.chars() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn run(mut self) -> Result<Vec<Token>, FatalSyntaxError> {
        // Handlers borrow the lexer mutably, so the table lives outside
        // `self` while matching runs.
        let patterns = std::mem::take(&mut self.patterns);

        while !self.at_eof() {
            let mut matched = false;

            for pattern in &patterns {
                let found = match pattern.regex.find(self.remainder()) {
                    Some(m) => m.start() == 0,
                    None => false,
                };

                if found {
                    (pattern.handler)(&mut self, &pattern.regex);
                    matched = true;
                    break;
                }
            }

            if let Some(fatal) = self.fatal.take() {
                return Err(fatal);
            }

            if !matched {
                let c = self.remainder().chars().next().unwrap();
                return Err(FatalSyntaxError::new(
                    format!("unrecognised character `{}`", c),
                    self.loc(),
                ));
            }
        }

        let loc = self.loc();
        self.push(Token::eof(loc));
        Ok(self.tokens)
    }
}

fn word_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let loc = lexer.loc();
    let spacing = lexer.take_left_spacing();

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(MK_TOKEN!(*kind, value.clone(), loc, spacing));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, value.clone(), loc, spacing));
    }

    lexer.advance_str(&value);
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let loc = lexer.loc();
    let spacing = lexer.take_left_spacing();

    lexer.push(MK_TOKEN!(TokenKind::NumberLiteral, value.clone(), loc, spacing));
    lexer.advance_str(&value);
}

fn newline_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let loc = lexer.loc();
    let spacing = lexer.take_left_spacing();

    lexer.push(MK_TOKEN!(TokenKind::NewLine, String::from("\n"), loc, spacing));
    lexer.advance_str(&value);
}

/// Spaces, tabs and comments produce no token; they mark the next token as
/// left-spaced instead.
fn spacing_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_str(&value);
    lexer.left_spacing = true;
}

/// Block comments. Scanned with a cursor rather than matched as a single
/// regex so that bodies ending in `*` (as in `/* note **/`) close properly.
/// A comment left open runs to the end of the document.
fn block_comment_handler(lexer: &mut Lexer, _regex: &Regex) {
    let rem = lexer.remainder().to_string();
    let end = match rem[2..].find("*/") {
        Some(n) => 2 + n + 2,
        None => rem.len(),
    };
    lexer.advance_str(&rem[..end]);
    lexer.left_spacing = true;
}

fn string_handler(lexer: &mut Lexer, _regex: &Regex) {
    let rem = lexer.remainder().to_string();
    let mut chars = rem.chars();
    let quote = chars.next().unwrap();

    let loc = lexer.loc();
    let spacing = lexer.take_left_spacing();

    let mut value = String::new();
    let mut consumed = quote.len_utf8();
    let mut closed = false;

    while let Some(c) = chars.next() {
        consumed += c.len_utf8();

        if c == quote {
            closed = true;
            break;
        }

        if c == '\\' {
            if let Some(escaped) = chars.next() {
                consumed += escaped.len_utf8();
                match escaped {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '0' => value.push('\0'),
                    '\\' | '"' | '\'' | '`' => value.push(escaped),
                    _ => {
                        // Keep the backslash
                        value.push(c);
                        value.push(escaped);
                    }
                }
            } else {
                value.push(c);
            }
        } else {
            value.push(c);
        }
    }

    if !closed {
        lexer.fatal = Some(FatalSyntaxError::new("unterminated string", loc));
        return;
    }

    lexer.push(MK_TOKEN!(TokenKind::StringLiteral, value, loc, spacing));
    lexer.advance_str(&rem[..consumed]);
}

/// Backtick templates. Plain text runs become string-element children;
/// `{expr}` fragments are sub-tokenized into an EOF-terminated child
/// sequence the parser later parses as an expression.
fn template_handler(lexer: &mut Lexer, _regex: &Regex) {
    let rem = lexer.remainder().to_string();
    let loc = lexer.loc();
    let spacing = lexer.take_left_spacing();

    let mut children: Vec<Token> = vec![];
    let mut buf = String::new();

    // Local cursor mirroring what advance_str will do at the end.
    let mut cur = loc;
    let step = |cur: &mut Loc, c: char| {
        if c == '\n' {
            cur.line += 1;
            cur.column = 1;
        } else {
            cur.column += 1;
        }
    };

    let chars: Vec<char> = rem.chars().collect();
    let mut i = 1; // past the opening backtick
    step(&mut cur, '`');

    let mut buf_loc = cur;
    let mut consumed: Option<usize> = None;

    while i < chars.len() {
        let c = chars[i];

        match c {
            '`' => {
                if !buf.is_empty() {
                    children.push(Token {
                        kind: TokenKind::TemplateStringElement,
                        value: std::mem::take(&mut buf),
                        loc: buf_loc,
                        has_left_spacing: false,
                        children: None,
                    });
                }
                step(&mut cur, c);
                i += 1;
                consumed = Some(i);
                break;
            }
            '\\' if i + 1 < chars.len() => {
                buf.push(chars[i + 1]);
                step(&mut cur, c);
                step(&mut cur, chars[i + 1]);
                i += 2;
            }
            '{' => {
                if !buf.is_empty() {
                    children.push(Token {
                        kind: TokenKind::TemplateStringElement,
                        value: std::mem::take(&mut buf),
                        loc: buf_loc,
                        has_left_spacing: false,
                        children: None,
                    });
                }

                let expr_loc = cur;
                step(&mut cur, c);
                i += 1;

                let expr_start = i;
                let inner_loc = cur;
                let mut depth = 1;
                // Braces inside string and template literals do not nest.
                let mut quote: Option<char> = None;
                while i < chars.len() {
                    match quote {
                        Some(q) => {
                            if chars[i] == '\\' && i + 1 < chars.len() {
                                step(&mut cur, chars[i]);
                                i += 1;
                            } else if chars[i] == q {
                                quote = None;
                            }
                        }
                        None => match chars[i] {
                            '"' | '\'' | '`' => quote = Some(chars[i]),
                            '{' => depth += 1,
                            '}' => {
                                depth -= 1;
                                if depth == 0 {
                                    break;
                                }
                            }
                            _ => {}
                        },
                    }
                    step(&mut cur, chars[i]);
                    i += 1;
                }

                if depth != 0 {
                    lexer.fatal = Some(FatalSyntaxError::new(
                        "unterminated template expression",
                        expr_loc,
                    ));
                    return;
                }

                let inner: String = chars[expr_start..i].iter().collect();
                match tokenize_at(inner, inner_loc) {
                    Ok(sub_tokens) => {
                        children.push(Token {
                            kind: TokenKind::TemplateExprElement,
                            value: String::new(),
                            loc: expr_loc,
                            has_left_spacing: false,
                            children: Some(sub_tokens),
                        });
                    }
                    Err(err) => {
                        lexer.fatal = Some(err);
                        return;
                    }
                }

                step(&mut cur, '}');
                i += 1;
                buf_loc = cur;
            }
            _ => {
                if buf.is_empty() {
                    buf_loc = cur;
                }
                buf.push(c);
                step(&mut cur, c);
                i += 1;
            }
        }
    }

    let consumed = match consumed {
        Some(n) => n,
        None => {
            lexer.fatal = Some(FatalSyntaxError::new("unterminated template", loc));
            return;
        }
    };

    lexer.push(Token {
        kind: TokenKind::Template,
        value: String::new(),
        loc,
        has_left_spacing: spacing,
        children: Some(children),
    });

    let byte_len: usize = chars[..consumed].iter().map(|c| c.len_utf8()).sum();
    lexer.advance_str(&rem[..byte_len]);
}

/// Tokenizes a whole document into an EOF-terminated token sequence.
pub fn tokenize(source: String) -> Result<Vec<Token>, FatalSyntaxError> {
    Lexer::new(source).run()
}

fn tokenize_at(source: String, base: Loc) -> Result<Vec<Token>, FatalSyntaxError> {
    Lexer::new_at(source, base).run()
}
