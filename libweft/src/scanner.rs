//! Module `scanner` tokenizes weft documents.

#[macro_use]
mod errors;
pub mod types;

pub use errors::ScanErrors;

use crate::common::Span;
use crate::diagnostics::Diagnostic;
use crate::utils::PeekIter;
use errors::*;
use types::*;

/// The result of scanning a weft document.
pub struct ScanResult {
    /// The scanned tokens. Always terminated by an [EOF token](TokenType::EOF).
    pub tokens: Vec<Token>,
    /// Diagnostics encountered while scanning.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scans a weft document into tokens.
///
/// Scanning is total: characters that cannot form a token are emitted as
/// [invalid tokens](TokenType::Invalid) alongside a diagnostic, and scanning continues.
pub fn scan<T: Into<String>>(input: T) -> ScanResult {
    let mut scanner = Scanner::new(input);
    scanner.scan();
    ScanResult {
        tokens: scanner.output,
        diagnostics: scanner.diagnostics,
    }
}

struct Scanner {
    input: PeekIter<char>,
    /// Byte offset of the next unconsumed character.
    pos: usize,
    output: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    fn new<T: Into<String>>(input: T) -> Scanner {
        let chars: Vec<char> = input.into().chars().collect();

        Scanner {
            input: PeekIter::new(chars.into_iter()),
            pos: 0,
            output: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn scan(&mut self) {
        while let Some(c) = self.input.peek().copied() {
            match c {
                _ if c.is_whitespace() => {
                    self.next_char();
                }
                '/' if self.input.peek_at(1) == Some(&'/') => self.skip_line_comment(),
                '/' if self.input.peek_at(1) == Some(&'*') => self.skip_block_comment(),
                _ if c.is_ascii_digit() => self.scan_num(),
                '"' => self.scan_str(),
                _ if c.is_alphabetic() || c == '_' => self.scan_word(),
                _ => self.scan_symbol(),
            }
        }

        self.output
            .push(Token::new(TokenType::EOF, Span::empty_at(self.pos)));
    }

    /// Consumes the next character, advancing the byte offset cursor.
    fn next_char(&mut self) -> Option<char> {
        let c = self.input.next();
        if let Some(c) = c {
            self.pos += c.len_utf8();
        }
        c
    }

    /// Consumes characters matching a predicate into a string, advancing the byte offset cursor.
    fn collect_chars(&mut self, predicate: impl Fn(&char) -> bool) -> String {
        let collected: String = self.input.collect_while(predicate);
        self.pos += collected.len();
        collected
    }

    fn skip_line_comment(&mut self) {
        self.collect_chars(|c| *c != '\n');
    }

    fn skip_block_comment(&mut self) {
        let start = self.pos;
        self.next_char(); // /
        self.next_char(); // *
        loop {
            match self.next_char() {
                Some('*') if self.input.peek() == Some(&'/') => {
                    self.next_char();
                    return;
                }
                Some(_) => {}
                None => {
                    self.push_diag(UnterminatedComment!(Span::new(start, start + 2)));
                    return;
                }
            }
        }
    }

    fn scan_symbol(&mut self) {
        use TokenType::*;
        let start = self.pos;
        let c = self.next_char().unwrap();
        let two = |this: &mut Self, next: char, yes: TokenType, no: TokenType| {
            if this.input.peek() == Some(&next) {
                this.next_char();
                yes
            } else {
                no
            }
        };
        let ty = match c {
            '{' => OpenBrace,
            '}' => CloseBrace,
            '(' => OpenParen,
            ')' => CloseParen,
            ':' => Colon,
            ';' => Semi,
            ',' => Comma,
            '.' => Dot,
            '+' => Plus,
            '-' => Minus,
            '*' => Mult,
            '/' => Div,
            '%' => Mod,
            '<' => two(self, '=', LtEq, Lt),
            '>' => two(self, '=', GtEq, Gt),
            '=' => two(self, '=', EqEq, Equal),
            '!' => two(self, '=', NotEq, Not),
            c => {
                let span = Span::new(start, self.pos);
                self.push_diag(InvalidCharacter!(span, c));
                Invalid(c.to_string())
            }
        };
        self.output.push(Token::new(ty, (start, self.pos)));
    }

    fn scan_num(&mut self) {
        let start = self.pos;
        let mut num_str = self.collect_chars(|c| c.is_ascii_digit());
        let dot = self.input.peek() == Some(&'.');
        let digit_after_dot = matches!(self.input.peek_at(1), Some(c) if c.is_ascii_digit());
        if dot && digit_after_dot {
            num_str.push('.');
            self.next_char();
            num_str.push_str(&self.collect_chars(|c| c.is_ascii_digit()));
        }
        // The collected characters are all digits around at most one dot, so this cannot fail.
        let num = num_str.parse::<f64>().unwrap();
        self.output
            .push(Token::new(TokenType::Number(num), (start, self.pos)));
    }

    fn scan_str(&mut self) {
        let start = self.pos;
        self.next_char(); // "
        let mut content = String::new();
        loop {
            match self.input.peek() {
                Some(&'"') => {
                    self.next_char();
                    break;
                }
                Some(&'\\') => {
                    self.next_char();
                    if let Some(escaped) = self.next_char() {
                        content.push(match escaped {
                            'n' => '\n',
                            't' => '\t',
                            c => c,
                        });
                    }
                }
                Some(&'\n') | None => {
                    self.push_diag(UnterminatedString!(Span::new(start, self.pos)));
                    break;
                }
                Some(_) => content.push(self.next_char().unwrap()),
            }
        }
        self.output
            .push(Token::new(TokenType::Str(content), (start, self.pos)));
    }

    fn scan_word(&mut self) {
        use TokenType::*;
        let start = self.pos;
        let word = self.collect_chars(|c| c.is_alphanumeric() || *c == '_');
        let ty = match word.as_str() {
            "import" => Import,
            "function" => Function,
            "var" => Var,
            "return" => Return,
            "true" => True,
            "false" => False,
            _ => Ident(word),
        };
        self.output.push(Token::new(ty, (start, self.pos)));
    }

    fn push_diag(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    // Tests the Scanner's output against a humanized string representation of the expected
    // tokens. See [Token]'s impl of Display for more details.
    macro_rules! scanner_tests {
        ($($name:ident: $program:expr, $format_str:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::scanner::scan;

                let mut tokens = scan($program)
                    .tokens
                    .into_iter()
                    .map(|tok| tok.to_string())
                    .collect::<Vec<_>>();
                tokens.pop(); // EOF
                assert_eq!(tokens.join(" "), $format_str);
            }
        )*
        }
    }

    mod scan {
        scanner_tests! {
            number: "2", "2"
            number_with_fraction: "3.25", "3.25"
            string: "\"abc\"", "\"abc\""
            string_with_escape: r#""a\"b""#, "\"a\"b\""
            ident: "Rect", "Rect"
            ident_with_underscore: "on_close", "on_close"
            keywords: "import function var return true false",
                      "import function var return true false"
            braces: "{}", "{ }"
            parens: "()", "( )"
            punctuation: ": ; , .", ": ; , ."
            operators: "+ - * / %", "+ - * / %"
            comparisons: "< > <= >= == !=", "< > <= >= == !="
            assign_and_not: "= !", "= !"
            empty_string: "", ""
            skip_whitespace: "  :  ", ":"
            skip_line_comment: "a // b c\nd", "a d"
            skip_block_comment: "a /* b\nc */ d", "a d"
            object_header: "Item {", "Item {"
            dotted_name: "display.Window", "display . Window"
            binding: "width: 40", "width : 40"
        }
    }

    mod scan_invalid {
        scanner_tests! {
            invalid_tokens: "@", "Invalid(@)"
            invalid_tokens_mixed_with_valid: ":@/", ": Invalid(@) /"
            number_with_trailing_dot: "1.x", "1 . x"
        }
    }

    mod spans {
        use crate::scanner::scan;

        #[test]
        fn token_spans_cover_source() {
            let source = "Item { width: 40 }";
            let texts: Vec<_> = scan(source)
                .tokens
                .iter()
                .map(|tok| tok.span.over(source))
                .collect();
            assert_eq!(texts, vec!["Item", "{", "width", ":", "40", "}", ""]);
        }

        #[test]
        fn string_span_includes_quotes() {
            let source = r#"title: "hi""#;
            let tokens = scan(source).tokens;
            let str_tok = &tokens[2];
            assert_eq!(str_tok.span.over(source), "\"hi\"");
        }
    }

    mod diagnostics {
        use crate::scanner::scan;

        #[test]
        fn invalid_character() {
            let diags = scan("width: @").diagnostics;
            assert_eq!(diags.len(), 1);
            assert_eq!(diags[0].code, "S0001");
            assert_eq!((diags[0].span.lo, diags[0].span.hi), (7, 8));
        }

        #[test]
        fn unterminated_string() {
            let diags = scan("title: \"abc").diagnostics;
            assert_eq!(diags.len(), 1);
            assert_eq!(diags[0].code, "S0002");
        }

        #[test]
        fn unterminated_comment() {
            let diags = scan("/* abc").diagnostics;
            assert_eq!(diags.len(), 1);
            assert_eq!(diags[0].code, "S0003");
        }
    }
}
