use logos::Logos;

use crate::stats::Counters;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\f\x0B]+")]
enum Lexeme {
    // ── Line structure ───────────────────────
    #[token("\n")]
    Newline,

    #[regex(r"#[^\n]*")]
    Comment,

    // ── Everything else up to a blank ───────
    #[regex(r"[^ \t\r\f\x0B\n#]+")]
    Word,
}

/// Tokens of one physical line, comment stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tokens: Vec<String>,
    /// The input ended on this line.
    pub at_end: bool,
    /// 1-based physical line number.
    pub line_no: usize,
}

impl Line {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined back with single spaces, for diagnostics.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Splits the source into lines of whitespace-separated tokens.
pub struct Tokenizer<'src> {
    lex: logos::Lexer<'src, Lexeme>,
    line_no: usize,
    done: bool,
    counters: Counters,
}

impl<'src> Tokenizer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            lex: Lexeme::lexer(src),
            line_no: 0,
            done: false,
            counters: Counters::default(),
        }
    }

    /// Next physical line. Once a line with `at_end` set has been returned,
    /// every further call returns an empty `at_end` line.
    pub fn next_line(&mut self) -> Line {
        let line = self.scan_line();
        if !line.is_empty() {
            self.counters.lines += 1;
        }
        line
    }

    /// First line holding tokens, skipping blank and comment-only lines.
    /// It is not counted in `lines`.
    pub fn header_line(&mut self) -> Line {
        loop {
            let line = self.scan_line();
            if !line.is_empty() || line.at_end {
                return line;
            }
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    fn scan_line(&mut self) -> Line {
        let mut tokens = Vec::new();
        let mut commented = false;
        self.line_no += 1;
        let line_no = self.line_no;

        if self.done {
            return Line { tokens, at_end: true, line_no };
        }

        loop {
            match self.lex.next() {
                Some(Ok(Lexeme::Newline)) => break,
                Some(Ok(Lexeme::Comment)) => {
                    if !commented {
                        commented = true;
                        self.counters.comments += 1;
                    }
                }
                Some(Ok(Lexeme::Word)) | Some(Err(())) => {
                    tokens.push(self.lex.slice().to_string());
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        Line { tokens, at_end: self.done, line_no }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &Line) -> Vec<&str> {
        line.tokens.iter().map(String::as_str).collect()
    }

    #[test]
    fn splits_on_any_blank() {
        let mut t = Tokenizer::new("MOVE\tGF@x  int@5\r\nWRITE GF@x\n");
        let first = t.next_line();
        assert_eq!(words(&first), ["MOVE", "GF@x", "int@5"]);
        assert!(!first.at_end);
        assert_eq!(words(&t.next_line()), ["WRITE", "GF@x"]);
        let last = t.next_line();
        assert!(last.is_empty() && last.at_end);
        assert_eq!(t.counters(), Counters { lines: 2, comments: 0 });
    }

    #[test]
    fn comment_closes_token() {
        let mut t = Tokenizer::new("WRITE GF@x#note # more\n");
        let line = t.next_line();
        assert_eq!(words(&line), ["WRITE", "GF@x"]);
        assert_eq!(t.counters(), Counters { lines: 1, comments: 1 });
    }

    #[test]
    fn blank_and_comment_only_lines() {
        let mut t = Tokenizer::new("\n   \n# only a comment\nBREAK\n");
        for _ in 0..3 {
            assert!(t.next_line().is_empty());
        }
        assert_eq!(words(&t.next_line()), ["BREAK"]);
        assert_eq!(t.counters(), Counters { lines: 1, comments: 1 });
    }

    #[test]
    fn last_line_without_newline() {
        let mut t = Tokenizer::new("CREATEFRAME\nPUSHFRAME");
        assert!(!t.next_line().at_end);
        let last = t.next_line();
        assert_eq!(words(&last), ["PUSHFRAME"]);
        assert!(last.at_end);
        assert_eq!(last.line_no, 2);
        assert!(t.next_line().at_end);
        assert_eq!(t.counters().lines, 2);
    }

    #[test]
    fn empty_input_ends_immediately() {
        let mut t = Tokenizer::new("");
        let line = t.next_line();
        assert!(line.is_empty() && line.at_end);
        assert_eq!(t.counters(), Counters::default());
    }

    #[test]
    fn header_line_skips_blank_lines_and_is_not_counted() {
        let mut t = Tokenizer::new("\n# intro\n.IPPcode18 # header\nBREAK\n");
        let header = t.header_line();
        assert_eq!(words(&header), [".IPPcode18"]);
        assert_eq!(header.line_no, 3);
        assert_eq!(t.counters(), Counters { lines: 0, comments: 2 });
        t.next_line();
        assert_eq!(t.counters(), Counters { lines: 1, comments: 2 });
    }

    #[test]
    fn text_rejoins_tokens() {
        let mut t = Tokenizer::new("ADD   GF@x\tint@1");
        assert_eq!(t.next_line().text(), "ADD GF@x int@1");
    }
}
