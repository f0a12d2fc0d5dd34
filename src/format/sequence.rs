// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::ident::{validate_ident, UNSUPPORTED_BLOCK_KEYWORDS};
use super::token::{tokenize_with, Token, TokenKind};
use crate::config::CompileOptions;
use crate::model::ids::{NodeId, TokenSpan};
use crate::model::seq_ast::{
    MessageStatement, NoteSide, NoteStatement, ObjectDeclaration, Program, SpaceStatement,
    Statement, StatementKind, StatementList,
};

/// Marker that splits a message or note body into lines.
pub const LINE_BREAK_MARKER: &str = "\\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Syntax { token_index: usize, found: String },
    UnsupportedConstruct { token_index: usize, keyword: String },
    InvalidGap { token_index: usize, text: String },
}

impl ParseError {
    pub fn token_index(&self) -> usize {
        match self {
            Self::Syntax { token_index, .. }
            | Self::UnsupportedConstruct { token_index, .. }
            | Self::InvalidGap { token_index, .. } => *token_index,
        }
    }

    /// True for every failure to match the grammar, i.e. everything except rejected blocks.
    pub fn is_syntax(&self) -> bool {
        !matches!(self, Self::UnsupportedConstruct { .. })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { token_index, found } => {
                write!(f, "syntax error at token {token_index}: unexpected {found:?}")
            }
            Self::UnsupportedConstruct { token_index, keyword } => write!(
                f,
                "unsupported construct at token {token_index}: '{keyword}' blocks cannot be laid out"
            ),
            Self::InvalidGap { token_index, text } => write!(
                f,
                "invalid space gap at token {token_index}: {text:?} (expected an integer up to {})",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Why a production did not produce a statement.
#[derive(Debug)]
enum Failure {
    /// The tokens do not match; `at` is the index of the first token that did not fit.
    NoMatch { at: usize },
    /// The tokens matched far enough to know the statement is invalid as a whole.
    Error(ParseError),
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token], pos: usize) -> Self {
        Self { tokens, pos }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::Eof, Token::kind)
    }

    fn no_match(&self) -> Failure {
        Failure::NoMatch { at: self.pos }
    }

    fn skip_spaces(&mut self) {
        while self.peek_kind() == TokenKind::Space {
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), Failure> {
        self.skip_spaces();
        if self.peek_kind() != kind {
            return Err(self.no_match());
        }
        self.pos += 1;
        Ok(())
    }

    fn keyword(&mut self, keyword: &str) -> Result<(), Failure> {
        self.skip_spaces();
        match self.peek() {
            Some(token) if token.is_word(keyword) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.no_match()),
        }
    }

    fn word(&mut self) -> Result<&'a Token, Failure> {
        self.skip_spaces();
        match self.peek() {
            Some(token) if token.kind() == TokenKind::Word => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.no_match()),
        }
    }

    fn ident(&mut self) -> Result<SmolStr, Failure> {
        let at = self.pos;
        let token = self.word()?;
        if validate_ident(token.text()).is_err() {
            self.pos = at;
            self.skip_spaces();
            return Err(self.no_match());
        }
        Ok(SmolStr::new(token.text()))
    }

    /// Consumes the terminating `;`, line break or end of input.
    fn end_of_statement(&mut self) -> Result<(), Failure> {
        self.skip_spaces();
        if !self.peek_kind().is_statement_end() {
            return Err(self.no_match());
        }
        if self.peek().is_some() {
            self.pos += 1;
        }
        Ok(())
    }

    /// Accumulates a free-text body up to (not including) the statement end.
    fn body(&mut self) -> String {
        self.skip_spaces();
        let mut raw = String::new();
        while !self.peek_kind().is_statement_end() {
            let Some(token) = self.peek() else {
                break;
            };
            match token.kind() {
                // Tabs count as one column like any other blank.
                TokenKind::Space => raw.push(' '),
                _ => raw.push_str(token.text()),
            }
            self.pos += 1;
        }
        normalize_body(&raw)
    }
}

/// Splits `raw` at [`LINE_BREAK_MARKER`], trims every line and drops blank leading and trailing
/// lines. Interior blanks inside a line are kept as written.
fn normalize_body(raw: &str) -> String {
    let lines = raw.split(LINE_BREAK_MARKER).map(str::trim).collect::<Vec<_>>();
    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

type Production = fn(&mut Cursor<'_>) -> Result<StatementKind, Failure>;

fn object_declaration(cursor: &mut Cursor<'_>) -> Result<StatementKind, Failure> {
    cursor.keyword("object")?;
    let mut names = vec![cursor.ident()?];
    loop {
        cursor.skip_spaces();
        if cursor.peek_kind().is_statement_end() {
            break;
        }
        names.push(cursor.ident()?);
    }
    cursor.end_of_statement()?;
    Ok(StatementKind::ObjectDeclaration(ObjectDeclaration::new(names)))
}

fn message(cursor: &mut Cursor<'_>) -> Result<StatementKind, Failure> {
    let sender = cursor.ident()?;
    cursor.expect(TokenKind::Arrow)?;
    let receiver = cursor.ident()?;
    cursor.skip_spaces();
    let text = if cursor.peek_kind() == TokenKind::Colon {
        cursor.pos += 1;
        cursor.body()
    } else {
        String::new()
    };
    cursor.end_of_statement()?;
    Ok(StatementKind::Message(MessageStatement::new(sender, receiver, text)))
}

fn note(cursor: &mut Cursor<'_>) -> Result<StatementKind, Failure> {
    let side_token = cursor.word()?;
    let side = match side_token.text() {
        "left" => NoteSide::Left,
        "right" => NoteSide::Right,
        _ => {
            cursor.pos -= 1;
            return Err(cursor.no_match());
        }
    };
    cursor.keyword("of")?;
    let participant = cursor.ident()?;
    cursor.expect(TokenKind::Colon)?;
    let text = cursor.body();
    cursor.end_of_statement()?;
    Ok(StatementKind::Note(NoteStatement::new(participant, side, text)))
}

fn space(cursor: &mut Cursor<'_>) -> Result<StatementKind, Failure> {
    cursor.keyword("space")?;
    cursor.skip_spaces();
    let at = cursor.pos;
    let token = cursor.word()?;
    if !token.text().bytes().all(|b| b.is_ascii_digit()) {
        cursor.pos = at;
        return Err(cursor.no_match());
    }
    let gap = token.text().parse::<u32>().map_err(|_| {
        Failure::Error(ParseError::InvalidGap { token_index: at, text: token.text().to_owned() })
    })?;
    Ok(StatementKind::Space(SpaceStatement::new(gap)))
}

fn unsupported_block(cursor: &mut Cursor<'_>) -> Result<StatementKind, Failure> {
    let at = cursor.pos;
    let token = cursor.word()?;
    Err(Failure::Error(ParseError::UnsupportedConstruct {
        token_index: at,
        keyword: token.text().to_owned(),
    }))
}

struct Rule {
    keywords: &'static [&'static str],
    production: Production,
    /// Whether a failed match may still be a message whose sender shares the keyword's spelling.
    message_fallback: bool,
}

const RULES: [Rule; 4] = [
    Rule { keywords: &["object"], production: object_declaration, message_fallback: true },
    Rule { keywords: &["left", "right"], production: note, message_fallback: true },
    Rule { keywords: &["space"], production: space, message_fallback: false },
    Rule {
        keywords: &UNSUPPORTED_BLOCK_KEYWORDS,
        production: unsupported_block,
        message_fallback: false,
    },
];

fn run(
    production: Production,
    tokens: &[Token],
    start: usize,
) -> Result<(StatementKind, usize), Failure> {
    let mut cursor = Cursor::new(tokens, start);
    let kind = production(&mut cursor)?;
    debug_assert!(cursor.pos > start, "productions consume their leading word");
    Ok((kind, cursor.pos - start))
}

fn syntax_error(tokens: &[Token], at: usize) -> ParseError {
    let found = tokens.get(at).map_or_else(|| "<eof>".to_owned(), ToString::to_string);
    ParseError::Syntax { token_index: at, found }
}

/// Parses the statement whose leading word is `tokens[start]`.
///
/// On success returns the statement and the number of tokens it consumed. Nothing is committed
/// on failure.
fn parse_statement(tokens: &[Token], start: usize) -> Result<(StatementKind, usize), ParseError> {
    let lead = tokens[start].text();
    let rule = RULES.iter().find(|rule| rule.keywords.iter().any(|keyword| *keyword == lead));

    let mut furthest = start;
    let mut attempts = Vec::<Production>::with_capacity(2);
    match rule {
        Some(rule) => {
            attempts.push(rule.production);
            if rule.message_fallback {
                attempts.push(message);
            }
        }
        None => attempts.push(message),
    }

    for production in attempts {
        match run(production, tokens, start) {
            Ok(parsed) => return Ok(parsed),
            Err(Failure::Error(err)) => return Err(err),
            Err(Failure::NoMatch { at }) => furthest = furthest.max(at),
        }
    }

    Err(syntax_error(tokens, furthest))
}

/// Parses a token stream produced by [`tokenize_with`](super::token::tokenize_with).
///
/// Statements start at `Word` tokens; any other token found between statements (blank lines,
/// loose punctuation, stray `;`) is skipped. The whole stream must be consumed, otherwise no
/// program is returned.
pub fn parse_tokens(tokens: &[Token]) -> Result<Program, ParseError> {
    let mut statements = Vec::<Statement>::new();
    let mut pos = 0usize;

    while let Some(token) = tokens.get(pos) {
        if token.kind() != TokenKind::Word {
            pos += 1;
            continue;
        }

        let (kind, consumed) = parse_statement(tokens, pos)?;
        let id = NodeId::new(statements.len());
        trace!(%id, start = pos, consumed, "parsed statement");
        statements.push(Statement::new(id, TokenSpan::new(pos, consumed), kind));
        pos += consumed;
    }

    debug_assert_eq!(pos, tokens.len(), "statement list consumes the whole stream");
    let span = TokenSpan::new(0, tokens.len());
    debug!(tokens = tokens.len(), statements = statements.len(), "parsed sequence program");
    Ok(Program::new(span, StatementList::new(span, statements)))
}

/// Tokenizes and parses `input` with default options.
pub fn parse_sequence(input: &str) -> Result<Program, ParseError> {
    parse_sequence_with(input, &CompileOptions::default())
}

pub fn parse_sequence_with(input: &str, options: &CompileOptions) -> Result<Program, ParseError> {
    let tokens = tokenize_with(input, options.comment_newline);
    parse_tokens(&tokens)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{normalize_body, parse_sequence, parse_sequence_with, ParseError};
    use crate::config::{CommentNewline, CompileOptions};
    use crate::model::seq_ast::{NoteSide, Program, StatementKind};
    use crate::model::TokenSpan;

    fn kinds(program: &Program) -> Vec<StatementKind> {
        program.statements().iter().map(|stmt| stmt.kind().clone()).collect()
    }

    fn message(program: &Program, idx: usize) -> (String, String, String) {
        match program.statements()[idx].kind() {
            StatementKind::Message(msg) => {
                (msg.sender().to_owned(), msg.receiver().to_owned(), msg.text().to_owned())
            }
            other => panic!("expected message, got {other:?}"),
        }
    }

    #[test]
    fn parses_object_declaration_with_several_names() {
        let program = parse_sequence("object A B  C;").expect("parse");
        let kinds = kinds(&program);
        let [StatementKind::ObjectDeclaration(decl)] = kinds.as_slice() else {
            panic!("expected one declaration");
        };
        assert_eq!(decl.names(), ["A", "B", "C"]);
        assert_eq!(program.statements()[0].span(), TokenSpan::new(0, 9));
    }

    #[test]
    fn parses_message_with_text() {
        let program = parse_sequence("A->B: hi there").expect("parse");
        assert_eq!(message(&program, 0), ("A".into(), "B".into(), "hi there".into()));
    }

    #[test]
    fn parses_message_without_text() {
        let program = parse_sequence("A -> B\nB->A;").expect("parse");
        assert_eq!(message(&program, 0), ("A".into(), "B".into(), String::new()));
        assert_eq!(message(&program, 1), ("B".into(), "A".into(), String::new()));
    }

    #[test]
    fn message_text_keeps_punctuation_and_interior_spaces() {
        let program = parse_sequence("A->B:   x -> y:  z!   \n").expect("parse");
        assert_eq!(message(&program, 0).2, "x -> y:  z!");
    }

    #[test]
    fn message_text_splits_on_line_break_marker() {
        let program = parse_sequence("A->B: first \\n  second\\n").expect("parse");
        assert_eq!(message(&program, 0).2, "first\nsecond");
    }

    #[test]
    fn semicolon_ends_message_text() {
        let program = parse_sequence("A->B: one; B->A: two").expect("parse");
        assert_eq!(program.statements().len(), 2);
        assert_eq!(message(&program, 0).2, "one");
        assert_eq!(message(&program, 1).2, "two");
    }

    #[rstest]
    #[case("left of A: note text", NoteSide::Left)]
    #[case("right of A : note text", NoteSide::Right)]
    fn parses_notes(#[case] input: &str, #[case] side: NoteSide) {
        let program = parse_sequence(input).expect("parse");
        let StatementKind::Note(note) = program.statements()[0].kind() else {
            panic!("expected note");
        };
        assert_eq!(note.participant(), "A");
        assert_eq!(note.side(), side);
        assert_eq!(note.text(), "note text");
    }

    #[test]
    fn parses_space_statement() {
        let program = parse_sequence("space 3\nspace   0").expect("parse");
        let gaps = program
            .statements()
            .iter()
            .map(|stmt| match stmt.kind() {
                StatementKind::Space(space) => space.gap(),
                other => panic!("expected space, got {other:?}"),
            })
            .collect::<Vec<_>>();
        assert_eq!(gaps, vec![3, 0]);
    }

    #[test]
    fn keyword_spelled_participants_fall_back_to_messages() {
        let program = parse_sequence("left->object: hi").expect("parse");
        assert_eq!(message(&program, 0), ("left".into(), "object".into(), "hi".into()));
    }

    #[test]
    fn skips_loose_tokens_between_statements() {
        let program = parse_sequence("\n\n;; : ->\nobject A\n\n  ;A->A\n").expect("parse");
        assert_eq!(program.statements().len(), 2);
    }

    #[test]
    fn empty_source_is_an_empty_program() {
        assert!(parse_sequence("").expect("parse").is_empty());
        assert!(parse_sequence("// only a comment").expect("parse").is_empty());
    }

    #[rstest]
    #[case("A-> ;", 3, ";")]
    #[case("A B", 2, "B")]
    #[case("object", 1, "<eof>")]
    #[case("object A, B", 3, ",")]
    #[case("left of A text", 6, "text")]
    #[case("A->B C", 4, "C")]
    #[case("A->space: x", 2, "space")]
    #[case("space x", 2, "x")]
    #[case("note A", 0, "note")]
    fn reports_syntax_errors(#[case] input: &str, #[case] token_index: usize, #[case] found: &str) {
        let err = parse_sequence(input).unwrap_err();
        assert_eq!(err, ParseError::Syntax { token_index, found: found.to_owned() });
        assert!(err.is_syntax());
    }

    #[rstest]
    #[case("loop forever")]
    #[case("A->B\nalt ok")]
    #[case("opt")]
    fn rejects_block_constructs(#[case] input: &str) {
        let err = parse_sequence(input).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedConstruct { .. }), "got {err:?}");
        assert!(!err.is_syntax());
    }

    #[test]
    fn rejects_gap_that_does_not_fit() {
        let err = parse_sequence("space 99999999999").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidGap { token_index: 2, text: "99999999999".to_owned() }
        );
    }

    #[test]
    fn swallowed_comment_newline_merges_lines() {
        let err = parse_sequence("A->B // hello\nB->A").unwrap_err();
        assert!(err.is_syntax());

        let program = parse_sequence("A->B; // hello\nB->A").expect("parse");
        assert_eq!(program.statements().len(), 2);
    }

    #[test]
    fn kept_comment_newline_ends_the_statement() {
        let options = CompileOptions::default().with_comment_newline(CommentNewline::Keep);
        let program = parse_sequence_with("A->B // hello\nB->A", &options).expect("parse");
        assert_eq!(program.statements().len(), 2);
    }

    #[test]
    fn normalize_body_drops_blank_edge_lines() {
        assert_eq!(normalize_body("  \\n a \\n\\n b \\n "), "a\n\nb");
        assert_eq!(normalize_body("   "), "");
    }

    #[test]
    fn errors_render_readable_messages() {
        let err = parse_sequence("loop").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported construct at token 0: 'loop' blocks cannot be laid out"
        );
    }
}
