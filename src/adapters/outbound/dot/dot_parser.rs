use crate::dependency_graph::domain::Edge;
use crate::ports::outbound::GraphDescriptionParser;
use crate::shared::error::ExplorerError;
use crate::shared::Result;

/// DotParser adapter for Graphviz DOT graph descriptions
///
/// Covers the subset of DOT that Maven's `dependency:tree -DoutputType=dot`
/// writes, plus what hand-edited files commonly add:
///
/// - one or more `digraph`/`graph` blocks (multi-module reactors append one
///   block per module), optionally `strict` and named
/// - quoted ids with `\"` escapes and `+` concatenation, bare ids, numerals
///   and `<...>` HTML ids
/// - edge chains (`a -> b -> c`), `--` edges, node ports (`a:p:n`)
/// - node statements, `graph`/`node`/`edge` defaults, `key = value`
///   assignments and `[...]` attribute lists, all of which carry no edges
/// - `subgraph` blocks, whose edges are collected like top-level ones
/// - `//`, `/* */` and line-leading `#` comments
///
/// Edges are returned in the order they appear in the file.
pub struct DotParser;

impl DotParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DotParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphDescriptionParser for DotParser {
    fn parse(&self, source_name: &str, content: &str) -> Result<Vec<Edge>> {
        let to_error = |failure: SyntaxError| ExplorerError::DotParseError {
            source_name: source_name.to_string(),
            line: failure.line,
            details: failure.details,
        };

        let tokens = tokenize(content).map_err(to_error)?;
        let mut parser = Parser::new(&tokens);
        parser.parse_file().map_err(to_error)?;
        Ok(parser.edges)
    }
}

#[derive(Debug)]
struct SyntaxError {
    line: usize,
    details: String,
}

impl SyntaxError {
    fn new(line: usize, details: impl Into<String>) -> Self {
        Self {
            line,
            details: details.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Id { text: String, quoted: bool },
    DirectedEdge,
    UndirectedEdge,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Equals,
    Semicolon,
    Comma,
    Colon,
    Plus,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    line: usize,
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.' || !c.is_ascii()
}

fn tokenize(input: &str) -> std::result::Result<Vec<Token>, SyntaxError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut line = 1;
    let mut line_start = true;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '\n' {
            line += 1;
            line_start = true;
            i += 1;
            continue;
        }
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Comments
        if (c == '#' && line_start) || (c == '/' && next == Some('/')) {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }
        if c == '/' && next == Some('*') {
            let start_line = line;
            i += 2;
            loop {
                match (chars.get(i), chars.get(i + 1)) {
                    (None, _) => return Err(SyntaxError::new(start_line, "unterminated comment")),
                    (Some('*'), Some('/')) => {
                        i += 2;
                        break;
                    }
                    (Some('\n'), _) => line += 1,
                    _ => {}
                }
                i += 1;
            }
            continue;
        }

        line_start = false;
        let token_line = line;
        let single = match c {
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            '=' => Some(TokenKind::Equals),
            ';' => Some(TokenKind::Semicolon),
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            '+' => Some(TokenKind::Plus),
            _ => None,
        };
        if let Some(kind) = single {
            tokens.push(Token { kind, line: token_line });
            i += 1;
            continue;
        }

        match c {
            '-' if next == Some('>') => {
                tokens.push(Token {
                    kind: TokenKind::DirectedEdge,
                    line: token_line,
                });
                i += 2;
            }
            '-' if next == Some('-') => {
                tokens.push(Token {
                    kind: TokenKind::UndirectedEdge,
                    line: token_line,
                });
                i += 2;
            }
            '"' => {
                let mut text = String::new();
                i += 1;
                loop {
                    match chars.get(i) {
                        None => return Err(SyntaxError::new(token_line, "unterminated string")),
                        Some('"') => {
                            i += 1;
                            break;
                        }
                        Some('\\') if chars.get(i + 1) == Some(&'"') => {
                            text.push('"');
                            i += 2;
                        }
                        // Line continuation
                        Some('\\') if chars.get(i + 1) == Some(&'\n') => {
                            line += 1;
                            i += 2;
                        }
                        Some(&ch) => {
                            if ch == '\n' {
                                line += 1;
                            }
                            text.push(ch);
                            i += 1;
                        }
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Id { text, quoted: true },
                    line: token_line,
                });
            }
            '<' => {
                let mut text = String::new();
                let mut depth = 1;
                i += 1;
                loop {
                    match chars.get(i) {
                        None => return Err(SyntaxError::new(token_line, "unterminated HTML id")),
                        Some('<') => depth += 1,
                        Some('>') => {
                            depth -= 1;
                            if depth == 0 {
                                i += 1;
                                break;
                            }
                        }
                        Some('\n') => line += 1,
                        _ => {}
                    }
                    text.push(chars[i]);
                    i += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Id { text, quoted: true },
                    line: token_line,
                });
            }
            c if is_id_char(c) || (c == '-' && next.is_some_and(|n| n.is_ascii_digit() || n == '.')) => {
                let start = i;
                i += 1;
                while i < chars.len() && is_id_char(chars[i]) {
                    i += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Id {
                        text: chars[start..i].iter().collect(),
                        quoted: false,
                    },
                    line: token_line,
                });
            }
            other => {
                return Err(SyntaxError::new(
                    token_line,
                    format!("unexpected character '{}'", other),
                ))
            }
        }
    }

    Ok(tokens)
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    edges: Vec<Edge>,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            edges: Vec::new(),
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&'t TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Line of the current token, or of the last one at end of input
    fn line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|token| token.line)
            .unwrap_or(1)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        matches!(
            self.peek_kind(),
            Some(TokenKind::Id { text, quoted: false }) if text.eq_ignore_ascii_case(keyword)
        )
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> std::result::Result<(), SyntaxError> {
        if self.peek_kind() == Some(&kind) {
            self.pos += 1;
            Ok(())
        } else {
            Err(SyntaxError::new(self.line(), format!("expected {}", what)))
        }
    }

    fn expect_id(&mut self, what: &str) -> std::result::Result<(String, bool), SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::Id { text, quoted }) => {
                self.pos += 1;
                Ok((text.clone(), *quoted))
            }
            _ => Err(SyntaxError::new(self.line(), format!("expected {}", what))),
        }
    }

    fn parse_file(&mut self) -> std::result::Result<(), SyntaxError> {
        if self.tokens.is_empty() {
            return Err(SyntaxError::new(1, "no digraph found"));
        }
        while self.peek().is_some() {
            self.parse_graph()?;
        }
        Ok(())
    }

    fn parse_graph(&mut self) -> std::result::Result<(), SyntaxError> {
        if self.at_keyword("strict") {
            self.pos += 1;
        }
        if !(self.at_keyword("digraph") || self.at_keyword("graph")) {
            return Err(SyntaxError::new(self.line(), "expected 'digraph'"));
        }
        self.pos += 1;

        if let Some(TokenKind::Id { .. }) = self.peek_kind() {
            self.pos += 1;
        }
        self.expect(TokenKind::LBrace, "'{' after graph header")?;
        self.parse_stmt_list()?;
        self.expect(TokenKind::RBrace, "'}' to close the graph")
    }

    fn parse_stmt_list(&mut self) -> std::result::Result<(), SyntaxError> {
        loop {
            match self.peek_kind() {
                None | Some(TokenKind::RBrace) => return Ok(()),
                Some(TokenKind::Semicolon) | Some(TokenKind::Comma) => self.pos += 1,
                Some(_) => self.parse_stmt()?,
            }
        }
    }

    fn parse_stmt(&mut self) -> std::result::Result<(), SyntaxError> {
        if self.at_keyword("subgraph") || self.peek_kind() == Some(&TokenKind::LBrace) {
            return self.parse_subgraph();
        }
        if self.at_keyword("graph") || self.at_keyword("node") || self.at_keyword("edge") {
            self.pos += 1;
            if self.peek_kind() != Some(&TokenKind::LBracket) {
                return Err(SyntaxError::new(self.line(), "expected '[' after attribute statement"));
            }
            return self.skip_attr_lists();
        }

        let line = self.line();
        let mut current = self.parse_node_id()?;

        if self.peek_kind() == Some(&TokenKind::Equals) {
            self.pos += 1;
            self.expect_id("value after '='")?;
            return Ok(());
        }

        while matches!(
            self.peek_kind(),
            Some(TokenKind::DirectedEdge) | Some(TokenKind::UndirectedEdge)
        ) {
            self.pos += 1;
            if self.at_keyword("subgraph") || self.peek_kind() == Some(&TokenKind::LBrace) {
                return Err(SyntaxError::new(self.line(), "edges to subgraphs are not supported"));
            }
            let target = self.parse_node_id()?;
            let edge = Edge::from_ids(&current, &target)
                .map_err(|e| SyntaxError::new(line, e.to_string()))?;
            self.edges.push(edge);
            current = target;
        }

        self.skip_attr_lists()
    }

    fn parse_subgraph(&mut self) -> std::result::Result<(), SyntaxError> {
        if self.at_keyword("subgraph") {
            self.pos += 1;
            if let Some(TokenKind::Id { .. }) = self.peek_kind() {
                self.pos += 1;
            }
        }
        self.expect(TokenKind::LBrace, "'{' to open the subgraph")?;
        self.parse_stmt_list()?;
        self.expect(TokenKind::RBrace, "'}' to close the subgraph")?;

        if matches!(
            self.peek_kind(),
            Some(TokenKind::DirectedEdge) | Some(TokenKind::UndirectedEdge)
        ) {
            return Err(SyntaxError::new(self.line(), "edges from subgraphs are not supported"));
        }
        Ok(())
    }

    /// Node id with optional `+` concatenation and `:port[:compass]` suffix
    fn parse_node_id(&mut self) -> std::result::Result<String, SyntaxError> {
        let (mut id, quoted) = self.expect_id("node id")?;

        if quoted {
            while self.peek_kind() == Some(&TokenKind::Plus) {
                self.pos += 1;
                match self.advance().map(|token| &token.kind) {
                    Some(TokenKind::Id { text, quoted: true }) => id.push_str(text),
                    _ => {
                        return Err(SyntaxError::new(
                            self.line(),
                            "expected quoted string after '+'",
                        ))
                    }
                }
            }
        }

        for _ in 0..2 {
            if self.peek_kind() != Some(&TokenKind::Colon) {
                break;
            }
            self.pos += 1;
            self.expect_id("port after ':'")?;
        }

        Ok(id)
    }

    fn skip_attr_lists(&mut self) -> std::result::Result<(), SyntaxError> {
        while self.peek_kind() == Some(&TokenKind::LBracket) {
            let start_line = self.line();
            self.pos += 1;
            loop {
                match self.advance().map(|token| &token.kind) {
                    None => return Err(SyntaxError::new(start_line, "unterminated attribute list")),
                    Some(TokenKind::RBracket) => break,
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}
