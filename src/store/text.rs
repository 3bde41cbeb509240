//! The brace-delimited durable text format
//!
//! Each node is written as `NAME { key = value ... child ... }` with
//! whitespace between tokens being insignificant. Serialization is
//! deterministic: the same tree always produces byte-identical output, with
//! values and children in their in-memory order. Parsing is best-effort and
//! never fails hard; malformed sections are skipped in favour of loading
//! whatever remains readable.

use super::Node;

/// Characters that terminate a bare token.
const STRUCTURAL: [char; 4] = ['{', '}', '=', '"'];

/// Renders the tree to the durable text format.
#[must_use]
pub fn serialize(root: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);

    out.push_str(&indent);
    out.push_str(&written_atom(node.name()));
    out.push('\n');
    out.push_str(&indent);
    out.push_str("{\n");

    for (key, value) in node.values() {
        out.push_str(&indent);
        out.push_str("  ");
        out.push_str(&written_atom(key));
        out.push_str(" = ");
        out.push_str(&written_value(value));
        out.push('\n');
    }

    for child in node.children() {
        write_node(out, child, depth + 1);
    }

    out.push_str(&indent);
    out.push_str("}\n");
}

/// Node names and keys are written bare unless they contain whitespace or
/// structural characters.
fn written_atom(atom: &str) -> String {
    if atom.is_empty() || atom.contains(char::is_whitespace) || atom.contains(STRUCTURAL) {
        quote(atom)
    } else {
        atom.to_string()
    }
}

/// Values are read up to the end of the line or the next structural
/// character, so internal spaces survive unquoted; anything that would
/// confuse the tokenizer gets quoted.
fn written_value(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value.contains(STRUCTURAL)
        || value.contains(['\n', '\r', '\t'])
        || value.starts_with(' ')
        || value.ends_with(' ');

    if needs_quoting {
        quote(value)
    } else {
        value.to_string()
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Parses a serialized tree.
///
/// Returns `None` only when the input contains no parsable node at all.
/// Within a node, malformed entries (dangling names, stray braces or `=`)
/// are skipped and an unclosed node is accepted as-is.
#[must_use]
pub fn parse(input: &str) -> Option<Node> {
    Cursor { rest: input }.node()
}

struct Cursor<'a> {
    rest: &'a str,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) {
        let mut chars = self.rest.chars();
        chars.next();
        self.rest = chars.as_str();
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Reads a bare token up to whitespace or a structural character.
    fn atom(&mut self) -> &str {
        let end = self
            .rest
            .find(|c: char| c.is_whitespace() || STRUCTURAL.contains(&c))
            .unwrap_or(self.rest.len());
        let (atom, rest) = self.rest.split_at(end);
        self.rest = rest;
        atom
    }

    /// Reads a quoted string, unescaping `\"`, `\\`, `\n`, `\r`, and `\t`.
    /// An unterminated quote consumes the remaining input.
    fn quoted(&mut self) -> String {
        self.bump(); // opening quote
        let mut out = String::new();
        while let Some(c) = self.peek() {
            self.bump();
            match c {
                '"' => return out,
                '\\' => {
                    if let Some(escaped) = self.peek() {
                        self.bump();
                        match escaped {
                            'n' => out.push('\n'),
                            'r' => out.push('\r'),
                            't' => out.push('\t'),
                            other => out.push(other),
                        }
                    }
                }
                other => out.push(other),
            }
        }
        out
    }

    /// Reads a node name or key: quoted or bare. Returns `None` if the next
    /// token is structural.
    fn name(&mut self) -> Option<String> {
        match self.peek()? {
            '"' => Some(self.quoted()),
            '{' | '}' | '=' => None,
            _ => Some(self.atom().to_string()),
        }
    }

    fn node(&mut self) -> Option<Node> {
        self.skip_ws();
        let name = self.name().filter(|name| !name.is_empty())?;
        self.skip_ws();
        if self.peek() != Some('{') {
            return None;
        }
        self.bump();

        let mut node = Node::new(name);
        self.body_into(&mut node);
        Some(node)
    }

    /// Fills `node` with entries until the closing brace or end of input.
    fn body_into(&mut self, node: &mut Node) {
        loop {
            self.skip_ws();
            match self.peek() {
                // Unclosed node: accept what was read.
                None => break,
                Some('}') => {
                    self.bump();
                    break;
                }
                // Stray block without a name: skip it wholesale.
                Some('{') => {
                    self.bump();
                    self.skip_block();
                }
                // Stray '=': drop it.
                Some('=') => self.bump(),
                Some(_) => {
                    if let Some(name) = self.name().filter(|name| !name.is_empty()) {
                        self.entry_into(node, name);
                    }
                }
            }
        }
    }

    /// After a name, `=` starts a value and `{` starts a child node. A name
    /// followed by neither is dangling and gets dropped.
    fn entry_into(&mut self, node: &mut Node, name: String) {
        self.skip_ws();
        match self.peek() {
            Some('=') => {
                self.bump();
                let value = self.value();
                // Duplicate keys in a loaded file are preserved verbatim.
                node.push_value(name, value);
            }
            Some('{') => {
                self.bump();
                let child = node.add_child(name);
                self.body_into(child);
            }
            _ => {}
        }
    }

    /// Reads a value: quoted, or everything up to the end of the line or the
    /// next structural character, with surrounding whitespace trimmed.
    fn value(&mut self) -> String {
        self.rest = self.rest.trim_start_matches([' ', '\t']);
        if self.peek() == Some('"') {
            self.quoted()
        } else {
            let end = self
                .rest
                .find(|c: char| c == '\n' || c == '\r' || STRUCTURAL.contains(&c))
                .unwrap_or(self.rest.len());
            let (line, rest) = self.rest.split_at(end);
            self.rest = rest;
            line.trim_end().to_string()
        }
    }

    /// Skips a brace-balanced region following a stray `{`.
    fn skip_block(&mut self) {
        let mut depth = 1_usize;
        while let Some(c) = self.peek() {
            self.bump();
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}
