//! Operand roles and the per-grammar scanners that classify a token.
//!
//! Every grammar is a full-token match written as a small character-class
//! scanner. The matched text is stored verbatim: string escapes are not
//! decoded and integer literals are not range-checked here.

use std::fmt;

/// Expected category of an operand position, fixed by the instruction table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Var,
    /// Variable or constant.
    Symb,
    Label,
    Type,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Var => "variable",
            Role::Symb => "symbol (variable or constant)",
            Role::Label => "label",
            Role::Type => "type",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstKind {
    Int,
    Bool,
    String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeName {
    Int,
    Bool,
    String,
}

impl TypeName {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Bool => "bool",
            TypeName::String => "string",
        }
    }
}

impl ConstKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstKind::Int => "int",
            ConstKind::Bool => "bool",
            ConstKind::String => "string",
        }
    }
}

/// A classified instruction argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Full token, frame prefix included (`GF@x`).
    Var(String),
    /// Text after `kind@`.
    Const { kind: ConstKind, raw: String },
    Label(String),
    Type(TypeName),
}

impl Operand {
    /// Value of the `type` attribute in the XML document.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Operand::Var(_) => "var",
            Operand::Const { kind, .. } => kind.as_str(),
            Operand::Label(_) => "label",
            Operand::Type(_) => "type",
        }
    }

    /// Text content of the argument element.
    pub fn value(&self) -> &str {
        match self {
            Operand::Var(name) | Operand::Label(name) => name,
            Operand::Const { raw, .. } => raw,
            Operand::Type(t) => t.as_str(),
        }
    }
}

/// Classify `tok` against `role`. `None` when no grammar for the role matches.
pub fn classify(tok: &str, role: Role) -> Option<Operand> {
    match role {
        Role::Var => var(tok),
        Role::Label => label(tok),
        Role::Type => type_name(tok).map(Operand::Type),
        Role::Symb => var(tok).or_else(|| constant(tok)),
    }
}

fn var(tok: &str) -> Option<Operand> {
    let (frame, name) = tok.split_once('@')?;
    if matches!(frame, "LF" | "TF" | "GF") && is_identifier(name) {
        Some(Operand::Var(tok.to_string()))
    } else {
        None
    }
}

fn label(tok: &str) -> Option<Operand> {
    is_identifier(tok).then(|| Operand::Label(tok.to_string()))
}

fn type_name(tok: &str) -> Option<TypeName> {
    match tok {
        "int" => Some(TypeName::Int),
        "bool" => Some(TypeName::Bool),
        "string" => Some(TypeName::String),
        _ => None,
    }
}

// int, bool, string: the `kind@` prefixes keep these disjoint.
fn constant(tok: &str) -> Option<Operand> {
    let (kind, raw) = if let Some(raw) = tok.strip_prefix("int@") {
        (ConstKind::Int, raw)
    } else if let Some(raw) = tok.strip_prefix("bool@") {
        if !matches!(raw, "true" | "false") {
            return None;
        }
        (ConstKind::Bool, raw)
    } else if let Some(raw) = tok.strip_prefix("string@") {
        if !is_string_body(raw) {
            return None;
        }
        (ConstKind::String, raw)
    } else {
        return None;
    };
    Some(Operand::Const { kind, raw: raw.to_string() })
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '-' | '$' | '&' | '%' | '*')
}

pub(crate) fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => chars.all(is_ident_char),
        _ => false,
    }
}

/// Plain characters except whitespace, `#` and `\`; or `\` followed by
/// exactly three ASCII digits.
pub(crate) fn is_string_body(s: &str) -> bool {
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            for _ in 0..3 {
                match chars.next() {
                    Some(d) if d.is_ascii_digit() => {}
                    _ => return false,
                }
            }
        } else if c.is_whitespace() || c == '#' {
            return false;
        }
    }
    true
}
