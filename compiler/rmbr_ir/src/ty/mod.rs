//! Host type references.
//!
//! A [`TypeRef`] is the generator's view of a declared parameter type: a
//! (usually fully qualified) name, generic arguments, and a nullability flag.
//! Rendering decisions (imports, short names) belong to codegen; this module
//! only parses and walks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A reference to a host-language type, e.g. `kotlin.collections.List<com.x.User>?`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TypeRefRepr", into = "String")]
pub struct TypeRef {
    /// Qualified name (`com.example.User`) or a bare simple name (`Int`).
    pub name: String,
    pub args: Vec<TypeRef>,
    pub nullable: bool,
}

impl TypeRef {
    /// Non-generic, non-null reference.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            args: Vec::new(),
            nullable: false,
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<TypeRef>) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn simple_name(&self) -> &str {
        crate::simple_name(&self.name)
    }

    /// Package part of the name; empty for bare names.
    pub fn package(&self) -> &str {
        crate::package_of(&self.name)
    }

    /// Star projection (`*`) in argument position.
    pub fn is_star(&self) -> bool {
        self.name == "*"
    }

    /// Pre-order visit of this reference and all nested arguments.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a TypeRef)) {
        f(self);
        for arg in &self.args {
            arg.walk(f);
        }
    }

    /// Render with a caller-supplied name mapping (used by codegen to shorten
    /// imported names).
    pub fn render_with(&self, name_of: &dyn Fn(&TypeRef) -> String) -> String {
        let mut out = if self.is_star() {
            String::from("*")
        } else {
            name_of(self)
        };
        if !self.args.is_empty() {
            out.push('<');
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&arg.render_with(name_of));
            }
            out.push('>');
        }
        if self.nullable {
            out.push('?');
        }
        out
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&|t| t.name.clone()))
    }
}

impl From<TypeRef> for String {
    fn from(ty: TypeRef) -> Self {
        ty.to_string()
    }
}

/// Failure to parse a textual type reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParseError {
    pub input: String,
    pub offset: usize,
    pub reason: &'static str,
}

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid type `{}` at offset {}: {}",
            self.input, self.offset, self.reason
        )
    }
}

impl std::error::Error for TypeParseError {}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser {
            input: s,
            pos: 0,
        };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos != s.len() {
            return Err(parser.error("trailing characters"));
        }
        Ok(ty)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn error(&self, reason: &'static str) -> TypeParseError {
        TypeParseError {
            input: self.input.to_string(),
            offset: self.pos,
            reason,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn parse_name(&mut self) -> Result<String, TypeParseError> {
        self.skip_ws();
        if self.peek() == Some('*') {
            self.pos += 1;
            return Ok(String::from("*"));
        }
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '.' || c == '$' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        let name = &self.input[start..self.pos];
        if name.is_empty() {
            return Err(self.error("expected a type name"));
        }
        if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
            return Err(self.error("malformed qualified name"));
        }
        Ok(name.to_string())
    }

    fn parse_type(&mut self) -> Result<TypeRef, TypeParseError> {
        let name = self.parse_name()?;
        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.parse_type()?);
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(self.error("expected `,` or `>`"));
            }
        }
        let nullable = self.eat('?');
        Ok(TypeRef {
            name,
            args,
            nullable,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeRefRepr {
    Text(String),
    Structured {
        name: String,
        #[serde(default)]
        args: Vec<TypeRef>,
        #[serde(default)]
        nullable: bool,
    },
}

impl TryFrom<TypeRefRepr> for TypeRef {
    type Error = TypeParseError;

    fn try_from(repr: TypeRefRepr) -> Result<Self, Self::Error> {
        match repr {
            TypeRefRepr::Text(text) => text.parse(),
            TypeRefRepr::Structured {
                name,
                args,
                nullable,
            } => Ok(TypeRef {
                name,
                args,
                nullable,
            }),
        }
    }
}
