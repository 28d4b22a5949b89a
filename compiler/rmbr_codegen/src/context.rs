//! Emission context: an indenting text buffer bound to an import table.

use rmbr_ir::host::{RenderNames, Symbol};
use rmbr_ir::{DefaultExpr, TypeRef};

use crate::ImportTable;

/// Output buffer and name rendering for one unit.
pub struct EmitContext<'a> {
    names: &'a ImportTable,
    indent: usize,
    output: String,
}

impl<'a> EmitContext<'a> {
    pub fn new(names: &'a ImportTable) -> Self {
        EmitContext {
            names,
            indent: 0,
            output: String::with_capacity(1024),
        }
    }

    #[inline]
    pub fn ty(&self, ty: &TypeRef) -> String {
        self.names.type_name(ty)
    }

    #[inline]
    pub fn symbol(&self, symbol: Symbol) -> String {
        self.names.symbol(symbol)
    }

    #[inline]
    pub fn expr(&self, expr: &DefaultExpr) -> String {
        expr.render(self.names)
    }

    /// Printed name of a class given its qualified name.
    pub fn class(&self, qualified: &str) -> String {
        self.names.type_name(&TypeRef::named(qualified))
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write a line with indentation and newline.
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Write `name = value,` lines for a named argument list, one per line,
    /// inside `open` and `close`. Empty lists collapse to `open` + `close`
    /// without the line breaks.
    pub fn write_named_args<I>(&mut self, open: &str, args: I, close: &str)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut args = args.into_iter().peekable();
        if args.peek().is_none() {
            self.write_indent();
            self.write(open);
            self.write(close);
            self.newline();
            return;
        }
        self.writeln(open);
        self.indent();
        for (name, value) in args {
            self.writeln(&format!("{name} = {value},"));
        }
        self.dedent();
        self.writeln(close);
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
