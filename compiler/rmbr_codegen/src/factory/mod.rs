//! Memoized factory emitter.
//!
//! ```text
//! @Composable
//! internal fun rememberCounter(
//!     start: Int = 10,
//!     repo: Repo = injectClass(),
//! ): Counter = remember(start) {
//!     Counter(
//!         start = start,
//!         repo = repo,
//!     )
//! }
//! ```

use rmbr_ir::host::{self, escape_ident};
use rmbr_ir::ResolvedClass;

use crate::{unit, EmitContext, ImportTable, OutputUnit};

pub fn factory_name(simple: &str) -> String {
    format!("remember{simple}")
}

pub fn emit_factory(class: &ResolvedClass, stamp: Option<u64>) -> OutputUnit {
    let model = &class.model;
    let simple = model.simple_name();

    let mut imports = ImportTable::new(model.namespace.as_str());
    register_signature(&mut imports, class);
    imports.add_symbol(host::REMEMBER);

    let mut ctx = EmitContext::new(&imports);
    write_signature(&mut ctx, &factory_name(simple), class);

    let keys: Vec<_> = model.invalidation_keys().map(|p| escape_ident(&p.name)).collect();
    let remember = ctx.symbol(host::REMEMBER);
    let class_name = ctx.class(&model.qualified_name);
    if keys.is_empty() {
        ctx.write(&format!(": {class_name} = {remember} {{\n"));
    } else {
        ctx.write(&format!(": {class_name} = {remember}({}) {{\n", keys.join(", ")));
    }
    write_construction(&mut ctx, class);
    ctx.writeln("}");

    let body = ctx.take_output();
    OutputUnit {
        namespace: model.namespace.clone(),
        file_name: format!("Remember{simple}"),
        text: unit::frame(&model.namespace, &imports, &body, stamp),
    }
}

/// Register the class, parameter types and default-expression names of a
/// composable factory signature.
pub(crate) fn register_signature(imports: &mut ImportTable, class: &ResolvedClass) {
    imports.add_symbol(host::COMPOSABLE);
    imports.add_type(&rmbr_ir::TypeRef::named(class.model.qualified_name.as_str()));
    for (param, default) in class.params() {
        imports.add_type(&param.ty);
        if let Some(expr) = default.expr() {
            if let Some(ty) = expr.type_arg() {
                imports.add_type(ty);
            }
            for symbol in expr.symbols() {
                imports.add_symbol(symbol);
            }
        }
    }
}

/// Write `@Composable internal fun name(params)` up to the closing paren.
/// Every parameter keeps its declaration order and resolved default.
pub(crate) fn write_signature(ctx: &mut EmitContext<'_>, name: &str, class: &ResolvedClass) {
    let composable = ctx.symbol(host::COMPOSABLE);
    ctx.writeln(&format!("@{composable}"));
    ctx.write(&format!("internal fun {name}("));
    if class.model.params.is_empty() {
        ctx.write(")");
        return;
    }
    ctx.newline();
    ctx.indent();
    for (param, default) in class.params() {
        let name = escape_ident(&param.name);
        let ty = ctx.ty(&param.ty);
        match default.expr() {
            Some(expr) => {
                let value = ctx.expr(expr);
                ctx.writeln(&format!("{name}: {ty} = {value},"));
            }
            None => ctx.writeln(&format!("{name}: {ty},")),
        }
    }
    ctx.dedent();
    ctx.write(")");
}

/// Write the indented constructor call forwarding every parameter by name.
pub(crate) fn write_construction(ctx: &mut EmitContext<'_>, class: &ResolvedClass) {
    let class_name = ctx.class(&class.model.qualified_name);
    ctx.indent();
    ctx.write_named_args(
        &format!("{class_name}("),
        class
            .model
            .params
            .iter()
            .map(|p| {
                let name = escape_ident(&p.name).into_owned();
                (name.clone(), name)
            }),
        ")",
    );
    ctx.dedent();
}

#[cfg(test)]
mod tests;
