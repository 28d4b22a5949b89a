//! Saver and persistence-aware factory emitter.
//!
//! The save map contract is captured by [`SaverPlan`]; the emitter only
//! prints it. Both functions of a class share one unit,
//! `RememberSaveable<Simple>.kt`.

mod plan;

pub use plan::{RestoreArg, RestoreSource, SaveEntry, SaverPlan};

use rmbr_ir::host::{self, escape_ident, quote_string};
use rmbr_ir::{ClassModel, ResolvedClass};

use crate::factory::{register_signature, write_construction, write_signature};
use crate::{unit, EmitContext, ImportTable, OutputUnit};

pub fn saver_name(simple: &str) -> String {
    format!("get{simple}Saver")
}

pub fn persistent_factory_name(simple: &str) -> String {
    format!("rememberSaveable{simple}")
}

pub fn emit_persistence(class: &ResolvedClass, stamp: Option<u64>) -> OutputUnit {
    let model = &class.model;
    let simple = model.simple_name();
    let plan = SaverPlan::new(model);

    let mut imports = ImportTable::new(model.namespace.as_str());
    register_signature(&mut imports, class);
    for symbol in [host::SAVER, host::MAP_SAVER, host::REMEMBER_SAVEABLE] {
        imports.add_symbol(symbol);
    }

    let mut ctx = EmitContext::new(&imports);
    write_saver(&mut ctx, model, &plan);
    ctx.newline();
    write_persistent_factory(&mut ctx, class, &plan);

    let body = ctx.take_output();
    OutputUnit {
        namespace: model.namespace.clone(),
        file_name: format!("RememberSaveable{simple}"),
        text: unit::frame(&model.namespace, &imports, &body, stamp),
    }
}

fn write_saver(ctx: &mut EmitContext<'_>, model: &ClassModel, plan: &SaverPlan) {
    let class_name = ctx.class(&model.qualified_name);
    let saver = ctx.symbol(host::SAVER);
    let map_saver = ctx.symbol(host::MAP_SAVER);

    ctx.write(&format!("internal fun {}(", saver_name(model.simple_name())));
    let carried: Vec<_> = model.carried_params().collect();
    if !carried.is_empty() {
        ctx.newline();
        ctx.indent();
        for param in carried {
            let ty = ctx.ty(&param.ty);
            ctx.writeln(&format!("{}: {ty},", escape_ident(&param.name)));
        }
        ctx.dedent();
    }
    ctx.write(&format!("): {saver}<{class_name}, Any> = {map_saver}(\n"));
    ctx.indent();

    if plan.save.is_empty() {
        ctx.writeln("save = { _ -> emptyMap() },");
    } else {
        let instance = unused_name("instance", model);
        ctx.writeln(&format!("save = {{ {instance} ->"));
        ctx.indent();
        ctx.writeln("mapOf(");
        ctx.indent();
        for entry in &plan.save {
            ctx.writeln(&format!(
                "{} to {instance}.{},",
                quote_string(&entry.key),
                escape_ident(&entry.property)
            ));
        }
        ctx.dedent();
        ctx.writeln(")");
        ctx.dedent();
        ctx.writeln("},");
    }

    let map = unused_name("map", model);
    let lambda_param = if plan.reads_map() { map.as_str() } else { "_" };
    ctx.writeln(&format!("restore = {{ {lambda_param} ->"));
    let args: Vec<(String, String)> = plan
        .restore
        .iter()
        .zip(&model.params)
        .map(|(arg, param)| {
            let name = escape_ident(&arg.param).into_owned();
            let value = match &arg.source {
                RestoreSource::Map { key } => {
                    format!("{map}[{}] as {}", quote_string(key), ctx.ty(&param.ty))
                }
                RestoreSource::Forward => name.clone(),
            };
            (name, value)
        })
        .collect();
    ctx.indent();
    ctx.write_named_args(&format!("{class_name}("), args, ")");
    ctx.dedent();
    ctx.writeln("},");

    ctx.dedent();
    ctx.writeln(")");
}

/// `base`, or `base` with the smallest numeric suffix that no constructor
/// parameter uses. Lambda parameters named this way never shadow a saver
/// parameter.
fn unused_name(base: &str, model: &ClassModel) -> String {
    let taken = |name: &str| model.params.iter().any(|p| p.name == name);
    let mut candidate = base.to_string();
    let mut suffix = 1;
    while taken(&candidate) {
        candidate = format!("{base}{suffix}");
        suffix += 1;
    }
    candidate
}

fn write_persistent_factory(ctx: &mut EmitContext<'_>, class: &ResolvedClass, plan: &SaverPlan) {
    let model = &class.model;
    let simple = model.simple_name();
    write_signature(ctx, &persistent_factory_name(simple), class);

    let class_name = ctx.class(&model.qualified_name);
    let remember_saveable = ctx.symbol(host::REMEMBER_SAVEABLE);
    ctx.write(&format!(": {class_name} = {remember_saveable}(\n"));
    ctx.indent();
    for key in model.invalidation_keys() {
        ctx.writeln(&format!("{},", escape_ident(&key.name)));
    }
    ctx.write_named_args(
        &format!("saver = {}(", saver_name(simple)),
        plan.carried().map(|name| {
            let name = escape_ident(name).into_owned();
            (name.clone(), name)
        }),
        "),",
    );
    ctx.dedent();
    ctx.writeln(") {");
    write_construction(ctx, class);
    ctx.writeln("}");
}
