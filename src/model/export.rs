//! Program export, as written by the external bytecode analysis library.

use super::{Field, Instruction, Program};
use log::debug;
use serde::Deserialize;

/// Serialized form of a program.
#[derive(Debug, Default, Deserialize)]
pub struct ProgramExport {
    #[serde(default)]
    classes: Vec<ClassExport>,
    #[serde(default)]
    strings: Vec<StringExport>,
    #[serde(default)]
    xrefs: Vec<XrefExport>,
}

#[derive(Debug, Deserialize)]
struct ClassExport {
    name: String,
    #[serde(default)]
    external: bool,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    methods: Vec<MethodExport>,
}

#[derive(Debug, Deserialize)]
struct MethodExport {
    name: String,
    #[serde(default)]
    descriptor: String,
    #[serde(default)]
    external: bool,
    #[serde(default)]
    instructions: Option<Vec<Instruction>>,
    #[serde(default)]
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MethodRef {
    class: String,
    name: String,
    #[serde(default)]
    descriptor: String,
}

#[derive(Debug, Deserialize)]
struct StringExport {
    value: String,
    #[serde(default)]
    sites: Vec<MethodRef>,
}

#[derive(Debug, Deserialize)]
struct XrefExport {
    caller: MethodRef,
    callee: MethodRef,
    #[serde(default)]
    offset: usize,
}

impl From<ProgramExport> for Program {
    fn from(export: ProgramExport) -> Self {
        let mut builder = Program::builder();

        for class in export.classes {
            let id = builder.class(class.name, class.external);
            for field in class.fields {
                builder.field(id, field.name(), field.value());
            }
            for method in class.methods {
                match method.instructions {
                    Some(instructions) if !method.external => {
                        let _ = builder.method(
                            id,
                            &method.name,
                            &method.descriptor,
                            instructions,
                            method.source.as_deref(),
                        );
                    }
                    _ => {
                        let _ = builder.external_method(id, &method.name, &method.descriptor);
                    }
                }
            }
        }

        for string in export.strings {
            let sites: Vec<_> = string
                .sites
                .iter()
                .filter_map(|site| builder.lookup(&site.class, &site.name, &site.descriptor))
                .collect();
            builder.string(string.value, &sites);
        }

        for xref in export.xrefs {
            let caller = builder.lookup(&xref.caller.class, &xref.caller.name, &xref.caller.descriptor);
            let callee = builder.lookup(&xref.callee.class, &xref.callee.name, &xref.callee.descriptor);
            match (caller, callee) {
                (Some(caller), Some(callee)) => builder.call(caller, callee, xref.offset),
                _ => debug!(
                    "ignoring cross reference {}.{} -> {}.{}: unknown method",
                    xref.caller.class, xref.caller.name, xref.callee.class, xref.callee.name
                ),
            }
        }

        builder.build()
    }
}
