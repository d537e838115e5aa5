//! Program model module.
//!
//! The program model is the read-only representation of a decompiled application: its classes,
//! methods, instructions, string pool and call graph. It is produced by an external bytecode
//! analysis library and only queried here, through the [`ProgramModel`] trait.

mod export;
mod program;

pub use self::{
    export::ProgramExport,
    program::{Program, ProgramBuilder},
};

use crate::error::Kind;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Builds a name pattern.
///
/// Patterns are matched from the start of the fully-qualified, slash-delimited name, so
/// `Ljava/util/Random|Lkotlin/random/Random` matches both classes but not
/// `Lcom/example/Ljava/util/Random;`.
pub fn pattern<S: AsRef<str>>(regex: S) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", regex.as_ref()))
}

/// Identifier of a class inside a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(pub(crate) usize);

/// Identifier of a method inside a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodId(pub(crate) usize);

/// Operand of an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// A register, such as `v0`.
    Register(u16),
    /// A numeric literal.
    Literal(i64),
    /// A string from the string pool.
    String(String),
    /// A method reference.
    Method(String),
    /// A field reference.
    Field(String),
    /// A type reference.
    Type(String),
}

/// A bytecode instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    opcode: String,
    #[serde(default)]
    operands: Vec<Operand>,
}

impl Instruction {
    /// Creates a new instruction.
    pub fn new<S: Into<String>>(opcode: S, operands: Vec<Operand>) -> Self {
        Self {
            opcode: opcode.into(),
            operands,
        }
    }

    /// Creates a `const-string` instruction loading the given literal.
    pub fn const_string<S: Into<String>>(register: u16, value: S) -> Self {
        Self::new(
            "const-string",
            vec![Operand::Register(register), Operand::String(value.into())],
        )
    }

    /// Gets the opcode name.
    pub fn opcode(&self) -> &str {
        &self.opcode
    }

    /// Gets the operands.
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// Gets the literal loaded by a `const-string` or `const-string/jumbo` instruction.
    pub fn const_string_value(&self) -> Option<&str> {
        if !self.opcode.starts_with("const-string") {
            return None;
        }
        self.operands.iter().find_map(|operand| match operand {
            Operand::String(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

/// A class field, with its constant initial value if it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    #[serde(default)]
    value: Option<i64>,
}

impl Field {
    /// Creates a new field.
    pub fn new<S: Into<String>>(name: S, value: Option<i64>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Gets the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the constant value of the field.
    pub fn value(&self) -> Option<i64> {
        self.value
    }
}

/// A class of the program.
#[derive(Debug, Clone)]
pub struct Class {
    pub(crate) id: ClassId,
    pub(crate) name: String,
    pub(crate) external: bool,
    pub(crate) methods: Vec<MethodId>,
    pub(crate) fields: Vec<Field>,
}

impl Class {
    /// Gets the identifier of the class.
    pub fn id(&self) -> ClassId {
        self.id
    }

    /// Gets the fully qualified name, such as `Lcom/example/MainActivity;`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the class is declared in a library the analyzer cannot inspect.
    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Gets the methods declared by the class.
    pub fn methods(&self) -> &[MethodId] {
        &self.methods
    }
}

/// A method of the program.
#[derive(Debug, Clone)]
pub struct Method {
    pub(crate) id: MethodId,
    pub(crate) class: ClassId,
    pub(crate) class_name: String,
    pub(crate) name: String,
    pub(crate) descriptor: String,
    pub(crate) instructions: Option<Vec<Instruction>>,
    pub(crate) source: Option<String>,
}

impl Method {
    /// Gets the identifier of the method.
    pub fn id(&self) -> MethodId {
        self.id
    }

    /// Gets the identifier of the owning class.
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Gets the name of the owning class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Gets the method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the method signature, such as `(Ljava/lang/String;)V`.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Whether the body of the method can not be inspected.
    pub fn is_external(&self) -> bool {
        self.instructions.is_none()
    }

    /// Renders the method as `Class.method`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.class_name, self.name)
    }
}

/// A literal from the string pool.
#[derive(Debug, Clone)]
pub struct StringConstant {
    pub(crate) value: String,
    pub(crate) sites: Vec<MethodId>,
}

impl StringConstant {
    /// Gets the literal value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A call site or reference site: the class and method containing it and the instruction
/// offset inside the method.
#[derive(Debug, Clone, Copy)]
pub struct CallSite<'a> {
    /// Class containing the site.
    pub class: &'a Class,
    /// Method containing the site.
    pub method: &'a Method,
    /// Offset of the instruction inside the method.
    pub offset: usize,
}

/// Read-only queries over a program representation.
///
/// All patterns are regular expressions over fully-qualified, slash-delimited names, built with
/// [`pattern`].
pub trait ProgramModel {
    /// Finds every method whose class name and method name match the given patterns.
    fn find_methods(&self, class_pattern: &Regex, name_pattern: &Regex) -> Vec<&Method>;

    /// Finds every string of the string pool matching the pattern.
    fn find_strings(&self, pattern: &Regex) -> Vec<&StringConstant>;

    /// Finds every class whose name matches the pattern, optionally only the ones defined in the
    /// application itself.
    fn find_classes(&self, pattern: &Regex, internal_only: bool) -> Vec<&Class>;

    /// Gets the call sites invoking the given method.
    fn callers_of(&self, method: &Method) -> Vec<CallSite<'_>>;

    /// Gets the sites loading the given string.
    fn referrers_of(&self, string: &StringConstant) -> Vec<CallSite<'_>>;

    /// Gets the instructions of the method, failing with [`Kind::NotDecompiled`] if the method
    /// is external.
    fn instructions_of<'a>(&'a self, method: &'a Method) -> Result<&'a [Instruction], Kind>;

    /// Gets the fields of the class.
    fn fields_of<'a>(&'a self, class: &'a Class) -> &'a [Field];

    /// Gets the reconstructed source of the method, if the decompiler could produce it.
    fn source_text_of<'a>(&'a self, method: &'a Method) -> Option<&'a str>;
}
