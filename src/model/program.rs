//! In-memory program model.

use super::{
    CallSite, Class, ClassId, Field, Instruction, Method, MethodId, ProgramModel,
    StringConstant,
};
use crate::error::Kind;
use regex::Regex;
use std::collections::HashMap;

/// Program model held in memory, built once per artifact.
#[derive(Debug, Default)]
pub struct Program {
    classes: Vec<Class>,
    methods: Vec<Method>,
    strings: Vec<StringConstant>,
    callers: HashMap<MethodId, Vec<(MethodId, usize)>>,
    class_index: HashMap<String, ClassId>,
    method_index: HashMap<(ClassId, String, String), MethodId>,
}

impl Program {
    /// Starts building a new program.
    pub fn builder() -> ProgramBuilder {
        ProgramBuilder::default()
    }

    /// Gets a class by identifier.
    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.0]
    }

    /// Gets a method by identifier.
    pub fn method(&self, id: MethodId) -> &Method {
        &self.methods[id.0]
    }

    /// Looks a class up by its exact name.
    pub fn class_by_name(&self, name: &str) -> Option<&Class> {
        self.class_index.get(name).map(|id| self.class(*id))
    }

    /// Looks a method up by class name, method name and descriptor.
    pub fn method_by_signature(
        &self,
        class: &str,
        name: &str,
        descriptor: &str,
    ) -> Option<&Method> {
        let class = *self.class_index.get(class)?;
        self.method_index
            .get(&(class, name.to_owned(), descriptor.to_owned()))
            .map(|id| self.method(*id))
    }

    /// Iterates over all classes.
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.iter()
    }

    /// Gets the number of methods, external ones included.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    fn site(&self, method: MethodId, offset: usize) -> CallSite<'_> {
        let method = self.method(method);
        CallSite {
            class: self.class(method.class),
            method,
            offset,
        }
    }
}

impl ProgramModel for Program {
    fn find_methods(&self, class_pattern: &Regex, name_pattern: &Regex) -> Vec<&Method> {
        self.methods
            .iter()
            .filter(|m| class_pattern.is_match(&m.class_name) && name_pattern.is_match(&m.name))
            .collect()
    }

    fn find_strings(&self, pattern: &Regex) -> Vec<&StringConstant> {
        self.strings
            .iter()
            .filter(|s| pattern.is_match(&s.value))
            .collect()
    }

    fn find_classes(&self, pattern: &Regex, internal_only: bool) -> Vec<&Class> {
        self.classes
            .iter()
            .filter(|c| !(internal_only && c.external) && pattern.is_match(&c.name))
            .collect()
    }

    fn callers_of(&self, method: &Method) -> Vec<CallSite<'_>> {
        self.callers
            .get(&method.id)
            .map(|edges| {
                edges
                    .iter()
                    .map(|&(caller, offset)| self.site(caller, offset))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn referrers_of(&self, string: &StringConstant) -> Vec<CallSite<'_>> {
        string.sites.iter().map(|&id| self.site(id, 0)).collect()
    }

    fn instructions_of<'a>(&'a self, method: &'a Method) -> Result<&'a [Instruction], Kind> {
        method
            .instructions
            .as_deref()
            .ok_or_else(|| Kind::NotDecompiled {
                method: method.qualified_name(),
            })
    }

    fn fields_of<'a>(&'a self, class: &'a Class) -> &'a [Field] {
        &class.fields
    }

    fn source_text_of<'a>(&'a self, method: &'a Method) -> Option<&'a str> {
        if method.is_external() {
            None
        } else {
            method.source.as_deref()
        }
    }
}

/// Incremental builder of a [`Program`].
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    /// Adds a class, or returns the existing one with the same name.
    pub fn class<S: Into<String>>(&mut self, name: S, external: bool) -> ClassId {
        let name = name.into();
        if let Some(id) = self.program.class_index.get(&name) {
            return *id;
        }

        let id = ClassId(self.program.classes.len());
        let _ = self.program.class_index.insert(name.clone(), id);
        self.program.classes.push(Class {
            id,
            name,
            external,
            methods: Vec::new(),
            fields: Vec::new(),
        });
        id
    }

    /// Adds a method whose body can not be inspected.
    pub fn external_method(&mut self, class: ClassId, name: &str, descriptor: &str) -> MethodId {
        self.add_method(class, name, descriptor, None, None)
    }

    /// Adds a method with its instructions and, optionally, its reconstructed source.
    ///
    /// Methods of external classes stay external regardless of the body given.
    pub fn method(
        &mut self,
        class: ClassId,
        name: &str,
        descriptor: &str,
        instructions: Vec<Instruction>,
        source: Option<&str>,
    ) -> MethodId {
        if self.program.classes[class.0].external {
            return self.external_method(class, name, descriptor);
        }
        self.add_method(
            class,
            name,
            descriptor,
            Some(instructions),
            source.map(str::to_owned),
        )
    }

    fn add_method(
        &mut self,
        class: ClassId,
        name: &str,
        descriptor: &str,
        instructions: Option<Vec<Instruction>>,
        source: Option<String>,
    ) -> MethodId {
        let key = (class, name.to_owned(), descriptor.to_owned());
        if let Some(id) = self.program.method_index.get(&key) {
            return *id;
        }

        let id = MethodId(self.program.methods.len());
        let owner = &mut self.program.classes[class.0];
        owner.methods.push(id);
        self.program.methods.push(Method {
            id,
            class,
            class_name: owner.name.clone(),
            name: name.to_owned(),
            descriptor: descriptor.to_owned(),
            instructions,
            source,
        });
        let _ = self.program.method_index.insert(key, id);
        id
    }

    /// Adds a field to the class.
    pub fn field<S: Into<String>>(&mut self, class: ClassId, name: S, value: Option<i64>) {
        self.program.classes[class.0]
            .fields
            .push(Field::new(name, value));
    }

    /// Records that `caller` invokes `callee` at the given instruction offset.
    pub fn call(&mut self, caller: MethodId, callee: MethodId, offset: usize) {
        self.program
            .callers
            .entry(callee)
            .or_insert_with(Vec::new)
            .push((caller, offset));
    }

    /// Adds a literal to the string pool, referenced from the given methods.
    pub fn string<S: Into<String>>(&mut self, value: S, sites: &[MethodId]) {
        self.program.strings.push(StringConstant {
            value: value.into(),
            sites: sites.to_vec(),
        });
    }

    /// Looks up a method added earlier.
    pub fn lookup(&self, class: &str, name: &str, descriptor: &str) -> Option<MethodId> {
        let class = *self.program.class_index.get(class)?;
        self.program
            .method_index
            .get(&(class, name.to_owned(), descriptor.to_owned()))
            .copied()
    }

    /// Finishes the program.
    pub fn build(self) -> Program {
        self.program
    }
}

#[cfg(test)]
mod tests {
    use super::Program;
    use crate::{
        error::Kind,
        model::{pattern, Instruction, ProgramModel},
    };

    fn sample() -> Program {
        let mut builder = Program::builder();
        let db = builder.class("Landroid/database/sqlite/SQLiteDatabase;", true);
        let exec = builder.external_method(db, "execSQL", "(Ljava/lang/String;)V");
        let raw = builder.external_method(db, "rawQuery", "(Ljava/lang/String;)V");
        let activity = builder.class("Lcom/example/MainActivity;", false);
        let on_create = builder.method(
            activity,
            "onCreate",
            "(Landroid/os/Bundle;)V",
            vec![Instruction::const_string(0, "DROP TABLE users")],
            Some("db.execSQL(\"DROP TABLE users\");"),
        );
        builder.call(on_create, exec, 4);
        builder.call(on_create, raw, 10);
        builder.field(activity, "TAG", None);
        builder.string("DROP TABLE users", &[on_create]);
        builder.build()
    }

    #[test]
    fn it_finds_methods_from_the_start_of_the_name() {
        let program = sample();
        let methods = program.find_methods(
            &pattern("Landroid/database/sqlite/.*").unwrap(),
            &pattern("execSQL|rawQuery").unwrap(),
        );
        assert_eq!(methods.len(), 2);

        let none = program.find_methods(
            &pattern("sqlite").unwrap(),
            &pattern("execSQL").unwrap(),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn it_resolves_callers() {
        let program = sample();
        let exec = program
            .method_by_signature(
                "Landroid/database/sqlite/SQLiteDatabase;",
                "execSQL",
                "(Ljava/lang/String;)V",
            )
            .unwrap();
        let callers = program.callers_of(exec);

        assert_eq!(callers.len(), 1);
        assert_eq!(callers[0].class.name(), "Lcom/example/MainActivity;");
        assert_eq!(callers[0].method.name(), "onCreate");
        assert_eq!(callers[0].offset, 4);
    }

    #[test]
    fn it_refuses_external_bodies() {
        let program = sample();
        let exec = program.find_methods(
            &pattern("Landroid/").unwrap(),
            &pattern("execSQL").unwrap(),
        )[0];

        match program.instructions_of(exec) {
            Err(Kind::NotDecompiled { method }) => {
                assert_eq!(method, "Landroid/database/sqlite/SQLiteDatabase;.execSQL")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(program.source_text_of(exec).is_none());
    }

    #[test]
    fn it_filters_internal_classes() {
        let program = sample();
        let all = program.find_classes(&pattern("L").unwrap(), false);
        let internal = program.find_classes(&pattern("L").unwrap(), true);

        assert_eq!(all.len(), 2);
        assert_eq!(internal.len(), 1);
        assert_eq!(internal[0].name(), "Lcom/example/MainActivity;");
    }

    #[test]
    fn it_finds_strings_and_referrers() {
        let program = sample();
        let strings = program.find_strings(&pattern("DROP").unwrap());

        assert_eq!(strings.len(), 1);
        let sites = program.referrers_of(strings[0]);
        assert_eq!(sites[0].method.qualified_name(), "Lcom/example/MainActivity;.onCreate");
    }
}
