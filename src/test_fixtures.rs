//! Shared builders for unit tests.

use crate::model::{
    CallableSignature, CompilationUnit, CompositeTypeDef, FieldDef, SourceLocation, TypeRef,
};

fn words(name: &str, count: usize) -> CompositeTypeDef {
    let fields = (0..count)
        .map(|i| FieldDef::new(format!("f{i}"), TypeRef::word("int")))
        .collect();
    CompositeTypeDef::new(name, fields)
}

fn at(line: u32, column: u32) -> SourceLocation {
    SourceLocation::new("testdata/inner.go", line, column)
}

/// The `testdata` unit: two wide types, four offending callables and a few
/// clean ones, declared out of source order.
pub fn golden_unit() -> CompilationUnit {
    CompilationUnit::new("testdata", "testdata")
        .with_type(words("Foo", 3))
        .with_type(words("other", 4))
        .with_type(words("small", 2))
        .with_callable(
            CallableSignature::function("OnStruct2", at(35, 16))
                .with_receiver(TypeRef::named("other")),
        )
        .with_callable(
            CallableSignature::function("CallsFoo", at(24, 6))
                .with_param(Some("f"), TypeRef::named("Foo")),
        )
        .with_callable(
            CallableSignature::function("OnPointer", at(20, 16))
                .with_receiver(TypeRef::pointer(TypeRef::named("Foo"))),
        )
        .with_callable(
            CallableSignature::function("OnStruct", at(32, 16))
                .with_receiver(TypeRef::named("other")),
        )
        .with_callable(
            CallableSignature::function("OnOtherToo", at(28, 14))
                .with_receiver(TypeRef::named("Foo"))
                .with_param(Some("o"), TypeRef::named("other")),
        )
        .with_callable(
            CallableSignature::function("CallsSmall", at(40, 6))
                .with_param(Some("s"), TypeRef::named("small"))
                .with_result(TypeRef::pointer(TypeRef::named("Foo"))),
        )
}

/// Compact rendering of [`golden_unit`] under the default sizing and a
/// threshold of 16 bytes.
pub const GOLDEN_COMPACT: &str = "\
testdata/inner.go:24:6: parameter 'f' at index 0 should be made into a pointer (func CallsFoo(f Foo))
testdata/inner.go:28:14: receiver, and parameter 'o' at index 0 should be made into pointers (func (Foo).OnOtherToo(o other))
testdata/inner.go:32:16: receiver should be made into a pointer (func (other).OnStruct())
testdata/inner.go:35:16: receiver should be made into a pointer (func (other).OnStruct2())
";

/// Block rendering of [`golden_unit`], same settings as [`GOLDEN_COMPACT`].
pub const GOLDEN_TEXT: &str = "\
# parameter 'f' at index 0 should be made into a pointer
testdata/inner.go:24:6: func CallsFoo(f Foo)

# receiver, and parameter 'o' at index 0 should be made into pointers
testdata/inner.go:28:14: func (Foo).OnOtherToo(o other)

# receiver should be made into a pointer
testdata/inner.go:32:16: func (other).OnStruct()

# receiver should be made into a pointer
testdata/inner.go:35:16: func (other).OnStruct2()

";
