use tinyc::symbols::{ParseResult, SymbolTable};
use tinyc::types::ExpressionType;
use tinyc::value::{Constant, TypedValue};

#[test]
fn typed_value_starts_undefined() {
    let value = TypedValue::new();
    assert_eq!(value.expression_type(), ExpressionType::Undefined);
    assert!(!value.is_defined());
    assert_eq!(value.as_int(), None);
}

#[test]
fn set_from_copies_value_and_type() {
    let mut value = TypedValue::new();

    value.set_from(&Constant::Double(2.5));
    assert_eq!(value.expression_type(), ExpressionType::Double);
    assert_eq!(value.as_double(), Some(2.5));
    assert_eq!(value.as_int(), None);

    value.set_from(&Constant::Str("hi".to_string()));
    assert_eq!(value.expression_type(), ExpressionType::Str);
    assert_eq!(value.as_str(), Some("hi"));
    assert_eq!(value.as_double(), None);

    value.set_from(&Constant::Bool(true));
    assert_eq!(value.as_bool(), Some(true));

    value.set_from(&Constant::Int(-4));
    assert_eq!(value, TypedValue::Int(-4));
}

#[test]
fn constant_types() {
    assert_eq!(Constant::Int(1).expression_type(), ExpressionType::Int);
    assert_eq!(Constant::Bool(false).expression_type(), ExpressionType::Bool);
}

#[test]
fn display() {
    assert_eq!(TypedValue::Double(2.0).to_string(), "2.0");
    assert_eq!(TypedValue::Double(0.25).to_string(), "0.25");
    assert_eq!(TypedValue::Str("a b".to_string()).to_string(), "a b");
    assert_eq!(TypedValue::Undefined.to_string(), "undefined");
}

#[test]
fn symbol_table_is_insert_once() {
    let mut table = SymbolTable::new();
    let mut record = ParseResult::named("x");
    record.ty = ExpressionType::Int;

    assert!(table.insert("x", &record));

    let mut other = ParseResult::named("x");
    other.ty = ExpressionType::Str;
    assert!(!table.insert("x", &other));
    assert_eq!(table.get("x"), Some(&record));
    assert_eq!(table.len(), 1);
}

#[test]
fn stored_record_is_a_copy() {
    let mut table = SymbolTable::new();
    let mut record = ParseResult::named("x");
    record.ty = ExpressionType::Int;
    table.insert("x", &record);

    record.ty = ExpressionType::Bool;
    assert_eq!(table.get("x").unwrap().ty, ExpressionType::Int);
}

#[test]
fn symbol_table_iterates_by_name() {
    let mut table = SymbolTable::new();
    for name in ["zeta", "alpha", "Mid"] {
        table.insert(name, &ParseResult::named(name));
    }
    let names: Vec<_> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Mid", "alpha", "zeta"]);
    assert!(!table.contains("ALPHA"));
    assert!(table.get("missing").is_none());
}
