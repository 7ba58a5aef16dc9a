use std::panic::AssertUnwindSafe;

use taskchain_core::engine::handle;
use taskchain_core::{with_err_fn, with_fn, ComposeError, Composer, Shape};

fn add_one(n: i32) -> i32 {
    n + 1
}

fn double(n: i32) -> i32 {
    n * 2
}

fn to_string(n: i32) -> String {
    n.to_string()
}

fn err_fn(_n: i32) -> Result<i32, std::io::Error> {
    Err(std::io::Error::other("an error occurred"))
}

/// Casos del builder `int -> string`: `None` = handle ausente.
fn cases() -> Vec<(&'static str, Option<Composer<i32, String>>, bool)> {
    vec![("nil composer", None, false),
         ("empty composer", Some(Composer::new()), false),
         ("1 func, correct types", Some(Composer::with_options([with_fn("toString", to_string)])), true),
         ("1 func, incorrect types", Some(Composer::with_options([with_fn("addOne", add_one)])), false),
         ("multiple funcs, correct types",
          Some(Composer::with_options([with_fn("addOne", add_one), with_fn("toString", to_string)])),
          true),
         ("multiple funcs, incorrect types",
          Some(Composer::with_options([with_fn("addOne", add_one), with_fn("double", double)])),
          false),
         ("multiple funcs, types not aligned",
          Some(Composer::with_options([with_fn("toString", to_string), with_fn("double", double)])),
          false),
         ("fallible then total",
          Some(Composer::with_options([with_err_fn("errFunc", err_fn), with_fn("toString", to_string)])),
          true),]
}

#[test]
fn compose_matrix() {
    for (name, composer, should_compose) in cases() {
        let result = handle::compose(composer.as_ref());
        assert_eq!(result.is_ok(), should_compose, "case '{name}': {result:?}");
    }
}

#[test]
fn compose_total_matrix() {
    for (name, composer, should_compose) in cases() {
        let result = handle::compose_total(composer.as_ref(), taskchain_core::ErrorPolicy::Discard);
        assert_eq!(result.is_ok(), should_compose, "case '{name}'");
    }
}

#[test]
fn must_compose_matrix() {
    for (name, composer, should_compose) in cases() {
        let panicked = std::panic::catch_unwind(AssertUnwindSafe(|| {
                           handle::must_compose(composer.as_ref());
                       })).is_err();
        assert_eq!(panicked, !should_compose, "case '{name}'");
    }
}

#[test]
fn error_kinds_are_specific() {
    assert_eq!(handle::compose::<i32, String>(None).unwrap_err(), ComposeError::InvalidArgument);
    assert_eq!(Composer::<i32, String>::new().compose().unwrap_err(), ComposeError::EmptyChain);

    // un único toString con tipos declarados (int, int): falla el chequeo final
    let mut c = Composer::<i32, i32>::new();
    c.add_fn("toString", to_string);
    let err = c.compose().unwrap_err();
    assert!(err.is_type_mismatch(), "got {err:?}");

    // tipos adyacentes incompatibles
    let mut c = Composer::<i32, i32>::new();
    c.add_fn("toString", to_string).add_fn("double", double);
    assert!(c.compose().unwrap_err().is_type_mismatch());

    // input global incompatible
    let mut c = Composer::<String, String>::new();
    c.add_fn("toString", to_string);
    assert!(c.compose().unwrap_err().is_empty_or_invalid());
}

#[test]
fn total_chain_is_function_composition() {
    let mut c = Composer::<i32, i32>::new();
    c.add_fn("addOne", add_one).add_fn("double", double).add_fn("addOne", add_one);
    let f = c.compose().expect("compatible steps compose");
    assert_eq!(f.shape(), Shape::Total);
    for n in -20..20 {
        assert_eq!(f.try_call(n).unwrap(), add_one(double(add_one(n))));
    }
}

#[test]
fn add_one_then_double_and_reversed() {
    let mut c = Composer::<i32, i32>::new();
    c.add_fn("addOne", add_one).add_fn("double", double);
    let (out, err) = c.must_compose().call(8);
    assert_eq!(out, 18);
    assert!(err.is_none());

    let mut c = Composer::<i32, i32>::new();
    c.add_fn("double", double).add_fn("addOne", add_one);
    let (out, err) = c.must_compose().call(8);
    assert_eq!(out, 17);
    assert!(err.is_none());
}

#[test]
fn composing_twice_gives_equivalent_functions() {
    let mut c = Composer::<String, String>::new();
    c.add_err_fn("parse", |s: String| s.parse::<i32>())
     .add_fn("double", double)
     .add_fn("toString", to_string);
    let f1 = c.compose().unwrap();
    let f2 = c.compose().unwrap();
    for input in ["2", "-7", "x", ""] {
        let (a, ea) = f1.call(input.to_string());
        let (b, eb) = f2.call(input.to_string());
        assert_eq!(a, b);
        assert_eq!(ea.is_some(), eb.is_some());
    }
    // misma entrada, misma salida
    assert_eq!(f1.try_call("21".into()).unwrap(), f1.try_call("21".into()).unwrap());
}
