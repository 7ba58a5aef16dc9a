//! El pipeline compuesto no tiene estado mutable compartido: puede
//! invocarse desde varios hilos a la vez.

use rayon::prelude::*;
use taskchain_core::{Composed, Composer, ErrorPolicy};

fn pipeline() -> Composer<String, String> {
    let mut c = Composer::new();
    c.add_err_fn("Atoi", |s: String| s.parse::<i64>())
     .add_fn("double", |n: i64| n * 2)
     .add_fn("Itoa", |n: i64| n.to_string());
    c
}

fn assert_send_sync<T: Send + Sync>(_: &T) {}

#[test]
fn composed_function_is_shareable_across_threads() {
    let f: Composed<String, String> = pipeline().compose().unwrap();
    assert_send_sync(&f);

    let outputs: Vec<String> = (0..1_000i64).into_par_iter()
                                            .map(|n| f.try_call(n.to_string()).unwrap())
                                            .collect();
    for (n, out) in outputs.iter().enumerate() {
        assert_eq!(out, &(n as i64 * 2).to_string());
    }
}

#[test]
fn total_function_is_shareable_across_threads() {
    let f = pipeline().compose_total(ErrorPolicy::Discard).unwrap();
    let errors = (0..500).into_par_iter()
                         .map(|n| if n % 5 == 0 { "bad".to_string() } else { n.to_string() })
                         .map(|s| f(s))
                         .filter(|out| out.is_empty())
                         .count();
    assert_eq!(errors, 100);
}

#[test]
fn composer_is_send() {
    let c = pipeline();
    let handle = std::thread::spawn(move || c.compose().map(|f| f.call("5".into()).0));
    assert_eq!(handle.join().unwrap().unwrap(), "10");
}
