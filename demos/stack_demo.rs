// Copyright (c) 2024, Bracket Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Walks through the stack with several element types and runs the bracket
//! validator over a list of expressions.
//!
//! Usage: `cargo run --example stack_demo [config.toml]`

use anyhow::Context;
use bracket_stack::{brackets, DemoConfig, Stack};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
#[allow(dead_code)]
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

fn integers(count: usize) -> anyhow::Result<()> {
    println!("1. Stack of integers (Stack<i64>):");
    let mut stack: Stack<i64> = Stack::new();
    println!("   empty? {}", stack.is_empty());

    for i in 1..=count as i64 {
        stack.push(i * 10);
        println!("   push({}) -> {}", i * 10, stack);
    }

    println!("   len: {}", stack.len());
    println!("   peek: {:?}", stack.peek());
    println!("   empty? {}", stack.is_empty());

    while !stack.is_empty() {
        let item = stack.pop()?;
        println!("   pop() -> {item}, stack: {stack}");
    }
    println!("   empty? {}", stack.is_empty());
    Ok(())
}

fn words(words: &[String]) -> anyhow::Result<()> {
    println!("\n2. Stack of strings (Stack<String>):");
    let mut stack: Stack<String> = words.iter().cloned().collect();
    println!("   initial: {stack}");

    let mut reversed = Vec::with_capacity(stack.len());
    while !stack.is_empty() {
        reversed.push(stack.pop()?);
    }
    println!("   reversed: {reversed:?}");
    Ok(())
}

fn people() -> anyhow::Result<()> {
    println!("\n3. Stack of user-defined values:");
    let mut stack = Stack::new();
    stack.push(Person::new("Alice", 25));
    stack.push(Person::new("Bob", 30));
    stack.push(Person::new("Charlie", 35));

    println!("   people: {stack}");
    println!("   popped: {:?}", stack.pop()?);
    println!("   remaining: {stack}");
    Ok(())
}

fn empty_pop() {
    println!("\n4. Error handling:");
    let mut stack: Stack<f64> = Stack::new();
    match stack.pop() {
        Ok(item) => println!("   unexpected item: {item}"),
        Err(err) => println!("   pop() on empty stack: {err}"),
    }
}

fn len_and_clear() {
    println!("\n5. len and clear:");
    let mut stack: Stack<i32> = (0..5).collect();
    println!("   stack: {stack}");
    println!("   len: {}", stack.len());

    stack.clear();
    println!("   after clear(): {stack}");
    println!("   empty? {}", stack.is_empty());
}

fn bracket_checks(expressions: &[String]) {
    println!("\n6. Bracket validation:");
    for expr in expressions {
        match brackets::validate(expr) {
            Ok(()) => println!("   '{expr}' -> valid"),
            Err(reason) => println!("   '{expr}' -> invalid ({reason})"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            DemoConfig::load(&path).with_context(|| format!("loading config from {path}"))?
        }
        None => DemoConfig::default(),
    };
    tracing::info!(
        int_count = config.int_count,
        expressions = config.expressions.len(),
        "starting stack demo"
    );

    integers(config.int_count)?;
    words(&config.words)?;
    people()?;
    empty_pop();
    len_and_clear();
    bracket_checks(&config.expressions);

    Ok(())
}
