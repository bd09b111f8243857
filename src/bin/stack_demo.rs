// Walkthrough of the stack laws: LIFO order, counting, empty pops, value vs
// reference semantics and the conditional extension.
//
// Usage: stack_demo [config.toml]

use std::env;
use std::fmt::Display;
use std::path::Path;
use std::process;

use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use generic_stack::{
    all_items_match, find_index, find_max, first_item, Container, CopyStack, DemoConfig,
    EquatableContainer, LinkedStack, Shared, Stack,
};

fn section(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}

fn check(label: &str, ok: bool) {
    let mark = if ok { "ok".green() } else { "FAILED".red() };
    println!("  [{}] {}", mark, label);
}

// Works for any conforming container, whatever its representation.
fn describe<C>(name: &str, container: &C)
where
    C: Container,
    C::Item: Display,
{
    let rendered: Vec<String> = (0..container.count())
        .filter_map(|index| container.at(index).ok())
        .map(|item| item.to_string())
        .collect();
    println!(
        "  {:<12} count={} first={} items=[{}]",
        name,
        container.count(),
        first_item(container)
            .map(|item| item.to_string())
            .unwrap_or_else(|| "-".to_string()),
        rendered.join(", ")
    );
}

fn load_config() -> DemoConfig {
    let Some(path) = env::args().nth(1) else {
        return DemoConfig::default();
    };

    match DemoConfig::from_file(Path::new(&path)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            process::exit(1);
        }
    }
}

// =============================================================================
// Milestone 1: LIFO order and counting
// =============================================================================

fn lifo_walkthrough(config: &DemoConfig) {
    section("LIFO order");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let pushed: Vec<i32> = (0..config.sample_size)
        .map(|_| rng.gen_range(-100..=100))
        .collect();

    let mut stack: Stack<i32> = Stack::with_capacity(pushed.len());
    for value in &pushed {
        stack.push(*value);
    }
    println!("  pushed {}", stack);
    check(
        &format!("count after {} pushes is {}", pushed.len(), stack.count()),
        stack.count() == pushed.len(),
    );

    let popped: Vec<i32> = std::iter::from_fn(|| stack.pop()).collect();
    let mut expected = pushed.clone();
    expected.reverse();
    println!("  popped {:?}", popped);
    check("popped in reverse push order", popped == expected);

    section("Empty stack");
    check("pop on empty stack is None", stack.pop().is_none());
    check("top on empty stack is None", stack.top().is_none());
    check("count stays 0", stack.count() == 0);

    let mut names: Stack<&str> = config.names.iter().map(String::as_str).collect();
    if let Some(top) = names.top() {
        println!("  top of the name stack is {}", top.yellow());
    }
    while let Some(name) = names.pop() {
        println!("  popped {}", name);
    }
}

// =============================================================================
// Milestone 2: value vs reference semantics
// =============================================================================

fn semantics_walkthrough() {
    section("Value semantics");
    let mut a: Stack<i32> = Stack::new();
    a.push(1);
    let mut b = a.clone();
    b.push(2);
    println!("  a = {}, b = {}", a, b);
    check("mutating the clone leaves the original alone", a.count() != b.count());

    section("Reference semantics");
    let locker = Shared::new(String::from("laptop"));
    let mut first = Stack::new();
    let mut second = Stack::new();
    first.push(locker.clone());
    second.push(locker.clone());
    if let Some(item) = first.top() {
        item.update(|value| value.push_str(" (checked out)"));
    }
    println!("  second stack sees {}", second);
    check(
        "mutation through one stack is visible through the other",
        second.top().map(Shared::get) == Some(locker.get()),
    );
}

// =============================================================================
// Milestone 3: conditional extension
// =============================================================================

fn extension_walkthrough() {
    section("Conditional extension");

    let stack: Stack<i32> = vec![5, 1, 7, 3, 7].into();
    let copy = stack.copy_stack();
    println!("  copy_stack   {}", copy);
    println!("  sorted_copy  {}", stack.sorted_copy());
    println!("  dedup_copy   {}", stack.dedup_copy());
    check("copy has the same elements in the same order", copy == stack);

    let handles: Stack<Shared<i32>> = vec![Shared::new(1), Shared::new(2)].into();
    let shared_clone = handles.clone();
    let independent = handles.copy_stack();
    if let Some(top) = handles.top() {
        top.set(20);
    }
    println!(
        "  after top.set(20): clone = {}, copy_stack = {}",
        shared_clone, independent
    );
    check(
        "copy_stack duplicates handles instead of sharing them",
        independent.top().map(Shared::get) == Some(2),
    );
    info!("extension walkthrough finished");
}

// =============================================================================
// Milestone 4: the contract across representations
// =============================================================================

fn contract_walkthrough(config: &DemoConfig) {
    section("Capability Contract");

    let array_backed: Stack<String> = config.names.iter().cloned().collect();
    let linked: LinkedStack<String> = config.names.iter().cloned().collect();
    let plain: Vec<String> = config.names.clone();

    describe("Stack", &array_backed);
    describe("LinkedStack", &linked);
    describe("Vec", &plain);
    check(
        "all three hold the same items",
        all_items_match(&array_backed, &linked) && all_items_match(&linked, &plain),
    );

    match array_backed.at(array_backed.count()) {
        Ok(item) => println!("  unexpected item {}", item),
        Err(err) => println!("  at(count) -> {}", err.to_string().red()),
    }

    if let Some(last) = config.names.last() {
        check(
            &format!("index_of({}) is {}", last, config.names.len() - 1),
            linked.index_of(last) == Some(config.names.len() - 1),
        );
    }

    section("Constrained helpers");
    let strings = ["cat", "dog", "llama", "parakeet", "terrapin"];
    println!("  find_index(llama) = {:?}", find_index(&"llama", &strings));
    println!("  find_max([1, 5, 3, 2, 4]) = {:?}", find_max(&[1, 5, 3, 2, 4]));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = load_config();
    if !config.color {
        colored::control::set_override(false);
    }

    println!("{}", "Generic Stack walkthrough".bold());
    lifo_walkthrough(&config);
    semantics_walkthrough();
    extension_walkthrough();
    contract_walkthrough(&config);
    println!("\n{}", "All sections complete".green().bold());
}
