//! Email Sanitizing Filter
//!
//! This example demonstrates the email filter over a batch of inputs.
//!
//! Key concepts:
//! - Character classification into token symbols
//! - Table-driven rejection (dead state => empty output)
//! - Documented quirks of the grammar
//!
//! Run with: cargo run --example sanitize

use mailsift::email::EmailFilter;

fn main() {
    println!("=== Email Sanitizing Filter ===\n");

    let filter = EmailFilter::new();

    let inputs = [
        "ab@cd.com",
        "user1@example.org",
        "ab@.com",
        "a.b@c",
        "user name@x.com",
        ".leading@dot",
        "ab@cd..com",
        "",
        "ab@@cd.com",
    ];

    for input in inputs {
        let output = filter.filter(input);
        let verdict = if output.is_empty() {
            "rejected"
        } else {
            "passed"
        };
        println!("{input:>20?} -> {output:?} ({verdict})");
    }

    println!();
    println!("Rejection is signalled purely by the empty string: any");
    println!("character outside [A-Za-z0-9@.] or any step landing on the");
    println!("dead state empties the output.");
    println!();
    println!("Note the last input: a second '@' has no table entry, the");
    println!("cursor stays put, and the string passes through verbatim.");

    println!("\n=== Example Complete ===");
}
