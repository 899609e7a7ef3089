use sexpr_reader::{parse, parse_all};

fn main() -> anyhow::Result<()> {
    let source = "(+ 32 7)(+ 3 5)";

    println!("Source: {}\n", source);

    // Only the first expression is read; `(+ 3 5)` is silently left behind
    let first = parse(source)?;
    println!("parse     => {}", first);
    println!("{:#?}\n", first);

    let all = parse_all(source)?;
    println!("parse_all => {} expressions", all.len());
    for value in &all {
        println!("  {}", value);
    }

    match parse("(+ 1 2") {
        Ok(value) => println!("\nunexpected success: {}", value),
        Err(e) => println!("\n(+ 1 2   => error: {}", e),
    }

    Ok(())
}
