// ============================================================================
// BigInt Tester
// Walks through comparison, arithmetic, increment and input handling
// ============================================================================

use decimal_bigint::prelude::*;
use decimal_bigint::utils::{init_logging, LoggingConfig};
use std::cmp::Ordering;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LoggingConfig::from_env())?;

    let values = [-100i64, 150, 100, -150].map(BigInt::from);

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            println!("({},{})", i, j);

            let relation = match a.compare(b) {
                Ordering::Less => "less than",
                Ordering::Equal => "equal to",
                Ordering::Greater => "greater than",
            };
            println!("{} is {} {}", a, relation, b);
            println!("{} + {} = {}", a, b, a + b);
            println!("{} - {} = {}\n", a, b, a - b);
        }
    }

    let mut sum = BigInt::from(10);
    sum += BigInt::from(5);
    println!("{}", sum); // 15

    let mut difference = BigInt::from(10);
    difference -= BigInt::from(5);
    println!("{}\n", difference); // 5

    let e = BigInt::from_string(
        "-1231023850234534630463482374082730840700823482156342346575544530001230980121241952509120396794579347945898457",
    )?;
    let f = BigInt::from_string("23452345234523452672457022402343457349829348887857684586")?;

    println!("e + f = {}", &e + &f);
    println!("e - f = {}", &e - &f);
    println!("-e + f = {}", -&e + &f);
    println!("-e - f = {}\n", -&e - &f);

    let mut result = BigInt::from_string("100000000000000000000000000000000000000000000000000")?
        - BigInt::from_string("99999999999999999999999999999999999999999999999999")?;
    println!("{}", result); // 1
    println!("{}", result.post_increment()); // 1
    println!("{}\n", result.increment()); // 3

    print!("Enter a value to test BigInt input: ");
    io::stdout().flush()?;

    let mut reader = TokenReader::new(io::stdin().lock());
    loop {
        match reader.read_big_int(&mut result) {
            Ok(()) => break,
            Err(err) if err.is_retryable() => {
                reader.discard_line();
                print!("Invalid input. Try again: ");
                io::stdout().flush()?;
            },
            Err(err) => return Err(err.into()),
        }
    }
    println!("Result: {}\n", result);

    match BigInt::from_string("abc") {
        Ok(value) => println!("Unexpectedly parsed {}", value),
        Err(err) => println!("Purposefully rejected input: {}", err),
    }

    Ok(())
}
