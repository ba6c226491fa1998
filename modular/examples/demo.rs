use modular::{Modular, ModularError};

fn main() -> Result<(), ModularError> {
    let a = Modular::<5>::new(45);

    println!("45 mod 5 == {a}");

    let b = Modular::<7>::new(-8);

    println!("-8 mod 7 == {b}");

    let c = Modular::<7>::new(5);

    println!();
    println!("(6 + 5) mod 7 == {}", b + c);
    println!("(6 - 5) mod 7 == {}", b - c);
    println!("(6 * 5) mod 7 == {}", b * c);
    println!("(6 / 5) mod 7 == {}", (b / c)?);
    println!("(6 % 5) mod 7 == {}", (b % c)?);
    println!();

    println!();
    println!("(6 == 5) mod 7 == {}", b == c);
    println!("(6 != 5) mod 7 == {}", b != c);
    println!("(6 > 5) mod 7 == {}", b > c);
    println!("(6 < 5) mod 7 == {}", b < c);
    println!("(6 >= 5) mod 7 == {}", b >= c);
    println!("(6 <= 5) mod 7 == {}", b <= c);
    println!();

    match b / Modular::<7>::ZERO {
        Ok(q) => println!("(6 / 0) mod 7 == {q}"),
        Err(err) => println!("(6 / 0) mod 7 fails: {err}"),
    }

    Ok(())
}
