use digitmix::{driver, DigitGenerator};

fn run_lines(iterations: u32) -> Vec<String> {
    let mut gen = DigitGenerator::seeded();
    let mut out = Vec::new();
    driver::run(&mut gen, iterations, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    text.lines().map(str::to_string).collect()
}

#[test]
fn ten_rounds_print_ten_lines() {
    assert_eq!(run_lines(10).len(), 10);
}

#[test]
fn hundred_rounds_print_hundred_lines() {
    assert_eq!(run_lines(100).len(), 100);
}

#[test]
fn zero_rounds_print_nothing() {
    assert!(run_lines(0).is_empty());
}

#[test]
fn lines_are_digit_sums() {
    for line in run_lines(100) {
        let (left, sum) = line.split_once(" = ").unwrap();
        let (a, b) = left.split_once(" + ").unwrap();
        let a: i32 = a.parse().unwrap();
        let b: i32 = b.parse().unwrap();
        let sum: i32 = sum.parse().unwrap();
        assert!((0..=9).contains(&a));
        assert!((0..=9).contains(&b));
        assert_eq!(sum, a + b);
    }
}
