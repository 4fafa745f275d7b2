/// Addition collaborator for the driver loop
///
/// Pure and total: `add(a, b) == a + b` for any pair of digits.
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}
