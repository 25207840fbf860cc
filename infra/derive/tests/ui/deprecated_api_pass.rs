#![deny(deprecated)]

use plinth_derive::deprecated_api;

#[deprecated_api(since = "0.2.0", note = "use `total` instead")]
fn sum(values: &[u32]) -> u32 {
    values.iter().sum()
}

fn total(values: &[u32]) -> u32 {
    values.iter().sum()
}

struct Meter;

impl Meter {
    #[deprecated_api]
    fn read(&self) -> u32 {
        42
    }
}

#[allow(deprecated)]
fn main() {
    let values = [1, 2, 3];
    assert_eq!(sum(&values), total(&values));
    assert_eq!(Meter.read(), 42);
}
