use plinth_derive::forced_inline;

#[forced_inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

struct Counter(u32);

impl Counter {
    #[forced_inline]
    fn bump(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

fn main() {
    assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < f32::EPSILON);
    let mut counter = Counter(0);
    assert_eq!(counter.bump(), 1);
}
