use plinth_derive::align_to;

#[align_to(3)]
struct Misaligned {
    value: u8,
}

fn main() {}
